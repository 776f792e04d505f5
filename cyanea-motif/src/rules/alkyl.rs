//! Heteroatom-capped alkyl chains and alpha,omega-difunctional chains, keyed by chain
//! length. A chain counts only when it is unbranched and saturated between its ends.

use super::common::*;
use super::{first_of, when, RuleTable};
use crate::graph::FunctionGroup as G;
use crate::motif::Motif as M;

pub(super) fn extend(t: &mut RuleTable) {
    match t.path_len() {
        3 => three(t),
        4 => four(t),
        5 => five(t),
        6 => six(t),
        7 => seven(t),
        8 => eight(t),
        9 => nine(t),
        10 => ten(t),
        11 => eleven(t),
        12 => twelve(t),
        13 => thirteen(t),
        _ => {}
    }
}

fn three(t: &mut RuleTable) {
    t.add(
        "C-C-P",
        clauses![when(|p| methyl(p, 0) && straight(p, 1, 2), &[]).then(clauses![
            first_of(vec![
                when(|p| p.group(2) == G::PhosphonatePhosphorus, &[M::Ethylphosphonate]),
                when(|p| p.group(2) == G::OtherPhosphorus, &[M::Ethylphosphine]),
            ]),
        ])],
    );

    t.add("C-C-Si", clauses![when(|p| methyl(p, 0) && straight(p, 1, 2), &[M::Ethylsilyl])]);

    t.add(
        "C-C-F",
        clauses![first_of(vec![
            when(|p| p.env(0).fluorine == 3 && fluorinated(p, 1, 2), &[M::Perfluoroethyl]),
            when(|p| methyl(p, 0) && straight(p, 1, 2), &[M::EthylFluoride]),
        ])],
    );

    t.add("Br-C-C", clauses![when(|p| methyl(p, 2) && straight(p, 1, 2), &[M::EthylBromide])]);

    t.add("C-C-I", clauses![when(|p| methyl(p, 0) && straight(p, 1, 2), &[M::EthylIodide])]);

    t.add(
        "N-C-N",
        clauses![when(|p| straight(p, 1, 2), &[]).then(clauses![
            first_of(vec![
                when(|p| ends_pair(p, primary_amine, substituted_amine), &[M::AlkylMethanediamine]),
                when(|p| both_ends(p, substituted_amine), &[M::DialkylMethanediamine]),
                when(|p| ends_pair(p, primary_amine, amide_nitrogen), &[M::AminomethylAmide]),
                when(|p| both_ends(p, amide_nitrogen), &[M::MethanediylBisamide]),
            ]),
        ])],
    );

    t.add(
        "N-C-O",
        clauses![when(|p| straight(p, 1, 2), &[]).then(clauses![
            first_of(vec![
                when(|p| primary_amine(p, 0) && hydroxyl(p, 2), &[M::AminoMethanol]),
                when(|p| primary_amine(p, 0) && ether_oxygen(p, 2), &[M::AlkoxymethylAmine]),
                when(|p| primary_amine(p, 0) && ester_oxygen(p, 2), &[M::AminomethylEster]),
                when(|p| substituted_amine(p, 0) && hydroxyl(p, 2), &[M::AlkylaminoMethanol]),
                when(|p| substituted_amine(p, 0) && ester_oxygen(p, 2), &[M::AlkylaminomethylEster]),
                when(|p| quaternary_nitrogen(p, 0) && hydroxyl(p, 2), &[M::HydroxymethylAmmonium]),
                when(|p| quaternary_nitrogen(p, 0) && ester_oxygen(p, 2), &[M::AcyloxymethylAmmonium]),
                when(|p| amide_nitrogen(p, 0) && hydroxyl(p, 2), &[M::HydroxymethylAmide]),
                when(|p| amide_nitrogen(p, 0) && ether_oxygen(p, 2), &[M::AlkoxymethylAmide]),
                when(|p| amide_nitrogen(p, 0) && ester_oxygen(p, 2), &[M::AcyloxymethylAmide]),
            ]),
        ])],
    );

    t.add(
        "N-C-S",
        clauses![when(|p| straight(p, 1, 2), &[]).then(clauses![
            first_of(vec![
                when(|p| primary_amine(p, 0) && thiol(p, 2), &[M::AminoMethanethiol]),
                when(|p| primary_amine(p, 0) && thioether(p, 2), &[M::AlkylthiomethylAmine]),
                when(|p| primary_amine(p, 0) && sulfonyl(p, 2), &[M::AminoMethanesulfonyl]),
                when(|p| amide_nitrogen(p, 0) && thiol(p, 2), &[M::MercaptomethylAmide]),
                when(|p| amide_nitrogen(p, 0) && thioester_sulfur(p, 2), &[M::AcylthiomethylAmide]),
                when(|p| amide_nitrogen(p, 0) && thioether(p, 2), &[M::AlkylthiomethylAmide]),
                when(|p| amide_nitrogen(p, 0) && sulfonyl(p, 2), &[M::AcylaminoMethanesulfonyl]),
            ]),
        ])],
    );

    t.add(
        "O-C-S",
        clauses![when(|p| straight(p, 1, 2), &[]).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 0) && thiol(p, 2), &[M::MercaptoMethanol]),
                when(|p| hydroxyl(p, 0) && thioether(p, 2), &[M::AlkylthioMethanol]),
                when(|p| hydroxyl(p, 0) && sulfonyl(p, 2), &[M::HydroxyMethanesulfonyl]),
                when(|p| ether_oxygen(p, 0) && thioether(p, 2), &[M::AlkoxymethylSulfide]),
                when(|p| ester_oxygen(p, 0) && thioether(p, 2), &[M::AcyloxymethylSulfide]),
                when(|p| ester_oxygen(p, 0) && sulfonyl(p, 2), &[M::AcyloxyMethanesulfonyl]),
            ]),
        ])],
    );

    t.add(
        "S-C-S",
        clauses![when(|p| straight(p, 1, 2), &[]).then(clauses![
            first_of(vec![
                when(|p| both_ends(p, thiol), &[M::AlphaOmegaMethanedithiol]),
                when(|p| ends_pair(p, thiol, thioether), &[M::AlkylthioMethanethiol]),
                when(|p| both_ends(p, thioether), &[M::BisalkylthioMethane]),
            ]),
        ])],
    );

    t.add(
        "Cl-C-O",
        clauses![when(|p| straight(p, 1, 2), &[]).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 2), &[M::ChloroMethanol]),
                when(|p| ether_oxygen(p, 2), &[M::ChloromethylEther]),
                when(|p| ester_oxygen(p, 2), &[M::ChloromethylEster]),
            ]),
        ])],
    );

    t.add(
        "Cl-C-N",
        clauses![when(|p| straight(p, 1, 2), &[]).then(clauses![
            first_of(vec![
                when(|p| amine(p, 2), &[M::ChloromethylAmine]),
                when(|p| amide_nitrogen(p, 2), &[M::ChloromethylAmide]),
            ]),
        ])],
    );

    t.add(
        "Br-C-O",
        clauses![when(|p| straight(p, 1, 2), &[]).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 2), &[M::BromoMethanol]),
                when(|p| ether_oxygen(p, 2), &[M::BromomethylEther]),
                when(|p| ester_oxygen(p, 2), &[M::BromomethylEster]),
            ]),
        ])],
    );

    t.add(
        "Br-C-N",
        clauses![when(|p| straight(p, 1, 2), &[]).then(clauses![
            first_of(vec![
                when(|p| amine(p, 2), &[M::BromomethylAmine]),
                when(|p| amide_nitrogen(p, 2), &[M::BromomethylAmide]),
            ]),
        ])],
    );

    t.add(
        "F-C-O",
        clauses![when(|p| straight(p, 1, 2), &[]).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 2), &[M::FluoroMethanol]),
                when(|p| ester_oxygen(p, 2), &[M::FluoromethylEster]),
            ]),
        ])],
    );

    t.add(
        "F-C-N",
        clauses![when(|p| straight(p, 1, 2), &[]).then(clauses![
            when(|p| amine(p, 2), &[M::FluoromethylAmine]),
        ])],
    );

    t.add(
        "I-C-O",
        clauses![when(|p| straight(p, 1, 2), &[]).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 2), &[M::IodoMethanol]),
                when(|p| ester_oxygen(p, 2), &[M::IodomethylEster]),
            ]),
        ])],
    );

    t.add(
        "I-C-N",
        clauses![when(|p| straight(p, 1, 2), &[]).then(clauses![
            when(|p| amine(p, 2), &[M::IodomethylAmine]),
        ])],
    );

    t.add(
        "Cl-C-S",
        clauses![when(|p| straight(p, 1, 2), &[]).then(clauses![
            first_of(vec![
                when(|p| thiol(p, 2), &[M::ChloroMethanethiol]),
                when(|p| thioether(p, 2), &[M::ChloromethylSulfide]),
            ]),
        ])],
    );

    t.add(
        "Br-C-S",
        clauses![when(|p| straight(p, 1, 2), &[]).then(clauses![
            first_of(vec![
                when(|p| thiol(p, 2), &[M::BromoMethanethiol]),
                when(|p| thioether(p, 2), &[M::BromomethylSulfide]),
            ]),
        ])],
    );

    t.add(
        "O-C-P",
        clauses![when(|p| straight(p, 1, 2), &[]).then(clauses![
            first_of(vec![
                when(|p| p.group(2) == G::PhosphonatePhosphorus && hydroxyl(p, 0), &[M::HydroxymethylPhosphonate]),
                when(
                    |p| p.group(2) == G::PhosphonatePhosphorus && ester_oxygen(p, 0),
                    &[M::AcyloxymethylPhosphonate],
                ),
            ]),
        ])],
    );

    t.add(
        "N-C-P",
        clauses![when(|p| straight(p, 1, 2), &[]).then(clauses![
            when(|p| p.group(2) == G::PhosphonatePhosphorus && primary_amine(p, 0), &[M::AminomethylPhosphonate]),
        ])],
    );

    t.extend("F-C-F", clauses![when(|p| straight(p, 1, 2), &[M::Difluoromethane])]);

    t.add("Cl-C-F", clauses![when(|p| straight(p, 1, 2), &[M::Chlorofluoromethane])]);

    t.add("Br-C-F", clauses![when(|p| straight(p, 1, 2), &[M::Bromofluoromethane])]);

    t.add("F-C-I", clauses![when(|p| straight(p, 1, 2), &[M::Fluoroiodomethane])]);

    t.extend("Cl-C-Cl", clauses![when(|p| straight(p, 1, 2), &[M::Dichloromethane])]);

    t.add("Br-C-Cl", clauses![when(|p| straight(p, 1, 2), &[M::Bromochloromethane])]);

    t.add("Cl-C-I", clauses![when(|p| straight(p, 1, 2), &[M::Chloroiodomethane])]);

    t.add("Br-C-Br", clauses![when(|p| straight(p, 1, 2), &[M::Dibromomethane])]);

    t.add("Br-C-I", clauses![when(|p| straight(p, 1, 2), &[M::Bromoiodomethane])]);

    t.add("I-C-I", clauses![when(|p| straight(p, 1, 2), &[M::Diiodomethane])]);
}

fn four(t: &mut RuleTable) {
    t.add(
        "C-C-C-O",
        clauses![first_of(vec![
            when(|p| methyl(p, 0) && straight(p, 1, 3), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 3), &[M::NPropanol]),
                    when(|p| ether_oxygen(p, 3), &[M::NPropoxy]),
                    when(|p| ester_oxygen(p, 3), &[M::NPropylEster]),
                ]),
            ]),
            when(|p| methyl(p, 0) && iso_fork(p, 1) && straight(p, 2, 3), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 3), &[M::Isobutanol]),
                    when(|p| ether_oxygen(p, 3), &[M::Isobutoxy]),
                    when(|p| ester_oxygen(p, 3), &[M::IsobutylEster]),
                ]),
            ]),
            when(|p| aromatic(p, 0) && straight(p, 1, 3), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 3), &[M::ArylPropanol]),
                    when(|p| ether_oxygen(p, 3), &[M::ArylPropylEther]),
                    when(|p| ester_oxygen(p, 3), &[M::ArylPropylEster]),
                ]),
            ]),
        ])],
    );

    t.extend(
        "C-C-C-N",
        clauses![first_of(vec![
            when(|p| methyl(p, 0) && straight(p, 1, 3), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 3), &[M::NPropylamine]),
                    when(|p| substituted_amine(p, 3), &[M::NPropylamino]),
                    when(|p| amide_nitrogen(p, 3), &[M::NPropylAmide]),
                    when(|p| p.group(3) == G::QuaternaryNitrogen, &[M::NPropylammonium]),
                ]),
            ]),
            when(|p| methyl(p, 0) && iso_fork(p, 1) && straight(p, 2, 3), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 3), &[M::Isobutylamine]),
                    when(|p| amide_nitrogen(p, 3), &[M::NIsobutylAmide]),
                ]),
            ]),
            when(|p| aromatic(p, 0) && straight(p, 1, 3), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 3), &[M::ArylPropylamine]),
                    when(|p| amide_nitrogen(p, 3), &[M::ArylPropylAmide]),
                ]),
            ]),
        ])],
    );

    t.add(
        "C-C-C-S",
        clauses![when(|p| methyl(p, 0) && straight(p, 1, 3), &[]).then(clauses![
            first_of(vec![
                when(|p| thiol(p, 3), &[M::NPropanethiol]),
                when(|p| thioether(p, 3), &[M::NPropylthio]),
                when(|p| sulfonyl(p, 3), &[M::NPropylsulfonyl]),
            ]),
        ])],
    );

    t.add(
        "C-C-C-P",
        clauses![when(|p| methyl(p, 0) && straight(p, 1, 3), &[]).then(clauses![
            first_of(vec![
                when(|p| p.group(3) == G::PhosphonatePhosphorus, &[M::NPropylphosphonate]),
                when(|p| p.group(3) == G::OtherPhosphorus, &[M::NPropylphosphine]),
            ]),
        ])],
    );

    t.add("C-C-C-Si", clauses![when(|p| methyl(p, 0) && straight(p, 1, 3), &[M::NPropylsilyl])]);

    t.add(
        "C-C-C-F",
        clauses![first_of(vec![
            when(|p| p.env(0).fluorine == 3 && fluorinated(p, 1, 3), &[M::Perfluoropropyl]),
            when(|p| methyl(p, 0) && straight(p, 1, 3), &[M::NPropylFluoride]),
        ])],
    );

    t.add("C-C-C-Cl", clauses![when(|p| methyl(p, 0) && straight(p, 1, 3), &[M::NPropylChloride])]);

    t.add("Br-C-C-C", clauses![when(|p| methyl(p, 3) && straight(p, 1, 3), &[M::NPropylBromide])]);

    t.add("C-C-C-I", clauses![when(|p| methyl(p, 0) && straight(p, 1, 3), &[M::NPropylIodide])]);

    t.add(
        "O-C-C-O",
        clauses![when(|p| straight(p, 1, 3), &[]).then(clauses![
            first_of(vec![
                when(|p| ends_pair(p, hydroxyl, ether_oxygen), &[M::AlkoxyEthanol]),
                when(|p| ends_pair(p, hydroxyl, ester_oxygen), &[M::HydroxyethylEster]),
                when(|p| both_ends(p, ether_oxygen), &[M::DialkoxyEthane]),
                when(|p| ends_pair(p, ether_oxygen, ester_oxygen), &[M::AlkoxyethylEster]),
                when(|p| both_ends(p, ester_oxygen), &[M::EthanediylDiester]),
            ]),
        ])],
    );

    t.add(
        "N-C-C-N",
        clauses![when(|p| straight(p, 1, 3), &[]).then(clauses![
            first_of(vec![
                when(|p| ends_pair(p, primary_amine, substituted_amine), &[M::AlkylEthanediamine]),
                when(|p| both_ends(p, substituted_amine), &[M::DialkylEthanediamine]),
                when(|p| ends_pair(p, primary_amine, amide_nitrogen), &[M::AminoethylAmide]),
                when(|p| both_ends(p, amide_nitrogen), &[M::EthanediylBisamide]),
            ]),
        ])],
    );

    t.extend(
        "N-C-C-O",
        clauses![when(|p| straight(p, 1, 3), &[]).then(clauses![
            first_of(vec![
                when(|p| primary_amine(p, 0) && ether_oxygen(p, 3), &[M::AlkoxyethylAmine]),
                when(|p| primary_amine(p, 0) && ester_oxygen(p, 3), &[M::AminoethylEster]),
                when(|p| substituted_amine(p, 0) && hydroxyl(p, 3), &[M::AlkylaminoEthanol]),
                when(|p| substituted_amine(p, 0) && ester_oxygen(p, 3), &[M::AlkylaminoethylEster]),
                when(|p| amide_nitrogen(p, 0) && ether_oxygen(p, 3), &[M::AlkoxyethylAmide]),
                when(|p| amide_nitrogen(p, 0) && ester_oxygen(p, 3), &[M::AcyloxyethylAmide]),
            ]),
        ])],
    );

    t.add(
        "N-C-C-S",
        clauses![when(|p| straight(p, 1, 3), &[]).then(clauses![
            first_of(vec![
                when(|p| primary_amine(p, 0) && thiol(p, 3), &[M::AminoEthanethiol]),
                when(|p| primary_amine(p, 0) && thioether(p, 3), &[M::AlkylthioethylAmine]),
                when(|p| primary_amine(p, 0) && sulfonyl(p, 3), &[M::AminoEthanesulfonyl]),
                when(|p| amide_nitrogen(p, 0) && thiol(p, 3), &[M::MercaptoethylAmide]),
                when(|p| amide_nitrogen(p, 0) && thioester_sulfur(p, 3), &[M::AcylthioethylAmide]),
                when(|p| amide_nitrogen(p, 0) && thioether(p, 3), &[M::AlkylthioethylAmide]),
                when(|p| amide_nitrogen(p, 0) && sulfonyl(p, 3), &[M::AcylaminoEthanesulfonyl]),
            ]),
        ])],
    );

    t.add(
        "O-C-C-S",
        clauses![when(|p| straight(p, 1, 3), &[]).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 0) && thiol(p, 3), &[M::MercaptoEthanol]),
                when(|p| hydroxyl(p, 0) && thioether(p, 3), &[M::AlkylthioEthanol]),
                when(|p| hydroxyl(p, 0) && sulfonyl(p, 3), &[M::HydroxyEthanesulfonyl]),
                when(|p| ether_oxygen(p, 0) && thioether(p, 3), &[M::AlkoxyethylSulfide]),
                when(|p| ester_oxygen(p, 0) && thioether(p, 3), &[M::AcyloxyethylSulfide]),
                when(|p| ester_oxygen(p, 0) && sulfonyl(p, 3), &[M::AcyloxyEthanesulfonyl]),
            ]),
        ])],
    );

    t.add(
        "S-C-C-S",
        clauses![when(|p| straight(p, 1, 3), &[]).then(clauses![
            first_of(vec![
                when(|p| both_ends(p, thiol), &[M::AlphaOmegaEthanedithiol]),
                when(|p| ends_pair(p, thiol, thioether), &[M::AlkylthioEthanethiol]),
                when(|p| both_ends(p, thioether), &[M::BisalkylthioEthane]),
            ]),
        ])],
    );

    t.add(
        "Cl-C-C-O",
        clauses![when(|p| straight(p, 1, 3), &[]).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 3), &[M::ChloroEthanol]),
                when(|p| ether_oxygen(p, 3), &[M::ChloroethylEther]),
                when(|p| ester_oxygen(p, 3), &[M::ChloroethylEster]),
            ]),
        ])],
    );

    t.add(
        "Cl-C-C-N",
        clauses![when(|p| straight(p, 1, 3), &[]).then(clauses![
            first_of(vec![
                when(|p| amine(p, 3), &[M::ChloroethylAmine]),
                when(|p| amide_nitrogen(p, 3), &[M::ChloroethylAmide]),
            ]),
        ])],
    );

    t.add(
        "Br-C-C-O",
        clauses![when(|p| straight(p, 1, 3), &[]).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 3), &[M::BromoEthanol]),
                when(|p| ether_oxygen(p, 3), &[M::BromoethylEther]),
                when(|p| ester_oxygen(p, 3), &[M::BromoethylEster]),
            ]),
        ])],
    );

    t.add(
        "Br-C-C-N",
        clauses![when(|p| straight(p, 1, 3), &[]).then(clauses![
            first_of(vec![
                when(|p| amine(p, 3), &[M::BromoethylAmine]),
                when(|p| amide_nitrogen(p, 3), &[M::BromoethylAmide]),
            ]),
        ])],
    );

    t.add(
        "F-C-C-O",
        clauses![when(|p| straight(p, 1, 3), &[]).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 3), &[M::FluoroEthanol]),
                when(|p| ester_oxygen(p, 3), &[M::FluoroethylEster]),
            ]),
        ])],
    );

    t.add(
        "F-C-C-N",
        clauses![when(|p| straight(p, 1, 3), &[]).then(clauses![
            when(|p| amine(p, 3), &[M::FluoroethylAmine]),
        ])],
    );

    t.add(
        "I-C-C-O",
        clauses![when(|p| straight(p, 1, 3), &[]).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 3), &[M::IodoEthanol]),
                when(|p| ester_oxygen(p, 3), &[M::IodoethylEster]),
            ]),
        ])],
    );

    t.add(
        "I-C-C-N",
        clauses![when(|p| straight(p, 1, 3), &[]).then(clauses![
            when(|p| amine(p, 3), &[M::IodoethylAmine]),
        ])],
    );

    t.add(
        "Cl-C-C-S",
        clauses![when(|p| straight(p, 1, 3), &[]).then(clauses![
            first_of(vec![
                when(|p| thiol(p, 3), &[M::ChloroEthanethiol]),
                when(|p| thioether(p, 3), &[M::ChloroethylSulfide]),
            ]),
        ])],
    );

    t.add(
        "Br-C-C-S",
        clauses![when(|p| straight(p, 1, 3), &[]).then(clauses![
            first_of(vec![
                when(|p| thiol(p, 3), &[M::BromoEthanethiol]),
                when(|p| thioether(p, 3), &[M::BromoethylSulfide]),
            ]),
        ])],
    );

    t.add(
        "O-C-C-P",
        clauses![when(|p| straight(p, 1, 3), &[]).then(clauses![
            first_of(vec![
                when(|p| p.group(3) == G::PhosphonatePhosphorus && hydroxyl(p, 0), &[M::HydroxyethylPhosphonate]),
                when(|p| p.group(3) == G::PhosphonatePhosphorus && ester_oxygen(p, 0), &[M::AcyloxyethylPhosphonate]),
            ]),
        ])],
    );

    t.add(
        "N-C-C-P",
        clauses![when(|p| straight(p, 1, 3), &[]).then(clauses![
            when(|p| p.group(3) == G::PhosphonatePhosphorus && primary_amine(p, 0), &[M::AminoethylPhosphonate]),
        ])],
    );

    t.add("F-C-C-F", clauses![when(|p| straight(p, 1, 3), &[M::OneTwoDifluoroethane])]);

    t.add("Cl-C-C-F", clauses![when(|p| straight(p, 1, 3), &[M::OneChloroTwoFluoroethane])]);

    t.add("Br-C-C-F", clauses![when(|p| straight(p, 1, 3), &[M::OneBromoTwoFluoroethane])]);

    t.add("F-C-C-I", clauses![when(|p| straight(p, 1, 3), &[M::OneFluoroTwoIodoethane])]);

    t.add("Cl-C-C-Cl", clauses![when(|p| straight(p, 1, 3), &[M::OneTwoDichloroethane])]);

    t.add("Br-C-C-Cl", clauses![when(|p| straight(p, 1, 3), &[M::OneBromoTwoChloroethane])]);

    t.add("Cl-C-C-I", clauses![when(|p| straight(p, 1, 3), &[M::OneChloroTwoIodoethane])]);

    t.add("Br-C-C-Br", clauses![when(|p| straight(p, 1, 3), &[M::OneTwoDibromoethane])]);

    t.add("Br-C-C-I", clauses![when(|p| straight(p, 1, 3), &[M::OneBromoTwoIodoethane])]);

    t.add("I-C-C-I", clauses![when(|p| straight(p, 1, 3), &[M::OneTwoDiiodoethane])]);
}

fn five(t: &mut RuleTable) {
    t.extend(
        "C-C-C-C-O",
        clauses![first_of(vec![
            when(|p| methyl(p, 0) && straight(p, 1, 4), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 4), &[M::NButanol]),
                    when(|p| ether_oxygen(p, 4), &[M::NButoxy]),
                    when(|p| ester_oxygen(p, 4), &[M::NButylEster]),
                ]),
            ]),
            when(|p| methyl(p, 0) && iso_fork(p, 1) && straight(p, 2, 4), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 4), &[M::Isopentanol]),
                    when(|p| ether_oxygen(p, 4), &[M::Isopentyloxy]),
                    when(|p| ester_oxygen(p, 4), &[M::IsopentylEster]),
                ]),
            ]),
            when(|p| aromatic(p, 0) && straight(p, 1, 4), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 4), &[M::ArylButanol]),
                    when(|p| ether_oxygen(p, 4), &[M::ArylButylEther]),
                    when(|p| ester_oxygen(p, 4), &[M::ArylButylEster]),
                ]),
            ]),
        ])],
    );

    t.extend(
        "C-C-C-C-N",
        clauses![first_of(vec![
            when(|p| methyl(p, 0) && straight(p, 1, 4), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 4), &[M::NButylamine]),
                    when(|p| substituted_amine(p, 4), &[M::NButylamino]),
                    when(|p| amide_nitrogen(p, 4), &[M::NButylAmide]),
                    when(|p| p.group(4) == G::QuaternaryNitrogen, &[M::NButylammonium]),
                ]),
            ]),
            when(|p| methyl(p, 0) && iso_fork(p, 1) && straight(p, 2, 4), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 4), &[M::Isopentylamine]),
                    when(|p| amide_nitrogen(p, 4), &[M::NIsopentylAmide]),
                ]),
            ]),
            when(|p| aromatic(p, 0) && straight(p, 1, 4), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 4), &[M::ArylButylamine]),
                    when(|p| amide_nitrogen(p, 4), &[M::ArylButylAmide]),
                ]),
            ]),
        ])],
    );

    t.add(
        "C-C-C-C-S",
        clauses![when(|p| methyl(p, 0) && straight(p, 1, 4), &[]).then(clauses![
            first_of(vec![
                when(|p| thiol(p, 4), &[M::NButanethiol]),
                when(|p| thioether(p, 4), &[M::NButylthio]),
                when(|p| sulfonyl(p, 4), &[M::NButylsulfonyl]),
            ]),
        ])],
    );

    t.add(
        "C-C-C-C-P",
        clauses![when(|p| methyl(p, 0) && straight(p, 1, 4), &[]).then(clauses![
            first_of(vec![
                when(|p| p.group(4) == G::PhosphonatePhosphorus, &[M::NButylphosphonate]),
                when(|p| p.group(4) == G::OtherPhosphorus, &[M::NButylphosphine]),
            ]),
        ])],
    );

    t.add("C-C-C-C-Si", clauses![when(|p| methyl(p, 0) && straight(p, 1, 4), &[M::NButylsilyl])]);

    t.add(
        "C-C-C-C-F",
        clauses![first_of(vec![
            when(|p| p.env(0).fluorine == 3 && fluorinated(p, 1, 4), &[M::Perfluorobutyl]),
            when(|p| methyl(p, 0) && straight(p, 1, 4), &[M::NButylFluoride]),
        ])],
    );

    t.add("C-C-C-C-Cl", clauses![when(|p| methyl(p, 0) && straight(p, 1, 4), &[M::NButylChloride])]);

    t.add("Br-C-C-C-C", clauses![when(|p| methyl(p, 4) && straight(p, 1, 4), &[M::NButylBromide])]);

    t.add("C-C-C-C-I", clauses![when(|p| methyl(p, 0) && straight(p, 1, 4), &[M::NButylIodide])]);

    t.add(
        "O-C-C-C-O",
        clauses![when(|p| straight(p, 1, 4), &[]).then(clauses![
            first_of(vec![
                when(|p| both_ends(p, hydroxyl), &[M::AlphaOmegaPropanediol]),
                when(|p| ends_pair(p, hydroxyl, ether_oxygen), &[M::AlkoxyPropanol]),
                when(|p| ends_pair(p, hydroxyl, ester_oxygen), &[M::HydroxypropylEster]),
                when(|p| both_ends(p, ether_oxygen), &[M::DialkoxyPropane]),
                when(|p| ends_pair(p, ether_oxygen, ester_oxygen), &[M::AlkoxypropylEster]),
                when(|p| both_ends(p, ester_oxygen), &[M::PropanediylDiester]),
            ]),
        ])],
    );

    t.add(
        "N-C-C-C-N",
        clauses![when(|p| straight(p, 1, 4), &[]).then(clauses![
            first_of(vec![
                when(|p| both_ends(p, primary_amine), &[M::AlphaOmegaPropanediamine]),
                when(|p| ends_pair(p, primary_amine, substituted_amine), &[M::AlkylPropanediamine]),
                when(|p| both_ends(p, substituted_amine), &[M::DialkylPropanediamine]),
                when(|p| ends_pair(p, primary_amine, amide_nitrogen), &[M::AminopropylAmide]),
                when(|p| both_ends(p, amide_nitrogen), &[M::PropanediylBisamide]),
            ]),
        ])],
    );

    t.add(
        "N-C-C-C-O",
        clauses![when(|p| straight(p, 1, 4), &[]).then(clauses![
            first_of(vec![
                when(|p| primary_amine(p, 0) && hydroxyl(p, 4), &[M::AminoPropanol]),
                when(|p| primary_amine(p, 0) && ether_oxygen(p, 4), &[M::AlkoxypropylAmine]),
                when(|p| primary_amine(p, 0) && ester_oxygen(p, 4), &[M::AminopropylEster]),
                when(|p| substituted_amine(p, 0) && hydroxyl(p, 4), &[M::AlkylaminoPropanol]),
                when(|p| substituted_amine(p, 0) && ester_oxygen(p, 4), &[M::AlkylaminopropylEster]),
                when(|p| quaternary_nitrogen(p, 0) && hydroxyl(p, 4), &[M::HydroxypropylAmmonium]),
                when(|p| quaternary_nitrogen(p, 0) && ester_oxygen(p, 4), &[M::AcyloxypropylAmmonium]),
                when(|p| amide_nitrogen(p, 0) && hydroxyl(p, 4), &[M::HydroxypropylAmide]),
                when(|p| amide_nitrogen(p, 0) && ether_oxygen(p, 4), &[M::AlkoxypropylAmide]),
                when(|p| amide_nitrogen(p, 0) && ester_oxygen(p, 4), &[M::AcyloxypropylAmide]),
            ]),
        ])],
    );

    t.add(
        "N-C-C-C-S",
        clauses![when(|p| straight(p, 1, 4), &[]).then(clauses![
            first_of(vec![
                when(|p| primary_amine(p, 0) && thiol(p, 4), &[M::AminoPropanethiol]),
                when(|p| primary_amine(p, 0) && thioether(p, 4), &[M::AlkylthiopropylAmine]),
                when(|p| primary_amine(p, 0) && sulfonyl(p, 4), &[M::AminoPropanesulfonyl]),
                when(|p| amide_nitrogen(p, 0) && thiol(p, 4), &[M::MercaptopropylAmide]),
                when(|p| amide_nitrogen(p, 0) && thioester_sulfur(p, 4), &[M::AcylthiopropylAmide]),
                when(|p| amide_nitrogen(p, 0) && thioether(p, 4), &[M::AlkylthiopropylAmide]),
                when(|p| amide_nitrogen(p, 0) && sulfonyl(p, 4), &[M::AcylaminoPropanesulfonyl]),
            ]),
        ])],
    );

    t.add(
        "O-C-C-C-S",
        clauses![when(|p| straight(p, 1, 4), &[]).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 0) && thiol(p, 4), &[M::MercaptoPropanol]),
                when(|p| hydroxyl(p, 0) && thioether(p, 4), &[M::AlkylthioPropanol]),
                when(|p| hydroxyl(p, 0) && sulfonyl(p, 4), &[M::HydroxyPropanesulfonyl]),
                when(|p| ether_oxygen(p, 0) && thioether(p, 4), &[M::AlkoxypropylSulfide]),
                when(|p| ester_oxygen(p, 0) && thioether(p, 4), &[M::AcyloxypropylSulfide]),
                when(|p| ester_oxygen(p, 0) && sulfonyl(p, 4), &[M::AcyloxyPropanesulfonyl]),
            ]),
        ])],
    );

    t.add(
        "S-C-C-C-S",
        clauses![when(|p| straight(p, 1, 4), &[]).then(clauses![
            first_of(vec![
                when(|p| both_ends(p, thiol), &[M::AlphaOmegaPropanedithiol]),
                when(|p| ends_pair(p, thiol, thioether), &[M::AlkylthioPropanethiol]),
                when(|p| both_ends(p, thioether), &[M::BisalkylthioPropane]),
            ]),
        ])],
    );

    t.add(
        "Cl-C-C-C-O",
        clauses![when(|p| straight(p, 1, 4), &[]).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 4), &[M::ChloroPropanol]),
                when(|p| ether_oxygen(p, 4), &[M::ChloropropylEther]),
                when(|p| ester_oxygen(p, 4), &[M::ChloropropylEster]),
            ]),
        ])],
    );

    t.add(
        "Cl-C-C-C-N",
        clauses![when(|p| straight(p, 1, 4), &[]).then(clauses![
            first_of(vec![
                when(|p| amine(p, 4), &[M::ChloropropylAmine]),
                when(|p| amide_nitrogen(p, 4), &[M::ChloropropylAmide]),
            ]),
        ])],
    );

    t.add(
        "Br-C-C-C-O",
        clauses![when(|p| straight(p, 1, 4), &[]).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 4), &[M::BromoPropanol]),
                when(|p| ether_oxygen(p, 4), &[M::BromopropylEther]),
                when(|p| ester_oxygen(p, 4), &[M::BromopropylEster]),
            ]),
        ])],
    );

    t.add(
        "Br-C-C-C-N",
        clauses![when(|p| straight(p, 1, 4), &[]).then(clauses![
            first_of(vec![
                when(|p| amine(p, 4), &[M::BromopropylAmine]),
                when(|p| amide_nitrogen(p, 4), &[M::BromopropylAmide]),
            ]),
        ])],
    );

    t.add(
        "F-C-C-C-O",
        clauses![when(|p| straight(p, 1, 4), &[]).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 4), &[M::FluoroPropanol]),
                when(|p| ester_oxygen(p, 4), &[M::FluoropropylEster]),
            ]),
        ])],
    );

    t.add(
        "F-C-C-C-N",
        clauses![when(|p| straight(p, 1, 4), &[]).then(clauses![
            when(|p| amine(p, 4), &[M::FluoropropylAmine]),
        ])],
    );

    t.add(
        "I-C-C-C-O",
        clauses![when(|p| straight(p, 1, 4), &[]).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 4), &[M::IodoPropanol]),
                when(|p| ester_oxygen(p, 4), &[M::IodopropylEster]),
            ]),
        ])],
    );

    t.add(
        "I-C-C-C-N",
        clauses![when(|p| straight(p, 1, 4), &[]).then(clauses![
            when(|p| amine(p, 4), &[M::IodopropylAmine]),
        ])],
    );

    t.add(
        "Cl-C-C-C-S",
        clauses![when(|p| straight(p, 1, 4), &[]).then(clauses![
            first_of(vec![
                when(|p| thiol(p, 4), &[M::ChloroPropanethiol]),
                when(|p| thioether(p, 4), &[M::ChloropropylSulfide]),
            ]),
        ])],
    );

    t.add(
        "Br-C-C-C-S",
        clauses![when(|p| straight(p, 1, 4), &[]).then(clauses![
            first_of(vec![
                when(|p| thiol(p, 4), &[M::BromoPropanethiol]),
                when(|p| thioether(p, 4), &[M::BromopropylSulfide]),
            ]),
        ])],
    );

    t.add(
        "O-C-C-C-P",
        clauses![when(|p| straight(p, 1, 4), &[]).then(clauses![
            first_of(vec![
                when(|p| p.group(4) == G::PhosphonatePhosphorus && hydroxyl(p, 0), &[M::HydroxypropylPhosphonate]),
                when(
                    |p| p.group(4) == G::PhosphonatePhosphorus && ester_oxygen(p, 0),
                    &[M::AcyloxypropylPhosphonate],
                ),
            ]),
        ])],
    );

    t.add(
        "N-C-C-C-P",
        clauses![when(|p| straight(p, 1, 4), &[]).then(clauses![
            when(|p| p.group(4) == G::PhosphonatePhosphorus && primary_amine(p, 0), &[M::AminopropylPhosphonate]),
        ])],
    );

    t.add("F-C-C-C-F", clauses![when(|p| straight(p, 1, 4), &[M::OneThreeDifluoropropane])]);

    t.add("Cl-C-C-C-F", clauses![when(|p| straight(p, 1, 4), &[M::OneChloroThreeFluoropropane])]);

    t.add("Br-C-C-C-F", clauses![when(|p| straight(p, 1, 4), &[M::OneBromoThreeFluoropropane])]);

    t.add("F-C-C-C-I", clauses![when(|p| straight(p, 1, 4), &[M::OneFluoroThreeIodopropane])]);

    t.add("Cl-C-C-C-Cl", clauses![when(|p| straight(p, 1, 4), &[M::OneThreeDichloropropane])]);

    t.add("Br-C-C-C-Cl", clauses![when(|p| straight(p, 1, 4), &[M::OneBromoThreeChloropropane])]);

    t.add("Cl-C-C-C-I", clauses![when(|p| straight(p, 1, 4), &[M::OneChloroThreeIodopropane])]);

    t.add("Br-C-C-C-Br", clauses![when(|p| straight(p, 1, 4), &[M::OneThreeDibromopropane])]);

    t.add("Br-C-C-C-I", clauses![when(|p| straight(p, 1, 4), &[M::OneBromoThreeIodopropane])]);

    t.add("I-C-C-C-I", clauses![when(|p| straight(p, 1, 4), &[M::OneThreeDiiodopropane])]);
}

fn six(t: &mut RuleTable) {
    t.extend(
        "C-C-C-C-C-O",
        clauses![first_of(vec![
            when(|p| methyl(p, 0) && straight(p, 1, 5), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 5), &[M::NPentanol]),
                    when(|p| ether_oxygen(p, 5), &[M::NPentyloxy]),
                    when(|p| ester_oxygen(p, 5), &[M::NPentylEster]),
                ]),
            ]),
            when(|p| methyl(p, 0) && iso_fork(p, 1) && straight(p, 2, 5), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 5), &[M::Isohexanol]),
                    when(|p| ether_oxygen(p, 5), &[M::Isohexyloxy]),
                    when(|p| ester_oxygen(p, 5), &[M::IsohexylEster]),
                ]),
            ]),
            when(|p| aromatic(p, 0) && straight(p, 1, 5), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 5), &[M::ArylPentanol]),
                    when(|p| ether_oxygen(p, 5), &[M::ArylPentylEther]),
                    when(|p| ester_oxygen(p, 5), &[M::ArylPentylEster]),
                ]),
            ]),
        ])],
    );

    t.extend(
        "C-C-C-C-C-N",
        clauses![first_of(vec![
            when(|p| methyl(p, 0) && straight(p, 1, 5), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 5), &[M::NPentylamine]),
                    when(|p| substituted_amine(p, 5), &[M::NPentylamino]),
                    when(|p| amide_nitrogen(p, 5), &[M::NPentylAmide]),
                    when(|p| p.group(5) == G::QuaternaryNitrogen, &[M::NPentylammonium]),
                ]),
            ]),
            when(|p| methyl(p, 0) && iso_fork(p, 1) && straight(p, 2, 5), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 5), &[M::Isohexylamine]),
                    when(|p| amide_nitrogen(p, 5), &[M::NIsohexylAmide]),
                ]),
            ]),
            when(|p| aromatic(p, 0) && straight(p, 1, 5), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 5), &[M::ArylPentylamine]),
                    when(|p| amide_nitrogen(p, 5), &[M::ArylPentylAmide]),
                ]),
            ]),
        ])],
    );

    t.add(
        "C-C-C-C-C-S",
        clauses![when(|p| methyl(p, 0) && straight(p, 1, 5), &[]).then(clauses![
            first_of(vec![
                when(|p| thiol(p, 5), &[M::NPentanethiol]),
                when(|p| thioether(p, 5), &[M::NPentylthio]),
                when(|p| sulfonyl(p, 5), &[M::NPentylsulfonyl]),
            ]),
        ])],
    );

    t.add(
        "C-C-C-C-C-P",
        clauses![when(|p| methyl(p, 0) && straight(p, 1, 5), &[]).then(clauses![
            first_of(vec![
                when(|p| p.group(5) == G::PhosphonatePhosphorus, &[M::NPentylphosphonate]),
                when(|p| p.group(5) == G::OtherPhosphorus, &[M::NPentylphosphine]),
            ]),
        ])],
    );

    t.add("C-C-C-C-C-Si", clauses![when(|p| methyl(p, 0) && straight(p, 1, 5), &[M::NPentylsilyl])]);

    t.add(
        "C-C-C-C-C-F",
        clauses![first_of(vec![
            when(|p| p.env(0).fluorine == 3 && fluorinated(p, 1, 5), &[M::Perfluoropentyl]),
            when(|p| methyl(p, 0) && straight(p, 1, 5), &[M::NPentylFluoride]),
        ])],
    );

    t.add("C-C-C-C-C-Cl", clauses![when(|p| methyl(p, 0) && straight(p, 1, 5), &[M::NPentylChloride])]);

    t.add("Br-C-C-C-C-C", clauses![when(|p| methyl(p, 5) && straight(p, 1, 5), &[M::NPentylBromide])]);

    t.add("C-C-C-C-C-I", clauses![when(|p| methyl(p, 0) && straight(p, 1, 5), &[M::NPentylIodide])]);

    t.add(
        "O-C-C-C-C-O",
        clauses![when(|p| straight(p, 1, 5), &[]).then(clauses![
            first_of(vec![
                when(|p| both_ends(p, hydroxyl), &[M::AlphaOmegaButanediol]),
                when(|p| ends_pair(p, hydroxyl, ether_oxygen), &[M::AlkoxyButanol]),
                when(|p| ends_pair(p, hydroxyl, ester_oxygen), &[M::HydroxybutylEster]),
                when(|p| both_ends(p, ether_oxygen), &[M::DialkoxyButane]),
                when(|p| ends_pair(p, ether_oxygen, ester_oxygen), &[M::AlkoxybutylEster]),
                when(|p| both_ends(p, ester_oxygen), &[M::ButanediylDiester]),
            ]),
        ])],
    );

    t.add(
        "N-C-C-C-C-N",
        clauses![when(|p| straight(p, 1, 5), &[]).then(clauses![
            first_of(vec![
                when(|p| ends_pair(p, primary_amine, substituted_amine), &[M::AlkylButanediamine]),
                when(|p| both_ends(p, substituted_amine), &[M::DialkylButanediamine]),
                when(|p| ends_pair(p, primary_amine, amide_nitrogen), &[M::AminobutylAmide]),
                when(|p| both_ends(p, amide_nitrogen), &[M::ButanediylBisamide]),
            ]),
        ])],
    );

    t.add(
        "N-C-C-C-C-O",
        clauses![when(|p| straight(p, 1, 5), &[]).then(clauses![
            first_of(vec![
                when(|p| primary_amine(p, 0) && hydroxyl(p, 5), &[M::AminoButanol]),
                when(|p| primary_amine(p, 0) && ether_oxygen(p, 5), &[M::AlkoxybutylAmine]),
                when(|p| primary_amine(p, 0) && ester_oxygen(p, 5), &[M::AminobutylEster]),
                when(|p| substituted_amine(p, 0) && hydroxyl(p, 5), &[M::AlkylaminoButanol]),
                when(|p| substituted_amine(p, 0) && ester_oxygen(p, 5), &[M::AlkylaminobutylEster]),
                when(|p| quaternary_nitrogen(p, 0) && hydroxyl(p, 5), &[M::HydroxybutylAmmonium]),
                when(|p| quaternary_nitrogen(p, 0) && ester_oxygen(p, 5), &[M::AcyloxybutylAmmonium]),
                when(|p| amide_nitrogen(p, 0) && hydroxyl(p, 5), &[M::HydroxybutylAmide]),
                when(|p| amide_nitrogen(p, 0) && ether_oxygen(p, 5), &[M::AlkoxybutylAmide]),
                when(|p| amide_nitrogen(p, 0) && ester_oxygen(p, 5), &[M::AcyloxybutylAmide]),
            ]),
        ])],
    );

    t.add(
        "N-C-C-C-C-S",
        clauses![when(|p| straight(p, 1, 5), &[]).then(clauses![
            first_of(vec![
                when(|p| primary_amine(p, 0) && thiol(p, 5), &[M::AminoButanethiol]),
                when(|p| primary_amine(p, 0) && thioether(p, 5), &[M::AlkylthiobutylAmine]),
                when(|p| primary_amine(p, 0) && sulfonyl(p, 5), &[M::AminoButanesulfonyl]),
                when(|p| amide_nitrogen(p, 0) && thiol(p, 5), &[M::MercaptobutylAmide]),
                when(|p| amide_nitrogen(p, 0) && thioester_sulfur(p, 5), &[M::AcylthiobutylAmide]),
                when(|p| amide_nitrogen(p, 0) && thioether(p, 5), &[M::AlkylthiobutylAmide]),
                when(|p| amide_nitrogen(p, 0) && sulfonyl(p, 5), &[M::AcylaminoButanesulfonyl]),
            ]),
        ])],
    );

    t.add(
        "O-C-C-C-C-S",
        clauses![when(|p| straight(p, 1, 5), &[]).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 0) && thiol(p, 5), &[M::MercaptoButanol]),
                when(|p| hydroxyl(p, 0) && thioether(p, 5), &[M::AlkylthioButanol]),
                when(|p| hydroxyl(p, 0) && sulfonyl(p, 5), &[M::HydroxyButanesulfonyl]),
                when(|p| ether_oxygen(p, 0) && thioether(p, 5), &[M::AlkoxybutylSulfide]),
                when(|p| ester_oxygen(p, 0) && thioether(p, 5), &[M::AcyloxybutylSulfide]),
                when(|p| ester_oxygen(p, 0) && sulfonyl(p, 5), &[M::AcyloxyButanesulfonyl]),
            ]),
        ])],
    );

    t.add(
        "S-C-C-C-C-S",
        clauses![when(|p| straight(p, 1, 5), &[]).then(clauses![
            first_of(vec![
                when(|p| both_ends(p, thiol), &[M::AlphaOmegaButanedithiol]),
                when(|p| ends_pair(p, thiol, thioether), &[M::AlkylthioButanethiol]),
                when(|p| both_ends(p, thioether), &[M::BisalkylthioButane]),
            ]),
        ])],
    );

    t.add(
        "Cl-C-C-C-C-O",
        clauses![when(|p| straight(p, 1, 5), &[]).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 5), &[M::ChloroButanol]),
                when(|p| ether_oxygen(p, 5), &[M::ChlorobutylEther]),
                when(|p| ester_oxygen(p, 5), &[M::ChlorobutylEster]),
            ]),
        ])],
    );

    t.add(
        "Cl-C-C-C-C-N",
        clauses![when(|p| straight(p, 1, 5), &[]).then(clauses![
            first_of(vec![
                when(|p| amine(p, 5), &[M::ChlorobutylAmine]),
                when(|p| amide_nitrogen(p, 5), &[M::ChlorobutylAmide]),
            ]),
        ])],
    );

    t.add(
        "Br-C-C-C-C-O",
        clauses![when(|p| straight(p, 1, 5), &[]).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 5), &[M::BromoButanol]),
                when(|p| ether_oxygen(p, 5), &[M::BromobutylEther]),
                when(|p| ester_oxygen(p, 5), &[M::BromobutylEster]),
            ]),
        ])],
    );

    t.add(
        "Br-C-C-C-C-N",
        clauses![when(|p| straight(p, 1, 5), &[]).then(clauses![
            first_of(vec![
                when(|p| amine(p, 5), &[M::BromobutylAmine]),
                when(|p| amide_nitrogen(p, 5), &[M::BromobutylAmide]),
            ]),
        ])],
    );

    t.add(
        "F-C-C-C-C-O",
        clauses![when(|p| straight(p, 1, 5), &[]).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 5), &[M::FluoroButanol]),
                when(|p| ester_oxygen(p, 5), &[M::FluorobutylEster]),
            ]),
        ])],
    );

    t.add(
        "F-C-C-C-C-N",
        clauses![when(|p| straight(p, 1, 5), &[]).then(clauses![
            when(|p| amine(p, 5), &[M::FluorobutylAmine]),
        ])],
    );

    t.add(
        "I-C-C-C-C-O",
        clauses![when(|p| straight(p, 1, 5), &[]).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 5), &[M::IodoButanol]),
                when(|p| ester_oxygen(p, 5), &[M::IodobutylEster]),
            ]),
        ])],
    );

    t.add(
        "I-C-C-C-C-N",
        clauses![when(|p| straight(p, 1, 5), &[]).then(clauses![
            when(|p| amine(p, 5), &[M::IodobutylAmine]),
        ])],
    );

    t.add(
        "Cl-C-C-C-C-S",
        clauses![when(|p| straight(p, 1, 5), &[]).then(clauses![
            first_of(vec![
                when(|p| thiol(p, 5), &[M::ChloroButanethiol]),
                when(|p| thioether(p, 5), &[M::ChlorobutylSulfide]),
            ]),
        ])],
    );

    t.add(
        "Br-C-C-C-C-S",
        clauses![when(|p| straight(p, 1, 5), &[]).then(clauses![
            first_of(vec![
                when(|p| thiol(p, 5), &[M::BromoButanethiol]),
                when(|p| thioether(p, 5), &[M::BromobutylSulfide]),
            ]),
        ])],
    );

    t.add(
        "O-C-C-C-C-P",
        clauses![when(|p| straight(p, 1, 5), &[]).then(clauses![
            first_of(vec![
                when(|p| p.group(5) == G::PhosphonatePhosphorus && hydroxyl(p, 0), &[M::HydroxybutylPhosphonate]),
                when(|p| p.group(5) == G::PhosphonatePhosphorus && ester_oxygen(p, 0), &[M::AcyloxybutylPhosphonate]),
            ]),
        ])],
    );

    t.add(
        "N-C-C-C-C-P",
        clauses![when(|p| straight(p, 1, 5), &[]).then(clauses![
            when(|p| p.group(5) == G::PhosphonatePhosphorus && primary_amine(p, 0), &[M::AminobutylPhosphonate]),
        ])],
    );

    t.add("F-C-C-C-C-F", clauses![when(|p| straight(p, 1, 5), &[M::OneFourDifluorobutane])]);

    t.add("Cl-C-C-C-C-F", clauses![when(|p| straight(p, 1, 5), &[M::OneChloroFourFluorobutane])]);

    t.add("Br-C-C-C-C-F", clauses![when(|p| straight(p, 1, 5), &[M::OneBromoFourFluorobutane])]);

    t.add("F-C-C-C-C-I", clauses![when(|p| straight(p, 1, 5), &[M::OneFluoroFourIodobutane])]);

    t.add("Cl-C-C-C-C-Cl", clauses![when(|p| straight(p, 1, 5), &[M::OneFourDichlorobutane])]);

    t.add("Br-C-C-C-C-Cl", clauses![when(|p| straight(p, 1, 5), &[M::OneBromoFourChlorobutane])]);

    t.add("Cl-C-C-C-C-I", clauses![when(|p| straight(p, 1, 5), &[M::OneChloroFourIodobutane])]);

    t.add("Br-C-C-C-C-Br", clauses![when(|p| straight(p, 1, 5), &[M::OneFourDibromobutane])]);

    t.add("Br-C-C-C-C-I", clauses![when(|p| straight(p, 1, 5), &[M::OneBromoFourIodobutane])]);

    t.add("I-C-C-C-C-I", clauses![when(|p| straight(p, 1, 5), &[M::OneFourDiiodobutane])]);

    t.add(
        "C-O-C-C-O-C",
        clauses![when(
            |p| alkyl(p, 0) && straight(p, 2, 4) && alkyl(p, 5),
            &[M::OligoOxyethyleneChainTwoOxygensEndCapsOneAndOne],
        )],
    );

    t.add(
        "C-N-C-C-N-C",
        clauses![when(
            |p| alkyl(p, 0) && straight(p, 2, 4) && alkyl(p, 5),
            &[M::OligoIminoethyleneChainTwoNitrogensEndCapsOneAndOne],
        )],
    );

    t.add(
        "C-S-C-C-S-C",
        clauses![when(
            |p| alkyl(p, 0) && straight(p, 2, 4) && alkyl(p, 5),
            &[M::OligoThioethyleneChainTwoSulfursEndCapsOneAndOne],
        )],
    );
}

fn seven(t: &mut RuleTable) {
    t.add(
        "C-C-C-C-C-C-O",
        clauses![first_of(vec![
            when(|p| methyl(p, 0) && straight(p, 1, 6), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 6), &[M::NHexanol]),
                    when(|p| ether_oxygen(p, 6), &[M::NHexyloxy]),
                    when(|p| ester_oxygen(p, 6), &[M::NHexylEster]),
                ]),
            ]),
            when(|p| methyl(p, 0) && iso_fork(p, 1) && straight(p, 2, 6), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 6), &[M::Isoheptanol]),
                    when(|p| ether_oxygen(p, 6), &[M::Isoheptyloxy]),
                    when(|p| ester_oxygen(p, 6), &[M::IsoheptylEster]),
                ]),
            ]),
            when(|p| aromatic(p, 0) && straight(p, 1, 6), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 6), &[M::ArylHexanol]),
                    when(|p| ether_oxygen(p, 6), &[M::ArylHexylEther]),
                    when(|p| ester_oxygen(p, 6), &[M::ArylHexylEster]),
                ]),
            ]),
        ])],
    );

    t.add(
        "C-C-C-C-C-C-N",
        clauses![first_of(vec![
            when(|p| methyl(p, 0) && straight(p, 1, 6), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 6), &[M::NHexylamine]),
                    when(|p| substituted_amine(p, 6), &[M::NHexylamino]),
                    when(|p| amide_nitrogen(p, 6), &[M::NHexylAmide]),
                    when(|p| p.group(6) == G::QuaternaryNitrogen, &[M::NHexylammonium]),
                ]),
            ]),
            when(|p| aromatic(p, 0) && straight(p, 1, 6), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 6), &[M::ArylHexylamine]),
                    when(|p| amide_nitrogen(p, 6), &[M::ArylHexylAmide]),
                ]),
            ]),
        ])],
    );

    t.add(
        "C-C-C-C-C-C-S",
        clauses![when(|p| methyl(p, 0) && straight(p, 1, 6), &[]).then(clauses![
            first_of(vec![
                when(|p| thiol(p, 6), &[M::NHexanethiol]),
                when(|p| thioether(p, 6), &[M::NHexylthio]),
                when(|p| sulfonyl(p, 6), &[M::NHexylsulfonyl]),
            ]),
        ])],
    );

    t.add(
        "C-C-C-C-C-C-P",
        clauses![when(|p| methyl(p, 0) && straight(p, 1, 6), &[]).then(clauses![
            first_of(vec![
                when(|p| p.group(6) == G::PhosphonatePhosphorus, &[M::NHexylphosphonate]),
                when(|p| p.group(6) == G::OtherPhosphorus, &[M::NHexylphosphine]),
            ]),
        ])],
    );

    t.add("C-C-C-C-C-C-Si", clauses![when(|p| methyl(p, 0) && straight(p, 1, 6), &[M::NHexylsilyl])]);

    t.add(
        "C-C-C-C-C-C-F",
        clauses![first_of(vec![
            when(|p| p.env(0).fluorine == 3 && fluorinated(p, 1, 6), &[M::Perfluorohexyl]),
            when(|p| methyl(p, 0) && straight(p, 1, 6), &[M::NHexylFluoride]),
        ])],
    );

    t.add("C-C-C-C-C-C-Cl", clauses![when(|p| methyl(p, 0) && straight(p, 1, 6), &[M::NHexylChloride])]);

    t.add("Br-C-C-C-C-C-C", clauses![when(|p| methyl(p, 6) && straight(p, 1, 6), &[M::NHexylBromide])]);

    t.add("C-C-C-C-C-C-I", clauses![when(|p| methyl(p, 0) && straight(p, 1, 6), &[M::NHexylIodide])]);

    t.extend(
        "O-C-C-C-C-C-O",
        clauses![when(|p| straight(p, 1, 6), &[]).then(clauses![
            first_of(vec![
                when(|p| ends_pair(p, hydroxyl, ether_oxygen), &[M::AlkoxyPentanol]),
                when(|p| ends_pair(p, hydroxyl, ester_oxygen), &[M::HydroxypentylEster]),
                when(|p| both_ends(p, ether_oxygen), &[M::DialkoxyPentane]),
                when(|p| ends_pair(p, ether_oxygen, ester_oxygen), &[M::AlkoxypentylEster]),
                when(|p| both_ends(p, ester_oxygen), &[M::PentanediylDiester]),
            ]),
        ])],
    );

    t.add(
        "N-C-C-C-C-C-N",
        clauses![when(|p| straight(p, 1, 6), &[]).then(clauses![
            first_of(vec![
                when(|p| ends_pair(p, primary_amine, substituted_amine), &[M::AlkylPentanediamine]),
                when(|p| both_ends(p, substituted_amine), &[M::DialkylPentanediamine]),
                when(|p| ends_pair(p, primary_amine, amide_nitrogen), &[M::AminopentylAmide]),
                when(|p| both_ends(p, amide_nitrogen), &[M::PentanediylBisamide]),
            ]),
        ])],
    );

    t.add(
        "N-C-C-C-C-C-O",
        clauses![when(|p| straight(p, 1, 6), &[]).then(clauses![
            first_of(vec![
                when(|p| primary_amine(p, 0) && hydroxyl(p, 6), &[M::AminoPentanol]),
                when(|p| primary_amine(p, 0) && ether_oxygen(p, 6), &[M::AlkoxypentylAmine]),
                when(|p| primary_amine(p, 0) && ester_oxygen(p, 6), &[M::AminopentylEster]),
                when(|p| substituted_amine(p, 0) && hydroxyl(p, 6), &[M::AlkylaminoPentanol]),
                when(|p| substituted_amine(p, 0) && ester_oxygen(p, 6), &[M::AlkylaminopentylEster]),
                when(|p| quaternary_nitrogen(p, 0) && hydroxyl(p, 6), &[M::HydroxypentylAmmonium]),
                when(|p| quaternary_nitrogen(p, 0) && ester_oxygen(p, 6), &[M::AcyloxypentylAmmonium]),
                when(|p| amide_nitrogen(p, 0) && hydroxyl(p, 6), &[M::HydroxypentylAmide]),
                when(|p| amide_nitrogen(p, 0) && ether_oxygen(p, 6), &[M::AlkoxypentylAmide]),
                when(|p| amide_nitrogen(p, 0) && ester_oxygen(p, 6), &[M::AcyloxypentylAmide]),
            ]),
        ])],
    );

    t.add(
        "N-C-C-C-C-C-S",
        clauses![when(|p| straight(p, 1, 6), &[]).then(clauses![
            first_of(vec![
                when(|p| primary_amine(p, 0) && thiol(p, 6), &[M::AminoPentanethiol]),
                when(|p| primary_amine(p, 0) && thioether(p, 6), &[M::AlkylthiopentylAmine]),
                when(|p| primary_amine(p, 0) && sulfonyl(p, 6), &[M::AminoPentanesulfonyl]),
                when(|p| amide_nitrogen(p, 0) && thiol(p, 6), &[M::MercaptopentylAmide]),
                when(|p| amide_nitrogen(p, 0) && thioester_sulfur(p, 6), &[M::AcylthiopentylAmide]),
                when(|p| amide_nitrogen(p, 0) && thioether(p, 6), &[M::AlkylthiopentylAmide]),
                when(|p| amide_nitrogen(p, 0) && sulfonyl(p, 6), &[M::AcylaminoPentanesulfonyl]),
            ]),
        ])],
    );

    t.add(
        "O-C-C-C-C-C-S",
        clauses![when(|p| straight(p, 1, 6), &[]).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 0) && thiol(p, 6), &[M::MercaptoPentanol]),
                when(|p| hydroxyl(p, 0) && thioether(p, 6), &[M::AlkylthioPentanol]),
                when(|p| hydroxyl(p, 0) && sulfonyl(p, 6), &[M::HydroxyPentanesulfonyl]),
                when(|p| ether_oxygen(p, 0) && thioether(p, 6), &[M::AlkoxypentylSulfide]),
                when(|p| ester_oxygen(p, 0) && thioether(p, 6), &[M::AcyloxypentylSulfide]),
                when(|p| ester_oxygen(p, 0) && sulfonyl(p, 6), &[M::AcyloxyPentanesulfonyl]),
            ]),
        ])],
    );

    t.add(
        "S-C-C-C-C-C-S",
        clauses![when(|p| straight(p, 1, 6), &[]).then(clauses![
            first_of(vec![
                when(|p| both_ends(p, thiol), &[M::AlphaOmegaPentanedithiol]),
                when(|p| ends_pair(p, thiol, thioether), &[M::AlkylthioPentanethiol]),
                when(|p| both_ends(p, thioether), &[M::BisalkylthioPentane]),
            ]),
        ])],
    );

    t.add(
        "Cl-C-C-C-C-C-O",
        clauses![when(|p| straight(p, 1, 6), &[]).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 6), &[M::ChloroPentanol]),
                when(|p| ether_oxygen(p, 6), &[M::ChloropentylEther]),
                when(|p| ester_oxygen(p, 6), &[M::ChloropentylEster]),
            ]),
        ])],
    );

    t.add(
        "Cl-C-C-C-C-C-N",
        clauses![when(|p| straight(p, 1, 6), &[]).then(clauses![
            first_of(vec![
                when(|p| amine(p, 6), &[M::ChloropentylAmine]),
                when(|p| amide_nitrogen(p, 6), &[M::ChloropentylAmide]),
            ]),
        ])],
    );

    t.add(
        "Br-C-C-C-C-C-O",
        clauses![when(|p| straight(p, 1, 6), &[]).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 6), &[M::BromoPentanol]),
                when(|p| ether_oxygen(p, 6), &[M::BromopentylEther]),
                when(|p| ester_oxygen(p, 6), &[M::BromopentylEster]),
            ]),
        ])],
    );

    t.add(
        "Br-C-C-C-C-C-N",
        clauses![when(|p| straight(p, 1, 6), &[]).then(clauses![
            first_of(vec![
                when(|p| amine(p, 6), &[M::BromopentylAmine]),
                when(|p| amide_nitrogen(p, 6), &[M::BromopentylAmide]),
            ]),
        ])],
    );

    t.add(
        "F-C-C-C-C-C-O",
        clauses![when(|p| straight(p, 1, 6), &[]).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 6), &[M::FluoroPentanol]),
                when(|p| ester_oxygen(p, 6), &[M::FluoropentylEster]),
            ]),
        ])],
    );

    t.add(
        "F-C-C-C-C-C-N",
        clauses![when(|p| straight(p, 1, 6), &[]).then(clauses![
            when(|p| amine(p, 6), &[M::FluoropentylAmine]),
        ])],
    );

    t.add(
        "I-C-C-C-C-C-O",
        clauses![when(|p| straight(p, 1, 6), &[]).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 6), &[M::IodoPentanol]),
                when(|p| ester_oxygen(p, 6), &[M::IodopentylEster]),
            ]),
        ])],
    );

    t.add(
        "I-C-C-C-C-C-N",
        clauses![when(|p| straight(p, 1, 6), &[]).then(clauses![
            when(|p| amine(p, 6), &[M::IodopentylAmine]),
        ])],
    );

    t.add(
        "Cl-C-C-C-C-C-S",
        clauses![when(|p| straight(p, 1, 6), &[]).then(clauses![
            first_of(vec![
                when(|p| thiol(p, 6), &[M::ChloroPentanethiol]),
                when(|p| thioether(p, 6), &[M::ChloropentylSulfide]),
            ]),
        ])],
    );

    t.add(
        "Br-C-C-C-C-C-S",
        clauses![when(|p| straight(p, 1, 6), &[]).then(clauses![
            first_of(vec![
                when(|p| thiol(p, 6), &[M::BromoPentanethiol]),
                when(|p| thioether(p, 6), &[M::BromopentylSulfide]),
            ]),
        ])],
    );

    t.add(
        "O-C-C-C-C-C-P",
        clauses![when(|p| straight(p, 1, 6), &[]).then(clauses![
            first_of(vec![
                when(|p| p.group(6) == G::PhosphonatePhosphorus && hydroxyl(p, 0), &[M::HydroxypentylPhosphonate]),
                when(
                    |p| p.group(6) == G::PhosphonatePhosphorus && ester_oxygen(p, 0),
                    &[M::AcyloxypentylPhosphonate],
                ),
            ]),
        ])],
    );

    t.add(
        "N-C-C-C-C-C-P",
        clauses![when(|p| straight(p, 1, 6), &[]).then(clauses![
            when(|p| p.group(6) == G::PhosphonatePhosphorus && primary_amine(p, 0), &[M::AminopentylPhosphonate]),
        ])],
    );

    t.add("F-C-C-C-C-C-F", clauses![when(|p| straight(p, 1, 6), &[M::OneFiveDifluoropentane])]);

    t.add("Cl-C-C-C-C-C-F", clauses![when(|p| straight(p, 1, 6), &[M::OneChloroFiveFluoropentane])]);

    t.add("Br-C-C-C-C-C-F", clauses![when(|p| straight(p, 1, 6), &[M::OneBromoFiveFluoropentane])]);

    t.add("F-C-C-C-C-C-I", clauses![when(|p| straight(p, 1, 6), &[M::OneFluoroFiveIodopentane])]);

    t.add("Cl-C-C-C-C-C-Cl", clauses![when(|p| straight(p, 1, 6), &[M::OneFiveDichloropentane])]);

    t.add("Br-C-C-C-C-C-Cl", clauses![when(|p| straight(p, 1, 6), &[M::OneBromoFiveChloropentane])]);

    t.add("Cl-C-C-C-C-C-I", clauses![when(|p| straight(p, 1, 6), &[M::OneChloroFiveIodopentane])]);

    t.add("Br-C-C-C-C-C-Br", clauses![when(|p| straight(p, 1, 6), &[M::OneFiveDibromopentane])]);

    t.add("Br-C-C-C-C-C-I", clauses![when(|p| straight(p, 1, 6), &[M::OneBromoFiveIodopentane])]);

    t.add("I-C-C-C-C-C-I", clauses![when(|p| straight(p, 1, 6), &[M::OneFiveDiiodopentane])]);

    t.add(
        "C-C-O-C-C-O-C",
        clauses![when(
            |p| alkyl(p, 0) && straight(p, 1, 2) && straight(p, 3, 5) && alkyl(p, 6),
            &[M::OligoOxyethyleneChainTwoOxygensEndCapsOneAndTwo],
        )],
    );

    t.add(
        "O-C-C-O-C-C-O",
        clauses![
            when(
                |p| straight(p, 1, 3) && straight(p, 4, 6),
                &[M::OligoOxyethyleneChainThreeOxygensEndCapsZeroAndZero],
            ),
        ],
    );

    t.add(
        "C-O-C-C-C-O-C",
        clauses![when(
            |p| alkyl(p, 0) && straight(p, 2, 5) && alkyl(p, 6),
            &[M::OligoOxytrimethyleneChainTwoOxygensEndCapsOneAndOne],
        )],
    );

    t.add(
        "C-C-N-C-C-N-C",
        clauses![when(
            |p| alkyl(p, 0) && straight(p, 1, 2) && straight(p, 3, 5) && alkyl(p, 6),
            &[M::OligoIminoethyleneChainTwoNitrogensEndCapsOneAndTwo],
        )],
    );

    t.add(
        "N-C-C-N-C-C-N",
        clauses![when(
            |p| straight(p, 1, 3) && straight(p, 4, 6),
            &[M::OligoIminoethyleneChainThreeNitrogensEndCapsZeroAndZero],
        )],
    );

    t.add(
        "C-N-C-C-C-N-C",
        clauses![when(
            |p| alkyl(p, 0) && straight(p, 2, 5) && alkyl(p, 6),
            &[M::OligoIminotrimethyleneChainTwoNitrogensEndCapsOneAndOne],
        )],
    );

    t.add(
        "C-C-S-C-C-S-C",
        clauses![when(
            |p| alkyl(p, 0) && straight(p, 1, 2) && straight(p, 3, 5) && alkyl(p, 6),
            &[M::OligoThioethyleneChainTwoSulfursEndCapsOneAndTwo],
        )],
    );

    t.add(
        "S-C-C-S-C-C-S",
        clauses![
            when(
                |p| straight(p, 1, 3) && straight(p, 4, 6),
                &[M::OligoThioethyleneChainThreeSulfursEndCapsZeroAndZero],
            ),
        ],
    );

    t.add(
        "C-S-C-C-C-S-C",
        clauses![when(
            |p| alkyl(p, 0) && straight(p, 2, 5) && alkyl(p, 6),
            &[M::OligoThiotrimethyleneChainTwoSulfursEndCapsOneAndOne],
        )],
    );

    t.add(
        "N-C-C-O-C-C-O",
        clauses![when(|p| straight(p, 1, 3) && straight(p, 4, 6), &[M::NOOEthyleneLinkedHeteroatomChain])],
    );

    t.add(
        "O-C-C-O-C-C-S",
        clauses![when(|p| straight(p, 1, 3) && straight(p, 4, 6), &[M::OOSEthyleneLinkedHeteroatomChain])],
    );

    t.add(
        "O-C-C-N-C-C-O",
        clauses![when(|p| straight(p, 1, 3) && straight(p, 4, 6), &[M::ONOEthyleneLinkedHeteroatomChain])],
    );

    t.add(
        "N-C-C-N-C-C-O",
        clauses![when(|p| straight(p, 1, 3) && straight(p, 4, 6), &[M::NNOEthyleneLinkedHeteroatomChain])],
    );

    t.add(
        "O-C-C-N-C-C-S",
        clauses![when(|p| straight(p, 1, 3) && straight(p, 4, 6), &[M::ONSEthyleneLinkedHeteroatomChain])],
    );

    t.add(
        "O-C-C-S-C-C-O",
        clauses![when(|p| straight(p, 1, 3) && straight(p, 4, 6), &[M::OSOEthyleneLinkedHeteroatomChain])],
    );

    t.add(
        "N-C-C-S-C-C-O",
        clauses![when(|p| straight(p, 1, 3) && straight(p, 4, 6), &[M::NSOEthyleneLinkedHeteroatomChain])],
    );

    t.add(
        "O-C-C-S-C-C-S",
        clauses![when(|p| straight(p, 1, 3) && straight(p, 4, 6), &[M::OSSEthyleneLinkedHeteroatomChain])],
    );

    t.add(
        "N-C-C-O-C-C-N",
        clauses![when(|p| straight(p, 1, 3) && straight(p, 4, 6), &[M::NONEthyleneLinkedHeteroatomChain])],
    );

    t.add(
        "N-C-C-O-C-C-S",
        clauses![when(|p| straight(p, 1, 3) && straight(p, 4, 6), &[M::NOSEthyleneLinkedHeteroatomChain])],
    );

    t.add(
        "N-C-C-N-C-C-S",
        clauses![when(|p| straight(p, 1, 3) && straight(p, 4, 6), &[M::NNSEthyleneLinkedHeteroatomChain])],
    );

    t.add(
        "N-C-C-S-C-C-N",
        clauses![when(|p| straight(p, 1, 3) && straight(p, 4, 6), &[M::NSNEthyleneLinkedHeteroatomChain])],
    );

    t.add(
        "N-C-C-S-C-C-S",
        clauses![when(|p| straight(p, 1, 3) && straight(p, 4, 6), &[M::NSSEthyleneLinkedHeteroatomChain])],
    );

    t.add(
        "S-C-C-O-C-C-S",
        clauses![when(|p| straight(p, 1, 3) && straight(p, 4, 6), &[M::SOSEthyleneLinkedHeteroatomChain])],
    );

    t.add(
        "S-C-C-N-C-C-S",
        clauses![when(|p| straight(p, 1, 3) && straight(p, 4, 6), &[M::SNSEthyleneLinkedHeteroatomChain])],
    );
}

fn eight(t: &mut RuleTable) {
    t.add(
        "C-C-C-C-C-C-C-O",
        clauses![first_of(vec![
            when(|p| methyl(p, 0) && straight(p, 1, 7), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 7), &[M::NHeptanol]),
                    when(|p| ether_oxygen(p, 7), &[M::NHeptyloxy]),
                    when(|p| ester_oxygen(p, 7), &[M::NHeptylEster]),
                ]),
            ]),
            when(|p| methyl(p, 0) && iso_fork(p, 1) && straight(p, 2, 7), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 7), &[M::Isooctanol]),
                    when(|p| ether_oxygen(p, 7), &[M::Isooctyloxy]),
                    when(|p| ester_oxygen(p, 7), &[M::IsooctylEster]),
                ]),
            ]),
        ])],
    );

    t.add(
        "C-C-C-C-C-C-C-N",
        clauses![when(|p| methyl(p, 0) && straight(p, 1, 7), &[]).then(clauses![
            first_of(vec![
                when(|p| primary_amine(p, 7), &[M::NHeptylamine]),
                when(|p| substituted_amine(p, 7), &[M::NHeptylamino]),
                when(|p| amide_nitrogen(p, 7), &[M::NHeptylAmide]),
                when(|p| p.group(7) == G::QuaternaryNitrogen, &[M::NHeptylammonium]),
            ]),
        ])],
    );

    t.add(
        "C-C-C-C-C-C-C-S",
        clauses![when(|p| methyl(p, 0) && straight(p, 1, 7), &[]).then(clauses![
            first_of(vec![
                when(|p| thiol(p, 7), &[M::NHeptanethiol]),
                when(|p| thioether(p, 7), &[M::NHeptylthio]),
                when(|p| sulfonyl(p, 7), &[M::NHeptylsulfonyl]),
            ]),
        ])],
    );

    t.add(
        "C-C-C-C-C-C-C-P",
        clauses![when(|p| methyl(p, 0) && straight(p, 1, 7), &[]).then(clauses![
            first_of(vec![
                when(|p| p.group(7) == G::PhosphonatePhosphorus, &[M::NHeptylphosphonate]),
                when(|p| p.group(7) == G::OtherPhosphorus, &[M::NHeptylphosphine]),
            ]),
        ])],
    );

    t.add("C-C-C-C-C-C-C-Si", clauses![when(|p| methyl(p, 0) && straight(p, 1, 7), &[M::NHeptylsilyl])]);

    t.add(
        "C-C-C-C-C-C-C-F",
        clauses![first_of(vec![
            when(|p| p.env(0).fluorine == 3 && fluorinated(p, 1, 7), &[M::Perfluoroheptyl]),
            when(|p| methyl(p, 0) && straight(p, 1, 7), &[M::NHeptylFluoride]),
        ])],
    );

    t.add("C-C-C-C-C-C-C-Cl", clauses![when(|p| methyl(p, 0) && straight(p, 1, 7), &[M::NHeptylChloride])]);

    t.add("Br-C-C-C-C-C-C-C", clauses![when(|p| methyl(p, 7) && straight(p, 1, 7), &[M::NHeptylBromide])]);

    t.add("C-C-C-C-C-C-C-I", clauses![when(|p| methyl(p, 0) && straight(p, 1, 7), &[M::NHeptylIodide])]);

    t.add(
        "O-C-C-C-C-C-C-O",
        clauses![when(|p| straight(p, 1, 7), &[]).then(clauses![
            first_of(vec![
                when(|p| both_ends(p, hydroxyl), &[M::AlphaOmegaHexanediol]),
                when(|p| ends_pair(p, hydroxyl, ether_oxygen), &[M::AlkoxyHexanol]),
                when(|p| ends_pair(p, hydroxyl, ester_oxygen), &[M::HydroxyhexylEster]),
                when(|p| both_ends(p, ether_oxygen), &[M::DialkoxyHexane]),
                when(|p| ends_pair(p, ether_oxygen, ester_oxygen), &[M::AlkoxyhexylEster]),
                when(|p| both_ends(p, ester_oxygen), &[M::HexanediylDiester]),
            ]),
        ])],
    );

    t.add(
        "N-C-C-C-C-C-C-N",
        clauses![when(|p| straight(p, 1, 7), &[]).then(clauses![
            first_of(vec![
                when(|p| both_ends(p, primary_amine), &[M::AlphaOmegaHexanediamine]),
                when(|p| ends_pair(p, primary_amine, substituted_amine), &[M::AlkylHexanediamine]),
                when(|p| both_ends(p, substituted_amine), &[M::DialkylHexanediamine]),
                when(|p| ends_pair(p, primary_amine, amide_nitrogen), &[M::AminohexylAmide]),
                when(|p| both_ends(p, amide_nitrogen), &[M::HexanediylBisamide]),
            ]),
        ])],
    );

    t.add(
        "N-C-C-C-C-C-C-O",
        clauses![when(|p| straight(p, 1, 7), &[]).then(clauses![
            first_of(vec![
                when(|p| primary_amine(p, 0) && hydroxyl(p, 7), &[M::AminoHexanol]),
                when(|p| primary_amine(p, 0) && ether_oxygen(p, 7), &[M::AlkoxyhexylAmine]),
                when(|p| primary_amine(p, 0) && ester_oxygen(p, 7), &[M::AminohexylEster]),
                when(|p| substituted_amine(p, 0) && hydroxyl(p, 7), &[M::AlkylaminoHexanol]),
                when(|p| substituted_amine(p, 0) && ester_oxygen(p, 7), &[M::AlkylaminohexylEster]),
                when(|p| quaternary_nitrogen(p, 0) && hydroxyl(p, 7), &[M::HydroxyhexylAmmonium]),
                when(|p| quaternary_nitrogen(p, 0) && ester_oxygen(p, 7), &[M::AcyloxyhexylAmmonium]),
                when(|p| amide_nitrogen(p, 0) && hydroxyl(p, 7), &[M::HydroxyhexylAmide]),
                when(|p| amide_nitrogen(p, 0) && ether_oxygen(p, 7), &[M::AlkoxyhexylAmide]),
                when(|p| amide_nitrogen(p, 0) && ester_oxygen(p, 7), &[M::AcyloxyhexylAmide]),
            ]),
        ])],
    );

    t.add(
        "N-C-C-C-C-C-C-S",
        clauses![when(|p| straight(p, 1, 7), &[]).then(clauses![
            first_of(vec![
                when(|p| primary_amine(p, 0) && thiol(p, 7), &[M::AminoHexanethiol]),
                when(|p| primary_amine(p, 0) && thioether(p, 7), &[M::AlkylthiohexylAmine]),
                when(|p| primary_amine(p, 0) && sulfonyl(p, 7), &[M::AminoHexanesulfonyl]),
                when(|p| amide_nitrogen(p, 0) && thiol(p, 7), &[M::MercaptohexylAmide]),
                when(|p| amide_nitrogen(p, 0) && thioester_sulfur(p, 7), &[M::AcylthiohexylAmide]),
                when(|p| amide_nitrogen(p, 0) && thioether(p, 7), &[M::AlkylthiohexylAmide]),
                when(|p| amide_nitrogen(p, 0) && sulfonyl(p, 7), &[M::AcylaminoHexanesulfonyl]),
            ]),
        ])],
    );

    t.add(
        "O-C-C-C-C-C-C-S",
        clauses![when(|p| straight(p, 1, 7), &[]).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 0) && thiol(p, 7), &[M::MercaptoHexanol]),
                when(|p| hydroxyl(p, 0) && thioether(p, 7), &[M::AlkylthioHexanol]),
                when(|p| hydroxyl(p, 0) && sulfonyl(p, 7), &[M::HydroxyHexanesulfonyl]),
                when(|p| ether_oxygen(p, 0) && thioether(p, 7), &[M::AlkoxyhexylSulfide]),
                when(|p| ester_oxygen(p, 0) && thioether(p, 7), &[M::AcyloxyhexylSulfide]),
                when(|p| ester_oxygen(p, 0) && sulfonyl(p, 7), &[M::AcyloxyHexanesulfonyl]),
            ]),
        ])],
    );

    t.add(
        "S-C-C-C-C-C-C-S",
        clauses![when(|p| straight(p, 1, 7), &[]).then(clauses![
            first_of(vec![
                when(|p| both_ends(p, thiol), &[M::AlphaOmegaHexanedithiol]),
                when(|p| ends_pair(p, thiol, thioether), &[M::AlkylthioHexanethiol]),
                when(|p| both_ends(p, thioether), &[M::BisalkylthioHexane]),
            ]),
        ])],
    );

    t.add(
        "Cl-C-C-C-C-C-C-O",
        clauses![when(|p| straight(p, 1, 7), &[]).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 7), &[M::ChloroHexanol]),
                when(|p| ether_oxygen(p, 7), &[M::ChlorohexylEther]),
                when(|p| ester_oxygen(p, 7), &[M::ChlorohexylEster]),
            ]),
        ])],
    );

    t.add(
        "Cl-C-C-C-C-C-C-N",
        clauses![when(|p| straight(p, 1, 7), &[]).then(clauses![
            first_of(vec![
                when(|p| amine(p, 7), &[M::ChlorohexylAmine]),
                when(|p| amide_nitrogen(p, 7), &[M::ChlorohexylAmide]),
            ]),
        ])],
    );

    t.add(
        "Br-C-C-C-C-C-C-O",
        clauses![when(|p| straight(p, 1, 7), &[]).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 7), &[M::BromoHexanol]),
                when(|p| ether_oxygen(p, 7), &[M::BromohexylEther]),
                when(|p| ester_oxygen(p, 7), &[M::BromohexylEster]),
            ]),
        ])],
    );

    t.add(
        "Br-C-C-C-C-C-C-N",
        clauses![when(|p| straight(p, 1, 7), &[]).then(clauses![
            first_of(vec![
                when(|p| amine(p, 7), &[M::BromohexylAmine]),
                when(|p| amide_nitrogen(p, 7), &[M::BromohexylAmide]),
            ]),
        ])],
    );

    t.add(
        "F-C-C-C-C-C-C-O",
        clauses![when(|p| straight(p, 1, 7), &[]).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 7), &[M::FluoroHexanol]),
                when(|p| ester_oxygen(p, 7), &[M::FluorohexylEster]),
            ]),
        ])],
    );

    t.add(
        "F-C-C-C-C-C-C-N",
        clauses![when(|p| straight(p, 1, 7), &[]).then(clauses![
            when(|p| amine(p, 7), &[M::FluorohexylAmine]),
        ])],
    );

    t.add(
        "I-C-C-C-C-C-C-O",
        clauses![when(|p| straight(p, 1, 7), &[]).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 7), &[M::IodoHexanol]),
                when(|p| ester_oxygen(p, 7), &[M::IodohexylEster]),
            ]),
        ])],
    );

    t.add(
        "I-C-C-C-C-C-C-N",
        clauses![when(|p| straight(p, 1, 7), &[]).then(clauses![
            when(|p| amine(p, 7), &[M::IodohexylAmine]),
        ])],
    );

    t.add(
        "Cl-C-C-C-C-C-C-S",
        clauses![when(|p| straight(p, 1, 7), &[]).then(clauses![
            first_of(vec![
                when(|p| thiol(p, 7), &[M::ChloroHexanethiol]),
                when(|p| thioether(p, 7), &[M::ChlorohexylSulfide]),
            ]),
        ])],
    );

    t.add(
        "Br-C-C-C-C-C-C-S",
        clauses![when(|p| straight(p, 1, 7), &[]).then(clauses![
            first_of(vec![
                when(|p| thiol(p, 7), &[M::BromoHexanethiol]),
                when(|p| thioether(p, 7), &[M::BromohexylSulfide]),
            ]),
        ])],
    );

    t.add(
        "O-C-C-C-C-C-C-P",
        clauses![when(|p| straight(p, 1, 7), &[]).then(clauses![
            first_of(vec![
                when(|p| p.group(7) == G::PhosphonatePhosphorus && hydroxyl(p, 0), &[M::HydroxyhexylPhosphonate]),
                when(|p| p.group(7) == G::PhosphonatePhosphorus && ester_oxygen(p, 0), &[M::AcyloxyhexylPhosphonate]),
            ]),
        ])],
    );

    t.add(
        "N-C-C-C-C-C-C-P",
        clauses![when(|p| straight(p, 1, 7), &[]).then(clauses![
            when(|p| p.group(7) == G::PhosphonatePhosphorus && primary_amine(p, 0), &[M::AminohexylPhosphonate]),
        ])],
    );

    t.add("F-C-C-C-C-C-C-F", clauses![when(|p| straight(p, 1, 7), &[M::OneSixDifluorohexane])]);

    t.add("Cl-C-C-C-C-C-C-F", clauses![when(|p| straight(p, 1, 7), &[M::OneChloroSixFluorohexane])]);

    t.add("Br-C-C-C-C-C-C-F", clauses![when(|p| straight(p, 1, 7), &[M::OneBromoSixFluorohexane])]);

    t.add("F-C-C-C-C-C-C-I", clauses![when(|p| straight(p, 1, 7), &[M::OneFluoroSixIodohexane])]);

    t.add("Cl-C-C-C-C-C-C-Cl", clauses![when(|p| straight(p, 1, 7), &[M::OneSixDichlorohexane])]);

    t.add("Br-C-C-C-C-C-C-Cl", clauses![when(|p| straight(p, 1, 7), &[M::OneBromoSixChlorohexane])]);

    t.add("Cl-C-C-C-C-C-C-I", clauses![when(|p| straight(p, 1, 7), &[M::OneChloroSixIodohexane])]);

    t.add("Br-C-C-C-C-C-C-Br", clauses![when(|p| straight(p, 1, 7), &[M::OneSixDibromohexane])]);

    t.add("Br-C-C-C-C-C-C-I", clauses![when(|p| straight(p, 1, 7), &[M::OneBromoSixIodohexane])]);

    t.add("I-C-C-C-C-C-C-I", clauses![when(|p| straight(p, 1, 7), &[M::OneSixDiiodohexane])]);

    t.add(
        "C-C-O-C-C-O-C-C",
        clauses![when(
            |p| alkyl(p, 0) && straight(p, 1, 2) && straight(p, 3, 5) && alkyl(p, 7) && straight(p, 6, 7),
            &[M::OligoOxyethyleneChainTwoOxygensEndCapsTwoAndTwo],
        )],
    );

    t.add(
        "C-O-C-C-O-C-C-O",
        clauses![when(
            |p| alkyl(p, 0) && straight(p, 2, 4) && straight(p, 5, 7),
            &[M::OligoOxyethyleneChainThreeOxygensEndCapsZeroAndOne],
        )],
    );

    t.add(
        "C-C-O-C-C-C-O-C",
        clauses![when(
            |p| alkyl(p, 0) && straight(p, 1, 2) && straight(p, 3, 6) && alkyl(p, 7),
            &[M::OligoOxytrimethyleneChainTwoOxygensEndCapsOneAndTwo],
        )],
    );

    t.add(
        "C-O-C-C-C-C-O-C",
        clauses![when(
            |p| alkyl(p, 0) && straight(p, 2, 6) && alkyl(p, 7),
            &[M::OligoOxytetramethyleneChainTwoOxygensEndCapsOneAndOne],
        )],
    );

    t.add(
        "C-C-N-C-C-N-C-C",
        clauses![when(
            |p| alkyl(p, 0) && straight(p, 1, 2) && straight(p, 3, 5) && alkyl(p, 7) && straight(p, 6, 7),
            &[M::OligoIminoethyleneChainTwoNitrogensEndCapsTwoAndTwo],
        )],
    );

    t.add(
        "C-N-C-C-N-C-C-N",
        clauses![when(
            |p| alkyl(p, 0) && straight(p, 2, 4) && straight(p, 5, 7),
            &[M::OligoIminoethyleneChainThreeNitrogensEndCapsZeroAndOne],
        )],
    );

    t.add(
        "C-C-N-C-C-C-N-C",
        clauses![when(
            |p| alkyl(p, 0) && straight(p, 1, 2) && straight(p, 3, 6) && alkyl(p, 7),
            &[M::OligoIminotrimethyleneChainTwoNitrogensEndCapsOneAndTwo],
        )],
    );

    t.add(
        "C-N-C-C-C-C-N-C",
        clauses![when(
            |p| alkyl(p, 0) && straight(p, 2, 6) && alkyl(p, 7),
            &[M::OligoIminotetramethyleneChainTwoNitrogensEndCapsOneAndOne],
        )],
    );

    t.add(
        "C-C-S-C-C-S-C-C",
        clauses![when(
            |p| alkyl(p, 0) && straight(p, 1, 2) && straight(p, 3, 5) && alkyl(p, 7) && straight(p, 6, 7),
            &[M::OligoThioethyleneChainTwoSulfursEndCapsTwoAndTwo],
        )],
    );

    t.add(
        "C-S-C-C-S-C-C-S",
        clauses![when(
            |p| alkyl(p, 0) && straight(p, 2, 4) && straight(p, 5, 7),
            &[M::OligoThioethyleneChainThreeSulfursEndCapsZeroAndOne],
        )],
    );

    t.add(
        "C-C-S-C-C-C-S-C",
        clauses![when(
            |p| alkyl(p, 0) && straight(p, 1, 2) && straight(p, 3, 6) && alkyl(p, 7),
            &[M::OligoThiotrimethyleneChainTwoSulfursEndCapsOneAndTwo],
        )],
    );
}

fn nine(t: &mut RuleTable) {
    t.add(
        "C-C-C-C-C-C-C-C-O",
        clauses![when(|p| methyl(p, 0) && straight(p, 1, 8), &[]).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 8), &[M::NOctanol]),
                when(|p| ether_oxygen(p, 8), &[M::NOctyloxy]),
                when(|p| ester_oxygen(p, 8), &[M::NOctylEster]),
            ]),
        ])],
    );

    t.add(
        "C-C-C-C-C-C-C-C-N",
        clauses![when(|p| methyl(p, 0) && straight(p, 1, 8), &[]).then(clauses![
            first_of(vec![
                when(|p| primary_amine(p, 8), &[M::NOctylamine]),
                when(|p| substituted_amine(p, 8), &[M::NOctylamino]),
                when(|p| amide_nitrogen(p, 8), &[M::NOctylAmide]),
                when(|p| p.group(8) == G::QuaternaryNitrogen, &[M::NOctylammonium]),
            ]),
        ])],
    );

    t.add(
        "C-C-C-C-C-C-C-C-S",
        clauses![when(|p| methyl(p, 0) && straight(p, 1, 8), &[]).then(clauses![
            first_of(vec![
                when(|p| thiol(p, 8), &[M::NOctanethiol]),
                when(|p| thioether(p, 8), &[M::NOctylthio]),
                when(|p| sulfonyl(p, 8), &[M::NOctylsulfonyl]),
            ]),
        ])],
    );

    t.add(
        "C-C-C-C-C-C-C-C-P",
        clauses![when(|p| methyl(p, 0) && straight(p, 1, 8), &[]).then(clauses![
            first_of(vec![
                when(|p| p.group(8) == G::PhosphonatePhosphorus, &[M::NOctylphosphonate]),
                when(|p| p.group(8) == G::OtherPhosphorus, &[M::NOctylphosphine]),
            ]),
        ])],
    );

    t.add("C-C-C-C-C-C-C-C-Si", clauses![when(|p| methyl(p, 0) && straight(p, 1, 8), &[M::NOctylsilyl])]);

    t.add(
        "C-C-C-C-C-C-C-C-F",
        clauses![first_of(vec![
            when(|p| p.env(0).fluorine == 3 && fluorinated(p, 1, 8), &[M::Perfluorooctyl]),
            when(|p| methyl(p, 0) && straight(p, 1, 8), &[M::NOctylFluoride]),
        ])],
    );

    t.add("C-C-C-C-C-C-C-C-Cl", clauses![when(|p| methyl(p, 0) && straight(p, 1, 8), &[M::NOctylChloride])]);

    t.add("Br-C-C-C-C-C-C-C-C", clauses![when(|p| methyl(p, 8) && straight(p, 1, 8), &[M::NOctylBromide])]);

    t.add("C-C-C-C-C-C-C-C-I", clauses![when(|p| methyl(p, 0) && straight(p, 1, 8), &[M::NOctylIodide])]);

    t.add(
        "O-C-C-C-C-C-C-C-O",
        clauses![when(|p| straight(p, 1, 8), &[]).then(clauses![
            first_of(vec![
                when(|p| both_ends(p, hydroxyl), &[M::AlphaOmegaHeptanediol]),
                when(|p| ends_pair(p, hydroxyl, ether_oxygen), &[M::AlkoxyHeptanol]),
                when(|p| ends_pair(p, hydroxyl, ester_oxygen), &[M::HydroxyheptylEster]),
                when(|p| both_ends(p, ether_oxygen), &[M::DialkoxyHeptane]),
                when(|p| ends_pair(p, ether_oxygen, ester_oxygen), &[M::AlkoxyheptylEster]),
                when(|p| both_ends(p, ester_oxygen), &[M::HeptanediylDiester]),
            ]),
        ])],
    );

    t.add(
        "N-C-C-C-C-C-C-C-N",
        clauses![when(|p| straight(p, 1, 8), &[]).then(clauses![
            first_of(vec![
                when(|p| both_ends(p, primary_amine), &[M::AlphaOmegaHeptanediamine]),
                when(|p| ends_pair(p, primary_amine, substituted_amine), &[M::AlkylHeptanediamine]),
                when(|p| both_ends(p, substituted_amine), &[M::DialkylHeptanediamine]),
                when(|p| ends_pair(p, primary_amine, amide_nitrogen), &[M::AminoheptylAmide]),
                when(|p| both_ends(p, amide_nitrogen), &[M::HeptanediylBisamide]),
            ]),
        ])],
    );

    t.add(
        "N-C-C-C-C-C-C-C-O",
        clauses![when(|p| straight(p, 1, 8), &[]).then(clauses![
            first_of(vec![
                when(|p| primary_amine(p, 0) && hydroxyl(p, 8), &[M::AminoHeptanol]),
                when(|p| primary_amine(p, 0) && ether_oxygen(p, 8), &[M::AlkoxyheptylAmine]),
                when(|p| primary_amine(p, 0) && ester_oxygen(p, 8), &[M::AminoheptylEster]),
                when(|p| substituted_amine(p, 0) && hydroxyl(p, 8), &[M::AlkylaminoHeptanol]),
                when(|p| substituted_amine(p, 0) && ester_oxygen(p, 8), &[M::AlkylaminoheptylEster]),
                when(|p| quaternary_nitrogen(p, 0) && hydroxyl(p, 8), &[M::HydroxyheptylAmmonium]),
                when(|p| quaternary_nitrogen(p, 0) && ester_oxygen(p, 8), &[M::AcyloxyheptylAmmonium]),
                when(|p| amide_nitrogen(p, 0) && hydroxyl(p, 8), &[M::HydroxyheptylAmide]),
                when(|p| amide_nitrogen(p, 0) && ether_oxygen(p, 8), &[M::AlkoxyheptylAmide]),
                when(|p| amide_nitrogen(p, 0) && ester_oxygen(p, 8), &[M::AcyloxyheptylAmide]),
            ]),
        ])],
    );

    t.add(
        "N-C-C-C-C-C-C-C-S",
        clauses![when(|p| straight(p, 1, 8), &[]).then(clauses![
            first_of(vec![
                when(|p| primary_amine(p, 0) && thiol(p, 8), &[M::AminoHeptanethiol]),
                when(|p| primary_amine(p, 0) && thioether(p, 8), &[M::AlkylthioheptylAmine]),
                when(|p| primary_amine(p, 0) && sulfonyl(p, 8), &[M::AminoHeptanesulfonyl]),
                when(|p| amide_nitrogen(p, 0) && thiol(p, 8), &[M::MercaptoheptylAmide]),
                when(|p| amide_nitrogen(p, 0) && thioester_sulfur(p, 8), &[M::AcylthioheptylAmide]),
                when(|p| amide_nitrogen(p, 0) && thioether(p, 8), &[M::AlkylthioheptylAmide]),
                when(|p| amide_nitrogen(p, 0) && sulfonyl(p, 8), &[M::AcylaminoHeptanesulfonyl]),
            ]),
        ])],
    );

    t.add(
        "O-C-C-C-C-C-C-C-S",
        clauses![when(|p| straight(p, 1, 8), &[]).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 0) && thiol(p, 8), &[M::MercaptoHeptanol]),
                when(|p| hydroxyl(p, 0) && thioether(p, 8), &[M::AlkylthioHeptanol]),
                when(|p| hydroxyl(p, 0) && sulfonyl(p, 8), &[M::HydroxyHeptanesulfonyl]),
                when(|p| ether_oxygen(p, 0) && thioether(p, 8), &[M::AlkoxyheptylSulfide]),
                when(|p| ester_oxygen(p, 0) && thioether(p, 8), &[M::AcyloxyheptylSulfide]),
                when(|p| ester_oxygen(p, 0) && sulfonyl(p, 8), &[M::AcyloxyHeptanesulfonyl]),
            ]),
        ])],
    );

    t.add(
        "S-C-C-C-C-C-C-C-S",
        clauses![when(|p| straight(p, 1, 8), &[]).then(clauses![
            first_of(vec![
                when(|p| both_ends(p, thiol), &[M::AlphaOmegaHeptanedithiol]),
                when(|p| ends_pair(p, thiol, thioether), &[M::AlkylthioHeptanethiol]),
                when(|p| both_ends(p, thioether), &[M::BisalkylthioHeptane]),
            ]),
        ])],
    );

    t.add(
        "Cl-C-C-C-C-C-C-C-O",
        clauses![when(|p| straight(p, 1, 8), &[]).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 8), &[M::ChloroHeptanol]),
                when(|p| ether_oxygen(p, 8), &[M::ChloroheptylEther]),
                when(|p| ester_oxygen(p, 8), &[M::ChloroheptylEster]),
            ]),
        ])],
    );

    t.add(
        "Cl-C-C-C-C-C-C-C-N",
        clauses![when(|p| straight(p, 1, 8), &[]).then(clauses![
            first_of(vec![
                when(|p| amine(p, 8), &[M::ChloroheptylAmine]),
                when(|p| amide_nitrogen(p, 8), &[M::ChloroheptylAmide]),
            ]),
        ])],
    );

    t.add(
        "Br-C-C-C-C-C-C-C-O",
        clauses![when(|p| straight(p, 1, 8), &[]).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 8), &[M::BromoHeptanol]),
                when(|p| ether_oxygen(p, 8), &[M::BromoheptylEther]),
                when(|p| ester_oxygen(p, 8), &[M::BromoheptylEster]),
            ]),
        ])],
    );

    t.add(
        "Br-C-C-C-C-C-C-C-N",
        clauses![when(|p| straight(p, 1, 8), &[]).then(clauses![
            first_of(vec![
                when(|p| amine(p, 8), &[M::BromoheptylAmine]),
                when(|p| amide_nitrogen(p, 8), &[M::BromoheptylAmide]),
            ]),
        ])],
    );

    t.add(
        "F-C-C-C-C-C-C-C-O",
        clauses![when(|p| straight(p, 1, 8), &[]).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 8), &[M::FluoroHeptanol]),
                when(|p| ester_oxygen(p, 8), &[M::FluoroheptylEster]),
            ]),
        ])],
    );

    t.add(
        "F-C-C-C-C-C-C-C-N",
        clauses![when(|p| straight(p, 1, 8), &[]).then(clauses![
            when(|p| amine(p, 8), &[M::FluoroheptylAmine]),
        ])],
    );

    t.add(
        "I-C-C-C-C-C-C-C-O",
        clauses![when(|p| straight(p, 1, 8), &[]).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 8), &[M::IodoHeptanol]),
                when(|p| ester_oxygen(p, 8), &[M::IodoheptylEster]),
            ]),
        ])],
    );

    t.add(
        "I-C-C-C-C-C-C-C-N",
        clauses![when(|p| straight(p, 1, 8), &[]).then(clauses![
            when(|p| amine(p, 8), &[M::IodoheptylAmine]),
        ])],
    );

    t.add(
        "Cl-C-C-C-C-C-C-C-S",
        clauses![when(|p| straight(p, 1, 8), &[]).then(clauses![
            first_of(vec![
                when(|p| thiol(p, 8), &[M::ChloroHeptanethiol]),
                when(|p| thioether(p, 8), &[M::ChloroheptylSulfide]),
            ]),
        ])],
    );

    t.add(
        "Br-C-C-C-C-C-C-C-S",
        clauses![when(|p| straight(p, 1, 8), &[]).then(clauses![
            first_of(vec![
                when(|p| thiol(p, 8), &[M::BromoHeptanethiol]),
                when(|p| thioether(p, 8), &[M::BromoheptylSulfide]),
            ]),
        ])],
    );

    t.add(
        "O-C-C-C-C-C-C-C-P",
        clauses![when(|p| straight(p, 1, 8), &[]).then(clauses![
            first_of(vec![
                when(|p| p.group(8) == G::PhosphonatePhosphorus && hydroxyl(p, 0), &[M::HydroxyheptylPhosphonate]),
                when(
                    |p| p.group(8) == G::PhosphonatePhosphorus && ester_oxygen(p, 0),
                    &[M::AcyloxyheptylPhosphonate],
                ),
            ]),
        ])],
    );

    t.add(
        "N-C-C-C-C-C-C-C-P",
        clauses![when(|p| straight(p, 1, 8), &[]).then(clauses![
            when(|p| p.group(8) == G::PhosphonatePhosphorus && primary_amine(p, 0), &[M::AminoheptylPhosphonate]),
        ])],
    );

    t.add("F-C-C-C-C-C-C-C-F", clauses![when(|p| straight(p, 1, 8), &[M::OneSevenDifluoroheptane])]);

    t.add("Cl-C-C-C-C-C-C-C-F", clauses![when(|p| straight(p, 1, 8), &[M::OneChloroSevenFluoroheptane])]);

    t.add("Br-C-C-C-C-C-C-C-F", clauses![when(|p| straight(p, 1, 8), &[M::OneBromoSevenFluoroheptane])]);

    t.add("F-C-C-C-C-C-C-C-I", clauses![when(|p| straight(p, 1, 8), &[M::OneFluoroSevenIodoheptane])]);

    t.add("Cl-C-C-C-C-C-C-C-Cl", clauses![when(|p| straight(p, 1, 8), &[M::OneSevenDichloroheptane])]);

    t.add("Br-C-C-C-C-C-C-C-Cl", clauses![when(|p| straight(p, 1, 8), &[M::OneBromoSevenChloroheptane])]);

    t.add("Cl-C-C-C-C-C-C-C-I", clauses![when(|p| straight(p, 1, 8), &[M::OneChloroSevenIodoheptane])]);

    t.add("Br-C-C-C-C-C-C-C-Br", clauses![when(|p| straight(p, 1, 8), &[M::OneSevenDibromoheptane])]);

    t.add("Br-C-C-C-C-C-C-C-I", clauses![when(|p| straight(p, 1, 8), &[M::OneBromoSevenIodoheptane])]);

    t.add("I-C-C-C-C-C-C-C-I", clauses![when(|p| straight(p, 1, 8), &[M::OneSevenDiiodoheptane])]);

    t.add(
        "C-C-O-C-C-O-C-C-O",
        clauses![when(
            |p| alkyl(p, 0) && straight(p, 1, 2) && straight(p, 3, 5) && straight(p, 6, 8),
            &[M::OligoOxyethyleneChainThreeOxygensEndCapsZeroAndTwo],
        )],
    );

    t.add(
        "C-O-C-C-O-C-C-O-C",
        clauses![when(
            |p| alkyl(p, 0) && straight(p, 2, 4) && straight(p, 5, 7) && alkyl(p, 8),
            &[M::OligoOxyethyleneChainThreeOxygensEndCapsOneAndOne],
        )],
    );

    t.add(
        "C-C-O-C-C-C-O-C-C",
        clauses![when(
            |p| alkyl(p, 0) && straight(p, 1, 2) && straight(p, 3, 6) && alkyl(p, 8) && straight(p, 7, 8),
            &[M::OligoOxytrimethyleneChainTwoOxygensEndCapsTwoAndTwo],
        )],
    );

    t.add(
        "O-C-C-C-O-C-C-C-O",
        clauses![when(
            |p| straight(p, 1, 4) && straight(p, 5, 8),
            &[M::OligoOxytrimethyleneChainThreeOxygensEndCapsZeroAndZero],
        )],
    );

    t.add(
        "C-C-O-C-C-C-C-O-C",
        clauses![when(
            |p| alkyl(p, 0) && straight(p, 1, 2) && straight(p, 3, 7) && alkyl(p, 8),
            &[M::OligoOxytetramethyleneChainTwoOxygensEndCapsOneAndTwo],
        )],
    );

    t.add(
        "C-C-N-C-C-N-C-C-N",
        clauses![when(
            |p| alkyl(p, 0) && straight(p, 1, 2) && straight(p, 3, 5) && straight(p, 6, 8),
            &[M::OligoIminoethyleneChainThreeNitrogensEndCapsZeroAndTwo],
        )],
    );

    t.add(
        "C-N-C-C-N-C-C-N-C",
        clauses![when(
            |p| alkyl(p, 0) && straight(p, 2, 4) && straight(p, 5, 7) && alkyl(p, 8),
            &[M::OligoIminoethyleneChainThreeNitrogensEndCapsOneAndOne],
        )],
    );

    t.add(
        "C-C-N-C-C-C-N-C-C",
        clauses![when(
            |p| alkyl(p, 0) && straight(p, 1, 2) && straight(p, 3, 6) && alkyl(p, 8) && straight(p, 7, 8),
            &[M::OligoIminotrimethyleneChainTwoNitrogensEndCapsTwoAndTwo],
        )],
    );

    t.add(
        "N-C-C-C-N-C-C-C-N",
        clauses![when(
            |p| straight(p, 1, 4) && straight(p, 5, 8),
            &[M::OligoIminotrimethyleneChainThreeNitrogensEndCapsZeroAndZero],
        )],
    );

    t.add(
        "C-C-N-C-C-C-C-N-C",
        clauses![when(
            |p| alkyl(p, 0) && straight(p, 1, 2) && straight(p, 3, 7) && alkyl(p, 8),
            &[M::OligoIminotetramethyleneChainTwoNitrogensEndCapsOneAndTwo],
        )],
    );

    t.add(
        "C-C-S-C-C-S-C-C-S",
        clauses![when(
            |p| alkyl(p, 0) && straight(p, 1, 2) && straight(p, 3, 5) && straight(p, 6, 8),
            &[M::OligoThioethyleneChainThreeSulfursEndCapsZeroAndTwo],
        )],
    );

    t.add(
        "C-S-C-C-S-C-C-S-C",
        clauses![when(
            |p| alkyl(p, 0) && straight(p, 2, 4) && straight(p, 5, 7) && alkyl(p, 8),
            &[M::OligoThioethyleneChainThreeSulfursEndCapsOneAndOne],
        )],
    );

    t.add(
        "C-C-S-C-C-C-S-C-C",
        clauses![when(
            |p| alkyl(p, 0) && straight(p, 1, 2) && straight(p, 3, 6) && alkyl(p, 8) && straight(p, 7, 8),
            &[M::OligoThiotrimethyleneChainTwoSulfursEndCapsTwoAndTwo],
        )],
    );

    t.add(
        "S-C-C-C-S-C-C-C-S",
        clauses![when(
            |p| straight(p, 1, 4) && straight(p, 5, 8),
            &[M::OligoThiotrimethyleneChainThreeSulfursEndCapsZeroAndZero],
        )],
    );
}

fn ten(t: &mut RuleTable) {
    t.add(
        "C-C-C-C-C-C-C-C-C-O",
        clauses![when(|p| methyl(p, 0) && straight(p, 1, 9), &[]).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 9), &[M::NNonanol]),
                when(|p| ether_oxygen(p, 9), &[M::NNonyloxy]),
                when(|p| ester_oxygen(p, 9), &[M::NNonylEster]),
            ]),
        ])],
    );

    t.add(
        "C-C-C-C-C-C-C-C-C-N",
        clauses![when(|p| methyl(p, 0) && straight(p, 1, 9), &[]).then(clauses![
            first_of(vec![
                when(|p| primary_amine(p, 9), &[M::NNonylamine]),
                when(|p| substituted_amine(p, 9), &[M::NNonylamino]),
                when(|p| amide_nitrogen(p, 9), &[M::NNonylAmide]),
                when(|p| p.group(9) == G::QuaternaryNitrogen, &[M::NNonylammonium]),
            ]),
        ])],
    );

    t.add(
        "C-C-C-C-C-C-C-C-C-S",
        clauses![when(|p| methyl(p, 0) && straight(p, 1, 9), &[]).then(clauses![
            first_of(vec![
                when(|p| thiol(p, 9), &[M::NNonanethiol]),
                when(|p| thioether(p, 9), &[M::NNonylthio]),
                when(|p| sulfonyl(p, 9), &[M::NNonylsulfonyl]),
            ]),
        ])],
    );

    t.add(
        "C-C-C-C-C-C-C-C-C-P",
        clauses![when(|p| methyl(p, 0) && straight(p, 1, 9), &[]).then(clauses![
            first_of(vec![
                when(|p| p.group(9) == G::PhosphonatePhosphorus, &[M::NNonylphosphonate]),
                when(|p| p.group(9) == G::OtherPhosphorus, &[M::NNonylphosphine]),
            ]),
        ])],
    );

    t.add("C-C-C-C-C-C-C-C-C-Si", clauses![when(|p| methyl(p, 0) && straight(p, 1, 9), &[M::NNonylsilyl])]);

    t.add(
        "C-C-C-C-C-C-C-C-C-F",
        clauses![first_of(vec![
            when(|p| p.env(0).fluorine == 3 && fluorinated(p, 1, 9), &[M::Perfluorononyl]),
            when(|p| methyl(p, 0) && straight(p, 1, 9), &[M::NNonylFluoride]),
        ])],
    );

    t.add("C-C-C-C-C-C-C-C-C-Cl", clauses![when(|p| methyl(p, 0) && straight(p, 1, 9), &[M::NNonylChloride])]);

    t.add("Br-C-C-C-C-C-C-C-C-C", clauses![when(|p| methyl(p, 9) && straight(p, 1, 9), &[M::NNonylBromide])]);

    t.add("C-C-C-C-C-C-C-C-C-I", clauses![when(|p| methyl(p, 0) && straight(p, 1, 9), &[M::NNonylIodide])]);

    t.add(
        "O-C-C-C-C-C-C-C-C-O",
        clauses![when(|p| straight(p, 1, 9), &[]).then(clauses![
            first_of(vec![
                when(|p| both_ends(p, hydroxyl), &[M::AlphaOmegaOctanediol]),
                when(|p| ends_pair(p, hydroxyl, ether_oxygen), &[M::AlkoxyOctanol]),
                when(|p| ends_pair(p, hydroxyl, ester_oxygen), &[M::HydroxyoctylEster]),
                when(|p| both_ends(p, ether_oxygen), &[M::DialkoxyOctane]),
                when(|p| ends_pair(p, ether_oxygen, ester_oxygen), &[M::AlkoxyoctylEster]),
                when(|p| both_ends(p, ester_oxygen), &[M::OctanediylDiester]),
            ]),
        ])],
    );

    t.add(
        "N-C-C-C-C-C-C-C-C-N",
        clauses![when(|p| straight(p, 1, 9), &[]).then(clauses![
            first_of(vec![
                when(|p| both_ends(p, primary_amine), &[M::AlphaOmegaOctanediamine]),
                when(|p| ends_pair(p, primary_amine, substituted_amine), &[M::AlkylOctanediamine]),
                when(|p| both_ends(p, substituted_amine), &[M::DialkylOctanediamine]),
                when(|p| ends_pair(p, primary_amine, amide_nitrogen), &[M::AminooctylAmide]),
                when(|p| both_ends(p, amide_nitrogen), &[M::OctanediylBisamide]),
            ]),
        ])],
    );

    t.add(
        "N-C-C-C-C-C-C-C-C-O",
        clauses![when(|p| straight(p, 1, 9), &[]).then(clauses![
            first_of(vec![
                when(|p| primary_amine(p, 0) && hydroxyl(p, 9), &[M::AminoOctanol]),
                when(|p| primary_amine(p, 0) && ether_oxygen(p, 9), &[M::AlkoxyoctylAmine]),
                when(|p| primary_amine(p, 0) && ester_oxygen(p, 9), &[M::AminooctylEster]),
                when(|p| substituted_amine(p, 0) && hydroxyl(p, 9), &[M::AlkylaminoOctanol]),
                when(|p| substituted_amine(p, 0) && ester_oxygen(p, 9), &[M::AlkylaminooctylEster]),
                when(|p| quaternary_nitrogen(p, 0) && hydroxyl(p, 9), &[M::HydroxyoctylAmmonium]),
                when(|p| quaternary_nitrogen(p, 0) && ester_oxygen(p, 9), &[M::AcyloxyoctylAmmonium]),
                when(|p| amide_nitrogen(p, 0) && hydroxyl(p, 9), &[M::HydroxyoctylAmide]),
                when(|p| amide_nitrogen(p, 0) && ether_oxygen(p, 9), &[M::AlkoxyoctylAmide]),
                when(|p| amide_nitrogen(p, 0) && ester_oxygen(p, 9), &[M::AcyloxyoctylAmide]),
            ]),
        ])],
    );

    t.add(
        "N-C-C-C-C-C-C-C-C-S",
        clauses![when(|p| straight(p, 1, 9), &[]).then(clauses![
            first_of(vec![
                when(|p| primary_amine(p, 0) && thiol(p, 9), &[M::AminoOctanethiol]),
                when(|p| primary_amine(p, 0) && thioether(p, 9), &[M::AlkylthiooctylAmine]),
                when(|p| primary_amine(p, 0) && sulfonyl(p, 9), &[M::AminoOctanesulfonyl]),
                when(|p| amide_nitrogen(p, 0) && thiol(p, 9), &[M::MercaptooctylAmide]),
                when(|p| amide_nitrogen(p, 0) && thioester_sulfur(p, 9), &[M::AcylthiooctylAmide]),
                when(|p| amide_nitrogen(p, 0) && thioether(p, 9), &[M::AlkylthiooctylAmide]),
                when(|p| amide_nitrogen(p, 0) && sulfonyl(p, 9), &[M::AcylaminoOctanesulfonyl]),
            ]),
        ])],
    );

    t.add(
        "O-C-C-C-C-C-C-C-C-S",
        clauses![when(|p| straight(p, 1, 9), &[]).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 0) && thiol(p, 9), &[M::MercaptoOctanol]),
                when(|p| hydroxyl(p, 0) && thioether(p, 9), &[M::AlkylthioOctanol]),
                when(|p| hydroxyl(p, 0) && sulfonyl(p, 9), &[M::HydroxyOctanesulfonyl]),
                when(|p| ether_oxygen(p, 0) && thioether(p, 9), &[M::AlkoxyoctylSulfide]),
                when(|p| ester_oxygen(p, 0) && thioether(p, 9), &[M::AcyloxyoctylSulfide]),
                when(|p| ester_oxygen(p, 0) && sulfonyl(p, 9), &[M::AcyloxyOctanesulfonyl]),
            ]),
        ])],
    );

    t.add(
        "S-C-C-C-C-C-C-C-C-S",
        clauses![when(|p| straight(p, 1, 9), &[]).then(clauses![
            first_of(vec![
                when(|p| both_ends(p, thiol), &[M::AlphaOmegaOctanedithiol]),
                when(|p| ends_pair(p, thiol, thioether), &[M::AlkylthioOctanethiol]),
                when(|p| both_ends(p, thioether), &[M::BisalkylthioOctane]),
            ]),
        ])],
    );

    t.add(
        "Cl-C-C-C-C-C-C-C-C-O",
        clauses![when(|p| straight(p, 1, 9), &[]).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 9), &[M::ChloroOctanol]),
                when(|p| ether_oxygen(p, 9), &[M::ChlorooctylEther]),
                when(|p| ester_oxygen(p, 9), &[M::ChlorooctylEster]),
            ]),
        ])],
    );

    t.add(
        "Cl-C-C-C-C-C-C-C-C-N",
        clauses![when(|p| straight(p, 1, 9), &[]).then(clauses![
            first_of(vec![
                when(|p| amine(p, 9), &[M::ChlorooctylAmine]),
                when(|p| amide_nitrogen(p, 9), &[M::ChlorooctylAmide]),
            ]),
        ])],
    );

    t.add(
        "Br-C-C-C-C-C-C-C-C-O",
        clauses![when(|p| straight(p, 1, 9), &[]).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 9), &[M::BromoOctanol]),
                when(|p| ether_oxygen(p, 9), &[M::BromooctylEther]),
                when(|p| ester_oxygen(p, 9), &[M::BromooctylEster]),
            ]),
        ])],
    );

    t.add(
        "Br-C-C-C-C-C-C-C-C-N",
        clauses![when(|p| straight(p, 1, 9), &[]).then(clauses![
            first_of(vec![
                when(|p| amine(p, 9), &[M::BromooctylAmine]),
                when(|p| amide_nitrogen(p, 9), &[M::BromooctylAmide]),
            ]),
        ])],
    );

    t.add(
        "F-C-C-C-C-C-C-C-C-O",
        clauses![when(|p| straight(p, 1, 9), &[]).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 9), &[M::FluoroOctanol]),
                when(|p| ester_oxygen(p, 9), &[M::FluorooctylEster]),
            ]),
        ])],
    );

    t.add(
        "F-C-C-C-C-C-C-C-C-N",
        clauses![when(|p| straight(p, 1, 9), &[]).then(clauses![
            when(|p| amine(p, 9), &[M::FluorooctylAmine]),
        ])],
    );

    t.add(
        "I-C-C-C-C-C-C-C-C-O",
        clauses![when(|p| straight(p, 1, 9), &[]).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 9), &[M::IodoOctanol]),
                when(|p| ester_oxygen(p, 9), &[M::IodooctylEster]),
            ]),
        ])],
    );

    t.add(
        "I-C-C-C-C-C-C-C-C-N",
        clauses![when(|p| straight(p, 1, 9), &[]).then(clauses![
            when(|p| amine(p, 9), &[M::IodooctylAmine]),
        ])],
    );

    t.add(
        "Cl-C-C-C-C-C-C-C-C-S",
        clauses![when(|p| straight(p, 1, 9), &[]).then(clauses![
            first_of(vec![
                when(|p| thiol(p, 9), &[M::ChloroOctanethiol]),
                when(|p| thioether(p, 9), &[M::ChlorooctylSulfide]),
            ]),
        ])],
    );

    t.add(
        "Br-C-C-C-C-C-C-C-C-S",
        clauses![when(|p| straight(p, 1, 9), &[]).then(clauses![
            first_of(vec![
                when(|p| thiol(p, 9), &[M::BromoOctanethiol]),
                when(|p| thioether(p, 9), &[M::BromooctylSulfide]),
            ]),
        ])],
    );

    t.add(
        "O-C-C-C-C-C-C-C-C-P",
        clauses![when(|p| straight(p, 1, 9), &[]).then(clauses![
            first_of(vec![
                when(|p| p.group(9) == G::PhosphonatePhosphorus && hydroxyl(p, 0), &[M::HydroxyoctylPhosphonate]),
                when(|p| p.group(9) == G::PhosphonatePhosphorus && ester_oxygen(p, 0), &[M::AcyloxyoctylPhosphonate]),
            ]),
        ])],
    );

    t.add(
        "N-C-C-C-C-C-C-C-C-P",
        clauses![when(|p| straight(p, 1, 9), &[]).then(clauses![
            when(|p| p.group(9) == G::PhosphonatePhosphorus && primary_amine(p, 0), &[M::AminooctylPhosphonate]),
        ])],
    );

    t.add("F-C-C-C-C-C-C-C-C-F", clauses![when(|p| straight(p, 1, 9), &[M::OneEightDifluorooctane])]);

    t.add("Cl-C-C-C-C-C-C-C-C-F", clauses![when(|p| straight(p, 1, 9), &[M::OneChloroEightFluorooctane])]);

    t.add("Br-C-C-C-C-C-C-C-C-F", clauses![when(|p| straight(p, 1, 9), &[M::OneBromoEightFluorooctane])]);

    t.add("F-C-C-C-C-C-C-C-C-I", clauses![when(|p| straight(p, 1, 9), &[M::OneFluoroEightIodooctane])]);

    t.add("Cl-C-C-C-C-C-C-C-C-Cl", clauses![when(|p| straight(p, 1, 9), &[M::OneEightDichlorooctane])]);

    t.add("Br-C-C-C-C-C-C-C-C-Cl", clauses![when(|p| straight(p, 1, 9), &[M::OneBromoEightChlorooctane])]);

    t.add("Cl-C-C-C-C-C-C-C-C-I", clauses![when(|p| straight(p, 1, 9), &[M::OneChloroEightIodooctane])]);

    t.add("Br-C-C-C-C-C-C-C-C-Br", clauses![when(|p| straight(p, 1, 9), &[M::OneEightDibromooctane])]);

    t.add("Br-C-C-C-C-C-C-C-C-I", clauses![when(|p| straight(p, 1, 9), &[M::OneBromoEightIodooctane])]);

    t.add("I-C-C-C-C-C-C-C-C-I", clauses![when(|p| straight(p, 1, 9), &[M::OneEightDiiodooctane])]);

    t.add(
        "C-C-O-C-C-O-C-C-O-C",
        clauses![when(
            |p| alkyl(p, 0) && straight(p, 1, 2) && straight(p, 3, 5) && straight(p, 6, 8) && alkyl(p, 9),
            &[M::OligoOxyethyleneChainThreeOxygensEndCapsOneAndTwo],
        )],
    );

    t.add(
        "O-C-C-O-C-C-O-C-C-O",
        clauses![when(
            |p| straight(p, 1, 3) && straight(p, 4, 6) && straight(p, 7, 9),
            &[M::OligoOxyethyleneChainFourOxygensEndCapsZeroAndZero],
        )],
    );

    t.add(
        "C-O-C-C-C-O-C-C-C-O",
        clauses![when(
            |p| alkyl(p, 0) && straight(p, 2, 5) && straight(p, 6, 9),
            &[M::OligoOxytrimethyleneChainThreeOxygensEndCapsZeroAndOne],
        )],
    );

    t.add(
        "C-C-O-C-C-C-C-O-C-C",
        clauses![when(
            |p| alkyl(p, 0) && straight(p, 1, 2) && straight(p, 3, 7) && alkyl(p, 9) && straight(p, 8, 9),
            &[M::OligoOxytetramethyleneChainTwoOxygensEndCapsTwoAndTwo],
        )],
    );

    t.add(
        "C-C-N-C-C-N-C-C-N-C",
        clauses![when(
            |p| alkyl(p, 0) && straight(p, 1, 2) && straight(p, 3, 5) && straight(p, 6, 8) && alkyl(p, 9),
            &[M::OligoIminoethyleneChainThreeNitrogensEndCapsOneAndTwo],
        )],
    );

    t.add(
        "N-C-C-N-C-C-N-C-C-N",
        clauses![when(
            |p| straight(p, 1, 3) && straight(p, 4, 6) && straight(p, 7, 9),
            &[M::OligoIminoethyleneChainFourNitrogensEndCapsZeroAndZero],
        )],
    );

    t.add(
        "C-N-C-C-C-N-C-C-C-N",
        clauses![when(
            |p| alkyl(p, 0) && straight(p, 2, 5) && straight(p, 6, 9),
            &[M::OligoIminotrimethyleneChainThreeNitrogensEndCapsZeroAndOne],
        )],
    );

    t.add(
        "C-C-N-C-C-C-C-N-C-C",
        clauses![when(
            |p| alkyl(p, 0) && straight(p, 1, 2) && straight(p, 3, 7) && alkyl(p, 9) && straight(p, 8, 9),
            &[M::OligoIminotetramethyleneChainTwoNitrogensEndCapsTwoAndTwo],
        )],
    );

    t.add(
        "C-C-S-C-C-S-C-C-S-C",
        clauses![when(
            |p| alkyl(p, 0) && straight(p, 1, 2) && straight(p, 3, 5) && straight(p, 6, 8) && alkyl(p, 9),
            &[M::OligoThioethyleneChainThreeSulfursEndCapsOneAndTwo],
        )],
    );

    t.add(
        "S-C-C-S-C-C-S-C-C-S",
        clauses![when(
            |p| straight(p, 1, 3) && straight(p, 4, 6) && straight(p, 7, 9),
            &[M::OligoThioethyleneChainFourSulfursEndCapsZeroAndZero],
        )],
    );

    t.add(
        "C-S-C-C-C-S-C-C-C-S",
        clauses![when(
            |p| alkyl(p, 0) && straight(p, 2, 5) && straight(p, 6, 9),
            &[M::OligoThiotrimethyleneChainThreeSulfursEndCapsZeroAndOne],
        )],
    );

    t.add(
        "N-C-C-O-C-C-O-C-C-O",
        clauses![when(
            |p| straight(p, 1, 3) && straight(p, 4, 6) && straight(p, 7, 9),
            &[M::NOOOEthyleneLinkedHeteroatomChain],
        )],
    );

    t.add(
        "O-C-C-O-C-C-O-C-C-S",
        clauses![when(
            |p| straight(p, 1, 3) && straight(p, 4, 6) && straight(p, 7, 9),
            &[M::OOOSEthyleneLinkedHeteroatomChain],
        )],
    );

    t.add(
        "O-C-C-N-C-C-O-C-C-O",
        clauses![when(
            |p| straight(p, 1, 3) && straight(p, 4, 6) && straight(p, 7, 9),
            &[M::ONOOEthyleneLinkedHeteroatomChain],
        )],
    );

    t.add(
        "N-C-C-N-C-C-O-C-C-O",
        clauses![when(
            |p| straight(p, 1, 3) && straight(p, 4, 6) && straight(p, 7, 9),
            &[M::NNOOEthyleneLinkedHeteroatomChain],
        )],
    );

    t.add(
        "O-C-C-O-C-C-N-C-C-S",
        clauses![when(
            |p| straight(p, 1, 3) && straight(p, 4, 6) && straight(p, 7, 9),
            &[M::OONSEthyleneLinkedHeteroatomChain],
        )],
    );

    t.add(
        "O-C-C-O-C-C-S-C-C-O",
        clauses![when(
            |p| straight(p, 1, 3) && straight(p, 4, 6) && straight(p, 7, 9),
            &[M::OOSOEthyleneLinkedHeteroatomChain],
        )],
    );

    t.add(
        "N-C-C-S-C-C-O-C-C-O",
        clauses![when(
            |p| straight(p, 1, 3) && straight(p, 4, 6) && straight(p, 7, 9),
            &[M::NSOOEthyleneLinkedHeteroatomChain],
        )],
    );

    t.add(
        "O-C-C-O-C-C-S-C-C-S",
        clauses![when(
            |p| straight(p, 1, 3) && straight(p, 4, 6) && straight(p, 7, 9),
            &[M::OOSSEthyleneLinkedHeteroatomChain],
        )],
    );

    t.add(
        "N-C-C-O-C-C-N-C-C-O",
        clauses![when(
            |p| straight(p, 1, 3) && straight(p, 4, 6) && straight(p, 7, 9),
            &[M::NONOEthyleneLinkedHeteroatomChain],
        )],
    );

    t.add(
        "O-C-C-N-C-C-O-C-C-S",
        clauses![when(
            |p| straight(p, 1, 3) && straight(p, 4, 6) && straight(p, 7, 9),
            &[M::ONOSEthyleneLinkedHeteroatomChain],
        )],
    );

    t.add(
        "O-C-C-N-C-C-N-C-C-O",
        clauses![when(
            |p| straight(p, 1, 3) && straight(p, 4, 6) && straight(p, 7, 9),
            &[M::ONNOEthyleneLinkedHeteroatomChain],
        )],
    );

    t.add(
        "N-C-C-N-C-C-N-C-C-O",
        clauses![when(
            |p| straight(p, 1, 3) && straight(p, 4, 6) && straight(p, 7, 9),
            &[M::NNNOEthyleneLinkedHeteroatomChain],
        )],
    );

    t.add(
        "O-C-C-N-C-C-N-C-C-S",
        clauses![when(
            |p| straight(p, 1, 3) && straight(p, 4, 6) && straight(p, 7, 9),
            &[M::ONNSEthyleneLinkedHeteroatomChain],
        )],
    );

    t.add(
        "O-C-C-N-C-C-S-C-C-O",
        clauses![when(
            |p| straight(p, 1, 3) && straight(p, 4, 6) && straight(p, 7, 9),
            &[M::ONSOEthyleneLinkedHeteroatomChain],
        )],
    );

    t.add(
        "N-C-C-S-C-C-N-C-C-O",
        clauses![when(
            |p| straight(p, 1, 3) && straight(p, 4, 6) && straight(p, 7, 9),
            &[M::NSNOEthyleneLinkedHeteroatomChain],
        )],
    );

    t.add(
        "O-C-C-N-C-C-S-C-C-S",
        clauses![when(
            |p| straight(p, 1, 3) && straight(p, 4, 6) && straight(p, 7, 9),
            &[M::ONSSEthyleneLinkedHeteroatomChain],
        )],
    );

    t.add(
        "N-C-C-O-C-C-S-C-C-O",
        clauses![when(
            |p| straight(p, 1, 3) && straight(p, 4, 6) && straight(p, 7, 9),
            &[M::NOSOEthyleneLinkedHeteroatomChain],
        )],
    );

    t.add(
        "O-C-C-S-C-C-O-C-C-S",
        clauses![when(
            |p| straight(p, 1, 3) && straight(p, 4, 6) && straight(p, 7, 9),
            &[M::OSOSEthyleneLinkedHeteroatomChain],
        )],
    );

    t.add(
        "N-C-C-N-C-C-S-C-C-O",
        clauses![when(
            |p| straight(p, 1, 3) && straight(p, 4, 6) && straight(p, 7, 9),
            &[M::NNSOEthyleneLinkedHeteroatomChain],
        )],
    );

    t.add(
        "O-C-C-S-C-C-N-C-C-S",
        clauses![when(
            |p| straight(p, 1, 3) && straight(p, 4, 6) && straight(p, 7, 9),
            &[M::OSNSEthyleneLinkedHeteroatomChain],
        )],
    );

    t.add(
        "O-C-C-S-C-C-S-C-C-O",
        clauses![when(
            |p| straight(p, 1, 3) && straight(p, 4, 6) && straight(p, 7, 9),
            &[M::OSSOEthyleneLinkedHeteroatomChain],
        )],
    );

    t.add(
        "N-C-C-S-C-C-S-C-C-O",
        clauses![when(
            |p| straight(p, 1, 3) && straight(p, 4, 6) && straight(p, 7, 9),
            &[M::NSSOEthyleneLinkedHeteroatomChain],
        )],
    );

    t.add(
        "O-C-C-S-C-C-S-C-C-S",
        clauses![when(
            |p| straight(p, 1, 3) && straight(p, 4, 6) && straight(p, 7, 9),
            &[M::OSSSEthyleneLinkedHeteroatomChain],
        )],
    );

    t.add(
        "N-C-C-O-C-C-O-C-C-N",
        clauses![when(
            |p| straight(p, 1, 3) && straight(p, 4, 6) && straight(p, 7, 9),
            &[M::NOONEthyleneLinkedHeteroatomChain],
        )],
    );

    t.add(
        "N-C-C-O-C-C-O-C-C-S",
        clauses![when(
            |p| straight(p, 1, 3) && straight(p, 4, 6) && straight(p, 7, 9),
            &[M::NOOSEthyleneLinkedHeteroatomChain],
        )],
    );

    t.add(
        "N-C-C-N-C-C-O-C-C-N",
        clauses![when(
            |p| straight(p, 1, 3) && straight(p, 4, 6) && straight(p, 7, 9),
            &[M::NNONEthyleneLinkedHeteroatomChain],
        )],
    );

    t.add(
        "N-C-C-O-C-C-N-C-C-S",
        clauses![when(
            |p| straight(p, 1, 3) && straight(p, 4, 6) && straight(p, 7, 9),
            &[M::NONSEthyleneLinkedHeteroatomChain],
        )],
    );

    t.add(
        "N-C-C-O-C-C-S-C-C-N",
        clauses![when(
            |p| straight(p, 1, 3) && straight(p, 4, 6) && straight(p, 7, 9),
            &[M::NOSNEthyleneLinkedHeteroatomChain],
        )],
    );

    t.add(
        "N-C-C-O-C-C-S-C-C-S",
        clauses![when(
            |p| straight(p, 1, 3) && straight(p, 4, 6) && straight(p, 7, 9),
            &[M::NOSSEthyleneLinkedHeteroatomChain],
        )],
    );

    t.add(
        "N-C-C-N-C-C-O-C-C-S",
        clauses![when(
            |p| straight(p, 1, 3) && straight(p, 4, 6) && straight(p, 7, 9),
            &[M::NNOSEthyleneLinkedHeteroatomChain],
        )],
    );

    t.add(
        "N-C-C-N-C-C-N-C-C-S",
        clauses![when(
            |p| straight(p, 1, 3) && straight(p, 4, 6) && straight(p, 7, 9),
            &[M::NNNSEthyleneLinkedHeteroatomChain],
        )],
    );

    t.add(
        "N-C-C-N-C-C-S-C-C-N",
        clauses![when(
            |p| straight(p, 1, 3) && straight(p, 4, 6) && straight(p, 7, 9),
            &[M::NNSNEthyleneLinkedHeteroatomChain],
        )],
    );

    t.add(
        "N-C-C-N-C-C-S-C-C-S",
        clauses![when(
            |p| straight(p, 1, 3) && straight(p, 4, 6) && straight(p, 7, 9),
            &[M::NNSSEthyleneLinkedHeteroatomChain],
        )],
    );

    t.add(
        "N-C-C-S-C-C-O-C-C-S",
        clauses![when(
            |p| straight(p, 1, 3) && straight(p, 4, 6) && straight(p, 7, 9),
            &[M::NSOSEthyleneLinkedHeteroatomChain],
        )],
    );

    t.add(
        "N-C-C-S-C-C-N-C-C-S",
        clauses![when(
            |p| straight(p, 1, 3) && straight(p, 4, 6) && straight(p, 7, 9),
            &[M::NSNSEthyleneLinkedHeteroatomChain],
        )],
    );

    t.add(
        "N-C-C-S-C-C-S-C-C-N",
        clauses![when(
            |p| straight(p, 1, 3) && straight(p, 4, 6) && straight(p, 7, 9),
            &[M::NSSNEthyleneLinkedHeteroatomChain],
        )],
    );

    t.add(
        "N-C-C-S-C-C-S-C-C-S",
        clauses![when(
            |p| straight(p, 1, 3) && straight(p, 4, 6) && straight(p, 7, 9),
            &[M::NSSSEthyleneLinkedHeteroatomChain],
        )],
    );

    t.add(
        "S-C-C-O-C-C-O-C-C-S",
        clauses![when(
            |p| straight(p, 1, 3) && straight(p, 4, 6) && straight(p, 7, 9),
            &[M::SOOSEthyleneLinkedHeteroatomChain],
        )],
    );

    t.add(
        "S-C-C-N-C-C-O-C-C-S",
        clauses![when(
            |p| straight(p, 1, 3) && straight(p, 4, 6) && straight(p, 7, 9),
            &[M::SNOSEthyleneLinkedHeteroatomChain],
        )],
    );

    t.add(
        "S-C-C-O-C-C-S-C-C-S",
        clauses![when(
            |p| straight(p, 1, 3) && straight(p, 4, 6) && straight(p, 7, 9),
            &[M::SOSSEthyleneLinkedHeteroatomChain],
        )],
    );

    t.add(
        "S-C-C-N-C-C-N-C-C-S",
        clauses![when(
            |p| straight(p, 1, 3) && straight(p, 4, 6) && straight(p, 7, 9),
            &[M::SNNSEthyleneLinkedHeteroatomChain],
        )],
    );

    t.add(
        "S-C-C-N-C-C-S-C-C-S",
        clauses![when(
            |p| straight(p, 1, 3) && straight(p, 4, 6) && straight(p, 7, 9),
            &[M::SNSSEthyleneLinkedHeteroatomChain],
        )],
    );
}

fn eleven(t: &mut RuleTable) {
    t.extend(
        "C-C-C-C-C-C-C-C-C-C-O",
        clauses![when(|p| methyl(p, 0) && straight(p, 1, 10), &[]).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 10), &[M::NDecanol]),
                when(|p| ether_oxygen(p, 10), &[M::NDecyloxy]),
                when(|p| ester_oxygen(p, 10), &[M::NDecylEster]),
            ]),
        ])],
    );

    t.add(
        "C-C-C-C-C-C-C-C-C-C-N",
        clauses![when(|p| methyl(p, 0) && straight(p, 1, 10), &[]).then(clauses![
            first_of(vec![
                when(|p| primary_amine(p, 10), &[M::NDecylamine]),
                when(|p| substituted_amine(p, 10), &[M::NDecylamino]),
                when(|p| amide_nitrogen(p, 10), &[M::NDecylAmide]),
                when(|p| p.group(10) == G::QuaternaryNitrogen, &[M::NDecylammonium]),
            ]),
        ])],
    );

    t.add(
        "C-C-C-C-C-C-C-C-C-C-S",
        clauses![when(|p| methyl(p, 0) && straight(p, 1, 10), &[]).then(clauses![
            first_of(vec![
                when(|p| thiol(p, 10), &[M::NDecanethiol]),
                when(|p| thioether(p, 10), &[M::NDecylthio]),
                when(|p| sulfonyl(p, 10), &[M::NDecylsulfonyl]),
            ]),
        ])],
    );

    t.add(
        "C-C-C-C-C-C-C-C-C-C-P",
        clauses![when(|p| methyl(p, 0) && straight(p, 1, 10), &[]).then(clauses![
            first_of(vec![
                when(|p| p.group(10) == G::PhosphonatePhosphorus, &[M::NDecylphosphonate]),
                when(|p| p.group(10) == G::OtherPhosphorus, &[M::NDecylphosphine]),
            ]),
        ])],
    );

    t.add("C-C-C-C-C-C-C-C-C-C-Si", clauses![when(|p| methyl(p, 0) && straight(p, 1, 10), &[M::NDecylsilyl])]);

    t.add(
        "C-C-C-C-C-C-C-C-C-C-F",
        clauses![first_of(vec![
            when(|p| p.env(0).fluorine == 3 && fluorinated(p, 1, 10), &[M::Perfluorodecyl]),
            when(|p| methyl(p, 0) && straight(p, 1, 10), &[M::NDecylFluoride]),
        ])],
    );

    t.add("C-C-C-C-C-C-C-C-C-C-Cl", clauses![when(|p| methyl(p, 0) && straight(p, 1, 10), &[M::NDecylChloride])]);

    t.add("Br-C-C-C-C-C-C-C-C-C-C", clauses![when(|p| methyl(p, 10) && straight(p, 1, 10), &[M::NDecylBromide])]);

    t.add("C-C-C-C-C-C-C-C-C-C-I", clauses![when(|p| methyl(p, 0) && straight(p, 1, 10), &[M::NDecylIodide])]);

    t.add(
        "O-C-C-C-C-C-C-C-C-C-O",
        clauses![when(|p| straight(p, 1, 10), &[]).then(clauses![
            first_of(vec![
                when(|p| both_ends(p, hydroxyl), &[M::AlphaOmegaNonanediol]),
                when(|p| ends_pair(p, hydroxyl, ether_oxygen), &[M::AlkoxyNonanol]),
                when(|p| ends_pair(p, hydroxyl, ester_oxygen), &[M::HydroxynonylEster]),
                when(|p| both_ends(p, ether_oxygen), &[M::DialkoxyNonane]),
                when(|p| ends_pair(p, ether_oxygen, ester_oxygen), &[M::AlkoxynonylEster]),
                when(|p| both_ends(p, ester_oxygen), &[M::NonanediylDiester]),
            ]),
        ])],
    );

    t.add(
        "N-C-C-C-C-C-C-C-C-C-N",
        clauses![when(|p| straight(p, 1, 10), &[]).then(clauses![
            first_of(vec![
                when(|p| both_ends(p, primary_amine), &[M::AlphaOmegaNonanediamine]),
                when(|p| ends_pair(p, primary_amine, substituted_amine), &[M::AlkylNonanediamine]),
                when(|p| both_ends(p, substituted_amine), &[M::DialkylNonanediamine]),
                when(|p| ends_pair(p, primary_amine, amide_nitrogen), &[M::AminononylAmide]),
                when(|p| both_ends(p, amide_nitrogen), &[M::NonanediylBisamide]),
            ]),
        ])],
    );

    t.add(
        "N-C-C-C-C-C-C-C-C-C-O",
        clauses![when(|p| straight(p, 1, 10), &[]).then(clauses![
            first_of(vec![
                when(|p| primary_amine(p, 0) && hydroxyl(p, 10), &[M::AminoNonanol]),
                when(|p| primary_amine(p, 0) && ether_oxygen(p, 10), &[M::AlkoxynonylAmine]),
                when(|p| primary_amine(p, 0) && ester_oxygen(p, 10), &[M::AminononylEster]),
                when(|p| substituted_amine(p, 0) && hydroxyl(p, 10), &[M::AlkylaminoNonanol]),
                when(|p| substituted_amine(p, 0) && ester_oxygen(p, 10), &[M::AlkylaminononylEster]),
                when(|p| quaternary_nitrogen(p, 0) && hydroxyl(p, 10), &[M::HydroxynonylAmmonium]),
                when(|p| quaternary_nitrogen(p, 0) && ester_oxygen(p, 10), &[M::AcyloxynonylAmmonium]),
                when(|p| amide_nitrogen(p, 0) && hydroxyl(p, 10), &[M::HydroxynonylAmide]),
                when(|p| amide_nitrogen(p, 0) && ether_oxygen(p, 10), &[M::AlkoxynonylAmide]),
                when(|p| amide_nitrogen(p, 0) && ester_oxygen(p, 10), &[M::AcyloxynonylAmide]),
            ]),
        ])],
    );

    t.add(
        "N-C-C-C-C-C-C-C-C-C-S",
        clauses![when(|p| straight(p, 1, 10), &[]).then(clauses![
            first_of(vec![
                when(|p| primary_amine(p, 0) && thiol(p, 10), &[M::AminoNonanethiol]),
                when(|p| primary_amine(p, 0) && thioether(p, 10), &[M::AlkylthiononylAmine]),
                when(|p| primary_amine(p, 0) && sulfonyl(p, 10), &[M::AminoNonanesulfonyl]),
                when(|p| amide_nitrogen(p, 0) && thiol(p, 10), &[M::MercaptononylAmide]),
                when(|p| amide_nitrogen(p, 0) && thioester_sulfur(p, 10), &[M::AcylthiononylAmide]),
                when(|p| amide_nitrogen(p, 0) && thioether(p, 10), &[M::AlkylthiononylAmide]),
                when(|p| amide_nitrogen(p, 0) && sulfonyl(p, 10), &[M::AcylaminoNonanesulfonyl]),
            ]),
        ])],
    );

    t.add(
        "O-C-C-C-C-C-C-C-C-C-S",
        clauses![when(|p| straight(p, 1, 10), &[]).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 0) && thiol(p, 10), &[M::MercaptoNonanol]),
                when(|p| hydroxyl(p, 0) && thioether(p, 10), &[M::AlkylthioNonanol]),
                when(|p| hydroxyl(p, 0) && sulfonyl(p, 10), &[M::HydroxyNonanesulfonyl]),
                when(|p| ether_oxygen(p, 0) && thioether(p, 10), &[M::AlkoxynonylSulfide]),
                when(|p| ester_oxygen(p, 0) && thioether(p, 10), &[M::AcyloxynonylSulfide]),
                when(|p| ester_oxygen(p, 0) && sulfonyl(p, 10), &[M::AcyloxyNonanesulfonyl]),
            ]),
        ])],
    );

    t.add(
        "S-C-C-C-C-C-C-C-C-C-S",
        clauses![when(|p| straight(p, 1, 10), &[]).then(clauses![
            first_of(vec![
                when(|p| both_ends(p, thiol), &[M::AlphaOmegaNonanedithiol]),
                when(|p| ends_pair(p, thiol, thioether), &[M::AlkylthioNonanethiol]),
                when(|p| both_ends(p, thioether), &[M::BisalkylthioNonane]),
            ]),
        ])],
    );

    t.add(
        "Cl-C-C-C-C-C-C-C-C-C-O",
        clauses![when(|p| straight(p, 1, 10), &[]).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 10), &[M::ChloroNonanol]),
                when(|p| ether_oxygen(p, 10), &[M::ChlorononylEther]),
                when(|p| ester_oxygen(p, 10), &[M::ChlorononylEster]),
            ]),
        ])],
    );

    t.add(
        "Cl-C-C-C-C-C-C-C-C-C-N",
        clauses![when(|p| straight(p, 1, 10), &[]).then(clauses![
            first_of(vec![
                when(|p| amine(p, 10), &[M::ChlorononylAmine]),
                when(|p| amide_nitrogen(p, 10), &[M::ChlorononylAmide]),
            ]),
        ])],
    );

    t.add(
        "Br-C-C-C-C-C-C-C-C-C-O",
        clauses![when(|p| straight(p, 1, 10), &[]).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 10), &[M::BromoNonanol]),
                when(|p| ether_oxygen(p, 10), &[M::BromononylEther]),
                when(|p| ester_oxygen(p, 10), &[M::BromononylEster]),
            ]),
        ])],
    );

    t.add(
        "Br-C-C-C-C-C-C-C-C-C-N",
        clauses![when(|p| straight(p, 1, 10), &[]).then(clauses![
            first_of(vec![
                when(|p| amine(p, 10), &[M::BromononylAmine]),
                when(|p| amide_nitrogen(p, 10), &[M::BromononylAmide]),
            ]),
        ])],
    );

    t.add(
        "F-C-C-C-C-C-C-C-C-C-O",
        clauses![when(|p| straight(p, 1, 10), &[]).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 10), &[M::FluoroNonanol]),
                when(|p| ester_oxygen(p, 10), &[M::FluorononylEster]),
            ]),
        ])],
    );

    t.add(
        "F-C-C-C-C-C-C-C-C-C-N",
        clauses![when(|p| straight(p, 1, 10), &[]).then(clauses![
            when(|p| amine(p, 10), &[M::FluorononylAmine]),
        ])],
    );

    t.add(
        "I-C-C-C-C-C-C-C-C-C-O",
        clauses![when(|p| straight(p, 1, 10), &[]).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 10), &[M::IodoNonanol]),
                when(|p| ester_oxygen(p, 10), &[M::IodononylEster]),
            ]),
        ])],
    );

    t.add(
        "I-C-C-C-C-C-C-C-C-C-N",
        clauses![when(|p| straight(p, 1, 10), &[]).then(clauses![
            when(|p| amine(p, 10), &[M::IodononylAmine]),
        ])],
    );

    t.add(
        "Cl-C-C-C-C-C-C-C-C-C-S",
        clauses![when(|p| straight(p, 1, 10), &[]).then(clauses![
            first_of(vec![
                when(|p| thiol(p, 10), &[M::ChloroNonanethiol]),
                when(|p| thioether(p, 10), &[M::ChlorononylSulfide]),
            ]),
        ])],
    );

    t.add(
        "Br-C-C-C-C-C-C-C-C-C-S",
        clauses![when(|p| straight(p, 1, 10), &[]).then(clauses![
            first_of(vec![
                when(|p| thiol(p, 10), &[M::BromoNonanethiol]),
                when(|p| thioether(p, 10), &[M::BromononylSulfide]),
            ]),
        ])],
    );

    t.add(
        "O-C-C-C-C-C-C-C-C-C-P",
        clauses![when(|p| straight(p, 1, 10), &[]).then(clauses![
            first_of(vec![
                when(|p| p.group(10) == G::PhosphonatePhosphorus && hydroxyl(p, 0), &[M::HydroxynonylPhosphonate]),
                when(
                    |p| p.group(10) == G::PhosphonatePhosphorus && ester_oxygen(p, 0),
                    &[M::AcyloxynonylPhosphonate],
                ),
            ]),
        ])],
    );

    t.add(
        "N-C-C-C-C-C-C-C-C-C-P",
        clauses![when(|p| straight(p, 1, 10), &[]).then(clauses![
            when(|p| p.group(10) == G::PhosphonatePhosphorus && primary_amine(p, 0), &[M::AminononylPhosphonate]),
        ])],
    );

    t.add("F-C-C-C-C-C-C-C-C-C-F", clauses![when(|p| straight(p, 1, 10), &[M::OneNineDifluorononane])]);

    t.add("Cl-C-C-C-C-C-C-C-C-C-F", clauses![when(|p| straight(p, 1, 10), &[M::OneChloroNineFluorononane])]);

    t.add("Br-C-C-C-C-C-C-C-C-C-F", clauses![when(|p| straight(p, 1, 10), &[M::OneBromoNineFluorononane])]);

    t.add("F-C-C-C-C-C-C-C-C-C-I", clauses![when(|p| straight(p, 1, 10), &[M::OneFluoroNineIodononane])]);

    t.add("Cl-C-C-C-C-C-C-C-C-C-Cl", clauses![when(|p| straight(p, 1, 10), &[M::OneNineDichlorononane])]);

    t.add("Br-C-C-C-C-C-C-C-C-C-Cl", clauses![when(|p| straight(p, 1, 10), &[M::OneBromoNineChlorononane])]);

    t.add("Cl-C-C-C-C-C-C-C-C-C-I", clauses![when(|p| straight(p, 1, 10), &[M::OneChloroNineIodononane])]);

    t.add("Br-C-C-C-C-C-C-C-C-C-Br", clauses![when(|p| straight(p, 1, 10), &[M::OneNineDibromononane])]);

    t.add("Br-C-C-C-C-C-C-C-C-C-I", clauses![when(|p| straight(p, 1, 10), &[M::OneBromoNineIodononane])]);

    t.add("I-C-C-C-C-C-C-C-C-C-I", clauses![when(|p| straight(p, 1, 10), &[M::OneNineDiiodononane])]);

    t.add(
        "C-C-O-C-C-O-C-C-O-C-C",
        clauses![when(
            |p| {
                alkyl(p, 0)
                    && straight(p, 1, 2)
                    && straight(p, 3, 5)
                    && straight(p, 6, 8)
                    && alkyl(p, 10)
                    && straight(p, 9, 10)
            },
            &[M::OligoOxyethyleneChainThreeOxygensEndCapsTwoAndTwo],
        )],
    );

    t.add(
        "C-O-C-C-O-C-C-O-C-C-O",
        clauses![when(
            |p| alkyl(p, 0) && straight(p, 2, 4) && straight(p, 5, 7) && straight(p, 8, 10),
            &[M::OligoOxyethyleneChainFourOxygensEndCapsZeroAndOne],
        )],
    );

    t.add(
        "C-C-O-C-C-C-O-C-C-C-O",
        clauses![when(
            |p| alkyl(p, 0) && straight(p, 1, 2) && straight(p, 3, 6) && straight(p, 7, 10),
            &[M::OligoOxytrimethyleneChainThreeOxygensEndCapsZeroAndTwo],
        )],
    );

    t.add(
        "C-O-C-C-C-O-C-C-C-O-C",
        clauses![when(
            |p| alkyl(p, 0) && straight(p, 2, 5) && straight(p, 6, 9) && alkyl(p, 10),
            &[M::OligoOxytrimethyleneChainThreeOxygensEndCapsOneAndOne],
        )],
    );

    t.add(
        "O-C-C-C-C-O-C-C-C-C-O",
        clauses![when(
            |p| straight(p, 1, 5) && straight(p, 6, 10),
            &[M::OligoOxytetramethyleneChainThreeOxygensEndCapsZeroAndZero],
        )],
    );

    t.add(
        "C-C-N-C-C-N-C-C-N-C-C",
        clauses![when(
            |p| {
                alkyl(p, 0)
                    && straight(p, 1, 2)
                    && straight(p, 3, 5)
                    && straight(p, 6, 8)
                    && alkyl(p, 10)
                    && straight(p, 9, 10)
            },
            &[M::OligoIminoethyleneChainThreeNitrogensEndCapsTwoAndTwo],
        )],
    );

    t.add(
        "C-N-C-C-N-C-C-N-C-C-N",
        clauses![when(
            |p| alkyl(p, 0) && straight(p, 2, 4) && straight(p, 5, 7) && straight(p, 8, 10),
            &[M::OligoIminoethyleneChainFourNitrogensEndCapsZeroAndOne],
        )],
    );

    t.add(
        "C-C-N-C-C-C-N-C-C-C-N",
        clauses![when(
            |p| alkyl(p, 0) && straight(p, 1, 2) && straight(p, 3, 6) && straight(p, 7, 10),
            &[M::OligoIminotrimethyleneChainThreeNitrogensEndCapsZeroAndTwo],
        )],
    );

    t.add(
        "C-N-C-C-C-N-C-C-C-N-C",
        clauses![when(
            |p| alkyl(p, 0) && straight(p, 2, 5) && straight(p, 6, 9) && alkyl(p, 10),
            &[M::OligoIminotrimethyleneChainThreeNitrogensEndCapsOneAndOne],
        )],
    );

    t.add(
        "N-C-C-C-C-N-C-C-C-C-N",
        clauses![when(
            |p| straight(p, 1, 5) && straight(p, 6, 10),
            &[M::OligoIminotetramethyleneChainThreeNitrogensEndCapsZeroAndZero],
        )],
    );

    t.add(
        "C-C-S-C-C-S-C-C-S-C-C",
        clauses![when(
            |p| {
                alkyl(p, 0)
                    && straight(p, 1, 2)
                    && straight(p, 3, 5)
                    && straight(p, 6, 8)
                    && alkyl(p, 10)
                    && straight(p, 9, 10)
            },
            &[M::OligoThioethyleneChainThreeSulfursEndCapsTwoAndTwo],
        )],
    );

    t.add(
        "C-S-C-C-S-C-C-S-C-C-S",
        clauses![when(
            |p| alkyl(p, 0) && straight(p, 2, 4) && straight(p, 5, 7) && straight(p, 8, 10),
            &[M::OligoThioethyleneChainFourSulfursEndCapsZeroAndOne],
        )],
    );

    t.add(
        "C-C-S-C-C-C-S-C-C-C-S",
        clauses![when(
            |p| alkyl(p, 0) && straight(p, 1, 2) && straight(p, 3, 6) && straight(p, 7, 10),
            &[M::OligoThiotrimethyleneChainThreeSulfursEndCapsZeroAndTwo],
        )],
    );

    t.add(
        "C-S-C-C-C-S-C-C-C-S-C",
        clauses![when(
            |p| alkyl(p, 0) && straight(p, 2, 5) && straight(p, 6, 9) && alkyl(p, 10),
            &[M::OligoThiotrimethyleneChainThreeSulfursEndCapsOneAndOne],
        )],
    );
}

fn twelve(t: &mut RuleTable) {
    t.add(
        "C-C-C-C-C-C-C-C-C-C-C-O",
        clauses![when(|p| methyl(p, 0) && straight(p, 1, 11), &[]).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 11), &[M::NUndecanol]),
                when(|p| ether_oxygen(p, 11), &[M::NUndecyloxy]),
                when(|p| ester_oxygen(p, 11), &[M::NUndecylEster]),
            ]),
        ])],
    );

    t.add(
        "C-C-C-C-C-C-C-C-C-C-C-N",
        clauses![when(|p| methyl(p, 0) && straight(p, 1, 11), &[]).then(clauses![
            first_of(vec![
                when(|p| primary_amine(p, 11), &[M::NUndecylamine]),
                when(|p| substituted_amine(p, 11), &[M::NUndecylamino]),
                when(|p| amide_nitrogen(p, 11), &[M::NUndecylAmide]),
                when(|p| p.group(11) == G::QuaternaryNitrogen, &[M::NUndecylammonium]),
            ]),
        ])],
    );

    t.add(
        "C-C-C-C-C-C-C-C-C-C-C-S",
        clauses![when(|p| methyl(p, 0) && straight(p, 1, 11), &[]).then(clauses![
            first_of(vec![
                when(|p| thiol(p, 11), &[M::NUndecanethiol]),
                when(|p| thioether(p, 11), &[M::NUndecylthio]),
                when(|p| sulfonyl(p, 11), &[M::NUndecylsulfonyl]),
            ]),
        ])],
    );

    t.add(
        "C-C-C-C-C-C-C-C-C-C-C-P",
        clauses![when(|p| methyl(p, 0) && straight(p, 1, 11), &[]).then(clauses![
            first_of(vec![
                when(|p| p.group(11) == G::PhosphonatePhosphorus, &[M::NUndecylphosphonate]),
                when(|p| p.group(11) == G::OtherPhosphorus, &[M::NUndecylphosphine]),
            ]),
        ])],
    );

    t.add("C-C-C-C-C-C-C-C-C-C-C-Si", clauses![when(|p| methyl(p, 0) && straight(p, 1, 11), &[M::NUndecylsilyl])]);

    t.add(
        "C-C-C-C-C-C-C-C-C-C-C-F",
        clauses![first_of(vec![
            when(|p| p.env(0).fluorine == 3 && fluorinated(p, 1, 11), &[M::Perfluoroundecyl]),
            when(|p| methyl(p, 0) && straight(p, 1, 11), &[M::NUndecylFluoride]),
        ])],
    );

    t.add("C-C-C-C-C-C-C-C-C-C-C-Cl", clauses![when(|p| methyl(p, 0) && straight(p, 1, 11), &[M::NUndecylChloride])]);

    t.add("Br-C-C-C-C-C-C-C-C-C-C-C", clauses![when(|p| methyl(p, 11) && straight(p, 1, 11), &[M::NUndecylBromide])]);

    t.add("C-C-C-C-C-C-C-C-C-C-C-I", clauses![when(|p| methyl(p, 0) && straight(p, 1, 11), &[M::NUndecylIodide])]);

    t.add(
        "O-C-C-C-C-C-C-C-C-C-C-O",
        clauses![when(|p| straight(p, 1, 11), &[]).then(clauses![
            first_of(vec![
                when(|p| both_ends(p, hydroxyl), &[M::AlphaOmegaDecanediol]),
                when(|p| ends_pair(p, hydroxyl, ether_oxygen), &[M::AlkoxyDecanol]),
                when(|p| ends_pair(p, hydroxyl, ester_oxygen), &[M::HydroxydecylEster]),
                when(|p| both_ends(p, ether_oxygen), &[M::DialkoxyDecane]),
                when(|p| ends_pair(p, ether_oxygen, ester_oxygen), &[M::AlkoxydecylEster]),
                when(|p| both_ends(p, ester_oxygen), &[M::DecanediylDiester]),
            ]),
        ])],
    );

    t.add(
        "N-C-C-C-C-C-C-C-C-C-C-N",
        clauses![when(|p| straight(p, 1, 11), &[]).then(clauses![
            first_of(vec![
                when(|p| both_ends(p, primary_amine), &[M::AlphaOmegaDecanediamine]),
                when(|p| ends_pair(p, primary_amine, substituted_amine), &[M::AlkylDecanediamine]),
                when(|p| both_ends(p, substituted_amine), &[M::DialkylDecanediamine]),
                when(|p| ends_pair(p, primary_amine, amide_nitrogen), &[M::AminodecylAmide]),
                when(|p| both_ends(p, amide_nitrogen), &[M::DecanediylBisamide]),
            ]),
        ])],
    );

    t.add(
        "N-C-C-C-C-C-C-C-C-C-C-O",
        clauses![when(|p| straight(p, 1, 11), &[]).then(clauses![
            first_of(vec![
                when(|p| primary_amine(p, 0) && hydroxyl(p, 11), &[M::AminoDecanol]),
                when(|p| primary_amine(p, 0) && ether_oxygen(p, 11), &[M::AlkoxydecylAmine]),
                when(|p| primary_amine(p, 0) && ester_oxygen(p, 11), &[M::AminodecylEster]),
                when(|p| substituted_amine(p, 0) && hydroxyl(p, 11), &[M::AlkylaminoDecanol]),
                when(|p| substituted_amine(p, 0) && ester_oxygen(p, 11), &[M::AlkylaminodecylEster]),
                when(|p| quaternary_nitrogen(p, 0) && hydroxyl(p, 11), &[M::HydroxydecylAmmonium]),
                when(|p| quaternary_nitrogen(p, 0) && ester_oxygen(p, 11), &[M::AcyloxydecylAmmonium]),
                when(|p| amide_nitrogen(p, 0) && hydroxyl(p, 11), &[M::HydroxydecylAmide]),
                when(|p| amide_nitrogen(p, 0) && ether_oxygen(p, 11), &[M::AlkoxydecylAmide]),
                when(|p| amide_nitrogen(p, 0) && ester_oxygen(p, 11), &[M::AcyloxydecylAmide]),
            ]),
        ])],
    );

    t.add(
        "N-C-C-C-C-C-C-C-C-C-C-S",
        clauses![when(|p| straight(p, 1, 11), &[]).then(clauses![
            first_of(vec![
                when(|p| primary_amine(p, 0) && thiol(p, 11), &[M::AminoDecanethiol]),
                when(|p| primary_amine(p, 0) && thioether(p, 11), &[M::AlkylthiodecylAmine]),
                when(|p| primary_amine(p, 0) && sulfonyl(p, 11), &[M::AminoDecanesulfonyl]),
                when(|p| amide_nitrogen(p, 0) && thiol(p, 11), &[M::MercaptodecylAmide]),
                when(|p| amide_nitrogen(p, 0) && thioester_sulfur(p, 11), &[M::AcylthiodecylAmide]),
                when(|p| amide_nitrogen(p, 0) && thioether(p, 11), &[M::AlkylthiodecylAmide]),
                when(|p| amide_nitrogen(p, 0) && sulfonyl(p, 11), &[M::AcylaminoDecanesulfonyl]),
            ]),
        ])],
    );

    t.add(
        "O-C-C-C-C-C-C-C-C-C-C-S",
        clauses![when(|p| straight(p, 1, 11), &[]).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 0) && thiol(p, 11), &[M::MercaptoDecanol]),
                when(|p| hydroxyl(p, 0) && thioether(p, 11), &[M::AlkylthioDecanol]),
                when(|p| hydroxyl(p, 0) && sulfonyl(p, 11), &[M::HydroxyDecanesulfonyl]),
                when(|p| ether_oxygen(p, 0) && thioether(p, 11), &[M::AlkoxydecylSulfide]),
                when(|p| ester_oxygen(p, 0) && thioether(p, 11), &[M::AcyloxydecylSulfide]),
                when(|p| ester_oxygen(p, 0) && sulfonyl(p, 11), &[M::AcyloxyDecanesulfonyl]),
            ]),
        ])],
    );

    t.add(
        "S-C-C-C-C-C-C-C-C-C-C-S",
        clauses![when(|p| straight(p, 1, 11), &[]).then(clauses![
            first_of(vec![
                when(|p| both_ends(p, thiol), &[M::AlphaOmegaDecanedithiol]),
                when(|p| ends_pair(p, thiol, thioether), &[M::AlkylthioDecanethiol]),
                when(|p| both_ends(p, thioether), &[M::BisalkylthioDecane]),
            ]),
        ])],
    );

    t.add(
        "Cl-C-C-C-C-C-C-C-C-C-C-O",
        clauses![when(|p| straight(p, 1, 11), &[]).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 11), &[M::ChloroDecanol]),
                when(|p| ether_oxygen(p, 11), &[M::ChlorodecylEther]),
                when(|p| ester_oxygen(p, 11), &[M::ChlorodecylEster]),
            ]),
        ])],
    );

    t.add(
        "Cl-C-C-C-C-C-C-C-C-C-C-N",
        clauses![when(|p| straight(p, 1, 11), &[]).then(clauses![
            first_of(vec![
                when(|p| amine(p, 11), &[M::ChlorodecylAmine]),
                when(|p| amide_nitrogen(p, 11), &[M::ChlorodecylAmide]),
            ]),
        ])],
    );

    t.add(
        "Br-C-C-C-C-C-C-C-C-C-C-O",
        clauses![when(|p| straight(p, 1, 11), &[]).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 11), &[M::BromoDecanol]),
                when(|p| ether_oxygen(p, 11), &[M::BromodecylEther]),
                when(|p| ester_oxygen(p, 11), &[M::BromodecylEster]),
            ]),
        ])],
    );

    t.add(
        "Br-C-C-C-C-C-C-C-C-C-C-N",
        clauses![when(|p| straight(p, 1, 11), &[]).then(clauses![
            first_of(vec![
                when(|p| amine(p, 11), &[M::BromodecylAmine]),
                when(|p| amide_nitrogen(p, 11), &[M::BromodecylAmide]),
            ]),
        ])],
    );

    t.add(
        "F-C-C-C-C-C-C-C-C-C-C-O",
        clauses![when(|p| straight(p, 1, 11), &[]).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 11), &[M::FluoroDecanol]),
                when(|p| ester_oxygen(p, 11), &[M::FluorodecylEster]),
            ]),
        ])],
    );

    t.add(
        "F-C-C-C-C-C-C-C-C-C-C-N",
        clauses![when(|p| straight(p, 1, 11), &[]).then(clauses![
            when(|p| amine(p, 11), &[M::FluorodecylAmine]),
        ])],
    );

    t.add(
        "I-C-C-C-C-C-C-C-C-C-C-O",
        clauses![when(|p| straight(p, 1, 11), &[]).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 11), &[M::IodoDecanol]),
                when(|p| ester_oxygen(p, 11), &[M::IododecylEster]),
            ]),
        ])],
    );

    t.add(
        "I-C-C-C-C-C-C-C-C-C-C-N",
        clauses![when(|p| straight(p, 1, 11), &[]).then(clauses![
            when(|p| amine(p, 11), &[M::IododecylAmine]),
        ])],
    );

    t.add(
        "Cl-C-C-C-C-C-C-C-C-C-C-S",
        clauses![when(|p| straight(p, 1, 11), &[]).then(clauses![
            first_of(vec![
                when(|p| thiol(p, 11), &[M::ChloroDecanethiol]),
                when(|p| thioether(p, 11), &[M::ChlorodecylSulfide]),
            ]),
        ])],
    );

    t.add(
        "Br-C-C-C-C-C-C-C-C-C-C-S",
        clauses![when(|p| straight(p, 1, 11), &[]).then(clauses![
            first_of(vec![
                when(|p| thiol(p, 11), &[M::BromoDecanethiol]),
                when(|p| thioether(p, 11), &[M::BromodecylSulfide]),
            ]),
        ])],
    );

    t.add(
        "O-C-C-C-C-C-C-C-C-C-C-P",
        clauses![when(|p| straight(p, 1, 11), &[]).then(clauses![
            first_of(vec![
                when(|p| p.group(11) == G::PhosphonatePhosphorus && hydroxyl(p, 0), &[M::HydroxydecylPhosphonate]),
                when(
                    |p| p.group(11) == G::PhosphonatePhosphorus && ester_oxygen(p, 0),
                    &[M::AcyloxydecylPhosphonate],
                ),
            ]),
        ])],
    );

    t.add(
        "N-C-C-C-C-C-C-C-C-C-C-P",
        clauses![when(|p| straight(p, 1, 11), &[]).then(clauses![
            when(|p| p.group(11) == G::PhosphonatePhosphorus && primary_amine(p, 0), &[M::AminodecylPhosphonate]),
        ])],
    );

    t.add("F-C-C-C-C-C-C-C-C-C-C-F", clauses![when(|p| straight(p, 1, 11), &[M::OneTenDifluorodecane])]);

    t.add("Cl-C-C-C-C-C-C-C-C-C-C-F", clauses![when(|p| straight(p, 1, 11), &[M::OneChloroTenFluorodecane])]);

    t.add("Br-C-C-C-C-C-C-C-C-C-C-F", clauses![when(|p| straight(p, 1, 11), &[M::OneBromoTenFluorodecane])]);

    t.add("F-C-C-C-C-C-C-C-C-C-C-I", clauses![when(|p| straight(p, 1, 11), &[M::OneFluoroTenIododecane])]);

    t.add("Cl-C-C-C-C-C-C-C-C-C-C-Cl", clauses![when(|p| straight(p, 1, 11), &[M::OneTenDichlorodecane])]);

    t.add("Br-C-C-C-C-C-C-C-C-C-C-Cl", clauses![when(|p| straight(p, 1, 11), &[M::OneBromoTenChlorodecane])]);

    t.add("Cl-C-C-C-C-C-C-C-C-C-C-I", clauses![when(|p| straight(p, 1, 11), &[M::OneChloroTenIododecane])]);

    t.add("Br-C-C-C-C-C-C-C-C-C-C-Br", clauses![when(|p| straight(p, 1, 11), &[M::OneTenDibromodecane])]);

    t.add("Br-C-C-C-C-C-C-C-C-C-C-I", clauses![when(|p| straight(p, 1, 11), &[M::OneBromoTenIododecane])]);

    t.add("I-C-C-C-C-C-C-C-C-C-C-I", clauses![when(|p| straight(p, 1, 11), &[M::OneTenDiiododecane])]);

    t.add(
        "C-C-O-C-C-O-C-C-O-C-C-O",
        clauses![when(
            |p| alkyl(p, 0) && straight(p, 1, 2) && straight(p, 3, 5) && straight(p, 6, 8) && straight(p, 9, 11),
            &[M::OligoOxyethyleneChainFourOxygensEndCapsZeroAndTwo],
        )],
    );

    t.add(
        "C-O-C-C-O-C-C-O-C-C-O-C",
        clauses![when(
            |p| alkyl(p, 0) && straight(p, 2, 4) && straight(p, 5, 7) && straight(p, 8, 10) && alkyl(p, 11),
            &[M::OligoOxyethyleneChainFourOxygensEndCapsOneAndOne],
        )],
    );

    t.add(
        "C-C-O-C-C-C-O-C-C-C-O-C",
        clauses![when(
            |p| alkyl(p, 0) && straight(p, 1, 2) && straight(p, 3, 6) && straight(p, 7, 10) && alkyl(p, 11),
            &[M::OligoOxytrimethyleneChainThreeOxygensEndCapsOneAndTwo],
        )],
    );

    t.add(
        "C-O-C-C-C-C-O-C-C-C-C-O",
        clauses![when(
            |p| alkyl(p, 0) && straight(p, 2, 6) && straight(p, 7, 11),
            &[M::OligoOxytetramethyleneChainThreeOxygensEndCapsZeroAndOne],
        )],
    );

    t.add(
        "C-C-N-C-C-N-C-C-N-C-C-N",
        clauses![when(
            |p| alkyl(p, 0) && straight(p, 1, 2) && straight(p, 3, 5) && straight(p, 6, 8) && straight(p, 9, 11),
            &[M::OligoIminoethyleneChainFourNitrogensEndCapsZeroAndTwo],
        )],
    );

    t.add(
        "C-N-C-C-N-C-C-N-C-C-N-C",
        clauses![when(
            |p| alkyl(p, 0) && straight(p, 2, 4) && straight(p, 5, 7) && straight(p, 8, 10) && alkyl(p, 11),
            &[M::OligoIminoethyleneChainFourNitrogensEndCapsOneAndOne],
        )],
    );

    t.add(
        "C-C-N-C-C-C-N-C-C-C-N-C",
        clauses![when(
            |p| alkyl(p, 0) && straight(p, 1, 2) && straight(p, 3, 6) && straight(p, 7, 10) && alkyl(p, 11),
            &[M::OligoIminotrimethyleneChainThreeNitrogensEndCapsOneAndTwo],
        )],
    );

    t.add(
        "C-N-C-C-C-C-N-C-C-C-C-N",
        clauses![when(
            |p| alkyl(p, 0) && straight(p, 2, 6) && straight(p, 7, 11),
            &[M::OligoIminotetramethyleneChainThreeNitrogensEndCapsZeroAndOne],
        )],
    );

    t.add(
        "C-C-S-C-C-S-C-C-S-C-C-S",
        clauses![when(
            |p| alkyl(p, 0) && straight(p, 1, 2) && straight(p, 3, 5) && straight(p, 6, 8) && straight(p, 9, 11),
            &[M::OligoThioethyleneChainFourSulfursEndCapsZeroAndTwo],
        )],
    );

    t.add(
        "C-S-C-C-S-C-C-S-C-C-S-C",
        clauses![when(
            |p| alkyl(p, 0) && straight(p, 2, 4) && straight(p, 5, 7) && straight(p, 8, 10) && alkyl(p, 11),
            &[M::OligoThioethyleneChainFourSulfursEndCapsOneAndOne],
        )],
    );

    t.add(
        "C-C-S-C-C-C-S-C-C-C-S-C",
        clauses![when(
            |p| alkyl(p, 0) && straight(p, 1, 2) && straight(p, 3, 6) && straight(p, 7, 10) && alkyl(p, 11),
            &[M::OligoThiotrimethyleneChainThreeSulfursEndCapsOneAndTwo],
        )],
    );
}

fn thirteen(t: &mut RuleTable) {
    t.add(
        "C-C-C-C-C-C-C-C-C-C-C-C-O",
        clauses![when(|p| methyl(p, 0) && straight(p, 1, 12), &[]).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 12), &[M::NDodecanol]),
                when(|p| ether_oxygen(p, 12), &[M::NDodecyloxy]),
                when(|p| ester_oxygen(p, 12), &[M::NDodecylEster]),
            ]),
        ])],
    );

    t.add(
        "C-C-C-C-C-C-C-C-C-C-C-C-N",
        clauses![when(|p| methyl(p, 0) && straight(p, 1, 12), &[]).then(clauses![
            first_of(vec![
                when(|p| primary_amine(p, 12), &[M::NDodecylamine]),
                when(|p| substituted_amine(p, 12), &[M::NDodecylamino]),
                when(|p| amide_nitrogen(p, 12), &[M::NDodecylAmide]),
                when(|p| p.group(12) == G::QuaternaryNitrogen, &[M::NDodecylammonium]),
            ]),
        ])],
    );

    t.add(
        "C-C-C-C-C-C-C-C-C-C-C-C-S",
        clauses![when(|p| methyl(p, 0) && straight(p, 1, 12), &[]).then(clauses![
            first_of(vec![
                when(|p| thiol(p, 12), &[M::NDodecanethiol]),
                when(|p| thioether(p, 12), &[M::NDodecylthio]),
                when(|p| sulfonyl(p, 12), &[M::NDodecylsulfonyl]),
            ]),
        ])],
    );

    t.add(
        "C-C-C-C-C-C-C-C-C-C-C-C-P",
        clauses![when(|p| methyl(p, 0) && straight(p, 1, 12), &[]).then(clauses![
            first_of(vec![
                when(|p| p.group(12) == G::PhosphonatePhosphorus, &[M::NDodecylphosphonate]),
                when(|p| p.group(12) == G::OtherPhosphorus, &[M::NDodecylphosphine]),
            ]),
        ])],
    );

    t.add("C-C-C-C-C-C-C-C-C-C-C-C-Si", clauses![when(|p| methyl(p, 0) && straight(p, 1, 12), &[M::NDodecylsilyl])]);

    t.add(
        "C-C-C-C-C-C-C-C-C-C-C-C-F",
        clauses![first_of(vec![
            when(|p| p.env(0).fluorine == 3 && fluorinated(p, 1, 12), &[M::Perfluorododecyl]),
            when(|p| methyl(p, 0) && straight(p, 1, 12), &[M::NDodecylFluoride]),
        ])],
    );

    t.add(
        "C-C-C-C-C-C-C-C-C-C-C-C-Cl",
        clauses![when(|p| methyl(p, 0) && straight(p, 1, 12), &[M::NDodecylChloride])],
    );

    t.add(
        "Br-C-C-C-C-C-C-C-C-C-C-C-C",
        clauses![when(|p| methyl(p, 12) && straight(p, 1, 12), &[M::NDodecylBromide])],
    );

    t.add("C-C-C-C-C-C-C-C-C-C-C-C-I", clauses![when(|p| methyl(p, 0) && straight(p, 1, 12), &[M::NDodecylIodide])]);

    t.add(
        "O-C-C-C-C-C-C-C-C-C-C-C-O",
        clauses![when(|p| straight(p, 1, 12), &[]).then(clauses![
            first_of(vec![
                when(|p| both_ends(p, hydroxyl), &[M::AlphaOmegaUndecanediol]),
                when(|p| ends_pair(p, hydroxyl, ether_oxygen), &[M::AlkoxyUndecanol]),
                when(|p| ends_pair(p, hydroxyl, ester_oxygen), &[M::HydroxyundecylEster]),
                when(|p| both_ends(p, ether_oxygen), &[M::DialkoxyUndecane]),
                when(|p| ends_pair(p, ether_oxygen, ester_oxygen), &[M::AlkoxyundecylEster]),
                when(|p| both_ends(p, ester_oxygen), &[M::UndecanediylDiester]),
            ]),
        ])],
    );

    t.add(
        "N-C-C-C-C-C-C-C-C-C-C-C-N",
        clauses![when(|p| straight(p, 1, 12), &[]).then(clauses![
            first_of(vec![
                when(|p| both_ends(p, primary_amine), &[M::AlphaOmegaUndecanediamine]),
                when(|p| ends_pair(p, primary_amine, substituted_amine), &[M::AlkylUndecanediamine]),
                when(|p| both_ends(p, substituted_amine), &[M::DialkylUndecanediamine]),
                when(|p| ends_pair(p, primary_amine, amide_nitrogen), &[M::AminoundecylAmide]),
                when(|p| both_ends(p, amide_nitrogen), &[M::UndecanediylBisamide]),
            ]),
        ])],
    );

    t.add(
        "N-C-C-C-C-C-C-C-C-C-C-C-O",
        clauses![when(|p| straight(p, 1, 12), &[]).then(clauses![
            first_of(vec![
                when(|p| primary_amine(p, 0) && hydroxyl(p, 12), &[M::AminoUndecanol]),
                when(|p| primary_amine(p, 0) && ether_oxygen(p, 12), &[M::AlkoxyundecylAmine]),
                when(|p| primary_amine(p, 0) && ester_oxygen(p, 12), &[M::AminoundecylEster]),
                when(|p| substituted_amine(p, 0) && hydroxyl(p, 12), &[M::AlkylaminoUndecanol]),
                when(|p| substituted_amine(p, 0) && ester_oxygen(p, 12), &[M::AlkylaminoundecylEster]),
                when(|p| quaternary_nitrogen(p, 0) && hydroxyl(p, 12), &[M::HydroxyundecylAmmonium]),
                when(|p| quaternary_nitrogen(p, 0) && ester_oxygen(p, 12), &[M::AcyloxyundecylAmmonium]),
                when(|p| amide_nitrogen(p, 0) && hydroxyl(p, 12), &[M::HydroxyundecylAmide]),
                when(|p| amide_nitrogen(p, 0) && ether_oxygen(p, 12), &[M::AlkoxyundecylAmide]),
                when(|p| amide_nitrogen(p, 0) && ester_oxygen(p, 12), &[M::AcyloxyundecylAmide]),
            ]),
        ])],
    );

    t.add(
        "N-C-C-C-C-C-C-C-C-C-C-C-S",
        clauses![when(|p| straight(p, 1, 12), &[]).then(clauses![
            first_of(vec![
                when(|p| primary_amine(p, 0) && thiol(p, 12), &[M::AminoUndecanethiol]),
                when(|p| primary_amine(p, 0) && thioether(p, 12), &[M::AlkylthioundecylAmine]),
                when(|p| primary_amine(p, 0) && sulfonyl(p, 12), &[M::AminoUndecanesulfonyl]),
                when(|p| amide_nitrogen(p, 0) && thiol(p, 12), &[M::MercaptoundecylAmide]),
                when(|p| amide_nitrogen(p, 0) && thioester_sulfur(p, 12), &[M::AcylthioundecylAmide]),
                when(|p| amide_nitrogen(p, 0) && thioether(p, 12), &[M::AlkylthioundecylAmide]),
                when(|p| amide_nitrogen(p, 0) && sulfonyl(p, 12), &[M::AcylaminoUndecanesulfonyl]),
            ]),
        ])],
    );

    t.add(
        "O-C-C-C-C-C-C-C-C-C-C-C-S",
        clauses![when(|p| straight(p, 1, 12), &[]).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 0) && thiol(p, 12), &[M::MercaptoUndecanol]),
                when(|p| hydroxyl(p, 0) && thioether(p, 12), &[M::AlkylthioUndecanol]),
                when(|p| hydroxyl(p, 0) && sulfonyl(p, 12), &[M::HydroxyUndecanesulfonyl]),
                when(|p| ether_oxygen(p, 0) && thioether(p, 12), &[M::AlkoxyundecylSulfide]),
                when(|p| ester_oxygen(p, 0) && thioether(p, 12), &[M::AcyloxyundecylSulfide]),
                when(|p| ester_oxygen(p, 0) && sulfonyl(p, 12), &[M::AcyloxyUndecanesulfonyl]),
            ]),
        ])],
    );

    t.add(
        "S-C-C-C-C-C-C-C-C-C-C-C-S",
        clauses![when(|p| straight(p, 1, 12), &[]).then(clauses![
            first_of(vec![
                when(|p| both_ends(p, thiol), &[M::AlphaOmegaUndecanedithiol]),
                when(|p| ends_pair(p, thiol, thioether), &[M::AlkylthioUndecanethiol]),
                when(|p| both_ends(p, thioether), &[M::BisalkylthioUndecane]),
            ]),
        ])],
    );

    t.add(
        "Cl-C-C-C-C-C-C-C-C-C-C-C-O",
        clauses![when(|p| straight(p, 1, 12), &[]).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 12), &[M::ChloroUndecanol]),
                when(|p| ether_oxygen(p, 12), &[M::ChloroundecylEther]),
                when(|p| ester_oxygen(p, 12), &[M::ChloroundecylEster]),
            ]),
        ])],
    );

    t.add(
        "Cl-C-C-C-C-C-C-C-C-C-C-C-N",
        clauses![when(|p| straight(p, 1, 12), &[]).then(clauses![
            first_of(vec![
                when(|p| amine(p, 12), &[M::ChloroundecylAmine]),
                when(|p| amide_nitrogen(p, 12), &[M::ChloroundecylAmide]),
            ]),
        ])],
    );

    t.add(
        "Br-C-C-C-C-C-C-C-C-C-C-C-O",
        clauses![when(|p| straight(p, 1, 12), &[]).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 12), &[M::BromoUndecanol]),
                when(|p| ether_oxygen(p, 12), &[M::BromoundecylEther]),
                when(|p| ester_oxygen(p, 12), &[M::BromoundecylEster]),
            ]),
        ])],
    );

    t.add(
        "Br-C-C-C-C-C-C-C-C-C-C-C-N",
        clauses![when(|p| straight(p, 1, 12), &[]).then(clauses![
            first_of(vec![
                when(|p| amine(p, 12), &[M::BromoundecylAmine]),
                when(|p| amide_nitrogen(p, 12), &[M::BromoundecylAmide]),
            ]),
        ])],
    );

    t.add(
        "F-C-C-C-C-C-C-C-C-C-C-C-O",
        clauses![when(|p| straight(p, 1, 12), &[]).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 12), &[M::FluoroUndecanol]),
                when(|p| ester_oxygen(p, 12), &[M::FluoroundecylEster]),
            ]),
        ])],
    );

    t.add(
        "F-C-C-C-C-C-C-C-C-C-C-C-N",
        clauses![when(|p| straight(p, 1, 12), &[]).then(clauses![
            when(|p| amine(p, 12), &[M::FluoroundecylAmine]),
        ])],
    );

    t.add(
        "I-C-C-C-C-C-C-C-C-C-C-C-O",
        clauses![when(|p| straight(p, 1, 12), &[]).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 12), &[M::IodoUndecanol]),
                when(|p| ester_oxygen(p, 12), &[M::IodoundecylEster]),
            ]),
        ])],
    );

    t.add(
        "I-C-C-C-C-C-C-C-C-C-C-C-N",
        clauses![when(|p| straight(p, 1, 12), &[]).then(clauses![
            when(|p| amine(p, 12), &[M::IodoundecylAmine]),
        ])],
    );

    t.add(
        "Cl-C-C-C-C-C-C-C-C-C-C-C-S",
        clauses![when(|p| straight(p, 1, 12), &[]).then(clauses![
            first_of(vec![
                when(|p| thiol(p, 12), &[M::ChloroUndecanethiol]),
                when(|p| thioether(p, 12), &[M::ChloroundecylSulfide]),
            ]),
        ])],
    );

    t.add(
        "Br-C-C-C-C-C-C-C-C-C-C-C-S",
        clauses![when(|p| straight(p, 1, 12), &[]).then(clauses![
            first_of(vec![
                when(|p| thiol(p, 12), &[M::BromoUndecanethiol]),
                when(|p| thioether(p, 12), &[M::BromoundecylSulfide]),
            ]),
        ])],
    );

    t.add(
        "O-C-C-C-C-C-C-C-C-C-C-C-P",
        clauses![when(|p| straight(p, 1, 12), &[]).then(clauses![
            first_of(vec![
                when(|p| p.group(12) == G::PhosphonatePhosphorus && hydroxyl(p, 0), &[M::HydroxyundecylPhosphonate]),
                when(
                    |p| p.group(12) == G::PhosphonatePhosphorus && ester_oxygen(p, 0),
                    &[M::AcyloxyundecylPhosphonate],
                ),
            ]),
        ])],
    );

    t.add(
        "N-C-C-C-C-C-C-C-C-C-C-C-P",
        clauses![when(|p| straight(p, 1, 12), &[]).then(clauses![
            when(|p| p.group(12) == G::PhosphonatePhosphorus && primary_amine(p, 0), &[M::AminoundecylPhosphonate]),
        ])],
    );

    t.add("F-C-C-C-C-C-C-C-C-C-C-C-F", clauses![when(|p| straight(p, 1, 12), &[M::OneElevenDifluoroundecane])]);

    t.add("Cl-C-C-C-C-C-C-C-C-C-C-C-F", clauses![when(|p| straight(p, 1, 12), &[M::OneChloroElevenFluoroundecane])]);

    t.add("Br-C-C-C-C-C-C-C-C-C-C-C-F", clauses![when(|p| straight(p, 1, 12), &[M::OneBromoElevenFluoroundecane])]);

    t.add("F-C-C-C-C-C-C-C-C-C-C-C-I", clauses![when(|p| straight(p, 1, 12), &[M::OneFluoroElevenIodoundecane])]);

    t.add("Cl-C-C-C-C-C-C-C-C-C-C-C-Cl", clauses![when(|p| straight(p, 1, 12), &[M::OneElevenDichloroundecane])]);

    t.add("Br-C-C-C-C-C-C-C-C-C-C-C-Cl", clauses![when(|p| straight(p, 1, 12), &[M::OneBromoElevenChloroundecane])]);

    t.add("Cl-C-C-C-C-C-C-C-C-C-C-C-I", clauses![when(|p| straight(p, 1, 12), &[M::OneChloroElevenIodoundecane])]);

    t.add("Br-C-C-C-C-C-C-C-C-C-C-C-Br", clauses![when(|p| straight(p, 1, 12), &[M::OneElevenDibromoundecane])]);

    t.add("Br-C-C-C-C-C-C-C-C-C-C-C-I", clauses![when(|p| straight(p, 1, 12), &[M::OneBromoElevenIodoundecane])]);

    t.add("I-C-C-C-C-C-C-C-C-C-C-C-I", clauses![when(|p| straight(p, 1, 12), &[M::OneElevenDiiodoundecane])]);

    t.add(
        "C-C-O-C-C-O-C-C-O-C-C-O-C",
        clauses![when(
            |p| {
                alkyl(p, 0)
                    && straight(p, 1, 2)
                    && straight(p, 3, 5)
                    && straight(p, 6, 8)
                    && straight(p, 9, 11)
                    && alkyl(p, 12)
            },
            &[M::OligoOxyethyleneChainFourOxygensEndCapsOneAndTwo],
        )],
    );

    t.add(
        "O-C-C-O-C-C-O-C-C-O-C-C-O",
        clauses![when(
            |p| straight(p, 1, 3) && straight(p, 4, 6) && straight(p, 7, 9) && straight(p, 10, 12),
            &[M::OligoOxyethyleneChainFiveOxygensEndCapsZeroAndZero],
        )],
    );

    t.add(
        "C-C-O-C-C-C-O-C-C-C-O-C-C",
        clauses![when(
            |p| {
                alkyl(p, 0)
                    && straight(p, 1, 2)
                    && straight(p, 3, 6)
                    && straight(p, 7, 10)
                    && alkyl(p, 12)
                    && straight(p, 11, 12)
            },
            &[M::OligoOxytrimethyleneChainThreeOxygensEndCapsTwoAndTwo],
        )],
    );

    t.add(
        "O-C-C-C-O-C-C-C-O-C-C-C-O",
        clauses![when(
            |p| straight(p, 1, 4) && straight(p, 5, 8) && straight(p, 9, 12),
            &[M::OligoOxytrimethyleneChainFourOxygensEndCapsZeroAndZero],
        )],
    );

    t.add(
        "C-C-O-C-C-C-C-O-C-C-C-C-O",
        clauses![when(
            |p| alkyl(p, 0) && straight(p, 1, 2) && straight(p, 3, 7) && straight(p, 8, 12),
            &[M::OligoOxytetramethyleneChainThreeOxygensEndCapsZeroAndTwo],
        )],
    );

    t.add(
        "C-O-C-C-C-C-O-C-C-C-C-O-C",
        clauses![when(
            |p| alkyl(p, 0) && straight(p, 2, 6) && straight(p, 7, 11) && alkyl(p, 12),
            &[M::OligoOxytetramethyleneChainThreeOxygensEndCapsOneAndOne],
        )],
    );

    t.add(
        "C-C-N-C-C-N-C-C-N-C-C-N-C",
        clauses![when(
            |p| {
                alkyl(p, 0)
                    && straight(p, 1, 2)
                    && straight(p, 3, 5)
                    && straight(p, 6, 8)
                    && straight(p, 9, 11)
                    && alkyl(p, 12)
            },
            &[M::OligoIminoethyleneChainFourNitrogensEndCapsOneAndTwo],
        )],
    );

    t.add(
        "N-C-C-N-C-C-N-C-C-N-C-C-N",
        clauses![when(
            |p| straight(p, 1, 3) && straight(p, 4, 6) && straight(p, 7, 9) && straight(p, 10, 12),
            &[M::OligoIminoethyleneChainFiveNitrogensEndCapsZeroAndZero],
        )],
    );

    t.add(
        "C-C-N-C-C-C-N-C-C-C-N-C-C",
        clauses![when(
            |p| {
                alkyl(p, 0)
                    && straight(p, 1, 2)
                    && straight(p, 3, 6)
                    && straight(p, 7, 10)
                    && alkyl(p, 12)
                    && straight(p, 11, 12)
            },
            &[M::OligoIminotrimethyleneChainThreeNitrogensEndCapsTwoAndTwo],
        )],
    );

    t.add(
        "N-C-C-C-N-C-C-C-N-C-C-C-N",
        clauses![when(
            |p| straight(p, 1, 4) && straight(p, 5, 8) && straight(p, 9, 12),
            &[M::OligoIminotrimethyleneChainFourNitrogensEndCapsZeroAndZero],
        )],
    );

    t.add(
        "C-C-N-C-C-C-C-N-C-C-C-C-N",
        clauses![when(
            |p| alkyl(p, 0) && straight(p, 1, 2) && straight(p, 3, 7) && straight(p, 8, 12),
            &[M::OligoIminotetramethyleneChainThreeNitrogensEndCapsZeroAndTwo],
        )],
    );

    t.add(
        "C-N-C-C-C-C-N-C-C-C-C-N-C",
        clauses![when(
            |p| alkyl(p, 0) && straight(p, 2, 6) && straight(p, 7, 11) && alkyl(p, 12),
            &[M::OligoIminotetramethyleneChainThreeNitrogensEndCapsOneAndOne],
        )],
    );

    t.add(
        "C-C-S-C-C-S-C-C-S-C-C-S-C",
        clauses![when(
            |p| {
                alkyl(p, 0)
                    && straight(p, 1, 2)
                    && straight(p, 3, 5)
                    && straight(p, 6, 8)
                    && straight(p, 9, 11)
                    && alkyl(p, 12)
            },
            &[M::OligoThioethyleneChainFourSulfursEndCapsOneAndTwo],
        )],
    );

    t.add(
        "S-C-C-S-C-C-S-C-C-S-C-C-S",
        clauses![when(
            |p| straight(p, 1, 3) && straight(p, 4, 6) && straight(p, 7, 9) && straight(p, 10, 12),
            &[M::OligoThioethyleneChainFiveSulfursEndCapsZeroAndZero],
        )],
    );

    t.add(
        "C-C-S-C-C-C-S-C-C-C-S-C-C",
        clauses![when(
            |p| {
                alkyl(p, 0)
                    && straight(p, 1, 2)
                    && straight(p, 3, 6)
                    && straight(p, 7, 10)
                    && alkyl(p, 12)
                    && straight(p, 11, 12)
            },
            &[M::OligoThiotrimethyleneChainThreeSulfursEndCapsTwoAndTwo],
        )],
    );

    t.add(
        "S-C-C-C-S-C-C-C-S-C-C-C-S",
        clauses![when(
            |p| straight(p, 1, 4) && straight(p, 5, 8) && straight(p, 9, 12),
            &[M::OligoThiotrimethyleneChainFourSulfursEndCapsZeroAndZero],
        )],
    );
}

#[cfg(test)]
mod tests {
    use crate::engine::MotifEngine;
    use crate::motif::Motif as M;
    use crate::testing::smiles;

    #[test]
    fn hexanediol() {
        // HO(CH2)6OH
        let ctx = smiles("OCCCCCCO", &[], &[]);
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        assert!(fp.get(M::AlphaOmegaHexanediol));
        assert!(!fp.get(M::OneBromoFourChlorobutane));
    }

    #[test]
    fn bromochlorobutane() {
        let ctx = smiles("ClCCCCBr", &[], &[]);
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        assert!(fp.get(M::OneBromoFourChlorobutane));
        assert!(!fp.get(M::AlphaOmegaHexanediol));
    }

    #[test]
    fn triethylene_glycol() {
        let ctx = smiles("OCCOCCOCCO", &[], &[]);
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        for motif in [
            M::AlkoxyEthanol,
            M::DialkoxyEthane,
            M::OligoOxyethyleneChainTwoOxygensEndCapsOneAndTwo,
            M::OligoOxyethyleneChainTwoOxygensEndCapsTwoAndTwo,
            M::OligoOxyethyleneChainThreeOxygensEndCapsZeroAndOne,
            M::OligoOxyethyleneChainThreeOxygensEndCapsZeroAndTwo,
        ] {
            assert!(fp.get(motif), "{motif}");
        }
        assert!(!fp.get(M::AlphaOmegaHexanediol));
    }

    #[test]
    fn aminopentanol() {
        let ctx = smiles("NCCCCCO", &[], &[]);
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        assert!(fp.get(M::AminoPentanol));
        assert!(!fp.get(M::AlphaOmegaHexanediol));
    }

    #[test]
    fn hexylphosphonic_acid() {
        let ctx = smiles("CCCCCCP(=O)(O)O", &[], &[]);
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        assert!(fp.get(M::NHexylphosphonate));
        assert!(!fp.get(M::AlphaOmegaHexanediol));
    }

    #[test]
    fn octanethiol() {
        let ctx = smiles("CCCCCCCCS", &[], &[]);
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        assert!(fp.get(M::NOctanethiol));
        assert!(!fp.get(M::AlphaOmegaHexanediol));
    }

    #[test]
    fn pentylamine() {
        let ctx = smiles("CCCCCN", &[], &[]);
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        assert!(fp.get(M::NPentylamine));
        assert!(!fp.get(M::AlphaOmegaHexanediol));
    }

    #[test]
    fn chlorohexanol() {
        let ctx = smiles("ClCCCCCCO", &[], &[]);
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        assert!(fp.get(M::ChloroHexanol));
        assert!(!fp.get(M::AlphaOmegaHexanediol));
    }

    #[test]
    fn dibutyl_sulfide() {
        let ctx = smiles("CCCCSCCCC", &[], &[]);
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        assert!(fp.get(M::NButylthio));
        assert!(!fp.get(M::AlphaOmegaHexanediol));
    }

    #[test]
    fn hexyl_acetate() {
        let ctx = smiles("CCCCCCOC(C)=O", &[], &[]);
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        assert!(fp.get(M::NHexylEster));
        assert!(!fp.get(M::AlphaOmegaHexanediol));
    }

    #[test]
    fn isopentanol() {
        let ctx = smiles("CC(C)CCO", &[], &[]);
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        assert!(fp.get(M::Isopentanol));
        assert!(!fp.get(M::AlphaOmegaHexanediol));
    }

    #[test]
    fn perfluorohexane() {
        let ctx = smiles("FC(F)(F)C(F)(F)C(F)(F)C(F)(F)C(F)(F)C(F)(F)F", &[], &[]);
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        for motif in [
            M::Perfluoroethyl,
            M::Perfluoropropyl,
            M::Perfluorobutyl,
            M::Perfluoropentyl,
            M::Perfluorohexyl,
        ] {
            assert!(fp.get(motif), "{motif}");
        }
        assert!(!fp.get(M::AlphaOmegaHexanediol));
    }
}
