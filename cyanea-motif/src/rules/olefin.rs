//! Alkene and alkyne positions along saturated chains: unsaturated acyl groups,
//! omega double bonds, and heteroatom-capped alkenyl and alkynyl chains.

use super::common::*;
use super::{first_of, when, RuleTable};
use crate::graph::FunctionGroup as G;
use crate::motif::Motif as M;

pub(super) fn extend(t: &mut RuleTable) {
    match t.path_len() {
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

fn four(t: &mut RuleTable) {
    t.extend(
        "C-C-C=C",
        clauses![when(
            |p| methyl(p, 0) && straight(p, 1, 2) && p.group(3) == G::AlkeneCarbon && p.env(3).heavy_degree == 2,
            &[M::OmegaThreeDoubleBond],
        )],
    );

    t.add(
        "C=C-C-N",
        clauses![when(|p| hydrogens(p, 0, 2) && straight(p, 2, 3), &[]).then(clauses![
            first_of(vec![
                when(|p| primary_amine(p, 3), &[M::PropTwoEnOneAmine]),
                when(|p| amide_nitrogen(p, 3), &[M::PropTwoEnylAmide]),
            ]),
        ])],
    );

    t.add(
        "C=C-C-S",
        clauses![when(|p| hydrogens(p, 0, 2) && straight(p, 2, 3), &[]).then(clauses![
            first_of(vec![
                when(|p| thiol(p, 3), &[M::PropTwoEnOneThiol]),
                when(|p| thioether(p, 3), &[M::PropTwoEnylSulfide]),
            ]),
        ])],
    );

    t.add("C=C-C-Cl", clauses![when(|p| hydrogens(p, 0, 2) && straight(p, 2, 3), &[M::ChloroPropTwoEne])]);

    t.add("Br-C-C=C", clauses![when(|p| hydrogens(p, 3, 2) && straight(p, 1, 2), &[M::BromoPropTwoEne])]);
}

fn five(t: &mut RuleTable) {
    t.add(
        "C=C-C-C=O",
        clauses![first_of(vec![
            when(|p| hydrogens(p, 0, 2) && straight(p, 2, 3), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 3), &[M::ButThreeEnoicAcid]),
                    when(|p| ester_carbon(p, 3), &[M::ButThreeEnoateEster]),
                    when(|p| amide_carbon(p, 3), &[M::ButThreeEnamide]),
                    when(|p| aldehyde_carbon(p, 3), &[M::ButThreeEnal]),
                ]),
            ]),
            when(
                |p| p.group(0) == G::AlkeneCarbon && p.env(0).heavy_degree == 2 && straight(p, 2, 3),
                &[],
            ).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 3) || ester_carbon(p, 3), &[M::DeltaThreeUnsaturatedAcyl]),
                    when(|p| amide_carbon(p, 3), &[M::DeltaThreeUnsaturatedAmide]),
                ]),
            ]),
        ])],
    );

    t.add(
        "C#C-C-C=O",
        clauses![first_of(vec![
            when(|p| hydrogens(p, 0, 1) && straight(p, 2, 3), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 3), &[M::ButThreeYnoicAcid]),
                    when(|p| ester_carbon(p, 3), &[M::ButThreeYnoateEster]),
                    when(|p| amide_carbon(p, 3), &[M::ButThreeYnamide]),
                    when(|p| aldehyde_carbon(p, 3), &[M::ButThreeYnal]),
                ]),
            ]),
            when(
                |p| p.group(0) == G::AlkyneCarbon && p.env(0).heavy_degree == 2 && straight(p, 2, 3),
                &[],
            ).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 3) || ester_carbon(p, 3), &[M::DeltaThreeAcetylenicAcyl]),
                    when(|p| amide_carbon(p, 3), &[M::DeltaThreeAcetylenicAmide]),
                ]),
            ]),
        ])],
    );

    t.add(
        "C-C-C-C=C",
        clauses![when(
            |p| methyl(p, 0) && straight(p, 1, 3) && p.group(4) == G::AlkeneCarbon && p.env(4).heavy_degree == 2,
            &[M::OmegaFourDoubleBond],
        )],
    );

    t.add(
        "C=C-C-C-N",
        clauses![when(|p| hydrogens(p, 0, 2) && straight(p, 2, 4), &[]).then(clauses![
            first_of(vec![
                when(|p| primary_amine(p, 4), &[M::ButThreeEnOneAmine]),
                when(|p| amide_nitrogen(p, 4), &[M::ButThreeEnylAmide]),
            ]),
        ])],
    );

    t.add(
        "C=C-C-C-S",
        clauses![when(|p| hydrogens(p, 0, 2) && straight(p, 2, 4), &[]).then(clauses![
            first_of(vec![
                when(|p| thiol(p, 4), &[M::ButThreeEnOneThiol]),
                when(|p| thioether(p, 4), &[M::ButThreeEnylSulfide]),
            ]),
        ])],
    );

    t.add("C=C-C-C-Cl", clauses![when(|p| hydrogens(p, 0, 2) && straight(p, 2, 4), &[M::ChloroButThreeEne])]);

    t.add("Br-C-C-C=C", clauses![when(|p| hydrogens(p, 4, 2) && straight(p, 1, 3), &[M::BromoButThreeEne])]);

    t.add(
        "C#C-C-C-O",
        clauses![when(|p| hydrogens(p, 0, 1) && straight(p, 2, 4), &[]).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 4), &[M::ButThreeYnOneOl]),
                when(|p| ether_oxygen(p, 4), &[M::ButThreeYnylEther]),
                when(|p| ester_oxygen(p, 4), &[M::ButThreeYnylEster]),
            ]),
        ])],
    );

    t.add(
        "C#C-C-C-N",
        clauses![when(|p| hydrogens(p, 0, 1) && straight(p, 2, 4), &[]).then(clauses![
            first_of(vec![
                when(|p| primary_amine(p, 4), &[M::ButThreeYnOneAmine]),
                when(|p| amide_nitrogen(p, 4), &[M::ButThreeYnylAmide]),
            ]),
        ])],
    );

    t.add(
        "C#C-C-C-S",
        clauses![when(|p| hydrogens(p, 0, 1) && straight(p, 2, 4), &[]).then(clauses![
            first_of(vec![
                when(|p| thiol(p, 4), &[M::ButThreeYnOneThiol]),
                when(|p| thioether(p, 4), &[M::ButThreeYnylSulfide]),
            ]),
        ])],
    );

    t.add("C#C-C-C-Cl", clauses![when(|p| hydrogens(p, 0, 1) && straight(p, 2, 4), &[M::ChloroButThreeYne])]);

    t.add("Br-C-C-C#C", clauses![when(|p| hydrogens(p, 4, 1) && straight(p, 1, 3), &[M::BromoButThreeYne])]);
}

fn six(t: &mut RuleTable) {
    t.add(
        "C=C-C-C-C=O",
        clauses![first_of(vec![
            when(|p| hydrogens(p, 0, 2) && straight(p, 2, 4), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 4), &[M::PentFourEnoicAcid]),
                    when(|p| ester_carbon(p, 4), &[M::PentFourEnoateEster]),
                    when(|p| amide_carbon(p, 4), &[M::PentFourEnamide]),
                    when(|p| aldehyde_carbon(p, 4), &[M::PentFourEnal]),
                ]),
            ]),
            when(
                |p| p.group(0) == G::AlkeneCarbon && p.env(0).heavy_degree == 2 && straight(p, 2, 4),
                &[],
            ).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 4) || ester_carbon(p, 4), &[M::DeltaFourUnsaturatedAcyl]),
                    when(|p| amide_carbon(p, 4), &[M::DeltaFourUnsaturatedAmide]),
                ]),
            ]),
        ])],
    );

    t.add(
        "C#C-C-C-C=O",
        clauses![first_of(vec![
            when(|p| hydrogens(p, 0, 1) && straight(p, 2, 4), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 4), &[M::PentFourYnoicAcid]),
                    when(|p| ester_carbon(p, 4), &[M::PentFourYnoateEster]),
                    when(|p| amide_carbon(p, 4), &[M::PentFourYnamide]),
                    when(|p| aldehyde_carbon(p, 4), &[M::PentFourYnal]),
                ]),
            ]),
            when(
                |p| p.group(0) == G::AlkyneCarbon && p.env(0).heavy_degree == 2 && straight(p, 2, 4),
                &[],
            ).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 4) || ester_carbon(p, 4), &[M::DeltaFourAcetylenicAcyl]),
                    when(|p| amide_carbon(p, 4), &[M::DeltaFourAcetylenicAmide]),
                ]),
            ]),
        ])],
    );

    t.add(
        "C-C-C-C-C=C",
        clauses![when(
            |p| methyl(p, 0) && straight(p, 1, 4) && p.group(5) == G::AlkeneCarbon && p.env(5).heavy_degree == 2,
            &[M::OmegaFiveDoubleBond],
        )],
    );

    t.add(
        "C=C-C-C-C-O",
        clauses![first_of(vec![
            when(|p| hydrogens(p, 0, 2) && straight(p, 2, 5), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 5), &[M::PentFourEnOneOl]),
                    when(|p| ether_oxygen(p, 5), &[M::PentFourEnylEther]),
                    when(|p| ester_oxygen(p, 5), &[M::PentFourEnylEster]),
                ]),
            ]),
            when(
                |p| p.group(0) == G::AlkeneCarbon && p.env(0).heavy_degree == 2 && straight(p, 2, 5),
                &[],
            ).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 5), &[M::DeltaFourAlkenol]),
                    when(|p| ether_oxygen(p, 5) || ester_oxygen(p, 5), &[M::DeltaFourAlkenylOxy]),
                ]),
            ]),
        ])],
    );

    t.add(
        "C=C-C-C-C-N",
        clauses![first_of(vec![
            when(|p| hydrogens(p, 0, 2) && straight(p, 2, 5), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 5), &[M::PentFourEnOneAmine]),
                    when(|p| amide_nitrogen(p, 5), &[M::PentFourEnylAmide]),
                ]),
            ]),
            when(
                |p| p.group(0) == G::AlkeneCarbon && p.env(0).heavy_degree == 2 && straight(p, 2, 5),
                &[],
            ).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 5), &[M::DeltaFourAlkenylamine]),
                    when(|p| amide_nitrogen(p, 5), &[M::DeltaFourAlkenylAmide]),
                ]),
            ]),
        ])],
    );

    t.add(
        "C=C-C-C-C-S",
        clauses![when(|p| hydrogens(p, 0, 2) && straight(p, 2, 5), &[]).then(clauses![
            first_of(vec![
                when(|p| thiol(p, 5), &[M::PentFourEnOneThiol]),
                when(|p| thioether(p, 5), &[M::PentFourEnylSulfide]),
            ]),
        ])],
    );

    t.add("C=C-C-C-C-Cl", clauses![when(|p| hydrogens(p, 0, 2) && straight(p, 2, 5), &[M::ChloroPentFourEne])]);

    t.add("Br-C-C-C-C=C", clauses![when(|p| hydrogens(p, 5, 2) && straight(p, 1, 4), &[M::BromoPentFourEne])]);

    t.add(
        "C#C-C-C-C-O",
        clauses![when(|p| hydrogens(p, 0, 1) && straight(p, 2, 5), &[]).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 5), &[M::PentFourYnOneOl]),
                when(|p| ether_oxygen(p, 5), &[M::PentFourYnylEther]),
                when(|p| ester_oxygen(p, 5), &[M::PentFourYnylEster]),
            ]),
        ])],
    );

    t.add(
        "C#C-C-C-C-N",
        clauses![when(|p| hydrogens(p, 0, 1) && straight(p, 2, 5), &[]).then(clauses![
            first_of(vec![
                when(|p| primary_amine(p, 5), &[M::PentFourYnOneAmine]),
                when(|p| amide_nitrogen(p, 5), &[M::PentFourYnylAmide]),
            ]),
        ])],
    );

    t.add(
        "C#C-C-C-C-S",
        clauses![when(|p| hydrogens(p, 0, 1) && straight(p, 2, 5), &[]).then(clauses![
            first_of(vec![
                when(|p| thiol(p, 5), &[M::PentFourYnOneThiol]),
                when(|p| thioether(p, 5), &[M::PentFourYnylSulfide]),
            ]),
        ])],
    );

    t.add("C#C-C-C-C-Cl", clauses![when(|p| hydrogens(p, 0, 1) && straight(p, 2, 5), &[M::ChloroPentFourYne])]);

    t.add("Br-C-C-C-C#C", clauses![when(|p| hydrogens(p, 5, 1) && straight(p, 1, 4), &[M::BromoPentFourYne])]);
}

fn seven(t: &mut RuleTable) {
    t.add(
        "C=C-C-C-C-C=O",
        clauses![first_of(vec![
            when(|p| hydrogens(p, 0, 2) && straight(p, 2, 5), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 5), &[M::HexFiveEnoicAcid]),
                    when(|p| ester_carbon(p, 5), &[M::HexFiveEnoateEster]),
                    when(|p| amide_carbon(p, 5), &[M::HexFiveEnamide]),
                    when(|p| aldehyde_carbon(p, 5), &[M::HexFiveEnal]),
                ]),
            ]),
            when(
                |p| p.group(0) == G::AlkeneCarbon && p.env(0).heavy_degree == 2 && straight(p, 2, 5),
                &[],
            ).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 5) || ester_carbon(p, 5), &[M::DeltaFiveUnsaturatedAcyl]),
                    when(|p| amide_carbon(p, 5), &[M::DeltaFiveUnsaturatedAmide]),
                ]),
            ]),
        ])],
    );

    t.add(
        "C#C-C-C-C-C=O",
        clauses![first_of(vec![
            when(|p| hydrogens(p, 0, 1) && straight(p, 2, 5), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 5), &[M::HexFiveYnoicAcid]),
                    when(|p| ester_carbon(p, 5), &[M::HexFiveYnoateEster]),
                    when(|p| amide_carbon(p, 5), &[M::HexFiveYnamide]),
                    when(|p| aldehyde_carbon(p, 5), &[M::HexFiveYnal]),
                ]),
            ]),
            when(
                |p| p.group(0) == G::AlkyneCarbon && p.env(0).heavy_degree == 2 && straight(p, 2, 5),
                &[],
            ).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 5) || ester_carbon(p, 5), &[M::DeltaFiveAcetylenicAcyl]),
                    when(|p| amide_carbon(p, 5), &[M::DeltaFiveAcetylenicAmide]),
                ]),
            ]),
        ])],
    );

    t.add(
        "C-C-C-C-C-C=C",
        clauses![when(
            |p| methyl(p, 0) && straight(p, 1, 5) && p.group(6) == G::AlkeneCarbon && p.env(6).heavy_degree == 2,
            &[M::OmegaSixDoubleBond],
        )],
    );

    t.add(
        "C=C-C-C-C-C-O",
        clauses![first_of(vec![
            when(|p| hydrogens(p, 0, 2) && straight(p, 2, 6), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 6), &[M::HexFiveEnOneOl]),
                    when(|p| ether_oxygen(p, 6), &[M::HexFiveEnylEther]),
                    when(|p| ester_oxygen(p, 6), &[M::HexFiveEnylEster]),
                ]),
            ]),
            when(
                |p| p.group(0) == G::AlkeneCarbon && p.env(0).heavy_degree == 2 && straight(p, 2, 6),
                &[],
            ).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 6), &[M::DeltaFiveAlkenol]),
                    when(|p| ether_oxygen(p, 6) || ester_oxygen(p, 6), &[M::DeltaFiveAlkenylOxy]),
                ]),
            ]),
        ])],
    );

    t.add(
        "C=C-C-C-C-C-N",
        clauses![first_of(vec![
            when(|p| hydrogens(p, 0, 2) && straight(p, 2, 6), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 6), &[M::HexFiveEnOneAmine]),
                    when(|p| amide_nitrogen(p, 6), &[M::HexFiveEnylAmide]),
                ]),
            ]),
            when(
                |p| p.group(0) == G::AlkeneCarbon && p.env(0).heavy_degree == 2 && straight(p, 2, 6),
                &[],
            ).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 6), &[M::DeltaFiveAlkenylamine]),
                    when(|p| amide_nitrogen(p, 6), &[M::DeltaFiveAlkenylAmide]),
                ]),
            ]),
        ])],
    );

    t.add(
        "C=C-C-C-C-C-S",
        clauses![when(|p| hydrogens(p, 0, 2) && straight(p, 2, 6), &[]).then(clauses![
            first_of(vec![
                when(|p| thiol(p, 6), &[M::HexFiveEnOneThiol]),
                when(|p| thioether(p, 6), &[M::HexFiveEnylSulfide]),
            ]),
        ])],
    );

    t.add("C=C-C-C-C-C-Cl", clauses![when(|p| hydrogens(p, 0, 2) && straight(p, 2, 6), &[M::ChloroHexFiveEne])]);

    t.add("Br-C-C-C-C-C=C", clauses![when(|p| hydrogens(p, 6, 2) && straight(p, 1, 5), &[M::BromoHexFiveEne])]);

    t.add(
        "C#C-C-C-C-C-O",
        clauses![when(|p| hydrogens(p, 0, 1) && straight(p, 2, 6), &[]).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 6), &[M::HexFiveYnOneOl]),
                when(|p| ether_oxygen(p, 6), &[M::HexFiveYnylEther]),
                when(|p| ester_oxygen(p, 6), &[M::HexFiveYnylEster]),
            ]),
        ])],
    );

    t.add(
        "C#C-C-C-C-C-N",
        clauses![when(|p| hydrogens(p, 0, 1) && straight(p, 2, 6), &[]).then(clauses![
            first_of(vec![
                when(|p| primary_amine(p, 6), &[M::HexFiveYnOneAmine]),
                when(|p| amide_nitrogen(p, 6), &[M::HexFiveYnylAmide]),
            ]),
        ])],
    );

    t.add(
        "C#C-C-C-C-C-S",
        clauses![when(|p| hydrogens(p, 0, 1) && straight(p, 2, 6), &[]).then(clauses![
            first_of(vec![
                when(|p| thiol(p, 6), &[M::HexFiveYnOneThiol]),
                when(|p| thioether(p, 6), &[M::HexFiveYnylSulfide]),
            ]),
        ])],
    );

    t.add("C#C-C-C-C-C-Cl", clauses![when(|p| hydrogens(p, 0, 1) && straight(p, 2, 6), &[M::ChloroHexFiveYne])]);

    t.add("Br-C-C-C-C-C#C", clauses![when(|p| hydrogens(p, 6, 1) && straight(p, 1, 5), &[M::BromoHexFiveYne])]);
}

fn eight(t: &mut RuleTable) {
    t.add(
        "C=C-C-C-C-C-C=O",
        clauses![first_of(vec![
            when(|p| hydrogens(p, 0, 2) && straight(p, 2, 6), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 6), &[M::HeptSixEnoicAcid]),
                    when(|p| ester_carbon(p, 6), &[M::HeptSixEnoateEster]),
                    when(|p| amide_carbon(p, 6), &[M::HeptSixEnamide]),
                    when(|p| aldehyde_carbon(p, 6), &[M::HeptSixEnal]),
                ]),
            ]),
            when(
                |p| p.group(0) == G::AlkeneCarbon && p.env(0).heavy_degree == 2 && straight(p, 2, 6),
                &[],
            ).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 6) || ester_carbon(p, 6), &[M::DeltaSixUnsaturatedAcyl]),
                    when(|p| amide_carbon(p, 6), &[M::DeltaSixUnsaturatedAmide]),
                ]),
            ]),
        ])],
    );

    t.add(
        "C#C-C-C-C-C-C=O",
        clauses![first_of(vec![
            when(|p| hydrogens(p, 0, 1) && straight(p, 2, 6), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 6), &[M::HeptSixYnoicAcid]),
                    when(|p| ester_carbon(p, 6), &[M::HeptSixYnoateEster]),
                    when(|p| amide_carbon(p, 6), &[M::HeptSixYnamide]),
                    when(|p| aldehyde_carbon(p, 6), &[M::HeptSixYnal]),
                ]),
            ]),
            when(
                |p| p.group(0) == G::AlkyneCarbon && p.env(0).heavy_degree == 2 && straight(p, 2, 6),
                &[],
            ).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 6) || ester_carbon(p, 6), &[M::DeltaSixAcetylenicAcyl]),
                    when(|p| amide_carbon(p, 6), &[M::DeltaSixAcetylenicAmide]),
                ]),
            ]),
        ])],
    );

    t.add(
        "C-C-C-C-C-C-C=C",
        clauses![when(
            |p| methyl(p, 0) && straight(p, 1, 6) && p.group(7) == G::AlkeneCarbon && p.env(7).heavy_degree == 2,
            &[M::OmegaSevenDoubleBond],
        )],
    );

    t.add(
        "C=C-C-C-C-C-C-O",
        clauses![first_of(vec![
            when(|p| hydrogens(p, 0, 2) && straight(p, 2, 7), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 7), &[M::HeptSixEnOneOl]),
                    when(|p| ether_oxygen(p, 7), &[M::HeptSixEnylEther]),
                    when(|p| ester_oxygen(p, 7), &[M::HeptSixEnylEster]),
                ]),
            ]),
            when(
                |p| p.group(0) == G::AlkeneCarbon && p.env(0).heavy_degree == 2 && straight(p, 2, 7),
                &[],
            ).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 7), &[M::DeltaSixAlkenol]),
                    when(|p| ether_oxygen(p, 7) || ester_oxygen(p, 7), &[M::DeltaSixAlkenylOxy]),
                ]),
            ]),
        ])],
    );

    t.add(
        "C=C-C-C-C-C-C-N",
        clauses![first_of(vec![
            when(|p| hydrogens(p, 0, 2) && straight(p, 2, 7), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 7), &[M::HeptSixEnOneAmine]),
                    when(|p| amide_nitrogen(p, 7), &[M::HeptSixEnylAmide]),
                ]),
            ]),
            when(
                |p| p.group(0) == G::AlkeneCarbon && p.env(0).heavy_degree == 2 && straight(p, 2, 7),
                &[],
            ).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 7), &[M::DeltaSixAlkenylamine]),
                    when(|p| amide_nitrogen(p, 7), &[M::DeltaSixAlkenylAmide]),
                ]),
            ]),
        ])],
    );

    t.add(
        "C=C-C-C-C-C-C-S",
        clauses![when(|p| hydrogens(p, 0, 2) && straight(p, 2, 7), &[]).then(clauses![
            first_of(vec![
                when(|p| thiol(p, 7), &[M::HeptSixEnOneThiol]),
                when(|p| thioether(p, 7), &[M::HeptSixEnylSulfide]),
            ]),
        ])],
    );

    t.add("C=C-C-C-C-C-C-Cl", clauses![when(|p| hydrogens(p, 0, 2) && straight(p, 2, 7), &[M::ChloroHeptSixEne])]);

    t.add("Br-C-C-C-C-C-C=C", clauses![when(|p| hydrogens(p, 7, 2) && straight(p, 1, 6), &[M::BromoHeptSixEne])]);

    t.add(
        "C#C-C-C-C-C-C-O",
        clauses![when(|p| hydrogens(p, 0, 1) && straight(p, 2, 7), &[]).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 7), &[M::HeptSixYnOneOl]),
                when(|p| ether_oxygen(p, 7), &[M::HeptSixYnylEther]),
                when(|p| ester_oxygen(p, 7), &[M::HeptSixYnylEster]),
            ]),
        ])],
    );

    t.add(
        "C#C-C-C-C-C-C-N",
        clauses![when(|p| hydrogens(p, 0, 1) && straight(p, 2, 7), &[]).then(clauses![
            first_of(vec![
                when(|p| primary_amine(p, 7), &[M::HeptSixYnOneAmine]),
                when(|p| amide_nitrogen(p, 7), &[M::HeptSixYnylAmide]),
            ]),
        ])],
    );

    t.add(
        "C#C-C-C-C-C-C-S",
        clauses![when(|p| hydrogens(p, 0, 1) && straight(p, 2, 7), &[]).then(clauses![
            first_of(vec![
                when(|p| thiol(p, 7), &[M::HeptSixYnOneThiol]),
                when(|p| thioether(p, 7), &[M::HeptSixYnylSulfide]),
            ]),
        ])],
    );

    t.add("C#C-C-C-C-C-C-Cl", clauses![when(|p| hydrogens(p, 0, 1) && straight(p, 2, 7), &[M::ChloroHeptSixYne])]);

    t.add("Br-C-C-C-C-C-C#C", clauses![when(|p| hydrogens(p, 7, 1) && straight(p, 1, 6), &[M::BromoHeptSixYne])]);
}

fn nine(t: &mut RuleTable) {
    t.add(
        "C=C-C-C-C-C-C-C=O",
        clauses![first_of(vec![
            when(|p| hydrogens(p, 0, 2) && straight(p, 2, 7), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 7), &[M::OctSevenEnoicAcid]),
                    when(|p| ester_carbon(p, 7), &[M::OctSevenEnoateEster]),
                    when(|p| amide_carbon(p, 7), &[M::OctSevenEnamide]),
                    when(|p| aldehyde_carbon(p, 7), &[M::OctSevenEnal]),
                ]),
            ]),
            when(
                |p| p.group(0) == G::AlkeneCarbon && p.env(0).heavy_degree == 2 && straight(p, 2, 7),
                &[],
            ).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 7) || ester_carbon(p, 7), &[M::DeltaSevenUnsaturatedAcyl]),
                    when(|p| amide_carbon(p, 7), &[M::DeltaSevenUnsaturatedAmide]),
                ]),
            ]),
        ])],
    );

    t.add(
        "C#C-C-C-C-C-C-C=O",
        clauses![first_of(vec![
            when(|p| hydrogens(p, 0, 1) && straight(p, 2, 7), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 7), &[M::OctSevenYnoicAcid]),
                    when(|p| ester_carbon(p, 7), &[M::OctSevenYnoateEster]),
                    when(|p| amide_carbon(p, 7), &[M::OctSevenYnamide]),
                    when(|p| aldehyde_carbon(p, 7), &[M::OctSevenYnal]),
                ]),
            ]),
            when(
                |p| p.group(0) == G::AlkyneCarbon && p.env(0).heavy_degree == 2 && straight(p, 2, 7),
                &[],
            ).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 7) || ester_carbon(p, 7), &[M::DeltaSevenAcetylenicAcyl]),
                    when(|p| amide_carbon(p, 7), &[M::DeltaSevenAcetylenicAmide]),
                ]),
            ]),
        ])],
    );

    t.add(
        "C-C-C-C-C-C-C-C=C",
        clauses![when(
            |p| methyl(p, 0) && straight(p, 1, 7) && p.group(8) == G::AlkeneCarbon && p.env(8).heavy_degree == 2,
            &[M::OmegaEightDoubleBond],
        )],
    );

    t.add(
        "C=C-C-C-C-C-C-C-O",
        clauses![first_of(vec![
            when(|p| hydrogens(p, 0, 2) && straight(p, 2, 8), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 8), &[M::OctSevenEnOneOl]),
                    when(|p| ether_oxygen(p, 8), &[M::OctSevenEnylEther]),
                    when(|p| ester_oxygen(p, 8), &[M::OctSevenEnylEster]),
                ]),
            ]),
            when(
                |p| p.group(0) == G::AlkeneCarbon && p.env(0).heavy_degree == 2 && straight(p, 2, 8),
                &[],
            ).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 8), &[M::DeltaSevenAlkenol]),
                    when(|p| ether_oxygen(p, 8) || ester_oxygen(p, 8), &[M::DeltaSevenAlkenylOxy]),
                ]),
            ]),
        ])],
    );

    t.add(
        "C=C-C-C-C-C-C-C-N",
        clauses![first_of(vec![
            when(|p| hydrogens(p, 0, 2) && straight(p, 2, 8), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 8), &[M::OctSevenEnOneAmine]),
                    when(|p| amide_nitrogen(p, 8), &[M::OctSevenEnylAmide]),
                ]),
            ]),
            when(
                |p| p.group(0) == G::AlkeneCarbon && p.env(0).heavy_degree == 2 && straight(p, 2, 8),
                &[],
            ).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 8), &[M::DeltaSevenAlkenylamine]),
                    when(|p| amide_nitrogen(p, 8), &[M::DeltaSevenAlkenylAmide]),
                ]),
            ]),
        ])],
    );

    t.add(
        "C=C-C-C-C-C-C-C-S",
        clauses![when(|p| hydrogens(p, 0, 2) && straight(p, 2, 8), &[]).then(clauses![
            first_of(vec![
                when(|p| thiol(p, 8), &[M::OctSevenEnOneThiol]),
                when(|p| thioether(p, 8), &[M::OctSevenEnylSulfide]),
            ]),
        ])],
    );

    t.add("C=C-C-C-C-C-C-C-Cl", clauses![when(|p| hydrogens(p, 0, 2) && straight(p, 2, 8), &[M::ChloroOctSevenEne])]);

    t.add("Br-C-C-C-C-C-C-C=C", clauses![when(|p| hydrogens(p, 8, 2) && straight(p, 1, 7), &[M::BromoOctSevenEne])]);

    t.add(
        "C#C-C-C-C-C-C-C-O",
        clauses![when(|p| hydrogens(p, 0, 1) && straight(p, 2, 8), &[]).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 8), &[M::OctSevenYnOneOl]),
                when(|p| ether_oxygen(p, 8), &[M::OctSevenYnylEther]),
                when(|p| ester_oxygen(p, 8), &[M::OctSevenYnylEster]),
            ]),
        ])],
    );

    t.add(
        "C#C-C-C-C-C-C-C-N",
        clauses![when(|p| hydrogens(p, 0, 1) && straight(p, 2, 8), &[]).then(clauses![
            first_of(vec![
                when(|p| primary_amine(p, 8), &[M::OctSevenYnOneAmine]),
                when(|p| amide_nitrogen(p, 8), &[M::OctSevenYnylAmide]),
            ]),
        ])],
    );

    t.add(
        "C#C-C-C-C-C-C-C-S",
        clauses![when(|p| hydrogens(p, 0, 1) && straight(p, 2, 8), &[]).then(clauses![
            first_of(vec![
                when(|p| thiol(p, 8), &[M::OctSevenYnOneThiol]),
                when(|p| thioether(p, 8), &[M::OctSevenYnylSulfide]),
            ]),
        ])],
    );

    t.add("C#C-C-C-C-C-C-C-Cl", clauses![when(|p| hydrogens(p, 0, 1) && straight(p, 2, 8), &[M::ChloroOctSevenYne])]);

    t.add("Br-C-C-C-C-C-C-C#C", clauses![when(|p| hydrogens(p, 8, 1) && straight(p, 1, 7), &[M::BromoOctSevenYne])]);
}

fn ten(t: &mut RuleTable) {
    t.add(
        "C=C-C-C-C-C-C-C-C=O",
        clauses![first_of(vec![
            when(|p| hydrogens(p, 0, 2) && straight(p, 2, 8), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 8), &[M::NonEightEnoicAcid]),
                    when(|p| ester_carbon(p, 8), &[M::NonEightEnoateEster]),
                    when(|p| amide_carbon(p, 8), &[M::NonEightEnamide]),
                    when(|p| aldehyde_carbon(p, 8), &[M::NonEightEnal]),
                ]),
            ]),
            when(
                |p| p.group(0) == G::AlkeneCarbon && p.env(0).heavy_degree == 2 && straight(p, 2, 8),
                &[],
            ).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 8) || ester_carbon(p, 8), &[M::DeltaEightUnsaturatedAcyl]),
                    when(|p| amide_carbon(p, 8), &[M::DeltaEightUnsaturatedAmide]),
                ]),
            ]),
        ])],
    );

    t.add(
        "C#C-C-C-C-C-C-C-C=O",
        clauses![first_of(vec![
            when(|p| hydrogens(p, 0, 1) && straight(p, 2, 8), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 8), &[M::NonEightYnoicAcid]),
                    when(|p| ester_carbon(p, 8), &[M::NonEightYnoateEster]),
                    when(|p| amide_carbon(p, 8), &[M::NonEightYnamide]),
                    when(|p| aldehyde_carbon(p, 8), &[M::NonEightYnal]),
                ]),
            ]),
            when(
                |p| p.group(0) == G::AlkyneCarbon && p.env(0).heavy_degree == 2 && straight(p, 2, 8),
                &[],
            ).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 8) || ester_carbon(p, 8), &[M::DeltaEightAcetylenicAcyl]),
                    when(|p| amide_carbon(p, 8), &[M::DeltaEightAcetylenicAmide]),
                ]),
            ]),
        ])],
    );

    t.extend(
        "C-C-C-C-C-C-C-C-C=C",
        clauses![when(
            |p| methyl(p, 0) && straight(p, 1, 8) && p.group(9) == G::AlkeneCarbon && p.env(9).heavy_degree == 2,
            &[M::OmegaNineDoubleBond],
        )],
    );

    t.add(
        "C=C-C-C-C-C-C-C-C-O",
        clauses![first_of(vec![
            when(|p| hydrogens(p, 0, 2) && straight(p, 2, 9), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 9), &[M::NonEightEnOneOl]),
                    when(|p| ether_oxygen(p, 9), &[M::NonEightEnylEther]),
                    when(|p| ester_oxygen(p, 9), &[M::NonEightEnylEster]),
                ]),
            ]),
            when(
                |p| p.group(0) == G::AlkeneCarbon && p.env(0).heavy_degree == 2 && straight(p, 2, 9),
                &[],
            ).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 9), &[M::DeltaEightAlkenol]),
                    when(|p| ether_oxygen(p, 9) || ester_oxygen(p, 9), &[M::DeltaEightAlkenylOxy]),
                ]),
            ]),
        ])],
    );

    t.add(
        "C=C-C-C-C-C-C-C-C-N",
        clauses![first_of(vec![
            when(|p| hydrogens(p, 0, 2) && straight(p, 2, 9), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 9), &[M::NonEightEnOneAmine]),
                    when(|p| amide_nitrogen(p, 9), &[M::NonEightEnylAmide]),
                ]),
            ]),
            when(
                |p| p.group(0) == G::AlkeneCarbon && p.env(0).heavy_degree == 2 && straight(p, 2, 9),
                &[],
            ).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 9), &[M::DeltaEightAlkenylamine]),
                    when(|p| amide_nitrogen(p, 9), &[M::DeltaEightAlkenylAmide]),
                ]),
            ]),
        ])],
    );

    t.add(
        "C=C-C-C-C-C-C-C-C-S",
        clauses![when(|p| hydrogens(p, 0, 2) && straight(p, 2, 9), &[]).then(clauses![
            first_of(vec![
                when(|p| thiol(p, 9), &[M::NonEightEnOneThiol]),
                when(|p| thioether(p, 9), &[M::NonEightEnylSulfide]),
            ]),
        ])],
    );

    t.add(
        "C=C-C-C-C-C-C-C-C-Cl",
        clauses![when(|p| hydrogens(p, 0, 2) && straight(p, 2, 9), &[M::ChloroNonEightEne])],
    );

    t.add(
        "Br-C-C-C-C-C-C-C-C=C",
        clauses![when(|p| hydrogens(p, 9, 2) && straight(p, 1, 8), &[M::BromoNonEightEne])],
    );

    t.add(
        "C#C-C-C-C-C-C-C-C-O",
        clauses![when(|p| hydrogens(p, 0, 1) && straight(p, 2, 9), &[]).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 9), &[M::NonEightYnOneOl]),
                when(|p| ether_oxygen(p, 9), &[M::NonEightYnylEther]),
                when(|p| ester_oxygen(p, 9), &[M::NonEightYnylEster]),
            ]),
        ])],
    );

    t.add(
        "C#C-C-C-C-C-C-C-C-N",
        clauses![when(|p| hydrogens(p, 0, 1) && straight(p, 2, 9), &[]).then(clauses![
            first_of(vec![
                when(|p| primary_amine(p, 9), &[M::NonEightYnOneAmine]),
                when(|p| amide_nitrogen(p, 9), &[M::NonEightYnylAmide]),
            ]),
        ])],
    );

    t.add(
        "C#C-C-C-C-C-C-C-C-S",
        clauses![when(|p| hydrogens(p, 0, 1) && straight(p, 2, 9), &[]).then(clauses![
            first_of(vec![
                when(|p| thiol(p, 9), &[M::NonEightYnOneThiol]),
                when(|p| thioether(p, 9), &[M::NonEightYnylSulfide]),
            ]),
        ])],
    );

    t.add(
        "C#C-C-C-C-C-C-C-C-Cl",
        clauses![when(|p| hydrogens(p, 0, 1) && straight(p, 2, 9), &[M::ChloroNonEightYne])],
    );

    t.add(
        "Br-C-C-C-C-C-C-C-C#C",
        clauses![when(|p| hydrogens(p, 9, 1) && straight(p, 1, 8), &[M::BromoNonEightYne])],
    );
}

fn eleven(t: &mut RuleTable) {
    t.add(
        "C=C-C-C-C-C-C-C-C-C=O",
        clauses![first_of(vec![
            when(|p| hydrogens(p, 0, 2) && straight(p, 2, 9), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 9), &[M::DecNineEnoicAcid]),
                    when(|p| ester_carbon(p, 9), &[M::DecNineEnoateEster]),
                    when(|p| amide_carbon(p, 9), &[M::DecNineEnamide]),
                    when(|p| aldehyde_carbon(p, 9), &[M::DecNineEnal]),
                ]),
            ]),
            when(
                |p| p.group(0) == G::AlkeneCarbon && p.env(0).heavy_degree == 2 && straight(p, 2, 9),
                &[],
            ).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 9) || ester_carbon(p, 9), &[M::DeltaNineUnsaturatedAcyl]),
                    when(|p| amide_carbon(p, 9), &[M::DeltaNineUnsaturatedAmide]),
                ]),
            ]),
        ])],
    );

    t.add(
        "C#C-C-C-C-C-C-C-C-C=O",
        clauses![first_of(vec![
            when(|p| hydrogens(p, 0, 1) && straight(p, 2, 9), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 9), &[M::DecNineYnoicAcid]),
                    when(|p| ester_carbon(p, 9), &[M::DecNineYnoateEster]),
                    when(|p| amide_carbon(p, 9), &[M::DecNineYnamide]),
                    when(|p| aldehyde_carbon(p, 9), &[M::DecNineYnal]),
                ]),
            ]),
            when(
                |p| p.group(0) == G::AlkyneCarbon && p.env(0).heavy_degree == 2 && straight(p, 2, 9),
                &[],
            ).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 9) || ester_carbon(p, 9), &[M::DeltaNineAcetylenicAcyl]),
                    when(|p| amide_carbon(p, 9), &[M::DeltaNineAcetylenicAmide]),
                ]),
            ]),
        ])],
    );

    t.add(
        "C-C-C-C-C-C-C-C-C-C=C",
        clauses![when(
            |p| methyl(p, 0) && straight(p, 1, 9) && p.group(10) == G::AlkeneCarbon && p.env(10).heavy_degree == 2,
            &[M::OmegaTenDoubleBond],
        )],
    );

    t.add(
        "C=C-C-C-C-C-C-C-C-C-O",
        clauses![first_of(vec![
            when(|p| hydrogens(p, 0, 2) && straight(p, 2, 10), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 10), &[M::DecNineEnOneOl]),
                    when(|p| ether_oxygen(p, 10), &[M::DecNineEnylEther]),
                    when(|p| ester_oxygen(p, 10), &[M::DecNineEnylEster]),
                ]),
            ]),
            when(
                |p| p.group(0) == G::AlkeneCarbon && p.env(0).heavy_degree == 2 && straight(p, 2, 10),
                &[],
            ).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 10), &[M::DeltaNineAlkenol]),
                    when(|p| ether_oxygen(p, 10) || ester_oxygen(p, 10), &[M::DeltaNineAlkenylOxy]),
                ]),
            ]),
        ])],
    );

    t.add(
        "C=C-C-C-C-C-C-C-C-C-N",
        clauses![first_of(vec![
            when(|p| hydrogens(p, 0, 2) && straight(p, 2, 10), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 10), &[M::DecNineEnOneAmine]),
                    when(|p| amide_nitrogen(p, 10), &[M::DecNineEnylAmide]),
                ]),
            ]),
            when(
                |p| p.group(0) == G::AlkeneCarbon && p.env(0).heavy_degree == 2 && straight(p, 2, 10),
                &[],
            ).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 10), &[M::DeltaNineAlkenylamine]),
                    when(|p| amide_nitrogen(p, 10), &[M::DeltaNineAlkenylAmide]),
                ]),
            ]),
        ])],
    );

    t.add(
        "C=C-C-C-C-C-C-C-C-C-S",
        clauses![when(|p| hydrogens(p, 0, 2) && straight(p, 2, 10), &[]).then(clauses![
            first_of(vec![
                when(|p| thiol(p, 10), &[M::DecNineEnOneThiol]),
                when(|p| thioether(p, 10), &[M::DecNineEnylSulfide]),
            ]),
        ])],
    );

    t.add(
        "C=C-C-C-C-C-C-C-C-C-Cl",
        clauses![when(|p| hydrogens(p, 0, 2) && straight(p, 2, 10), &[M::ChloroDecNineEne])],
    );

    t.add(
        "Br-C-C-C-C-C-C-C-C-C=C",
        clauses![when(|p| hydrogens(p, 10, 2) && straight(p, 1, 9), &[M::BromoDecNineEne])],
    );

    t.add(
        "C#C-C-C-C-C-C-C-C-C-O",
        clauses![when(|p| hydrogens(p, 0, 1) && straight(p, 2, 10), &[]).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 10), &[M::DecNineYnOneOl]),
                when(|p| ether_oxygen(p, 10), &[M::DecNineYnylEther]),
                when(|p| ester_oxygen(p, 10), &[M::DecNineYnylEster]),
            ]),
        ])],
    );

    t.add(
        "C#C-C-C-C-C-C-C-C-C-N",
        clauses![when(|p| hydrogens(p, 0, 1) && straight(p, 2, 10), &[]).then(clauses![
            first_of(vec![
                when(|p| primary_amine(p, 10), &[M::DecNineYnOneAmine]),
                when(|p| amide_nitrogen(p, 10), &[M::DecNineYnylAmide]),
            ]),
        ])],
    );

    t.add(
        "C#C-C-C-C-C-C-C-C-C-S",
        clauses![when(|p| hydrogens(p, 0, 1) && straight(p, 2, 10), &[]).then(clauses![
            first_of(vec![
                when(|p| thiol(p, 10), &[M::DecNineYnOneThiol]),
                when(|p| thioether(p, 10), &[M::DecNineYnylSulfide]),
            ]),
        ])],
    );

    t.add(
        "C#C-C-C-C-C-C-C-C-C-Cl",
        clauses![when(|p| hydrogens(p, 0, 1) && straight(p, 2, 10), &[M::ChloroDecNineYne])],
    );

    t.add(
        "Br-C-C-C-C-C-C-C-C-C#C",
        clauses![when(|p| hydrogens(p, 10, 1) && straight(p, 1, 9), &[M::BromoDecNineYne])],
    );
}

fn twelve(t: &mut RuleTable) {
    t.add(
        "C=C-C-C-C-C-C-C-C-C-C=O",
        clauses![first_of(vec![
            when(|p| hydrogens(p, 0, 2) && straight(p, 2, 10), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 10), &[M::UndecTenEnoicAcid]),
                    when(|p| ester_carbon(p, 10), &[M::UndecTenEnoateEster]),
                    when(|p| amide_carbon(p, 10), &[M::UndecTenEnamide]),
                    when(|p| aldehyde_carbon(p, 10), &[M::UndecTenEnal]),
                ]),
            ]),
            when(
                |p| p.group(0) == G::AlkeneCarbon && p.env(0).heavy_degree == 2 && straight(p, 2, 10),
                &[],
            ).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 10) || ester_carbon(p, 10), &[M::DeltaTenUnsaturatedAcyl]),
                    when(|p| amide_carbon(p, 10), &[M::DeltaTenUnsaturatedAmide]),
                ]),
            ]),
        ])],
    );

    t.add(
        "C#C-C-C-C-C-C-C-C-C-C=O",
        clauses![first_of(vec![
            when(|p| hydrogens(p, 0, 1) && straight(p, 2, 10), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 10), &[M::UndecTenYnoicAcid]),
                    when(|p| ester_carbon(p, 10), &[M::UndecTenYnoateEster]),
                    when(|p| amide_carbon(p, 10), &[M::UndecTenYnamide]),
                    when(|p| aldehyde_carbon(p, 10), &[M::UndecTenYnal]),
                ]),
            ]),
            when(
                |p| p.group(0) == G::AlkyneCarbon && p.env(0).heavy_degree == 2 && straight(p, 2, 10),
                &[],
            ).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 10) || ester_carbon(p, 10), &[M::DeltaTenAcetylenicAcyl]),
                    when(|p| amide_carbon(p, 10), &[M::DeltaTenAcetylenicAmide]),
                ]),
            ]),
        ])],
    );

    t.add(
        "C-C-C-C-C-C-C-C-C-C-C=C",
        clauses![when(
            |p| methyl(p, 0) && straight(p, 1, 10) && p.group(11) == G::AlkeneCarbon && p.env(11).heavy_degree == 2,
            &[M::OmegaElevenDoubleBond],
        )],
    );

    t.add(
        "C=C-C-C-C-C-C-C-C-C-C-O",
        clauses![first_of(vec![
            when(|p| hydrogens(p, 0, 2) && straight(p, 2, 11), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 11), &[M::UndecTenEnOneOl]),
                    when(|p| ether_oxygen(p, 11), &[M::UndecTenEnylEther]),
                    when(|p| ester_oxygen(p, 11), &[M::UndecTenEnylEster]),
                ]),
            ]),
            when(
                |p| p.group(0) == G::AlkeneCarbon && p.env(0).heavy_degree == 2 && straight(p, 2, 11),
                &[],
            ).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 11), &[M::DeltaTenAlkenol]),
                    when(|p| ether_oxygen(p, 11) || ester_oxygen(p, 11), &[M::DeltaTenAlkenylOxy]),
                ]),
            ]),
        ])],
    );

    t.add(
        "C=C-C-C-C-C-C-C-C-C-C-N",
        clauses![first_of(vec![
            when(|p| hydrogens(p, 0, 2) && straight(p, 2, 11), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 11), &[M::UndecTenEnOneAmine]),
                    when(|p| amide_nitrogen(p, 11), &[M::UndecTenEnylAmide]),
                ]),
            ]),
            when(
                |p| p.group(0) == G::AlkeneCarbon && p.env(0).heavy_degree == 2 && straight(p, 2, 11),
                &[],
            ).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 11), &[M::DeltaTenAlkenylamine]),
                    when(|p| amide_nitrogen(p, 11), &[M::DeltaTenAlkenylAmide]),
                ]),
            ]),
        ])],
    );

    t.add(
        "C=C-C-C-C-C-C-C-C-C-C-S",
        clauses![when(|p| hydrogens(p, 0, 2) && straight(p, 2, 11), &[]).then(clauses![
            first_of(vec![
                when(|p| thiol(p, 11), &[M::UndecTenEnOneThiol]),
                when(|p| thioether(p, 11), &[M::UndecTenEnylSulfide]),
            ]),
        ])],
    );

    t.add(
        "C=C-C-C-C-C-C-C-C-C-C-Cl",
        clauses![when(|p| hydrogens(p, 0, 2) && straight(p, 2, 11), &[M::ChloroUndecTenEne])],
    );

    t.add(
        "Br-C-C-C-C-C-C-C-C-C-C=C",
        clauses![when(|p| hydrogens(p, 11, 2) && straight(p, 1, 10), &[M::BromoUndecTenEne])],
    );

    t.add(
        "C#C-C-C-C-C-C-C-C-C-C-O",
        clauses![when(|p| hydrogens(p, 0, 1) && straight(p, 2, 11), &[]).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 11), &[M::UndecTenYnOneOl]),
                when(|p| ether_oxygen(p, 11), &[M::UndecTenYnylEther]),
                when(|p| ester_oxygen(p, 11), &[M::UndecTenYnylEster]),
            ]),
        ])],
    );

    t.add(
        "C#C-C-C-C-C-C-C-C-C-C-N",
        clauses![when(|p| hydrogens(p, 0, 1) && straight(p, 2, 11), &[]).then(clauses![
            first_of(vec![
                when(|p| primary_amine(p, 11), &[M::UndecTenYnOneAmine]),
                when(|p| amide_nitrogen(p, 11), &[M::UndecTenYnylAmide]),
            ]),
        ])],
    );

    t.add(
        "C#C-C-C-C-C-C-C-C-C-C-S",
        clauses![when(|p| hydrogens(p, 0, 1) && straight(p, 2, 11), &[]).then(clauses![
            first_of(vec![
                when(|p| thiol(p, 11), &[M::UndecTenYnOneThiol]),
                when(|p| thioether(p, 11), &[M::UndecTenYnylSulfide]),
            ]),
        ])],
    );

    t.add(
        "C#C-C-C-C-C-C-C-C-C-C-Cl",
        clauses![when(|p| hydrogens(p, 0, 1) && straight(p, 2, 11), &[M::ChloroUndecTenYne])],
    );

    t.add(
        "Br-C-C-C-C-C-C-C-C-C-C#C",
        clauses![when(|p| hydrogens(p, 11, 1) && straight(p, 1, 10), &[M::BromoUndecTenYne])],
    );
}

fn thirteen(t: &mut RuleTable) {
    t.add(
        "C=C-C-C-C-C-C-C-C-C-C-C=O",
        clauses![first_of(vec![
            when(|p| hydrogens(p, 0, 2) && straight(p, 2, 11), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 11), &[M::DodecElevenEnoicAcid]),
                    when(|p| ester_carbon(p, 11), &[M::DodecElevenEnoateEster]),
                    when(|p| amide_carbon(p, 11), &[M::DodecElevenEnamide]),
                    when(|p| aldehyde_carbon(p, 11), &[M::DodecElevenEnal]),
                ]),
            ]),
            when(
                |p| p.group(0) == G::AlkeneCarbon && p.env(0).heavy_degree == 2 && straight(p, 2, 11),
                &[],
            ).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 11) || ester_carbon(p, 11), &[M::DeltaElevenUnsaturatedAcyl]),
                    when(|p| amide_carbon(p, 11), &[M::DeltaElevenUnsaturatedAmide]),
                ]),
            ]),
        ])],
    );

    t.add(
        "C#C-C-C-C-C-C-C-C-C-C-C=O",
        clauses![first_of(vec![
            when(|p| hydrogens(p, 0, 1) && straight(p, 2, 11), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 11), &[M::DodecElevenYnoicAcid]),
                    when(|p| ester_carbon(p, 11), &[M::DodecElevenYnoateEster]),
                    when(|p| amide_carbon(p, 11), &[M::DodecElevenYnamide]),
                    when(|p| aldehyde_carbon(p, 11), &[M::DodecElevenYnal]),
                ]),
            ]),
            when(
                |p| p.group(0) == G::AlkyneCarbon && p.env(0).heavy_degree == 2 && straight(p, 2, 11),
                &[],
            ).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 11) || ester_carbon(p, 11), &[M::DeltaElevenAcetylenicAcyl]),
                    when(|p| amide_carbon(p, 11), &[M::DeltaElevenAcetylenicAmide]),
                ]),
            ]),
        ])],
    );

    t.add(
        "C-C-C-C-C-C-C-C-C-C-C-C=C",
        clauses![when(
            |p| methyl(p, 0) && straight(p, 1, 11) && p.group(12) == G::AlkeneCarbon && p.env(12).heavy_degree == 2,
            &[M::OmegaTwelveDoubleBond],
        )],
    );

    t.add(
        "C=C-C-C-C-C-C-C-C-C-C-C-O",
        clauses![first_of(vec![
            when(|p| hydrogens(p, 0, 2) && straight(p, 2, 12), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 12), &[M::DodecElevenEnOneOl]),
                    when(|p| ether_oxygen(p, 12), &[M::DodecElevenEnylEther]),
                    when(|p| ester_oxygen(p, 12), &[M::DodecElevenEnylEster]),
                ]),
            ]),
            when(
                |p| p.group(0) == G::AlkeneCarbon && p.env(0).heavy_degree == 2 && straight(p, 2, 12),
                &[],
            ).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 12), &[M::DeltaElevenAlkenol]),
                    when(|p| ether_oxygen(p, 12) || ester_oxygen(p, 12), &[M::DeltaElevenAlkenylOxy]),
                ]),
            ]),
        ])],
    );

    t.add(
        "C=C-C-C-C-C-C-C-C-C-C-C-N",
        clauses![first_of(vec![
            when(|p| hydrogens(p, 0, 2) && straight(p, 2, 12), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 12), &[M::DodecElevenEnOneAmine]),
                    when(|p| amide_nitrogen(p, 12), &[M::DodecElevenEnylAmide]),
                ]),
            ]),
            when(
                |p| p.group(0) == G::AlkeneCarbon && p.env(0).heavy_degree == 2 && straight(p, 2, 12),
                &[],
            ).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 12), &[M::DeltaElevenAlkenylamine]),
                    when(|p| amide_nitrogen(p, 12), &[M::DeltaElevenAlkenylAmide]),
                ]),
            ]),
        ])],
    );

    t.add(
        "C=C-C-C-C-C-C-C-C-C-C-C-S",
        clauses![when(|p| hydrogens(p, 0, 2) && straight(p, 2, 12), &[]).then(clauses![
            first_of(vec![
                when(|p| thiol(p, 12), &[M::DodecElevenEnOneThiol]),
                when(|p| thioether(p, 12), &[M::DodecElevenEnylSulfide]),
            ]),
        ])],
    );

    t.add(
        "C=C-C-C-C-C-C-C-C-C-C-C-Cl",
        clauses![when(|p| hydrogens(p, 0, 2) && straight(p, 2, 12), &[M::ChloroDodecElevenEne])],
    );

    t.add(
        "Br-C-C-C-C-C-C-C-C-C-C-C=C",
        clauses![when(|p| hydrogens(p, 12, 2) && straight(p, 1, 11), &[M::BromoDodecElevenEne])],
    );

    t.add(
        "C#C-C-C-C-C-C-C-C-C-C-C-O",
        clauses![when(|p| hydrogens(p, 0, 1) && straight(p, 2, 12), &[]).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 12), &[M::DodecElevenYnOneOl]),
                when(|p| ether_oxygen(p, 12), &[M::DodecElevenYnylEther]),
                when(|p| ester_oxygen(p, 12), &[M::DodecElevenYnylEster]),
            ]),
        ])],
    );

    t.add(
        "C#C-C-C-C-C-C-C-C-C-C-C-N",
        clauses![when(|p| hydrogens(p, 0, 1) && straight(p, 2, 12), &[]).then(clauses![
            first_of(vec![
                when(|p| primary_amine(p, 12), &[M::DodecElevenYnOneAmine]),
                when(|p| amide_nitrogen(p, 12), &[M::DodecElevenYnylAmide]),
            ]),
        ])],
    );

    t.add(
        "C#C-C-C-C-C-C-C-C-C-C-C-S",
        clauses![when(|p| hydrogens(p, 0, 1) && straight(p, 2, 12), &[]).then(clauses![
            first_of(vec![
                when(|p| thiol(p, 12), &[M::DodecElevenYnOneThiol]),
                when(|p| thioether(p, 12), &[M::DodecElevenYnylSulfide]),
            ]),
        ])],
    );

    t.add(
        "C#C-C-C-C-C-C-C-C-C-C-C-Cl",
        clauses![when(|p| hydrogens(p, 0, 1) && straight(p, 2, 12), &[M::ChloroDodecElevenYne])],
    );

    t.add(
        "Br-C-C-C-C-C-C-C-C-C-C-C#C",
        clauses![when(|p| hydrogens(p, 12, 1) && straight(p, 1, 11), &[M::BromoDodecElevenYne])],
    );
}

#[cfg(test)]
mod tests {
    use crate::engine::MotifEngine;
    use crate::motif::Motif as M;
    use crate::testing::smiles;

    #[test]
    fn pentenol() {
        let ctx = smiles("C=CCCCO", &[], &[]);
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        assert!(fp.get(M::PentFourEnOneOl));
        assert!(!fp.get(M::DeltaFourUnsaturatedAcyl));
    }

    #[test]
    fn hexenoic_acid() {
        let ctx = smiles("OC(=O)CCC=CCC", &[], &[]);
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        for motif in [M::DeltaFourUnsaturatedAcyl, M::OmegaThreeDoubleBond] {
            assert!(fp.get(motif), "{motif}");
        }
        assert!(!fp.get(M::PentFourEnOneOl));
    }

    #[test]
    fn hexynol() {
        let ctx = smiles("C#CCCCCO", &[], &[]);
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        assert!(fp.get(M::HexFiveYnOneOl));
        assert!(!fp.get(M::PentFourEnOneOl));
    }

    #[test]
    fn bromohexene() {
        let ctx = smiles("BrCCCCC=C", &[], &[]);
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        assert!(fp.get(M::BromoHexFiveEne));
        assert!(!fp.get(M::PentFourEnOneOl));
    }

    #[test]
    fn allylamine() {
        let ctx = smiles("NCC=C", &[], &[]);
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        assert!(fp.get(M::PropTwoEnOneAmine));
        assert!(!fp.get(M::PentFourEnOneOl));
    }

    #[test]
    fn oleic_acid() {
        let ctx = smiles("CCCCCCCCC=CCCCCCCCC(=O)O", &[], &[]);
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        for motif in [M::DeltaNineUnsaturatedAcyl, M::OmegaNineDoubleBond] {
            assert!(fp.get(motif), "{motif}");
        }
        assert!(!fp.get(M::PentFourEnOneOl));
    }

    #[test]
    fn butynol() {
        let ctx = smiles("C#CCCO", &[], &[]);
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        assert!(fp.get(M::ButThreeYnOneOl));
        assert!(!fp.get(M::PentFourEnOneOl));
    }

    #[test]
    fn decenoic_acid() {
        let ctx = smiles("C=CCCCCCCCC(=O)O", &[], &[]);
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        assert!(fp.get(M::DecNineEnoicAcid));
        assert!(!fp.get(M::PentFourEnOneOl));
    }
}
