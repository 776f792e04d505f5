//! Acyl chains ending in a carbonyl: plain, branched and aryl acyl groups, omega-substituted
//! acids, lactams and lactones by ring size, and dicarbonyl chains.

use super::common::*;
use super::{first_of, when, RuleTable};
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
        "C-C-C=O",
        clauses![when(|p| methyl(p, 0) && straight(p, 1, 2), &[]).then(clauses![
            first_of(vec![
                when(|p| carboxyl_carbon(p, 2), &[M::PropanoicAcid]),
                when(|p| ester_carbon(p, 2), &[M::PropanoylEster]),
                when(|p| amide_carbon(p, 2), &[M::Propanamide]),
                when(|p| aldehyde_carbon(p, 2), &[M::Propanal]),
                when(|p| ketone_carbon(p, 2), &[M::EthylKetone]),
            ]),
        ])],
    );

    t.add(
        "N-C-C=O",
        clauses![when(|p| straight(p, 1, 2), &[]).then(clauses![
            first_of(vec![
                when(|p| primary_amine(p, 0) && ester_carbon(p, 2), &[M::AminoEthanoateEster]),
                when(|p| primary_amine(p, 0) && amide_carbon(p, 2), &[M::AminoEthanamide]),
                when(|p| substituted_amine(p, 0) && carboxyl_carbon(p, 2), &[M::AlkylaminoEthanoicAcid]),
                when(|p| quaternary_nitrogen(p, 0) && carboxyl_carbon(p, 2), &[M::TrialkylammonioEthanoate]),
                when(|p| amide_nitrogen(p, 0) && carboxyl_carbon(p, 2), &[M::AcylaminoEthanoicAcid]),
                when(|p| amide_nitrogen(p, 0) && ester_carbon(p, 2), &[M::AcylaminoEthanoateEster]),
                when(|p| amide_nitrogen(p, 0) && ketone_carbon(p, 2), &[M::AcylaminomethylKetone]),
            ]),
        ])],
    );

    t.add(
        "O-C-C=O",
        clauses![when(|p| straight(p, 1, 2), &[]).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 0) && carboxyl_carbon(p, 2), &[M::HydroxyEthanoicAcid]),
                when(|p| hydroxyl(p, 0) && ester_carbon(p, 2), &[M::HydroxyEthanoateEster]),
                when(|p| hydroxyl(p, 0) && amide_carbon(p, 2), &[M::HydroxyEthanamide]),
                when(|p| hydroxyl(p, 0) && aldehyde_carbon(p, 2), &[M::HydroxyEthanal]),
                when(|p| hydroxyl(p, 0) && ketone_carbon(p, 2), &[M::HydroxymethylKetone]),
                when(|p| ether_oxygen(p, 0) && carboxyl_carbon(p, 2), &[M::AlkoxyEthanoicAcid]),
                when(|p| ether_oxygen(p, 0) && ester_carbon(p, 2), &[M::AlkoxyEthanoateEster]),
                when(|p| ester_oxygen(p, 0) && carboxyl_carbon(p, 2), &[M::AcyloxyEthanoicAcid]),
                when(|p| ester_oxygen(p, 0) && ester_carbon(p, 2), &[M::AcyloxyEthanoateEster]),
            ]),
        ])],
    );

    t.add(
        "O=C-C-S",
        clauses![when(|p| straight(p, 2, 3), &[]).then(clauses![
            first_of(vec![
                when(|p| thiol(p, 3) && carboxyl_carbon(p, 1), &[M::MercaptoEthanoicAcid]),
                when(|p| thiol(p, 3) && amide_carbon(p, 1), &[M::MercaptoEthanamide]),
                when(|p| thioether(p, 3) && carboxyl_carbon(p, 1), &[M::AlkylthioEthanoicAcid]),
                when(|p| thioether(p, 3) && ester_carbon(p, 1), &[M::AlkylthioEthanoateEster]),
                when(|p| sulfonyl(p, 3) && carboxyl_carbon(p, 1), &[M::SulfonylEthanoicAcid]),
            ]),
        ])],
    );

    t.add(
        "Cl-C-C=O",
        clauses![when(|p| straight(p, 1, 2), &[]).then(clauses![
            first_of(vec![
                when(|p| carboxyl_carbon(p, 2), &[M::ChloroEthanoicAcid]),
                when(|p| ester_carbon(p, 2), &[M::ChloroEthanoateEster]),
                when(|p| amide_carbon(p, 2), &[M::ChloroEthanamide]),
                when(|p| ketone_carbon(p, 2), &[M::ChloromethylKetone]),
            ]),
        ])],
    );

    t.add(
        "Br-C-C=O",
        clauses![when(|p| straight(p, 1, 2), &[]).then(clauses![
            first_of(vec![
                when(|p| carboxyl_carbon(p, 2), &[M::BromoEthanoicAcid]),
                when(|p| ester_carbon(p, 2), &[M::BromoEthanoateEster]),
                when(|p| amide_carbon(p, 2), &[M::BromoEthanamide]),
                when(|p| ketone_carbon(p, 2), &[M::BromomethylKetone]),
            ]),
        ])],
    );
}

fn five(t: &mut RuleTable) {
    t.add(
        "C-C-C-C=O",
        clauses![first_of(vec![
            when(|p| methyl(p, 0) && straight(p, 1, 3), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 3), &[M::ButanoicAcid]),
                    when(|p| ester_carbon(p, 3), &[M::ButanoylEster]),
                    when(|p| amide_carbon(p, 3), &[M::Butanamide]),
                    when(|p| aldehyde_carbon(p, 3), &[M::Butanal]),
                    when(|p| ketone_carbon(p, 3), &[M::PropylKetone]),
                ]),
            ]),
            when(|p| methyl(p, 0) && iso_fork(p, 1) && straight(p, 2, 3), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 3), &[M::IsobutyricAcid]),
                    when(|p| ester_carbon(p, 3), &[M::IsobutyrylEster]),
                    when(|p| amide_carbon(p, 3), &[M::IsobutyrylAmide]),
                ]),
            ]),
        ])],
    );

    t.add(
        "N-C-C-C=O",
        clauses![first_of(vec![
            when(|p| straight(p, 1, 3), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 0) && ester_carbon(p, 3), &[M::AminoPropanoateEster]),
                    when(|p| primary_amine(p, 0) && amide_carbon(p, 3), &[M::AminoPropanamide]),
                    when(|p| substituted_amine(p, 0) && carboxyl_carbon(p, 3), &[M::AlkylaminoPropanoicAcid]),
                    when(|p| quaternary_nitrogen(p, 0) && carboxyl_carbon(p, 3), &[M::TrialkylammonioPropanoate]),
                    when(|p| amide_nitrogen(p, 0) && carboxyl_carbon(p, 3), &[M::AcylaminoPropanoicAcid]),
                    when(|p| amide_nitrogen(p, 0) && ester_carbon(p, 3), &[M::AcylaminoPropanoateEster]),
                    when(|p| amide_nitrogen(p, 0) && ketone_carbon(p, 3), &[M::AcylaminoethylKetone]),
                ]),
            ]),
            when(|p| ring_span(p, 0, 4) && smallest_ring(p, 0) == Some(4) && oxo(p, 3), &[M::BetaLactamRing]),
        ])],
    );

    t.add(
        "O-C-C-C=O",
        clauses![first_of(vec![
            when(|p| straight(p, 1, 3), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 0) && carboxyl_carbon(p, 3), &[M::HydroxyPropanoicAcid]),
                    when(|p| hydroxyl(p, 0) && ester_carbon(p, 3), &[M::HydroxyPropanoateEster]),
                    when(|p| hydroxyl(p, 0) && amide_carbon(p, 3), &[M::HydroxyPropanamide]),
                    when(|p| hydroxyl(p, 0) && aldehyde_carbon(p, 3), &[M::HydroxyPropanal]),
                    when(|p| hydroxyl(p, 0) && ketone_carbon(p, 3), &[M::HydroxyethylKetone]),
                    when(|p| ether_oxygen(p, 0) && carboxyl_carbon(p, 3), &[M::AlkoxyPropanoicAcid]),
                    when(|p| ether_oxygen(p, 0) && ester_carbon(p, 3), &[M::AlkoxyPropanoateEster]),
                    when(|p| ester_oxygen(p, 0) && carboxyl_carbon(p, 3), &[M::AcyloxyPropanoicAcid]),
                    when(|p| ester_oxygen(p, 0) && ester_carbon(p, 3), &[M::AcyloxyPropanoateEster]),
                ]),
            ]),
            when(|p| ring_span(p, 0, 4) && smallest_ring(p, 0) == Some(4) && oxo(p, 3), &[M::BetaLactoneRing]),
        ])],
    );

    t.add(
        "O=C-C-C-S",
        clauses![when(|p| straight(p, 2, 4), &[]).then(clauses![
            first_of(vec![
                when(|p| thiol(p, 4) && carboxyl_carbon(p, 1), &[M::MercaptoPropanoicAcid]),
                when(|p| thiol(p, 4) && amide_carbon(p, 1), &[M::MercaptoPropanamide]),
                when(|p| thioether(p, 4) && carboxyl_carbon(p, 1), &[M::AlkylthioPropanoicAcid]),
                when(|p| thioether(p, 4) && ester_carbon(p, 1), &[M::AlkylthioPropanoateEster]),
                when(|p| sulfonyl(p, 4) && carboxyl_carbon(p, 1), &[M::SulfonylPropanoicAcid]),
            ]),
        ])],
    );

    t.add(
        "Cl-C-C-C=O",
        clauses![when(|p| straight(p, 1, 3), &[]).then(clauses![
            first_of(vec![
                when(|p| carboxyl_carbon(p, 3), &[M::ChloroPropanoicAcid]),
                when(|p| ester_carbon(p, 3), &[M::ChloroPropanoateEster]),
                when(|p| amide_carbon(p, 3), &[M::ChloroPropanamide]),
                when(|p| ketone_carbon(p, 3), &[M::ChloroethylKetone]),
            ]),
        ])],
    );

    t.add(
        "Br-C-C-C=O",
        clauses![when(|p| straight(p, 1, 3), &[]).then(clauses![
            first_of(vec![
                when(|p| carboxyl_carbon(p, 3), &[M::BromoPropanoicAcid]),
                when(|p| ester_carbon(p, 3), &[M::BromoPropanoateEster]),
                when(|p| amide_carbon(p, 3), &[M::BromoPropanamide]),
                when(|p| ketone_carbon(p, 3), &[M::BromoethylKetone]),
            ]),
        ])],
    );

    t.add(
        "O=C-C-C=O",
        clauses![when(|p| straight(p, 2, 3), &[]).then(clauses![
            first_of(vec![
                when(|p| both_at(p, 1, 3, carboxyl_carbon), &[M::MalonicAcid]),
                when(|p| pair_at(p, 1, 3, carboxyl_carbon, ester_carbon), &[M::MalonicMonoester]),
                when(|p| both_at(p, 1, 3, ester_carbon), &[M::MalonicDiester]),
                when(|p| pair_at(p, 1, 3, carboxyl_carbon, amide_carbon), &[M::MalonicMonoamide]),
                when(|p| both_at(p, 1, 3, amide_carbon), &[M::MalonicDiamide]),
                when(|p| pair_at(p, 1, 3, ketone_carbon, carboxyl_carbon), &[M::OxoThreeAcid]),
                when(|p| pair_at(p, 1, 3, ketone_carbon, ester_carbon), &[M::OxoThreeEster]),
                when(|p| pair_at(p, 1, 3, ketone_carbon, amide_carbon), &[M::OxoThreeAmide]),
                when(|p| both_at(p, 1, 3, ketone_carbon), &[M::DiketoneThree]),
                when(|p| pair_at(p, 1, 3, aldehyde_carbon, carboxyl_carbon), &[M::MalonicSemialdehyde]),
                when(|p| both_at(p, 1, 3, aldehyde_carbon), &[M::Propanedial]),
            ]),
        ])],
    );
}

fn six(t: &mut RuleTable) {
    t.extend(
        "C-C-C-C-C=O",
        clauses![first_of(vec![
            when(|p| methyl(p, 0) && straight(p, 1, 4), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 4), &[M::PentanoicAcid]),
                    when(|p| ester_carbon(p, 4), &[M::PentanoylEster]),
                    when(|p| amide_carbon(p, 4), &[M::Pentanamide]),
                    when(|p| aldehyde_carbon(p, 4), &[M::Pentanal]),
                    when(|p| ketone_carbon(p, 4), &[M::ButylKetone]),
                ]),
            ]),
            when(|p| methyl(p, 0) && iso_fork(p, 1) && straight(p, 2, 4), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 4), &[M::IsovalericAcid]),
                    when(|p| ester_carbon(p, 4), &[M::IsovalerylEster]),
                    when(|p| amide_carbon(p, 4), &[M::IsovalerylAmide]),
                ]),
            ]),
            when(|p| methyl(p, 0) && chain_link(p, 1) && methyl_branch(p, 2) && straight(p, 3, 4), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 4), &[M::AnteisoC5Acid]),
                    when(|p| ester_carbon(p, 4), &[M::AnteisoC5Ester]),
                ]),
            ]),
            when(|p| aromatic(p, 0) && straight(p, 1, 4), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 4), &[M::ArylButanoicAcid]),
                    when(|p| ester_carbon(p, 4), &[M::ArylButanoylEster]),
                    when(|p| amide_carbon(p, 4), &[M::ArylButanamide]),
                    when(|p| ketone_carbon(p, 4), &[M::ArylPropylKetone]),
                ]),
            ]),
        ])],
    );

    t.add(
        "N-C-C-C-C=O",
        clauses![first_of(vec![
            when(|p| straight(p, 1, 4), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 0) && ester_carbon(p, 4), &[M::AminoButanoateEster]),
                    when(|p| primary_amine(p, 0) && amide_carbon(p, 4), &[M::AminoButanamide]),
                    when(|p| substituted_amine(p, 0) && carboxyl_carbon(p, 4), &[M::AlkylaminoButanoicAcid]),
                    when(|p| quaternary_nitrogen(p, 0) && carboxyl_carbon(p, 4), &[M::TrialkylammonioButanoate]),
                    when(|p| amide_nitrogen(p, 0) && carboxyl_carbon(p, 4), &[M::AcylaminoButanoicAcid]),
                    when(|p| amide_nitrogen(p, 0) && ester_carbon(p, 4), &[M::AcylaminoButanoateEster]),
                    when(|p| amide_nitrogen(p, 0) && ketone_carbon(p, 4), &[M::AcylaminopropylKetone]),
                ]),
            ]),
            when(|p| ring_span(p, 0, 5) && smallest_ring(p, 0) == Some(5) && oxo(p, 4), &[M::GammaLactamRing]),
        ])],
    );

    t.add(
        "O-C-C-C-C=O",
        clauses![when(|p| straight(p, 1, 4), &[]).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 0) && carboxyl_carbon(p, 4), &[M::HydroxyButanoicAcid]),
                when(|p| hydroxyl(p, 0) && ester_carbon(p, 4), &[M::HydroxyButanoateEster]),
                when(|p| hydroxyl(p, 0) && amide_carbon(p, 4), &[M::HydroxyButanamide]),
                when(|p| hydroxyl(p, 0) && aldehyde_carbon(p, 4), &[M::HydroxyButanal]),
                when(|p| hydroxyl(p, 0) && ketone_carbon(p, 4), &[M::HydroxypropylKetone]),
                when(|p| ether_oxygen(p, 0) && carboxyl_carbon(p, 4), &[M::AlkoxyButanoicAcid]),
                when(|p| ether_oxygen(p, 0) && ester_carbon(p, 4), &[M::AlkoxyButanoateEster]),
                when(|p| ester_oxygen(p, 0) && carboxyl_carbon(p, 4), &[M::AcyloxyButanoicAcid]),
                when(|p| ester_oxygen(p, 0) && ester_carbon(p, 4), &[M::AcyloxyButanoateEster]),
            ]),
        ])],
    );

    t.add(
        "O=C-C-C-C-S",
        clauses![when(|p| straight(p, 2, 5), &[]).then(clauses![
            first_of(vec![
                when(|p| thiol(p, 5) && carboxyl_carbon(p, 1), &[M::MercaptoButanoicAcid]),
                when(|p| thiol(p, 5) && amide_carbon(p, 1), &[M::MercaptoButanamide]),
                when(|p| thioether(p, 5) && carboxyl_carbon(p, 1), &[M::AlkylthioButanoicAcid]),
                when(|p| thioether(p, 5) && ester_carbon(p, 1), &[M::AlkylthioButanoateEster]),
                when(|p| sulfonyl(p, 5) && carboxyl_carbon(p, 1), &[M::SulfonylButanoicAcid]),
            ]),
        ])],
    );

    t.add(
        "Cl-C-C-C-C=O",
        clauses![when(|p| straight(p, 1, 4), &[]).then(clauses![
            first_of(vec![
                when(|p| carboxyl_carbon(p, 4), &[M::ChloroButanoicAcid]),
                when(|p| ester_carbon(p, 4), &[M::ChloroButanoateEster]),
                when(|p| amide_carbon(p, 4), &[M::ChloroButanamide]),
                when(|p| ketone_carbon(p, 4), &[M::ChloropropylKetone]),
            ]),
        ])],
    );

    t.add(
        "Br-C-C-C-C=O",
        clauses![when(|p| straight(p, 1, 4), &[]).then(clauses![
            first_of(vec![
                when(|p| carboxyl_carbon(p, 4), &[M::BromoButanoicAcid]),
                when(|p| ester_carbon(p, 4), &[M::BromoButanoateEster]),
                when(|p| amide_carbon(p, 4), &[M::BromoButanamide]),
                when(|p| ketone_carbon(p, 4), &[M::BromopropylKetone]),
            ]),
        ])],
    );

    t.add(
        "F-C-C-C-C=O",
        clauses![when(|p| p.env(1).fluorine == 3 && fluorinated(p, 2, 4), &[]).then(clauses![
            first_of(vec![
                when(|p| carboxyl_carbon(p, 4), &[M::PerfluoroButanoicAcid]),
                when(|p| oxo(p, 4), &[M::PerfluoroButanoyl]),
            ]),
        ])],
    );

    t.add(
        "O=C-C-C-C=O",
        clauses![first_of(vec![
            when(|p| straight(p, 2, 4), &[]).then(clauses![
                first_of(vec![
                    when(|p| both_at(p, 1, 4, carboxyl_carbon), &[M::SuccinicAcid]),
                    when(|p| pair_at(p, 1, 4, carboxyl_carbon, ester_carbon), &[M::SuccinicMonoester]),
                    when(|p| both_at(p, 1, 4, ester_carbon), &[M::SuccinicDiester]),
                    when(|p| pair_at(p, 1, 4, carboxyl_carbon, amide_carbon), &[M::SuccinicMonoamide]),
                    when(|p| both_at(p, 1, 4, amide_carbon), &[M::SuccinicDiamide]),
                    when(|p| pair_at(p, 1, 4, ketone_carbon, carboxyl_carbon), &[M::OxoFourAcid]),
                    when(|p| pair_at(p, 1, 4, ketone_carbon, ester_carbon), &[M::OxoFourEster]),
                    when(|p| pair_at(p, 1, 4, ketone_carbon, amide_carbon), &[M::OxoFourAmide]),
                    when(|p| both_at(p, 1, 4, ketone_carbon), &[M::DiketoneFour]),
                    when(|p| pair_at(p, 1, 4, aldehyde_carbon, carboxyl_carbon), &[M::SuccinicSemialdehyde]),
                    when(|p| both_at(p, 1, 4, aldehyde_carbon), &[M::Butanedial]),
                ]),
            ]),
            when(|p| ring_span(p, 1, 5) && smallest_ring(p, 1) == Some(5), &[]).then(clauses![
                first_of(vec![
                    when(|p| both_at(p, 1, 4, amide_carbon), &[M::CyclicImideFive]),
                    when(|p| both_at(p, 1, 4, ester_carbon), &[M::CyclicAnhydrideFive]),
                ]),
            ]),
        ])],
    );
}

fn seven(t: &mut RuleTable) {
    t.add(
        "C-C-C-C-C-C=O",
        clauses![first_of(vec![
            when(|p| methyl(p, 0) && straight(p, 1, 5), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 5), &[M::HexanoicAcid]),
                    when(|p| ester_carbon(p, 5), &[M::HexanoylEster]),
                    when(|p| amide_carbon(p, 5), &[M::Hexanamide]),
                    when(|p| aldehyde_carbon(p, 5), &[M::Hexanal]),
                    when(|p| ketone_carbon(p, 5), &[M::PentylKetone]),
                ]),
            ]),
            when(|p| methyl(p, 0) && iso_fork(p, 1) && straight(p, 2, 5), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 5), &[M::IsocaproicAcid]),
                    when(|p| ester_carbon(p, 5), &[M::IsocaproylEster]),
                    when(|p| amide_carbon(p, 5), &[M::IsocaproylAmide]),
                ]),
            ]),
            when(|p| methyl(p, 0) && chain_link(p, 1) && methyl_branch(p, 2) && straight(p, 3, 5), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 5), &[M::AnteisoC6Acid]),
                    when(|p| ester_carbon(p, 5), &[M::AnteisoC6Ester]),
                ]),
            ]),
            when(|p| aromatic(p, 0) && straight(p, 1, 5), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 5), &[M::ArylPentanoicAcid]),
                    when(|p| ester_carbon(p, 5), &[M::ArylPentanoylEster]),
                    when(|p| amide_carbon(p, 5), &[M::ArylPentanamide]),
                    when(|p| ketone_carbon(p, 5), &[M::ArylButylKetone]),
                ]),
            ]),
        ])],
    );

    t.add(
        "N-C-C-C-C-C=O",
        clauses![first_of(vec![
            when(|p| straight(p, 1, 5), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 0) && carboxyl_carbon(p, 5), &[M::AminoPentanoicAcid]),
                    when(|p| primary_amine(p, 0) && ester_carbon(p, 5), &[M::AminoPentanoateEster]),
                    when(|p| primary_amine(p, 0) && amide_carbon(p, 5), &[M::AminoPentanamide]),
                    when(|p| substituted_amine(p, 0) && carboxyl_carbon(p, 5), &[M::AlkylaminoPentanoicAcid]),
                    when(|p| quaternary_nitrogen(p, 0) && carboxyl_carbon(p, 5), &[M::TrialkylammonioPentanoate]),
                    when(|p| amide_nitrogen(p, 0) && carboxyl_carbon(p, 5), &[M::AcylaminoPentanoicAcid]),
                    when(|p| amide_nitrogen(p, 0) && ester_carbon(p, 5), &[M::AcylaminoPentanoateEster]),
                    when(|p| amide_nitrogen(p, 0) && ketone_carbon(p, 5), &[M::AcylaminobutylKetone]),
                ]),
            ]),
            when(|p| ring_span(p, 0, 6) && smallest_ring(p, 0) == Some(6) && oxo(p, 5), &[M::DeltaLactamRing]),
        ])],
    );

    t.add(
        "O-C-C-C-C-C=O",
        clauses![when(|p| straight(p, 1, 5), &[]).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 0) && carboxyl_carbon(p, 5), &[M::HydroxyPentanoicAcid]),
                when(|p| hydroxyl(p, 0) && ester_carbon(p, 5), &[M::HydroxyPentanoateEster]),
                when(|p| hydroxyl(p, 0) && amide_carbon(p, 5), &[M::HydroxyPentanamide]),
                when(|p| hydroxyl(p, 0) && aldehyde_carbon(p, 5), &[M::HydroxyPentanal]),
                when(|p| hydroxyl(p, 0) && ketone_carbon(p, 5), &[M::HydroxybutylKetone]),
                when(|p| ether_oxygen(p, 0) && carboxyl_carbon(p, 5), &[M::AlkoxyPentanoicAcid]),
                when(|p| ether_oxygen(p, 0) && ester_carbon(p, 5), &[M::AlkoxyPentanoateEster]),
                when(|p| ester_oxygen(p, 0) && carboxyl_carbon(p, 5), &[M::AcyloxyPentanoicAcid]),
                when(|p| ester_oxygen(p, 0) && ester_carbon(p, 5), &[M::AcyloxyPentanoateEster]),
            ]),
        ])],
    );

    t.add(
        "O=C-C-C-C-C-S",
        clauses![when(|p| straight(p, 2, 6), &[]).then(clauses![
            first_of(vec![
                when(|p| thiol(p, 6) && carboxyl_carbon(p, 1), &[M::MercaptoPentanoicAcid]),
                when(|p| thiol(p, 6) && amide_carbon(p, 1), &[M::MercaptoPentanamide]),
                when(|p| thioether(p, 6) && carboxyl_carbon(p, 1), &[M::AlkylthioPentanoicAcid]),
                when(|p| thioether(p, 6) && ester_carbon(p, 1), &[M::AlkylthioPentanoateEster]),
                when(|p| sulfonyl(p, 6) && carboxyl_carbon(p, 1), &[M::SulfonylPentanoicAcid]),
            ]),
        ])],
    );

    t.add(
        "Cl-C-C-C-C-C=O",
        clauses![when(|p| straight(p, 1, 5), &[]).then(clauses![
            first_of(vec![
                when(|p| carboxyl_carbon(p, 5), &[M::ChloroPentanoicAcid]),
                when(|p| ester_carbon(p, 5), &[M::ChloroPentanoateEster]),
                when(|p| amide_carbon(p, 5), &[M::ChloroPentanamide]),
                when(|p| ketone_carbon(p, 5), &[M::ChlorobutylKetone]),
            ]),
        ])],
    );

    t.add(
        "Br-C-C-C-C-C=O",
        clauses![when(|p| straight(p, 1, 5), &[]).then(clauses![
            first_of(vec![
                when(|p| carboxyl_carbon(p, 5), &[M::BromoPentanoicAcid]),
                when(|p| ester_carbon(p, 5), &[M::BromoPentanoateEster]),
                when(|p| amide_carbon(p, 5), &[M::BromoPentanamide]),
                when(|p| ketone_carbon(p, 5), &[M::BromobutylKetone]),
            ]),
        ])],
    );

    t.add(
        "F-C-C-C-C-C=O",
        clauses![when(|p| p.env(1).fluorine == 3 && fluorinated(p, 2, 5), &[]).then(clauses![
            first_of(vec![
                when(|p| carboxyl_carbon(p, 5), &[M::PerfluoroPentanoicAcid]),
                when(|p| oxo(p, 5), &[M::PerfluoroPentanoyl]),
            ]),
        ])],
    );

    t.add(
        "O=C-C-C-C-C=O",
        clauses![first_of(vec![
            when(|p| straight(p, 2, 5), &[]).then(clauses![
                first_of(vec![
                    when(|p| both_at(p, 1, 5, carboxyl_carbon), &[M::GlutaricAcid]),
                    when(|p| pair_at(p, 1, 5, carboxyl_carbon, ester_carbon), &[M::GlutaricMonoester]),
                    when(|p| both_at(p, 1, 5, ester_carbon), &[M::GlutaricDiester]),
                    when(|p| pair_at(p, 1, 5, carboxyl_carbon, amide_carbon), &[M::GlutaricMonoamide]),
                    when(|p| both_at(p, 1, 5, amide_carbon), &[M::GlutaricDiamide]),
                    when(|p| pair_at(p, 1, 5, ketone_carbon, carboxyl_carbon), &[M::OxoFiveAcid]),
                    when(|p| pair_at(p, 1, 5, ketone_carbon, ester_carbon), &[M::OxoFiveEster]),
                    when(|p| pair_at(p, 1, 5, ketone_carbon, amide_carbon), &[M::OxoFiveAmide]),
                    when(|p| both_at(p, 1, 5, ketone_carbon), &[M::DiketoneFive]),
                    when(|p| pair_at(p, 1, 5, aldehyde_carbon, carboxyl_carbon), &[M::GlutaricSemialdehyde]),
                    when(|p| both_at(p, 1, 5, aldehyde_carbon), &[M::Pentanedial]),
                ]),
            ]),
            when(|p| ring_span(p, 1, 6) && smallest_ring(p, 1) == Some(6), &[]).then(clauses![
                first_of(vec![
                    when(|p| both_at(p, 1, 5, amide_carbon), &[M::CyclicImideSix]),
                    when(|p| both_at(p, 1, 5, ester_carbon), &[M::CyclicAnhydrideSix]),
                ]),
            ]),
        ])],
    );
}

fn eight(t: &mut RuleTable) {
    t.add(
        "C-C-C-C-C-C-C=O",
        clauses![first_of(vec![
            when(|p| methyl(p, 0) && straight(p, 1, 6), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 6), &[M::HeptanoicAcid]),
                    when(|p| ester_carbon(p, 6), &[M::HeptanoylEster]),
                    when(|p| amide_carbon(p, 6), &[M::Heptanamide]),
                    when(|p| aldehyde_carbon(p, 6), &[M::Heptanal]),
                    when(|p| ketone_carbon(p, 6), &[M::HexylKetone]),
                ]),
            ]),
            when(|p| methyl(p, 0) && iso_fork(p, 1) && straight(p, 2, 6), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 6), &[M::IsoheptanoicAcid]),
                    when(|p| ester_carbon(p, 6), &[M::IsoheptanoylEster]),
                    when(|p| amide_carbon(p, 6), &[M::IsoheptanoylAmide]),
                ]),
            ]),
            when(|p| methyl(p, 0) && chain_link(p, 1) && methyl_branch(p, 2) && straight(p, 3, 6), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 6), &[M::AnteisoC7Acid]),
                    when(|p| ester_carbon(p, 6), &[M::AnteisoC7Ester]),
                ]),
            ]),
            when(|p| aromatic(p, 0) && straight(p, 1, 6), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 6), &[M::ArylHexanoicAcid]),
                    when(|p| ester_carbon(p, 6), &[M::ArylHexanoylEster]),
                    when(|p| amide_carbon(p, 6), &[M::ArylHexanamide]),
                    when(|p| ketone_carbon(p, 6), &[M::ArylPentylKetone]),
                ]),
            ]),
        ])],
    );

    t.add(
        "N-C-C-C-C-C-C=O",
        clauses![first_of(vec![
            when(|p| straight(p, 1, 6), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 0) && carboxyl_carbon(p, 6), &[M::AminoHexanoicAcid]),
                    when(|p| primary_amine(p, 0) && ester_carbon(p, 6), &[M::AminoHexanoateEster]),
                    when(|p| primary_amine(p, 0) && amide_carbon(p, 6), &[M::AminoHexanamide]),
                    when(|p| substituted_amine(p, 0) && carboxyl_carbon(p, 6), &[M::AlkylaminoHexanoicAcid]),
                    when(|p| quaternary_nitrogen(p, 0) && carboxyl_carbon(p, 6), &[M::TrialkylammonioHexanoate]),
                    when(|p| amide_nitrogen(p, 0) && carboxyl_carbon(p, 6), &[M::AcylaminoHexanoicAcid]),
                    when(|p| amide_nitrogen(p, 0) && ester_carbon(p, 6), &[M::AcylaminoHexanoateEster]),
                    when(|p| amide_nitrogen(p, 0) && ketone_carbon(p, 6), &[M::AcylaminopentylKetone]),
                ]),
            ]),
            when(|p| ring_span(p, 0, 7) && smallest_ring(p, 0) == Some(7) && oxo(p, 6), &[M::EpsilonLactamRing]),
        ])],
    );

    t.add(
        "O-C-C-C-C-C-C=O",
        clauses![first_of(vec![
            when(|p| straight(p, 1, 6), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 0) && carboxyl_carbon(p, 6), &[M::HydroxyHexanoicAcid]),
                    when(|p| hydroxyl(p, 0) && ester_carbon(p, 6), &[M::HydroxyHexanoateEster]),
                    when(|p| hydroxyl(p, 0) && amide_carbon(p, 6), &[M::HydroxyHexanamide]),
                    when(|p| hydroxyl(p, 0) && aldehyde_carbon(p, 6), &[M::HydroxyHexanal]),
                    when(|p| hydroxyl(p, 0) && ketone_carbon(p, 6), &[M::HydroxypentylKetone]),
                    when(|p| ether_oxygen(p, 0) && carboxyl_carbon(p, 6), &[M::AlkoxyHexanoicAcid]),
                    when(|p| ether_oxygen(p, 0) && ester_carbon(p, 6), &[M::AlkoxyHexanoateEster]),
                    when(|p| ester_oxygen(p, 0) && carboxyl_carbon(p, 6), &[M::AcyloxyHexanoicAcid]),
                    when(|p| ester_oxygen(p, 0) && ester_carbon(p, 6), &[M::AcyloxyHexanoateEster]),
                ]),
            ]),
            when(
                |p| ring_span(p, 0, 7) && smallest_ring(p, 0) == Some(7) && oxo(p, 6),
                &[M::SevenMemberedLactoneRing],
            ),
        ])],
    );

    t.add(
        "O=C-C-C-C-C-C-S",
        clauses![when(|p| straight(p, 2, 7), &[]).then(clauses![
            first_of(vec![
                when(|p| thiol(p, 7) && carboxyl_carbon(p, 1), &[M::MercaptoHexanoicAcid]),
                when(|p| thiol(p, 7) && amide_carbon(p, 1), &[M::MercaptoHexanamide]),
                when(|p| thioether(p, 7) && carboxyl_carbon(p, 1), &[M::AlkylthioHexanoicAcid]),
                when(|p| thioether(p, 7) && ester_carbon(p, 1), &[M::AlkylthioHexanoateEster]),
                when(|p| sulfonyl(p, 7) && carboxyl_carbon(p, 1), &[M::SulfonylHexanoicAcid]),
            ]),
        ])],
    );

    t.add(
        "Cl-C-C-C-C-C-C=O",
        clauses![when(|p| straight(p, 1, 6), &[]).then(clauses![
            first_of(vec![
                when(|p| carboxyl_carbon(p, 6), &[M::ChloroHexanoicAcid]),
                when(|p| ester_carbon(p, 6), &[M::ChloroHexanoateEster]),
                when(|p| amide_carbon(p, 6), &[M::ChloroHexanamide]),
                when(|p| ketone_carbon(p, 6), &[M::ChloropentylKetone]),
            ]),
        ])],
    );

    t.add(
        "Br-C-C-C-C-C-C=O",
        clauses![when(|p| straight(p, 1, 6), &[]).then(clauses![
            first_of(vec![
                when(|p| carboxyl_carbon(p, 6), &[M::BromoHexanoicAcid]),
                when(|p| ester_carbon(p, 6), &[M::BromoHexanoateEster]),
                when(|p| amide_carbon(p, 6), &[M::BromoHexanamide]),
                when(|p| ketone_carbon(p, 6), &[M::BromopentylKetone]),
            ]),
        ])],
    );

    t.add(
        "F-C-C-C-C-C-C=O",
        clauses![when(|p| p.env(1).fluorine == 3 && fluorinated(p, 2, 6), &[]).then(clauses![
            first_of(vec![
                when(|p| carboxyl_carbon(p, 6), &[M::PerfluoroHexanoicAcid]),
                when(|p| oxo(p, 6), &[M::PerfluoroHexanoyl]),
            ]),
        ])],
    );

    t.add(
        "O=C-C-C-C-C-C=O",
        clauses![first_of(vec![
            when(|p| straight(p, 2, 6), &[]).then(clauses![
                first_of(vec![
                    when(|p| both_at(p, 1, 6, carboxyl_carbon), &[M::AdipicAcid]),
                    when(|p| pair_at(p, 1, 6, carboxyl_carbon, ester_carbon), &[M::AdipicMonoester]),
                    when(|p| both_at(p, 1, 6, ester_carbon), &[M::AdipicDiester]),
                    when(|p| pair_at(p, 1, 6, carboxyl_carbon, amide_carbon), &[M::AdipicMonoamide]),
                    when(|p| both_at(p, 1, 6, amide_carbon), &[M::AdipicDiamide]),
                    when(|p| pair_at(p, 1, 6, ketone_carbon, carboxyl_carbon), &[M::OxoSixAcid]),
                    when(|p| pair_at(p, 1, 6, ketone_carbon, ester_carbon), &[M::OxoSixEster]),
                    when(|p| pair_at(p, 1, 6, ketone_carbon, amide_carbon), &[M::OxoSixAmide]),
                    when(|p| both_at(p, 1, 6, ketone_carbon), &[M::DiketoneSix]),
                    when(|p| pair_at(p, 1, 6, aldehyde_carbon, carboxyl_carbon), &[M::AdipicSemialdehyde]),
                    when(|p| both_at(p, 1, 6, aldehyde_carbon), &[M::Hexanedial]),
                ]),
            ]),
            when(|p| ring_span(p, 1, 7) && smallest_ring(p, 1) == Some(7), &[]).then(clauses![
                first_of(vec![
                    when(|p| both_at(p, 1, 6, amide_carbon), &[M::CyclicImideSeven]),
                    when(|p| both_at(p, 1, 6, ester_carbon), &[M::CyclicAnhydrideSeven]),
                ]),
            ]),
        ])],
    );
}

fn nine(t: &mut RuleTable) {
    t.add(
        "C-C-C-C-C-C-C-C=O",
        clauses![first_of(vec![
            when(|p| methyl(p, 0) && straight(p, 1, 7), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 7), &[M::OctanoicAcid]),
                    when(|p| ester_carbon(p, 7), &[M::OctanoylEster]),
                    when(|p| amide_carbon(p, 7), &[M::Octanamide]),
                    when(|p| aldehyde_carbon(p, 7), &[M::Octanal]),
                    when(|p| ketone_carbon(p, 7), &[M::HeptylKetone]),
                ]),
            ]),
            when(|p| methyl(p, 0) && iso_fork(p, 1) && straight(p, 2, 7), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 7), &[M::IsooctanoicAcid]),
                    when(|p| ester_carbon(p, 7), &[M::IsooctanoylEster]),
                    when(|p| amide_carbon(p, 7), &[M::IsooctanoylAmide]),
                ]),
            ]),
            when(|p| methyl(p, 0) && chain_link(p, 1) && methyl_branch(p, 2) && straight(p, 3, 7), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 7), &[M::AnteisoC8Acid]),
                    when(|p| ester_carbon(p, 7), &[M::AnteisoC8Ester]),
                ]),
            ]),
            when(|p| aromatic(p, 0) && straight(p, 1, 7), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 7), &[M::ArylHeptanoicAcid]),
                    when(|p| ester_carbon(p, 7), &[M::ArylHeptanoylEster]),
                    when(|p| amide_carbon(p, 7), &[M::ArylHeptanamide]),
                    when(|p| ketone_carbon(p, 7), &[M::ArylHexylKetone]),
                ]),
            ]),
        ])],
    );

    t.add(
        "N-C-C-C-C-C-C-C=O",
        clauses![first_of(vec![
            when(|p| straight(p, 1, 7), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 0) && carboxyl_carbon(p, 7), &[M::AminoHeptanoicAcid]),
                    when(|p| primary_amine(p, 0) && ester_carbon(p, 7), &[M::AminoHeptanoateEster]),
                    when(|p| primary_amine(p, 0) && amide_carbon(p, 7), &[M::AminoHeptanamide]),
                    when(|p| substituted_amine(p, 0) && carboxyl_carbon(p, 7), &[M::AlkylaminoHeptanoicAcid]),
                    when(|p| quaternary_nitrogen(p, 0) && carboxyl_carbon(p, 7), &[M::TrialkylammonioHeptanoate]),
                    when(|p| amide_nitrogen(p, 0) && carboxyl_carbon(p, 7), &[M::AcylaminoHeptanoicAcid]),
                    when(|p| amide_nitrogen(p, 0) && ester_carbon(p, 7), &[M::AcylaminoHeptanoateEster]),
                    when(|p| amide_nitrogen(p, 0) && ketone_carbon(p, 7), &[M::AcylaminohexylKetone]),
                ]),
            ]),
            when(
                |p| ring_span(p, 0, 8) && smallest_ring(p, 0) == Some(8) && oxo(p, 7),
                &[M::EightMemberedLactamRing],
            ),
        ])],
    );

    t.add(
        "O-C-C-C-C-C-C-C=O",
        clauses![first_of(vec![
            when(|p| straight(p, 1, 7), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 0) && carboxyl_carbon(p, 7), &[M::HydroxyHeptanoicAcid]),
                    when(|p| hydroxyl(p, 0) && ester_carbon(p, 7), &[M::HydroxyHeptanoateEster]),
                    when(|p| hydroxyl(p, 0) && amide_carbon(p, 7), &[M::HydroxyHeptanamide]),
                    when(|p| hydroxyl(p, 0) && aldehyde_carbon(p, 7), &[M::HydroxyHeptanal]),
                    when(|p| hydroxyl(p, 0) && ketone_carbon(p, 7), &[M::HydroxyhexylKetone]),
                    when(|p| ether_oxygen(p, 0) && carboxyl_carbon(p, 7), &[M::AlkoxyHeptanoicAcid]),
                    when(|p| ether_oxygen(p, 0) && ester_carbon(p, 7), &[M::AlkoxyHeptanoateEster]),
                    when(|p| ester_oxygen(p, 0) && carboxyl_carbon(p, 7), &[M::AcyloxyHeptanoicAcid]),
                    when(|p| ester_oxygen(p, 0) && ester_carbon(p, 7), &[M::AcyloxyHeptanoateEster]),
                ]),
            ]),
            when(
                |p| ring_span(p, 0, 8) && smallest_ring(p, 0) == Some(8) && oxo(p, 7),
                &[M::EightMemberedLactoneRing],
            ),
        ])],
    );

    t.add(
        "O=C-C-C-C-C-C-C-S",
        clauses![when(|p| straight(p, 2, 8), &[]).then(clauses![
            first_of(vec![
                when(|p| thiol(p, 8) && carboxyl_carbon(p, 1), &[M::MercaptoHeptanoicAcid]),
                when(|p| thiol(p, 8) && amide_carbon(p, 1), &[M::MercaptoHeptanamide]),
                when(|p| thioether(p, 8) && carboxyl_carbon(p, 1), &[M::AlkylthioHeptanoicAcid]),
                when(|p| thioether(p, 8) && ester_carbon(p, 1), &[M::AlkylthioHeptanoateEster]),
                when(|p| sulfonyl(p, 8) && carboxyl_carbon(p, 1), &[M::SulfonylHeptanoicAcid]),
            ]),
        ])],
    );

    t.add(
        "Cl-C-C-C-C-C-C-C=O",
        clauses![when(|p| straight(p, 1, 7), &[]).then(clauses![
            first_of(vec![
                when(|p| carboxyl_carbon(p, 7), &[M::ChloroHeptanoicAcid]),
                when(|p| ester_carbon(p, 7), &[M::ChloroHeptanoateEster]),
                when(|p| amide_carbon(p, 7), &[M::ChloroHeptanamide]),
                when(|p| ketone_carbon(p, 7), &[M::ChlorohexylKetone]),
            ]),
        ])],
    );

    t.add(
        "Br-C-C-C-C-C-C-C=O",
        clauses![when(|p| straight(p, 1, 7), &[]).then(clauses![
            first_of(vec![
                when(|p| carboxyl_carbon(p, 7), &[M::BromoHeptanoicAcid]),
                when(|p| ester_carbon(p, 7), &[M::BromoHeptanoateEster]),
                when(|p| amide_carbon(p, 7), &[M::BromoHeptanamide]),
                when(|p| ketone_carbon(p, 7), &[M::BromohexylKetone]),
            ]),
        ])],
    );

    t.add(
        "F-C-C-C-C-C-C-C=O",
        clauses![when(|p| p.env(1).fluorine == 3 && fluorinated(p, 2, 7), &[]).then(clauses![
            first_of(vec![
                when(|p| carboxyl_carbon(p, 7), &[M::PerfluoroHeptanoicAcid]),
                when(|p| oxo(p, 7), &[M::PerfluoroHeptanoyl]),
            ]),
        ])],
    );

    t.add(
        "O=C-C-C-C-C-C-C=O",
        clauses![when(|p| straight(p, 2, 7), &[]).then(clauses![
            first_of(vec![
                when(|p| both_at(p, 1, 7, carboxyl_carbon), &[M::PimelicAcid]),
                when(|p| pair_at(p, 1, 7, carboxyl_carbon, ester_carbon), &[M::PimelicMonoester]),
                when(|p| both_at(p, 1, 7, ester_carbon), &[M::PimelicDiester]),
                when(|p| pair_at(p, 1, 7, carboxyl_carbon, amide_carbon), &[M::PimelicMonoamide]),
                when(|p| both_at(p, 1, 7, amide_carbon), &[M::PimelicDiamide]),
                when(|p| pair_at(p, 1, 7, ketone_carbon, carboxyl_carbon), &[M::OxoSevenAcid]),
                when(|p| pair_at(p, 1, 7, ketone_carbon, ester_carbon), &[M::OxoSevenEster]),
                when(|p| pair_at(p, 1, 7, ketone_carbon, amide_carbon), &[M::OxoSevenAmide]),
                when(|p| both_at(p, 1, 7, ketone_carbon), &[M::DiketoneSeven]),
                when(|p| pair_at(p, 1, 7, aldehyde_carbon, carboxyl_carbon), &[M::PimelicSemialdehyde]),
                when(|p| both_at(p, 1, 7, aldehyde_carbon), &[M::Heptanedial]),
            ]),
        ])],
    );
}

fn ten(t: &mut RuleTable) {
    t.add(
        "C-C-C-C-C-C-C-C-C=O",
        clauses![first_of(vec![
            when(|p| methyl(p, 0) && straight(p, 1, 8), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 8), &[M::NonanoicAcid]),
                    when(|p| ester_carbon(p, 8), &[M::NonanoylEster]),
                    when(|p| amide_carbon(p, 8), &[M::Nonanamide]),
                    when(|p| aldehyde_carbon(p, 8), &[M::Nonanal]),
                    when(|p| ketone_carbon(p, 8), &[M::OctylKetone]),
                ]),
            ]),
            when(|p| methyl(p, 0) && iso_fork(p, 1) && straight(p, 2, 8), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 8), &[M::IsononanoicAcid]),
                    when(|p| ester_carbon(p, 8), &[M::IsononanoylEster]),
                    when(|p| amide_carbon(p, 8), &[M::IsononanoylAmide]),
                ]),
            ]),
            when(|p| methyl(p, 0) && chain_link(p, 1) && methyl_branch(p, 2) && straight(p, 3, 8), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 8), &[M::AnteisoC9Acid]),
                    when(|p| ester_carbon(p, 8), &[M::AnteisoC9Ester]),
                ]),
            ]),
            when(|p| aromatic(p, 0) && straight(p, 1, 8), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 8), &[M::ArylOctanoicAcid]),
                    when(|p| ester_carbon(p, 8), &[M::ArylOctanoylEster]),
                    when(|p| amide_carbon(p, 8), &[M::ArylOctanamide]),
                    when(|p| ketone_carbon(p, 8), &[M::ArylHeptylKetone]),
                ]),
            ]),
        ])],
    );

    t.add(
        "N-C-C-C-C-C-C-C-C=O",
        clauses![first_of(vec![
            when(|p| straight(p, 1, 8), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 0) && carboxyl_carbon(p, 8), &[M::AminoOctanoicAcid]),
                    when(|p| primary_amine(p, 0) && ester_carbon(p, 8), &[M::AminoOctanoateEster]),
                    when(|p| primary_amine(p, 0) && amide_carbon(p, 8), &[M::AminoOctanamide]),
                    when(|p| substituted_amine(p, 0) && carboxyl_carbon(p, 8), &[M::AlkylaminoOctanoicAcid]),
                    when(|p| quaternary_nitrogen(p, 0) && carboxyl_carbon(p, 8), &[M::TrialkylammonioOctanoate]),
                    when(|p| amide_nitrogen(p, 0) && carboxyl_carbon(p, 8), &[M::AcylaminoOctanoicAcid]),
                    when(|p| amide_nitrogen(p, 0) && ester_carbon(p, 8), &[M::AcylaminoOctanoateEster]),
                    when(|p| amide_nitrogen(p, 0) && ketone_carbon(p, 8), &[M::AcylaminoheptylKetone]),
                ]),
            ]),
            when(|p| ring_span(p, 0, 9) && smallest_ring(p, 0) == Some(9) && oxo(p, 8), &[M::NineMemberedLactamRing]),
        ])],
    );

    t.add(
        "O-C-C-C-C-C-C-C-C=O",
        clauses![first_of(vec![
            when(|p| straight(p, 1, 8), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 0) && carboxyl_carbon(p, 8), &[M::HydroxyOctanoicAcid]),
                    when(|p| hydroxyl(p, 0) && ester_carbon(p, 8), &[M::HydroxyOctanoateEster]),
                    when(|p| hydroxyl(p, 0) && amide_carbon(p, 8), &[M::HydroxyOctanamide]),
                    when(|p| hydroxyl(p, 0) && aldehyde_carbon(p, 8), &[M::HydroxyOctanal]),
                    when(|p| hydroxyl(p, 0) && ketone_carbon(p, 8), &[M::HydroxyheptylKetone]),
                    when(|p| ether_oxygen(p, 0) && carboxyl_carbon(p, 8), &[M::AlkoxyOctanoicAcid]),
                    when(|p| ether_oxygen(p, 0) && ester_carbon(p, 8), &[M::AlkoxyOctanoateEster]),
                    when(|p| ester_oxygen(p, 0) && carboxyl_carbon(p, 8), &[M::AcyloxyOctanoicAcid]),
                    when(|p| ester_oxygen(p, 0) && ester_carbon(p, 8), &[M::AcyloxyOctanoateEster]),
                ]),
            ]),
            when(
                |p| ring_span(p, 0, 9) && smallest_ring(p, 0) == Some(9) && oxo(p, 8),
                &[M::NineMemberedLactoneRing],
            ),
        ])],
    );

    t.add(
        "O=C-C-C-C-C-C-C-C-S",
        clauses![when(|p| straight(p, 2, 9), &[]).then(clauses![
            first_of(vec![
                when(|p| thiol(p, 9) && carboxyl_carbon(p, 1), &[M::MercaptoOctanoicAcid]),
                when(|p| thiol(p, 9) && amide_carbon(p, 1), &[M::MercaptoOctanamide]),
                when(|p| thioether(p, 9) && carboxyl_carbon(p, 1), &[M::AlkylthioOctanoicAcid]),
                when(|p| thioether(p, 9) && ester_carbon(p, 1), &[M::AlkylthioOctanoateEster]),
                when(|p| sulfonyl(p, 9) && carboxyl_carbon(p, 1), &[M::SulfonylOctanoicAcid]),
            ]),
        ])],
    );

    t.add(
        "Cl-C-C-C-C-C-C-C-C=O",
        clauses![when(|p| straight(p, 1, 8), &[]).then(clauses![
            first_of(vec![
                when(|p| carboxyl_carbon(p, 8), &[M::ChloroOctanoicAcid]),
                when(|p| ester_carbon(p, 8), &[M::ChloroOctanoateEster]),
                when(|p| amide_carbon(p, 8), &[M::ChloroOctanamide]),
                when(|p| ketone_carbon(p, 8), &[M::ChloroheptylKetone]),
            ]),
        ])],
    );

    t.add(
        "Br-C-C-C-C-C-C-C-C=O",
        clauses![when(|p| straight(p, 1, 8), &[]).then(clauses![
            first_of(vec![
                when(|p| carboxyl_carbon(p, 8), &[M::BromoOctanoicAcid]),
                when(|p| ester_carbon(p, 8), &[M::BromoOctanoateEster]),
                when(|p| amide_carbon(p, 8), &[M::BromoOctanamide]),
                when(|p| ketone_carbon(p, 8), &[M::BromoheptylKetone]),
            ]),
        ])],
    );

    t.add(
        "F-C-C-C-C-C-C-C-C=O",
        clauses![when(|p| p.env(1).fluorine == 3 && fluorinated(p, 2, 8), &[]).then(clauses![
            first_of(vec![
                when(|p| carboxyl_carbon(p, 8), &[M::PerfluoroOctanoicAcid]),
                when(|p| oxo(p, 8), &[M::PerfluoroOctanoyl]),
            ]),
        ])],
    );

    t.add(
        "O=C-C-C-C-C-C-C-C=O",
        clauses![when(|p| straight(p, 2, 8), &[]).then(clauses![
            first_of(vec![
                when(|p| both_at(p, 1, 8, carboxyl_carbon), &[M::SubericAcid]),
                when(|p| pair_at(p, 1, 8, carboxyl_carbon, ester_carbon), &[M::SubericMonoester]),
                when(|p| both_at(p, 1, 8, ester_carbon), &[M::SubericDiester]),
                when(|p| pair_at(p, 1, 8, carboxyl_carbon, amide_carbon), &[M::SubericMonoamide]),
                when(|p| both_at(p, 1, 8, amide_carbon), &[M::SubericDiamide]),
                when(|p| pair_at(p, 1, 8, ketone_carbon, carboxyl_carbon), &[M::OxoEightAcid]),
                when(|p| pair_at(p, 1, 8, ketone_carbon, ester_carbon), &[M::OxoEightEster]),
                when(|p| pair_at(p, 1, 8, ketone_carbon, amide_carbon), &[M::OxoEightAmide]),
                when(|p| both_at(p, 1, 8, ketone_carbon), &[M::DiketoneEight]),
                when(|p| pair_at(p, 1, 8, aldehyde_carbon, carboxyl_carbon), &[M::SubericSemialdehyde]),
                when(|p| both_at(p, 1, 8, aldehyde_carbon), &[M::Octanedial]),
            ]),
        ])],
    );
}

fn eleven(t: &mut RuleTable) {
    t.add(
        "C-C-C-C-C-C-C-C-C-C=O",
        clauses![first_of(vec![
            when(|p| methyl(p, 0) && straight(p, 1, 9), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 9), &[M::DecanoicAcid]),
                    when(|p| ester_carbon(p, 9), &[M::DecanoylEster]),
                    when(|p| amide_carbon(p, 9), &[M::Decanamide]),
                    when(|p| aldehyde_carbon(p, 9), &[M::Decanal]),
                    when(|p| ketone_carbon(p, 9), &[M::NonylKetone]),
                ]),
            ]),
            when(|p| methyl(p, 0) && iso_fork(p, 1) && straight(p, 2, 9), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 9), &[M::IsodecanoicAcid]),
                    when(|p| ester_carbon(p, 9), &[M::IsodecanoylEster]),
                    when(|p| amide_carbon(p, 9), &[M::IsodecanoylAmide]),
                ]),
            ]),
            when(|p| methyl(p, 0) && chain_link(p, 1) && methyl_branch(p, 2) && straight(p, 3, 9), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 9), &[M::AnteisoC10Acid]),
                    when(|p| ester_carbon(p, 9), &[M::AnteisoC10Ester]),
                ]),
            ]),
        ])],
    );

    t.add(
        "N-C-C-C-C-C-C-C-C-C=O",
        clauses![first_of(vec![
            when(|p| straight(p, 1, 9), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 0) && carboxyl_carbon(p, 9), &[M::AminoNonanoicAcid]),
                    when(|p| primary_amine(p, 0) && ester_carbon(p, 9), &[M::AminoNonanoateEster]),
                    when(|p| primary_amine(p, 0) && amide_carbon(p, 9), &[M::AminoNonanamide]),
                    when(|p| substituted_amine(p, 0) && carboxyl_carbon(p, 9), &[M::AlkylaminoNonanoicAcid]),
                    when(|p| quaternary_nitrogen(p, 0) && carboxyl_carbon(p, 9), &[M::TrialkylammonioNonanoate]),
                    when(|p| amide_nitrogen(p, 0) && carboxyl_carbon(p, 9), &[M::AcylaminoNonanoicAcid]),
                    when(|p| amide_nitrogen(p, 0) && ester_carbon(p, 9), &[M::AcylaminoNonanoateEster]),
                    when(|p| amide_nitrogen(p, 0) && ketone_carbon(p, 9), &[M::AcylaminooctylKetone]),
                ]),
            ]),
            when(
                |p| ring_span(p, 0, 10) && smallest_ring(p, 0) == Some(10) && oxo(p, 9),
                &[M::TenMemberedLactamRing],
            ),
        ])],
    );

    t.add(
        "O-C-C-C-C-C-C-C-C-C=O",
        clauses![first_of(vec![
            when(|p| straight(p, 1, 9), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 0) && carboxyl_carbon(p, 9), &[M::HydroxyNonanoicAcid]),
                    when(|p| hydroxyl(p, 0) && ester_carbon(p, 9), &[M::HydroxyNonanoateEster]),
                    when(|p| hydroxyl(p, 0) && amide_carbon(p, 9), &[M::HydroxyNonanamide]),
                    when(|p| hydroxyl(p, 0) && aldehyde_carbon(p, 9), &[M::HydroxyNonanal]),
                    when(|p| hydroxyl(p, 0) && ketone_carbon(p, 9), &[M::HydroxyoctylKetone]),
                    when(|p| ether_oxygen(p, 0) && carboxyl_carbon(p, 9), &[M::AlkoxyNonanoicAcid]),
                    when(|p| ether_oxygen(p, 0) && ester_carbon(p, 9), &[M::AlkoxyNonanoateEster]),
                    when(|p| ester_oxygen(p, 0) && carboxyl_carbon(p, 9), &[M::AcyloxyNonanoicAcid]),
                    when(|p| ester_oxygen(p, 0) && ester_carbon(p, 9), &[M::AcyloxyNonanoateEster]),
                ]),
            ]),
            when(
                |p| ring_span(p, 0, 10) && smallest_ring(p, 0) == Some(10) && oxo(p, 9),
                &[M::TenMemberedLactoneRing],
            ),
        ])],
    );

    t.add(
        "O=C-C-C-C-C-C-C-C-C-S",
        clauses![when(|p| straight(p, 2, 10), &[]).then(clauses![
            first_of(vec![
                when(|p| thiol(p, 10) && carboxyl_carbon(p, 1), &[M::MercaptoNonanoicAcid]),
                when(|p| thiol(p, 10) && amide_carbon(p, 1), &[M::MercaptoNonanamide]),
                when(|p| thioether(p, 10) && carboxyl_carbon(p, 1), &[M::AlkylthioNonanoicAcid]),
                when(|p| thioether(p, 10) && ester_carbon(p, 1), &[M::AlkylthioNonanoateEster]),
                when(|p| sulfonyl(p, 10) && carboxyl_carbon(p, 1), &[M::SulfonylNonanoicAcid]),
            ]),
        ])],
    );

    t.add(
        "Cl-C-C-C-C-C-C-C-C-C=O",
        clauses![when(|p| straight(p, 1, 9), &[]).then(clauses![
            first_of(vec![
                when(|p| carboxyl_carbon(p, 9), &[M::ChloroNonanoicAcid]),
                when(|p| ester_carbon(p, 9), &[M::ChloroNonanoateEster]),
                when(|p| amide_carbon(p, 9), &[M::ChloroNonanamide]),
                when(|p| ketone_carbon(p, 9), &[M::ChlorooctylKetone]),
            ]),
        ])],
    );

    t.add(
        "Br-C-C-C-C-C-C-C-C-C=O",
        clauses![when(|p| straight(p, 1, 9), &[]).then(clauses![
            first_of(vec![
                when(|p| carboxyl_carbon(p, 9), &[M::BromoNonanoicAcid]),
                when(|p| ester_carbon(p, 9), &[M::BromoNonanoateEster]),
                when(|p| amide_carbon(p, 9), &[M::BromoNonanamide]),
                when(|p| ketone_carbon(p, 9), &[M::BromooctylKetone]),
            ]),
        ])],
    );

    t.add(
        "F-C-C-C-C-C-C-C-C-C=O",
        clauses![when(|p| p.env(1).fluorine == 3 && fluorinated(p, 2, 9), &[]).then(clauses![
            first_of(vec![
                when(|p| carboxyl_carbon(p, 9), &[M::PerfluoroNonanoicAcid]),
                when(|p| oxo(p, 9), &[M::PerfluoroNonanoyl]),
            ]),
        ])],
    );

    t.add(
        "O=C-C-C-C-C-C-C-C-C=O",
        clauses![when(|p| straight(p, 2, 9), &[]).then(clauses![
            first_of(vec![
                when(|p| both_at(p, 1, 9, carboxyl_carbon), &[M::AzelaicAcid]),
                when(|p| pair_at(p, 1, 9, carboxyl_carbon, ester_carbon), &[M::AzelaicMonoester]),
                when(|p| both_at(p, 1, 9, ester_carbon), &[M::AzelaicDiester]),
                when(|p| pair_at(p, 1, 9, carboxyl_carbon, amide_carbon), &[M::AzelaicMonoamide]),
                when(|p| both_at(p, 1, 9, amide_carbon), &[M::AzelaicDiamide]),
                when(|p| pair_at(p, 1, 9, ketone_carbon, carboxyl_carbon), &[M::OxoNineAcid]),
                when(|p| pair_at(p, 1, 9, ketone_carbon, ester_carbon), &[M::OxoNineEster]),
                when(|p| pair_at(p, 1, 9, ketone_carbon, amide_carbon), &[M::OxoNineAmide]),
                when(|p| both_at(p, 1, 9, ketone_carbon), &[M::DiketoneNine]),
                when(|p| pair_at(p, 1, 9, aldehyde_carbon, carboxyl_carbon), &[M::AzelaicSemialdehyde]),
                when(|p| both_at(p, 1, 9, aldehyde_carbon), &[M::Nonanedial]),
            ]),
        ])],
    );
}

fn twelve(t: &mut RuleTable) {
    t.extend(
        "C-C-C-C-C-C-C-C-C-C-C=O",
        clauses![first_of(vec![
            when(|p| methyl(p, 0) && straight(p, 1, 10), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 10), &[M::UndecanoicAcid]),
                    when(|p| ester_carbon(p, 10), &[M::UndecanoylEster]),
                    when(|p| amide_carbon(p, 10), &[M::Undecanamide]),
                    when(|p| aldehyde_carbon(p, 10), &[M::Undecanal]),
                    when(|p| ketone_carbon(p, 10), &[M::DecylKetone]),
                ]),
            ]),
            when(|p| methyl(p, 0) && iso_fork(p, 1) && straight(p, 2, 10), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 10), &[M::IsoundecanoicAcid]),
                    when(|p| ester_carbon(p, 10), &[M::IsoundecanoylEster]),
                    when(|p| amide_carbon(p, 10), &[M::IsoundecanoylAmide]),
                ]),
            ]),
            when(
                |p| methyl(p, 0) && chain_link(p, 1) && methyl_branch(p, 2) && straight(p, 3, 10),
                &[],
            ).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 10), &[M::AnteisoC11Acid]),
                    when(|p| ester_carbon(p, 10), &[M::AnteisoC11Ester]),
                ]),
            ]),
        ])],
    );

    t.add(
        "N-C-C-C-C-C-C-C-C-C-C=O",
        clauses![first_of(vec![
            when(|p| straight(p, 1, 10), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 0) && carboxyl_carbon(p, 10), &[M::AminoDecanoicAcid]),
                    when(|p| primary_amine(p, 0) && ester_carbon(p, 10), &[M::AminoDecanoateEster]),
                    when(|p| primary_amine(p, 0) && amide_carbon(p, 10), &[M::AminoDecanamide]),
                    when(|p| substituted_amine(p, 0) && carboxyl_carbon(p, 10), &[M::AlkylaminoDecanoicAcid]),
                    when(|p| quaternary_nitrogen(p, 0) && carboxyl_carbon(p, 10), &[M::TrialkylammonioDecanoate]),
                    when(|p| amide_nitrogen(p, 0) && carboxyl_carbon(p, 10), &[M::AcylaminoDecanoicAcid]),
                    when(|p| amide_nitrogen(p, 0) && ester_carbon(p, 10), &[M::AcylaminoDecanoateEster]),
                    when(|p| amide_nitrogen(p, 0) && ketone_carbon(p, 10), &[M::AcylaminononylKetone]),
                ]),
            ]),
            when(
                |p| ring_span(p, 0, 11) && smallest_ring(p, 0) == Some(11) && oxo(p, 10),
                &[M::ElevenMemberedLactamRing],
            ),
        ])],
    );

    t.add(
        "O-C-C-C-C-C-C-C-C-C-C=O",
        clauses![first_of(vec![
            when(|p| straight(p, 1, 10), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 0) && carboxyl_carbon(p, 10), &[M::HydroxyDecanoicAcid]),
                    when(|p| hydroxyl(p, 0) && ester_carbon(p, 10), &[M::HydroxyDecanoateEster]),
                    when(|p| hydroxyl(p, 0) && amide_carbon(p, 10), &[M::HydroxyDecanamide]),
                    when(|p| hydroxyl(p, 0) && aldehyde_carbon(p, 10), &[M::HydroxyDecanal]),
                    when(|p| hydroxyl(p, 0) && ketone_carbon(p, 10), &[M::HydroxynonylKetone]),
                    when(|p| ether_oxygen(p, 0) && carboxyl_carbon(p, 10), &[M::AlkoxyDecanoicAcid]),
                    when(|p| ether_oxygen(p, 0) && ester_carbon(p, 10), &[M::AlkoxyDecanoateEster]),
                    when(|p| ester_oxygen(p, 0) && carboxyl_carbon(p, 10), &[M::AcyloxyDecanoicAcid]),
                    when(|p| ester_oxygen(p, 0) && ester_carbon(p, 10), &[M::AcyloxyDecanoateEster]),
                ]),
            ]),
            when(
                |p| ring_span(p, 0, 11) && smallest_ring(p, 0) == Some(11) && oxo(p, 10),
                &[M::ElevenMemberedLactoneRing],
            ),
        ])],
    );

    t.add(
        "O=C-C-C-C-C-C-C-C-C-C-S",
        clauses![when(|p| straight(p, 2, 11), &[]).then(clauses![
            first_of(vec![
                when(|p| thiol(p, 11) && carboxyl_carbon(p, 1), &[M::MercaptoDecanoicAcid]),
                when(|p| thiol(p, 11) && amide_carbon(p, 1), &[M::MercaptoDecanamide]),
                when(|p| thioether(p, 11) && carboxyl_carbon(p, 1), &[M::AlkylthioDecanoicAcid]),
                when(|p| thioether(p, 11) && ester_carbon(p, 1), &[M::AlkylthioDecanoateEster]),
                when(|p| sulfonyl(p, 11) && carboxyl_carbon(p, 1), &[M::SulfonylDecanoicAcid]),
            ]),
        ])],
    );

    t.add(
        "Cl-C-C-C-C-C-C-C-C-C-C=O",
        clauses![when(|p| straight(p, 1, 10), &[]).then(clauses![
            first_of(vec![
                when(|p| carboxyl_carbon(p, 10), &[M::ChloroDecanoicAcid]),
                when(|p| ester_carbon(p, 10), &[M::ChloroDecanoateEster]),
                when(|p| amide_carbon(p, 10), &[M::ChloroDecanamide]),
                when(|p| ketone_carbon(p, 10), &[M::ChlorononylKetone]),
            ]),
        ])],
    );

    t.add(
        "Br-C-C-C-C-C-C-C-C-C-C=O",
        clauses![when(|p| straight(p, 1, 10), &[]).then(clauses![
            first_of(vec![
                when(|p| carboxyl_carbon(p, 10), &[M::BromoDecanoicAcid]),
                when(|p| ester_carbon(p, 10), &[M::BromoDecanoateEster]),
                when(|p| amide_carbon(p, 10), &[M::BromoDecanamide]),
                when(|p| ketone_carbon(p, 10), &[M::BromononylKetone]),
            ]),
        ])],
    );

    t.add(
        "F-C-C-C-C-C-C-C-C-C-C=O",
        clauses![when(|p| p.env(1).fluorine == 3 && fluorinated(p, 2, 10), &[]).then(clauses![
            first_of(vec![
                when(|p| carboxyl_carbon(p, 10), &[M::PerfluoroDecanoicAcid]),
                when(|p| oxo(p, 10), &[M::PerfluoroDecanoyl]),
            ]),
        ])],
    );

    t.add(
        "O=C-C-C-C-C-C-C-C-C-C=O",
        clauses![when(|p| straight(p, 2, 10), &[]).then(clauses![
            first_of(vec![
                when(|p| both_at(p, 1, 10, carboxyl_carbon), &[M::SebacicAcid]),
                when(|p| pair_at(p, 1, 10, carboxyl_carbon, ester_carbon), &[M::SebacicMonoester]),
                when(|p| both_at(p, 1, 10, ester_carbon), &[M::SebacicDiester]),
                when(|p| pair_at(p, 1, 10, carboxyl_carbon, amide_carbon), &[M::SebacicMonoamide]),
                when(|p| both_at(p, 1, 10, amide_carbon), &[M::SebacicDiamide]),
                when(|p| pair_at(p, 1, 10, ketone_carbon, carboxyl_carbon), &[M::OxoTenAcid]),
                when(|p| pair_at(p, 1, 10, ketone_carbon, ester_carbon), &[M::OxoTenEster]),
                when(|p| pair_at(p, 1, 10, ketone_carbon, amide_carbon), &[M::OxoTenAmide]),
                when(|p| both_at(p, 1, 10, ketone_carbon), &[M::DiketoneTen]),
                when(|p| pair_at(p, 1, 10, aldehyde_carbon, carboxyl_carbon), &[M::SebacicSemialdehyde]),
                when(|p| both_at(p, 1, 10, aldehyde_carbon), &[M::Decanedial]),
            ]),
        ])],
    );
}

fn thirteen(t: &mut RuleTable) {
    t.add(
        "C-C-C-C-C-C-C-C-C-C-C-C=O",
        clauses![first_of(vec![
            when(|p| methyl(p, 0) && straight(p, 1, 11), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 11), &[M::DodecanoicAcid]),
                    when(|p| ester_carbon(p, 11), &[M::DodecanoylEster]),
                    when(|p| amide_carbon(p, 11), &[M::Dodecanamide]),
                    when(|p| aldehyde_carbon(p, 11), &[M::Dodecanal]),
                    when(|p| ketone_carbon(p, 11), &[M::UndecylKetone]),
                ]),
            ]),
            when(|p| methyl(p, 0) && iso_fork(p, 1) && straight(p, 2, 11), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 11), &[M::IsolauricAcid]),
                    when(|p| ester_carbon(p, 11), &[M::IsolauroylEster]),
                    when(|p| amide_carbon(p, 11), &[M::IsolauroylAmide]),
                ]),
            ]),
            when(
                |p| methyl(p, 0) && chain_link(p, 1) && methyl_branch(p, 2) && straight(p, 3, 11),
                &[],
            ).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 11), &[M::AnteisoC12Acid]),
                    when(|p| ester_carbon(p, 11), &[M::AnteisoC12Ester]),
                ]),
            ]),
        ])],
    );

    t.add(
        "N-C-C-C-C-C-C-C-C-C-C-C=O",
        clauses![first_of(vec![
            when(|p| straight(p, 1, 11), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 0) && carboxyl_carbon(p, 11), &[M::AminoUndecanoicAcid]),
                    when(|p| primary_amine(p, 0) && ester_carbon(p, 11), &[M::AminoUndecanoateEster]),
                    when(|p| primary_amine(p, 0) && amide_carbon(p, 11), &[M::AminoUndecanamide]),
                    when(|p| substituted_amine(p, 0) && carboxyl_carbon(p, 11), &[M::AlkylaminoUndecanoicAcid]),
                    when(|p| quaternary_nitrogen(p, 0) && carboxyl_carbon(p, 11), &[M::TrialkylammonioUndecanoate]),
                    when(|p| amide_nitrogen(p, 0) && carboxyl_carbon(p, 11), &[M::AcylaminoUndecanoicAcid]),
                    when(|p| amide_nitrogen(p, 0) && ester_carbon(p, 11), &[M::AcylaminoUndecanoateEster]),
                    when(|p| amide_nitrogen(p, 0) && ketone_carbon(p, 11), &[M::AcylaminodecylKetone]),
                ]),
            ]),
            when(
                |p| ring_span(p, 0, 12) && smallest_ring(p, 0) == Some(12) && oxo(p, 11),
                &[M::TwelveMemberedLactamRing],
            ),
        ])],
    );

    t.add(
        "O-C-C-C-C-C-C-C-C-C-C-C=O",
        clauses![first_of(vec![
            when(|p| straight(p, 1, 11), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 0) && carboxyl_carbon(p, 11), &[M::HydroxyUndecanoicAcid]),
                    when(|p| hydroxyl(p, 0) && ester_carbon(p, 11), &[M::HydroxyUndecanoateEster]),
                    when(|p| hydroxyl(p, 0) && amide_carbon(p, 11), &[M::HydroxyUndecanamide]),
                    when(|p| hydroxyl(p, 0) && aldehyde_carbon(p, 11), &[M::HydroxyUndecanal]),
                    when(|p| hydroxyl(p, 0) && ketone_carbon(p, 11), &[M::HydroxydecylKetone]),
                    when(|p| ether_oxygen(p, 0) && carboxyl_carbon(p, 11), &[M::AlkoxyUndecanoicAcid]),
                    when(|p| ether_oxygen(p, 0) && ester_carbon(p, 11), &[M::AlkoxyUndecanoateEster]),
                    when(|p| ester_oxygen(p, 0) && carboxyl_carbon(p, 11), &[M::AcyloxyUndecanoicAcid]),
                    when(|p| ester_oxygen(p, 0) && ester_carbon(p, 11), &[M::AcyloxyUndecanoateEster]),
                ]),
            ]),
            when(
                |p| ring_span(p, 0, 12) && smallest_ring(p, 0) == Some(12) && oxo(p, 11),
                &[M::TwelveMemberedLactoneRing],
            ),
        ])],
    );

    t.add(
        "O=C-C-C-C-C-C-C-C-C-C-C-S",
        clauses![when(|p| straight(p, 2, 12), &[]).then(clauses![
            first_of(vec![
                when(|p| thiol(p, 12) && carboxyl_carbon(p, 1), &[M::MercaptoUndecanoicAcid]),
                when(|p| thiol(p, 12) && amide_carbon(p, 1), &[M::MercaptoUndecanamide]),
                when(|p| thioether(p, 12) && carboxyl_carbon(p, 1), &[M::AlkylthioUndecanoicAcid]),
                when(|p| thioether(p, 12) && ester_carbon(p, 1), &[M::AlkylthioUndecanoateEster]),
                when(|p| sulfonyl(p, 12) && carboxyl_carbon(p, 1), &[M::SulfonylUndecanoicAcid]),
            ]),
        ])],
    );

    t.add(
        "Cl-C-C-C-C-C-C-C-C-C-C-C=O",
        clauses![when(|p| straight(p, 1, 11), &[]).then(clauses![
            first_of(vec![
                when(|p| carboxyl_carbon(p, 11), &[M::ChloroUndecanoicAcid]),
                when(|p| ester_carbon(p, 11), &[M::ChloroUndecanoateEster]),
                when(|p| amide_carbon(p, 11), &[M::ChloroUndecanamide]),
                when(|p| ketone_carbon(p, 11), &[M::ChlorodecylKetone]),
            ]),
        ])],
    );

    t.add(
        "Br-C-C-C-C-C-C-C-C-C-C-C=O",
        clauses![when(|p| straight(p, 1, 11), &[]).then(clauses![
            first_of(vec![
                when(|p| carboxyl_carbon(p, 11), &[M::BromoUndecanoicAcid]),
                when(|p| ester_carbon(p, 11), &[M::BromoUndecanoateEster]),
                when(|p| amide_carbon(p, 11), &[M::BromoUndecanamide]),
                when(|p| ketone_carbon(p, 11), &[M::BromodecylKetone]),
            ]),
        ])],
    );

    t.add(
        "F-C-C-C-C-C-C-C-C-C-C-C=O",
        clauses![when(|p| p.env(1).fluorine == 3 && fluorinated(p, 2, 11), &[]).then(clauses![
            first_of(vec![
                when(|p| carboxyl_carbon(p, 11), &[M::PerfluoroUndecanoicAcid]),
                when(|p| oxo(p, 11), &[M::PerfluoroUndecanoyl]),
            ]),
        ])],
    );

    t.add(
        "O=C-C-C-C-C-C-C-C-C-C-C=O",
        clauses![when(|p| straight(p, 2, 11), &[]).then(clauses![
            first_of(vec![
                when(|p| both_at(p, 1, 11, carboxyl_carbon), &[M::UndecanedioicAcid]),
                when(|p| pair_at(p, 1, 11, carboxyl_carbon, ester_carbon), &[M::UndecanedioicMonoester]),
                when(|p| both_at(p, 1, 11, ester_carbon), &[M::UndecanedioicDiester]),
                when(|p| pair_at(p, 1, 11, carboxyl_carbon, amide_carbon), &[M::UndecanedioicMonoamide]),
                when(|p| both_at(p, 1, 11, amide_carbon), &[M::UndecanedioicDiamide]),
                when(|p| pair_at(p, 1, 11, ketone_carbon, carboxyl_carbon), &[M::OxoElevenAcid]),
                when(|p| pair_at(p, 1, 11, ketone_carbon, ester_carbon), &[M::OxoElevenEster]),
                when(|p| pair_at(p, 1, 11, ketone_carbon, amide_carbon), &[M::OxoElevenAmide]),
                when(|p| both_at(p, 1, 11, ketone_carbon), &[M::DiketoneEleven]),
                when(|p| pair_at(p, 1, 11, aldehyde_carbon, carboxyl_carbon), &[M::UndecanedioicSemialdehyde]),
                when(|p| both_at(p, 1, 11, aldehyde_carbon), &[M::Undecanedial]),
            ]),
        ])],
    );
}

#[cfg(test)]
mod tests {
    use crate::engine::MotifEngine;
    use crate::graph::RingType as R;
    use crate::motif::Motif as M;
    use crate::testing::smiles;

    #[test]
    fn hydroxyhexanoic_acid() {
        let ctx = smiles("OC(=O)CCCCCO", &[], &[]);
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        assert!(fp.get(M::HydroxyHexanoicAcid));
        assert!(!fp.get(M::MercaptoPentanamide));
    }

    #[test]
    fn mercaptopentanamide() {
        let ctx = smiles("NC(=O)CCCCS", &[], &[]);
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        assert!(fp.get(M::MercaptoPentanamide));
        assert!(!fp.get(M::HydroxyHexanoicAcid));
    }

    #[test]
    fn methyl_acetamidobutanoate() {
        let ctx = smiles("CC(=O)NCCCC(=O)OC", &[], &[]);
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        assert!(fp.get(M::AcylaminoButanoateEster));
        assert!(!fp.get(M::HydroxyHexanoicAcid));
    }

    #[test]
    fn hexanedial() {
        let ctx = smiles("O=CCCCCC=O", &[], &[]);
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        assert!(fp.get(M::Hexanedial));
        assert!(!fp.get(M::HydroxyHexanoicAcid));
    }

    #[test]
    fn adipic_acid() {
        let ctx = smiles("OC(=O)CCCCC(=O)O", &[], &[]);
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        assert!(fp.get(M::AdipicAcid));
        assert!(!fp.get(M::HydroxyHexanoicAcid));
    }

    #[test]
    fn perfluorobutanoic_acid() {
        let ctx = smiles("FC(F)(F)C(F)(F)C(F)(F)C(=O)O", &[], &[]);
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        assert!(fp.get(M::PerfluoroButanoicAcid));
        assert!(!fp.get(M::HydroxyHexanoicAcid));
    }

    #[test]
    fn caprolactone() {
        let ctx = smiles("O=C1CCCCCO1", &[R::Other], &[]);
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        assert!(fp.get(M::SevenMemberedLactoneRing));
        assert!(!fp.get(M::HydroxyHexanoicAcid));
    }

    #[test]
    fn levulinic_acid() {
        let ctx = smiles("CC(=O)CCC(=O)O", &[], &[]);
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        assert!(fp.get(M::OxoFourAcid));
        assert!(!fp.get(M::HydroxyHexanoicAcid));
    }

    #[test]
    fn hexanamide() {
        let ctx = smiles("CCCCCC(N)=O", &[], &[]);
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        assert!(fp.get(M::Hexanamide));
        assert!(!fp.get(M::HydroxyHexanoicAcid));
    }

    #[test]
    fn methyl_hexanoate() {
        let ctx = smiles("CCCCCC(=O)OC", &[], &[]);
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        assert!(fp.get(M::HexanoylEster));
        assert!(!fp.get(M::HydroxyHexanoicAcid));
    }

    #[test]
    fn succinimide() {
        let ctx = smiles("O=C1CCC(=O)N1", &[R::Other], &[]);
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        for motif in [M::GammaLactamRing, M::CyclicImideFive] {
            assert!(fp.get(motif), "{motif}");
        }
        assert!(!fp.get(M::HydroxyHexanoicAcid));
    }

    #[test]
    fn glutaric_anhydride() {
        let ctx = smiles("O=C1CCCC(=O)O1", &[R::Other], &[]);
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        assert!(fp.get(M::CyclicAnhydrideSix));
        assert!(!fp.get(M::HydroxyHexanoicAcid));
    }
}
