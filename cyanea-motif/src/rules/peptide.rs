//! Peptide backbones: tripeptide amide walks and side-chain walks from each residue's
//! functional atom back onto the backbone.

use super::common::*;
use super::{when, RuleTable};
use crate::graph::{RingSetType as RS, RingType as R};
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
        _ => {}
    }
}

fn three(t: &mut RuleTable) {
    t.extend(
        "N-C=O",
        clauses![when(
            |p| amide_nitrogen(p, 0) && open_run(p, 0, 3),
            &[M::TripeptidePrecedingCarbonylOxygenToAmideNitrogenWalk],
        )],
    );
}

fn four(t: &mut RuleTable) {
    t.extend(
        "N-C-C=O",
        clauses![
            when(|p| amine(p, 0) && open_run(p, 0, 4), &[M::TripeptideNTerminalAmineToPrecedingCarbonylOxygenWalk]),
            when(|p| amide_nitrogen(p, 0) && open_run(p, 0, 4), &[M::TripeptideAmideNitrogenToCarbonylOxygenWalk]),
        ],
    );

    t.extend(
        "N-C-C-N",
        clauses![
            when(|p| amine(p, 0) && open_run(p, 0, 4), &[M::TripeptideNTerminalAmineToAmideNitrogenWalk]),
            when(|p| amide_nitrogen(p, 0) && open_run(p, 0, 4), &[M::TripeptideNTerminalAmineToAmideNitrogenWalk]),
            when(
                |p| amide_nitrogen(p, 0) && open_run(p, 0, 4),
                &[M::TripeptideAmideNitrogenToFollowingAmideNitrogenWalk],
            ),
        ],
    );

    t.extend(
        "N-C-C-O",
        clauses![when(
            |p| amide_nitrogen(p, 0) && open_run(p, 0, 4),
            &[M::TripeptideFollowingAmideNitrogenToCTerminalHydroxylWalk],
        )],
    );

    t.extend(
        "N-C-C-S",
        clauses![when(|p| amide_nitrogen(p, 0) && open_run(p, 0, 4), &[M::CysteineSideChainToAmideNitrogenWalk])],
    );
}

fn five(t: &mut RuleTable) {
    t.extend(
        "O-C-C-C=O",
        clauses![when(|p| hydroxyl(p, 0) && open_run(p, 0, 5), &[M::SerineSideChainToCarbonylOxygenWalk])],
    );

    t.extend(
        "N-C-C-C-O",
        clauses![
            when(|p| amide_nitrogen(p, 0) && open_run(p, 0, 5), &[M::SerineSideChainToFollowingAmideNitrogenWalk]),
        ],
    );

    t.extend("O=C-C-C-S", clauses![when(|p| open_run(p, 0, 5), &[M::CysteineSideChainToCarbonylOxygenWalk])]);

    t.extend(
        "N-C-C-C-S",
        clauses![
            when(|p| amide_nitrogen(p, 0) && open_run(p, 0, 5), &[M::CysteineSideChainToFollowingAmideNitrogenWalk]),
        ],
    );

    t.extend(
        "N-C-C-C-N",
        clauses![when(|p| amide_nitrogen(p, 0) && open_run(p, 0, 5), &[M::AsparagineSideChainToAmideNitrogenWalk])],
    );

    t.extend(
        "N-C-C-C:N",
        clauses![when(
            |p| amide_nitrogen(p, 0) && open_run(p, 0, 3) && ring_run(p, 3, 5, R::Imidazole),
            &[M::HistidineSideChainToAmideNitrogenWalk],
        )],
    );
}

fn six(t: &mut RuleTable) {
    t.add(
        "O=C-C-N-C=O",
        clauses![when(|p| open_run(p, 0, 6), &[M::TripeptidePrecedingCarbonylOxygenToCarbonylOxygenWalk])],
    );

    t.add(
        "N-C-C-N-C=O",
        clauses![when(
            |p| amide_nitrogen(p, 0) && open_run(p, 0, 6),
            &[M::TripeptidePrecedingCarbonylOxygenToFollowingAmideNitrogenWalk],
        )],
    );

    t.extend(
        "O-C-C-N-C=O",
        clauses![
            when(|p| hydroxyl(p, 0) && open_run(p, 0, 6), &[M::TripeptideCarbonylOxygenToCTerminalHydroxylWalk]),
        ],
    );

    t.extend(
        "O=C-N-C-C-S",
        clauses![when(|p| open_run(p, 0, 6), &[M::CysteineSideChainToPrecedingCarbonylOxygenWalk])],
    );

    t.extend("O=C-C-C-C-S", clauses![when(|p| open_run(p, 0, 6), &[M::MethionineSideChainToCarbonylOxygenWalk])]);

    t.extend(
        "N-C-C-C-C-S",
        clauses![
            when(
                |p| amide_nitrogen(p, 0) && open_run(p, 0, 6),
                &[M::MethionineSideChainToFollowingAmideNitrogenWalk],
            ),
        ],
    );

    t.extend(
        "O-C-C-C-C=O",
        clauses![when(|p| hydroxyl(p, 0) && open_run(p, 0, 6), &[M::AspartateSideChainToCarbonylOxygenWalk])],
    );

    t.extend(
        "N-C-C-C-C-O",
        clauses![
            when(|p| amide_nitrogen(p, 0) && open_run(p, 0, 6), &[M::AspartateSideChainToFollowingAmideNitrogenWalk]),
        ],
    );

    t.extend(
        "N-C-C-C-C=O",
        clauses![when(|p| amide_nitrogen(p, 0) && open_run(p, 0, 6), &[M::AsparagineSideChainToCarbonylOxygenWalk])],
    );

    t.extend(
        "N-C-C-C-C-N",
        clauses![
            when(
                |p| amide_nitrogen(p, 0) && open_run(p, 0, 6),
                &[M::AsparagineSideChainToFollowingAmideNitrogenWalk],
            ),
            when(|p| open_run(p, 0, 6), &[M::ArginineSideChainToAmideNitrogenWalk]),
            when(|p| amide_nitrogen(p, 0) && open_run(p, 0, 6), &[M::ArginineSideChainToAmideNitrogenWalk]),
        ],
    );

    t.add(
        "N:C-C-C-C=O",
        clauses![
            when(
                |p| ring_run(p, 0, 2, R::Imidazole) && open_run(p, 2, 6),
                &[M::HistidineSideChainToCarbonylOxygenWalk],
            ),
        ],
    );

    t.extend(
        "N-C-C-C-C:N",
        clauses![when(
            |p| amide_nitrogen(p, 0) && open_run(p, 0, 4) && ring_run(p, 4, 6, R::Imidazole),
            &[M::HistidineSideChainToFollowingAmideNitrogenWalk],
        )],
    );

    t.extend(
        "N-C-C-C:C:N",
        clauses![when(
            |p| amide_nitrogen(p, 0) && open_run(p, 0, 3) && fused_run(p, 3, 6, RS::Indole, R::Pyrrole),
            &[M::TryptophanSideChainToAmideNitrogenWalk],
        )],
    );
}

fn seven(t: &mut RuleTable) {
    t.extend(
        "N-C-C-N-C-C=O",
        clauses![when(|p| amine(p, 0) && open_run(p, 0, 7), &[M::TripeptideNTerminalAmineToCarbonylOxygenWalk])],
    );

    t.extend(
        "N-C-C-N-C-C-N",
        clauses![
            when(|p| amine(p, 0) && open_run(p, 0, 7), &[M::TripeptideNTerminalAmineToFollowingAmideNitrogenWalk]),
            when(
                |p| amide_nitrogen(p, 0) && open_run(p, 0, 7),
                &[M::TripeptideNTerminalAmineToFollowingAmideNitrogenWalk],
            ),
        ],
    );

    t.extend(
        "N-C-C-N-C-C-O",
        clauses![
            when(|p| amide_nitrogen(p, 0) && open_run(p, 0, 7), &[M::TripeptideAmideNitrogenToCTerminalHydroxylWalk]),
            when(|p| amine(p, 0) && open_run(p, 0, 7), &[M::SerineSideChainToNTerminalAmineWalk]),
        ],
    );

    t.extend(
        "N-C-C-N-C-C-S",
        clauses![when(|p| amine(p, 0) && open_run(p, 0, 7), &[M::CysteineSideChainToNTerminalAmineWalk])],
    );

    t.add(
        "O=C-N-C-C-C-S",
        clauses![when(|p| open_run(p, 0, 7), &[M::MethionineSideChainToPrecedingCarbonylOxygenWalk])],
    );

    t.extend(
        "O-C-C-C-N-C=O",
        clauses![
            when(|p| hydroxyl(p, 0) && open_run(p, 0, 7), &[M::AspartateSideChainToPrecedingCarbonylOxygenWalk]),
        ],
    );

    t.extend(
        "O-C-C-C-C-C=O",
        clauses![when(|p| hydroxyl(p, 0) && open_run(p, 0, 7), &[M::GlutamateSideChainToCarbonylOxygenWalk])],
    );

    t.extend(
        "N-C-C-C-C-C-O",
        clauses![
            when(|p| amide_nitrogen(p, 0) && open_run(p, 0, 7), &[M::GlutamateSideChainToFollowingAmideNitrogenWalk]),
        ],
    );

    t.extend(
        "N-C-C-C-N-C=O",
        clauses![
            when(
                |p| amide_nitrogen(p, 0) && open_run(p, 0, 7),
                &[M::AsparagineSideChainToPrecedingCarbonylOxygenWalk],
            ),
        ],
    );

    t.extend(
        "N-C-C-C-C-C=O",
        clauses![
            when(|p| amide_nitrogen(p, 0) && open_run(p, 0, 7), &[M::GlutamineSideChainToCarbonylOxygenWalk]),
            when(|p| open_run(p, 0, 7), &[M::ArginineSideChainToCarbonylOxygenWalk]),
        ],
    );

    t.extend(
        "N-C-C-C-C-C-N",
        clauses![
            when(|p| amide_nitrogen(p, 0) && open_run(p, 0, 7), &[M::GlutamineSideChainToFollowingAmideNitrogenWalk]),
            when(|p| amine(p, 0) && open_run(p, 0, 7), &[M::LysineSideChainToAmideNitrogenWalk]),
            when(|p| amide_nitrogen(p, 0) && open_run(p, 0, 7), &[M::LysineSideChainToAmideNitrogenWalk]),
            when(|p| open_run(p, 0, 7), &[M::ArginineSideChainToFollowingAmideNitrogenWalk]),
            when(|p| amide_nitrogen(p, 0) && open_run(p, 0, 7), &[M::ArginineSideChainToFollowingAmideNitrogenWalk]),
        ],
    );

    t.add(
        "N:C-C-C-N-C=O",
        clauses![when(
            |p| ring_run(p, 0, 2, R::Imidazole) && open_run(p, 2, 7),
            &[M::HistidineSideChainToPrecedingCarbonylOxygenWalk],
        )],
    );

    t.add(
        "N:C:C-C-C-C=O",
        clauses![when(
            |p| fused_run(p, 0, 3, RS::Indole, R::Pyrrole) && open_run(p, 3, 7),
            &[M::TryptophanSideChainToCarbonylOxygenWalk],
        )],
    );

    t.extend(
        "N-C-C-C-C:C:N",
        clauses![when(
            |p| amide_nitrogen(p, 0) && open_run(p, 0, 4) && fused_run(p, 4, 7, RS::Indole, R::Pyrrole),
            &[M::TryptophanSideChainToFollowingAmideNitrogenWalk],
        )],
    );
}

fn eight(t: &mut RuleTable) {
    t.add(
        "O-C-C-C-N-C-C-O",
        clauses![when(|p| hydroxyl(p, 0) && open_run(p, 0, 8), &[M::SerineSideChainToCTerminalHydroxylWalk])],
    );

    t.add(
        "O-C-C-N-C-C-C-S",
        clauses![when(|p| hydroxyl(p, 0) && open_run(p, 0, 8), &[M::CysteineSideChainToCTerminalHydroxylWalk])],
    );

    t.add(
        "N-C-C-N-C-C-C-S",
        clauses![when(|p| amine(p, 0) && open_run(p, 0, 8), &[M::MethionineSideChainToNTerminalAmineWalk])],
    );

    t.add(
        "N-C-C-N-C-C-C-O",
        clauses![when(|p| amine(p, 0) && open_run(p, 0, 8), &[M::AspartateSideChainToNTerminalAmineWalk])],
    );

    t.add(
        "O-C-C-C-C-N-C=O",
        clauses![
            when(|p| hydroxyl(p, 0) && open_run(p, 0, 8), &[M::GlutamateSideChainToPrecedingCarbonylOxygenWalk]),
        ],
    );

    t.add(
        "N-C-C-C-N-C-C-N",
        clauses![when(|p| amide_nitrogen(p, 0) && open_run(p, 0, 8), &[M::AsparagineSideChainToNTerminalAmineWalk])],
    );

    t.add(
        "N-C-C-C-C-N-C=O",
        clauses![
            when(
                |p| amide_nitrogen(p, 0) && open_run(p, 0, 8),
                &[M::GlutamineSideChainToPrecedingCarbonylOxygenWalk],
            ),
            when(|p| open_run(p, 0, 8), &[M::ArginineSideChainToPrecedingCarbonylOxygenWalk]),
        ],
    );

    t.extend(
        "N-C-C-C-C-C-C=O",
        clauses![when(|p| amine(p, 0) && open_run(p, 0, 8), &[M::LysineSideChainToCarbonylOxygenWalk])],
    );

    t.extend(
        "N-C-C-C-C-C-C-N",
        clauses![
            when(|p| amine(p, 0) && open_run(p, 0, 8), &[M::LysineSideChainToFollowingAmideNitrogenWalk]),
            when(|p| amide_nitrogen(p, 0) && open_run(p, 0, 8), &[M::LysineSideChainToFollowingAmideNitrogenWalk]),
        ],
    );

    t.add(
        "N-C-C-N-C-C-C:N",
        clauses![when(
            |p| amine(p, 0) && open_run(p, 0, 6) && ring_run(p, 6, 8, R::Imidazole),
            &[M::HistidineSideChainToNTerminalAmineWalk],
        )],
    );

    t.extend(
        "N-C-C-C:C:C:C-O",
        clauses![when(
            |p| {
                amide_nitrogen(p, 0)
                    && open_run(p, 0, 3)
                    && ring_run(p, 3, 7, R::Benzene)
                    && hydroxyl(p, 7)
                    && !p.in_ring(7)
            },
            &[M::TyrosineSideChainToAmideNitrogenWalk],
        )],
    );

    t.add(
        "N:C:C-C-C-N-C=O",
        clauses![when(
            |p| fused_run(p, 0, 3, RS::Indole, R::Pyrrole) && open_run(p, 3, 8),
            &[M::TryptophanSideChainToPrecedingCarbonylOxygenWalk],
        )],
    );
}

fn nine(t: &mut RuleTable) {
    t.add(
        "O-C-C-N-C-C-N-C=O",
        clauses![
            when(
                |p| hydroxyl(p, 0) && open_run(p, 0, 9),
                &[M::TripeptidePrecedingCarbonylOxygenToCTerminalHydroxylWalk],
            ),
        ],
    );

    t.add(
        "O-C-C-N-C-C-C-C-S",
        clauses![when(|p| hydroxyl(p, 0) && open_run(p, 0, 9), &[M::MethionineSideChainToCTerminalHydroxylWalk])],
    );

    t.add(
        "O-C-C-C-C-N-C-C-O",
        clauses![when(|p| hydroxyl(p, 0) && open_run(p, 0, 9), &[M::AspartateSideChainToCTerminalHydroxylWalk])],
    );

    t.add(
        "N-C-C-N-C-C-C-C-O",
        clauses![when(|p| amine(p, 0) && open_run(p, 0, 9), &[M::GlutamateSideChainToNTerminalAmineWalk])],
    );

    t.add(
        "N-C-C-C-C-N-C-C-O",
        clauses![
            when(|p| amide_nitrogen(p, 0) && open_run(p, 0, 9), &[M::AsparagineSideChainToCTerminalHydroxylWalk]),
        ],
    );

    t.add(
        "N-C-C-C-C-N-C-C-N",
        clauses![
            when(|p| amide_nitrogen(p, 0) && open_run(p, 0, 9), &[M::GlutamineSideChainToNTerminalAmineWalk]),
            when(|p| open_run(p, 0, 9), &[M::ArginineSideChainToNTerminalAmineWalk]),
        ],
    );

    t.add(
        "N-C-C-C-C-C-N-C=O",
        clauses![when(|p| amine(p, 0) && open_run(p, 0, 9), &[M::LysineSideChainToPrecedingCarbonylOxygenWalk])],
    );

    t.add(
        "N:C-C-C-C-N-C-C-O",
        clauses![when(
            |p| ring_run(p, 0, 2, R::Imidazole) && open_run(p, 2, 9),
            &[M::HistidineSideChainToCTerminalHydroxylWalk],
        )],
    );

    t.extend(
        "O-C:C:C:C-C-C-C=O",
        clauses![when(
            |p| hydroxyl(p, 0) && !p.in_ring(0) && ring_run(p, 1, 5, R::Benzene) && open_run(p, 5, 9),
            &[M::TyrosineSideChainToCarbonylOxygenWalk],
        )],
    );

    t.add(
        "N-C-C-C-C:C:C:C-O",
        clauses![when(
            |p| {
                amide_nitrogen(p, 0)
                    && open_run(p, 0, 4)
                    && ring_run(p, 4, 8, R::Benzene)
                    && hydroxyl(p, 8)
                    && !p.in_ring(8)
            },
            &[M::TyrosineSideChainToFollowingAmideNitrogenWalk],
        )],
    );

    t.add(
        "N-C-C-N-C-C-C:C:N",
        clauses![when(
            |p| amine(p, 0) && open_run(p, 0, 6) && fused_run(p, 6, 9, RS::Indole, R::Pyrrole),
            &[M::TryptophanSideChainToNTerminalAmineWalk],
        )],
    );
}

fn ten(t: &mut RuleTable) {
    t.extend(
        "N-C-C-N-C-C-N-C-C-O",
        clauses![when(|p| amine(p, 0) && open_run(p, 0, 10), &[M::TripeptideNTerminalAmineToCTerminalHydroxylWalk])],
    );

    t.add(
        "O-C-C-C-C-C-N-C-C-O",
        clauses![when(|p| hydroxyl(p, 0) && open_run(p, 0, 10), &[M::GlutamateSideChainToCTerminalHydroxylWalk])],
    );

    t.add(
        "N-C-C-C-C-C-N-C-C-O",
        clauses![
            when(|p| amide_nitrogen(p, 0) && open_run(p, 0, 10), &[M::GlutamineSideChainToCTerminalHydroxylWalk]),
            when(|p| open_run(p, 0, 10), &[M::ArginineSideChainToCTerminalHydroxylWalk]),
        ],
    );

    t.add(
        "N-C-C-C-C-C-N-C-C-N",
        clauses![when(|p| amine(p, 0) && open_run(p, 0, 10), &[M::LysineSideChainToNTerminalAmineWalk])],
    );

    t.add(
        "O-C:C:C:C-C-C-N-C=O",
        clauses![when(
            |p| hydroxyl(p, 0) && !p.in_ring(0) && ring_run(p, 1, 5, R::Benzene) && open_run(p, 5, 10),
            &[M::TyrosineSideChainToPrecedingCarbonylOxygenWalk],
        )],
    );

    t.add(
        "N:C:C-C-C-C-N-C-C-O",
        clauses![when(
            |p| fused_run(p, 0, 3, RS::Indole, R::Pyrrole) && open_run(p, 3, 10),
            &[M::TryptophanSideChainToCTerminalHydroxylWalk],
        )],
    );
}

fn eleven(t: &mut RuleTable) {
    t.add(
        "N-C-C-C-C-C-C-N-C-C-O",
        clauses![when(|p| amine(p, 0) && open_run(p, 0, 11), &[M::LysineSideChainToCTerminalHydroxylWalk])],
    );

    t.add(
        "N-C-C-N-C-C-C:C:C:C-O",
        clauses![when(
            |p| {
                amine(p, 0)
                    && open_run(p, 0, 6)
                    && ring_run(p, 6, 10, R::Benzene)
                    && hydroxyl(p, 10)
                    && !p.in_ring(10)
            },
            &[M::TyrosineSideChainToNTerminalAmineWalk],
        )],
    );
}

fn twelve(t: &mut RuleTable) {
    t.add(
        "O-C-C-N-C-C-C-C:C:C:C-O",
        clauses![when(
            |p| {
                hydroxyl(p, 0)
                    && open_run(p, 0, 7)
                    && ring_run(p, 7, 11, R::Benzene)
                    && hydroxyl(p, 11)
                    && !p.in_ring(11)
            },
            &[M::TyrosineSideChainToCTerminalHydroxylWalk],
        )],
    );
}

#[cfg(test)]
mod tests {
    use crate::engine::MotifEngine;
    use crate::graph::{RingSetType as RS, RingType as R};
    use crate::motif::Motif as M;
    use crate::testing::smiles;

    #[test]
    fn glycine_tripeptide() {
        let ctx = smiles("[NH2]CC(=[O])[NH]CC(=[O])[NH]CC(=O)[OH]", &[], &[]);
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        for motif in [
            M::TripeptideNTerminalAmineToPrecedingCarbonylOxygenWalk,
            M::TripeptideNTerminalAmineToAmideNitrogenWalk,
            M::TripeptideNTerminalAmineToCarbonylOxygenWalk,
            M::TripeptidePrecedingCarbonylOxygenToAmideNitrogenWalk,
            M::TripeptidePrecedingCarbonylOxygenToFollowingAmideNitrogenWalk,
            M::TripeptideAmideNitrogenToCTerminalHydroxylWalk,
        ] {
            assert!(fp.get(motif), "{motif}");
        }
        assert!(!fp.get(M::SerineSideChainToNTerminalAmineWalk));
    }

    #[test]
    fn serine() {
        let ctx = smiles("[NH2]CC(=[O])[NH][CH](C[OH])C(=[O])[NH]CC(=O)[OH]", &[], &[]);
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        for motif in [
            M::TripeptideNTerminalAmineToPrecedingCarbonylOxygenWalk,
            M::TripeptideAmideNitrogenToFollowingAmideNitrogenWalk,
            M::TripeptideNTerminalAmineToCTerminalHydroxylWalk,
            M::TripeptidePrecedingCarbonylOxygenToFollowingAmideNitrogenWalk,
            M::SerineSideChainToNTerminalAmineWalk,
            M::SerineSideChainToCarbonylOxygenWalk,
        ] {
            assert!(fp.get(motif), "{motif}");
        }
        assert!(!fp.get(M::CysteineSideChainToNTerminalAmineWalk));
    }

    #[test]
    fn threonine() {
        let ctx = smiles("[NH2]CC(=[O])[NH][CH]([CH](C)[OH])C(=[O])[NH]CC(=O)[OH]", &[], &[]);
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        for motif in [
            M::TripeptideNTerminalAmineToPrecedingCarbonylOxygenWalk,
            M::TripeptideAmideNitrogenToFollowingAmideNitrogenWalk,
            M::TripeptideNTerminalAmineToCTerminalHydroxylWalk,
            M::TripeptidePrecedingCarbonylOxygenToFollowingAmideNitrogenWalk,
            M::SerineSideChainToNTerminalAmineWalk,
            M::SerineSideChainToCarbonylOxygenWalk,
        ] {
            assert!(fp.get(motif), "{motif}");
        }
        assert!(!fp.get(M::CysteineSideChainToNTerminalAmineWalk));
    }

    #[test]
    fn cysteine() {
        let ctx = smiles("[NH2]CC(=[O])[NH][CH](C[SH])C(=[O])[NH]CC(=O)[OH]", &[], &[]);
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        for motif in [
            M::TripeptideNTerminalAmineToPrecedingCarbonylOxygenWalk,
            M::TripeptideAmideNitrogenToFollowingAmideNitrogenWalk,
            M::TripeptideNTerminalAmineToCTerminalHydroxylWalk,
            M::TripeptidePrecedingCarbonylOxygenToCTerminalHydroxylWalk,
            M::TripeptideFollowingAmideNitrogenToCTerminalHydroxylWalk,
            M::CysteineSideChainToAmideNitrogenWalk,
        ] {
            assert!(fp.get(motif), "{motif}");
        }
        assert!(!fp.get(M::SerineSideChainToNTerminalAmineWalk));
    }

    #[test]
    fn methionine() {
        let ctx = smiles("[NH2]CC(=[O])[NH][CH](CC[S]C)C(=[O])[NH]CC(=O)[OH]", &[], &[]);
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        for motif in [
            M::TripeptideNTerminalAmineToPrecedingCarbonylOxygenWalk,
            M::TripeptideAmideNitrogenToFollowingAmideNitrogenWalk,
            M::TripeptideNTerminalAmineToCTerminalHydroxylWalk,
            M::TripeptidePrecedingCarbonylOxygenToCTerminalHydroxylWalk,
            M::TripeptideFollowingAmideNitrogenToCTerminalHydroxylWalk,
            M::MethionineSideChainToPrecedingCarbonylOxygenWalk,
        ] {
            assert!(fp.get(motif), "{motif}");
        }
        assert!(!fp.get(M::SerineSideChainToNTerminalAmineWalk));
    }

    #[test]
    fn aspartate() {
        let ctx = smiles("[NH2]CC(=[O])[NH][CH](CC(=O)[OH])C(=[O])[NH]CC(=O)[OH]", &[], &[]);
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        for motif in [
            M::TripeptideNTerminalAmineToPrecedingCarbonylOxygenWalk,
            M::TripeptideAmideNitrogenToFollowingAmideNitrogenWalk,
            M::TripeptidePrecedingCarbonylOxygenToAmideNitrogenWalk,
            M::TripeptidePrecedingCarbonylOxygenToCTerminalHydroxylWalk,
            M::SerineSideChainToFollowingAmideNitrogenWalk,
            M::AspartateSideChainToCarbonylOxygenWalk,
        ] {
            assert!(fp.get(motif), "{motif}");
        }
        assert!(!fp.get(M::SerineSideChainToNTerminalAmineWalk));
    }

    #[test]
    fn glutamate() {
        let ctx = smiles("[NH2]CC(=[O])[NH][CH](CCC(=O)[OH])C(=[O])[NH]CC(=O)[OH]", &[], &[]);
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        for motif in [
            M::TripeptideNTerminalAmineToPrecedingCarbonylOxygenWalk,
            M::TripeptideAmideNitrogenToFollowingAmideNitrogenWalk,
            M::TripeptidePrecedingCarbonylOxygenToAmideNitrogenWalk,
            M::TripeptideAmideNitrogenToCTerminalHydroxylWalk,
            M::GlutamateSideChainToNTerminalAmineWalk,
            M::GlutamateSideChainToCTerminalHydroxylWalk,
        ] {
            assert!(fp.get(motif), "{motif}");
        }
        assert!(!fp.get(M::SerineSideChainToNTerminalAmineWalk));
    }

    #[test]
    fn asparagine() {
        let ctx = smiles("[NH2]CC(=[O])[NH][CH](CC(=O)[NH2])C(=[O])[NH]CC(=O)[OH]", &[], &[]);
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        for motif in [
            M::TripeptideNTerminalAmineToPrecedingCarbonylOxygenWalk,
            M::TripeptideAmideNitrogenToFollowingAmideNitrogenWalk,
            M::TripeptidePrecedingCarbonylOxygenToAmideNitrogenWalk,
            M::TripeptidePrecedingCarbonylOxygenToCTerminalHydroxylWalk,
            M::AsparagineSideChainToNTerminalAmineWalk,
            M::AsparagineSideChainToCarbonylOxygenWalk,
        ] {
            assert!(fp.get(motif), "{motif}");
        }
        assert!(!fp.get(M::SerineSideChainToNTerminalAmineWalk));
    }

    #[test]
    fn glutamine() {
        let ctx = smiles("[NH2]CC(=[O])[NH][CH](CCC(=O)[NH2])C(=[O])[NH]CC(=O)[OH]", &[], &[]);
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        for motif in [
            M::TripeptideNTerminalAmineToPrecedingCarbonylOxygenWalk,
            M::TripeptideNTerminalAmineToCarbonylOxygenWalk,
            M::TripeptidePrecedingCarbonylOxygenToFollowingAmideNitrogenWalk,
            M::AsparagineSideChainToCarbonylOxygenWalk,
            M::ArginineSideChainToNTerminalAmineWalk,
            M::GlutamineSideChainToFollowingAmideNitrogenWalk,
        ] {
            assert!(fp.get(motif), "{motif}");
        }
        assert!(!fp.get(M::SerineSideChainToNTerminalAmineWalk));
    }

    #[test]
    fn lysine() {
        let ctx = smiles("[NH2]CC(=[O])[NH][CH](CCCC[NH2])C(=[O])[NH]CC(=O)[OH]", &[], &[]);
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        for motif in [
            M::TripeptideNTerminalAmineToPrecedingCarbonylOxygenWalk,
            M::TripeptideAmideNitrogenToFollowingAmideNitrogenWalk,
            M::TripeptidePrecedingCarbonylOxygenToAmideNitrogenWalk,
            M::TripeptideAmideNitrogenToCTerminalHydroxylWalk,
            M::GlutamineSideChainToFollowingAmideNitrogenWalk,
            M::LysineSideChainToPrecedingCarbonylOxygenWalk,
        ] {
            assert!(fp.get(motif), "{motif}");
        }
        assert!(!fp.get(M::SerineSideChainToNTerminalAmineWalk));
    }

    #[test]
    fn arginine() {
        let ctx = smiles("[NH2]CC(=[O])[NH][CH](CCC[NH]C(=N)N)C(=[O])[NH]CC(=O)[OH]", &[], &[]);
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        for motif in [
            M::TripeptideNTerminalAmineToPrecedingCarbonylOxygenWalk,
            M::TripeptideAmideNitrogenToFollowingAmideNitrogenWalk,
            M::TripeptidePrecedingCarbonylOxygenToAmideNitrogenWalk,
            M::TripeptideAmideNitrogenToCTerminalHydroxylWalk,
            M::AsparagineSideChainToFollowingAmideNitrogenWalk,
            M::ArginineSideChainToCarbonylOxygenWalk,
        ] {
            assert!(fp.get(motif), "{motif}");
        }
        assert!(!fp.get(M::SerineSideChainToNTerminalAmineWalk));
    }

    #[test]
    fn histidine() {
        let ctx = smiles("[NH2]CC(=[O])[NH][CH](Cc1c[nH]c[n]1)C(=[O])[NH]CC(=O)[OH]", &[R::Imidazole], &[]);
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        for motif in [
            M::TripeptideNTerminalAmineToPrecedingCarbonylOxygenWalk,
            M::TripeptideAmideNitrogenToFollowingAmideNitrogenWalk,
            M::TripeptideNTerminalAmineToCTerminalHydroxylWalk,
            M::TripeptidePrecedingCarbonylOxygenToCTerminalHydroxylWalk,
            M::TripeptideFollowingAmideNitrogenToCTerminalHydroxylWalk,
            M::HistidineSideChainToAmideNitrogenWalk,
        ] {
            assert!(fp.get(motif), "{motif}");
        }
        assert!(!fp.get(M::SerineSideChainToNTerminalAmineWalk));
    }

    #[test]
    fn tyrosine() {
        let ctx = smiles("[NH2]CC(=[O])[NH][CH](Cc1ccc([OH])cc1)C(=[O])[NH]CC(=O)[OH]", &[R::Benzene], &[]);
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        for motif in [
            M::TripeptideNTerminalAmineToPrecedingCarbonylOxygenWalk,
            M::TripeptideAmideNitrogenToFollowingAmideNitrogenWalk,
            M::TripeptideNTerminalAmineToCTerminalHydroxylWalk,
            M::TripeptidePrecedingCarbonylOxygenToCTerminalHydroxylWalk,
            M::TripeptideFollowingAmideNitrogenToCTerminalHydroxylWalk,
            M::TyrosineSideChainToAmideNitrogenWalk,
        ] {
            assert!(fp.get(motif), "{motif}");
        }
        assert!(!fp.get(M::SerineSideChainToNTerminalAmineWalk));
    }

    #[test]
    fn tryptophan() {
        let ctx = smiles(
            "[NH2]CC(=[O])[NH][CH](Cc1c[nH]c2ccccc21)C(=[O])[NH]CC(=O)[OH]",
            &[R::Benzene, R::Pyrrole],
            &[(RS::Indole, &[0, 1])],
        );
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        for motif in [
            M::TripeptideNTerminalAmineToPrecedingCarbonylOxygenWalk,
            M::TripeptideAmideNitrogenToFollowingAmideNitrogenWalk,
            M::TripeptideNTerminalAmineToCTerminalHydroxylWalk,
            M::TripeptidePrecedingCarbonylOxygenToCTerminalHydroxylWalk,
            M::TripeptideFollowingAmideNitrogenToCTerminalHydroxylWalk,
            M::TryptophanSideChainToAmideNitrogenWalk,
        ] {
            assert!(fp.get(motif), "{motif}");
        }
        assert!(!fp.get(M::SerineSideChainToNTerminalAmineWalk));
    }
}
