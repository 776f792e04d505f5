//! Walks across alkaloid ringsets: isoquinoline, quinoline, indole, tropane,
//! quinolizidine, pyrrolizidine and purine skeletons with their usual substituents.

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
        11 => eleven(t),
        12 => twelve(t),
        _ => {}
    }
}

fn three(t: &mut RuleTable) {
    t.extend(
        "C-C:N",
        clauses![when(
            |p| methyl(p, 0) && !p.in_ring(0) && fused_run(p, 1, 3, RS::Quinoline, R::Pyridine),
            &[M::OneNitrogenousQuinolineTwoMethylWalk],
        )],
    );
}

fn four(t: &mut RuleTable) {
    t.extend(
        "O-C:C-O",
        clauses![
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && fused_run(p, 1, 3, RS::Tetrahydroisoquinoline, R::Benzene)
                        && hydroxyl(p, 3)
                        && !p.in_ring(3)
                },
                &[M::SixSevenDioxygenatedTetrahydroisoquinoline],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && fused_run(p, 1, 3, RS::Quinoline, R::Benzene)
                        && hydroxyl(p, 3)
                        && !p.in_ring(3)
                },
                &[M::FiveSixOrSixSevenOrSevenEightDioxygenatedQuinoline],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && fused_run(p, 1, 3, RS::Indole, R::Benzene)
                        && hydroxyl(p, 3)
                        && !p.in_ring(3)
                },
                &[M::FourFiveOrFiveSixOrSixSevenDioxygenatedTryptamine],
            ),
        ],
    );

    t.extend(
        "N:C:C-O",
        clauses![
            when(
                |p| {
                    fused_run(p, 0, 2, RS::Quinoline, R::Pyridine)
                        && fused_run(p, 2, 3, RS::Quinoline, R::Benzene)
                        && hydroxyl(p, 3)
                        && !p.in_ring(3)
                },
                &[M::EightOxygenatedQuinolineOneNitrogenWalk],
            ),
            when(
                |p| {
                    fused_run(p, 0, 2, RS::Indole, R::Pyrrole)
                        && fused_run(p, 2, 3, RS::Indole, R::Benzene)
                        && hydroxyl(p, 3)
                        && !p.in_ring(3)
                },
                &[M::SevenOxygenatedTryptamineOneNitrogenWalk],
            ),
        ],
    );

    t.extend(
        "C-C-C-O",
        clauses![when(
            |p| {
                carbonyl_carbon(p, 0)
                    && !p.in_ring(0)
                    && ringset_run(p, 1, 3, RS::Tropane)
                    && ester_oxygen(p, 3)
                    && !p.in_ring(3)
            },
            &[M::ThreeOxygenatedTropaneEsterTwoSideChainWalk],
        )],
    );

    t.extend(
        "N-C-C-O",
        clauses![when(
            |p| ringset_run(p, 0, 3, RS::Pyrrolizidine) && hydroxyl(p, 3) && !p.in_ring(3),
            &[M::SevenOxygenatedPyrrolizidineFourNitrogenWalk],
        )],
    );

    t.extend(
        "C-N-C=O",
        clauses![when(
            |p| methyl(p, 0) && !p.in_ring(0) && ringset_run(p, 1, 3, RS::Purine) && !p.in_ring(3),
            &[M::TwoOrSixOxygenatedXanthineOneMethylWalk],
        )],
    );
}

fn five(t: &mut RuleTable) {
    t.extend(
        "O-C:C:C-O",
        clauses![
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && fused_run(p, 1, 3, RS::Quinoline, R::Pyridine)
                        && fused_run(p, 3, 4, RS::Quinoline, R::Benzene)
                        && hydroxyl(p, 4)
                        && !p.in_ring(4)
                },
                &[M::FourFiveDioxygenatedQuinoline],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && fused_run(p, 1, 3, RS::Quinoline, R::Benzene)
                        && fused_run(p, 3, 4, RS::Quinoline, R::Pyridine)
                        && hydroxyl(p, 4)
                        && !p.in_ring(4)
                },
                &[M::FourFiveDioxygenatedQuinoline],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && fused_run(p, 1, 4, RS::Quinoline, R::Benzene)
                        && hydroxyl(p, 4)
                        && !p.in_ring(4)
                },
                &[M::FiveSevenOrSixEightDioxygenatedQuinoline],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && fused_run(p, 1, 4, RS::Indole, R::Benzene)
                        && hydroxyl(p, 4)
                        && !p.in_ring(4)
                },
                &[M::FourSixOrFiveSevenDioxygenatedTryptamine],
            ),
        ],
    );

    t.extend(
        "N:C:C:C-O",
        clauses![
            when(
                |p| fused_run(p, 0, 4, RS::Quinoline, R::Pyridine) && hydroxyl(p, 4) && !p.in_ring(4),
                &[M::FourOxygenatedQuinolineOneNitrogenWalk],
            ),
            when(
                |p| {
                    fused_run(p, 0, 3, RS::Quinoline, R::Pyridine)
                        && fused_run(p, 3, 4, RS::Quinoline, R::Benzene)
                        && hydroxyl(p, 4)
                        && !p.in_ring(4)
                },
                &[M::FiveOxygenatedQuinolineOneNitrogenWalk],
            ),
            when(
                |p| {
                    fused_run(p, 0, 2, RS::Quinoline, R::Pyridine)
                        && fused_run(p, 2, 4, RS::Quinoline, R::Benzene)
                        && hydroxyl(p, 4)
                        && !p.in_ring(4)
                },
                &[M::SevenOxygenatedQuinolineOneNitrogenWalk],
            ),
            when(
                |p| {
                    fused_run(p, 0, 3, RS::Indole, R::Pyrrole)
                        && fused_run(p, 3, 4, RS::Indole, R::Benzene)
                        && hydroxyl(p, 4)
                        && !p.in_ring(4)
                },
                &[M::FourOxygenatedTryptamineOneNitrogenWalk],
            ),
            when(
                |p| {
                    fused_run(p, 0, 2, RS::Indole, R::Pyrrole)
                        && fused_run(p, 2, 4, RS::Indole, R::Benzene)
                        && hydroxyl(p, 4)
                        && !p.in_ring(4)
                },
                &[M::SixOxygenatedTryptamineOneNitrogenWalk],
            ),
        ],
    );

    t.extend(
        "C-C:C:C-O",
        clauses![when(
            |p| {
                methyl(p, 0)
                    && !p.in_ring(0)
                    && fused_run(p, 1, 4, RS::Quinoline, R::Pyridine)
                    && hydroxyl(p, 4)
                    && !p.in_ring(4)
            },
            &[M::FourOxygenatedQuinolineTwoMethylWalk],
        )],
    );

    t.add(
        "C-C-C-N-C",
        clauses![when(
            |p| {
                carbonyl_carbon(p, 0)
                    && !p.in_ring(0)
                    && ringset_run(p, 1, 4, RS::Tropane)
                    && methyl(p, 4)
                    && !p.in_ring(4)
            },
            &[M::NMethylTropaneEsterTwoSideChainWalk],
        )],
    );

    t.extend(
        "N-C-C-C-O",
        clauses![
            when(
                |p| ringset_run(p, 0, 3, RS::Quinolizidine) && open_run(p, 3, 5),
                &[M::ElevenOxygenatedQuinolizidineFiveNitrogenWalk],
            ),
            when(
                |p| ringset_run(p, 0, 3, RS::Pyrrolizidine) && open_run(p, 3, 5),
                &[M::NineOxygenatedPyrrolizidineFourNitrogenWalk],
            ),
        ],
    );

    t.add(
        "O=C-N-C=O",
        clauses![when(
            |p| !p.in_ring(0) && ringset_run(p, 1, 4, RS::Purine) && !p.in_ring(4),
            &[M::TwoSixDioxygenatedXanthine],
        )],
    );

    t.add(
        "C-N:C-C=O",
        clauses![when(
            |p| methyl(p, 0) && !p.in_ring(0) && ringset_run(p, 1, 4, RS::Purine) && !p.in_ring(4),
            &[M::SixOxygenatedXanthineSevenMethylWalk],
        )],
    );

    t.add(
        "C-N-C-N-C",
        clauses![when(
            |p| methyl(p, 0) && !p.in_ring(0) && ringset_run(p, 1, 4, RS::Purine) && methyl(p, 4) && !p.in_ring(4),
            &[M::OneThreeDimethylXanthineWalk],
        )],
    );
}

fn six(t: &mut RuleTable) {
    t.add(
        "N-C-C:C:C-O",
        clauses![when(
            |p| {
                amine(p, 0)
                    && fused_run(p, 0, 3, RS::Tetrahydroisoquinoline, R::Tetrahydropyridine)
                    && fused_run(p, 3, 5, RS::Tetrahydroisoquinoline, R::Benzene)
                    && hydroxyl(p, 5)
                    && !p.in_ring(5)
            },
            &[M::SevenOxygenatedTetrahydroisoquinolineTwoNitrogenWalk],
        )],
    );

    t.extend(
        "O-C:C:C:C-O",
        clauses![
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && fused_run(p, 1, 3, RS::Quinoline, R::Pyridine)
                        && fused_run(p, 3, 5, RS::Quinoline, R::Benzene)
                        && hydroxyl(p, 5)
                        && !p.in_ring(5)
                },
                &[M::FourSixDioxygenatedQuinoline],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && fused_run(p, 1, 4, RS::Quinoline, R::Benzene)
                        && fused_run(p, 4, 5, RS::Quinoline, R::Pyridine)
                        && hydroxyl(p, 5)
                        && !p.in_ring(5)
                },
                &[M::FourSixDioxygenatedQuinoline],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && fused_run(p, 1, 4, RS::Quinoline, R::Pyridine)
                        && fused_run(p, 4, 5, RS::Quinoline, R::Benzene)
                        && hydroxyl(p, 5)
                        && !p.in_ring(5)
                },
                &[M::FourEightDioxygenatedQuinoline],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && fused_run(p, 1, 4, RS::Quinoline, R::Benzene)
                        && fused_run(p, 4, 5, RS::Quinoline, R::Pyridine)
                        && hydroxyl(p, 5)
                        && !p.in_ring(5)
                },
                &[M::FourEightDioxygenatedQuinoline],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && fused_run(p, 1, 5, RS::Quinoline, R::Benzene)
                        && hydroxyl(p, 5)
                        && !p.in_ring(5)
                },
                &[M::FiveEightDioxygenatedQuinoline],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && fused_run(p, 1, 5, RS::Indole, R::Benzene)
                        && hydroxyl(p, 5)
                        && !p.in_ring(5)
                },
                &[M::FourSevenDioxygenatedTryptamine],
            ),
        ],
    );

    t.add(
        "N:C:C:C:C-O",
        clauses![
            when(
                |p| {
                    fused_run(p, 0, 3, RS::Quinoline, R::Pyridine)
                        && fused_run(p, 3, 5, RS::Quinoline, R::Benzene)
                        && hydroxyl(p, 5)
                        && !p.in_ring(5)
                },
                &[M::SixOxygenatedQuinolineOneNitrogenWalk],
            ),
            when(
                |p| {
                    fused_run(p, 0, 2, RS::Quinoline, R::Pyridine)
                        && fused_run(p, 2, 5, RS::Quinoline, R::Benzene)
                        && hydroxyl(p, 5)
                        && !p.in_ring(5)
                },
                &[M::SixOxygenatedQuinolineOneNitrogenWalk],
            ),
            when(
                |p| {
                    fused_run(p, 0, 3, RS::Indole, R::Pyrrole)
                        && fused_run(p, 3, 5, RS::Indole, R::Benzene)
                        && hydroxyl(p, 5)
                        && !p.in_ring(5)
                },
                &[M::FiveOxygenatedTryptamineOneNitrogenWalk],
            ),
            when(
                |p| {
                    fused_run(p, 0, 2, RS::Indole, R::Pyrrole)
                        && fused_run(p, 2, 5, RS::Indole, R::Benzene)
                        && hydroxyl(p, 5)
                        && !p.in_ring(5)
                },
                &[M::FiveOxygenatedTryptamineOneNitrogenWalk],
            ),
        ],
    );

    t.add(
        "C-C:N:C:C-O",
        clauses![when(
            |p| {
                methyl(p, 0)
                    && !p.in_ring(0)
                    && fused_run(p, 1, 4, RS::Quinoline, R::Pyridine)
                    && fused_run(p, 4, 5, RS::Quinoline, R::Benzene)
                    && hydroxyl(p, 5)
                    && !p.in_ring(5)
            },
            &[M::EightOxygenatedQuinolineTwoMethylWalk],
        )],
    );

    t.add(
        "C-N-C-C-C-O",
        clauses![
            when(
                |p| {
                    methyl(p, 0)
                        && !p.in_ring(0)
                        && ringset_run(p, 1, 5, RS::Tropane)
                        && hydroxyl(p, 5)
                        && !p.in_ring(5)
                },
                &[M::ThreeOxygenatedTropaneNMethylWalk],
            ),
            when(
                |p| {
                    methyl(p, 0)
                        && !p.in_ring(0)
                        && ringset_run(p, 1, 5, RS::Tropane)
                        && ester_oxygen(p, 5)
                        && !p.in_ring(5)
                },
                &[M::ThreeOxygenatedTropaneEsterNMethylWalk],
            ),
        ],
    );

    t.extend(
        "O-C-C-C-C-O",
        clauses![
            when(
                |p| hydroxyl(p, 0) && !p.in_ring(0) && ringset_run(p, 1, 4, RS::Pyrrolizidine) && open_run(p, 4, 6),
                &[M::SevenNineDioxygenatedPyrrolizidine],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && open_run(p, 0, 2)
                        && ringset_run(p, 2, 5, RS::Pyrrolizidine)
                        && hydroxyl(p, 5)
                        && !p.in_ring(5)
                },
                &[M::SevenNineDioxygenatedPyrrolizidine],
            ),
        ],
    );

    t.add(
        "C-N-C:C-C=O",
        clauses![when(
            |p| methyl(p, 0) && !p.in_ring(0) && ringset_run(p, 1, 5, RS::Purine) && !p.in_ring(5),
            &[M::SixOxygenatedXanthineThreeMethylWalk],
        )],
    );

    t.add(
        "C-N-C-N-C=O",
        clauses![when(
            |p| methyl(p, 0) && !p.in_ring(0) && ringset_run(p, 1, 5, RS::Purine) && !p.in_ring(5),
            &[M::SixOxygenatedXanthineThreeMethylWalk],
        )],
    );

    t.add(
        "C-N-C-C:N-C",
        clauses![when(
            |p| methyl(p, 0) && !p.in_ring(0) && ringset_run(p, 1, 5, RS::Purine) && methyl(p, 5) && !p.in_ring(5),
            &[M::OneSevenDimethylXanthineWalk],
        )],
    );

    t.add(
        "C-N-C:C:N-C",
        clauses![when(
            |p| methyl(p, 0) && !p.in_ring(0) && ringset_run(p, 1, 5, RS::Purine) && methyl(p, 5) && !p.in_ring(5),
            &[M::ThreeSevenDimethylXanthineWalk],
        )],
    );

    t.add(
        "C-N:C:C:C-N",
        clauses![when(
            |p| methyl(p, 0) && !p.in_ring(0) && ringset_run(p, 1, 5, RS::Purine) && amine(p, 5) && !p.in_ring(5),
            &[M::SixNitrogenousAdenineNineMethylWalk],
        )],
    );
}

fn seven(t: &mut RuleTable) {
    t.add(
        "N-C-C-C:C:C-O",
        clauses![
            when(
                |p| {
                    amine(p, 0)
                        && fused_run(p, 0, 4, RS::Tetrahydroisoquinoline, R::Tetrahydropyridine)
                        && fused_run(p, 4, 6, RS::Tetrahydroisoquinoline, R::Benzene)
                        && hydroxyl(p, 6)
                        && !p.in_ring(6)
                },
                &[M::SixOxygenatedTetrahydroisoquinolineTwoNitrogenWalk],
            ),
            when(
                |p| {
                    amine(p, 0)
                        && open_run(p, 0, 3)
                        && fused_run(p, 3, 5, RS::Indole, R::Pyrrole)
                        && fused_run(p, 5, 6, RS::Indole, R::Benzene)
                        && hydroxyl(p, 6)
                        && !p.in_ring(6)
                },
                &[M::FourOxygenatedTryptamineAminoNitrogenWalk],
            ),
        ],
    );

    t.add(
        "N-C-C:C:C:C-O",
        clauses![
            when(
                |p| {
                    amine(p, 0)
                        && fused_run(p, 0, 4, RS::Tetrahydroisoquinoline, R::Tetrahydropyridine)
                        && fused_run(p, 4, 6, RS::Tetrahydroisoquinoline, R::Benzene)
                        && hydroxyl(p, 6)
                        && !p.in_ring(6)
                },
                &[M::SixOxygenatedTetrahydroisoquinolineTwoNitrogenWalk],
            ),
            when(
                |p| {
                    amine(p, 0)
                        && fused_run(p, 0, 3, RS::Tetrahydroisoquinoline, R::Tetrahydropyridine)
                        && fused_run(p, 3, 6, RS::Tetrahydroisoquinoline, R::Benzene)
                        && hydroxyl(p, 6)
                        && !p.in_ring(6)
                },
                &[M::SixOxygenatedTetrahydroisoquinolineTwoNitrogenWalk],
            ),
        ],
    );

    t.extend(
        "O-C:C:C:C:C-O",
        clauses![
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && fused_run(p, 1, 3, RS::Quinoline, R::Pyridine)
                        && fused_run(p, 3, 6, RS::Quinoline, R::Benzene)
                        && hydroxyl(p, 6)
                        && !p.in_ring(6)
                },
                &[M::FourSevenDioxygenatedQuinoline],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && fused_run(p, 1, 5, RS::Quinoline, R::Benzene)
                        && fused_run(p, 5, 6, RS::Quinoline, R::Pyridine)
                        && hydroxyl(p, 6)
                        && !p.in_ring(6)
                },
                &[M::FourSevenDioxygenatedQuinoline],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && fused_run(p, 1, 4, RS::Quinoline, R::Pyridine)
                        && fused_run(p, 4, 6, RS::Quinoline, R::Benzene)
                        && hydroxyl(p, 6)
                        && !p.in_ring(6)
                },
                &[M::FourSevenDioxygenatedQuinoline],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && fused_run(p, 1, 5, RS::Quinoline, R::Benzene)
                        && fused_run(p, 5, 6, RS::Quinoline, R::Pyridine)
                        && hydroxyl(p, 6)
                        && !p.in_ring(6)
                },
                &[M::FourSevenDioxygenatedQuinoline],
            ),
        ],
    );

    t.add(
        "C-C:C:C:C:C-O",
        clauses![when(
            |p| {
                methyl(p, 0)
                    && !p.in_ring(0)
                    && fused_run(p, 1, 5, RS::Quinoline, R::Pyridine)
                    && fused_run(p, 5, 6, RS::Quinoline, R::Benzene)
                    && hydroxyl(p, 6)
                    && !p.in_ring(6)
            },
            &[M::FiveOxygenatedQuinolineTwoMethylWalk],
        )],
    );

    t.add(
        "C-C:N:C:C:C-O",
        clauses![
            when(
                |p| {
                    methyl(p, 0)
                        && !p.in_ring(0)
                        && fused_run(p, 1, 5, RS::Quinoline, R::Pyridine)
                        && fused_run(p, 5, 6, RS::Quinoline, R::Benzene)
                        && hydroxyl(p, 6)
                        && !p.in_ring(6)
                },
                &[M::FiveOxygenatedQuinolineTwoMethylWalk],
            ),
            when(
                |p| {
                    methyl(p, 0)
                        && !p.in_ring(0)
                        && fused_run(p, 1, 4, RS::Quinoline, R::Pyridine)
                        && fused_run(p, 4, 6, RS::Quinoline, R::Benzene)
                        && hydroxyl(p, 6)
                        && !p.in_ring(6)
                },
                &[M::SevenOxygenatedQuinolineTwoMethylWalk],
            ),
        ],
    );

    t.add(
        "C-N:C-C-N-C=O",
        clauses![when(
            |p| methyl(p, 0) && !p.in_ring(0) && ringset_run(p, 1, 6, RS::Purine) && !p.in_ring(6),
            &[M::TwoOxygenatedXanthineSevenMethylWalk],
        )],
    );

    t.add(
        "C-N:C:C-N-C=O",
        clauses![when(
            |p| methyl(p, 0) && !p.in_ring(0) && ringset_run(p, 1, 6, RS::Purine) && !p.in_ring(6),
            &[M::TwoOxygenatedXanthineSevenMethylWalk],
        )],
    );
}

fn eight(t: &mut RuleTable) {
    t.add(
        "N-C-C-C:C:C:C-O",
        clauses![
            when(
                |p| {
                    amine(p, 0)
                        && fused_run(p, 0, 2, RS::Tetrahydroisoquinoline, R::Tetrahydropyridine)
                        && !p.in_ring(2)
                        && ring_run(p, 3, 7, R::Benzene)
                        && hydroxyl(p, 7)
                        && !p.in_ring(7)
                },
                &[M::FourPrimeOxygenatedTetrahydroisoquinolineTwoNitrogenWalk],
            ),
            when(
                |p| {
                    amine(p, 0)
                        && open_run(p, 0, 3)
                        && fused_run(p, 3, 5, RS::Indole, R::Pyrrole)
                        && fused_run(p, 5, 7, RS::Indole, R::Benzene)
                        && hydroxyl(p, 7)
                        && !p.in_ring(7)
                },
                &[M::FiveOxygenatedTryptamineAminoNitrogenWalk],
            ),
            when(
                |p| {
                    amine(p, 0)
                        && open_run(p, 0, 3)
                        && fused_run(p, 3, 6, RS::Indole, R::Pyrrole)
                        && fused_run(p, 6, 7, RS::Indole, R::Benzene)
                        && hydroxyl(p, 7)
                        && !p.in_ring(7)
                },
                &[M::SevenOxygenatedTryptamineAminoNitrogenWalk],
            ),
        ],
    );

    t.add(
        "C-C:C:C:C:C:C-O",
        clauses![when(
            |p| {
                methyl(p, 0)
                    && !p.in_ring(0)
                    && fused_run(p, 1, 5, RS::Quinoline, R::Pyridine)
                    && fused_run(p, 5, 7, RS::Quinoline, R::Benzene)
                    && hydroxyl(p, 7)
                    && !p.in_ring(7)
            },
            &[M::SixOxygenatedQuinolineTwoMethylWalk],
        )],
    );

    t.add(
        "C-C:N:C:C:C:C-O",
        clauses![
            when(
                |p| {
                    methyl(p, 0)
                        && !p.in_ring(0)
                        && fused_run(p, 1, 5, RS::Quinoline, R::Pyridine)
                        && fused_run(p, 5, 7, RS::Quinoline, R::Benzene)
                        && hydroxyl(p, 7)
                        && !p.in_ring(7)
                },
                &[M::SixOxygenatedQuinolineTwoMethylWalk],
            ),
            when(
                |p| {
                    methyl(p, 0)
                        && !p.in_ring(0)
                        && fused_run(p, 1, 4, RS::Quinoline, R::Pyridine)
                        && fused_run(p, 4, 7, RS::Quinoline, R::Benzene)
                        && hydroxyl(p, 7)
                        && !p.in_ring(7)
                },
                &[M::SixOxygenatedQuinolineTwoMethylWalk],
            ),
        ],
    );
}

fn nine(t: &mut RuleTable) {
    t.add(
        "N-C-C-C:C:C:C:C-O",
        clauses![
            when(
                |p| {
                    amine(p, 0)
                        && open_run(p, 0, 3)
                        && fused_run(p, 3, 5, RS::Indole, R::Pyrrole)
                        && fused_run(p, 5, 8, RS::Indole, R::Benzene)
                        && hydroxyl(p, 8)
                        && !p.in_ring(8)
                },
                &[M::SixOxygenatedTryptamineAminoNitrogenWalk],
            ),
            when(
                |p| {
                    amine(p, 0)
                        && open_run(p, 0, 3)
                        && fused_run(p, 3, 6, RS::Indole, R::Pyrrole)
                        && fused_run(p, 6, 8, RS::Indole, R::Benzene)
                        && hydroxyl(p, 8)
                        && !p.in_ring(8)
                },
                &[M::SixOxygenatedTryptamineAminoNitrogenWalk],
            ),
        ],
    );
}

fn eleven(t: &mut RuleTable) {
    t.extend(
        "O-C:C:C-C-C-C:C:C:C-O",
        clauses![when(
            |p| {
                hydroxyl(p, 0)
                    && !p.in_ring(0)
                    && fused_run(p, 1, 4, RS::Tetrahydroisoquinoline, R::Benzene)
                    && fused_run(p, 4, 5, RS::Tetrahydroisoquinoline, R::Tetrahydropyridine)
                    && !p.in_ring(5)
                    && ring_run(p, 6, 10, R::Benzene)
                    && hydroxyl(p, 10)
                    && !p.in_ring(10)
            },
            &[M::FourPrimeSevenDioxygenatedTetrahydroisoquinoline],
        )],
    );
}

fn twelve(t: &mut RuleTable) {
    t.extend(
        "O-C:C:C:C-C-C-C:C:C:C-O",
        clauses![
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && fused_run(p, 1, 5, RS::Tetrahydroisoquinoline, R::Benzene)
                        && fused_run(p, 5, 6, RS::Tetrahydroisoquinoline, R::Tetrahydropyridine)
                        && !p.in_ring(6)
                        && ring_run(p, 7, 11, R::Benzene)
                        && hydroxyl(p, 11)
                        && !p.in_ring(11)
                },
                &[M::FourPrimeSixDioxygenatedTetrahydroisoquinoline],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && ring_run(p, 1, 5, R::Benzene)
                        && !p.in_ring(5)
                        && fused_run(p, 6, 9, RS::Tetrahydroisoquinoline, R::Tetrahydropyridine)
                        && fused_run(p, 9, 11, RS::Tetrahydroisoquinoline, R::Benzene)
                        && hydroxyl(p, 11)
                        && !p.in_ring(11)
                },
                &[M::FourPrimeSixDioxygenatedTetrahydroisoquinoline],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && fused_run(p, 1, 5, RS::Tetrahydroisoquinoline, R::Benzene)
                        && fused_run(p, 5, 6, RS::Tetrahydroisoquinoline, R::Tetrahydropyridine)
                        && !p.in_ring(6)
                        && ring_run(p, 7, 11, R::Benzene)
                        && hydroxyl(p, 11)
                        && !p.in_ring(11)
                },
                &[M::FourPrimeSixDioxygenatedTetrahydroisoquinoline],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && ring_run(p, 1, 5, R::Benzene)
                        && !p.in_ring(5)
                        && fused_run(p, 6, 8, RS::Tetrahydroisoquinoline, R::Tetrahydropyridine)
                        && fused_run(p, 8, 11, RS::Tetrahydroisoquinoline, R::Benzene)
                        && hydroxyl(p, 11)
                        && !p.in_ring(11)
                },
                &[M::FourPrimeSixDioxygenatedTetrahydroisoquinoline],
            ),
        ],
    );
}

#[cfg(test)]
mod tests {
    use crate::engine::MotifEngine;
    use crate::graph::{RingSetType as RS, RingType as R};
    use crate::motif::Motif as M;
    use crate::testing::smiles;

    #[test]
    fn tetrahydroisoquinoline() {
        let ctx = smiles(
            "[OH]c1cc2CC[NH][CH](Cc3ccc([OH])cc3)c2cc1[OH]",
            &[R::Benzene, R::Tetrahydropyridine, R::Benzene],
            &[(RS::Tetrahydroisoquinoline, &[1, 2])],
        );
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        for motif in [
            M::SixSevenDioxygenatedTetrahydroisoquinoline,
            M::FourPrimeSixDioxygenatedTetrahydroisoquinoline,
            M::SixOxygenatedTetrahydroisoquinolineTwoNitrogenWalk,
            M::FourPrimeSevenDioxygenatedTetrahydroisoquinoline,
            M::SevenOxygenatedTetrahydroisoquinolineTwoNitrogenWalk,
            M::FourPrimeOxygenatedTetrahydroisoquinolineTwoNitrogenWalk,
        ] {
            assert!(fp.get(motif), "{motif}");
        }
        assert!(!fp.get(M::FiveSixOrSixSevenOrSevenEightDioxygenatedQuinoline));
    }

    #[test]
    fn quinoline() {
        let ctx = smiles(
            "[n]1c([CH3])cc([OH])c2c([OH])c([OH])c([OH])c([OH])c21",
            &[R::Benzene, R::Pyridine],
            &[(RS::Quinoline, &[0, 1])],
        );
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        for motif in [
            M::FiveSixOrSixSevenOrSevenEightDioxygenatedQuinoline,
            M::FourSixDioxygenatedQuinoline,
            M::FourSevenDioxygenatedQuinoline,
            M::SevenOxygenatedQuinolineOneNitrogenWalk,
            M::SevenOxygenatedQuinolineTwoMethylWalk,
            M::EightOxygenatedQuinolineOneNitrogenWalk,
        ] {
            assert!(fp.get(motif), "{motif}");
        }
        assert!(!fp.get(M::SixSevenDioxygenatedTetrahydroisoquinoline));
    }

    #[test]
    fn tryptamine() {
        let ctx = smiles(
            "[nH]1cc(CC[NH2])c2c([OH])c([OH])c([OH])c([OH])c21",
            &[R::Benzene, R::Pyrrole],
            &[(RS::Indole, &[0, 1])],
        );
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        for motif in [
            M::FourFiveOrFiveSixOrSixSevenDioxygenatedTryptamine,
            M::FourOxygenatedTryptamineAminoNitrogenWalk,
            M::SevenOxygenatedTryptamineAminoNitrogenWalk,
            M::FourSevenDioxygenatedTryptamine,
            M::SixOxygenatedTryptamineOneNitrogenWalk,
            M::SevenOxygenatedTryptamineOneNitrogenWalk,
        ] {
            assert!(fp.get(motif), "{motif}");
        }
        assert!(!fp.get(M::SixSevenDioxygenatedTetrahydroisoquinoline));
    }

    #[test]
    fn tropane() {
        let ctx = smiles("[CH3][N]1C2CCC1C[CH]([OH])C2", &[R::Pyrrolidine, R::Piperidine], &[(RS::Tropane, &[0, 1])]);
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        assert!(fp.get(M::ThreeOxygenatedTropaneNMethylWalk));
        assert!(!fp.get(M::SixSevenDioxygenatedTetrahydroisoquinoline));
    }

    #[test]
    fn tropane_ester() {
        let ctx = smiles(
            "[CH3][N]1C2CCC1C[CH]([O]C(=O)c3ccccc3)C2[C](=O)OC",
            &[R::Pyrrolidine, R::Benzene, R::Piperidine],
            &[(RS::Tropane, &[0, 2])],
        );
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        for motif in [
            M::ThreeOxygenatedTropaneEsterNMethylWalk,
            M::ThreeOxygenatedTropaneEsterTwoSideChainWalk,
            M::NMethylTropaneEsterTwoSideChainWalk,
        ] {
            assert!(fp.get(motif), "{motif}");
        }
        assert!(!fp.get(M::SixSevenDioxygenatedTetrahydroisoquinoline));
    }

    #[test]
    fn quinolizidine() {
        let ctx = smiles(
            "[OH][CH2][CH]1CCC[N]2CCCC[CH]21",
            &[R::Piperidine, R::Piperidine],
            &[(RS::Quinolizidine, &[0, 1])],
        );
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        assert!(fp.get(M::ElevenOxygenatedQuinolizidineFiveNitrogenWalk));
        assert!(!fp.get(M::SixSevenDioxygenatedTetrahydroisoquinoline));
    }

    #[test]
    fn pyrrolizidine() {
        let ctx = smiles(
            "[OH][CH2]C1=CC[N]2CC[CH]([OH])[CH]21",
            &[R::Pyrrolidine, R::Pyrroline],
            &[(RS::Pyrrolizidine, &[0, 1])],
        );
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        for motif in [
            M::NineOxygenatedPyrrolizidineFourNitrogenWalk,
            M::SevenNineDioxygenatedPyrrolizidine,
            M::SevenOxygenatedPyrrolizidineFourNitrogenWalk,
        ] {
            assert!(fp.get(motif), "{motif}");
        }
        assert!(!fp.get(M::SixSevenDioxygenatedTetrahydroisoquinoline));
    }

    #[test]
    fn xanthine() {
        let ctx = smiles(
            "[CH3][N]1C(=[O])[N]([CH3])c2nc[n]([CH3])c2C1=[O]",
            &[R::Imidazole, R::Pyrimidine],
            &[(RS::Purine, &[0, 1])],
        );
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        for motif in [
            M::TwoSixDioxygenatedXanthine,
            M::TwoOrSixOxygenatedXanthineOneMethylWalk,
            M::TwoOxygenatedXanthineSevenMethylWalk,
            M::SixOxygenatedXanthineSevenMethylWalk,
            M::OneThreeDimethylXanthineWalk,
            M::OneSevenDimethylXanthineWalk,
        ] {
            assert!(fp.get(motif), "{motif}");
        }
        assert!(!fp.get(M::SixSevenDioxygenatedTetrahydroisoquinoline));
    }

    #[test]
    fn adenine() {
        let ctx = smiles("[NH2]c1ncnc2[n]([CH3])cnc21", &[R::Imidazole, R::Pyrimidine], &[(RS::Purine, &[0, 1])]);
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        assert!(fp.get(M::SixNitrogenousAdenineNineMethylWalk));
        assert!(!fp.get(M::SixSevenDioxygenatedTetrahydroisoquinoline));
    }
}
