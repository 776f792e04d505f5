//! Ring walks over steroid and terpenoid skeletons between oxygenated positions,
//! angular methyls and side-chain roots.

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
        _ => {}
    }
}

fn three(t: &mut RuleTable) {
    t.extend(
        "C-C-O",
        clauses![when(
            |p| !p.in_ring(0) && p.in_ringset_of(1, RS::Steroid) && hydroxyl(p, 2) && !p.in_ring(2),
            &[M::SeventeenOxygenatedSteroidTwentySideChainWalk],
        )],
    );

    t.extend("C-C=O", clauses![when(|p| methyl(p, 0) && open_run(p, 0, 3), &[M::NineOxygenatedIononeTenMethylWalk])]);
}

fn four(t: &mut RuleTable) {
    t.extend(
        "O-C-C-O",
        clauses![when(
            |p| {
                hydroxyl(p, 0)
                    && !p.in_ring(0)
                    && ringset_run(p, 1, 3, RS::Steroid)
                    && hydroxyl(p, 3)
                    && !p.in_ring(3)
            },
            &[M::ElevenTwelveDioxygenatedSteroid],
        )],
    );

    t.extend(
        "C-C-C-O",
        clauses![
            when(
                |p| {
                    methyl(p, 0)
                        && !p.in_ring(0)
                        && ringset_run(p, 1, 3, RS::Steroid)
                        && hydroxyl(p, 3)
                        && !p.in_ring(3)
                },
                &[M::TwelveOrSeventeenOxygenatedSteroidEighteenMethylWalk],
            ),
            when(
                |p| {
                    methyl(p, 0)
                        && !p.in_ring(0)
                        && ringset_run(p, 1, 3, RS::Decalin)
                        && hydroxyl(p, 3)
                        && !p.in_ring(3)
                },
                &[M::ThreeOxygenatedDrimaneThirteenMethylWalk],
            ),
            when(
                |p| methyl(p, 0) && !p.in_ring(0) && p.in_ring_of(1, R::Cyclohexane) && open_run(p, 2, 4),
                &[M::EighteenOxygenatedAbietatrieneNineteenMethylWalk],
            ),
        ],
    );

    t.add(
        "C-C-C-C",
        clauses![
            when(
                |p| methyl(p, 0) && !p.in_ring(0) && ringset_run(p, 1, 3, RS::Steroid) && !p.in_ring(3),
                &[M::EighteenMethylSteroidTwentySideChainWalk],
            ),
            when(
                |p| !p.in_ring(0) && ringset_run(p, 1, 3, RS::Steroid) && methyl(p, 3) && !p.in_ring(3),
                &[M::EighteenMethylSteroidTwentySideChainWalk],
            ),
        ],
    );
}

fn five(t: &mut RuleTable) {
    t.extend(
        "C-C-C-C-O",
        clauses![
            when(
                |p| {
                    methyl(p, 0)
                        && !p.in_ring(0)
                        && ringset_run(p, 1, 4, RS::Steroid)
                        && hydroxyl(p, 4)
                        && !p.in_ring(4)
                },
                &[M::ElevenOxygenatedSteroidEighteenMethylWalk],
            ),
            when(
                |p| !p.in_ring(0) && ringset_run(p, 1, 4, RS::Steroid) && hydroxyl(p, 4) && !p.in_ring(4),
                &[M::TwelveOxygenatedSteroidTwentySideChainWalk],
            ),
            when(
                |p| {
                    methyl(p, 0)
                        && !p.in_ring(0)
                        && ring_run(p, 1, 4, R::Cyclohexane)
                        && hydroxyl(p, 4)
                        && !p.in_ring(4)
                },
                &[M::ThreeOxygenatedPMenthaneSevenMethylWalk],
            ),
            when(
                |p| {
                    methyl(p, 0)
                        && open_run(p, 0, 2)
                        && ring_run(p, 2, 4, R::Cyclohexane)
                        && hydroxyl(p, 4)
                        && !p.in_ring(4)
                },
                &[M::ThreeOxygenatedPMenthaneNineMethylWalk],
            ),
            when(
                |p| methyl(p, 0) && !p.in_ring(0) && ringset_run(p, 1, 3, RS::Decalin) && open_run(p, 3, 5),
                &[M::ElevenOxygenatedDrimaneTwelveMethylWalk],
            ),
        ],
    );

    t.extend(
        "O-C-C-C-O",
        clauses![when(
            |p| {
                hydroxyl(p, 0)
                    && !p.in_ring(0)
                    && ringset_run(p, 1, 4, RS::Steroid)
                    && hydroxyl(p, 4)
                    && !p.in_ring(4)
            },
            &[M::TwelveSeventeenDioxygenatedSteroid],
        )],
    );

    t.extend(
        "C-C-C-C-C",
        clauses![
            when(
                |p| {
                    methyl(p, 0)
                        && !p.in_ring(0)
                        && ringset_run(p, 1, 4, RS::Decalin)
                        && methyl(p, 4)
                        && !p.in_ring(4)
                },
                &[M::TwelveFifteenOrThirteenFifteenDimethylDrimaneWalk],
            ),
            when(
                |p| {
                    methyl(p, 0)
                        && !p.in_ring(0)
                        && ring_run(p, 1, 4, R::Cyclohexane)
                        && methyl(p, 4)
                        && !p.in_ring(4)
                },
                &[M::NineteenTwentyDimethylAbietatrieneWalk],
            ),
        ],
    );

    t.extend(
        "C-C-C=C-C",
        clauses![when(
            |p| !p.in_ring(0) && ring_run(p, 1, 4, R::Cyclohexene) && methyl(p, 4) && !p.in_ring(4),
            &[M::ElevenThirteenDimethylIononeWalk],
        )],
    );
}

fn six(t: &mut RuleTable) {
    t.extend(
        "C-C-C-C-C-O",
        clauses![
            when(
                |p| {
                    methyl(p, 0)
                        && !p.in_ring(0)
                        && ringset_run(p, 1, 5, RS::Steroid)
                        && hydroxyl(p, 5)
                        && !p.in_ring(5)
                },
                &[M::ThreeOrSevenOrTwelveOxygenatedSteroidNineteenMethylWalk],
            ),
            when(
                |p| !p.in_ring(0) && ringset_run(p, 1, 5, RS::Steroid) && hydroxyl(p, 5) && !p.in_ring(5),
                &[M::ElevenOxygenatedSteroidTwentySideChainWalk],
            ),
            when(
                |p| {
                    methyl(p, 0)
                        && !p.in_ring(0)
                        && ringset_run(p, 1, 5, RS::Decalin)
                        && hydroxyl(p, 5)
                        && !p.in_ring(5)
                },
                &[M::ThreeOxygenatedDrimaneFifteenMethylWalk],
            ),
            when(
                |p| methyl(p, 0) && !p.in_ring(0) && ring_run(p, 1, 4, R::Cyclohexane) && open_run(p, 4, 6),
                &[M::EighteenOxygenatedAbietatrieneTwentyMethylWalk],
            ),
        ],
    );

    t.extend(
        "O-C-C-C-C-O",
        clauses![when(
            |p| {
                hydroxyl(p, 0)
                    && !p.in_ring(0)
                    && ringset_run(p, 1, 5, RS::Steroid)
                    && hydroxyl(p, 5)
                    && !p.in_ring(5)
            },
            &[M::SevenElevenOrElevenSeventeenDioxygenatedSteroid],
        )],
    );

    t.add(
        "C-C-C=C-C-O",
        clauses![when(
            |p| methyl(p, 0) && !p.in_ring(0) && ringset_run(p, 1, 5, RS::Steroid) && hydroxyl(p, 5) && !p.in_ring(5),
            &[M::SevenOxygenatedFiveEneSteroidNineteenMethylWalk],
        )],
    );

    t.extend(
        "C-C-C-C-C=O",
        clauses![when(
            |p| methyl(p, 0) && !p.in_ring(0) && ringset_run(p, 1, 5, RS::Steroid) && !p.in_ring(5),
            &[M::ThreeOxygenatedFourEnThreeOneSteroidNineteenMethylWalk],
        )],
    );

    t.add(
        "C-C-C=C-C=O",
        clauses![when(
            |p| methyl(p, 0) && !p.in_ring(0) && ringset_run(p, 1, 5, RS::Steroid) && !p.in_ring(5),
            &[M::ThreeOxygenatedFourEnThreeOneSteroidNineteenMethylWalk],
        )],
    );
}

fn seven(t: &mut RuleTable) {
    t.extend(
        "O-C-C-C-C-C-O",
        clauses![when(
            |p| {
                hydroxyl(p, 0)
                    && !p.in_ring(0)
                    && ringset_run(p, 1, 6, RS::Steroid)
                    && hydroxyl(p, 6)
                    && !p.in_ring(6)
            },
            &[M::ThreeSevenOrSevenTwelveOrSevenSeventeenDioxygenatedSteroid],
        )],
    );

    t.extend(
        "C-C-C-C-C-C-O",
        clauses![
            when(
                |p| !p.in_ring(0) && ringset_run(p, 1, 6, RS::Steroid) && hydroxyl(p, 6) && !p.in_ring(6),
                &[M::SevenOxygenatedSteroidTwentySideChainWalk],
            ),
            when(
                |p| methyl(p, 0) && !p.in_ring(0) && ringset_run(p, 1, 5, RS::Decalin) && open_run(p, 5, 7),
                &[M::ElevenOxygenatedDrimaneThirteenMethylWalk],
            ),
        ],
    );

    t.extend(
        "C-C-C-C-C-C-C",
        clauses![
            when(
                |p| {
                    methyl(p, 0)
                        && !p.in_ring(0)
                        && ringset_run(p, 1, 6, RS::Steroid)
                        && methyl(p, 6)
                        && !p.in_ring(6)
                },
                &[M::EighteenNineteenDimethylSteroidWalk],
            ),
            when(
                |p| methyl(p, 0) && !p.in_ring(0) && ring_run(p, 1, 5, R::Cyclohexane) && open_run(p, 5, 7),
                &[M::SevenNineDimethylPMenthaneWalk],
            ),
            when(
                |p| {
                    methyl(p, 0)
                        && open_run(p, 0, 2)
                        && ring_run(p, 2, 6, R::Cyclohexane)
                        && methyl(p, 6)
                        && !p.in_ring(6)
                },
                &[M::SevenNineDimethylPMenthaneWalk],
            ),
            when(
                |p| {
                    methyl(p, 0)
                        && !p.in_ring(0)
                        && ringset_run(p, 1, 6, RS::Decalin)
                        && methyl(p, 6)
                        && !p.in_ring(6)
                },
                &[M::TwelveThirteenDimethylDrimaneWalk],
            ),
        ],
    );

    t.add(
        "O-C-C-C=C-C-O",
        clauses![when(
            |p| {
                hydroxyl(p, 0)
                    && !p.in_ring(0)
                    && ringset_run(p, 1, 6, RS::Steroid)
                    && hydroxyl(p, 6)
                    && !p.in_ring(6)
            },
            &[M::ThreeSevenDioxygenatedFiveEneSteroid],
        )],
    );

    t.add(
        "O-C-C-C=C-C=O",
        clauses![when(
            |p| hydroxyl(p, 0) && !p.in_ring(0) && ringset_run(p, 1, 6, RS::Steroid) && !p.in_ring(6),
            &[M::ThreeSevenDioxygenatedFourEnThreeOneSteroid],
        )],
    );

    t.extend(
        "O-C-C-C:C:C-O",
        clauses![when(
            |p| {
                hydroxyl(p, 0)
                    && !p.in_ring(0)
                    && ringset_run(p, 1, 6, RS::Steroid)
                    && hydroxyl(p, 6)
                    && !p.in_ring(6)
            },
            &[M::ThreeSevenDioxygenatedEstratriene],
        )],
    );

    t.add(
        "C-C-C-C-C=C-C",
        clauses![when(
            |p| methyl(p, 0) && !p.in_ring(0) && ringset_run(p, 1, 6, RS::Decalin) && methyl(p, 6) && !p.in_ring(6),
            &[M::TwelveThirteenDimethylDrimSevenEneWalk],
        )],
    );

    t.add(
        "C-C-C:C:C:C-C",
        clauses![
            when(
                |p| {
                    methyl(p, 0)
                        && !p.in_ring(0)
                        && ring_run(p, 1, 3, R::Cyclohexane)
                        && ring_run(p, 3, 6, R::Benzene)
                        && !p.in_ring(6)
                },
                &[M::TwentyMethylAbietatrieneFifteenSideChainWalk],
            ),
            when(
                |p| {
                    methyl(p, 0)
                        && !p.in_ring(0)
                        && ring_run(p, 1, 4, R::Cyclohexane)
                        && ring_run(p, 4, 6, R::Benzene)
                        && !p.in_ring(6)
                },
                &[M::TwentyMethylAbietatrieneFifteenSideChainWalk],
            ),
        ],
    );

    t.add(
        "C-C-C-C=C-C=O",
        clauses![when(
            |p| !p.in_ring(0) && ring_run(p, 1, 3, R::Cyclohexene) && open_run(p, 3, 7),
            &[M::NineOxygenatedIononeElevenMethylWalk],
        )],
    );

    t.add(
        "C-C=C-C=C-C=O",
        clauses![when(
            |p| methyl(p, 0) && !p.in_ring(0) && ring_run(p, 1, 3, R::Cyclohexene) && open_run(p, 3, 7),
            &[M::NineOxygenatedIononeThirteenMethylWalk],
        )],
    );

    t.add(
        "C-C-C-C=C-C-C",
        clauses![when(
            |p| !p.in_ring(0) && ring_run(p, 1, 3, R::Cyclohexene) && open_run(p, 3, 7),
            &[M::TenElevenDimethylIononeWalk],
        )],
    );

    t.add(
        "C-C-C=C-C=C-C",
        clauses![when(
            |p| {
                methyl(p, 0)
                    && open_run(p, 0, 4)
                    && ring_run(p, 4, 6, R::Cyclohexene)
                    && methyl(p, 6)
                    && !p.in_ring(6)
            },
            &[M::TenThirteenDimethylIononeWalk],
        )],
    );
}

fn eight(t: &mut RuleTable) {
    t.extend(
        "O-C-C-C-C-C-C-O",
        clauses![
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && ringset_run(p, 1, 7, RS::Steroid)
                        && hydroxyl(p, 7)
                        && !p.in_ring(7)
                },
                &[M::ThreeElevenDioxygenatedSteroid],
            ),
            when(
                |p| hydroxyl(p, 0) && !p.in_ring(0) && ringset_run(p, 1, 6, RS::Decalin) && open_run(p, 6, 8),
                &[M::ThreeElevenDioxygenatedDrimane],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && open_run(p, 0, 2)
                        && ringset_run(p, 2, 7, RS::Decalin)
                        && hydroxyl(p, 7)
                        && !p.in_ring(7)
                },
                &[M::ThreeElevenDioxygenatedDrimane],
            ),
        ],
    );

    t.extend(
        "C-C-C-C-C-C-C-O",
        clauses![
            when(
                |p| {
                    methyl(p, 0)
                        && !p.in_ring(0)
                        && ringset_run(p, 1, 7, RS::Steroid)
                        && hydroxyl(p, 7)
                        && !p.in_ring(7)
                },
                &[M::SeventeenOxygenatedSteroidNineteenMethylWalk],
            ),
            when(
                |p| {
                    methyl(p, 0)
                        && !p.in_ring(0)
                        && ringset_run(p, 1, 7, RS::Decalin)
                        && hydroxyl(p, 7)
                        && !p.in_ring(7)
                },
                &[M::ThreeOxygenatedDrimaneTwelveMethylWalk],
            ),
        ],
    );

    t.extend(
        "C-C-C-C-C-C-C-C",
        clauses![
            when(
                |p| methyl(p, 0) && !p.in_ring(0) && ringset_run(p, 1, 7, RS::Steroid) && !p.in_ring(7),
                &[M::NineteenMethylSteroidTwentySideChainWalk],
            ),
            when(
                |p| !p.in_ring(0) && ringset_run(p, 1, 7, RS::Steroid) && methyl(p, 7) && !p.in_ring(7),
                &[M::NineteenMethylSteroidTwentySideChainWalk],
            ),
        ],
    );

    t.extend(
        "O-C-C-C-C-C-C=O",
        clauses![when(
            |p| hydroxyl(p, 0) && !p.in_ring(0) && ringset_run(p, 1, 7, RS::Steroid) && !p.in_ring(7),
            &[M::ThreeElevenDioxygenatedFourEnThreeOneSteroid],
        )],
    );

    t.add(
        "O-C-C-C-C=C-C=O",
        clauses![when(
            |p| hydroxyl(p, 0) && !p.in_ring(0) && ringset_run(p, 1, 7, RS::Steroid) && !p.in_ring(7),
            &[M::ThreeElevenDioxygenatedFourEnThreeOneSteroid],
        )],
    );

    t.extend(
        "O-C-C-C:C:C:C-O",
        clauses![when(
            |p| {
                hydroxyl(p, 0)
                    && !p.in_ring(0)
                    && ringset_run(p, 1, 7, RS::Steroid)
                    && hydroxyl(p, 7)
                    && !p.in_ring(7)
            },
            &[M::ThreeElevenDioxygenatedEstratriene],
        )],
    );

    t.add(
        "C-C=C-C-C-C-C-O",
        clauses![when(
            |p| methyl(p, 0) && !p.in_ring(0) && ringset_run(p, 1, 7, RS::Decalin) && hydroxyl(p, 7) && !p.in_ring(7),
            &[M::ThreeOxygenatedDrimSevenEneTwelveMethylWalk],
        )],
    );
}

fn nine(t: &mut RuleTable) {
    t.extend(
        "O-C-C-C-C-C-C-C-O",
        clauses![when(
            |p| {
                hydroxyl(p, 0)
                    && !p.in_ring(0)
                    && ringset_run(p, 1, 8, RS::Steroid)
                    && hydroxyl(p, 8)
                    && !p.in_ring(8)
            },
            &[M::ThreeTwelveDioxygenatedSteroid],
        )],
    );

    t.extend(
        "O-C-C-C-C-C-C-C=O",
        clauses![when(
            |p| hydroxyl(p, 0) && !p.in_ring(0) && ringset_run(p, 1, 8, RS::Steroid) && !p.in_ring(8),
            &[M::ThreeTwelveDioxygenatedFourEnThreeOneSteroid],
        )],
    );

    t.add(
        "O-C-C-C-C-C=C-C=O",
        clauses![when(
            |p| hydroxyl(p, 0) && !p.in_ring(0) && ringset_run(p, 1, 8, RS::Steroid) && !p.in_ring(8),
            &[M::ThreeTwelveDioxygenatedFourEnThreeOneSteroid],
        )],
    );

    t.add(
        "O-C-C-C-C:C:C:C-O",
        clauses![when(
            |p| {
                hydroxyl(p, 0)
                    && !p.in_ring(0)
                    && ringset_run(p, 1, 8, RS::Steroid)
                    && hydroxyl(p, 8)
                    && !p.in_ring(8)
            },
            &[M::ThreeTwelveDioxygenatedEstratriene],
        )],
    );

    t.add(
        "C-C-C-C-C-C:C:C-C",
        clauses![when(
            |p| {
                methyl(p, 0)
                    && !p.in_ring(0)
                    && ring_run(p, 1, 3, R::Cyclohexane)
                    && ring_run(p, 3, 6, R::Cyclohexane)
                    && ring_run(p, 6, 8, R::Benzene)
                    && !p.in_ring(8)
            },
            &[M::NineteenMethylAbietatrieneFifteenSideChainWalk],
        )],
    );

    t.add(
        "C-C-C-C-C:C:C:C-C",
        clauses![when(
            |p| {
                methyl(p, 0)
                    && !p.in_ring(0)
                    && ring_run(p, 1, 4, R::Cyclohexane)
                    && ring_run(p, 4, 8, R::Benzene)
                    && !p.in_ring(8)
            },
            &[M::NineteenMethylAbietatrieneFifteenSideChainWalk],
        )],
    );
}

fn ten(t: &mut RuleTable) {
    t.extend(
        "C-C-C-C-C-C-C-C-C-O",
        clauses![when(
            |p| methyl(p, 0) && !p.in_ring(0) && ringset_run(p, 1, 9, RS::Steroid) && hydroxyl(p, 9) && !p.in_ring(9),
            &[M::ThreeOxygenatedSteroidEighteenMethylWalk],
        )],
    );

    t.add(
        "C-C-C-C-C-C=C-C-C-O",
        clauses![when(
            |p| methyl(p, 0) && !p.in_ring(0) && ringset_run(p, 1, 9, RS::Steroid) && hydroxyl(p, 9) && !p.in_ring(9),
            &[M::ThreeOxygenatedFiveEneSteroidEighteenMethylWalk],
        )],
    );

    t.extend(
        "C-C-C-C-C-C-C-C-C=O",
        clauses![when(
            |p| methyl(p, 0) && !p.in_ring(0) && ringset_run(p, 1, 9, RS::Steroid) && !p.in_ring(9),
            &[M::ThreeOxygenatedFourEnThreeOneSteroidEighteenMethylWalk],
        )],
    );

    t.add(
        "C-C-C-C-C-C-C=C-C=O",
        clauses![when(
            |p| methyl(p, 0) && !p.in_ring(0) && ringset_run(p, 1, 9, RS::Steroid) && !p.in_ring(9),
            &[M::ThreeOxygenatedFourEnThreeOneSteroidEighteenMethylWalk],
        )],
    );

    t.add(
        "C-C-C-C-C-C:C:C:C-O",
        clauses![when(
            |p| methyl(p, 0) && !p.in_ring(0) && ringset_run(p, 1, 9, RS::Steroid) && hydroxyl(p, 9) && !p.in_ring(9),
            &[M::ThreeOxygenatedEstratrieneEighteenMethylWalk],
        )],
    );

    t.add(
        "C-C-C-C-C-C-C:C:C-O",
        clauses![when(
            |p| methyl(p, 0) && !p.in_ring(0) && ringset_run(p, 1, 9, RS::Steroid) && hydroxyl(p, 9) && !p.in_ring(9),
            &[M::ThreeOxygenatedEstratrieneEighteenMethylWalk],
        )],
    );

    t.add(
        "C-C:C:C-C-C-C-C-C-O",
        clauses![when(
            |p| {
                !p.in_ring(0)
                    && ring_run(p, 1, 4, R::Benzene)
                    && ring_run(p, 4, 7, R::Cyclohexane)
                    && p.in_ring_of(7, R::Cyclohexane)
                    && open_run(p, 8, 10)
            },
            &[M::EighteenOxygenatedAbietatrieneFifteenSideChainWalk],
        )],
    );

    t.add(
        "C-C:C:C:C-C-C-C-C-O",
        clauses![when(
            |p| {
                !p.in_ring(0)
                    && ring_run(p, 1, 5, R::Benzene)
                    && ring_run(p, 5, 8, R::Cyclohexane)
                    && open_run(p, 8, 10)
            },
            &[M::EighteenOxygenatedAbietatrieneFifteenSideChainWalk],
        )],
    );
}

fn eleven(t: &mut RuleTable) {
    t.extend(
        "O-C-C-C-C-C-C-C-C-C-O",
        clauses![when(
            |p| {
                hydroxyl(p, 0)
                    && !p.in_ring(0)
                    && ringset_run(p, 1, 10, RS::Steroid)
                    && hydroxyl(p, 10)
                    && !p.in_ring(10)
            },
            &[M::ThreeSeventeenDioxygenatedSteroid],
        )],
    );

    t.extend(
        "C-C-C-C-C-C-C-C-C-C-O",
        clauses![when(
            |p| !p.in_ring(0) && ringset_run(p, 1, 10, RS::Steroid) && hydroxyl(p, 10) && !p.in_ring(10),
            &[M::ThreeOxygenatedSteroidTwentySideChainWalk],
        )],
    );

    t.add(
        "O-C-C-C-C-C-C=C-C-C-O",
        clauses![when(
            |p| {
                hydroxyl(p, 0)
                    && !p.in_ring(0)
                    && ringset_run(p, 1, 10, RS::Steroid)
                    && hydroxyl(p, 10)
                    && !p.in_ring(10)
            },
            &[M::ThreeSeventeenDioxygenatedFiveEneSteroid],
        )],
    );

    t.add(
        "C-C-C-C-C-C-C=C-C-C-O",
        clauses![when(
            |p| !p.in_ring(0) && ringset_run(p, 1, 10, RS::Steroid) && hydroxyl(p, 10) && !p.in_ring(10),
            &[M::ThreeOxygenatedFiveEneSteroidTwentySideChainWalk],
        )],
    );

    t.extend(
        "O-C-C-C-C-C-C-C-C-C=O",
        clauses![when(
            |p| hydroxyl(p, 0) && !p.in_ring(0) && ringset_run(p, 1, 10, RS::Steroid) && !p.in_ring(10),
            &[M::ThreeSeventeenDioxygenatedFourEnThreeOneSteroid],
        )],
    );

    t.add(
        "O-C-C-C-C-C-C-C=C-C=O",
        clauses![when(
            |p| hydroxyl(p, 0) && !p.in_ring(0) && ringset_run(p, 1, 10, RS::Steroid) && !p.in_ring(10),
            &[M::ThreeSeventeenDioxygenatedFourEnThreeOneSteroid],
        )],
    );

    t.extend(
        "C-C-C-C-C-C-C-C-C-C=O",
        clauses![when(
            |p| !p.in_ring(0) && ringset_run(p, 1, 10, RS::Steroid) && !p.in_ring(10),
            &[M::ThreeOxygenatedFourEnThreeOneSteroidTwentySideChainWalk],
        )],
    );

    t.add(
        "C-C-C-C-C-C-C-C=C-C=O",
        clauses![when(
            |p| !p.in_ring(0) && ringset_run(p, 1, 10, RS::Steroid) && !p.in_ring(10),
            &[M::ThreeOxygenatedFourEnThreeOneSteroidTwentySideChainWalk],
        )],
    );

    t.add(
        "O-C-C-C-C-C-C:C:C:C-O",
        clauses![when(
            |p| {
                hydroxyl(p, 0)
                    && !p.in_ring(0)
                    && ringset_run(p, 1, 10, RS::Steroid)
                    && hydroxyl(p, 10)
                    && !p.in_ring(10)
            },
            &[M::ThreeSeventeenDioxygenatedEstratriene],
        )],
    );

    t.add(
        "O-C-C-C-C-C-C-C:C:C-O",
        clauses![when(
            |p| {
                hydroxyl(p, 0)
                    && !p.in_ring(0)
                    && ringset_run(p, 1, 10, RS::Steroid)
                    && hydroxyl(p, 10)
                    && !p.in_ring(10)
            },
            &[M::ThreeSeventeenDioxygenatedEstratriene],
        )],
    );

    t.add(
        "C-C-C-C-C-C-C:C:C:C-O",
        clauses![when(
            |p| !p.in_ring(0) && ringset_run(p, 1, 10, RS::Steroid) && hydroxyl(p, 10) && !p.in_ring(10),
            &[M::ThreeOxygenatedEstratrieneTwentySideChainWalk],
        )],
    );

    t.add(
        "C-C-C-C-C-C-C-C:C:C-O",
        clauses![when(
            |p| !p.in_ring(0) && ringset_run(p, 1, 10, RS::Steroid) && hydroxyl(p, 10) && !p.in_ring(10),
            &[M::ThreeOxygenatedEstratrieneTwentySideChainWalk],
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
    fn steroid() {
        let ctx = smiles(
            "C1CC([OH])CC2CC([OH])C3C(C([OH])C([OH])C4([CH3])C([OH])([CH](C)C)CCC43)C21[CH3]",
            &[R::Cyclopentane, R::Cyclohexane, R::Cyclohexane, R::Cyclohexane],
            &[(RS::Steroid, &[0, 1, 2, 3])],
        );
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        for motif in [
            M::ThreeSevenOrSevenTwelveOrSevenSeventeenDioxygenatedSteroid,
            M::ThreeSeventeenDioxygenatedSteroid,
            M::ThreeOxygenatedSteroidTwentySideChainWalk,
            M::ElevenTwelveDioxygenatedSteroid,
            M::TwelveSeventeenDioxygenatedSteroid,
            M::SeventeenOxygenatedSteroidTwentySideChainWalk,
        ] {
            assert!(fp.get(motif), "{motif}");
        }
        assert!(!fp.get(M::ThreeSevenDioxygenatedFiveEneSteroid));
    }

    #[test]
    fn delta5_ene_steroid() {
        let ctx = smiles(
            "C1CC([OH])CC2=CC([OH])C3C(C([OH])C([OH])C4([CH3])C([OH])([CH](C)C)CCC43)C21[CH3]",
            &[R::Cyclopentane, R::Cyclohexane, R::Cyclohexene, R::Cyclohexane],
            &[(RS::Steroid, &[0, 1, 2, 3])],
        );
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        for motif in [
            M::ThreeSevenOrSevenTwelveOrSevenSeventeenDioxygenatedSteroid,
            M::ThreeOxygenatedSteroidEighteenMethylWalk,
            M::SevenElevenOrElevenSeventeenDioxygenatedSteroid,
            M::ThreeOxygenatedPMenthaneSevenMethylWalk,
            M::SeventeenOxygenatedSteroidTwentySideChainWalk,
            M::ThreeSevenDioxygenatedFiveEneSteroid,
        ] {
            assert!(fp.get(motif), "{motif}");
        }
        assert!(!fp.get(M::ThreeSevenDioxygenatedFourEnThreeOneSteroid));
    }

    #[test]
    fn delta4_en_3_one_steroid() {
        let ctx = smiles(
            "C1CC(=[O])C=C2CC([OH])C3C(C([OH])C([OH])C4([CH3])C([OH])([CH](C)C)CCC43)C21[CH3]",
            &[R::Cyclopentane, R::Cyclohexane, R::Cyclohexane, R::Cyclohexene],
            &[(RS::Steroid, &[0, 1, 2, 3])],
        );
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        for motif in [
            M::ThreeSevenOrSevenTwelveOrSevenSeventeenDioxygenatedSteroid,
            M::ThreeOxygenatedSteroidEighteenMethylWalk,
            M::SevenOxygenatedSteroidTwentySideChainWalk,
            M::TwelveSeventeenDioxygenatedSteroid,
            M::EighteenMethylSteroidTwentySideChainWalk,
            M::ThreeTwelveDioxygenatedFourEnThreeOneSteroid,
        ] {
            assert!(fp.get(motif), "{motif}");
        }
        assert!(!fp.get(M::ThreeSevenDioxygenatedFiveEneSteroid));
    }

    #[test]
    fn estratriene() {
        let ctx = smiles(
            "c1cc([OH])cc2CC([OH])C3C(C([OH])C([OH])C4([CH3])C([OH])([CH](C)C)CCC43)c21",
            &[R::Cyclopentane, R::Cyclohexane, R::Cyclohexane, R::Benzene],
            &[(RS::Steroid, &[0, 1, 2, 3])],
        );
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        for motif in [
            M::ThreeSevenOrSevenTwelveOrSevenSeventeenDioxygenatedSteroid,
            M::ThreeOxygenatedSteroidEighteenMethylWalk,
            M::SevenElevenOrElevenSeventeenDioxygenatedSteroid,
            M::TwelveOxygenatedSteroidTwentySideChainWalk,
            M::SeventeenOxygenatedSteroidNineteenMethylWalk,
            M::ThreeElevenDioxygenatedEstratriene,
        ] {
            assert!(fp.get(motif), "{motif}");
        }
        assert!(!fp.get(M::EighteenNineteenDimethylSteroidWalk));
    }

    #[test]
    fn p_menthane() {
        let ctx = smiles("[CH3]C1CCC([CH]([CH3])[CH3])C([OH])C1", &[R::Cyclohexane], &[]);
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        for motif in [
            M::ThreeOxygenatedPMenthaneSevenMethylWalk,
            M::ThreeOxygenatedPMenthaneNineMethylWalk,
            M::SevenNineDimethylPMenthaneWalk,
        ] {
            assert!(fp.get(motif), "{motif}");
        }
        assert!(!fp.get(M::ThreeSevenOrSevenTwelveOrSevenSeventeenDioxygenatedSteroid));
    }

    #[test]
    fn drimane() {
        let ctx = smiles(
            "C1CC([OH])C([CH3])([CH3])C2CCC([CH3])C([CH2][OH])C21[CH3]",
            &[R::Cyclohexane, R::Cyclohexane],
            &[(RS::Decalin, &[0, 1])],
        );
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        for motif in [
            M::ThreeElevenDioxygenatedDrimane,
            M::ThreeOxygenatedDrimaneFifteenMethylWalk,
            M::ElevenOxygenatedDrimaneTwelveMethylWalk,
            M::ThreeOxygenatedDrimaneThirteenMethylWalk,
            M::TwelveThirteenDimethylDrimaneWalk,
            M::TwelveFifteenOrThirteenFifteenDimethylDrimaneWalk,
        ] {
            assert!(fp.get(motif), "{motif}");
        }
        assert!(!fp.get(M::ThreeSevenOrSevenTwelveOrSevenSeventeenDioxygenatedSteroid));
    }

    #[test]
    fn drim_7_ene() {
        let ctx = smiles(
            "C1CC([OH])C([CH3])([CH3])C2CC=C([CH3])C([CH2][OH])C21[CH3]",
            &[R::Cyclohexene, R::Cyclohexane],
            &[(RS::Decalin, &[0, 1])],
        );
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        for motif in [
            M::ThreeElevenDioxygenatedDrimane,
            M::ThreeOxygenatedDrimaneFifteenMethylWalk,
            M::ElevenOxygenatedDrimaneTwelveMethylWalk,
            M::ThreeOxygenatedDrimaneTwelveMethylWalk,
            M::TwelveFifteenOrThirteenFifteenDimethylDrimaneWalk,
            M::ThreeOxygenatedDrimSevenEneTwelveMethylWalk,
        ] {
            assert!(fp.get(motif), "{motif}");
        }
        assert!(!fp.get(M::ThreeSevenOrSevenTwelveOrSevenSeventeenDioxygenatedSteroid));
    }

    #[test]
    fn abietatriene() {
        let ctx = smiles(
            "C1CCC([CH3])([C](=O)[OH])C2CCc3cc([CH](C)C)ccc3C21[CH3]",
            &[R::Benzene, R::Cyclohexane, R::Cyclohexane],
            &[],
        );
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        for motif in [
            M::EighteenOxygenatedAbietatrieneTwentyMethylWalk,
            M::EighteenOxygenatedAbietatrieneNineteenMethylWalk,
            M::NineteenTwentyDimethylAbietatrieneWalk,
            M::EighteenOxygenatedAbietatrieneFifteenSideChainWalk,
            M::NineteenMethylAbietatrieneFifteenSideChainWalk,
            M::TwentyMethylAbietatrieneFifteenSideChainWalk,
        ] {
            assert!(fp.get(motif), "{motif}");
        }
        assert!(!fp.get(M::ThreeSevenOrSevenTwelveOrSevenSeventeenDioxygenatedSteroid));
    }

    #[test]
    fn ionone() {
        let ctx = smiles("[CH3]C1=C(C=CC(=[O])[CH3])C([CH3])(C)CCC1", &[R::Cyclohexene], &[]);
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        for motif in [
            M::NineOxygenatedIononeTenMethylWalk,
            M::NineOxygenatedIononeElevenMethylWalk,
            M::NineOxygenatedIononeThirteenMethylWalk,
            M::TenElevenDimethylIononeWalk,
            M::TenThirteenDimethylIononeWalk,
            M::ElevenThirteenDimethylIononeWalk,
        ] {
            assert!(fp.get(motif), "{motif}");
        }
        assert!(!fp.get(M::ThreeSevenOrSevenTwelveOrSevenSeventeenDioxygenatedSteroid));
    }
}
