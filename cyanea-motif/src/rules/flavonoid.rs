//! Substitution walks over flavonoid, coumarin and xanthone cores: paths joining two
//! oxygenated ring positions, or one position and the core carbonyl or ring oxygen.

use super::common::*;
use super::{when, RuleTable};
use crate::graph::{RingSetType as RS, RingType as R};
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
        "O-C:C-O",
        clauses![
            when(
                |p| !p.in_ring(0) && fused_run(p, 1, 3, RS::Chromone, R::Benzene) && !p.in_ring(3),
                &[M::FiveSixOrSixSevenOrSevenEightDioxygenatedChromone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 3, RS::Chromone, R::Benzene)
                        && fused_run(p, 3, 4, RS::Chromone, R::Pyrone)
                },
                &[M::EightOxygenatedChromoneRingOxygenWalk],
            ),
            when(
                |p| {
                    fused_run(p, 0, 2, RS::Chromone, R::Pyrone)
                        && fused_run(p, 2, 3, RS::Chromone, R::Benzene)
                        && !p.in_ring(3)
                },
                &[M::EightOxygenatedChromoneRingOxygenWalk],
            ),
            when(
                |p| !p.in_ring(0) && fused_run(p, 1, 3, RS::Chromane, R::Benzene) && !p.in_ring(3),
                &[M::FiveSixOrSixSevenOrSevenEightDioxygenatedChromane],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 3, RS::Chromane, R::Benzene)
                        && fused_run(p, 3, 4, RS::Chromane, R::Pyranone)
                },
                &[M::EightOxygenatedChromaneRingOxygenWalk],
            ),
            when(
                |p| {
                    fused_run(p, 0, 2, RS::Chromane, R::Pyranone)
                        && fused_run(p, 2, 3, RS::Chromane, R::Benzene)
                        && !p.in_ring(3)
                },
                &[M::EightOxygenatedChromaneRingOxygenWalk],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 3, RS::Chromane, R::Benzene)
                        && fused_run(p, 3, 4, RS::Chromane, R::Dihydropyran)
                },
                &[M::EightOxygenatedChromaneRingOxygenWalk],
            ),
            when(
                |p| {
                    fused_run(p, 0, 2, RS::Chromane, R::Dihydropyran)
                        && fused_run(p, 2, 3, RS::Chromane, R::Benzene)
                        && !p.in_ring(3)
                },
                &[M::EightOxygenatedChromaneRingOxygenWalk],
            ),
            when(
                |p| !p.in_ring(0) && fused_run(p, 1, 3, RS::Dihydrobenzofuran, R::Benzene) && !p.in_ring(3),
                &[M::FourFiveOrFiveSixOrSixSevenDioxygenatedAurone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 3, RS::Dihydrobenzofuran, R::Benzene)
                        && fused_run(p, 3, 4, RS::Dihydrobenzofuran, R::Dihydrofuran)
                },
                &[M::SevenOxygenatedAuroneRingOxygenWalk],
            ),
            when(
                |p| {
                    fused_run(p, 0, 2, RS::Dihydrobenzofuran, R::Dihydrofuran)
                        && fused_run(p, 2, 3, RS::Dihydrobenzofuran, R::Benzene)
                        && !p.in_ring(3)
                },
                &[M::SevenOxygenatedAuroneRingOxygenWalk],
            ),
            when(
                |p| !p.in_ring(0) && ring_run(p, 1, 3, R::Benzene) && !p.in_ring(3),
                &[M::TwoPrimeThreePrimeOrThreePrimeFourPrimeDioxygenatedChalcone],
            ),
            when(
                |p| !p.in_ring(0) && fused_run(p, 1, 3, RS::Coumarin, R::Benzene) && !p.in_ring(3),
                &[M::FiveSixOrSixSevenOrSevenEightDioxygenatedCoumarin],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 3, RS::Coumarin, R::Benzene)
                        && fused_run(p, 3, 4, RS::Coumarin, R::Pyrone)
                },
                &[M::EightOxygenatedCoumarinRingOxygenWalk],
            ),
            when(
                |p| {
                    fused_run(p, 0, 2, RS::Coumarin, R::Pyrone)
                        && fused_run(p, 2, 3, RS::Coumarin, R::Benzene)
                        && !p.in_ring(3)
                },
                &[M::EightOxygenatedCoumarinRingOxygenWalk],
            ),
            when(
                |p| !p.in_ring(0) && fused_run(p, 1, 3, RS::Xanthone, R::Benzene) && !p.in_ring(3),
                &[M::OneTwoOrTwoThreeOrThreeFourDioxygenatedXanthone],
            ),
        ],
    );

    t.extend(
        "O-C-C=O",
        clauses![
            when(
                |p| !p.in_ring(0) && fused_run(p, 1, 3, RS::Chromone, R::Pyrone) && !p.in_ring(3),
                &[M::ThreeOxygenatedFlavoneCarbonylWalk],
            ),
            when(
                |p| !p.in_ring(0) && fused_run(p, 1, 3, RS::Chromane, R::Pyranone) && !p.in_ring(3),
                &[M::ThreeOxygenatedFlavanoneCarbonylWalk],
            ),
            when(
                |p| !p.in_ring(0) && fused_run(p, 1, 3, RS::Coumarin, R::Pyrone) && !p.in_ring(3),
                &[M::ThreeOxygenatedCoumarinCarbonylWalk],
            ),
        ],
    );

    t.add(
        "O-C=C-O",
        clauses![
            when(
                |p| !p.in_ring(0) && fused_run(p, 1, 4, RS::Chromone, R::Pyrone),
                &[M::ThreeOxygenatedFlavoneRingOxygenWalk],
            ),
            when(
                |p| fused_run(p, 0, 3, RS::Chromone, R::Pyrone) && !p.in_ring(3),
                &[M::ThreeOxygenatedFlavoneRingOxygenWalk],
            ),
            when(
                |p| !p.in_ring(0) && fused_run(p, 1, 3, RS::Coumarin, R::Pyrone) && !p.in_ring(3),
                &[M::ThreeFourDioxygenatedCoumarin],
            ),
        ],
    );

    t.extend(
        "O-C-C-O",
        clauses![
            when(
                |p| !p.in_ring(0) && fused_run(p, 1, 4, RS::Chromane, R::Pyranone),
                &[M::ThreeOxygenatedFlavanoneRingOxygenWalk],
            ),
            when(
                |p| fused_run(p, 0, 3, RS::Chromane, R::Pyranone) && !p.in_ring(3),
                &[M::ThreeOxygenatedFlavanoneRingOxygenWalk],
            ),
            when(
                |p| !p.in_ring(0) && fused_run(p, 1, 4, RS::Chromane, R::Dihydropyran),
                &[M::ThreeOxygenatedFlavanThreeOlRingOxygenWalk],
            ),
            when(
                |p| fused_run(p, 0, 3, RS::Chromane, R::Dihydropyran) && !p.in_ring(3),
                &[M::ThreeOxygenatedFlavanThreeOlRingOxygenWalk],
            ),
            when(
                |p| !p.in_ring(0) && fused_run(p, 1, 4, RS::Coumarin, R::Pyrone),
                &[M::ThreeOxygenatedCoumarinRingOxygenWalk],
            ),
            when(
                |p| fused_run(p, 0, 3, RS::Coumarin, R::Pyrone) && !p.in_ring(3),
                &[M::ThreeOxygenatedCoumarinRingOxygenWalk],
            ),
        ],
    );

    t.extend(
        "O-C:C:O",
        clauses![when(
            |p| {
                !p.in_ring(0)
                    && fused_run(p, 1, 3, RS::Xanthone, R::Benzene)
                    && fused_run(p, 3, 4, RS::Xanthone, R::Pyrone)
            },
            &[M::FourOrFiveOxygenatedXanthoneRingOxygenWalk],
        )],
    );
}

fn five(t: &mut RuleTable) {
    t.extend(
        "O-C:C:C-O",
        clauses![
            when(
                |p| !p.in_ring(0) && fused_run(p, 1, 4, RS::Chromone, R::Benzene) && !p.in_ring(4),
                &[M::FiveSevenOrSixEightDioxygenatedChromone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 4, RS::Chromone, R::Benzene)
                        && fused_run(p, 4, 5, RS::Chromone, R::Pyrone)
                },
                &[M::FiveOxygenatedChromoneRingOxygenWalk],
            ),
            when(
                |p| {
                    fused_run(p, 0, 3, RS::Chromone, R::Pyrone)
                        && fused_run(p, 3, 4, RS::Chromone, R::Benzene)
                        && !p.in_ring(4)
                },
                &[M::FiveOxygenatedChromoneRingOxygenWalk],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 4, RS::Chromone, R::Benzene)
                        && fused_run(p, 4, 5, RS::Chromone, R::Pyrone)
                },
                &[M::SevenOxygenatedChromoneRingOxygenWalk],
            ),
            when(
                |p| {
                    fused_run(p, 0, 2, RS::Chromone, R::Pyrone)
                        && fused_run(p, 2, 4, RS::Chromone, R::Benzene)
                        && !p.in_ring(4)
                },
                &[M::SevenOxygenatedChromoneRingOxygenWalk],
            ),
            when(
                |p| !p.in_ring(0) && fused_run(p, 1, 4, RS::Chromane, R::Benzene) && !p.in_ring(4),
                &[M::FiveSevenOrSixEightDioxygenatedChromane],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 4, RS::Chromane, R::Benzene)
                        && fused_run(p, 4, 5, RS::Chromane, R::Pyranone)
                },
                &[M::FiveOxygenatedChromaneRingOxygenWalk],
            ),
            when(
                |p| {
                    fused_run(p, 0, 3, RS::Chromane, R::Pyranone)
                        && fused_run(p, 3, 4, RS::Chromane, R::Benzene)
                        && !p.in_ring(4)
                },
                &[M::FiveOxygenatedChromaneRingOxygenWalk],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 4, RS::Chromane, R::Benzene)
                        && fused_run(p, 4, 5, RS::Chromane, R::Pyranone)
                },
                &[M::SevenOxygenatedChromaneRingOxygenWalk],
            ),
            when(
                |p| {
                    fused_run(p, 0, 2, RS::Chromane, R::Pyranone)
                        && fused_run(p, 2, 4, RS::Chromane, R::Benzene)
                        && !p.in_ring(4)
                },
                &[M::SevenOxygenatedChromaneRingOxygenWalk],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 4, RS::Chromane, R::Benzene)
                        && fused_run(p, 4, 5, RS::Chromane, R::Dihydropyran)
                },
                &[M::FiveOxygenatedChromaneRingOxygenWalk],
            ),
            when(
                |p| {
                    fused_run(p, 0, 3, RS::Chromane, R::Dihydropyran)
                        && fused_run(p, 3, 4, RS::Chromane, R::Benzene)
                        && !p.in_ring(4)
                },
                &[M::FiveOxygenatedChromaneRingOxygenWalk],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 4, RS::Chromane, R::Benzene)
                        && fused_run(p, 4, 5, RS::Chromane, R::Dihydropyran)
                },
                &[M::SevenOxygenatedChromaneRingOxygenWalk],
            ),
            when(
                |p| {
                    fused_run(p, 0, 2, RS::Chromane, R::Dihydropyran)
                        && fused_run(p, 2, 4, RS::Chromane, R::Benzene)
                        && !p.in_ring(4)
                },
                &[M::SevenOxygenatedChromaneRingOxygenWalk],
            ),
            when(
                |p| !p.in_ring(0) && fused_run(p, 1, 4, RS::Dihydrobenzofuran, R::Benzene) && !p.in_ring(4),
                &[M::FourSixOrFiveSevenDioxygenatedAurone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 4, RS::Dihydrobenzofuran, R::Benzene)
                        && fused_run(p, 4, 5, RS::Dihydrobenzofuran, R::Dihydrofuran)
                },
                &[M::FourOxygenatedAuroneRingOxygenWalk],
            ),
            when(
                |p| {
                    fused_run(p, 0, 3, RS::Dihydrobenzofuran, R::Dihydrofuran)
                        && fused_run(p, 3, 4, RS::Dihydrobenzofuran, R::Benzene)
                        && !p.in_ring(4)
                },
                &[M::FourOxygenatedAuroneRingOxygenWalk],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 4, RS::Dihydrobenzofuran, R::Benzene)
                        && fused_run(p, 4, 5, RS::Dihydrobenzofuran, R::Dihydrofuran)
                },
                &[M::SixOxygenatedAuroneRingOxygenWalk],
            ),
            when(
                |p| {
                    fused_run(p, 0, 2, RS::Dihydrobenzofuran, R::Dihydrofuran)
                        && fused_run(p, 2, 4, RS::Dihydrobenzofuran, R::Benzene)
                        && !p.in_ring(4)
                },
                &[M::SixOxygenatedAuroneRingOxygenWalk],
            ),
            when(
                |p| !p.in_ring(0) && ring_run(p, 1, 4, R::Benzene) && !p.in_ring(4),
                &[M::TwoPrimeFourPrimeDioxygenatedChalcone],
            ),
            when(
                |p| !p.in_ring(0) && fused_run(p, 1, 4, RS::Coumarin, R::Benzene) && !p.in_ring(4),
                &[M::FiveSevenOrSixEightDioxygenatedCoumarin],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 4, RS::Coumarin, R::Benzene)
                        && fused_run(p, 4, 5, RS::Coumarin, R::Pyrone)
                },
                &[M::FiveOxygenatedCoumarinRingOxygenWalk],
            ),
            when(
                |p| {
                    fused_run(p, 0, 3, RS::Coumarin, R::Pyrone)
                        && fused_run(p, 3, 4, RS::Coumarin, R::Benzene)
                        && !p.in_ring(4)
                },
                &[M::FiveOxygenatedCoumarinRingOxygenWalk],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 4, RS::Coumarin, R::Benzene)
                        && fused_run(p, 4, 5, RS::Coumarin, R::Pyrone)
                },
                &[M::SevenOxygenatedCoumarinRingOxygenWalk],
            ),
            when(
                |p| {
                    fused_run(p, 0, 2, RS::Coumarin, R::Pyrone)
                        && fused_run(p, 2, 4, RS::Coumarin, R::Benzene)
                        && !p.in_ring(4)
                },
                &[M::SevenOxygenatedCoumarinRingOxygenWalk],
            ),
            when(
                |p| !p.in_ring(0) && fused_run(p, 1, 4, RS::Xanthone, R::Benzene) && !p.in_ring(4),
                &[M::OneThreeOrTwoFourDioxygenatedXanthone],
            ),
        ],
    );

    t.add(
        "O-C:C-C=O",
        clauses![
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 3, RS::Chromone, R::Benzene)
                        && fused_run(p, 3, 4, RS::Chromone, R::Pyrone)
                        && !p.in_ring(4)
                },
                &[M::FiveOxygenatedChromoneCarbonylWalk],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 3, RS::Chromane, R::Benzene)
                        && fused_run(p, 3, 4, RS::Chromane, R::Pyranone)
                        && !p.in_ring(4)
                },
                &[M::FiveOxygenatedChromaneCarbonylWalk],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 3, RS::Dihydrobenzofuran, R::Benzene)
                        && fused_run(p, 3, 4, RS::Dihydrobenzofuran, R::Dihydrofuran)
                        && !p.in_ring(4)
                },
                &[M::FourOxygenatedAuroneCarbonylWalk],
            ),
            when(
                |p| !p.in_ring(0) && ring_run(p, 1, 3, R::Benzene) && open_run(p, 3, 5),
                &[M::TwoPrimeOxygenatedChalconeCarbonylWalk],
            ),
        ],
    );

    t.add(
        "O-C-C:C-O",
        clauses![
            when(
                |p| fused_run(p, 0, 2, RS::Chromone, R::Pyrone) && ring_run(p, 2, 4, R::Benzene) && !p.in_ring(4),
                &[M::TwoPrimeOxygenatedFlavoneRingOxygenWalk],
            ),
            when(
                |p| fused_run(p, 0, 2, RS::Chromane, R::Pyranone) && ring_run(p, 2, 4, R::Benzene) && !p.in_ring(4),
                &[M::TwoPrimeOxygenatedFlavanoneRingOxygenWalk],
            ),
            when(
                |p| {
                    fused_run(p, 0, 2, RS::Chromane, R::Dihydropyran)
                        && ring_run(p, 2, 4, R::Benzene)
                        && !p.in_ring(4)
                },
                &[M::TwoPrimeOxygenatedFlavanThreeOlRingOxygenWalk],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 3, RS::Coumarin, R::Pyrone)
                        && fused_run(p, 3, 4, RS::Coumarin, R::Benzene)
                        && !p.in_ring(4)
                },
                &[M::FourFiveDioxygenatedCoumarin],
            ),
            when(
                |p| !p.in_ring(0) && fused_run(p, 1, 5, RS::Coumarin, R::Pyrone),
                &[M::FourOxygenatedCoumarinRingOxygenWalk],
            ),
        ],
    );

    t.add(
        "O-C=C-C=O",
        clauses![when(
            |p| !p.in_ring(0) && fused_run(p, 1, 4, RS::Coumarin, R::Pyrone) && !p.in_ring(4),
            &[M::FourOxygenatedCoumarinCarbonylWalk],
        )],
    );

    t.add(
        "O-C-C=C-O",
        clauses![when(
            |p| fused_run(p, 0, 4, RS::Coumarin, R::Pyrone) && !p.in_ring(4),
            &[M::FourOxygenatedCoumarinRingOxygenWalk],
        )],
    );

    t.add(
        "O-C:C:C=O",
        clauses![when(
            |p| {
                !p.in_ring(0)
                    && fused_run(p, 1, 3, RS::Xanthone, R::Benzene)
                    && fused_run(p, 3, 4, RS::Xanthone, R::Pyrone)
                    && !p.in_ring(4)
            },
            &[M::OneOrEightOxygenatedXanthoneCarbonylWalk],
        )],
    );

    t.add(
        "O-C:C:C:O",
        clauses![when(
            |p| {
                !p.in_ring(0)
                    && fused_run(p, 1, 4, RS::Xanthone, R::Benzene)
                    && fused_run(p, 4, 5, RS::Xanthone, R::Pyrone)
            },
            &[M::OneOrThreeOrSixOrEightOxygenatedXanthoneRingOxygenWalk],
        )],
    );
}

fn six(t: &mut RuleTable) {
    t.add(
        "O-C-C-C:C-O",
        clauses![
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 4, RS::Chromone, R::Pyrone)
                        && fused_run(p, 4, 5, RS::Chromone, R::Benzene)
                        && !p.in_ring(5)
                },
                &[M::ThreeFiveDioxygenatedFlavone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 4, RS::Chromane, R::Pyranone)
                        && fused_run(p, 4, 5, RS::Chromane, R::Benzene)
                        && !p.in_ring(5)
                },
                &[M::ThreeFiveDioxygenatedFlavanone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 3, RS::Chromane, R::Pyranone)
                        && ring_run(p, 3, 5, R::Benzene)
                        && !p.in_ring(5)
                },
                &[M::ThreeTwoPrimeDioxygenatedFlavanone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 4, RS::Chromane, R::Dihydropyran)
                        && fused_run(p, 4, 5, RS::Chromane, R::Benzene)
                        && !p.in_ring(5)
                },
                &[M::ThreeFiveDioxygenatedFlavanThreeOl],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 3, RS::Chromane, R::Dihydropyran)
                        && ring_run(p, 3, 5, R::Benzene)
                        && !p.in_ring(5)
                },
                &[M::ThreeTwoPrimeDioxygenatedFlavanThreeOl],
            ),
        ],
    );

    t.add(
        "O-C:C-C=C-O",
        clauses![
            when(
                |p| {
                    !p.in_ring(0)
                        && ring_run(p, 1, 3, R::Benzene)
                        && fused_run(p, 3, 5, RS::Chromone, R::Pyrone)
                        && !p.in_ring(5)
                },
                &[M::ThreeTwoPrimeDioxygenatedFlavone],
            ),
            when(
                |p| !p.in_ring(0) && ring_run(p, 1, 3, R::Benzene) && fused_run(p, 3, 6, RS::Chromone, R::Pyrone),
                &[M::TwoPrimeOxygenatedIsoflavoneRingOxygenWalk],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && ring_run(p, 1, 3, R::Benzene)
                        && !p.in_ring(3)
                        && fused_run(p, 4, 6, RS::Dihydrobenzofuran, R::Dihydrofuran)
                },
                &[M::TwoPrimeOxygenatedAuroneRingOxygenWalk],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 3, RS::Coumarin, R::Benzene)
                        && fused_run(p, 3, 5, RS::Coumarin, R::Pyrone)
                        && !p.in_ring(5)
                },
                &[M::ThreeFiveDioxygenatedCoumarin],
            ),
        ],
    );

    t.extend(
        "O-C:C:C:C-O",
        clauses![
            when(
                |p| !p.in_ring(0) && fused_run(p, 1, 5, RS::Chromone, R::Benzene) && !p.in_ring(5),
                &[M::FiveEightDioxygenatedChromone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 5, RS::Chromone, R::Benzene)
                        && fused_run(p, 5, 6, RS::Chromone, R::Pyrone)
                },
                &[M::SixOxygenatedChromoneRingOxygenWalk],
            ),
            when(
                |p| {
                    fused_run(p, 0, 2, RS::Chromone, R::Pyrone)
                        && fused_run(p, 2, 5, RS::Chromone, R::Benzene)
                        && !p.in_ring(5)
                },
                &[M::SixOxygenatedChromoneRingOxygenWalk],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 5, RS::Chromone, R::Benzene)
                        && fused_run(p, 5, 6, RS::Chromone, R::Pyrone)
                },
                &[M::SixOxygenatedChromoneRingOxygenWalk],
            ),
            when(
                |p| {
                    fused_run(p, 0, 3, RS::Chromone, R::Pyrone)
                        && fused_run(p, 3, 5, RS::Chromone, R::Benzene)
                        && !p.in_ring(5)
                },
                &[M::SixOxygenatedChromoneRingOxygenWalk],
            ),
            when(
                |p| !p.in_ring(0) && fused_run(p, 1, 5, RS::Chromane, R::Benzene) && !p.in_ring(5),
                &[M::FiveEightDioxygenatedChromane],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 5, RS::Chromane, R::Benzene)
                        && fused_run(p, 5, 6, RS::Chromane, R::Pyranone)
                },
                &[M::SixOxygenatedChromaneRingOxygenWalk],
            ),
            when(
                |p| {
                    fused_run(p, 0, 2, RS::Chromane, R::Pyranone)
                        && fused_run(p, 2, 5, RS::Chromane, R::Benzene)
                        && !p.in_ring(5)
                },
                &[M::SixOxygenatedChromaneRingOxygenWalk],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 5, RS::Chromane, R::Benzene)
                        && fused_run(p, 5, 6, RS::Chromane, R::Pyranone)
                },
                &[M::SixOxygenatedChromaneRingOxygenWalk],
            ),
            when(
                |p| {
                    fused_run(p, 0, 3, RS::Chromane, R::Pyranone)
                        && fused_run(p, 3, 5, RS::Chromane, R::Benzene)
                        && !p.in_ring(5)
                },
                &[M::SixOxygenatedChromaneRingOxygenWalk],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 5, RS::Chromane, R::Benzene)
                        && fused_run(p, 5, 6, RS::Chromane, R::Dihydropyran)
                },
                &[M::SixOxygenatedChromaneRingOxygenWalk],
            ),
            when(
                |p| {
                    fused_run(p, 0, 3, RS::Chromane, R::Dihydropyran)
                        && fused_run(p, 3, 5, RS::Chromane, R::Benzene)
                        && !p.in_ring(5)
                },
                &[M::SixOxygenatedChromaneRingOxygenWalk],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 5, RS::Chromane, R::Benzene)
                        && fused_run(p, 5, 6, RS::Chromane, R::Dihydropyran)
                },
                &[M::SixOxygenatedChromaneRingOxygenWalk],
            ),
            when(
                |p| {
                    fused_run(p, 0, 2, RS::Chromane, R::Dihydropyran)
                        && fused_run(p, 2, 5, RS::Chromane, R::Benzene)
                        && !p.in_ring(5)
                },
                &[M::SixOxygenatedChromaneRingOxygenWalk],
            ),
            when(
                |p| !p.in_ring(0) && fused_run(p, 1, 5, RS::Dihydrobenzofuran, R::Benzene) && !p.in_ring(5),
                &[M::FourSevenDioxygenatedAurone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 5, RS::Dihydrobenzofuran, R::Benzene)
                        && fused_run(p, 5, 6, RS::Dihydrobenzofuran, R::Dihydrofuran)
                },
                &[M::FiveOxygenatedAuroneRingOxygenWalk],
            ),
            when(
                |p| {
                    fused_run(p, 0, 2, RS::Dihydrobenzofuran, R::Dihydrofuran)
                        && fused_run(p, 2, 5, RS::Dihydrobenzofuran, R::Benzene)
                        && !p.in_ring(5)
                },
                &[M::FiveOxygenatedAuroneRingOxygenWalk],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 5, RS::Dihydrobenzofuran, R::Benzene)
                        && fused_run(p, 5, 6, RS::Dihydrobenzofuran, R::Dihydrofuran)
                },
                &[M::FiveOxygenatedAuroneRingOxygenWalk],
            ),
            when(
                |p| {
                    fused_run(p, 0, 3, RS::Dihydrobenzofuran, R::Dihydrofuran)
                        && fused_run(p, 3, 5, RS::Dihydrobenzofuran, R::Benzene)
                        && !p.in_ring(5)
                },
                &[M::FiveOxygenatedAuroneRingOxygenWalk],
            ),
            when(
                |p| !p.in_ring(0) && fused_run(p, 1, 5, RS::Coumarin, R::Benzene) && !p.in_ring(5),
                &[M::FiveEightDioxygenatedCoumarin],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 5, RS::Coumarin, R::Benzene)
                        && fused_run(p, 5, 6, RS::Coumarin, R::Pyrone)
                },
                &[M::SixOxygenatedCoumarinRingOxygenWalk],
            ),
            when(
                |p| {
                    fused_run(p, 0, 2, RS::Coumarin, R::Pyrone)
                        && fused_run(p, 2, 5, RS::Coumarin, R::Benzene)
                        && !p.in_ring(5)
                },
                &[M::SixOxygenatedCoumarinRingOxygenWalk],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 5, RS::Coumarin, R::Benzene)
                        && fused_run(p, 5, 6, RS::Coumarin, R::Pyrone)
                },
                &[M::SixOxygenatedCoumarinRingOxygenWalk],
            ),
            when(
                |p| {
                    fused_run(p, 0, 3, RS::Coumarin, R::Pyrone)
                        && fused_run(p, 3, 5, RS::Coumarin, R::Benzene)
                        && !p.in_ring(5)
                },
                &[M::SixOxygenatedCoumarinRingOxygenWalk],
            ),
            when(
                |p| !p.in_ring(0) && fused_run(p, 1, 5, RS::Xanthone, R::Benzene) && !p.in_ring(5),
                &[M::OneFourDioxygenatedXanthone],
            ),
        ],
    );

    t.add(
        "O-C:C:C-C=O",
        clauses![
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 4, RS::Chromone, R::Benzene)
                        && fused_run(p, 4, 5, RS::Chromone, R::Pyrone)
                        && !p.in_ring(5)
                },
                &[M::SixOrEightOxygenatedChromoneCarbonylWalk],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 4, RS::Chromane, R::Benzene)
                        && fused_run(p, 4, 5, RS::Chromane, R::Pyranone)
                        && !p.in_ring(5)
                },
                &[M::SixOrEightOxygenatedChromaneCarbonylWalk],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 4, RS::Dihydrobenzofuran, R::Benzene)
                        && fused_run(p, 4, 5, RS::Dihydrobenzofuran, R::Dihydrofuran)
                        && !p.in_ring(5)
                },
                &[M::FiveOrSevenOxygenatedAuroneCarbonylWalk],
            ),
            when(
                |p| !p.in_ring(0) && ring_run(p, 1, 4, R::Benzene) && open_run(p, 4, 6),
                &[M::ThreePrimeOxygenatedChalconeCarbonylWalk],
            ),
        ],
    );

    t.add(
        "O-C-C:C:C-O",
        clauses![
            when(
                |p| fused_run(p, 0, 2, RS::Chromone, R::Pyrone) && ring_run(p, 2, 5, R::Benzene) && !p.in_ring(5),
                &[M::ThreePrimeOrFivePrimeOxygenatedFlavoneRingOxygenWalk],
            ),
            when(
                |p| fused_run(p, 0, 2, RS::Chromane, R::Pyranone) && ring_run(p, 2, 5, R::Benzene) && !p.in_ring(5),
                &[M::ThreePrimeOrFivePrimeOxygenatedFlavanoneRingOxygenWalk],
            ),
            when(
                |p| {
                    fused_run(p, 0, 2, RS::Chromane, R::Dihydropyran)
                        && ring_run(p, 2, 5, R::Benzene)
                        && !p.in_ring(5)
                },
                &[M::ThreePrimeOrFivePrimeOxygenatedFlavanThreeOlRingOxygenWalk],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 3, RS::Coumarin, R::Pyrone)
                        && fused_run(p, 3, 5, RS::Coumarin, R::Benzene)
                        && !p.in_ring(5)
                },
                &[M::FourSixDioxygenatedCoumarin],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 4, RS::Coumarin, R::Pyrone)
                        && fused_run(p, 4, 5, RS::Coumarin, R::Benzene)
                        && !p.in_ring(5)
                },
                &[M::FourEightDioxygenatedCoumarin],
            ),
        ],
    );

    t.add(
        "O-C:C-C-C=O",
        clauses![when(
            |p| {
                !p.in_ring(0)
                    && ring_run(p, 1, 3, R::Benzene)
                    && fused_run(p, 3, 5, RS::Chromone, R::Pyrone)
                    && !p.in_ring(5)
            },
            &[M::TwoPrimeOxygenatedIsoflavoneCarbonylWalk],
        )],
    );

    t.add(
        "O-C:C-O-C=O",
        clauses![when(
            |p| {
                !p.in_ring(0)
                    && fused_run(p, 1, 3, RS::Coumarin, R::Benzene)
                    && fused_run(p, 3, 5, RS::Coumarin, R::Pyrone)
                    && !p.in_ring(5)
            },
            &[M::EightOxygenatedCoumarinCarbonylWalk],
        )],
    );

    t.add(
        "O-C:C:C:C=O",
        clauses![when(
            |p| {
                !p.in_ring(0)
                    && fused_run(p, 1, 4, RS::Xanthone, R::Benzene)
                    && fused_run(p, 4, 5, RS::Xanthone, R::Pyrone)
                    && !p.in_ring(5)
            },
            &[M::TwoOrFourOrFiveOrSevenOxygenatedXanthoneCarbonylWalk],
        )],
    );

    t.add(
        "O-C:C:C:C:O",
        clauses![when(
            |p| {
                !p.in_ring(0)
                    && fused_run(p, 1, 5, RS::Xanthone, R::Benzene)
                    && fused_run(p, 5, 6, RS::Xanthone, R::Pyrone)
            },
            &[M::TwoOrSevenOxygenatedXanthoneRingOxygenWalk],
        )],
    );
}

fn seven(t: &mut RuleTable) {
    t.add(
        "O-C-C-C:C:C-O",
        clauses![
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 4, RS::Chromone, R::Pyrone)
                        && fused_run(p, 4, 6, RS::Chromone, R::Benzene)
                        && !p.in_ring(6)
                },
                &[M::ThreeSixDioxygenatedFlavone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 5, RS::Chromone, R::Pyrone)
                        && fused_run(p, 5, 6, RS::Chromone, R::Benzene)
                        && !p.in_ring(6)
                },
                &[M::ThreeEightDioxygenatedFlavone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 4, RS::Chromane, R::Pyranone)
                        && fused_run(p, 4, 6, RS::Chromane, R::Benzene)
                        && !p.in_ring(6)
                },
                &[M::ThreeSixDioxygenatedFlavanone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 5, RS::Chromane, R::Pyranone)
                        && fused_run(p, 5, 6, RS::Chromane, R::Benzene)
                        && !p.in_ring(6)
                },
                &[M::ThreeEightDioxygenatedFlavanone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 3, RS::Chromane, R::Pyranone)
                        && ring_run(p, 3, 6, R::Benzene)
                        && !p.in_ring(6)
                },
                &[M::ThreeThreePrimeOrThreeFivePrimeDioxygenatedFlavanone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 4, RS::Chromane, R::Dihydropyran)
                        && fused_run(p, 4, 6, RS::Chromane, R::Benzene)
                        && !p.in_ring(6)
                },
                &[M::ThreeSixDioxygenatedFlavanThreeOl],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 5, RS::Chromane, R::Dihydropyran)
                        && fused_run(p, 5, 6, RS::Chromane, R::Benzene)
                        && !p.in_ring(6)
                },
                &[M::ThreeEightDioxygenatedFlavanThreeOl],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 3, RS::Chromane, R::Dihydropyran)
                        && ring_run(p, 3, 6, R::Benzene)
                        && !p.in_ring(6)
                },
                &[M::ThreeThreePrimeOrThreeFivePrimeDioxygenatedFlavanThreeOl],
            ),
        ],
    );

    t.add(
        "O-C:C-O-C=C-O",
        clauses![when(
            |p| {
                !p.in_ring(0)
                    && fused_run(p, 1, 3, RS::Chromone, R::Benzene)
                    && fused_run(p, 3, 6, RS::Chromone, R::Pyrone)
                    && !p.in_ring(6)
            },
            &[M::ThreeEightDioxygenatedFlavone],
        )],
    );

    t.add(
        "O-C:C:C-C=C-O",
        clauses![
            when(
                |p| {
                    !p.in_ring(0)
                        && ring_run(p, 1, 4, R::Benzene)
                        && fused_run(p, 4, 6, RS::Chromone, R::Pyrone)
                        && !p.in_ring(6)
                },
                &[M::ThreeThreePrimeOrThreeFivePrimeDioxygenatedFlavone],
            ),
            when(
                |p| !p.in_ring(0) && ring_run(p, 1, 4, R::Benzene) && fused_run(p, 4, 7, RS::Chromone, R::Pyrone),
                &[M::ThreePrimeOrFivePrimeOxygenatedIsoflavoneRingOxygenWalk],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && ring_run(p, 1, 4, R::Benzene)
                        && !p.in_ring(4)
                        && fused_run(p, 5, 7, RS::Dihydrobenzofuran, R::Dihydrofuran)
                },
                &[M::ThreePrimeOrFivePrimeOxygenatedAuroneRingOxygenWalk],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 4, RS::Coumarin, R::Benzene)
                        && fused_run(p, 4, 6, RS::Coumarin, R::Pyrone)
                        && !p.in_ring(6)
                },
                &[M::ThreeSixOrThreeEightDioxygenatedCoumarin],
            ),
        ],
    );

    t.add(
        "O-C:C:C:C-C=O",
        clauses![
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 5, RS::Chromone, R::Benzene)
                        && fused_run(p, 5, 6, RS::Chromone, R::Pyrone)
                        && !p.in_ring(6)
                },
                &[M::SevenOxygenatedChromoneCarbonylWalk],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 5, RS::Chromane, R::Benzene)
                        && fused_run(p, 5, 6, RS::Chromane, R::Pyranone)
                        && !p.in_ring(6)
                },
                &[M::SevenOxygenatedChromaneCarbonylWalk],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 5, RS::Dihydrobenzofuran, R::Benzene)
                        && fused_run(p, 5, 6, RS::Dihydrobenzofuran, R::Dihydrofuran)
                        && !p.in_ring(6)
                },
                &[M::SixOxygenatedAuroneCarbonylWalk],
            ),
            when(
                |p| !p.in_ring(0) && ring_run(p, 1, 5, R::Benzene) && open_run(p, 5, 7),
                &[M::FourPrimeOxygenatedChalconeCarbonylWalk],
            ),
        ],
    );

    t.add(
        "O-C:C-C=C-C=O",
        clauses![
            when(
                |p| {
                    !p.in_ring(0)
                        && ring_run(p, 1, 3, R::Benzene)
                        && fused_run(p, 3, 6, RS::Chromone, R::Pyrone)
                        && !p.in_ring(6)
                },
                &[M::TwoPrimeOxygenatedFlavoneCarbonylWalk],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && ring_run(p, 1, 3, R::Benzene)
                        && !p.in_ring(3)
                        && fused_run(p, 4, 6, RS::Dihydrobenzofuran, R::Dihydrofuran)
                        && !p.in_ring(6)
                },
                &[M::TwoPrimeOxygenatedAuroneCarbonylWalk],
            ),
            when(
                |p| !p.in_ring(0) && ring_run(p, 1, 3, R::Benzene) && open_run(p, 3, 7),
                &[M::TwoOxygenatedChalconeCarbonylWalk],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 3, RS::Coumarin, R::Benzene)
                        && fused_run(p, 3, 6, RS::Coumarin, R::Pyrone)
                        && !p.in_ring(6)
                },
                &[M::FiveOxygenatedCoumarinCarbonylWalk],
            ),
        ],
    );

    t.add(
        "O-C-C:C:C:C-O",
        clauses![
            when(
                |p| fused_run(p, 0, 2, RS::Chromone, R::Pyrone) && ring_run(p, 2, 6, R::Benzene) && !p.in_ring(6),
                &[M::FourPrimeOxygenatedFlavoneRingOxygenWalk],
            ),
            when(
                |p| fused_run(p, 0, 2, RS::Chromane, R::Pyranone) && ring_run(p, 2, 6, R::Benzene) && !p.in_ring(6),
                &[M::FourPrimeOxygenatedFlavanoneRingOxygenWalk],
            ),
            when(
                |p| {
                    fused_run(p, 0, 2, RS::Chromane, R::Dihydropyran)
                        && ring_run(p, 2, 6, R::Benzene)
                        && !p.in_ring(6)
                },
                &[M::FourPrimeOxygenatedFlavanThreeOlRingOxygenWalk],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 3, RS::Coumarin, R::Pyrone)
                        && fused_run(p, 3, 6, RS::Coumarin, R::Benzene)
                        && !p.in_ring(6)
                },
                &[M::FourSevenDioxygenatedCoumarin],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 4, RS::Coumarin, R::Pyrone)
                        && fused_run(p, 4, 6, RS::Coumarin, R::Benzene)
                        && !p.in_ring(6)
                },
                &[M::FourSevenDioxygenatedCoumarin],
            ),
        ],
    );

    t.add(
        "O-C:C:C-C-C=O",
        clauses![when(
            |p| {
                !p.in_ring(0)
                    && ring_run(p, 1, 4, R::Benzene)
                    && fused_run(p, 4, 6, RS::Chromone, R::Pyrone)
                    && !p.in_ring(6)
            },
            &[M::ThreePrimeOrFivePrimeOxygenatedIsoflavoneCarbonylWalk],
        )],
    );

    t.add(
        "O-C-C-O-C:C-O",
        clauses![
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 5, RS::Chromane, R::Pyranone)
                        && fused_run(p, 5, 6, RS::Chromane, R::Benzene)
                        && !p.in_ring(6)
                },
                &[M::ThreeEightDioxygenatedFlavanone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 5, RS::Chromane, R::Dihydropyran)
                        && fused_run(p, 5, 6, RS::Chromane, R::Benzene)
                        && !p.in_ring(6)
                },
                &[M::ThreeEightDioxygenatedFlavanThreeOl],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 5, RS::Coumarin, R::Pyrone)
                        && fused_run(p, 5, 6, RS::Coumarin, R::Benzene)
                        && !p.in_ring(6)
                },
                &[M::ThreeEightDioxygenatedCoumarin],
            ),
        ],
    );

    t.add(
        "O-C:C-C-C-C=O",
        clauses![when(
            |p| {
                !p.in_ring(0)
                    && ring_run(p, 1, 3, R::Benzene)
                    && fused_run(p, 3, 6, RS::Chromane, R::Pyranone)
                    && !p.in_ring(6)
            },
            &[M::TwoPrimeOxygenatedFlavanoneCarbonylWalk],
        )],
    );

    t.add(
        "O-C:C:C-O-C=O",
        clauses![when(
            |p| {
                !p.in_ring(0)
                    && fused_run(p, 1, 4, RS::Coumarin, R::Benzene)
                    && fused_run(p, 4, 6, RS::Coumarin, R::Pyrone)
                    && !p.in_ring(6)
            },
            &[M::FiveOrSevenOxygenatedCoumarinCarbonylWalk],
        )],
    );

    t.add(
        "O-C:C:C:C:C-O",
        clauses![when(
            |p| {
                !p.in_ring(0)
                    && fused_run(p, 1, 3, RS::Xanthone, R::Benzene)
                    && fused_run(p, 3, 5, RS::Xanthone, R::Pyrone)
                    && fused_run(p, 5, 6, RS::Xanthone, R::Benzene)
                    && !p.in_ring(6)
            },
            &[M::OneEightDioxygenatedXanthone],
        )],
    );

    t.add(
        "O-C:C:O:C:C-O",
        clauses![when(
            |p| {
                !p.in_ring(0)
                    && fused_run(p, 1, 3, RS::Xanthone, R::Benzene)
                    && fused_run(p, 3, 5, RS::Xanthone, R::Pyrone)
                    && fused_run(p, 5, 6, RS::Xanthone, R::Benzene)
                    && !p.in_ring(6)
            },
            &[M::FourFiveDioxygenatedXanthone],
        )],
    );

    t.add(
        "O-C:C:C:C:C=O",
        clauses![when(
            |p| {
                !p.in_ring(0)
                    && fused_run(p, 1, 5, RS::Xanthone, R::Benzene)
                    && fused_run(p, 5, 6, RS::Xanthone, R::Pyrone)
                    && !p.in_ring(6)
            },
            &[M::ThreeOrSixOxygenatedXanthoneCarbonylWalk],
        )],
    );
}

fn eight(t: &mut RuleTable) {
    t.add(
        "O-C-C-C:C:C:C-O",
        clauses![
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 4, RS::Chromone, R::Pyrone)
                        && fused_run(p, 4, 7, RS::Chromone, R::Benzene)
                        && !p.in_ring(7)
                },
                &[M::ThreeSevenDioxygenatedFlavone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 5, RS::Chromone, R::Pyrone)
                        && fused_run(p, 5, 7, RS::Chromone, R::Benzene)
                        && !p.in_ring(7)
                },
                &[M::ThreeSevenDioxygenatedFlavone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 4, RS::Chromane, R::Pyranone)
                        && fused_run(p, 4, 7, RS::Chromane, R::Benzene)
                        && !p.in_ring(7)
                },
                &[M::ThreeSevenDioxygenatedFlavanone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 5, RS::Chromane, R::Pyranone)
                        && fused_run(p, 5, 7, RS::Chromane, R::Benzene)
                        && !p.in_ring(7)
                },
                &[M::ThreeSevenDioxygenatedFlavanone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 3, RS::Chromane, R::Pyranone)
                        && ring_run(p, 3, 7, R::Benzene)
                        && !p.in_ring(7)
                },
                &[M::ThreeFourPrimeDioxygenatedFlavanone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 4, RS::Chromane, R::Dihydropyran)
                        && fused_run(p, 4, 7, RS::Chromane, R::Benzene)
                        && !p.in_ring(7)
                },
                &[M::ThreeSevenDioxygenatedFlavanThreeOl],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 5, RS::Chromane, R::Dihydropyran)
                        && fused_run(p, 5, 7, RS::Chromane, R::Benzene)
                        && !p.in_ring(7)
                },
                &[M::ThreeSevenDioxygenatedFlavanThreeOl],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 3, RS::Chromane, R::Dihydropyran)
                        && ring_run(p, 3, 7, R::Benzene)
                        && !p.in_ring(7)
                },
                &[M::ThreeFourPrimeDioxygenatedFlavanThreeOl],
            ),
        ],
    );

    t.add(
        "O-C:C:C-O-C=C-O",
        clauses![when(
            |p| {
                !p.in_ring(0)
                    && fused_run(p, 1, 4, RS::Chromone, R::Benzene)
                    && fused_run(p, 4, 7, RS::Chromone, R::Pyrone)
                    && !p.in_ring(7)
            },
            &[M::ThreeSevenDioxygenatedFlavone],
        )],
    );

    t.add(
        "O-C:C:C:C-C=C-O",
        clauses![
            when(
                |p| {
                    !p.in_ring(0)
                        && ring_run(p, 1, 5, R::Benzene)
                        && fused_run(p, 5, 7, RS::Chromone, R::Pyrone)
                        && !p.in_ring(7)
                },
                &[M::ThreeFourPrimeDioxygenatedFlavone],
            ),
            when(
                |p| !p.in_ring(0) && ring_run(p, 1, 5, R::Benzene) && fused_run(p, 5, 8, RS::Chromone, R::Pyrone),
                &[M::FourPrimeOxygenatedIsoflavoneRingOxygenWalk],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && ring_run(p, 1, 5, R::Benzene)
                        && !p.in_ring(5)
                        && fused_run(p, 6, 8, RS::Dihydrobenzofuran, R::Dihydrofuran)
                },
                &[M::FourPrimeOxygenatedAuroneRingOxygenWalk],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 5, RS::Coumarin, R::Benzene)
                        && fused_run(p, 5, 7, RS::Coumarin, R::Pyrone)
                        && !p.in_ring(7)
                },
                &[M::ThreeSevenDioxygenatedCoumarin],
            ),
        ],
    );

    t.add(
        "O-C:C-C-O-C:C-O",
        clauses![
            when(
                |p| {
                    !p.in_ring(0)
                        && ring_run(p, 1, 3, R::Benzene)
                        && fused_run(p, 3, 6, RS::Chromone, R::Pyrone)
                        && fused_run(p, 6, 7, RS::Chromone, R::Benzene)
                        && !p.in_ring(7)
                },
                &[M::EightTwoPrimeDioxygenatedFlavone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && ring_run(p, 1, 3, R::Benzene)
                        && fused_run(p, 3, 6, RS::Chromane, R::Pyranone)
                        && fused_run(p, 6, 7, RS::Chromane, R::Benzene)
                        && !p.in_ring(7)
                },
                &[M::EightTwoPrimeDioxygenatedFlavanone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && ring_run(p, 1, 3, R::Benzene)
                        && fused_run(p, 3, 6, RS::Chromane, R::Dihydropyran)
                        && fused_run(p, 6, 7, RS::Chromane, R::Benzene)
                        && !p.in_ring(7)
                },
                &[M::EightTwoPrimeDioxygenatedFlavanThreeOl],
            ),
        ],
    );

    t.add(
        "O-C:C:C-C=C-C=O",
        clauses![
            when(
                |p| {
                    !p.in_ring(0)
                        && ring_run(p, 1, 4, R::Benzene)
                        && fused_run(p, 4, 7, RS::Chromone, R::Pyrone)
                        && !p.in_ring(7)
                },
                &[M::ThreePrimeOrFivePrimeOxygenatedFlavoneCarbonylWalk],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && ring_run(p, 1, 4, R::Benzene)
                        && !p.in_ring(4)
                        && fused_run(p, 5, 7, RS::Dihydrobenzofuran, R::Dihydrofuran)
                        && !p.in_ring(7)
                },
                &[M::ThreePrimeOrFivePrimeOxygenatedAuroneCarbonylWalk],
            ),
            when(
                |p| !p.in_ring(0) && ring_run(p, 1, 4, R::Benzene) && open_run(p, 4, 8),
                &[M::ThreeOxygenatedChalconeCarbonylWalk],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 4, RS::Coumarin, R::Benzene)
                        && fused_run(p, 4, 7, RS::Coumarin, R::Pyrone)
                        && !p.in_ring(7)
                },
                &[M::SixOxygenatedCoumarinCarbonylWalk],
            ),
        ],
    );

    t.add(
        "O-C:C-C-C-C:C-O",
        clauses![
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 3, RS::Chromone, R::Benzene)
                        && fused_run(p, 3, 5, RS::Chromone, R::Pyrone)
                        && ring_run(p, 5, 7, R::Benzene)
                        && !p.in_ring(7)
                },
                &[M::FiveTwoPrimeDioxygenatedIsoflavone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && ring_run(p, 1, 3, R::Benzene)
                        && fused_run(p, 3, 6, RS::Chromone, R::Pyrone)
                        && fused_run(p, 6, 7, RS::Chromone, R::Benzene)
                        && !p.in_ring(7)
                },
                &[M::FiveTwoPrimeDioxygenatedIsoflavone],
            ),
        ],
    );

    t.add(
        "O-C:C:C:C-C-C=O",
        clauses![when(
            |p| {
                !p.in_ring(0)
                    && ring_run(p, 1, 5, R::Benzene)
                    && fused_run(p, 5, 7, RS::Chromone, R::Pyrone)
                    && !p.in_ring(7)
            },
            &[M::FourPrimeOxygenatedIsoflavoneCarbonylWalk],
        )],
    );

    t.add(
        "O-C-C-O-C:C:C-O",
        clauses![
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 5, RS::Chromane, R::Pyranone)
                        && fused_run(p, 5, 7, RS::Chromane, R::Benzene)
                        && !p.in_ring(7)
                },
                &[M::ThreeSevenDioxygenatedFlavanone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 5, RS::Chromane, R::Dihydropyran)
                        && fused_run(p, 5, 7, RS::Chromane, R::Benzene)
                        && !p.in_ring(7)
                },
                &[M::ThreeSevenDioxygenatedFlavanThreeOl],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 5, RS::Coumarin, R::Pyrone)
                        && fused_run(p, 5, 7, RS::Coumarin, R::Benzene)
                        && !p.in_ring(7)
                },
                &[M::ThreeSevenDioxygenatedCoumarin],
            ),
        ],
    );

    t.add(
        "O-C:C:C-C-C-C=O",
        clauses![when(
            |p| {
                !p.in_ring(0)
                    && ring_run(p, 1, 4, R::Benzene)
                    && fused_run(p, 4, 7, RS::Chromane, R::Pyranone)
                    && !p.in_ring(7)
            },
            &[M::ThreePrimeOrFivePrimeOxygenatedFlavanoneCarbonylWalk],
        )],
    );

    t.add(
        "O-C:C:C:C-O-C=O",
        clauses![when(
            |p| {
                !p.in_ring(0)
                    && fused_run(p, 1, 5, RS::Coumarin, R::Benzene)
                    && fused_run(p, 5, 7, RS::Coumarin, R::Pyrone)
                    && !p.in_ring(7)
            },
            &[M::SixOxygenatedCoumarinCarbonylWalk],
        )],
    );

    t.add(
        "O-C:C:C:C:C:C-O",
        clauses![
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 3, RS::Xanthone, R::Benzene)
                        && fused_run(p, 3, 6, RS::Xanthone, R::Pyrone)
                        && fused_run(p, 6, 7, RS::Xanthone, R::Benzene)
                        && !p.in_ring(7)
                },
                &[M::OneFiveDioxygenatedXanthone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 4, RS::Xanthone, R::Benzene)
                        && fused_run(p, 4, 6, RS::Xanthone, R::Pyrone)
                        && fused_run(p, 6, 7, RS::Xanthone, R::Benzene)
                        && !p.in_ring(7)
                },
                &[M::OneFiveDioxygenatedXanthone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 3, RS::Xanthone, R::Benzene)
                        && fused_run(p, 3, 5, RS::Xanthone, R::Pyrone)
                        && fused_run(p, 5, 7, RS::Xanthone, R::Benzene)
                        && !p.in_ring(7)
                },
                &[M::OneSevenDioxygenatedXanthone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 4, RS::Xanthone, R::Benzene)
                        && fused_run(p, 4, 6, RS::Xanthone, R::Pyrone)
                        && fused_run(p, 6, 7, RS::Xanthone, R::Benzene)
                        && !p.in_ring(7)
                },
                &[M::OneSevenDioxygenatedXanthone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 4, RS::Xanthone, R::Benzene)
                        && fused_run(p, 4, 6, RS::Xanthone, R::Pyrone)
                        && fused_run(p, 6, 7, RS::Xanthone, R::Benzene)
                        && !p.in_ring(7)
                },
                &[M::TwoEightDioxygenatedXanthone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 3, RS::Xanthone, R::Benzene)
                        && fused_run(p, 3, 5, RS::Xanthone, R::Pyrone)
                        && fused_run(p, 5, 7, RS::Xanthone, R::Benzene)
                        && !p.in_ring(7)
                },
                &[M::TwoEightDioxygenatedXanthone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 4, RS::Xanthone, R::Benzene)
                        && fused_run(p, 4, 6, RS::Xanthone, R::Pyrone)
                        && fused_run(p, 6, 7, RS::Xanthone, R::Benzene)
                        && !p.in_ring(7)
                },
                &[M::FourEightDioxygenatedXanthone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 3, RS::Xanthone, R::Benzene)
                        && fused_run(p, 3, 6, RS::Xanthone, R::Pyrone)
                        && fused_run(p, 6, 7, RS::Xanthone, R::Benzene)
                        && !p.in_ring(7)
                },
                &[M::FourEightDioxygenatedXanthone],
            ),
        ],
    );

    t.add(
        "O-C:C:C:O:C:C-O",
        clauses![when(
            |p| {
                !p.in_ring(0)
                    && fused_run(p, 1, 4, RS::Xanthone, R::Benzene)
                    && fused_run(p, 4, 6, RS::Xanthone, R::Pyrone)
                    && fused_run(p, 6, 7, RS::Xanthone, R::Benzene)
                    && !p.in_ring(7)
            },
            &[M::OneFiveOrThreeFiveOrFourSixOrFourEightDioxygenatedXanthone],
        )],
    );
}

fn nine(t: &mut RuleTable) {
    t.add(
        "O-C:C-C-O-C:C:C-O",
        clauses![
            when(
                |p| {
                    !p.in_ring(0)
                        && ring_run(p, 1, 3, R::Benzene)
                        && fused_run(p, 3, 7, RS::Chromone, R::Pyrone)
                        && fused_run(p, 7, 8, RS::Chromone, R::Benzene)
                        && !p.in_ring(8)
                },
                &[M::FiveTwoPrimeDioxygenatedFlavone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && ring_run(p, 1, 3, R::Benzene)
                        && fused_run(p, 3, 6, RS::Chromone, R::Pyrone)
                        && fused_run(p, 6, 8, RS::Chromone, R::Benzene)
                        && !p.in_ring(8)
                },
                &[M::SevenTwoPrimeDioxygenatedFlavone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && ring_run(p, 1, 3, R::Benzene)
                        && fused_run(p, 3, 7, RS::Chromane, R::Pyranone)
                        && fused_run(p, 7, 8, RS::Chromane, R::Benzene)
                        && !p.in_ring(8)
                },
                &[M::FiveTwoPrimeDioxygenatedFlavanone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && ring_run(p, 1, 3, R::Benzene)
                        && fused_run(p, 3, 6, RS::Chromane, R::Pyranone)
                        && fused_run(p, 6, 8, RS::Chromane, R::Benzene)
                        && !p.in_ring(8)
                },
                &[M::SevenTwoPrimeDioxygenatedFlavanone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && ring_run(p, 1, 3, R::Benzene)
                        && fused_run(p, 3, 7, RS::Chromane, R::Dihydropyran)
                        && fused_run(p, 7, 8, RS::Chromane, R::Benzene)
                        && !p.in_ring(8)
                },
                &[M::FiveTwoPrimeDioxygenatedFlavanThreeOl],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && ring_run(p, 1, 3, R::Benzene)
                        && fused_run(p, 3, 6, RS::Chromane, R::Dihydropyran)
                        && fused_run(p, 6, 8, RS::Chromane, R::Benzene)
                        && !p.in_ring(8)
                },
                &[M::SevenTwoPrimeDioxygenatedFlavanThreeOl],
            ),
        ],
    );

    t.add(
        "O-C:C-C-C=C-C:C-O",
        clauses![
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 3, RS::Chromone, R::Benzene)
                        && fused_run(p, 3, 6, RS::Chromone, R::Pyrone)
                        && ring_run(p, 6, 8, R::Benzene)
                        && !p.in_ring(8)
                },
                &[M::FiveTwoPrimeDioxygenatedFlavone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 3, RS::Dihydrobenzofuran, R::Benzene)
                        && fused_run(p, 3, 5, RS::Dihydrobenzofuran, R::Dihydrofuran)
                        && !p.in_ring(5)
                        && ring_run(p, 6, 8, R::Benzene)
                        && !p.in_ring(8)
                },
                &[M::FourTwoPrimeDioxygenatedAurone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && ring_run(p, 1, 3, R::Benzene)
                        && open_run(p, 3, 6)
                        && ring_run(p, 6, 8, R::Benzene)
                        && !p.in_ring(8)
                },
                &[M::TwoTwoPrimeDioxygenatedChalcone],
            ),
        ],
    );

    t.add(
        "O-C:C-O-C-C:C:C-O",
        clauses![
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 3, RS::Chromone, R::Benzene)
                        && fused_run(p, 3, 5, RS::Chromone, R::Pyrone)
                        && ring_run(p, 5, 8, R::Benzene)
                        && !p.in_ring(8)
                },
                &[M::EightThreePrimeOrEightFivePrimeDioxygenatedFlavone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 3, RS::Chromane, R::Benzene)
                        && fused_run(p, 3, 5, RS::Chromane, R::Pyranone)
                        && ring_run(p, 5, 8, R::Benzene)
                        && !p.in_ring(8)
                },
                &[M::EightThreePrimeOrEightFivePrimeDioxygenatedFlavanone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 3, RS::Chromane, R::Benzene)
                        && fused_run(p, 3, 5, RS::Chromane, R::Dihydropyran)
                        && ring_run(p, 5, 8, R::Benzene)
                        && !p.in_ring(8)
                },
                &[M::EightThreePrimeOrEightFivePrimeDioxygenatedFlavanThreeOl],
            ),
        ],
    );

    t.add(
        "O-C:C:C:C-C=C-C=O",
        clauses![
            when(
                |p| {
                    !p.in_ring(0)
                        && ring_run(p, 1, 5, R::Benzene)
                        && fused_run(p, 5, 8, RS::Chromone, R::Pyrone)
                        && !p.in_ring(8)
                },
                &[M::FourPrimeOxygenatedFlavoneCarbonylWalk],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && ring_run(p, 1, 5, R::Benzene)
                        && !p.in_ring(5)
                        && fused_run(p, 6, 8, RS::Dihydrobenzofuran, R::Dihydrofuran)
                        && !p.in_ring(8)
                },
                &[M::FourPrimeOxygenatedAuroneCarbonylWalk],
            ),
            when(
                |p| !p.in_ring(0) && ring_run(p, 1, 5, R::Benzene) && open_run(p, 5, 9),
                &[M::FourOxygenatedChalconeCarbonylWalk],
            ),
        ],
    );

    t.add(
        "O-C:C-C-C-C:C:C-O",
        clauses![
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 3, RS::Chromone, R::Benzene)
                        && fused_run(p, 3, 5, RS::Chromone, R::Pyrone)
                        && ring_run(p, 5, 8, R::Benzene)
                        && !p.in_ring(8)
                },
                &[M::FiveThreePrimeOrFiveFivePrimeDioxygenatedIsoflavone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && ring_run(p, 1, 3, R::Benzene)
                        && fused_run(p, 3, 6, RS::Chromone, R::Pyrone)
                        && fused_run(p, 6, 8, RS::Chromone, R::Benzene)
                        && !p.in_ring(8)
                },
                &[M::SixTwoPrimeDioxygenatedIsoflavone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && ring_run(p, 1, 3, R::Benzene)
                        && fused_run(p, 3, 7, RS::Chromone, R::Pyrone)
                        && fused_run(p, 7, 8, RS::Chromone, R::Benzene)
                        && !p.in_ring(8)
                },
                &[M::EightTwoPrimeDioxygenatedIsoflavone],
            ),
        ],
    );

    t.add(
        "O-C:C-C=C-O-C:C-O",
        clauses![
            when(
                |p| {
                    !p.in_ring(0)
                        && ring_run(p, 1, 3, R::Benzene)
                        && fused_run(p, 3, 7, RS::Chromone, R::Pyrone)
                        && fused_run(p, 7, 8, RS::Chromone, R::Benzene)
                        && !p.in_ring(8)
                },
                &[M::EightTwoPrimeDioxygenatedIsoflavone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && ring_run(p, 1, 3, R::Benzene)
                        && !p.in_ring(3)
                        && fused_run(p, 4, 7, RS::Dihydrobenzofuran, R::Dihydrofuran)
                        && fused_run(p, 7, 8, RS::Dihydrobenzofuran, R::Benzene)
                        && !p.in_ring(8)
                },
                &[M::SevenTwoPrimeDioxygenatedAurone],
            ),
        ],
    );

    t.add(
        "O-C:C-C-C-C-C:C-O",
        clauses![
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 3, RS::Chromane, R::Benzene)
                        && fused_run(p, 3, 6, RS::Chromane, R::Pyranone)
                        && ring_run(p, 6, 8, R::Benzene)
                        && !p.in_ring(8)
                },
                &[M::FiveTwoPrimeDioxygenatedFlavanone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && ring_run(p, 1, 3, R::Benzene)
                        && fused_run(p, 3, 7, RS::Chromane, R::Pyranone)
                        && fused_run(p, 7, 8, RS::Chromane, R::Benzene)
                        && !p.in_ring(8)
                },
                &[M::FiveTwoPrimeDioxygenatedFlavanone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 3, RS::Chromane, R::Benzene)
                        && fused_run(p, 3, 6, RS::Chromane, R::Dihydropyran)
                        && ring_run(p, 6, 8, R::Benzene)
                        && !p.in_ring(8)
                },
                &[M::FiveTwoPrimeDioxygenatedFlavanThreeOl],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && ring_run(p, 1, 3, R::Benzene)
                        && fused_run(p, 3, 7, RS::Chromane, R::Dihydropyran)
                        && fused_run(p, 7, 8, RS::Chromane, R::Benzene)
                        && !p.in_ring(8)
                },
                &[M::FiveTwoPrimeDioxygenatedFlavanThreeOl],
            ),
        ],
    );

    t.add(
        "O-C:C:C:C-C-C-C=O",
        clauses![when(
            |p| {
                !p.in_ring(0)
                    && ring_run(p, 1, 5, R::Benzene)
                    && fused_run(p, 5, 8, RS::Chromane, R::Pyranone)
                    && !p.in_ring(8)
            },
            &[M::FourPrimeOxygenatedFlavanoneCarbonylWalk],
        )],
    );

    t.add(
        "O-C:C:C:C:C:C:C-O",
        clauses![
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 3, RS::Xanthone, R::Benzene)
                        && fused_run(p, 3, 5, RS::Xanthone, R::Pyrone)
                        && fused_run(p, 5, 8, RS::Xanthone, R::Benzene)
                        && !p.in_ring(8)
                },
                &[M::OneSixDioxygenatedXanthone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 5, RS::Xanthone, R::Benzene)
                        && fused_run(p, 5, 7, RS::Xanthone, R::Pyrone)
                        && fused_run(p, 7, 8, RS::Xanthone, R::Benzene)
                        && !p.in_ring(8)
                },
                &[M::OneSixDioxygenatedXanthone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 3, RS::Xanthone, R::Benzene)
                        && fused_run(p, 3, 6, RS::Xanthone, R::Pyrone)
                        && fused_run(p, 6, 8, RS::Xanthone, R::Benzene)
                        && !p.in_ring(8)
                },
                &[M::OneSixDioxygenatedXanthone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 5, RS::Xanthone, R::Benzene)
                        && fused_run(p, 5, 7, RS::Xanthone, R::Pyrone)
                        && fused_run(p, 7, 8, RS::Xanthone, R::Benzene)
                        && !p.in_ring(8)
                },
                &[M::OneSixDioxygenatedXanthone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 4, RS::Xanthone, R::Benzene)
                        && fused_run(p, 4, 7, RS::Xanthone, R::Pyrone)
                        && fused_run(p, 7, 8, RS::Xanthone, R::Benzene)
                        && !p.in_ring(8)
                },
                &[M::TwoFiveDioxygenatedXanthone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 4, RS::Xanthone, R::Benzene)
                        && fused_run(p, 4, 6, RS::Xanthone, R::Pyrone)
                        && fused_run(p, 6, 8, RS::Xanthone, R::Benzene)
                        && !p.in_ring(8)
                },
                &[M::TwoFiveDioxygenatedXanthone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 4, RS::Xanthone, R::Benzene)
                        && fused_run(p, 4, 6, RS::Xanthone, R::Pyrone)
                        && fused_run(p, 6, 8, RS::Xanthone, R::Benzene)
                        && !p.in_ring(8)
                },
                &[M::TwoSevenDioxygenatedXanthone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 5, RS::Xanthone, R::Benzene)
                        && fused_run(p, 5, 7, RS::Xanthone, R::Pyrone)
                        && fused_run(p, 7, 8, RS::Xanthone, R::Benzene)
                        && !p.in_ring(8)
                },
                &[M::ThreeEightDioxygenatedXanthone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 3, RS::Xanthone, R::Benzene)
                        && fused_run(p, 3, 5, RS::Xanthone, R::Pyrone)
                        && fused_run(p, 5, 8, RS::Xanthone, R::Benzene)
                        && !p.in_ring(8)
                },
                &[M::ThreeEightDioxygenatedXanthone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 5, RS::Xanthone, R::Benzene)
                        && fused_run(p, 5, 7, RS::Xanthone, R::Pyrone)
                        && fused_run(p, 7, 8, RS::Xanthone, R::Benzene)
                        && !p.in_ring(8)
                },
                &[M::ThreeEightDioxygenatedXanthone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 3, RS::Xanthone, R::Benzene)
                        && fused_run(p, 3, 6, RS::Xanthone, R::Pyrone)
                        && fused_run(p, 6, 8, RS::Xanthone, R::Benzene)
                        && !p.in_ring(8)
                },
                &[M::ThreeEightDioxygenatedXanthone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 4, RS::Xanthone, R::Benzene)
                        && fused_run(p, 4, 6, RS::Xanthone, R::Pyrone)
                        && fused_run(p, 6, 8, RS::Xanthone, R::Benzene)
                        && !p.in_ring(8)
                },
                &[M::FourSevenDioxygenatedXanthone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 4, RS::Xanthone, R::Benzene)
                        && fused_run(p, 4, 7, RS::Xanthone, R::Pyrone)
                        && fused_run(p, 7, 8, RS::Xanthone, R::Benzene)
                        && !p.in_ring(8)
                },
                &[M::FourSevenDioxygenatedXanthone],
            ),
        ],
    );

    t.add(
        "O-C:C:C:O:C:C:C-O",
        clauses![
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 4, RS::Xanthone, R::Benzene)
                        && fused_run(p, 4, 6, RS::Xanthone, R::Pyrone)
                        && fused_run(p, 6, 8, RS::Xanthone, R::Benzene)
                        && !p.in_ring(8)
                },
                &[M::OneSixDioxygenatedXanthone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 4, RS::Xanthone, R::Benzene)
                        && fused_run(p, 4, 7, RS::Xanthone, R::Pyrone)
                        && fused_run(p, 7, 8, RS::Xanthone, R::Benzene)
                        && !p.in_ring(8)
                },
                &[M::OneSixDioxygenatedXanthone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 4, RS::Xanthone, R::Benzene)
                        && fused_run(p, 4, 6, RS::Xanthone, R::Pyrone)
                        && fused_run(p, 6, 8, RS::Xanthone, R::Benzene)
                        && !p.in_ring(8)
                },
                &[M::ThreeSixDioxygenatedXanthone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 4, RS::Xanthone, R::Benzene)
                        && fused_run(p, 4, 7, RS::Xanthone, R::Pyrone)
                        && fused_run(p, 7, 8, RS::Xanthone, R::Benzene)
                        && !p.in_ring(8)
                },
                &[M::ThreeEightDioxygenatedXanthone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 4, RS::Xanthone, R::Benzene)
                        && fused_run(p, 4, 6, RS::Xanthone, R::Pyrone)
                        && fused_run(p, 6, 8, RS::Xanthone, R::Benzene)
                        && !p.in_ring(8)
                },
                &[M::ThreeEightDioxygenatedXanthone],
            ),
        ],
    );

    t.add(
        "O-C:C:C:C:O:C:C-O",
        clauses![when(
            |p| {
                !p.in_ring(0)
                    && fused_run(p, 1, 5, RS::Xanthone, R::Benzene)
                    && fused_run(p, 5, 7, RS::Xanthone, R::Pyrone)
                    && fused_run(p, 7, 8, RS::Xanthone, R::Benzene)
                    && !p.in_ring(8)
            },
            &[M::TwoFiveOrFourSevenDioxygenatedXanthone],
        )],
    );
}

fn ten(t: &mut RuleTable) {
    t.add(
        "O-C:C:C-C-O-C:C:C-O",
        clauses![
            when(
                |p| {
                    !p.in_ring(0)
                        && ring_run(p, 1, 4, R::Benzene)
                        && fused_run(p, 4, 8, RS::Chromone, R::Pyrone)
                        && fused_run(p, 8, 9, RS::Chromone, R::Benzene)
                        && !p.in_ring(9)
                },
                &[M::FiveThreePrimeOrFiveFivePrimeDioxygenatedFlavone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && ring_run(p, 1, 4, R::Benzene)
                        && fused_run(p, 4, 7, RS::Chromone, R::Pyrone)
                        && fused_run(p, 7, 9, RS::Chromone, R::Benzene)
                        && !p.in_ring(9)
                },
                &[M::SevenThreePrimeOrSevenFivePrimeDioxygenatedFlavone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && ring_run(p, 1, 4, R::Benzene)
                        && fused_run(p, 4, 8, RS::Chromane, R::Pyranone)
                        && fused_run(p, 8, 9, RS::Chromane, R::Benzene)
                        && !p.in_ring(9)
                },
                &[M::FiveThreePrimeOrFiveFivePrimeDioxygenatedFlavanone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && ring_run(p, 1, 4, R::Benzene)
                        && fused_run(p, 4, 7, RS::Chromane, R::Pyranone)
                        && fused_run(p, 7, 9, RS::Chromane, R::Benzene)
                        && !p.in_ring(9)
                },
                &[M::SevenThreePrimeOrSevenFivePrimeDioxygenatedFlavanone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && ring_run(p, 1, 4, R::Benzene)
                        && fused_run(p, 4, 8, RS::Chromane, R::Dihydropyran)
                        && fused_run(p, 8, 9, RS::Chromane, R::Benzene)
                        && !p.in_ring(9)
                },
                &[M::FiveThreePrimeOrFiveFivePrimeDioxygenatedFlavanThreeOl],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && ring_run(p, 1, 4, R::Benzene)
                        && fused_run(p, 4, 7, RS::Chromane, R::Dihydropyran)
                        && fused_run(p, 7, 9, RS::Chromane, R::Benzene)
                        && !p.in_ring(9)
                },
                &[M::SevenThreePrimeOrSevenFivePrimeDioxygenatedFlavanThreeOl],
            ),
        ],
    );

    t.add(
        "O-C:C-C-C=C-C:C:C-O",
        clauses![
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 3, RS::Chromone, R::Benzene)
                        && fused_run(p, 3, 6, RS::Chromone, R::Pyrone)
                        && ring_run(p, 6, 9, R::Benzene)
                        && !p.in_ring(9)
                },
                &[M::FiveThreePrimeOrFiveFivePrimeDioxygenatedFlavone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 3, RS::Dihydrobenzofuran, R::Benzene)
                        && fused_run(p, 3, 5, RS::Dihydrobenzofuran, R::Dihydrofuran)
                        && !p.in_ring(5)
                        && ring_run(p, 6, 9, R::Benzene)
                        && !p.in_ring(9)
                },
                &[M::FourThreePrimeOrFourFivePrimeDioxygenatedAurone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && ring_run(p, 1, 3, R::Benzene)
                        && open_run(p, 3, 6)
                        && ring_run(p, 6, 9, R::Benzene)
                        && !p.in_ring(9)
                },
                &[M::ThreeTwoPrimeDioxygenatedChalcone],
            ),
        ],
    );

    t.add(
        "O-C:C-C-O-C:C:C:C-O",
        clauses![
            when(
                |p| {
                    !p.in_ring(0)
                        && ring_run(p, 1, 3, R::Benzene)
                        && fused_run(p, 3, 6, RS::Chromone, R::Pyrone)
                        && fused_run(p, 6, 9, RS::Chromone, R::Benzene)
                        && !p.in_ring(9)
                },
                &[M::SixTwoPrimeDioxygenatedFlavone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && ring_run(p, 1, 3, R::Benzene)
                        && fused_run(p, 3, 7, RS::Chromone, R::Pyrone)
                        && fused_run(p, 7, 9, RS::Chromone, R::Benzene)
                        && !p.in_ring(9)
                },
                &[M::SixTwoPrimeDioxygenatedFlavone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && ring_run(p, 1, 3, R::Benzene)
                        && fused_run(p, 3, 6, RS::Chromane, R::Pyranone)
                        && fused_run(p, 6, 9, RS::Chromane, R::Benzene)
                        && !p.in_ring(9)
                },
                &[M::SixTwoPrimeDioxygenatedFlavanone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && ring_run(p, 1, 3, R::Benzene)
                        && fused_run(p, 3, 7, RS::Chromane, R::Pyranone)
                        && fused_run(p, 7, 9, RS::Chromane, R::Benzene)
                        && !p.in_ring(9)
                },
                &[M::SixTwoPrimeDioxygenatedFlavanone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && ring_run(p, 1, 3, R::Benzene)
                        && fused_run(p, 3, 7, RS::Chromane, R::Dihydropyran)
                        && fused_run(p, 7, 9, RS::Chromane, R::Benzene)
                        && !p.in_ring(9)
                },
                &[M::SixTwoPrimeDioxygenatedFlavanThreeOl],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && ring_run(p, 1, 3, R::Benzene)
                        && fused_run(p, 3, 6, RS::Chromane, R::Dihydropyran)
                        && fused_run(p, 6, 9, RS::Chromane, R::Benzene)
                        && !p.in_ring(9)
                },
                &[M::SixTwoPrimeDioxygenatedFlavanThreeOl],
            ),
        ],
    );

    t.add(
        "O-C:C-C=C-C-C:C:C-O",
        clauses![
            when(
                |p| {
                    !p.in_ring(0)
                        && ring_run(p, 1, 3, R::Benzene)
                        && fused_run(p, 3, 7, RS::Chromone, R::Pyrone)
                        && fused_run(p, 7, 9, RS::Chromone, R::Benzene)
                        && !p.in_ring(9)
                },
                &[M::SixTwoPrimeDioxygenatedFlavone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && ring_run(p, 1, 3, R::Benzene)
                        && !p.in_ring(3)
                        && fused_run(p, 4, 7, RS::Dihydrobenzofuran, R::Dihydrofuran)
                        && fused_run(p, 7, 9, RS::Dihydrobenzofuran, R::Benzene)
                        && !p.in_ring(9)
                },
                &[M::FiveTwoPrimeDioxygenatedAurone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && ring_run(p, 1, 3, R::Benzene)
                        && open_run(p, 3, 6)
                        && ring_run(p, 6, 9, R::Benzene)
                        && !p.in_ring(9)
                },
                &[M::TwoThreePrimeDioxygenatedChalcone],
            ),
        ],
    );

    t.add(
        "O-C:C-O-C-C:C:C:C-O",
        clauses![
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 3, RS::Chromone, R::Benzene)
                        && fused_run(p, 3, 5, RS::Chromone, R::Pyrone)
                        && ring_run(p, 5, 9, R::Benzene)
                        && !p.in_ring(9)
                },
                &[M::EightFourPrimeDioxygenatedFlavone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 3, RS::Chromane, R::Benzene)
                        && fused_run(p, 3, 5, RS::Chromane, R::Pyranone)
                        && ring_run(p, 5, 9, R::Benzene)
                        && !p.in_ring(9)
                },
                &[M::EightFourPrimeDioxygenatedFlavanone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 3, RS::Chromane, R::Benzene)
                        && fused_run(p, 3, 5, RS::Chromane, R::Dihydropyran)
                        && ring_run(p, 5, 9, R::Benzene)
                        && !p.in_ring(9)
                },
                &[M::EightFourPrimeDioxygenatedFlavanThreeOl],
            ),
        ],
    );

    t.add(
        "O-C:C-C-C-C:C:C:C-O",
        clauses![
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 3, RS::Chromone, R::Benzene)
                        && fused_run(p, 3, 5, RS::Chromone, R::Pyrone)
                        && ring_run(p, 5, 9, R::Benzene)
                        && !p.in_ring(9)
                },
                &[M::FiveFourPrimeDioxygenatedIsoflavone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && ring_run(p, 1, 3, R::Benzene)
                        && fused_run(p, 3, 7, RS::Chromone, R::Pyrone)
                        && fused_run(p, 7, 9, RS::Chromone, R::Benzene)
                        && !p.in_ring(9)
                },
                &[M::SevenTwoPrimeDioxygenatedIsoflavone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && ring_run(p, 1, 3, R::Benzene)
                        && fused_run(p, 3, 6, RS::Chromone, R::Pyrone)
                        && fused_run(p, 6, 9, RS::Chromone, R::Benzene)
                        && !p.in_ring(9)
                },
                &[M::SevenTwoPrimeDioxygenatedIsoflavone],
            ),
        ],
    );

    t.add(
        "O-C:C:C-C-C-C:C:C-O",
        clauses![
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 4, RS::Chromone, R::Benzene)
                        && fused_run(p, 4, 6, RS::Chromone, R::Pyrone)
                        && ring_run(p, 6, 9, R::Benzene)
                        && !p.in_ring(9)
                },
                &[M::SixThreePrimeOrSixFivePrimeDioxygenatedIsoflavone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && ring_run(p, 1, 4, R::Benzene)
                        && fused_run(p, 4, 7, RS::Chromone, R::Pyrone)
                        && fused_run(p, 7, 9, RS::Chromone, R::Benzene)
                        && !p.in_ring(9)
                },
                &[M::SixThreePrimeOrSixFivePrimeDioxygenatedIsoflavone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 4, RS::Chromone, R::Benzene)
                        && fused_run(p, 4, 6, RS::Chromone, R::Pyrone)
                        && ring_run(p, 6, 9, R::Benzene)
                        && !p.in_ring(9)
                },
                &[M::EightThreePrimeOrEightFivePrimeDioxygenatedIsoflavone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && ring_run(p, 1, 4, R::Benzene)
                        && fused_run(p, 4, 8, RS::Chromone, R::Pyrone)
                        && fused_run(p, 8, 9, RS::Chromone, R::Benzene)
                        && !p.in_ring(9)
                },
                &[M::EightThreePrimeOrEightFivePrimeDioxygenatedIsoflavone],
            ),
        ],
    );

    t.add(
        "O-C:C-C=C-O-C:C:C-O",
        clauses![
            when(
                |p| {
                    !p.in_ring(0)
                        && ring_run(p, 1, 3, R::Benzene)
                        && fused_run(p, 3, 7, RS::Chromone, R::Pyrone)
                        && fused_run(p, 7, 9, RS::Chromone, R::Benzene)
                        && !p.in_ring(9)
                },
                &[M::SevenTwoPrimeDioxygenatedIsoflavone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && ring_run(p, 1, 3, R::Benzene)
                        && !p.in_ring(3)
                        && fused_run(p, 4, 7, RS::Dihydrobenzofuran, R::Dihydrofuran)
                        && fused_run(p, 7, 9, RS::Dihydrobenzofuran, R::Benzene)
                        && !p.in_ring(9)
                },
                &[M::SixTwoPrimeDioxygenatedAurone],
            ),
        ],
    );

    t.add(
        "O-C:C-O-C=C-C:C:C-O",
        clauses![
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 3, RS::Chromone, R::Benzene)
                        && fused_run(p, 3, 6, RS::Chromone, R::Pyrone)
                        && ring_run(p, 6, 9, R::Benzene)
                        && !p.in_ring(9)
                },
                &[M::EightThreePrimeOrEightFivePrimeDioxygenatedIsoflavone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 3, RS::Dihydrobenzofuran, R::Benzene)
                        && fused_run(p, 3, 5, RS::Dihydrobenzofuran, R::Dihydrofuran)
                        && !p.in_ring(5)
                        && ring_run(p, 6, 9, R::Benzene)
                        && !p.in_ring(9)
                },
                &[M::SevenThreePrimeOrSevenFivePrimeDioxygenatedAurone],
            ),
        ],
    );

    t.add(
        "O-C:C-C-C-C-C:C:C-O",
        clauses![
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 3, RS::Chromane, R::Benzene)
                        && fused_run(p, 3, 6, RS::Chromane, R::Pyranone)
                        && ring_run(p, 6, 9, R::Benzene)
                        && !p.in_ring(9)
                },
                &[M::FiveThreePrimeOrFiveFivePrimeDioxygenatedFlavanone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && ring_run(p, 1, 3, R::Benzene)
                        && fused_run(p, 3, 7, RS::Chromane, R::Pyranone)
                        && fused_run(p, 7, 9, RS::Chromane, R::Benzene)
                        && !p.in_ring(9)
                },
                &[M::SixTwoPrimeDioxygenatedFlavanone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 3, RS::Chromane, R::Benzene)
                        && fused_run(p, 3, 6, RS::Chromane, R::Dihydropyran)
                        && ring_run(p, 6, 9, R::Benzene)
                        && !p.in_ring(9)
                },
                &[M::FiveThreePrimeOrFiveFivePrimeDioxygenatedFlavanThreeOl],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && ring_run(p, 1, 3, R::Benzene)
                        && fused_run(p, 3, 7, RS::Chromane, R::Dihydropyran)
                        && fused_run(p, 7, 9, RS::Chromane, R::Benzene)
                        && !p.in_ring(9)
                },
                &[M::SixTwoPrimeDioxygenatedFlavanThreeOl],
            ),
        ],
    );

    t.add(
        "O-C:C:C:C:C:C:C:C-O",
        clauses![
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 4, RS::Xanthone, R::Benzene)
                        && fused_run(p, 4, 6, RS::Xanthone, R::Pyrone)
                        && fused_run(p, 6, 9, RS::Xanthone, R::Benzene)
                        && !p.in_ring(9)
                },
                &[M::TwoSixDioxygenatedXanthone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 5, RS::Xanthone, R::Benzene)
                        && fused_run(p, 5, 7, RS::Xanthone, R::Pyrone)
                        && fused_run(p, 7, 9, RS::Xanthone, R::Benzene)
                        && !p.in_ring(9)
                },
                &[M::TwoSixDioxygenatedXanthone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 4, RS::Xanthone, R::Benzene)
                        && fused_run(p, 4, 7, RS::Xanthone, R::Pyrone)
                        && fused_run(p, 7, 9, RS::Xanthone, R::Benzene)
                        && !p.in_ring(9)
                },
                &[M::TwoSixDioxygenatedXanthone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 5, RS::Xanthone, R::Benzene)
                        && fused_run(p, 5, 7, RS::Xanthone, R::Pyrone)
                        && fused_run(p, 7, 9, RS::Xanthone, R::Benzene)
                        && !p.in_ring(9)
                },
                &[M::TwoSixDioxygenatedXanthone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 5, RS::Xanthone, R::Benzene)
                        && fused_run(p, 5, 7, RS::Xanthone, R::Pyrone)
                        && fused_run(p, 7, 9, RS::Xanthone, R::Benzene)
                        && !p.in_ring(9)
                },
                &[M::ThreeSevenDioxygenatedXanthone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 4, RS::Xanthone, R::Benzene)
                        && fused_run(p, 4, 6, RS::Xanthone, R::Pyrone)
                        && fused_run(p, 6, 9, RS::Xanthone, R::Benzene)
                        && !p.in_ring(9)
                },
                &[M::ThreeSevenDioxygenatedXanthone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 5, RS::Xanthone, R::Benzene)
                        && fused_run(p, 5, 7, RS::Xanthone, R::Pyrone)
                        && fused_run(p, 7, 9, RS::Xanthone, R::Benzene)
                        && !p.in_ring(9)
                },
                &[M::ThreeSevenDioxygenatedXanthone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 4, RS::Xanthone, R::Benzene)
                        && fused_run(p, 4, 7, RS::Xanthone, R::Pyrone)
                        && fused_run(p, 7, 9, RS::Xanthone, R::Benzene)
                        && !p.in_ring(9)
                },
                &[M::ThreeSevenDioxygenatedXanthone],
            ),
        ],
    );

    t.add(
        "O-C:C:C:C:O:C:C:C-O",
        clauses![when(
            |p| {
                !p.in_ring(0)
                    && fused_run(p, 1, 5, RS::Xanthone, R::Benzene)
                    && fused_run(p, 5, 7, RS::Xanthone, R::Pyrone)
                    && fused_run(p, 7, 9, RS::Xanthone, R::Benzene)
                    && !p.in_ring(9)
            },
            &[M::TwoSixOrThreeSevenDioxygenatedXanthone],
        )],
    );
}

fn eleven(t: &mut RuleTable) {
    t.add(
        "O-C:C:C-O-C-C:C:C:C-O",
        clauses![
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 4, RS::Chromone, R::Benzene)
                        && fused_run(p, 4, 6, RS::Chromone, R::Pyrone)
                        && ring_run(p, 6, 10, R::Benzene)
                        && !p.in_ring(10)
                },
                &[M::FiveFourPrimeOrSevenFourPrimeDioxygenatedFlavone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 4, RS::Chromane, R::Benzene)
                        && fused_run(p, 4, 6, RS::Chromane, R::Pyranone)
                        && ring_run(p, 6, 10, R::Benzene)
                        && !p.in_ring(10)
                },
                &[M::FiveFourPrimeOrSevenFourPrimeDioxygenatedFlavanone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 4, RS::Chromane, R::Benzene)
                        && fused_run(p, 4, 6, RS::Chromane, R::Dihydropyran)
                        && ring_run(p, 6, 10, R::Benzene)
                        && !p.in_ring(10)
                },
                &[M::FiveFourPrimeOrSevenFourPrimeDioxygenatedFlavanThreeOl],
            ),
        ],
    );

    t.add(
        "O-C:C-C-C=C-C:C:C:C-O",
        clauses![
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 3, RS::Chromone, R::Benzene)
                        && fused_run(p, 3, 6, RS::Chromone, R::Pyrone)
                        && ring_run(p, 6, 10, R::Benzene)
                        && !p.in_ring(10)
                },
                &[M::FiveFourPrimeDioxygenatedFlavone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 3, RS::Dihydrobenzofuran, R::Benzene)
                        && fused_run(p, 3, 5, RS::Dihydrobenzofuran, R::Dihydrofuran)
                        && !p.in_ring(5)
                        && ring_run(p, 6, 10, R::Benzene)
                        && !p.in_ring(10)
                },
                &[M::FourFourPrimeDioxygenatedAurone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && ring_run(p, 1, 3, R::Benzene)
                        && open_run(p, 3, 6)
                        && ring_run(p, 6, 10, R::Benzene)
                        && !p.in_ring(10)
                },
                &[M::FourTwoPrimeDioxygenatedChalcone],
            ),
        ],
    );

    t.add(
        "O-C:C:C-C-O-C:C:C:C-O",
        clauses![
            when(
                |p| {
                    !p.in_ring(0)
                        && ring_run(p, 1, 4, R::Benzene)
                        && fused_run(p, 4, 7, RS::Chromone, R::Pyrone)
                        && fused_run(p, 7, 10, RS::Chromone, R::Benzene)
                        && !p.in_ring(10)
                },
                &[M::SixThreePrimeOrSixFivePrimeDioxygenatedFlavone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && ring_run(p, 1, 4, R::Benzene)
                        && fused_run(p, 4, 8, RS::Chromone, R::Pyrone)
                        && fused_run(p, 8, 10, RS::Chromone, R::Benzene)
                        && !p.in_ring(10)
                },
                &[M::SixThreePrimeOrSixFivePrimeDioxygenatedFlavone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && ring_run(p, 1, 4, R::Benzene)
                        && fused_run(p, 4, 7, RS::Chromane, R::Pyranone)
                        && fused_run(p, 7, 10, RS::Chromane, R::Benzene)
                        && !p.in_ring(10)
                },
                &[M::SixThreePrimeOrSixFivePrimeDioxygenatedFlavanone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && ring_run(p, 1, 4, R::Benzene)
                        && fused_run(p, 4, 8, RS::Chromane, R::Pyranone)
                        && fused_run(p, 8, 10, RS::Chromane, R::Benzene)
                        && !p.in_ring(10)
                },
                &[M::SixThreePrimeOrSixFivePrimeDioxygenatedFlavanone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && ring_run(p, 1, 4, R::Benzene)
                        && fused_run(p, 4, 8, RS::Chromane, R::Dihydropyran)
                        && fused_run(p, 8, 10, RS::Chromane, R::Benzene)
                        && !p.in_ring(10)
                },
                &[M::SixThreePrimeOrSixFivePrimeDioxygenatedFlavanThreeOl],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && ring_run(p, 1, 4, R::Benzene)
                        && fused_run(p, 4, 7, RS::Chromane, R::Dihydropyran)
                        && fused_run(p, 7, 10, RS::Chromane, R::Benzene)
                        && !p.in_ring(10)
                },
                &[M::SixThreePrimeOrSixFivePrimeDioxygenatedFlavanThreeOl],
            ),
        ],
    );

    t.add(
        "O-C:C:C-C-C=C-C:C:C-O",
        clauses![
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 4, RS::Chromone, R::Benzene)
                        && fused_run(p, 4, 7, RS::Chromone, R::Pyrone)
                        && ring_run(p, 7, 10, R::Benzene)
                        && !p.in_ring(10)
                },
                &[M::SixThreePrimeOrSixFivePrimeDioxygenatedFlavone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 4, RS::Dihydrobenzofuran, R::Benzene)
                        && fused_run(p, 4, 6, RS::Dihydrobenzofuran, R::Dihydrofuran)
                        && !p.in_ring(6)
                        && ring_run(p, 7, 10, R::Benzene)
                        && !p.in_ring(10)
                },
                &[M::FiveThreePrimeOrFiveFivePrimeDioxygenatedAurone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && ring_run(p, 1, 4, R::Benzene)
                        && open_run(p, 4, 7)
                        && ring_run(p, 7, 10, R::Benzene)
                        && !p.in_ring(10)
                },
                &[M::ThreeThreePrimeDioxygenatedChalcone],
            ),
        ],
    );

    t.add(
        "O-C:C:C-C-C-C:C:C:C-O",
        clauses![
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 4, RS::Chromone, R::Benzene)
                        && fused_run(p, 4, 6, RS::Chromone, R::Pyrone)
                        && ring_run(p, 6, 10, R::Benzene)
                        && !p.in_ring(10)
                },
                &[M::SixFourPrimeOrEightFourPrimeDioxygenatedIsoflavone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && ring_run(p, 1, 4, R::Benzene)
                        && fused_run(p, 4, 8, RS::Chromone, R::Pyrone)
                        && fused_run(p, 8, 10, RS::Chromone, R::Benzene)
                        && !p.in_ring(10)
                },
                &[M::SevenThreePrimeOrSevenFivePrimeDioxygenatedIsoflavone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && ring_run(p, 1, 4, R::Benzene)
                        && fused_run(p, 4, 7, RS::Chromone, R::Pyrone)
                        && fused_run(p, 7, 10, RS::Chromone, R::Benzene)
                        && !p.in_ring(10)
                },
                &[M::SevenThreePrimeOrSevenFivePrimeDioxygenatedIsoflavone],
            ),
        ],
    );

    t.add(
        "O-C:C:C-C=C-O-C:C:C-O",
        clauses![
            when(
                |p| {
                    !p.in_ring(0)
                        && ring_run(p, 1, 4, R::Benzene)
                        && fused_run(p, 4, 8, RS::Chromone, R::Pyrone)
                        && fused_run(p, 8, 10, RS::Chromone, R::Benzene)
                        && !p.in_ring(10)
                },
                &[M::SevenThreePrimeOrSevenFivePrimeDioxygenatedIsoflavone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && ring_run(p, 1, 4, R::Benzene)
                        && !p.in_ring(4)
                        && fused_run(p, 5, 8, RS::Dihydrobenzofuran, R::Dihydrofuran)
                        && fused_run(p, 8, 10, RS::Dihydrobenzofuran, R::Benzene)
                        && !p.in_ring(10)
                },
                &[M::SixThreePrimeOrSixFivePrimeDioxygenatedAurone],
            ),
        ],
    );

    t.add(
        "O-C:C-O-C=C-C:C:C:C-O",
        clauses![
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 3, RS::Chromone, R::Benzene)
                        && fused_run(p, 3, 6, RS::Chromone, R::Pyrone)
                        && ring_run(p, 6, 10, R::Benzene)
                        && !p.in_ring(10)
                },
                &[M::EightFourPrimeDioxygenatedIsoflavone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 3, RS::Dihydrobenzofuran, R::Benzene)
                        && fused_run(p, 3, 5, RS::Dihydrobenzofuran, R::Dihydrofuran)
                        && !p.in_ring(5)
                        && ring_run(p, 6, 10, R::Benzene)
                        && !p.in_ring(10)
                },
                &[M::SevenFourPrimeDioxygenatedAurone],
            ),
        ],
    );

    t.add(
        "O-C:C-C-C-C-C:C:C:C-O",
        clauses![
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 3, RS::Chromane, R::Benzene)
                        && fused_run(p, 3, 6, RS::Chromane, R::Pyranone)
                        && ring_run(p, 6, 10, R::Benzene)
                        && !p.in_ring(10)
                },
                &[M::FiveFourPrimeDioxygenatedFlavanone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 3, RS::Chromane, R::Benzene)
                        && fused_run(p, 3, 6, RS::Chromane, R::Dihydropyran)
                        && ring_run(p, 6, 10, R::Benzene)
                        && !p.in_ring(10)
                },
                &[M::FiveFourPrimeDioxygenatedFlavanThreeOl],
            ),
        ],
    );

    t.add(
        "O-C:C:C-C-C-C-C:C:C-O",
        clauses![
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 4, RS::Chromane, R::Benzene)
                        && fused_run(p, 4, 7, RS::Chromane, R::Pyranone)
                        && ring_run(p, 7, 10, R::Benzene)
                        && !p.in_ring(10)
                },
                &[M::SixThreePrimeOrSixFivePrimeDioxygenatedFlavanone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && ring_run(p, 1, 4, R::Benzene)
                        && fused_run(p, 4, 8, RS::Chromane, R::Pyranone)
                        && fused_run(p, 8, 10, RS::Chromane, R::Benzene)
                        && !p.in_ring(10)
                },
                &[M::SixThreePrimeOrSixFivePrimeDioxygenatedFlavanone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 4, RS::Chromane, R::Benzene)
                        && fused_run(p, 4, 7, RS::Chromane, R::Dihydropyran)
                        && ring_run(p, 7, 10, R::Benzene)
                        && !p.in_ring(10)
                },
                &[M::SixThreePrimeOrSixFivePrimeDioxygenatedFlavanThreeOl],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && ring_run(p, 1, 4, R::Benzene)
                        && fused_run(p, 4, 8, RS::Chromane, R::Dihydropyran)
                        && fused_run(p, 8, 10, RS::Chromane, R::Benzene)
                        && !p.in_ring(10)
                },
                &[M::SixThreePrimeOrSixFivePrimeDioxygenatedFlavanThreeOl],
            ),
        ],
    );

    t.add(
        "O-C:C-C=C-C-C:C:C:C-O",
        clauses![when(
            |p| {
                !p.in_ring(0)
                    && ring_run(p, 1, 3, R::Benzene)
                    && open_run(p, 3, 6)
                    && ring_run(p, 6, 10, R::Benzene)
                    && !p.in_ring(10)
            },
            &[M::TwoFourPrimeDioxygenatedChalcone],
        )],
    );
}

fn twelve(t: &mut RuleTable) {
    t.add(
        "O-C:C:C:C-C-O-C:C:C:C-O",
        clauses![
            when(
                |p| {
                    !p.in_ring(0)
                        && ring_run(p, 1, 5, R::Benzene)
                        && fused_run(p, 5, 8, RS::Chromone, R::Pyrone)
                        && fused_run(p, 8, 11, RS::Chromone, R::Benzene)
                        && !p.in_ring(11)
                },
                &[M::SixFourPrimeDioxygenatedFlavone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && ring_run(p, 1, 5, R::Benzene)
                        && fused_run(p, 5, 9, RS::Chromone, R::Pyrone)
                        && fused_run(p, 9, 11, RS::Chromone, R::Benzene)
                        && !p.in_ring(11)
                },
                &[M::SixFourPrimeDioxygenatedFlavone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && ring_run(p, 1, 5, R::Benzene)
                        && fused_run(p, 5, 8, RS::Chromane, R::Pyranone)
                        && fused_run(p, 8, 11, RS::Chromane, R::Benzene)
                        && !p.in_ring(11)
                },
                &[M::SixFourPrimeDioxygenatedFlavanone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && ring_run(p, 1, 5, R::Benzene)
                        && fused_run(p, 5, 9, RS::Chromane, R::Pyranone)
                        && fused_run(p, 9, 11, RS::Chromane, R::Benzene)
                        && !p.in_ring(11)
                },
                &[M::SixFourPrimeDioxygenatedFlavanone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && ring_run(p, 1, 5, R::Benzene)
                        && fused_run(p, 5, 9, RS::Chromane, R::Dihydropyran)
                        && fused_run(p, 9, 11, RS::Chromane, R::Benzene)
                        && !p.in_ring(11)
                },
                &[M::SixFourPrimeDioxygenatedFlavanThreeOl],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && ring_run(p, 1, 5, R::Benzene)
                        && fused_run(p, 5, 8, RS::Chromane, R::Dihydropyran)
                        && fused_run(p, 8, 11, RS::Chromane, R::Benzene)
                        && !p.in_ring(11)
                },
                &[M::SixFourPrimeDioxygenatedFlavanThreeOl],
            ),
        ],
    );

    t.add(
        "O-C:C:C-C-C=C-C:C:C:C-O",
        clauses![
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 4, RS::Chromone, R::Benzene)
                        && fused_run(p, 4, 7, RS::Chromone, R::Pyrone)
                        && ring_run(p, 7, 11, R::Benzene)
                        && !p.in_ring(11)
                },
                &[M::SixFourPrimeDioxygenatedFlavone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 4, RS::Dihydrobenzofuran, R::Benzene)
                        && fused_run(p, 4, 6, RS::Dihydrobenzofuran, R::Dihydrofuran)
                        && !p.in_ring(6)
                        && ring_run(p, 7, 11, R::Benzene)
                        && !p.in_ring(11)
                },
                &[M::FiveFourPrimeDioxygenatedAurone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && ring_run(p, 1, 4, R::Benzene)
                        && open_run(p, 4, 7)
                        && ring_run(p, 7, 11, R::Benzene)
                        && !p.in_ring(11)
                },
                &[M::FourThreePrimeDioxygenatedChalcone],
            ),
        ],
    );

    t.add(
        "O-C:C:C-O-C=C-C:C:C:C-O",
        clauses![
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 4, RS::Chromone, R::Benzene)
                        && fused_run(p, 4, 7, RS::Chromone, R::Pyrone)
                        && ring_run(p, 7, 11, R::Benzene)
                        && !p.in_ring(11)
                },
                &[M::SevenFourPrimeDioxygenatedIsoflavone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 4, RS::Dihydrobenzofuran, R::Benzene)
                        && fused_run(p, 4, 6, RS::Dihydrobenzofuran, R::Dihydrofuran)
                        && !p.in_ring(6)
                        && ring_run(p, 7, 11, R::Benzene)
                        && !p.in_ring(11)
                },
                &[M::SixFourPrimeDioxygenatedAurone],
            ),
        ],
    );

    t.add(
        "O-C:C:C:C-C-C-C:C:C:C-O",
        clauses![
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 5, RS::Chromone, R::Benzene)
                        && fused_run(p, 5, 7, RS::Chromone, R::Pyrone)
                        && ring_run(p, 7, 11, R::Benzene)
                        && !p.in_ring(11)
                },
                &[M::SevenFourPrimeDioxygenatedIsoflavone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && ring_run(p, 1, 5, R::Benzene)
                        && fused_run(p, 5, 9, RS::Chromone, R::Pyrone)
                        && fused_run(p, 9, 11, RS::Chromone, R::Benzene)
                        && !p.in_ring(11)
                },
                &[M::SevenFourPrimeDioxygenatedIsoflavone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 5, RS::Chromone, R::Benzene)
                        && fused_run(p, 5, 7, RS::Chromone, R::Pyrone)
                        && ring_run(p, 7, 11, R::Benzene)
                        && !p.in_ring(11)
                },
                &[M::SevenFourPrimeDioxygenatedIsoflavone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && ring_run(p, 1, 5, R::Benzene)
                        && fused_run(p, 5, 8, RS::Chromone, R::Pyrone)
                        && fused_run(p, 8, 11, RS::Chromone, R::Benzene)
                        && !p.in_ring(11)
                },
                &[M::SevenFourPrimeDioxygenatedIsoflavone],
            ),
        ],
    );

    t.add(
        "O-C:C:C-C-C-C-C:C:C:C-O",
        clauses![
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 4, RS::Chromane, R::Benzene)
                        && fused_run(p, 4, 7, RS::Chromane, R::Pyranone)
                        && ring_run(p, 7, 11, R::Benzene)
                        && !p.in_ring(11)
                },
                &[M::SixFourPrimeDioxygenatedFlavanone],
            ),
            when(
                |p| {
                    !p.in_ring(0)
                        && fused_run(p, 1, 4, RS::Chromane, R::Benzene)
                        && fused_run(p, 4, 7, RS::Chromane, R::Dihydropyran)
                        && ring_run(p, 7, 11, R::Benzene)
                        && !p.in_ring(11)
                },
                &[M::SixFourPrimeDioxygenatedFlavanThreeOl],
            ),
        ],
    );

    t.add(
        "O-C:C:C-C=C-C-C:C:C:C-O",
        clauses![when(
            |p| {
                !p.in_ring(0)
                    && ring_run(p, 1, 4, R::Benzene)
                    && open_run(p, 4, 7)
                    && ring_run(p, 7, 11, R::Benzene)
                    && !p.in_ring(11)
            },
            &[M::ThreeFourPrimeDioxygenatedChalcone],
        )],
    );
}

fn thirteen(t: &mut RuleTable) {
    t.add(
        "O-C:C:C:C-C-C=C-C:C:C:C-O",
        clauses![when(
            |p| {
                !p.in_ring(0)
                    && ring_run(p, 1, 5, R::Benzene)
                    && open_run(p, 5, 8)
                    && ring_run(p, 8, 12, R::Benzene)
                    && !p.in_ring(12)
            },
            &[M::FourFourPrimeDioxygenatedChalcone],
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
    fn flavone() {
        let ctx = smiles(
            "[O]=C1C([OH])=C(c3c([OH])c([OH])c([OH])c([OH])c3)[O]c2c([OH])c([OH])c([OH])c([OH])c21",
            &[R::Benzene, R::Benzene, R::Pyrone],
            &[(RS::Chromone, &[1, 2])],
        );
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        for motif in [
            M::ThreeFiveDioxygenatedFlavone,
            M::ThreeFourPrimeDioxygenatedFlavone,
            M::TwoPrimeFourPrimeDioxygenatedChalcone,
            M::SevenThreePrimeOrSevenFivePrimeDioxygenatedFlavone,
            M::EightThreePrimeOrEightFivePrimeDioxygenatedFlavone,
            M::SevenOxygenatedChromoneCarbonylWalk,
        ] {
            assert!(fp.get(motif), "{motif}");
        }
        assert!(!fp.get(M::TwoPrimeOxygenatedIsoflavoneRingOxygenWalk));
    }

    #[test]
    fn isoflavone() {
        let ctx = smiles(
            "[O]=C1C(c3c([OH])c([OH])c([OH])c([OH])c3)=C[O]c2c([OH])c([OH])c([OH])c([OH])c21",
            &[R::Benzene, R::Benzene, R::Pyrone],
            &[(RS::Chromone, &[1, 2])],
        );
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        for motif in [
            M::TwoPrimeOxygenatedIsoflavoneRingOxygenWalk,
            M::TwoPrimeThreePrimeOrThreePrimeFourPrimeDioxygenatedChalcone,
            M::FiveEightDioxygenatedChromone,
            M::FiveTwoPrimeDioxygenatedIsoflavone,
            M::SevenTwoPrimeDioxygenatedIsoflavone,
            M::SevenFourPrimeDioxygenatedIsoflavone,
        ] {
            assert!(fp.get(motif), "{motif}");
        }
        assert!(!fp.get(M::ThreeFiveDioxygenatedFlavone));
    }

    #[test]
    fn flavanone() {
        let ctx = smiles(
            "[O]=C1C([OH])C(c3c([OH])c([OH])c([OH])c([OH])c3)[O]c2c([OH])c([OH])c([OH])c([OH])c21",
            &[R::Benzene, R::Benzene, R::Pyranone],
            &[(RS::Chromane, &[1, 2])],
        );
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        for motif in [
            M::ThreeFiveDioxygenatedFlavanone,
            M::ThreeFourPrimeDioxygenatedFlavanone,
            M::TwoPrimeFourPrimeDioxygenatedChalcone,
            M::SevenThreePrimeOrSevenFivePrimeDioxygenatedFlavanone,
            M::EightFourPrimeDioxygenatedFlavanone,
            M::ThreePrimeOrFivePrimeOxygenatedFlavanoneRingOxygenWalk,
        ] {
            assert!(fp.get(motif), "{motif}");
        }
        assert!(!fp.get(M::ThreeFiveDioxygenatedFlavone));
    }

    #[test]
    fn flavan_3_ol() {
        let ctx = smiles(
            "[OH]C1Cc2c([OH])c([OH])c([OH])c([OH])c2[O]C1c3c([OH])c([OH])c([OH])c([OH])c3",
            &[R::Benzene, R::Dihydropyran, R::Benzene],
            &[(RS::Chromane, &[0, 1])],
        );
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        for motif in [
            M::ThreeFiveDioxygenatedFlavanThreeOl,
            M::ThreeSevenDioxygenatedFlavanThreeOl,
            M::FiveSevenOrSixEightDioxygenatedChromane,
            M::FiveTwoPrimeDioxygenatedFlavanThreeOl,
            M::SixTwoPrimeDioxygenatedFlavanThreeOl,
            M::EightFourPrimeDioxygenatedFlavanThreeOl,
        ] {
            assert!(fp.get(motif), "{motif}");
        }
        assert!(!fp.get(M::ThreeFiveDioxygenatedFlavone));
    }

    #[test]
    fn aurone() {
        let ctx = smiles(
            "[O]=C1C(=Cc3c([OH])c([OH])c([OH])c([OH])c3)[O]c2c([OH])c([OH])c([OH])c([OH])c21",
            &[R::Benzene, R::Benzene, R::Dihydrofuran],
            &[(RS::Dihydrobenzofuran, &[1, 2])],
        );
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        for motif in [
            M::TwoPrimeOxygenatedAuroneRingOxygenWalk,
            M::TwoPrimeThreePrimeOrThreePrimeFourPrimeDioxygenatedChalcone,
            M::FourSevenDioxygenatedAurone,
            M::FiveTwoPrimeDioxygenatedAurone,
            M::SixOxygenatedAuroneCarbonylWalk,
            M::SixThreePrimeOrSixFivePrimeDioxygenatedAurone,
        ] {
            assert!(fp.get(motif), "{motif}");
        }
        assert!(!fp.get(M::ThreeFiveDioxygenatedFlavone));
    }

    #[test]
    fn chalcone() {
        let ctx = smiles(
            "[O]=C(C=Cc1c([OH])c([OH])c([OH])c([OH])c1)c2c([OH])c([OH])c([OH])c([OH])c2",
            &[R::Benzene, R::Benzene],
            &[],
        );
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        for motif in [
            M::TwoPrimeThreePrimeOrThreePrimeFourPrimeDioxygenatedChalcone,
            M::TwoTwoPrimeDioxygenatedChalcone,
            M::TwoThreePrimeDioxygenatedChalcone,
            M::TwoPrimeOxygenatedChalconeCarbonylWalk,
            M::TwoOxygenatedChalconeCarbonylWalk,
            M::TwoFourPrimeDioxygenatedChalcone,
        ] {
            assert!(fp.get(motif), "{motif}");
        }
        assert!(!fp.get(M::ThreeFiveDioxygenatedFlavone));
    }

    #[test]
    fn coumarin() {
        let ctx = smiles(
            "[O]=C1[O]c2c([OH])c([OH])c([OH])c([OH])c2C([OH])=C1[OH]",
            &[R::Benzene, R::Pyrone],
            &[(RS::Coumarin, &[0, 1])],
        );
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        for motif in [
            M::ThreeFiveDioxygenatedCoumarin,
            M::FiveSixOrSixSevenOrSevenEightDioxygenatedCoumarin,
            M::FiveOxygenatedCoumarinRingOxygenWalk,
            M::ThreeFourDioxygenatedCoumarin,
            M::SixOxygenatedCoumarinCarbonylWalk,
            M::ThreeEightDioxygenatedCoumarin,
        ] {
            assert!(fp.get(motif), "{motif}");
        }
        assert!(!fp.get(M::ThreeFiveDioxygenatedFlavone));
    }

    #[test]
    fn xanthone() {
        let ctx = smiles(
            "[O]=c1c2c([OH])c([OH])c([OH])c([OH])c2[o]c2c([OH])c([OH])c([OH])c([OH])c21",
            &[R::Benzene, R::Benzene, R::Pyrone],
            &[(RS::Xanthone, &[0, 1, 2])],
        );
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        for motif in [
            M::TwoPrimeThreePrimeOrThreePrimeFourPrimeDioxygenatedChalcone,
            M::OneFourDioxygenatedXanthone,
            M::OneFiveOrThreeFiveOrFourSixOrFourEightDioxygenatedXanthone,
            M::FourSevenDioxygenatedXanthone,
            M::TwoSixDioxygenatedXanthone,
            M::OneOrThreeOrSixOrEightOxygenatedXanthoneRingOxygenWalk,
        ] {
            assert!(fp.get(motif), "{motif}");
        }
        assert!(!fp.get(M::ThreeFiveDioxygenatedFlavone));
    }
}
