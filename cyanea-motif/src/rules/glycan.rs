//! Sugar chains: walks across glycosidic links between hexopyranose residues and from
//! ring hydroxyls to aglycone, acyl and acetamido substituents.

use super::common::*;
use super::{when, RuleTable};
use crate::graph::RingType as R;
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
        "O-C-O",
        clauses![
            when(
                |p| !p.in_ring(0) && ring_run(p, 1, 3, R::Tetrahydropyran),
                &[M::OneFiveDioxygenatedArylGlucuronide],
            ),
            when(
                |p| ring_run(p, 0, 2, R::Tetrahydropyran) && !p.in_ring(2),
                &[M::OneFiveDioxygenatedArylGlucuronide],
            ),
            when(
                |p| hydroxyl(p, 0) && !p.in_ring(0) && ring_run(p, 1, 3, R::Tetrahydropyran),
                &[M::OneFiveDioxygenatedSixOAcylHexopyranose],
            ),
            when(
                |p| ring_run(p, 0, 2, R::Tetrahydropyran) && hydroxyl(p, 2) && !p.in_ring(2),
                &[M::OneFiveDioxygenatedSixOAcylHexopyranose],
            ),
        ],
    );

    t.extend(
        "N-C=O",
        clauses![when(
            |p| amide_nitrogen(p, 0) && open_run(p, 0, 3),
            &[M::AcetylOxygenatedNAcetylhexosamineGlycosideTwoNitrogenWalk],
        )],
    );
}

fn four(t: &mut RuleTable) {
    t.extend(
        "O-C-C-O",
        clauses![
            when(
                |p| !p.in_ring(0) && ring_run(p, 1, 3, R::Tetrahydropyran) && hydroxyl(p, 3) && !p.in_ring(3),
                &[M::OneTwoDioxygenatedArylGlucuronide],
            ),
            when(
                |p| hydroxyl(p, 0) && !p.in_ring(0) && ring_run(p, 1, 3, R::Tetrahydropyran) && !p.in_ring(3),
                &[M::OneTwoDioxygenatedArylGlucuronide],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && ring_run(p, 1, 3, R::Tetrahydropyran)
                        && hydroxyl(p, 3)
                        && !p.in_ring(3)
                },
                &[M::TwoThreeOrThreeFourDioxygenatedArylGlucuronide],
            ),
            when(
                |p| hydroxyl(p, 0) && !p.in_ring(0) && ring_run(p, 1, 4, R::Tetrahydropyran),
                &[M::TwoFiveOrFourFiveDioxygenatedArylGlucuronide],
            ),
            when(
                |p| ring_run(p, 0, 3, R::Tetrahydropyran) && hydroxyl(p, 3) && !p.in_ring(3),
                &[M::TwoFiveOrFourFiveDioxygenatedArylGlucuronide],
            ),
            when(
                |p| ring_run(p, 0, 2, R::Tetrahydropyran) && open_run(p, 2, 4),
                &[M::FiveSixDioxygenatedArylGlucuronide],
            ),
            when(
                |p| hydroxyl(p, 0) && open_run(p, 0, 2) && ring_run(p, 2, 4, R::Tetrahydropyran),
                &[M::FiveSixDioxygenatedArylGlucuronide],
            ),
        ],
    );

    t.extend(
        "N-C-C-O",
        clauses![
            when(
                |p| amide_nitrogen(p, 0) && !p.in_ring(0) && ring_run(p, 1, 3, R::Tetrahydropyran) && !p.in_ring(3),
                &[M::OneOxygenatedNAcetylhexosamineGlycosideTwoNitrogenWalk],
            ),
            when(
                |p| {
                    amide_nitrogen(p, 0)
                        && !p.in_ring(0)
                        && ring_run(p, 1, 3, R::Tetrahydropyran)
                        && hydroxyl(p, 3)
                        && !p.in_ring(3)
                },
                &[M::ThreeOxygenatedNAcetylhexosamineGlycosideTwoNitrogenWalk],
            ),
            when(
                |p| amide_nitrogen(p, 0) && !p.in_ring(0) && ring_run(p, 1, 4, R::Tetrahydropyran),
                &[M::FiveOxygenatedNAcetylhexosamineGlycosideTwoNitrogenWalk],
            ),
        ],
    );
}

fn five(t: &mut RuleTable) {
    t.add(
        "O-C-O-C-O",
        clauses![
            when(
                |p| ring_run(p, 0, 2, R::Tetrahydropyran) && !p.in_ring(2) && ring_run(p, 3, 5, R::Tetrahydrofuran),
                &[M::FiveFivePrimeDioxygenatedSucroseTypeDisaccharide],
            ),
            when(
                |p| ring_run(p, 0, 2, R::Tetrahydrofuran) && !p.in_ring(2) && ring_run(p, 3, 5, R::Tetrahydropyran),
                &[M::FiveFivePrimeDioxygenatedSucroseTypeDisaccharide],
            ),
        ],
    );

    t.extend(
        "O-C-C-C-O",
        clauses![
            when(
                |p| !p.in_ring(0) && ring_run(p, 1, 4, R::Tetrahydropyran) && hydroxyl(p, 4) && !p.in_ring(4),
                &[M::OneThreeDioxygenatedArylGlucuronide],
            ),
            when(
                |p| hydroxyl(p, 0) && !p.in_ring(0) && ring_run(p, 1, 4, R::Tetrahydropyran) && !p.in_ring(4),
                &[M::OneThreeDioxygenatedArylGlucuronide],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && ring_run(p, 1, 4, R::Tetrahydropyran)
                        && hydroxyl(p, 4)
                        && !p.in_ring(4)
                },
                &[M::TwoFourDioxygenatedArylGlucuronide],
            ),
            when(
                |p| hydroxyl(p, 0) && !p.in_ring(0) && ring_run(p, 1, 5, R::Tetrahydropyran),
                &[M::ThreeFiveDioxygenatedArylGlucuronide],
            ),
            when(
                |p| ring_run(p, 0, 4, R::Tetrahydropyran) && hydroxyl(p, 4) && !p.in_ring(4),
                &[M::ThreeFiveDioxygenatedArylGlucuronide],
            ),
            when(
                |p| hydroxyl(p, 0) && !p.in_ring(0) && ring_run(p, 1, 3, R::Tetrahydropyran) && open_run(p, 3, 5),
                &[M::FourSixDioxygenatedArylGlucuronide],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && open_run(p, 0, 2)
                        && ring_run(p, 2, 4, R::Tetrahydropyran)
                        && hydroxyl(p, 4)
                        && !p.in_ring(4)
                },
                &[M::FourSixDioxygenatedArylGlucuronide],
            ),
        ],
    );

    t.extend(
        "N-C-C-C-O",
        clauses![when(
            |p| {
                amide_nitrogen(p, 0)
                    && !p.in_ring(0)
                    && ring_run(p, 1, 4, R::Tetrahydropyran)
                    && hydroxyl(p, 4)
                    && !p.in_ring(4)
            },
            &[M::FourOxygenatedNAcetylhexosamineGlycosideTwoNitrogenWalk],
        )],
    );

    t.add(
        "O-C-O-C=O",
        clauses![when(
            |p| ring_run(p, 0, 2, R::Tetrahydropyran) && open_run(p, 2, 5),
            &[M::FiveAcylDioxygenatedOneOAcylHexopyranose],
        )],
    );
}

fn six(t: &mut RuleTable) {
    t.add(
        "O-C-C-O-C-O",
        clauses![
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && ring_run(p, 1, 3, R::Tetrahydropyran)
                        && !p.in_ring(3)
                        && ring_run(p, 4, 6, R::Tetrahydropyran)
                },
                &[M::OneFivePrimeOrThreeFivePrimeDioxygenatedTwoOGlycosylHexopyranose],
            ),
            when(
                |p| ring_run(p, 0, 3, R::Tetrahydropyran) && !p.in_ring(3) && ring_run(p, 4, 6, R::Tetrahydropyran),
                &[M::FiveFivePrimeDioxygenatedTwoOGlycosylHexopyranose],
            ),
            when(
                |p| {
                    ring_run(p, 0, 2, R::Tetrahydropyran)
                        && open_run(p, 2, 4)
                        && ring_run(p, 4, 6, R::Tetrahydropyran)
                },
                &[M::FiveFivePrimeDioxygenatedSixOGlycosylHexopyranose],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && ring_run(p, 1, 3, R::Tetrahydropyran)
                        && !p.in_ring(3)
                        && ring_run(p, 4, 6, R::Tetrahydrofuran)
                },
                &[M::TwoPrimeFiveDioxygenatedSucroseTypeDisaccharide],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && open_run(p, 0, 2)
                        && p.in_ring_of(2, R::Tetrahydrofuran)
                        && !p.in_ring(3)
                        && ring_run(p, 4, 6, R::Tetrahydropyran)
                },
                &[M::OneFivePrimeDioxygenatedSucroseTypeDisaccharide],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && ring_run(p, 1, 3, R::Tetrahydrofuran)
                        && !p.in_ring(3)
                        && ring_run(p, 4, 6, R::Tetrahydropyran)
                },
                &[M::ThreeFivePrimeDioxygenatedSucroseTypeDisaccharide],
            ),
            when(
                |p| hydroxyl(p, 0) && !p.in_ring(0) && ring_run(p, 1, 5, R::Tetrahydropyran) && !p.in_ring(5),
                &[M::OneFourDioxygenatedArylGlucuronide],
            ),
            when(
                |p| hydroxyl(p, 0) && open_run(p, 0, 2) && ring_run(p, 2, 5, R::Tetrahydropyran) && !p.in_ring(5),
                &[M::OneSixDioxygenatedArylGlucuronide],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && ring_run(p, 1, 5, R::Tetrahydropyran)
                        && hydroxyl(p, 5)
                        && !p.in_ring(5)
                },
                &[M::OneFourDioxygenatedSixOAcylHexopyranose],
            ),
        ],
    );

    t.extend(
        "O-C-C-C-C-O",
        clauses![
            when(
                |p| !p.in_ring(0) && ring_run(p, 1, 5, R::Tetrahydropyran) && hydroxyl(p, 5) && !p.in_ring(5),
                &[M::OneFourDioxygenatedArylGlucuronide],
            ),
            when(
                |p| hydroxyl(p, 0) && !p.in_ring(0) && ring_run(p, 1, 5, R::Tetrahydropyran) && !p.in_ring(5),
                &[M::OneFourDioxygenatedArylGlucuronide],
            ),
            when(
                |p| hydroxyl(p, 0) && !p.in_ring(0) && ring_run(p, 1, 4, R::Tetrahydropyran) && open_run(p, 4, 6),
                &[M::ThreeSixDioxygenatedArylGlucuronide],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && open_run(p, 0, 2)
                        && ring_run(p, 2, 5, R::Tetrahydropyran)
                        && hydroxyl(p, 5)
                        && !p.in_ring(5)
                },
                &[M::ThreeSixDioxygenatedArylGlucuronide],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && ring_run(p, 1, 5, R::Tetrahydropyran)
                        && hydroxyl(p, 5)
                        && !p.in_ring(5)
                },
                &[M::OneFourDioxygenatedSixOAcylHexopyranose],
            ),
        ],
    );

    t.extend(
        "O-C:C:C:C-O",
        clauses![
            when(
                |p| !p.in_ring(0) && ring_run(p, 1, 5, R::Benzene) && hydroxyl(p, 5) && !p.in_ring(5),
                &[M::OneFourPrimeDioxygenatedArylGlucuronide],
            ),
            when(
                |p| hydroxyl(p, 0) && !p.in_ring(0) && ring_run(p, 1, 5, R::Benzene) && !p.in_ring(5),
                &[M::OneFourPrimeDioxygenatedArylGlucuronide],
            ),
        ],
    );

    t.extend(
        "O-C-C-N-C=O",
        clauses![
            when(
                |p| !p.in_ring(0) && ring_run(p, 1, 3, R::Tetrahydropyran) && open_run(p, 3, 6),
                &[M::OneAcetylDioxygenatedNAcetylhexosamineGlycoside],
            ),
            when(
                |p| hydroxyl(p, 0) && !p.in_ring(0) && ring_run(p, 1, 3, R::Tetrahydropyran) && open_run(p, 3, 6),
                &[M::ThreeAcetylDioxygenatedNAcetylhexosamineGlycoside],
            ),
            when(
                |p| ring_run(p, 0, 3, R::Tetrahydropyran) && open_run(p, 3, 6),
                &[M::FiveAcetylDioxygenatedNAcetylhexosamineGlycoside],
            ),
        ],
    );

    t.extend(
        "O-C-C-O-C=O",
        clauses![
            when(
                |p| hydroxyl(p, 0) && !p.in_ring(0) && ring_run(p, 1, 3, R::Tetrahydropyran) && open_run(p, 3, 6),
                &[M::TwoAcylDioxygenatedOneOAcylHexopyranose],
            ),
            when(
                |p| ring_run(p, 0, 2, R::Tetrahydropyran) && open_run(p, 2, 6),
                &[M::FiveAcylDioxygenatedSixOAcylHexopyranose],
            ),
        ],
    );
}

fn seven(t: &mut RuleTable) {
    t.extend(
        "O-C-C-O-C-C-O",
        clauses![
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && ring_run(p, 1, 3, R::Tetrahydropyran)
                        && !p.in_ring(3)
                        && ring_run(p, 4, 6, R::Tetrahydropyran)
                        && hydroxyl(p, 6)
                        && !p.in_ring(6)
                },
                &[M::OneTwoPrimeOrTwoPrimeThreeDioxygenatedTwoOGlycosylHexopyranose],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && ring_run(p, 1, 3, R::Tetrahydropyran)
                        && !p.in_ring(3)
                        && ring_run(p, 4, 7, R::Tetrahydropyran)
                },
                &[M::TwoPrimeFiveDioxygenatedTwoOGlycosylHexopyranose],
            ),
            when(
                |p| {
                    ring_run(p, 0, 3, R::Tetrahydropyran)
                        && !p.in_ring(3)
                        && ring_run(p, 4, 6, R::Tetrahydropyran)
                        && hydroxyl(p, 6)
                        && !p.in_ring(6)
                },
                &[M::TwoPrimeFiveDioxygenatedTwoOGlycosylHexopyranose],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && ring_run(p, 1, 3, R::Tetrahydropyran)
                        && open_run(p, 3, 5)
                        && ring_run(p, 5, 7, R::Tetrahydropyran)
                },
                &[M::TwoPrimeFiveDioxygenatedSixOGlycosylHexopyranose],
            ),
            when(
                |p| {
                    ring_run(p, 0, 2, R::Tetrahydropyran)
                        && open_run(p, 2, 4)
                        && ring_run(p, 4, 6, R::Tetrahydropyran)
                        && hydroxyl(p, 6)
                        && !p.in_ring(6)
                },
                &[M::TwoPrimeFiveDioxygenatedSixOGlycosylHexopyranose],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && ring_run(p, 1, 3, R::Tetrahydropyran)
                        && !p.in_ring(3)
                        && p.in_ring_of(4, R::Tetrahydrofuran)
                        && open_run(p, 5, 7)
                },
                &[M::OneTwoPrimeDioxygenatedSucroseTypeDisaccharide],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && open_run(p, 0, 2)
                        && p.in_ring_of(2, R::Tetrahydrofuran)
                        && !p.in_ring(3)
                        && ring_run(p, 4, 6, R::Tetrahydropyran)
                        && hydroxyl(p, 6)
                        && !p.in_ring(6)
                },
                &[M::OneTwoPrimeDioxygenatedSucroseTypeDisaccharide],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && ring_run(p, 1, 3, R::Tetrahydropyran)
                        && !p.in_ring(3)
                        && ring_run(p, 4, 6, R::Tetrahydrofuran)
                        && hydroxyl(p, 6)
                        && !p.in_ring(6)
                },
                &[M::TwoPrimeThreeDioxygenatedSucroseTypeDisaccharide],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && ring_run(p, 1, 3, R::Tetrahydrofuran)
                        && !p.in_ring(3)
                        && ring_run(p, 4, 6, R::Tetrahydropyran)
                        && hydroxyl(p, 6)
                        && !p.in_ring(6)
                },
                &[M::TwoPrimeThreeDioxygenatedSucroseTypeDisaccharide],
            ),
            when(
                |p| hydroxyl(p, 0) && !p.in_ring(0) && ring_run(p, 1, 5, R::Tetrahydropyran) && open_run(p, 5, 7),
                &[M::TwoSixDioxygenatedArylGlucuronide],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && open_run(p, 0, 2)
                        && ring_run(p, 2, 6, R::Tetrahydropyran)
                        && hydroxyl(p, 6)
                        && !p.in_ring(6)
                },
                &[M::TwoSixDioxygenatedArylGlucuronide],
            ),
        ],
    );

    t.add(
        "O-C-C-C-O-C-O",
        clauses![
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && ring_run(p, 1, 4, R::Tetrahydropyran)
                        && !p.in_ring(4)
                        && ring_run(p, 5, 7, R::Tetrahydropyran)
                },
                &[M::FourFivePrimeDioxygenatedTwoOGlycosylHexopyranose],
            ),
            when(
                |p| ring_run(p, 0, 4, R::Tetrahydropyran) && !p.in_ring(4) && ring_run(p, 5, 7, R::Tetrahydropyran),
                &[M::FiveFivePrimeDioxygenatedThreeOGlycosylHexopyranose],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && open_run(p, 0, 2)
                        && ring_run(p, 2, 4, R::Tetrahydropyran)
                        && !p.in_ring(4)
                        && ring_run(p, 5, 7, R::Tetrahydropyran)
                },
                &[M::FivePrimeSixDioxygenatedFourOGlycosylHexopyranose],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && ring_run(p, 1, 3, R::Tetrahydropyran)
                        && open_run(p, 3, 5)
                        && ring_run(p, 5, 7, R::Tetrahydropyran)
                },
                &[M::FourFivePrimeDioxygenatedSixOGlycosylHexopyranose],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && ring_run(p, 1, 4, R::Tetrahydropyran)
                        && !p.in_ring(4)
                        && ring_run(p, 5, 7, R::Tetrahydrofuran)
                },
                &[M::ThreePrimeFiveDioxygenatedSucroseTypeDisaccharide],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && ring_run(p, 1, 4, R::Tetrahydrofuran)
                        && !p.in_ring(4)
                        && ring_run(p, 5, 7, R::Tetrahydropyran)
                },
                &[M::FourFivePrimeDioxygenatedSucroseTypeDisaccharide],
            ),
        ],
    );

    t.extend(
        "O-C-C-C-C-C-O",
        clauses![
            when(
                |p| hydroxyl(p, 0) && !p.in_ring(0) && ring_run(p, 1, 5, R::Tetrahydropyran) && open_run(p, 5, 7),
                &[M::TwoSixDioxygenatedArylGlucuronide],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && open_run(p, 0, 2)
                        && ring_run(p, 2, 6, R::Tetrahydropyran)
                        && hydroxyl(p, 6)
                        && !p.in_ring(6)
                },
                &[M::TwoSixDioxygenatedArylGlucuronide],
            ),
        ],
    );

    t.add(
        "O-C-C-C-N-C=O",
        clauses![when(
            |p| hydroxyl(p, 0) && !p.in_ring(0) && ring_run(p, 1, 4, R::Tetrahydropyran) && open_run(p, 4, 7),
            &[M::FourAcetylDioxygenatedNAcetylhexosamineGlycoside],
        )],
    );

    t.extend(
        "N-C-C-O-C-C-O",
        clauses![when(
            |p| amide_nitrogen(p, 0) && !p.in_ring(0) && ring_run(p, 1, 5, R::Tetrahydropyran) && open_run(p, 5, 7),
            &[M::SixOxygenatedNAcetylhexosamineGlycosideTwoNitrogenWalk],
        )],
    );

    t.extend(
        "N-C-C-C-C-C-O",
        clauses![when(
            |p| amide_nitrogen(p, 0) && !p.in_ring(0) && ring_run(p, 1, 5, R::Tetrahydropyran) && open_run(p, 5, 7),
            &[M::SixOxygenatedNAcetylhexosamineGlycosideTwoNitrogenWalk],
        )],
    );

    t.extend(
        "O-C-C-C-O-C=O",
        clauses![
            when(
                |p| hydroxyl(p, 0) && !p.in_ring(0) && ring_run(p, 1, 4, R::Tetrahydropyran) && open_run(p, 4, 7),
                &[M::ThreeAcylDioxygenatedOneOAcylHexopyranose],
            ),
            when(
                |p| hydroxyl(p, 0) && !p.in_ring(0) && ring_run(p, 1, 3, R::Tetrahydropyran) && open_run(p, 3, 7),
                &[M::FourAcylDioxygenatedSixOAcylHexopyranose],
            ),
        ],
    );
}

fn eight(t: &mut RuleTable) {
    t.add(
        "O-C-C-C-O-C-C-O",
        clauses![
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && ring_run(p, 1, 4, R::Tetrahydropyran)
                        && !p.in_ring(4)
                        && ring_run(p, 5, 7, R::Tetrahydropyran)
                        && hydroxyl(p, 7)
                        && !p.in_ring(7)
                },
                &[M::TwoPrimeFourOrOneThreePrimeOrThreeThreePrimeDioxygenatedTwoOGlycosylHexopyranose],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && ring_run(p, 1, 4, R::Tetrahydropyran)
                        && !p.in_ring(4)
                        && ring_run(p, 5, 8, R::Tetrahydropyran)
                },
                &[M::ThreePrimeFiveDioxygenatedTwoOGlycosylHexopyranose],
            ),
            when(
                |p| {
                    ring_run(p, 0, 4, R::Tetrahydropyran)
                        && !p.in_ring(4)
                        && ring_run(p, 5, 7, R::Tetrahydropyran)
                        && hydroxyl(p, 7)
                        && !p.in_ring(7)
                },
                &[M::TwoPrimeFiveDioxygenatedThreeOGlycosylHexopyranose],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && open_run(p, 0, 2)
                        && ring_run(p, 2, 4, R::Tetrahydropyran)
                        && !p.in_ring(4)
                        && ring_run(p, 5, 7, R::Tetrahydropyran)
                        && hydroxyl(p, 7)
                        && !p.in_ring(7)
                },
                &[M::TwoPrimeSixDioxygenatedFourOGlycosylHexopyranose],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && ring_run(p, 1, 3, R::Tetrahydropyran)
                        && open_run(p, 3, 5)
                        && ring_run(p, 5, 7, R::Tetrahydropyran)
                        && hydroxyl(p, 7)
                        && !p.in_ring(7)
                },
                &[M::TwoPrimeFourDioxygenatedSixOGlycosylHexopyranose],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && ring_run(p, 1, 4, R::Tetrahydropyran)
                        && open_run(p, 4, 6)
                        && ring_run(p, 6, 8, R::Tetrahydropyran)
                },
                &[M::ThreePrimeFiveDioxygenatedSixOGlycosylHexopyranose],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && ring_run(p, 1, 4, R::Tetrahydrofuran)
                        && !p.in_ring(4)
                        && ring_run(p, 5, 7, R::Tetrahydropyran)
                        && hydroxyl(p, 7)
                        && !p.in_ring(7)
                },
                &[M::TwoPrimeFourDioxygenatedSucroseTypeDisaccharide],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && ring_run(p, 1, 4, R::Tetrahydropyran)
                        && !p.in_ring(4)
                        && p.in_ring_of(5, R::Tetrahydrofuran)
                        && open_run(p, 6, 8)
                },
                &[M::OneThreePrimeDioxygenatedSucroseTypeDisaccharide],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && ring_run(p, 1, 4, R::Tetrahydropyran)
                        && !p.in_ring(4)
                        && ring_run(p, 5, 7, R::Tetrahydrofuran)
                        && hydroxyl(p, 7)
                        && !p.in_ring(7)
                },
                &[M::ThreeThreePrimeDioxygenatedSucroseTypeDisaccharide],
            ),
        ],
    );

    t.add(
        "O-C-C-C-C-O-C-O",
        clauses![
            when(
                |p| {
                    hydroxyl(p, 0)
                        && open_run(p, 0, 2)
                        && ring_run(p, 2, 5, R::Tetrahydropyran)
                        && !p.in_ring(5)
                        && ring_run(p, 6, 8, R::Tetrahydropyran)
                },
                &[M::FivePrimeSixDioxygenatedThreeOGlycosylHexopyranose],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && ring_run(p, 1, 5, R::Tetrahydropyran)
                        && !p.in_ring(5)
                        && ring_run(p, 6, 8, R::Tetrahydropyran)
                },
                &[M::OneFivePrimeDioxygenatedFourOGlycosylHexopyranose],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && ring_run(p, 1, 4, R::Tetrahydropyran)
                        && open_run(p, 4, 6)
                        && ring_run(p, 6, 8, R::Tetrahydropyran)
                },
                &[M::ThreeFivePrimeDioxygenatedSixOGlycosylHexopyranose],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && ring_run(p, 1, 5, R::Tetrahydropyran)
                        && !p.in_ring(5)
                        && ring_run(p, 6, 8, R::Tetrahydrofuran)
                },
                &[M::FourPrimeFiveDioxygenatedSucroseTypeDisaccharide],
            ),
        ],
    );

    t.add(
        "O-C-O-C-C-O-C-O",
        clauses![
            when(
                |p| {
                    ring_run(p, 0, 2, R::Tetrahydropyran)
                        && !p.in_ring(2)
                        && ring_run(p, 3, 7, R::Tetrahydropyran)
                        && hydroxyl(p, 7)
                        && !p.in_ring(7)
                },
                &[M::OneFivePrimeDioxygenatedFourOGlycosylHexopyranose],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && ring_run(p, 1, 5, R::Tetrahydropyran)
                        && !p.in_ring(5)
                        && ring_run(p, 6, 8, R::Tetrahydropyran)
                },
                &[M::OneFivePrimeDioxygenatedFourOGlycosylHexopyranose],
            ),
            when(
                |p| {
                    ring_run(p, 0, 2, R::Tetrahydropyran)
                        && open_run(p, 2, 4)
                        && ring_run(p, 4, 7, R::Tetrahydropyran)
                        && hydroxyl(p, 7)
                        && !p.in_ring(7)
                },
                &[M::OneFivePrimeDioxygenatedSixOGlycosylHexopyranose],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && ring_run(p, 1, 4, R::Tetrahydropyran)
                        && open_run(p, 4, 6)
                        && ring_run(p, 6, 8, R::Tetrahydropyran)
                },
                &[M::OneFivePrimeDioxygenatedSixOGlycosylHexopyranose],
            ),
        ],
    );

    t.add(
        "O-C-C-O-C-O-C-O",
        clauses![
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && ring_run(p, 1, 5, R::Tetrahydropyran)
                        && !p.in_ring(5)
                        && ring_run(p, 6, 8, R::Tetrahydrofuran)
                },
                &[M::FourPrimeFiveDioxygenatedSucroseTypeDisaccharide],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && open_run(p, 0, 2)
                        && ring_run(p, 2, 5, R::Tetrahydrofuran)
                        && !p.in_ring(5)
                        && ring_run(p, 6, 8, R::Tetrahydropyran)
                },
                &[M::FivePrimeSixDioxygenatedSucroseTypeDisaccharide],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && open_run(p, 0, 2)
                        && ring_run(p, 2, 5, R::Tetrahydropyran)
                        && !p.in_ring(5)
                        && ring_run(p, 6, 8, R::Tetrahydrofuran)
                },
                &[M::FiveSixPrimeDioxygenatedSucroseTypeDisaccharide],
            ),
        ],
    );

    t.add(
        "O-C-O-C:C:C:C-O",
        clauses![when(
            |p| {
                ring_run(p, 0, 2, R::Tetrahydropyran)
                    && !p.in_ring(2)
                    && ring_run(p, 3, 7, R::Benzene)
                    && hydroxyl(p, 7)
                    && !p.in_ring(7)
            },
            &[M::FourPrimeFiveDioxygenatedArylGlucuronide],
        )],
    );

    t.add(
        "O-C-C-O-C-O-C=O",
        clauses![
            when(
                |p| hydroxyl(p, 0) && !p.in_ring(0) && ring_run(p, 1, 5, R::Tetrahydropyran) && open_run(p, 5, 8),
                &[M::FourAcylDioxygenatedOneOAcylHexopyranose],
            ),
            when(
                |p| hydroxyl(p, 0) && open_run(p, 0, 2) && ring_run(p, 2, 5, R::Tetrahydropyran) && open_run(p, 5, 8),
                &[M::SixAcylDioxygenatedOneOAcylHexopyranose],
            ),
        ],
    );

    t.add(
        "O-C-C-C-C-O-C=O",
        clauses![
            when(
                |p| hydroxyl(p, 0) && !p.in_ring(0) && ring_run(p, 1, 5, R::Tetrahydropyran) && open_run(p, 5, 8),
                &[M::FourAcylDioxygenatedOneOAcylHexopyranose],
            ),
            when(
                |p| hydroxyl(p, 0) && !p.in_ring(0) && ring_run(p, 1, 4, R::Tetrahydropyran) && open_run(p, 4, 8),
                &[M::ThreeAcylDioxygenatedSixOAcylHexopyranose],
            ),
        ],
    );

    t.add(
        "O-C-O-C-C-O-C=O",
        clauses![when(
            |p| hydroxyl(p, 0) && !p.in_ring(0) && ring_run(p, 1, 4, R::Tetrahydropyran) && open_run(p, 4, 8),
            &[M::OneAcylDioxygenatedSixOAcylHexopyranose],
        )],
    );
}

fn nine(t: &mut RuleTable) {
    t.extend(
        "O-C-C-C-O-C-C-C-O",
        clauses![
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && ring_run(p, 1, 4, R::Tetrahydropyran)
                        && !p.in_ring(4)
                        && ring_run(p, 5, 8, R::Tetrahydropyran)
                        && hydroxyl(p, 8)
                        && !p.in_ring(8)
                },
                &[M::ThreePrimeFourDioxygenatedTwoOGlycosylHexopyranose],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && ring_run(p, 1, 4, R::Tetrahydropyran)
                        && !p.in_ring(4)
                        && ring_run(p, 5, 9, R::Tetrahydropyran)
                },
                &[M::ThreePrimeFiveDioxygenatedThreeOGlycosylHexopyranose],
            ),
            when(
                |p| {
                    ring_run(p, 0, 4, R::Tetrahydropyran)
                        && !p.in_ring(4)
                        && ring_run(p, 5, 8, R::Tetrahydropyran)
                        && hydroxyl(p, 8)
                        && !p.in_ring(8)
                },
                &[M::ThreePrimeFiveDioxygenatedThreeOGlycosylHexopyranose],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && ring_run(p, 1, 4, R::Tetrahydropyran)
                        && !p.in_ring(4)
                        && ring_run(p, 5, 7, R::Tetrahydropyran)
                        && open_run(p, 7, 9)
                },
                &[M::ThreePrimeSixDioxygenatedFourOGlycosylHexopyranose],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && open_run(p, 0, 2)
                        && ring_run(p, 2, 4, R::Tetrahydropyran)
                        && !p.in_ring(4)
                        && ring_run(p, 5, 8, R::Tetrahydropyran)
                        && hydroxyl(p, 8)
                        && !p.in_ring(8)
                },
                &[M::ThreePrimeSixDioxygenatedFourOGlycosylHexopyranose],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && ring_run(p, 1, 4, R::Tetrahydropyran)
                        && open_run(p, 4, 6)
                        && ring_run(p, 6, 8, R::Tetrahydropyran)
                        && hydroxyl(p, 8)
                        && !p.in_ring(8)
                },
                &[M::ThreePrimeFourDioxygenatedSixOGlycosylHexopyranose],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && ring_run(p, 1, 3, R::Tetrahydropyran)
                        && open_run(p, 3, 5)
                        && ring_run(p, 5, 8, R::Tetrahydropyran)
                        && hydroxyl(p, 8)
                        && !p.in_ring(8)
                },
                &[M::ThreePrimeFourDioxygenatedSixOGlycosylHexopyranose],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && ring_run(p, 1, 4, R::Tetrahydropyran)
                        && !p.in_ring(4)
                        && ring_run(p, 5, 8, R::Tetrahydrofuran)
                        && hydroxyl(p, 8)
                        && !p.in_ring(8)
                },
                &[M::ThreePrimeFourDioxygenatedSucroseTypeDisaccharide],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && ring_run(p, 1, 4, R::Tetrahydrofuran)
                        && !p.in_ring(4)
                        && ring_run(p, 5, 8, R::Tetrahydropyran)
                        && hydroxyl(p, 8)
                        && !p.in_ring(8)
                },
                &[M::ThreePrimeFourDioxygenatedSucroseTypeDisaccharide],
            ),
        ],
    );

    t.add(
        "O-C-C-O-C-O-C-C-O",
        clauses![
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && ring_run(p, 1, 5, R::Tetrahydropyran)
                        && !p.in_ring(5)
                        && ring_run(p, 6, 8, R::Tetrahydropyran)
                        && hydroxyl(p, 8)
                        && !p.in_ring(8)
                },
                &[M::OneFourPrimeOrThreeFourPrimeDioxygenatedTwoOGlycosylHexopyranose],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && ring_run(p, 1, 3, R::Tetrahydropyran)
                        && !p.in_ring(3)
                        && ring_run(p, 4, 8, R::Tetrahydropyran)
                        && hydroxyl(p, 8)
                        && !p.in_ring(8)
                },
                &[M::OneFourPrimeOrThreeFourPrimeDioxygenatedTwoOGlycosylHexopyranose],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && ring_run(p, 1, 5, R::Tetrahydropyran)
                        && !p.in_ring(5)
                        && ring_run(p, 6, 9, R::Tetrahydropyran)
                },
                &[M::FourPrimeFiveDioxygenatedTwoOGlycosylHexopyranose],
            ),
            when(
                |p| {
                    ring_run(p, 0, 3, R::Tetrahydropyran)
                        && !p.in_ring(3)
                        && ring_run(p, 4, 8, R::Tetrahydropyran)
                        && hydroxyl(p, 8)
                        && !p.in_ring(8)
                },
                &[M::FourPrimeFiveDioxygenatedTwoOGlycosylHexopyranose],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && open_run(p, 0, 2)
                        && ring_run(p, 2, 5, R::Tetrahydropyran)
                        && !p.in_ring(5)
                        && ring_run(p, 6, 8, R::Tetrahydropyran)
                        && hydroxyl(p, 8)
                        && !p.in_ring(8)
                },
                &[M::OneSixPrimeOrThreeSixPrimeDioxygenatedTwoOGlycosylHexopyranose],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && ring_run(p, 1, 3, R::Tetrahydropyran)
                        && !p.in_ring(3)
                        && ring_run(p, 4, 7, R::Tetrahydropyran)
                        && open_run(p, 7, 9)
                },
                &[M::OneSixPrimeOrThreeSixPrimeDioxygenatedTwoOGlycosylHexopyranose],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && open_run(p, 0, 2)
                        && ring_run(p, 2, 5, R::Tetrahydropyran)
                        && !p.in_ring(5)
                        && ring_run(p, 6, 9, R::Tetrahydropyran)
                },
                &[M::FiveSixPrimeDioxygenatedTwoOGlycosylHexopyranose],
            ),
            when(
                |p| {
                    ring_run(p, 0, 3, R::Tetrahydropyran)
                        && !p.in_ring(3)
                        && ring_run(p, 4, 7, R::Tetrahydropyran)
                        && open_run(p, 7, 9)
                },
                &[M::FiveSixPrimeDioxygenatedTwoOGlycosylHexopyranose],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && ring_run(p, 1, 5, R::Tetrahydropyran)
                        && open_run(p, 5, 7)
                        && ring_run(p, 7, 9, R::Tetrahydropyran)
                },
                &[M::FourPrimeFiveDioxygenatedSixOGlycosylHexopyranose],
            ),
            when(
                |p| {
                    ring_run(p, 0, 2, R::Tetrahydropyran)
                        && open_run(p, 2, 4)
                        && ring_run(p, 4, 8, R::Tetrahydropyran)
                        && hydroxyl(p, 8)
                        && !p.in_ring(8)
                },
                &[M::FourPrimeFiveDioxygenatedSixOGlycosylHexopyranose],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && open_run(p, 0, 2)
                        && ring_run(p, 2, 5, R::Tetrahydropyran)
                        && open_run(p, 5, 7)
                        && ring_run(p, 7, 9, R::Tetrahydropyran)
                },
                &[M::FiveSixPrimeDioxygenatedSixOGlycosylHexopyranose],
            ),
            when(
                |p| {
                    ring_run(p, 0, 2, R::Tetrahydropyran)
                        && open_run(p, 2, 4)
                        && ring_run(p, 4, 7, R::Tetrahydropyran)
                        && open_run(p, 7, 9)
                },
                &[M::FiveSixPrimeDioxygenatedSixOGlycosylHexopyranose],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && ring_run(p, 1, 3, R::Tetrahydropyran)
                        && !p.in_ring(3)
                        && ring_run(p, 4, 7, R::Tetrahydrofuran)
                        && open_run(p, 7, 9)
                },
                &[M::TwoPrimeSixDioxygenatedSucroseTypeDisaccharide],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && open_run(p, 0, 2)
                        && ring_run(p, 2, 5, R::Tetrahydrofuran)
                        && !p.in_ring(5)
                        && ring_run(p, 6, 8, R::Tetrahydropyran)
                        && hydroxyl(p, 8)
                        && !p.in_ring(8)
                },
                &[M::TwoPrimeSixDioxygenatedSucroseTypeDisaccharide],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && ring_run(p, 1, 5, R::Tetrahydropyran)
                        && !p.in_ring(5)
                        && p.in_ring_of(6, R::Tetrahydrofuran)
                        && open_run(p, 7, 9)
                },
                &[M::OneFourPrimeDioxygenatedSucroseTypeDisaccharide],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && open_run(p, 0, 2)
                        && p.in_ring_of(2, R::Tetrahydrofuran)
                        && !p.in_ring(3)
                        && ring_run(p, 4, 8, R::Tetrahydropyran)
                        && hydroxyl(p, 8)
                        && !p.in_ring(8)
                },
                &[M::OneFourPrimeDioxygenatedSucroseTypeDisaccharide],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && ring_run(p, 1, 5, R::Tetrahydropyran)
                        && !p.in_ring(5)
                        && ring_run(p, 6, 8, R::Tetrahydrofuran)
                        && hydroxyl(p, 8)
                        && !p.in_ring(8)
                },
                &[M::ThreeFourPrimeDioxygenatedSucroseTypeDisaccharide],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && ring_run(p, 1, 3, R::Tetrahydrofuran)
                        && !p.in_ring(3)
                        && ring_run(p, 4, 8, R::Tetrahydropyran)
                        && hydroxyl(p, 8)
                        && !p.in_ring(8)
                },
                &[M::ThreeFourPrimeDioxygenatedSucroseTypeDisaccharide],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && open_run(p, 0, 2)
                        && ring_run(p, 2, 5, R::Tetrahydropyran)
                        && !p.in_ring(5)
                        && p.in_ring_of(6, R::Tetrahydrofuran)
                        && open_run(p, 7, 9)
                },
                &[M::OneSixPrimeDioxygenatedSucroseTypeDisaccharide],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && open_run(p, 0, 2)
                        && p.in_ring_of(2, R::Tetrahydrofuran)
                        && !p.in_ring(3)
                        && ring_run(p, 4, 7, R::Tetrahydropyran)
                        && open_run(p, 7, 9)
                },
                &[M::OneSixPrimeDioxygenatedSucroseTypeDisaccharide],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && open_run(p, 0, 2)
                        && ring_run(p, 2, 5, R::Tetrahydropyran)
                        && !p.in_ring(5)
                        && ring_run(p, 6, 8, R::Tetrahydrofuran)
                        && hydroxyl(p, 8)
                        && !p.in_ring(8)
                },
                &[M::ThreeSixPrimeDioxygenatedSucroseTypeDisaccharide],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && ring_run(p, 1, 3, R::Tetrahydrofuran)
                        && !p.in_ring(3)
                        && ring_run(p, 4, 7, R::Tetrahydropyran)
                        && open_run(p, 7, 9)
                },
                &[M::ThreeSixPrimeDioxygenatedSucroseTypeDisaccharide],
            ),
        ],
    );

    t.add(
        "O-C-C-C-C-O-C-C-O",
        clauses![
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && ring_run(p, 1, 5, R::Tetrahydropyran)
                        && !p.in_ring(5)
                        && ring_run(p, 6, 8, R::Tetrahydropyran)
                        && hydroxyl(p, 8)
                        && !p.in_ring(8)
                },
                &[M::OneFourPrimeOrThreeFourPrimeDioxygenatedTwoOGlycosylHexopyranose],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && ring_run(p, 1, 5, R::Tetrahydropyran)
                        && !p.in_ring(5)
                        && ring_run(p, 6, 9, R::Tetrahydropyran)
                },
                &[M::FourPrimeFiveDioxygenatedTwoOGlycosylHexopyranose],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && open_run(p, 0, 2)
                        && ring_run(p, 2, 5, R::Tetrahydropyran)
                        && !p.in_ring(5)
                        && ring_run(p, 6, 8, R::Tetrahydropyran)
                        && hydroxyl(p, 8)
                        && !p.in_ring(8)
                },
                &[M::TwoPrimeSixDioxygenatedThreeOGlycosylHexopyranose],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && ring_run(p, 1, 4, R::Tetrahydropyran)
                        && open_run(p, 4, 6)
                        && ring_run(p, 6, 8, R::Tetrahydropyran)
                        && hydroxyl(p, 8)
                        && !p.in_ring(8)
                },
                &[M::TwoPrimeThreeDioxygenatedSixOGlycosylHexopyranose],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && ring_run(p, 1, 5, R::Tetrahydropyran)
                        && open_run(p, 5, 7)
                        && ring_run(p, 7, 9, R::Tetrahydropyran)
                },
                &[M::FourPrimeFiveDioxygenatedSixOGlycosylHexopyranose],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && ring_run(p, 1, 5, R::Tetrahydropyran)
                        && !p.in_ring(5)
                        && p.in_ring_of(6, R::Tetrahydrofuran)
                        && open_run(p, 7, 9)
                },
                &[M::OneFourPrimeDioxygenatedSucroseTypeDisaccharide],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && ring_run(p, 1, 5, R::Tetrahydropyran)
                        && !p.in_ring(5)
                        && ring_run(p, 6, 8, R::Tetrahydrofuran)
                        && hydroxyl(p, 8)
                        && !p.in_ring(8)
                },
                &[M::ThreeFourPrimeDioxygenatedSucroseTypeDisaccharide],
            ),
        ],
    );

    t.add(
        "O-C-C-C-C-C-O-C-O",
        clauses![
            when(
                |p| {
                    hydroxyl(p, 0)
                        && open_run(p, 0, 2)
                        && ring_run(p, 2, 6, R::Tetrahydropyran)
                        && !p.in_ring(6)
                        && ring_run(p, 7, 9, R::Tetrahydropyran)
                },
                &[M::FivePrimeSixDioxygenatedTwoOGlycosylHexopyranose],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && ring_run(p, 1, 5, R::Tetrahydropyran)
                        && open_run(p, 5, 7)
                        && ring_run(p, 7, 9, R::Tetrahydropyran)
                },
                &[M::TwoFivePrimeDioxygenatedSixOGlycosylHexopyranose],
            ),
        ],
    );

    t.add(
        "O-C-C-O-C-C-O-C-O",
        clauses![
            when(
                |p| {
                    hydroxyl(p, 0)
                        && open_run(p, 0, 2)
                        && ring_run(p, 2, 6, R::Tetrahydropyran)
                        && !p.in_ring(6)
                        && ring_run(p, 7, 9, R::Tetrahydropyran)
                },
                &[M::FivePrimeSixDioxygenatedTwoOGlycosylHexopyranose],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && ring_run(p, 1, 3, R::Tetrahydropyran)
                        && !p.in_ring(3)
                        && ring_run(p, 4, 8, R::Tetrahydropyran)
                        && hydroxyl(p, 8)
                        && !p.in_ring(8)
                },
                &[M::OneTwoPrimeDioxygenatedFourOGlycosylHexopyranose],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && ring_run(p, 1, 3, R::Tetrahydropyran)
                        && open_run(p, 3, 5)
                        && ring_run(p, 5, 8, R::Tetrahydropyran)
                        && hydroxyl(p, 8)
                        && !p.in_ring(8)
                },
                &[M::OneTwoPrimeDioxygenatedSixOGlycosylHexopyranose],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && ring_run(p, 1, 5, R::Tetrahydropyran)
                        && open_run(p, 5, 7)
                        && ring_run(p, 7, 9, R::Tetrahydropyran)
                },
                &[M::TwoFivePrimeDioxygenatedSixOGlycosylHexopyranose],
            ),
        ],
    );

    t.add(
        "O-C-C-O-C:C:C:C-O",
        clauses![when(
            |p| {
                hydroxyl(p, 0)
                    && !p.in_ring(0)
                    && ring_run(p, 1, 3, R::Tetrahydropyran)
                    && !p.in_ring(3)
                    && ring_run(p, 4, 8, R::Benzene)
                    && hydroxyl(p, 8)
                    && !p.in_ring(8)
            },
            &[M::TwoFourPrimeDioxygenatedArylGlucuronide],
        )],
    );

    t.add(
        "O-C-C-O-C-C-N-C=O",
        clauses![when(
            |p| hydroxyl(p, 0) && open_run(p, 0, 2) && ring_run(p, 2, 6, R::Tetrahydropyran) && open_run(p, 6, 9),
            &[M::SixAcetylDioxygenatedNAcetylhexosamineGlycoside],
        )],
    );

    t.add(
        "O-C-C-C-C-C-N-C=O",
        clauses![when(
            |p| hydroxyl(p, 0) && open_run(p, 0, 2) && ring_run(p, 2, 6, R::Tetrahydropyran) && open_run(p, 6, 9),
            &[M::SixAcetylDioxygenatedNAcetylhexosamineGlycoside],
        )],
    );

    t.add(
        "O-C-C-O-C-C-O-C=O",
        clauses![when(
            |p| hydroxyl(p, 0) && !p.in_ring(0) && ring_run(p, 1, 5, R::Tetrahydropyran) && open_run(p, 5, 9),
            &[M::TwoAcylDioxygenatedSixOAcylHexopyranose],
        )],
    );

    t.add(
        "O-C-C-C-C-C-O-C=O",
        clauses![when(
            |p| hydroxyl(p, 0) && !p.in_ring(0) && ring_run(p, 1, 5, R::Tetrahydropyran) && open_run(p, 5, 9),
            &[M::TwoAcylDioxygenatedSixOAcylHexopyranose],
        )],
    );
}

fn ten(t: &mut RuleTable) {
    t.add(
        "O-C-C-C-C-C-O-C-C-O",
        clauses![
            when(
                |p| {
                    hydroxyl(p, 0)
                        && open_run(p, 0, 2)
                        && ring_run(p, 2, 6, R::Tetrahydropyran)
                        && !p.in_ring(6)
                        && ring_run(p, 7, 9, R::Tetrahydropyran)
                        && hydroxyl(p, 9)
                        && !p.in_ring(9)
                },
                &[M::TwoPrimeSixDioxygenatedTwoOGlycosylHexopyranose],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && ring_run(p, 1, 5, R::Tetrahydropyran)
                        && open_run(p, 5, 7)
                        && ring_run(p, 7, 9, R::Tetrahydropyran)
                        && hydroxyl(p, 9)
                        && !p.in_ring(9)
                },
                &[M::TwoTwoPrimeDioxygenatedSixOGlycosylHexopyranose],
            ),
        ],
    );

    t.extend(
        "O-C-C-O-C-C-O-C-C-O",
        clauses![
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && ring_run(p, 1, 3, R::Tetrahydropyran)
                        && !p.in_ring(3)
                        && ring_run(p, 4, 8, R::Tetrahydropyran)
                        && open_run(p, 8, 10)
                },
                &[M::TwoPrimeSixDioxygenatedTwoOGlycosylHexopyranose],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && open_run(p, 0, 2)
                        && ring_run(p, 2, 6, R::Tetrahydropyran)
                        && !p.in_ring(6)
                        && ring_run(p, 7, 9, R::Tetrahydropyran)
                        && hydroxyl(p, 9)
                        && !p.in_ring(9)
                },
                &[M::TwoPrimeSixDioxygenatedTwoOGlycosylHexopyranose],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && ring_run(p, 1, 3, R::Tetrahydropyran)
                        && open_run(p, 3, 5)
                        && ring_run(p, 5, 9, R::Tetrahydropyran)
                        && hydroxyl(p, 9)
                        && !p.in_ring(9)
                },
                &[M::TwoTwoPrimeDioxygenatedSixOGlycosylHexopyranose],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && ring_run(p, 1, 5, R::Tetrahydropyran)
                        && open_run(p, 5, 7)
                        && ring_run(p, 7, 9, R::Tetrahydropyran)
                        && hydroxyl(p, 9)
                        && !p.in_ring(9)
                },
                &[M::TwoTwoPrimeDioxygenatedSixOGlycosylHexopyranose],
            ),
        ],
    );

    t.add(
        "O-C-C-C-O-C-O-C-C-O",
        clauses![
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && ring_run(p, 1, 4, R::Tetrahydropyran)
                        && !p.in_ring(4)
                        && ring_run(p, 5, 9, R::Tetrahydropyran)
                        && hydroxyl(p, 9)
                        && !p.in_ring(9)
                },
                &[M::FourFourPrimeDioxygenatedTwoOGlycosylHexopyranose],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && ring_run(p, 1, 4, R::Tetrahydropyran)
                        && !p.in_ring(4)
                        && ring_run(p, 5, 8, R::Tetrahydropyran)
                        && open_run(p, 8, 10)
                },
                &[M::FourSixPrimeDioxygenatedTwoOGlycosylHexopyranose],
            ),
            when(
                |p| {
                    ring_run(p, 0, 4, R::Tetrahydropyran)
                        && !p.in_ring(4)
                        && ring_run(p, 5, 9, R::Tetrahydropyran)
                        && hydroxyl(p, 9)
                        && !p.in_ring(9)
                },
                &[M::FourPrimeFiveDioxygenatedThreeOGlycosylHexopyranose],
            ),
            when(
                |p| {
                    ring_run(p, 0, 4, R::Tetrahydropyran)
                        && !p.in_ring(4)
                        && ring_run(p, 5, 8, R::Tetrahydropyran)
                        && open_run(p, 8, 10)
                },
                &[M::FiveSixPrimeDioxygenatedThreeOGlycosylHexopyranose],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && open_run(p, 0, 2)
                        && ring_run(p, 2, 4, R::Tetrahydropyran)
                        && !p.in_ring(4)
                        && ring_run(p, 5, 9, R::Tetrahydropyran)
                        && hydroxyl(p, 9)
                        && !p.in_ring(9)
                },
                &[M::FourPrimeSixDioxygenatedFourOGlycosylHexopyranose],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && open_run(p, 0, 2)
                        && ring_run(p, 2, 4, R::Tetrahydropyran)
                        && !p.in_ring(4)
                        && ring_run(p, 5, 8, R::Tetrahydropyran)
                        && open_run(p, 8, 10)
                },
                &[M::SixSixPrimeDioxygenatedFourOGlycosylHexopyranose],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && ring_run(p, 1, 3, R::Tetrahydropyran)
                        && open_run(p, 3, 5)
                        && ring_run(p, 5, 9, R::Tetrahydropyran)
                        && hydroxyl(p, 9)
                        && !p.in_ring(9)
                },
                &[M::FourFourPrimeDioxygenatedSixOGlycosylHexopyranose],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && ring_run(p, 1, 3, R::Tetrahydropyran)
                        && open_run(p, 3, 5)
                        && ring_run(p, 5, 8, R::Tetrahydropyran)
                        && open_run(p, 8, 10)
                },
                &[M::FourSixPrimeDioxygenatedSixOGlycosylHexopyranose],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && ring_run(p, 1, 4, R::Tetrahydropyran)
                        && !p.in_ring(4)
                        && ring_run(p, 5, 8, R::Tetrahydrofuran)
                        && open_run(p, 8, 10)
                },
                &[M::ThreePrimeSixDioxygenatedSucroseTypeDisaccharide],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && ring_run(p, 1, 4, R::Tetrahydrofuran)
                        && !p.in_ring(4)
                        && ring_run(p, 5, 9, R::Tetrahydropyran)
                        && hydroxyl(p, 9)
                        && !p.in_ring(9)
                },
                &[M::FourFourPrimeDioxygenatedSucroseTypeDisaccharide],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && ring_run(p, 1, 4, R::Tetrahydrofuran)
                        && !p.in_ring(4)
                        && ring_run(p, 5, 8, R::Tetrahydropyran)
                        && open_run(p, 8, 10)
                },
                &[M::FourSixPrimeDioxygenatedSucroseTypeDisaccharide],
            ),
        ],
    );

    t.add(
        "O-C-C-C-C-O-C-C-C-O",
        clauses![
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && ring_run(p, 1, 5, R::Tetrahydropyran)
                        && !p.in_ring(5)
                        && ring_run(p, 6, 9, R::Tetrahydropyran)
                        && hydroxyl(p, 9)
                        && !p.in_ring(9)
                },
                &[M::FourFourPrimeDioxygenatedTwoOGlycosylHexopyranose],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && open_run(p, 0, 2)
                        && ring_run(p, 2, 5, R::Tetrahydropyran)
                        && !p.in_ring(5)
                        && ring_run(p, 6, 9, R::Tetrahydropyran)
                        && hydroxyl(p, 9)
                        && !p.in_ring(9)
                },
                &[M::ThreePrimeSixDioxygenatedThreeOGlycosylHexopyranose],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && ring_run(p, 1, 5, R::Tetrahydropyran)
                        && !p.in_ring(5)
                        && ring_run(p, 6, 10, R::Tetrahydropyran)
                },
                &[M::FourPrimeFiveDioxygenatedThreeOGlycosylHexopyranose],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && ring_run(p, 1, 5, R::Tetrahydropyran)
                        && !p.in_ring(5)
                        && ring_run(p, 6, 8, R::Tetrahydropyran)
                        && open_run(p, 8, 10)
                },
                &[M::FourPrimeSixDioxygenatedFourOGlycosylHexopyranose],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && ring_run(p, 1, 4, R::Tetrahydropyran)
                        && open_run(p, 4, 6)
                        && ring_run(p, 6, 9, R::Tetrahydropyran)
                        && hydroxyl(p, 9)
                        && !p.in_ring(9)
                },
                &[M::ThreeThreePrimeDioxygenatedSixOGlycosylHexopyranose],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && ring_run(p, 1, 5, R::Tetrahydropyran)
                        && open_run(p, 5, 7)
                        && ring_run(p, 7, 9, R::Tetrahydropyran)
                        && hydroxyl(p, 9)
                        && !p.in_ring(9)
                },
                &[M::FourFourPrimeDioxygenatedSixOGlycosylHexopyranose],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && ring_run(p, 1, 5, R::Tetrahydropyran)
                        && !p.in_ring(5)
                        && ring_run(p, 6, 9, R::Tetrahydrofuran)
                        && hydroxyl(p, 9)
                        && !p.in_ring(9)
                },
                &[M::FourFourPrimeDioxygenatedSucroseTypeDisaccharide],
            ),
        ],
    );

    t.add(
        "O-C-C-C-O-C-C-O-C-O",
        clauses![
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && ring_run(p, 1, 4, R::Tetrahydropyran)
                        && !p.in_ring(4)
                        && ring_run(p, 5, 9, R::Tetrahydropyran)
                        && hydroxyl(p, 9)
                        && !p.in_ring(9)
                },
                &[M::OneThreePrimeDioxygenatedFourOGlycosylHexopyranose],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && ring_run(p, 1, 4, R::Tetrahydropyran)
                        && open_run(p, 4, 6)
                        && ring_run(p, 6, 9, R::Tetrahydropyran)
                        && hydroxyl(p, 9)
                        && !p.in_ring(9)
                },
                &[M::OneThreePrimeDioxygenatedSixOGlycosylHexopyranose],
            ),
        ],
    );

    t.add(
        "O-C-C-C-O-C:C:C:C-O",
        clauses![when(
            |p| {
                hydroxyl(p, 0)
                    && !p.in_ring(0)
                    && ring_run(p, 1, 4, R::Tetrahydropyran)
                    && !p.in_ring(4)
                    && ring_run(p, 5, 9, R::Benzene)
                    && hydroxyl(p, 9)
                    && !p.in_ring(9)
            },
            &[M::ThreeFourPrimeDioxygenatedArylGlucuronide],
        )],
    );
}

fn eleven(t: &mut RuleTable) {
    t.add(
        "O-C-C-C-C-C-O-C-C-C-O",
        clauses![
            when(
                |p| {
                    hydroxyl(p, 0)
                        && open_run(p, 0, 2)
                        && ring_run(p, 2, 6, R::Tetrahydropyran)
                        && !p.in_ring(6)
                        && ring_run(p, 7, 10, R::Tetrahydropyran)
                        && hydroxyl(p, 10)
                        && !p.in_ring(10)
                },
                &[M::ThreePrimeSixDioxygenatedTwoOGlycosylHexopyranose],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && ring_run(p, 1, 5, R::Tetrahydropyran)
                        && open_run(p, 5, 7)
                        && ring_run(p, 7, 10, R::Tetrahydropyran)
                        && hydroxyl(p, 10)
                        && !p.in_ring(10)
                },
                &[M::TwoThreePrimeDioxygenatedSixOGlycosylHexopyranose],
            ),
        ],
    );

    t.add(
        "O-C-C-C-O-C-C-O-C-C-O",
        clauses![
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && ring_run(p, 1, 4, R::Tetrahydropyran)
                        && !p.in_ring(4)
                        && ring_run(p, 5, 9, R::Tetrahydropyran)
                        && open_run(p, 9, 11)
                },
                &[M::ThreePrimeSixDioxygenatedTwoOGlycosylHexopyranose],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && ring_run(p, 1, 4, R::Tetrahydropyran)
                        && open_run(p, 4, 6)
                        && ring_run(p, 6, 10, R::Tetrahydropyran)
                        && hydroxyl(p, 10)
                        && !p.in_ring(10)
                },
                &[M::TwoThreePrimeDioxygenatedSixOGlycosylHexopyranose],
            ),
        ],
    );

    t.add(
        "O-C-C-C-C-O-C-O-C-C-O",
        clauses![
            when(
                |p| {
                    hydroxyl(p, 0)
                        && open_run(p, 0, 2)
                        && ring_run(p, 2, 5, R::Tetrahydropyran)
                        && !p.in_ring(5)
                        && ring_run(p, 6, 10, R::Tetrahydropyran)
                        && hydroxyl(p, 10)
                        && !p.in_ring(10)
                },
                &[M::FourPrimeSixDioxygenatedThreeOGlycosylHexopyranose],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && open_run(p, 0, 2)
                        && ring_run(p, 2, 5, R::Tetrahydropyran)
                        && !p.in_ring(5)
                        && ring_run(p, 6, 9, R::Tetrahydropyran)
                        && open_run(p, 9, 11)
                },
                &[M::SixSixPrimeDioxygenatedThreeOGlycosylHexopyranose],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && ring_run(p, 1, 5, R::Tetrahydropyran)
                        && !p.in_ring(5)
                        && ring_run(p, 6, 10, R::Tetrahydropyran)
                        && hydroxyl(p, 10)
                        && !p.in_ring(10)
                },
                &[M::OneFourPrimeDioxygenatedFourOGlycosylHexopyranose],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && ring_run(p, 1, 5, R::Tetrahydropyran)
                        && !p.in_ring(5)
                        && ring_run(p, 6, 9, R::Tetrahydropyran)
                        && open_run(p, 9, 11)
                },
                &[M::OneSixPrimeDioxygenatedFourOGlycosylHexopyranose],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && ring_run(p, 1, 4, R::Tetrahydropyran)
                        && open_run(p, 4, 6)
                        && ring_run(p, 6, 10, R::Tetrahydropyran)
                        && hydroxyl(p, 10)
                        && !p.in_ring(10)
                },
                &[M::ThreeFourPrimeDioxygenatedSixOGlycosylHexopyranose],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && ring_run(p, 1, 4, R::Tetrahydropyran)
                        && open_run(p, 4, 6)
                        && ring_run(p, 6, 9, R::Tetrahydropyran)
                        && open_run(p, 9, 11)
                },
                &[M::ThreeSixPrimeDioxygenatedSixOGlycosylHexopyranose],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && ring_run(p, 1, 5, R::Tetrahydropyran)
                        && !p.in_ring(5)
                        && ring_run(p, 6, 9, R::Tetrahydrofuran)
                        && open_run(p, 9, 11)
                },
                &[M::FourPrimeSixDioxygenatedSucroseTypeDisaccharide],
            ),
        ],
    );

    t.extend(
        "O-C-C-C-C-O-C-C-C-C-O",
        clauses![
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && ring_run(p, 1, 5, R::Tetrahydropyran)
                        && !p.in_ring(5)
                        && ring_run(p, 6, 9, R::Tetrahydropyran)
                        && open_run(p, 9, 11)
                },
                &[M::FourPrimeSixDioxygenatedThreeOGlycosylHexopyranose],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && open_run(p, 0, 2)
                        && ring_run(p, 2, 5, R::Tetrahydropyran)
                        && !p.in_ring(5)
                        && ring_run(p, 6, 10, R::Tetrahydropyran)
                        && hydroxyl(p, 10)
                        && !p.in_ring(10)
                },
                &[M::FourPrimeSixDioxygenatedThreeOGlycosylHexopyranose],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && ring_run(p, 1, 5, R::Tetrahydropyran)
                        && !p.in_ring(5)
                        && ring_run(p, 6, 10, R::Tetrahydropyran)
                        && hydroxyl(p, 10)
                        && !p.in_ring(10)
                },
                &[M::OneFourPrimeDioxygenatedFourOGlycosylHexopyranose],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && ring_run(p, 1, 5, R::Tetrahydropyran)
                        && open_run(p, 5, 7)
                        && ring_run(p, 7, 10, R::Tetrahydropyran)
                        && hydroxyl(p, 10)
                        && !p.in_ring(10)
                },
                &[M::ThreeFourPrimeDioxygenatedSixOGlycosylHexopyranose],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && ring_run(p, 1, 4, R::Tetrahydropyran)
                        && open_run(p, 4, 6)
                        && ring_run(p, 6, 10, R::Tetrahydropyran)
                        && hydroxyl(p, 10)
                        && !p.in_ring(10)
                },
                &[M::ThreeFourPrimeDioxygenatedSixOGlycosylHexopyranose],
            ),
        ],
    );

    t.add(
        "O-C-C-O-C-O-C-C-O-C-O",
        clauses![
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && ring_run(p, 1, 5, R::Tetrahydropyran)
                        && !p.in_ring(5)
                        && ring_run(p, 6, 10, R::Tetrahydropyran)
                        && hydroxyl(p, 10)
                        && !p.in_ring(10)
                },
                &[M::OneFourPrimeDioxygenatedFourOGlycosylHexopyranose],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && open_run(p, 0, 2)
                        && ring_run(p, 2, 5, R::Tetrahydropyran)
                        && !p.in_ring(5)
                        && ring_run(p, 6, 10, R::Tetrahydropyran)
                        && hydroxyl(p, 10)
                        && !p.in_ring(10)
                },
                &[M::OneSixPrimeDioxygenatedFourOGlycosylHexopyranose],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && ring_run(p, 1, 5, R::Tetrahydropyran)
                        && open_run(p, 5, 7)
                        && ring_run(p, 7, 10, R::Tetrahydropyran)
                        && hydroxyl(p, 10)
                        && !p.in_ring(10)
                },
                &[M::OneFourPrimeDioxygenatedSixOGlycosylHexopyranose],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && open_run(p, 0, 2)
                        && ring_run(p, 2, 5, R::Tetrahydropyran)
                        && open_run(p, 5, 7)
                        && ring_run(p, 7, 10, R::Tetrahydropyran)
                        && hydroxyl(p, 10)
                        && !p.in_ring(10)
                },
                &[M::OneSixPrimeDioxygenatedSixOGlycosylHexopyranose],
            ),
        ],
    );

    t.add(
        "O-C-C-C-C-O-C-C-O-C-O",
        clauses![
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && ring_run(p, 1, 5, R::Tetrahydropyran)
                        && !p.in_ring(5)
                        && ring_run(p, 6, 10, R::Tetrahydropyran)
                        && hydroxyl(p, 10)
                        && !p.in_ring(10)
                },
                &[M::OneFourPrimeDioxygenatedFourOGlycosylHexopyranose],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && ring_run(p, 1, 5, R::Tetrahydropyran)
                        && open_run(p, 5, 7)
                        && ring_run(p, 7, 10, R::Tetrahydropyran)
                        && hydroxyl(p, 10)
                        && !p.in_ring(10)
                },
                &[M::OneFourPrimeDioxygenatedSixOGlycosylHexopyranose],
            ),
        ],
    );

    t.add(
        "O-C-C-O-C-O-C-O-C-C-O",
        clauses![
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && ring_run(p, 1, 5, R::Tetrahydropyran)
                        && !p.in_ring(5)
                        && ring_run(p, 6, 9, R::Tetrahydrofuran)
                        && open_run(p, 9, 11)
                },
                &[M::FourPrimeSixDioxygenatedSucroseTypeDisaccharide],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && open_run(p, 0, 2)
                        && ring_run(p, 2, 5, R::Tetrahydrofuran)
                        && !p.in_ring(5)
                        && ring_run(p, 6, 10, R::Tetrahydropyran)
                        && hydroxyl(p, 10)
                        && !p.in_ring(10)
                },
                &[M::FourPrimeSixDioxygenatedSucroseTypeDisaccharide],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && open_run(p, 0, 2)
                        && ring_run(p, 2, 5, R::Tetrahydropyran)
                        && !p.in_ring(5)
                        && ring_run(p, 6, 9, R::Tetrahydrofuran)
                        && open_run(p, 9, 11)
                },
                &[M::SixSixPrimeDioxygenatedSucroseTypeDisaccharide],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && open_run(p, 0, 2)
                        && ring_run(p, 2, 5, R::Tetrahydrofuran)
                        && !p.in_ring(5)
                        && ring_run(p, 6, 9, R::Tetrahydropyran)
                        && open_run(p, 9, 11)
                },
                &[M::SixSixPrimeDioxygenatedSucroseTypeDisaccharide],
            ),
        ],
    );

    t.add(
        "O-C-C-C-C-O-C:C:C:C-O",
        clauses![when(
            |p| {
                hydroxyl(p, 0)
                    && !p.in_ring(0)
                    && ring_run(p, 1, 5, R::Tetrahydropyran)
                    && !p.in_ring(5)
                    && ring_run(p, 6, 10, R::Benzene)
                    && hydroxyl(p, 10)
                    && !p.in_ring(10)
            },
            &[M::FourFourPrimeDioxygenatedArylGlucuronide],
        )],
    );

    t.add(
        "O-C-C-O-C-O-C:C:C:C-O",
        clauses![
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && ring_run(p, 1, 5, R::Tetrahydropyran)
                        && !p.in_ring(5)
                        && ring_run(p, 6, 10, R::Benzene)
                        && hydroxyl(p, 10)
                        && !p.in_ring(10)
                },
                &[M::FourFourPrimeDioxygenatedArylGlucuronide],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && open_run(p, 0, 2)
                        && ring_run(p, 2, 5, R::Tetrahydropyran)
                        && !p.in_ring(5)
                        && ring_run(p, 6, 10, R::Benzene)
                        && hydroxyl(p, 10)
                        && !p.in_ring(10)
                },
                &[M::FourPrimeSixDioxygenatedArylGlucuronide],
            ),
        ],
    );
}

fn twelve(t: &mut RuleTable) {
    t.add(
        "O-C-C-C-C-C-O-C-O-C-C-O",
        clauses![
            when(
                |p| {
                    hydroxyl(p, 0)
                        && open_run(p, 0, 2)
                        && ring_run(p, 2, 6, R::Tetrahydropyran)
                        && !p.in_ring(6)
                        && ring_run(p, 7, 11, R::Tetrahydropyran)
                        && hydroxyl(p, 11)
                        && !p.in_ring(11)
                },
                &[M::FourPrimeSixDioxygenatedTwoOGlycosylHexopyranose],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && open_run(p, 0, 2)
                        && ring_run(p, 2, 6, R::Tetrahydropyran)
                        && !p.in_ring(6)
                        && ring_run(p, 7, 10, R::Tetrahydropyran)
                        && open_run(p, 10, 12)
                },
                &[M::SixSixPrimeDioxygenatedTwoOGlycosylHexopyranose],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && ring_run(p, 1, 5, R::Tetrahydropyran)
                        && open_run(p, 5, 7)
                        && ring_run(p, 7, 11, R::Tetrahydropyran)
                        && hydroxyl(p, 11)
                        && !p.in_ring(11)
                },
                &[M::TwoFourPrimeDioxygenatedSixOGlycosylHexopyranose],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && ring_run(p, 1, 5, R::Tetrahydropyran)
                        && open_run(p, 5, 7)
                        && ring_run(p, 7, 10, R::Tetrahydropyran)
                        && open_run(p, 10, 12)
                },
                &[M::TwoSixPrimeDioxygenatedSixOGlycosylHexopyranose],
            ),
        ],
    );

    t.add(
        "O-C-C-O-C-C-O-C-O-C-C-O",
        clauses![
            when(
                |p| {
                    hydroxyl(p, 0)
                        && open_run(p, 0, 2)
                        && ring_run(p, 2, 6, R::Tetrahydropyran)
                        && !p.in_ring(6)
                        && ring_run(p, 7, 11, R::Tetrahydropyran)
                        && hydroxyl(p, 11)
                        && !p.in_ring(11)
                },
                &[M::FourPrimeSixDioxygenatedTwoOGlycosylHexopyranose],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && open_run(p, 0, 2)
                        && ring_run(p, 2, 6, R::Tetrahydropyran)
                        && !p.in_ring(6)
                        && ring_run(p, 7, 10, R::Tetrahydropyran)
                        && open_run(p, 10, 12)
                },
                &[M::SixSixPrimeDioxygenatedTwoOGlycosylHexopyranose],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && ring_run(p, 1, 5, R::Tetrahydropyran)
                        && open_run(p, 5, 7)
                        && ring_run(p, 7, 11, R::Tetrahydropyran)
                        && hydroxyl(p, 11)
                        && !p.in_ring(11)
                },
                &[M::TwoFourPrimeDioxygenatedSixOGlycosylHexopyranose],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && ring_run(p, 1, 5, R::Tetrahydropyran)
                        && open_run(p, 5, 7)
                        && ring_run(p, 7, 10, R::Tetrahydropyran)
                        && open_run(p, 10, 12)
                },
                &[M::TwoSixPrimeDioxygenatedSixOGlycosylHexopyranose],
            ),
        ],
    );

    t.add(
        "O-C-C-C-C-C-O-C-C-C-C-O",
        clauses![
            when(
                |p| {
                    hydroxyl(p, 0)
                        && open_run(p, 0, 2)
                        && ring_run(p, 2, 6, R::Tetrahydropyran)
                        && !p.in_ring(6)
                        && ring_run(p, 7, 11, R::Tetrahydropyran)
                        && hydroxyl(p, 11)
                        && !p.in_ring(11)
                },
                &[M::FourPrimeSixDioxygenatedTwoOGlycosylHexopyranose],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && ring_run(p, 1, 5, R::Tetrahydropyran)
                        && open_run(p, 5, 7)
                        && ring_run(p, 7, 11, R::Tetrahydropyran)
                        && hydroxyl(p, 11)
                        && !p.in_ring(11)
                },
                &[M::TwoFourPrimeDioxygenatedSixOGlycosylHexopyranose],
            ),
        ],
    );

    t.add(
        "O-C-C-C-C-O-C-C-O-C-C-O",
        clauses![
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && ring_run(p, 1, 5, R::Tetrahydropyran)
                        && !p.in_ring(5)
                        && ring_run(p, 6, 10, R::Tetrahydropyran)
                        && open_run(p, 10, 12)
                },
                &[M::FourPrimeSixDioxygenatedTwoOGlycosylHexopyranose],
            ),
            when(
                |p| {
                    hydroxyl(p, 0)
                        && !p.in_ring(0)
                        && ring_run(p, 1, 5, R::Tetrahydropyran)
                        && open_run(p, 5, 7)
                        && ring_run(p, 7, 11, R::Tetrahydropyran)
                        && hydroxyl(p, 11)
                        && !p.in_ring(11)
                },
                &[M::TwoFourPrimeDioxygenatedSixOGlycosylHexopyranose],
            ),
        ],
    );
}

#[cfg(test)]
mod tests {
    use crate::engine::MotifEngine;
    use crate::graph::RingType as R;
    use crate::motif::Motif as M;
    use crate::testing::smiles;

    #[test]
    fn hexopyranose_glycosyl_at_o2() {
        let ctx = smiles(
            "[OH][CH]1[O][CH](C[OH])[CH]([OH])[CH]([OH])[CH]1[O][CH]9[O][CH](C[OH])[CH]([OH])[CH]([OH])[CH]9[OH]",
            &[R::Tetrahydropyran, R::Tetrahydropyran],
            &[],
        );
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        for motif in [
            M::OneTwoPrimeOrTwoPrimeThreeDioxygenatedTwoOGlycosylHexopyranose,
            M::TwoPrimeSixDioxygenatedTwoOGlycosylHexopyranose,
            M::FiveSixPrimeDioxygenatedTwoOGlycosylHexopyranose,
            M::FiveFivePrimeDioxygenatedTwoOGlycosylHexopyranose,
            M::FivePrimeSixDioxygenatedTwoOGlycosylHexopyranose,
            M::TwoFourDioxygenatedArylGlucuronide,
        ] {
            assert!(fp.get(motif), "{motif}");
        }
        assert!(!fp.get(M::TwoPrimeFiveDioxygenatedThreeOGlycosylHexopyranose));
    }

    #[test]
    fn hexopyranose_glycosyl_at_o3() {
        let ctx = smiles(
            "[OH][CH]1[O][CH](C[OH])[CH]([OH])[CH]([O][CH]9[O][CH](C[OH])[CH]([OH])[CH]([OH])[CH]9[OH])[CH]1[OH]",
            &[R::Tetrahydropyran, R::Tetrahydropyran],
            &[],
        );
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        for motif in [
            M::OneTwoPrimeOrTwoPrimeThreeDioxygenatedTwoOGlycosylHexopyranose,
            M::ThreePrimeFiveDioxygenatedThreeOGlycosylHexopyranose,
            M::FourPrimeFiveDioxygenatedThreeOGlycosylHexopyranose,
            M::OneFourDioxygenatedSixOAcylHexopyranose,
            M::FivePrimeSixDioxygenatedThreeOGlycosylHexopyranose,
            M::TwoFourDioxygenatedArylGlucuronide,
        ] {
            assert!(fp.get(motif), "{motif}");
        }
        assert!(!fp.get(M::TwoPrimeFiveDioxygenatedTwoOGlycosylHexopyranose));
    }

    #[test]
    fn hexopyranose_glycosyl_at_o4() {
        let ctx = smiles(
            "[OH][CH]1[O][CH](C[OH])[CH]([O][CH]9[O][CH](C[OH])[CH]([OH])[CH]([OH])[CH]9[OH])[CH]([OH])[CH]1[OH]",
            &[R::Tetrahydropyran, R::Tetrahydropyran],
            &[],
        );
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        for motif in [
            M::OneTwoPrimeOrTwoPrimeThreeDioxygenatedTwoOGlycosylHexopyranose,
            M::ThreePrimeFourDioxygenatedTwoOGlycosylHexopyranose,
            M::FourFourPrimeDioxygenatedTwoOGlycosylHexopyranose,
            M::OneSixDioxygenatedArylGlucuronide,
            M::OneFivePrimeDioxygenatedFourOGlycosylHexopyranose,
            M::OneThreeDioxygenatedArylGlucuronide,
        ] {
            assert!(fp.get(motif), "{motif}");
        }
        assert!(!fp.get(M::TwoPrimeSixDioxygenatedTwoOGlycosylHexopyranose));
    }

    #[test]
    fn hexopyranose_glycosyl_at_o6() {
        let ctx = smiles(
            "[OH][CH]1[O][CH](C[O][CH]9[O][CH](C[OH])[CH]([OH])[CH]([OH])[CH]9[OH])[CH]([OH])[CH]([OH])[CH]1[OH]",
            &[R::Tetrahydropyran, R::Tetrahydropyran],
            &[],
        );
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        for motif in [
            M::TwoPrimeFiveDioxygenatedSixOGlycosylHexopyranose,
            M::TwoThreePrimeDioxygenatedSixOGlycosylHexopyranose,
            M::TwoFourPrimeDioxygenatedSixOGlycosylHexopyranose,
            M::TwoFivePrimeDioxygenatedSixOGlycosylHexopyranose,
            M::OneFourPrimeDioxygenatedSixOGlycosylHexopyranose,
            M::OneThreeDioxygenatedArylGlucuronide,
        ] {
            assert!(fp.get(motif), "{motif}");
        }
        assert!(!fp.get(M::OneTwoPrimeOrTwoPrimeThreeDioxygenatedTwoOGlycosylHexopyranose));
    }

    #[test]
    fn sucrose_type_disaccharide() {
        let ctx = smiles(
            "[OH]C[C]1([O][CH]9[O][CH](C[OH])[CH]([OH])[CH]([OH])[CH]9[OH])[O][CH](C[OH])[CH]([OH])[CH]1[OH]",
            &[R::Tetrahydropyran, R::Tetrahydrofuran],
            &[],
        );
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        for motif in [
            M::OneTwoPrimeDioxygenatedSucroseTypeDisaccharide,
            M::ThreePrimeFourDioxygenatedSucroseTypeDisaccharide,
            M::ThreePrimeSixDioxygenatedSucroseTypeDisaccharide,
            M::OneSixDioxygenatedArylGlucuronide,
            M::FiveSixPrimeDioxygenatedSucroseTypeDisaccharide,
            M::FiveSixDioxygenatedArylGlucuronide,
        ] {
            assert!(fp.get(motif), "{motif}");
        }
        assert!(!fp.get(M::OneTwoPrimeOrTwoPrimeThreeDioxygenatedTwoOGlycosylHexopyranose));
    }

    #[test]
    fn aryl_glucuronide() {
        let ctx = smiles(
            "O=C([OH])[CH]1[O][CH]([O]c2ccc([OH])cc2)[CH]([OH])[CH]([OH])[CH]1[OH]",
            &[R::Benzene, R::Tetrahydropyran],
            &[],
        );
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        for motif in [
            M::TwoSixDioxygenatedArylGlucuronide,
            M::OneTwoDioxygenatedArylGlucuronide,
            M::FiveSixDioxygenatedArylGlucuronide,
            M::ThreeFiveDioxygenatedArylGlucuronide,
            M::OneFiveDioxygenatedArylGlucuronide,
            M::ThreeFourPrimeDioxygenatedArylGlucuronide,
        ] {
            assert!(fp.get(motif), "{motif}");
        }
        assert!(!fp.get(M::OneTwoPrimeOrTwoPrimeThreeDioxygenatedTwoOGlycosylHexopyranose));
    }

    #[test]
    fn n_acetylhexosamine_glycoside() {
        let ctx = smiles("C[O][CH]1[O][CH](C[OH])[CH]([OH])[CH]([OH])[CH]1[NH]C(C)=[O]", &[R::Tetrahydropyran], &[]);
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        for motif in [
            M::OneFourDioxygenatedArylGlucuronide,
            M::TwoThreeOrThreeFourDioxygenatedArylGlucuronide,
            M::ThreeFiveDioxygenatedArylGlucuronide,
            M::OneOxygenatedNAcetylhexosamineGlycosideTwoNitrogenWalk,
            M::OneAcetylDioxygenatedNAcetylhexosamineGlycoside,
            M::FourAcetylDioxygenatedNAcetylhexosamineGlycoside,
        ] {
            assert!(fp.get(motif), "{motif}");
        }
        assert!(!fp.get(M::OneTwoPrimeOrTwoPrimeThreeDioxygenatedTwoOGlycosylHexopyranose));
    }

    #[test]
    fn hexopyranose_acyl_at_o1() {
        let ctx = smiles(
            "[O]=C(c2ccccc2)[O][CH]1[O][CH](C[OH])[CH]([OH])[CH]([OH])[CH]1[OH]",
            &[R::Benzene, R::Tetrahydropyran],
            &[],
        );
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        for motif in [
            M::TwoSixDioxygenatedArylGlucuronide,
            M::OneTwoDioxygenatedArylGlucuronide,
            M::FiveSixDioxygenatedArylGlucuronide,
            M::ThreeFiveDioxygenatedArylGlucuronide,
            M::OneFiveDioxygenatedArylGlucuronide,
            M::FourAcylDioxygenatedOneOAcylHexopyranose,
        ] {
            assert!(fp.get(motif), "{motif}");
        }
        assert!(!fp.get(M::OneTwoPrimeOrTwoPrimeThreeDioxygenatedTwoOGlycosylHexopyranose));
    }

    #[test]
    fn hexopyranose_acyl_at_o6() {
        let ctx = smiles("[O]=C(CCC)[O]C[CH]1[O][CH]([OH])[CH]([OH])[CH]([OH])[CH]1[OH]", &[R::Tetrahydropyran], &[]);
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        for motif in [
            M::OneFourDioxygenatedArylGlucuronide,
            M::OneTwoDioxygenatedArylGlucuronide,
            M::OneThreeDioxygenatedArylGlucuronide,
            M::ThreeFiveDioxygenatedArylGlucuronide,
            M::FiveAcylDioxygenatedSixOAcylHexopyranose,
            M::ThreeAcylDioxygenatedSixOAcylHexopyranose,
        ] {
            assert!(fp.get(motif), "{motif}");
        }
        assert!(!fp.get(M::OneTwoPrimeOrTwoPrimeThreeDioxygenatedTwoOGlycosylHexopyranose));
    }
}
