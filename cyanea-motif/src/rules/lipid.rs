//! Lipid head groups: walks from glycerophospholipid, sphingolipid, glyceride, CoA and
//! carnitine head atoms into their acyl linkages.

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
        13 => thirteen(t),
        _ => {}
    }
}

fn three(t: &mut RuleTable) {
    t.add(
        "O-P-O",
        clauses![
            when(|p| open_run(p, 0, 3), &[M::GlycerophospholipidPhosphateHeadOxygenToGlycerolPhosphateOxygenWalk]),
        ],
    );

    t.extend(
        "O-C=O",
        clauses![when(
            |p| ester_oxygen(p, 0) && open_run(p, 0, 3),
            &[M::OneTwoDiacylglycerolSnOneEsterOxygenToSnOneCarbonylOxygenWalk],
        )],
    );

    t.extend(
        "N-C=O",
        clauses![
            when(
                |p| amide_nitrogen(p, 0) && open_run(p, 0, 3),
                &[M::SphingomyelinAmideNitrogenToAcylCarbonylOxygenWalk],
            ),
        ],
    );

    t.add("O=C-S", clauses![when(|p| open_run(p, 0, 3), &[M::AcylCoAAcylCarbonylOxygenToThioesterSulfurWalk])]);
}

fn four(t: &mut RuleTable) {
    t.extend(
        "N-C-C-O",
        clauses![
            when(
                |p| quaternary_nitrogen(p, 0) && open_run(p, 0, 4),
                &[M::PhosphatidylcholineCholineNitrogenToPhosphateHeadOxygenWalk],
            ),
            when(|p| open_run(p, 0, 4), &[M::PhosphatidylethanolamineAminoNitrogenToPhosphateHeadOxygenWalk]),
            when(|p| amide_nitrogen(p, 0) && open_run(p, 0, 4), &[M::SphingomyelinAmideNitrogenToCThreeHydroxylWalk]),
        ],
    );

    t.extend(
        "O-C-C-O",
        clauses![
            when(|p| open_run(p, 0, 4), &[M::GlycerophospholipidGlycerolPhosphateOxygenToSnTwoEsterOxygenWalk]),
            when(
                |p| ester_oxygen(p, 0) && open_run(p, 0, 4),
                &[M::GlycerophospholipidGlycerolPhosphateOxygenToSnTwoEsterOxygenWalk],
            ),
            when(
                |p| ester_oxygen(p, 0) && open_run(p, 0, 4),
                &[M::OneTwoDiacylglycerolSnOneEsterOxygenToSnTwoEsterOxygenWalk],
            ),
            when(
                |p| !p.in_ring(0) && ring_run(p, 1, 3, R::Cyclohexane) && hydroxyl(p, 3) && !p.in_ring(3),
                &[M::PhosphatidylinositolPhosphateHeadOxygenToInositolHydroxylWalk],
            ),
            when(
                |p| hydroxyl(p, 0) && !p.in_ring(0) && ring_run(p, 1, 3, R::Cyclohexane) && !p.in_ring(3),
                &[M::PhosphatidylinositolPhosphateHeadOxygenToInositolHydroxylWalk],
            ),
            when(|p| open_run(p, 0, 4), &[M::LysophosphatidylcholineGlycerolPhosphateOxygenToSnTwoHydroxylWalk]),
            when(
                |p| hydroxyl(p, 0) && open_run(p, 0, 4),
                &[M::LysophosphatidylcholineGlycerolPhosphateOxygenToSnTwoHydroxylWalk],
            ),
            when(
                |p| hydroxyl(p, 0) && open_run(p, 0, 4),
                &[M::LysophosphatidylcholineSnTwoHydroxylToSnOneEsterOxygenWalk],
            ),
            when(
                |p| ester_oxygen(p, 0) && open_run(p, 0, 4),
                &[M::LysophosphatidylcholineSnTwoHydroxylToSnOneEsterOxygenWalk],
            ),
            when(
                |p| ester_oxygen(p, 0) && open_run(p, 0, 4),
                &[M::DiacylglycerolSnTwoEsterOxygenToSnThreeHydroxylWalk],
            ),
            when(|p| hydroxyl(p, 0) && open_run(p, 0, 4), &[M::DiacylglycerolSnTwoEsterOxygenToSnThreeHydroxylWalk]),
            when(|p| hydroxyl(p, 0) && open_run(p, 0, 4), &[M::MonoacylglycerolSnTwoHydroxylToSnThreeHydroxylWalk]),
            when(
                |p| ester_oxygen(p, 0) && open_run(p, 0, 4),
                &[M::PlasmalogenSnTwoEsterOxygenToPhosphateHeadOxygenWalk],
            ),
            when(|p| open_run(p, 0, 4), &[M::PlasmalogenSnTwoEsterOxygenToPhosphateHeadOxygenWalk]),
            when(
                |p| ether_oxygen(p, 0) && open_run(p, 0, 4),
                &[M::AlkylEtherPhospholipidAlkylEtherOxygenToSnTwoEsterOxygenWalk],
            ),
            when(
                |p| ester_oxygen(p, 0) && open_run(p, 0, 4),
                &[M::AlkylEtherPhospholipidAlkylEtherOxygenToSnTwoEsterOxygenWalk],
            ),
        ],
    );

    t.extend(
        "N-C-C-S",
        clauses![
            when(|p| amide_nitrogen(p, 0) && open_run(p, 0, 4), &[M::AcylCoAThioesterSulfurToCysteamineNitrogenWalk]),
        ],
    );

    t.extend(
        "O-C-C=O",
        clauses![
            when(|p| hydroxyl(p, 0) && open_run(p, 0, 4), &[M::AcylCoAPantoylCarbonylOxygenToPantoylHydroxylWalk]),
        ],
    );
}

fn five(t: &mut RuleTable) {
    t.extend(
        "O-C-C-C-O",
        clauses![
            when(|p| open_run(p, 0, 5), &[M::GlycerophospholipidGlycerolPhosphateOxygenToSnOneEsterOxygenWalk]),
            when(
                |p| ester_oxygen(p, 0) && open_run(p, 0, 5),
                &[M::GlycerophospholipidGlycerolPhosphateOxygenToSnOneEsterOxygenWalk],
            ),
            when(|p| open_run(p, 0, 5), &[M::PhosphatidylserineSerineCarboxylToPhosphateHeadOxygenWalk]),
            when(
                |p| hydroxyl(p, 0) && open_run(p, 0, 5),
                &[M::PhosphatidylglycerolHeadGlycerolHydroxylToPhosphateHeadOxygenWalk],
            ),
            when(|p| open_run(p, 0, 5), &[M::PhosphatidylglycerolHeadGlycerolHydroxylToPhosphateHeadOxygenWalk]),
            when(|p| hydroxyl(p, 0) && open_run(p, 0, 5), &[M::CeramideSnOneHydroxylToCThreeHydroxylWalk]),
            when(
                |p| ester_oxygen(p, 0) && open_run(p, 0, 5),
                &[M::TriacylglycerolSnOneEsterOxygenToSnThreeEsterOxygenWalk],
            ),
            when(
                |p| ester_oxygen(p, 0) && open_run(p, 0, 5),
                &[M::DiacylglycerolSnOneEsterOxygenToSnThreeHydroxylWalk],
            ),
            when(|p| hydroxyl(p, 0) && open_run(p, 0, 5), &[M::DiacylglycerolSnOneEsterOxygenToSnThreeHydroxylWalk]),
            when(
                |p| ether_oxygen(p, 0) && open_run(p, 0, 5),
                &[M::AlkylEtherPhospholipidAlkylEtherOxygenToPhosphateHeadOxygenWalk],
            ),
            when(|p| open_run(p, 0, 5), &[M::AlkylEtherPhospholipidAlkylEtherOxygenToPhosphateHeadOxygenWalk]),
            when(|p| ester_oxygen(p, 0) && open_run(p, 0, 5), &[M::AcylcarnitineEsterOxygenToCarboxylateOxygenWalk]),
            when(|p| open_run(p, 0, 5), &[M::AcylcarnitineEsterOxygenToCarboxylateOxygenWalk]),
        ],
    );

    t.add(
        "N-C-C-P-O",
        clauses![when(
            |p| amide_nitrogen(p, 0) && open_run(p, 0, 5),
            &[M::SphingomyelinPhosphateHeadOxygenToAmideNitrogenWalk],
        )],
    );

    t.extend(
        "N-C-C-C-N",
        clauses![
            when(
                |p| amide_nitrogen(p, 0) && open_run(p, 0, 5),
                &[M::AcylCoACysteamineNitrogenToBetaAlanineNitrogenWalk],
            ),
        ],
    );

    t.extend(
        "N-C-C-C=O",
        clauses![when(
            |p| amide_nitrogen(p, 0) && open_run(p, 0, 5),
            &[M::AcylCoABetaAlanineCarbonylOxygenToBetaAlanineNitrogenWalk],
        )],
    );
}

fn six(t: &mut RuleTable) {
    t.add(
        "N-C-C-O-P-O",
        clauses![
            when(
                |p| quaternary_nitrogen(p, 0) && open_run(p, 0, 6),
                &[M::PhosphatidylcholineCholineNitrogenToGlycerolPhosphateOxygenWalk],
            ),
            when(|p| open_run(p, 0, 6), &[M::PhosphatidylethanolamineAminoNitrogenToGlycerolPhosphateOxygenWalk]),
        ],
    );

    t.add(
        "O-C-C-O-P-O",
        clauses![
            when(
                |p| ester_oxygen(p, 0) && open_run(p, 0, 6),
                &[M::GlycerophospholipidPhosphateHeadOxygenToSnTwoEsterOxygenWalk],
            ),
            when(
                |p| hydroxyl(p, 0) && !p.in_ring(0) && ring_run(p, 1, 3, R::Cyclohexane) && open_run(p, 3, 6),
                &[M::PhosphatidylinositolGlycerolPhosphateOxygenToInositolHydroxylWalk],
            ),
            when(
                |p| hydroxyl(p, 0) && open_run(p, 0, 6),
                &[M::LysophosphatidylcholinePhosphateHeadOxygenToSnTwoHydroxylWalk],
            ),
        ],
    );

    t.add(
        "O-C-C-O-C=O",
        clauses![
            when(|p| open_run(p, 0, 6), &[M::GlycerophospholipidGlycerolPhosphateOxygenToSnTwoCarbonylOxygenWalk]),
            when(
                |p| ester_oxygen(p, 0) && open_run(p, 0, 6),
                &[M::OneTwoDiacylglycerolSnOneEsterOxygenToSnTwoCarbonylOxygenWalk],
            ),
            when(
                |p| hydroxyl(p, 0) && open_run(p, 0, 6),
                &[M::LysophosphatidylcholineSnTwoHydroxylToSnOneCarbonylOxygenWalk],
            ),
            when(
                |p| ether_oxygen(p, 0) && open_run(p, 0, 6),
                &[M::AlkylEtherPhospholipidAlkylEtherOxygenToSnTwoCarbonylOxygenWalk],
            ),
        ],
    );

    t.add(
        "O-C-C-C-P-O",
        clauses![
            when(|p| hydroxyl(p, 0) && open_run(p, 0, 6), &[M::SphingomyelinPhosphateHeadOxygenToCThreeHydroxylWalk]),
        ],
    );

    t.add(
        "O-C-C-N-C=O",
        clauses![
            when(|p| hydroxyl(p, 0) && open_run(p, 0, 6), &[M::SphingomyelinAcylCarbonylOxygenToCThreeHydroxylWalk]),
        ],
    );

    t.add(
        "N-C-C-S-C=O",
        clauses![
            when(
                |p| amide_nitrogen(p, 0) && open_run(p, 0, 6),
                &[M::AcylCoAAcylCarbonylOxygenToCysteamineNitrogenWalk],
            ),
        ],
    );

    t.add(
        "O=C-N-C-C-S",
        clauses![when(|p| open_run(p, 0, 6), &[M::AcylCoAThioesterSulfurToBetaAlanineCarbonylOxygenWalk])],
    );

    t.extend(
        "N-C-C-C-C-O",
        clauses![
            when(
                |p| amide_nitrogen(p, 0) && open_run(p, 0, 6),
                &[M::AcylCoABetaAlanineNitrogenToPhosphateHeadOxygenWalk],
            ),
            when(
                |p| quaternary_nitrogen(p, 0) && open_run(p, 0, 6),
                &[M::AcylcarnitineCholineNitrogenToCarboxylateOxygenWalk],
            ),
        ],
    );

    t.extend(
        "O-C-C-C-C=O",
        clauses![when(|p| open_run(p, 0, 6), &[M::AcylCoAPantoylCarbonylOxygenToPhosphateHeadOxygenWalk])],
    );

    t.add(
        "N-C-C-O-C=O",
        clauses![when(
            |p| quaternary_nitrogen(p, 0) && open_run(p, 0, 6),
            &[M::AcylcarnitineAcylCarbonylOxygenToCholineNitrogenWalk],
        )],
    );
}

fn seven(t: &mut RuleTable) {
    t.add(
        "O-C-C-C-O-P-O",
        clauses![
            when(
                |p| ester_oxygen(p, 0) && open_run(p, 0, 7),
                &[M::GlycerophospholipidPhosphateHeadOxygenToSnOneEsterOxygenWalk],
            ),
            when(|p| open_run(p, 0, 7), &[M::PhosphatidylserineSerineCarboxylToGlycerolPhosphateOxygenWalk]),
            when(
                |p| hydroxyl(p, 0) && open_run(p, 0, 7),
                &[M::PhosphatidylglycerolHeadGlycerolHydroxylToGlycerolPhosphateOxygenWalk],
            ),
        ],
    );

    t.add(
        "O-C-C-C-O-C=O",
        clauses![
            when(|p| open_run(p, 0, 7), &[M::GlycerophospholipidGlycerolPhosphateOxygenToSnOneCarbonylOxygenWalk]),
            when(
                |p| ester_oxygen(p, 0) && open_run(p, 0, 7),
                &[M::TriacylglycerolSnOneCarbonylOxygenToSnThreeEsterOxygenWalk],
            ),
            when(
                |p| hydroxyl(p, 0) && open_run(p, 0, 7),
                &[M::DiacylglycerolSnOneCarbonylOxygenToSnThreeHydroxylWalk],
            ),
        ],
    );

    t.add(
        "O-P-C-C-N-C=O",
        clauses![when(|p| open_run(p, 0, 7), &[M::SphingomyelinPhosphateHeadOxygenToAcylCarbonylOxygenWalk])],
    );

    t.add(
        "N-C-C-C-N-C=O",
        clauses![when(
            |p| amide_nitrogen(p, 0) && open_run(p, 0, 7),
            &[M::AcylCoACysteamineNitrogenToPantoylCarbonylOxygenWalk],
        )],
    );

    t.add(
        "O=C-C-C-N-C=O",
        clauses![when(|p| open_run(p, 0, 7), &[M::AcylCoABetaAlanineCarbonylOxygenToPantoylCarbonylOxygenWalk])],
    );
}

fn eight(t: &mut RuleTable) {
    t.add(
        "O-P-O-C-C-O-C=O",
        clauses![when(|p| open_run(p, 0, 8), &[M::GlycerophospholipidPhosphateHeadOxygenToSnTwoCarbonylOxygenWalk])],
    );

    t.add(
        "O=C-O-C-C-O-C=O",
        clauses![when(|p| open_run(p, 0, 8), &[M::OneTwoDiacylglycerolSnOneCarbonylOxygenToSnTwoCarbonylOxygenWalk])],
    );

    t.add(
        "N-C-C-O-P-C-C-N",
        clauses![when(
            |p| quaternary_nitrogen(p, 0) && open_run(p, 0, 8),
            &[M::SphingomyelinCholineNitrogenToAmideNitrogenWalk],
        )],
    );

    t.add(
        "O=C-N-C-C-S-C=O",
        clauses![when(|p| open_run(p, 0, 8), &[M::AcylCoAAcylCarbonylOxygenToBetaAlanineCarbonylOxygenWalk])],
    );

    t.add(
        "N-C-C-C-N-C-C-S",
        clauses![
            when(
                |p| amide_nitrogen(p, 0) && open_run(p, 0, 8),
                &[M::AcylCoAThioesterSulfurToBetaAlanineNitrogenWalk],
            ),
        ],
    );

    t.add(
        "N-C-C-C-N-C-C-O",
        clauses![
            when(|p| amide_nitrogen(p, 0) && open_run(p, 0, 8), &[M::AcylCoACysteamineNitrogenToPantoylHydroxylWalk]),
        ],
    );

    t.add(
        "O-C-C-N-C-C-C=O",
        clauses![
            when(
                |p| hydroxyl(p, 0) && open_run(p, 0, 8),
                &[M::AcylCoABetaAlanineCarbonylOxygenToPantoylHydroxylWalk],
            ),
        ],
    );
}

fn nine(t: &mut RuleTable) {
    t.add(
        "N-C-C-O-P-O-C-C-O",
        clauses![
            when(
                |p| quaternary_nitrogen(p, 0) && open_run(p, 0, 9),
                &[M::PhosphatidylcholineCholineNitrogenToSnTwoEsterOxygenWalk],
            ),
            when(|p| open_run(p, 0, 9), &[M::PhosphatidylethanolamineAminoNitrogenToSnTwoEsterOxygenWalk]),
        ],
    );

    t.add(
        "O-P-O-C-C-C-O-C=O",
        clauses![when(|p| open_run(p, 0, 9), &[M::GlycerophospholipidPhosphateHeadOxygenToSnOneCarbonylOxygenWalk])],
    );

    t.add(
        "O-C-C-O-P-O-C-C-O",
        clauses![
            when(
                |p| {
                    ester_oxygen(p, 0)
                        && open_run(p, 0, 6)
                        && ring_run(p, 6, 8, R::Cyclohexane)
                        && hydroxyl(p, 8)
                        && !p.in_ring(8)
                },
                &[M::PhosphatidylinositolSnTwoEsterOxygenToInositolHydroxylWalk],
            ),
            when(
                |p| hydroxyl(p, 0) && !p.in_ring(0) && ring_run(p, 1, 3, R::Cyclohexane) && open_run(p, 3, 9),
                &[M::PhosphatidylinositolSnTwoEsterOxygenToInositolHydroxylWalk],
            ),
        ],
    );

    t.add(
        "N-C-C-O-P-C-C-C-O",
        clauses![when(
            |p| quaternary_nitrogen(p, 0) && open_run(p, 0, 9),
            &[M::SphingomyelinCholineNitrogenToCThreeHydroxylWalk],
        )],
    );

    t.extend(
        "O=C-O-C-C-C-O-C=O",
        clauses![when(|p| open_run(p, 0, 9), &[M::TriacylglycerolSnOneCarbonylOxygenToSnThreeCarbonylOxygenWalk])],
    );
}

fn ten(t: &mut RuleTable) {
    t.add(
        "N-C-C-O-P-O-C-C-C-O",
        clauses![
            when(
                |p| quaternary_nitrogen(p, 0) && open_run(p, 0, 10),
                &[M::PhosphatidylcholineCholineNitrogenToSnOneEsterOxygenWalk],
            ),
            when(|p| open_run(p, 0, 10), &[M::PhosphatidylethanolamineAminoNitrogenToSnOneEsterOxygenWalk]),
        ],
    );

    t.add(
        "O-C-C-C-O-P-O-C-C-O",
        clauses![
            when(|p| open_run(p, 0, 10), &[M::PhosphatidylserineSerineCarboxylToSnTwoEsterOxygenWalk]),
            when(
                |p| hydroxyl(p, 0) && open_run(p, 0, 10),
                &[M::PhosphatidylglycerolHeadGlycerolHydroxylToSnTwoEsterOxygenWalk],
            ),
            when(
                |p| {
                    ester_oxygen(p, 0)
                        && open_run(p, 0, 7)
                        && ring_run(p, 7, 9, R::Cyclohexane)
                        && hydroxyl(p, 9)
                        && !p.in_ring(9)
                },
                &[M::PhosphatidylinositolSnOneEsterOxygenToInositolHydroxylWalk],
            ),
        ],
    );

    t.add(
        "N-C-C-O-P-C-C-N-C=O",
        clauses![when(
            |p| quaternary_nitrogen(p, 0) && open_run(p, 0, 10),
            &[M::SphingomyelinCholineNitrogenToAcylCarbonylOxygenWalk],
        )],
    );

    t.add(
        "N-C-C-C-N-C-C-S-C=O",
        clauses![when(
            |p| amide_nitrogen(p, 0) && open_run(p, 0, 10),
            &[M::AcylCoAAcylCarbonylOxygenToBetaAlanineNitrogenWalk],
        )],
    );

    t.add(
        "O=C-N-C-C-C-N-C-C-S",
        clauses![when(|p| open_run(p, 0, 10), &[M::AcylCoAThioesterSulfurToPantoylCarbonylOxygenWalk])],
    );

    t.add(
        "N-C-C-C-N-C-C-C-C-O",
        clauses![when(
            |p| amide_nitrogen(p, 0) && open_run(p, 0, 10),
            &[M::AcylCoACysteamineNitrogenToPhosphateHeadOxygenWalk],
        )],
    );

    t.add(
        "O-C-C-C-C-N-C-C-C=O",
        clauses![when(|p| open_run(p, 0, 10), &[M::AcylCoABetaAlanineCarbonylOxygenToPhosphateHeadOxygenWalk])],
    );
}

fn eleven(t: &mut RuleTable) {
    t.add(
        "N-C-C-O-P-O-C-C-O-C=O",
        clauses![
            when(
                |p| quaternary_nitrogen(p, 0) && open_run(p, 0, 11),
                &[M::PhosphatidylcholineCholineNitrogenToSnTwoCarbonylOxygenWalk],
            ),
            when(|p| open_run(p, 0, 11), &[M::PhosphatidylethanolamineAminoNitrogenToSnTwoCarbonylOxygenWalk]),
        ],
    );

    t.add(
        "O-C-C-C-O-P-O-C-C-C-O",
        clauses![
            when(|p| open_run(p, 0, 11), &[M::PhosphatidylserineSerineCarboxylToSnOneEsterOxygenWalk]),
            when(
                |p| ester_oxygen(p, 0) && open_run(p, 0, 11),
                &[M::PhosphatidylserineSerineCarboxylToSnOneEsterOxygenWalk],
            ),
            when(
                |p| hydroxyl(p, 0) && open_run(p, 0, 11),
                &[M::PhosphatidylglycerolHeadGlycerolHydroxylToSnOneEsterOxygenWalk],
            ),
            when(
                |p| ester_oxygen(p, 0) && open_run(p, 0, 11),
                &[M::PhosphatidylglycerolHeadGlycerolHydroxylToSnOneEsterOxygenWalk],
            ),
        ],
    );

    t.add(
        "O-C-C-O-P-O-C-C-O-C=O",
        clauses![when(
            |p| hydroxyl(p, 0) && !p.in_ring(0) && ring_run(p, 1, 3, R::Cyclohexane) && open_run(p, 3, 11),
            &[M::PhosphatidylinositolSnTwoCarbonylOxygenToInositolHydroxylWalk],
        )],
    );

    t.add(
        "O-C-C-N-C-C-C-N-C-C-S",
        clauses![when(|p| hydroxyl(p, 0) && open_run(p, 0, 11), &[M::AcylCoAThioesterSulfurToPantoylHydroxylWalk])],
    );
}

fn twelve(t: &mut RuleTable) {
    t.add(
        "N-C-C-O-P-O-C-C-C-O-C=O",
        clauses![
            when(
                |p| quaternary_nitrogen(p, 0) && open_run(p, 0, 12),
                &[M::PhosphatidylcholineCholineNitrogenToSnOneCarbonylOxygenWalk],
            ),
            when(|p| open_run(p, 0, 12), &[M::PhosphatidylethanolamineAminoNitrogenToSnOneCarbonylOxygenWalk]),
        ],
    );

    t.add(
        "O-C-C-C-O-P-O-C-C-O-C=O",
        clauses![
            when(|p| open_run(p, 0, 12), &[M::PhosphatidylserineSerineCarboxylToSnTwoCarbonylOxygenWalk]),
            when(
                |p| hydroxyl(p, 0) && open_run(p, 0, 12),
                &[M::PhosphatidylglycerolHeadGlycerolHydroxylToSnTwoCarbonylOxygenWalk],
            ),
        ],
    );

    t.add(
        "O-C-C-O-P-O-C-C-C-O-C=O",
        clauses![when(
            |p| hydroxyl(p, 0) && !p.in_ring(0) && ring_run(p, 1, 3, R::Cyclohexane) && open_run(p, 3, 12),
            &[M::PhosphatidylinositolSnOneCarbonylOxygenToInositolHydroxylWalk],
        )],
    );

    t.add(
        "O=C-N-C-C-C-N-C-C-S-C=O",
        clauses![when(|p| open_run(p, 0, 12), &[M::AcylCoAAcylCarbonylOxygenToPantoylCarbonylOxygenWalk])],
    );
}

fn thirteen(t: &mut RuleTable) {
    t.add(
        "O-C-C-C-O-P-O-C-C-C-O-C=O",
        clauses![
            when(|p| open_run(p, 0, 13), &[M::PhosphatidylserineSerineCarboxylToSnOneCarbonylOxygenWalk]),
            when(
                |p| hydroxyl(p, 0) && open_run(p, 0, 13),
                &[M::PhosphatidylglycerolHeadGlycerolHydroxylToSnOneCarbonylOxygenWalk],
            ),
        ],
    );

    t.add(
        "O-C-C-N-C-C-C-N-C-C-S-C=O",
        clauses![
            when(|p| hydroxyl(p, 0) && open_run(p, 0, 13), &[M::AcylCoAAcylCarbonylOxygenToPantoylHydroxylWalk]),
        ],
    );

    t.add(
        "O-C-C-C-C-N-C-C-C-N-C-C-S",
        clauses![when(|p| open_run(p, 0, 13), &[M::AcylCoAThioesterSulfurToPhosphateHeadOxygenWalk])],
    );
}

#[cfg(test)]
mod tests {
    use crate::engine::MotifEngine;
    use crate::graph::RingType as R;
    use crate::motif::Motif as M;
    use crate::testing::smiles;

    #[test]
    fn phosphatidylcholine() {
        let ctx = smiles("C[N+](C)(C)CC[O]P(=O)([O-])[O]C[CH](C[O]C(=[O])CCCC)[O]C(=[O])CCCC", &[], &[]);
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        for motif in [
            M::PhosphatidylcholineCholineNitrogenToPhosphateHeadOxygenWalk,
            M::PhosphatidylcholineCholineNitrogenToSnOneCarbonylOxygenWalk,
            M::GlycerophospholipidPhosphateHeadOxygenToGlycerolPhosphateOxygenWalk,
            M::GlycerophospholipidGlycerolPhosphateOxygenToSnOneEsterOxygenWalk,
            M::GlycerophospholipidGlycerolPhosphateOxygenToSnTwoEsterOxygenWalk,
            M::AlkylEtherPhospholipidAlkylEtherOxygenToSnTwoEsterOxygenWalk,
        ] {
            assert!(fp.get(motif), "{motif}");
        }
        assert!(!fp.get(M::PhosphatidylglycerolHeadGlycerolHydroxylToGlycerolPhosphateOxygenWalk));
    }

    #[test]
    fn phosphatidylethanolamine() {
        let ctx = smiles("[NH2]CC[O]P(=O)(O)[O]C[CH](C[O]C(=[O])CCCC)[O]C(=[O])CCCC", &[], &[]);
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        for motif in [
            M::PhosphatidylethanolamineAminoNitrogenToPhosphateHeadOxygenWalk,
            M::PhosphatidylethanolamineAminoNitrogenToSnTwoCarbonylOxygenWalk,
            M::GlycerophospholipidPhosphateHeadOxygenToSnTwoEsterOxygenWalk,
            M::AlkylEtherPhospholipidAlkylEtherOxygenToPhosphateHeadOxygenWalk,
            M::LysophosphatidylcholineGlycerolPhosphateOxygenToSnTwoHydroxylWalk,
            M::GlycerophospholipidGlycerolPhosphateOxygenToSnTwoCarbonylOxygenWalk,
        ] {
            assert!(fp.get(motif), "{motif}");
        }
        assert!(!fp.get(M::PhosphatidylcholineCholineNitrogenToPhosphateHeadOxygenWalk));
    }

    #[test]
    fn phosphatidylserine() {
        let ctx = smiles("[NH2][CH](C(=O)[OH])C[O]P(=O)(O)[O]C[CH](C[O]C(=[O])CCCC)[O]C(=[O])CCCC", &[], &[]);
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        for motif in [
            M::PhosphatidylethanolamineAminoNitrogenToPhosphateHeadOxygenWalk,
            M::GlycerophospholipidPhosphateHeadOxygenToGlycerolPhosphateOxygenWalk,
            M::GlycerophospholipidGlycerolPhosphateOxygenToSnOneEsterOxygenWalk,
            M::GlycerophospholipidGlycerolPhosphateOxygenToSnOneCarbonylOxygenWalk,
            M::AlkylEtherPhospholipidAlkylEtherOxygenToSnTwoEsterOxygenWalk,
            M::PhosphatidylglycerolHeadGlycerolHydroxylToSnOneEsterOxygenWalk,
        ] {
            assert!(fp.get(motif), "{motif}");
        }
        assert!(!fp.get(M::PhosphatidylcholineCholineNitrogenToPhosphateHeadOxygenWalk));
    }

    #[test]
    fn phosphatidylglycerol() {
        let ctx = smiles("[OH]C[CH](O)C[O]P(=O)(O)[O]C[CH](C[O]C(=[O])CCCC)[O]C(=[O])CCCC", &[], &[]);
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        for motif in [
            M::GlycerophospholipidPhosphateHeadOxygenToGlycerolPhosphateOxygenWalk,
            M::LysophosphatidylcholinePhosphateHeadOxygenToSnTwoHydroxylWalk,
            M::DiacylglycerolSnOneEsterOxygenToSnThreeHydroxylWalk,
            M::LysophosphatidylcholineGlycerolPhosphateOxygenToSnTwoHydroxylWalk,
            M::GlycerophospholipidGlycerolPhosphateOxygenToSnTwoCarbonylOxygenWalk,
            M::PhosphatidylglycerolHeadGlycerolHydroxylToSnOneEsterOxygenWalk,
        ] {
            assert!(fp.get(motif), "{motif}");
        }
        assert!(!fp.get(M::PhosphatidylcholineCholineNitrogenToPhosphateHeadOxygenWalk));
    }

    #[test]
    fn phosphatidylinositol() {
        let ctx = smiles(
            "O[CH]1[CH](O)[CH](O)[CH]([O]P(=O)(O)[O]C[CH](C[O]C(=[O])CCCC)[O]C(=[O])CCCC)[CH]([OH])[CH]1O",
            &[R::Cyclohexane],
            &[],
        );
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        for motif in [
            M::GlycerophospholipidPhosphateHeadOxygenToGlycerolPhosphateOxygenWalk,
            M::PhosphatidylinositolGlycerolPhosphateOxygenToInositolHydroxylWalk,
            M::AlkylEtherPhospholipidAlkylEtherOxygenToPhosphateHeadOxygenWalk,
            M::PhosphatidylinositolPhosphateHeadOxygenToInositolHydroxylWalk,
            M::AlkylEtherPhospholipidAlkylEtherOxygenToSnTwoEsterOxygenWalk,
            M::OneTwoDiacylglycerolSnOneCarbonylOxygenToSnTwoCarbonylOxygenWalk,
        ] {
            assert!(fp.get(motif), "{motif}");
        }
        assert!(!fp.get(M::PhosphatidylcholineCholineNitrogenToPhosphateHeadOxygenWalk));
    }

    #[test]
    fn phosphatidic_acid() {
        let ctx = smiles("[OH]P(=O)(O)[O]C[CH](C[O]C(=[O])CCCC)[O]C(=[O])CCCC", &[], &[]);
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        for motif in [
            M::GlycerophospholipidPhosphateHeadOxygenToGlycerolPhosphateOxygenWalk,
            M::GlycerophospholipidPhosphateHeadOxygenToSnTwoEsterOxygenWalk,
            M::PhosphatidylglycerolHeadGlycerolHydroxylToPhosphateHeadOxygenWalk,
            M::GlycerophospholipidGlycerolPhosphateOxygenToSnTwoEsterOxygenWalk,
            M::DiacylglycerolSnTwoEsterOxygenToSnThreeHydroxylWalk,
            M::OneTwoDiacylglycerolSnOneEsterOxygenToSnTwoCarbonylOxygenWalk,
        ] {
            assert!(fp.get(motif), "{motif}");
        }
        assert!(!fp.get(M::PhosphatidylcholineCholineNitrogenToPhosphateHeadOxygenWalk));
    }

    #[test]
    fn lysophosphatidylcholine() {
        let ctx = smiles("C[N+](C)(C)CC[O]P(=O)([O-])[O]C[CH]([OH])C[O]C(=[O])CCCC", &[], &[]);
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        for motif in [
            M::PhosphatidylcholineCholineNitrogenToPhosphateHeadOxygenWalk,
            M::PhosphatidylethanolamineAminoNitrogenToSnOneEsterOxygenWalk,
            M::GlycerophospholipidPhosphateHeadOxygenToGlycerolPhosphateOxygenWalk,
            M::GlycerophospholipidGlycerolPhosphateOxygenToSnOneEsterOxygenWalk,
            M::GlycerophospholipidGlycerolPhosphateOxygenToSnOneCarbonylOxygenWalk,
            M::MonoacylglycerolSnTwoHydroxylToSnThreeHydroxylWalk,
        ] {
            assert!(fp.get(motif), "{motif}");
        }
        assert!(!fp.get(M::PhosphatidylcholineCholineNitrogenToSnTwoCarbonylOxygenWalk));
    }

    #[test]
    fn sphingomyelin() {
        let ctx = smiles("C[N+](C)(C)CC[O]P(=O)([O-])C[CH]([NH]C(=[O])CCCC)[CH]([OH])C=CCCCC", &[], &[]);
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        for motif in [
            M::PhosphatidylcholineCholineNitrogenToPhosphateHeadOxygenWalk,
            M::SphingomyelinAmideNitrogenToCThreeHydroxylWalk,
            M::PhosphatidylethanolamineAminoNitrogenToGlycerolPhosphateOxygenWalk,
            M::SphingomyelinCholineNitrogenToAcylCarbonylOxygenWalk,
            M::SphingomyelinPhosphateHeadOxygenToAmideNitrogenWalk,
            M::SphingomyelinPhosphateHeadOxygenToCThreeHydroxylWalk,
        ] {
            assert!(fp.get(motif), "{motif}");
        }
        assert!(!fp.get(M::PhosphatidylcholineCholineNitrogenToSnOneEsterOxygenWalk));
    }

    #[test]
    fn ceramide() {
        let ctx = smiles("[OH]C[CH]([NH]C(=[O])CCCCC)[CH]([OH])C=CCCCCC", &[], &[]);
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        for motif in [
            M::PhosphatidylethanolamineAminoNitrogenToPhosphateHeadOxygenWalk,
            M::SphingomyelinAmideNitrogenToCThreeHydroxylWalk,
            M::PhosphatidylserineSerineCarboxylToPhosphateHeadOxygenWalk,
            M::CeramideSnOneHydroxylToCThreeHydroxylWalk,
            M::AlkylEtherPhospholipidAlkylEtherOxygenToPhosphateHeadOxygenWalk,
            M::SphingomyelinAmideNitrogenToAcylCarbonylOxygenWalk,
        ] {
            assert!(fp.get(motif), "{motif}");
        }
        assert!(!fp.get(M::PhosphatidylcholineCholineNitrogenToPhosphateHeadOxygenWalk));
    }

    #[test]
    fn triacylglycerol() {
        let ctx = smiles("CCCC(=[O])[O]C[CH]([O]C(=[O])CCCC)C[O]C(=[O])CCCC", &[], &[]);
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        for motif in [
            M::GlycerophospholipidGlycerolPhosphateOxygenToSnOneEsterOxygenWalk,
            M::TriacylglycerolSnOneEsterOxygenToSnThreeEsterOxygenWalk,
            M::GlycerophospholipidGlycerolPhosphateOxygenToSnOneCarbonylOxygenWalk,
            M::OneTwoDiacylglycerolSnOneEsterOxygenToSnTwoEsterOxygenWalk,
            M::PlasmalogenSnTwoEsterOxygenToPhosphateHeadOxygenWalk,
            M::OneTwoDiacylglycerolSnOneEsterOxygenToSnTwoCarbonylOxygenWalk,
        ] {
            assert!(fp.get(motif), "{motif}");
        }
        assert!(!fp.get(M::PhosphatidylcholineCholineNitrogenToPhosphateHeadOxygenWalk));
    }

    #[test]
    fn diacylglycerol() {
        let ctx = smiles("CCCC(=[O])[O]C[CH]([O]C(=[O])CCCC)C[OH]", &[], &[]);
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        for motif in [
            M::GlycerophospholipidGlycerolPhosphateOxygenToSnOneEsterOxygenWalk,
            M::TriacylglycerolSnOneEsterOxygenToSnThreeEsterOxygenWalk,
            M::GlycerophospholipidGlycerolPhosphateOxygenToSnOneCarbonylOxygenWalk,
            M::OneTwoDiacylglycerolSnOneEsterOxygenToSnTwoEsterOxygenWalk,
            M::PlasmalogenSnTwoEsterOxygenToPhosphateHeadOxygenWalk,
            M::OneTwoDiacylglycerolSnOneEsterOxygenToSnTwoCarbonylOxygenWalk,
        ] {
            assert!(fp.get(motif), "{motif}");
        }
        assert!(!fp.get(M::PhosphatidylcholineCholineNitrogenToPhosphateHeadOxygenWalk));
    }

    #[test]
    fn monoacylglycerol() {
        let ctx = smiles("CCCCC(=[O])[O]C[CH]([OH])C[OH]", &[], &[]);
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        for motif in [
            M::GlycerophospholipidGlycerolPhosphateOxygenToSnOneEsterOxygenWalk,
            M::TriacylglycerolSnOneEsterOxygenToSnThreeEsterOxygenWalk,
            M::AcylcarnitineEsterOxygenToCarboxylateOxygenWalk,
            M::OneTwoDiacylglycerolSnOneEsterOxygenToSnTwoEsterOxygenWalk,
            M::DiacylglycerolSnTwoEsterOxygenToSnThreeHydroxylWalk,
            M::AlkylEtherPhospholipidAlkylEtherOxygenToSnTwoEsterOxygenWalk,
        ] {
            assert!(fp.get(motif), "{motif}");
        }
        assert!(!fp.get(M::PhosphatidylcholineCholineNitrogenToPhosphateHeadOxygenWalk));
    }

    #[test]
    fn plasmalogen() {
        let ctx = smiles("CCCC=C[O]C[CH]([O]C(=[O])CCC)C[O]P(=O)(O)OCC[NH2]", &[], &[]);
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        for motif in [
            M::PhosphatidylethanolamineAminoNitrogenToPhosphateHeadOxygenWalk,
            M::PhosphatidylethanolamineAminoNitrogenToSnTwoCarbonylOxygenWalk,
            M::GlycerophospholipidPhosphateHeadOxygenToSnTwoCarbonylOxygenWalk,
            M::AlkylEtherPhospholipidAlkylEtherOxygenToPhosphateHeadOxygenWalk,
            M::LysophosphatidylcholineGlycerolPhosphateOxygenToSnTwoHydroxylWalk,
            M::AlkylEtherPhospholipidAlkylEtherOxygenToSnTwoEsterOxygenWalk,
        ] {
            assert!(fp.get(motif), "{motif}");
        }
        assert!(!fp.get(M::PhosphatidylcholineCholineNitrogenToPhosphateHeadOxygenWalk));
    }

    #[test]
    fn alkyl_ether_phospholipid() {
        let ctx = smiles("CCCCC[O]C[CH]([O]C(=[O])C)C[O]P(=O)([O-])OCC[N+](C)(C)C", &[], &[]);
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        for motif in [
            M::PhosphatidylcholineCholineNitrogenToPhosphateHeadOxygenWalk,
            M::PhosphatidylcholineCholineNitrogenToSnOneEsterOxygenWalk,
            M::PhosphatidylethanolamineAminoNitrogenToSnTwoCarbonylOxygenWalk,
            M::GlycerophospholipidGlycerolPhosphateOxygenToSnOneEsterOxygenWalk,
            M::GlycerophospholipidGlycerolPhosphateOxygenToSnTwoEsterOxygenWalk,
            M::PlasmalogenSnTwoEsterOxygenToPhosphateHeadOxygenWalk,
        ] {
            assert!(fp.get(motif), "{motif}");
        }
        assert!(!fp.get(M::PhosphatidylcholineCholineNitrogenToSnOneCarbonylOxygenWalk));
    }

    #[test]
    fn acyl_coa() {
        let ctx = smiles("CCCC(=[O])[S]CC[NH]C(=[O])CC[NH]C(=[O])[CH]([OH])C(C)(C)C[O]P(=O)(O)O", &[], &[]);
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        for motif in [
            M::PhosphatidylethanolamineAminoNitrogenToPhosphateHeadOxygenWalk,
            M::PhosphatidylserineSerineCarboxylToPhosphateHeadOxygenWalk,
            M::SphingomyelinAmideNitrogenToAcylCarbonylOxygenWalk,
            M::AcylCoAAcylCarbonylOxygenToPantoylHydroxylWalk,
            M::AcylCoAThioesterSulfurToPhosphateHeadOxygenWalk,
            M::AcylCoABetaAlanineCarbonylOxygenToPantoylCarbonylOxygenWalk,
        ] {
            assert!(fp.get(motif), "{motif}");
        }
        assert!(!fp.get(M::PhosphatidylcholineCholineNitrogenToPhosphateHeadOxygenWalk));
    }

    #[test]
    fn acylcarnitine() {
        let ctx = smiles("CCCC(=[O])[O][CH](C[N+](C)(C)C)CC(=O)[O-]", &[], &[]);
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        for motif in [
            M::PhosphatidylcholineCholineNitrogenToPhosphateHeadOxygenWalk,
            M::GlycerophospholipidGlycerolPhosphateOxygenToSnOneEsterOxygenWalk,
            M::PhosphatidylglycerolHeadGlycerolHydroxylToPhosphateHeadOxygenWalk,
            M::DiacylglycerolSnOneEsterOxygenToSnThreeHydroxylWalk,
            M::AcylcarnitineEsterOxygenToCarboxylateOxygenWalk,
            M::OneTwoDiacylglycerolSnOneEsterOxygenToSnOneCarbonylOxygenWalk,
        ] {
            assert!(fp.get(motif), "{motif}");
        }
        assert!(!fp.get(M::PhosphatidylcholineCholineNitrogenToGlycerolPhosphateOxygenWalk));
    }
}
