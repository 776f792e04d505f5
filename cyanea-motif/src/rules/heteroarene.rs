//! Substituents on single heteroaromatic rings, named by ring position relative to the
//! ring heteroatom, and heteroaryl rings tethered to a functional group by a straight chain.

use super::common::*;
use super::{first_of, when, RuleTable};
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
    t.extend(
        "C-C:N",
        clauses![first_of(vec![
            when(|p| !p.bond_in_ring(0) && ring_run(p, 1, 3, R::Pyridine), &[]).then(clauses![
                first_of(vec![
                    when(|p| methyl(p, 0), &[M::TwoMethylpyridine]),
                    when(|p| hydroxymethyl(p, 0), &[M::TwoHydroxymethylpyridine]),
                    when(|p| trifluoromethyl(p, 0), &[M::TwoTrifluoromethylpyridine]),
                    when(|p| carboxyl_carbon(p, 0), &[M::TwoCarboxypyridine]),
                    when(|p| ester_carbon(p, 0), &[M::TwoAlkoxycarbonylpyridine]),
                    when(|p| amide_carbon(p, 0), &[M::TwoCarbamoylpyridine]),
                    when(|p| aldehyde_carbon(p, 0), &[M::TwoFormylpyridine]),
                    when(|p| ketone_carbon(p, 0), &[M::TwoAcylpyridine]),
                    when(|p| cyano(p, 0), &[M::TwoCyanopyridine]),
                    when(|p| vinyl(p, 0), &[M::TwoVinylpyridine]),
                    when(|p| alkyl(p, 0), &[M::TwoAlkylpyridine]),
                ]),
            ]),
            when(|p| !p.bond_in_ring(0) && ring_run(p, 1, 3, R::Pyrrole), &[]).then(clauses![
                first_of(vec![
                    when(|p| methyl(p, 0), &[M::TwoMethylpyrrole]),
                    when(|p| hydroxymethyl(p, 0), &[M::TwoHydroxymethylpyrrole]),
                    when(|p| trifluoromethyl(p, 0), &[M::TwoTrifluoromethylpyrrole]),
                    when(|p| carboxyl_carbon(p, 0), &[M::TwoCarboxypyrrole]),
                    when(|p| ester_carbon(p, 0), &[M::TwoAlkoxycarbonylpyrrole]),
                    when(|p| amide_carbon(p, 0), &[M::TwoCarbamoylpyrrole]),
                    when(|p| aldehyde_carbon(p, 0), &[M::TwoFormylpyrrole]),
                    when(|p| ketone_carbon(p, 0), &[M::TwoAcylpyrrole]),
                    when(|p| cyano(p, 0), &[M::TwoCyanopyrrole]),
                    when(|p| vinyl(p, 0), &[M::TwoVinylpyrrole]),
                    when(|p| alkyl(p, 0), &[M::TwoAlkylpyrrole]),
                ]),
            ]),
        ])],
    );

    t.add(
        "C-C:O",
        clauses![when(|p| !p.bond_in_ring(0) && ring_run(p, 1, 3, R::Furan), &[]).then(clauses![
            first_of(vec![
                when(|p| methyl(p, 0), &[M::TwoMethylfuran]),
                when(|p| hydroxymethyl(p, 0), &[M::TwoHydroxymethylfuran]),
                when(|p| trifluoromethyl(p, 0), &[M::TwoTrifluoromethylfuran]),
                when(|p| carboxyl_carbon(p, 0), &[M::TwoCarboxyfuran]),
                when(|p| ester_carbon(p, 0), &[M::TwoAlkoxycarbonylfuran]),
                when(|p| amide_carbon(p, 0), &[M::TwoCarbamoylfuran]),
                when(|p| aldehyde_carbon(p, 0), &[M::TwoFormylfuran]),
                when(|p| ketone_carbon(p, 0), &[M::TwoAcylfuran]),
                when(|p| cyano(p, 0), &[M::TwoCyanofuran]),
                when(|p| vinyl(p, 0), &[M::TwoVinylfuran]),
                when(|p| alkyl(p, 0), &[M::TwoAlkylfuran]),
            ]),
        ])],
    );

    t.add(
        "C-C:S",
        clauses![when(|p| !p.bond_in_ring(0) && ring_run(p, 1, 3, R::Thiophene), &[]).then(clauses![
            first_of(vec![
                when(|p| methyl(p, 0), &[M::TwoMethylthiophene]),
                when(|p| hydroxymethyl(p, 0), &[M::TwoHydroxymethylthiophene]),
                when(|p| trifluoromethyl(p, 0), &[M::TwoTrifluoromethylthiophene]),
                when(|p| carboxyl_carbon(p, 0), &[M::TwoCarboxythiophene]),
                when(|p| ester_carbon(p, 0), &[M::TwoAlkoxycarbonylthiophene]),
                when(|p| amide_carbon(p, 0), &[M::TwoCarbamoylthiophene]),
                when(|p| aldehyde_carbon(p, 0), &[M::TwoFormylthiophene]),
                when(|p| ketone_carbon(p, 0), &[M::TwoAcylthiophene]),
                when(|p| cyano(p, 0), &[M::TwoCyanothiophene]),
                when(|p| vinyl(p, 0), &[M::TwoVinylthiophene]),
                when(|p| alkyl(p, 0), &[M::TwoAlkylthiophene]),
            ]),
        ])],
    );

    t.add(
        "N:C-O",
        clauses![first_of(vec![
            when(|p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Pyridine), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 2), &[M::TwoHydroxypyridine]),
                    when(|p| methoxy(p, 2), &[M::TwoMethoxypyridine]),
                    when(|p| ether_oxygen(p, 2), &[M::TwoAlkoxypyridine]),
                    when(|p| ester_oxygen(p, 2), &[M::TwoAcyloxypyridine]),
                ]),
            ]),
            when(|p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Pyrrole), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 2), &[M::TwoHydroxypyrrole]),
                    when(|p| methoxy(p, 2), &[M::TwoMethoxypyrrole]),
                    when(|p| ether_oxygen(p, 2), &[M::TwoAlkoxypyrrole]),
                    when(|p| ester_oxygen(p, 2), &[M::TwoAcyloxypyrrole]),
                ]),
            ]),
        ])],
    );

    t.add(
        "O-C:O",
        clauses![when(|p| !p.bond_in_ring(0) && ring_run(p, 1, 3, R::Furan), &[]).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 0), &[M::TwoHydroxyfuran]),
                when(|p| methoxy(p, 0), &[M::TwoMethoxyfuran]),
                when(|p| ether_oxygen(p, 0), &[M::TwoAlkoxyfuran]),
                when(|p| ester_oxygen(p, 0), &[M::TwoAcyloxyfuran]),
            ]),
        ])],
    );

    t.add(
        "O-C:S",
        clauses![when(|p| !p.bond_in_ring(0) && ring_run(p, 1, 3, R::Thiophene), &[]).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 0), &[M::TwoHydroxythiophene]),
                when(|p| methoxy(p, 0), &[M::TwoMethoxythiophene]),
                when(|p| ether_oxygen(p, 0), &[M::TwoAlkoxythiophene]),
                when(|p| ester_oxygen(p, 0), &[M::TwoAcyloxythiophene]),
            ]),
        ])],
    );

    t.add(
        "N-C:N",
        clauses![first_of(vec![
            when(|p| !p.bond_in_ring(0) && ring_run(p, 1, 3, R::Pyridine), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 0), &[M::TwoAminopyridine]),
                    when(|p| substituted_amine(p, 0), &[M::TwoAlkylaminopyridine]),
                    when(|p| amide_nitrogen(p, 0), &[M::TwoAcylaminopyridine]),
                    when(|p| nitro(p, 0), &[M::TwoNitropyridine]),
                ]),
            ]),
            when(|p| !p.bond_in_ring(0) && ring_run(p, 1, 3, R::Pyrrole), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 0), &[M::TwoAminopyrrole]),
                    when(|p| substituted_amine(p, 0), &[M::TwoAlkylaminopyrrole]),
                    when(|p| amide_nitrogen(p, 0), &[M::TwoAcylaminopyrrole]),
                    when(|p| nitro(p, 0), &[M::TwoNitropyrrole]),
                ]),
            ]),
        ])],
    );

    t.add(
        "N-C:O",
        clauses![when(|p| !p.bond_in_ring(0) && ring_run(p, 1, 3, R::Furan), &[]).then(clauses![
            first_of(vec![
                when(|p| primary_amine(p, 0), &[M::TwoAminofuran]),
                when(|p| substituted_amine(p, 0), &[M::TwoAlkylaminofuran]),
                when(|p| amide_nitrogen(p, 0), &[M::TwoAcylaminofuran]),
                when(|p| nitro(p, 0), &[M::TwoNitrofuran]),
            ]),
        ])],
    );

    t.add(
        "N-C:S",
        clauses![when(|p| !p.bond_in_ring(0) && ring_run(p, 1, 3, R::Thiophene), &[]).then(clauses![
            first_of(vec![
                when(|p| primary_amine(p, 0), &[M::TwoAminothiophene]),
                when(|p| substituted_amine(p, 0), &[M::TwoAlkylaminothiophene]),
                when(|p| amide_nitrogen(p, 0), &[M::TwoAcylaminothiophene]),
                when(|p| nitro(p, 0), &[M::TwoNitrothiophene]),
            ]),
        ])],
    );

    t.add(
        "N:C-S",
        clauses![first_of(vec![
            when(|p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Pyridine), &[]).then(clauses![
                first_of(vec![
                    when(|p| thiol(p, 2), &[M::TwoMercaptopyridine]),
                    when(|p| thioether(p, 2), &[M::TwoAlkylthiopyridine]),
                    when(|p| sulfonyl(p, 2), &[M::TwoSulfonylpyridine]),
                ]),
            ]),
            when(|p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Pyrrole), &[]).then(clauses![
                first_of(vec![
                    when(|p| thiol(p, 2), &[M::TwoMercaptopyrrole]),
                    when(|p| thioether(p, 2), &[M::TwoAlkylthiopyrrole]),
                    when(|p| sulfonyl(p, 2), &[M::TwoSulfonylpyrrole]),
                ]),
            ]),
        ])],
    );

    t.add(
        "O:C-S",
        clauses![when(|p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Furan), &[]).then(clauses![
            first_of(vec![
                when(|p| thiol(p, 2), &[M::TwoMercaptofuran]),
                when(|p| thioether(p, 2), &[M::TwoAlkylthiofuran]),
                when(|p| sulfonyl(p, 2), &[M::TwoSulfonylfuran]),
            ]),
        ])],
    );

    t.add(
        "S-C:S",
        clauses![when(|p| !p.bond_in_ring(0) && ring_run(p, 1, 3, R::Thiophene), &[]).then(clauses![
            first_of(vec![
                when(|p| thiol(p, 0), &[M::TwoMercaptothiophene]),
                when(|p| thioether(p, 0), &[M::TwoAlkylthiothiophene]),
                when(|p| sulfonyl(p, 0), &[M::TwoSulfonylthiophene]),
            ]),
        ])],
    );

    t.add(
        "F-C:N",
        clauses![first_of(vec![
            when(|p| !p.bond_in_ring(0) && ring_run(p, 1, 3, R::Pyridine), &[M::TwoFluoropyridine]),
            when(|p| !p.bond_in_ring(0) && ring_run(p, 1, 3, R::Pyrrole), &[M::TwoFluoropyrrole]),
        ])],
    );

    t.add("F-C:O", clauses![when(|p| !p.bond_in_ring(0) && ring_run(p, 1, 3, R::Furan), &[M::TwoFluorofuran])]);

    t.add(
        "F-C:S",
        clauses![when(|p| !p.bond_in_ring(0) && ring_run(p, 1, 3, R::Thiophene), &[M::TwoFluorothiophene])],
    );

    t.add(
        "Cl-C:N",
        clauses![first_of(vec![
            when(|p| !p.bond_in_ring(0) && ring_run(p, 1, 3, R::Pyridine), &[M::TwoChloropyridine]),
            when(|p| !p.bond_in_ring(0) && ring_run(p, 1, 3, R::Pyrrole), &[M::TwoChloropyrrole]),
        ])],
    );

    t.add("Cl-C:O", clauses![when(|p| !p.bond_in_ring(0) && ring_run(p, 1, 3, R::Furan), &[M::TwoChlorofuran])]);

    t.add(
        "Cl-C:S",
        clauses![when(|p| !p.bond_in_ring(0) && ring_run(p, 1, 3, R::Thiophene), &[M::TwoChlorothiophene])],
    );

    t.add(
        "Br-C:N",
        clauses![first_of(vec![
            when(|p| !p.bond_in_ring(0) && ring_run(p, 1, 3, R::Pyridine), &[M::TwoBromopyridine]),
            when(|p| !p.bond_in_ring(0) && ring_run(p, 1, 3, R::Pyrrole), &[M::TwoBromopyrrole]),
        ])],
    );

    t.add("Br-C:O", clauses![when(|p| !p.bond_in_ring(0) && ring_run(p, 1, 3, R::Furan), &[M::TwoBromofuran])]);

    t.add(
        "Br-C:S",
        clauses![when(|p| !p.bond_in_ring(0) && ring_run(p, 1, 3, R::Thiophene), &[M::TwoBromothiophene])],
    );

    t.add(
        "I-C:N",
        clauses![first_of(vec![
            when(|p| !p.bond_in_ring(0) && ring_run(p, 1, 3, R::Pyridine), &[M::TwoIodopyridine]),
            when(|p| !p.bond_in_ring(0) && ring_run(p, 1, 3, R::Pyrrole), &[M::TwoIodopyrrole]),
        ])],
    );

    t.add("I-C:O", clauses![when(|p| !p.bond_in_ring(0) && ring_run(p, 1, 3, R::Furan), &[M::TwoIodofuran])]);

    t.add("I-C:S", clauses![when(|p| !p.bond_in_ring(0) && ring_run(p, 1, 3, R::Thiophene), &[M::TwoIodothiophene])]);
}

fn four(t: &mut RuleTable) {
    t.add(
        "C-C:C:N",
        clauses![first_of(vec![
            when(|p| !p.bond_in_ring(0) && ring_run(p, 1, 4, R::Pyridine), &[]).then(clauses![
                first_of(vec![
                    when(|p| methyl(p, 0), &[M::ThreeMethylpyridine]),
                    when(|p| hydroxymethyl(p, 0), &[M::ThreeHydroxymethylpyridine]),
                    when(|p| trifluoromethyl(p, 0), &[M::ThreeTrifluoromethylpyridine]),
                    when(|p| carboxyl_carbon(p, 0), &[M::ThreeCarboxypyridine]),
                    when(|p| ester_carbon(p, 0), &[M::ThreeAlkoxycarbonylpyridine]),
                    when(|p| amide_carbon(p, 0), &[M::ThreeCarbamoylpyridine]),
                    when(|p| aldehyde_carbon(p, 0), &[M::ThreeFormylpyridine]),
                    when(|p| ketone_carbon(p, 0), &[M::ThreeAcylpyridine]),
                    when(|p| cyano(p, 0), &[M::ThreeCyanopyridine]),
                    when(|p| vinyl(p, 0), &[M::ThreeVinylpyridine]),
                    when(|p| alkyl(p, 0), &[M::ThreeAlkylpyridine]),
                ]),
            ]),
            when(|p| !p.bond_in_ring(0) && ring_run(p, 1, 4, R::Pyrrole), &[]).then(clauses![
                first_of(vec![
                    when(|p| methyl(p, 0), &[M::ThreeMethylpyrrole]),
                    when(|p| hydroxymethyl(p, 0), &[M::ThreeHydroxymethylpyrrole]),
                    when(|p| trifluoromethyl(p, 0), &[M::ThreeTrifluoromethylpyrrole]),
                    when(|p| carboxyl_carbon(p, 0), &[M::ThreeCarboxypyrrole]),
                    when(|p| ester_carbon(p, 0), &[M::ThreeAlkoxycarbonylpyrrole]),
                    when(|p| amide_carbon(p, 0), &[M::ThreeCarbamoylpyrrole]),
                    when(|p| aldehyde_carbon(p, 0), &[M::ThreeFormylpyrrole]),
                    when(|p| ketone_carbon(p, 0), &[M::ThreeAcylpyrrole]),
                    when(|p| cyano(p, 0), &[M::ThreeCyanopyrrole]),
                    when(|p| vinyl(p, 0), &[M::ThreeVinylpyrrole]),
                    when(|p| alkyl(p, 0), &[M::ThreeAlkylpyrrole]),
                ]),
            ]),
        ])],
    );

    t.add(
        "C-C:C:O",
        clauses![when(|p| !p.bond_in_ring(0) && ring_run(p, 1, 4, R::Furan), &[]).then(clauses![
            first_of(vec![
                when(|p| methyl(p, 0), &[M::ThreeMethylfuran]),
                when(|p| hydroxymethyl(p, 0), &[M::ThreeHydroxymethylfuran]),
                when(|p| trifluoromethyl(p, 0), &[M::ThreeTrifluoromethylfuran]),
                when(|p| carboxyl_carbon(p, 0), &[M::ThreeCarboxyfuran]),
                when(|p| ester_carbon(p, 0), &[M::ThreeAlkoxycarbonylfuran]),
                when(|p| amide_carbon(p, 0), &[M::ThreeCarbamoylfuran]),
                when(|p| aldehyde_carbon(p, 0), &[M::ThreeFormylfuran]),
                when(|p| ketone_carbon(p, 0), &[M::ThreeAcylfuran]),
                when(|p| cyano(p, 0), &[M::ThreeCyanofuran]),
                when(|p| vinyl(p, 0), &[M::ThreeVinylfuran]),
                when(|p| alkyl(p, 0), &[M::ThreeAlkylfuran]),
            ]),
        ])],
    );

    t.add(
        "C-C:C:S",
        clauses![when(|p| !p.bond_in_ring(0) && ring_run(p, 1, 4, R::Thiophene), &[]).then(clauses![
            first_of(vec![
                when(|p| methyl(p, 0), &[M::ThreeMethylthiophene]),
                when(|p| hydroxymethyl(p, 0), &[M::ThreeHydroxymethylthiophene]),
                when(|p| trifluoromethyl(p, 0), &[M::ThreeTrifluoromethylthiophene]),
                when(|p| carboxyl_carbon(p, 0), &[M::ThreeCarboxythiophene]),
                when(|p| ester_carbon(p, 0), &[M::ThreeAlkoxycarbonylthiophene]),
                when(|p| amide_carbon(p, 0), &[M::ThreeCarbamoylthiophene]),
                when(|p| aldehyde_carbon(p, 0), &[M::ThreeFormylthiophene]),
                when(|p| ketone_carbon(p, 0), &[M::ThreeAcylthiophene]),
                when(|p| cyano(p, 0), &[M::ThreeCyanothiophene]),
                when(|p| vinyl(p, 0), &[M::ThreeVinylthiophene]),
                when(|p| alkyl(p, 0), &[M::ThreeAlkylthiophene]),
            ]),
        ])],
    );

    t.add(
        "N:C:C-O",
        clauses![first_of(vec![
            when(|p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Pyridine), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 3), &[M::ThreeHydroxypyridine]),
                    when(|p| methoxy(p, 3), &[M::ThreeMethoxypyridine]),
                    when(|p| ether_oxygen(p, 3), &[M::ThreeAlkoxypyridine]),
                    when(|p| ester_oxygen(p, 3), &[M::ThreeAcyloxypyridine]),
                ]),
            ]),
            when(|p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Pyrrole), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 3), &[M::ThreeHydroxypyrrole]),
                    when(|p| methoxy(p, 3), &[M::ThreeMethoxypyrrole]),
                    when(|p| ether_oxygen(p, 3), &[M::ThreeAlkoxypyrrole]),
                    when(|p| ester_oxygen(p, 3), &[M::ThreeAcyloxypyrrole]),
                ]),
            ]),
        ])],
    );

    t.add(
        "O-C:C:O",
        clauses![when(|p| !p.bond_in_ring(0) && ring_run(p, 1, 4, R::Furan), &[]).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 0), &[M::ThreeHydroxyfuran]),
                when(|p| methoxy(p, 0), &[M::ThreeMethoxyfuran]),
                when(|p| ether_oxygen(p, 0), &[M::ThreeAlkoxyfuran]),
                when(|p| ester_oxygen(p, 0), &[M::ThreeAcyloxyfuran]),
            ]),
        ])],
    );

    t.add(
        "O-C:C:S",
        clauses![when(|p| !p.bond_in_ring(0) && ring_run(p, 1, 4, R::Thiophene), &[]).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 0), &[M::ThreeHydroxythiophene]),
                when(|p| methoxy(p, 0), &[M::ThreeMethoxythiophene]),
                when(|p| ether_oxygen(p, 0), &[M::ThreeAlkoxythiophene]),
                when(|p| ester_oxygen(p, 0), &[M::ThreeAcyloxythiophene]),
            ]),
        ])],
    );

    t.add(
        "N-C:C:N",
        clauses![first_of(vec![
            when(|p| !p.bond_in_ring(0) && ring_run(p, 1, 4, R::Pyridine), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 0), &[M::ThreeAminopyridine]),
                    when(|p| substituted_amine(p, 0), &[M::ThreeAlkylaminopyridine]),
                    when(|p| amide_nitrogen(p, 0), &[M::ThreeAcylaminopyridine]),
                    when(|p| nitro(p, 0), &[M::ThreeNitropyridine]),
                ]),
            ]),
            when(|p| !p.bond_in_ring(0) && ring_run(p, 1, 4, R::Pyrrole), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 0), &[M::ThreeAminopyrrole]),
                    when(|p| substituted_amine(p, 0), &[M::ThreeAlkylaminopyrrole]),
                    when(|p| amide_nitrogen(p, 0), &[M::ThreeAcylaminopyrrole]),
                    when(|p| nitro(p, 0), &[M::ThreeNitropyrrole]),
                ]),
            ]),
        ])],
    );

    t.add(
        "N-C:C:O",
        clauses![when(|p| !p.bond_in_ring(0) && ring_run(p, 1, 4, R::Furan), &[]).then(clauses![
            first_of(vec![
                when(|p| primary_amine(p, 0), &[M::ThreeAminofuran]),
                when(|p| substituted_amine(p, 0), &[M::ThreeAlkylaminofuran]),
                when(|p| amide_nitrogen(p, 0), &[M::ThreeAcylaminofuran]),
                when(|p| nitro(p, 0), &[M::ThreeNitrofuran]),
            ]),
        ])],
    );

    t.add(
        "N-C:C:S",
        clauses![when(|p| !p.bond_in_ring(0) && ring_run(p, 1, 4, R::Thiophene), &[]).then(clauses![
            first_of(vec![
                when(|p| primary_amine(p, 0), &[M::ThreeAminothiophene]),
                when(|p| substituted_amine(p, 0), &[M::ThreeAlkylaminothiophene]),
                when(|p| amide_nitrogen(p, 0), &[M::ThreeAcylaminothiophene]),
                when(|p| nitro(p, 0), &[M::ThreeNitrothiophene]),
            ]),
        ])],
    );

    t.add(
        "N:C:C-S",
        clauses![first_of(vec![
            when(|p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Pyridine), &[]).then(clauses![
                first_of(vec![
                    when(|p| thiol(p, 3), &[M::ThreeMercaptopyridine]),
                    when(|p| thioether(p, 3), &[M::ThreeAlkylthiopyridine]),
                    when(|p| sulfonyl(p, 3), &[M::ThreeSulfonylpyridine]),
                ]),
            ]),
            when(|p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Pyrrole), &[]).then(clauses![
                first_of(vec![
                    when(|p| thiol(p, 3), &[M::ThreeMercaptopyrrole]),
                    when(|p| thioether(p, 3), &[M::ThreeAlkylthiopyrrole]),
                    when(|p| sulfonyl(p, 3), &[M::ThreeSulfonylpyrrole]),
                ]),
            ]),
        ])],
    );

    t.add(
        "O:C:C-S",
        clauses![when(|p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Furan), &[]).then(clauses![
            first_of(vec![
                when(|p| thiol(p, 3), &[M::ThreeMercaptofuran]),
                when(|p| thioether(p, 3), &[M::ThreeAlkylthiofuran]),
                when(|p| sulfonyl(p, 3), &[M::ThreeSulfonylfuran]),
            ]),
        ])],
    );

    t.add(
        "S-C:C:S",
        clauses![when(|p| !p.bond_in_ring(0) && ring_run(p, 1, 4, R::Thiophene), &[]).then(clauses![
            first_of(vec![
                when(|p| thiol(p, 0), &[M::ThreeMercaptothiophene]),
                when(|p| thioether(p, 0), &[M::ThreeAlkylthiothiophene]),
                when(|p| sulfonyl(p, 0), &[M::ThreeSulfonylthiophene]),
            ]),
        ])],
    );

    t.add(
        "F-C:C:N",
        clauses![first_of(vec![
            when(|p| !p.bond_in_ring(0) && ring_run(p, 1, 4, R::Pyridine), &[M::ThreeFluoropyridine]),
            when(|p| !p.bond_in_ring(0) && ring_run(p, 1, 4, R::Pyrrole), &[M::ThreeFluoropyrrole]),
        ])],
    );

    t.add("F-C:C:O", clauses![when(|p| !p.bond_in_ring(0) && ring_run(p, 1, 4, R::Furan), &[M::ThreeFluorofuran])]);

    t.add(
        "F-C:C:S",
        clauses![when(|p| !p.bond_in_ring(0) && ring_run(p, 1, 4, R::Thiophene), &[M::ThreeFluorothiophene])],
    );

    t.add(
        "Cl-C:C:N",
        clauses![first_of(vec![
            when(|p| !p.bond_in_ring(0) && ring_run(p, 1, 4, R::Pyridine), &[M::ThreeChloropyridine]),
            when(|p| !p.bond_in_ring(0) && ring_run(p, 1, 4, R::Pyrrole), &[M::ThreeChloropyrrole]),
        ])],
    );

    t.add("Cl-C:C:O", clauses![when(|p| !p.bond_in_ring(0) && ring_run(p, 1, 4, R::Furan), &[M::ThreeChlorofuran])]);

    t.add(
        "Cl-C:C:S",
        clauses![when(|p| !p.bond_in_ring(0) && ring_run(p, 1, 4, R::Thiophene), &[M::ThreeChlorothiophene])],
    );

    t.add(
        "Br-C:C:N",
        clauses![first_of(vec![
            when(|p| !p.bond_in_ring(0) && ring_run(p, 1, 4, R::Pyridine), &[M::ThreeBromopyridine]),
            when(|p| !p.bond_in_ring(0) && ring_run(p, 1, 4, R::Pyrrole), &[M::ThreeBromopyrrole]),
        ])],
    );

    t.add("Br-C:C:O", clauses![when(|p| !p.bond_in_ring(0) && ring_run(p, 1, 4, R::Furan), &[M::ThreeBromofuran])]);

    t.add(
        "Br-C:C:S",
        clauses![when(|p| !p.bond_in_ring(0) && ring_run(p, 1, 4, R::Thiophene), &[M::ThreeBromothiophene])],
    );

    t.add(
        "I-C:C:N",
        clauses![first_of(vec![
            when(|p| !p.bond_in_ring(0) && ring_run(p, 1, 4, R::Pyridine), &[M::ThreeIodopyridine]),
            when(|p| !p.bond_in_ring(0) && ring_run(p, 1, 4, R::Pyrrole), &[M::ThreeIodopyrrole]),
        ])],
    );

    t.add("I-C:C:O", clauses![when(|p| !p.bond_in_ring(0) && ring_run(p, 1, 4, R::Furan), &[M::ThreeIodofuran])]);

    t.add(
        "I-C:C:S",
        clauses![when(|p| !p.bond_in_ring(0) && ring_run(p, 1, 4, R::Thiophene), &[M::ThreeIodothiophene])],
    );

    t.add(
        "C-C-C:N",
        clauses![
            when(|p| !p.bond_in_ring(1) && ring_run(p, 2, 4, R::Pyridine) && straight(p, 1, 2), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 0), &[M::OneCarboxyOnePyridinTwoYlMethane]),
                    when(|p| ester_carbon(p, 0), &[M::OneAlkoxycarbonylOnePyridinTwoYlMethane]),
                    when(|p| amide_carbon(p, 0), &[M::OneCarbamoylOnePyridinTwoYlMethane]),
                    when(|p| aldehyde_carbon(p, 0), &[M::OneFormylOnePyridinTwoYlMethane]),
                    when(|p| ketone_carbon(p, 0), &[M::OneAcylOnePyridinTwoYlMethane]),
                    when(|p| cyano(p, 0), &[M::OneCyanoOnePyridinTwoYlMethane]),
                ]),
            ]),
            when(|p| !p.bond_in_ring(1) && ring_run(p, 2, 4, R::Pyrrole) && straight(p, 1, 2), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 0), &[M::OneCarboxyOnePyrrolTwoYlMethane]),
                    when(|p| ester_carbon(p, 0), &[M::OneAlkoxycarbonylOnePyrrolTwoYlMethane]),
                    when(|p| amide_carbon(p, 0), &[M::OneCarbamoylOnePyrrolTwoYlMethane]),
                    when(|p| aldehyde_carbon(p, 0), &[M::OneFormylOnePyrrolTwoYlMethane]),
                    when(|p| ketone_carbon(p, 0), &[M::OneAcylOnePyrrolTwoYlMethane]),
                    when(|p| cyano(p, 0), &[M::OneCyanoOnePyrrolTwoYlMethane]),
                ]),
            ]),
        ],
    );

    t.add(
        "N:C-C-O",
        clauses![
            when(|p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Pyridine) && straight(p, 2, 3), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 3), &[M::OneHydroxyOnePyridinTwoYlMethane]),
                    when(|p| methoxy(p, 3), &[M::OneMethoxyOnePyridinTwoYlMethane]),
                    when(|p| ether_oxygen(p, 3), &[M::OneAlkoxyOnePyridinTwoYlMethane]),
                    when(|p| ester_oxygen(p, 3), &[M::OneAcyloxyOnePyridinTwoYlMethane]),
                ]),
            ]),
            when(|p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Pyrrole) && straight(p, 2, 3), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 3), &[M::OneHydroxyOnePyrrolTwoYlMethane]),
                    when(|p| methoxy(p, 3), &[M::OneMethoxyOnePyrrolTwoYlMethane]),
                    when(|p| ether_oxygen(p, 3), &[M::OneAlkoxyOnePyrrolTwoYlMethane]),
                    when(|p| ester_oxygen(p, 3), &[M::OneAcyloxyOnePyrrolTwoYlMethane]),
                ]),
            ]),
        ],
    );

    t.add(
        "N-C-C:N",
        clauses![
            when(|p| !p.bond_in_ring(1) && ring_run(p, 2, 4, R::Pyridine) && straight(p, 1, 2), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 0), &[M::OneAminoOnePyridinTwoYlMethane]),
                    when(|p| substituted_amine(p, 0), &[M::OneAlkylaminoOnePyridinTwoYlMethane]),
                    when(|p| amide_nitrogen(p, 0), &[M::OneAcylaminoOnePyridinTwoYlMethane]),
                ]),
            ]),
            when(|p| !p.bond_in_ring(1) && ring_run(p, 2, 4, R::Pyrrole) && straight(p, 1, 2), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 0), &[M::OneAminoOnePyrrolTwoYlMethane]),
                    when(|p| substituted_amine(p, 0), &[M::OneAlkylaminoOnePyrrolTwoYlMethane]),
                    when(|p| amide_nitrogen(p, 0), &[M::OneAcylaminoOnePyrrolTwoYlMethane]),
                ]),
            ]),
        ],
    );

    t.add(
        "N:C-C-S",
        clauses![
            when(|p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Pyridine) && straight(p, 2, 3), &[]).then(clauses![
                first_of(vec![
                    when(|p| thiol(p, 3), &[M::OneMercaptoOnePyridinTwoYlMethane]),
                    when(|p| thioether(p, 3), &[M::OneAlkylthioOnePyridinTwoYlMethane]),
                    when(|p| sulfonyl(p, 3), &[M::OneSulfonylOnePyridinTwoYlMethane]),
                ]),
            ]),
            when(|p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Pyrrole) && straight(p, 2, 3), &[]).then(clauses![
                first_of(vec![
                    when(|p| thiol(p, 3), &[M::OneMercaptoOnePyrrolTwoYlMethane]),
                    when(|p| thioether(p, 3), &[M::OneAlkylthioOnePyrrolTwoYlMethane]),
                    when(|p| sulfonyl(p, 3), &[M::OneSulfonylOnePyrrolTwoYlMethane]),
                ]),
            ]),
        ],
    );

    t.add(
        "F-C-C:N",
        clauses![
            when(
                |p| !p.bond_in_ring(1) && ring_run(p, 2, 4, R::Pyridine) && straight(p, 1, 2),
                &[M::OneFluoroOnePyridinTwoYlMethane],
            ),
            when(
                |p| !p.bond_in_ring(1) && ring_run(p, 2, 4, R::Pyrrole) && straight(p, 1, 2),
                &[M::OneFluoroOnePyrrolTwoYlMethane],
            ),
        ],
    );

    t.add(
        "Cl-C-C:N",
        clauses![
            when(
                |p| !p.bond_in_ring(1) && ring_run(p, 2, 4, R::Pyridine) && straight(p, 1, 2),
                &[M::OneChloroOnePyridinTwoYlMethane],
            ),
            when(
                |p| !p.bond_in_ring(1) && ring_run(p, 2, 4, R::Pyrrole) && straight(p, 1, 2),
                &[M::OneChloroOnePyrrolTwoYlMethane],
            ),
        ],
    );

    t.add(
        "Br-C-C:N",
        clauses![
            when(
                |p| !p.bond_in_ring(1) && ring_run(p, 2, 4, R::Pyridine) && straight(p, 1, 2),
                &[M::OneBromoOnePyridinTwoYlMethane],
            ),
            when(
                |p| !p.bond_in_ring(1) && ring_run(p, 2, 4, R::Pyrrole) && straight(p, 1, 2),
                &[M::OneBromoOnePyrrolTwoYlMethane],
            ),
        ],
    );

    t.add(
        "I-C-C:N",
        clauses![
            when(
                |p| !p.bond_in_ring(1) && ring_run(p, 2, 4, R::Pyridine) && straight(p, 1, 2),
                &[M::OneIodoOnePyridinTwoYlMethane],
            ),
            when(
                |p| !p.bond_in_ring(1) && ring_run(p, 2, 4, R::Pyrrole) && straight(p, 1, 2),
                &[M::OneIodoOnePyrrolTwoYlMethane],
            ),
        ],
    );

    t.add(
        "C-C-C:O",
        clauses![when(|p| !p.bond_in_ring(1) && ring_run(p, 2, 4, R::Furan) && straight(p, 1, 2), &[]).then(clauses![
            first_of(vec![
                when(|p| carboxyl_carbon(p, 0), &[M::OneCarboxyOneFuranTwoYlMethane]),
                when(|p| ester_carbon(p, 0), &[M::OneAlkoxycarbonylOneFuranTwoYlMethane]),
                when(|p| amide_carbon(p, 0), &[M::OneCarbamoylOneFuranTwoYlMethane]),
                when(|p| aldehyde_carbon(p, 0), &[M::OneFormylOneFuranTwoYlMethane]),
                when(|p| ketone_carbon(p, 0), &[M::OneAcylOneFuranTwoYlMethane]),
                when(|p| cyano(p, 0), &[M::OneCyanoOneFuranTwoYlMethane]),
            ]),
        ])],
    );

    t.add(
        "O-C-C:O",
        clauses![when(|p| !p.bond_in_ring(1) && ring_run(p, 2, 4, R::Furan) && straight(p, 1, 2), &[]).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 0), &[M::OneHydroxyOneFuranTwoYlMethane]),
                when(|p| methoxy(p, 0), &[M::OneMethoxyOneFuranTwoYlMethane]),
                when(|p| ether_oxygen(p, 0), &[M::OneAlkoxyOneFuranTwoYlMethane]),
                when(|p| ester_oxygen(p, 0), &[M::OneAcyloxyOneFuranTwoYlMethane]),
            ]),
        ])],
    );

    t.add(
        "N-C-C:O",
        clauses![when(|p| !p.bond_in_ring(1) && ring_run(p, 2, 4, R::Furan) && straight(p, 1, 2), &[]).then(clauses![
            first_of(vec![
                when(|p| primary_amine(p, 0), &[M::OneAminoOneFuranTwoYlMethane]),
                when(|p| substituted_amine(p, 0), &[M::OneAlkylaminoOneFuranTwoYlMethane]),
                when(|p| amide_nitrogen(p, 0), &[M::OneAcylaminoOneFuranTwoYlMethane]),
            ]),
        ])],
    );

    t.add(
        "O:C-C-S",
        clauses![when(|p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Furan) && straight(p, 2, 3), &[]).then(clauses![
            first_of(vec![
                when(|p| thiol(p, 3), &[M::OneMercaptoOneFuranTwoYlMethane]),
                when(|p| thioether(p, 3), &[M::OneAlkylthioOneFuranTwoYlMethane]),
                when(|p| sulfonyl(p, 3), &[M::OneSulfonylOneFuranTwoYlMethane]),
            ]),
        ])],
    );

    t.add(
        "F-C-C:O",
        clauses![when(
            |p| !p.bond_in_ring(1) && ring_run(p, 2, 4, R::Furan) && straight(p, 1, 2),
            &[M::OneFluoroOneFuranTwoYlMethane],
        )],
    );

    t.add(
        "Cl-C-C:O",
        clauses![when(
            |p| !p.bond_in_ring(1) && ring_run(p, 2, 4, R::Furan) && straight(p, 1, 2),
            &[M::OneChloroOneFuranTwoYlMethane],
        )],
    );

    t.add(
        "Br-C-C:O",
        clauses![when(
            |p| !p.bond_in_ring(1) && ring_run(p, 2, 4, R::Furan) && straight(p, 1, 2),
            &[M::OneBromoOneFuranTwoYlMethane],
        )],
    );

    t.add(
        "I-C-C:O",
        clauses![when(
            |p| !p.bond_in_ring(1) && ring_run(p, 2, 4, R::Furan) && straight(p, 1, 2),
            &[M::OneIodoOneFuranTwoYlMethane],
        )],
    );

    t.add(
        "C-C-C:S",
        clauses![
            when(|p| !p.bond_in_ring(1) && ring_run(p, 2, 4, R::Thiophene) && straight(p, 1, 2), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 0), &[M::OneCarboxyOneThiophenTwoYlMethane]),
                    when(|p| ester_carbon(p, 0), &[M::OneAlkoxycarbonylOneThiophenTwoYlMethane]),
                    when(|p| amide_carbon(p, 0), &[M::OneCarbamoylOneThiophenTwoYlMethane]),
                    when(|p| aldehyde_carbon(p, 0), &[M::OneFormylOneThiophenTwoYlMethane]),
                    when(|p| ketone_carbon(p, 0), &[M::OneAcylOneThiophenTwoYlMethane]),
                    when(|p| cyano(p, 0), &[M::OneCyanoOneThiophenTwoYlMethane]),
                ]),
            ]),
        ],
    );

    t.add(
        "O-C-C:S",
        clauses![
            when(|p| !p.bond_in_ring(1) && ring_run(p, 2, 4, R::Thiophene) && straight(p, 1, 2), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 0), &[M::OneHydroxyOneThiophenTwoYlMethane]),
                    when(|p| methoxy(p, 0), &[M::OneMethoxyOneThiophenTwoYlMethane]),
                    when(|p| ether_oxygen(p, 0), &[M::OneAlkoxyOneThiophenTwoYlMethane]),
                    when(|p| ester_oxygen(p, 0), &[M::OneAcyloxyOneThiophenTwoYlMethane]),
                ]),
            ]),
        ],
    );

    t.add(
        "N-C-C:S",
        clauses![
            when(|p| !p.bond_in_ring(1) && ring_run(p, 2, 4, R::Thiophene) && straight(p, 1, 2), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 0), &[M::OneAminoOneThiophenTwoYlMethane]),
                    when(|p| substituted_amine(p, 0), &[M::OneAlkylaminoOneThiophenTwoYlMethane]),
                    when(|p| amide_nitrogen(p, 0), &[M::OneAcylaminoOneThiophenTwoYlMethane]),
                ]),
            ]),
        ],
    );

    t.add(
        "S-C-C:S",
        clauses![
            when(|p| !p.bond_in_ring(1) && ring_run(p, 2, 4, R::Thiophene) && straight(p, 1, 2), &[]).then(clauses![
                first_of(vec![
                    when(|p| thiol(p, 0), &[M::OneMercaptoOneThiophenTwoYlMethane]),
                    when(|p| thioether(p, 0), &[M::OneAlkylthioOneThiophenTwoYlMethane]),
                    when(|p| sulfonyl(p, 0), &[M::OneSulfonylOneThiophenTwoYlMethane]),
                ]),
            ]),
        ],
    );

    t.add(
        "F-C-C:S",
        clauses![when(
            |p| !p.bond_in_ring(1) && ring_run(p, 2, 4, R::Thiophene) && straight(p, 1, 2),
            &[M::OneFluoroOneThiophenTwoYlMethane],
        )],
    );

    t.add(
        "Cl-C-C:S",
        clauses![when(
            |p| !p.bond_in_ring(1) && ring_run(p, 2, 4, R::Thiophene) && straight(p, 1, 2),
            &[M::OneChloroOneThiophenTwoYlMethane],
        )],
    );

    t.add(
        "Br-C-C:S",
        clauses![when(
            |p| !p.bond_in_ring(1) && ring_run(p, 2, 4, R::Thiophene) && straight(p, 1, 2),
            &[M::OneBromoOneThiophenTwoYlMethane],
        )],
    );

    t.add(
        "I-C-C:S",
        clauses![when(
            |p| !p.bond_in_ring(1) && ring_run(p, 2, 4, R::Thiophene) && straight(p, 1, 2),
            &[M::OneIodoOneThiophenTwoYlMethane],
        )],
    );
}

fn five(t: &mut RuleTable) {
    t.add(
        "C-C:C:C:N",
        clauses![when(|p| !p.bond_in_ring(0) && ring_run(p, 1, 5, R::Pyridine), &[]).then(clauses![
            first_of(vec![
                when(|p| methyl(p, 0), &[M::FourMethylpyridine]),
                when(|p| hydroxymethyl(p, 0), &[M::FourHydroxymethylpyridine]),
                when(|p| trifluoromethyl(p, 0), &[M::FourTrifluoromethylpyridine]),
                when(|p| carboxyl_carbon(p, 0), &[M::FourCarboxypyridine]),
                when(|p| ester_carbon(p, 0), &[M::FourAlkoxycarbonylpyridine]),
                when(|p| amide_carbon(p, 0), &[M::FourCarbamoylpyridine]),
                when(|p| aldehyde_carbon(p, 0), &[M::FourFormylpyridine]),
                when(|p| ketone_carbon(p, 0), &[M::FourAcylpyridine]),
                when(|p| cyano(p, 0), &[M::FourCyanopyridine]),
                when(|p| vinyl(p, 0), &[M::FourVinylpyridine]),
                when(|p| alkyl(p, 0), &[M::FourAlkylpyridine]),
            ]),
        ])],
    );

    t.add(
        "N:C:C:C-O",
        clauses![when(|p| !p.bond_in_ring(3) && ring_run(p, 0, 4, R::Pyridine), &[]).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 4), &[M::FourHydroxypyridine]),
                when(|p| methoxy(p, 4), &[M::FourMethoxypyridine]),
                when(|p| ether_oxygen(p, 4), &[M::FourAlkoxypyridine]),
                when(|p| ester_oxygen(p, 4), &[M::FourAcyloxypyridine]),
            ]),
        ])],
    );

    t.add(
        "N-C:C:C:N",
        clauses![when(|p| !p.bond_in_ring(0) && ring_run(p, 1, 5, R::Pyridine), &[]).then(clauses![
            first_of(vec![
                when(|p| primary_amine(p, 0), &[M::FourAminopyridine]),
                when(|p| substituted_amine(p, 0), &[M::FourAlkylaminopyridine]),
                when(|p| amide_nitrogen(p, 0), &[M::FourAcylaminopyridine]),
                when(|p| nitro(p, 0), &[M::FourNitropyridine]),
            ]),
        ])],
    );

    t.add(
        "N:C:C:C-S",
        clauses![when(|p| !p.bond_in_ring(3) && ring_run(p, 0, 4, R::Pyridine), &[]).then(clauses![
            first_of(vec![
                when(|p| thiol(p, 4), &[M::FourMercaptopyridine]),
                when(|p| thioether(p, 4), &[M::FourAlkylthiopyridine]),
                when(|p| sulfonyl(p, 4), &[M::FourSulfonylpyridine]),
            ]),
        ])],
    );

    t.add(
        "F-C:C:C:N",
        clauses![when(|p| !p.bond_in_ring(0) && ring_run(p, 1, 5, R::Pyridine), &[M::FourFluoropyridine])],
    );

    t.add(
        "Cl-C:C:C:N",
        clauses![when(|p| !p.bond_in_ring(0) && ring_run(p, 1, 5, R::Pyridine), &[M::FourChloropyridine])],
    );

    t.add(
        "Br-C:C:C:N",
        clauses![when(|p| !p.bond_in_ring(0) && ring_run(p, 1, 5, R::Pyridine), &[M::FourBromopyridine])],
    );

    t.add(
        "I-C:C:C:N",
        clauses![when(|p| !p.bond_in_ring(0) && ring_run(p, 1, 5, R::Pyridine), &[M::FourIodopyridine])],
    );

    t.add(
        "C-C-C-C:N",
        clauses![
            when(|p| !p.bond_in_ring(2) && ring_run(p, 3, 5, R::Pyridine) && straight(p, 1, 3), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 0), &[M::TwoCarboxyOnePyridinTwoYlEthane]),
                    when(|p| ester_carbon(p, 0), &[M::TwoAlkoxycarbonylOnePyridinTwoYlEthane]),
                    when(|p| amide_carbon(p, 0), &[M::TwoCarbamoylOnePyridinTwoYlEthane]),
                    when(|p| aldehyde_carbon(p, 0), &[M::TwoFormylOnePyridinTwoYlEthane]),
                    when(|p| ketone_carbon(p, 0), &[M::TwoAcylOnePyridinTwoYlEthane]),
                    when(|p| cyano(p, 0), &[M::TwoCyanoOnePyridinTwoYlEthane]),
                ]),
            ]),
            when(|p| !p.bond_in_ring(2) && ring_run(p, 3, 5, R::Pyrrole) && straight(p, 1, 3), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 0), &[M::TwoCarboxyOnePyrrolTwoYlEthane]),
                    when(|p| ester_carbon(p, 0), &[M::TwoAlkoxycarbonylOnePyrrolTwoYlEthane]),
                    when(|p| amide_carbon(p, 0), &[M::TwoCarbamoylOnePyrrolTwoYlEthane]),
                    when(|p| aldehyde_carbon(p, 0), &[M::TwoFormylOnePyrrolTwoYlEthane]),
                    when(|p| ketone_carbon(p, 0), &[M::TwoAcylOnePyrrolTwoYlEthane]),
                    when(|p| cyano(p, 0), &[M::TwoCyanoOnePyrrolTwoYlEthane]),
                ]),
            ]),
        ],
    );

    t.add(
        "N:C-C-C-O",
        clauses![
            when(|p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Pyridine) && straight(p, 2, 4), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 4), &[M::TwoHydroxyOnePyridinTwoYlEthane]),
                    when(|p| methoxy(p, 4), &[M::TwoMethoxyOnePyridinTwoYlEthane]),
                    when(|p| ether_oxygen(p, 4), &[M::TwoAlkoxyOnePyridinTwoYlEthane]),
                    when(|p| ester_oxygen(p, 4), &[M::TwoAcyloxyOnePyridinTwoYlEthane]),
                ]),
            ]),
            when(|p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Pyrrole) && straight(p, 2, 4), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 4), &[M::TwoHydroxyOnePyrrolTwoYlEthane]),
                    when(|p| methoxy(p, 4), &[M::TwoMethoxyOnePyrrolTwoYlEthane]),
                    when(|p| ether_oxygen(p, 4), &[M::TwoAlkoxyOnePyrrolTwoYlEthane]),
                    when(|p| ester_oxygen(p, 4), &[M::TwoAcyloxyOnePyrrolTwoYlEthane]),
                ]),
            ]),
        ],
    );

    t.add(
        "N-C-C-C:N",
        clauses![
            when(|p| !p.bond_in_ring(2) && ring_run(p, 3, 5, R::Pyridine) && straight(p, 1, 3), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 0), &[M::TwoAminoOnePyridinTwoYlEthane]),
                    when(|p| substituted_amine(p, 0), &[M::TwoAlkylaminoOnePyridinTwoYlEthane]),
                    when(|p| amide_nitrogen(p, 0), &[M::TwoAcylaminoOnePyridinTwoYlEthane]),
                ]),
            ]),
            when(|p| !p.bond_in_ring(2) && ring_run(p, 3, 5, R::Pyrrole) && straight(p, 1, 3), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 0), &[M::TwoAminoOnePyrrolTwoYlEthane]),
                    when(|p| substituted_amine(p, 0), &[M::TwoAlkylaminoOnePyrrolTwoYlEthane]),
                    when(|p| amide_nitrogen(p, 0), &[M::TwoAcylaminoOnePyrrolTwoYlEthane]),
                ]),
            ]),
        ],
    );

    t.add(
        "N:C-C-C-S",
        clauses![
            when(|p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Pyridine) && straight(p, 2, 4), &[]).then(clauses![
                first_of(vec![
                    when(|p| thiol(p, 4), &[M::TwoMercaptoOnePyridinTwoYlEthane]),
                    when(|p| thioether(p, 4), &[M::TwoAlkylthioOnePyridinTwoYlEthane]),
                    when(|p| sulfonyl(p, 4), &[M::TwoSulfonylOnePyridinTwoYlEthane]),
                ]),
            ]),
            when(|p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Pyrrole) && straight(p, 2, 4), &[]).then(clauses![
                first_of(vec![
                    when(|p| thiol(p, 4), &[M::TwoMercaptoOnePyrrolTwoYlEthane]),
                    when(|p| thioether(p, 4), &[M::TwoAlkylthioOnePyrrolTwoYlEthane]),
                    when(|p| sulfonyl(p, 4), &[M::TwoSulfonylOnePyrrolTwoYlEthane]),
                ]),
            ]),
        ],
    );

    t.add(
        "F-C-C-C:N",
        clauses![
            when(
                |p| !p.bond_in_ring(2) && ring_run(p, 3, 5, R::Pyridine) && straight(p, 1, 3),
                &[M::TwoFluoroOnePyridinTwoYlEthane],
            ),
            when(
                |p| !p.bond_in_ring(2) && ring_run(p, 3, 5, R::Pyrrole) && straight(p, 1, 3),
                &[M::TwoFluoroOnePyrrolTwoYlEthane],
            ),
        ],
    );

    t.add(
        "Cl-C-C-C:N",
        clauses![
            when(
                |p| !p.bond_in_ring(2) && ring_run(p, 3, 5, R::Pyridine) && straight(p, 1, 3),
                &[M::TwoChloroOnePyridinTwoYlEthane],
            ),
            when(
                |p| !p.bond_in_ring(2) && ring_run(p, 3, 5, R::Pyrrole) && straight(p, 1, 3),
                &[M::TwoChloroOnePyrrolTwoYlEthane],
            ),
        ],
    );

    t.add(
        "Br-C-C-C:N",
        clauses![
            when(
                |p| !p.bond_in_ring(2) && ring_run(p, 3, 5, R::Pyridine) && straight(p, 1, 3),
                &[M::TwoBromoOnePyridinTwoYlEthane],
            ),
            when(
                |p| !p.bond_in_ring(2) && ring_run(p, 3, 5, R::Pyrrole) && straight(p, 1, 3),
                &[M::TwoBromoOnePyrrolTwoYlEthane],
            ),
        ],
    );

    t.add(
        "I-C-C-C:N",
        clauses![
            when(
                |p| !p.bond_in_ring(2) && ring_run(p, 3, 5, R::Pyridine) && straight(p, 1, 3),
                &[M::TwoIodoOnePyridinTwoYlEthane],
            ),
            when(
                |p| !p.bond_in_ring(2) && ring_run(p, 3, 5, R::Pyrrole) && straight(p, 1, 3),
                &[M::TwoIodoOnePyrrolTwoYlEthane],
            ),
        ],
    );

    t.add(
        "C-C-C:C:N",
        clauses![
            when(|p| !p.bond_in_ring(1) && ring_run(p, 2, 5, R::Pyridine) && straight(p, 1, 2), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 0), &[M::OneCarboxyOnePyridinThreeYlMethane]),
                    when(|p| ester_carbon(p, 0), &[M::OneAlkoxycarbonylOnePyridinThreeYlMethane]),
                    when(|p| amide_carbon(p, 0), &[M::OneCarbamoylOnePyridinThreeYlMethane]),
                    when(|p| aldehyde_carbon(p, 0), &[M::OneFormylOnePyridinThreeYlMethane]),
                    when(|p| ketone_carbon(p, 0), &[M::OneAcylOnePyridinThreeYlMethane]),
                    when(|p| cyano(p, 0), &[M::OneCyanoOnePyridinThreeYlMethane]),
                ]),
            ]),
        ],
    );

    t.add(
        "N:C:C-C-O",
        clauses![
            when(|p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Pyridine) && straight(p, 3, 4), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 4), &[M::OneHydroxyOnePyridinThreeYlMethane]),
                    when(|p| methoxy(p, 4), &[M::OneMethoxyOnePyridinThreeYlMethane]),
                    when(|p| ether_oxygen(p, 4), &[M::OneAlkoxyOnePyridinThreeYlMethane]),
                    when(|p| ester_oxygen(p, 4), &[M::OneAcyloxyOnePyridinThreeYlMethane]),
                ]),
            ]),
        ],
    );

    t.add(
        "N-C-C:C:N",
        clauses![
            when(|p| !p.bond_in_ring(1) && ring_run(p, 2, 5, R::Pyridine) && straight(p, 1, 2), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 0), &[M::OneAminoOnePyridinThreeYlMethane]),
                    when(|p| substituted_amine(p, 0), &[M::OneAlkylaminoOnePyridinThreeYlMethane]),
                    when(|p| amide_nitrogen(p, 0), &[M::OneAcylaminoOnePyridinThreeYlMethane]),
                ]),
            ]),
        ],
    );

    t.add(
        "N:C:C-C-S",
        clauses![
            when(|p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Pyridine) && straight(p, 3, 4), &[]).then(clauses![
                first_of(vec![
                    when(|p| thiol(p, 4), &[M::OneMercaptoOnePyridinThreeYlMethane]),
                    when(|p| thioether(p, 4), &[M::OneAlkylthioOnePyridinThreeYlMethane]),
                    when(|p| sulfonyl(p, 4), &[M::OneSulfonylOnePyridinThreeYlMethane]),
                ]),
            ]),
        ],
    );

    t.add(
        "F-C-C:C:N",
        clauses![when(
            |p| !p.bond_in_ring(1) && ring_run(p, 2, 5, R::Pyridine) && straight(p, 1, 2),
            &[M::OneFluoroOnePyridinThreeYlMethane],
        )],
    );

    t.add(
        "Cl-C-C:C:N",
        clauses![when(
            |p| !p.bond_in_ring(1) && ring_run(p, 2, 5, R::Pyridine) && straight(p, 1, 2),
            &[M::OneChloroOnePyridinThreeYlMethane],
        )],
    );

    t.add(
        "Br-C-C:C:N",
        clauses![when(
            |p| !p.bond_in_ring(1) && ring_run(p, 2, 5, R::Pyridine) && straight(p, 1, 2),
            &[M::OneBromoOnePyridinThreeYlMethane],
        )],
    );

    t.add(
        "I-C-C:C:N",
        clauses![when(
            |p| !p.bond_in_ring(1) && ring_run(p, 2, 5, R::Pyridine) && straight(p, 1, 2),
            &[M::OneIodoOnePyridinThreeYlMethane],
        )],
    );

    t.add(
        "C-C-C-C:O",
        clauses![when(|p| !p.bond_in_ring(2) && ring_run(p, 3, 5, R::Furan) && straight(p, 1, 3), &[]).then(clauses![
            first_of(vec![
                when(|p| carboxyl_carbon(p, 0), &[M::TwoCarboxyOneFuranTwoYlEthane]),
                when(|p| ester_carbon(p, 0), &[M::TwoAlkoxycarbonylOneFuranTwoYlEthane]),
                when(|p| amide_carbon(p, 0), &[M::TwoCarbamoylOneFuranTwoYlEthane]),
                when(|p| aldehyde_carbon(p, 0), &[M::TwoFormylOneFuranTwoYlEthane]),
                when(|p| ketone_carbon(p, 0), &[M::TwoAcylOneFuranTwoYlEthane]),
                when(|p| cyano(p, 0), &[M::TwoCyanoOneFuranTwoYlEthane]),
            ]),
        ])],
    );

    t.add(
        "O-C-C-C:O",
        clauses![when(|p| !p.bond_in_ring(2) && ring_run(p, 3, 5, R::Furan) && straight(p, 1, 3), &[]).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 0), &[M::TwoHydroxyOneFuranTwoYlEthane]),
                when(|p| methoxy(p, 0), &[M::TwoMethoxyOneFuranTwoYlEthane]),
                when(|p| ether_oxygen(p, 0), &[M::TwoAlkoxyOneFuranTwoYlEthane]),
                when(|p| ester_oxygen(p, 0), &[M::TwoAcyloxyOneFuranTwoYlEthane]),
            ]),
        ])],
    );

    t.add(
        "N-C-C-C:O",
        clauses![when(|p| !p.bond_in_ring(2) && ring_run(p, 3, 5, R::Furan) && straight(p, 1, 3), &[]).then(clauses![
            first_of(vec![
                when(|p| primary_amine(p, 0), &[M::TwoAminoOneFuranTwoYlEthane]),
                when(|p| substituted_amine(p, 0), &[M::TwoAlkylaminoOneFuranTwoYlEthane]),
                when(|p| amide_nitrogen(p, 0), &[M::TwoAcylaminoOneFuranTwoYlEthane]),
            ]),
        ])],
    );

    t.add(
        "O:C-C-C-S",
        clauses![when(|p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Furan) && straight(p, 2, 4), &[]).then(clauses![
            first_of(vec![
                when(|p| thiol(p, 4), &[M::TwoMercaptoOneFuranTwoYlEthane]),
                when(|p| thioether(p, 4), &[M::TwoAlkylthioOneFuranTwoYlEthane]),
                when(|p| sulfonyl(p, 4), &[M::TwoSulfonylOneFuranTwoYlEthane]),
            ]),
        ])],
    );

    t.add(
        "F-C-C-C:O",
        clauses![when(
            |p| !p.bond_in_ring(2) && ring_run(p, 3, 5, R::Furan) && straight(p, 1, 3),
            &[M::TwoFluoroOneFuranTwoYlEthane],
        )],
    );

    t.add(
        "Cl-C-C-C:O",
        clauses![when(
            |p| !p.bond_in_ring(2) && ring_run(p, 3, 5, R::Furan) && straight(p, 1, 3),
            &[M::TwoChloroOneFuranTwoYlEthane],
        )],
    );

    t.add(
        "Br-C-C-C:O",
        clauses![when(
            |p| !p.bond_in_ring(2) && ring_run(p, 3, 5, R::Furan) && straight(p, 1, 3),
            &[M::TwoBromoOneFuranTwoYlEthane],
        )],
    );

    t.add(
        "I-C-C-C:O",
        clauses![when(
            |p| !p.bond_in_ring(2) && ring_run(p, 3, 5, R::Furan) && straight(p, 1, 3),
            &[M::TwoIodoOneFuranTwoYlEthane],
        )],
    );

    t.add(
        "C-C-C:C:O",
        clauses![when(|p| !p.bond_in_ring(1) && ring_run(p, 2, 5, R::Furan) && straight(p, 1, 2), &[]).then(clauses![
            first_of(vec![
                when(|p| carboxyl_carbon(p, 0), &[M::OneCarboxyOneFuranThreeYlMethane]),
                when(|p| ester_carbon(p, 0), &[M::OneAlkoxycarbonylOneFuranThreeYlMethane]),
                when(|p| amide_carbon(p, 0), &[M::OneCarbamoylOneFuranThreeYlMethane]),
                when(|p| aldehyde_carbon(p, 0), &[M::OneFormylOneFuranThreeYlMethane]),
                when(|p| ketone_carbon(p, 0), &[M::OneAcylOneFuranThreeYlMethane]),
                when(|p| cyano(p, 0), &[M::OneCyanoOneFuranThreeYlMethane]),
            ]),
        ])],
    );

    t.add(
        "O-C-C:C:O",
        clauses![when(|p| !p.bond_in_ring(1) && ring_run(p, 2, 5, R::Furan) && straight(p, 1, 2), &[]).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 0), &[M::OneHydroxyOneFuranThreeYlMethane]),
                when(|p| methoxy(p, 0), &[M::OneMethoxyOneFuranThreeYlMethane]),
                when(|p| ether_oxygen(p, 0), &[M::OneAlkoxyOneFuranThreeYlMethane]),
                when(|p| ester_oxygen(p, 0), &[M::OneAcyloxyOneFuranThreeYlMethane]),
            ]),
        ])],
    );

    t.add(
        "N-C-C:C:O",
        clauses![when(|p| !p.bond_in_ring(1) && ring_run(p, 2, 5, R::Furan) && straight(p, 1, 2), &[]).then(clauses![
            first_of(vec![
                when(|p| primary_amine(p, 0), &[M::OneAminoOneFuranThreeYlMethane]),
                when(|p| substituted_amine(p, 0), &[M::OneAlkylaminoOneFuranThreeYlMethane]),
                when(|p| amide_nitrogen(p, 0), &[M::OneAcylaminoOneFuranThreeYlMethane]),
            ]),
        ])],
    );

    t.add(
        "O:C:C-C-S",
        clauses![when(|p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Furan) && straight(p, 3, 4), &[]).then(clauses![
            first_of(vec![
                when(|p| thiol(p, 4), &[M::OneMercaptoOneFuranThreeYlMethane]),
                when(|p| thioether(p, 4), &[M::OneAlkylthioOneFuranThreeYlMethane]),
                when(|p| sulfonyl(p, 4), &[M::OneSulfonylOneFuranThreeYlMethane]),
            ]),
        ])],
    );

    t.add(
        "F-C-C:C:O",
        clauses![when(
            |p| !p.bond_in_ring(1) && ring_run(p, 2, 5, R::Furan) && straight(p, 1, 2),
            &[M::OneFluoroOneFuranThreeYlMethane],
        )],
    );

    t.add(
        "Cl-C-C:C:O",
        clauses![when(
            |p| !p.bond_in_ring(1) && ring_run(p, 2, 5, R::Furan) && straight(p, 1, 2),
            &[M::OneChloroOneFuranThreeYlMethane],
        )],
    );

    t.add(
        "Br-C-C:C:O",
        clauses![when(
            |p| !p.bond_in_ring(1) && ring_run(p, 2, 5, R::Furan) && straight(p, 1, 2),
            &[M::OneBromoOneFuranThreeYlMethane],
        )],
    );

    t.add(
        "I-C-C:C:O",
        clauses![when(
            |p| !p.bond_in_ring(1) && ring_run(p, 2, 5, R::Furan) && straight(p, 1, 2),
            &[M::OneIodoOneFuranThreeYlMethane],
        )],
    );

    t.add(
        "C-C-C-C:S",
        clauses![
            when(|p| !p.bond_in_ring(2) && ring_run(p, 3, 5, R::Thiophene) && straight(p, 1, 3), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 0), &[M::TwoCarboxyOneThiophenTwoYlEthane]),
                    when(|p| ester_carbon(p, 0), &[M::TwoAlkoxycarbonylOneThiophenTwoYlEthane]),
                    when(|p| amide_carbon(p, 0), &[M::TwoCarbamoylOneThiophenTwoYlEthane]),
                    when(|p| aldehyde_carbon(p, 0), &[M::TwoFormylOneThiophenTwoYlEthane]),
                    when(|p| ketone_carbon(p, 0), &[M::TwoAcylOneThiophenTwoYlEthane]),
                    when(|p| cyano(p, 0), &[M::TwoCyanoOneThiophenTwoYlEthane]),
                ]),
            ]),
        ],
    );

    t.add(
        "O-C-C-C:S",
        clauses![
            when(|p| !p.bond_in_ring(2) && ring_run(p, 3, 5, R::Thiophene) && straight(p, 1, 3), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 0), &[M::TwoHydroxyOneThiophenTwoYlEthane]),
                    when(|p| methoxy(p, 0), &[M::TwoMethoxyOneThiophenTwoYlEthane]),
                    when(|p| ether_oxygen(p, 0), &[M::TwoAlkoxyOneThiophenTwoYlEthane]),
                    when(|p| ester_oxygen(p, 0), &[M::TwoAcyloxyOneThiophenTwoYlEthane]),
                ]),
            ]),
        ],
    );

    t.add(
        "N-C-C-C:S",
        clauses![
            when(|p| !p.bond_in_ring(2) && ring_run(p, 3, 5, R::Thiophene) && straight(p, 1, 3), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 0), &[M::TwoAminoOneThiophenTwoYlEthane]),
                    when(|p| substituted_amine(p, 0), &[M::TwoAlkylaminoOneThiophenTwoYlEthane]),
                    when(|p| amide_nitrogen(p, 0), &[M::TwoAcylaminoOneThiophenTwoYlEthane]),
                ]),
            ]),
        ],
    );

    t.add(
        "S-C-C-C:S",
        clauses![
            when(|p| !p.bond_in_ring(2) && ring_run(p, 3, 5, R::Thiophene) && straight(p, 1, 3), &[]).then(clauses![
                first_of(vec![
                    when(|p| thiol(p, 0), &[M::TwoMercaptoOneThiophenTwoYlEthane]),
                    when(|p| thioether(p, 0), &[M::TwoAlkylthioOneThiophenTwoYlEthane]),
                    when(|p| sulfonyl(p, 0), &[M::TwoSulfonylOneThiophenTwoYlEthane]),
                ]),
            ]),
        ],
    );

    t.add(
        "F-C-C-C:S",
        clauses![when(
            |p| !p.bond_in_ring(2) && ring_run(p, 3, 5, R::Thiophene) && straight(p, 1, 3),
            &[M::TwoFluoroOneThiophenTwoYlEthane],
        )],
    );

    t.add(
        "Cl-C-C-C:S",
        clauses![when(
            |p| !p.bond_in_ring(2) && ring_run(p, 3, 5, R::Thiophene) && straight(p, 1, 3),
            &[M::TwoChloroOneThiophenTwoYlEthane],
        )],
    );

    t.add(
        "Br-C-C-C:S",
        clauses![when(
            |p| !p.bond_in_ring(2) && ring_run(p, 3, 5, R::Thiophene) && straight(p, 1, 3),
            &[M::TwoBromoOneThiophenTwoYlEthane],
        )],
    );

    t.add(
        "I-C-C-C:S",
        clauses![when(
            |p| !p.bond_in_ring(2) && ring_run(p, 3, 5, R::Thiophene) && straight(p, 1, 3),
            &[M::TwoIodoOneThiophenTwoYlEthane],
        )],
    );

    t.add(
        "C-C-C:C:S",
        clauses![
            when(|p| !p.bond_in_ring(1) && ring_run(p, 2, 5, R::Thiophene) && straight(p, 1, 2), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 0), &[M::OneCarboxyOneThiophenThreeYlMethane]),
                    when(|p| ester_carbon(p, 0), &[M::OneAlkoxycarbonylOneThiophenThreeYlMethane]),
                    when(|p| amide_carbon(p, 0), &[M::OneCarbamoylOneThiophenThreeYlMethane]),
                    when(|p| aldehyde_carbon(p, 0), &[M::OneFormylOneThiophenThreeYlMethane]),
                    when(|p| ketone_carbon(p, 0), &[M::OneAcylOneThiophenThreeYlMethane]),
                    when(|p| cyano(p, 0), &[M::OneCyanoOneThiophenThreeYlMethane]),
                ]),
            ]),
        ],
    );

    t.add(
        "O-C-C:C:S",
        clauses![
            when(|p| !p.bond_in_ring(1) && ring_run(p, 2, 5, R::Thiophene) && straight(p, 1, 2), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 0), &[M::OneHydroxyOneThiophenThreeYlMethane]),
                    when(|p| methoxy(p, 0), &[M::OneMethoxyOneThiophenThreeYlMethane]),
                    when(|p| ether_oxygen(p, 0), &[M::OneAlkoxyOneThiophenThreeYlMethane]),
                    when(|p| ester_oxygen(p, 0), &[M::OneAcyloxyOneThiophenThreeYlMethane]),
                ]),
            ]),
        ],
    );

    t.add(
        "N-C-C:C:S",
        clauses![
            when(|p| !p.bond_in_ring(1) && ring_run(p, 2, 5, R::Thiophene) && straight(p, 1, 2), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 0), &[M::OneAminoOneThiophenThreeYlMethane]),
                    when(|p| substituted_amine(p, 0), &[M::OneAlkylaminoOneThiophenThreeYlMethane]),
                    when(|p| amide_nitrogen(p, 0), &[M::OneAcylaminoOneThiophenThreeYlMethane]),
                ]),
            ]),
        ],
    );

    t.add(
        "S-C-C:C:S",
        clauses![
            when(|p| !p.bond_in_ring(1) && ring_run(p, 2, 5, R::Thiophene) && straight(p, 1, 2), &[]).then(clauses![
                first_of(vec![
                    when(|p| thiol(p, 0), &[M::OneMercaptoOneThiophenThreeYlMethane]),
                    when(|p| thioether(p, 0), &[M::OneAlkylthioOneThiophenThreeYlMethane]),
                    when(|p| sulfonyl(p, 0), &[M::OneSulfonylOneThiophenThreeYlMethane]),
                ]),
            ]),
        ],
    );

    t.add(
        "F-C-C:C:S",
        clauses![when(
            |p| !p.bond_in_ring(1) && ring_run(p, 2, 5, R::Thiophene) && straight(p, 1, 2),
            &[M::OneFluoroOneThiophenThreeYlMethane],
        )],
    );

    t.add(
        "Cl-C-C:C:S",
        clauses![when(
            |p| !p.bond_in_ring(1) && ring_run(p, 2, 5, R::Thiophene) && straight(p, 1, 2),
            &[M::OneChloroOneThiophenThreeYlMethane],
        )],
    );

    t.add(
        "Br-C-C:C:S",
        clauses![when(
            |p| !p.bond_in_ring(1) && ring_run(p, 2, 5, R::Thiophene) && straight(p, 1, 2),
            &[M::OneBromoOneThiophenThreeYlMethane],
        )],
    );

    t.add(
        "I-C-C:C:S",
        clauses![when(
            |p| !p.bond_in_ring(1) && ring_run(p, 2, 5, R::Thiophene) && straight(p, 1, 2),
            &[M::OneIodoOneThiophenThreeYlMethane],
        )],
    );

    t.add(
        "C-C-C:N:C",
        clauses![
            when(|p| !p.bond_in_ring(1) && ring_run(p, 2, 5, R::Pyrimidine) && straight(p, 1, 2), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 0), &[M::OneCarboxyOnePyrimidinTwoYlMethane]),
                    when(|p| ester_carbon(p, 0), &[M::OneAlkoxycarbonylOnePyrimidinTwoYlMethane]),
                    when(|p| amide_carbon(p, 0), &[M::OneCarbamoylOnePyrimidinTwoYlMethane]),
                    when(|p| aldehyde_carbon(p, 0), &[M::OneFormylOnePyrimidinTwoYlMethane]),
                    when(|p| ketone_carbon(p, 0), &[M::OneAcylOnePyrimidinTwoYlMethane]),
                    when(|p| cyano(p, 0), &[M::OneCyanoOnePyrimidinTwoYlMethane]),
                ]),
            ]),
            when(|p| !p.bond_in_ring(1) && ring_run(p, 2, 5, R::Thiazole) && straight(p, 1, 2), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 0), &[M::OneCarboxyOneThiazolTwoYlMethane]),
                    when(|p| ester_carbon(p, 0), &[M::OneAlkoxycarbonylOneThiazolTwoYlMethane]),
                    when(|p| amide_carbon(p, 0), &[M::OneCarbamoylOneThiazolTwoYlMethane]),
                    when(|p| aldehyde_carbon(p, 0), &[M::OneFormylOneThiazolTwoYlMethane]),
                    when(|p| ketone_carbon(p, 0), &[M::OneAcylOneThiazolTwoYlMethane]),
                    when(|p| cyano(p, 0), &[M::OneCyanoOneThiazolTwoYlMethane]),
                ]),
            ]),
        ],
    );

    t.add(
        "C:N:C-C-O",
        clauses![
            when(|p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Pyrimidine) && straight(p, 3, 4), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 4), &[M::OneHydroxyOnePyrimidinTwoYlMethane]),
                    when(|p| methoxy(p, 4), &[M::OneMethoxyOnePyrimidinTwoYlMethane]),
                    when(|p| ether_oxygen(p, 4), &[M::OneAlkoxyOnePyrimidinTwoYlMethane]),
                    when(|p| ester_oxygen(p, 4), &[M::OneAcyloxyOnePyrimidinTwoYlMethane]),
                ]),
            ]),
            when(|p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Thiazole) && straight(p, 3, 4), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 4), &[M::OneHydroxyOneThiazolTwoYlMethane]),
                    when(|p| methoxy(p, 4), &[M::OneMethoxyOneThiazolTwoYlMethane]),
                    when(|p| ether_oxygen(p, 4), &[M::OneAlkoxyOneThiazolTwoYlMethane]),
                    when(|p| ester_oxygen(p, 4), &[M::OneAcyloxyOneThiazolTwoYlMethane]),
                ]),
            ]),
        ],
    );

    t.add(
        "C:N:C-C-N",
        clauses![
            when(|p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Pyrimidine) && straight(p, 3, 4), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 4), &[M::OneAminoOnePyrimidinTwoYlMethane]),
                    when(|p| substituted_amine(p, 4), &[M::OneAlkylaminoOnePyrimidinTwoYlMethane]),
                    when(|p| amide_nitrogen(p, 4), &[M::OneAcylaminoOnePyrimidinTwoYlMethane]),
                ]),
            ]),
            when(|p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Thiazole) && straight(p, 3, 4), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 4), &[M::OneAminoOneThiazolTwoYlMethane]),
                    when(|p| substituted_amine(p, 4), &[M::OneAlkylaminoOneThiazolTwoYlMethane]),
                    when(|p| amide_nitrogen(p, 4), &[M::OneAcylaminoOneThiazolTwoYlMethane]),
                ]),
            ]),
        ],
    );

    t.add(
        "C:N:C-C-S",
        clauses![
            when(|p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Pyrimidine) && straight(p, 3, 4), &[]).then(clauses![
                first_of(vec![
                    when(|p| thiol(p, 4), &[M::OneMercaptoOnePyrimidinTwoYlMethane]),
                    when(|p| thioether(p, 4), &[M::OneAlkylthioOnePyrimidinTwoYlMethane]),
                    when(|p| sulfonyl(p, 4), &[M::OneSulfonylOnePyrimidinTwoYlMethane]),
                ]),
            ]),
            when(|p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Thiazole) && straight(p, 3, 4), &[]).then(clauses![
                first_of(vec![
                    when(|p| thiol(p, 4), &[M::OneMercaptoOneThiazolTwoYlMethane]),
                    when(|p| thioether(p, 4), &[M::OneAlkylthioOneThiazolTwoYlMethane]),
                    when(|p| sulfonyl(p, 4), &[M::OneSulfonylOneThiazolTwoYlMethane]),
                ]),
            ]),
        ],
    );

    t.add(
        "C:N:C-C-F",
        clauses![
            when(
                |p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Pyrimidine) && straight(p, 3, 4),
                &[M::OneFluoroOnePyrimidinTwoYlMethane],
            ),
            when(
                |p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Thiazole) && straight(p, 3, 4),
                &[M::OneFluoroOneThiazolTwoYlMethane],
            ),
        ],
    );

    t.add(
        "C:N:C-C-Cl",
        clauses![
            when(
                |p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Pyrimidine) && straight(p, 3, 4),
                &[M::OneChloroOnePyrimidinTwoYlMethane],
            ),
            when(
                |p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Thiazole) && straight(p, 3, 4),
                &[M::OneChloroOneThiazolTwoYlMethane],
            ),
        ],
    );

    t.add(
        "Br-C-C:N:C",
        clauses![
            when(
                |p| !p.bond_in_ring(1) && ring_run(p, 2, 5, R::Pyrimidine) && straight(p, 1, 2),
                &[M::OneBromoOnePyrimidinTwoYlMethane],
            ),
            when(
                |p| !p.bond_in_ring(1) && ring_run(p, 2, 5, R::Thiazole) && straight(p, 1, 2),
                &[M::OneBromoOneThiazolTwoYlMethane],
            ),
        ],
    );

    t.add(
        "C:N:C-C-I",
        clauses![
            when(
                |p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Pyrimidine) && straight(p, 3, 4),
                &[M::OneIodoOnePyrimidinTwoYlMethane],
            ),
            when(
                |p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Thiazole) && straight(p, 3, 4),
                &[M::OneIodoOneThiazolTwoYlMethane],
            ),
        ],
    );
}

fn six(t: &mut RuleTable) {
    t.add(
        "C-C-C-C-C:N",
        clauses![
            when(|p| !p.bond_in_ring(3) && ring_run(p, 4, 6, R::Pyridine) && straight(p, 1, 4), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 0), &[M::ThreeCarboxyOnePyridinTwoYlPropane]),
                    when(|p| ester_carbon(p, 0), &[M::ThreeAlkoxycarbonylOnePyridinTwoYlPropane]),
                    when(|p| amide_carbon(p, 0), &[M::ThreeCarbamoylOnePyridinTwoYlPropane]),
                    when(|p| aldehyde_carbon(p, 0), &[M::ThreeFormylOnePyridinTwoYlPropane]),
                    when(|p| ketone_carbon(p, 0), &[M::ThreeAcylOnePyridinTwoYlPropane]),
                    when(|p| cyano(p, 0), &[M::ThreeCyanoOnePyridinTwoYlPropane]),
                ]),
            ]),
            when(|p| !p.bond_in_ring(3) && ring_run(p, 4, 6, R::Pyrrole) && straight(p, 1, 4), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 0), &[M::ThreeCarboxyOnePyrrolTwoYlPropane]),
                    when(|p| ester_carbon(p, 0), &[M::ThreeAlkoxycarbonylOnePyrrolTwoYlPropane]),
                    when(|p| amide_carbon(p, 0), &[M::ThreeCarbamoylOnePyrrolTwoYlPropane]),
                    when(|p| aldehyde_carbon(p, 0), &[M::ThreeFormylOnePyrrolTwoYlPropane]),
                    when(|p| ketone_carbon(p, 0), &[M::ThreeAcylOnePyrrolTwoYlPropane]),
                    when(|p| cyano(p, 0), &[M::ThreeCyanoOnePyrrolTwoYlPropane]),
                ]),
            ]),
        ],
    );

    t.add(
        "N:C-C-C-C-O",
        clauses![
            when(|p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Pyridine) && straight(p, 2, 5), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 5), &[M::ThreeHydroxyOnePyridinTwoYlPropane]),
                    when(|p| methoxy(p, 5), &[M::ThreeMethoxyOnePyridinTwoYlPropane]),
                    when(|p| ether_oxygen(p, 5), &[M::ThreeAlkoxyOnePyridinTwoYlPropane]),
                    when(|p| ester_oxygen(p, 5), &[M::ThreeAcyloxyOnePyridinTwoYlPropane]),
                ]),
            ]),
            when(|p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Pyrrole) && straight(p, 2, 5), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 5), &[M::ThreeHydroxyOnePyrrolTwoYlPropane]),
                    when(|p| methoxy(p, 5), &[M::ThreeMethoxyOnePyrrolTwoYlPropane]),
                    when(|p| ether_oxygen(p, 5), &[M::ThreeAlkoxyOnePyrrolTwoYlPropane]),
                    when(|p| ester_oxygen(p, 5), &[M::ThreeAcyloxyOnePyrrolTwoYlPropane]),
                ]),
            ]),
        ],
    );

    t.add(
        "N-C-C-C-C:N",
        clauses![
            when(|p| !p.bond_in_ring(3) && ring_run(p, 4, 6, R::Pyridine) && straight(p, 1, 4), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 0), &[M::ThreeAminoOnePyridinTwoYlPropane]),
                    when(|p| substituted_amine(p, 0), &[M::ThreeAlkylaminoOnePyridinTwoYlPropane]),
                    when(|p| amide_nitrogen(p, 0), &[M::ThreeAcylaminoOnePyridinTwoYlPropane]),
                ]),
            ]),
            when(|p| !p.bond_in_ring(3) && ring_run(p, 4, 6, R::Pyrrole) && straight(p, 1, 4), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 0), &[M::ThreeAminoOnePyrrolTwoYlPropane]),
                    when(|p| substituted_amine(p, 0), &[M::ThreeAlkylaminoOnePyrrolTwoYlPropane]),
                    when(|p| amide_nitrogen(p, 0), &[M::ThreeAcylaminoOnePyrrolTwoYlPropane]),
                ]),
            ]),
        ],
    );

    t.add(
        "N:C-C-C-C-S",
        clauses![
            when(|p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Pyridine) && straight(p, 2, 5), &[]).then(clauses![
                first_of(vec![
                    when(|p| thiol(p, 5), &[M::ThreeMercaptoOnePyridinTwoYlPropane]),
                    when(|p| thioether(p, 5), &[M::ThreeAlkylthioOnePyridinTwoYlPropane]),
                    when(|p| sulfonyl(p, 5), &[M::ThreeSulfonylOnePyridinTwoYlPropane]),
                ]),
            ]),
            when(|p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Pyrrole) && straight(p, 2, 5), &[]).then(clauses![
                first_of(vec![
                    when(|p| thiol(p, 5), &[M::ThreeMercaptoOnePyrrolTwoYlPropane]),
                    when(|p| thioether(p, 5), &[M::ThreeAlkylthioOnePyrrolTwoYlPropane]),
                    when(|p| sulfonyl(p, 5), &[M::ThreeSulfonylOnePyrrolTwoYlPropane]),
                ]),
            ]),
        ],
    );

    t.add(
        "F-C-C-C-C:N",
        clauses![
            when(
                |p| !p.bond_in_ring(3) && ring_run(p, 4, 6, R::Pyridine) && straight(p, 1, 4),
                &[M::ThreeFluoroOnePyridinTwoYlPropane],
            ),
            when(
                |p| !p.bond_in_ring(3) && ring_run(p, 4, 6, R::Pyrrole) && straight(p, 1, 4),
                &[M::ThreeFluoroOnePyrrolTwoYlPropane],
            ),
        ],
    );

    t.add(
        "Cl-C-C-C-C:N",
        clauses![
            when(
                |p| !p.bond_in_ring(3) && ring_run(p, 4, 6, R::Pyridine) && straight(p, 1, 4),
                &[M::ThreeChloroOnePyridinTwoYlPropane],
            ),
            when(
                |p| !p.bond_in_ring(3) && ring_run(p, 4, 6, R::Pyrrole) && straight(p, 1, 4),
                &[M::ThreeChloroOnePyrrolTwoYlPropane],
            ),
        ],
    );

    t.add(
        "Br-C-C-C-C:N",
        clauses![
            when(
                |p| !p.bond_in_ring(3) && ring_run(p, 4, 6, R::Pyridine) && straight(p, 1, 4),
                &[M::ThreeBromoOnePyridinTwoYlPropane],
            ),
            when(
                |p| !p.bond_in_ring(3) && ring_run(p, 4, 6, R::Pyrrole) && straight(p, 1, 4),
                &[M::ThreeBromoOnePyrrolTwoYlPropane],
            ),
        ],
    );

    t.add(
        "I-C-C-C-C:N",
        clauses![
            when(
                |p| !p.bond_in_ring(3) && ring_run(p, 4, 6, R::Pyridine) && straight(p, 1, 4),
                &[M::ThreeIodoOnePyridinTwoYlPropane],
            ),
            when(
                |p| !p.bond_in_ring(3) && ring_run(p, 4, 6, R::Pyrrole) && straight(p, 1, 4),
                &[M::ThreeIodoOnePyrrolTwoYlPropane],
            ),
        ],
    );

    t.add(
        "C-C-C-C:C:N",
        clauses![
            when(|p| !p.bond_in_ring(2) && ring_run(p, 3, 6, R::Pyridine) && straight(p, 1, 3), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 0), &[M::TwoCarboxyOnePyridinThreeYlEthane]),
                    when(|p| ester_carbon(p, 0), &[M::TwoAlkoxycarbonylOnePyridinThreeYlEthane]),
                    when(|p| amide_carbon(p, 0), &[M::TwoCarbamoylOnePyridinThreeYlEthane]),
                    when(|p| aldehyde_carbon(p, 0), &[M::TwoFormylOnePyridinThreeYlEthane]),
                    when(|p| ketone_carbon(p, 0), &[M::TwoAcylOnePyridinThreeYlEthane]),
                    when(|p| cyano(p, 0), &[M::TwoCyanoOnePyridinThreeYlEthane]),
                ]),
            ]),
        ],
    );

    t.add(
        "N:C:C-C-C-O",
        clauses![
            when(|p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Pyridine) && straight(p, 3, 5), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 5), &[M::TwoHydroxyOnePyridinThreeYlEthane]),
                    when(|p| methoxy(p, 5), &[M::TwoMethoxyOnePyridinThreeYlEthane]),
                    when(|p| ether_oxygen(p, 5), &[M::TwoAlkoxyOnePyridinThreeYlEthane]),
                    when(|p| ester_oxygen(p, 5), &[M::TwoAcyloxyOnePyridinThreeYlEthane]),
                ]),
            ]),
        ],
    );

    t.add(
        "N-C-C-C:C:N",
        clauses![
            when(|p| !p.bond_in_ring(2) && ring_run(p, 3, 6, R::Pyridine) && straight(p, 1, 3), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 0), &[M::TwoAminoOnePyridinThreeYlEthane]),
                    when(|p| substituted_amine(p, 0), &[M::TwoAlkylaminoOnePyridinThreeYlEthane]),
                    when(|p| amide_nitrogen(p, 0), &[M::TwoAcylaminoOnePyridinThreeYlEthane]),
                ]),
            ]),
        ],
    );

    t.add(
        "N:C:C-C-C-S",
        clauses![
            when(|p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Pyridine) && straight(p, 3, 5), &[]).then(clauses![
                first_of(vec![
                    when(|p| thiol(p, 5), &[M::TwoMercaptoOnePyridinThreeYlEthane]),
                    when(|p| thioether(p, 5), &[M::TwoAlkylthioOnePyridinThreeYlEthane]),
                    when(|p| sulfonyl(p, 5), &[M::TwoSulfonylOnePyridinThreeYlEthane]),
                ]),
            ]),
        ],
    );

    t.add(
        "F-C-C-C:C:N",
        clauses![when(
            |p| !p.bond_in_ring(2) && ring_run(p, 3, 6, R::Pyridine) && straight(p, 1, 3),
            &[M::TwoFluoroOnePyridinThreeYlEthane],
        )],
    );

    t.add(
        "Cl-C-C-C:C:N",
        clauses![when(
            |p| !p.bond_in_ring(2) && ring_run(p, 3, 6, R::Pyridine) && straight(p, 1, 3),
            &[M::TwoChloroOnePyridinThreeYlEthane],
        )],
    );

    t.add(
        "Br-C-C-C:C:N",
        clauses![when(
            |p| !p.bond_in_ring(2) && ring_run(p, 3, 6, R::Pyridine) && straight(p, 1, 3),
            &[M::TwoBromoOnePyridinThreeYlEthane],
        )],
    );

    t.add(
        "I-C-C-C:C:N",
        clauses![when(
            |p| !p.bond_in_ring(2) && ring_run(p, 3, 6, R::Pyridine) && straight(p, 1, 3),
            &[M::TwoIodoOnePyridinThreeYlEthane],
        )],
    );

    t.add(
        "C-C-C:C:C:N",
        clauses![
            when(|p| !p.bond_in_ring(1) && ring_run(p, 2, 6, R::Pyridine) && straight(p, 1, 2), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 0), &[M::OneCarboxyOnePyridinFourYlMethane]),
                    when(|p| ester_carbon(p, 0), &[M::OneAlkoxycarbonylOnePyridinFourYlMethane]),
                    when(|p| amide_carbon(p, 0), &[M::OneCarbamoylOnePyridinFourYlMethane]),
                    when(|p| aldehyde_carbon(p, 0), &[M::OneFormylOnePyridinFourYlMethane]),
                    when(|p| ketone_carbon(p, 0), &[M::OneAcylOnePyridinFourYlMethane]),
                    when(|p| cyano(p, 0), &[M::OneCyanoOnePyridinFourYlMethane]),
                ]),
            ]),
        ],
    );

    t.add(
        "N:C:C:C-C-O",
        clauses![
            when(|p| !p.bond_in_ring(3) && ring_run(p, 0, 4, R::Pyridine) && straight(p, 4, 5), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 5), &[M::OneHydroxyOnePyridinFourYlMethane]),
                    when(|p| methoxy(p, 5), &[M::OneMethoxyOnePyridinFourYlMethane]),
                    when(|p| ether_oxygen(p, 5), &[M::OneAlkoxyOnePyridinFourYlMethane]),
                    when(|p| ester_oxygen(p, 5), &[M::OneAcyloxyOnePyridinFourYlMethane]),
                ]),
            ]),
        ],
    );

    t.add(
        "N-C-C:C:C:N",
        clauses![
            when(|p| !p.bond_in_ring(1) && ring_run(p, 2, 6, R::Pyridine) && straight(p, 1, 2), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 0), &[M::OneAminoOnePyridinFourYlMethane]),
                    when(|p| substituted_amine(p, 0), &[M::OneAlkylaminoOnePyridinFourYlMethane]),
                    when(|p| amide_nitrogen(p, 0), &[M::OneAcylaminoOnePyridinFourYlMethane]),
                ]),
            ]),
        ],
    );

    t.add(
        "N:C:C:C-C-S",
        clauses![
            when(|p| !p.bond_in_ring(3) && ring_run(p, 0, 4, R::Pyridine) && straight(p, 4, 5), &[]).then(clauses![
                first_of(vec![
                    when(|p| thiol(p, 5), &[M::OneMercaptoOnePyridinFourYlMethane]),
                    when(|p| thioether(p, 5), &[M::OneAlkylthioOnePyridinFourYlMethane]),
                    when(|p| sulfonyl(p, 5), &[M::OneSulfonylOnePyridinFourYlMethane]),
                ]),
            ]),
        ],
    );

    t.add(
        "F-C-C:C:C:N",
        clauses![when(
            |p| !p.bond_in_ring(1) && ring_run(p, 2, 6, R::Pyridine) && straight(p, 1, 2),
            &[M::OneFluoroOnePyridinFourYlMethane],
        )],
    );

    t.add(
        "Cl-C-C:C:C:N",
        clauses![when(
            |p| !p.bond_in_ring(1) && ring_run(p, 2, 6, R::Pyridine) && straight(p, 1, 2),
            &[M::OneChloroOnePyridinFourYlMethane],
        )],
    );

    t.add(
        "Br-C-C:C:C:N",
        clauses![when(
            |p| !p.bond_in_ring(1) && ring_run(p, 2, 6, R::Pyridine) && straight(p, 1, 2),
            &[M::OneBromoOnePyridinFourYlMethane],
        )],
    );

    t.add(
        "I-C-C:C:C:N",
        clauses![when(
            |p| !p.bond_in_ring(1) && ring_run(p, 2, 6, R::Pyridine) && straight(p, 1, 2),
            &[M::OneIodoOnePyridinFourYlMethane],
        )],
    );

    t.add(
        "C-C-C-C-C:O",
        clauses![when(|p| !p.bond_in_ring(3) && ring_run(p, 4, 6, R::Furan) && straight(p, 1, 4), &[]).then(clauses![
            first_of(vec![
                when(|p| carboxyl_carbon(p, 0), &[M::ThreeCarboxyOneFuranTwoYlPropane]),
                when(|p| ester_carbon(p, 0), &[M::ThreeAlkoxycarbonylOneFuranTwoYlPropane]),
                when(|p| amide_carbon(p, 0), &[M::ThreeCarbamoylOneFuranTwoYlPropane]),
                when(|p| aldehyde_carbon(p, 0), &[M::ThreeFormylOneFuranTwoYlPropane]),
                when(|p| ketone_carbon(p, 0), &[M::ThreeAcylOneFuranTwoYlPropane]),
                when(|p| cyano(p, 0), &[M::ThreeCyanoOneFuranTwoYlPropane]),
            ]),
        ])],
    );

    t.add(
        "O-C-C-C-C:O",
        clauses![when(|p| !p.bond_in_ring(3) && ring_run(p, 4, 6, R::Furan) && straight(p, 1, 4), &[]).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 0), &[M::ThreeHydroxyOneFuranTwoYlPropane]),
                when(|p| methoxy(p, 0), &[M::ThreeMethoxyOneFuranTwoYlPropane]),
                when(|p| ether_oxygen(p, 0), &[M::ThreeAlkoxyOneFuranTwoYlPropane]),
                when(|p| ester_oxygen(p, 0), &[M::ThreeAcyloxyOneFuranTwoYlPropane]),
            ]),
        ])],
    );

    t.add(
        "N-C-C-C-C:O",
        clauses![when(|p| !p.bond_in_ring(3) && ring_run(p, 4, 6, R::Furan) && straight(p, 1, 4), &[]).then(clauses![
            first_of(vec![
                when(|p| primary_amine(p, 0), &[M::ThreeAminoOneFuranTwoYlPropane]),
                when(|p| substituted_amine(p, 0), &[M::ThreeAlkylaminoOneFuranTwoYlPropane]),
                when(|p| amide_nitrogen(p, 0), &[M::ThreeAcylaminoOneFuranTwoYlPropane]),
            ]),
        ])],
    );

    t.add(
        "O:C-C-C-C-S",
        clauses![when(|p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Furan) && straight(p, 2, 5), &[]).then(clauses![
            first_of(vec![
                when(|p| thiol(p, 5), &[M::ThreeMercaptoOneFuranTwoYlPropane]),
                when(|p| thioether(p, 5), &[M::ThreeAlkylthioOneFuranTwoYlPropane]),
                when(|p| sulfonyl(p, 5), &[M::ThreeSulfonylOneFuranTwoYlPropane]),
            ]),
        ])],
    );

    t.add(
        "F-C-C-C-C:O",
        clauses![when(
            |p| !p.bond_in_ring(3) && ring_run(p, 4, 6, R::Furan) && straight(p, 1, 4),
            &[M::ThreeFluoroOneFuranTwoYlPropane],
        )],
    );

    t.add(
        "Cl-C-C-C-C:O",
        clauses![when(
            |p| !p.bond_in_ring(3) && ring_run(p, 4, 6, R::Furan) && straight(p, 1, 4),
            &[M::ThreeChloroOneFuranTwoYlPropane],
        )],
    );

    t.add(
        "Br-C-C-C-C:O",
        clauses![when(
            |p| !p.bond_in_ring(3) && ring_run(p, 4, 6, R::Furan) && straight(p, 1, 4),
            &[M::ThreeBromoOneFuranTwoYlPropane],
        )],
    );

    t.add(
        "I-C-C-C-C:O",
        clauses![when(
            |p| !p.bond_in_ring(3) && ring_run(p, 4, 6, R::Furan) && straight(p, 1, 4),
            &[M::ThreeIodoOneFuranTwoYlPropane],
        )],
    );

    t.add(
        "C-C-C-C:C:O",
        clauses![when(|p| !p.bond_in_ring(2) && ring_run(p, 3, 6, R::Furan) && straight(p, 1, 3), &[]).then(clauses![
            first_of(vec![
                when(|p| carboxyl_carbon(p, 0), &[M::TwoCarboxyOneFuranThreeYlEthane]),
                when(|p| ester_carbon(p, 0), &[M::TwoAlkoxycarbonylOneFuranThreeYlEthane]),
                when(|p| amide_carbon(p, 0), &[M::TwoCarbamoylOneFuranThreeYlEthane]),
                when(|p| aldehyde_carbon(p, 0), &[M::TwoFormylOneFuranThreeYlEthane]),
                when(|p| ketone_carbon(p, 0), &[M::TwoAcylOneFuranThreeYlEthane]),
                when(|p| cyano(p, 0), &[M::TwoCyanoOneFuranThreeYlEthane]),
            ]),
        ])],
    );

    t.add(
        "O-C-C-C:C:O",
        clauses![when(|p| !p.bond_in_ring(2) && ring_run(p, 3, 6, R::Furan) && straight(p, 1, 3), &[]).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 0), &[M::TwoHydroxyOneFuranThreeYlEthane]),
                when(|p| methoxy(p, 0), &[M::TwoMethoxyOneFuranThreeYlEthane]),
                when(|p| ether_oxygen(p, 0), &[M::TwoAlkoxyOneFuranThreeYlEthane]),
                when(|p| ester_oxygen(p, 0), &[M::TwoAcyloxyOneFuranThreeYlEthane]),
            ]),
        ])],
    );

    t.add(
        "N-C-C-C:C:O",
        clauses![when(|p| !p.bond_in_ring(2) && ring_run(p, 3, 6, R::Furan) && straight(p, 1, 3), &[]).then(clauses![
            first_of(vec![
                when(|p| primary_amine(p, 0), &[M::TwoAminoOneFuranThreeYlEthane]),
                when(|p| substituted_amine(p, 0), &[M::TwoAlkylaminoOneFuranThreeYlEthane]),
                when(|p| amide_nitrogen(p, 0), &[M::TwoAcylaminoOneFuranThreeYlEthane]),
            ]),
        ])],
    );

    t.add(
        "O:C:C-C-C-S",
        clauses![when(|p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Furan) && straight(p, 3, 5), &[]).then(clauses![
            first_of(vec![
                when(|p| thiol(p, 5), &[M::TwoMercaptoOneFuranThreeYlEthane]),
                when(|p| thioether(p, 5), &[M::TwoAlkylthioOneFuranThreeYlEthane]),
                when(|p| sulfonyl(p, 5), &[M::TwoSulfonylOneFuranThreeYlEthane]),
            ]),
        ])],
    );

    t.add(
        "F-C-C-C:C:O",
        clauses![when(
            |p| !p.bond_in_ring(2) && ring_run(p, 3, 6, R::Furan) && straight(p, 1, 3),
            &[M::TwoFluoroOneFuranThreeYlEthane],
        )],
    );

    t.add(
        "Cl-C-C-C:C:O",
        clauses![when(
            |p| !p.bond_in_ring(2) && ring_run(p, 3, 6, R::Furan) && straight(p, 1, 3),
            &[M::TwoChloroOneFuranThreeYlEthane],
        )],
    );

    t.add(
        "Br-C-C-C:C:O",
        clauses![when(
            |p| !p.bond_in_ring(2) && ring_run(p, 3, 6, R::Furan) && straight(p, 1, 3),
            &[M::TwoBromoOneFuranThreeYlEthane],
        )],
    );

    t.add(
        "I-C-C-C:C:O",
        clauses![when(
            |p| !p.bond_in_ring(2) && ring_run(p, 3, 6, R::Furan) && straight(p, 1, 3),
            &[M::TwoIodoOneFuranThreeYlEthane],
        )],
    );

    t.add(
        "C-C-C-C-C:S",
        clauses![
            when(|p| !p.bond_in_ring(3) && ring_run(p, 4, 6, R::Thiophene) && straight(p, 1, 4), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 0), &[M::ThreeCarboxyOneThiophenTwoYlPropane]),
                    when(|p| ester_carbon(p, 0), &[M::ThreeAlkoxycarbonylOneThiophenTwoYlPropane]),
                    when(|p| amide_carbon(p, 0), &[M::ThreeCarbamoylOneThiophenTwoYlPropane]),
                    when(|p| aldehyde_carbon(p, 0), &[M::ThreeFormylOneThiophenTwoYlPropane]),
                    when(|p| ketone_carbon(p, 0), &[M::ThreeAcylOneThiophenTwoYlPropane]),
                    when(|p| cyano(p, 0), &[M::ThreeCyanoOneThiophenTwoYlPropane]),
                ]),
            ]),
        ],
    );

    t.add(
        "O-C-C-C-C:S",
        clauses![
            when(|p| !p.bond_in_ring(3) && ring_run(p, 4, 6, R::Thiophene) && straight(p, 1, 4), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 0), &[M::ThreeHydroxyOneThiophenTwoYlPropane]),
                    when(|p| methoxy(p, 0), &[M::ThreeMethoxyOneThiophenTwoYlPropane]),
                    when(|p| ether_oxygen(p, 0), &[M::ThreeAlkoxyOneThiophenTwoYlPropane]),
                    when(|p| ester_oxygen(p, 0), &[M::ThreeAcyloxyOneThiophenTwoYlPropane]),
                ]),
            ]),
        ],
    );

    t.add(
        "N-C-C-C-C:S",
        clauses![
            when(|p| !p.bond_in_ring(3) && ring_run(p, 4, 6, R::Thiophene) && straight(p, 1, 4), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 0), &[M::ThreeAminoOneThiophenTwoYlPropane]),
                    when(|p| substituted_amine(p, 0), &[M::ThreeAlkylaminoOneThiophenTwoYlPropane]),
                    when(|p| amide_nitrogen(p, 0), &[M::ThreeAcylaminoOneThiophenTwoYlPropane]),
                ]),
            ]),
        ],
    );

    t.add(
        "S-C-C-C-C:S",
        clauses![
            when(|p| !p.bond_in_ring(3) && ring_run(p, 4, 6, R::Thiophene) && straight(p, 1, 4), &[]).then(clauses![
                first_of(vec![
                    when(|p| thiol(p, 0), &[M::ThreeMercaptoOneThiophenTwoYlPropane]),
                    when(|p| thioether(p, 0), &[M::ThreeAlkylthioOneThiophenTwoYlPropane]),
                    when(|p| sulfonyl(p, 0), &[M::ThreeSulfonylOneThiophenTwoYlPropane]),
                ]),
            ]),
        ],
    );

    t.add(
        "F-C-C-C-C:S",
        clauses![when(
            |p| !p.bond_in_ring(3) && ring_run(p, 4, 6, R::Thiophene) && straight(p, 1, 4),
            &[M::ThreeFluoroOneThiophenTwoYlPropane],
        )],
    );

    t.add(
        "Cl-C-C-C-C:S",
        clauses![when(
            |p| !p.bond_in_ring(3) && ring_run(p, 4, 6, R::Thiophene) && straight(p, 1, 4),
            &[M::ThreeChloroOneThiophenTwoYlPropane],
        )],
    );

    t.add(
        "Br-C-C-C-C:S",
        clauses![when(
            |p| !p.bond_in_ring(3) && ring_run(p, 4, 6, R::Thiophene) && straight(p, 1, 4),
            &[M::ThreeBromoOneThiophenTwoYlPropane],
        )],
    );

    t.add(
        "I-C-C-C-C:S",
        clauses![when(
            |p| !p.bond_in_ring(3) && ring_run(p, 4, 6, R::Thiophene) && straight(p, 1, 4),
            &[M::ThreeIodoOneThiophenTwoYlPropane],
        )],
    );

    t.add(
        "C-C-C-C:C:S",
        clauses![
            when(|p| !p.bond_in_ring(2) && ring_run(p, 3, 6, R::Thiophene) && straight(p, 1, 3), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 0), &[M::TwoCarboxyOneThiophenThreeYlEthane]),
                    when(|p| ester_carbon(p, 0), &[M::TwoAlkoxycarbonylOneThiophenThreeYlEthane]),
                    when(|p| amide_carbon(p, 0), &[M::TwoCarbamoylOneThiophenThreeYlEthane]),
                    when(|p| aldehyde_carbon(p, 0), &[M::TwoFormylOneThiophenThreeYlEthane]),
                    when(|p| ketone_carbon(p, 0), &[M::TwoAcylOneThiophenThreeYlEthane]),
                    when(|p| cyano(p, 0), &[M::TwoCyanoOneThiophenThreeYlEthane]),
                ]),
            ]),
        ],
    );

    t.add(
        "O-C-C-C:C:S",
        clauses![
            when(|p| !p.bond_in_ring(2) && ring_run(p, 3, 6, R::Thiophene) && straight(p, 1, 3), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 0), &[M::TwoHydroxyOneThiophenThreeYlEthane]),
                    when(|p| methoxy(p, 0), &[M::TwoMethoxyOneThiophenThreeYlEthane]),
                    when(|p| ether_oxygen(p, 0), &[M::TwoAlkoxyOneThiophenThreeYlEthane]),
                    when(|p| ester_oxygen(p, 0), &[M::TwoAcyloxyOneThiophenThreeYlEthane]),
                ]),
            ]),
        ],
    );

    t.add(
        "N-C-C-C:C:S",
        clauses![
            when(|p| !p.bond_in_ring(2) && ring_run(p, 3, 6, R::Thiophene) && straight(p, 1, 3), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 0), &[M::TwoAminoOneThiophenThreeYlEthane]),
                    when(|p| substituted_amine(p, 0), &[M::TwoAlkylaminoOneThiophenThreeYlEthane]),
                    when(|p| amide_nitrogen(p, 0), &[M::TwoAcylaminoOneThiophenThreeYlEthane]),
                ]),
            ]),
        ],
    );

    t.add(
        "S-C-C-C:C:S",
        clauses![
            when(|p| !p.bond_in_ring(2) && ring_run(p, 3, 6, R::Thiophene) && straight(p, 1, 3), &[]).then(clauses![
                first_of(vec![
                    when(|p| thiol(p, 0), &[M::TwoMercaptoOneThiophenThreeYlEthane]),
                    when(|p| thioether(p, 0), &[M::TwoAlkylthioOneThiophenThreeYlEthane]),
                    when(|p| sulfonyl(p, 0), &[M::TwoSulfonylOneThiophenThreeYlEthane]),
                ]),
            ]),
        ],
    );

    t.add(
        "F-C-C-C:C:S",
        clauses![when(
            |p| !p.bond_in_ring(2) && ring_run(p, 3, 6, R::Thiophene) && straight(p, 1, 3),
            &[M::TwoFluoroOneThiophenThreeYlEthane],
        )],
    );

    t.add(
        "Cl-C-C-C:C:S",
        clauses![when(
            |p| !p.bond_in_ring(2) && ring_run(p, 3, 6, R::Thiophene) && straight(p, 1, 3),
            &[M::TwoChloroOneThiophenThreeYlEthane],
        )],
    );

    t.add(
        "Br-C-C-C:C:S",
        clauses![when(
            |p| !p.bond_in_ring(2) && ring_run(p, 3, 6, R::Thiophene) && straight(p, 1, 3),
            &[M::TwoBromoOneThiophenThreeYlEthane],
        )],
    );

    t.add(
        "I-C-C-C:C:S",
        clauses![when(
            |p| !p.bond_in_ring(2) && ring_run(p, 3, 6, R::Thiophene) && straight(p, 1, 3),
            &[M::TwoIodoOneThiophenThreeYlEthane],
        )],
    );

    t.add(
        "C-C-C-C:N:C",
        clauses![
            when(|p| !p.bond_in_ring(2) && ring_run(p, 3, 6, R::Pyrimidine) && straight(p, 1, 3), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 0), &[M::TwoCarboxyOnePyrimidinTwoYlEthane]),
                    when(|p| ester_carbon(p, 0), &[M::TwoAlkoxycarbonylOnePyrimidinTwoYlEthane]),
                    when(|p| amide_carbon(p, 0), &[M::TwoCarbamoylOnePyrimidinTwoYlEthane]),
                    when(|p| aldehyde_carbon(p, 0), &[M::TwoFormylOnePyrimidinTwoYlEthane]),
                    when(|p| ketone_carbon(p, 0), &[M::TwoAcylOnePyrimidinTwoYlEthane]),
                    when(|p| cyano(p, 0), &[M::TwoCyanoOnePyrimidinTwoYlEthane]),
                ]),
            ]),
            when(|p| !p.bond_in_ring(2) && ring_run(p, 3, 6, R::Thiazole) && straight(p, 1, 3), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 0), &[M::TwoCarboxyOneThiazolTwoYlEthane]),
                    when(|p| ester_carbon(p, 0), &[M::TwoAlkoxycarbonylOneThiazolTwoYlEthane]),
                    when(|p| amide_carbon(p, 0), &[M::TwoCarbamoylOneThiazolTwoYlEthane]),
                    when(|p| aldehyde_carbon(p, 0), &[M::TwoFormylOneThiazolTwoYlEthane]),
                    when(|p| ketone_carbon(p, 0), &[M::TwoAcylOneThiazolTwoYlEthane]),
                    when(|p| cyano(p, 0), &[M::TwoCyanoOneThiazolTwoYlEthane]),
                ]),
            ]),
        ],
    );

    t.add(
        "C:N:C-C-C-O",
        clauses![
            when(|p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Pyrimidine) && straight(p, 3, 5), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 5), &[M::TwoHydroxyOnePyrimidinTwoYlEthane]),
                    when(|p| methoxy(p, 5), &[M::TwoMethoxyOnePyrimidinTwoYlEthane]),
                    when(|p| ether_oxygen(p, 5), &[M::TwoAlkoxyOnePyrimidinTwoYlEthane]),
                    when(|p| ester_oxygen(p, 5), &[M::TwoAcyloxyOnePyrimidinTwoYlEthane]),
                ]),
            ]),
            when(|p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Thiazole) && straight(p, 3, 5), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 5), &[M::TwoHydroxyOneThiazolTwoYlEthane]),
                    when(|p| methoxy(p, 5), &[M::TwoMethoxyOneThiazolTwoYlEthane]),
                    when(|p| ether_oxygen(p, 5), &[M::TwoAlkoxyOneThiazolTwoYlEthane]),
                    when(|p| ester_oxygen(p, 5), &[M::TwoAcyloxyOneThiazolTwoYlEthane]),
                ]),
            ]),
        ],
    );

    t.add(
        "C:N:C-C-C-N",
        clauses![
            when(|p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Pyrimidine) && straight(p, 3, 5), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 5), &[M::TwoAminoOnePyrimidinTwoYlEthane]),
                    when(|p| substituted_amine(p, 5), &[M::TwoAlkylaminoOnePyrimidinTwoYlEthane]),
                    when(|p| amide_nitrogen(p, 5), &[M::TwoAcylaminoOnePyrimidinTwoYlEthane]),
                ]),
            ]),
            when(|p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Thiazole) && straight(p, 3, 5), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 5), &[M::TwoAminoOneThiazolTwoYlEthane]),
                    when(|p| substituted_amine(p, 5), &[M::TwoAlkylaminoOneThiazolTwoYlEthane]),
                    when(|p| amide_nitrogen(p, 5), &[M::TwoAcylaminoOneThiazolTwoYlEthane]),
                ]),
            ]),
        ],
    );

    t.add(
        "C:N:C-C-C-S",
        clauses![
            when(|p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Pyrimidine) && straight(p, 3, 5), &[]).then(clauses![
                first_of(vec![
                    when(|p| thiol(p, 5), &[M::TwoMercaptoOnePyrimidinTwoYlEthane]),
                    when(|p| thioether(p, 5), &[M::TwoAlkylthioOnePyrimidinTwoYlEthane]),
                    when(|p| sulfonyl(p, 5), &[M::TwoSulfonylOnePyrimidinTwoYlEthane]),
                ]),
            ]),
            when(|p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Thiazole) && straight(p, 3, 5), &[]).then(clauses![
                first_of(vec![
                    when(|p| thiol(p, 5), &[M::TwoMercaptoOneThiazolTwoYlEthane]),
                    when(|p| thioether(p, 5), &[M::TwoAlkylthioOneThiazolTwoYlEthane]),
                    when(|p| sulfonyl(p, 5), &[M::TwoSulfonylOneThiazolTwoYlEthane]),
                ]),
            ]),
        ],
    );

    t.add(
        "C:N:C-C-C-F",
        clauses![
            when(
                |p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Pyrimidine) && straight(p, 3, 5),
                &[M::TwoFluoroOnePyrimidinTwoYlEthane],
            ),
            when(
                |p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Thiazole) && straight(p, 3, 5),
                &[M::TwoFluoroOneThiazolTwoYlEthane],
            ),
        ],
    );

    t.add(
        "C:N:C-C-C-Cl",
        clauses![
            when(
                |p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Pyrimidine) && straight(p, 3, 5),
                &[M::TwoChloroOnePyrimidinTwoYlEthane],
            ),
            when(
                |p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Thiazole) && straight(p, 3, 5),
                &[M::TwoChloroOneThiazolTwoYlEthane],
            ),
        ],
    );

    t.add(
        "Br-C-C-C:N:C",
        clauses![
            when(
                |p| !p.bond_in_ring(2) && ring_run(p, 3, 6, R::Pyrimidine) && straight(p, 1, 3),
                &[M::TwoBromoOnePyrimidinTwoYlEthane],
            ),
            when(
                |p| !p.bond_in_ring(2) && ring_run(p, 3, 6, R::Thiazole) && straight(p, 1, 3),
                &[M::TwoBromoOneThiazolTwoYlEthane],
            ),
        ],
    );

    t.add(
        "C:N:C-C-C-I",
        clauses![
            when(
                |p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Pyrimidine) && straight(p, 3, 5),
                &[M::TwoIodoOnePyrimidinTwoYlEthane],
            ),
            when(
                |p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Thiazole) && straight(p, 3, 5),
                &[M::TwoIodoOneThiazolTwoYlEthane],
            ),
        ],
    );
}

fn seven(t: &mut RuleTable) {
    t.add(
        "C-C-C-C-C-C:N",
        clauses![
            when(|p| !p.bond_in_ring(4) && ring_run(p, 5, 7, R::Pyridine) && straight(p, 1, 5), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 0), &[M::FourCarboxyOnePyridinTwoYlButane]),
                    when(|p| ester_carbon(p, 0), &[M::FourAlkoxycarbonylOnePyridinTwoYlButane]),
                    when(|p| amide_carbon(p, 0), &[M::FourCarbamoylOnePyridinTwoYlButane]),
                    when(|p| aldehyde_carbon(p, 0), &[M::FourFormylOnePyridinTwoYlButane]),
                    when(|p| ketone_carbon(p, 0), &[M::FourAcylOnePyridinTwoYlButane]),
                    when(|p| cyano(p, 0), &[M::FourCyanoOnePyridinTwoYlButane]),
                ]),
            ]),
            when(|p| !p.bond_in_ring(4) && ring_run(p, 5, 7, R::Pyrrole) && straight(p, 1, 5), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 0), &[M::FourCarboxyOnePyrrolTwoYlButane]),
                    when(|p| ester_carbon(p, 0), &[M::FourAlkoxycarbonylOnePyrrolTwoYlButane]),
                    when(|p| amide_carbon(p, 0), &[M::FourCarbamoylOnePyrrolTwoYlButane]),
                    when(|p| aldehyde_carbon(p, 0), &[M::FourFormylOnePyrrolTwoYlButane]),
                    when(|p| ketone_carbon(p, 0), &[M::FourAcylOnePyrrolTwoYlButane]),
                    when(|p| cyano(p, 0), &[M::FourCyanoOnePyrrolTwoYlButane]),
                ]),
            ]),
        ],
    );

    t.add(
        "N:C-C-C-C-C-O",
        clauses![
            when(|p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Pyridine) && straight(p, 2, 6), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 6), &[M::FourHydroxyOnePyridinTwoYlButane]),
                    when(|p| methoxy(p, 6), &[M::FourMethoxyOnePyridinTwoYlButane]),
                    when(|p| ether_oxygen(p, 6), &[M::FourAlkoxyOnePyridinTwoYlButane]),
                    when(|p| ester_oxygen(p, 6), &[M::FourAcyloxyOnePyridinTwoYlButane]),
                ]),
            ]),
            when(|p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Pyrrole) && straight(p, 2, 6), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 6), &[M::FourHydroxyOnePyrrolTwoYlButane]),
                    when(|p| methoxy(p, 6), &[M::FourMethoxyOnePyrrolTwoYlButane]),
                    when(|p| ether_oxygen(p, 6), &[M::FourAlkoxyOnePyrrolTwoYlButane]),
                    when(|p| ester_oxygen(p, 6), &[M::FourAcyloxyOnePyrrolTwoYlButane]),
                ]),
            ]),
        ],
    );

    t.add(
        "N-C-C-C-C-C:N",
        clauses![
            when(|p| !p.bond_in_ring(4) && ring_run(p, 5, 7, R::Pyridine) && straight(p, 1, 5), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 0), &[M::FourAminoOnePyridinTwoYlButane]),
                    when(|p| substituted_amine(p, 0), &[M::FourAlkylaminoOnePyridinTwoYlButane]),
                    when(|p| amide_nitrogen(p, 0), &[M::FourAcylaminoOnePyridinTwoYlButane]),
                ]),
            ]),
            when(|p| !p.bond_in_ring(4) && ring_run(p, 5, 7, R::Pyrrole) && straight(p, 1, 5), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 0), &[M::FourAminoOnePyrrolTwoYlButane]),
                    when(|p| substituted_amine(p, 0), &[M::FourAlkylaminoOnePyrrolTwoYlButane]),
                    when(|p| amide_nitrogen(p, 0), &[M::FourAcylaminoOnePyrrolTwoYlButane]),
                ]),
            ]),
        ],
    );

    t.add(
        "N:C-C-C-C-C-S",
        clauses![
            when(|p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Pyridine) && straight(p, 2, 6), &[]).then(clauses![
                first_of(vec![
                    when(|p| thiol(p, 6), &[M::FourMercaptoOnePyridinTwoYlButane]),
                    when(|p| thioether(p, 6), &[M::FourAlkylthioOnePyridinTwoYlButane]),
                    when(|p| sulfonyl(p, 6), &[M::FourSulfonylOnePyridinTwoYlButane]),
                ]),
            ]),
            when(|p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Pyrrole) && straight(p, 2, 6), &[]).then(clauses![
                first_of(vec![
                    when(|p| thiol(p, 6), &[M::FourMercaptoOnePyrrolTwoYlButane]),
                    when(|p| thioether(p, 6), &[M::FourAlkylthioOnePyrrolTwoYlButane]),
                    when(|p| sulfonyl(p, 6), &[M::FourSulfonylOnePyrrolTwoYlButane]),
                ]),
            ]),
        ],
    );

    t.add(
        "F-C-C-C-C-C:N",
        clauses![
            when(
                |p| !p.bond_in_ring(4) && ring_run(p, 5, 7, R::Pyridine) && straight(p, 1, 5),
                &[M::FourFluoroOnePyridinTwoYlButane],
            ),
            when(
                |p| !p.bond_in_ring(4) && ring_run(p, 5, 7, R::Pyrrole) && straight(p, 1, 5),
                &[M::FourFluoroOnePyrrolTwoYlButane],
            ),
        ],
    );

    t.add(
        "Cl-C-C-C-C-C:N",
        clauses![
            when(
                |p| !p.bond_in_ring(4) && ring_run(p, 5, 7, R::Pyridine) && straight(p, 1, 5),
                &[M::FourChloroOnePyridinTwoYlButane],
            ),
            when(
                |p| !p.bond_in_ring(4) && ring_run(p, 5, 7, R::Pyrrole) && straight(p, 1, 5),
                &[M::FourChloroOnePyrrolTwoYlButane],
            ),
        ],
    );

    t.add(
        "Br-C-C-C-C-C:N",
        clauses![
            when(
                |p| !p.bond_in_ring(4) && ring_run(p, 5, 7, R::Pyridine) && straight(p, 1, 5),
                &[M::FourBromoOnePyridinTwoYlButane],
            ),
            when(
                |p| !p.bond_in_ring(4) && ring_run(p, 5, 7, R::Pyrrole) && straight(p, 1, 5),
                &[M::FourBromoOnePyrrolTwoYlButane],
            ),
        ],
    );

    t.add(
        "I-C-C-C-C-C:N",
        clauses![
            when(
                |p| !p.bond_in_ring(4) && ring_run(p, 5, 7, R::Pyridine) && straight(p, 1, 5),
                &[M::FourIodoOnePyridinTwoYlButane],
            ),
            when(
                |p| !p.bond_in_ring(4) && ring_run(p, 5, 7, R::Pyrrole) && straight(p, 1, 5),
                &[M::FourIodoOnePyrrolTwoYlButane],
            ),
        ],
    );

    t.add(
        "C-C-C-C-C:C:N",
        clauses![
            when(|p| !p.bond_in_ring(3) && ring_run(p, 4, 7, R::Pyridine) && straight(p, 1, 4), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 0), &[M::ThreeCarboxyOnePyridinThreeYlPropane]),
                    when(|p| ester_carbon(p, 0), &[M::ThreeAlkoxycarbonylOnePyridinThreeYlPropane]),
                    when(|p| amide_carbon(p, 0), &[M::ThreeCarbamoylOnePyridinThreeYlPropane]),
                    when(|p| aldehyde_carbon(p, 0), &[M::ThreeFormylOnePyridinThreeYlPropane]),
                    when(|p| ketone_carbon(p, 0), &[M::ThreeAcylOnePyridinThreeYlPropane]),
                    when(|p| cyano(p, 0), &[M::ThreeCyanoOnePyridinThreeYlPropane]),
                ]),
            ]),
        ],
    );

    t.add(
        "N:C:C-C-C-C-O",
        clauses![
            when(|p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Pyridine) && straight(p, 3, 6), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 6), &[M::ThreeHydroxyOnePyridinThreeYlPropane]),
                    when(|p| methoxy(p, 6), &[M::ThreeMethoxyOnePyridinThreeYlPropane]),
                    when(|p| ether_oxygen(p, 6), &[M::ThreeAlkoxyOnePyridinThreeYlPropane]),
                    when(|p| ester_oxygen(p, 6), &[M::ThreeAcyloxyOnePyridinThreeYlPropane]),
                ]),
            ]),
        ],
    );

    t.add(
        "N-C-C-C-C:C:N",
        clauses![
            when(|p| !p.bond_in_ring(3) && ring_run(p, 4, 7, R::Pyridine) && straight(p, 1, 4), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 0), &[M::ThreeAminoOnePyridinThreeYlPropane]),
                    when(|p| substituted_amine(p, 0), &[M::ThreeAlkylaminoOnePyridinThreeYlPropane]),
                    when(|p| amide_nitrogen(p, 0), &[M::ThreeAcylaminoOnePyridinThreeYlPropane]),
                ]),
            ]),
        ],
    );

    t.add(
        "N:C:C-C-C-C-S",
        clauses![
            when(|p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Pyridine) && straight(p, 3, 6), &[]).then(clauses![
                first_of(vec![
                    when(|p| thiol(p, 6), &[M::ThreeMercaptoOnePyridinThreeYlPropane]),
                    when(|p| thioether(p, 6), &[M::ThreeAlkylthioOnePyridinThreeYlPropane]),
                    when(|p| sulfonyl(p, 6), &[M::ThreeSulfonylOnePyridinThreeYlPropane]),
                ]),
            ]),
        ],
    );

    t.add(
        "F-C-C-C-C:C:N",
        clauses![when(
            |p| !p.bond_in_ring(3) && ring_run(p, 4, 7, R::Pyridine) && straight(p, 1, 4),
            &[M::ThreeFluoroOnePyridinThreeYlPropane],
        )],
    );

    t.add(
        "Cl-C-C-C-C:C:N",
        clauses![when(
            |p| !p.bond_in_ring(3) && ring_run(p, 4, 7, R::Pyridine) && straight(p, 1, 4),
            &[M::ThreeChloroOnePyridinThreeYlPropane],
        )],
    );

    t.add(
        "Br-C-C-C-C:C:N",
        clauses![when(
            |p| !p.bond_in_ring(3) && ring_run(p, 4, 7, R::Pyridine) && straight(p, 1, 4),
            &[M::ThreeBromoOnePyridinThreeYlPropane],
        )],
    );

    t.add(
        "I-C-C-C-C:C:N",
        clauses![when(
            |p| !p.bond_in_ring(3) && ring_run(p, 4, 7, R::Pyridine) && straight(p, 1, 4),
            &[M::ThreeIodoOnePyridinThreeYlPropane],
        )],
    );

    t.add(
        "C-C-C-C:C:C:N",
        clauses![
            when(|p| !p.bond_in_ring(2) && ring_run(p, 3, 7, R::Pyridine) && straight(p, 1, 3), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 0), &[M::TwoCarboxyOnePyridinFourYlEthane]),
                    when(|p| ester_carbon(p, 0), &[M::TwoAlkoxycarbonylOnePyridinFourYlEthane]),
                    when(|p| amide_carbon(p, 0), &[M::TwoCarbamoylOnePyridinFourYlEthane]),
                    when(|p| aldehyde_carbon(p, 0), &[M::TwoFormylOnePyridinFourYlEthane]),
                    when(|p| ketone_carbon(p, 0), &[M::TwoAcylOnePyridinFourYlEthane]),
                    when(|p| cyano(p, 0), &[M::TwoCyanoOnePyridinFourYlEthane]),
                ]),
            ]),
        ],
    );

    t.add(
        "N:C:C:C-C-C-O",
        clauses![
            when(|p| !p.bond_in_ring(3) && ring_run(p, 0, 4, R::Pyridine) && straight(p, 4, 6), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 6), &[M::TwoHydroxyOnePyridinFourYlEthane]),
                    when(|p| methoxy(p, 6), &[M::TwoMethoxyOnePyridinFourYlEthane]),
                    when(|p| ether_oxygen(p, 6), &[M::TwoAlkoxyOnePyridinFourYlEthane]),
                    when(|p| ester_oxygen(p, 6), &[M::TwoAcyloxyOnePyridinFourYlEthane]),
                ]),
            ]),
        ],
    );

    t.add(
        "N-C-C-C:C:C:N",
        clauses![
            when(|p| !p.bond_in_ring(2) && ring_run(p, 3, 7, R::Pyridine) && straight(p, 1, 3), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 0), &[M::TwoAminoOnePyridinFourYlEthane]),
                    when(|p| substituted_amine(p, 0), &[M::TwoAlkylaminoOnePyridinFourYlEthane]),
                    when(|p| amide_nitrogen(p, 0), &[M::TwoAcylaminoOnePyridinFourYlEthane]),
                ]),
            ]),
        ],
    );

    t.add(
        "N:C:C:C-C-C-S",
        clauses![
            when(|p| !p.bond_in_ring(3) && ring_run(p, 0, 4, R::Pyridine) && straight(p, 4, 6), &[]).then(clauses![
                first_of(vec![
                    when(|p| thiol(p, 6), &[M::TwoMercaptoOnePyridinFourYlEthane]),
                    when(|p| thioether(p, 6), &[M::TwoAlkylthioOnePyridinFourYlEthane]),
                    when(|p| sulfonyl(p, 6), &[M::TwoSulfonylOnePyridinFourYlEthane]),
                ]),
            ]),
        ],
    );

    t.add(
        "F-C-C-C:C:C:N",
        clauses![when(
            |p| !p.bond_in_ring(2) && ring_run(p, 3, 7, R::Pyridine) && straight(p, 1, 3),
            &[M::TwoFluoroOnePyridinFourYlEthane],
        )],
    );

    t.add(
        "Cl-C-C-C:C:C:N",
        clauses![when(
            |p| !p.bond_in_ring(2) && ring_run(p, 3, 7, R::Pyridine) && straight(p, 1, 3),
            &[M::TwoChloroOnePyridinFourYlEthane],
        )],
    );

    t.add(
        "Br-C-C-C:C:C:N",
        clauses![when(
            |p| !p.bond_in_ring(2) && ring_run(p, 3, 7, R::Pyridine) && straight(p, 1, 3),
            &[M::TwoBromoOnePyridinFourYlEthane],
        )],
    );

    t.add(
        "I-C-C-C:C:C:N",
        clauses![when(
            |p| !p.bond_in_ring(2) && ring_run(p, 3, 7, R::Pyridine) && straight(p, 1, 3),
            &[M::TwoIodoOnePyridinFourYlEthane],
        )],
    );

    t.add(
        "C-C-C-C-C-C:O",
        clauses![when(|p| !p.bond_in_ring(4) && ring_run(p, 5, 7, R::Furan) && straight(p, 1, 5), &[]).then(clauses![
            first_of(vec![
                when(|p| carboxyl_carbon(p, 0), &[M::FourCarboxyOneFuranTwoYlButane]),
                when(|p| ester_carbon(p, 0), &[M::FourAlkoxycarbonylOneFuranTwoYlButane]),
                when(|p| amide_carbon(p, 0), &[M::FourCarbamoylOneFuranTwoYlButane]),
                when(|p| aldehyde_carbon(p, 0), &[M::FourFormylOneFuranTwoYlButane]),
                when(|p| ketone_carbon(p, 0), &[M::FourAcylOneFuranTwoYlButane]),
                when(|p| cyano(p, 0), &[M::FourCyanoOneFuranTwoYlButane]),
            ]),
        ])],
    );

    t.add(
        "O-C-C-C-C-C:O",
        clauses![when(|p| !p.bond_in_ring(4) && ring_run(p, 5, 7, R::Furan) && straight(p, 1, 5), &[]).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 0), &[M::FourHydroxyOneFuranTwoYlButane]),
                when(|p| methoxy(p, 0), &[M::FourMethoxyOneFuranTwoYlButane]),
                when(|p| ether_oxygen(p, 0), &[M::FourAlkoxyOneFuranTwoYlButane]),
                when(|p| ester_oxygen(p, 0), &[M::FourAcyloxyOneFuranTwoYlButane]),
            ]),
        ])],
    );

    t.add(
        "N-C-C-C-C-C:O",
        clauses![when(|p| !p.bond_in_ring(4) && ring_run(p, 5, 7, R::Furan) && straight(p, 1, 5), &[]).then(clauses![
            first_of(vec![
                when(|p| primary_amine(p, 0), &[M::FourAminoOneFuranTwoYlButane]),
                when(|p| substituted_amine(p, 0), &[M::FourAlkylaminoOneFuranTwoYlButane]),
                when(|p| amide_nitrogen(p, 0), &[M::FourAcylaminoOneFuranTwoYlButane]),
            ]),
        ])],
    );

    t.add(
        "O:C-C-C-C-C-S",
        clauses![when(|p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Furan) && straight(p, 2, 6), &[]).then(clauses![
            first_of(vec![
                when(|p| thiol(p, 6), &[M::FourMercaptoOneFuranTwoYlButane]),
                when(|p| thioether(p, 6), &[M::FourAlkylthioOneFuranTwoYlButane]),
                when(|p| sulfonyl(p, 6), &[M::FourSulfonylOneFuranTwoYlButane]),
            ]),
        ])],
    );

    t.add(
        "F-C-C-C-C-C:O",
        clauses![when(
            |p| !p.bond_in_ring(4) && ring_run(p, 5, 7, R::Furan) && straight(p, 1, 5),
            &[M::FourFluoroOneFuranTwoYlButane],
        )],
    );

    t.add(
        "Cl-C-C-C-C-C:O",
        clauses![when(
            |p| !p.bond_in_ring(4) && ring_run(p, 5, 7, R::Furan) && straight(p, 1, 5),
            &[M::FourChloroOneFuranTwoYlButane],
        )],
    );

    t.add(
        "Br-C-C-C-C-C:O",
        clauses![when(
            |p| !p.bond_in_ring(4) && ring_run(p, 5, 7, R::Furan) && straight(p, 1, 5),
            &[M::FourBromoOneFuranTwoYlButane],
        )],
    );

    t.add(
        "I-C-C-C-C-C:O",
        clauses![when(
            |p| !p.bond_in_ring(4) && ring_run(p, 5, 7, R::Furan) && straight(p, 1, 5),
            &[M::FourIodoOneFuranTwoYlButane],
        )],
    );

    t.add(
        "C-C-C-C-C:C:O",
        clauses![when(|p| !p.bond_in_ring(3) && ring_run(p, 4, 7, R::Furan) && straight(p, 1, 4), &[]).then(clauses![
            first_of(vec![
                when(|p| carboxyl_carbon(p, 0), &[M::ThreeCarboxyOneFuranThreeYlPropane]),
                when(|p| ester_carbon(p, 0), &[M::ThreeAlkoxycarbonylOneFuranThreeYlPropane]),
                when(|p| amide_carbon(p, 0), &[M::ThreeCarbamoylOneFuranThreeYlPropane]),
                when(|p| aldehyde_carbon(p, 0), &[M::ThreeFormylOneFuranThreeYlPropane]),
                when(|p| ketone_carbon(p, 0), &[M::ThreeAcylOneFuranThreeYlPropane]),
                when(|p| cyano(p, 0), &[M::ThreeCyanoOneFuranThreeYlPropane]),
            ]),
        ])],
    );

    t.add(
        "O-C-C-C-C:C:O",
        clauses![when(|p| !p.bond_in_ring(3) && ring_run(p, 4, 7, R::Furan) && straight(p, 1, 4), &[]).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 0), &[M::ThreeHydroxyOneFuranThreeYlPropane]),
                when(|p| methoxy(p, 0), &[M::ThreeMethoxyOneFuranThreeYlPropane]),
                when(|p| ether_oxygen(p, 0), &[M::ThreeAlkoxyOneFuranThreeYlPropane]),
                when(|p| ester_oxygen(p, 0), &[M::ThreeAcyloxyOneFuranThreeYlPropane]),
            ]),
        ])],
    );

    t.add(
        "N-C-C-C-C:C:O",
        clauses![when(|p| !p.bond_in_ring(3) && ring_run(p, 4, 7, R::Furan) && straight(p, 1, 4), &[]).then(clauses![
            first_of(vec![
                when(|p| primary_amine(p, 0), &[M::ThreeAminoOneFuranThreeYlPropane]),
                when(|p| substituted_amine(p, 0), &[M::ThreeAlkylaminoOneFuranThreeYlPropane]),
                when(|p| amide_nitrogen(p, 0), &[M::ThreeAcylaminoOneFuranThreeYlPropane]),
            ]),
        ])],
    );

    t.add(
        "O:C:C-C-C-C-S",
        clauses![when(|p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Furan) && straight(p, 3, 6), &[]).then(clauses![
            first_of(vec![
                when(|p| thiol(p, 6), &[M::ThreeMercaptoOneFuranThreeYlPropane]),
                when(|p| thioether(p, 6), &[M::ThreeAlkylthioOneFuranThreeYlPropane]),
                when(|p| sulfonyl(p, 6), &[M::ThreeSulfonylOneFuranThreeYlPropane]),
            ]),
        ])],
    );

    t.add(
        "F-C-C-C-C:C:O",
        clauses![when(
            |p| !p.bond_in_ring(3) && ring_run(p, 4, 7, R::Furan) && straight(p, 1, 4),
            &[M::ThreeFluoroOneFuranThreeYlPropane],
        )],
    );

    t.add(
        "Cl-C-C-C-C:C:O",
        clauses![when(
            |p| !p.bond_in_ring(3) && ring_run(p, 4, 7, R::Furan) && straight(p, 1, 4),
            &[M::ThreeChloroOneFuranThreeYlPropane],
        )],
    );

    t.add(
        "Br-C-C-C-C:C:O",
        clauses![when(
            |p| !p.bond_in_ring(3) && ring_run(p, 4, 7, R::Furan) && straight(p, 1, 4),
            &[M::ThreeBromoOneFuranThreeYlPropane],
        )],
    );

    t.add(
        "I-C-C-C-C:C:O",
        clauses![when(
            |p| !p.bond_in_ring(3) && ring_run(p, 4, 7, R::Furan) && straight(p, 1, 4),
            &[M::ThreeIodoOneFuranThreeYlPropane],
        )],
    );

    t.add(
        "C-C-C-C-C-C:S",
        clauses![
            when(|p| !p.bond_in_ring(4) && ring_run(p, 5, 7, R::Thiophene) && straight(p, 1, 5), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 0), &[M::FourCarboxyOneThiophenTwoYlButane]),
                    when(|p| ester_carbon(p, 0), &[M::FourAlkoxycarbonylOneThiophenTwoYlButane]),
                    when(|p| amide_carbon(p, 0), &[M::FourCarbamoylOneThiophenTwoYlButane]),
                    when(|p| aldehyde_carbon(p, 0), &[M::FourFormylOneThiophenTwoYlButane]),
                    when(|p| ketone_carbon(p, 0), &[M::FourAcylOneThiophenTwoYlButane]),
                    when(|p| cyano(p, 0), &[M::FourCyanoOneThiophenTwoYlButane]),
                ]),
            ]),
        ],
    );

    t.add(
        "O-C-C-C-C-C:S",
        clauses![
            when(|p| !p.bond_in_ring(4) && ring_run(p, 5, 7, R::Thiophene) && straight(p, 1, 5), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 0), &[M::FourHydroxyOneThiophenTwoYlButane]),
                    when(|p| methoxy(p, 0), &[M::FourMethoxyOneThiophenTwoYlButane]),
                    when(|p| ether_oxygen(p, 0), &[M::FourAlkoxyOneThiophenTwoYlButane]),
                    when(|p| ester_oxygen(p, 0), &[M::FourAcyloxyOneThiophenTwoYlButane]),
                ]),
            ]),
        ],
    );

    t.add(
        "N-C-C-C-C-C:S",
        clauses![
            when(|p| !p.bond_in_ring(4) && ring_run(p, 5, 7, R::Thiophene) && straight(p, 1, 5), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 0), &[M::FourAminoOneThiophenTwoYlButane]),
                    when(|p| substituted_amine(p, 0), &[M::FourAlkylaminoOneThiophenTwoYlButane]),
                    when(|p| amide_nitrogen(p, 0), &[M::FourAcylaminoOneThiophenTwoYlButane]),
                ]),
            ]),
        ],
    );

    t.add(
        "S-C-C-C-C-C:S",
        clauses![
            when(|p| !p.bond_in_ring(4) && ring_run(p, 5, 7, R::Thiophene) && straight(p, 1, 5), &[]).then(clauses![
                first_of(vec![
                    when(|p| thiol(p, 0), &[M::FourMercaptoOneThiophenTwoYlButane]),
                    when(|p| thioether(p, 0), &[M::FourAlkylthioOneThiophenTwoYlButane]),
                    when(|p| sulfonyl(p, 0), &[M::FourSulfonylOneThiophenTwoYlButane]),
                ]),
            ]),
        ],
    );

    t.add(
        "F-C-C-C-C-C:S",
        clauses![when(
            |p| !p.bond_in_ring(4) && ring_run(p, 5, 7, R::Thiophene) && straight(p, 1, 5),
            &[M::FourFluoroOneThiophenTwoYlButane],
        )],
    );

    t.add(
        "Cl-C-C-C-C-C:S",
        clauses![when(
            |p| !p.bond_in_ring(4) && ring_run(p, 5, 7, R::Thiophene) && straight(p, 1, 5),
            &[M::FourChloroOneThiophenTwoYlButane],
        )],
    );

    t.add(
        "Br-C-C-C-C-C:S",
        clauses![when(
            |p| !p.bond_in_ring(4) && ring_run(p, 5, 7, R::Thiophene) && straight(p, 1, 5),
            &[M::FourBromoOneThiophenTwoYlButane],
        )],
    );

    t.add(
        "I-C-C-C-C-C:S",
        clauses![when(
            |p| !p.bond_in_ring(4) && ring_run(p, 5, 7, R::Thiophene) && straight(p, 1, 5),
            &[M::FourIodoOneThiophenTwoYlButane],
        )],
    );

    t.add(
        "C-C-C-C-C:C:S",
        clauses![
            when(|p| !p.bond_in_ring(3) && ring_run(p, 4, 7, R::Thiophene) && straight(p, 1, 4), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 0), &[M::ThreeCarboxyOneThiophenThreeYlPropane]),
                    when(|p| ester_carbon(p, 0), &[M::ThreeAlkoxycarbonylOneThiophenThreeYlPropane]),
                    when(|p| amide_carbon(p, 0), &[M::ThreeCarbamoylOneThiophenThreeYlPropane]),
                    when(|p| aldehyde_carbon(p, 0), &[M::ThreeFormylOneThiophenThreeYlPropane]),
                    when(|p| ketone_carbon(p, 0), &[M::ThreeAcylOneThiophenThreeYlPropane]),
                    when(|p| cyano(p, 0), &[M::ThreeCyanoOneThiophenThreeYlPropane]),
                ]),
            ]),
        ],
    );

    t.add(
        "O-C-C-C-C:C:S",
        clauses![
            when(|p| !p.bond_in_ring(3) && ring_run(p, 4, 7, R::Thiophene) && straight(p, 1, 4), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 0), &[M::ThreeHydroxyOneThiophenThreeYlPropane]),
                    when(|p| methoxy(p, 0), &[M::ThreeMethoxyOneThiophenThreeYlPropane]),
                    when(|p| ether_oxygen(p, 0), &[M::ThreeAlkoxyOneThiophenThreeYlPropane]),
                    when(|p| ester_oxygen(p, 0), &[M::ThreeAcyloxyOneThiophenThreeYlPropane]),
                ]),
            ]),
        ],
    );

    t.add(
        "N-C-C-C-C:C:S",
        clauses![
            when(|p| !p.bond_in_ring(3) && ring_run(p, 4, 7, R::Thiophene) && straight(p, 1, 4), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 0), &[M::ThreeAminoOneThiophenThreeYlPropane]),
                    when(|p| substituted_amine(p, 0), &[M::ThreeAlkylaminoOneThiophenThreeYlPropane]),
                    when(|p| amide_nitrogen(p, 0), &[M::ThreeAcylaminoOneThiophenThreeYlPropane]),
                ]),
            ]),
        ],
    );

    t.add(
        "S-C-C-C-C:C:S",
        clauses![
            when(|p| !p.bond_in_ring(3) && ring_run(p, 4, 7, R::Thiophene) && straight(p, 1, 4), &[]).then(clauses![
                first_of(vec![
                    when(|p| thiol(p, 0), &[M::ThreeMercaptoOneThiophenThreeYlPropane]),
                    when(|p| thioether(p, 0), &[M::ThreeAlkylthioOneThiophenThreeYlPropane]),
                    when(|p| sulfonyl(p, 0), &[M::ThreeSulfonylOneThiophenThreeYlPropane]),
                ]),
            ]),
        ],
    );

    t.add(
        "F-C-C-C-C:C:S",
        clauses![when(
            |p| !p.bond_in_ring(3) && ring_run(p, 4, 7, R::Thiophene) && straight(p, 1, 4),
            &[M::ThreeFluoroOneThiophenThreeYlPropane],
        )],
    );

    t.add(
        "Cl-C-C-C-C:C:S",
        clauses![when(
            |p| !p.bond_in_ring(3) && ring_run(p, 4, 7, R::Thiophene) && straight(p, 1, 4),
            &[M::ThreeChloroOneThiophenThreeYlPropane],
        )],
    );

    t.add(
        "Br-C-C-C-C:C:S",
        clauses![when(
            |p| !p.bond_in_ring(3) && ring_run(p, 4, 7, R::Thiophene) && straight(p, 1, 4),
            &[M::ThreeBromoOneThiophenThreeYlPropane],
        )],
    );

    t.add(
        "I-C-C-C-C:C:S",
        clauses![when(
            |p| !p.bond_in_ring(3) && ring_run(p, 4, 7, R::Thiophene) && straight(p, 1, 4),
            &[M::ThreeIodoOneThiophenThreeYlPropane],
        )],
    );

    t.add(
        "C-C-C-C-C:N:C",
        clauses![
            when(|p| !p.bond_in_ring(3) && ring_run(p, 4, 7, R::Pyrimidine) && straight(p, 1, 4), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 0), &[M::ThreeCarboxyOnePyrimidinTwoYlPropane]),
                    when(|p| ester_carbon(p, 0), &[M::ThreeAlkoxycarbonylOnePyrimidinTwoYlPropane]),
                    when(|p| amide_carbon(p, 0), &[M::ThreeCarbamoylOnePyrimidinTwoYlPropane]),
                    when(|p| aldehyde_carbon(p, 0), &[M::ThreeFormylOnePyrimidinTwoYlPropane]),
                    when(|p| ketone_carbon(p, 0), &[M::ThreeAcylOnePyrimidinTwoYlPropane]),
                    when(|p| cyano(p, 0), &[M::ThreeCyanoOnePyrimidinTwoYlPropane]),
                ]),
            ]),
            when(|p| !p.bond_in_ring(3) && ring_run(p, 4, 7, R::Thiazole) && straight(p, 1, 4), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 0), &[M::ThreeCarboxyOneThiazolTwoYlPropane]),
                    when(|p| ester_carbon(p, 0), &[M::ThreeAlkoxycarbonylOneThiazolTwoYlPropane]),
                    when(|p| amide_carbon(p, 0), &[M::ThreeCarbamoylOneThiazolTwoYlPropane]),
                    when(|p| aldehyde_carbon(p, 0), &[M::ThreeFormylOneThiazolTwoYlPropane]),
                    when(|p| ketone_carbon(p, 0), &[M::ThreeAcylOneThiazolTwoYlPropane]),
                    when(|p| cyano(p, 0), &[M::ThreeCyanoOneThiazolTwoYlPropane]),
                ]),
            ]),
        ],
    );

    t.add(
        "C:N:C-C-C-C-O",
        clauses![
            when(|p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Pyrimidine) && straight(p, 3, 6), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 6), &[M::ThreeHydroxyOnePyrimidinTwoYlPropane]),
                    when(|p| methoxy(p, 6), &[M::ThreeMethoxyOnePyrimidinTwoYlPropane]),
                    when(|p| ether_oxygen(p, 6), &[M::ThreeAlkoxyOnePyrimidinTwoYlPropane]),
                    when(|p| ester_oxygen(p, 6), &[M::ThreeAcyloxyOnePyrimidinTwoYlPropane]),
                ]),
            ]),
            when(|p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Thiazole) && straight(p, 3, 6), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 6), &[M::ThreeHydroxyOneThiazolTwoYlPropane]),
                    when(|p| methoxy(p, 6), &[M::ThreeMethoxyOneThiazolTwoYlPropane]),
                    when(|p| ether_oxygen(p, 6), &[M::ThreeAlkoxyOneThiazolTwoYlPropane]),
                    when(|p| ester_oxygen(p, 6), &[M::ThreeAcyloxyOneThiazolTwoYlPropane]),
                ]),
            ]),
        ],
    );

    t.add(
        "C:N:C-C-C-C-N",
        clauses![
            when(|p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Pyrimidine) && straight(p, 3, 6), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 6), &[M::ThreeAminoOnePyrimidinTwoYlPropane]),
                    when(|p| substituted_amine(p, 6), &[M::ThreeAlkylaminoOnePyrimidinTwoYlPropane]),
                    when(|p| amide_nitrogen(p, 6), &[M::ThreeAcylaminoOnePyrimidinTwoYlPropane]),
                ]),
            ]),
            when(|p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Thiazole) && straight(p, 3, 6), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 6), &[M::ThreeAminoOneThiazolTwoYlPropane]),
                    when(|p| substituted_amine(p, 6), &[M::ThreeAlkylaminoOneThiazolTwoYlPropane]),
                    when(|p| amide_nitrogen(p, 6), &[M::ThreeAcylaminoOneThiazolTwoYlPropane]),
                ]),
            ]),
        ],
    );

    t.add(
        "C:N:C-C-C-C-S",
        clauses![
            when(|p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Pyrimidine) && straight(p, 3, 6), &[]).then(clauses![
                first_of(vec![
                    when(|p| thiol(p, 6), &[M::ThreeMercaptoOnePyrimidinTwoYlPropane]),
                    when(|p| thioether(p, 6), &[M::ThreeAlkylthioOnePyrimidinTwoYlPropane]),
                    when(|p| sulfonyl(p, 6), &[M::ThreeSulfonylOnePyrimidinTwoYlPropane]),
                ]),
            ]),
            when(|p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Thiazole) && straight(p, 3, 6), &[]).then(clauses![
                first_of(vec![
                    when(|p| thiol(p, 6), &[M::ThreeMercaptoOneThiazolTwoYlPropane]),
                    when(|p| thioether(p, 6), &[M::ThreeAlkylthioOneThiazolTwoYlPropane]),
                    when(|p| sulfonyl(p, 6), &[M::ThreeSulfonylOneThiazolTwoYlPropane]),
                ]),
            ]),
        ],
    );

    t.add(
        "C:N:C-C-C-C-F",
        clauses![
            when(
                |p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Pyrimidine) && straight(p, 3, 6),
                &[M::ThreeFluoroOnePyrimidinTwoYlPropane],
            ),
            when(
                |p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Thiazole) && straight(p, 3, 6),
                &[M::ThreeFluoroOneThiazolTwoYlPropane],
            ),
        ],
    );

    t.add(
        "C:N:C-C-C-C-Cl",
        clauses![
            when(
                |p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Pyrimidine) && straight(p, 3, 6),
                &[M::ThreeChloroOnePyrimidinTwoYlPropane],
            ),
            when(
                |p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Thiazole) && straight(p, 3, 6),
                &[M::ThreeChloroOneThiazolTwoYlPropane],
            ),
        ],
    );

    t.add(
        "Br-C-C-C-C:N:C",
        clauses![
            when(
                |p| !p.bond_in_ring(3) && ring_run(p, 4, 7, R::Pyrimidine) && straight(p, 1, 4),
                &[M::ThreeBromoOnePyrimidinTwoYlPropane],
            ),
            when(
                |p| !p.bond_in_ring(3) && ring_run(p, 4, 7, R::Thiazole) && straight(p, 1, 4),
                &[M::ThreeBromoOneThiazolTwoYlPropane],
            ),
        ],
    );

    t.add(
        "C:N:C-C-C-C-I",
        clauses![
            when(
                |p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Pyrimidine) && straight(p, 3, 6),
                &[M::ThreeIodoOnePyrimidinTwoYlPropane],
            ),
            when(
                |p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Thiazole) && straight(p, 3, 6),
                &[M::ThreeIodoOneThiazolTwoYlPropane],
            ),
        ],
    );
}

fn eight(t: &mut RuleTable) {
    t.add(
        "C-C-C-C-C-C-C:N",
        clauses![
            when(|p| !p.bond_in_ring(5) && ring_run(p, 6, 8, R::Pyridine) && straight(p, 1, 6), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 0), &[M::FiveCarboxyOnePyridinTwoYlPentane]),
                    when(|p| ester_carbon(p, 0), &[M::FiveAlkoxycarbonylOnePyridinTwoYlPentane]),
                    when(|p| amide_carbon(p, 0), &[M::FiveCarbamoylOnePyridinTwoYlPentane]),
                    when(|p| aldehyde_carbon(p, 0), &[M::FiveFormylOnePyridinTwoYlPentane]),
                    when(|p| ketone_carbon(p, 0), &[M::FiveAcylOnePyridinTwoYlPentane]),
                    when(|p| cyano(p, 0), &[M::FiveCyanoOnePyridinTwoYlPentane]),
                ]),
            ]),
            when(|p| !p.bond_in_ring(5) && ring_run(p, 6, 8, R::Pyrrole) && straight(p, 1, 6), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 0), &[M::FiveCarboxyOnePyrrolTwoYlPentane]),
                    when(|p| ester_carbon(p, 0), &[M::FiveAlkoxycarbonylOnePyrrolTwoYlPentane]),
                    when(|p| amide_carbon(p, 0), &[M::FiveCarbamoylOnePyrrolTwoYlPentane]),
                    when(|p| aldehyde_carbon(p, 0), &[M::FiveFormylOnePyrrolTwoYlPentane]),
                    when(|p| ketone_carbon(p, 0), &[M::FiveAcylOnePyrrolTwoYlPentane]),
                    when(|p| cyano(p, 0), &[M::FiveCyanoOnePyrrolTwoYlPentane]),
                ]),
            ]),
        ],
    );

    t.add(
        "N:C-C-C-C-C-C-O",
        clauses![
            when(|p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Pyridine) && straight(p, 2, 7), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 7), &[M::FiveHydroxyOnePyridinTwoYlPentane]),
                    when(|p| methoxy(p, 7), &[M::FiveMethoxyOnePyridinTwoYlPentane]),
                    when(|p| ether_oxygen(p, 7), &[M::FiveAlkoxyOnePyridinTwoYlPentane]),
                    when(|p| ester_oxygen(p, 7), &[M::FiveAcyloxyOnePyridinTwoYlPentane]),
                ]),
            ]),
            when(|p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Pyrrole) && straight(p, 2, 7), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 7), &[M::FiveHydroxyOnePyrrolTwoYlPentane]),
                    when(|p| methoxy(p, 7), &[M::FiveMethoxyOnePyrrolTwoYlPentane]),
                    when(|p| ether_oxygen(p, 7), &[M::FiveAlkoxyOnePyrrolTwoYlPentane]),
                    when(|p| ester_oxygen(p, 7), &[M::FiveAcyloxyOnePyrrolTwoYlPentane]),
                ]),
            ]),
        ],
    );

    t.add(
        "N-C-C-C-C-C-C:N",
        clauses![
            when(|p| !p.bond_in_ring(5) && ring_run(p, 6, 8, R::Pyridine) && straight(p, 1, 6), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 0), &[M::FiveAminoOnePyridinTwoYlPentane]),
                    when(|p| substituted_amine(p, 0), &[M::FiveAlkylaminoOnePyridinTwoYlPentane]),
                    when(|p| amide_nitrogen(p, 0), &[M::FiveAcylaminoOnePyridinTwoYlPentane]),
                ]),
            ]),
            when(|p| !p.bond_in_ring(5) && ring_run(p, 6, 8, R::Pyrrole) && straight(p, 1, 6), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 0), &[M::FiveAminoOnePyrrolTwoYlPentane]),
                    when(|p| substituted_amine(p, 0), &[M::FiveAlkylaminoOnePyrrolTwoYlPentane]),
                    when(|p| amide_nitrogen(p, 0), &[M::FiveAcylaminoOnePyrrolTwoYlPentane]),
                ]),
            ]),
        ],
    );

    t.add(
        "N:C-C-C-C-C-C-S",
        clauses![
            when(|p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Pyridine) && straight(p, 2, 7), &[]).then(clauses![
                first_of(vec![
                    when(|p| thiol(p, 7), &[M::FiveMercaptoOnePyridinTwoYlPentane]),
                    when(|p| thioether(p, 7), &[M::FiveAlkylthioOnePyridinTwoYlPentane]),
                    when(|p| sulfonyl(p, 7), &[M::FiveSulfonylOnePyridinTwoYlPentane]),
                ]),
            ]),
            when(|p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Pyrrole) && straight(p, 2, 7), &[]).then(clauses![
                first_of(vec![
                    when(|p| thiol(p, 7), &[M::FiveMercaptoOnePyrrolTwoYlPentane]),
                    when(|p| thioether(p, 7), &[M::FiveAlkylthioOnePyrrolTwoYlPentane]),
                    when(|p| sulfonyl(p, 7), &[M::FiveSulfonylOnePyrrolTwoYlPentane]),
                ]),
            ]),
        ],
    );

    t.add(
        "F-C-C-C-C-C-C:N",
        clauses![
            when(
                |p| !p.bond_in_ring(5) && ring_run(p, 6, 8, R::Pyridine) && straight(p, 1, 6),
                &[M::FiveFluoroOnePyridinTwoYlPentane],
            ),
            when(
                |p| !p.bond_in_ring(5) && ring_run(p, 6, 8, R::Pyrrole) && straight(p, 1, 6),
                &[M::FiveFluoroOnePyrrolTwoYlPentane],
            ),
        ],
    );

    t.add(
        "Cl-C-C-C-C-C-C:N",
        clauses![
            when(
                |p| !p.bond_in_ring(5) && ring_run(p, 6, 8, R::Pyridine) && straight(p, 1, 6),
                &[M::FiveChloroOnePyridinTwoYlPentane],
            ),
            when(
                |p| !p.bond_in_ring(5) && ring_run(p, 6, 8, R::Pyrrole) && straight(p, 1, 6),
                &[M::FiveChloroOnePyrrolTwoYlPentane],
            ),
        ],
    );

    t.add(
        "Br-C-C-C-C-C-C:N",
        clauses![
            when(
                |p| !p.bond_in_ring(5) && ring_run(p, 6, 8, R::Pyridine) && straight(p, 1, 6),
                &[M::FiveBromoOnePyridinTwoYlPentane],
            ),
            when(
                |p| !p.bond_in_ring(5) && ring_run(p, 6, 8, R::Pyrrole) && straight(p, 1, 6),
                &[M::FiveBromoOnePyrrolTwoYlPentane],
            ),
        ],
    );

    t.add(
        "I-C-C-C-C-C-C:N",
        clauses![
            when(
                |p| !p.bond_in_ring(5) && ring_run(p, 6, 8, R::Pyridine) && straight(p, 1, 6),
                &[M::FiveIodoOnePyridinTwoYlPentane],
            ),
            when(
                |p| !p.bond_in_ring(5) && ring_run(p, 6, 8, R::Pyrrole) && straight(p, 1, 6),
                &[M::FiveIodoOnePyrrolTwoYlPentane],
            ),
        ],
    );

    t.add(
        "C-C-C-C-C-C:C:N",
        clauses![
            when(|p| !p.bond_in_ring(4) && ring_run(p, 5, 8, R::Pyridine) && straight(p, 1, 5), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 0), &[M::FourCarboxyOnePyridinThreeYlButane]),
                    when(|p| ester_carbon(p, 0), &[M::FourAlkoxycarbonylOnePyridinThreeYlButane]),
                    when(|p| amide_carbon(p, 0), &[M::FourCarbamoylOnePyridinThreeYlButane]),
                    when(|p| aldehyde_carbon(p, 0), &[M::FourFormylOnePyridinThreeYlButane]),
                    when(|p| ketone_carbon(p, 0), &[M::FourAcylOnePyridinThreeYlButane]),
                    when(|p| cyano(p, 0), &[M::FourCyanoOnePyridinThreeYlButane]),
                ]),
            ]),
        ],
    );

    t.add(
        "N:C:C-C-C-C-C-O",
        clauses![
            when(|p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Pyridine) && straight(p, 3, 7), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 7), &[M::FourHydroxyOnePyridinThreeYlButane]),
                    when(|p| methoxy(p, 7), &[M::FourMethoxyOnePyridinThreeYlButane]),
                    when(|p| ether_oxygen(p, 7), &[M::FourAlkoxyOnePyridinThreeYlButane]),
                    when(|p| ester_oxygen(p, 7), &[M::FourAcyloxyOnePyridinThreeYlButane]),
                ]),
            ]),
        ],
    );

    t.add(
        "N-C-C-C-C-C:C:N",
        clauses![
            when(|p| !p.bond_in_ring(4) && ring_run(p, 5, 8, R::Pyridine) && straight(p, 1, 5), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 0), &[M::FourAminoOnePyridinThreeYlButane]),
                    when(|p| substituted_amine(p, 0), &[M::FourAlkylaminoOnePyridinThreeYlButane]),
                    when(|p| amide_nitrogen(p, 0), &[M::FourAcylaminoOnePyridinThreeYlButane]),
                ]),
            ]),
        ],
    );

    t.add(
        "N:C:C-C-C-C-C-S",
        clauses![
            when(|p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Pyridine) && straight(p, 3, 7), &[]).then(clauses![
                first_of(vec![
                    when(|p| thiol(p, 7), &[M::FourMercaptoOnePyridinThreeYlButane]),
                    when(|p| thioether(p, 7), &[M::FourAlkylthioOnePyridinThreeYlButane]),
                    when(|p| sulfonyl(p, 7), &[M::FourSulfonylOnePyridinThreeYlButane]),
                ]),
            ]),
        ],
    );

    t.add(
        "F-C-C-C-C-C:C:N",
        clauses![when(
            |p| !p.bond_in_ring(4) && ring_run(p, 5, 8, R::Pyridine) && straight(p, 1, 5),
            &[M::FourFluoroOnePyridinThreeYlButane],
        )],
    );

    t.add(
        "Cl-C-C-C-C-C:C:N",
        clauses![when(
            |p| !p.bond_in_ring(4) && ring_run(p, 5, 8, R::Pyridine) && straight(p, 1, 5),
            &[M::FourChloroOnePyridinThreeYlButane],
        )],
    );

    t.add(
        "Br-C-C-C-C-C:C:N",
        clauses![when(
            |p| !p.bond_in_ring(4) && ring_run(p, 5, 8, R::Pyridine) && straight(p, 1, 5),
            &[M::FourBromoOnePyridinThreeYlButane],
        )],
    );

    t.add(
        "I-C-C-C-C-C:C:N",
        clauses![when(
            |p| !p.bond_in_ring(4) && ring_run(p, 5, 8, R::Pyridine) && straight(p, 1, 5),
            &[M::FourIodoOnePyridinThreeYlButane],
        )],
    );

    t.add(
        "C-C-C-C-C:C:C:N",
        clauses![
            when(|p| !p.bond_in_ring(3) && ring_run(p, 4, 8, R::Pyridine) && straight(p, 1, 4), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 0), &[M::ThreeCarboxyOnePyridinFourYlPropane]),
                    when(|p| ester_carbon(p, 0), &[M::ThreeAlkoxycarbonylOnePyridinFourYlPropane]),
                    when(|p| amide_carbon(p, 0), &[M::ThreeCarbamoylOnePyridinFourYlPropane]),
                    when(|p| aldehyde_carbon(p, 0), &[M::ThreeFormylOnePyridinFourYlPropane]),
                    when(|p| ketone_carbon(p, 0), &[M::ThreeAcylOnePyridinFourYlPropane]),
                    when(|p| cyano(p, 0), &[M::ThreeCyanoOnePyridinFourYlPropane]),
                ]),
            ]),
        ],
    );

    t.add(
        "N:C:C:C-C-C-C-O",
        clauses![
            when(|p| !p.bond_in_ring(3) && ring_run(p, 0, 4, R::Pyridine) && straight(p, 4, 7), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 7), &[M::ThreeHydroxyOnePyridinFourYlPropane]),
                    when(|p| methoxy(p, 7), &[M::ThreeMethoxyOnePyridinFourYlPropane]),
                    when(|p| ether_oxygen(p, 7), &[M::ThreeAlkoxyOnePyridinFourYlPropane]),
                    when(|p| ester_oxygen(p, 7), &[M::ThreeAcyloxyOnePyridinFourYlPropane]),
                ]),
            ]),
        ],
    );

    t.add(
        "N-C-C-C-C:C:C:N",
        clauses![
            when(|p| !p.bond_in_ring(3) && ring_run(p, 4, 8, R::Pyridine) && straight(p, 1, 4), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 0), &[M::ThreeAminoOnePyridinFourYlPropane]),
                    when(|p| substituted_amine(p, 0), &[M::ThreeAlkylaminoOnePyridinFourYlPropane]),
                    when(|p| amide_nitrogen(p, 0), &[M::ThreeAcylaminoOnePyridinFourYlPropane]),
                ]),
            ]),
        ],
    );

    t.add(
        "N:C:C:C-C-C-C-S",
        clauses![
            when(|p| !p.bond_in_ring(3) && ring_run(p, 0, 4, R::Pyridine) && straight(p, 4, 7), &[]).then(clauses![
                first_of(vec![
                    when(|p| thiol(p, 7), &[M::ThreeMercaptoOnePyridinFourYlPropane]),
                    when(|p| thioether(p, 7), &[M::ThreeAlkylthioOnePyridinFourYlPropane]),
                    when(|p| sulfonyl(p, 7), &[M::ThreeSulfonylOnePyridinFourYlPropane]),
                ]),
            ]),
        ],
    );

    t.add(
        "F-C-C-C-C:C:C:N",
        clauses![when(
            |p| !p.bond_in_ring(3) && ring_run(p, 4, 8, R::Pyridine) && straight(p, 1, 4),
            &[M::ThreeFluoroOnePyridinFourYlPropane],
        )],
    );

    t.add(
        "Cl-C-C-C-C:C:C:N",
        clauses![when(
            |p| !p.bond_in_ring(3) && ring_run(p, 4, 8, R::Pyridine) && straight(p, 1, 4),
            &[M::ThreeChloroOnePyridinFourYlPropane],
        )],
    );

    t.add(
        "Br-C-C-C-C:C:C:N",
        clauses![when(
            |p| !p.bond_in_ring(3) && ring_run(p, 4, 8, R::Pyridine) && straight(p, 1, 4),
            &[M::ThreeBromoOnePyridinFourYlPropane],
        )],
    );

    t.add(
        "I-C-C-C-C:C:C:N",
        clauses![when(
            |p| !p.bond_in_ring(3) && ring_run(p, 4, 8, R::Pyridine) && straight(p, 1, 4),
            &[M::ThreeIodoOnePyridinFourYlPropane],
        )],
    );

    t.add(
        "C-C-C-C-C-C-C:O",
        clauses![when(|p| !p.bond_in_ring(5) && ring_run(p, 6, 8, R::Furan) && straight(p, 1, 6), &[]).then(clauses![
            first_of(vec![
                when(|p| carboxyl_carbon(p, 0), &[M::FiveCarboxyOneFuranTwoYlPentane]),
                when(|p| ester_carbon(p, 0), &[M::FiveAlkoxycarbonylOneFuranTwoYlPentane]),
                when(|p| amide_carbon(p, 0), &[M::FiveCarbamoylOneFuranTwoYlPentane]),
                when(|p| aldehyde_carbon(p, 0), &[M::FiveFormylOneFuranTwoYlPentane]),
                when(|p| ketone_carbon(p, 0), &[M::FiveAcylOneFuranTwoYlPentane]),
                when(|p| cyano(p, 0), &[M::FiveCyanoOneFuranTwoYlPentane]),
            ]),
        ])],
    );

    t.add(
        "O-C-C-C-C-C-C:O",
        clauses![when(|p| !p.bond_in_ring(5) && ring_run(p, 6, 8, R::Furan) && straight(p, 1, 6), &[]).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 0), &[M::FiveHydroxyOneFuranTwoYlPentane]),
                when(|p| methoxy(p, 0), &[M::FiveMethoxyOneFuranTwoYlPentane]),
                when(|p| ether_oxygen(p, 0), &[M::FiveAlkoxyOneFuranTwoYlPentane]),
                when(|p| ester_oxygen(p, 0), &[M::FiveAcyloxyOneFuranTwoYlPentane]),
            ]),
        ])],
    );

    t.add(
        "N-C-C-C-C-C-C:O",
        clauses![when(|p| !p.bond_in_ring(5) && ring_run(p, 6, 8, R::Furan) && straight(p, 1, 6), &[]).then(clauses![
            first_of(vec![
                when(|p| primary_amine(p, 0), &[M::FiveAminoOneFuranTwoYlPentane]),
                when(|p| substituted_amine(p, 0), &[M::FiveAlkylaminoOneFuranTwoYlPentane]),
                when(|p| amide_nitrogen(p, 0), &[M::FiveAcylaminoOneFuranTwoYlPentane]),
            ]),
        ])],
    );

    t.add(
        "O:C-C-C-C-C-C-S",
        clauses![when(|p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Furan) && straight(p, 2, 7), &[]).then(clauses![
            first_of(vec![
                when(|p| thiol(p, 7), &[M::FiveMercaptoOneFuranTwoYlPentane]),
                when(|p| thioether(p, 7), &[M::FiveAlkylthioOneFuranTwoYlPentane]),
                when(|p| sulfonyl(p, 7), &[M::FiveSulfonylOneFuranTwoYlPentane]),
            ]),
        ])],
    );

    t.add(
        "F-C-C-C-C-C-C:O",
        clauses![when(
            |p| !p.bond_in_ring(5) && ring_run(p, 6, 8, R::Furan) && straight(p, 1, 6),
            &[M::FiveFluoroOneFuranTwoYlPentane],
        )],
    );

    t.add(
        "Cl-C-C-C-C-C-C:O",
        clauses![when(
            |p| !p.bond_in_ring(5) && ring_run(p, 6, 8, R::Furan) && straight(p, 1, 6),
            &[M::FiveChloroOneFuranTwoYlPentane],
        )],
    );

    t.add(
        "Br-C-C-C-C-C-C:O",
        clauses![when(
            |p| !p.bond_in_ring(5) && ring_run(p, 6, 8, R::Furan) && straight(p, 1, 6),
            &[M::FiveBromoOneFuranTwoYlPentane],
        )],
    );

    t.add(
        "I-C-C-C-C-C-C:O",
        clauses![when(
            |p| !p.bond_in_ring(5) && ring_run(p, 6, 8, R::Furan) && straight(p, 1, 6),
            &[M::FiveIodoOneFuranTwoYlPentane],
        )],
    );

    t.add(
        "C-C-C-C-C-C:C:O",
        clauses![when(|p| !p.bond_in_ring(4) && ring_run(p, 5, 8, R::Furan) && straight(p, 1, 5), &[]).then(clauses![
            first_of(vec![
                when(|p| carboxyl_carbon(p, 0), &[M::FourCarboxyOneFuranThreeYlButane]),
                when(|p| ester_carbon(p, 0), &[M::FourAlkoxycarbonylOneFuranThreeYlButane]),
                when(|p| amide_carbon(p, 0), &[M::FourCarbamoylOneFuranThreeYlButane]),
                when(|p| aldehyde_carbon(p, 0), &[M::FourFormylOneFuranThreeYlButane]),
                when(|p| ketone_carbon(p, 0), &[M::FourAcylOneFuranThreeYlButane]),
                when(|p| cyano(p, 0), &[M::FourCyanoOneFuranThreeYlButane]),
            ]),
        ])],
    );

    t.add(
        "O-C-C-C-C-C:C:O",
        clauses![when(|p| !p.bond_in_ring(4) && ring_run(p, 5, 8, R::Furan) && straight(p, 1, 5), &[]).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 0), &[M::FourHydroxyOneFuranThreeYlButane]),
                when(|p| methoxy(p, 0), &[M::FourMethoxyOneFuranThreeYlButane]),
                when(|p| ether_oxygen(p, 0), &[M::FourAlkoxyOneFuranThreeYlButane]),
                when(|p| ester_oxygen(p, 0), &[M::FourAcyloxyOneFuranThreeYlButane]),
            ]),
        ])],
    );

    t.add(
        "N-C-C-C-C-C:C:O",
        clauses![when(|p| !p.bond_in_ring(4) && ring_run(p, 5, 8, R::Furan) && straight(p, 1, 5), &[]).then(clauses![
            first_of(vec![
                when(|p| primary_amine(p, 0), &[M::FourAminoOneFuranThreeYlButane]),
                when(|p| substituted_amine(p, 0), &[M::FourAlkylaminoOneFuranThreeYlButane]),
                when(|p| amide_nitrogen(p, 0), &[M::FourAcylaminoOneFuranThreeYlButane]),
            ]),
        ])],
    );

    t.add(
        "O:C:C-C-C-C-C-S",
        clauses![when(|p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Furan) && straight(p, 3, 7), &[]).then(clauses![
            first_of(vec![
                when(|p| thiol(p, 7), &[M::FourMercaptoOneFuranThreeYlButane]),
                when(|p| thioether(p, 7), &[M::FourAlkylthioOneFuranThreeYlButane]),
                when(|p| sulfonyl(p, 7), &[M::FourSulfonylOneFuranThreeYlButane]),
            ]),
        ])],
    );

    t.add(
        "F-C-C-C-C-C:C:O",
        clauses![when(
            |p| !p.bond_in_ring(4) && ring_run(p, 5, 8, R::Furan) && straight(p, 1, 5),
            &[M::FourFluoroOneFuranThreeYlButane],
        )],
    );

    t.add(
        "Cl-C-C-C-C-C:C:O",
        clauses![when(
            |p| !p.bond_in_ring(4) && ring_run(p, 5, 8, R::Furan) && straight(p, 1, 5),
            &[M::FourChloroOneFuranThreeYlButane],
        )],
    );

    t.add(
        "Br-C-C-C-C-C:C:O",
        clauses![when(
            |p| !p.bond_in_ring(4) && ring_run(p, 5, 8, R::Furan) && straight(p, 1, 5),
            &[M::FourBromoOneFuranThreeYlButane],
        )],
    );

    t.add(
        "I-C-C-C-C-C:C:O",
        clauses![when(
            |p| !p.bond_in_ring(4) && ring_run(p, 5, 8, R::Furan) && straight(p, 1, 5),
            &[M::FourIodoOneFuranThreeYlButane],
        )],
    );

    t.add(
        "C-C-C-C-C-C-C:S",
        clauses![
            when(|p| !p.bond_in_ring(5) && ring_run(p, 6, 8, R::Thiophene) && straight(p, 1, 6), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 0), &[M::FiveCarboxyOneThiophenTwoYlPentane]),
                    when(|p| ester_carbon(p, 0), &[M::FiveAlkoxycarbonylOneThiophenTwoYlPentane]),
                    when(|p| amide_carbon(p, 0), &[M::FiveCarbamoylOneThiophenTwoYlPentane]),
                    when(|p| aldehyde_carbon(p, 0), &[M::FiveFormylOneThiophenTwoYlPentane]),
                    when(|p| ketone_carbon(p, 0), &[M::FiveAcylOneThiophenTwoYlPentane]),
                    when(|p| cyano(p, 0), &[M::FiveCyanoOneThiophenTwoYlPentane]),
                ]),
            ]),
        ],
    );

    t.add(
        "O-C-C-C-C-C-C:S",
        clauses![
            when(|p| !p.bond_in_ring(5) && ring_run(p, 6, 8, R::Thiophene) && straight(p, 1, 6), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 0), &[M::FiveHydroxyOneThiophenTwoYlPentane]),
                    when(|p| methoxy(p, 0), &[M::FiveMethoxyOneThiophenTwoYlPentane]),
                    when(|p| ether_oxygen(p, 0), &[M::FiveAlkoxyOneThiophenTwoYlPentane]),
                    when(|p| ester_oxygen(p, 0), &[M::FiveAcyloxyOneThiophenTwoYlPentane]),
                ]),
            ]),
        ],
    );

    t.add(
        "N-C-C-C-C-C-C:S",
        clauses![
            when(|p| !p.bond_in_ring(5) && ring_run(p, 6, 8, R::Thiophene) && straight(p, 1, 6), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 0), &[M::FiveAminoOneThiophenTwoYlPentane]),
                    when(|p| substituted_amine(p, 0), &[M::FiveAlkylaminoOneThiophenTwoYlPentane]),
                    when(|p| amide_nitrogen(p, 0), &[M::FiveAcylaminoOneThiophenTwoYlPentane]),
                ]),
            ]),
        ],
    );

    t.add(
        "S-C-C-C-C-C-C:S",
        clauses![
            when(|p| !p.bond_in_ring(5) && ring_run(p, 6, 8, R::Thiophene) && straight(p, 1, 6), &[]).then(clauses![
                first_of(vec![
                    when(|p| thiol(p, 0), &[M::FiveMercaptoOneThiophenTwoYlPentane]),
                    when(|p| thioether(p, 0), &[M::FiveAlkylthioOneThiophenTwoYlPentane]),
                    when(|p| sulfonyl(p, 0), &[M::FiveSulfonylOneThiophenTwoYlPentane]),
                ]),
            ]),
        ],
    );

    t.add(
        "F-C-C-C-C-C-C:S",
        clauses![when(
            |p| !p.bond_in_ring(5) && ring_run(p, 6, 8, R::Thiophene) && straight(p, 1, 6),
            &[M::FiveFluoroOneThiophenTwoYlPentane],
        )],
    );

    t.add(
        "Cl-C-C-C-C-C-C:S",
        clauses![when(
            |p| !p.bond_in_ring(5) && ring_run(p, 6, 8, R::Thiophene) && straight(p, 1, 6),
            &[M::FiveChloroOneThiophenTwoYlPentane],
        )],
    );

    t.add(
        "Br-C-C-C-C-C-C:S",
        clauses![when(
            |p| !p.bond_in_ring(5) && ring_run(p, 6, 8, R::Thiophene) && straight(p, 1, 6),
            &[M::FiveBromoOneThiophenTwoYlPentane],
        )],
    );

    t.add(
        "I-C-C-C-C-C-C:S",
        clauses![when(
            |p| !p.bond_in_ring(5) && ring_run(p, 6, 8, R::Thiophene) && straight(p, 1, 6),
            &[M::FiveIodoOneThiophenTwoYlPentane],
        )],
    );

    t.add(
        "C-C-C-C-C-C:C:S",
        clauses![
            when(|p| !p.bond_in_ring(4) && ring_run(p, 5, 8, R::Thiophene) && straight(p, 1, 5), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 0), &[M::FourCarboxyOneThiophenThreeYlButane]),
                    when(|p| ester_carbon(p, 0), &[M::FourAlkoxycarbonylOneThiophenThreeYlButane]),
                    when(|p| amide_carbon(p, 0), &[M::FourCarbamoylOneThiophenThreeYlButane]),
                    when(|p| aldehyde_carbon(p, 0), &[M::FourFormylOneThiophenThreeYlButane]),
                    when(|p| ketone_carbon(p, 0), &[M::FourAcylOneThiophenThreeYlButane]),
                    when(|p| cyano(p, 0), &[M::FourCyanoOneThiophenThreeYlButane]),
                ]),
            ]),
        ],
    );

    t.add(
        "O-C-C-C-C-C:C:S",
        clauses![
            when(|p| !p.bond_in_ring(4) && ring_run(p, 5, 8, R::Thiophene) && straight(p, 1, 5), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 0), &[M::FourHydroxyOneThiophenThreeYlButane]),
                    when(|p| methoxy(p, 0), &[M::FourMethoxyOneThiophenThreeYlButane]),
                    when(|p| ether_oxygen(p, 0), &[M::FourAlkoxyOneThiophenThreeYlButane]),
                    when(|p| ester_oxygen(p, 0), &[M::FourAcyloxyOneThiophenThreeYlButane]),
                ]),
            ]),
        ],
    );

    t.add(
        "N-C-C-C-C-C:C:S",
        clauses![
            when(|p| !p.bond_in_ring(4) && ring_run(p, 5, 8, R::Thiophene) && straight(p, 1, 5), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 0), &[M::FourAminoOneThiophenThreeYlButane]),
                    when(|p| substituted_amine(p, 0), &[M::FourAlkylaminoOneThiophenThreeYlButane]),
                    when(|p| amide_nitrogen(p, 0), &[M::FourAcylaminoOneThiophenThreeYlButane]),
                ]),
            ]),
        ],
    );

    t.add(
        "S-C-C-C-C-C:C:S",
        clauses![
            when(|p| !p.bond_in_ring(4) && ring_run(p, 5, 8, R::Thiophene) && straight(p, 1, 5), &[]).then(clauses![
                first_of(vec![
                    when(|p| thiol(p, 0), &[M::FourMercaptoOneThiophenThreeYlButane]),
                    when(|p| thioether(p, 0), &[M::FourAlkylthioOneThiophenThreeYlButane]),
                    when(|p| sulfonyl(p, 0), &[M::FourSulfonylOneThiophenThreeYlButane]),
                ]),
            ]),
        ],
    );

    t.add(
        "F-C-C-C-C-C:C:S",
        clauses![when(
            |p| !p.bond_in_ring(4) && ring_run(p, 5, 8, R::Thiophene) && straight(p, 1, 5),
            &[M::FourFluoroOneThiophenThreeYlButane],
        )],
    );

    t.add(
        "Cl-C-C-C-C-C:C:S",
        clauses![when(
            |p| !p.bond_in_ring(4) && ring_run(p, 5, 8, R::Thiophene) && straight(p, 1, 5),
            &[M::FourChloroOneThiophenThreeYlButane],
        )],
    );

    t.add(
        "Br-C-C-C-C-C:C:S",
        clauses![when(
            |p| !p.bond_in_ring(4) && ring_run(p, 5, 8, R::Thiophene) && straight(p, 1, 5),
            &[M::FourBromoOneThiophenThreeYlButane],
        )],
    );

    t.add(
        "I-C-C-C-C-C:C:S",
        clauses![when(
            |p| !p.bond_in_ring(4) && ring_run(p, 5, 8, R::Thiophene) && straight(p, 1, 5),
            &[M::FourIodoOneThiophenThreeYlButane],
        )],
    );

    t.add(
        "C-C-C-C-C-C:N:C",
        clauses![
            when(|p| !p.bond_in_ring(4) && ring_run(p, 5, 8, R::Pyrimidine) && straight(p, 1, 5), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 0), &[M::FourCarboxyOnePyrimidinTwoYlButane]),
                    when(|p| ester_carbon(p, 0), &[M::FourAlkoxycarbonylOnePyrimidinTwoYlButane]),
                    when(|p| amide_carbon(p, 0), &[M::FourCarbamoylOnePyrimidinTwoYlButane]),
                    when(|p| aldehyde_carbon(p, 0), &[M::FourFormylOnePyrimidinTwoYlButane]),
                    when(|p| ketone_carbon(p, 0), &[M::FourAcylOnePyrimidinTwoYlButane]),
                    when(|p| cyano(p, 0), &[M::FourCyanoOnePyrimidinTwoYlButane]),
                ]),
            ]),
            when(|p| !p.bond_in_ring(4) && ring_run(p, 5, 8, R::Thiazole) && straight(p, 1, 5), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 0), &[M::FourCarboxyOneThiazolTwoYlButane]),
                    when(|p| ester_carbon(p, 0), &[M::FourAlkoxycarbonylOneThiazolTwoYlButane]),
                    when(|p| amide_carbon(p, 0), &[M::FourCarbamoylOneThiazolTwoYlButane]),
                    when(|p| aldehyde_carbon(p, 0), &[M::FourFormylOneThiazolTwoYlButane]),
                    when(|p| ketone_carbon(p, 0), &[M::FourAcylOneThiazolTwoYlButane]),
                    when(|p| cyano(p, 0), &[M::FourCyanoOneThiazolTwoYlButane]),
                ]),
            ]),
        ],
    );

    t.add(
        "C:N:C-C-C-C-C-O",
        clauses![
            when(|p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Pyrimidine) && straight(p, 3, 7), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 7), &[M::FourHydroxyOnePyrimidinTwoYlButane]),
                    when(|p| methoxy(p, 7), &[M::FourMethoxyOnePyrimidinTwoYlButane]),
                    when(|p| ether_oxygen(p, 7), &[M::FourAlkoxyOnePyrimidinTwoYlButane]),
                    when(|p| ester_oxygen(p, 7), &[M::FourAcyloxyOnePyrimidinTwoYlButane]),
                ]),
            ]),
            when(|p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Thiazole) && straight(p, 3, 7), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 7), &[M::FourHydroxyOneThiazolTwoYlButane]),
                    when(|p| methoxy(p, 7), &[M::FourMethoxyOneThiazolTwoYlButane]),
                    when(|p| ether_oxygen(p, 7), &[M::FourAlkoxyOneThiazolTwoYlButane]),
                    when(|p| ester_oxygen(p, 7), &[M::FourAcyloxyOneThiazolTwoYlButane]),
                ]),
            ]),
        ],
    );

    t.add(
        "C:N:C-C-C-C-C-N",
        clauses![
            when(|p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Pyrimidine) && straight(p, 3, 7), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 7), &[M::FourAminoOnePyrimidinTwoYlButane]),
                    when(|p| substituted_amine(p, 7), &[M::FourAlkylaminoOnePyrimidinTwoYlButane]),
                    when(|p| amide_nitrogen(p, 7), &[M::FourAcylaminoOnePyrimidinTwoYlButane]),
                ]),
            ]),
            when(|p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Thiazole) && straight(p, 3, 7), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 7), &[M::FourAminoOneThiazolTwoYlButane]),
                    when(|p| substituted_amine(p, 7), &[M::FourAlkylaminoOneThiazolTwoYlButane]),
                    when(|p| amide_nitrogen(p, 7), &[M::FourAcylaminoOneThiazolTwoYlButane]),
                ]),
            ]),
        ],
    );

    t.add(
        "C:N:C-C-C-C-C-S",
        clauses![
            when(|p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Pyrimidine) && straight(p, 3, 7), &[]).then(clauses![
                first_of(vec![
                    when(|p| thiol(p, 7), &[M::FourMercaptoOnePyrimidinTwoYlButane]),
                    when(|p| thioether(p, 7), &[M::FourAlkylthioOnePyrimidinTwoYlButane]),
                    when(|p| sulfonyl(p, 7), &[M::FourSulfonylOnePyrimidinTwoYlButane]),
                ]),
            ]),
            when(|p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Thiazole) && straight(p, 3, 7), &[]).then(clauses![
                first_of(vec![
                    when(|p| thiol(p, 7), &[M::FourMercaptoOneThiazolTwoYlButane]),
                    when(|p| thioether(p, 7), &[M::FourAlkylthioOneThiazolTwoYlButane]),
                    when(|p| sulfonyl(p, 7), &[M::FourSulfonylOneThiazolTwoYlButane]),
                ]),
            ]),
        ],
    );

    t.add(
        "C:N:C-C-C-C-C-F",
        clauses![
            when(
                |p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Pyrimidine) && straight(p, 3, 7),
                &[M::FourFluoroOnePyrimidinTwoYlButane],
            ),
            when(
                |p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Thiazole) && straight(p, 3, 7),
                &[M::FourFluoroOneThiazolTwoYlButane],
            ),
        ],
    );

    t.add(
        "C:N:C-C-C-C-C-Cl",
        clauses![
            when(
                |p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Pyrimidine) && straight(p, 3, 7),
                &[M::FourChloroOnePyrimidinTwoYlButane],
            ),
            when(
                |p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Thiazole) && straight(p, 3, 7),
                &[M::FourChloroOneThiazolTwoYlButane],
            ),
        ],
    );

    t.add(
        "Br-C-C-C-C-C:N:C",
        clauses![
            when(
                |p| !p.bond_in_ring(4) && ring_run(p, 5, 8, R::Pyrimidine) && straight(p, 1, 5),
                &[M::FourBromoOnePyrimidinTwoYlButane],
            ),
            when(
                |p| !p.bond_in_ring(4) && ring_run(p, 5, 8, R::Thiazole) && straight(p, 1, 5),
                &[M::FourBromoOneThiazolTwoYlButane],
            ),
        ],
    );

    t.add(
        "C:N:C-C-C-C-C-I",
        clauses![
            when(
                |p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Pyrimidine) && straight(p, 3, 7),
                &[M::FourIodoOnePyrimidinTwoYlButane],
            ),
            when(
                |p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Thiazole) && straight(p, 3, 7),
                &[M::FourIodoOneThiazolTwoYlButane],
            ),
        ],
    );
}

fn nine(t: &mut RuleTable) {
    t.add(
        "C-C-C-C-C-C-C-C:N",
        clauses![
            when(|p| !p.bond_in_ring(6) && ring_run(p, 7, 9, R::Pyridine) && straight(p, 1, 7), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 0), &[M::SixCarboxyOnePyridinTwoYlHexane]),
                    when(|p| ester_carbon(p, 0), &[M::SixAlkoxycarbonylOnePyridinTwoYlHexane]),
                    when(|p| amide_carbon(p, 0), &[M::SixCarbamoylOnePyridinTwoYlHexane]),
                    when(|p| aldehyde_carbon(p, 0), &[M::SixFormylOnePyridinTwoYlHexane]),
                    when(|p| ketone_carbon(p, 0), &[M::SixAcylOnePyridinTwoYlHexane]),
                    when(|p| cyano(p, 0), &[M::SixCyanoOnePyridinTwoYlHexane]),
                ]),
            ]),
            when(|p| !p.bond_in_ring(6) && ring_run(p, 7, 9, R::Pyrrole) && straight(p, 1, 7), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 0), &[M::SixCarboxyOnePyrrolTwoYlHexane]),
                    when(|p| ester_carbon(p, 0), &[M::SixAlkoxycarbonylOnePyrrolTwoYlHexane]),
                    when(|p| amide_carbon(p, 0), &[M::SixCarbamoylOnePyrrolTwoYlHexane]),
                    when(|p| aldehyde_carbon(p, 0), &[M::SixFormylOnePyrrolTwoYlHexane]),
                    when(|p| ketone_carbon(p, 0), &[M::SixAcylOnePyrrolTwoYlHexane]),
                    when(|p| cyano(p, 0), &[M::SixCyanoOnePyrrolTwoYlHexane]),
                ]),
            ]),
        ],
    );

    t.add(
        "N:C-C-C-C-C-C-C-O",
        clauses![
            when(|p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Pyridine) && straight(p, 2, 8), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 8), &[M::SixHydroxyOnePyridinTwoYlHexane]),
                    when(|p| methoxy(p, 8), &[M::SixMethoxyOnePyridinTwoYlHexane]),
                    when(|p| ether_oxygen(p, 8), &[M::SixAlkoxyOnePyridinTwoYlHexane]),
                    when(|p| ester_oxygen(p, 8), &[M::SixAcyloxyOnePyridinTwoYlHexane]),
                ]),
            ]),
            when(|p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Pyrrole) && straight(p, 2, 8), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 8), &[M::SixHydroxyOnePyrrolTwoYlHexane]),
                    when(|p| methoxy(p, 8), &[M::SixMethoxyOnePyrrolTwoYlHexane]),
                    when(|p| ether_oxygen(p, 8), &[M::SixAlkoxyOnePyrrolTwoYlHexane]),
                    when(|p| ester_oxygen(p, 8), &[M::SixAcyloxyOnePyrrolTwoYlHexane]),
                ]),
            ]),
        ],
    );

    t.add(
        "N-C-C-C-C-C-C-C:N",
        clauses![
            when(|p| !p.bond_in_ring(6) && ring_run(p, 7, 9, R::Pyridine) && straight(p, 1, 7), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 0), &[M::SixAminoOnePyridinTwoYlHexane]),
                    when(|p| substituted_amine(p, 0), &[M::SixAlkylaminoOnePyridinTwoYlHexane]),
                    when(|p| amide_nitrogen(p, 0), &[M::SixAcylaminoOnePyridinTwoYlHexane]),
                ]),
            ]),
            when(|p| !p.bond_in_ring(6) && ring_run(p, 7, 9, R::Pyrrole) && straight(p, 1, 7), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 0), &[M::SixAminoOnePyrrolTwoYlHexane]),
                    when(|p| substituted_amine(p, 0), &[M::SixAlkylaminoOnePyrrolTwoYlHexane]),
                    when(|p| amide_nitrogen(p, 0), &[M::SixAcylaminoOnePyrrolTwoYlHexane]),
                ]),
            ]),
        ],
    );

    t.add(
        "N:C-C-C-C-C-C-C-S",
        clauses![
            when(|p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Pyridine) && straight(p, 2, 8), &[]).then(clauses![
                first_of(vec![
                    when(|p| thiol(p, 8), &[M::SixMercaptoOnePyridinTwoYlHexane]),
                    when(|p| thioether(p, 8), &[M::SixAlkylthioOnePyridinTwoYlHexane]),
                    when(|p| sulfonyl(p, 8), &[M::SixSulfonylOnePyridinTwoYlHexane]),
                ]),
            ]),
            when(|p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Pyrrole) && straight(p, 2, 8), &[]).then(clauses![
                first_of(vec![
                    when(|p| thiol(p, 8), &[M::SixMercaptoOnePyrrolTwoYlHexane]),
                    when(|p| thioether(p, 8), &[M::SixAlkylthioOnePyrrolTwoYlHexane]),
                    when(|p| sulfonyl(p, 8), &[M::SixSulfonylOnePyrrolTwoYlHexane]),
                ]),
            ]),
        ],
    );

    t.add(
        "F-C-C-C-C-C-C-C:N",
        clauses![
            when(
                |p| !p.bond_in_ring(6) && ring_run(p, 7, 9, R::Pyridine) && straight(p, 1, 7),
                &[M::SixFluoroOnePyridinTwoYlHexane],
            ),
            when(
                |p| !p.bond_in_ring(6) && ring_run(p, 7, 9, R::Pyrrole) && straight(p, 1, 7),
                &[M::SixFluoroOnePyrrolTwoYlHexane],
            ),
        ],
    );

    t.add(
        "Cl-C-C-C-C-C-C-C:N",
        clauses![
            when(
                |p| !p.bond_in_ring(6) && ring_run(p, 7, 9, R::Pyridine) && straight(p, 1, 7),
                &[M::SixChloroOnePyridinTwoYlHexane],
            ),
            when(
                |p| !p.bond_in_ring(6) && ring_run(p, 7, 9, R::Pyrrole) && straight(p, 1, 7),
                &[M::SixChloroOnePyrrolTwoYlHexane],
            ),
        ],
    );

    t.add(
        "Br-C-C-C-C-C-C-C:N",
        clauses![
            when(
                |p| !p.bond_in_ring(6) && ring_run(p, 7, 9, R::Pyridine) && straight(p, 1, 7),
                &[M::SixBromoOnePyridinTwoYlHexane],
            ),
            when(
                |p| !p.bond_in_ring(6) && ring_run(p, 7, 9, R::Pyrrole) && straight(p, 1, 7),
                &[M::SixBromoOnePyrrolTwoYlHexane],
            ),
        ],
    );

    t.add(
        "I-C-C-C-C-C-C-C:N",
        clauses![
            when(
                |p| !p.bond_in_ring(6) && ring_run(p, 7, 9, R::Pyridine) && straight(p, 1, 7),
                &[M::SixIodoOnePyridinTwoYlHexane],
            ),
            when(
                |p| !p.bond_in_ring(6) && ring_run(p, 7, 9, R::Pyrrole) && straight(p, 1, 7),
                &[M::SixIodoOnePyrrolTwoYlHexane],
            ),
        ],
    );

    t.add(
        "C-C-C-C-C-C-C:C:N",
        clauses![
            when(|p| !p.bond_in_ring(5) && ring_run(p, 6, 9, R::Pyridine) && straight(p, 1, 6), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 0), &[M::FiveCarboxyOnePyridinThreeYlPentane]),
                    when(|p| ester_carbon(p, 0), &[M::FiveAlkoxycarbonylOnePyridinThreeYlPentane]),
                    when(|p| amide_carbon(p, 0), &[M::FiveCarbamoylOnePyridinThreeYlPentane]),
                    when(|p| aldehyde_carbon(p, 0), &[M::FiveFormylOnePyridinThreeYlPentane]),
                    when(|p| ketone_carbon(p, 0), &[M::FiveAcylOnePyridinThreeYlPentane]),
                    when(|p| cyano(p, 0), &[M::FiveCyanoOnePyridinThreeYlPentane]),
                ]),
            ]),
        ],
    );

    t.add(
        "N:C:C-C-C-C-C-C-O",
        clauses![
            when(|p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Pyridine) && straight(p, 3, 8), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 8), &[M::FiveHydroxyOnePyridinThreeYlPentane]),
                    when(|p| methoxy(p, 8), &[M::FiveMethoxyOnePyridinThreeYlPentane]),
                    when(|p| ether_oxygen(p, 8), &[M::FiveAlkoxyOnePyridinThreeYlPentane]),
                    when(|p| ester_oxygen(p, 8), &[M::FiveAcyloxyOnePyridinThreeYlPentane]),
                ]),
            ]),
        ],
    );

    t.add(
        "N-C-C-C-C-C-C:C:N",
        clauses![
            when(|p| !p.bond_in_ring(5) && ring_run(p, 6, 9, R::Pyridine) && straight(p, 1, 6), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 0), &[M::FiveAminoOnePyridinThreeYlPentane]),
                    when(|p| substituted_amine(p, 0), &[M::FiveAlkylaminoOnePyridinThreeYlPentane]),
                    when(|p| amide_nitrogen(p, 0), &[M::FiveAcylaminoOnePyridinThreeYlPentane]),
                ]),
            ]),
        ],
    );

    t.add(
        "N:C:C-C-C-C-C-C-S",
        clauses![
            when(|p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Pyridine) && straight(p, 3, 8), &[]).then(clauses![
                first_of(vec![
                    when(|p| thiol(p, 8), &[M::FiveMercaptoOnePyridinThreeYlPentane]),
                    when(|p| thioether(p, 8), &[M::FiveAlkylthioOnePyridinThreeYlPentane]),
                    when(|p| sulfonyl(p, 8), &[M::FiveSulfonylOnePyridinThreeYlPentane]),
                ]),
            ]),
        ],
    );

    t.add(
        "F-C-C-C-C-C-C:C:N",
        clauses![when(
            |p| !p.bond_in_ring(5) && ring_run(p, 6, 9, R::Pyridine) && straight(p, 1, 6),
            &[M::FiveFluoroOnePyridinThreeYlPentane],
        )],
    );

    t.add(
        "Cl-C-C-C-C-C-C:C:N",
        clauses![when(
            |p| !p.bond_in_ring(5) && ring_run(p, 6, 9, R::Pyridine) && straight(p, 1, 6),
            &[M::FiveChloroOnePyridinThreeYlPentane],
        )],
    );

    t.add(
        "Br-C-C-C-C-C-C:C:N",
        clauses![when(
            |p| !p.bond_in_ring(5) && ring_run(p, 6, 9, R::Pyridine) && straight(p, 1, 6),
            &[M::FiveBromoOnePyridinThreeYlPentane],
        )],
    );

    t.add(
        "I-C-C-C-C-C-C:C:N",
        clauses![when(
            |p| !p.bond_in_ring(5) && ring_run(p, 6, 9, R::Pyridine) && straight(p, 1, 6),
            &[M::FiveIodoOnePyridinThreeYlPentane],
        )],
    );

    t.add(
        "C-C-C-C-C-C:C:C:N",
        clauses![
            when(|p| !p.bond_in_ring(4) && ring_run(p, 5, 9, R::Pyridine) && straight(p, 1, 5), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 0), &[M::FourCarboxyOnePyridinFourYlButane]),
                    when(|p| ester_carbon(p, 0), &[M::FourAlkoxycarbonylOnePyridinFourYlButane]),
                    when(|p| amide_carbon(p, 0), &[M::FourCarbamoylOnePyridinFourYlButane]),
                    when(|p| aldehyde_carbon(p, 0), &[M::FourFormylOnePyridinFourYlButane]),
                    when(|p| ketone_carbon(p, 0), &[M::FourAcylOnePyridinFourYlButane]),
                    when(|p| cyano(p, 0), &[M::FourCyanoOnePyridinFourYlButane]),
                ]),
            ]),
        ],
    );

    t.add(
        "N:C:C:C-C-C-C-C-O",
        clauses![
            when(|p| !p.bond_in_ring(3) && ring_run(p, 0, 4, R::Pyridine) && straight(p, 4, 8), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 8), &[M::FourHydroxyOnePyridinFourYlButane]),
                    when(|p| methoxy(p, 8), &[M::FourMethoxyOnePyridinFourYlButane]),
                    when(|p| ether_oxygen(p, 8), &[M::FourAlkoxyOnePyridinFourYlButane]),
                    when(|p| ester_oxygen(p, 8), &[M::FourAcyloxyOnePyridinFourYlButane]),
                ]),
            ]),
        ],
    );

    t.add(
        "N-C-C-C-C-C:C:C:N",
        clauses![
            when(|p| !p.bond_in_ring(4) && ring_run(p, 5, 9, R::Pyridine) && straight(p, 1, 5), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 0), &[M::FourAminoOnePyridinFourYlButane]),
                    when(|p| substituted_amine(p, 0), &[M::FourAlkylaminoOnePyridinFourYlButane]),
                    when(|p| amide_nitrogen(p, 0), &[M::FourAcylaminoOnePyridinFourYlButane]),
                ]),
            ]),
        ],
    );

    t.add(
        "N:C:C:C-C-C-C-C-S",
        clauses![
            when(|p| !p.bond_in_ring(3) && ring_run(p, 0, 4, R::Pyridine) && straight(p, 4, 8), &[]).then(clauses![
                first_of(vec![
                    when(|p| thiol(p, 8), &[M::FourMercaptoOnePyridinFourYlButane]),
                    when(|p| thioether(p, 8), &[M::FourAlkylthioOnePyridinFourYlButane]),
                    when(|p| sulfonyl(p, 8), &[M::FourSulfonylOnePyridinFourYlButane]),
                ]),
            ]),
        ],
    );

    t.add(
        "F-C-C-C-C-C:C:C:N",
        clauses![when(
            |p| !p.bond_in_ring(4) && ring_run(p, 5, 9, R::Pyridine) && straight(p, 1, 5),
            &[M::FourFluoroOnePyridinFourYlButane],
        )],
    );

    t.add(
        "Cl-C-C-C-C-C:C:C:N",
        clauses![when(
            |p| !p.bond_in_ring(4) && ring_run(p, 5, 9, R::Pyridine) && straight(p, 1, 5),
            &[M::FourChloroOnePyridinFourYlButane],
        )],
    );

    t.add(
        "Br-C-C-C-C-C:C:C:N",
        clauses![when(
            |p| !p.bond_in_ring(4) && ring_run(p, 5, 9, R::Pyridine) && straight(p, 1, 5),
            &[M::FourBromoOnePyridinFourYlButane],
        )],
    );

    t.add(
        "I-C-C-C-C-C:C:C:N",
        clauses![when(
            |p| !p.bond_in_ring(4) && ring_run(p, 5, 9, R::Pyridine) && straight(p, 1, 5),
            &[M::FourIodoOnePyridinFourYlButane],
        )],
    );

    t.add(
        "C-C-C-C-C-C-C-C:O",
        clauses![when(|p| !p.bond_in_ring(6) && ring_run(p, 7, 9, R::Furan) && straight(p, 1, 7), &[]).then(clauses![
            first_of(vec![
                when(|p| carboxyl_carbon(p, 0), &[M::SixCarboxyOneFuranTwoYlHexane]),
                when(|p| ester_carbon(p, 0), &[M::SixAlkoxycarbonylOneFuranTwoYlHexane]),
                when(|p| amide_carbon(p, 0), &[M::SixCarbamoylOneFuranTwoYlHexane]),
                when(|p| aldehyde_carbon(p, 0), &[M::SixFormylOneFuranTwoYlHexane]),
                when(|p| ketone_carbon(p, 0), &[M::SixAcylOneFuranTwoYlHexane]),
                when(|p| cyano(p, 0), &[M::SixCyanoOneFuranTwoYlHexane]),
            ]),
        ])],
    );

    t.add(
        "O-C-C-C-C-C-C-C:O",
        clauses![when(|p| !p.bond_in_ring(6) && ring_run(p, 7, 9, R::Furan) && straight(p, 1, 7), &[]).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 0), &[M::SixHydroxyOneFuranTwoYlHexane]),
                when(|p| methoxy(p, 0), &[M::SixMethoxyOneFuranTwoYlHexane]),
                when(|p| ether_oxygen(p, 0), &[M::SixAlkoxyOneFuranTwoYlHexane]),
                when(|p| ester_oxygen(p, 0), &[M::SixAcyloxyOneFuranTwoYlHexane]),
            ]),
        ])],
    );

    t.add(
        "N-C-C-C-C-C-C-C:O",
        clauses![when(|p| !p.bond_in_ring(6) && ring_run(p, 7, 9, R::Furan) && straight(p, 1, 7), &[]).then(clauses![
            first_of(vec![
                when(|p| primary_amine(p, 0), &[M::SixAminoOneFuranTwoYlHexane]),
                when(|p| substituted_amine(p, 0), &[M::SixAlkylaminoOneFuranTwoYlHexane]),
                when(|p| amide_nitrogen(p, 0), &[M::SixAcylaminoOneFuranTwoYlHexane]),
            ]),
        ])],
    );

    t.add(
        "O:C-C-C-C-C-C-C-S",
        clauses![when(|p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Furan) && straight(p, 2, 8), &[]).then(clauses![
            first_of(vec![
                when(|p| thiol(p, 8), &[M::SixMercaptoOneFuranTwoYlHexane]),
                when(|p| thioether(p, 8), &[M::SixAlkylthioOneFuranTwoYlHexane]),
                when(|p| sulfonyl(p, 8), &[M::SixSulfonylOneFuranTwoYlHexane]),
            ]),
        ])],
    );

    t.add(
        "F-C-C-C-C-C-C-C:O",
        clauses![when(
            |p| !p.bond_in_ring(6) && ring_run(p, 7, 9, R::Furan) && straight(p, 1, 7),
            &[M::SixFluoroOneFuranTwoYlHexane],
        )],
    );

    t.add(
        "Cl-C-C-C-C-C-C-C:O",
        clauses![when(
            |p| !p.bond_in_ring(6) && ring_run(p, 7, 9, R::Furan) && straight(p, 1, 7),
            &[M::SixChloroOneFuranTwoYlHexane],
        )],
    );

    t.add(
        "Br-C-C-C-C-C-C-C:O",
        clauses![when(
            |p| !p.bond_in_ring(6) && ring_run(p, 7, 9, R::Furan) && straight(p, 1, 7),
            &[M::SixBromoOneFuranTwoYlHexane],
        )],
    );

    t.add(
        "I-C-C-C-C-C-C-C:O",
        clauses![when(
            |p| !p.bond_in_ring(6) && ring_run(p, 7, 9, R::Furan) && straight(p, 1, 7),
            &[M::SixIodoOneFuranTwoYlHexane],
        )],
    );

    t.add(
        "C-C-C-C-C-C-C:C:O",
        clauses![when(|p| !p.bond_in_ring(5) && ring_run(p, 6, 9, R::Furan) && straight(p, 1, 6), &[]).then(clauses![
            first_of(vec![
                when(|p| carboxyl_carbon(p, 0), &[M::FiveCarboxyOneFuranThreeYlPentane]),
                when(|p| ester_carbon(p, 0), &[M::FiveAlkoxycarbonylOneFuranThreeYlPentane]),
                when(|p| amide_carbon(p, 0), &[M::FiveCarbamoylOneFuranThreeYlPentane]),
                when(|p| aldehyde_carbon(p, 0), &[M::FiveFormylOneFuranThreeYlPentane]),
                when(|p| ketone_carbon(p, 0), &[M::FiveAcylOneFuranThreeYlPentane]),
                when(|p| cyano(p, 0), &[M::FiveCyanoOneFuranThreeYlPentane]),
            ]),
        ])],
    );

    t.add(
        "O-C-C-C-C-C-C:C:O",
        clauses![when(|p| !p.bond_in_ring(5) && ring_run(p, 6, 9, R::Furan) && straight(p, 1, 6), &[]).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 0), &[M::FiveHydroxyOneFuranThreeYlPentane]),
                when(|p| methoxy(p, 0), &[M::FiveMethoxyOneFuranThreeYlPentane]),
                when(|p| ether_oxygen(p, 0), &[M::FiveAlkoxyOneFuranThreeYlPentane]),
                when(|p| ester_oxygen(p, 0), &[M::FiveAcyloxyOneFuranThreeYlPentane]),
            ]),
        ])],
    );

    t.add(
        "N-C-C-C-C-C-C:C:O",
        clauses![when(|p| !p.bond_in_ring(5) && ring_run(p, 6, 9, R::Furan) && straight(p, 1, 6), &[]).then(clauses![
            first_of(vec![
                when(|p| primary_amine(p, 0), &[M::FiveAminoOneFuranThreeYlPentane]),
                when(|p| substituted_amine(p, 0), &[M::FiveAlkylaminoOneFuranThreeYlPentane]),
                when(|p| amide_nitrogen(p, 0), &[M::FiveAcylaminoOneFuranThreeYlPentane]),
            ]),
        ])],
    );

    t.add(
        "O:C:C-C-C-C-C-C-S",
        clauses![when(|p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Furan) && straight(p, 3, 8), &[]).then(clauses![
            first_of(vec![
                when(|p| thiol(p, 8), &[M::FiveMercaptoOneFuranThreeYlPentane]),
                when(|p| thioether(p, 8), &[M::FiveAlkylthioOneFuranThreeYlPentane]),
                when(|p| sulfonyl(p, 8), &[M::FiveSulfonylOneFuranThreeYlPentane]),
            ]),
        ])],
    );

    t.add(
        "F-C-C-C-C-C-C:C:O",
        clauses![when(
            |p| !p.bond_in_ring(5) && ring_run(p, 6, 9, R::Furan) && straight(p, 1, 6),
            &[M::FiveFluoroOneFuranThreeYlPentane],
        )],
    );

    t.add(
        "Cl-C-C-C-C-C-C:C:O",
        clauses![when(
            |p| !p.bond_in_ring(5) && ring_run(p, 6, 9, R::Furan) && straight(p, 1, 6),
            &[M::FiveChloroOneFuranThreeYlPentane],
        )],
    );

    t.add(
        "Br-C-C-C-C-C-C:C:O",
        clauses![when(
            |p| !p.bond_in_ring(5) && ring_run(p, 6, 9, R::Furan) && straight(p, 1, 6),
            &[M::FiveBromoOneFuranThreeYlPentane],
        )],
    );

    t.add(
        "I-C-C-C-C-C-C:C:O",
        clauses![when(
            |p| !p.bond_in_ring(5) && ring_run(p, 6, 9, R::Furan) && straight(p, 1, 6),
            &[M::FiveIodoOneFuranThreeYlPentane],
        )],
    );

    t.add(
        "C-C-C-C-C-C-C-C:S",
        clauses![
            when(|p| !p.bond_in_ring(6) && ring_run(p, 7, 9, R::Thiophene) && straight(p, 1, 7), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 0), &[M::SixCarboxyOneThiophenTwoYlHexane]),
                    when(|p| ester_carbon(p, 0), &[M::SixAlkoxycarbonylOneThiophenTwoYlHexane]),
                    when(|p| amide_carbon(p, 0), &[M::SixCarbamoylOneThiophenTwoYlHexane]),
                    when(|p| aldehyde_carbon(p, 0), &[M::SixFormylOneThiophenTwoYlHexane]),
                    when(|p| ketone_carbon(p, 0), &[M::SixAcylOneThiophenTwoYlHexane]),
                    when(|p| cyano(p, 0), &[M::SixCyanoOneThiophenTwoYlHexane]),
                ]),
            ]),
        ],
    );

    t.add(
        "O-C-C-C-C-C-C-C:S",
        clauses![
            when(|p| !p.bond_in_ring(6) && ring_run(p, 7, 9, R::Thiophene) && straight(p, 1, 7), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 0), &[M::SixHydroxyOneThiophenTwoYlHexane]),
                    when(|p| methoxy(p, 0), &[M::SixMethoxyOneThiophenTwoYlHexane]),
                    when(|p| ether_oxygen(p, 0), &[M::SixAlkoxyOneThiophenTwoYlHexane]),
                    when(|p| ester_oxygen(p, 0), &[M::SixAcyloxyOneThiophenTwoYlHexane]),
                ]),
            ]),
        ],
    );

    t.add(
        "N-C-C-C-C-C-C-C:S",
        clauses![
            when(|p| !p.bond_in_ring(6) && ring_run(p, 7, 9, R::Thiophene) && straight(p, 1, 7), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 0), &[M::SixAminoOneThiophenTwoYlHexane]),
                    when(|p| substituted_amine(p, 0), &[M::SixAlkylaminoOneThiophenTwoYlHexane]),
                    when(|p| amide_nitrogen(p, 0), &[M::SixAcylaminoOneThiophenTwoYlHexane]),
                ]),
            ]),
        ],
    );

    t.add(
        "S-C-C-C-C-C-C-C:S",
        clauses![
            when(|p| !p.bond_in_ring(6) && ring_run(p, 7, 9, R::Thiophene) && straight(p, 1, 7), &[]).then(clauses![
                first_of(vec![
                    when(|p| thiol(p, 0), &[M::SixMercaptoOneThiophenTwoYlHexane]),
                    when(|p| thioether(p, 0), &[M::SixAlkylthioOneThiophenTwoYlHexane]),
                    when(|p| sulfonyl(p, 0), &[M::SixSulfonylOneThiophenTwoYlHexane]),
                ]),
            ]),
        ],
    );

    t.add(
        "F-C-C-C-C-C-C-C:S",
        clauses![when(
            |p| !p.bond_in_ring(6) && ring_run(p, 7, 9, R::Thiophene) && straight(p, 1, 7),
            &[M::SixFluoroOneThiophenTwoYlHexane],
        )],
    );

    t.add(
        "Cl-C-C-C-C-C-C-C:S",
        clauses![when(
            |p| !p.bond_in_ring(6) && ring_run(p, 7, 9, R::Thiophene) && straight(p, 1, 7),
            &[M::SixChloroOneThiophenTwoYlHexane],
        )],
    );

    t.add(
        "Br-C-C-C-C-C-C-C:S",
        clauses![when(
            |p| !p.bond_in_ring(6) && ring_run(p, 7, 9, R::Thiophene) && straight(p, 1, 7),
            &[M::SixBromoOneThiophenTwoYlHexane],
        )],
    );

    t.add(
        "I-C-C-C-C-C-C-C:S",
        clauses![when(
            |p| !p.bond_in_ring(6) && ring_run(p, 7, 9, R::Thiophene) && straight(p, 1, 7),
            &[M::SixIodoOneThiophenTwoYlHexane],
        )],
    );

    t.add(
        "C-C-C-C-C-C-C:C:S",
        clauses![
            when(|p| !p.bond_in_ring(5) && ring_run(p, 6, 9, R::Thiophene) && straight(p, 1, 6), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 0), &[M::FiveCarboxyOneThiophenThreeYlPentane]),
                    when(|p| ester_carbon(p, 0), &[M::FiveAlkoxycarbonylOneThiophenThreeYlPentane]),
                    when(|p| amide_carbon(p, 0), &[M::FiveCarbamoylOneThiophenThreeYlPentane]),
                    when(|p| aldehyde_carbon(p, 0), &[M::FiveFormylOneThiophenThreeYlPentane]),
                    when(|p| ketone_carbon(p, 0), &[M::FiveAcylOneThiophenThreeYlPentane]),
                    when(|p| cyano(p, 0), &[M::FiveCyanoOneThiophenThreeYlPentane]),
                ]),
            ]),
        ],
    );

    t.add(
        "O-C-C-C-C-C-C:C:S",
        clauses![
            when(|p| !p.bond_in_ring(5) && ring_run(p, 6, 9, R::Thiophene) && straight(p, 1, 6), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 0), &[M::FiveHydroxyOneThiophenThreeYlPentane]),
                    when(|p| methoxy(p, 0), &[M::FiveMethoxyOneThiophenThreeYlPentane]),
                    when(|p| ether_oxygen(p, 0), &[M::FiveAlkoxyOneThiophenThreeYlPentane]),
                    when(|p| ester_oxygen(p, 0), &[M::FiveAcyloxyOneThiophenThreeYlPentane]),
                ]),
            ]),
        ],
    );

    t.add(
        "N-C-C-C-C-C-C:C:S",
        clauses![
            when(|p| !p.bond_in_ring(5) && ring_run(p, 6, 9, R::Thiophene) && straight(p, 1, 6), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 0), &[M::FiveAminoOneThiophenThreeYlPentane]),
                    when(|p| substituted_amine(p, 0), &[M::FiveAlkylaminoOneThiophenThreeYlPentane]),
                    when(|p| amide_nitrogen(p, 0), &[M::FiveAcylaminoOneThiophenThreeYlPentane]),
                ]),
            ]),
        ],
    );

    t.add(
        "S-C-C-C-C-C-C:C:S",
        clauses![
            when(|p| !p.bond_in_ring(5) && ring_run(p, 6, 9, R::Thiophene) && straight(p, 1, 6), &[]).then(clauses![
                first_of(vec![
                    when(|p| thiol(p, 0), &[M::FiveMercaptoOneThiophenThreeYlPentane]),
                    when(|p| thioether(p, 0), &[M::FiveAlkylthioOneThiophenThreeYlPentane]),
                    when(|p| sulfonyl(p, 0), &[M::FiveSulfonylOneThiophenThreeYlPentane]),
                ]),
            ]),
        ],
    );

    t.add(
        "F-C-C-C-C-C-C:C:S",
        clauses![when(
            |p| !p.bond_in_ring(5) && ring_run(p, 6, 9, R::Thiophene) && straight(p, 1, 6),
            &[M::FiveFluoroOneThiophenThreeYlPentane],
        )],
    );

    t.add(
        "Cl-C-C-C-C-C-C:C:S",
        clauses![when(
            |p| !p.bond_in_ring(5) && ring_run(p, 6, 9, R::Thiophene) && straight(p, 1, 6),
            &[M::FiveChloroOneThiophenThreeYlPentane],
        )],
    );

    t.add(
        "Br-C-C-C-C-C-C:C:S",
        clauses![when(
            |p| !p.bond_in_ring(5) && ring_run(p, 6, 9, R::Thiophene) && straight(p, 1, 6),
            &[M::FiveBromoOneThiophenThreeYlPentane],
        )],
    );

    t.add(
        "I-C-C-C-C-C-C:C:S",
        clauses![when(
            |p| !p.bond_in_ring(5) && ring_run(p, 6, 9, R::Thiophene) && straight(p, 1, 6),
            &[M::FiveIodoOneThiophenThreeYlPentane],
        )],
    );

    t.add(
        "C-C-C-C-C-C-C:N:C",
        clauses![
            when(|p| !p.bond_in_ring(5) && ring_run(p, 6, 9, R::Pyrimidine) && straight(p, 1, 6), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 0), &[M::FiveCarboxyOnePyrimidinTwoYlPentane]),
                    when(|p| ester_carbon(p, 0), &[M::FiveAlkoxycarbonylOnePyrimidinTwoYlPentane]),
                    when(|p| amide_carbon(p, 0), &[M::FiveCarbamoylOnePyrimidinTwoYlPentane]),
                    when(|p| aldehyde_carbon(p, 0), &[M::FiveFormylOnePyrimidinTwoYlPentane]),
                    when(|p| ketone_carbon(p, 0), &[M::FiveAcylOnePyrimidinTwoYlPentane]),
                    when(|p| cyano(p, 0), &[M::FiveCyanoOnePyrimidinTwoYlPentane]),
                ]),
            ]),
            when(|p| !p.bond_in_ring(5) && ring_run(p, 6, 9, R::Thiazole) && straight(p, 1, 6), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 0), &[M::FiveCarboxyOneThiazolTwoYlPentane]),
                    when(|p| ester_carbon(p, 0), &[M::FiveAlkoxycarbonylOneThiazolTwoYlPentane]),
                    when(|p| amide_carbon(p, 0), &[M::FiveCarbamoylOneThiazolTwoYlPentane]),
                    when(|p| aldehyde_carbon(p, 0), &[M::FiveFormylOneThiazolTwoYlPentane]),
                    when(|p| ketone_carbon(p, 0), &[M::FiveAcylOneThiazolTwoYlPentane]),
                    when(|p| cyano(p, 0), &[M::FiveCyanoOneThiazolTwoYlPentane]),
                ]),
            ]),
        ],
    );

    t.add(
        "C:N:C-C-C-C-C-C-O",
        clauses![
            when(|p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Pyrimidine) && straight(p, 3, 8), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 8), &[M::FiveHydroxyOnePyrimidinTwoYlPentane]),
                    when(|p| methoxy(p, 8), &[M::FiveMethoxyOnePyrimidinTwoYlPentane]),
                    when(|p| ether_oxygen(p, 8), &[M::FiveAlkoxyOnePyrimidinTwoYlPentane]),
                    when(|p| ester_oxygen(p, 8), &[M::FiveAcyloxyOnePyrimidinTwoYlPentane]),
                ]),
            ]),
            when(|p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Thiazole) && straight(p, 3, 8), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 8), &[M::FiveHydroxyOneThiazolTwoYlPentane]),
                    when(|p| methoxy(p, 8), &[M::FiveMethoxyOneThiazolTwoYlPentane]),
                    when(|p| ether_oxygen(p, 8), &[M::FiveAlkoxyOneThiazolTwoYlPentane]),
                    when(|p| ester_oxygen(p, 8), &[M::FiveAcyloxyOneThiazolTwoYlPentane]),
                ]),
            ]),
        ],
    );

    t.add(
        "C:N:C-C-C-C-C-C-N",
        clauses![
            when(|p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Pyrimidine) && straight(p, 3, 8), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 8), &[M::FiveAminoOnePyrimidinTwoYlPentane]),
                    when(|p| substituted_amine(p, 8), &[M::FiveAlkylaminoOnePyrimidinTwoYlPentane]),
                    when(|p| amide_nitrogen(p, 8), &[M::FiveAcylaminoOnePyrimidinTwoYlPentane]),
                ]),
            ]),
            when(|p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Thiazole) && straight(p, 3, 8), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 8), &[M::FiveAminoOneThiazolTwoYlPentane]),
                    when(|p| substituted_amine(p, 8), &[M::FiveAlkylaminoOneThiazolTwoYlPentane]),
                    when(|p| amide_nitrogen(p, 8), &[M::FiveAcylaminoOneThiazolTwoYlPentane]),
                ]),
            ]),
        ],
    );

    t.add(
        "C:N:C-C-C-C-C-C-S",
        clauses![
            when(|p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Pyrimidine) && straight(p, 3, 8), &[]).then(clauses![
                first_of(vec![
                    when(|p| thiol(p, 8), &[M::FiveMercaptoOnePyrimidinTwoYlPentane]),
                    when(|p| thioether(p, 8), &[M::FiveAlkylthioOnePyrimidinTwoYlPentane]),
                    when(|p| sulfonyl(p, 8), &[M::FiveSulfonylOnePyrimidinTwoYlPentane]),
                ]),
            ]),
            when(|p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Thiazole) && straight(p, 3, 8), &[]).then(clauses![
                first_of(vec![
                    when(|p| thiol(p, 8), &[M::FiveMercaptoOneThiazolTwoYlPentane]),
                    when(|p| thioether(p, 8), &[M::FiveAlkylthioOneThiazolTwoYlPentane]),
                    when(|p| sulfonyl(p, 8), &[M::FiveSulfonylOneThiazolTwoYlPentane]),
                ]),
            ]),
        ],
    );

    t.add(
        "C:N:C-C-C-C-C-C-F",
        clauses![
            when(
                |p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Pyrimidine) && straight(p, 3, 8),
                &[M::FiveFluoroOnePyrimidinTwoYlPentane],
            ),
            when(
                |p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Thiazole) && straight(p, 3, 8),
                &[M::FiveFluoroOneThiazolTwoYlPentane],
            ),
        ],
    );

    t.add(
        "C:N:C-C-C-C-C-C-Cl",
        clauses![
            when(
                |p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Pyrimidine) && straight(p, 3, 8),
                &[M::FiveChloroOnePyrimidinTwoYlPentane],
            ),
            when(
                |p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Thiazole) && straight(p, 3, 8),
                &[M::FiveChloroOneThiazolTwoYlPentane],
            ),
        ],
    );

    t.add(
        "Br-C-C-C-C-C-C:N:C",
        clauses![
            when(
                |p| !p.bond_in_ring(5) && ring_run(p, 6, 9, R::Pyrimidine) && straight(p, 1, 6),
                &[M::FiveBromoOnePyrimidinTwoYlPentane],
            ),
            when(
                |p| !p.bond_in_ring(5) && ring_run(p, 6, 9, R::Thiazole) && straight(p, 1, 6),
                &[M::FiveBromoOneThiazolTwoYlPentane],
            ),
        ],
    );

    t.add(
        "C:N:C-C-C-C-C-C-I",
        clauses![
            when(
                |p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Pyrimidine) && straight(p, 3, 8),
                &[M::FiveIodoOnePyrimidinTwoYlPentane],
            ),
            when(
                |p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Thiazole) && straight(p, 3, 8),
                &[M::FiveIodoOneThiazolTwoYlPentane],
            ),
        ],
    );
}

fn ten(t: &mut RuleTable) {
    t.add(
        "C-C-C-C-C-C-C-C-C:N",
        clauses![
            when(|p| !p.bond_in_ring(7) && ring_run(p, 8, 10, R::Pyridine) && straight(p, 1, 8), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 0), &[M::SevenCarboxyOnePyridinTwoYlHeptane]),
                    when(|p| ester_carbon(p, 0), &[M::SevenAlkoxycarbonylOnePyridinTwoYlHeptane]),
                    when(|p| amide_carbon(p, 0), &[M::SevenCarbamoylOnePyridinTwoYlHeptane]),
                    when(|p| aldehyde_carbon(p, 0), &[M::SevenFormylOnePyridinTwoYlHeptane]),
                    when(|p| ketone_carbon(p, 0), &[M::SevenAcylOnePyridinTwoYlHeptane]),
                    when(|p| cyano(p, 0), &[M::SevenCyanoOnePyridinTwoYlHeptane]),
                ]),
            ]),
            when(|p| !p.bond_in_ring(7) && ring_run(p, 8, 10, R::Pyrrole) && straight(p, 1, 8), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 0), &[M::SevenCarboxyOnePyrrolTwoYlHeptane]),
                    when(|p| ester_carbon(p, 0), &[M::SevenAlkoxycarbonylOnePyrrolTwoYlHeptane]),
                    when(|p| amide_carbon(p, 0), &[M::SevenCarbamoylOnePyrrolTwoYlHeptane]),
                    when(|p| aldehyde_carbon(p, 0), &[M::SevenFormylOnePyrrolTwoYlHeptane]),
                    when(|p| ketone_carbon(p, 0), &[M::SevenAcylOnePyrrolTwoYlHeptane]),
                    when(|p| cyano(p, 0), &[M::SevenCyanoOnePyrrolTwoYlHeptane]),
                ]),
            ]),
        ],
    );

    t.add(
        "N:C-C-C-C-C-C-C-C-O",
        clauses![
            when(|p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Pyridine) && straight(p, 2, 9), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 9), &[M::SevenHydroxyOnePyridinTwoYlHeptane]),
                    when(|p| methoxy(p, 9), &[M::SevenMethoxyOnePyridinTwoYlHeptane]),
                    when(|p| ether_oxygen(p, 9), &[M::SevenAlkoxyOnePyridinTwoYlHeptane]),
                    when(|p| ester_oxygen(p, 9), &[M::SevenAcyloxyOnePyridinTwoYlHeptane]),
                ]),
            ]),
            when(|p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Pyrrole) && straight(p, 2, 9), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 9), &[M::SevenHydroxyOnePyrrolTwoYlHeptane]),
                    when(|p| methoxy(p, 9), &[M::SevenMethoxyOnePyrrolTwoYlHeptane]),
                    when(|p| ether_oxygen(p, 9), &[M::SevenAlkoxyOnePyrrolTwoYlHeptane]),
                    when(|p| ester_oxygen(p, 9), &[M::SevenAcyloxyOnePyrrolTwoYlHeptane]),
                ]),
            ]),
        ],
    );

    t.add(
        "N-C-C-C-C-C-C-C-C:N",
        clauses![
            when(|p| !p.bond_in_ring(7) && ring_run(p, 8, 10, R::Pyridine) && straight(p, 1, 8), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 0), &[M::SevenAminoOnePyridinTwoYlHeptane]),
                    when(|p| substituted_amine(p, 0), &[M::SevenAlkylaminoOnePyridinTwoYlHeptane]),
                    when(|p| amide_nitrogen(p, 0), &[M::SevenAcylaminoOnePyridinTwoYlHeptane]),
                ]),
            ]),
            when(|p| !p.bond_in_ring(7) && ring_run(p, 8, 10, R::Pyrrole) && straight(p, 1, 8), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 0), &[M::SevenAminoOnePyrrolTwoYlHeptane]),
                    when(|p| substituted_amine(p, 0), &[M::SevenAlkylaminoOnePyrrolTwoYlHeptane]),
                    when(|p| amide_nitrogen(p, 0), &[M::SevenAcylaminoOnePyrrolTwoYlHeptane]),
                ]),
            ]),
        ],
    );

    t.add(
        "N:C-C-C-C-C-C-C-C-S",
        clauses![
            when(|p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Pyridine) && straight(p, 2, 9), &[]).then(clauses![
                first_of(vec![
                    when(|p| thiol(p, 9), &[M::SevenMercaptoOnePyridinTwoYlHeptane]),
                    when(|p| thioether(p, 9), &[M::SevenAlkylthioOnePyridinTwoYlHeptane]),
                    when(|p| sulfonyl(p, 9), &[M::SevenSulfonylOnePyridinTwoYlHeptane]),
                ]),
            ]),
            when(|p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Pyrrole) && straight(p, 2, 9), &[]).then(clauses![
                first_of(vec![
                    when(|p| thiol(p, 9), &[M::SevenMercaptoOnePyrrolTwoYlHeptane]),
                    when(|p| thioether(p, 9), &[M::SevenAlkylthioOnePyrrolTwoYlHeptane]),
                    when(|p| sulfonyl(p, 9), &[M::SevenSulfonylOnePyrrolTwoYlHeptane]),
                ]),
            ]),
        ],
    );

    t.add(
        "F-C-C-C-C-C-C-C-C:N",
        clauses![
            when(
                |p| !p.bond_in_ring(7) && ring_run(p, 8, 10, R::Pyridine) && straight(p, 1, 8),
                &[M::SevenFluoroOnePyridinTwoYlHeptane],
            ),
            when(
                |p| !p.bond_in_ring(7) && ring_run(p, 8, 10, R::Pyrrole) && straight(p, 1, 8),
                &[M::SevenFluoroOnePyrrolTwoYlHeptane],
            ),
        ],
    );

    t.add(
        "Cl-C-C-C-C-C-C-C-C:N",
        clauses![
            when(
                |p| !p.bond_in_ring(7) && ring_run(p, 8, 10, R::Pyridine) && straight(p, 1, 8),
                &[M::SevenChloroOnePyridinTwoYlHeptane],
            ),
            when(
                |p| !p.bond_in_ring(7) && ring_run(p, 8, 10, R::Pyrrole) && straight(p, 1, 8),
                &[M::SevenChloroOnePyrrolTwoYlHeptane],
            ),
        ],
    );

    t.add(
        "Br-C-C-C-C-C-C-C-C:N",
        clauses![
            when(
                |p| !p.bond_in_ring(7) && ring_run(p, 8, 10, R::Pyridine) && straight(p, 1, 8),
                &[M::SevenBromoOnePyridinTwoYlHeptane],
            ),
            when(
                |p| !p.bond_in_ring(7) && ring_run(p, 8, 10, R::Pyrrole) && straight(p, 1, 8),
                &[M::SevenBromoOnePyrrolTwoYlHeptane],
            ),
        ],
    );

    t.add(
        "I-C-C-C-C-C-C-C-C:N",
        clauses![
            when(
                |p| !p.bond_in_ring(7) && ring_run(p, 8, 10, R::Pyridine) && straight(p, 1, 8),
                &[M::SevenIodoOnePyridinTwoYlHeptane],
            ),
            when(
                |p| !p.bond_in_ring(7) && ring_run(p, 8, 10, R::Pyrrole) && straight(p, 1, 8),
                &[M::SevenIodoOnePyrrolTwoYlHeptane],
            ),
        ],
    );

    t.add(
        "C-C-C-C-C-C-C-C:C:N",
        clauses![
            when(|p| !p.bond_in_ring(6) && ring_run(p, 7, 10, R::Pyridine) && straight(p, 1, 7), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 0), &[M::SixCarboxyOnePyridinThreeYlHexane]),
                    when(|p| ester_carbon(p, 0), &[M::SixAlkoxycarbonylOnePyridinThreeYlHexane]),
                    when(|p| amide_carbon(p, 0), &[M::SixCarbamoylOnePyridinThreeYlHexane]),
                    when(|p| aldehyde_carbon(p, 0), &[M::SixFormylOnePyridinThreeYlHexane]),
                    when(|p| ketone_carbon(p, 0), &[M::SixAcylOnePyridinThreeYlHexane]),
                    when(|p| cyano(p, 0), &[M::SixCyanoOnePyridinThreeYlHexane]),
                ]),
            ]),
        ],
    );

    t.add(
        "N:C:C-C-C-C-C-C-C-O",
        clauses![
            when(|p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Pyridine) && straight(p, 3, 9), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 9), &[M::SixHydroxyOnePyridinThreeYlHexane]),
                    when(|p| methoxy(p, 9), &[M::SixMethoxyOnePyridinThreeYlHexane]),
                    when(|p| ether_oxygen(p, 9), &[M::SixAlkoxyOnePyridinThreeYlHexane]),
                    when(|p| ester_oxygen(p, 9), &[M::SixAcyloxyOnePyridinThreeYlHexane]),
                ]),
            ]),
        ],
    );

    t.add(
        "N-C-C-C-C-C-C-C:C:N",
        clauses![
            when(|p| !p.bond_in_ring(6) && ring_run(p, 7, 10, R::Pyridine) && straight(p, 1, 7), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 0), &[M::SixAminoOnePyridinThreeYlHexane]),
                    when(|p| substituted_amine(p, 0), &[M::SixAlkylaminoOnePyridinThreeYlHexane]),
                    when(|p| amide_nitrogen(p, 0), &[M::SixAcylaminoOnePyridinThreeYlHexane]),
                ]),
            ]),
        ],
    );

    t.add(
        "N:C:C-C-C-C-C-C-C-S",
        clauses![
            when(|p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Pyridine) && straight(p, 3, 9), &[]).then(clauses![
                first_of(vec![
                    when(|p| thiol(p, 9), &[M::SixMercaptoOnePyridinThreeYlHexane]),
                    when(|p| thioether(p, 9), &[M::SixAlkylthioOnePyridinThreeYlHexane]),
                    when(|p| sulfonyl(p, 9), &[M::SixSulfonylOnePyridinThreeYlHexane]),
                ]),
            ]),
        ],
    );

    t.add(
        "F-C-C-C-C-C-C-C:C:N",
        clauses![when(
            |p| !p.bond_in_ring(6) && ring_run(p, 7, 10, R::Pyridine) && straight(p, 1, 7),
            &[M::SixFluoroOnePyridinThreeYlHexane],
        )],
    );

    t.add(
        "Cl-C-C-C-C-C-C-C:C:N",
        clauses![when(
            |p| !p.bond_in_ring(6) && ring_run(p, 7, 10, R::Pyridine) && straight(p, 1, 7),
            &[M::SixChloroOnePyridinThreeYlHexane],
        )],
    );

    t.add(
        "Br-C-C-C-C-C-C-C:C:N",
        clauses![when(
            |p| !p.bond_in_ring(6) && ring_run(p, 7, 10, R::Pyridine) && straight(p, 1, 7),
            &[M::SixBromoOnePyridinThreeYlHexane],
        )],
    );

    t.add(
        "I-C-C-C-C-C-C-C:C:N",
        clauses![when(
            |p| !p.bond_in_ring(6) && ring_run(p, 7, 10, R::Pyridine) && straight(p, 1, 7),
            &[M::SixIodoOnePyridinThreeYlHexane],
        )],
    );

    t.add(
        "C-C-C-C-C-C-C:C:C:N",
        clauses![
            when(|p| !p.bond_in_ring(5) && ring_run(p, 6, 10, R::Pyridine) && straight(p, 1, 6), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 0), &[M::FiveCarboxyOnePyridinFourYlPentane]),
                    when(|p| ester_carbon(p, 0), &[M::FiveAlkoxycarbonylOnePyridinFourYlPentane]),
                    when(|p| amide_carbon(p, 0), &[M::FiveCarbamoylOnePyridinFourYlPentane]),
                    when(|p| aldehyde_carbon(p, 0), &[M::FiveFormylOnePyridinFourYlPentane]),
                    when(|p| ketone_carbon(p, 0), &[M::FiveAcylOnePyridinFourYlPentane]),
                    when(|p| cyano(p, 0), &[M::FiveCyanoOnePyridinFourYlPentane]),
                ]),
            ]),
        ],
    );

    t.add(
        "N:C:C:C-C-C-C-C-C-O",
        clauses![
            when(|p| !p.bond_in_ring(3) && ring_run(p, 0, 4, R::Pyridine) && straight(p, 4, 9), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 9), &[M::FiveHydroxyOnePyridinFourYlPentane]),
                    when(|p| methoxy(p, 9), &[M::FiveMethoxyOnePyridinFourYlPentane]),
                    when(|p| ether_oxygen(p, 9), &[M::FiveAlkoxyOnePyridinFourYlPentane]),
                    when(|p| ester_oxygen(p, 9), &[M::FiveAcyloxyOnePyridinFourYlPentane]),
                ]),
            ]),
        ],
    );

    t.add(
        "N-C-C-C-C-C-C:C:C:N",
        clauses![
            when(|p| !p.bond_in_ring(5) && ring_run(p, 6, 10, R::Pyridine) && straight(p, 1, 6), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 0), &[M::FiveAminoOnePyridinFourYlPentane]),
                    when(|p| substituted_amine(p, 0), &[M::FiveAlkylaminoOnePyridinFourYlPentane]),
                    when(|p| amide_nitrogen(p, 0), &[M::FiveAcylaminoOnePyridinFourYlPentane]),
                ]),
            ]),
        ],
    );

    t.add(
        "N:C:C:C-C-C-C-C-C-S",
        clauses![
            when(|p| !p.bond_in_ring(3) && ring_run(p, 0, 4, R::Pyridine) && straight(p, 4, 9), &[]).then(clauses![
                first_of(vec![
                    when(|p| thiol(p, 9), &[M::FiveMercaptoOnePyridinFourYlPentane]),
                    when(|p| thioether(p, 9), &[M::FiveAlkylthioOnePyridinFourYlPentane]),
                    when(|p| sulfonyl(p, 9), &[M::FiveSulfonylOnePyridinFourYlPentane]),
                ]),
            ]),
        ],
    );

    t.add(
        "F-C-C-C-C-C-C:C:C:N",
        clauses![when(
            |p| !p.bond_in_ring(5) && ring_run(p, 6, 10, R::Pyridine) && straight(p, 1, 6),
            &[M::FiveFluoroOnePyridinFourYlPentane],
        )],
    );

    t.add(
        "Cl-C-C-C-C-C-C:C:C:N",
        clauses![when(
            |p| !p.bond_in_ring(5) && ring_run(p, 6, 10, R::Pyridine) && straight(p, 1, 6),
            &[M::FiveChloroOnePyridinFourYlPentane],
        )],
    );

    t.add(
        "Br-C-C-C-C-C-C:C:C:N",
        clauses![when(
            |p| !p.bond_in_ring(5) && ring_run(p, 6, 10, R::Pyridine) && straight(p, 1, 6),
            &[M::FiveBromoOnePyridinFourYlPentane],
        )],
    );

    t.add(
        "I-C-C-C-C-C-C:C:C:N",
        clauses![when(
            |p| !p.bond_in_ring(5) && ring_run(p, 6, 10, R::Pyridine) && straight(p, 1, 6),
            &[M::FiveIodoOnePyridinFourYlPentane],
        )],
    );

    t.add(
        "C-C-C-C-C-C-C-C-C:O",
        clauses![when(|p| !p.bond_in_ring(7) && ring_run(p, 8, 10, R::Furan) && straight(p, 1, 8), &[]).then(clauses![
            first_of(vec![
                when(|p| carboxyl_carbon(p, 0), &[M::SevenCarboxyOneFuranTwoYlHeptane]),
                when(|p| ester_carbon(p, 0), &[M::SevenAlkoxycarbonylOneFuranTwoYlHeptane]),
                when(|p| amide_carbon(p, 0), &[M::SevenCarbamoylOneFuranTwoYlHeptane]),
                when(|p| aldehyde_carbon(p, 0), &[M::SevenFormylOneFuranTwoYlHeptane]),
                when(|p| ketone_carbon(p, 0), &[M::SevenAcylOneFuranTwoYlHeptane]),
                when(|p| cyano(p, 0), &[M::SevenCyanoOneFuranTwoYlHeptane]),
            ]),
        ])],
    );

    t.add(
        "O-C-C-C-C-C-C-C-C:O",
        clauses![when(|p| !p.bond_in_ring(7) && ring_run(p, 8, 10, R::Furan) && straight(p, 1, 8), &[]).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 0), &[M::SevenHydroxyOneFuranTwoYlHeptane]),
                when(|p| methoxy(p, 0), &[M::SevenMethoxyOneFuranTwoYlHeptane]),
                when(|p| ether_oxygen(p, 0), &[M::SevenAlkoxyOneFuranTwoYlHeptane]),
                when(|p| ester_oxygen(p, 0), &[M::SevenAcyloxyOneFuranTwoYlHeptane]),
            ]),
        ])],
    );

    t.add(
        "N-C-C-C-C-C-C-C-C:O",
        clauses![when(|p| !p.bond_in_ring(7) && ring_run(p, 8, 10, R::Furan) && straight(p, 1, 8), &[]).then(clauses![
            first_of(vec![
                when(|p| primary_amine(p, 0), &[M::SevenAminoOneFuranTwoYlHeptane]),
                when(|p| substituted_amine(p, 0), &[M::SevenAlkylaminoOneFuranTwoYlHeptane]),
                when(|p| amide_nitrogen(p, 0), &[M::SevenAcylaminoOneFuranTwoYlHeptane]),
            ]),
        ])],
    );

    t.add(
        "O:C-C-C-C-C-C-C-C-S",
        clauses![when(|p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Furan) && straight(p, 2, 9), &[]).then(clauses![
            first_of(vec![
                when(|p| thiol(p, 9), &[M::SevenMercaptoOneFuranTwoYlHeptane]),
                when(|p| thioether(p, 9), &[M::SevenAlkylthioOneFuranTwoYlHeptane]),
                when(|p| sulfonyl(p, 9), &[M::SevenSulfonylOneFuranTwoYlHeptane]),
            ]),
        ])],
    );

    t.add(
        "F-C-C-C-C-C-C-C-C:O",
        clauses![when(
            |p| !p.bond_in_ring(7) && ring_run(p, 8, 10, R::Furan) && straight(p, 1, 8),
            &[M::SevenFluoroOneFuranTwoYlHeptane],
        )],
    );

    t.add(
        "Cl-C-C-C-C-C-C-C-C:O",
        clauses![when(
            |p| !p.bond_in_ring(7) && ring_run(p, 8, 10, R::Furan) && straight(p, 1, 8),
            &[M::SevenChloroOneFuranTwoYlHeptane],
        )],
    );

    t.add(
        "Br-C-C-C-C-C-C-C-C:O",
        clauses![when(
            |p| !p.bond_in_ring(7) && ring_run(p, 8, 10, R::Furan) && straight(p, 1, 8),
            &[M::SevenBromoOneFuranTwoYlHeptane],
        )],
    );

    t.add(
        "I-C-C-C-C-C-C-C-C:O",
        clauses![when(
            |p| !p.bond_in_ring(7) && ring_run(p, 8, 10, R::Furan) && straight(p, 1, 8),
            &[M::SevenIodoOneFuranTwoYlHeptane],
        )],
    );

    t.add(
        "C-C-C-C-C-C-C-C:C:O",
        clauses![when(|p| !p.bond_in_ring(6) && ring_run(p, 7, 10, R::Furan) && straight(p, 1, 7), &[]).then(clauses![
            first_of(vec![
                when(|p| carboxyl_carbon(p, 0), &[M::SixCarboxyOneFuranThreeYlHexane]),
                when(|p| ester_carbon(p, 0), &[M::SixAlkoxycarbonylOneFuranThreeYlHexane]),
                when(|p| amide_carbon(p, 0), &[M::SixCarbamoylOneFuranThreeYlHexane]),
                when(|p| aldehyde_carbon(p, 0), &[M::SixFormylOneFuranThreeYlHexane]),
                when(|p| ketone_carbon(p, 0), &[M::SixAcylOneFuranThreeYlHexane]),
                when(|p| cyano(p, 0), &[M::SixCyanoOneFuranThreeYlHexane]),
            ]),
        ])],
    );

    t.add(
        "O-C-C-C-C-C-C-C:C:O",
        clauses![when(|p| !p.bond_in_ring(6) && ring_run(p, 7, 10, R::Furan) && straight(p, 1, 7), &[]).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 0), &[M::SixHydroxyOneFuranThreeYlHexane]),
                when(|p| methoxy(p, 0), &[M::SixMethoxyOneFuranThreeYlHexane]),
                when(|p| ether_oxygen(p, 0), &[M::SixAlkoxyOneFuranThreeYlHexane]),
                when(|p| ester_oxygen(p, 0), &[M::SixAcyloxyOneFuranThreeYlHexane]),
            ]),
        ])],
    );

    t.add(
        "N-C-C-C-C-C-C-C:C:O",
        clauses![when(|p| !p.bond_in_ring(6) && ring_run(p, 7, 10, R::Furan) && straight(p, 1, 7), &[]).then(clauses![
            first_of(vec![
                when(|p| primary_amine(p, 0), &[M::SixAminoOneFuranThreeYlHexane]),
                when(|p| substituted_amine(p, 0), &[M::SixAlkylaminoOneFuranThreeYlHexane]),
                when(|p| amide_nitrogen(p, 0), &[M::SixAcylaminoOneFuranThreeYlHexane]),
            ]),
        ])],
    );

    t.add(
        "O:C:C-C-C-C-C-C-C-S",
        clauses![when(|p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Furan) && straight(p, 3, 9), &[]).then(clauses![
            first_of(vec![
                when(|p| thiol(p, 9), &[M::SixMercaptoOneFuranThreeYlHexane]),
                when(|p| thioether(p, 9), &[M::SixAlkylthioOneFuranThreeYlHexane]),
                when(|p| sulfonyl(p, 9), &[M::SixSulfonylOneFuranThreeYlHexane]),
            ]),
        ])],
    );

    t.add(
        "F-C-C-C-C-C-C-C:C:O",
        clauses![when(
            |p| !p.bond_in_ring(6) && ring_run(p, 7, 10, R::Furan) && straight(p, 1, 7),
            &[M::SixFluoroOneFuranThreeYlHexane],
        )],
    );

    t.add(
        "Cl-C-C-C-C-C-C-C:C:O",
        clauses![when(
            |p| !p.bond_in_ring(6) && ring_run(p, 7, 10, R::Furan) && straight(p, 1, 7),
            &[M::SixChloroOneFuranThreeYlHexane],
        )],
    );

    t.add(
        "Br-C-C-C-C-C-C-C:C:O",
        clauses![when(
            |p| !p.bond_in_ring(6) && ring_run(p, 7, 10, R::Furan) && straight(p, 1, 7),
            &[M::SixBromoOneFuranThreeYlHexane],
        )],
    );

    t.add(
        "I-C-C-C-C-C-C-C:C:O",
        clauses![when(
            |p| !p.bond_in_ring(6) && ring_run(p, 7, 10, R::Furan) && straight(p, 1, 7),
            &[M::SixIodoOneFuranThreeYlHexane],
        )],
    );

    t.add(
        "C-C-C-C-C-C-C-C-C:S",
        clauses![
            when(|p| !p.bond_in_ring(7) && ring_run(p, 8, 10, R::Thiophene) && straight(p, 1, 8), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 0), &[M::SevenCarboxyOneThiophenTwoYlHeptane]),
                    when(|p| ester_carbon(p, 0), &[M::SevenAlkoxycarbonylOneThiophenTwoYlHeptane]),
                    when(|p| amide_carbon(p, 0), &[M::SevenCarbamoylOneThiophenTwoYlHeptane]),
                    when(|p| aldehyde_carbon(p, 0), &[M::SevenFormylOneThiophenTwoYlHeptane]),
                    when(|p| ketone_carbon(p, 0), &[M::SevenAcylOneThiophenTwoYlHeptane]),
                    when(|p| cyano(p, 0), &[M::SevenCyanoOneThiophenTwoYlHeptane]),
                ]),
            ]),
        ],
    );

    t.add(
        "O-C-C-C-C-C-C-C-C:S",
        clauses![
            when(|p| !p.bond_in_ring(7) && ring_run(p, 8, 10, R::Thiophene) && straight(p, 1, 8), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 0), &[M::SevenHydroxyOneThiophenTwoYlHeptane]),
                    when(|p| methoxy(p, 0), &[M::SevenMethoxyOneThiophenTwoYlHeptane]),
                    when(|p| ether_oxygen(p, 0), &[M::SevenAlkoxyOneThiophenTwoYlHeptane]),
                    when(|p| ester_oxygen(p, 0), &[M::SevenAcyloxyOneThiophenTwoYlHeptane]),
                ]),
            ]),
        ],
    );

    t.add(
        "N-C-C-C-C-C-C-C-C:S",
        clauses![
            when(|p| !p.bond_in_ring(7) && ring_run(p, 8, 10, R::Thiophene) && straight(p, 1, 8), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 0), &[M::SevenAminoOneThiophenTwoYlHeptane]),
                    when(|p| substituted_amine(p, 0), &[M::SevenAlkylaminoOneThiophenTwoYlHeptane]),
                    when(|p| amide_nitrogen(p, 0), &[M::SevenAcylaminoOneThiophenTwoYlHeptane]),
                ]),
            ]),
        ],
    );

    t.add(
        "S-C-C-C-C-C-C-C-C:S",
        clauses![
            when(|p| !p.bond_in_ring(7) && ring_run(p, 8, 10, R::Thiophene) && straight(p, 1, 8), &[]).then(clauses![
                first_of(vec![
                    when(|p| thiol(p, 0), &[M::SevenMercaptoOneThiophenTwoYlHeptane]),
                    when(|p| thioether(p, 0), &[M::SevenAlkylthioOneThiophenTwoYlHeptane]),
                    when(|p| sulfonyl(p, 0), &[M::SevenSulfonylOneThiophenTwoYlHeptane]),
                ]),
            ]),
        ],
    );

    t.add(
        "F-C-C-C-C-C-C-C-C:S",
        clauses![when(
            |p| !p.bond_in_ring(7) && ring_run(p, 8, 10, R::Thiophene) && straight(p, 1, 8),
            &[M::SevenFluoroOneThiophenTwoYlHeptane],
        )],
    );

    t.add(
        "Cl-C-C-C-C-C-C-C-C:S",
        clauses![when(
            |p| !p.bond_in_ring(7) && ring_run(p, 8, 10, R::Thiophene) && straight(p, 1, 8),
            &[M::SevenChloroOneThiophenTwoYlHeptane],
        )],
    );

    t.add(
        "Br-C-C-C-C-C-C-C-C:S",
        clauses![when(
            |p| !p.bond_in_ring(7) && ring_run(p, 8, 10, R::Thiophene) && straight(p, 1, 8),
            &[M::SevenBromoOneThiophenTwoYlHeptane],
        )],
    );

    t.add(
        "I-C-C-C-C-C-C-C-C:S",
        clauses![when(
            |p| !p.bond_in_ring(7) && ring_run(p, 8, 10, R::Thiophene) && straight(p, 1, 8),
            &[M::SevenIodoOneThiophenTwoYlHeptane],
        )],
    );

    t.add(
        "C-C-C-C-C-C-C-C:C:S",
        clauses![
            when(|p| !p.bond_in_ring(6) && ring_run(p, 7, 10, R::Thiophene) && straight(p, 1, 7), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 0), &[M::SixCarboxyOneThiophenThreeYlHexane]),
                    when(|p| ester_carbon(p, 0), &[M::SixAlkoxycarbonylOneThiophenThreeYlHexane]),
                    when(|p| amide_carbon(p, 0), &[M::SixCarbamoylOneThiophenThreeYlHexane]),
                    when(|p| aldehyde_carbon(p, 0), &[M::SixFormylOneThiophenThreeYlHexane]),
                    when(|p| ketone_carbon(p, 0), &[M::SixAcylOneThiophenThreeYlHexane]),
                    when(|p| cyano(p, 0), &[M::SixCyanoOneThiophenThreeYlHexane]),
                ]),
            ]),
        ],
    );

    t.add(
        "O-C-C-C-C-C-C-C:C:S",
        clauses![
            when(|p| !p.bond_in_ring(6) && ring_run(p, 7, 10, R::Thiophene) && straight(p, 1, 7), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 0), &[M::SixHydroxyOneThiophenThreeYlHexane]),
                    when(|p| methoxy(p, 0), &[M::SixMethoxyOneThiophenThreeYlHexane]),
                    when(|p| ether_oxygen(p, 0), &[M::SixAlkoxyOneThiophenThreeYlHexane]),
                    when(|p| ester_oxygen(p, 0), &[M::SixAcyloxyOneThiophenThreeYlHexane]),
                ]),
            ]),
        ],
    );

    t.add(
        "N-C-C-C-C-C-C-C:C:S",
        clauses![
            when(|p| !p.bond_in_ring(6) && ring_run(p, 7, 10, R::Thiophene) && straight(p, 1, 7), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 0), &[M::SixAminoOneThiophenThreeYlHexane]),
                    when(|p| substituted_amine(p, 0), &[M::SixAlkylaminoOneThiophenThreeYlHexane]),
                    when(|p| amide_nitrogen(p, 0), &[M::SixAcylaminoOneThiophenThreeYlHexane]),
                ]),
            ]),
        ],
    );

    t.add(
        "S-C-C-C-C-C-C-C:C:S",
        clauses![
            when(|p| !p.bond_in_ring(6) && ring_run(p, 7, 10, R::Thiophene) && straight(p, 1, 7), &[]).then(clauses![
                first_of(vec![
                    when(|p| thiol(p, 0), &[M::SixMercaptoOneThiophenThreeYlHexane]),
                    when(|p| thioether(p, 0), &[M::SixAlkylthioOneThiophenThreeYlHexane]),
                    when(|p| sulfonyl(p, 0), &[M::SixSulfonylOneThiophenThreeYlHexane]),
                ]),
            ]),
        ],
    );

    t.add(
        "F-C-C-C-C-C-C-C:C:S",
        clauses![when(
            |p| !p.bond_in_ring(6) && ring_run(p, 7, 10, R::Thiophene) && straight(p, 1, 7),
            &[M::SixFluoroOneThiophenThreeYlHexane],
        )],
    );

    t.add(
        "Cl-C-C-C-C-C-C-C:C:S",
        clauses![when(
            |p| !p.bond_in_ring(6) && ring_run(p, 7, 10, R::Thiophene) && straight(p, 1, 7),
            &[M::SixChloroOneThiophenThreeYlHexane],
        )],
    );

    t.add(
        "Br-C-C-C-C-C-C-C:C:S",
        clauses![when(
            |p| !p.bond_in_ring(6) && ring_run(p, 7, 10, R::Thiophene) && straight(p, 1, 7),
            &[M::SixBromoOneThiophenThreeYlHexane],
        )],
    );

    t.add(
        "I-C-C-C-C-C-C-C:C:S",
        clauses![when(
            |p| !p.bond_in_ring(6) && ring_run(p, 7, 10, R::Thiophene) && straight(p, 1, 7),
            &[M::SixIodoOneThiophenThreeYlHexane],
        )],
    );

    t.add(
        "C-C-C-C-C-C-C-C:N:C",
        clauses![
            when(|p| !p.bond_in_ring(6) && ring_run(p, 7, 10, R::Pyrimidine) && straight(p, 1, 7), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 0), &[M::SixCarboxyOnePyrimidinTwoYlHexane]),
                    when(|p| ester_carbon(p, 0), &[M::SixAlkoxycarbonylOnePyrimidinTwoYlHexane]),
                    when(|p| amide_carbon(p, 0), &[M::SixCarbamoylOnePyrimidinTwoYlHexane]),
                    when(|p| aldehyde_carbon(p, 0), &[M::SixFormylOnePyrimidinTwoYlHexane]),
                    when(|p| ketone_carbon(p, 0), &[M::SixAcylOnePyrimidinTwoYlHexane]),
                    when(|p| cyano(p, 0), &[M::SixCyanoOnePyrimidinTwoYlHexane]),
                ]),
            ]),
            when(|p| !p.bond_in_ring(6) && ring_run(p, 7, 10, R::Thiazole) && straight(p, 1, 7), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 0), &[M::SixCarboxyOneThiazolTwoYlHexane]),
                    when(|p| ester_carbon(p, 0), &[M::SixAlkoxycarbonylOneThiazolTwoYlHexane]),
                    when(|p| amide_carbon(p, 0), &[M::SixCarbamoylOneThiazolTwoYlHexane]),
                    when(|p| aldehyde_carbon(p, 0), &[M::SixFormylOneThiazolTwoYlHexane]),
                    when(|p| ketone_carbon(p, 0), &[M::SixAcylOneThiazolTwoYlHexane]),
                    when(|p| cyano(p, 0), &[M::SixCyanoOneThiazolTwoYlHexane]),
                ]),
            ]),
        ],
    );

    t.add(
        "C:N:C-C-C-C-C-C-C-O",
        clauses![
            when(|p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Pyrimidine) && straight(p, 3, 9), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 9), &[M::SixHydroxyOnePyrimidinTwoYlHexane]),
                    when(|p| methoxy(p, 9), &[M::SixMethoxyOnePyrimidinTwoYlHexane]),
                    when(|p| ether_oxygen(p, 9), &[M::SixAlkoxyOnePyrimidinTwoYlHexane]),
                    when(|p| ester_oxygen(p, 9), &[M::SixAcyloxyOnePyrimidinTwoYlHexane]),
                ]),
            ]),
            when(|p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Thiazole) && straight(p, 3, 9), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 9), &[M::SixHydroxyOneThiazolTwoYlHexane]),
                    when(|p| methoxy(p, 9), &[M::SixMethoxyOneThiazolTwoYlHexane]),
                    when(|p| ether_oxygen(p, 9), &[M::SixAlkoxyOneThiazolTwoYlHexane]),
                    when(|p| ester_oxygen(p, 9), &[M::SixAcyloxyOneThiazolTwoYlHexane]),
                ]),
            ]),
        ],
    );

    t.add(
        "C:N:C-C-C-C-C-C-C-N",
        clauses![
            when(|p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Pyrimidine) && straight(p, 3, 9), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 9), &[M::SixAminoOnePyrimidinTwoYlHexane]),
                    when(|p| substituted_amine(p, 9), &[M::SixAlkylaminoOnePyrimidinTwoYlHexane]),
                    when(|p| amide_nitrogen(p, 9), &[M::SixAcylaminoOnePyrimidinTwoYlHexane]),
                ]),
            ]),
            when(|p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Thiazole) && straight(p, 3, 9), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 9), &[M::SixAminoOneThiazolTwoYlHexane]),
                    when(|p| substituted_amine(p, 9), &[M::SixAlkylaminoOneThiazolTwoYlHexane]),
                    when(|p| amide_nitrogen(p, 9), &[M::SixAcylaminoOneThiazolTwoYlHexane]),
                ]),
            ]),
        ],
    );

    t.add(
        "C:N:C-C-C-C-C-C-C-S",
        clauses![
            when(|p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Pyrimidine) && straight(p, 3, 9), &[]).then(clauses![
                first_of(vec![
                    when(|p| thiol(p, 9), &[M::SixMercaptoOnePyrimidinTwoYlHexane]),
                    when(|p| thioether(p, 9), &[M::SixAlkylthioOnePyrimidinTwoYlHexane]),
                    when(|p| sulfonyl(p, 9), &[M::SixSulfonylOnePyrimidinTwoYlHexane]),
                ]),
            ]),
            when(|p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Thiazole) && straight(p, 3, 9), &[]).then(clauses![
                first_of(vec![
                    when(|p| thiol(p, 9), &[M::SixMercaptoOneThiazolTwoYlHexane]),
                    when(|p| thioether(p, 9), &[M::SixAlkylthioOneThiazolTwoYlHexane]),
                    when(|p| sulfonyl(p, 9), &[M::SixSulfonylOneThiazolTwoYlHexane]),
                ]),
            ]),
        ],
    );

    t.add(
        "C:N:C-C-C-C-C-C-C-F",
        clauses![
            when(
                |p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Pyrimidine) && straight(p, 3, 9),
                &[M::SixFluoroOnePyrimidinTwoYlHexane],
            ),
            when(
                |p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Thiazole) && straight(p, 3, 9),
                &[M::SixFluoroOneThiazolTwoYlHexane],
            ),
        ],
    );

    t.add(
        "C:N:C-C-C-C-C-C-C-Cl",
        clauses![
            when(
                |p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Pyrimidine) && straight(p, 3, 9),
                &[M::SixChloroOnePyrimidinTwoYlHexane],
            ),
            when(
                |p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Thiazole) && straight(p, 3, 9),
                &[M::SixChloroOneThiazolTwoYlHexane],
            ),
        ],
    );

    t.add(
        "Br-C-C-C-C-C-C-C:N:C",
        clauses![
            when(
                |p| !p.bond_in_ring(6) && ring_run(p, 7, 10, R::Pyrimidine) && straight(p, 1, 7),
                &[M::SixBromoOnePyrimidinTwoYlHexane],
            ),
            when(
                |p| !p.bond_in_ring(6) && ring_run(p, 7, 10, R::Thiazole) && straight(p, 1, 7),
                &[M::SixBromoOneThiazolTwoYlHexane],
            ),
        ],
    );

    t.add(
        "C:N:C-C-C-C-C-C-C-I",
        clauses![
            when(
                |p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Pyrimidine) && straight(p, 3, 9),
                &[M::SixIodoOnePyrimidinTwoYlHexane],
            ),
            when(
                |p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Thiazole) && straight(p, 3, 9),
                &[M::SixIodoOneThiazolTwoYlHexane],
            ),
        ],
    );
}

fn eleven(t: &mut RuleTable) {
    t.add(
        "C-C-C-C-C-C-C-C-C-C:N",
        clauses![
            when(|p| !p.bond_in_ring(8) && ring_run(p, 9, 11, R::Pyridine) && straight(p, 1, 9), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 0), &[M::EightCarboxyOnePyridinTwoYlOctane]),
                    when(|p| ester_carbon(p, 0), &[M::EightAlkoxycarbonylOnePyridinTwoYlOctane]),
                    when(|p| amide_carbon(p, 0), &[M::EightCarbamoylOnePyridinTwoYlOctane]),
                    when(|p| aldehyde_carbon(p, 0), &[M::EightFormylOnePyridinTwoYlOctane]),
                    when(|p| ketone_carbon(p, 0), &[M::EightAcylOnePyridinTwoYlOctane]),
                    when(|p| cyano(p, 0), &[M::EightCyanoOnePyridinTwoYlOctane]),
                ]),
            ]),
            when(|p| !p.bond_in_ring(8) && ring_run(p, 9, 11, R::Pyrrole) && straight(p, 1, 9), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 0), &[M::EightCarboxyOnePyrrolTwoYlOctane]),
                    when(|p| ester_carbon(p, 0), &[M::EightAlkoxycarbonylOnePyrrolTwoYlOctane]),
                    when(|p| amide_carbon(p, 0), &[M::EightCarbamoylOnePyrrolTwoYlOctane]),
                    when(|p| aldehyde_carbon(p, 0), &[M::EightFormylOnePyrrolTwoYlOctane]),
                    when(|p| ketone_carbon(p, 0), &[M::EightAcylOnePyrrolTwoYlOctane]),
                    when(|p| cyano(p, 0), &[M::EightCyanoOnePyrrolTwoYlOctane]),
                ]),
            ]),
        ],
    );

    t.add(
        "N:C-C-C-C-C-C-C-C-C-O",
        clauses![
            when(|p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Pyridine) && straight(p, 2, 10), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 10), &[M::EightHydroxyOnePyridinTwoYlOctane]),
                    when(|p| methoxy(p, 10), &[M::EightMethoxyOnePyridinTwoYlOctane]),
                    when(|p| ether_oxygen(p, 10), &[M::EightAlkoxyOnePyridinTwoYlOctane]),
                    when(|p| ester_oxygen(p, 10), &[M::EightAcyloxyOnePyridinTwoYlOctane]),
                ]),
            ]),
            when(|p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Pyrrole) && straight(p, 2, 10), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 10), &[M::EightHydroxyOnePyrrolTwoYlOctane]),
                    when(|p| methoxy(p, 10), &[M::EightMethoxyOnePyrrolTwoYlOctane]),
                    when(|p| ether_oxygen(p, 10), &[M::EightAlkoxyOnePyrrolTwoYlOctane]),
                    when(|p| ester_oxygen(p, 10), &[M::EightAcyloxyOnePyrrolTwoYlOctane]),
                ]),
            ]),
        ],
    );

    t.add(
        "N-C-C-C-C-C-C-C-C-C:N",
        clauses![
            when(|p| !p.bond_in_ring(8) && ring_run(p, 9, 11, R::Pyridine) && straight(p, 1, 9), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 0), &[M::EightAminoOnePyridinTwoYlOctane]),
                    when(|p| substituted_amine(p, 0), &[M::EightAlkylaminoOnePyridinTwoYlOctane]),
                    when(|p| amide_nitrogen(p, 0), &[M::EightAcylaminoOnePyridinTwoYlOctane]),
                ]),
            ]),
            when(|p| !p.bond_in_ring(8) && ring_run(p, 9, 11, R::Pyrrole) && straight(p, 1, 9), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 0), &[M::EightAminoOnePyrrolTwoYlOctane]),
                    when(|p| substituted_amine(p, 0), &[M::EightAlkylaminoOnePyrrolTwoYlOctane]),
                    when(|p| amide_nitrogen(p, 0), &[M::EightAcylaminoOnePyrrolTwoYlOctane]),
                ]),
            ]),
        ],
    );

    t.add(
        "N:C-C-C-C-C-C-C-C-C-S",
        clauses![
            when(|p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Pyridine) && straight(p, 2, 10), &[]).then(clauses![
                first_of(vec![
                    when(|p| thiol(p, 10), &[M::EightMercaptoOnePyridinTwoYlOctane]),
                    when(|p| thioether(p, 10), &[M::EightAlkylthioOnePyridinTwoYlOctane]),
                    when(|p| sulfonyl(p, 10), &[M::EightSulfonylOnePyridinTwoYlOctane]),
                ]),
            ]),
            when(|p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Pyrrole) && straight(p, 2, 10), &[]).then(clauses![
                first_of(vec![
                    when(|p| thiol(p, 10), &[M::EightMercaptoOnePyrrolTwoYlOctane]),
                    when(|p| thioether(p, 10), &[M::EightAlkylthioOnePyrrolTwoYlOctane]),
                    when(|p| sulfonyl(p, 10), &[M::EightSulfonylOnePyrrolTwoYlOctane]),
                ]),
            ]),
        ],
    );

    t.add(
        "F-C-C-C-C-C-C-C-C-C:N",
        clauses![
            when(
                |p| !p.bond_in_ring(8) && ring_run(p, 9, 11, R::Pyridine) && straight(p, 1, 9),
                &[M::EightFluoroOnePyridinTwoYlOctane],
            ),
            when(
                |p| !p.bond_in_ring(8) && ring_run(p, 9, 11, R::Pyrrole) && straight(p, 1, 9),
                &[M::EightFluoroOnePyrrolTwoYlOctane],
            ),
        ],
    );

    t.add(
        "Cl-C-C-C-C-C-C-C-C-C:N",
        clauses![
            when(
                |p| !p.bond_in_ring(8) && ring_run(p, 9, 11, R::Pyridine) && straight(p, 1, 9),
                &[M::EightChloroOnePyridinTwoYlOctane],
            ),
            when(
                |p| !p.bond_in_ring(8) && ring_run(p, 9, 11, R::Pyrrole) && straight(p, 1, 9),
                &[M::EightChloroOnePyrrolTwoYlOctane],
            ),
        ],
    );

    t.add(
        "Br-C-C-C-C-C-C-C-C-C:N",
        clauses![
            when(
                |p| !p.bond_in_ring(8) && ring_run(p, 9, 11, R::Pyridine) && straight(p, 1, 9),
                &[M::EightBromoOnePyridinTwoYlOctane],
            ),
            when(
                |p| !p.bond_in_ring(8) && ring_run(p, 9, 11, R::Pyrrole) && straight(p, 1, 9),
                &[M::EightBromoOnePyrrolTwoYlOctane],
            ),
        ],
    );

    t.add(
        "I-C-C-C-C-C-C-C-C-C:N",
        clauses![
            when(
                |p| !p.bond_in_ring(8) && ring_run(p, 9, 11, R::Pyridine) && straight(p, 1, 9),
                &[M::EightIodoOnePyridinTwoYlOctane],
            ),
            when(
                |p| !p.bond_in_ring(8) && ring_run(p, 9, 11, R::Pyrrole) && straight(p, 1, 9),
                &[M::EightIodoOnePyrrolTwoYlOctane],
            ),
        ],
    );

    t.add(
        "C-C-C-C-C-C-C-C-C:C:N",
        clauses![
            when(|p| !p.bond_in_ring(7) && ring_run(p, 8, 11, R::Pyridine) && straight(p, 1, 8), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 0), &[M::SevenCarboxyOnePyridinThreeYlHeptane]),
                    when(|p| ester_carbon(p, 0), &[M::SevenAlkoxycarbonylOnePyridinThreeYlHeptane]),
                    when(|p| amide_carbon(p, 0), &[M::SevenCarbamoylOnePyridinThreeYlHeptane]),
                    when(|p| aldehyde_carbon(p, 0), &[M::SevenFormylOnePyridinThreeYlHeptane]),
                    when(|p| ketone_carbon(p, 0), &[M::SevenAcylOnePyridinThreeYlHeptane]),
                    when(|p| cyano(p, 0), &[M::SevenCyanoOnePyridinThreeYlHeptane]),
                ]),
            ]),
        ],
    );

    t.add(
        "N:C:C-C-C-C-C-C-C-C-O",
        clauses![
            when(|p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Pyridine) && straight(p, 3, 10), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 10), &[M::SevenHydroxyOnePyridinThreeYlHeptane]),
                    when(|p| methoxy(p, 10), &[M::SevenMethoxyOnePyridinThreeYlHeptane]),
                    when(|p| ether_oxygen(p, 10), &[M::SevenAlkoxyOnePyridinThreeYlHeptane]),
                    when(|p| ester_oxygen(p, 10), &[M::SevenAcyloxyOnePyridinThreeYlHeptane]),
                ]),
            ]),
        ],
    );

    t.add(
        "N-C-C-C-C-C-C-C-C:C:N",
        clauses![
            when(|p| !p.bond_in_ring(7) && ring_run(p, 8, 11, R::Pyridine) && straight(p, 1, 8), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 0), &[M::SevenAminoOnePyridinThreeYlHeptane]),
                    when(|p| substituted_amine(p, 0), &[M::SevenAlkylaminoOnePyridinThreeYlHeptane]),
                    when(|p| amide_nitrogen(p, 0), &[M::SevenAcylaminoOnePyridinThreeYlHeptane]),
                ]),
            ]),
        ],
    );

    t.add(
        "N:C:C-C-C-C-C-C-C-C-S",
        clauses![
            when(|p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Pyridine) && straight(p, 3, 10), &[]).then(clauses![
                first_of(vec![
                    when(|p| thiol(p, 10), &[M::SevenMercaptoOnePyridinThreeYlHeptane]),
                    when(|p| thioether(p, 10), &[M::SevenAlkylthioOnePyridinThreeYlHeptane]),
                    when(|p| sulfonyl(p, 10), &[M::SevenSulfonylOnePyridinThreeYlHeptane]),
                ]),
            ]),
        ],
    );

    t.add(
        "F-C-C-C-C-C-C-C-C:C:N",
        clauses![when(
            |p| !p.bond_in_ring(7) && ring_run(p, 8, 11, R::Pyridine) && straight(p, 1, 8),
            &[M::SevenFluoroOnePyridinThreeYlHeptane],
        )],
    );

    t.add(
        "Cl-C-C-C-C-C-C-C-C:C:N",
        clauses![when(
            |p| !p.bond_in_ring(7) && ring_run(p, 8, 11, R::Pyridine) && straight(p, 1, 8),
            &[M::SevenChloroOnePyridinThreeYlHeptane],
        )],
    );

    t.add(
        "Br-C-C-C-C-C-C-C-C:C:N",
        clauses![when(
            |p| !p.bond_in_ring(7) && ring_run(p, 8, 11, R::Pyridine) && straight(p, 1, 8),
            &[M::SevenBromoOnePyridinThreeYlHeptane],
        )],
    );

    t.add(
        "I-C-C-C-C-C-C-C-C:C:N",
        clauses![when(
            |p| !p.bond_in_ring(7) && ring_run(p, 8, 11, R::Pyridine) && straight(p, 1, 8),
            &[M::SevenIodoOnePyridinThreeYlHeptane],
        )],
    );

    t.add(
        "C-C-C-C-C-C-C-C:C:C:N",
        clauses![
            when(|p| !p.bond_in_ring(6) && ring_run(p, 7, 11, R::Pyridine) && straight(p, 1, 7), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 0), &[M::SixCarboxyOnePyridinFourYlHexane]),
                    when(|p| ester_carbon(p, 0), &[M::SixAlkoxycarbonylOnePyridinFourYlHexane]),
                    when(|p| amide_carbon(p, 0), &[M::SixCarbamoylOnePyridinFourYlHexane]),
                    when(|p| aldehyde_carbon(p, 0), &[M::SixFormylOnePyridinFourYlHexane]),
                    when(|p| ketone_carbon(p, 0), &[M::SixAcylOnePyridinFourYlHexane]),
                    when(|p| cyano(p, 0), &[M::SixCyanoOnePyridinFourYlHexane]),
                ]),
            ]),
        ],
    );

    t.add(
        "N:C:C:C-C-C-C-C-C-C-O",
        clauses![
            when(|p| !p.bond_in_ring(3) && ring_run(p, 0, 4, R::Pyridine) && straight(p, 4, 10), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 10), &[M::SixHydroxyOnePyridinFourYlHexane]),
                    when(|p| methoxy(p, 10), &[M::SixMethoxyOnePyridinFourYlHexane]),
                    when(|p| ether_oxygen(p, 10), &[M::SixAlkoxyOnePyridinFourYlHexane]),
                    when(|p| ester_oxygen(p, 10), &[M::SixAcyloxyOnePyridinFourYlHexane]),
                ]),
            ]),
        ],
    );

    t.add(
        "N-C-C-C-C-C-C-C:C:C:N",
        clauses![
            when(|p| !p.bond_in_ring(6) && ring_run(p, 7, 11, R::Pyridine) && straight(p, 1, 7), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 0), &[M::SixAminoOnePyridinFourYlHexane]),
                    when(|p| substituted_amine(p, 0), &[M::SixAlkylaminoOnePyridinFourYlHexane]),
                    when(|p| amide_nitrogen(p, 0), &[M::SixAcylaminoOnePyridinFourYlHexane]),
                ]),
            ]),
        ],
    );

    t.add(
        "N:C:C:C-C-C-C-C-C-C-S",
        clauses![
            when(|p| !p.bond_in_ring(3) && ring_run(p, 0, 4, R::Pyridine) && straight(p, 4, 10), &[]).then(clauses![
                first_of(vec![
                    when(|p| thiol(p, 10), &[M::SixMercaptoOnePyridinFourYlHexane]),
                    when(|p| thioether(p, 10), &[M::SixAlkylthioOnePyridinFourYlHexane]),
                    when(|p| sulfonyl(p, 10), &[M::SixSulfonylOnePyridinFourYlHexane]),
                ]),
            ]),
        ],
    );

    t.add(
        "F-C-C-C-C-C-C-C:C:C:N",
        clauses![when(
            |p| !p.bond_in_ring(6) && ring_run(p, 7, 11, R::Pyridine) && straight(p, 1, 7),
            &[M::SixFluoroOnePyridinFourYlHexane],
        )],
    );

    t.add(
        "Cl-C-C-C-C-C-C-C:C:C:N",
        clauses![when(
            |p| !p.bond_in_ring(6) && ring_run(p, 7, 11, R::Pyridine) && straight(p, 1, 7),
            &[M::SixChloroOnePyridinFourYlHexane],
        )],
    );

    t.add(
        "Br-C-C-C-C-C-C-C:C:C:N",
        clauses![when(
            |p| !p.bond_in_ring(6) && ring_run(p, 7, 11, R::Pyridine) && straight(p, 1, 7),
            &[M::SixBromoOnePyridinFourYlHexane],
        )],
    );

    t.add(
        "I-C-C-C-C-C-C-C:C:C:N",
        clauses![when(
            |p| !p.bond_in_ring(6) && ring_run(p, 7, 11, R::Pyridine) && straight(p, 1, 7),
            &[M::SixIodoOnePyridinFourYlHexane],
        )],
    );

    t.add(
        "C-C-C-C-C-C-C-C-C-C:O",
        clauses![when(|p| !p.bond_in_ring(8) && ring_run(p, 9, 11, R::Furan) && straight(p, 1, 9), &[]).then(clauses![
            first_of(vec![
                when(|p| carboxyl_carbon(p, 0), &[M::EightCarboxyOneFuranTwoYlOctane]),
                when(|p| ester_carbon(p, 0), &[M::EightAlkoxycarbonylOneFuranTwoYlOctane]),
                when(|p| amide_carbon(p, 0), &[M::EightCarbamoylOneFuranTwoYlOctane]),
                when(|p| aldehyde_carbon(p, 0), &[M::EightFormylOneFuranTwoYlOctane]),
                when(|p| ketone_carbon(p, 0), &[M::EightAcylOneFuranTwoYlOctane]),
                when(|p| cyano(p, 0), &[M::EightCyanoOneFuranTwoYlOctane]),
            ]),
        ])],
    );

    t.add(
        "O-C-C-C-C-C-C-C-C-C:O",
        clauses![when(|p| !p.bond_in_ring(8) && ring_run(p, 9, 11, R::Furan) && straight(p, 1, 9), &[]).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 0), &[M::EightHydroxyOneFuranTwoYlOctane]),
                when(|p| methoxy(p, 0), &[M::EightMethoxyOneFuranTwoYlOctane]),
                when(|p| ether_oxygen(p, 0), &[M::EightAlkoxyOneFuranTwoYlOctane]),
                when(|p| ester_oxygen(p, 0), &[M::EightAcyloxyOneFuranTwoYlOctane]),
            ]),
        ])],
    );

    t.add(
        "N-C-C-C-C-C-C-C-C-C:O",
        clauses![when(|p| !p.bond_in_ring(8) && ring_run(p, 9, 11, R::Furan) && straight(p, 1, 9), &[]).then(clauses![
            first_of(vec![
                when(|p| primary_amine(p, 0), &[M::EightAminoOneFuranTwoYlOctane]),
                when(|p| substituted_amine(p, 0), &[M::EightAlkylaminoOneFuranTwoYlOctane]),
                when(|p| amide_nitrogen(p, 0), &[M::EightAcylaminoOneFuranTwoYlOctane]),
            ]),
        ])],
    );

    t.add(
        "O:C-C-C-C-C-C-C-C-C-S",
        clauses![when(|p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Furan) && straight(p, 2, 10), &[]).then(clauses![
            first_of(vec![
                when(|p| thiol(p, 10), &[M::EightMercaptoOneFuranTwoYlOctane]),
                when(|p| thioether(p, 10), &[M::EightAlkylthioOneFuranTwoYlOctane]),
                when(|p| sulfonyl(p, 10), &[M::EightSulfonylOneFuranTwoYlOctane]),
            ]),
        ])],
    );

    t.add(
        "F-C-C-C-C-C-C-C-C-C:O",
        clauses![when(
            |p| !p.bond_in_ring(8) && ring_run(p, 9, 11, R::Furan) && straight(p, 1, 9),
            &[M::EightFluoroOneFuranTwoYlOctane],
        )],
    );

    t.add(
        "Cl-C-C-C-C-C-C-C-C-C:O",
        clauses![when(
            |p| !p.bond_in_ring(8) && ring_run(p, 9, 11, R::Furan) && straight(p, 1, 9),
            &[M::EightChloroOneFuranTwoYlOctane],
        )],
    );

    t.add(
        "Br-C-C-C-C-C-C-C-C-C:O",
        clauses![when(
            |p| !p.bond_in_ring(8) && ring_run(p, 9, 11, R::Furan) && straight(p, 1, 9),
            &[M::EightBromoOneFuranTwoYlOctane],
        )],
    );

    t.add(
        "I-C-C-C-C-C-C-C-C-C:O",
        clauses![when(
            |p| !p.bond_in_ring(8) && ring_run(p, 9, 11, R::Furan) && straight(p, 1, 9),
            &[M::EightIodoOneFuranTwoYlOctane],
        )],
    );

    t.add(
        "C-C-C-C-C-C-C-C-C:C:O",
        clauses![when(|p| !p.bond_in_ring(7) && ring_run(p, 8, 11, R::Furan) && straight(p, 1, 8), &[]).then(clauses![
            first_of(vec![
                when(|p| carboxyl_carbon(p, 0), &[M::SevenCarboxyOneFuranThreeYlHeptane]),
                when(|p| ester_carbon(p, 0), &[M::SevenAlkoxycarbonylOneFuranThreeYlHeptane]),
                when(|p| amide_carbon(p, 0), &[M::SevenCarbamoylOneFuranThreeYlHeptane]),
                when(|p| aldehyde_carbon(p, 0), &[M::SevenFormylOneFuranThreeYlHeptane]),
                when(|p| ketone_carbon(p, 0), &[M::SevenAcylOneFuranThreeYlHeptane]),
                when(|p| cyano(p, 0), &[M::SevenCyanoOneFuranThreeYlHeptane]),
            ]),
        ])],
    );

    t.add(
        "O-C-C-C-C-C-C-C-C:C:O",
        clauses![when(|p| !p.bond_in_ring(7) && ring_run(p, 8, 11, R::Furan) && straight(p, 1, 8), &[]).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 0), &[M::SevenHydroxyOneFuranThreeYlHeptane]),
                when(|p| methoxy(p, 0), &[M::SevenMethoxyOneFuranThreeYlHeptane]),
                when(|p| ether_oxygen(p, 0), &[M::SevenAlkoxyOneFuranThreeYlHeptane]),
                when(|p| ester_oxygen(p, 0), &[M::SevenAcyloxyOneFuranThreeYlHeptane]),
            ]),
        ])],
    );

    t.add(
        "N-C-C-C-C-C-C-C-C:C:O",
        clauses![when(|p| !p.bond_in_ring(7) && ring_run(p, 8, 11, R::Furan) && straight(p, 1, 8), &[]).then(clauses![
            first_of(vec![
                when(|p| primary_amine(p, 0), &[M::SevenAminoOneFuranThreeYlHeptane]),
                when(|p| substituted_amine(p, 0), &[M::SevenAlkylaminoOneFuranThreeYlHeptane]),
                when(|p| amide_nitrogen(p, 0), &[M::SevenAcylaminoOneFuranThreeYlHeptane]),
            ]),
        ])],
    );

    t.add(
        "O:C:C-C-C-C-C-C-C-C-S",
        clauses![when(|p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Furan) && straight(p, 3, 10), &[]).then(clauses![
            first_of(vec![
                when(|p| thiol(p, 10), &[M::SevenMercaptoOneFuranThreeYlHeptane]),
                when(|p| thioether(p, 10), &[M::SevenAlkylthioOneFuranThreeYlHeptane]),
                when(|p| sulfonyl(p, 10), &[M::SevenSulfonylOneFuranThreeYlHeptane]),
            ]),
        ])],
    );

    t.add(
        "F-C-C-C-C-C-C-C-C:C:O",
        clauses![when(
            |p| !p.bond_in_ring(7) && ring_run(p, 8, 11, R::Furan) && straight(p, 1, 8),
            &[M::SevenFluoroOneFuranThreeYlHeptane],
        )],
    );

    t.add(
        "Cl-C-C-C-C-C-C-C-C:C:O",
        clauses![when(
            |p| !p.bond_in_ring(7) && ring_run(p, 8, 11, R::Furan) && straight(p, 1, 8),
            &[M::SevenChloroOneFuranThreeYlHeptane],
        )],
    );

    t.add(
        "Br-C-C-C-C-C-C-C-C:C:O",
        clauses![when(
            |p| !p.bond_in_ring(7) && ring_run(p, 8, 11, R::Furan) && straight(p, 1, 8),
            &[M::SevenBromoOneFuranThreeYlHeptane],
        )],
    );

    t.add(
        "I-C-C-C-C-C-C-C-C:C:O",
        clauses![when(
            |p| !p.bond_in_ring(7) && ring_run(p, 8, 11, R::Furan) && straight(p, 1, 8),
            &[M::SevenIodoOneFuranThreeYlHeptane],
        )],
    );

    t.add(
        "C-C-C-C-C-C-C-C-C-C:S",
        clauses![
            when(|p| !p.bond_in_ring(8) && ring_run(p, 9, 11, R::Thiophene) && straight(p, 1, 9), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 0), &[M::EightCarboxyOneThiophenTwoYlOctane]),
                    when(|p| ester_carbon(p, 0), &[M::EightAlkoxycarbonylOneThiophenTwoYlOctane]),
                    when(|p| amide_carbon(p, 0), &[M::EightCarbamoylOneThiophenTwoYlOctane]),
                    when(|p| aldehyde_carbon(p, 0), &[M::EightFormylOneThiophenTwoYlOctane]),
                    when(|p| ketone_carbon(p, 0), &[M::EightAcylOneThiophenTwoYlOctane]),
                    when(|p| cyano(p, 0), &[M::EightCyanoOneThiophenTwoYlOctane]),
                ]),
            ]),
        ],
    );

    t.add(
        "O-C-C-C-C-C-C-C-C-C:S",
        clauses![
            when(|p| !p.bond_in_ring(8) && ring_run(p, 9, 11, R::Thiophene) && straight(p, 1, 9), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 0), &[M::EightHydroxyOneThiophenTwoYlOctane]),
                    when(|p| methoxy(p, 0), &[M::EightMethoxyOneThiophenTwoYlOctane]),
                    when(|p| ether_oxygen(p, 0), &[M::EightAlkoxyOneThiophenTwoYlOctane]),
                    when(|p| ester_oxygen(p, 0), &[M::EightAcyloxyOneThiophenTwoYlOctane]),
                ]),
            ]),
        ],
    );

    t.add(
        "N-C-C-C-C-C-C-C-C-C:S",
        clauses![
            when(|p| !p.bond_in_ring(8) && ring_run(p, 9, 11, R::Thiophene) && straight(p, 1, 9), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 0), &[M::EightAminoOneThiophenTwoYlOctane]),
                    when(|p| substituted_amine(p, 0), &[M::EightAlkylaminoOneThiophenTwoYlOctane]),
                    when(|p| amide_nitrogen(p, 0), &[M::EightAcylaminoOneThiophenTwoYlOctane]),
                ]),
            ]),
        ],
    );

    t.add(
        "S-C-C-C-C-C-C-C-C-C:S",
        clauses![
            when(|p| !p.bond_in_ring(8) && ring_run(p, 9, 11, R::Thiophene) && straight(p, 1, 9), &[]).then(clauses![
                first_of(vec![
                    when(|p| thiol(p, 0), &[M::EightMercaptoOneThiophenTwoYlOctane]),
                    when(|p| thioether(p, 0), &[M::EightAlkylthioOneThiophenTwoYlOctane]),
                    when(|p| sulfonyl(p, 0), &[M::EightSulfonylOneThiophenTwoYlOctane]),
                ]),
            ]),
        ],
    );

    t.add(
        "F-C-C-C-C-C-C-C-C-C:S",
        clauses![when(
            |p| !p.bond_in_ring(8) && ring_run(p, 9, 11, R::Thiophene) && straight(p, 1, 9),
            &[M::EightFluoroOneThiophenTwoYlOctane],
        )],
    );

    t.add(
        "Cl-C-C-C-C-C-C-C-C-C:S",
        clauses![when(
            |p| !p.bond_in_ring(8) && ring_run(p, 9, 11, R::Thiophene) && straight(p, 1, 9),
            &[M::EightChloroOneThiophenTwoYlOctane],
        )],
    );

    t.add(
        "Br-C-C-C-C-C-C-C-C-C:S",
        clauses![when(
            |p| !p.bond_in_ring(8) && ring_run(p, 9, 11, R::Thiophene) && straight(p, 1, 9),
            &[M::EightBromoOneThiophenTwoYlOctane],
        )],
    );

    t.add(
        "I-C-C-C-C-C-C-C-C-C:S",
        clauses![when(
            |p| !p.bond_in_ring(8) && ring_run(p, 9, 11, R::Thiophene) && straight(p, 1, 9),
            &[M::EightIodoOneThiophenTwoYlOctane],
        )],
    );

    t.add(
        "C-C-C-C-C-C-C-C-C:C:S",
        clauses![
            when(|p| !p.bond_in_ring(7) && ring_run(p, 8, 11, R::Thiophene) && straight(p, 1, 8), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 0), &[M::SevenCarboxyOneThiophenThreeYlHeptane]),
                    when(|p| ester_carbon(p, 0), &[M::SevenAlkoxycarbonylOneThiophenThreeYlHeptane]),
                    when(|p| amide_carbon(p, 0), &[M::SevenCarbamoylOneThiophenThreeYlHeptane]),
                    when(|p| aldehyde_carbon(p, 0), &[M::SevenFormylOneThiophenThreeYlHeptane]),
                    when(|p| ketone_carbon(p, 0), &[M::SevenAcylOneThiophenThreeYlHeptane]),
                    when(|p| cyano(p, 0), &[M::SevenCyanoOneThiophenThreeYlHeptane]),
                ]),
            ]),
        ],
    );

    t.add(
        "O-C-C-C-C-C-C-C-C:C:S",
        clauses![
            when(|p| !p.bond_in_ring(7) && ring_run(p, 8, 11, R::Thiophene) && straight(p, 1, 8), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 0), &[M::SevenHydroxyOneThiophenThreeYlHeptane]),
                    when(|p| methoxy(p, 0), &[M::SevenMethoxyOneThiophenThreeYlHeptane]),
                    when(|p| ether_oxygen(p, 0), &[M::SevenAlkoxyOneThiophenThreeYlHeptane]),
                    when(|p| ester_oxygen(p, 0), &[M::SevenAcyloxyOneThiophenThreeYlHeptane]),
                ]),
            ]),
        ],
    );

    t.add(
        "N-C-C-C-C-C-C-C-C:C:S",
        clauses![
            when(|p| !p.bond_in_ring(7) && ring_run(p, 8, 11, R::Thiophene) && straight(p, 1, 8), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 0), &[M::SevenAminoOneThiophenThreeYlHeptane]),
                    when(|p| substituted_amine(p, 0), &[M::SevenAlkylaminoOneThiophenThreeYlHeptane]),
                    when(|p| amide_nitrogen(p, 0), &[M::SevenAcylaminoOneThiophenThreeYlHeptane]),
                ]),
            ]),
        ],
    );

    t.add(
        "S-C-C-C-C-C-C-C-C:C:S",
        clauses![
            when(|p| !p.bond_in_ring(7) && ring_run(p, 8, 11, R::Thiophene) && straight(p, 1, 8), &[]).then(clauses![
                first_of(vec![
                    when(|p| thiol(p, 0), &[M::SevenMercaptoOneThiophenThreeYlHeptane]),
                    when(|p| thioether(p, 0), &[M::SevenAlkylthioOneThiophenThreeYlHeptane]),
                    when(|p| sulfonyl(p, 0), &[M::SevenSulfonylOneThiophenThreeYlHeptane]),
                ]),
            ]),
        ],
    );

    t.add(
        "F-C-C-C-C-C-C-C-C:C:S",
        clauses![when(
            |p| !p.bond_in_ring(7) && ring_run(p, 8, 11, R::Thiophene) && straight(p, 1, 8),
            &[M::SevenFluoroOneThiophenThreeYlHeptane],
        )],
    );

    t.add(
        "Cl-C-C-C-C-C-C-C-C:C:S",
        clauses![when(
            |p| !p.bond_in_ring(7) && ring_run(p, 8, 11, R::Thiophene) && straight(p, 1, 8),
            &[M::SevenChloroOneThiophenThreeYlHeptane],
        )],
    );

    t.add(
        "Br-C-C-C-C-C-C-C-C:C:S",
        clauses![when(
            |p| !p.bond_in_ring(7) && ring_run(p, 8, 11, R::Thiophene) && straight(p, 1, 8),
            &[M::SevenBromoOneThiophenThreeYlHeptane],
        )],
    );

    t.add(
        "I-C-C-C-C-C-C-C-C:C:S",
        clauses![when(
            |p| !p.bond_in_ring(7) && ring_run(p, 8, 11, R::Thiophene) && straight(p, 1, 8),
            &[M::SevenIodoOneThiophenThreeYlHeptane],
        )],
    );

    t.add(
        "C-C-C-C-C-C-C-C-C:N:C",
        clauses![
            when(|p| !p.bond_in_ring(7) && ring_run(p, 8, 11, R::Pyrimidine) && straight(p, 1, 8), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 0), &[M::SevenCarboxyOnePyrimidinTwoYlHeptane]),
                    when(|p| ester_carbon(p, 0), &[M::SevenAlkoxycarbonylOnePyrimidinTwoYlHeptane]),
                    when(|p| amide_carbon(p, 0), &[M::SevenCarbamoylOnePyrimidinTwoYlHeptane]),
                    when(|p| aldehyde_carbon(p, 0), &[M::SevenFormylOnePyrimidinTwoYlHeptane]),
                    when(|p| ketone_carbon(p, 0), &[M::SevenAcylOnePyrimidinTwoYlHeptane]),
                    when(|p| cyano(p, 0), &[M::SevenCyanoOnePyrimidinTwoYlHeptane]),
                ]),
            ]),
            when(|p| !p.bond_in_ring(7) && ring_run(p, 8, 11, R::Thiazole) && straight(p, 1, 8), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 0), &[M::SevenCarboxyOneThiazolTwoYlHeptane]),
                    when(|p| ester_carbon(p, 0), &[M::SevenAlkoxycarbonylOneThiazolTwoYlHeptane]),
                    when(|p| amide_carbon(p, 0), &[M::SevenCarbamoylOneThiazolTwoYlHeptane]),
                    when(|p| aldehyde_carbon(p, 0), &[M::SevenFormylOneThiazolTwoYlHeptane]),
                    when(|p| ketone_carbon(p, 0), &[M::SevenAcylOneThiazolTwoYlHeptane]),
                    when(|p| cyano(p, 0), &[M::SevenCyanoOneThiazolTwoYlHeptane]),
                ]),
            ]),
        ],
    );

    t.add(
        "C:N:C-C-C-C-C-C-C-C-O",
        clauses![
            when(|p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Pyrimidine) && straight(p, 3, 10), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 10), &[M::SevenHydroxyOnePyrimidinTwoYlHeptane]),
                    when(|p| methoxy(p, 10), &[M::SevenMethoxyOnePyrimidinTwoYlHeptane]),
                    when(|p| ether_oxygen(p, 10), &[M::SevenAlkoxyOnePyrimidinTwoYlHeptane]),
                    when(|p| ester_oxygen(p, 10), &[M::SevenAcyloxyOnePyrimidinTwoYlHeptane]),
                ]),
            ]),
            when(|p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Thiazole) && straight(p, 3, 10), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 10), &[M::SevenHydroxyOneThiazolTwoYlHeptane]),
                    when(|p| methoxy(p, 10), &[M::SevenMethoxyOneThiazolTwoYlHeptane]),
                    when(|p| ether_oxygen(p, 10), &[M::SevenAlkoxyOneThiazolTwoYlHeptane]),
                    when(|p| ester_oxygen(p, 10), &[M::SevenAcyloxyOneThiazolTwoYlHeptane]),
                ]),
            ]),
        ],
    );

    t.add(
        "C:N:C-C-C-C-C-C-C-C-N",
        clauses![
            when(|p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Pyrimidine) && straight(p, 3, 10), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 10), &[M::SevenAminoOnePyrimidinTwoYlHeptane]),
                    when(|p| substituted_amine(p, 10), &[M::SevenAlkylaminoOnePyrimidinTwoYlHeptane]),
                    when(|p| amide_nitrogen(p, 10), &[M::SevenAcylaminoOnePyrimidinTwoYlHeptane]),
                ]),
            ]),
            when(|p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Thiazole) && straight(p, 3, 10), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 10), &[M::SevenAminoOneThiazolTwoYlHeptane]),
                    when(|p| substituted_amine(p, 10), &[M::SevenAlkylaminoOneThiazolTwoYlHeptane]),
                    when(|p| amide_nitrogen(p, 10), &[M::SevenAcylaminoOneThiazolTwoYlHeptane]),
                ]),
            ]),
        ],
    );

    t.add(
        "C:N:C-C-C-C-C-C-C-C-S",
        clauses![
            when(|p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Pyrimidine) && straight(p, 3, 10), &[]).then(clauses![
                first_of(vec![
                    when(|p| thiol(p, 10), &[M::SevenMercaptoOnePyrimidinTwoYlHeptane]),
                    when(|p| thioether(p, 10), &[M::SevenAlkylthioOnePyrimidinTwoYlHeptane]),
                    when(|p| sulfonyl(p, 10), &[M::SevenSulfonylOnePyrimidinTwoYlHeptane]),
                ]),
            ]),
            when(|p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Thiazole) && straight(p, 3, 10), &[]).then(clauses![
                first_of(vec![
                    when(|p| thiol(p, 10), &[M::SevenMercaptoOneThiazolTwoYlHeptane]),
                    when(|p| thioether(p, 10), &[M::SevenAlkylthioOneThiazolTwoYlHeptane]),
                    when(|p| sulfonyl(p, 10), &[M::SevenSulfonylOneThiazolTwoYlHeptane]),
                ]),
            ]),
        ],
    );

    t.add(
        "C:N:C-C-C-C-C-C-C-C-F",
        clauses![
            when(
                |p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Pyrimidine) && straight(p, 3, 10),
                &[M::SevenFluoroOnePyrimidinTwoYlHeptane],
            ),
            when(
                |p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Thiazole) && straight(p, 3, 10),
                &[M::SevenFluoroOneThiazolTwoYlHeptane],
            ),
        ],
    );

    t.add(
        "C:N:C-C-C-C-C-C-C-C-Cl",
        clauses![
            when(
                |p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Pyrimidine) && straight(p, 3, 10),
                &[M::SevenChloroOnePyrimidinTwoYlHeptane],
            ),
            when(
                |p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Thiazole) && straight(p, 3, 10),
                &[M::SevenChloroOneThiazolTwoYlHeptane],
            ),
        ],
    );

    t.add(
        "Br-C-C-C-C-C-C-C-C:N:C",
        clauses![
            when(
                |p| !p.bond_in_ring(7) && ring_run(p, 8, 11, R::Pyrimidine) && straight(p, 1, 8),
                &[M::SevenBromoOnePyrimidinTwoYlHeptane],
            ),
            when(
                |p| !p.bond_in_ring(7) && ring_run(p, 8, 11, R::Thiazole) && straight(p, 1, 8),
                &[M::SevenBromoOneThiazolTwoYlHeptane],
            ),
        ],
    );

    t.add(
        "C:N:C-C-C-C-C-C-C-C-I",
        clauses![
            when(
                |p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Pyrimidine) && straight(p, 3, 10),
                &[M::SevenIodoOnePyrimidinTwoYlHeptane],
            ),
            when(
                |p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Thiazole) && straight(p, 3, 10),
                &[M::SevenIodoOneThiazolTwoYlHeptane],
            ),
        ],
    );
}

fn twelve(t: &mut RuleTable) {
    t.add(
        "C-C-C-C-C-C-C-C-C-C-C:N",
        clauses![
            when(|p| !p.bond_in_ring(9) && ring_run(p, 10, 12, R::Pyridine) && straight(p, 1, 10), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 0), &[M::NineCarboxyOnePyridinTwoYlNonane]),
                    when(|p| ester_carbon(p, 0), &[M::NineAlkoxycarbonylOnePyridinTwoYlNonane]),
                    when(|p| amide_carbon(p, 0), &[M::NineCarbamoylOnePyridinTwoYlNonane]),
                    when(|p| aldehyde_carbon(p, 0), &[M::NineFormylOnePyridinTwoYlNonane]),
                    when(|p| ketone_carbon(p, 0), &[M::NineAcylOnePyridinTwoYlNonane]),
                    when(|p| cyano(p, 0), &[M::NineCyanoOnePyridinTwoYlNonane]),
                ]),
            ]),
            when(|p| !p.bond_in_ring(9) && ring_run(p, 10, 12, R::Pyrrole) && straight(p, 1, 10), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 0), &[M::NineCarboxyOnePyrrolTwoYlNonane]),
                    when(|p| ester_carbon(p, 0), &[M::NineAlkoxycarbonylOnePyrrolTwoYlNonane]),
                    when(|p| amide_carbon(p, 0), &[M::NineCarbamoylOnePyrrolTwoYlNonane]),
                    when(|p| aldehyde_carbon(p, 0), &[M::NineFormylOnePyrrolTwoYlNonane]),
                    when(|p| ketone_carbon(p, 0), &[M::NineAcylOnePyrrolTwoYlNonane]),
                    when(|p| cyano(p, 0), &[M::NineCyanoOnePyrrolTwoYlNonane]),
                ]),
            ]),
        ],
    );

    t.add(
        "N:C-C-C-C-C-C-C-C-C-C-O",
        clauses![
            when(|p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Pyridine) && straight(p, 2, 11), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 11), &[M::NineHydroxyOnePyridinTwoYlNonane]),
                    when(|p| methoxy(p, 11), &[M::NineMethoxyOnePyridinTwoYlNonane]),
                    when(|p| ether_oxygen(p, 11), &[M::NineAlkoxyOnePyridinTwoYlNonane]),
                    when(|p| ester_oxygen(p, 11), &[M::NineAcyloxyOnePyridinTwoYlNonane]),
                ]),
            ]),
            when(|p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Pyrrole) && straight(p, 2, 11), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 11), &[M::NineHydroxyOnePyrrolTwoYlNonane]),
                    when(|p| methoxy(p, 11), &[M::NineMethoxyOnePyrrolTwoYlNonane]),
                    when(|p| ether_oxygen(p, 11), &[M::NineAlkoxyOnePyrrolTwoYlNonane]),
                    when(|p| ester_oxygen(p, 11), &[M::NineAcyloxyOnePyrrolTwoYlNonane]),
                ]),
            ]),
        ],
    );

    t.add(
        "N-C-C-C-C-C-C-C-C-C-C:N",
        clauses![
            when(|p| !p.bond_in_ring(9) && ring_run(p, 10, 12, R::Pyridine) && straight(p, 1, 10), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 0), &[M::NineAminoOnePyridinTwoYlNonane]),
                    when(|p| substituted_amine(p, 0), &[M::NineAlkylaminoOnePyridinTwoYlNonane]),
                    when(|p| amide_nitrogen(p, 0), &[M::NineAcylaminoOnePyridinTwoYlNonane]),
                ]),
            ]),
            when(|p| !p.bond_in_ring(9) && ring_run(p, 10, 12, R::Pyrrole) && straight(p, 1, 10), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 0), &[M::NineAminoOnePyrrolTwoYlNonane]),
                    when(|p| substituted_amine(p, 0), &[M::NineAlkylaminoOnePyrrolTwoYlNonane]),
                    when(|p| amide_nitrogen(p, 0), &[M::NineAcylaminoOnePyrrolTwoYlNonane]),
                ]),
            ]),
        ],
    );

    t.add(
        "N:C-C-C-C-C-C-C-C-C-C-S",
        clauses![
            when(|p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Pyridine) && straight(p, 2, 11), &[]).then(clauses![
                first_of(vec![
                    when(|p| thiol(p, 11), &[M::NineMercaptoOnePyridinTwoYlNonane]),
                    when(|p| thioether(p, 11), &[M::NineAlkylthioOnePyridinTwoYlNonane]),
                    when(|p| sulfonyl(p, 11), &[M::NineSulfonylOnePyridinTwoYlNonane]),
                ]),
            ]),
            when(|p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Pyrrole) && straight(p, 2, 11), &[]).then(clauses![
                first_of(vec![
                    when(|p| thiol(p, 11), &[M::NineMercaptoOnePyrrolTwoYlNonane]),
                    when(|p| thioether(p, 11), &[M::NineAlkylthioOnePyrrolTwoYlNonane]),
                    when(|p| sulfonyl(p, 11), &[M::NineSulfonylOnePyrrolTwoYlNonane]),
                ]),
            ]),
        ],
    );

    t.add(
        "F-C-C-C-C-C-C-C-C-C-C:N",
        clauses![
            when(
                |p| !p.bond_in_ring(9) && ring_run(p, 10, 12, R::Pyridine) && straight(p, 1, 10),
                &[M::NineFluoroOnePyridinTwoYlNonane],
            ),
            when(
                |p| !p.bond_in_ring(9) && ring_run(p, 10, 12, R::Pyrrole) && straight(p, 1, 10),
                &[M::NineFluoroOnePyrrolTwoYlNonane],
            ),
        ],
    );

    t.add(
        "Cl-C-C-C-C-C-C-C-C-C-C:N",
        clauses![
            when(
                |p| !p.bond_in_ring(9) && ring_run(p, 10, 12, R::Pyridine) && straight(p, 1, 10),
                &[M::NineChloroOnePyridinTwoYlNonane],
            ),
            when(
                |p| !p.bond_in_ring(9) && ring_run(p, 10, 12, R::Pyrrole) && straight(p, 1, 10),
                &[M::NineChloroOnePyrrolTwoYlNonane],
            ),
        ],
    );

    t.add(
        "Br-C-C-C-C-C-C-C-C-C-C:N",
        clauses![
            when(
                |p| !p.bond_in_ring(9) && ring_run(p, 10, 12, R::Pyridine) && straight(p, 1, 10),
                &[M::NineBromoOnePyridinTwoYlNonane],
            ),
            when(
                |p| !p.bond_in_ring(9) && ring_run(p, 10, 12, R::Pyrrole) && straight(p, 1, 10),
                &[M::NineBromoOnePyrrolTwoYlNonane],
            ),
        ],
    );

    t.add(
        "I-C-C-C-C-C-C-C-C-C-C:N",
        clauses![
            when(
                |p| !p.bond_in_ring(9) && ring_run(p, 10, 12, R::Pyridine) && straight(p, 1, 10),
                &[M::NineIodoOnePyridinTwoYlNonane],
            ),
            when(
                |p| !p.bond_in_ring(9) && ring_run(p, 10, 12, R::Pyrrole) && straight(p, 1, 10),
                &[M::NineIodoOnePyrrolTwoYlNonane],
            ),
        ],
    );

    t.add(
        "C-C-C-C-C-C-C-C-C-C:C:N",
        clauses![
            when(|p| !p.bond_in_ring(8) && ring_run(p, 9, 12, R::Pyridine) && straight(p, 1, 9), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 0), &[M::EightCarboxyOnePyridinThreeYlOctane]),
                    when(|p| ester_carbon(p, 0), &[M::EightAlkoxycarbonylOnePyridinThreeYlOctane]),
                    when(|p| amide_carbon(p, 0), &[M::EightCarbamoylOnePyridinThreeYlOctane]),
                    when(|p| aldehyde_carbon(p, 0), &[M::EightFormylOnePyridinThreeYlOctane]),
                    when(|p| ketone_carbon(p, 0), &[M::EightAcylOnePyridinThreeYlOctane]),
                    when(|p| cyano(p, 0), &[M::EightCyanoOnePyridinThreeYlOctane]),
                ]),
            ]),
        ],
    );

    t.add(
        "N:C:C-C-C-C-C-C-C-C-C-O",
        clauses![
            when(|p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Pyridine) && straight(p, 3, 11), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 11), &[M::EightHydroxyOnePyridinThreeYlOctane]),
                    when(|p| methoxy(p, 11), &[M::EightMethoxyOnePyridinThreeYlOctane]),
                    when(|p| ether_oxygen(p, 11), &[M::EightAlkoxyOnePyridinThreeYlOctane]),
                    when(|p| ester_oxygen(p, 11), &[M::EightAcyloxyOnePyridinThreeYlOctane]),
                ]),
            ]),
        ],
    );

    t.add(
        "N-C-C-C-C-C-C-C-C-C:C:N",
        clauses![
            when(|p| !p.bond_in_ring(8) && ring_run(p, 9, 12, R::Pyridine) && straight(p, 1, 9), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 0), &[M::EightAminoOnePyridinThreeYlOctane]),
                    when(|p| substituted_amine(p, 0), &[M::EightAlkylaminoOnePyridinThreeYlOctane]),
                    when(|p| amide_nitrogen(p, 0), &[M::EightAcylaminoOnePyridinThreeYlOctane]),
                ]),
            ]),
        ],
    );

    t.add(
        "N:C:C-C-C-C-C-C-C-C-C-S",
        clauses![
            when(|p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Pyridine) && straight(p, 3, 11), &[]).then(clauses![
                first_of(vec![
                    when(|p| thiol(p, 11), &[M::EightMercaptoOnePyridinThreeYlOctane]),
                    when(|p| thioether(p, 11), &[M::EightAlkylthioOnePyridinThreeYlOctane]),
                    when(|p| sulfonyl(p, 11), &[M::EightSulfonylOnePyridinThreeYlOctane]),
                ]),
            ]),
        ],
    );

    t.add(
        "F-C-C-C-C-C-C-C-C-C:C:N",
        clauses![when(
            |p| !p.bond_in_ring(8) && ring_run(p, 9, 12, R::Pyridine) && straight(p, 1, 9),
            &[M::EightFluoroOnePyridinThreeYlOctane],
        )],
    );

    t.add(
        "Cl-C-C-C-C-C-C-C-C-C:C:N",
        clauses![when(
            |p| !p.bond_in_ring(8) && ring_run(p, 9, 12, R::Pyridine) && straight(p, 1, 9),
            &[M::EightChloroOnePyridinThreeYlOctane],
        )],
    );

    t.add(
        "Br-C-C-C-C-C-C-C-C-C:C:N",
        clauses![when(
            |p| !p.bond_in_ring(8) && ring_run(p, 9, 12, R::Pyridine) && straight(p, 1, 9),
            &[M::EightBromoOnePyridinThreeYlOctane],
        )],
    );

    t.add(
        "I-C-C-C-C-C-C-C-C-C:C:N",
        clauses![when(
            |p| !p.bond_in_ring(8) && ring_run(p, 9, 12, R::Pyridine) && straight(p, 1, 9),
            &[M::EightIodoOnePyridinThreeYlOctane],
        )],
    );

    t.add(
        "C-C-C-C-C-C-C-C-C:C:C:N",
        clauses![
            when(|p| !p.bond_in_ring(7) && ring_run(p, 8, 12, R::Pyridine) && straight(p, 1, 8), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 0), &[M::SevenCarboxyOnePyridinFourYlHeptane]),
                    when(|p| ester_carbon(p, 0), &[M::SevenAlkoxycarbonylOnePyridinFourYlHeptane]),
                    when(|p| amide_carbon(p, 0), &[M::SevenCarbamoylOnePyridinFourYlHeptane]),
                    when(|p| aldehyde_carbon(p, 0), &[M::SevenFormylOnePyridinFourYlHeptane]),
                    when(|p| ketone_carbon(p, 0), &[M::SevenAcylOnePyridinFourYlHeptane]),
                    when(|p| cyano(p, 0), &[M::SevenCyanoOnePyridinFourYlHeptane]),
                ]),
            ]),
        ],
    );

    t.add(
        "N:C:C:C-C-C-C-C-C-C-C-O",
        clauses![
            when(|p| !p.bond_in_ring(3) && ring_run(p, 0, 4, R::Pyridine) && straight(p, 4, 11), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 11), &[M::SevenHydroxyOnePyridinFourYlHeptane]),
                    when(|p| methoxy(p, 11), &[M::SevenMethoxyOnePyridinFourYlHeptane]),
                    when(|p| ether_oxygen(p, 11), &[M::SevenAlkoxyOnePyridinFourYlHeptane]),
                    when(|p| ester_oxygen(p, 11), &[M::SevenAcyloxyOnePyridinFourYlHeptane]),
                ]),
            ]),
        ],
    );

    t.add(
        "N-C-C-C-C-C-C-C-C:C:C:N",
        clauses![
            when(|p| !p.bond_in_ring(7) && ring_run(p, 8, 12, R::Pyridine) && straight(p, 1, 8), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 0), &[M::SevenAminoOnePyridinFourYlHeptane]),
                    when(|p| substituted_amine(p, 0), &[M::SevenAlkylaminoOnePyridinFourYlHeptane]),
                    when(|p| amide_nitrogen(p, 0), &[M::SevenAcylaminoOnePyridinFourYlHeptane]),
                ]),
            ]),
        ],
    );

    t.add(
        "N:C:C:C-C-C-C-C-C-C-C-S",
        clauses![
            when(|p| !p.bond_in_ring(3) && ring_run(p, 0, 4, R::Pyridine) && straight(p, 4, 11), &[]).then(clauses![
                first_of(vec![
                    when(|p| thiol(p, 11), &[M::SevenMercaptoOnePyridinFourYlHeptane]),
                    when(|p| thioether(p, 11), &[M::SevenAlkylthioOnePyridinFourYlHeptane]),
                    when(|p| sulfonyl(p, 11), &[M::SevenSulfonylOnePyridinFourYlHeptane]),
                ]),
            ]),
        ],
    );

    t.add(
        "F-C-C-C-C-C-C-C-C:C:C:N",
        clauses![when(
            |p| !p.bond_in_ring(7) && ring_run(p, 8, 12, R::Pyridine) && straight(p, 1, 8),
            &[M::SevenFluoroOnePyridinFourYlHeptane],
        )],
    );

    t.add(
        "Cl-C-C-C-C-C-C-C-C:C:C:N",
        clauses![when(
            |p| !p.bond_in_ring(7) && ring_run(p, 8, 12, R::Pyridine) && straight(p, 1, 8),
            &[M::SevenChloroOnePyridinFourYlHeptane],
        )],
    );

    t.add(
        "Br-C-C-C-C-C-C-C-C:C:C:N",
        clauses![when(
            |p| !p.bond_in_ring(7) && ring_run(p, 8, 12, R::Pyridine) && straight(p, 1, 8),
            &[M::SevenBromoOnePyridinFourYlHeptane],
        )],
    );

    t.add(
        "I-C-C-C-C-C-C-C-C:C:C:N",
        clauses![when(
            |p| !p.bond_in_ring(7) && ring_run(p, 8, 12, R::Pyridine) && straight(p, 1, 8),
            &[M::SevenIodoOnePyridinFourYlHeptane],
        )],
    );

    t.add(
        "C-C-C-C-C-C-C-C-C-C-C:O",
        clauses![
            when(|p| !p.bond_in_ring(9) && ring_run(p, 10, 12, R::Furan) && straight(p, 1, 10), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 0), &[M::NineCarboxyOneFuranTwoYlNonane]),
                    when(|p| ester_carbon(p, 0), &[M::NineAlkoxycarbonylOneFuranTwoYlNonane]),
                    when(|p| amide_carbon(p, 0), &[M::NineCarbamoylOneFuranTwoYlNonane]),
                    when(|p| aldehyde_carbon(p, 0), &[M::NineFormylOneFuranTwoYlNonane]),
                    when(|p| ketone_carbon(p, 0), &[M::NineAcylOneFuranTwoYlNonane]),
                    when(|p| cyano(p, 0), &[M::NineCyanoOneFuranTwoYlNonane]),
                ]),
            ]),
        ],
    );

    t.add(
        "O-C-C-C-C-C-C-C-C-C-C:O",
        clauses![
            when(|p| !p.bond_in_ring(9) && ring_run(p, 10, 12, R::Furan) && straight(p, 1, 10), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 0), &[M::NineHydroxyOneFuranTwoYlNonane]),
                    when(|p| methoxy(p, 0), &[M::NineMethoxyOneFuranTwoYlNonane]),
                    when(|p| ether_oxygen(p, 0), &[M::NineAlkoxyOneFuranTwoYlNonane]),
                    when(|p| ester_oxygen(p, 0), &[M::NineAcyloxyOneFuranTwoYlNonane]),
                ]),
            ]),
        ],
    );

    t.add(
        "N-C-C-C-C-C-C-C-C-C-C:O",
        clauses![
            when(|p| !p.bond_in_ring(9) && ring_run(p, 10, 12, R::Furan) && straight(p, 1, 10), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 0), &[M::NineAminoOneFuranTwoYlNonane]),
                    when(|p| substituted_amine(p, 0), &[M::NineAlkylaminoOneFuranTwoYlNonane]),
                    when(|p| amide_nitrogen(p, 0), &[M::NineAcylaminoOneFuranTwoYlNonane]),
                ]),
            ]),
        ],
    );

    t.add(
        "O:C-C-C-C-C-C-C-C-C-C-S",
        clauses![when(|p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Furan) && straight(p, 2, 11), &[]).then(clauses![
            first_of(vec![
                when(|p| thiol(p, 11), &[M::NineMercaptoOneFuranTwoYlNonane]),
                when(|p| thioether(p, 11), &[M::NineAlkylthioOneFuranTwoYlNonane]),
                when(|p| sulfonyl(p, 11), &[M::NineSulfonylOneFuranTwoYlNonane]),
            ]),
        ])],
    );

    t.add(
        "F-C-C-C-C-C-C-C-C-C-C:O",
        clauses![when(
            |p| !p.bond_in_ring(9) && ring_run(p, 10, 12, R::Furan) && straight(p, 1, 10),
            &[M::NineFluoroOneFuranTwoYlNonane],
        )],
    );

    t.add(
        "Cl-C-C-C-C-C-C-C-C-C-C:O",
        clauses![when(
            |p| !p.bond_in_ring(9) && ring_run(p, 10, 12, R::Furan) && straight(p, 1, 10),
            &[M::NineChloroOneFuranTwoYlNonane],
        )],
    );

    t.add(
        "Br-C-C-C-C-C-C-C-C-C-C:O",
        clauses![when(
            |p| !p.bond_in_ring(9) && ring_run(p, 10, 12, R::Furan) && straight(p, 1, 10),
            &[M::NineBromoOneFuranTwoYlNonane],
        )],
    );

    t.add(
        "I-C-C-C-C-C-C-C-C-C-C:O",
        clauses![when(
            |p| !p.bond_in_ring(9) && ring_run(p, 10, 12, R::Furan) && straight(p, 1, 10),
            &[M::NineIodoOneFuranTwoYlNonane],
        )],
    );

    t.add(
        "C-C-C-C-C-C-C-C-C-C:C:O",
        clauses![when(|p| !p.bond_in_ring(8) && ring_run(p, 9, 12, R::Furan) && straight(p, 1, 9), &[]).then(clauses![
            first_of(vec![
                when(|p| carboxyl_carbon(p, 0), &[M::EightCarboxyOneFuranThreeYlOctane]),
                when(|p| ester_carbon(p, 0), &[M::EightAlkoxycarbonylOneFuranThreeYlOctane]),
                when(|p| amide_carbon(p, 0), &[M::EightCarbamoylOneFuranThreeYlOctane]),
                when(|p| aldehyde_carbon(p, 0), &[M::EightFormylOneFuranThreeYlOctane]),
                when(|p| ketone_carbon(p, 0), &[M::EightAcylOneFuranThreeYlOctane]),
                when(|p| cyano(p, 0), &[M::EightCyanoOneFuranThreeYlOctane]),
            ]),
        ])],
    );

    t.add(
        "O-C-C-C-C-C-C-C-C-C:C:O",
        clauses![when(|p| !p.bond_in_ring(8) && ring_run(p, 9, 12, R::Furan) && straight(p, 1, 9), &[]).then(clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 0), &[M::EightHydroxyOneFuranThreeYlOctane]),
                when(|p| methoxy(p, 0), &[M::EightMethoxyOneFuranThreeYlOctane]),
                when(|p| ether_oxygen(p, 0), &[M::EightAlkoxyOneFuranThreeYlOctane]),
                when(|p| ester_oxygen(p, 0), &[M::EightAcyloxyOneFuranThreeYlOctane]),
            ]),
        ])],
    );

    t.add(
        "N-C-C-C-C-C-C-C-C-C:C:O",
        clauses![when(|p| !p.bond_in_ring(8) && ring_run(p, 9, 12, R::Furan) && straight(p, 1, 9), &[]).then(clauses![
            first_of(vec![
                when(|p| primary_amine(p, 0), &[M::EightAminoOneFuranThreeYlOctane]),
                when(|p| substituted_amine(p, 0), &[M::EightAlkylaminoOneFuranThreeYlOctane]),
                when(|p| amide_nitrogen(p, 0), &[M::EightAcylaminoOneFuranThreeYlOctane]),
            ]),
        ])],
    );

    t.add(
        "O:C:C-C-C-C-C-C-C-C-C-S",
        clauses![when(|p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Furan) && straight(p, 3, 11), &[]).then(clauses![
            first_of(vec![
                when(|p| thiol(p, 11), &[M::EightMercaptoOneFuranThreeYlOctane]),
                when(|p| thioether(p, 11), &[M::EightAlkylthioOneFuranThreeYlOctane]),
                when(|p| sulfonyl(p, 11), &[M::EightSulfonylOneFuranThreeYlOctane]),
            ]),
        ])],
    );

    t.add(
        "F-C-C-C-C-C-C-C-C-C:C:O",
        clauses![when(
            |p| !p.bond_in_ring(8) && ring_run(p, 9, 12, R::Furan) && straight(p, 1, 9),
            &[M::EightFluoroOneFuranThreeYlOctane],
        )],
    );

    t.add(
        "Cl-C-C-C-C-C-C-C-C-C:C:O",
        clauses![when(
            |p| !p.bond_in_ring(8) && ring_run(p, 9, 12, R::Furan) && straight(p, 1, 9),
            &[M::EightChloroOneFuranThreeYlOctane],
        )],
    );

    t.add(
        "Br-C-C-C-C-C-C-C-C-C:C:O",
        clauses![when(
            |p| !p.bond_in_ring(8) && ring_run(p, 9, 12, R::Furan) && straight(p, 1, 9),
            &[M::EightBromoOneFuranThreeYlOctane],
        )],
    );

    t.add(
        "I-C-C-C-C-C-C-C-C-C:C:O",
        clauses![when(
            |p| !p.bond_in_ring(8) && ring_run(p, 9, 12, R::Furan) && straight(p, 1, 9),
            &[M::EightIodoOneFuranThreeYlOctane],
        )],
    );

    t.add(
        "C-C-C-C-C-C-C-C-C-C-C:S",
        clauses![
            when(
                |p| !p.bond_in_ring(9) && ring_run(p, 10, 12, R::Thiophene) && straight(p, 1, 10),
                &[],
            ).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 0), &[M::NineCarboxyOneThiophenTwoYlNonane]),
                    when(|p| ester_carbon(p, 0), &[M::NineAlkoxycarbonylOneThiophenTwoYlNonane]),
                    when(|p| amide_carbon(p, 0), &[M::NineCarbamoylOneThiophenTwoYlNonane]),
                    when(|p| aldehyde_carbon(p, 0), &[M::NineFormylOneThiophenTwoYlNonane]),
                    when(|p| ketone_carbon(p, 0), &[M::NineAcylOneThiophenTwoYlNonane]),
                    when(|p| cyano(p, 0), &[M::NineCyanoOneThiophenTwoYlNonane]),
                ]),
            ]),
        ],
    );

    t.add(
        "O-C-C-C-C-C-C-C-C-C-C:S",
        clauses![
            when(
                |p| !p.bond_in_ring(9) && ring_run(p, 10, 12, R::Thiophene) && straight(p, 1, 10),
                &[],
            ).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 0), &[M::NineHydroxyOneThiophenTwoYlNonane]),
                    when(|p| methoxy(p, 0), &[M::NineMethoxyOneThiophenTwoYlNonane]),
                    when(|p| ether_oxygen(p, 0), &[M::NineAlkoxyOneThiophenTwoYlNonane]),
                    when(|p| ester_oxygen(p, 0), &[M::NineAcyloxyOneThiophenTwoYlNonane]),
                ]),
            ]),
        ],
    );

    t.add(
        "N-C-C-C-C-C-C-C-C-C-C:S",
        clauses![
            when(
                |p| !p.bond_in_ring(9) && ring_run(p, 10, 12, R::Thiophene) && straight(p, 1, 10),
                &[],
            ).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 0), &[M::NineAminoOneThiophenTwoYlNonane]),
                    when(|p| substituted_amine(p, 0), &[M::NineAlkylaminoOneThiophenTwoYlNonane]),
                    when(|p| amide_nitrogen(p, 0), &[M::NineAcylaminoOneThiophenTwoYlNonane]),
                ]),
            ]),
        ],
    );

    t.add(
        "S-C-C-C-C-C-C-C-C-C-C:S",
        clauses![
            when(
                |p| !p.bond_in_ring(9) && ring_run(p, 10, 12, R::Thiophene) && straight(p, 1, 10),
                &[],
            ).then(clauses![
                first_of(vec![
                    when(|p| thiol(p, 0), &[M::NineMercaptoOneThiophenTwoYlNonane]),
                    when(|p| thioether(p, 0), &[M::NineAlkylthioOneThiophenTwoYlNonane]),
                    when(|p| sulfonyl(p, 0), &[M::NineSulfonylOneThiophenTwoYlNonane]),
                ]),
            ]),
        ],
    );

    t.add(
        "F-C-C-C-C-C-C-C-C-C-C:S",
        clauses![when(
            |p| !p.bond_in_ring(9) && ring_run(p, 10, 12, R::Thiophene) && straight(p, 1, 10),
            &[M::NineFluoroOneThiophenTwoYlNonane],
        )],
    );

    t.add(
        "Cl-C-C-C-C-C-C-C-C-C-C:S",
        clauses![when(
            |p| !p.bond_in_ring(9) && ring_run(p, 10, 12, R::Thiophene) && straight(p, 1, 10),
            &[M::NineChloroOneThiophenTwoYlNonane],
        )],
    );

    t.add(
        "Br-C-C-C-C-C-C-C-C-C-C:S",
        clauses![when(
            |p| !p.bond_in_ring(9) && ring_run(p, 10, 12, R::Thiophene) && straight(p, 1, 10),
            &[M::NineBromoOneThiophenTwoYlNonane],
        )],
    );

    t.add(
        "I-C-C-C-C-C-C-C-C-C-C:S",
        clauses![when(
            |p| !p.bond_in_ring(9) && ring_run(p, 10, 12, R::Thiophene) && straight(p, 1, 10),
            &[M::NineIodoOneThiophenTwoYlNonane],
        )],
    );

    t.add(
        "C-C-C-C-C-C-C-C-C-C:C:S",
        clauses![
            when(|p| !p.bond_in_ring(8) && ring_run(p, 9, 12, R::Thiophene) && straight(p, 1, 9), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 0), &[M::EightCarboxyOneThiophenThreeYlOctane]),
                    when(|p| ester_carbon(p, 0), &[M::EightAlkoxycarbonylOneThiophenThreeYlOctane]),
                    when(|p| amide_carbon(p, 0), &[M::EightCarbamoylOneThiophenThreeYlOctane]),
                    when(|p| aldehyde_carbon(p, 0), &[M::EightFormylOneThiophenThreeYlOctane]),
                    when(|p| ketone_carbon(p, 0), &[M::EightAcylOneThiophenThreeYlOctane]),
                    when(|p| cyano(p, 0), &[M::EightCyanoOneThiophenThreeYlOctane]),
                ]),
            ]),
        ],
    );

    t.add(
        "O-C-C-C-C-C-C-C-C-C:C:S",
        clauses![
            when(|p| !p.bond_in_ring(8) && ring_run(p, 9, 12, R::Thiophene) && straight(p, 1, 9), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 0), &[M::EightHydroxyOneThiophenThreeYlOctane]),
                    when(|p| methoxy(p, 0), &[M::EightMethoxyOneThiophenThreeYlOctane]),
                    when(|p| ether_oxygen(p, 0), &[M::EightAlkoxyOneThiophenThreeYlOctane]),
                    when(|p| ester_oxygen(p, 0), &[M::EightAcyloxyOneThiophenThreeYlOctane]),
                ]),
            ]),
        ],
    );

    t.add(
        "N-C-C-C-C-C-C-C-C-C:C:S",
        clauses![
            when(|p| !p.bond_in_ring(8) && ring_run(p, 9, 12, R::Thiophene) && straight(p, 1, 9), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 0), &[M::EightAminoOneThiophenThreeYlOctane]),
                    when(|p| substituted_amine(p, 0), &[M::EightAlkylaminoOneThiophenThreeYlOctane]),
                    when(|p| amide_nitrogen(p, 0), &[M::EightAcylaminoOneThiophenThreeYlOctane]),
                ]),
            ]),
        ],
    );

    t.add(
        "S-C-C-C-C-C-C-C-C-C:C:S",
        clauses![
            when(|p| !p.bond_in_ring(8) && ring_run(p, 9, 12, R::Thiophene) && straight(p, 1, 9), &[]).then(clauses![
                first_of(vec![
                    when(|p| thiol(p, 0), &[M::EightMercaptoOneThiophenThreeYlOctane]),
                    when(|p| thioether(p, 0), &[M::EightAlkylthioOneThiophenThreeYlOctane]),
                    when(|p| sulfonyl(p, 0), &[M::EightSulfonylOneThiophenThreeYlOctane]),
                ]),
            ]),
        ],
    );

    t.add(
        "F-C-C-C-C-C-C-C-C-C:C:S",
        clauses![when(
            |p| !p.bond_in_ring(8) && ring_run(p, 9, 12, R::Thiophene) && straight(p, 1, 9),
            &[M::EightFluoroOneThiophenThreeYlOctane],
        )],
    );

    t.add(
        "Cl-C-C-C-C-C-C-C-C-C:C:S",
        clauses![when(
            |p| !p.bond_in_ring(8) && ring_run(p, 9, 12, R::Thiophene) && straight(p, 1, 9),
            &[M::EightChloroOneThiophenThreeYlOctane],
        )],
    );

    t.add(
        "Br-C-C-C-C-C-C-C-C-C:C:S",
        clauses![when(
            |p| !p.bond_in_ring(8) && ring_run(p, 9, 12, R::Thiophene) && straight(p, 1, 9),
            &[M::EightBromoOneThiophenThreeYlOctane],
        )],
    );

    t.add(
        "I-C-C-C-C-C-C-C-C-C:C:S",
        clauses![when(
            |p| !p.bond_in_ring(8) && ring_run(p, 9, 12, R::Thiophene) && straight(p, 1, 9),
            &[M::EightIodoOneThiophenThreeYlOctane],
        )],
    );

    t.add(
        "C-C-C-C-C-C-C-C-C-C:N:C",
        clauses![
            when(|p| !p.bond_in_ring(8) && ring_run(p, 9, 12, R::Pyrimidine) && straight(p, 1, 9), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 0), &[M::EightCarboxyOnePyrimidinTwoYlOctane]),
                    when(|p| ester_carbon(p, 0), &[M::EightAlkoxycarbonylOnePyrimidinTwoYlOctane]),
                    when(|p| amide_carbon(p, 0), &[M::EightCarbamoylOnePyrimidinTwoYlOctane]),
                    when(|p| aldehyde_carbon(p, 0), &[M::EightFormylOnePyrimidinTwoYlOctane]),
                    when(|p| ketone_carbon(p, 0), &[M::EightAcylOnePyrimidinTwoYlOctane]),
                    when(|p| cyano(p, 0), &[M::EightCyanoOnePyrimidinTwoYlOctane]),
                ]),
            ]),
            when(|p| !p.bond_in_ring(8) && ring_run(p, 9, 12, R::Thiazole) && straight(p, 1, 9), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 0), &[M::EightCarboxyOneThiazolTwoYlOctane]),
                    when(|p| ester_carbon(p, 0), &[M::EightAlkoxycarbonylOneThiazolTwoYlOctane]),
                    when(|p| amide_carbon(p, 0), &[M::EightCarbamoylOneThiazolTwoYlOctane]),
                    when(|p| aldehyde_carbon(p, 0), &[M::EightFormylOneThiazolTwoYlOctane]),
                    when(|p| ketone_carbon(p, 0), &[M::EightAcylOneThiazolTwoYlOctane]),
                    when(|p| cyano(p, 0), &[M::EightCyanoOneThiazolTwoYlOctane]),
                ]),
            ]),
        ],
    );

    t.add(
        "C:N:C-C-C-C-C-C-C-C-C-O",
        clauses![
            when(|p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Pyrimidine) && straight(p, 3, 11), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 11), &[M::EightHydroxyOnePyrimidinTwoYlOctane]),
                    when(|p| methoxy(p, 11), &[M::EightMethoxyOnePyrimidinTwoYlOctane]),
                    when(|p| ether_oxygen(p, 11), &[M::EightAlkoxyOnePyrimidinTwoYlOctane]),
                    when(|p| ester_oxygen(p, 11), &[M::EightAcyloxyOnePyrimidinTwoYlOctane]),
                ]),
            ]),
            when(|p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Thiazole) && straight(p, 3, 11), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 11), &[M::EightHydroxyOneThiazolTwoYlOctane]),
                    when(|p| methoxy(p, 11), &[M::EightMethoxyOneThiazolTwoYlOctane]),
                    when(|p| ether_oxygen(p, 11), &[M::EightAlkoxyOneThiazolTwoYlOctane]),
                    when(|p| ester_oxygen(p, 11), &[M::EightAcyloxyOneThiazolTwoYlOctane]),
                ]),
            ]),
        ],
    );

    t.add(
        "C:N:C-C-C-C-C-C-C-C-C-N",
        clauses![
            when(|p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Pyrimidine) && straight(p, 3, 11), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 11), &[M::EightAminoOnePyrimidinTwoYlOctane]),
                    when(|p| substituted_amine(p, 11), &[M::EightAlkylaminoOnePyrimidinTwoYlOctane]),
                    when(|p| amide_nitrogen(p, 11), &[M::EightAcylaminoOnePyrimidinTwoYlOctane]),
                ]),
            ]),
            when(|p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Thiazole) && straight(p, 3, 11), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 11), &[M::EightAminoOneThiazolTwoYlOctane]),
                    when(|p| substituted_amine(p, 11), &[M::EightAlkylaminoOneThiazolTwoYlOctane]),
                    when(|p| amide_nitrogen(p, 11), &[M::EightAcylaminoOneThiazolTwoYlOctane]),
                ]),
            ]),
        ],
    );

    t.add(
        "C:N:C-C-C-C-C-C-C-C-C-S",
        clauses![
            when(|p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Pyrimidine) && straight(p, 3, 11), &[]).then(clauses![
                first_of(vec![
                    when(|p| thiol(p, 11), &[M::EightMercaptoOnePyrimidinTwoYlOctane]),
                    when(|p| thioether(p, 11), &[M::EightAlkylthioOnePyrimidinTwoYlOctane]),
                    when(|p| sulfonyl(p, 11), &[M::EightSulfonylOnePyrimidinTwoYlOctane]),
                ]),
            ]),
            when(|p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Thiazole) && straight(p, 3, 11), &[]).then(clauses![
                first_of(vec![
                    when(|p| thiol(p, 11), &[M::EightMercaptoOneThiazolTwoYlOctane]),
                    when(|p| thioether(p, 11), &[M::EightAlkylthioOneThiazolTwoYlOctane]),
                    when(|p| sulfonyl(p, 11), &[M::EightSulfonylOneThiazolTwoYlOctane]),
                ]),
            ]),
        ],
    );

    t.add(
        "C:N:C-C-C-C-C-C-C-C-C-F",
        clauses![
            when(
                |p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Pyrimidine) && straight(p, 3, 11),
                &[M::EightFluoroOnePyrimidinTwoYlOctane],
            ),
            when(
                |p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Thiazole) && straight(p, 3, 11),
                &[M::EightFluoroOneThiazolTwoYlOctane],
            ),
        ],
    );

    t.add(
        "C:N:C-C-C-C-C-C-C-C-C-Cl",
        clauses![
            when(
                |p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Pyrimidine) && straight(p, 3, 11),
                &[M::EightChloroOnePyrimidinTwoYlOctane],
            ),
            when(
                |p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Thiazole) && straight(p, 3, 11),
                &[M::EightChloroOneThiazolTwoYlOctane],
            ),
        ],
    );

    t.add(
        "Br-C-C-C-C-C-C-C-C-C:N:C",
        clauses![
            when(
                |p| !p.bond_in_ring(8) && ring_run(p, 9, 12, R::Pyrimidine) && straight(p, 1, 9),
                &[M::EightBromoOnePyrimidinTwoYlOctane],
            ),
            when(
                |p| !p.bond_in_ring(8) && ring_run(p, 9, 12, R::Thiazole) && straight(p, 1, 9),
                &[M::EightBromoOneThiazolTwoYlOctane],
            ),
        ],
    );

    t.add(
        "C:N:C-C-C-C-C-C-C-C-C-I",
        clauses![
            when(
                |p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Pyrimidine) && straight(p, 3, 11),
                &[M::EightIodoOnePyrimidinTwoYlOctane],
            ),
            when(
                |p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Thiazole) && straight(p, 3, 11),
                &[M::EightIodoOneThiazolTwoYlOctane],
            ),
        ],
    );
}

fn thirteen(t: &mut RuleTable) {
    t.add(
        "C-C-C-C-C-C-C-C-C-C-C-C:N",
        clauses![
            when(
                |p| !p.bond_in_ring(10) && ring_run(p, 11, 13, R::Pyridine) && straight(p, 1, 11),
                &[],
            ).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 0), &[M::TenCarboxyOnePyridinTwoYlDecane]),
                    when(|p| ester_carbon(p, 0), &[M::TenAlkoxycarbonylOnePyridinTwoYlDecane]),
                    when(|p| amide_carbon(p, 0), &[M::TenCarbamoylOnePyridinTwoYlDecane]),
                    when(|p| aldehyde_carbon(p, 0), &[M::TenFormylOnePyridinTwoYlDecane]),
                    when(|p| ketone_carbon(p, 0), &[M::TenAcylOnePyridinTwoYlDecane]),
                    when(|p| cyano(p, 0), &[M::TenCyanoOnePyridinTwoYlDecane]),
                ]),
            ]),
            when(|p| !p.bond_in_ring(10) && ring_run(p, 11, 13, R::Pyrrole) && straight(p, 1, 11), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 0), &[M::TenCarboxyOnePyrrolTwoYlDecane]),
                    when(|p| ester_carbon(p, 0), &[M::TenAlkoxycarbonylOnePyrrolTwoYlDecane]),
                    when(|p| amide_carbon(p, 0), &[M::TenCarbamoylOnePyrrolTwoYlDecane]),
                    when(|p| aldehyde_carbon(p, 0), &[M::TenFormylOnePyrrolTwoYlDecane]),
                    when(|p| ketone_carbon(p, 0), &[M::TenAcylOnePyrrolTwoYlDecane]),
                    when(|p| cyano(p, 0), &[M::TenCyanoOnePyrrolTwoYlDecane]),
                ]),
            ]),
        ],
    );

    t.add(
        "N:C-C-C-C-C-C-C-C-C-C-C-O",
        clauses![
            when(|p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Pyridine) && straight(p, 2, 12), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 12), &[M::TenHydroxyOnePyridinTwoYlDecane]),
                    when(|p| methoxy(p, 12), &[M::TenMethoxyOnePyridinTwoYlDecane]),
                    when(|p| ether_oxygen(p, 12), &[M::TenAlkoxyOnePyridinTwoYlDecane]),
                    when(|p| ester_oxygen(p, 12), &[M::TenAcyloxyOnePyridinTwoYlDecane]),
                ]),
            ]),
            when(|p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Pyrrole) && straight(p, 2, 12), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 12), &[M::TenHydroxyOnePyrrolTwoYlDecane]),
                    when(|p| methoxy(p, 12), &[M::TenMethoxyOnePyrrolTwoYlDecane]),
                    when(|p| ether_oxygen(p, 12), &[M::TenAlkoxyOnePyrrolTwoYlDecane]),
                    when(|p| ester_oxygen(p, 12), &[M::TenAcyloxyOnePyrrolTwoYlDecane]),
                ]),
            ]),
        ],
    );

    t.add(
        "N-C-C-C-C-C-C-C-C-C-C-C:N",
        clauses![
            when(
                |p| !p.bond_in_ring(10) && ring_run(p, 11, 13, R::Pyridine) && straight(p, 1, 11),
                &[],
            ).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 0), &[M::TenAminoOnePyridinTwoYlDecane]),
                    when(|p| substituted_amine(p, 0), &[M::TenAlkylaminoOnePyridinTwoYlDecane]),
                    when(|p| amide_nitrogen(p, 0), &[M::TenAcylaminoOnePyridinTwoYlDecane]),
                ]),
            ]),
            when(|p| !p.bond_in_ring(10) && ring_run(p, 11, 13, R::Pyrrole) && straight(p, 1, 11), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 0), &[M::TenAminoOnePyrrolTwoYlDecane]),
                    when(|p| substituted_amine(p, 0), &[M::TenAlkylaminoOnePyrrolTwoYlDecane]),
                    when(|p| amide_nitrogen(p, 0), &[M::TenAcylaminoOnePyrrolTwoYlDecane]),
                ]),
            ]),
        ],
    );

    t.add(
        "N:C-C-C-C-C-C-C-C-C-C-C-S",
        clauses![
            when(|p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Pyridine) && straight(p, 2, 12), &[]).then(clauses![
                first_of(vec![
                    when(|p| thiol(p, 12), &[M::TenMercaptoOnePyridinTwoYlDecane]),
                    when(|p| thioether(p, 12), &[M::TenAlkylthioOnePyridinTwoYlDecane]),
                    when(|p| sulfonyl(p, 12), &[M::TenSulfonylOnePyridinTwoYlDecane]),
                ]),
            ]),
            when(|p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Pyrrole) && straight(p, 2, 12), &[]).then(clauses![
                first_of(vec![
                    when(|p| thiol(p, 12), &[M::TenMercaptoOnePyrrolTwoYlDecane]),
                    when(|p| thioether(p, 12), &[M::TenAlkylthioOnePyrrolTwoYlDecane]),
                    when(|p| sulfonyl(p, 12), &[M::TenSulfonylOnePyrrolTwoYlDecane]),
                ]),
            ]),
        ],
    );

    t.add(
        "F-C-C-C-C-C-C-C-C-C-C-C:N",
        clauses![
            when(
                |p| !p.bond_in_ring(10) && ring_run(p, 11, 13, R::Pyridine) && straight(p, 1, 11),
                &[M::TenFluoroOnePyridinTwoYlDecane],
            ),
            when(
                |p| !p.bond_in_ring(10) && ring_run(p, 11, 13, R::Pyrrole) && straight(p, 1, 11),
                &[M::TenFluoroOnePyrrolTwoYlDecane],
            ),
        ],
    );

    t.add(
        "Cl-C-C-C-C-C-C-C-C-C-C-C:N",
        clauses![
            when(
                |p| !p.bond_in_ring(10) && ring_run(p, 11, 13, R::Pyridine) && straight(p, 1, 11),
                &[M::TenChloroOnePyridinTwoYlDecane],
            ),
            when(
                |p| !p.bond_in_ring(10) && ring_run(p, 11, 13, R::Pyrrole) && straight(p, 1, 11),
                &[M::TenChloroOnePyrrolTwoYlDecane],
            ),
        ],
    );

    t.add(
        "Br-C-C-C-C-C-C-C-C-C-C-C:N",
        clauses![
            when(
                |p| !p.bond_in_ring(10) && ring_run(p, 11, 13, R::Pyridine) && straight(p, 1, 11),
                &[M::TenBromoOnePyridinTwoYlDecane],
            ),
            when(
                |p| !p.bond_in_ring(10) && ring_run(p, 11, 13, R::Pyrrole) && straight(p, 1, 11),
                &[M::TenBromoOnePyrrolTwoYlDecane],
            ),
        ],
    );

    t.add(
        "I-C-C-C-C-C-C-C-C-C-C-C:N",
        clauses![
            when(
                |p| !p.bond_in_ring(10) && ring_run(p, 11, 13, R::Pyridine) && straight(p, 1, 11),
                &[M::TenIodoOnePyridinTwoYlDecane],
            ),
            when(
                |p| !p.bond_in_ring(10) && ring_run(p, 11, 13, R::Pyrrole) && straight(p, 1, 11),
                &[M::TenIodoOnePyrrolTwoYlDecane],
            ),
        ],
    );

    t.add(
        "C-C-C-C-C-C-C-C-C-C-C:C:N",
        clauses![
            when(|p| !p.bond_in_ring(9) && ring_run(p, 10, 13, R::Pyridine) && straight(p, 1, 10), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 0), &[M::NineCarboxyOnePyridinThreeYlNonane]),
                    when(|p| ester_carbon(p, 0), &[M::NineAlkoxycarbonylOnePyridinThreeYlNonane]),
                    when(|p| amide_carbon(p, 0), &[M::NineCarbamoylOnePyridinThreeYlNonane]),
                    when(|p| aldehyde_carbon(p, 0), &[M::NineFormylOnePyridinThreeYlNonane]),
                    when(|p| ketone_carbon(p, 0), &[M::NineAcylOnePyridinThreeYlNonane]),
                    when(|p| cyano(p, 0), &[M::NineCyanoOnePyridinThreeYlNonane]),
                ]),
            ]),
        ],
    );

    t.add(
        "N:C:C-C-C-C-C-C-C-C-C-C-O",
        clauses![
            when(|p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Pyridine) && straight(p, 3, 12), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 12), &[M::NineHydroxyOnePyridinThreeYlNonane]),
                    when(|p| methoxy(p, 12), &[M::NineMethoxyOnePyridinThreeYlNonane]),
                    when(|p| ether_oxygen(p, 12), &[M::NineAlkoxyOnePyridinThreeYlNonane]),
                    when(|p| ester_oxygen(p, 12), &[M::NineAcyloxyOnePyridinThreeYlNonane]),
                ]),
            ]),
        ],
    );

    t.add(
        "N-C-C-C-C-C-C-C-C-C-C:C:N",
        clauses![
            when(|p| !p.bond_in_ring(9) && ring_run(p, 10, 13, R::Pyridine) && straight(p, 1, 10), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 0), &[M::NineAminoOnePyridinThreeYlNonane]),
                    when(|p| substituted_amine(p, 0), &[M::NineAlkylaminoOnePyridinThreeYlNonane]),
                    when(|p| amide_nitrogen(p, 0), &[M::NineAcylaminoOnePyridinThreeYlNonane]),
                ]),
            ]),
        ],
    );

    t.add(
        "N:C:C-C-C-C-C-C-C-C-C-C-S",
        clauses![
            when(|p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Pyridine) && straight(p, 3, 12), &[]).then(clauses![
                first_of(vec![
                    when(|p| thiol(p, 12), &[M::NineMercaptoOnePyridinThreeYlNonane]),
                    when(|p| thioether(p, 12), &[M::NineAlkylthioOnePyridinThreeYlNonane]),
                    when(|p| sulfonyl(p, 12), &[M::NineSulfonylOnePyridinThreeYlNonane]),
                ]),
            ]),
        ],
    );

    t.add(
        "F-C-C-C-C-C-C-C-C-C-C:C:N",
        clauses![when(
            |p| !p.bond_in_ring(9) && ring_run(p, 10, 13, R::Pyridine) && straight(p, 1, 10),
            &[M::NineFluoroOnePyridinThreeYlNonane],
        )],
    );

    t.add(
        "Cl-C-C-C-C-C-C-C-C-C-C:C:N",
        clauses![when(
            |p| !p.bond_in_ring(9) && ring_run(p, 10, 13, R::Pyridine) && straight(p, 1, 10),
            &[M::NineChloroOnePyridinThreeYlNonane],
        )],
    );

    t.add(
        "Br-C-C-C-C-C-C-C-C-C-C:C:N",
        clauses![when(
            |p| !p.bond_in_ring(9) && ring_run(p, 10, 13, R::Pyridine) && straight(p, 1, 10),
            &[M::NineBromoOnePyridinThreeYlNonane],
        )],
    );

    t.add(
        "I-C-C-C-C-C-C-C-C-C-C:C:N",
        clauses![when(
            |p| !p.bond_in_ring(9) && ring_run(p, 10, 13, R::Pyridine) && straight(p, 1, 10),
            &[M::NineIodoOnePyridinThreeYlNonane],
        )],
    );

    t.add(
        "C-C-C-C-C-C-C-C-C-C:C:C:N",
        clauses![
            when(|p| !p.bond_in_ring(8) && ring_run(p, 9, 13, R::Pyridine) && straight(p, 1, 9), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 0), &[M::EightCarboxyOnePyridinFourYlOctane]),
                    when(|p| ester_carbon(p, 0), &[M::EightAlkoxycarbonylOnePyridinFourYlOctane]),
                    when(|p| amide_carbon(p, 0), &[M::EightCarbamoylOnePyridinFourYlOctane]),
                    when(|p| aldehyde_carbon(p, 0), &[M::EightFormylOnePyridinFourYlOctane]),
                    when(|p| ketone_carbon(p, 0), &[M::EightAcylOnePyridinFourYlOctane]),
                    when(|p| cyano(p, 0), &[M::EightCyanoOnePyridinFourYlOctane]),
                ]),
            ]),
        ],
    );

    t.add(
        "N:C:C:C-C-C-C-C-C-C-C-C-O",
        clauses![
            when(|p| !p.bond_in_ring(3) && ring_run(p, 0, 4, R::Pyridine) && straight(p, 4, 12), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 12), &[M::EightHydroxyOnePyridinFourYlOctane]),
                    when(|p| methoxy(p, 12), &[M::EightMethoxyOnePyridinFourYlOctane]),
                    when(|p| ether_oxygen(p, 12), &[M::EightAlkoxyOnePyridinFourYlOctane]),
                    when(|p| ester_oxygen(p, 12), &[M::EightAcyloxyOnePyridinFourYlOctane]),
                ]),
            ]),
        ],
    );

    t.add(
        "N-C-C-C-C-C-C-C-C-C:C:C:N",
        clauses![
            when(|p| !p.bond_in_ring(8) && ring_run(p, 9, 13, R::Pyridine) && straight(p, 1, 9), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 0), &[M::EightAminoOnePyridinFourYlOctane]),
                    when(|p| substituted_amine(p, 0), &[M::EightAlkylaminoOnePyridinFourYlOctane]),
                    when(|p| amide_nitrogen(p, 0), &[M::EightAcylaminoOnePyridinFourYlOctane]),
                ]),
            ]),
        ],
    );

    t.add(
        "N:C:C:C-C-C-C-C-C-C-C-C-S",
        clauses![
            when(|p| !p.bond_in_ring(3) && ring_run(p, 0, 4, R::Pyridine) && straight(p, 4, 12), &[]).then(clauses![
                first_of(vec![
                    when(|p| thiol(p, 12), &[M::EightMercaptoOnePyridinFourYlOctane]),
                    when(|p| thioether(p, 12), &[M::EightAlkylthioOnePyridinFourYlOctane]),
                    when(|p| sulfonyl(p, 12), &[M::EightSulfonylOnePyridinFourYlOctane]),
                ]),
            ]),
        ],
    );

    t.add(
        "F-C-C-C-C-C-C-C-C-C:C:C:N",
        clauses![when(
            |p| !p.bond_in_ring(8) && ring_run(p, 9, 13, R::Pyridine) && straight(p, 1, 9),
            &[M::EightFluoroOnePyridinFourYlOctane],
        )],
    );

    t.add(
        "Cl-C-C-C-C-C-C-C-C-C:C:C:N",
        clauses![when(
            |p| !p.bond_in_ring(8) && ring_run(p, 9, 13, R::Pyridine) && straight(p, 1, 9),
            &[M::EightChloroOnePyridinFourYlOctane],
        )],
    );

    t.add(
        "Br-C-C-C-C-C-C-C-C-C:C:C:N",
        clauses![when(
            |p| !p.bond_in_ring(8) && ring_run(p, 9, 13, R::Pyridine) && straight(p, 1, 9),
            &[M::EightBromoOnePyridinFourYlOctane],
        )],
    );

    t.add(
        "I-C-C-C-C-C-C-C-C-C:C:C:N",
        clauses![when(
            |p| !p.bond_in_ring(8) && ring_run(p, 9, 13, R::Pyridine) && straight(p, 1, 9),
            &[M::EightIodoOnePyridinFourYlOctane],
        )],
    );

    t.add(
        "C-C-C-C-C-C-C-C-C-C-C-C:O",
        clauses![
            when(|p| !p.bond_in_ring(10) && ring_run(p, 11, 13, R::Furan) && straight(p, 1, 11), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 0), &[M::TenCarboxyOneFuranTwoYlDecane]),
                    when(|p| ester_carbon(p, 0), &[M::TenAlkoxycarbonylOneFuranTwoYlDecane]),
                    when(|p| amide_carbon(p, 0), &[M::TenCarbamoylOneFuranTwoYlDecane]),
                    when(|p| aldehyde_carbon(p, 0), &[M::TenFormylOneFuranTwoYlDecane]),
                    when(|p| ketone_carbon(p, 0), &[M::TenAcylOneFuranTwoYlDecane]),
                    when(|p| cyano(p, 0), &[M::TenCyanoOneFuranTwoYlDecane]),
                ]),
            ]),
        ],
    );

    t.add(
        "O-C-C-C-C-C-C-C-C-C-C-C:O",
        clauses![
            when(|p| !p.bond_in_ring(10) && ring_run(p, 11, 13, R::Furan) && straight(p, 1, 11), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 0), &[M::TenHydroxyOneFuranTwoYlDecane]),
                    when(|p| methoxy(p, 0), &[M::TenMethoxyOneFuranTwoYlDecane]),
                    when(|p| ether_oxygen(p, 0), &[M::TenAlkoxyOneFuranTwoYlDecane]),
                    when(|p| ester_oxygen(p, 0), &[M::TenAcyloxyOneFuranTwoYlDecane]),
                ]),
            ]),
        ],
    );

    t.add(
        "N-C-C-C-C-C-C-C-C-C-C-C:O",
        clauses![
            when(|p| !p.bond_in_ring(10) && ring_run(p, 11, 13, R::Furan) && straight(p, 1, 11), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 0), &[M::TenAminoOneFuranTwoYlDecane]),
                    when(|p| substituted_amine(p, 0), &[M::TenAlkylaminoOneFuranTwoYlDecane]),
                    when(|p| amide_nitrogen(p, 0), &[M::TenAcylaminoOneFuranTwoYlDecane]),
                ]),
            ]),
        ],
    );

    t.add(
        "O:C-C-C-C-C-C-C-C-C-C-C-S",
        clauses![when(|p| !p.bond_in_ring(1) && ring_run(p, 0, 2, R::Furan) && straight(p, 2, 12), &[]).then(clauses![
            first_of(vec![
                when(|p| thiol(p, 12), &[M::TenMercaptoOneFuranTwoYlDecane]),
                when(|p| thioether(p, 12), &[M::TenAlkylthioOneFuranTwoYlDecane]),
                when(|p| sulfonyl(p, 12), &[M::TenSulfonylOneFuranTwoYlDecane]),
            ]),
        ])],
    );

    t.add(
        "F-C-C-C-C-C-C-C-C-C-C-C:O",
        clauses![when(
            |p| !p.bond_in_ring(10) && ring_run(p, 11, 13, R::Furan) && straight(p, 1, 11),
            &[M::TenFluoroOneFuranTwoYlDecane],
        )],
    );

    t.add(
        "Cl-C-C-C-C-C-C-C-C-C-C-C:O",
        clauses![when(
            |p| !p.bond_in_ring(10) && ring_run(p, 11, 13, R::Furan) && straight(p, 1, 11),
            &[M::TenChloroOneFuranTwoYlDecane],
        )],
    );

    t.add(
        "Br-C-C-C-C-C-C-C-C-C-C-C:O",
        clauses![when(
            |p| !p.bond_in_ring(10) && ring_run(p, 11, 13, R::Furan) && straight(p, 1, 11),
            &[M::TenBromoOneFuranTwoYlDecane],
        )],
    );

    t.add(
        "I-C-C-C-C-C-C-C-C-C-C-C:O",
        clauses![when(
            |p| !p.bond_in_ring(10) && ring_run(p, 11, 13, R::Furan) && straight(p, 1, 11),
            &[M::TenIodoOneFuranTwoYlDecane],
        )],
    );

    t.add(
        "C-C-C-C-C-C-C-C-C-C-C:C:O",
        clauses![
            when(|p| !p.bond_in_ring(9) && ring_run(p, 10, 13, R::Furan) && straight(p, 1, 10), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 0), &[M::NineCarboxyOneFuranThreeYlNonane]),
                    when(|p| ester_carbon(p, 0), &[M::NineAlkoxycarbonylOneFuranThreeYlNonane]),
                    when(|p| amide_carbon(p, 0), &[M::NineCarbamoylOneFuranThreeYlNonane]),
                    when(|p| aldehyde_carbon(p, 0), &[M::NineFormylOneFuranThreeYlNonane]),
                    when(|p| ketone_carbon(p, 0), &[M::NineAcylOneFuranThreeYlNonane]),
                    when(|p| cyano(p, 0), &[M::NineCyanoOneFuranThreeYlNonane]),
                ]),
            ]),
        ],
    );

    t.add(
        "O-C-C-C-C-C-C-C-C-C-C:C:O",
        clauses![
            when(|p| !p.bond_in_ring(9) && ring_run(p, 10, 13, R::Furan) && straight(p, 1, 10), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 0), &[M::NineHydroxyOneFuranThreeYlNonane]),
                    when(|p| methoxy(p, 0), &[M::NineMethoxyOneFuranThreeYlNonane]),
                    when(|p| ether_oxygen(p, 0), &[M::NineAlkoxyOneFuranThreeYlNonane]),
                    when(|p| ester_oxygen(p, 0), &[M::NineAcyloxyOneFuranThreeYlNonane]),
                ]),
            ]),
        ],
    );

    t.add(
        "N-C-C-C-C-C-C-C-C-C-C:C:O",
        clauses![
            when(|p| !p.bond_in_ring(9) && ring_run(p, 10, 13, R::Furan) && straight(p, 1, 10), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 0), &[M::NineAminoOneFuranThreeYlNonane]),
                    when(|p| substituted_amine(p, 0), &[M::NineAlkylaminoOneFuranThreeYlNonane]),
                    when(|p| amide_nitrogen(p, 0), &[M::NineAcylaminoOneFuranThreeYlNonane]),
                ]),
            ]),
        ],
    );

    t.add(
        "O:C:C-C-C-C-C-C-C-C-C-C-S",
        clauses![when(|p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Furan) && straight(p, 3, 12), &[]).then(clauses![
            first_of(vec![
                when(|p| thiol(p, 12), &[M::NineMercaptoOneFuranThreeYlNonane]),
                when(|p| thioether(p, 12), &[M::NineAlkylthioOneFuranThreeYlNonane]),
                when(|p| sulfonyl(p, 12), &[M::NineSulfonylOneFuranThreeYlNonane]),
            ]),
        ])],
    );

    t.add(
        "F-C-C-C-C-C-C-C-C-C-C:C:O",
        clauses![when(
            |p| !p.bond_in_ring(9) && ring_run(p, 10, 13, R::Furan) && straight(p, 1, 10),
            &[M::NineFluoroOneFuranThreeYlNonane],
        )],
    );

    t.add(
        "Cl-C-C-C-C-C-C-C-C-C-C:C:O",
        clauses![when(
            |p| !p.bond_in_ring(9) && ring_run(p, 10, 13, R::Furan) && straight(p, 1, 10),
            &[M::NineChloroOneFuranThreeYlNonane],
        )],
    );

    t.add(
        "Br-C-C-C-C-C-C-C-C-C-C:C:O",
        clauses![when(
            |p| !p.bond_in_ring(9) && ring_run(p, 10, 13, R::Furan) && straight(p, 1, 10),
            &[M::NineBromoOneFuranThreeYlNonane],
        )],
    );

    t.add(
        "I-C-C-C-C-C-C-C-C-C-C:C:O",
        clauses![when(
            |p| !p.bond_in_ring(9) && ring_run(p, 10, 13, R::Furan) && straight(p, 1, 10),
            &[M::NineIodoOneFuranThreeYlNonane],
        )],
    );

    t.add(
        "C-C-C-C-C-C-C-C-C-C-C-C:S",
        clauses![
            when(
                |p| !p.bond_in_ring(10) && ring_run(p, 11, 13, R::Thiophene) && straight(p, 1, 11),
                &[],
            ).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 0), &[M::TenCarboxyOneThiophenTwoYlDecane]),
                    when(|p| ester_carbon(p, 0), &[M::TenAlkoxycarbonylOneThiophenTwoYlDecane]),
                    when(|p| amide_carbon(p, 0), &[M::TenCarbamoylOneThiophenTwoYlDecane]),
                    when(|p| aldehyde_carbon(p, 0), &[M::TenFormylOneThiophenTwoYlDecane]),
                    when(|p| ketone_carbon(p, 0), &[M::TenAcylOneThiophenTwoYlDecane]),
                    when(|p| cyano(p, 0), &[M::TenCyanoOneThiophenTwoYlDecane]),
                ]),
            ]),
        ],
    );

    t.add(
        "O-C-C-C-C-C-C-C-C-C-C-C:S",
        clauses![
            when(
                |p| !p.bond_in_ring(10) && ring_run(p, 11, 13, R::Thiophene) && straight(p, 1, 11),
                &[],
            ).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 0), &[M::TenHydroxyOneThiophenTwoYlDecane]),
                    when(|p| methoxy(p, 0), &[M::TenMethoxyOneThiophenTwoYlDecane]),
                    when(|p| ether_oxygen(p, 0), &[M::TenAlkoxyOneThiophenTwoYlDecane]),
                    when(|p| ester_oxygen(p, 0), &[M::TenAcyloxyOneThiophenTwoYlDecane]),
                ]),
            ]),
        ],
    );

    t.add(
        "N-C-C-C-C-C-C-C-C-C-C-C:S",
        clauses![
            when(
                |p| !p.bond_in_ring(10) && ring_run(p, 11, 13, R::Thiophene) && straight(p, 1, 11),
                &[],
            ).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 0), &[M::TenAminoOneThiophenTwoYlDecane]),
                    when(|p| substituted_amine(p, 0), &[M::TenAlkylaminoOneThiophenTwoYlDecane]),
                    when(|p| amide_nitrogen(p, 0), &[M::TenAcylaminoOneThiophenTwoYlDecane]),
                ]),
            ]),
        ],
    );

    t.add(
        "S-C-C-C-C-C-C-C-C-C-C-C:S",
        clauses![
            when(
                |p| !p.bond_in_ring(10) && ring_run(p, 11, 13, R::Thiophene) && straight(p, 1, 11),
                &[],
            ).then(clauses![
                first_of(vec![
                    when(|p| thiol(p, 0), &[M::TenMercaptoOneThiophenTwoYlDecane]),
                    when(|p| thioether(p, 0), &[M::TenAlkylthioOneThiophenTwoYlDecane]),
                    when(|p| sulfonyl(p, 0), &[M::TenSulfonylOneThiophenTwoYlDecane]),
                ]),
            ]),
        ],
    );

    t.add(
        "F-C-C-C-C-C-C-C-C-C-C-C:S",
        clauses![when(
            |p| !p.bond_in_ring(10) && ring_run(p, 11, 13, R::Thiophene) && straight(p, 1, 11),
            &[M::TenFluoroOneThiophenTwoYlDecane],
        )],
    );

    t.add(
        "Cl-C-C-C-C-C-C-C-C-C-C-C:S",
        clauses![when(
            |p| !p.bond_in_ring(10) && ring_run(p, 11, 13, R::Thiophene) && straight(p, 1, 11),
            &[M::TenChloroOneThiophenTwoYlDecane],
        )],
    );

    t.add(
        "Br-C-C-C-C-C-C-C-C-C-C-C:S",
        clauses![when(
            |p| !p.bond_in_ring(10) && ring_run(p, 11, 13, R::Thiophene) && straight(p, 1, 11),
            &[M::TenBromoOneThiophenTwoYlDecane],
        )],
    );

    t.add(
        "I-C-C-C-C-C-C-C-C-C-C-C:S",
        clauses![when(
            |p| !p.bond_in_ring(10) && ring_run(p, 11, 13, R::Thiophene) && straight(p, 1, 11),
            &[M::TenIodoOneThiophenTwoYlDecane],
        )],
    );

    t.add(
        "C-C-C-C-C-C-C-C-C-C-C:C:S",
        clauses![
            when(
                |p| !p.bond_in_ring(9) && ring_run(p, 10, 13, R::Thiophene) && straight(p, 1, 10),
                &[],
            ).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 0), &[M::NineCarboxyOneThiophenThreeYlNonane]),
                    when(|p| ester_carbon(p, 0), &[M::NineAlkoxycarbonylOneThiophenThreeYlNonane]),
                    when(|p| amide_carbon(p, 0), &[M::NineCarbamoylOneThiophenThreeYlNonane]),
                    when(|p| aldehyde_carbon(p, 0), &[M::NineFormylOneThiophenThreeYlNonane]),
                    when(|p| ketone_carbon(p, 0), &[M::NineAcylOneThiophenThreeYlNonane]),
                    when(|p| cyano(p, 0), &[M::NineCyanoOneThiophenThreeYlNonane]),
                ]),
            ]),
        ],
    );

    t.add(
        "O-C-C-C-C-C-C-C-C-C-C:C:S",
        clauses![
            when(
                |p| !p.bond_in_ring(9) && ring_run(p, 10, 13, R::Thiophene) && straight(p, 1, 10),
                &[],
            ).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 0), &[M::NineHydroxyOneThiophenThreeYlNonane]),
                    when(|p| methoxy(p, 0), &[M::NineMethoxyOneThiophenThreeYlNonane]),
                    when(|p| ether_oxygen(p, 0), &[M::NineAlkoxyOneThiophenThreeYlNonane]),
                    when(|p| ester_oxygen(p, 0), &[M::NineAcyloxyOneThiophenThreeYlNonane]),
                ]),
            ]),
        ],
    );

    t.add(
        "N-C-C-C-C-C-C-C-C-C-C:C:S",
        clauses![
            when(
                |p| !p.bond_in_ring(9) && ring_run(p, 10, 13, R::Thiophene) && straight(p, 1, 10),
                &[],
            ).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 0), &[M::NineAminoOneThiophenThreeYlNonane]),
                    when(|p| substituted_amine(p, 0), &[M::NineAlkylaminoOneThiophenThreeYlNonane]),
                    when(|p| amide_nitrogen(p, 0), &[M::NineAcylaminoOneThiophenThreeYlNonane]),
                ]),
            ]),
        ],
    );

    t.add(
        "S-C-C-C-C-C-C-C-C-C-C:C:S",
        clauses![
            when(
                |p| !p.bond_in_ring(9) && ring_run(p, 10, 13, R::Thiophene) && straight(p, 1, 10),
                &[],
            ).then(clauses![
                first_of(vec![
                    when(|p| thiol(p, 0), &[M::NineMercaptoOneThiophenThreeYlNonane]),
                    when(|p| thioether(p, 0), &[M::NineAlkylthioOneThiophenThreeYlNonane]),
                    when(|p| sulfonyl(p, 0), &[M::NineSulfonylOneThiophenThreeYlNonane]),
                ]),
            ]),
        ],
    );

    t.add(
        "F-C-C-C-C-C-C-C-C-C-C:C:S",
        clauses![when(
            |p| !p.bond_in_ring(9) && ring_run(p, 10, 13, R::Thiophene) && straight(p, 1, 10),
            &[M::NineFluoroOneThiophenThreeYlNonane],
        )],
    );

    t.add(
        "Cl-C-C-C-C-C-C-C-C-C-C:C:S",
        clauses![when(
            |p| !p.bond_in_ring(9) && ring_run(p, 10, 13, R::Thiophene) && straight(p, 1, 10),
            &[M::NineChloroOneThiophenThreeYlNonane],
        )],
    );

    t.add(
        "Br-C-C-C-C-C-C-C-C-C-C:C:S",
        clauses![when(
            |p| !p.bond_in_ring(9) && ring_run(p, 10, 13, R::Thiophene) && straight(p, 1, 10),
            &[M::NineBromoOneThiophenThreeYlNonane],
        )],
    );

    t.add(
        "I-C-C-C-C-C-C-C-C-C-C:C:S",
        clauses![when(
            |p| !p.bond_in_ring(9) && ring_run(p, 10, 13, R::Thiophene) && straight(p, 1, 10),
            &[M::NineIodoOneThiophenThreeYlNonane],
        )],
    );

    t.add(
        "C-C-C-C-C-C-C-C-C-C-C:N:C",
        clauses![
            when(
                |p| !p.bond_in_ring(9) && ring_run(p, 10, 13, R::Pyrimidine) && straight(p, 1, 10),
                &[],
            ).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 0), &[M::NineCarboxyOnePyrimidinTwoYlNonane]),
                    when(|p| ester_carbon(p, 0), &[M::NineAlkoxycarbonylOnePyrimidinTwoYlNonane]),
                    when(|p| amide_carbon(p, 0), &[M::NineCarbamoylOnePyrimidinTwoYlNonane]),
                    when(|p| aldehyde_carbon(p, 0), &[M::NineFormylOnePyrimidinTwoYlNonane]),
                    when(|p| ketone_carbon(p, 0), &[M::NineAcylOnePyrimidinTwoYlNonane]),
                    when(|p| cyano(p, 0), &[M::NineCyanoOnePyrimidinTwoYlNonane]),
                ]),
            ]),
            when(|p| !p.bond_in_ring(9) && ring_run(p, 10, 13, R::Thiazole) && straight(p, 1, 10), &[]).then(clauses![
                first_of(vec![
                    when(|p| carboxyl_carbon(p, 0), &[M::NineCarboxyOneThiazolTwoYlNonane]),
                    when(|p| ester_carbon(p, 0), &[M::NineAlkoxycarbonylOneThiazolTwoYlNonane]),
                    when(|p| amide_carbon(p, 0), &[M::NineCarbamoylOneThiazolTwoYlNonane]),
                    when(|p| aldehyde_carbon(p, 0), &[M::NineFormylOneThiazolTwoYlNonane]),
                    when(|p| ketone_carbon(p, 0), &[M::NineAcylOneThiazolTwoYlNonane]),
                    when(|p| cyano(p, 0), &[M::NineCyanoOneThiazolTwoYlNonane]),
                ]),
            ]),
        ],
    );

    t.add(
        "C:N:C-C-C-C-C-C-C-C-C-C-O",
        clauses![
            when(|p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Pyrimidine) && straight(p, 3, 12), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 12), &[M::NineHydroxyOnePyrimidinTwoYlNonane]),
                    when(|p| methoxy(p, 12), &[M::NineMethoxyOnePyrimidinTwoYlNonane]),
                    when(|p| ether_oxygen(p, 12), &[M::NineAlkoxyOnePyrimidinTwoYlNonane]),
                    when(|p| ester_oxygen(p, 12), &[M::NineAcyloxyOnePyrimidinTwoYlNonane]),
                ]),
            ]),
            when(|p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Thiazole) && straight(p, 3, 12), &[]).then(clauses![
                first_of(vec![
                    when(|p| hydroxyl(p, 12), &[M::NineHydroxyOneThiazolTwoYlNonane]),
                    when(|p| methoxy(p, 12), &[M::NineMethoxyOneThiazolTwoYlNonane]),
                    when(|p| ether_oxygen(p, 12), &[M::NineAlkoxyOneThiazolTwoYlNonane]),
                    when(|p| ester_oxygen(p, 12), &[M::NineAcyloxyOneThiazolTwoYlNonane]),
                ]),
            ]),
        ],
    );

    t.add(
        "C:N:C-C-C-C-C-C-C-C-C-C-N",
        clauses![
            when(|p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Pyrimidine) && straight(p, 3, 12), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 12), &[M::NineAminoOnePyrimidinTwoYlNonane]),
                    when(|p| substituted_amine(p, 12), &[M::NineAlkylaminoOnePyrimidinTwoYlNonane]),
                    when(|p| amide_nitrogen(p, 12), &[M::NineAcylaminoOnePyrimidinTwoYlNonane]),
                ]),
            ]),
            when(|p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Thiazole) && straight(p, 3, 12), &[]).then(clauses![
                first_of(vec![
                    when(|p| primary_amine(p, 12), &[M::NineAminoOneThiazolTwoYlNonane]),
                    when(|p| substituted_amine(p, 12), &[M::NineAlkylaminoOneThiazolTwoYlNonane]),
                    when(|p| amide_nitrogen(p, 12), &[M::NineAcylaminoOneThiazolTwoYlNonane]),
                ]),
            ]),
        ],
    );

    t.add(
        "C:N:C-C-C-C-C-C-C-C-C-C-S",
        clauses![
            when(|p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Pyrimidine) && straight(p, 3, 12), &[]).then(clauses![
                first_of(vec![
                    when(|p| thiol(p, 12), &[M::NineMercaptoOnePyrimidinTwoYlNonane]),
                    when(|p| thioether(p, 12), &[M::NineAlkylthioOnePyrimidinTwoYlNonane]),
                    when(|p| sulfonyl(p, 12), &[M::NineSulfonylOnePyrimidinTwoYlNonane]),
                ]),
            ]),
            when(|p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Thiazole) && straight(p, 3, 12), &[]).then(clauses![
                first_of(vec![
                    when(|p| thiol(p, 12), &[M::NineMercaptoOneThiazolTwoYlNonane]),
                    when(|p| thioether(p, 12), &[M::NineAlkylthioOneThiazolTwoYlNonane]),
                    when(|p| sulfonyl(p, 12), &[M::NineSulfonylOneThiazolTwoYlNonane]),
                ]),
            ]),
        ],
    );

    t.add(
        "C:N:C-C-C-C-C-C-C-C-C-C-F",
        clauses![
            when(
                |p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Pyrimidine) && straight(p, 3, 12),
                &[M::NineFluoroOnePyrimidinTwoYlNonane],
            ),
            when(
                |p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Thiazole) && straight(p, 3, 12),
                &[M::NineFluoroOneThiazolTwoYlNonane],
            ),
        ],
    );

    t.add(
        "C:N:C-C-C-C-C-C-C-C-C-C-Cl",
        clauses![
            when(
                |p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Pyrimidine) && straight(p, 3, 12),
                &[M::NineChloroOnePyrimidinTwoYlNonane],
            ),
            when(
                |p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Thiazole) && straight(p, 3, 12),
                &[M::NineChloroOneThiazolTwoYlNonane],
            ),
        ],
    );

    t.add(
        "Br-C-C-C-C-C-C-C-C-C-C:N:C",
        clauses![
            when(
                |p| !p.bond_in_ring(9) && ring_run(p, 10, 13, R::Pyrimidine) && straight(p, 1, 10),
                &[M::NineBromoOnePyrimidinTwoYlNonane],
            ),
            when(
                |p| !p.bond_in_ring(9) && ring_run(p, 10, 13, R::Thiazole) && straight(p, 1, 10),
                &[M::NineBromoOneThiazolTwoYlNonane],
            ),
        ],
    );

    t.add(
        "C:N:C-C-C-C-C-C-C-C-C-C-I",
        clauses![
            when(
                |p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Pyrimidine) && straight(p, 3, 12),
                &[M::NineIodoOnePyrimidinTwoYlNonane],
            ),
            when(
                |p| !p.bond_in_ring(2) && ring_run(p, 0, 3, R::Thiazole) && straight(p, 3, 12),
                &[M::NineIodoOneThiazolTwoYlNonane],
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
    fn pyridinylpropanol() {
        let ctx = smiles("OCCCc1ccccn1", &[R::Pyridine], &[]);
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        for motif in [M::TwoAlkylpyridine, M::ThreeHydroxyOnePyridinTwoYlPropane] {
            assert!(fp.get(motif), "{motif}");
        }
        assert!(!fp.get(M::TwoMethylfuran));
    }

    #[test]
    fn methylfuran() {
        let ctx = smiles("Cc1ccco1", &[R::Furan], &[]);
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        assert!(fp.get(M::TwoMethylfuran));
        assert!(!fp.get(M::TwoAlkylpyridine));
    }

    #[test]
    fn bromobutylthiophene() {
        let ctx = smiles("BrCCCCc1cccs1", &[R::Thiophene], &[]);
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        for motif in [M::TwoAlkylthiophene, M::FourBromoOneThiophenTwoYlButane] {
            assert!(fp.get(motif), "{motif}");
        }
        assert!(!fp.get(M::TwoAlkylpyridine));
    }

    #[test]
    fn chloropyridine() {
        let ctx = smiles("Clc1cccnc1", &[R::Pyridine], &[]);
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        assert!(fp.get(M::ThreeChloropyridine));
        assert!(!fp.get(M::TwoAlkylpyridine));
    }

    #[test]
    fn pyrimidinylpropylamine() {
        let ctx = smiles("NCCCc1ncccn1", &[R::Pyrimidine], &[]);
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        assert!(fp.get(M::ThreeAminoOnePyrimidinTwoYlPropane));
        assert!(!fp.get(M::TwoAlkylpyridine));
    }

    #[test]
    fn thiazolylethanol() {
        let ctx = smiles("OCCc1nccs1", &[R::Thiazole], &[]);
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        assert!(fp.get(M::TwoHydroxyOneThiazolTwoYlEthane));
        assert!(!fp.get(M::TwoAlkylpyridine));
    }

    #[test]
    fn methylpyrrole() {
        let ctx = smiles("Cc1ccc[nH]1", &[R::Pyrrole], &[]);
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        assert!(fp.get(M::TwoMethylpyrrole));
        assert!(!fp.get(M::TwoAlkylpyridine));
    }

    #[test]
    fn nicotinamide() {
        let ctx = smiles("NC(=O)c1cccnc1", &[R::Pyridine], &[]);
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        assert!(fp.get(M::ThreeCarbamoylpyridine));
        assert!(!fp.get(M::TwoAlkylpyridine));
    }

    #[test]
    fn furfuryl_alcohol() {
        let ctx = smiles("OCc1ccco1", &[R::Furan], &[]);
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        for motif in [M::TwoHydroxymethylfuran, M::OneHydroxyOneFuranTwoYlMethane] {
            assert!(fp.get(motif), "{motif}");
        }
        assert!(!fp.get(M::TwoAlkylpyridine));
    }

    #[test]
    fn thiophene_3_ethanol() {
        let ctx = smiles("OCCc1ccsc1", &[R::Thiophene], &[]);
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        for motif in [M::ThreeAlkylthiophene, M::TwoHydroxyOneThiophenThreeYlEthane] {
            assert!(fp.get(motif), "{motif}");
        }
        assert!(!fp.get(M::TwoAlkylpyridine));
    }
}
