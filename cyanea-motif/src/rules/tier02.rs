//! Two-atom motifs: one bond and the atom environments at either end.

use super::common::*;
use super::{always, first_of, when, RuleTable};
use crate::graph::{FunctionGroup as G, RingSetType as RS, RingType as R};
use crate::motif::Motif as M;
use crate::path::PathView;

pub(super) fn table() -> RuleTable {
    let mut t = RuleTable::new(2);

    t.add(
        "C-C",
        clauses![
            first_of(vec![
                when(|p| both_ends(p, aromatic) && !p.bond_in_ring(0), &[M::Biaryl]),
                when(|p| ends_pair(p, aromatic, methyl), &[M::ArylMethyl]),
                when(|p| ends_pair(p, aromatic, alkyl), &[M::ArylAlkyl]),
            ]),
            when(
                |p| either_end(p, |p, i| p.env(i).methyl == 3 && p.env(i).heavy_degree == 4),
                &[M::TertButyl],
            ),
            when(
                |p| {
                    either_end(p, |p, i| {
                        p.env(i).methyl == 2 && p.env(i).heavy_degree == 3 && hydrogens(p, i, 1)
                    })
                },
                &[M::Isopropyl],
            ),
            when(|p| both_ends(p, carbonyl_carbon), &[M::AlphaDicarbonyl]),
            when(|p| p.bond_in_ring(0) && p.bond(0).is_fusion(), &[M::RingFusionSingleBond]),
        ],
    );

    t.add(
        "C=C",
        clauses![
            when(|p| acyclic(p) && neutral(p), &[M::CarbonCarbonDoubleBond]),
            first_of(vec![
                when(
                    |p| p.bond_in_ring(0) && p.bond_ring(0, R::Cyclohexene).is_some(),
                    &[M::CyclohexeneDoubleBond],
                ),
                when(|p| p.bond_in_ring(0), &[M::EndocyclicDoubleBond]),
                when(|p| p.in_ring(0) != p.in_ring(1), &[M::ExocyclicDoubleBond]),
                when(|p| either_end(p, |p, i| p.env(i).hydroxyl > 0), &[M::Enol]),
                when(|p| either_end(p, |p, i| p.env(i).ether_oxygen > 0), &[M::EnolEther]),
                when(|p| either_end(p, |p, i| p.env(i).carbonyl > 0), &[M::AlphaBetaUnsaturatedCarbonyl]),
                when(
                    |p| either_end(p, |p, i| p.any_branch(i, "C", |a| a.aromatic)),
                    &[M::Styrene],
                ),
                when(|p| either_end(p, halogenated), &[M::Haloalkene]),
                when(|p| either_end(p, |p, i| hydrogens(p, i, 2)), &[M::TerminalAlkene]),
            ]),
        ],
    );

    t.add(
        "C#C",
        clauses![first_of(vec![
            when(|p| either_end(p, |p, i| hydrogens(p, i, 1)), &[M::TerminalAlkyne]),
            always(&[M::InternalAlkyne]),
        ])],
    );

    // Aromatic C:C bonds only carry information when they fuse two rings.
    t.add(
        "C:C",
        clauses![when(|p| p.bond(0).is_fusion(), &[M::FusedAromaticBond]).then(clauses![
            first_of(vec![
                when(|p| fused_by(p, RS::Naphthalene), &[M::Naphthalene]),
                when(|p| fused_by(p, RS::Anthracene), &[M::Anthracene]),
                when(|p| fused_by(p, RS::Phenanthrene), &[M::Phenanthrene]),
                when(|p| fused_by(p, RS::Indole), &[M::Indole]),
                when(|p| fused_by(p, RS::Benzofuran), &[M::Benzofuran]),
                when(|p| fused_by(p, RS::Benzothiophene), &[M::Benzothiophene]),
                when(|p| fused_by(p, RS::Benzimidazole), &[M::Benzimidazole]),
                when(|p| fused_by(p, RS::Quinoline), &[M::Quinoline]),
                when(|p| fused_by(p, RS::Isoquinoline), &[M::Isoquinoline]),
                when(|p| fused_by(p, RS::Carbazole), &[M::Carbazole]),
            ]),
        ])],
    );

    t.add(
        "C-O",
        clauses![
            when(|p| hydroxyl(p, 1), &[M::Hydroxyl]).then(clauses![first_of(vec![
                when(|p| p.aromatic(0), &[M::Phenol]),
                when(|p| p.group(0) == G::CarboxylCarbon, &[M::CarboxylicAcid]),
                when(|p| anomeric(p, 0), &[M::Hemiacetal]),
                when(|p| sugar(p, 0), &[M::SugarHydroxyl]),
                when(|p| p.env(0).hydrogen >= 2, &[M::PrimaryAlcohol]),
                when(|p| hydrogens(p, 0, 1), &[M::SecondaryAlcohol]),
                when(|p| p.group(0) == G::AlkaneCarbon, &[M::TertiaryAlcohol]),
            ])]),
            first_of(vec![
                when(|p| p.group(1) == G::EsterOxygen && methyl(p, 0), &[M::MethylEster]),
                when(|p| p.group(1) == G::EtherOxygen && methyl(p, 0), &[M::Methoxy]),
                when(
                    |p| p.group(1) == G::EtherOxygen && anomeric(p, 0) && !p.in_ring(1),
                    &[M::GlycosidicOxygen],
                ),
                when(|p| p.group(1) == G::EtherOxygen && p.aromatic(0), &[M::ArylEther]),
            ]),
            when(
                |p| p.group(1) == G::AnionicOxygen && p.group(0) == G::CarboxylCarbon,
                &[M::Carboxylate],
            ),
            when(|p| p.group(1) == G::AnionicOxygen && p.group(0) != G::CarboxylCarbon, &[M::Alkoxide]),
        ],
    );

    t.add(
        "C=O",
        clauses![first_of(vec![
            when(|p| p.group(0) == G::KetoneCarbon, &[M::KetoneCarbonyl]).then(clauses![
                when(|p| p.in_ring(0), &[M::CyclicKetone]),
                first_of(vec![
                    when(|p| p.branches(0, "C").iter().filter(|a| a.aromatic).count() >= 2, &[M::DiarylKetone]),
                    when(|p| p.any_branch(0, "C", |a| a.aromatic), &[M::ArylKetone]),
                ]),
                when(|p| p.env(0).methyl > 0, &[M::MethylKetone]),
            ]),
            when(|p| p.group(0) == G::AldehydeCarbon, &[M::AldehydeCarbonyl]).then(clauses![
                when(|p| p.any_branch(0, "C", |a| a.aromatic), &[M::ArylAldehyde]),
                when(|p| p.env(0).heavy_degree == 1 && p.env(0).hydrogen == 2, &[M::Formaldehyde]),
            ]),
            when(|p| p.group(0) == G::CarboxylCarbon, &[M::CarboxylCarbonyl]).then(clauses![
                when(|p| p.env(0).carbons() == 0, &[M::CarbonicAcidDerivative]),
            ]),
            when(|p| p.group(0) == G::EsterCarbon, &[M::EsterCarbonyl]).then(clauses![
                first_of(vec![
                    when(|p| p.env(0).ether_oxygen >= 2, &[M::Carbonate]),
                    when(|p| p.in_ring(0), &[M::Lactone]),
                    when(|p| hydrogens(p, 0, 1), &[M::Formate]),
                ]),
            ]),
            when(|p| p.group(0) == G::AmideCarbon, &[M::AmideCarbonyl]).then(clauses![
                first_of(vec![
                    when(|p| p.env(0).nitrogen_single >= 2, &[M::Urea]),
                    when(|p| p.env(0).ether_oxygen > 0, &[M::Carbamate]),
                    when(|p| p.in_ring(0), &[M::Lactam]),
                    when(|p| hydrogens(p, 0, 1), &[M::Formamide]),
                ]),
            ]),
        ])],
    );

    t.add(
        "C-N",
        clauses![
            first_of(vec![
                when(|p| p.group(1) == G::PrimaryAmineNitrogen && p.aromatic(0), &[M::Aniline]),
                when(|p| p.group(1) == G::PrimaryAmineNitrogen, &[M::PrimaryAmine]),
                when(|p| p.group(1) == G::SecondaryAmineNitrogen && p.in_ring(1), &[M::CyclicSecondaryAmine]),
                when(|p| p.group(1) == G::SecondaryAmineNitrogen, &[M::SecondaryAmine]),
                when(|p| p.group(1) == G::TertiaryAmineNitrogen, &[M::TertiaryAmine]).then(clauses![
                    when(|p| p.env(1).methyl >= 2, &[M::Dimethylamino]),
                    when(|p| p.in_ring(1), &[M::CyclicTertiaryAmine]),
                ]),
                when(|p| p.group(1) == G::QuaternaryNitrogen, &[M::QuaternaryAmmonium]).then(clauses![
                    when(|p| p.env(1).methyl >= 3, &[M::Trimethylammonium]),
                ]),
                when(|p| p.group(1) == G::AromaticNitrogen && !p.in_ring(0), &[M::NSubstitutedAzole]),
                when(|p| p.group(1) == G::NitroNitrogen && p.aromatic(0), &[M::Nitroarene]),
                when(|p| p.group(1) == G::NitroNitrogen, &[M::Nitroalkane]),
            ]),
            when(|p| methyl(p, 0) && p.atom(1).env.heavy_degree >= 2, &[M::NMethyl]),
        ],
    );

    t.add(
        "C=N",
        clauses![first_of(vec![
            when(|p| p.env(1).hydroxyl > 0, &[M::Oxime]),
            when(|p| p.env(0).nitrogen_single >= 2, &[M::Guanidine]),
            when(|p| p.env(0).nitrogen_single == 1, &[M::Amidine]),
            when(|p| p.bond_in_ring(0), &[M::CyclicImine]),
            always(&[M::Imine]),
        ])],
    );

    t.add(
        "C#N",
        clauses![
            always(&[M::Nitrile]),
            when(|p| p.any_branch(0, "C", |a| a.aromatic), &[M::ArylNitrile]),
        ],
    );

    t.add(
        "C:N",
        clauses![first_of(vec![
            when(|p| p.bond_ring(0, R::Pyridine).is_some(), &[M::Pyridine]),
            when(|p| p.bond_ring(0, R::Pyrimidine).is_some(), &[M::Pyrimidine]),
            when(|p| p.bond_ring(0, R::Pyrazine).is_some(), &[M::Pyrazine]),
            when(|p| p.bond_ring(0, R::Triazine).is_some(), &[M::Triazine]),
            when(|p| p.bond_ring(0, R::Pyrrole).is_some(), &[M::Pyrrole]),
            when(|p| p.bond_ring(0, R::Imidazole).is_some(), &[M::Imidazole]),
            when(|p| p.bond_ring(0, R::Thiazole).is_some(), &[M::Thiazole]),
            when(|p| p.bond_ring(0, R::Oxazole).is_some(), &[M::Oxazole]),
            always(&[M::AzaArene]),
        ])],
    );

    t.add(
        "C:O",
        clauses![first_of(vec![
            when(|p| p.bond_ring(0, R::Furan).is_some(), &[M::Furan]),
            when(|p| p.bond_ring(0, R::Isoxazole).is_some(), &[M::Isoxazole]),
            always(&[M::OxaArene]),
        ])],
    );

    t.add(
        "C:S",
        clauses![first_of(vec![
            when(|p| p.bond_ring(0, R::Thiophene).is_some(), &[M::Thiophene]),
            always(&[M::ThiaArene]),
        ])],
    );

    t.add(
        "C-S",
        clauses![first_of(vec![
            when(|p| p.group(1) == G::ThiolSulfur && p.aromatic(0), &[M::Thiophenol]),
            when(|p| p.group(1) == G::ThiolSulfur, &[M::Thiol]),
            when(|p| p.group(1) == G::SulfideSulfur && methyl(p, 0), &[M::Methylthio]),
            when(|p| p.group(1) == G::SulfideSulfur && !p.in_ring(1), &[M::Sulfide]),
            when(|p| p.group(1) == G::SulfonylSulfur && p.aromatic(0), &[M::ArylSulfonyl]),
            when(|p| p.group(1) == G::SulfonylSulfur, &[M::AlkylSulfonyl]),
        ])],
    );

    t.add(
        "C=S",
        clauses![first_of(vec![
            when(|p| p.env(0).nitrogen_single >= 2, &[M::Thiourea]),
            when(|p| p.env(0).nitrogen_single == 1, &[M::Thioamide]),
            always(&[M::Thiocarbonyl]),
        ])],
    );

    t.add(
        "C-F",
        clauses![first_of(vec![
            when(|p| p.env(0).fluorine == 3, &[M::Trifluoromethyl]),
            when(|p| p.aromatic(0), &[M::ArylFluoride]),
            always(&[M::AlkylFluoride]),
        ])],
    );

    t.add(
        "C-Cl",
        clauses![first_of(vec![
            when(|p| p.env(0).chlorine >= 3, &[M::Trichloromethyl]),
            when(|p| p.aromatic(0), &[M::ArylChloride]),
            when(|p| p.group(0) == G::AlkeneCarbon, &[M::VinylChloride]),
            always(&[M::AlkylChloride]),
        ])],
    );

    t.add(
        "Br-C",
        clauses![first_of(vec![
            when(|p| p.aromatic(1), &[M::ArylBromide]),
            always(&[M::AlkylBromide]),
        ])],
    );

    t.add(
        "C-I",
        clauses![first_of(vec![
            when(|p| p.aromatic(0), &[M::ArylIodide]),
            always(&[M::AlkylIodide]),
        ])],
    );

    t.add(
        "C-P",
        clauses![first_of(vec![
            when(|p| p.group(1) == G::PhosphonatePhosphorus, &[M::Phosphonate]),
            when(|p| p.env(1).carbons() >= 3, &[M::Phosphine]),
            always(&[M::Organophosphorus]),
        ])],
    );

    t.add(
        "C-Si",
        clauses![first_of(vec![
            when(
                |p| p.env(1).methyl == 2 && p.any_branch(1, "C", |a| a.env.methyl == 3),
                &[M::TertButyldimethylsilyl],
            ),
            when(|p| p.env(1).methyl >= 3, &[M::Trimethylsilyl]),
            always(&[M::Organosilicon]),
        ])],
    );

    t.add(
        "N-N",
        clauses![first_of(vec![
            when(|p| p.group(0) == G::AmideNitrogen || p.group(1) == G::AmideNitrogen, &[M::Hydrazide]),
            when(|p| p.group(0) == G::ImineNitrogen || p.group(1) == G::ImineNitrogen, &[M::Hydrazone]),
            always(&[M::Hydrazine]),
        ])],
    );

    t.add(
        "N=N",
        clauses![first_of(vec![
            when(|p| both_ends(p, |p, i| p.any_branch(i, "C", |a| a.aromatic)), &[M::Azobenzene]),
            always(&[M::AzoGroup]),
        ])],
    );

    t.add(
        "N:N",
        clauses![first_of(vec![
            when(|p| p.bond_ring(0, R::Pyrazole).is_some(), &[M::Pyrazole]),
            when(|p| p.bond_ring(0, R::Triazole).is_some(), &[M::Triazole]),
            when(|p| p.bond_ring(0, R::Tetrazole).is_some(), &[M::Tetrazole]),
            when(|p| p.bond_ring(0, R::Pyridazine).is_some(), &[M::Pyridazine]),
        ])],
    );

    t.add(
        "N-O",
        clauses![first_of(vec![
            when(|p| p.charge(0) > 0 && p.group(1) == G::AnionicOxygen && p.group(0) != G::NitroNitrogen, &[M::NOxide]),
            when(|p| amine(p, 0) && hydroxyl(p, 1), &[M::Hydroxylamine]),
            when(|p| p.env(0).oxygens() >= 3 && p.group(1) == G::EtherOxygen, &[M::NitrateEster]),
        ])],
    );

    t.add(
        "N=O",
        clauses![first_of(vec![
            when(|p| p.group(0) == G::NitroNitrogen, &[M::NitroGroup]),
            always(&[M::Nitroso]),
        ])],
    );

    t.add(
        "O-O",
        clauses![first_of(vec![
            when(|p| either_end(p, hydroxyl), &[M::Hydroperoxide]),
            when(|p| both_ends(p, |p, i| p.in_ring(i)), &[M::Endoperoxide]),
            always(&[M::Peroxide]),
        ])],
    );

    t.add(
        "O=P",
        clauses![first_of(vec![
            when(|p| p.group(1) == G::PhosphatePhosphorus, &[]).then(clauses![first_of(vec![
                when(|p| p.env(1).ether_oxygen >= 3, &[M::PhosphateTriester]),
                when(|p| p.env(1).ether_oxygen == 2, &[M::PhosphateDiester]),
                when(|p| p.env(1).ether_oxygen == 1, &[M::PhosphateMonoester]),
                always(&[M::InorganicPhosphate]),
            ])]),
            when(|p| p.group(1) == G::PhosphonatePhosphorus, &[M::PhosphonateOxo]),
            always(&[M::PhosphineOxide]),
        ])],
    );

    t.add(
        "O-P",
        clauses![first_of(vec![
            when(|p| p.env(0).phosphorus >= 2, &[M::Pyrophosphate]),
            when(|p| p.group(0) == G::AnionicOxygen, &[M::PhosphateAnion]),
            when(|p| hydroxyl(p, 0), &[M::PhosphateHydroxyl]),
        ])],
    );

    t.add(
        "O=S",
        clauses![first_of(vec![
            when(|p| p.group(1) == G::SulfinylSulfur, &[M::Sulfoxide]),
            when(|p| p.group(1) == G::SulfonylSulfur, &[M::SulfonylGroup]),
        ])],
    );

    t.add(
        "O-S",
        clauses![first_of(vec![
            when(
                |p| p.group(1) == G::SulfonylSulfur && p.env(1).carbons() == 0 && p.group(0) == G::EtherOxygen,
                &[M::SulfateEster],
            ),
            when(|p| p.group(1) == G::SulfonylSulfur && p.env(1).carbons() > 0 && hydroxyl(p, 0), &[M::SulfonicAcid]),
            when(
                |p| p.group(1) == G::SulfonylSulfur && p.env(1).carbons() > 0 && p.group(0) == G::EtherOxygen,
                &[M::SulfonateEster],
            ),
        ])],
    );

    t.add(
        "N-S",
        clauses![first_of(vec![
            when(|p| p.group(1) == G::SulfonylSulfur, &[M::Sulfonamide]),
            always(&[M::Sulfenamide]),
        ])],
    );

    t.add("S-S", clauses![always(&[M::Disulfide])]);

    t.add(
        "O-Si",
        clauses![first_of(vec![
            when(|p| hydroxyl(p, 0), &[M::Silanol]),
            when(|p| p.env(0).heavy_degree >= 2, &[M::SilylEther]),
        ])],
    );

    t
}

/// The path bond lies in a ringset of type `ty`.
fn fused_by(p: &PathView<'_>, ty: RS) -> bool {
    p.ctx().ringset_type_of(p.bond(0), ty).is_some()
}

#[cfg(test)]
mod tests {
    use crate::engine::MotifEngine;
    use crate::fingerprint::Fingerprint;
    use crate::motif::Motif;
    use crate::path::Path;
    use crate::testing;

    fn eval(ctx: &crate::graph::GraphContext, atoms: &[usize]) -> Fingerprint {
        let path = Path::canonical(ctx, atoms).unwrap();
        let mut fp = Fingerprint::new();
        MotifEngine::new().evaluate(ctx, &path, &mut fp);
        fp
    }

    #[test]
    fn plain_alkene_sets_only_generic_bit() {
        let ctx = testing::but_2_ene();
        let fp = eval(&ctx, &[1, 2]);
        assert_eq!(fp.names(), vec![Motif::CarbonCarbonDoubleBond.name()]);
    }

    #[test]
    fn generic_alkene_bit_runs_beside_refinements() {
        let ctx = testing::ethylene();
        let fp = eval(&ctx, &[0, 1]);
        assert!(fp.get(Motif::CarbonCarbonDoubleBond));
        assert!(fp.get(Motif::TerminalAlkene));

        let ctx = testing::but_1_ene();
        let fp = eval(&ctx, &[0, 1]);
        assert!(fp.get(Motif::CarbonCarbonDoubleBond));
        assert!(fp.get(Motif::TerminalAlkene));
    }

    #[test]
    fn alkene_contexts_are_exclusive() {
        // enol beats terminal alkene even though both ends would qualify
        let ctx = testing::vinyl_alcohol();
        let fp = eval(&ctx, &[0, 1]);
        assert!(fp.get(Motif::Enol));
        assert!(!fp.get(Motif::TerminalAlkene));
        assert!(fp.get(Motif::CarbonCarbonDoubleBond));
    }

    #[test]
    fn ring_double_bond_skips_generic_bit() {
        let ctx = testing::chromone(&[]);
        let fp = eval(&ctx, &[1, 2]);
        assert!(fp.get(Motif::EndocyclicDoubleBond));
        assert!(!fp.get(Motif::CarbonCarbonDoubleBond));
        assert!(!fp.get(Motif::EnolEther));
    }

    #[test]
    fn alcohol_classes() {
        let ctx = testing::ethanol();
        let fp = eval(&ctx, &[1, 2]);
        assert!(fp.get(Motif::Hydroxyl));
        assert!(fp.get(Motif::PrimaryAlcohol));
        assert!(!fp.get(Motif::SecondaryAlcohol));

        let ctx = testing::phenol();
        let fp = eval(&ctx, &[0, 6]);
        assert!(fp.get(Motif::Phenol));
        assert!(!fp.get(Motif::TertiaryAlcohol));
    }

    #[test]
    fn ester_carbonyl_and_methyl_ester() {
        let ctx = testing::methyl_acetate();
        let carbonyl = eval(&ctx, &[1, 2]);
        assert!(carbonyl.get(Motif::EsterCarbonyl));
        assert!(!carbonyl.get(Motif::Lactone));
        assert!(!carbonyl.get(Motif::KetoneCarbonyl));

        let alkoxy = eval(&ctx, &[4, 3]);
        assert!(alkoxy.get(Motif::MethylEster));
        assert!(!alkoxy.get(Motif::Methoxy));
    }

    #[test]
    fn carboxylic_acid_both_bonds() {
        let ctx = testing::acetic_acid();
        assert!(eval(&ctx, &[1, 2]).get(Motif::CarboxylCarbonyl));
        assert!(eval(&ctx, &[1, 3]).get(Motif::CarboxylicAcid));
    }

    #[test]
    fn fusion_bond_names_ringset() {
        let ctx = testing::naphthalene();
        let fusion = ctx.bonds().iter().find(|b| b.is_fusion()).unwrap();
        let fp = eval(&ctx, &fusion.atoms);
        assert!(fp.get(Motif::FusedAromaticBond));
        assert!(fp.get(Motif::Naphthalene));
        assert!(!fp.get(Motif::Indole));

        // a peripheral bond is not a fusion bond
        let fp = eval(&ctx, &[1, 2]);
        assert_eq!(fp.count_ones(), 0);
    }
}
