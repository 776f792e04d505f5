//! Four-atom motifs: acyl linkages, conjugation and ortho relationships on rings.

use super::common::*;
use super::{always, first_of, when, RuleTable};
use crate::graph::{FunctionGroup as G, RingType as R};
use crate::motif::Motif as M;

pub(super) fn table() -> RuleTable {
    let mut t = RuleTable::new(4);

    // 0: alkoxy carbon, 1: ester oxygen, 2: acyl carbon, 3: carbonyl oxygen
    t.add(
        "C-O-C=O",
        clauses![first_of(vec![
            when(|p| sugar(p, 0), &[M::SugarEster]).then(clauses![
                when(|p| p.any_branch(2, "C", |a| a.aromatic), &[M::GalloylLikeSugarEster]),
            ]),
            when(
                |p| !p.in_ring(0) && p.any_branch(0, "C", |a| !a.in_ring && a.env.oxygen_single >= 1),
                &[M::GlycerolEster],
            ),
            when(|p| alkyl(p, 0) && p.env(0).methyl == 1 && hydrogens(p, 0, 2), &[M::EthylEster]),
            when(
                |p| p.env(2).carbon_double > 0 || p.any_branch(2, "C", |a| a.group == G::AlkeneCarbon),
                &[M::UnsaturatedEster],
            ),
        ])],
    );

    // 0: N-substituent, 1: amide nitrogen, 2: acyl carbon, 3: carbonyl oxygen
    t.add(
        "C-N-C=O",
        clauses![
            first_of(vec![
                when(|p| sugar(p, 0) && p.env(2).methyl > 0, &[M::NAcetylHexosamine]),
                when(|p| p.aromatic(0), &[M::Anilide]),
                when(|p| p.env(0).carbonyl > 0 && !p.in_ring(1), &[M::PeptideBond]),
                when(|p| methyl(p, 0), &[M::NMethylAmide]),
            ]),
            when(|p| p.in_ring(1) && p.bond_in_ring(1) && !p.bond_in_ring(0), &[M::NSubstitutedLactam]),
        ],
    );

    // 0: beta carbon, 1: alpha carbon, 2: carbonyl carbon, 3: oxygen
    t.add(
        "C-C-C=O",
        clauses![first_of(vec![
            when(|p| carbonyl_carbon(p, 0), &[M::BetaDicarbonyl]),
            when(
                |p| p.group(2) == G::CarboxylCarbon && p.any_branch(0, "N", |a| a.group.is_amine()),
                &[M::BetaAminoAcid],
            ),
            when(|p| p.env(0).hydroxyl > 0 && !p.in_ring(2), &[M::BetaHydroxyCarbonyl]),
            when(|p| p.aromatic(0) && !p.in_ring(1), &[M::ArylPropanoid]),
        ])],
    );

    // 0=1: alkene, 2: carbonyl carbon, 3: oxygen
    t.add(
        "C=C-C=O",
        clauses![
            first_of(vec![
                when(|p| p.in_ring_of(2, R::Pyrone) || p.in_ring_of(2, R::Pyranone), &[M::PyroneCarbonyl]),
                when(
                    |p| p.in_ring(2) && p.ring(2, R::Cyclohexadiene).map_or(false, |r| r.env.ketone >= 2),
                    &[M::Quinone],
                ),
                when(|p| p.bond_in_ring(0) && p.in_ring(2), &[M::CyclicEnone]),
                when(|p| p.group(2) == G::KetoneCarbon, &[M::Enone]),
                when(|p| p.group(2) == G::AldehydeCarbon, &[M::Enal]),
                when(|p| p.group(2) == G::EsterCarbon, &[M::AcrylateEster]),
                when(|p| p.group(2) == G::AmideCarbon, &[M::Acrylamide]),
            ]),
            when(|p| p.any_branch(0, "C", |a| a.aromatic) && !p.in_ring(1), &[M::CinnamicScaffold]),
        ],
    );

    // 0-1: aromatic ring bond, 2: carbonyl carbon, 3: oxygen
    t.add(
        "C:C-C=O",
        clauses![first_of(vec![
            when(|p| p.in_ring_of(2, R::Pyrone), &[M::BenzopyranoneCarbonyl]),
            when(|p| p.in_ring(2), &[M::FusedArylKetone]),
            when(|p| p.env(0).hydroxyl > 0 && p.group(2) == G::EsterCarbon, &[M::Salicylate]),
            when(|p| p.env(0).hydroxyl > 0 && p.group(2) == G::CarboxylCarbon, &[M::SalicylicAcid]),
        ])],
    );

    // 0: carbon, 1: carbon, 2: oxygen, 3: carbon
    t.add(
        "C-C-O-C",
        clauses![first_of(vec![
            when(|p| p.group(1) == G::EsterCarbon && methyl(p, 0) && sugar(p, 3), &[M::AcetylatedSugar]),
            when(|p| methyl(p, 0) && p.group(2) == G::EtherOxygen && open_chain(p), &[M::Ethoxy]),
            when(
                |p| p.in_ring_of(2, R::Tetrahydrofuran) && p.in_ring(0) && !p.same_ring(0, 2),
                &[M::FuranoseSideChain],
            ),
        ])],
    );

    // 0: alkoxy carbon, 1: ether oxygen, 2-3: aromatic ring bond
    t.add(
        "C-O-C:C",
        clauses![first_of(vec![
            when(|p| anomeric(p, 0), &[M::PhenolicGlycoside]),
            when(|p| p.any_branch(0, "C", |a| a.group == G::AlkeneCarbon), &[M::AllylArylEther]),
            when(|p| p.any_branch(0, "C", |a| a.aromatic), &[M::BenzylArylEther]),
            when(|p| methyl(p, 0) && p.env(3).hydroxyl > 0, &[M::HydroxyMethoxyArene]),
        ])],
    );

    // Palindromic: two oxygens on adjacent ring carbons.
    t.add(
        "O-C:C-O",
        clauses![first_of(vec![
            when(|p| p.in_ring_of(0, R::Dioxane) && p.in_ring_of(3, R::Dioxane), &[M::Benzodioxane]),
            when(
                |p| both_ends(p, |p, i| p.group(i) == G::EtherOxygen && p.env(i).methyl > 0),
                &[M::Veratrole],
            ),
            when(
                |p| both_ends(p, hydroxyl) && p.ring(1, R::Benzene).map_or(false, |r| r.env.hydroxyl >= 3),
                &[M::TrihydroxyArene],
            ),
        ])],
    );

    // Palindromic: substituents on adjacent ring carbons.
    t.add(
        "C-C:C-C",
        clauses![first_of(vec![
            when(|p| both_ends(p, carbonyl_carbon), &[M::Phthalate]),
            when(|p| both_ends(p, methyl), &[M::OrthoXylene]),
            when(
                |p| p.same_ring(0, 3) && both_ends(p, |p, i| !p.aromatic(i)),
                &[M::BenzoCycloalkane],
            ),
        ])],
    );

    // Palindromic diene.
    t.add(
        "C=C-C=C",
        clauses![first_of(vec![
            when(|p| p.bond_in_ring(0) && p.bond_in_ring(2), &[M::CyclicDiene]),
            when(|p| both_ends(p, |p, i| hydrogens(p, i, 2)), &[M::Butadiene]),
            always(&[M::ConjugatedDiene]),
        ])],
    );

    // Palindromic: internal alkene flanked by two carbons.
    t.add(
        "C-C=C-C",
        clauses![
            when(
                |p| {
                    either_end(p, |p, i| {
                        hydrogens(p, i, 2) && p.any_branch(i, "C", |a| a.env.carbon_double > 0 && !a.in_ring)
                    })
                },
                &[M::MethyleneInterruptedDiene],
            ),
            when(|p| open_chain(p) && both_ends(p, |p, i| p.group(i) == G::AlkaneCarbon), &[M::InternalAlkeneChain]),
            when(|p| p.bond_in_ring(1) && either_end(p, methyl), &[M::TrisubstitutedRingAlkene]),
        ],
    );

    // 0: carbon, 1: carbon, 2: ester oxygen, 3: phosphorus
    t.add(
        "C-C-O-P",
        clauses![first_of(vec![
            when(
                |p| p.any_branch(0, "N", |a| a.group == G::QuaternaryNitrogen),
                &[M::Phosphocholine],
            ),
            when(|p| p.any_branch(0, "N", |a| a.group.is_amine()), &[M::Phosphoethanolamine]),
            when(|p| sugar(p, 0) && !p.in_ring(1), &[M::PrimarySugarPhosphate]),
            when(|p| p.env(0).oxygen_single > 0 && acyclic(p), &[M::GlycerolPhosphate]),
        ])],
    );

    t.add("C#C-C#C", clauses![always(&[M::ConjugatedDiyne])]);

    // 0: functionalized carbon, 1: carbon, 2=3: alkene
    t.add(
        "C-C-C=C",
        clauses![first_of(vec![
            when(|p| p.env(0).hydroxyl > 0 && !p.in_ring(0), &[M::HomoallylicAlcohol]),
            when(|p| carbonyl_carbon(p, 0) && !p.bond_in_ring(2), &[M::BetaGammaUnsaturatedCarbonyl]),
        ])],
    );

    // 0: carbon, 1: oxygen, 2: acetal carbon, 3: oxygen
    t.add(
        "C-O-C-O",
        clauses![first_of(vec![
            when(
                |p| anomeric(p, 2) && !p.in_ring(1) && p.in_ring(3) && alkyl(p, 0),
                &[M::AlkylGlycoside],
            ),
            when(|p| methyl(p, 0) && hydrogens(p, 2, 2) && !p.in_ring(2), &[M::MethoxymethylEther]),
        ])],
    );

    // Palindromic: the two carbonyl carbons are positions 1 and 2.
    t.add(
        "O=C-C=O",
        clauses![first_of(vec![
            when(
                |p| p.group(1) == G::CarboxylCarbon && p.group(2) == G::CarboxylCarbon,
                &[M::Oxalate],
            ),
            when(
                |p| {
                    (p.group(1) == G::KetoneCarbon && p.group(2) == G::CarboxylCarbon)
                        || (p.group(2) == G::KetoneCarbon && p.group(1) == G::CarboxylCarbon)
                },
                &[M::AlphaKetoAcid],
            ),
            when(
                |p| p.group(1) == G::KetoneCarbon && p.group(2) == G::KetoneCarbon,
                &[M::AlphaDiketone],
            ),
        ])],
    );

    // 0: carbon, 1: carbon, 2: carbon, 3: nitrogen
    t.add(
        "C-C-C-N",
        clauses![first_of(vec![
            when(|p| p.group(0) == G::CarboxylCarbon && amine(p, 3) && acyclic(p), &[M::GammaAminoAcid]),
            when(|p| p.in_ring_of(3, R::Azetidine) && p.same_ring(0, 3), &[M::Azetidine]),
        ])],
    );

    // 0: nitrogen, 1: carbon, 2: carbon, 3: oxygen
    t.add(
        "N-C-C-O",
        clauses![first_of(vec![
            when(|p| p.group(0) == G::QuaternaryNitrogen && p.env(0).methyl >= 3, &[M::Choline]),
            when(|p| amine(p, 0) && hydroxyl(p, 3) && acyclic(p), &[M::Ethanolamine]),
            when(|p| sugar(p, 1) && amine(p, 0), &[M::AminoSugar]),
        ])],
    );

    t
}

#[cfg(test)]
mod tests {
    use crate::engine::MotifEngine;
    use crate::fingerprint::Fingerprint;
    use crate::graph::GraphContext;
    use crate::motif::Motif;
    use crate::path::Path;
    use crate::testing;

    fn eval(ctx: &GraphContext, atoms: &[usize]) -> Fingerprint {
        let path = Path::canonical(ctx, atoms).unwrap();
        let mut fp = Fingerprint::new();
        MotifEngine::new().evaluate(ctx, &path, &mut fp);
        fp
    }

    #[test]
    fn alpha_keto_acid_either_orientation() {
        let ctx = testing::pyruvic_acid();
        // O=C(CH3)-C(=O)OH: ketone O 2, ketone C 1, acid C 3, acid O 4
        let fwd = eval(&ctx, &[2, 1, 3, 4]);
        let rev = eval(&ctx, &[4, 3, 1, 2]);
        assert_eq!(fwd, rev);
        assert!(fwd.get(Motif::AlphaKetoAcid));
        assert!(!fwd.get(Motif::Oxalate));
        assert!(!fwd.get(Motif::AlphaDiketone));
    }

    #[test]
    fn skipped_diene_in_chain() {
        // C=C-C-C=C-C: the 1,4-diene of polyunsaturated chains
        let ctx = testing::hexa_1_4_diene();
        let fp = eval(&ctx, &[2, 3, 4, 5]);
        assert!(fp.get(Motif::MethyleneInterruptedDiene));
        assert!(fp.get(Motif::InternalAlkeneChain));
    }

    #[test]
    fn conjugated_diene_alternatives() {
        let ctx = testing::butadiene();
        let fp = eval(&ctx, &[0, 1, 2, 3]);
        assert!(fp.get(Motif::Butadiene));
        assert!(!fp.get(Motif::ConjugatedDiene));
    }
}
