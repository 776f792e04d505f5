//! Three-atom motifs: a center atom seen together with both of its path neighbors.

use super::common::*;
use super::{first_of, when, RuleTable};
use crate::graph::{FunctionGroup as G, RingType as R};
use crate::motif::Motif as M;

pub(super) fn table() -> RuleTable {
    let mut t = RuleTable::new(3);

    // 0: alpha carbon, 1: carbonyl carbon, 2: carbonyl oxygen
    t.add(
        "C-C=O",
        clauses![first_of(vec![
            when(|p| p.group(1) == G::KetoneCarbon, &[]).then(clauses![first_of(vec![
                when(|p| p.env(0).hydroxyl > 0, &[M::AlphaHydroxyKetone]),
                when(|p| halogenated(p, 0), &[M::AlphaHaloKetone]),
                when(|p| p.any_branch(0, "N", |a| a.group.is_amine()), &[M::AlphaAminoKetone]),
                when(|p| methyl(p, 0) && !p.in_ring(1), &[M::AcetylGroup]),
            ])]),
            when(|p| p.group(1) == G::AldehydeCarbon, &[]).then(clauses![
                when(|p| p.env(0).hydroxyl > 0, &[M::AlphaHydroxyAldehyde]),
            ]),
            when(|p| p.group(1) == G::CarboxylCarbon, &[]).then(clauses![first_of(vec![
                when(|p| p.env(0).hydroxyl > 0, &[M::AlphaHydroxyAcid]),
                when(|p| p.aromatic(0), &[M::BenzoicAcid]),
                when(|p| p.group(0) == G::AlkeneCarbon, &[M::UnsaturatedAcid]),
                when(|p| methyl(p, 0), &[M::AceticAcidMoiety]),
            ])]),
            when(|p| p.group(1) == G::EsterCarbon, &[]).then(clauses![first_of(vec![
                when(|p| methyl(p, 0), &[M::Acetate]),
                when(|p| p.aromatic(0), &[M::Benzoate]),
                when(|p| p.any_branch(0, "N", |a| a.group.is_amine()), &[M::AminoAcidEster]),
            ])]),
            when(|p| p.group(1) == G::AmideCarbon, &[]).then(clauses![first_of(vec![
                when(|p| methyl(p, 0), &[M::Acetamide]),
                when(|p| p.aromatic(0), &[M::Benzamide]),
            ])]),
        ])],
    );

    t.add(
        "C-C-O",
        clauses![
            when(|p| hydroxyl(p, 2), &[]).then(clauses![first_of(vec![
                when(|p| p.in_ring(2), &[]),
                when(|p| p.env(0).hydroxyl > 0 && !sugar(p, 0), &[M::VicinalDiol]),
                when(|p| p.aromatic(0) && !p.in_ring(1), &[M::BenzylAlcohol]),
                when(|p| halogenated(p, 0), &[M::Halohydrin]),
                when(|p| sugar(p, 0) && !p.in_ring(1), &[M::SugarHydroxymethyl]),
            ])]),
            when(|p| p.in_ring_of(2, R::Oxirane) && p.same_ring(0, 2), &[M::Epoxide]),
            when(
                |p| p.group(2) == G::EtherOxygen && p.env(0).ether_oxygen > 0 && acyclic(p),
                &[M::EthyleneGlycolUnit],
            ),
        ],
    );

    // Palindromic: the ether oxygen sits in the middle.
    t.add(
        "C-O-C",
        clauses![first_of(vec![
            when(|p| ends_pair(p, anomeric, sugar) && !p.in_ring(1), &[M::InterglycosidicLinkage]),
            when(|p| p.in_ring_of(1, R::Tetrahydropyran), &[M::PyranoseRingOxygen]),
            when(|p| p.in_ring_of(1, R::Tetrahydrofuran), &[M::FuranoseRingOxygen]),
            when(|p| p.in_ring_of(1, R::Oxirane), &[]),
            when(|p| p.in_ring(1) && p.group(1) == G::EtherOxygen, &[M::CyclicEther]),
            when(|p| p.group(1) == G::EsterOxygen, &[M::EsterLinkage]),
            when(|p| both_ends(p, aromatic), &[M::DiarylEther]),
            when(|p| ends_pair(p, aromatic, methyl), &[M::Anisole]),
            when(|p| either_end(p, aromatic), &[M::AlkylArylEther]),
            when(|p| either_end(p, |p, i| p.group(i) == G::AlkeneCarbon), &[M::VinylEther]),
            when(|p| both_ends(p, alkyl), &[M::DialkylEther]),
        ])],
    );

    // 0: single-bonded oxygen, 1: acyl carbon, 2: carbonyl oxygen
    t.add(
        "O-C=O",
        clauses![
            first_of(vec![
                when(|p| hydroxyl(p, 0) && p.env(1).nitrogen_single > 0, &[M::CarbamicAcid]),
                when(|p| p.group(0) == G::EsterOxygen && p.in_ring(0), &[]).then(clauses![first_of(vec![
                    when(|p| smallest_ring(p, 0) == Some(5), &[M::GammaLactone]),
                    when(|p| smallest_ring(p, 0) == Some(6), &[M::DeltaLactone]),
                    when(|p| smallest_ring(p, 0).map_or(false, |n| n >= 12), &[M::Macrolactone]),
                ])]),
                when(
                    |p| p.group(0) == G::EsterOxygen && p.any_branch(0, "C", |a| a.aromatic),
                    &[M::ArylEster],
                ),
                when(
                    |p| p.group(0) == G::EsterOxygen && p.any_branch(0, "C", |a| a.group == G::AlkeneCarbon),
                    &[M::EnolEster],
                ),
                when(
                    |p| {
                        p.group(0) == G::EsterOxygen
                            && p.any_branch(0, "C", |a| a.in_ring && a.env.oxygen_single >= 2)
                    },
                    &[M::GlycosylEster],
                ),
            ]),
            when(|p| p.charge(0) < 0 && p.env(1).carbons() > 0, &[M::CarboxylateAnion]),
        ],
    );

    // 0: nitrogen, 1: acyl carbon, 2: carbonyl oxygen
    t.add(
        "N-C=O",
        clauses![
            first_of(vec![
                when(|p| p.aromatic(0), &[M::HeteroaromaticLactam]),
                when(|p| hydrogens(p, 0, 2), &[M::PrimaryAmide]),
                when(|p| hydrogens(p, 0, 1), &[M::SecondaryAmide]),
                when(|p| p.env(0).heavy_degree == 3, &[M::TertiaryAmide]),
            ]),
            when(|p| p.env(0).hydroxyl > 0, &[M::HydroxamicAcid]),
            when(|p| p.env(0).carbonyl >= 2, &[M::Imide]),
            when(|p| p.in_ring(0) && smallest_ring(p, 0) == Some(4), &[M::BetaLactam]),
        ],
    );

    // Palindromic: the nitrogen sits in the middle.
    t.add(
        "C-N-C",
        clauses![
            first_of(vec![
                when(|p| p.in_ring_of(1, R::Piperidine), &[M::Piperidine]),
                when(|p| p.in_ring_of(1, R::Pyrrolidine), &[M::Pyrrolidine]),
                when(|p| p.in_ring_of(1, R::Morpholine), &[M::Morpholine]),
                when(|p| p.in_ring_of(1, R::Piperazine), &[M::Piperazine]),
                when(|p| p.in_ring_of(1, R::Azepane), &[M::Azepane]),
            ]),
            first_of(vec![
                when(|p| both_ends(p, aromatic) && amine(p, 1), &[M::Diarylamine]),
                when(|p| ends_pair(p, aromatic, methyl) && amine(p, 1), &[M::NMethylAniline]),
                when(|p| both_ends(p, carbonyl_carbon) && !p.in_ring(1), &[M::AcyclicImide]),
            ]),
        ],
    );

    // 0: saturated carbon, 1-2: the double bond
    t.add(
        "C-C=C",
        clauses![
            first_of(vec![
                when(|p| p.env(2).methyl == 2 && !p.in_ring(2) && !p.in_ring(0), &[M::Prenyl]),
                when(|p| p.env(0).hydroxyl > 0 && !p.bond_in_ring(1), &[M::AllylicAlcohol]),
                when(|p| p.env(0).ether_oxygen > 0 && !p.bond_in_ring(1), &[M::AllylicEther]),
                when(|p| p.aromatic(0) && p.env(2).carbonyl > 0, &[M::Cinnamoyl]),
                when(|p| carbonyl_carbon(p, 0) && hydrogens(p, 2, 2), &[M::Acryloyl]),
                when(|p| methyl(p, 0) && p.bond_in_ring(1), &[M::MethylCycloalkene]),
            ]),
            when(|p| p.aromatic(0) && !p.in_ring(1) && !p.in_ring(2), &[M::Styryl]),
        ],
    );

    // 0-1: the triple bond, 2: propargylic carbon
    t.add(
        "C#C-C",
        clauses![first_of(vec![
            when(|p| p.env(2).hydroxyl > 0, &[M::PropargylAlcohol]),
            when(|p| hydrogens(p, 0, 1), &[M::Propargyl]),
        ])],
    );

    t.add(
        "C-C#N",
        clauses![first_of(vec![
            when(|p| p.env(0).hydroxyl > 0, &[M::Cyanohydrin]),
            when(|p| p.env(0).nitrogen_single > 0, &[M::Aminonitrile]),
        ])],
    );

    // 0: exocyclic carbon, 1-2: aromatic ring bond
    t.add(
        "C-C:C",
        clauses![
            when(|p| !p.in_ring(0) && p.group(0) == G::AlkaneCarbon, &[]).then(clauses![first_of(vec![
                when(|p| p.any_branch(0, "N", |a| a.group.is_amine()), &[M::Benzylamine]),
                when(|p| halogenated(p, 0), &[M::BenzylHalide]),
                when(|p| p.any_branch(0, "C", |a| a.group == G::AlkeneCarbon), &[M::AllylArene]),
            ])]),
            when(
                |p| p.env(2).heavy_degree == 3 && p.atom(2).rings.len() == 1 && !p.in_ring(0),
                &[M::OrthoDisubstitutedArene],
            ),
        ],
    );

    // Palindromic: aromatic nitrogen in the middle.
    t.add(
        "C:N:C",
        clauses![first_of(vec![
            when(|p| p.charge(1) > 0, &[M::Pyridinium]),
            when(|p| hydrogens(p, 1, 1), &[M::AromaticNH]),
        ])],
    );

    // 0: ring carbon, 1: ring carbon bearing the oxygen, 2: exocyclic oxygen
    t.add(
        "C:C-O",
        clauses![first_of(vec![
            when(|p| p.in_ring_of(2, R::Dioxolane), &[M::Methylenedioxy]),
            when(|p| p.env(0).hydroxyl > 0 && hydroxyl(p, 2), &[M::Catechol]),
            when(
                |p| hydroxyl(p, 2) && p.any_branch(0, "O", |a| a.env.methyl > 0),
                &[M::Guaiacol],
            ),
            when(
                |p| hydroxyl(p, 2) && p.any_branch(0, "C", |a| a.env.oxygen_double > 0),
                &[M::OrthoHydroxyArylCarbonyl],
            ),
            when(|p| p.env(0).ether_oxygen > 0 && p.group(2) == G::EtherOxygen, &[M::OrthoDialkoxyArene]),
        ])],
    );

    t.add(
        "C:C-N",
        clauses![first_of(vec![
            when(|p| p.env(0).hydroxyl > 0 && amine(p, 2), &[M::OrthoAminophenol]),
            when(|p| p.env(0).carbonyl > 0 && amine(p, 2), &[M::OrthoAminoArylCarbonyl]),
            when(|p| p.env(0).nitrogens() > 0 && amine(p, 2), &[M::OrthoPhenylenediamine]),
        ])],
    );

    t.add(
        "C:C-Cl",
        clauses![first_of(vec![
            when(|p| p.env(0).chlorine > 0, &[M::OrthoDichloroarene]),
            when(|p| p.env(0).hydroxyl > 0, &[M::OrthoChlorophenol]),
        ])],
    );

    // Palindromic: sulfur in the middle.
    t.add(
        "C-S-C",
        clauses![first_of(vec![
            when(|p| p.in_ring_of(1, R::Thiolane), &[M::Thiolane]),
            when(|p| both_ends(p, aromatic), &[M::DiarylSulfide]),
            when(|p| p.group(1) == G::SulfideSulfur && both_ends(p, |p, i| !p.aromatic(i)), &[M::DialkylSulfide]),
        ])],
    );

    // Palindromic: sulfur in the middle.
    t.add(
        "O=S=O",
        clauses![first_of(vec![
            when(|p| p.env(1).carbons() >= 2, &[M::Sulfone]),
            when(|p| p.env(1).carbons() == 0 && p.env(1).oxygen_single >= 2, &[M::SulfateGroup]),
            when(|p| p.env(1).carbons() == 1 && p.env(1).oxygen_single >= 1, &[M::SulfonateGroup]),
        ])],
    );

    t.add(
        "C-O-P",
        clauses![first_of(vec![
            when(|p| sugar(p, 0), &[M::GlycosylPhosphate]),
            when(|p| p.aromatic(0), &[M::ArylPhosphate]),
            when(|p| alkyl(p, 0), &[M::AlkylPhosphate]),
        ])],
    );

    t.add(
        "C-O-Si",
        clauses![first_of(vec![
            when(|p| carbonyl_carbon(p, 0), &[M::SilylEster]),
            when(|p| p.env(2).methyl >= 3, &[M::TrimethylsilylEther]),
            when(|p| p.aromatic(0), &[M::ArylSilylEther]),
        ])],
    );

    // 0: carbon, 1: carbon, 2: nitrogen
    t.add(
        "C-C-N",
        clauses![first_of(vec![
            when(|p| p.in_ring_of(2, R::Aziridine) && p.same_ring(0, 2), &[M::Aziridine]),
            when(|p| p.group(0) == G::CarboxylCarbon && amine(p, 2), &[M::AlphaAminoAcid]),
            when(|p| p.group(0) == G::AmideCarbon && p.group(2) == G::AmideNitrogen, &[M::PeptideBackbone]),
            when(|p| p.env(0).hydroxyl > 0 && amine(p, 2), &[M::BetaAminoAlcohol]),
            when(|p| p.any_branch(0, "N", |a| a.group.is_amine()) && amine(p, 2), &[M::Ethylenediamine]),
        ])],
    );

    // 0: N-substituent carbon, 1: imine nitrogen, 2: imine carbon
    t.add(
        "C-N=C",
        clauses![first_of(vec![
            when(|p| p.aromatic(0) || p.any_branch(2, "C", |a| a.aromatic), &[M::SchiffBase]),
            when(|p| !p.bond_in_ring(1), &[M::NAlkylImine]),
        ])],
    );

    t.add("F-C-F", clauses![when(|p| p.env(1).fluorine == 2, &[M::Difluoromethylene])]);
    t.add("Cl-C-Cl", clauses![when(|p| p.env(1).chlorine == 2, &[M::Dichloromethyl])]);

    // Palindromic: the acetal carbon sits in the middle.
    t.add(
        "O-C-O",
        clauses![first_of(vec![
            when(|p| p.env(1).oxygen_single >= 3, &[M::Orthoester]),
            when(
                |p| sugar(p, 1) && p.in_ring(0) != p.in_ring(2),
                &[M::AnomericCenter],
            ),
            when(|p| p.in_ring_of(1, R::Dioxolane), &[M::CyclicAcetal]),
            when(|p| p.in_ring_of(1, R::Dioxane), &[M::CyclicAcetal]),
            when(|p| hydrogens(p, 1, 2), &[M::Formal]),
            when(|p| !p.in_ring(1) && both_ends(p, |p, i| p.group(i) == G::EtherOxygen), &[M::Acetal]),
        ])],
    );

    // 0: alpha carbon, 1: beta carbon, 2: sulfur
    t.add(
        "C-C-S",
        clauses![when(
            |p| {
                p.env(0).carbonyl > 0
                    && p.any_branch(0, "N", |a| a.group.is_amine())
                    && p.group(2) == G::ThiolSulfur
            },
            &[M::Cysteine],
        )],
    );

    // 0: exocyclic carbon, 1: aromatic nitrogen, 2: ring carbon
    t.add(
        "C-N:C",
        clauses![first_of(vec![
            when(|p| anomeric(p, 0) || (sugar(p, 0) && p.env(0).oxygen_single >= 1), &[M::Nucleoside]),
            when(|p| methyl(p, 0), &[M::NMethylAzole]),
        ])],
    );

    // 0: exocyclic carbon, 1: ring carbon, 2: ring nitrogen
    t.add(
        "C-C:N",
        clauses![first_of(vec![
            when(|p| carbonyl_carbon(p, 0), &[M::AzaArylCarbonyl]),
            when(|p| methyl(p, 0), &[M::MethylAzaArene]),
        ])],
    );

    // 0-1: the double bond, 2: oxygen
    t.add(
        "C=C-O",
        clauses![first_of(vec![
            when(|p| p.charge(2) < 0, &[M::Enolate]),
            when(|p| p.in_ring(2) && p.bond_in_ring(1), &[M::CyclicEnolEther]),
            when(|p| p.group(2) == G::EsterOxygen, &[M::VinylEsterOxygen]),
        ])],
    );

    t.add(
        "C-C-Cl",
        clauses![when(|p| p.env(0).chlorine > 0, &[M::VicinalDichloride])],
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
    fn acetate_from_either_direction() {
        let ctx = testing::methyl_acetate();
        let fwd = eval(&ctx, &[0, 1, 2]);
        let rev = eval(&ctx, &[2, 1, 0]);
        assert_eq!(fwd, rev);
        assert!(fwd.get(Motif::Acetate));
        assert!(!fwd.get(Motif::Acetamide));
    }

    #[test]
    fn ester_linkage_through_oxygen() {
        let ctx = testing::methyl_acetate();
        let fp = eval(&ctx, &[1, 3, 4]);
        assert!(fp.get(Motif::EsterLinkage));
        assert!(!fp.get(Motif::DialkylEther));
    }

    #[test]
    fn amino_acid_backbone() {
        let ctx = testing::glycine();
        let fp = eval(&ctx, &[2, 1, 0]);
        assert!(fp.get(Motif::AlphaAminoAcid));
        assert!(!fp.get(Motif::BetaAminoAlcohol));
    }

    #[test]
    fn catechol_ortho_hydroxyls() {
        let ctx = testing::catechol();
        // ring atoms 0 and 1 carry the hydroxyls 6 and 7
        let fp = eval(&ctx, &[0, 1, 7]);
        assert!(fp.get(Motif::Catechol));
        assert!(!fp.get(Motif::Guaiacol));
    }

    #[test]
    fn pyranose_ring_oxygen_is_palindrome_safe() {
        let ctx = testing::tetrahydropyranol();
        let fwd = eval(&ctx, &[4, 5, 0]);
        let rev = eval(&ctx, &[0, 5, 4]);
        assert_eq!(fwd, rev);
        assert!(fwd.get(Motif::PyranoseRingOxygen));
    }
}
