//! Six-atom motifs: whole six-membered ring walks, para relationships and
//! three-carbon spacers.

use super::common::*;
use super::{always, first_of, when, RuleTable};
use crate::graph::{FunctionGroup as G, RingSetType as RS, RingType as R};
use crate::motif::Motif as M;
use crate::path::PathView;

/// Positions 1..=4 lie on one benzene ring, so 1 and 4 are para.
fn para(p: &PathView<'_>) -> bool {
    p.ring(1, R::Benzene).map_or(false, |r| (2..5).all(|i| r.contains(p.atom_id(i))))
}

/// Ring atoms carrying at least one outside heavy neighbor.
fn substituted(p: &PathView<'_>) -> usize {
    count(p, |p, i| p.env(i).heavy_degree >= 3)
}

fn chromone_benzo_oxygens(p: &PathView<'_>) -> u8 {
    p.fused_ring(0, RS::Chromone, R::Benzene).map_or(0, |(_, ring)| ring.env.oxygen)
}

pub(super) fn table() -> RuleTable {
    let mut t = RuleTable::new(6);

    // Palindromic: a full benzene ring walk from any start atom.
    t.add(
        "C:C:C:C:C:C",
        clauses![when(|p| walked_ring(p, R::Benzene).is_some(), &[M::BenzeneRing]).then(clauses![
            first_of(vec![
                when(|p| substituted(p) >= 4, &[M::PolysubstitutedBenzene]),
                when(|p| substituted(p) == 3, &[M::TrisubstitutedBenzene]),
                when(|p| substituted(p) == 2, &[M::DisubstitutedBenzene]),
                when(|p| substituted(p) == 1, &[M::MonosubstitutedBenzene]),
            ]),
            when(
                |p| walked_ring(p, R::Benzene).map_or(false, |r| r.env.hydroxyl >= 3),
                &[M::PolyhydroxyBenzene],
            ),
            when(
                |p| walked_ring(p, R::Benzene).map_or(false, |r| r.env.methoxy >= 2),
                &[M::PolymethoxyBenzene],
            ),
            when(
                |p| walked_ring(p, R::Benzene).map_or(false, |r| r.env.halogen >= 2),
                &[M::PolyhaloBenzene],
            ),
            when(|p| p.fused_ring(0, RS::Chromone, R::Benzene).is_some(), &[M::ChromoneBenzoRing]).then(clauses![
                when(|p| chromone_benzo_oxygens(p) >= 3, &[M::PolyoxygenatedChromoneBenzoRing]),
                when(
                    |p| {
                        p.fused_ring(0, RS::Chromone, R::Benzene)
                            .map_or(false, |(set, ring)| p.partner_rings(set, ring).any(|r| r.env.oxygen >= 3))
                    },
                    &[M::PolyoxygenatedChromonePyrone],
                ),
            ]),
        ])],
    );

    // Palindromic six-carbon walk.
    t.add(
        "C-C-C-C-C-C",
        clauses![first_of(vec![
            when(|p| walked_ring(p, R::Cyclohexane).is_some(), &[M::CyclohexaneRing]).then(clauses![
                first_of(vec![
                    when(
                        |p| walked_ring(p, R::Cyclohexane).map_or(false, |r| r.env.hydroxyl >= 5),
                        &[M::Inositol],
                    ),
                    when(
                        |p| walked_ring(p, R::Cyclohexane).map_or(false, |r| r.env.hydroxyl >= 3),
                        &[M::Cyclitol],
                    ),
                ]),
                when(
                    |p| walked_ring(p, R::Cyclohexane).map_or(false, |r| r.env.ketone > 0),
                    &[M::Cyclohexanone],
                ),
            ]),
            when(
                |p| acyclic(p) && (1..5).all(|i| hydrogens(p, i, 2)),
                &[M::LongMethyleneRun],
            ),
        ])],
    );

    // 0-4: carbons, 5: oxygen; as a ring walk this covers a whole pyranose.
    t.add(
        "C-C-C-C-C-O",
        clauses![first_of(vec![
            when(|p| walked_ring(p, R::Tetrahydropyran).is_some(), &[]).then(clauses![
                first_of(vec![
                    when(
                        |p| {
                            walked_ring(p, R::Tetrahydropyran)
                                .map_or(false, |r| r.env.carbonyl > 0 && r.env.hydroxyl >= 2)
                        },
                        &[M::UronicAcid],
                    ),
                    when(
                        |p| walked_ring(p, R::Tetrahydropyran)
                            .map_or(false, |r| r.env.nitrogen > 0 && r.env.oxygen >= 2),
                        &[M::HexosamineRing],
                    ),
                    when(
                        |p| walked_ring(p, R::Tetrahydropyran).map_or(false, |r| r.env.methyl > 0 && r.env.oxygen >= 3),
                        &[M::DeoxyHexopyranose],
                    ),
                    when(
                        |p| walked_ring(p, R::Tetrahydropyran).map_or(false, |r| r.env.carbon > 0 && r.env.oxygen >= 4),
                        &[M::Hexopyranose],
                    ),
                    when(
                        |p| walked_ring(p, R::Tetrahydropyran)
                            .map_or(false, |r| r.env.carbon == 0 && r.env.oxygen >= 3),
                        &[M::Pentopyranose],
                    ),
                    always(&[M::TetrahydropyranRing]),
                ]),
                when(
                    |p| walked_ring(p, R::Tetrahydropyran).map_or(false, |r| r.env.ether > 0 && r.env.oxygen >= 3),
                    &[M::Pyranoside],
                ),
            ]),
            when(
                |p| acyclic(p) && hydroxyl(p, 5) && hydrogens(p, 4, 2) && (1..4).all(|i| p.env(i).hydroxyl > 0),
                &[M::AlditolChain],
            ),
        ])],
    );

    // 0-3: carbons, 4: carbonyl carbon, 5: oxygen
    t.add(
        "C-C-C-C-C=O",
        clauses![first_of(vec![
            when(
                |p| acyclic(p) && p.group(4) == G::AldehydeCarbon && (1..4).all(|i| p.env(i).hydroxyl > 0),
                &[M::AldoseOpenChain],
            ),
            when(
                |p| acyclic(p) && p.group(4) == G::KetoneCarbon && (1..4).all(|i| p.env(i).hydroxyl > 0),
                &[M::KetoseOpenChain],
            ),
            when(
                |p| acyclic(p) && p.group(4).is_carbonyl_carbon() && (1..4).all(|i| hydrogens(p, i, 2)),
                &[M::SaturatedAcylChain],
            ),
        ])],
    );

    // Pyridine ring walk ending on the ring nitrogen.
    t.add(
        "C:C:C:C:C:N",
        clauses![when(|p| walked_ring(p, R::Pyridine).is_some(), &[M::PyridineRing]).then(clauses![
            when(|p| p.in_ringset_of(5, RS::Quinoline), &[M::QuinolinePyridoRing]),
            when(|p| p.in_ringset_of(5, RS::Isoquinoline), &[M::IsoquinolinePyridoRing]),
            first_of(vec![
                when(
                    |p| walked_ring(p, R::Pyridine).map_or(false, |r| r.env.hydroxyl > 0 && r.env.methyl > 0),
                    &[M::PyridoxineLike],
                ),
                when(|p| walked_ring(p, R::Pyridine).map_or(false, |r| r.env.hydroxyl > 0), &[M::Hydroxypyridine]),
            ]),
        ])],
    );

    // Palindromic: ring oxygens para to each other.
    t.add(
        "O-C:C:C:C-O",
        clauses![when(para, &[]).then(clauses![first_of(vec![
            when(|p| both_ends(p, hydroxyl), &[M::Hydroquinone]),
            when(
                |p| ends_pair(p, hydroxyl, |p, i| p.group(i) == G::EtherOxygen),
                &[M::ParaAlkoxyPhenol],
            ),
            when(
                |p| both_ends(p, |p, i| p.group(i) == G::EtherOxygen),
                &[M::ParaDialkoxyArene],
            ),
        ])])],
    );

    // 0: exocyclic carbon, 1-4: benzene atoms, 5: oxygen para to the carbon
    t.add(
        "C-C:C:C:C-O",
        clauses![when(para, &[]).then(clauses![first_of(vec![
            when(|p| hydroxyl(p, 5) && carbonyl_carbon(p, 0), &[M::ParaHydroxybenzoyl]),
            when(|p| hydroxyl(p, 5) && p.group(0) == G::AlkeneCarbon, &[M::Coumaroyl]),
            when(|p| hydroxyl(p, 5) && p.in_ring_of(0, R::Pyrone), &[M::FlavonoidParaHydroxyBRing]),
            when(|p| hydroxyl(p, 5) && alkyl(p, 0), &[M::ParaHydroxyphenylAlkyl]),
            when(
                |p| p.group(5) == G::EtherOxygen && p.env(5).methyl > 0 && p.group(0) == G::AlkeneCarbon,
                &[M::ParaMethoxyStyrene],
            ),
        ])])],
    );

    // Palindromic: three conjugated double bonds.
    t.add(
        "C=C-C=C-C=C",
        clauses![when(open_chain, &[M::ConjugatedTriene]).then(clauses![when(
            |p| count(p, |p, i| p.env(i).methyl > 0) >= 1,
            &[M::MethylatedPolyene],
        )])],
    );

    // 0: carbon, 1-4: carbons, 5: nitrogen
    t.add(
        "C-C-C-C-C-N",
        clauses![first_of(vec![
            when(
                |p| acyclic(p) && amine(p, 5) && p.env(0).carbonyl > 0 && p.any_branch(0, "N", |a| a.group.is_amine()),
                &[M::LysineSideChain],
            ),
            when(
                |p| acyclic(p) && amine(p, 5) && p.any_branch(0, "N", |a| a.group.is_amine()),
                &[M::Cadaverine],
            ),
            when(|p| walked_ring(p, R::Piperidine).is_some(), &[M::PiperidineRing]).then(clauses![when(
                |p| walked_ring(p, R::Piperidine).map_or(false, |r| r.env.carbonyl > 0),
                &[M::PipecolicAcid],
            )]),
        ])],
    );

    // Two ethylene glycol units; 0 and 3 are the carbons next to oxygen 2.
    t.add(
        "C-C-O-C-C-O",
        clauses![when(
            |p| acyclic(p) && [0, 1, 3, 4].iter().all(|&i| hydrogens(p, i, 2)),
            &[M::PolyethyleneGlycolUnit],
        )],
    );

    // 0-1: aromatic ring bond, 2: benzylic carbon, 3: carbon, 4: carbonyl carbon, 5: oxygen
    t.add(
        "C:C-C-C-C=O",
        clauses![first_of(vec![
            when(
                |p| p.group(4) == G::CarboxylCarbon && p.any_branch(3, "N", |a| a.group.is_amine()),
                &[M::PhenylalanineScaffold],
            ),
            when(|p| p.group(4) == G::CarboxylCarbon && !p.in_ring(2), &[M::ArylPropanoicAcid]),
            when(|p| p.group(4) == G::EsterCarbon && !p.in_ring(2), &[M::ArylPropanoateEster]),
            when(
                |p| p.group(4) == G::KetoneCarbon && p.any_branch(4, "C", |a| a.aromatic),
                &[M::Dihydrochalcone],
            ),
        ])],
    );

    t
}

#[cfg(test)]
mod tests {
    use crate::engine::MotifEngine;
    use crate::fingerprint::Fingerprint;
    use crate::graph::{GraphContext, RingSetType};
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
    fn chromone_benzo_ring_resolved_through_ringset() {
        let ctx = testing::chromone(&[5, 7]);
        let c5 = testing::chromone_atom(5);
        assert_eq!(ctx.ringset_type_of(ctx.atom(c5), RingSetType::Chromone), Some(0));

        // C4a C5 C6 C7 C8 C8a
        let fp = eval(&ctx, &[4, 5, 6, 7, 8, 9]);
        assert!(fp.get(Motif::BenzeneRing));
        assert!(fp.get(Motif::ChromoneBenzoRing));
        assert!(fp.get(Motif::PolyoxygenatedChromoneBenzoRing));
        assert!(!fp.get(Motif::PolyoxygenatedChromonePyrone));
        // C4a, C5, C7 and C8a carry outside atoms
        assert!(fp.get(Motif::PolysubstitutedBenzene));
        assert!(!fp.get(Motif::TrisubstitutedBenzene));
    }

    #[test]
    fn ring_walk_start_does_not_matter() {
        let ctx = testing::hydroxybenzene(&[0, 2, 4]);
        let a = eval(&ctx, &[0, 1, 2, 3, 4, 5]);
        let b = eval(&ctx, &[3, 2, 1, 0, 5, 4]);
        assert_eq!(a, b);
        assert!(a.get(Motif::PolyhydroxyBenzene));
        assert!(a.get(Motif::TrisubstitutedBenzene));
    }

    #[test]
    fn glucopyranose_ring() {
        let ctx = testing::glucopyranose();
        let fp = eval(&ctx, &[0, 1, 2, 3, 4, 5]);
        assert!(fp.get(Motif::Hexopyranose));
        assert!(!fp.get(Motif::Pentopyranose));
        assert!(!fp.get(Motif::TetrahydropyranRing));
        assert!(!fp.get(Motif::Pyranoside));
    }

    #[test]
    fn hydroquinone_needs_para_positions() {
        let ctx = testing::hydroxybenzene(&[0, 3]);
        // O6 on C0, O7 on C3
        let fp = eval(&ctx, &[6, 0, 1, 2, 3, 7]);
        assert!(fp.get(Motif::Hydroquinone));
        assert!(!fp.get(Motif::ParaAlkoxyPhenol));
    }
}
