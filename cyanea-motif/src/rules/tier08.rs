//! Eight-atom motifs: fused aromatic walks, stilbenes and lipid backbones.

use super::common::*;
use super::{first_of, when, RuleTable};
use crate::graph::{FunctionGroup as G, RingSetType as RS};
use crate::motif::Motif as M;

pub(super) fn table() -> RuleTable {
    let mut t = RuleTable::new(8);

    // Palindromic eight-carbon walk.
    t.add(
        "C-C-C-C-C-C-C-C",
        clauses![first_of(vec![
            when(|p| (0..8).all(|i| p.in_ringset_of(i, RS::Steroid)), &[M::SteroidCoreWalk]),
            when(|p| (0..8).all(|i| p.in_ringset_of(i, RS::Decalin)), &[M::DecalinWalk]),
            when(
                |p| acyclic(p) && either_end(p, methyl) && (1..7).all(|i| hydrogens(p, i, 2)),
                &[M::LongAlkylTail],
            ),
        ])],
    );

    // 0: C7, 1: C6, 2=3: C5=C4, 4: C3, 5: C2, 6: C1, 7: primary oxygen
    t.add(
        "C-C-C=C-C-C-C-O",
        clauses![when(|p| acyclic(p) && p.env(4).hydroxyl > 0, &[]).then(clauses![first_of(vec![
            when(
                |p| p.any_branch(5, "N", |a| a.group == G::AmideNitrogen),
                &[M::Ceramide],
            ),
            when(
                |p| p.any_branch(5, "N", |a| a.group.is_amine()) && hydroxyl(p, 7),
                &[M::Sphingosine],
            ),
        ])])],
    );

    // 0: acyl oxygen, 1: acyl carbon, 2: ester oxygen, 3-5: glycerol, 6: oxygen, 7: phosphorus
    t.add(
        "O=C-O-C-C-C-O-P",
        clauses![when(
            |p| acyclic(p) && p.group(1) == G::EsterCarbon && p.group(7) == G::PhosphatePhosphorus,
            &[],
        )
        .then(clauses![first_of(vec![
            when(
                |p| p.any_branch(4, "O", |a| a.group == G::EsterOxygen),
                &[M::DiacylGlycerophospholipid],
            ),
            when(
                |p| p.any_branch(4, "O", |a| a.group == G::HydroxylOxygen),
                &[M::Lysophospholipid],
            ),
        ])])],
    );

    // Palindromic: three double bonds each separated by one methylene.
    t.add(
        "C=C-C-C=C-C-C=C",
        clauses![when(
            |p| open_chain(p) && hydrogens(p, 2, 2) && hydrogens(p, 5, 2),
            &[M::MethyleneInterruptedTriene],
        )],
    );

    // Palindromic aromatic walk through a fused system.
    t.add(
        "C:C:C:C:C:C:C:C",
        clauses![first_of(vec![
            when(|p| (0..8).all(|i| p.in_ringset_of(i, RS::Naphthalene)), &[M::NaphthaleneWalk]),
            when(|p| (0..8).all(|i| p.in_ringset_of(i, RS::Anthracene)), &[M::AnthraceneWalk]),
            when(|p| (0..8).all(|i| p.in_ringset_of(i, RS::Phenanthrene)), &[M::PhenanthreneWalk]),
        ])],
    );

    // Palindromic: two aryl rings on an open C=C.
    t.add(
        "C:C:C-C=C-C:C:C",
        clauses![when(|p| !p.bond_in_ring(3) && benzene(p, 2) && benzene(p, 5), &[M::Stilbene]).then(
            clauses![when(
                |p| either_end(p, |p, i| benzene_oxygens(p, i) >= 2),
                &[M::PolyhydroxyStilbene],
            )],
        )],
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
    fn naphthalene_walk_crosses_fusion() {
        let ctx = testing::naphthalene();
        let fp = eval(&ctx, &[0, 1, 2, 3, 4, 6, 7, 8]);
        assert!(fp.get(Motif::NaphthaleneWalk));
        assert!(!fp.get(Motif::AnthraceneWalk));
    }

    #[test]
    fn stilbene_either_direction() {
        let ctx = testing::stilbene();
        let a = eval(&ctx, &[2, 1, 0, 6, 7, 8, 9, 10]);
        let b = eval(&ctx, &[10, 9, 8, 7, 6, 0, 1, 2]);
        assert!(a.get(Motif::Stilbene));
        assert!(!a.get(Motif::PolyhydroxyStilbene));
        assert_eq!(a, b);
    }
}
