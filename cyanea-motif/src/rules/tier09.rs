//! Nine-atom motifs: acylglycerols, bicyclic heteroaromatic walks and
//! polyene segments.

use super::common::*;
use super::{first_of, when, RuleTable};
use crate::graph::{FunctionGroup as G, RingSetType as RS, RingType as R};
use crate::motif::Motif as M;

pub(super) fn table() -> RuleTable {
    let mut t = RuleTable::new(9);

    // Palindromic: 0/8 acyl oxygens, 1/7 acyl carbons, 2/6 ester oxygens, 3-5 glycerol.
    t.add(
        "O=C-O-C-C-C-O-C=O",
        clauses![when(
            |p| acyclic(p) && both_ends(p, |p, i| p.env(i).heavy_degree == 1) && p.group(1) == G::EsterCarbon
                && p.group(7) == G::EsterCarbon,
            &[M::Diacylglycerol],
        )
        .then(clauses![first_of(vec![
            when(|p| p.any_branch(4, "O", |a| a.group == G::EsterOxygen), &[M::Triacylglycerol]),
            when(|p| p.any_branch(4, "O", |a| a.group == G::HydroxylOxygen), &[M::OneThreeDiacylglycerol]),
        ])])],
    );

    // Perimeter of an indole-type bicycle ending on the five-ring nitrogen.
    t.add(
        "C:C:C:C:C:C:C:C:N",
        clauses![first_of(vec![
            when(|p| (0..9).all(|i| p.in_ringset_of(i, RS::Indole)), &[M::IndoleWalk]).then(clauses![when(
                |p| p.fused_ring(8, RS::Indole, R::Pyrrole).map_or(false, |(_, r)| r.env.carbon > 0),
                &[M::AlkylIndole],
            )]),
            when(|p| (0..9).all(|i| p.in_ringset_of(i, RS::Benzimidazole)), &[M::BenzimidazoleWalk]),
        ])],
    );

    // 0: methyl-bearing end, then four conjugated double bonds.
    t.add(
        "C-C=C-C=C-C=C-C=C",
        clauses![when(open_chain, &[M::ConjugatedTetraene]).then(clauses![when(
            |p| count(p, |p, i| p.env(i).methyl > 0) >= 2,
            &[M::CarotenoidPolyene],
        )])],
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
    fn triacylglycerol_backbone() {
        let ctx = testing::triacetin();
        // sn-1 and sn-3 acetates through the glycerol carbons
        let fp = eval(&ctx, &[2, 1, 3, 4, 5, 6, 7, 8, 9]);
        assert!(fp.get(Motif::Diacylglycerol));
        assert!(fp.get(Motif::Triacylglycerol));
        assert!(!fp.get(Motif::OneThreeDiacylglycerol));
    }

    #[test]
    fn skatole_perimeter() {
        let ctx = testing::skatole();
        // C7a C7 C6 C5 C4 C3a C3 C2 N1
        let fp = eval(&ctx, &[8, 7, 6, 5, 4, 3, 2, 1, 0]);
        assert!(fp.get(Motif::IndoleWalk));
        assert!(fp.get(Motif::AlkylIndole));
        assert!(!fp.get(Motif::BenzimidazoleWalk));
    }
}
