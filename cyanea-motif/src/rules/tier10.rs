//! Ten-atom motifs: bicyclic perimeters, pentaenes and the methyl ends of
//! omega-6 and omega-9 acyl chains.

use super::common::*;
use super::{first_of, when, RuleTable};
use crate::graph::RingSetType as RS;
use crate::motif::Motif as M;

pub(super) fn table() -> RuleTable {
    let mut t = RuleTable::new(10);

    // Palindromic: the full perimeter of a carbocyclic 6-6 bicycle.
    t.add(
        "C:C:C:C:C:C:C:C:C:C",
        clauses![first_of(vec![
            when(|p| (0..10).all(|i| p.in_ringset_of(i, RS::Naphthalene)), &[M::NaphthalenePerimeter]),
            when(|p| (0..10).all(|i| p.in_ringset_of(i, RS::Anthracene)), &[M::AnthraceneWalk]),
            when(|p| (0..10).all(|i| p.in_ringset_of(i, RS::Phenanthrene)), &[M::PhenanthreneWalk]),
        ])],
    );

    // Perimeter of a benzo-fused pyridine ending on the ring nitrogen.
    t.add(
        "C:C:C:C:C:C:C:C:C:N",
        clauses![first_of(vec![
            when(|p| (0..10).all(|i| p.in_ringset_of(i, RS::Quinoline)), &[M::QuinolinePerimeter]),
            when(|p| (0..10).all(|i| p.in_ringset_of(i, RS::Isoquinoline)), &[M::IsoquinolinePerimeter]),
        ])],
    );

    // Palindromic: five conjugated double bonds.
    t.add(
        "C=C-C=C-C=C-C=C-C=C",
        clauses![when(open_chain, &[M::ConjugatedPentaene])],
    );

    // 0: methyl end, 1-4: methylenes, 5=6: omega-6 double bond, 7: methylene, 8=9
    t.add(
        "C-C-C-C-C-C=C-C-C=C",
        clauses![when(
            |p| open_chain(p) && methyl(p, 0) && (1..5).all(|i| hydrogens(p, i, 2)) && hydrogens(p, 7, 2),
            &[M::OmegaSixTerminus],
        )],
    );

    // 0: methyl end, 1-7: methylenes, 8=9: omega-9 double bond
    t.add(
        "C-C-C-C-C-C-C-C-C=C",
        clauses![when(
            |p| open_chain(p) && methyl(p, 0) && (1..8).all(|i| hydrogens(p, i, 2)),
            &[M::OmegaNineTerminus],
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
    fn naphthalene_perimeter() {
        let ctx = testing::naphthalene();
        let fp = eval(&ctx, &[0, 1, 2, 3, 4, 6, 7, 8, 9, 5]);
        assert!(fp.get(Motif::NaphthalenePerimeter));
    }

    #[test]
    fn linoleic_acid_is_omega_six() {
        // carbon 0 is the carboxyl carbon, 17 the methyl end
        let ctx = testing::fatty_acid(18, &[9, 12]);
        let tail: Vec<usize> = (8..18).rev().collect();
        let fp = eval(&ctx, &tail);
        assert!(fp.get(Motif::OmegaSixTerminus));
        assert!(!fp.get(Motif::OmegaNineTerminus));
    }
}
