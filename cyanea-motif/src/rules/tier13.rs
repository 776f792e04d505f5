//! Thirteen-atom motifs: the longest walks the engine dispatches.

use super::common::*;
use super::{first_of, when, RuleTable};
use crate::motif::Motif as M;

pub(super) fn table() -> RuleTable {
    let mut t = RuleTable::new(13);

    // 0: methyl-bearing end, then six conjugated double bonds.
    t.add(
        "C-C=C-C=C-C=C-C=C-C=C-C=C",
        clauses![when(open_chain, &[M::ConjugatedHexaene]).then(clauses![when(
            |p| count(p, |p, i| p.env(i).methyl > 0) >= 3,
            &[M::ExtendedCarotenoidChain],
        )])],
    );

    // Palindromic thirteen-carbon walk.
    t.add(
        "C-C-C-C-C-C-C-C-C-C-C-C-C",
        clauses![first_of(vec![
            when(
                |p| acyclic(p) && (1..12).all(|i| hydrogens(p, i, 2)),
                &[M::VeryLongMethyleneRun],
            ),
            when(
                |p| acyclic(p) && count(p, |p, i| p.env(i).methyl > 0) >= 3,
                &[M::PolyprenylSkeleton],
            ),
        ])],
    );

    t
}

#[cfg(test)]
mod tests {
    use crate::engine::MotifEngine;
    use crate::fingerprint::Fingerprint;
    use crate::motif::Motif;
    use crate::path::Path;
    use crate::testing;

    #[test]
    fn palmitic_acid_interior_run() {
        let ctx = testing::fatty_acid(16, &[]);
        let atoms: Vec<usize> = (2..15).collect();
        let path = Path::canonical(&ctx, &atoms).unwrap();
        let mut fp = Fingerprint::new();
        MotifEngine::new().evaluate(&ctx, &path, &mut fp);
        assert!(fp.get(Motif::VeryLongMethyleneRun));
        assert!(!fp.get(Motif::PolyprenylSkeleton));
    }

    #[test]
    fn branch_free_unsaturation_is_not_a_run() {
        let ctx = testing::fatty_acid(16, &[9]);
        let atoms: Vec<usize> = (2..15).collect();
        let path = Path::canonical(&ctx, &atoms).unwrap();
        let mut fp = Fingerprint::new();
        MotifEngine::new().evaluate(&ctx, &path, &mut fp);
        assert!(!fp.get(Motif::VeryLongMethyleneRun));
    }
}
