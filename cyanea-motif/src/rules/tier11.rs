//! Eleven-atom motifs: sesquiterpenoid chains and long-chain alcohols.

use super::common::*;
use super::{first_of, when, RuleTable};
use crate::graph::FunctionGroup as G;
use crate::motif::Motif as M;

pub(super) fn table() -> RuleTable {
    let mut t = RuleTable::new(11);

    // 0: C1, 1=2, 5=6, 9=10: three prenyl double bonds, methyls on 2, 6 and 10
    t.add(
        "C-C=C-C-C-C=C-C-C-C=C",
        clauses![when(
            |p| open_chain(p) && [2, 6, 10].iter().all(|&i| p.env(i).methyl > 0),
            &[M::FarnesylUnit],
        )
        .then(clauses![first_of(vec![
            when(|p| p.env(0).hydroxyl > 0, &[M::Farnesol]),
            when(
                |p| p.any_branch(0, "O", |a| a.env.phosphorus > 0),
                &[M::FarnesylPhosphate],
            ),
        ])])],
    );

    // 0: methyl end, 1-9: methylenes, 10: oxygen
    t.add(
        "C-C-C-C-C-C-C-C-C-C-O",
        clauses![when(
            |p| acyclic(p) && methyl(p, 0) && (1..10).all(|i| hydrogens(p, i, 2)),
            &[],
        )
        .then(clauses![first_of(vec![
            when(|p| hydroxyl(p, 10), &[M::LongChainFattyAlcohol]),
            when(|p| p.group(10) == G::EsterOxygen, &[M::WaxEsterAlkoxy]),
            when(|p| p.group(10) == G::EtherOxygen, &[M::LongChainAlkylEther]),
        ])])],
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
    fn decanol_tail() {
        let ctx = testing::alkanol(10);
        let atoms: Vec<usize> = (0..11).collect();
        let path = Path::canonical(&ctx, &atoms).unwrap();
        let mut fp = Fingerprint::new();
        MotifEngine::new().evaluate(&ctx, &path, &mut fp);
        assert!(fp.get(Motif::LongChainFattyAlcohol));
        assert!(!fp.get(Motif::WaxEsterAlkoxy));
    }
}
