//! Twelve-atom motifs: retinoid chromophores and saturated acyl tails.

use super::common::*;
use super::{first_of, when, RuleTable};
use crate::graph::{FunctionGroup as G, RingType as R};
use crate::motif::Motif as M;
use crate::path::PathView;

/// Ring C5=C6 start with the C9 and C13 methyls of the retinoid side chain.
fn retinoid(p: &PathView<'_>) -> bool {
    p.in_ring_of(0, R::Cyclohexene) && !p.in_ring(2) && p.env(4).methyl > 0 && p.env(8).methyl > 0
}

pub(super) fn table() -> RuleTable {
    let mut t = RuleTable::new(12);

    // 0=1: ring C5=C6, 2..=9: side chain, 10: C15, 11: oxygen
    t.add(
        "C=C-C=C-C=C-C=C-C=C-C=O",
        clauses![when(retinoid, &[M::RetinoidChromophore]).then(clauses![first_of(vec![
            when(|p| p.group(10) == G::AldehydeCarbon, &[M::Retinal]),
            when(|p| p.group(10) == G::CarboxylCarbon, &[M::RetinoicAcid]),
        ])])],
    );

    t.add(
        "C=C-C=C-C=C-C=C-C=C-C-O",
        clauses![when(retinoid, &[M::RetinoidChromophore]).then(clauses![first_of(vec![
            when(|p| hydroxyl(p, 11), &[M::Retinol]),
            when(|p| p.group(11) == G::EsterOxygen, &[M::RetinylEster]),
        ])])],
    );

    // 0: methyl end, 1-9: methylenes, 10: carbonyl carbon, 11: oxygen
    t.add(
        "C-C-C-C-C-C-C-C-C-C-C=O",
        clauses![when(
            |p| acyclic(p) && methyl(p, 0) && (1..10).all(|i| hydrogens(p, i, 2)),
            &[],
        )
        .then(clauses![first_of(vec![
            when(|p| p.group(10) == G::AldehydeCarbon, &[M::LongChainAldehyde]),
            when(|p| carbonyl_carbon(p, 10), &[M::LongChainAcyl]),
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
    fn undecanoic_acid_tail() {
        // carboxyl carbon 0, methyl end 10, =O 11
        let ctx = testing::fatty_acid(11, &[]);
        let mut atoms: Vec<usize> = (0..11).rev().collect();
        atoms.push(11);
        let path = Path::canonical(&ctx, &atoms).unwrap();
        let mut fp = Fingerprint::new();
        MotifEngine::new().evaluate(&ctx, &path, &mut fp);
        assert!(fp.get(Motif::LongChainAcyl));
        assert!(!fp.get(Motif::LongChainAldehyde));
    }
}
