//! Reference path and chain enumeration.
//!
//! Upstream pipelines usually hand the engine pre-enumerated paths; these
//! walkers make a [`GraphContext`] fingerprintable on its own.

use crate::chain::MAX_CHAIN_LEN;
use crate::graph::{AtomId, BondId, GraphContext};
use crate::path::Path;

/// An unbranched carbon chain starting at its oxygenated terminal carbon.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chain {
    pub atoms: Vec<AtomId>,
    pub bonds: Vec<BondId>,
}

/// Every simple heavy-atom path of `min_len..=max_len` atoms, once each, in
/// canonical orientation.
pub fn enumerate_paths(ctx: &GraphContext, min_len: usize, max_len: usize) -> Vec<Path> {
    let mut out = Vec::new();
    if min_len == 0 || min_len > max_len {
        return out;
    }
    let mut atoms = Vec::with_capacity(max_len);
    let mut bonds = Vec::with_capacity(max_len);
    for start in 0..ctx.atom_count() {
        if ctx.atom(start).is_hydrogen() {
            continue;
        }
        atoms.push(start);
        walk(ctx, min_len, max_len, &mut atoms, &mut bonds, &mut out);
        atoms.pop();
    }
    out
}

fn walk(
    ctx: &GraphContext,
    min_len: usize,
    max_len: usize,
    atoms: &mut Vec<AtomId>,
    bonds: &mut Vec<BondId>,
    out: &mut Vec<Path>,
) {
    let (first, last) = (atoms[0], atoms[atoms.len() - 1]);
    // each undirected walk is seen from both ends; keep one
    if atoms.len() >= min_len && first < last {
        out.push(Path::oriented(ctx, atoms.clone(), bonds.clone()));
    }
    if atoms.len() == max_len {
        return;
    }
    for (next, bond) in ctx.neighbors(last) {
        if ctx.atom(next).is_hydrogen() || atoms.contains(&next) {
            continue;
        }
        atoms.push(next);
        bonds.push(bond);
        walk(ctx, min_len, max_len, atoms, bonds, out);
        atoms.pop();
        bonds.pop();
    }
}

/// Linear acyclic carbon chains that start at a terminal C=O carbon.
///
/// The walk follows the single onward carbon from each acyclic carbonyl
/// carbon with exactly one carbon neighbor and gives up at a branch point or
/// a ring; the chain classifier applies the finer checks.
pub fn detect_acyl_chains(ctx: &GraphContext) -> Vec<Chain> {
    let mut out = Vec::new();
    for start in ctx.atoms() {
        if !start.is("C") || start.in_ring || start.env.oxygen_double == 0 || carbon_neighbors(ctx, start.id) != 1 {
            continue;
        }
        let mut chain = Chain { atoms: vec![start.id], bonds: Vec::new() };
        let mut complete = false;
        while chain.atoms.len() <= MAX_CHAIN_LEN {
            let here = chain.atoms[chain.atoms.len() - 1];
            let onward: Vec<(AtomId, BondId)> = ctx
                .neighbors(here)
                .filter(|&(n, _)| ctx.atom(n).is("C") && !chain.atoms.contains(&n))
                .collect();
            match onward.as_slice() {
                [] => {
                    complete = true;
                    break;
                }
                [(next, bond)] if !ctx.atom(*next).in_ring => {
                    chain.atoms.push(*next);
                    chain.bonds.push(*bond);
                }
                _ => break,
            }
        }
        if complete && chain.atoms.len() >= 2 {
            out.push(chain);
        }
    }
    out
}

fn carbon_neighbors(ctx: &GraphContext, atom: AtomId) -> usize {
    ctx.neighbors(atom).filter(|&(n, _)| ctx.atom(n).is("C")).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing;

    #[test]
    fn ethanol_paths() {
        let ctx = testing::ethanol();
        let paths = enumerate_paths(&ctx, 2, 13);
        let mut sigs: Vec<_> = paths.iter().map(|p| p.signature().to_string()).collect();
        sigs.sort();
        assert_eq!(sigs, vec!["C-C", "C-C-O", "C-O"]);
    }

    #[test]
    fn ring_walks_counted_once_per_direction_pair() {
        let ctx = testing::hydroxybenzene(&[]);
        // six start atoms, each with two 6-atom walks, each walk seen twice
        let six = enumerate_paths(&ctx, 6, 6);
        assert_eq!(six.len(), 6);
        assert!(six.iter().all(|p| p.signature() == "C:C:C:C:C:C"));
    }

    #[test]
    fn length_window_respected() {
        let ctx = testing::fatty_acid(18, &[9, 12]);
        let paths = enumerate_paths(&ctx, 3, 4);
        assert!(paths.iter().all(|p| (3..=4).contains(&p.len())));
        assert!(enumerate_paths(&ctx, 5, 4).is_empty());
    }

    #[test]
    fn fatty_acid_chain_detected() {
        let ctx = testing::fatty_acid(18, &[9, 12]);
        let chains = detect_acyl_chains(&ctx);
        assert_eq!(chains.len(), 1);
        assert_eq!(chains[0].atoms, (0..18).collect::<Vec<_>>());
        assert_eq!(chains[0].bonds.len(), 17);
    }

    #[test]
    fn ketone_is_not_a_chain_start() {
        let ctx = testing::pyruvic_acid();
        // only the acid carbon qualifies, and the chain walks into the ketone carbon
        let chains = detect_acyl_chains(&ctx);
        assert!(chains.iter().all(|c| c.atoms[0] == 3));
    }
}
