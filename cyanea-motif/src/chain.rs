//! Chain descriptors for unbranched acyl chains.
//!
//! A chain is an ordered, acyclic, all-carbon path whose first atom is the
//! terminal (oxygenated) carbon. The classifier reads the terminal oxygen
//! pattern, counts C=C bonds along the chain and looks for at most one
//! hydroxyl-type branch oxygen (an oxo inside the chain rejects it), then maps `(class, carbons, double bonds)` to
//! one catalogue bit such as "Fatty acid 18:2".

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use tracing::debug;

use crate::graph::{AtomId, BondId, BondOrder, GraphContext};

/// Shortest chain the classifier accepts.
pub const MIN_CHAIN_LEN: usize = 2;
/// Longest chain the classifier accepts.
pub const MAX_CHAIN_LEN: usize = 46;

/// Terminal group and hydroxylation of a chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChainClass {
    /// Terminal carboxyl (C(=O)O), no branch oxygen.
    FattyAcid,
    /// Terminal carboxyl with one branch oxygen.
    HydroxyFattyAcid,
    /// Terminal oxo (C=O) only, no branch oxygen.
    FattyAcyl,
    /// Terminal oxo with one branch oxygen.
    HydroxyFattyAcyl,
}

impl ChainClass {
    pub const ALL: [ChainClass; 4] = [
        ChainClass::FattyAcid,
        ChainClass::HydroxyFattyAcid,
        ChainClass::FattyAcyl,
        ChainClass::HydroxyFattyAcyl,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ChainClass::FattyAcid => "Fatty acid",
            ChainClass::HydroxyFattyAcid => "Hydroxy fatty acid",
            ChainClass::FattyAcyl => "Fatty acyl",
            ChainClass::HydroxyFattyAcyl => "Hydroxy fatty acyl",
        }
    }

    /// Select the table from the terminal pattern and branch oxygen.
    fn select(carboxylate: bool, hydroxylated: bool) -> ChainClass {
        match (carboxylate, hydroxylated) {
            (true, false) => ChainClass::FattyAcid,
            (true, true) => ChainClass::HydroxyFattyAcid,
            (false, false) => ChainClass::FattyAcyl,
            (false, true) => ChainClass::HydroxyFattyAcyl,
        }
    }

    /// Carbon range and unsaturation ceiling covered by this class's table.
    fn coverage(self) -> (u8, u8, u8) {
        match self {
            ChainClass::FattyAcid | ChainClass::FattyAcyl => (2, 46, 6),
            ChainClass::HydroxyFattyAcid | ChainClass::HydroxyFattyAcyl => (3, 46, 4),
        }
    }
}

/// One chain-descriptor bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChainDescriptor {
    pub class: ChainClass,
    pub carbons: u8,
    pub double_bonds: u8,
    slot: u16,
}

impl ChainDescriptor {
    /// Position among all chain descriptors.
    pub fn slot(&self) -> usize {
        self.slot as usize
    }

    /// Table key, `"<carbons>_<double bonds>"`.
    pub fn key(&self) -> String {
        format!("{}_{}", self.carbons, self.double_bonds)
    }

    /// Catalogue name, e.g. `"Fatty acid 18:2"`.
    pub fn name(&self) -> String {
        format!("{} {}:{}", self.class.label(), self.carbons, self.double_bonds)
    }
}

impl fmt::Display for ChainDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

struct Tables {
    all: Vec<ChainDescriptor>,
    by_key: HashMap<(ChainClass, u8, u8), usize>,
}

fn tables() -> &'static Tables {
    static TABLES: OnceLock<Tables> = OnceLock::new();
    TABLES.get_or_init(|| {
        let mut all = Vec::new();
        let mut by_key = HashMap::new();
        for class in ChainClass::ALL {
            let (lo, hi, max_db) = class.coverage();
            for carbons in lo..=hi {
                // a C=C needs two carbons that are not the terminal one
                let ceiling = max_db.min(carbons.saturating_sub(1) / 2);
                for double_bonds in 0..=ceiling {
                    by_key.insert((class, carbons, double_bonds), all.len());
                    all.push(ChainDescriptor {
                        class,
                        carbons,
                        double_bonds,
                        slot: all.len() as u16,
                    });
                }
            }
        }
        debug!(descriptors = all.len(), "chain descriptor tables built");
        Tables { all, by_key }
    })
}

/// Every chain descriptor, in fingerprint order.
pub fn descriptors() -> &'static [ChainDescriptor] {
    &tables().all
}

/// The descriptor for a class, length and unsaturation, if one is mapped.
pub fn lookup(class: ChainClass, carbons: u8, double_bonds: u8) -> Option<ChainDescriptor> {
    let t = tables();
    t.by_key.get(&(class, carbons, double_bonds)).map(|&i| t.all[i])
}

/// Classify an unbranched chain; `atoms[0]` is the terminal carbon.
///
/// Returns `None` (and logs the reason at debug level) when the path is not
/// a chain this classifier describes: a ring atom, a non-carbon atom, a
/// triple or aromatic bond, a carbon or heteroatom branch, an oxo on an
/// inner carbon, two branch oxygens, no terminal oxygen, or a length/unsaturation with no table entry.
pub fn classify_chain(ctx: &GraphContext, atoms: &[AtomId], bonds: &[BondId]) -> Option<ChainDescriptor> {
    let n = atoms.len();
    if !(MIN_CHAIN_LEN..=MAX_CHAIN_LEN).contains(&n) {
        debug!(len = n, "chain rejected: length out of range");
        return None;
    }
    if bonds.len() + 1 != n {
        debug!(atoms = n, bonds = bonds.len(), "chain rejected: bond count mismatch");
        return None;
    }

    let mut double_bonds = 0u8;
    for (i, &b) in bonds.iter().enumerate() {
        let bond = ctx.bond(b);
        if !(bond.touches(atoms[i]) && bond.touches(atoms[i + 1])) {
            debug!(bond = b, "chain rejected: bond does not join consecutive atoms");
            return None;
        }
        match bond.order {
            BondOrder::Single => {}
            BondOrder::Double => double_bonds += 1,
            BondOrder::Triple | BondOrder::Aromatic => {
                debug!(bond = b, order = ?bond.order, "chain rejected: bond order");
                return None;
            }
        }
    }

    let mut terminal_oxo = 0u8;
    let mut terminal_single_o = 0u8;
    let mut branch_oxygens = 0u8;

    for (i, &a) in atoms.iter().enumerate() {
        let atom = ctx.atom(a);
        if !atom.is("C") || atom.in_ring {
            debug!(atom = a, symbol = %atom.symbol, in_ring = atom.in_ring, "chain rejected: not an acyclic carbon");
            return None;
        }
        for (other, b) in ctx.neighbors(a) {
            if bonds.contains(&b) {
                continue;
            }
            let neighbor = ctx.atom(other);
            match neighbor.symbol.as_str() {
                "H" => {}
                "O" if i == 0 => match ctx.bond(b).order {
                    BondOrder::Double => terminal_oxo += 1,
                    _ => terminal_single_o += 1,
                },
                "O" if ctx.bond(b).order == BondOrder::Double => {
                    debug!(atom = a, "chain rejected: in-chain oxo");
                    return None;
                }
                "O" => branch_oxygens += 1,
                "C" => {
                    debug!(atom = a, branch = other, "chain rejected: carbon branch");
                    return None;
                }
                symbol => {
                    debug!(atom = a, neighbor = %symbol, "chain rejected: heteroatom neighbor");
                    return None;
                }
            }
        }
    }

    if branch_oxygens > 1 {
        debug!(branch_oxygens, "chain rejected: more than one branch oxygen");
        return None;
    }
    if terminal_oxo != 1 || terminal_single_o > 1 {
        debug!(terminal_oxo, terminal_single_o, "chain rejected: terminal oxygen pattern");
        return None;
    }

    let class = ChainClass::select(terminal_single_o == 1, branch_oxygens == 1);
    let carbons = n as u8;
    let found = lookup(class, carbons, double_bonds);
    if found.is_none() {
        debug!(?class, carbons, double_bonds, "chain ignored: no table entry");
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing;

    fn chain_of(ctx: &GraphContext, atoms: &[AtomId]) -> Vec<BondId> {
        atoms.windows(2).map(|w| ctx.bond_between(w[0], w[1]).unwrap()).collect()
    }

    #[test]
    fn linoleic_acid_is_18_2() {
        let ctx = testing::fatty_acid(18, &[9, 12]);
        let atoms: Vec<AtomId> = (0..18).collect();
        let d = classify_chain(&ctx, &atoms, &chain_of(&ctx, &atoms)).unwrap();
        assert_eq!(d.class, ChainClass::FattyAcid);
        assert_eq!(d.name(), "Fatty acid 18:2");
        assert_eq!(d.key(), "18_2");
        assert_eq!(Some(d), lookup(ChainClass::FattyAcid, 18, 2));
    }

    #[test]
    fn hydroxylated_chain_uses_hydroxy_table() {
        let ctx = testing::hydroxy_fatty_acid(16, 3);
        let atoms: Vec<AtomId> = (0..16).collect();
        let d = classify_chain(&ctx, &atoms, &chain_of(&ctx, &atoms)).unwrap();
        assert_eq!(d.name(), "Hydroxy fatty acid 16:0");
    }

    #[test]
    fn aldehyde_terminal_is_acyl() {
        let ctx = testing::fatty_aldehyde(12);
        let atoms: Vec<AtomId> = (0..12).collect();
        let d = classify_chain(&ctx, &atoms, &chain_of(&ctx, &atoms)).unwrap();
        assert_eq!(d.class, ChainClass::FattyAcyl);
    }

    #[test]
    fn heteroatom_neighbor_rejects() {
        let ctx = testing::pentanoic_acid_with(&[("N", 2)]);
        let atoms: Vec<AtomId> = (0..5).collect();
        assert_eq!(classify_chain(&ctx, &atoms, &chain_of(&ctx, &atoms)), None);
    }

    #[test]
    fn two_branch_oxygens_reject() {
        let ctx = testing::pentanoic_acid_with(&[("O", 2), ("O", 3)]);
        let atoms: Vec<AtomId> = (0..5).collect();
        assert_eq!(classify_chain(&ctx, &atoms, &chain_of(&ctx, &atoms)), None);
    }

    #[test]
    fn one_branch_oxygen_accepted() {
        let ctx = testing::pentanoic_acid_with(&[("O", 2)]);
        let atoms: Vec<AtomId> = (0..5).collect();
        let d = classify_chain(&ctx, &atoms, &chain_of(&ctx, &atoms)).unwrap();
        assert_eq!(d.class, ChainClass::HydroxyFattyAcid);
    }

    #[test]
    fn keto_acid_is_not_hydroxylated() {
        // levulinic acid: C4 ketone, no hydroxyl
        let ctx = testing::keto_acid(5, 3);
        let atoms: Vec<AtomId> = (0..5).collect();
        assert_eq!(classify_chain(&ctx, &atoms, &chain_of(&ctx, &atoms)), None);
    }

    #[test]
    fn partial_chain_is_branched() {
        // stopping short of the methyl end leaves a carbon beyond the chain
        let ctx = testing::fatty_acid(18, &[9, 12]);
        let atoms: Vec<AtomId> = (0..17).collect();
        assert_eq!(classify_chain(&ctx, &atoms, &chain_of(&ctx, &atoms)), None);
    }

    #[test]
    fn wrong_terminal_or_ring_rejects() {
        let ctx = testing::fatty_acid(18, &[]);
        let reversed: Vec<AtomId> = (0..18).rev().collect();
        assert_eq!(classify_chain(&ctx, &reversed, &chain_of(&ctx, &reversed)), None);

        let ring = testing::phenol();
        assert_eq!(classify_chain(&ring, &[0, 1], &chain_of(&ring, &[0, 1])), None);
    }

    #[test]
    fn slots_are_dense() {
        for (i, d) in descriptors().iter().enumerate() {
            assert_eq!(d.slot(), i);
        }
        assert!(lookup(ChainClass::FattyAcid, 2, 1).is_none());
        assert!(lookup(ChainClass::FattyAcid, 22, 6).is_some());
    }
}
