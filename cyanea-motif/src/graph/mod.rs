//! Per-molecule graph context: atoms, bonds, classified rings and ringsets.
//!
//! The context is produced once per molecule and is read-only while the rule
//! tables run. Ids are dense indices into the owning vectors, validated when
//! the context is assembled, so lookups during evaluation index directly and
//! treat an out-of-range id as a contract violation.

mod builder;
mod environment;
mod types;

pub use builder::GraphBuilder;
pub use environment::{AtomEnvironment, RingEnvironment};
pub use types::{BondOrder, FunctionGroup, RingSetType, RingType};

use crate::error::{MotifError, Result};

/// Index of an atom in [`GraphContext::atoms`].
pub type AtomId = usize;
/// Index of a bond in [`GraphContext::bonds`].
pub type BondId = usize;
/// Index of a ring in [`GraphContext::rings`].
pub type RingId = usize;
/// Index of a ringset in [`GraphContext::ringsets`].
pub type RingSetId = usize;

/// An atom with its precomputed neighborhood.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Atom {
    pub id: AtomId,
    pub symbol: String,
    pub charge: i8,
    pub implicit_hydrogens: u8,
    pub aromatic: bool,
    pub in_ring: bool,
    /// Ids of every ring containing this atom, ascending.
    pub rings: Vec<RingId>,
    /// Incident bonds.
    pub bonds: Vec<BondId>,
    pub group: FunctionGroup,
    pub env: AtomEnvironment,
}

impl Atom {
    /// Whether the element symbol equals `symbol`.
    pub fn is(&self, symbol: &str) -> bool {
        self.symbol == symbol
    }

    pub fn is_hydrogen(&self) -> bool {
        self.symbol == "H"
    }

    pub fn is_halogen(&self) -> bool {
        matches!(self.symbol.as_str(), "F" | "Cl" | "Br" | "I")
    }

    /// A carbon with exactly one heavy neighbor and three hydrogens.
    pub fn is_methyl(&self) -> bool {
        self.symbol == "C" && self.env.heavy_degree == 1 && self.env.hydrogen == 3
    }
}

/// A bond between two atoms.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bond {
    pub id: BondId,
    pub atoms: [AtomId; 2],
    pub order: BondOrder,
    pub in_ring: bool,
    /// Ids of every ring containing this bond; two or more on a fusion bond.
    pub rings: Vec<RingId>,
}

impl Bond {
    /// The endpoint that is not `atom`.
    pub fn other(&self, atom: AtomId) -> AtomId {
        if self.atoms[0] == atom {
            self.atoms[1]
        } else {
            self.atoms[0]
        }
    }

    pub fn touches(&self, atom: AtomId) -> bool {
        self.atoms[0] == atom || self.atoms[1] == atom
    }

    /// Shared by two or more rings.
    pub fn is_fusion(&self) -> bool {
        self.rings.len() >= 2
    }
}

/// A classified ring.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ring {
    pub id: RingId,
    pub ty: RingType,
    /// Members in cyclic order.
    pub atoms: Vec<AtomId>,
    pub bonds: Vec<BondId>,
    pub env: RingEnvironment,
    pub ringset: Option<RingSetId>,
}

impl Ring {
    pub fn size(&self) -> usize {
        self.atoms.len()
    }

    pub fn contains(&self, atom: AtomId) -> bool {
        self.atoms.contains(&atom)
    }
}

/// A classified fused or bridged ring system.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RingSet {
    pub id: RingSetId,
    pub ty: RingSetType,
    pub rings: Vec<RingId>,
}

/// Read-only facts about one molecule.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GraphContext {
    atoms: Vec<Atom>,
    bonds: Vec<Bond>,
    rings: Vec<Ring>,
    ringsets: Vec<RingSet>,
}

impl GraphContext {
    /// Assemble a context from records produced upstream.
    ///
    /// Every cross reference is checked once here so that evaluation can index
    /// without further validation.
    pub fn from_parts(
        atoms: Vec<Atom>,
        bonds: Vec<Bond>,
        rings: Vec<Ring>,
        ringsets: Vec<RingSet>,
    ) -> Result<Self> {
        let ctx = GraphContext { atoms, bonds, rings, ringsets };
        ctx.validate()?;
        Ok(ctx)
    }

    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    pub fn bonds(&self) -> &[Bond] {
        &self.bonds
    }

    pub fn rings(&self) -> &[Ring] {
        &self.rings
    }

    pub fn ringsets(&self) -> &[RingSet] {
        &self.ringsets
    }

    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    /// Number of non-hydrogen atoms.
    pub fn heavy_atom_count(&self) -> usize {
        self.atoms.iter().filter(|a| !a.is_hydrogen()).count()
    }

    /// # Panics
    ///
    /// Panics if `id` is not an atom of this molecule.
    pub fn atom(&self, id: AtomId) -> &Atom {
        self.atoms
            .get(id)
            .unwrap_or_else(|| panic!("atom id {id} out of range ({} atoms)", self.atoms.len()))
    }

    /// # Panics
    ///
    /// Panics if `id` is not a bond of this molecule.
    pub fn bond(&self, id: BondId) -> &Bond {
        self.bonds
            .get(id)
            .unwrap_or_else(|| panic!("bond id {id} out of range ({} bonds)", self.bonds.len()))
    }

    /// # Panics
    ///
    /// Panics if `id` is not a ring of this molecule.
    pub fn ring(&self, id: RingId) -> &Ring {
        self.rings
            .get(id)
            .unwrap_or_else(|| panic!("ring id {id} out of range ({} rings)", self.rings.len()))
    }

    /// # Panics
    ///
    /// Panics if `id` is not a ringset of this molecule.
    pub fn ringset(&self, id: RingSetId) -> &RingSet {
        self.ringsets.get(id).unwrap_or_else(|| {
            panic!("ringset id {id} out of range ({} ringsets)", self.ringsets.len())
        })
    }

    /// Neighbors of `atom` as `(neighbor, bond)` pairs.
    pub fn neighbors(&self, atom: AtomId) -> impl Iterator<Item = (AtomId, BondId)> + '_ {
        self.atom(atom)
            .bonds
            .iter()
            .map(move |&b| (self.bonds[b].other(atom), b))
    }

    /// The bond joining `a` and `b`, if any.
    pub fn bond_between(&self, a: AtomId, b: AtomId) -> Option<BondId> {
        self.neighbors(a).find(|&(n, _)| n == b).map(|(_, bond)| bond)
    }

    fn validate(&self) -> Result<()> {
        let invalid = |msg: String| Err(MotifError::InvalidGraph(msg));

        for (i, atom) in self.atoms.iter().enumerate() {
            if atom.id != i {
                return invalid(format!("atom at position {i} carries id {}", atom.id));
            }
            for &b in &atom.bonds {
                match self.bonds.get(b) {
                    Some(bond) if bond.touches(i) => {}
                    Some(_) => return invalid(format!("atom {i} lists bond {b} that does not touch it")),
                    None => return invalid(format!("atom {i} references missing bond {b}")),
                }
            }
            if let Some(&r) = atom.rings.iter().find(|&&r| r >= self.rings.len()) {
                return invalid(format!("atom {i} references missing ring {r}"));
            }
        }

        for (i, bond) in self.bonds.iter().enumerate() {
            if bond.id != i {
                return invalid(format!("bond at position {i} carries id {}", bond.id));
            }
            let [a, b] = bond.atoms;
            if a >= self.atoms.len() || b >= self.atoms.len() {
                return invalid(format!("bond {i} joins missing atom ({a}, {b})"));
            }
            if a == b {
                return invalid(format!("bond {i} joins atom {a} to itself"));
            }
            if let Some(&r) = bond.rings.iter().find(|&&r| r >= self.rings.len()) {
                return invalid(format!("bond {i} references missing ring {r}"));
            }
        }

        for (i, ring) in self.rings.iter().enumerate() {
            if ring.id != i {
                return invalid(format!("ring at position {i} carries id {}", ring.id));
            }
            if let Some(&a) = ring.atoms.iter().find(|&&a| a >= self.atoms.len()) {
                return invalid(format!("ring {i} references missing atom {a}"));
            }
            if let Some(&b) = ring.bonds.iter().find(|&&b| b >= self.bonds.len()) {
                return invalid(format!("ring {i} references missing bond {b}"));
            }
            if let Some(s) = ring.ringset {
                match self.ringsets.get(s) {
                    Some(set) if set.rings.contains(&i) => {}
                    Some(_) => return invalid(format!("ring {i} claims ringset {s} which does not list it")),
                    None => return invalid(format!("ring {i} references missing ringset {s}")),
                }
            }
        }

        for (i, set) in self.ringsets.iter().enumerate() {
            if set.id != i {
                return invalid(format!("ringset at position {i} carries id {}", set.id));
            }
            for &r in &set.rings {
                match self.rings.get(r) {
                    Some(ring) if ring.ringset == Some(i) => {}
                    Some(_) => return invalid(format!("ringset {i} lists ring {r} owned elsewhere")),
                    None => return invalid(format!("ringset {i} references missing ring {r}")),
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing;

    #[test]
    fn neighbors_and_bond_lookup() {
        let ctx = testing::ethanol();
        let neighbors: Vec<_> = ctx.neighbors(1).map(|(n, _)| n).collect();
        assert_eq!(neighbors, vec![0, 2]);
        assert!(ctx.bond_between(0, 1).is_some());
        assert!(ctx.bond_between(0, 2).is_none());
        assert_eq!(ctx.heavy_atom_count(), 3);
    }

    #[test]
    #[should_panic(expected = "ring id 7 out of range")]
    fn ring_lookup_out_of_range_panics() {
        let ctx = testing::ethanol();
        ctx.ring(7);
    }

    #[test]
    fn from_parts_rejects_dangling_bond() {
        let ctx = testing::ethanol();
        let mut bonds = ctx.bonds().to_vec();
        bonds[0].atoms = [0, 42];
        let err = GraphContext::from_parts(ctx.atoms().to_vec(), bonds, vec![], vec![]);
        assert!(matches!(err, Err(MotifError::InvalidGraph(_))));
    }

    #[test]
    fn from_parts_round_trips_valid_context() {
        let ctx = testing::phenol();
        let rebuilt = GraphContext::from_parts(
            ctx.atoms().to_vec(),
            ctx.bonds().to_vec(),
            ctx.rings().to_vec(),
            ctx.ringsets().to_vec(),
        )
        .unwrap();
        assert_eq!(rebuilt.rings().len(), 1);
        assert_eq!(rebuilt.ring(0).ty, RingType::Benzene);
    }
}
