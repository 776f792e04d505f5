//! Aggregated neighbor counts for atoms and rings.
//!
//! Environment records let rules test "what hangs off this atom/ring" with a
//! field read instead of a graph walk.

use std::collections::BTreeMap;

use super::AtomId;

/// Counts of everything attached to one atom, by neighbor element and bond order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AtomEnvironment {
    pub carbon_single: u8,
    pub carbon_double: u8,
    pub carbon_triple: u8,
    pub carbon_aromatic: u8,
    pub oxygen_single: u8,
    pub oxygen_double: u8,
    pub oxygen_aromatic: u8,
    pub nitrogen_single: u8,
    pub nitrogen_double: u8,
    pub nitrogen_triple: u8,
    pub nitrogen_aromatic: u8,
    pub sulfur_single: u8,
    pub sulfur_double: u8,
    pub sulfur_aromatic: u8,
    pub phosphorus: u8,
    pub fluorine: u8,
    pub chlorine: u8,
    pub bromine: u8,
    pub iodine: u8,
    pub silicon: u8,
    /// Implicit plus explicit hydrogens.
    pub hydrogen: u8,
    /// Single-bonded oxygens that carry a hydrogen and nothing else.
    pub hydroxyl: u8,
    /// Single-bonded oxygens with a second heavy neighbor.
    pub ether_oxygen: u8,
    /// Neighboring carbons with no other heavy neighbor.
    pub methyl: u8,
    /// Neighboring carbons that carry a double-bonded oxygen.
    pub carbonyl: u8,
    /// Number of non-hydrogen neighbors.
    pub heavy_degree: u8,
}

impl AtomEnvironment {
    /// All attached carbons regardless of bond order.
    pub fn carbons(&self) -> u8 {
        self.carbon_single + self.carbon_double + self.carbon_triple + self.carbon_aromatic
    }

    /// All attached oxygens regardless of bond order.
    pub fn oxygens(&self) -> u8 {
        self.oxygen_single + self.oxygen_double + self.oxygen_aromatic
    }

    /// All attached nitrogens regardless of bond order.
    pub fn nitrogens(&self) -> u8 {
        self.nitrogen_single + self.nitrogen_double + self.nitrogen_triple + self.nitrogen_aromatic
    }

    /// All attached sulfurs regardless of bond order.
    pub fn sulfurs(&self) -> u8 {
        self.sulfur_single + self.sulfur_double + self.sulfur_aromatic
    }

    /// F + Cl + Br + I.
    pub fn halogens(&self) -> u8 {
        self.fluorine + self.chlorine + self.bromine + self.iodine
    }

    /// Heavy neighbors other than carbon.
    pub fn heteroatoms(&self) -> u8 {
        self.heavy_degree.saturating_sub(self.carbons())
    }
}

/// Summary of attachments outside one ring.
///
/// An atom counts as "outside" when it is not a member of this ring, even if
/// it belongs to a fused partner ring.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RingEnvironment {
    pub oxygen: u8,
    pub hydroxyl: u8,
    pub ether: u8,
    pub methoxy: u8,
    /// Exocyclic C=O on a ring carbon.
    pub ketone: u8,
    /// Outside sp3 carbons.
    pub carbon: u8,
    pub methyl: u8,
    /// Outside carbons that carry a C=C double bond.
    pub alkenyl: u8,
    /// Outside aromatic carbons.
    pub aryl: u8,
    /// Outside carbons carrying a C=O (acyl, carboxyl, ester, amide carbons).
    pub carbonyl: u8,
    pub nitrogen: u8,
    pub amine: u8,
    pub sulfur: u8,
    pub phosphorus: u8,
    pub halogen: u8,
    /// Outside oxygens keyed by the ring atom they attach to.
    pub oxygen_on: BTreeMap<AtomId, u8>,
    /// Outside carbons keyed by the ring atom they attach to.
    pub carbon_on: BTreeMap<AtomId, u8>,
}

impl RingEnvironment {
    /// Outside oxygens attached to `atom`.
    pub fn oxygens_on(&self, atom: AtomId) -> u8 {
        self.oxygen_on.get(&atom).copied().unwrap_or(0)
    }

    /// Outside carbons attached to `atom`.
    pub fn carbons_on(&self, atom: AtomId) -> u8 {
        self.carbon_on.get(&atom).copied().unwrap_or(0)
    }

    /// Number of ring atoms carrying at least one outside oxygen.
    pub fn oxygenated_positions(&self) -> usize {
        self.oxygen_on.values().filter(|&&n| n > 0).count()
    }

    /// Total outside carbons of any kind.
    pub fn carbons(&self) -> u8 {
        self.carbon + self.alkenyl + self.aryl + self.carbonyl
    }
}
