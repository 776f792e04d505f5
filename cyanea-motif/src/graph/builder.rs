//! Assemble a [`GraphContext`] from an explicit molecular graph.
//!
//! The builder does not perceive rings: callers supply every ring (in cyclic
//! order, with its classified type) and every ringset. It derives everything
//! else the rule tables read: ring membership, aromatic flags, implicit
//! hydrogens, atom and ring environment records and functional-group tags.

use std::collections::{BTreeSet, HashMap};

use super::{
    Atom, AtomEnvironment, AtomId, Bond, BondId, BondOrder, FunctionGroup, GraphContext, Ring,
    RingEnvironment, RingId, RingSet, RingSetId, RingSetType, RingType,
};
use crate::error::{MotifError, Result};

#[derive(Debug, Clone)]
struct AtomSpec {
    symbol: String,
    charge: i8,
    hydrogens: Option<u8>,
    group: Option<FunctionGroup>,
}

/// Incremental builder for a [`GraphContext`].
///
/// # Example
///
/// ```
/// use cyanea_motif::{BondOrder, FunctionGroup, GraphBuilder};
///
/// // acetic acid
/// let mut b = GraphBuilder::new();
/// let c1 = b.add_atom("C");
/// let c2 = b.add_atom("C");
/// let o1 = b.add_atom("O");
/// let o2 = b.add_atom("O");
/// b.add_bond(c1, c2, BondOrder::Single);
/// b.add_bond(c2, o1, BondOrder::Double);
/// b.add_bond(c2, o2, BondOrder::Single);
/// let ctx = b.build().unwrap();
///
/// assert_eq!(ctx.atom(c2).group, FunctionGroup::CarboxylCarbon);
/// assert_eq!(ctx.atom(o2).group, FunctionGroup::HydroxylOxygen);
/// assert_eq!(ctx.atom(c1).env.hydrogen, 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    atoms: Vec<AtomSpec>,
    bonds: Vec<(AtomId, AtomId, BondOrder)>,
    rings: Vec<(RingType, Vec<AtomId>)>,
    ringsets: Vec<(RingSetType, Vec<RingId>)>,
    errors: Vec<String>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an atom; implicit hydrogens are filled from default valence unless
    /// set explicitly with [`set_hydrogens`](Self::set_hydrogens).
    pub fn add_atom(&mut self, symbol: &str) -> AtomId {
        self.atoms.push(AtomSpec {
            symbol: symbol.to_string(),
            charge: 0,
            hydrogens: None,
            group: None,
        });
        self.atoms.len() - 1
    }

    /// Add an atom with an explicit implicit-hydrogen count.
    pub fn add_atom_with_h(&mut self, symbol: &str, hydrogens: u8) -> AtomId {
        let id = self.add_atom(symbol);
        self.atoms[id].hydrogens = Some(hydrogens);
        id
    }

    pub fn set_hydrogens(&mut self, atom: AtomId, hydrogens: u8) -> &mut Self {
        match self.atoms.get_mut(atom) {
            Some(spec) => spec.hydrogens = Some(hydrogens),
            None => self.errors.push(format!("set_hydrogens on missing atom {atom}")),
        }
        self
    }

    pub fn set_charge(&mut self, atom: AtomId, charge: i8) -> &mut Self {
        match self.atoms.get_mut(atom) {
            Some(spec) => spec.charge = charge,
            None => self.errors.push(format!("set_charge on missing atom {atom}")),
        }
        self
    }

    /// Override the inferred functional-group tag.
    pub fn set_group(&mut self, atom: AtomId, group: FunctionGroup) -> &mut Self {
        match self.atoms.get_mut(atom) {
            Some(spec) => spec.group = Some(group),
            None => self.errors.push(format!("set_group on missing atom {atom}")),
        }
        self
    }

    pub fn add_bond(&mut self, a: AtomId, b: AtomId, order: BondOrder) -> BondId {
        self.bonds.push((a, b, order));
        self.bonds.len() - 1
    }

    /// Add a classified ring whose members are listed in cyclic order.
    pub fn add_ring(&mut self, ty: RingType, atoms: &[AtomId]) -> RingId {
        self.rings.push((ty, atoms.to_vec()));
        self.rings.len() - 1
    }

    /// Group previously added rings into a classified ringset.
    pub fn add_ringset(&mut self, ty: RingSetType, rings: &[RingId]) -> RingSetId {
        self.ringsets.push((ty, rings.to_vec()));
        self.ringsets.len() - 1
    }

    /// Validate the graph and compute all derived records.
    pub fn build(&self) -> Result<GraphContext> {
        if let Some(msg) = self.errors.first() {
            return Err(MotifError::InvalidInput(msg.clone()));
        }
        let n = self.atoms.len();

        let mut seen = BTreeSet::new();
        for (i, &(a, b, _)) in self.bonds.iter().enumerate() {
            if a >= n || b >= n {
                return Err(MotifError::InvalidGraph(format!(
                    "bond {i} joins missing atom ({a}, {b})"
                )));
            }
            if a == b {
                return Err(MotifError::InvalidGraph(format!("bond {i} joins atom {a} to itself")));
            }
            if !seen.insert((a.min(b), a.max(b))) {
                return Err(MotifError::InvalidGraph(format!("duplicate bond between {a} and {b}")));
            }
        }

        let mut atoms: Vec<Atom> = self
            .atoms
            .iter()
            .enumerate()
            .map(|(id, spec)| Atom {
                id,
                symbol: spec.symbol.clone(),
                charge: spec.charge,
                implicit_hydrogens: 0,
                aromatic: false,
                in_ring: false,
                rings: Vec::new(),
                bonds: Vec::new(),
                group: FunctionGroup::Other,
                env: AtomEnvironment::default(),
            })
            .collect();
        let mut bonds: Vec<Bond> = self
            .bonds
            .iter()
            .enumerate()
            .map(|(id, &(a, b, order))| Bond {
                id,
                atoms: [a, b],
                order,
                in_ring: false,
                rings: Vec::new(),
            })
            .collect();
        let pair_to_bond: HashMap<(AtomId, AtomId), BondId> = bonds
            .iter()
            .map(|b| ((b.atoms[0].min(b.atoms[1]), b.atoms[0].max(b.atoms[1])), b.id))
            .collect();

        for bond in &bonds {
            for &a in &bond.atoms {
                atoms[a].bonds.push(bond.id);
            }
            if bond.order == BondOrder::Aromatic {
                atoms[bond.atoms[0]].aromatic = true;
                atoms[bond.atoms[1]].aromatic = true;
            }
        }

        let mut rings = Vec::with_capacity(self.rings.len());
        for (id, (ty, members)) in self.rings.iter().enumerate() {
            if members.len() < 3 {
                return Err(MotifError::InvalidGraph(format!("ring {id} has fewer than 3 atoms")));
            }
            if let Some(&a) = members.iter().find(|&&a| a >= n) {
                return Err(MotifError::InvalidGraph(format!("ring {id} references missing atom {a}")));
            }
            let mut ring_bonds = Vec::with_capacity(members.len());
            for (k, &a) in members.iter().enumerate() {
                let b = members[(k + 1) % members.len()];
                let bond = pair_to_bond.get(&(a.min(b), a.max(b))).ok_or_else(|| {
                    MotifError::InvalidGraph(format!("ring {id}: atoms {a} and {b} are not bonded"))
                })?;
                ring_bonds.push(*bond);
            }
            for &a in members {
                atoms[a].in_ring = true;
                atoms[a].rings.push(id);
            }
            for &b in &ring_bonds {
                bonds[b].in_ring = true;
                bonds[b].rings.push(id);
            }
            rings.push(Ring {
                id,
                ty: *ty,
                atoms: members.clone(),
                bonds: ring_bonds,
                env: RingEnvironment::default(),
                ringset: None,
            });
        }

        let mut ringsets = Vec::with_capacity(self.ringsets.len());
        for (id, (ty, members)) in self.ringsets.iter().enumerate() {
            for &r in members {
                let ring = rings.get_mut(r).ok_or_else(|| {
                    MotifError::InvalidGraph(format!("ringset {id} references missing ring {r}"))
                })?;
                if let Some(owner) = ring.ringset {
                    return Err(MotifError::InvalidGraph(format!(
                        "ring {r} claimed by ringsets {owner} and {id}"
                    )));
                }
                ring.ringset = Some(id);
            }
            ringsets.push(RingSet { id, ty: *ty, rings: members.clone() });
        }

        // Hydrogens first: neighbor hydrogen counts feed the hydroxyl/methyl tests.
        for i in 0..n {
            let explicit = self.atoms[i].hydrogens;
            let h = explicit.unwrap_or_else(|| default_hydrogens(&atoms[i], &bonds));
            atoms[i].implicit_hydrogens = h;
        }
        let mut basics = Vec::with_capacity(n);
        for atom in &atoms {
            let mut heavy = 0u8;
            let mut hydrogen = atom.implicit_hydrogens;
            let mut oxo = false;
            for &b in &atom.bonds {
                let other = &atoms[bonds[b].other(atom.id)];
                if other.is_hydrogen() {
                    hydrogen += 1;
                } else {
                    heavy += 1;
                    if other.symbol == "O" && bonds[b].order == BondOrder::Double {
                        oxo = true;
                    }
                }
            }
            basics.push(Basic { heavy, hydrogen, oxo });
        }

        for i in 0..n {
            let env = atom_environment(i, &atoms, &bonds, &basics);
            atoms[i].env = env;
        }
        for i in 0..n {
            atoms[i].group = match self.atoms[i].group {
                Some(g) => g,
                None => infer_group(&atoms[i], &atoms, &bonds),
            };
        }
        for ring in &mut rings {
            ring.env = ring_environment(ring, &atoms, &bonds);
        }

        GraphContext::from_parts(atoms, bonds, rings, ringsets)
    }
}

#[derive(Debug, Clone, Copy)]
struct Basic {
    heavy: u8,
    hydrogen: u8,
    oxo: bool,
}

fn default_valence(symbol: &str, charge: i8) -> u32 {
    match (symbol, charge) {
        ("C", 0) => 4,
        ("C", _) => 3,
        ("N", 0) => 3,
        ("N", c) if c > 0 => 4,
        ("N", _) => 2,
        ("O", 0) => 2,
        ("O", c) if c > 0 => 3,
        ("O", _) => 1,
        ("S", 0) => 2,
        ("P", 0) => 3,
        ("B", 0) => 3,
        ("Si", 0) => 4,
        ("F" | "Cl" | "Br" | "I", 0) => 1,
        _ => 0,
    }
}

/// Fill the remaining default valence with hydrogens; aromatic bonds count 1.5.
fn default_hydrogens(atom: &Atom, bonds: &[Bond]) -> u8 {
    let halves: u32 = atom
        .bonds
        .iter()
        .map(|&b| match bonds[b].order {
            BondOrder::Single => 2,
            BondOrder::Double => 4,
            BondOrder::Triple => 6,
            BondOrder::Aromatic => 3,
        })
        .sum();
    let valence = default_valence(&atom.symbol, atom.charge) * 2;
    (valence.saturating_sub(halves) / 2) as u8
}

fn atom_environment(i: AtomId, atoms: &[Atom], bonds: &[Bond], basics: &[Basic]) -> AtomEnvironment {
    let mut env = AtomEnvironment {
        hydrogen: basics[i].hydrogen,
        heavy_degree: basics[i].heavy,
        ..AtomEnvironment::default()
    };
    for &b in &atoms[i].bonds {
        let order = bonds[b].order;
        let j = bonds[b].other(i);
        let other = &atoms[j];
        match other.symbol.as_str() {
            "C" => {
                match order {
                    BondOrder::Single => env.carbon_single += 1,
                    BondOrder::Double => env.carbon_double += 1,
                    BondOrder::Triple => env.carbon_triple += 1,
                    BondOrder::Aromatic => env.carbon_aromatic += 1,
                }
                if basics[j].heavy == 1 && basics[j].hydrogen == 3 {
                    env.methyl += 1;
                }
                if basics[j].oxo {
                    env.carbonyl += 1;
                }
            }
            "O" => match order {
                BondOrder::Single => {
                    env.oxygen_single += 1;
                    if basics[j].heavy == 1 && basics[j].hydrogen >= 1 {
                        env.hydroxyl += 1;
                    } else if basics[j].heavy >= 2 {
                        env.ether_oxygen += 1;
                    }
                }
                BondOrder::Double | BondOrder::Triple => env.oxygen_double += 1,
                BondOrder::Aromatic => env.oxygen_aromatic += 1,
            },
            "N" => match order {
                BondOrder::Single => env.nitrogen_single += 1,
                BondOrder::Double => env.nitrogen_double += 1,
                BondOrder::Triple => env.nitrogen_triple += 1,
                BondOrder::Aromatic => env.nitrogen_aromatic += 1,
            },
            "S" => match order {
                BondOrder::Single => env.sulfur_single += 1,
                BondOrder::Double | BondOrder::Triple => env.sulfur_double += 1,
                BondOrder::Aromatic => env.sulfur_aromatic += 1,
            },
            "P" => env.phosphorus += 1,
            "F" => env.fluorine += 1,
            "Cl" => env.chlorine += 1,
            "Br" => env.bromine += 1,
            "I" => env.iodine += 1,
            "Si" => env.silicon += 1,
            _ => {}
        }
    }
    env
}

fn infer_group(atom: &Atom, atoms: &[Atom], bonds: &[Bond]) -> FunctionGroup {
    let env = &atom.env;
    let has_double = atom.bonds.iter().any(|&b| bonds[b].order == BondOrder::Double);
    match atom.symbol.as_str() {
        "C" => {
            if env.nitrogen_triple > 0 {
                FunctionGroup::NitrileCarbon
            } else if env.oxygen_double > 0 {
                let anionic = env
                    .oxygen_single
                    .saturating_sub(env.hydroxyl + env.ether_oxygen);
                if env.nitrogen_single + env.nitrogen_aromatic > 0 {
                    FunctionGroup::AmideCarbon
                } else if env.hydroxyl > 0 || anionic > 0 {
                    FunctionGroup::CarboxylCarbon
                } else if env.ether_oxygen > 0 {
                    FunctionGroup::EsterCarbon
                } else if env.carbons() >= 2 {
                    FunctionGroup::KetoneCarbon
                } else {
                    FunctionGroup::AldehydeCarbon
                }
            } else if atom.aromatic {
                FunctionGroup::AromaticCarbon
            } else if env.carbon_triple > 0 {
                FunctionGroup::AlkyneCarbon
            } else if env.nitrogen_double > 0 {
                FunctionGroup::ImineCarbon
            } else if env.carbon_double > 0 {
                FunctionGroup::AlkeneCarbon
            } else {
                FunctionGroup::AlkaneCarbon
            }
        }
        "O" => {
            if has_double {
                FunctionGroup::CarbonylOxygen
            } else if atom.aromatic {
                FunctionGroup::AromaticOxygen
            } else if atom.charge < 0 {
                FunctionGroup::AnionicOxygen
            } else if env.heavy_degree >= 2 {
                if env.carbonyl > 0 {
                    FunctionGroup::EsterOxygen
                } else {
                    FunctionGroup::EtherOxygen
                }
            } else if env.heavy_degree == 1 {
                FunctionGroup::HydroxylOxygen
            } else {
                FunctionGroup::Other
            }
        }
        "N" => {
            if atom.aromatic {
                FunctionGroup::AromaticNitrogen
            } else if env.oxygen_double > 0 && env.oxygens() >= 2 {
                FunctionGroup::NitroNitrogen
            } else if atom.charge > 0 && env.heavy_degree >= 4 {
                FunctionGroup::QuaternaryNitrogen
            } else if env.carbon_triple > 0 {
                FunctionGroup::NitrileNitrogen
            } else if env.carbon_double > 0 {
                FunctionGroup::ImineNitrogen
            } else if env.carbonyl > 0 {
                FunctionGroup::AmideNitrogen
            } else {
                match env.heavy_degree {
                    0 | 1 => FunctionGroup::PrimaryAmineNitrogen,
                    2 => FunctionGroup::SecondaryAmineNitrogen,
                    _ => FunctionGroup::TertiaryAmineNitrogen,
                }
            }
        }
        "S" => {
            let to_sulfur = atom
                .bonds
                .iter()
                .any(|&b| atoms[bonds[b].other(atom.id)].symbol == "S");
            if atom.aromatic {
                FunctionGroup::AromaticSulfur
            } else if env.oxygen_double >= 2 {
                FunctionGroup::SulfonylSulfur
            } else if env.oxygen_double == 1 {
                FunctionGroup::SulfinylSulfur
            } else if env.carbon_double > 0 {
                FunctionGroup::ThiocarbonylSulfur
            } else if to_sulfur {
                FunctionGroup::DisulfideSulfur
            } else if env.heavy_degree <= 1 {
                FunctionGroup::ThiolSulfur
            } else {
                FunctionGroup::SulfideSulfur
            }
        }
        "P" => {
            if env.oxygens() >= 3 {
                if env.carbons() > 0 {
                    FunctionGroup::PhosphonatePhosphorus
                } else {
                    FunctionGroup::PhosphatePhosphorus
                }
            } else {
                FunctionGroup::OtherPhosphorus
            }
        }
        "F" | "Cl" | "Br" | "I" => FunctionGroup::Halogen,
        "Si" => FunctionGroup::Silicon,
        "H" => FunctionGroup::Hydrogen,
        _ => FunctionGroup::Other,
    }
}

fn ring_environment(ring: &Ring, atoms: &[Atom], bonds: &[Bond]) -> RingEnvironment {
    let mut env = RingEnvironment::default();
    for &m in &ring.atoms {
        for &b in &atoms[m].bonds {
            let j = bonds[b].other(m);
            if ring.contains(j) {
                continue;
            }
            let other = &atoms[j];
            match other.symbol.as_str() {
                "H" => {}
                "O" => {
                    env.oxygen += 1;
                    *env.oxygen_on.entry(m).or_insert(0) += 1;
                    if bonds[b].order == BondOrder::Double {
                        env.ketone += 1;
                    } else if other.env.heavy_degree == 1 && other.env.hydrogen >= 1 {
                        env.hydroxyl += 1;
                    } else if other.env.heavy_degree >= 2 {
                        env.ether += 1;
                        if other.env.methyl > 0 {
                            env.methoxy += 1;
                        }
                    }
                }
                "C" => {
                    *env.carbon_on.entry(m).or_insert(0) += 1;
                    if other.aromatic {
                        env.aryl += 1;
                    } else if other.env.oxygen_double > 0 {
                        env.carbonyl += 1;
                    } else if other.env.carbon_double > 0 || bonds[b].order == BondOrder::Double {
                        env.alkenyl += 1;
                    } else {
                        env.carbon += 1;
                        if other.env.heavy_degree == 1 {
                            env.methyl += 1;
                        }
                    }
                }
                "N" => {
                    env.nitrogen += 1;
                    if other.group == FunctionGroup::PrimaryAmineNitrogen {
                        env.amine += 1;
                    }
                }
                "S" => env.sulfur += 1,
                "P" => env.phosphorus += 1,
                "F" | "Cl" | "Br" | "I" => env.halogen += 1,
                _ => {}
            }
        }
    }
    env
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing;

    #[test]
    fn implicit_hydrogens_from_valence() {
        let ctx = testing::ethanol();
        assert_eq!(ctx.atom(0).env.hydrogen, 3);
        assert_eq!(ctx.atom(1).env.hydrogen, 2);
        assert_eq!(ctx.atom(2).env.hydrogen, 1);
        assert_eq!(ctx.atom(1).env.hydroxyl, 1);
        assert_eq!(ctx.atom(1).env.methyl, 1);
    }

    #[test]
    fn groups_inferred() {
        let ctx = testing::ethanol();
        assert_eq!(ctx.atom(0).group, FunctionGroup::AlkaneCarbon);
        assert_eq!(ctx.atom(2).group, FunctionGroup::HydroxylOxygen);

        let ester = testing::methyl_acetate();
        assert_eq!(ester.atom(1).group, FunctionGroup::EsterCarbon);
        assert_eq!(ester.atom(3).group, FunctionGroup::EsterOxygen);
        assert_eq!(ester.atom(2).group, FunctionGroup::CarbonylOxygen);
    }

    #[test]
    fn aromatic_ring_environment() {
        let ctx = testing::phenol();
        let ring = ctx.ring(0);
        assert_eq!(ring.env.oxygen, 1);
        assert_eq!(ring.env.hydroxyl, 1);
        assert_eq!(ring.env.oxygens_on(0), 1);
        assert_eq!(ring.env.oxygens_on(1), 0);
        assert!(ctx.atom(0).aromatic);
        assert_eq!(ctx.atom(1).env.hydrogen, 1);
        assert_eq!(ctx.atom(0).env.hydrogen, 0);
    }

    #[test]
    fn ring_bonds_marked_and_ringset_linked() {
        let ctx = testing::chromone(&[5, 7]);
        assert!(ctx.bonds().iter().any(|b| b.is_fusion()));
        for ring in ctx.rings() {
            assert_eq!(ring.ringset, Some(0));
        }
    }

    #[test]
    fn rejects_unbonded_ring_members() {
        let mut b = GraphBuilder::new();
        let a = b.add_atom("C");
        let c = b.add_atom("C");
        let d = b.add_atom("C");
        b.add_bond(a, c, BondOrder::Single);
        b.add_bond(c, d, BondOrder::Single);
        b.add_ring(RingType::Cyclopropane, &[a, c, d]);
        assert!(matches!(b.build(), Err(MotifError::InvalidGraph(_))));
    }

    #[test]
    fn rejects_duplicate_and_self_bonds() {
        let mut b = GraphBuilder::new();
        let a = b.add_atom("C");
        let c = b.add_atom("C");
        b.add_bond(a, c, BondOrder::Single);
        b.add_bond(c, a, BondOrder::Double);
        assert!(b.build().is_err());

        let mut b = GraphBuilder::new();
        let a = b.add_atom("C");
        b.add_bond(a, a, BondOrder::Single);
        assert!(b.build().is_err());
    }

    #[test]
    fn rejects_ring_in_two_ringsets() {
        let mut b = GraphBuilder::new();
        let atoms: Vec<_> = (0..3).map(|_| b.add_atom("C")).collect();
        for k in 0..3 {
            b.add_bond(atoms[k], atoms[(k + 1) % 3], BondOrder::Single);
        }
        let r = b.add_ring(RingType::Cyclopropane, &atoms);
        b.add_ringset(RingSetType::Other, &[r]);
        b.add_ringset(RingSetType::Other, &[r]);
        assert!(b.build().is_err());
    }

    #[test]
    fn setter_on_missing_atom_is_reported() {
        let mut b = GraphBuilder::new();
        b.add_atom("C");
        b.set_charge(5, 1);
        assert!(matches!(b.build(), Err(MotifError::InvalidInput(_))));
    }
}
