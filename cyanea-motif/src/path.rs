//! Enumerated paths, connectivity signatures, and the read-only view rules see.
//!
//! A signature spells the path's element symbols joined by bond symbols
//! (`-` single, `=` double, `#` triple, `:` aromatic), e.g. `"C-C=O"`. A path
//! and its reverse describe the same walk; the canonical orientation is the
//! one whose signature is byte-wise smaller.

use crate::error::{MotifError, Result};
use crate::graph::{
    Atom, AtomEnvironment, AtomId, Bond, BondId, BondOrder, FunctionGroup, GraphContext, Ring,
    RingSet, RingSetType, RingType,
};

/// An ordered walk through the molecule plus its connectivity signature.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path {
    signature: String,
    atoms: Vec<AtomId>,
    bonds: Vec<BondId>,
}

impl Path {
    /// Wrap a path whose signature was computed upstream.
    pub fn new(signature: impl Into<String>, atoms: Vec<AtomId>, bonds: Vec<BondId>) -> Result<Self> {
        if atoms.is_empty() {
            return Err(MotifError::InvalidPath("path has no atoms".into()));
        }
        if bonds.len() + 1 != atoms.len() {
            return Err(MotifError::InvalidPath(format!(
                "{} atoms need {} bonds, got {}",
                atoms.len(),
                atoms.len() - 1,
                bonds.len()
            )));
        }
        Ok(Path { signature: signature.into(), atoms, bonds })
    }

    /// Build the canonically oriented path through `atoms`, looking up the
    /// connecting bonds and writing the signature.
    pub fn canonical(ctx: &GraphContext, atoms: &[AtomId]) -> Result<Self> {
        if atoms.is_empty() {
            return Err(MotifError::InvalidPath("path has no atoms".into()));
        }
        if let Some(&a) = atoms.iter().find(|&&a| a >= ctx.atom_count()) {
            return Err(MotifError::InvalidPath(format!("atom {a} is not in the molecule")));
        }
        for (i, a) in atoms.iter().enumerate() {
            if atoms[i + 1..].contains(a) {
                return Err(MotifError::InvalidPath(format!("atom {a} visited twice")));
            }
        }
        let mut bonds = Vec::with_capacity(atoms.len().saturating_sub(1));
        for pair in atoms.windows(2) {
            let bond = ctx.bond_between(pair[0], pair[1]).ok_or_else(|| {
                MotifError::InvalidPath(format!("atoms {} and {} are not bonded", pair[0], pair[1]))
            })?;
            bonds.push(bond);
        }

        Ok(Path::oriented(ctx, atoms.to_vec(), bonds))
    }

    /// Orient an already validated walk; palindromes keep the given order.
    pub(crate) fn oriented(ctx: &GraphContext, mut atoms: Vec<AtomId>, mut bonds: Vec<BondId>) -> Self {
        let forward = signature_of(ctx, &atoms, &bonds);
        let backward = reverse_signature(&forward);
        if backward < forward {
            atoms.reverse();
            bonds.reverse();
            Path { signature: backward, atoms, bonds }
        } else {
            Path { signature: forward, atoms, bonds }
        }
    }

    pub fn signature(&self) -> &str {
        &self.signature
    }

    pub fn atoms(&self) -> &[AtomId] {
        &self.atoms
    }

    pub fn bonds(&self) -> &[BondId] {
        &self.bonds
    }

    /// Number of atoms on the path.
    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// Borrow the path against its molecule for rule evaluation.
    pub fn view<'a>(&'a self, ctx: &'a GraphContext) -> PathView<'a> {
        PathView::new(ctx, &self.signature, &self.atoms, &self.bonds)
    }
}

/// Signature of the walk `atoms`/`bonds` in the given orientation.
pub fn signature_of(ctx: &GraphContext, atoms: &[AtomId], bonds: &[BondId]) -> String {
    let mut sig = String::with_capacity(atoms.len() * 3);
    for (i, &a) in atoms.iter().enumerate() {
        if i > 0 {
            sig.push(ctx.bond(bonds[i - 1]).order.symbol());
        }
        sig.push_str(&ctx.atom(a).symbol);
    }
    sig
}

/// Split a signature into element and bond tokens.
fn tokens(signature: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut start = None;
    for (i, c) in signature.char_indices() {
        if BondOrder::from_symbol(c).is_some() {
            if let Some(s) = start.take() {
                out.push(&signature[s..i]);
            }
            out.push(&signature[i..i + c.len_utf8()]);
        } else if c.is_ascii_uppercase() {
            if let Some(s) = start.take() {
                out.push(&signature[s..i]);
            }
            start = Some(i);
        } else if start.is_none() {
            start = Some(i);
        }
    }
    if let Some(s) = start {
        out.push(&signature[s..]);
    }
    out
}

/// The signature read from the other end.
pub fn reverse_signature(signature: &str) -> String {
    tokens(signature).into_iter().rev().collect()
}

/// Whether `signature` is already in canonical orientation.
pub fn is_canonical(signature: &str) -> bool {
    signature <= reverse_signature(signature).as_str()
}

/// Number of atoms spelled by a signature.
pub fn signature_atom_count(signature: &str) -> usize {
    tokens(signature)
        .iter()
        .filter(|t| t.chars().next().map_or(false, |c| BondOrder::from_symbol(c).is_none()))
        .count()
}

/// Read-only view of one path against its molecule, as seen by rule predicates.
///
/// Atom and bond accessors take positions along the path (0-based), not
/// molecule ids.
#[derive(Debug, Clone, Copy)]
pub struct PathView<'a> {
    ctx: &'a GraphContext,
    signature: &'a str,
    atoms: &'a [AtomId],
    bonds: &'a [BondId],
}

impl<'a> PathView<'a> {
    pub fn new(
        ctx: &'a GraphContext,
        signature: &'a str,
        atoms: &'a [AtomId],
        bonds: &'a [BondId],
    ) -> Self {
        PathView { ctx, signature, atoms, bonds }
    }

    pub fn ctx(&self) -> &'a GraphContext {
        self.ctx
    }

    pub fn signature(&self) -> &'a str {
        self.signature
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// Molecule id of the atom at path position `i`.
    pub fn atom_id(&self, i: usize) -> AtomId {
        self.atoms[i]
    }

    pub fn atom(&self, i: usize) -> &'a Atom {
        self.ctx.atom(self.atoms[i])
    }

    pub fn bond(&self, i: usize) -> &'a Bond {
        self.ctx.bond(self.bonds[i])
    }

    pub fn env(&self, i: usize) -> &'a AtomEnvironment {
        &self.atom(i).env
    }

    pub fn group(&self, i: usize) -> FunctionGroup {
        self.atom(i).group
    }

    pub fn charge(&self, i: usize) -> i8 {
        self.atom(i).charge
    }

    pub fn in_ring(&self, i: usize) -> bool {
        self.atom(i).in_ring
    }

    pub fn aromatic(&self, i: usize) -> bool {
        self.atom(i).aromatic
    }

    pub fn bond_in_ring(&self, i: usize) -> bool {
        self.bond(i).in_ring
    }

    /// Ring of type `ty` containing the atom at position `i`.
    pub fn ring(&self, i: usize, ty: RingType) -> Option<&'a Ring> {
        self.ctx.ring_type_of(self.atom(i), ty).map(|r| self.ctx.ring(r))
    }

    pub fn in_ring_of(&self, i: usize, ty: RingType) -> bool {
        self.ring(i, ty).is_some()
    }

    /// Atom at position `i` lies in a ring of any of `tys`.
    pub fn in_any_ring_of(&self, i: usize, tys: &[RingType]) -> bool {
        self.ctx.in_ring_where(self.atom(i), |t| tys.contains(&t))
    }

    /// Atom at position `i` lies in an aromatic ring.
    pub fn in_aromatic_ring(&self, i: usize) -> bool {
        self.ctx.in_ring_where(self.atom(i), RingType::is_aromatic)
    }

    /// Ring of type `ty` containing the bond at position `i`.
    pub fn bond_ring(&self, i: usize, ty: RingType) -> Option<&'a Ring> {
        self.ctx.ring_type_of(self.bond(i), ty).map(|r| self.ctx.ring(r))
    }

    /// Ringset of type `ty` reached from the atom at position `i`.
    pub fn ringset(&self, i: usize, ty: RingSetType) -> Option<&'a RingSet> {
        self.ctx.ringset_type_of(self.atom(i), ty).map(|s| self.ctx.ringset(s))
    }

    pub fn in_ringset_of(&self, i: usize, ty: RingSetType) -> bool {
        self.ringset(i, ty).is_some()
    }

    /// The atom sits in a ring of type `ring` that belongs to a ringset of
    /// type `set`; returns both.
    pub fn fused_ring(&self, i: usize, set: RingSetType, ring: RingType) -> Option<(&'a RingSet, &'a Ring)> {
        self.atom(i).rings.iter().find_map(|&r| {
            let candidate = self.ctx.ring(r);
            if candidate.ty != ring {
                return None;
            }
            let owner = self.ctx.ringset(candidate.ringset?);
            (owner.ty == set).then_some((owner, candidate))
        })
    }

    /// Members of `set` other than `ring`.
    pub fn partner_rings(&self, set: &'a RingSet, ring: &'a Ring) -> impl Iterator<Item = &'a Ring> + 'a {
        let ctx = self.ctx;
        set.rings
            .iter()
            .filter(move |&&r| r != ring.id)
            .map(move |&r| ctx.ring(r))
    }

    /// Non-hydrogen neighbors of the atom at position `i` with element
    /// `element` that are neither on the path nor reached through a path bond.
    pub fn branches(&self, i: usize, element: &str) -> Vec<&'a Atom> {
        let mut excluded = Vec::with_capacity(2);
        if i > 0 {
            excluded.push(self.bonds[i - 1]);
        }
        if i < self.bonds.len() {
            excluded.push(self.bonds[i]);
        }
        self.ctx
            .branch_atoms(self.atoms[i], &excluded, element)
            .into_iter()
            .filter(|a| !self.atoms.contains(a))
            .map(|a| self.ctx.atom(a))
            .collect()
    }

    pub fn branch_count(&self, i: usize, element: &str) -> usize {
        self.branches(i, element).len()
    }

    /// Some `element` branch of the atom at position `i` satisfies `pred`.
    pub fn any_branch(&self, i: usize, element: &str, pred: impl Fn(&Atom) -> bool) -> bool {
        self.branches(i, element).into_iter().any(|a| pred(a))
    }

    /// Atoms at positions `i` and `k` share at least one ring.
    pub fn same_ring(&self, i: usize, k: usize) -> bool {
        let other = &self.atom(k).rings;
        self.atom(i).rings.iter().any(|r| other.contains(r))
    }

    /// Whether every atom of the path lies in one common ring.
    pub fn all_in_one_ring(&self) -> bool {
        self.atom(0).rings.iter().any(|&r| {
            let ring = self.ctx.ring(r);
            self.atoms.iter().all(|&a| ring.contains(a))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing;

    #[test]
    fn reverse_handles_two_letter_elements() {
        assert_eq!(reverse_signature("C:C-Cl"), "Cl-C:C");
        assert_eq!(reverse_signature("Br-C=O"), "O=C-Br");
        assert_eq!(reverse_signature("C-O-Si"), "Si-O-C");
        assert_eq!(signature_atom_count("C-O-Si"), 3);
        assert_eq!(signature_atom_count("C:C:C:C:C:C"), 6);
    }

    #[test]
    fn canonical_orientation_is_smaller() {
        let ctx = testing::ethanol();
        let path = Path::canonical(&ctx, &[2, 1, 0]).unwrap();
        assert_eq!(path.signature(), "C-C-O");
        assert_eq!(path.atoms(), &[0, 1, 2]);
        assert!(is_canonical("C-C=O"));
        assert!(!is_canonical("O=C-C"));
        assert!(is_canonical("C-O-C"));
    }

    #[test]
    fn canonical_rejects_broken_walks() {
        let ctx = testing::ethanol();
        assert!(Path::canonical(&ctx, &[0, 2]).is_err());
        assert!(Path::canonical(&ctx, &[0, 1, 0]).is_err());
        assert!(Path::canonical(&ctx, &[0, 9]).is_err());
        assert!(Path::new("C-C", vec![0, 1], vec![]).is_err());
    }

    #[test]
    fn branches_skip_ring_closure_atoms() {
        let ctx = testing::phenol();
        // walk five ring atoms; atom 5 closes back onto atom 0
        let path = Path::canonical(&ctx, &[0, 1, 2, 3, 4, 5]).unwrap();
        let view = path.view(&ctx);
        let first = view.atoms.iter().position(|&a| a == 0).unwrap();
        assert!(view.branches(first, "C").is_empty());
        assert_eq!(view.branch_count(first, "O"), 1);
        assert!(view.all_in_one_ring());
    }

    #[test]
    fn fused_ring_and_partners() {
        let ctx = testing::chromone(&[5, 7]);
        let c5 = testing::chromone_atom(5);
        let c6 = testing::chromone_atom(6);
        let path = Path::canonical(&ctx, &[c5, c6]).unwrap();
        let view = path.view(&ctx);
        let (set, benzene) = view.fused_ring(0, RingSetType::Chromone, RingType::Benzene).unwrap();
        assert_eq!(set.ty, RingSetType::Chromone);
        assert!(benzene.env.oxygen >= 3);
        let partners: Vec<_> = view.partner_rings(set, benzene).collect();
        assert_eq!(partners.len(), 1);
        assert_eq!(partners[0].ty, RingType::Pyrone);
        assert!(view.fused_ring(0, RingSetType::Coumarin, RingType::Benzene).is_none());
    }
}
