//! Local-context classifiers: ring and ringset type lookups for atoms and bonds.

use crate::graph::{Atom, Bond, GraphContext, RingId, RingSetId, RingSetType, RingType};

/// Something that can sit in rings: atoms and bonds.
pub trait RingMember {
    /// Ids of every ring containing this member.
    fn ring_ids(&self) -> &[RingId];
}

impl RingMember for Atom {
    fn ring_ids(&self) -> &[RingId] {
        &self.rings
    }
}

impl RingMember for Bond {
    fn ring_ids(&self) -> &[RingId] {
        &self.rings
    }
}

impl GraphContext {
    /// First ring containing `member` whose classified type is `wanted`.
    ///
    /// When several rings of the same type qualify, which one is returned is
    /// unspecified.
    pub fn ring_type_of<M: RingMember + ?Sized>(&self, member: &M, wanted: RingType) -> Option<RingId> {
        member
            .ring_ids()
            .iter()
            .copied()
            .find(|&r| self.ring(r).ty == wanted)
    }

    /// First ringset, reached through a ring containing `member`, whose
    /// classified type is `wanted`.
    pub fn ringset_type_of<M: RingMember + ?Sized>(
        &self,
        member: &M,
        wanted: RingSetType,
    ) -> Option<RingSetId> {
        member
            .ring_ids()
            .iter()
            .filter_map(|&r| self.ring(r).ringset)
            .find(|&s| self.ringset(s).ty == wanted)
    }

    /// Whether `member` lies in any ring whose type satisfies `pred`.
    pub fn in_ring_where<M: RingMember + ?Sized>(&self, member: &M, pred: impl Fn(RingType) -> bool) -> bool {
        member.ring_ids().iter().any(|&r| pred(self.ring(r).ty))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{BondOrder, GraphBuilder};
    use crate::testing;

    #[test]
    fn acyclic_atom_not_found() {
        let ctx = testing::ethanol();
        assert_eq!(ctx.ring_type_of(ctx.atom(0), RingType::Benzene), None);
        assert_eq!(ctx.ringset_type_of(ctx.atom(0), RingSetType::Indole), None);
        assert_eq!(ctx.ring_type_of(ctx.bond(0), RingType::Benzene), None);
    }

    #[test]
    fn ring_atom_and_bond_resolve() {
        let ctx = testing::phenol();
        let found = ctx.ring_type_of(ctx.atom(3), RingType::Benzene).unwrap();
        assert_eq!(ctx.ring(found).ty, RingType::Benzene);
        assert_eq!(ctx.ring_type_of(ctx.atom(3), RingType::Pyridine), None);
        assert_eq!(ctx.ring_type_of(ctx.bond(0), RingType::Benzene), Some(found));
        // the C-O bond is exocyclic
        let co = ctx.bond_between(0, 6).unwrap();
        assert_eq!(ctx.ring_type_of(ctx.bond(co), RingType::Benzene), None);
    }

    #[test]
    fn ringset_through_owning_ring() {
        // 5,7-dihydroxychromone: benzene ring sees ring O1 plus two hydroxyls
        let ctx = testing::chromone(&[5, 7]);
        let c5 = testing::chromone_atom(5);
        let set = ctx.ringset_type_of(ctx.atom(c5), RingSetType::Chromone).unwrap();
        assert_eq!(ctx.ringset(set).ty, RingSetType::Chromone);

        let benzene = ctx.ring_type_of(ctx.atom(c5), RingType::Benzene).unwrap();
        assert_eq!(ctx.ring(benzene).ringset, Some(set));
        assert!(ctx.ring(benzene).env.oxygen >= 3);
        assert_eq!(ctx.ringset_type_of(ctx.atom(c5), RingSetType::Coumarin), None);
    }

    #[test]
    fn fusion_bond_sees_both_rings() {
        let ctx = testing::chromone(&[]);
        let fusion = ctx.bonds().iter().find(|b| b.is_fusion()).unwrap();
        assert!(ctx.ring_type_of(fusion, RingType::Benzene).is_some());
        assert!(ctx.ring_type_of(fusion, RingType::Pyrone).is_some());
        assert!(ctx.ringset_type_of(fusion, RingSetType::Chromone).is_some());
    }

    #[test]
    fn ties_return_a_matching_ring() {
        // biphenyl: two benzene rings, atom 0 in only one of them
        let mut b = GraphBuilder::new();
        let first: Vec<_> = (0..6).map(|_| b.add_atom("C")).collect();
        let second: Vec<_> = (0..6).map(|_| b.add_atom("C")).collect();
        for ring in [&first, &second] {
            for k in 0..6 {
                b.add_bond(ring[k], ring[(k + 1) % 6], BondOrder::Aromatic);
            }
        }
        b.add_bond(first[0], second[0], BondOrder::Single);
        b.add_ring(RingType::Benzene, &first);
        b.add_ring(RingType::Benzene, &second);
        let ctx = b.build().unwrap();
        let r = ctx.ring_type_of(ctx.atom(second[3]), RingType::Benzene).unwrap();
        assert_eq!(ctx.ring(r).ty, RingType::Benzene);
        assert!(ctx.ring(r).contains(second[3]));
    }
}
