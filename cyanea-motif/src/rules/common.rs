//! Predicate building blocks shared by the tier tables.
//!
//! Everything here takes path positions, not molecule ids.

use crate::graph::{FunctionGroup as G, Ring, RingSetType, RingType};
use crate::path::PathView;

/// A test on one path position.
pub type AtomTest = fn(&PathView<'_>, usize) -> bool;

/// No atom on the path carries a formal charge.
pub fn neutral(p: &PathView<'_>) -> bool {
    (0..p.len()).all(|i| p.charge(i) == 0)
}

/// No atom on the path is a ring member.
pub fn acyclic(p: &PathView<'_>) -> bool {
    (0..p.len()).all(|i| !p.in_ring(i))
}

/// No bond on the path is a ring bond.
pub fn open_chain(p: &PathView<'_>) -> bool {
    (0..p.len().saturating_sub(1)).all(|i| !p.bond_in_ring(i))
}

/// `test` holds at the first or at the last atom.
pub fn either_end(p: &PathView<'_>, test: AtomTest) -> bool {
    test(p, 0) || test(p, p.len() - 1)
}

/// `test` holds at both terminal atoms.
pub fn both_ends(p: &PathView<'_>, test: AtomTest) -> bool {
    test(p, 0) && test(p, p.len() - 1)
}

/// `a` holds at one end and `b` at the other, in either orientation.
pub fn ends_pair(p: &PathView<'_>, a: AtomTest, b: AtomTest) -> bool {
    let last = p.len() - 1;
    (a(p, 0) && b(p, last)) || (a(p, last) && b(p, 0))
}

/// Number of path atoms satisfying `test`.
pub fn count(p: &PathView<'_>, test: AtomTest) -> usize {
    (0..p.len()).filter(|&i| test(p, i)).count()
}

pub fn hydroxyl(p: &PathView<'_>, i: usize) -> bool {
    p.group(i) == G::HydroxylOxygen
}

pub fn methyl(p: &PathView<'_>, i: usize) -> bool {
    p.atom(i).is_methyl()
}

/// sp3 carbon outside any ring.
pub fn alkyl(p: &PathView<'_>, i: usize) -> bool {
    p.group(i) == G::AlkaneCarbon && !p.in_ring(i)
}

pub fn aromatic(p: &PathView<'_>, i: usize) -> bool {
    p.aromatic(i)
}

pub fn benzene(p: &PathView<'_>, i: usize) -> bool {
    p.in_ring_of(i, RingType::Benzene)
}

pub fn carbonyl_carbon(p: &PathView<'_>, i: usize) -> bool {
    p.group(i).is_carbonyl_carbon()
}

/// Atom bears an exocyclic or chain C=O oxygen.
pub fn oxo(p: &PathView<'_>, i: usize) -> bool {
    p.env(i).oxygen_double > 0
}

pub fn amine(p: &PathView<'_>, i: usize) -> bool {
    p.group(i).is_amine()
}

/// Ring atom of a furanose or pyranose skeleton.
pub fn sugar(p: &PathView<'_>, i: usize) -> bool {
    p.ctx().in_ring_where(p.atom(i), RingType::is_sugar_skeleton)
}

/// Anomeric carbon: a sugar ring carbon bonded to two oxygens.
pub fn anomeric(p: &PathView<'_>, i: usize) -> bool {
    p.atom(i).is("C") && sugar(p, i) && p.env(i).oxygen_single >= 2
}

pub fn halogenated(p: &PathView<'_>, i: usize) -> bool {
    p.env(i).halogens() > 0
}

/// Carbon with exactly `n` hydrogens.
pub fn hydrogens(p: &PathView<'_>, i: usize, n: u8) -> bool {
    p.env(i).hydrogen == n
}

/// Unbranched acyclic sp3 carbon: only its two path neighbors are heavy.
pub fn chain_link(p: &PathView<'_>, i: usize) -> bool {
    alkyl(p, i) && p.env(i).heavy_degree == 2
}

/// Positions `from..to` are all [`chain_link`]s.
pub fn straight(p: &PathView<'_>, from: usize, to: usize) -> bool {
    (from..to).all(|i| chain_link(p, i))
}

/// Isopropyl-type fork: an acyclic sp3 carbon holding two methyls.
pub fn iso_fork(p: &PathView<'_>, i: usize) -> bool {
    alkyl(p, i) && p.env(i).heavy_degree == 3 && p.env(i).methyl == 2
}

/// Positions `from..to` are acyclic CF2 or CF3 carbons.
pub fn fluorinated(p: &PathView<'_>, from: usize, to: usize) -> bool {
    (from..to).all(|i| p.atom(i).is("C") && !p.in_ring(i) && p.env(i).fluorine >= 2)
}

pub fn ether_oxygen(p: &PathView<'_>, i: usize) -> bool {
    p.group(i) == G::EtherOxygen
}

pub fn ester_oxygen(p: &PathView<'_>, i: usize) -> bool {
    p.group(i) == G::EsterOxygen
}

pub fn primary_amine(p: &PathView<'_>, i: usize) -> bool {
    p.group(i) == G::PrimaryAmineNitrogen
}

/// Secondary or tertiary amine nitrogen.
pub fn substituted_amine(p: &PathView<'_>, i: usize) -> bool {
    matches!(p.group(i), G::SecondaryAmineNitrogen | G::TertiaryAmineNitrogen)
}

pub fn amide_nitrogen(p: &PathView<'_>, i: usize) -> bool {
    p.group(i) == G::AmideNitrogen
}

pub fn quaternary_nitrogen(p: &PathView<'_>, i: usize) -> bool {
    p.group(i) == G::QuaternaryNitrogen
}

pub fn thiol(p: &PathView<'_>, i: usize) -> bool {
    p.group(i) == G::ThiolSulfur
}

pub fn thioether(p: &PathView<'_>, i: usize) -> bool {
    p.group(i) == G::SulfideSulfur
}

/// Sulfide sulfur of a thioester.
pub fn thioester_sulfur(p: &PathView<'_>, i: usize) -> bool {
    thioether(p, i) && p.env(i).carbonyl > 0
}

/// Sulfonyl or sulfinyl sulfur.
pub fn sulfonyl(p: &PathView<'_>, i: usize) -> bool {
    matches!(p.group(i), G::SulfonylSulfur | G::SulfinylSulfur)
}

/// Acyclic sp3 carbon carrying exactly one methyl branch off the path.
pub fn methyl_branch(p: &PathView<'_>, i: usize) -> bool {
    alkyl(p, i) && p.env(i).heavy_degree == 3 && p.env(i).methyl >= 1
}

pub fn carboxyl_carbon(p: &PathView<'_>, i: usize) -> bool {
    p.group(i) == G::CarboxylCarbon
}

pub fn ester_carbon(p: &PathView<'_>, i: usize) -> bool {
    p.group(i) == G::EsterCarbon
}

pub fn amide_carbon(p: &PathView<'_>, i: usize) -> bool {
    p.group(i) == G::AmideCarbon
}

pub fn ketone_carbon(p: &PathView<'_>, i: usize) -> bool {
    p.group(i) == G::KetoneCarbon
}

pub fn aldehyde_carbon(p: &PathView<'_>, i: usize) -> bool {
    p.group(i) == G::AldehydeCarbon
}

/// `a` at `i` and `b` at `j`, or the other way round.
pub fn pair_at(p: &PathView<'_>, i: usize, j: usize, a: AtomTest, b: AtomTest) -> bool {
    (a(p, i) && b(p, j)) || (a(p, j) && b(p, i))
}

/// `test` holds at both `i` and `j`.
pub fn both_at(p: &PathView<'_>, i: usize, j: usize, test: AtomTest) -> bool {
    test(p, i) && test(p, j)
}

/// One ring holds every path atom in `from..to`.
pub fn ring_span(p: &PathView<'_>, from: usize, to: usize) -> bool {
    let ctx = p.ctx();
    p.atom(from).rings.iter().map(|&r| ctx.ring(r)).any(|ring| (from..to).all(|i| ring.contains(p.atom_id(i))))
}

/// Ether oxygen carrying a methyl.
pub fn methoxy(p: &PathView<'_>, i: usize) -> bool {
    ether_oxygen(p, i) && p.env(i).methyl > 0
}

/// Acyclic CH2 carbon bearing a hydroxyl.
pub fn hydroxymethyl(p: &PathView<'_>, i: usize) -> bool {
    alkyl(p, i) && p.env(i).hydroxyl > 0 && hydrogens(p, i, 2)
}

pub fn cyano(p: &PathView<'_>, i: usize) -> bool {
    p.group(i) == G::NitrileCarbon
}

/// Chain alkene carbon outside any ring.
pub fn vinyl(p: &PathView<'_>, i: usize) -> bool {
    p.group(i) == G::AlkeneCarbon && !p.in_ring(i)
}

pub fn trifluoromethyl(p: &PathView<'_>, i: usize) -> bool {
    p.atom(i).is("C") && p.env(i).fluorine == 3
}

pub fn nitro(p: &PathView<'_>, i: usize) -> bool {
    p.group(i) == G::NitroNitrogen
}

/// Neither terminal bond is a ring bond.
pub fn exocyclic_ends(p: &PathView<'_>) -> bool {
    let last = p.len().saturating_sub(2);
    !p.bond_in_ring(0) && !p.bond_in_ring(last)
}

/// One ring of type `ty` holds every path atom in `from..to`.
pub fn ring_run(p: &PathView<'_>, from: usize, to: usize, ty: RingType) -> bool {
    let ctx = p.ctx();
    p.atom(from)
        .rings
        .iter()
        .map(|&r| ctx.ring(r))
        .any(|ring| ring.ty == ty && (from..to).all(|i| ring.contains(p.atom_id(i))))
}

/// No path atom in `from..to` is a ring member.
pub fn open_run(p: &PathView<'_>, from: usize, to: usize) -> bool {
    (from..to).all(|i| !p.in_ring(i))
}

/// Every path atom in `from..to` lies in some ring of a `set` ringset.
pub fn ringset_run(p: &PathView<'_>, from: usize, to: usize, set: RingSetType) -> bool {
    (from..to).all(|i| p.in_ringset_of(i, set))
}

/// One ring of type `ty`, fused into a `set` ringset, holds every path atom in `from..to`.
pub fn fused_run(p: &PathView<'_>, from: usize, to: usize, set: RingSetType, ty: RingType) -> bool {
    let ctx = p.ctx();
    p.atom(from).rings.iter().map(|&r| ctx.ring(r)).any(|ring| {
        ring.ty == ty
            && ring.ringset.map_or(false, |s| ctx.ringset(s).ty == set)
            && (from..to).all(|i| ring.contains(p.atom_id(i)))
    })
}

/// Size of the smallest ring containing the atom at position `i`.
pub fn smallest_ring(p: &PathView<'_>, i: usize) -> Option<usize> {
    let ctx = p.ctx();
    p.atom(i).rings.iter().map(|&r| ctx.ring(r).size()).min()
}

/// The ring of type `ty` holding every path atom, if the path walks one.
pub fn walked_ring<'a>(p: &PathView<'a>, ty: RingType) -> Option<&'a Ring> {
    let ctx = p.ctx();
    p.atom(0).rings.iter().map(|&r| ctx.ring(r)).find(|ring| {
        ring.ty == ty && (0..p.len()).all(|i| ring.contains(p.atom_id(i)))
    })
}

/// Total outside oxygens on the single benzene ring holding path position `i`.
pub fn benzene_oxygens(p: &PathView<'_>, i: usize) -> u8 {
    p.ring(i, RingType::Benzene).map_or(0, |r| r.env.oxygen)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::Path;
    use crate::testing;

    #[test]
    fn end_helpers_are_orientation_free() {
        let ctx = testing::ethanol();
        let path = Path::canonical(&ctx, &[0, 1, 2]).unwrap();
        let view = path.view(&ctx);
        assert!(either_end(&view, hydroxyl));
        assert!(!both_ends(&view, hydroxyl));
        assert!(ends_pair(&view, hydroxyl, methyl));
        assert!(ends_pair(&view, methyl, hydroxyl));
        assert!(neutral(&view) && acyclic(&view) && open_chain(&view));
        assert_eq!(count(&view, alkyl), 2);
    }

    #[test]
    fn ring_helpers() {
        let ctx = testing::phenol();
        let path = Path::canonical(&ctx, &[0, 6]).unwrap();
        let view = path.view(&ctx);
        assert!(benzene(&view, 0));
        assert_eq!(smallest_ring(&view, 0), Some(6));
        assert_eq!(smallest_ring(&view, 1), None);
        assert_eq!(benzene_oxygens(&view, 0), 1);
        assert!(!sugar(&view, 0));
    }

    #[test]
    fn fused_ring_runs() {
        // chromone: 3 C4, 4 C4a, 5 C5, 6 C6, 10 the oxo oxygen
        let ctx = testing::chromone(&[]);
        let benzo = Path::canonical(&ctx, &[4, 5, 6]).unwrap();
        let view = benzo.view(&ctx);
        assert!(ring_run(&view, 0, 3, RingType::Benzene));
        assert!(!ring_run(&view, 0, 3, RingType::Pyrone));
        assert!(fused_run(&view, 0, 3, RingSetType::Chromone, RingType::Benzene));
        assert!(!fused_run(&view, 0, 3, RingSetType::Coumarin, RingType::Benzene));
        assert!(ring_span(&view, 0, 3));
        assert!(walked_ring(&view, RingType::Benzene).is_some());

        let junction = Path::canonical(&ctx, &[3, 4, 5]).unwrap();
        let view = junction.view(&ctx);
        assert!(ringset_run(&view, 0, 3, RingSetType::Chromone));
        assert!(!ring_span(&view, 0, 3));
        assert!(!ring_run(&view, 0, 3, RingType::Benzene));
        assert!(!fused_run(&view, 0, 3, RingSetType::Chromone, RingType::Pyrone));
        assert!(walked_ring(&view, RingType::Pyrone).is_none());
        assert!(!exocyclic_ends(&view));
        assert!(!open_run(&view, 0, 3));
    }

    #[test]
    fn exocyclic_oxo() {
        let ctx = testing::chromone(&[]);
        let path = Path::canonical(&ctx, &[10, 3]).unwrap();
        let view = path.view(&ctx);
        assert!(exocyclic_ends(&view));
        assert!(either_end(&view, oxo));
        assert!(!both_ends(&view, oxo));

        let path = Path::canonical(&ctx, &[10, 3, 2]).unwrap();
        assert!(!exocyclic_ends(&path.view(&ctx)));
    }

    #[test]
    fn chain_shapes() {
        // 0 C, 1 the fork, 2 C, 3 C, 4 C, 5 O
        let ctx = testing::smiles("CC(C)CCO", &[], &[]);
        let path = Path::canonical(&ctx, &[1, 3, 4, 5]).unwrap();
        let view = path.view(&ctx);
        assert!(either_end(&view, iso_fork));
        assert!(straight(&view, 1, 3));
        assert!(!straight(&view, 0, 3));
        assert!(open_run(&view, 0, 4));

        let ctx = testing::smiles("FC(F)(F)C(F)(F)CO", &[], &[]);
        let perfluoro = Path::canonical(&ctx, &[1, 4]).unwrap();
        assert!(fluorinated(&perfluoro.view(&ctx), 0, 2));
        let mixed = Path::canonical(&ctx, &[4, 7]).unwrap();
        assert!(!fluorinated(&mixed.view(&ctx), 0, 2));
    }
}
