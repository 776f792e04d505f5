//! Branch extraction: substituents hanging off a path atom.

use crate::graph::{AtomId, BondId, GraphContext};

impl GraphContext {
    /// Non-hydrogen neighbors of `pivot` with element `element`, ignoring the
    /// neighbors reached through `excluded` (the path's own bonds at `pivot`).
    pub fn branch_atoms(&self, pivot: AtomId, excluded: &[BondId], element: &str) -> Vec<AtomId> {
        self.neighbors(pivot)
            .filter(|(_, bond)| !excluded.contains(bond))
            .map(|(n, _)| n)
            .filter(|&n| {
                let atom = self.atom(n);
                !atom.is_hydrogen() && atom.symbol == element
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::{BondOrder, GraphBuilder};
    use crate::testing;

    #[test]
    fn excludes_path_bonds_and_hydrogens() {
        // H3C-CH(OH)-CH3 with an explicit hydrogen on the middle carbon
        let mut b = GraphBuilder::new();
        let c1 = b.add_atom("C");
        let c2 = b.add_atom_with_h("C", 0);
        let c3 = b.add_atom("C");
        let o = b.add_atom("O");
        let h = b.add_atom("H");
        let b1 = b.add_bond(c1, c2, BondOrder::Single);
        b.add_bond(c2, c3, BondOrder::Single);
        b.add_bond(c2, o, BondOrder::Single);
        b.add_bond(c2, h, BondOrder::Single);
        let ctx = b.build().unwrap();

        // path c1-c2: c3 and o are branches of c2, h never is
        assert_eq!(ctx.branch_atoms(c2, &[b1], "C"), vec![c3]);
        assert_eq!(ctx.branch_atoms(c2, &[b1], "O"), vec![o]);
        assert!(ctx.branch_atoms(c2, &[b1], "H").is_empty());
        assert!(ctx.branch_atoms(c2, &[b1], "N").is_empty());
        assert!(!ctx.branch_atoms(c2, &[b1], "C").contains(&c1));
    }

    #[test]
    fn no_branches_on_terminal_atom() {
        let ctx = testing::ethanol();
        let path_bond = ctx.bond_between(1, 2).unwrap();
        assert!(ctx.branch_atoms(2, &[path_bond], "C").is_empty());
    }
}
