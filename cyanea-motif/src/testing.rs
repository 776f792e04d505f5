//! Hand-built molecules shared by the unit tests.
//!
//! Atom ids are fixed by construction order and documented per fixture, so
//! tests can name path positions directly.

use std::collections::{BTreeMap, VecDeque};

use crate::graph::{AtomId, BondOrder, GraphBuilder, GraphContext, RingSetType, RingType};

use BondOrder::{Aromatic, Double, Single};

fn chain(b: &mut GraphBuilder, n: usize) -> Vec<AtomId> {
    let atoms: Vec<AtomId> = (0..n).map(|_| b.add_atom("C")).collect();
    for w in atoms.windows(2) {
        b.add_bond(w[0], w[1], Single);
    }
    atoms
}

fn aromatic_ring(b: &mut GraphBuilder, atoms: &[AtomId]) {
    for i in 0..atoms.len() {
        b.add_bond(atoms[i], atoms[(i + 1) % atoms.len()], Aromatic);
    }
}

fn benzene(b: &mut GraphBuilder) -> Vec<AtomId> {
    let ring: Vec<AtomId> = (0..6).map(|_| b.add_atom("C")).collect();
    aromatic_ring(b, &ring);
    b.add_ring(RingType::Benzene, &ring);
    ring
}

/// 0 CH3, 1 CH2, 2 OH
pub fn ethanol() -> GraphContext {
    let mut b = GraphBuilder::new();
    let c = chain(&mut b, 2);
    let o = b.add_atom("O");
    b.add_bond(c[1], o, Single);
    b.build().unwrap()
}

/// Benzene ring 0..=5 with hydroxyl oxygens appended (6, 7, ...) on the
/// listed ring atoms, in order.
pub fn hydroxybenzene(positions: &[usize]) -> GraphContext {
    let mut b = GraphBuilder::new();
    let ring = benzene(&mut b);
    for &pos in positions {
        let o = b.add_atom("O");
        b.add_bond(ring[pos], o, Single);
    }
    b.build().unwrap()
}

/// Ring 0..=5, O6 on atom 0.
pub fn phenol() -> GraphContext {
    hydroxybenzene(&[0])
}

/// Ring 0..=5, O6 on atom 0, O7 on atom 1.
pub fn catechol() -> GraphContext {
    hydroxybenzene(&[0, 1])
}

/// 0 CH3, 1 acyl C, 2 =O, 3 ester O, 4 OCH3
pub fn methyl_acetate() -> GraphContext {
    let mut b = GraphBuilder::new();
    let c = chain(&mut b, 2);
    let oxo = b.add_atom("O");
    let ester = b.add_atom("O");
    let me = b.add_atom("C");
    b.add_bond(c[1], oxo, Double);
    b.add_bond(c[1], ester, Single);
    b.add_bond(ester, me, Single);
    b.build().unwrap()
}

/// 0 CH3, 1 carboxyl C, 2 =O, 3 OH
pub fn acetic_acid() -> GraphContext {
    let mut b = GraphBuilder::new();
    let c = chain(&mut b, 2);
    let oxo = b.add_atom("O");
    let oh = b.add_atom("O");
    b.add_bond(c[1], oxo, Double);
    b.add_bond(c[1], oh, Single);
    b.build().unwrap()
}

/// Chromone (4H-chromen-4-one) with hydroxyls on the listed ring positions.
///
/// 0 O1, 1 C2, 2 C3, 3 C4, 4 C4a, 5 C5, 6 C6, 7 C7, 8 C8, 9 C8a, 10 the C4
/// oxo oxygen, then one hydroxyl oxygen per position in order. Ring 0 is the
/// pyrone, ring 1 the benzene, ringset 0 the chromone.
pub fn chromone(hydroxy_positions: &[usize]) -> GraphContext {
    let mut b = GraphBuilder::new();
    let o1 = b.add_atom("O");
    let c2 = b.add_atom("C");
    let c3 = b.add_atom("C");
    let c4 = b.add_atom("C");
    let benzo: Vec<AtomId> = (0..6).map(|_| b.add_atom("C")).collect();
    let (c4a, c8a) = (benzo[0], benzo[5]);
    let oxo = b.add_atom("O");

    b.add_bond(o1, c2, Single);
    b.add_bond(c2, c3, Double);
    b.add_bond(c3, c4, Single);
    b.add_bond(c4, c4a, Single);
    aromatic_ring(&mut b, &benzo);
    b.add_bond(c8a, o1, Single);
    b.add_bond(c4, oxo, Double);
    for &pos in hydroxy_positions {
        let o = b.add_atom("O");
        b.add_bond(chromone_atom(pos), o, Single);
    }

    let pyrone = b.add_ring(RingType::Pyrone, &[o1, c2, c3, c4, c4a, c8a]);
    let benzene = b.add_ring(RingType::Benzene, &benzo);
    b.add_ringset(RingSetType::Chromone, &[pyrone, benzene]);
    b.build().unwrap()
}

/// Atom id of a chromone ring position (2..=8) in [`chromone`].
pub fn chromone_atom(position: usize) -> AtomId {
    match position {
        2..=4 => position - 1,
        5..=8 => position,
        _ => panic!("chromone position {position} carries no substituent"),
    }
}

/// C0=C1
pub fn ethylene() -> GraphContext {
    alkene(2, &[(0, 1)])
}

/// C0=C1-O2
pub fn vinyl_alcohol() -> GraphContext {
    let mut b = GraphBuilder::new();
    let c = b.add_atom("C");
    let c1 = b.add_atom("C");
    let o = b.add_atom("O");
    b.add_bond(c, c1, Double);
    b.add_bond(c1, o, Single);
    b.build().unwrap()
}

/// C0-C1=C2-C3
pub fn but_2_ene() -> GraphContext {
    alkene(4, &[(1, 2)])
}

/// C0=C1-C2-C3
pub fn but_1_ene() -> GraphContext {
    alkene(4, &[(0, 1)])
}

/// C0=C1-C2=C3
pub fn butadiene() -> GraphContext {
    alkene(4, &[(0, 1), (2, 3)])
}

/// C0=C1-C2-C3=C4-C5
pub fn hexa_1_4_diene() -> GraphContext {
    alkene(6, &[(0, 1), (3, 4)])
}

fn alkene(n: usize, doubles: &[(usize, usize)]) -> GraphContext {
    let mut b = GraphBuilder::new();
    let c: Vec<AtomId> = (0..n).map(|_| b.add_atom("C")).collect();
    for i in 0..n - 1 {
        let order = if doubles.contains(&(i, i + 1)) { Double } else { Single };
        b.add_bond(c[i], c[i + 1], order);
    }
    b.build().unwrap()
}

/// Ring A 0..=5, ring B 4, 6, 7, 8, 9, 5; the 4-5 bond is the fusion bond.
pub fn naphthalene() -> GraphContext {
    let mut b = GraphBuilder::new();
    let c: Vec<AtomId> = (0..10).map(|_| b.add_atom("C")).collect();
    let a = [c[0], c[1], c[2], c[3], c[4], c[5]];
    aromatic_ring(&mut b, &a);
    for (x, y) in [(4, 6), (6, 7), (7, 8), (8, 9), (9, 5)] {
        b.add_bond(c[x], c[y], Aromatic);
    }
    let ring_a = b.add_ring(RingType::Benzene, &a);
    let ring_b = b.add_ring(RingType::Benzene, &[c[4], c[6], c[7], c[8], c[9], c[5]]);
    b.add_ringset(RingSetType::Naphthalene, &[ring_a, ring_b]);
    b.build().unwrap()
}

/// 0 N, 1 alpha C, 2 carboxyl C, 3 =O, 4 OH
pub fn glycine() -> GraphContext {
    let mut b = GraphBuilder::new();
    let n = b.add_atom("N");
    let ca = b.add_atom("C");
    let c = b.add_atom("C");
    let oxo = b.add_atom("O");
    let oh = b.add_atom("O");
    b.add_bond(n, ca, Single);
    b.add_bond(ca, c, Single);
    b.add_bond(c, oxo, Double);
    b.add_bond(c, oh, Single);
    b.build().unwrap()
}

/// Ring C0..C4 + O5 (tetrahydropyran), hydroxyl O6 on C0.
pub fn tetrahydropyranol() -> GraphContext {
    let mut b = GraphBuilder::new();
    let c = chain(&mut b, 5);
    let o5 = b.add_atom("O");
    b.add_bond(c[4], o5, Single);
    b.add_bond(o5, c[0], Single);
    let oh = b.add_atom("O");
    b.add_bond(c[0], oh, Single);
    b.add_ring(RingType::Tetrahydropyran, &[c[0], c[1], c[2], c[3], c[4], o5]);
    b.build().unwrap()
}

/// 0 CH3, 1 ketone C, 2 =O, 3 carboxyl C, 4 =O, 5 OH
pub fn pyruvic_acid() -> GraphContext {
    let mut b = GraphBuilder::new();
    let me = b.add_atom("C");
    let k = b.add_atom("C");
    let ko = b.add_atom("O");
    let acid = b.add_atom("C");
    let ao = b.add_atom("O");
    let oh = b.add_atom("O");
    b.add_bond(me, k, Single);
    b.add_bond(k, ko, Double);
    b.add_bond(k, acid, Single);
    b.add_bond(acid, ao, Double);
    b.add_bond(acid, oh, Single);
    b.build().unwrap()
}

/// Ring 0..=5, CH2 6 on atom 0, CH2 7, NH2 8
pub fn phenethylamine() -> GraphContext {
    let mut b = GraphBuilder::new();
    let ring = benzene(&mut b);
    let c6 = b.add_atom("C");
    let c7 = b.add_atom("C");
    let n = b.add_atom("N");
    b.add_bond(ring[0], c6, Single);
    b.add_bond(c6, c7, Single);
    b.add_bond(c7, n, Single);
    b.build().unwrap()
}

/// Glucopyranose: 0 C1, 1 C2, 2 C3, 3 C4, 4 C5, 5 ring O, 6 C6, then
/// hydroxyls 7 (C1), 8 (C2), 9 (C3), 10 (C4), 11 (C6).
pub fn glucopyranose() -> GraphContext {
    let mut b = GraphBuilder::new();
    let c = chain(&mut b, 5);
    let o5 = b.add_atom("O");
    b.add_bond(c[4], o5, Single);
    b.add_bond(o5, c[0], Single);
    let c6 = b.add_atom("C");
    b.add_bond(c[4], c6, Single);
    for &carbon in &[c[0], c[1], c[2], c[3], c6] {
        let o = b.add_atom("O");
        b.add_bond(carbon, o, Single);
    }
    b.add_ring(RingType::Tetrahydropyran, &[c[0], c[1], c[2], c[3], c[4], o5]);
    b.build().unwrap()
}

/// Geraniol: 0 C1 .. 6 C7 along the main chain, 7 and 8 the C7 methyls,
/// 9 the C3 methyl, 10 the C1 hydroxyl.
pub fn geraniol() -> GraphContext {
    let mut b = GraphBuilder::new();
    let c: Vec<AtomId> = (0..7).map(|_| b.add_atom("C")).collect();
    for i in 0..6 {
        let order = if i == 1 || i == 5 { Double } else { Single };
        b.add_bond(c[i], c[i + 1], order);
    }
    for carbon in [c[6], c[6], c[2]] {
        let me = b.add_atom("C");
        b.add_bond(carbon, me, Single);
    }
    let oh = b.add_atom("O");
    b.add_bond(c[0], oh, Single);
    b.build().unwrap()
}

/// 0 N, 1 CA, 2 C, 3 =O, 4 N, 5 CA, 6 C, 7 =O, 8 OH
pub fn glycylglycine() -> GraphContext {
    let mut b = GraphBuilder::new();
    let n1 = b.add_atom("N");
    let ca1 = b.add_atom("C");
    let c1 = b.add_atom("C");
    let o1 = b.add_atom("O");
    let n2 = b.add_atom("N");
    let ca2 = b.add_atom("C");
    let c2 = b.add_atom("C");
    let o2 = b.add_atom("O");
    let oh = b.add_atom("O");
    b.add_bond(n1, ca1, Single);
    b.add_bond(ca1, c1, Single);
    b.add_bond(c1, o1, Double);
    b.add_bond(c1, n2, Single);
    b.add_bond(n2, ca2, Single);
    b.add_bond(ca2, c2, Single);
    b.add_bond(c2, o2, Double);
    b.add_bond(c2, oh, Single);
    b.build().unwrap()
}

/// Ring A 0..=5, 6 on atom 0, 6=7, ring B 8..=13 with 8 on 7.
pub fn stilbene() -> GraphContext {
    let mut b = GraphBuilder::new();
    let a = benzene(&mut b);
    let c6 = b.add_atom("C");
    let c7 = b.add_atom("C");
    let ring_b = benzene(&mut b);
    b.add_bond(a[0], c6, Single);
    b.add_bond(c6, c7, Double);
    b.add_bond(c7, ring_b[0], Single);
    b.build().unwrap()
}

/// Triacetin: 0 CH3, 1 C, 2 =O, 3 O, glycerol 4 5 6, 7 O, 8 C, 9 =O, 10 CH3,
/// sn-2 acetate 11 O, 12 C, 13 =O, 14 CH3.
pub fn triacetin() -> GraphContext {
    let mut b = GraphBuilder::new();
    let ids: Vec<AtomId> = ["C", "C", "O", "O", "C", "C", "C", "O", "C", "O", "C", "O", "C", "O", "C"]
        .iter()
        .map(|s| b.add_atom(s))
        .collect();
    let bonds = [
        (0, 1, Single),
        (1, 2, Double),
        (1, 3, Single),
        (3, 4, Single),
        (4, 5, Single),
        (5, 6, Single),
        (6, 7, Single),
        (7, 8, Single),
        (8, 9, Double),
        (8, 10, Single),
        (5, 11, Single),
        (11, 12, Single),
        (12, 13, Double),
        (12, 14, Single),
    ];
    for (x, y, order) in bonds {
        b.add_bond(ids[x], ids[y], order);
    }
    b.build().unwrap()
}

/// 3-methylindole: 0 N1, 1 C2, 2 C3, 3 C3a, 4 C4, 5 C5, 6 C6, 7 C7,
/// 8 C7a, 9 the C3 methyl.
pub fn skatole() -> GraphContext {
    let mut b = GraphBuilder::new();
    let n1 = b.add_atom_with_h("N", 1);
    let c: Vec<AtomId> = (0..8).map(|_| b.add_atom("C")).collect();
    let (c2, c3, c3a, c7a) = (c[0], c[1], c[2], c[7]);
    b.add_bond(n1, c2, Aromatic);
    b.add_bond(c2, c3, Aromatic);
    b.add_bond(c3, c3a, Aromatic);
    aromatic_ring(&mut b, &c[2..8]);
    b.add_bond(c7a, n1, Aromatic);
    let me = b.add_atom("C");
    b.add_bond(c3, me, Single);
    let pyrrole = b.add_ring(RingType::Pyrrole, &[n1, c2, c3, c3a, c7a]);
    let benzene = b.add_ring(RingType::Benzene, &c[2..8]);
    b.add_ringset(RingSetType::Indole, &[pyrrole, benzene]);
    b.build().unwrap()
}

/// Straight-chain acid: carbons 0..n with 0 the carboxyl carbon, C=C
/// between atoms `k - 1` and `k` for each delta position `k`, then the oxo
/// oxygen `n`, the hydroxyl oxygen `n + 1` and one atom per substituent
/// `(element, carbon)` in order.
pub fn fatty_acid_with(n: usize, deltas: &[usize], substituents: &[(&str, usize)]) -> GraphContext {
    let mut b = GraphBuilder::new();
    let c: Vec<AtomId> = (0..n).map(|_| b.add_atom("C")).collect();
    for i in 0..n - 1 {
        let order = if deltas.contains(&(i + 1)) { Double } else { Single };
        b.add_bond(c[i], c[i + 1], order);
    }
    let oxo = b.add_atom("O");
    let oh = b.add_atom("O");
    b.add_bond(c[0], oxo, Double);
    b.add_bond(c[0], oh, Single);
    for &(element, carbon) in substituents {
        let s = b.add_atom(element);
        b.add_bond(c[carbon], s, Single);
    }
    b.build().unwrap()
}

pub fn fatty_acid(n: usize, deltas: &[usize]) -> GraphContext {
    fatty_acid_with(n, deltas, &[])
}

/// Saturated acid with a hydroxyl on carbon `at`.
pub fn hydroxy_fatty_acid(n: usize, at: usize) -> GraphContext {
    fatty_acid_with(n, &[], &[("O", at)])
}

/// Saturated acid with a ketone oxygen (id `n + 2`) on carbon `at`.
pub fn keto_acid(n: usize, at: usize) -> GraphContext {
    let mut b = GraphBuilder::new();
    let c = chain(&mut b, n);
    let oxo = b.add_atom("O");
    let oh = b.add_atom("O");
    b.add_bond(c[0], oxo, Double);
    b.add_bond(c[0], oh, Single);
    let keto = b.add_atom("O");
    b.add_bond(c[at], keto, Double);
    b.build().unwrap()
}

/// Pentanoic acid (carbons 0..=4, oxygens 5 and 6) plus substituents.
pub fn pentanoic_acid_with(substituents: &[(&str, usize)]) -> GraphContext {
    fatty_acid_with(5, &[], substituents)
}

/// Saturated aldehyde: carbons 0..n, oxo oxygen `n` on carbon 0.
pub fn fatty_aldehyde(n: usize) -> GraphContext {
    let mut b = GraphBuilder::new();
    let c = chain(&mut b, n);
    let oxo = b.add_atom("O");
    b.add_bond(c[0], oxo, Double);
    b.build().unwrap()
}

/// Primary alcohol: carbons 0..n with 0 the methyl end, hydroxyl `n` on
/// carbon `n - 1`.
pub fn alkanol(n: usize) -> GraphContext {
    let mut b = GraphBuilder::new();
    let c = chain(&mut b, n);
    let oh = b.add_atom("O");
    b.add_bond(c[n - 1], oh, Single);
    b.build().unwrap()
}

/// Molecule from a SMILES string, for fixtures too large to build by hand.
///
/// Reads the subset the rule tests need: organic and aromatic atoms, bracket
/// atoms (`[nH]`, `[NH3+]`, `[OH:o5]`, the `:label` is skipped), branches,
/// bond symbols and ring closures `1`-`9` or `%nn`. Every closure registers
/// the shortest ring through the bonds read so far; `rings` gives their types
/// in closure order and `ringsets` groups them by index. Hydrogens on organic
/// atoms are left to the builder; bracket atoms carry exactly the listed
/// count.
pub fn smiles(smiles: &str, rings: &[RingType], ringsets: &[(RingSetType, &[usize])]) -> GraphContext {
    let mut reader = SmilesReader::new(smiles);
    reader.read();
    assert_eq!(reader.rings.len(), rings.len(), "ring types for {smiles}");
    for (members, &ty) in reader.rings.iter().zip(rings) {
        reader.builder.add_ring(ty, members);
    }
    for &(ty, members) in ringsets {
        reader.builder.add_ringset(ty, members);
    }
    reader.builder.build().unwrap()
}

struct SmilesReader<'a> {
    input: &'a [u8],
    pos: usize,
    builder: GraphBuilder,
    aromatic: Vec<bool>,
    neighbors: Vec<Vec<AtomId>>,
    open: BTreeMap<Vec<u8>, (AtomId, Option<BondOrder>)>,
    rings: Vec<Vec<AtomId>>,
    stack: Vec<Option<AtomId>>,
    prev: Option<AtomId>,
    pending: Option<BondOrder>,
}

impl<'a> SmilesReader<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input: input.as_bytes(),
            pos: 0,
            builder: GraphBuilder::new(),
            aromatic: Vec::new(),
            neighbors: Vec::new(),
            open: BTreeMap::new(),
            rings: Vec::new(),
            stack: Vec::new(),
            prev: None,
            pending: None,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    fn advance(&mut self) -> Option<u8> {
        let ch = self.peek()?;
        self.pos += 1;
        Some(ch)
    }

    fn read(&mut self) {
        while let Some(ch) = self.peek() {
            match ch {
                b'(' => {
                    self.advance();
                    self.stack.push(self.prev);
                }
                b')' => {
                    self.advance();
                    self.prev = self.stack.pop().unwrap();
                }
                b'-' | b'=' | b'#' | b':' => {
                    self.advance();
                    self.pending = BondOrder::from_symbol(ch as char);
                }
                b'%' => {
                    let key = self.input[self.pos + 1..self.pos + 3].to_vec();
                    self.pos += 3;
                    self.ring_closure(key);
                }
                b'0'..=b'9' => {
                    self.advance();
                    self.ring_closure(vec![ch]);
                }
                b'[' => self.bracket_atom(),
                _ => self.organic_atom(),
            }
        }
        assert!(self.open.is_empty(), "unclosed ring in {:?}", std::str::from_utf8(self.input));
    }

    fn organic_atom(&mut self) {
        let rest = &self.input[self.pos..];
        let symbol = ["Cl", "Br", "B", "C", "N", "O", "P", "S", "F", "I", "c", "n", "o", "s", "p"]
            .into_iter()
            .find(|s| rest.starts_with(s.as_bytes()))
            .unwrap_or_else(|| panic!("unexpected SMILES input at {}", self.pos));
        self.pos += symbol.len();
        let aromatic = symbol.as_bytes()[0].is_ascii_lowercase();
        let atom = self.builder.add_atom(&symbol.to_ascii_uppercase());
        self.attach(atom, aromatic);
    }

    fn bracket_atom(&mut self) {
        self.advance(); // '['
        while self.peek().map_or(false, |c| c.is_ascii_digit()) {
            self.advance();
        }
        let first = self.advance().unwrap();
        let aromatic = first.is_ascii_lowercase();
        let mut symbol = String::from(first.to_ascii_uppercase() as char);
        if let Some(next) = self.peek() {
            let two = format!("{symbol}{}", next as char);
            if !aromatic && ["Cl", "Br", "Si"].contains(&two.as_str()) {
                self.advance();
                symbol = two;
            }
        }
        while self.peek() == Some(b'@') {
            self.advance();
        }
        let mut hydrogens = 0u8;
        if self.peek() == Some(b'H') {
            self.advance();
            hydrogens = match self.peek() {
                Some(d) if d.is_ascii_digit() => {
                    self.advance();
                    d - b'0'
                }
                _ => 1,
            };
        }
        let mut charge = 0i8;
        if let Some(sign @ (b'+' | b'-')) = self.peek() {
            self.advance();
            let magnitude = match self.peek() {
                Some(d) if d.is_ascii_digit() => {
                    self.advance();
                    (d - b'0') as i8
                }
                _ => 1,
            };
            charge = if sign == b'+' { magnitude } else { -magnitude };
        }
        while self.advance() != Some(b']') {}

        let atom = self.builder.add_atom_with_h(&symbol, hydrogens);
        if charge != 0 {
            self.builder.set_charge(atom, charge);
        }
        self.attach(atom, aromatic);
    }

    fn attach(&mut self, atom: AtomId, aromatic: bool) {
        self.aromatic.push(aromatic);
        self.neighbors.push(Vec::new());
        if let Some(prev) = self.prev {
            let order = self.pending.unwrap_or(if self.aromatic[prev] && aromatic { Aromatic } else { Single });
            self.bond(prev, atom, order);
        }
        self.pending = None;
        self.prev = Some(atom);
    }

    fn bond(&mut self, a: AtomId, b: AtomId, order: BondOrder) {
        self.builder.add_bond(a, b, order);
        self.neighbors[a].push(b);
        self.neighbors[b].push(a);
    }

    fn ring_closure(&mut self, key: Vec<u8>) {
        let here = self.prev.unwrap();
        match self.open.remove(&key) {
            Some((start, opened_with)) => {
                let order = self.pending.or(opened_with).unwrap_or(
                    if self.aromatic[start] && self.aromatic[here] { Aromatic } else { Single },
                );
                self.pending = None;
                // ring path is taken before the closing bond exists
                let members = self.shortest_path(here, start);
                self.bond(here, start, order);
                self.rings.push(members);
            }
            None => {
                self.open.insert(key, (here, self.pending.take()));
            }
        }
    }

    /// Breadth-first shortest path over the bonds read so far.
    fn shortest_path(&self, from: AtomId, to: AtomId) -> Vec<AtomId> {
        let mut parent = vec![None; self.neighbors.len()];
        parent[from] = Some(from);
        let mut queue = VecDeque::from([from]);
        while let Some(x) = queue.pop_front() {
            if x == to {
                break;
            }
            for &y in &self.neighbors[x] {
                if parent[y].is_none() {
                    parent[y] = Some(x);
                    queue.push_back(y);
                }
            }
        }
        let mut path = vec![to];
        let mut x = to;
        while x != from {
            x = parent[x].unwrap();
            path.push(x);
        }
        path.reverse();
        path
    }
}
