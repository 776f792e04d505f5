//! Motif rule tables: one table per path length, keyed by connectivity signature.
//!
//! Each table entry is an ordered list of [`Clause`]s. A [`Clause::Rule`] sets
//! its bits when its predicate holds and then runs its nested refinements; a
//! [`Clause::FirstOf`] runs alternatives in order and stops at the first whose
//! predicate holds, so sibling alternatives never fire together.
//!
//! Tables are built once per process and shared by every evaluation.

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use tracing::{debug, trace};

use crate::fingerprint::FingerprintSink;
use crate::motif::Motif;
use crate::path::{is_canonical, signature_atom_count, PathView};

/// Build a `Vec<Clause>` from rules and alternative groups.
macro_rules! clauses {
    ($($clause:expr),* $(,)?) => {
        vec![$($crate::rules::Clause::from($clause)),*]
    };
}

mod common;
mod tier02;
mod tier03;
mod tier04;
mod tier05;
mod tier06;
mod tier07;
mod tier08;
mod tier09;
mod tier10;
mod tier11;
mod tier12;
mod tier13;

// Themed families layered over the tier tables, applied in this order.
mod acyl;
mod alkaloid;
mod alkyl;
mod arene;
mod flavonoid;
mod glycan;
mod heteroarene;
mod isoprenoid;
mod lipid;
mod olefin;
mod peptide;

/// Shortest path handled by the rule tables.
pub const MIN_PATH_LEN: usize = 2;
/// Longest path handled by the rule tables.
pub const MAX_PATH_LEN: usize = 13;

/// A side-effect-free test over one path.
pub type Predicate = fn(&PathView<'_>) -> bool;

/// Predicate → effect, with refinements scoped under the predicate.
pub struct Rule {
    when: Predicate,
    set: &'static [Motif],
    then: Vec<Clause>,
}

impl Rule {
    /// Nest refinement clauses that only run when this rule fires.
    pub fn then(mut self, clauses: Vec<Clause>) -> Self {
        self.then = clauses;
        self
    }

    /// Bits set when the predicate holds.
    pub fn bits(&self) -> &'static [Motif] {
        self.set
    }

    /// Evaluate; returns whether the predicate held.
    fn apply<S: FingerprintSink>(&self, path: &PathView<'_>, sink: &mut S) -> bool {
        if !(self.when)(path) {
            return false;
        }
        for &motif in self.set {
            sink.set_index(motif.index());
        }
        for clause in &self.then {
            clause.apply(path, sink);
        }
        true
    }

    fn visit_bits(&self, f: &mut impl FnMut(Motif)) {
        self.set.iter().copied().for_each(&mut *f);
        for clause in &self.then {
            clause.visit_bits(f);
        }
    }
}

/// One step of a table entry.
pub enum Clause {
    /// Independent rule.
    Rule(Rule),
    /// Mutually exclusive alternatives; the first that holds wins.
    FirstOf(Vec<Rule>),
}

impl From<Rule> for Clause {
    fn from(rule: Rule) -> Self {
        Clause::Rule(rule)
    }
}

impl Clause {
    fn apply<S: FingerprintSink>(&self, path: &PathView<'_>, sink: &mut S) {
        match self {
            Clause::Rule(rule) => {
                rule.apply(path, sink);
            }
            Clause::FirstOf(alternatives) => {
                alternatives.iter().any(|alt| alt.apply(path, sink));
            }
        }
    }

    fn visit_bits(&self, f: &mut impl FnMut(Motif)) {
        match self {
            Clause::Rule(rule) => rule.visit_bits(f),
            Clause::FirstOf(alternatives) => alternatives.iter().for_each(|alt| alt.visit_bits(f)),
        }
    }
}

/// A rule that fires when `pred` holds and sets `set`.
pub fn when(pred: Predicate, set: &'static [Motif]) -> Rule {
    Rule { when: pred, set, then: Vec::new() }
}

/// A rule that always fires.
pub fn always(set: &'static [Motif]) -> Rule {
    when(|_| true, set)
}

/// Mutually exclusive alternatives evaluated in order.
pub fn first_of(alternatives: Vec<Rule>) -> Clause {
    Clause::FirstOf(alternatives)
}

/// All entries for one path length.
pub struct RuleTable {
    len: usize,
    entries: HashMap<&'static str, Vec<Clause>>,
}

impl RuleTable {
    pub fn new(len: usize) -> Self {
        RuleTable { len, entries: HashMap::new() }
    }

    /// Register the clauses for one signature.
    ///
    /// # Panics
    ///
    /// Panics if the signature is registered twice, is not in canonical
    /// orientation, or spells a different number of atoms than the table.
    pub fn add(&mut self, signature: &'static str, clauses: Vec<Clause>) {
        assert_eq!(
            signature_atom_count(signature),
            self.len,
            "signature {signature} registered in the {}-atom table",
            self.len
        );
        assert!(is_canonical(signature), "signature {signature} is not canonical");
        let previous = self.entries.insert(signature, clauses);
        assert!(previous.is_none(), "signature {signature} registered twice");
    }

    /// Append clauses to an entry registered earlier. They run after the
    /// entry's existing clauses.
    ///
    /// # Panics
    ///
    /// Panics if the signature has no entry yet.
    pub fn extend(&mut self, signature: &str, clauses: Vec<Clause>) {
        match self.entries.get_mut(signature) {
            Some(existing) => existing.extend(clauses),
            None => panic!("signature {signature} extended before it was added"),
        }
    }

    /// Path length served by this table.
    pub fn path_len(&self) -> usize {
        self.len
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, signature: &str) -> bool {
        self.entries.contains_key(signature)
    }

    pub fn signatures(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    /// Run the entry for the path's signature; unknown signatures do nothing.
    pub fn apply<S: FingerprintSink>(&self, path: &PathView<'_>, sink: &mut S) {
        if let Some(clauses) = self.entries.get(path.signature()) {
            trace!(signature = path.signature(), len = self.len, "dispatching rule entry");
            for clause in clauses {
                clause.apply(path, sink);
            }
        }
    }

    fn bits_of(&self, signature: &str) -> Vec<Motif> {
        let mut out = Vec::new();
        if let Some(clauses) = self.entries.get(signature) {
            for clause in clauses {
                clause.visit_bits(&mut |m| out.push(m));
            }
        }
        out
    }
}

/// The twelve tier tables, 2..=13 atoms.
pub struct RuleTables {
    tiers: Vec<RuleTable>,
}

impl fmt::Debug for RuleTables {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let per_tier: Vec<(usize, usize)> = self.tiers.iter().map(|t| (t.path_len(), t.len())).collect();
        f.debug_struct("RuleTables").field("entries", &per_tier).finish()
    }
}

impl RuleTables {
    /// The process-wide tables, built on first use.
    pub fn get() -> &'static RuleTables {
        static TABLES: OnceLock<RuleTables> = OnceLock::new();
        TABLES.get_or_init(RuleTables::build)
    }

    fn build() -> Self {
        let mut tiers = vec![
            tier02::table(),
            tier03::table(),
            tier04::table(),
            tier05::table(),
            tier06::table(),
            tier07::table(),
            tier08::table(),
            tier09::table(),
            tier10::table(),
            tier11::table(),
            tier12::table(),
            tier13::table(),
        ];
        for tier in &mut tiers {
            alkyl::extend(tier);
            acyl::extend(tier);
            olefin::extend(tier);
            arene::extend(tier);
            heteroarene::extend(tier);
            lipid::extend(tier);
            glycan::extend(tier);
            flavonoid::extend(tier);
            isoprenoid::extend(tier);
            alkaloid::extend(tier);
            peptide::extend(tier);
        }
        for tier in &tiers {
            debug!(path_len = tier.path_len(), entries = tier.len(), "built motif rule table");
        }
        RuleTables { tiers }
    }

    /// Table for paths of `len` atoms.
    pub fn tier(&self, len: usize) -> Option<&RuleTable> {
        if (MIN_PATH_LEN..=MAX_PATH_LEN).contains(&len) {
            self.tiers.get(len - MIN_PATH_LEN)
        } else {
            None
        }
    }

    pub fn tiers(&self) -> &[RuleTable] {
        &self.tiers
    }

    /// Total number of signature entries over all tiers.
    pub fn entry_count(&self) -> usize {
        self.tiers.iter().map(RuleTable::len).sum()
    }

    /// Dispatch one path to its tier; lengths outside 2..=13 do nothing.
    pub fn apply<S: FingerprintSink>(&self, path: &PathView<'_>, sink: &mut S) {
        if let Some(tier) = self.tier(path.len()) {
            tier.apply(path, sink);
        }
    }

    /// Every `(path length, signature)` entry able to set `motif`.
    pub fn writers(&self, motif: Motif) -> Vec<(usize, &'static str)> {
        let mut out = Vec::new();
        for tier in &self.tiers {
            let mut sigs: Vec<_> = tier.signatures().collect();
            sigs.sort_unstable();
            for sig in sigs {
                if tier.bits_of(sig).contains(&motif) {
                    out.push((tier.path_len(), sig));
                }
            }
        }
        out
    }

    /// Motifs written from more than one signature entry, for review.
    pub fn shared_motifs(&self) -> Vec<(Motif, Vec<(usize, &'static str)>)> {
        let mut by_motif: HashMap<Motif, Vec<(usize, &'static str)>> = HashMap::new();
        for tier in &self.tiers {
            for sig in tier.signatures() {
                let mut bits = tier.bits_of(sig);
                bits.sort_by_key(|m| m.index());
                bits.dedup();
                for m in bits {
                    by_motif.entry(m).or_default().push((tier.path_len(), sig));
                }
            }
        }
        let mut shared: Vec<_> = by_motif.into_iter().filter(|(_, w)| w.len() > 1).collect();
        for (_, writers) in &mut shared {
            writers.sort_unstable();
        }
        shared.sort_by_key(|(m, _)| m.index());
        shared
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fingerprint::Fingerprint;
    use crate::path::Path;
    use crate::testing;

    #[test]
    fn twelve_tiers_in_order() {
        let tables = RuleTables::get();
        assert_eq!(tables.tiers().len(), 12);
        for (k, tier) in tables.tiers().iter().enumerate() {
            assert_eq!(tier.path_len(), k + MIN_PATH_LEN);
            assert!(!tier.is_empty(), "tier {} has no entries", tier.path_len());
        }
        assert!(tables.tier(1).is_none());
        assert!(tables.tier(14).is_none());
    }

    #[test]
    fn every_motif_has_a_writer() {
        let tables = RuleTables::get();
        let mut written = vec![false; Motif::COUNT];
        for tier in tables.tiers() {
            for sig in tier.signatures() {
                for m in tier.bits_of(sig) {
                    written[m.index()] = true;
                }
            }
        }
        let orphans: Vec<_> = Motif::ALL
            .iter()
            .filter(|m| !written[m.index()])
            .map(|m| m.name())
            .collect();
        assert!(orphans.is_empty(), "motifs with no rule: {orphans:?}");
    }

    #[test]
    fn first_of_suppresses_later_alternatives() {
        let table = {
            let mut t = RuleTable::new(2);
            t.add(
                "C-O",
                clauses![first_of(vec![
                    when(|p| p.env(1).hydrogen >= 1, &[Motif::Phenol]),
                    when(|p| p.env(1).heavy_degree == 1, &[Motif::PrimaryAlcohol]),
                ])],
            );
            t
        };
        let ctx = testing::ethanol();
        let path = Path::canonical(&ctx, &[1, 2]).unwrap();
        let mut fp = Fingerprint::new();
        table.apply(&path.view(&ctx), &mut fp);
        assert!(fp.get(Motif::Phenol));
        assert!(!fp.get(Motif::PrimaryAlcohol));
    }

    #[test]
    fn refinements_run_only_under_parent() {
        let mut t = RuleTable::new(2);
        t.add(
            "C-O",
            clauses![
                when(|p| p.env(1).hydrogen >= 1, &[]).then(clauses![
                    when(|_| true, &[Motif::PrimaryAlcohol]),
                    when(|_| true, &[Motif::Hydroxyl]),
                ]),
                when(|p| p.env(1).hydrogen == 0, &[]).then(clauses![always(&[Motif::Phenol])]),
            ],
        );
        let ctx = testing::ethanol();
        let path = Path::canonical(&ctx, &[1, 2]).unwrap();
        let mut fp = Fingerprint::new();
        t.apply(&path.view(&ctx), &mut fp);
        assert!(fp.get(Motif::PrimaryAlcohol));
        assert!(fp.get(Motif::Hydroxyl));
        assert!(!fp.get(Motif::Phenol));
    }

    #[test]
    #[should_panic(expected = "registered twice")]
    fn duplicate_signature_panics() {
        let mut t = RuleTable::new(2);
        t.add("C-O", clauses![always(&[Motif::Hydroxyl])]);
        t.add("C-O", clauses![always(&[Motif::Hydroxyl])]);
    }

    #[test]
    fn extend_appends_after_existing_clauses() {
        let mut t = RuleTable::new(2);
        t.add(
            "C-O",
            clauses![first_of(vec![
                when(|p| p.env(1).hydrogen >= 1, &[Motif::Hydroxyl]),
                when(|_| true, &[Motif::Phenol]),
            ])],
        );
        t.extend("C-O", clauses![always(&[Motif::PrimaryAlcohol])]);
        assert_eq!(t.len(), 1);
        assert_eq!(t.bits_of("C-O"), vec![Motif::Hydroxyl, Motif::Phenol, Motif::PrimaryAlcohol]);

        let ctx = testing::ethanol();
        let path = Path::canonical(&ctx, &[1, 2]).unwrap();
        let mut fp = Fingerprint::new();
        t.apply(&path.view(&ctx), &mut fp);
        assert!(fp.get(Motif::Hydroxyl) && fp.get(Motif::PrimaryAlcohol));
        assert!(!fp.get(Motif::Phenol));
    }

    #[test]
    #[should_panic(expected = "extended before it was added")]
    fn extending_missing_signature_panics() {
        let mut t = RuleTable::new(2);
        t.extend("C-O", clauses![always(&[Motif::Hydroxyl])]);
    }

    #[test]
    #[should_panic(expected = "not canonical")]
    fn non_canonical_signature_panics() {
        let mut t = RuleTable::new(3);
        t.add("O=C-C", clauses![always(&[Motif::Hydroxyl])]);
    }

    #[test]
    fn unmatched_signature_is_noop() {
        let ctx = testing::ethanol();
        let path = Path::new("Xx-Yy", vec![0, 1], vec![0]).unwrap();
        let mut fp = Fingerprint::new();
        RuleTables::get().apply(&path.view(&ctx), &mut fp);
        assert_eq!(fp.count_ones(), 0);
    }

    #[test]
    fn writers_report_entries() {
        let tables = RuleTables::get();
        let writers = tables.writers(Motif::CarbonCarbonDoubleBond);
        assert!(writers.contains(&(2, "C=C")));
        for (m, w) in tables.shared_motifs() {
            assert!(w.len() > 1, "{} reported with a single writer", m.name());
        }
    }
}
