//! The motif engine: rule dispatch, chain descriptors and whole-molecule
//! fingerprinting.

use tracing::debug;

use crate::chain::{classify_chain, ChainDescriptor};
use crate::enumerate::{detect_acyl_chains, enumerate_paths, Chain};
use crate::error::{MotifError, Result};
use crate::fingerprint::{Fingerprint, FingerprintSink, SharedFingerprint};
use crate::graph::{AtomId, BondId, GraphContext};
use crate::path::{Path, PathView};
use crate::rules::{RuleTables, MAX_PATH_LEN, MIN_PATH_LEN};

/// Run-time engine configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineOptions {
    /// Shortest path dispatched to the rule tables.
    pub min_path_len: usize,
    /// Longest path dispatched to the rule tables.
    pub max_path_len: usize,
    /// Whether acyl chains set chain-descriptor bits.
    pub chain_descriptors: bool,
}

impl Default for EngineOptions {
    fn default() -> Self {
        EngineOptions { min_path_len: MIN_PATH_LEN, max_path_len: MAX_PATH_LEN, chain_descriptors: true }
    }
}

impl EngineOptions {
    /// Check the path window lies inside the tables' 2..=13 range.
    pub fn validate(&self) -> Result<()> {
        if self.min_path_len < MIN_PATH_LEN || self.max_path_len > MAX_PATH_LEN {
            return Err(MotifError::InvalidInput(format!(
                "path window {}..={} outside {MIN_PATH_LEN}..={MAX_PATH_LEN}",
                self.min_path_len, self.max_path_len
            )));
        }
        if self.min_path_len > self.max_path_len {
            return Err(MotifError::InvalidInput(format!(
                "min_path_len {} exceeds max_path_len {}",
                self.min_path_len, self.max_path_len
            )));
        }
        Ok(())
    }
}

/// Evaluates paths and chains against the shared rule tables.
///
/// The engine holds no per-molecule state; one engine can serve any number
/// of molecules and threads.
#[derive(Debug, Clone, Copy)]
pub struct MotifEngine {
    tables: &'static RuleTables,
    options: EngineOptions,
}

impl Default for MotifEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl MotifEngine {
    pub fn new() -> Self {
        MotifEngine { tables: RuleTables::get(), options: EngineOptions::default() }
    }

    pub fn with_options(options: EngineOptions) -> Result<Self> {
        options.validate()?;
        Ok(MotifEngine { tables: RuleTables::get(), options })
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    pub fn tables(&self) -> &'static RuleTables {
        self.tables
    }

    fn in_window(&self, len: usize) -> bool {
        (self.options.min_path_len..=self.options.max_path_len).contains(&len)
    }

    /// Run the rule entry for one path; paths outside the window do nothing.
    pub fn evaluate<S: FingerprintSink>(&self, ctx: &GraphContext, path: &Path, sink: &mut S) {
        if self.in_window(path.len()) {
            self.tables.apply(&path.view(ctx), sink);
        }
    }

    /// Like [`evaluate`](Self::evaluate) for a path supplied in parts.
    ///
    /// # Panics
    ///
    /// Panics if `bonds` does not hold exactly one bond fewer than `atoms`.
    pub fn evaluate_raw<S: FingerprintSink>(
        &self,
        signature: &str,
        atoms: &[AtomId],
        bonds: &[BondId],
        ctx: &GraphContext,
        sink: &mut S,
    ) {
        assert_eq!(bonds.len() + 1, atoms.len(), "path {signature}: {} atoms with {} bonds", atoms.len(), bonds.len());
        if self.in_window(atoms.len()) {
            self.tables.apply(&PathView::new(ctx, signature, atoms, bonds), sink);
        }
    }

    /// Classify a chain and set its descriptor bit.
    pub fn apply_chain<S: FingerprintSink>(
        &self,
        ctx: &GraphContext,
        atoms: &[AtomId],
        bonds: &[BondId],
        sink: &mut S,
    ) -> Option<ChainDescriptor> {
        if !self.options.chain_descriptors {
            return None;
        }
        let descriptor = classify_chain(ctx, atoms, bonds)?;
        sink.set(descriptor);
        Some(descriptor)
    }

    /// Fingerprint from pre-enumerated paths and chains.
    pub fn fingerprint(&self, ctx: &GraphContext, paths: &[Path], chains: &[Chain]) -> Fingerprint {
        let mut fp = Fingerprint::new();
        for path in paths {
            self.evaluate(ctx, path, &mut fp);
        }
        for chain in chains {
            self.apply_chain(ctx, &chain.atoms, &chain.bonds, &mut fp);
        }
        fp
    }

    /// Enumerate every path and chain of the molecule and fingerprint it.
    pub fn fingerprint_molecule(&self, ctx: &GraphContext) -> Fingerprint {
        let paths = enumerate_paths(ctx, self.options.min_path_len, self.options.max_path_len);
        let chains = if self.options.chain_descriptors { detect_acyl_chains(ctx) } else { Vec::new() };
        debug!(atoms = ctx.atom_count(), paths = paths.len(), chains = chains.len(), "fingerprinting molecule");
        self.fingerprint(ctx, &paths, &chains)
    }

    /// Fingerprint a batch, one molecule per worker when `parallel` is on.
    pub fn fingerprint_molecules(&self, molecules: &[GraphContext]) -> Vec<Fingerprint> {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            molecules.par_iter().map(|ctx| self.fingerprint_molecule(ctx)).collect()
        }
        #[cfg(not(feature = "parallel"))]
        molecules.iter().map(|ctx| self.fingerprint_molecule(ctx)).collect()
    }

    /// Evaluate one molecule's paths concurrently into a shared fingerprint.
    pub fn fingerprint_paths_shared(&self, ctx: &GraphContext, paths: &[Path]) -> Fingerprint {
        let shared = SharedFingerprint::new();
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            paths.par_iter().for_each(|path| {
                let mut sink = &shared;
                self.evaluate(ctx, path, &mut sink);
            });
        }
        #[cfg(not(feature = "parallel"))]
        {
            let mut sink = &shared;
            for path in paths {
                self.evaluate(ctx, path, &mut sink);
            }
        }
        shared.into_fingerprint()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::{self, ChainClass};
    use crate::motif::Motif;
    use crate::testing;

    #[test]
    fn plain_double_bond_sets_only_generic_bit() {
        let ctx = testing::but_2_ene();
        let path = Path::canonical(&ctx, &[1, 2]).unwrap();
        assert_eq!(path.signature(), "C=C");
        let mut fp = Fingerprint::new();
        MotifEngine::new().evaluate(&ctx, &path, &mut fp);
        assert_eq!(fp.names(), vec!["Carbon-carbon double bond"]);
    }

    #[test]
    fn linoleic_acid_sets_one_chain_bit() {
        let ctx = testing::fatty_acid(18, &[9, 12]);
        let fp = MotifEngine::new().fingerprint_molecule(&ctx);
        let wanted = chain::lookup(ChainClass::FattyAcid, 18, 2).unwrap();
        assert!(fp.get(wanted));
        let chain_bits: Vec<_> = chain::descriptors().iter().filter(|d| fp.get(**d)).collect();
        assert_eq!(chain_bits, vec![&wanted]);
    }

    #[test]
    fn raw_and_path_entry_points_agree() {
        let ctx = testing::methyl_acetate();
        let path = Path::canonical(&ctx, &[0, 1, 3, 4]).unwrap();
        let engine = MotifEngine::new();
        let mut a = Fingerprint::new();
        let mut b = Fingerprint::new();
        engine.evaluate(&ctx, &path, &mut a);
        engine.evaluate_raw(path.signature(), path.atoms(), path.bonds(), &ctx, &mut b);
        assert_eq!(a, b);
    }

    #[test]
    fn window_limits_dispatch() {
        let ctx = testing::but_2_ene();
        let path = Path::canonical(&ctx, &[1, 2]).unwrap();
        let opts = EngineOptions { min_path_len: 3, ..EngineOptions::default() };
        let mut fp = Fingerprint::new();
        MotifEngine::with_options(opts).unwrap().evaluate(&ctx, &path, &mut fp);
        assert_eq!(fp.count_ones(), 0);
    }

    #[test]
    fn invalid_windows_rejected() {
        let too_long = EngineOptions { max_path_len: 14, ..EngineOptions::default() };
        assert!(MotifEngine::with_options(too_long).is_err());
        let inverted = EngineOptions { min_path_len: 6, max_path_len: 5, ..EngineOptions::default() };
        assert!(MotifEngine::with_options(inverted).is_err());
    }

    #[test]
    fn chain_descriptors_can_be_disabled() {
        let ctx = testing::fatty_acid(18, &[9, 12]);
        let opts = EngineOptions { chain_descriptors: false, ..EngineOptions::default() };
        let fp = MotifEngine::with_options(opts).unwrap().fingerprint_molecule(&ctx);
        assert!(chain::descriptors().iter().all(|d| !fp.get(*d)));
    }

    #[test]
    fn shared_matches_serial() {
        let ctx = testing::chromone(&[5, 7]);
        let engine = MotifEngine::new();
        let paths = enumerate_paths(&ctx, 2, 13);
        let serial = engine.fingerprint(&ctx, &paths, &[]);
        let shared = engine.fingerprint_paths_shared(&ctx, &paths);
        assert_eq!(serial, shared);
        assert!(serial.get(Motif::PolyoxygenatedChromoneBenzoRing));
    }

    #[test]
    fn batch_matches_single() {
        let molecules = vec![testing::phenol(), testing::glycine(), testing::fatty_acid(16, &[])];
        let engine = MotifEngine::new();
        let batch = engine.fingerprint_molecules(&molecules);
        for (ctx, fp) in molecules.iter().zip(&batch) {
            assert_eq!(&engine.fingerprint_molecule(ctx), fp);
        }
    }

    #[test]
    fn whole_molecule_is_idempotent() {
        let ctx = testing::methyl_acetate();
        let engine = MotifEngine::new();
        let paths = enumerate_paths(&ctx, 2, 13);
        let chains = detect_acyl_chains(&ctx);
        let mut fp = engine.fingerprint(&ctx, &paths, &chains);
        let once = fp.clone();
        for path in &paths {
            engine.evaluate(&ctx, path, &mut fp);
        }
        assert_eq!(fp, once);
        assert!(fp.get(Motif::MethylEster));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::testing;
    use proptest::prelude::*;

    fn unsaturated_acid() -> impl Strategy<Value = GraphContext> {
        (4usize..=24)
            .prop_flat_map(|n| (Just(n), proptest::sample::subsequence((2..n).collect::<Vec<_>>(), 0..=(n - 2) / 2)))
            .prop_map(|(n, deltas)| testing::fatty_acid(n, &deltas))
    }

    fn ring_molecule() -> impl Strategy<Value = GraphContext> {
        prop_oneof![
            Just(testing::phenol()),
            Just(testing::catechol()),
            Just(testing::naphthalene()),
            Just(testing::glucopyranose()),
            Just(testing::skatole()),
            Just(testing::stilbene()),
            (0usize..4).prop_map(|k| testing::chromone(&[[5, 7], [3, 7], [5, 6], [7, 8]][k])),
            (1usize..6).prop_map(|k| testing::hydroxybenzene(&[0, k])),
        ]
    }

    fn molecule() -> impl Strategy<Value = GraphContext> {
        prop_oneof![
            unsaturated_acid(),
            ring_molecule(),
            Just(testing::triacetin()),
            Just(testing::glycylglycine()),
            Just(testing::geraniol()),
        ]
    }

    proptest! {
        #[test]
        fn path_order_does_not_matter(ctx in molecule(), rot in any::<proptest::sample::Index>()) {
            let engine = MotifEngine::new();
            let mut paths = enumerate_paths(&ctx, 2, 13);
            let forward = engine.fingerprint(&ctx, &paths, &[]);
            paths.reverse();
            let k = rot.index(paths.len());
            paths.rotate_left(k);
            prop_assert_eq!(engine.fingerprint(&ctx, &paths, &[]), forward);
        }

        #[test]
        fn subsets_of_paths_give_subsets_of_bits(ctx in molecule(), cut in any::<proptest::sample::Index>()) {
            let engine = MotifEngine::new();
            let paths = enumerate_paths(&ctx, 2, 13);
            let full = engine.fingerprint(&ctx, &paths, &[]);
            let part = engine.fingerprint(&ctx, &paths[..cut.index(paths.len())], &[]);
            prop_assert!(full.is_superset_of(&part));
        }

        #[test]
        fn shared_accumulation_matches_serial(ctx in molecule()) {
            let engine = MotifEngine::new();
            let paths = enumerate_paths(&ctx, 2, 13);
            prop_assert_eq!(engine.fingerprint_paths_shared(&ctx, &paths), engine.fingerprint(&ctx, &paths, &[]));
        }

        #[test]
        fn reapplying_paths_and_chains_changes_nothing(ctx in molecule()) {
            let engine = MotifEngine::new();
            let paths = enumerate_paths(&ctx, 2, 13);
            let chains = detect_acyl_chains(&ctx);
            let mut fp = engine.fingerprint(&ctx, &paths, &chains);
            let once = fp.clone();
            for path in &paths {
                engine.evaluate(&ctx, path, &mut fp);
            }
            for chain in &chains {
                engine.apply_chain(&ctx, &chain.atoms, &chain.bonds, &mut fp);
            }
            prop_assert_eq!(fp, once);
        }

        #[test]
        fn at_most_one_chain_bit_per_chain(ctx in molecule()) {
            let engine = MotifEngine::new();
            for chain in detect_acyl_chains(&ctx) {
                let mut fp = Fingerprint::new();
                engine.apply_chain(&ctx, &chain.atoms, &chain.bonds, &mut fp);
                prop_assert!(fp.count_ones() <= 1);
            }
        }
    }
}
