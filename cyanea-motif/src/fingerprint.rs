//! The fingerprint accumulator and its bit catalogue.
//!
//! Bits are laid out in a fixed order: every [`Motif`] in declaration order,
//! then every [`ChainDescriptor`] in chain-catalogue order. Writes are
//! monotonic: a bit can only go from false to true.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;

use sha2::{Digest, Sha256};

use crate::chain::{self, ChainDescriptor};
use crate::error::{MotifError, Result};
use crate::motif::Motif;

/// A named position in the fingerprint catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bit {
    Motif(Motif),
    Chain(ChainDescriptor),
}

impl Bit {
    /// Position of this bit in the fingerprint.
    pub fn index(self) -> usize {
        match self {
            Bit::Motif(m) => m.index(),
            Bit::Chain(c) => Motif::COUNT + c.slot(),
        }
    }
}

impl From<Motif> for Bit {
    fn from(m: Motif) -> Self {
        Bit::Motif(m)
    }
}

impl From<ChainDescriptor> for Bit {
    fn from(c: ChainDescriptor) -> Self {
        Bit::Chain(c)
    }
}

struct Catalogue {
    names: Vec<String>,
    index: HashMap<String, usize>,
}

fn catalogue() -> &'static Catalogue {
    static CATALOGUE: OnceLock<Catalogue> = OnceLock::new();
    CATALOGUE.get_or_init(|| {
        let names: Vec<String> = Motif::ALL
            .iter()
            .map(|m| m.name().to_string())
            .chain(chain::descriptors().iter().map(|d| d.name()))
            .collect();
        let index = names.iter().enumerate().map(|(i, n)| (n.clone(), i)).collect();
        Catalogue { names, index }
    })
}

/// Total number of bits in every fingerprint.
pub fn catalogue_len() -> usize {
    catalogue().names.len()
}

/// Catalogue name of the bit at `index`.
pub fn bit_name(index: usize) -> Option<&'static str> {
    catalogue().names.get(index).map(String::as_str)
}

/// Catalogue position of the bit called `name`.
pub fn bit_index(name: &str) -> Option<usize> {
    catalogue().index.get(name).copied()
}

/// Destination for rule effects.
///
/// Implemented by [`Fingerprint`] for single-threaded accumulation and by
/// `&SharedFingerprint` for concurrent accumulation.
pub trait FingerprintSink {
    /// Set the bit at `index` to true.
    fn set_index(&mut self, index: usize);

    fn set(&mut self, bit: impl Into<Bit>)
    where
        Self: Sized,
    {
        self.set_index(bit.into().index());
    }
}

/// A fixed-size, monotonic bit vector over the full catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fingerprint {
    words: Vec<u64>,
    nbits: usize,
}

impl Default for Fingerprint {
    fn default() -> Self {
        Self::new()
    }
}

impl Fingerprint {
    /// An all-false fingerprint covering the whole catalogue.
    pub fn new() -> Self {
        let nbits = catalogue_len();
        Fingerprint {
            words: vec![0u64; (nbits + 63) / 64],
            nbits,
        }
    }

    /// Number of bits in the fingerprint.
    pub fn len(&self) -> usize {
        self.nbits
    }

    pub fn is_empty(&self) -> bool {
        self.nbits == 0
    }

    /// Get the bit at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn get_index(&self, index: usize) -> bool {
        assert!(index < self.nbits, "bit index {index} out of range ({} bits)", self.nbits);
        (self.words[index / 64] >> (index % 64)) & 1 == 1
    }

    pub fn get(&self, bit: impl Into<Bit>) -> bool {
        self.get_index(bit.into().index())
    }

    /// Set a bit by catalogue name.
    pub fn set_named(&mut self, name: &str) -> Result<()> {
        let index = bit_index(name).ok_or_else(|| MotifError::UnknownBit(name.to_string()))?;
        self.set_index(index);
        Ok(())
    }

    /// Read a bit by catalogue name.
    pub fn get_named(&self, name: &str) -> Result<bool> {
        let index = bit_index(name).ok_or_else(|| MotifError::UnknownBit(name.to_string()))?;
        Ok(self.get_index(index))
    }

    /// Count the number of set bits.
    pub fn count_ones(&self) -> u32 {
        self.words.iter().map(|w| w.count_ones()).sum()
    }

    /// Positions of set bits, ascending.
    pub fn iter_ones(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.nbits).filter(move |&i| self.get_index(i))
    }

    /// Catalogue names of set bits, in catalogue order.
    pub fn names(&self) -> Vec<&'static str> {
        self.iter_ones().filter_map(bit_name).collect()
    }

    /// Packed little-endian words; bit `i` is `words[i / 64] >> (i % 64)`.
    pub fn words(&self) -> &[u64] {
        &self.words
    }

    /// Expand to one bool per catalogue position.
    pub fn to_bools(&self) -> Vec<bool> {
        (0..self.nbits).map(|i| self.get_index(i)).collect()
    }

    /// Set every bit that is set in `other`.
    pub fn union_with(&mut self, other: &Fingerprint) {
        assert_eq!(self.nbits, other.nbits, "fingerprints must have the same size");
        for (w, o) in self.words.iter_mut().zip(&other.words) {
            *w |= o;
        }
    }

    /// Whether every bit set in `other` is also set here.
    pub fn is_superset_of(&self, other: &Fingerprint) -> bool {
        self.words.iter().zip(&other.words).all(|(w, o)| w & o == *o)
    }

    /// SHA-256 of the packed words, hex encoded.
    pub fn content_hash(&self) -> String {
        let mut hasher = Sha256::new();
        for word in &self.words {
            hasher.update(word.to_le_bytes());
        }
        hex::encode(hasher.finalize())
    }

    /// A one-line summary suitable for display.
    pub fn summary(&self) -> String {
        format!("Fingerprint: {} of {} bits set", self.count_ones(), self.nbits)
    }
}

impl FingerprintSink for Fingerprint {
    fn set_index(&mut self, index: usize) {
        assert!(index < self.nbits, "bit index {index} out of range ({} bits)", self.nbits);
        self.words[index / 64] |= 1u64 << (index % 64);
    }
}

/// A fingerprint that many threads may write at once.
///
/// Setting a bit is a relaxed `fetch_or`, which is idempotent and commutative,
/// so no ordering between writers is needed.
#[derive(Debug)]
pub struct SharedFingerprint {
    words: Vec<AtomicU64>,
    nbits: usize,
}

impl Default for SharedFingerprint {
    fn default() -> Self {
        Self::new()
    }
}

impl SharedFingerprint {
    pub fn new() -> Self {
        let nbits = catalogue_len();
        SharedFingerprint {
            words: (0..(nbits + 63) / 64).map(|_| AtomicU64::new(0)).collect(),
            nbits,
        }
    }

    pub fn set_index(&self, index: usize) {
        assert!(index < self.nbits, "bit index {index} out of range ({} bits)", self.nbits);
        self.words[index / 64].fetch_or(1u64 << (index % 64), Ordering::Relaxed);
    }

    /// Snapshot into a plain fingerprint.
    pub fn into_fingerprint(self) -> Fingerprint {
        Fingerprint {
            words: self.words.into_iter().map(AtomicU64::into_inner).collect(),
            nbits: self.nbits,
        }
    }
}

impl FingerprintSink for &SharedFingerprint {
    fn set_index(&mut self, index: usize) {
        SharedFingerprint::set_index(self, index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bit_operations() {
        let mut fp = Fingerprint::new();
        assert_eq!(fp.count_ones(), 0);
        assert!(!fp.get(Motif::CarbonCarbonDoubleBond));
        fp.set(Motif::CarbonCarbonDoubleBond);
        assert!(fp.get(Motif::CarbonCarbonDoubleBond));
        fp.set(Motif::CarbonCarbonDoubleBond);
        assert_eq!(fp.count_ones(), 1);
        assert_eq!(fp.names(), vec![Motif::CarbonCarbonDoubleBond.name()]);
    }

    #[test]
    fn catalogue_layout() {
        assert_eq!(catalogue_len(), Motif::COUNT + chain::descriptors().len());
        let fp = Fingerprint::new();
        assert_eq!(fp.len(), catalogue_len());
        assert_eq!(bit_name(0), Some(Motif::ALL[0].name()));
        assert_eq!(bit_index(Motif::Phenol.name()), Some(Motif::Phenol.index()));
        let fa = chain::lookup(chain::ChainClass::FattyAcid, 18, 2).unwrap();
        assert_eq!(bit_index("Fatty acid 18:2"), Some(Bit::from(fa).index()));
    }

    #[test]
    fn catalogue_names_unique() {
        let cat = catalogue();
        assert_eq!(cat.names.len(), cat.index.len());
    }

    #[test]
    fn named_access() {
        let mut fp = Fingerprint::new();
        fp.set_named("Fatty acid 18:2").unwrap();
        assert!(fp.get_named("Fatty acid 18:2").unwrap());
        assert!(matches!(fp.set_named("No such motif"), Err(MotifError::UnknownBit(_))));
    }

    #[test]
    fn union_and_superset() {
        let mut a = Fingerprint::new();
        let mut b = Fingerprint::new();
        a.set(Motif::Phenol);
        b.set(Motif::CarbonCarbonDoubleBond);
        assert!(!a.is_superset_of(&b));
        a.union_with(&b);
        assert!(a.is_superset_of(&b));
        assert_eq!(a.count_ones(), 2);
    }

    #[test]
    fn content_hash_is_deterministic() {
        let mut a = Fingerprint::new();
        a.set(Motif::Phenol);
        let b = a.clone();
        assert_eq!(a.content_hash(), b.content_hash());
        assert_eq!(a.content_hash().len(), 64);
        assert_ne!(a.content_hash(), Fingerprint::new().content_hash());
        assert!(a.summary().contains("1 of"));
    }

    #[test]
    fn shared_matches_plain() {
        let shared = SharedFingerprint::new();
        let mut sink = &shared;
        sink.set(Motif::Phenol);
        sink.set(Motif::Phenol);
        let fp = shared.into_fingerprint();
        let mut plain = Fingerprint::new();
        plain.set(Motif::Phenol);
        assert_eq!(fp, plain);
    }
}
