//! Path-based structural motif fingerprints for MS structure elucidation.
//!
//! A molecule is supplied as a [`GraphContext`] of atoms, bonds, rings and
//! fused ringsets carrying precomputed local environments. Linear paths of
//! 2 to 13 atoms are dispatched on their connectivity signature to per-length
//! rule tables that set named [`Motif`] bits; unbranched acyl chains set
//! [`ChainDescriptor`] bits. Both land in one fixed-layout [`Fingerprint`].
//!
//! # Example
//!
//! ```
//! use cyanea_motif::{BondOrder, GraphBuilder, Motif, MotifEngine};
//!
//! // ethyl acetate
//! let mut b = GraphBuilder::new();
//! let c1 = b.add_atom("C");
//! let c2 = b.add_atom("C");
//! let oxo = b.add_atom("O");
//! let o = b.add_atom("O");
//! let c3 = b.add_atom("C");
//! let c4 = b.add_atom("C");
//! b.add_bond(c1, c2, BondOrder::Single);
//! b.add_bond(c2, oxo, BondOrder::Double);
//! b.add_bond(c2, o, BondOrder::Single);
//! b.add_bond(o, c3, BondOrder::Single);
//! b.add_bond(c3, c4, BondOrder::Single);
//! let ctx = b.build().unwrap();
//!
//! let fp = MotifEngine::new().fingerprint_molecule(&ctx);
//! assert!(fp.get(Motif::EsterCarbonyl));
//! assert!(fp.get_named("Ethyl ester").unwrap());
//! ```

pub mod chain;
pub mod engine;
pub mod enumerate;
pub mod error;
pub mod fingerprint;
pub mod graph;
pub mod motif;
pub mod path;
pub mod rules;

mod branch;
mod classify;

#[cfg(test)]
mod testing;

pub use chain::{classify_chain, ChainClass, ChainDescriptor};
pub use classify::RingMember;
pub use engine::{EngineOptions, MotifEngine};
pub use enumerate::{detect_acyl_chains, enumerate_paths, Chain};
pub use error::{MotifError, Result};
pub use fingerprint::{Bit, Fingerprint, FingerprintSink, SharedFingerprint};
pub use graph::{
    AtomId, BondId, BondOrder, FunctionGroup, GraphBuilder, GraphContext, RingId, RingSetId, RingSetType,
    RingType,
};
pub use motif::Motif;
pub use path::{Path, PathView};
pub use rules::RuleTables;
