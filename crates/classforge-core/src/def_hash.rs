//! Deterministic hash-based definition identity.
//!
//! This module provides [`DefHash`], a 64-bit hash that identifies class
//! definitions and method signatures. Unlike sequential IDs, hashes are
//! computed deterministically from names, enabling:
//!
//! - Identity that survives the definition being renamed out of the registry
//! - Duplicate-load detection in the materializer without back-references
//! - Same name = same hash, in any process, in any order
//!
//! # Hash Computation
//!
//! Uses XXHash64 with domain-specific mixing constants so that a class
//! named `x` and a method named `x` never collide.
//!
//! # Examples
//!
//! ```
//! use classforge_core::DefHash;
//!
//! let a = DefHash::from_name("Point");
//! let b = DefHash::from_name("Point");
//! assert_eq!(a, b); // deterministic
//!
//! // Method hashes include arity
//! let m0 = DefHash::from_method("get", 0);
//! let m1 = DefHash::from_method("get", 1);
//! assert_ne!(m0, m1);
//! ```

use std::fmt;

use xxhash_rust::xxh64::xxh64;

/// Domain-specific mixing constants for hash computation.
///
/// These constants ensure that different entity kinds (classes, methods)
/// produce distinct hashes even when they share a name.
pub mod hash_constants {
    /// Separator constant mixed between hash components.
    pub const SEP: u64 = 0x4bc94d6bd06053ad;

    /// Domain marker for class definition hashes.
    pub const CLASS: u64 = 0x2fac10b63a6cc57c;

    /// Domain marker for method signature hashes.
    pub const METHOD: u64 = 0x7d3c8b4a92e15f6d;
}

/// A deterministic 64-bit hash identifying a class definition or a method
/// signature.
///
/// Computed from the class name (for definitions) or name+arity (for
/// methods). The same input always produces the same hash, so the
/// materializer can recognize a definition it already loaded even after
/// the registry entry was renamed away by a derivation.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct DefHash(pub u64);

impl DefHash {
    /// Empty/invalid hash constant.
    pub const EMPTY: DefHash = DefHash(0);

    /// Create a definition hash from a class name.
    ///
    /// The same name always produces the same hash.
    pub fn from_name(name: &str) -> Self {
        DefHash(xxh64(name.as_bytes(), hash_constants::CLASS))
    }

    /// Create a method signature hash from a method name and arity.
    ///
    /// Overloads of the same name with different arity get distinct hashes.
    pub fn from_method(name: &str, arity: usize) -> Self {
        let base = xxh64(name.as_bytes(), hash_constants::METHOD);
        let mixed = base ^ hash_constants::SEP.wrapping_mul(arity as u64 + 1);
        DefHash(xxh64(&mixed.to_le_bytes(), hash_constants::SEP))
    }

    /// Whether this is the empty hash.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Debug for DefHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DefHash({:#018x})", self.0)
    }
}

impl fmt::Display for DefHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#018x}", self.0)
    }
}
