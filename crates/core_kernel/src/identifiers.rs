//! Strongly-typed identifiers for domain entities
//!
//! Identifiers are positive integers handed out by a single [`IdGenerator`],
//! so a value is unique across every entity kind. Wrapping them in newtypes
//! keeps a claim id from being passed where an image id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};

macro_rules! define_id {
    ($name:ident, $prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Creates from a raw value
            pub const fn new(value: u64) -> Self {
                Self(value)
            }

            /// Returns the raw value
            pub const fn value(&self) -> u64 {
                self.0
            }

            /// Returns the identifier prefix for display
            pub fn prefix() -> &'static str {
                $prefix
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}-{}", $prefix, self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                // Strip prefix if present
                let raw = s.strip_prefix(concat!($prefix, "-")).unwrap_or(s);
                Ok(Self(raw.parse()?))
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for u64 {
            fn from(id: $name) -> u64 {
                id.0
            }
        }
    };
}

define_id!(UserId, "USR");
define_id!(ClaimId, "CLM");
define_id!(AssessmentId, "DMG");
define_id!(EstimationId, "EST");
define_id!(ImageId, "IMG");

/// Monotonic identifier source shared by every entity kind in a store
///
/// The first value handed out is 1. Safe to share between threads.
#[derive(Debug)]
pub struct IdGenerator {
    next: AtomicU64,
}

impl IdGenerator {
    /// Creates a generator whose first identifier is 1
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Creates a generator whose first identifier is `first`
    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first.max(1)),
        }
    }

    /// Returns the next identifier, converted to the requested id type
    pub fn next_id<T: From<u64>>(&self) -> T {
        T::from(self.next.fetch_add(1, Ordering::Relaxed))
    }

    /// Ensures no identifier at or below `used` is ever handed out
    ///
    /// Used when records with pre-assigned ids are loaded into a store.
    pub fn reserve_through(&self, used: u64) {
        self.next.fetch_max(used.saturating_add(1), Ordering::Relaxed);
    }

    /// Returns the identifier the next call to [`IdGenerator::next_id`] will use
    pub fn peek(&self) -> u64 {
        self.next.load(Ordering::Relaxed)
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
