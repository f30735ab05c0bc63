//! Strongly-typed ID wrappers for all entity types
//!
//! Using newtype wrappers prevents accidentally mixing up IDs from different
//! entity types at compile time. IDs persist as plain JSON numbers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident, $display_prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Create an ID from its raw numeric value
            pub const fn from_raw(raw: u64) -> Self {
                Self(raw)
            }

            /// Get the underlying numeric value
            pub const fn raw(&self) -> u64 {
                self.0
            }

            /// Parse an ID, with or without its display prefix
            pub fn parse(s: &str) -> Result<Self, ParseIntError> {
                s.parse()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $display_prefix, self.0)
            }
        }

        impl From<u64> for $name {
            fn from(raw: u64) -> Self {
                Self(raw)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                let s = s.strip_prefix($display_prefix).unwrap_or(s);
                Ok(Self(s.parse()?))
            }
        }
    };
}

define_id!(ExpenseId, "exp-");
define_id!(SubscriptionId, "sub-");
define_id!(IncomeId, "inc-");
define_id!(SampleId, "smp-");

/// Strictly increasing source of raw IDs.
///
/// Seeded above both the highest ID already in use and the current epoch
/// milliseconds, so deleting the newest entry and adding another can never
/// hand the old ID back out, in this session or after a reload.
#[derive(Debug, Clone)]
pub struct IdSequence {
    next: u64,
}

impl IdSequence {
    /// Create a sequence that starts after `highest_in_use` and no earlier
    /// than `now_millis`
    pub fn seeded(highest_in_use: Option<u64>, now_millis: i64) -> Self {
        let after_existing = highest_in_use.map_or(1, |max| max.saturating_add(1));
        let clock = u64::try_from(now_millis).unwrap_or(0);
        Self {
            next: after_existing.max(clock).max(1),
        }
    }

    /// Seed from the wall clock
    pub fn from_clock(highest_in_use: Option<u64>) -> Self {
        Self::seeded(highest_in_use, chrono::Utc::now().timestamp_millis())
    }

    /// Hand out the next raw ID
    pub fn next_raw(&mut self) -> u64 {
        let id = self.next;
        self.next = self.next.saturating_add(1);
        id
    }

    /// The raw ID the next call to `next_raw` returns
    pub fn peek(&self) -> u64 {
        self.next
    }

    /// Never go below `raw + 1` from now on
    pub fn observe(&mut self, raw: u64) {
        self.next = self.next.max(raw.saturating_add(1));
    }
}
