//! # Value Objects
//!
//! Inclusive integer ranges used for penalty points and fines.

use serde::{Deserialize, Serialize};

use crate::errors::OffenseError;

/// Integer type for fines, in whole currency units.
pub type Amount = i64;

/// Integer type for penalty points.
pub type Points = i64;

/// An inclusive `[min, max]` range with `0 <= min <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bounds {
    min: i64,
    max: i64,
}

impl Bounds {
    /// Build a range, rejecting negative or inverted bounds.
    ///
    /// `field` names the range in the returned error ("fine", "penalty points").
    pub fn new(field: &'static str, min: i64, max: i64) -> Result<Self, OffenseError> {
        if min < 0 {
            return Err(OffenseError::NegativeBound { field, value: min });
        }
        if min > max {
            return Err(OffenseError::InvertedRange { field, min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> i64 {
        self.min
    }

    pub fn max(&self) -> i64 {
        self.max
    }

    /// True iff `min <= value <= max`.
    pub fn contains(&self, value: i64) -> bool {
        value >= self.min && value <= self.max
    }

    /// True when the range admits exactly one value.
    pub fn is_exact(&self) -> bool {
        self.min == self.max
    }
}
