//! The 1..=90 number space of a tombola draw.

use serde::Serialize;

use crate::errors::domain::{DomainError, ValidationKind};

pub const MIN_NUMBER: u8 = 1;
pub const MAX_NUMBER: u8 = 90;
pub const TOTAL_NUMBERS: usize = MAX_NUMBER as usize;

/// A number that can legally be drawn. Only constructible inside `[1, 90]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct DrawnNumber(u8);

impl DrawnNumber {
    pub fn new(value: i64) -> Result<Self, DomainError> {
        if (MIN_NUMBER as i64..=MAX_NUMBER as i64).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(DomainError::validation(
                ValidationKind::InvalidNumber,
                format!("Number must be between {MIN_NUMBER} and {MAX_NUMBER}, got {value}"),
            ))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Every drawable number in ascending order.
    pub fn all() -> impl Iterator<Item = DrawnNumber> {
        (MIN_NUMBER..=MAX_NUMBER).map(DrawnNumber)
    }
}

impl std::fmt::Display for DrawnNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<DrawnNumber> for i32 {
    fn from(n: DrawnNumber) -> Self {
        n.0 as i32
    }
}
