//! Computational-basis bit patterns.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{PauliError, PauliResult};

/// A basis-state bit pattern, most significant bit first.
///
/// Bit `k` (counting from the left) belongs to the `k`-th qubit of whatever
/// register the pattern is applied to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BitString {
    bits: Vec<bool>,
}

impl BitString {
    /// Parse a binary literal such as `"0110"` (an optional `0b` prefix is
    /// accepted).
    pub fn from_binary(binary: &str) -> PauliResult<Self> {
        let digits = binary.trim();
        let digits = digits.strip_prefix("0b").unwrap_or(digits);
        if digits.is_empty() {
            return Err(PauliError::InvalidBitString(format!(
                "'{binary}' contains no bits"
            )));
        }
        let bits = digits
            .chars()
            .map(|c| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                other => Err(PauliError::InvalidBitString(format!(
                    "unexpected character '{other}' in '{binary}'"
                ))),
            })
            .collect::<PauliResult<Vec<_>>>()?;
        Ok(Self { bits })
    }

    /// Binary representation of `value`.
    ///
    /// Without `nbits` the minimal width is used (at least one bit).
    pub fn from_int(value: u64, nbits: Option<usize>) -> PauliResult<Self> {
        let min_width = (64 - value.leading_zeros() as usize).max(1);
        let width = match nbits {
            Some(n) if n < min_width => {
                return Err(PauliError::InvalidBitString(format!(
                    "{value} does not fit in {n} bits"
                )));
            }
            Some(n) => n,
            None => min_width,
        };
        let bits = (0..width)
            .rev()
            .map(|k| k < 64 && (value >> k) & 1 == 1)
            .collect();
        Ok(Self { bits })
    }

    /// The bits, most significant first.
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Number of bits.
    pub fn nbits(&self) -> usize {
        self.bits.len()
    }

    /// Integer value, or `None` if the pattern is wider than 64 significant bits.
    pub fn to_int(&self) -> Option<u64> {
        self.bits.iter().try_fold(0u64, |acc, &b| {
            acc.checked_mul(2).map(|v| v | u64::from(b))
        })
    }

    /// Left-pad with zeros to `width` bits (no-op if already as wide).
    #[must_use]
    pub fn padded(&self, width: usize) -> Self {
        let pad = width.saturating_sub(self.bits.len());
        let mut bits = vec![false; pad];
        bits.extend_from_slice(&self.bits);
        Self { bits }
    }
}

impl From<u64> for BitString {
    fn from(value: u64) -> Self {
        let min_width = (64 - value.leading_zeros() as usize).max(1);
        Self {
            bits: (0..min_width).rev().map(|k| (value >> k) & 1 == 1).collect(),
        }
    }
}

impl From<u32> for BitString {
    fn from(value: u32) -> Self {
        Self::from(u64::from(value))
    }
}

impl From<bool> for BitString {
    fn from(bit: bool) -> Self {
        Self { bits: vec![bit] }
    }
}

impl fmt::Display for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.bits {
            f.write_str(if b { "1" } else { "0" })?;
        }
        Ok(())
    }
}
