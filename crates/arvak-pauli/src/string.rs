//! Pauli strings: tensor products of single-qubit Pauli operators.
//!
//! A [`PauliString`] stores its non-identity factors as a `Vec<(qubit, op)>`
//! sorted by qubit index. Identity factors are never stored; qubits not
//! listed are implicitly I. Because the representation is canonical, the
//! derived `Eq`/`Hash` make it a stable map key.
//!
//! # Text form
//!
//! `"X0Y1Z2"` is X on qubit 0, Y on qubit 1 and Z on qubit 2. Letters are
//! case-insensitive, whitespace between factors is ignored, explicit `I`
//! factors are accepted and dropped. The empty string (or a bare `"I"`) is
//! the identity string.
//!
//! ```rust
//! use arvak_pauli::{PauliOp, PauliString, Phase};
//!
//! let xy: PauliString = "X0 Y1".parse().unwrap();
//! let yz: PauliString = "y0z1".parse().unwrap();
//!
//! // (X⊗Y)(Y⊗Z) = (XY)⊗(YZ) = (iZ)⊗(iX) = −Z⊗X
//! let (phase, product) = xy.compose(&yz);
//! assert_eq!(phase, Phase::MINUS_ONE);
//! assert_eq!(product.ops(), &[(0, PauliOp::Z), (1, PauliOp::X)]);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PauliError, PauliResult};
use crate::pauli::{PauliOp, Phase};

/// A tensor product of Pauli operators on named qubits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Vec<(u32, PauliOp)>", into = "Vec<(u32, PauliOp)>")]
pub struct PauliString {
    /// Non-identity factors, sorted by qubit index ascending, unique qubits.
    ops: Vec<(u32, PauliOp)>,
}

impl PauliString {
    /// The identity string (no factors).
    pub fn identity() -> Self {
        Self::default()
    }

    /// A single factor `op` on `qubit`. `PauliOp::I` yields the identity string.
    pub fn single(qubit: u32, op: PauliOp) -> Self {
        if op.is_identity() {
            return Self::identity();
        }
        Self {
            ops: vec![(qubit, op)],
        }
    }

    /// Construct a PauliString from an iterator of (qubit, op) pairs.
    ///
    /// Identity operators are dropped and the remaining ops are sorted by
    /// qubit. Assigning the same qubit twice (identity included) is an
    /// error.
    pub fn from_ops(ops: impl IntoIterator<Item = (u32, PauliOp)>) -> PauliResult<Self> {
        let mut v: Vec<(u32, PauliOp)> = ops.into_iter().collect();
        v.sort_by_key(|(q, _)| *q);
        if let Some(w) = v.windows(2).find(|w| w[0].0 == w[1].0) {
            return Err(PauliError::DuplicateQubit { qubit: w[0].0 });
        }
        v.retain(|(_, op)| !op.is_identity());
        Ok(Self { ops: v })
    }

    /// Return the non-identity (qubit, op) pairs, sorted by qubit index.
    pub fn ops(&self) -> &[(u32, PauliOp)] {
        &self.ops
    }

    /// Number of non-identity factors (the Pauli weight).
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// True if there are no non-identity operators.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// True if there are no non-identity operators (pure global phase).
    pub fn is_identity(&self) -> bool {
        self.ops.is_empty()
    }

    /// The highest qubit index referenced, or `None` for an identity string.
    pub fn max_qubit(&self) -> Option<u32> {
        self.ops.last().map(|(q, _)| *q)
    }

    /// Qubits carrying a non-identity factor, ascending.
    pub fn qubits(&self) -> impl Iterator<Item = u32> + '_ {
        self.ops.iter().map(|(q, _)| *q)
    }

    /// The operator acting on `qubit` (I if the qubit is not mentioned).
    pub fn get(&self, qubit: u32) -> PauliOp {
        self.ops
            .binary_search_by_key(&qubit, |(q, _)| *q)
            .map_or(PauliOp::I, |idx| self.ops[idx].1)
    }

    /// Ordered product `self · other`.
    ///
    /// Qubits present in only one operand are carried through. Qubits present
    /// in both are resolved with the single-qubit product table; identity
    /// results remove the qubit. The result is always a single string with
    /// an exact phase.
    pub fn compose(&self, other: &PauliString) -> (Phase, PauliString) {
        let mut phase = Phase::ONE;
        let mut ops = Vec::with_capacity(self.ops.len() + other.ops.len());
        let (mut i, mut j) = (0, 0);

        while i < self.ops.len() && j < other.ops.len() {
            let (qa, a) = self.ops[i];
            let (qb, b) = other.ops[j];
            match qa.cmp(&qb) {
                Ordering::Less => {
                    ops.push((qa, a));
                    i += 1;
                }
                Ordering::Greater => {
                    ops.push((qb, b));
                    j += 1;
                }
                Ordering::Equal => {
                    let (p, op) = a.product(b);
                    phase *= p;
                    if !op.is_identity() {
                        ops.push((qa, op));
                    }
                    i += 1;
                    j += 1;
                }
            }
        }
        ops.extend_from_slice(&self.ops[i..]);
        ops.extend_from_slice(&other.ops[j..]);

        (phase, PauliString { ops })
    }

    /// Number of Y factors.
    pub fn count_y(&self) -> usize {
        self.ops.iter().filter(|(_, op)| *op == PauliOp::Y).count()
    }

    /// Product of [`PauliOp::conjugate_sign`] over all factors.
    pub fn conjugate_sign(&self) -> Phase {
        self.ops
            .iter()
            .fold(Phase::ONE, |acc, (_, op)| acc * op.conjugate_sign())
    }

    /// Product of [`PauliOp::transpose_sign`] over all factors.
    pub fn transpose_sign(&self) -> Phase {
        self.ops
            .iter()
            .fold(Phase::ONE, |acc, (_, op)| acc * op.transpose_sign())
    }
}

impl TryFrom<Vec<(u32, PauliOp)>> for PauliString {
    type Error = PauliError;

    fn try_from(ops: Vec<(u32, PauliOp)>) -> PauliResult<Self> {
        Self::from_ops(ops)
    }
}

impl From<PauliString> for Vec<(u32, PauliOp)> {
    fn from(ps: PauliString) -> Self {
        ps.ops
    }
}

impl FromStr for PauliString {
    type Err = PauliError;

    fn from_str(s: &str) -> PauliResult<Self> {
        if s.trim().eq_ignore_ascii_case("I") {
            return Ok(Self::identity());
        }

        let mut ops = Vec::new();
        let mut chars = s.char_indices().peekable();

        while let Some((position, letter)) = chars.next() {
            if letter.is_whitespace() {
                continue;
            }
            let op = PauliOp::from_letter(letter)
                .ok_or(PauliError::InvalidPauliLetter { letter, position })?;

            let mut index = String::new();
            while let Some(&(_, c)) = chars.peek() {
                if c.is_whitespace() || c.is_ascii_alphabetic() {
                    break;
                }
                index.push(c);
                chars.next();
            }
            if index.is_empty() {
                return Err(PauliError::MissingQubitIndex { position });
            }
            if !index.bytes().all(|b| b.is_ascii_digit()) {
                return Err(PauliError::InvalidQubitIndex { text: index });
            }
            let qubit = index
                .parse::<u32>()
                .map_err(|_| PauliError::InvalidQubitIndex { text: index })?;
            ops.push((qubit, op));
        }

        Self::from_ops(ops)
    }
}

impl fmt::Display for PauliString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ops.is_empty() {
            return f.write_str("I");
        }
        for (q, op) in &self.ops {
            write!(f, "{op}{q}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_ops_sorts_and_drops_identity() {
        let ps = PauliString::from_ops([(3, PauliOp::X), (1, PauliOp::I), (0, PauliOp::Y)]).unwrap();
        assert_eq!(ps.ops(), &[(0, PauliOp::Y), (3, PauliOp::X)]);
    }

    #[test]
    fn test_from_ops_rejects_duplicates() {
        let err = PauliString::from_ops([(2, PauliOp::X), (2, PauliOp::Z)]).unwrap_err();
        assert_eq!(err, PauliError::DuplicateQubit { qubit: 2 });

        let err = PauliString::from_ops([(2, PauliOp::I), (2, PauliOp::Z)]).unwrap_err();
        assert_eq!(err, PauliError::DuplicateQubit { qubit: 2 });
    }

    #[test]
    fn test_get() {
        let ps: PauliString = "X0Z4".parse().unwrap();
        assert_eq!(ps.get(0), PauliOp::X);
        assert_eq!(ps.get(1), PauliOp::I);
        assert_eq!(ps.get(4), PauliOp::Z);
    }

    #[test]
    fn test_parse_and_display() {
        let ps: PauliString = "x0 Y1\tz12".parse().unwrap();
        assert_eq!(ps.to_string(), "X0Y1Z12");
        assert_eq!("".parse::<PauliString>().unwrap(), PauliString::identity());
        assert_eq!("I".parse::<PauliString>().unwrap(), PauliString::identity());
        assert_eq!("I3".parse::<PauliString>().unwrap(), PauliString::identity());
        assert_eq!(PauliString::identity().to_string(), "I");
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "X0Q1".parse::<PauliString>(),
            Err(PauliError::InvalidPauliLetter { letter: 'Q', position: 2 })
        ));
        assert!(matches!(
            "X".parse::<PauliString>(),
            Err(PauliError::MissingQubitIndex { position: 0 })
        ));
        assert!(matches!(
            "X1.5".parse::<PauliString>(),
            Err(PauliError::InvalidQubitIndex { .. })
        ));
        assert!(matches!(
            "X+1".parse::<PauliString>(),
            Err(PauliError::InvalidQubitIndex { ref text }) if text == "+1"
        ));
        assert!(matches!(
            "Z-0".parse::<PauliString>(),
            Err(PauliError::InvalidQubitIndex { .. })
        ));
        assert!(matches!(
            "X0Y0".parse::<PauliString>(),
            Err(PauliError::DuplicateQubit { qubit: 0 })
        ));
        assert!(matches!(
            "0X".parse::<PauliString>(),
            Err(PauliError::InvalidPauliLetter { letter: '0', .. })
        ));
    }

    #[test]
    fn test_compose_disjoint_is_concatenation() {
        let a: PauliString = "X0Z2".parse().unwrap();
        let b: PauliString = "Y1Y3".parse().unwrap();
        let (phase, c) = a.compose(&b);
        assert_eq!(phase, Phase::ONE);
        assert_eq!(c.to_string(), "X0Y1Z2Y3");
    }

    #[test]
    fn test_compose_overlapping() {
        let a: PauliString = "X0Y1".parse().unwrap();
        let b: PauliString = "X0X1".parse().unwrap();
        // X·X = I, Y·X = −iZ
        let (phase, c) = a.compose(&b);
        assert_eq!(phase, Phase::MINUS_I);
        assert_eq!(c.ops(), &[(1, PauliOp::Z)]);
    }

    #[test]
    fn test_compose_with_self_is_identity() {
        let a: PauliString = "X0Y1Z2".parse().unwrap();
        let (phase, c) = a.compose(&a);
        assert_eq!(phase, Phase::ONE);
        assert!(c.is_identity());
    }

    #[test]
    fn test_signs() {
        let ps: PauliString = "Y0Y1X2".parse().unwrap();
        assert_eq!(ps.count_y(), 2);
        assert_eq!(ps.conjugate_sign(), Phase::ONE);
        let ps: PauliString = "Y0Z1".parse().unwrap();
        assert_eq!(ps.conjugate_sign(), Phase::MINUS_ONE);
        assert_eq!(ps.transpose_sign(), Phase::MINUS_ONE);
    }

    #[test]
    fn test_max_qubit() {
        let ps: PauliString = "X0Z5".parse().unwrap();
        assert_eq!(ps.max_qubit(), Some(5));
        assert_eq!(PauliString::identity().max_qubit(), None);
        assert_eq!(ps.qubits().collect::<Vec<_>>(), vec![0, 5]);
    }
}
