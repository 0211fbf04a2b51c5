//! Single weighted Pauli terms and the external sparse form.
//!
//! [`PauliTerm`] is the engine's own `(string, coefficient)` pair.
//! [`SparseTerm`] is the interchange form used by third-party operator
//! libraries: a list of `(qubit, letter)` assignments plus a coefficient,
//! e.g. `((0, 'X'), (1, 'Y'))` with `0.5`. Conversion from the sparse form
//! validates letters, duplicate qubits and coefficient finiteness.

use std::fmt;

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::error::{PauliError, PauliResult};
use crate::pauli::PauliOp;
use crate::string::PauliString;

/// Reject NaN and infinite coefficients.
pub(crate) fn check_finite(coeff: Complex64) -> PauliResult<Complex64> {
    if coeff.is_finite() {
        Ok(coeff)
    } else {
        Err(PauliError::NonFiniteCoefficient {
            re: coeff.re,
            im: coeff.im,
        })
    }
}

/// A single weighted Pauli term: `coeff · pauli`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PauliTerm {
    /// Complex coefficient.
    pub coeff: Complex64,
    /// The Pauli string.
    pub pauli: PauliString,
}

impl PauliTerm {
    /// Create a new term.
    pub fn new(coeff: Complex64, pauli: PauliString) -> Self {
        Self { coeff, pauli }
    }

    /// Build a term from a `(qubit, letter)` table and a coefficient.
    pub fn from_sparse(ops: &[(u32, char)], coeff: Complex64) -> PauliResult<Self> {
        let coeff = check_finite(coeff)?;
        let ops = ops
            .iter()
            .enumerate()
            .map(|(position, &(qubit, letter))| {
                PauliOp::from_letter(letter)
                    .map(|op| (qubit, op))
                    .ok_or(PauliError::InvalidPauliLetter { letter, position })
            })
            .collect::<PauliResult<Vec<_>>>()?;
        Ok(Self::new(coeff, PauliString::from_ops(ops)?))
    }

    /// Export as a `(qubit, letter)` table, ascending by qubit.
    pub fn to_sparse(&self) -> SparseTerm {
        SparseTerm {
            ops: self
                .pauli
                .ops()
                .iter()
                .map(|(q, op)| (*q, op.letter()))
                .collect(),
            coeff: self.coeff,
        }
    }
}

impl fmt::Display for PauliTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.coeff;
        if c.im == 0.0 {
            write!(f, "{:+.4}{}", c.re, self.pauli)
        } else {
            write!(f, "+({:.4}{:+.4}i){}", c.re, c.im, self.pauli)
        }
    }
}

/// External sparse representation of one weighted Pauli string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SparseTerm {
    /// `(qubit, Pauli letter)` assignments.
    pub ops: Vec<(u32, char)>,
    /// Coefficient.
    pub coeff: Complex64,
}

impl SparseTerm {
    /// Create a new sparse term.
    pub fn new(ops: impl IntoIterator<Item = (u32, char)>, coeff: Complex64) -> Self {
        Self {
            ops: ops.into_iter().collect(),
            coeff,
        }
    }
}

impl TryFrom<&SparseTerm> for PauliTerm {
    type Error = PauliError;

    fn try_from(term: &SparseTerm) -> PauliResult<Self> {
        PauliTerm::from_sparse(&term.ops, term.coeff)
    }
}

impl TryFrom<SparseTerm> for PauliTerm {
    type Error = PauliError;

    fn try_from(term: SparseTerm) -> PauliResult<Self> {
        PauliTerm::try_from(&term)
    }
}

impl From<&PauliTerm> for SparseTerm {
    fn from(term: &PauliTerm) -> Self {
        term.to_sparse()
    }
}
