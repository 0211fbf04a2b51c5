//! Single-qubit Pauli operators and their product table.
//!
//! The four single-qubit operators form a group up to phase:
//!
//!   P·P = I                     for P ∈ {X, Y, Z}
//!   X·Y = +iZ,  Y·Z = +iX,  Z·X = +iY
//!   Y·X = −iZ,  Z·Y = −iX,  X·Z = −iY
//!
//! Phases produced by the table are always powers of `i`, so they are
//! tracked exactly as a [`Phase`] exponent and only turned into a complex
//! number when they meet a coefficient.
//!
//! Matrix convention: `Y = [[0, −i], [i, 0]]`. X and Z are real and
//! symmetric, Y is imaginary and antisymmetric, which fixes the signs used
//! by conjugation and transposition.

use std::fmt;
use std::ops::{Mul, MulAssign};

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

/// Single-qubit Pauli operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PauliOp {
    /// Identity. Never stored inside a [`PauliString`](crate::PauliString).
    I,
    /// Pauli-X.
    X,
    /// Pauli-Y.
    Y,
    /// Pauli-Z.
    Z,
}

impl PauliOp {
    /// The three non-identity operators in cyclic order.
    pub const CYCLE: [PauliOp; 3] = [PauliOp::X, PauliOp::Y, PauliOp::Z];

    /// Parse a Pauli letter (case-insensitive).
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'I' => Some(PauliOp::I),
            'X' => Some(PauliOp::X),
            'Y' => Some(PauliOp::Y),
            'Z' => Some(PauliOp::Z),
            _ => None,
        }
    }

    /// Upper-case letter for this operator.
    pub fn letter(self) -> char {
        match self {
            PauliOp::I => 'I',
            PauliOp::X => 'X',
            PauliOp::Y => 'Y',
            PauliOp::Z => 'Z',
        }
    }

    /// True for [`PauliOp::I`].
    pub fn is_identity(self) -> bool {
        self == PauliOp::I
    }

    /// Position in [`PauliOp::CYCLE`], `None` for the identity.
    fn cycle_index(self) -> Option<usize> {
        match self {
            PauliOp::I => None,
            PauliOp::X => Some(0),
            PauliOp::Y => Some(1),
            PauliOp::Z => Some(2),
        }
    }

    /// Ordered product `self · rhs` on one qubit.
    ///
    /// Returns the phase and the resulting operator. Order matters:
    /// `X.product(Y)` is `(+i, Z)` while `Y.product(X)` is `(−i, Z)`.
    pub fn product(self, rhs: PauliOp) -> (Phase, PauliOp) {
        let (Some(a), Some(b)) = (self.cycle_index(), rhs.cycle_index()) else {
            // Identity is neutral on either side.
            return (Phase::ONE, if self.is_identity() { rhs } else { self });
        };
        if a == b {
            return (Phase::ONE, PauliOp::I);
        }
        let third = Self::CYCLE[3 - a - b];
        if b == (a + 1) % 3 {
            (Phase::I, third)
        } else {
            (Phase::MINUS_I, third)
        }
    }

    /// Sign picked up under complex conjugation: −1 for Y, +1 otherwise.
    pub fn conjugate_sign(self) -> Phase {
        match self {
            PauliOp::Y => Phase::MINUS_ONE,
            _ => Phase::ONE,
        }
    }

    /// Sign picked up under transposition: −1 for Y, +1 otherwise.
    pub fn transpose_sign(self) -> Phase {
        // Y is the only antisymmetric Pauli matrix.
        match self {
            PauliOp::Y => Phase::MINUS_ONE,
            _ => Phase::ONE,
        }
    }
}

impl fmt::Display for PauliOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// An exact phase `i^k`, `k ∈ {0, 1, 2, 3}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "u8")]
pub struct Phase(u8);

impl Phase {
    /// `+1`
    pub const ONE: Phase = Phase(0);
    /// `+i`
    pub const I: Phase = Phase(1);
    /// `−1`
    pub const MINUS_ONE: Phase = Phase(2);
    /// `−i`
    pub const MINUS_I: Phase = Phase(3);

    /// Phase `i^exponent`.
    pub fn from_exponent(exponent: u8) -> Self {
        Phase(exponent % 4)
    }

    /// The exponent `k` in `i^k`, reduced mod 4.
    pub fn exponent(self) -> u8 {
        self.0
    }

    /// Complex conjugate: `i^k → i^(−k)`.
    #[must_use]
    pub fn conj(self) -> Self {
        Phase((4 - self.0) % 4)
    }

    /// The phase as a complex number.
    pub fn to_complex(self) -> Complex64 {
        self.apply(Complex64::new(1.0, 0.0))
    }

    /// Multiply `value` by this phase.
    ///
    /// Implemented as a component swap/negation so no rounding occurs.
    pub fn apply(self, value: Complex64) -> Complex64 {
        match self.0 {
            0 => value,
            1 => Complex64::new(-value.im, value.re),
            2 => Complex64::new(-value.re, -value.im),
            _ => Complex64::new(value.im, -value.re),
        }
    }
}

impl Mul for Phase {
    type Output = Phase;

    fn mul(self, rhs: Phase) -> Phase {
        Phase((self.0 + rhs.0) % 4)
    }
}

impl MulAssign for Phase {
    fn mul_assign(&mut self, rhs: Phase) {
        *self = *self * rhs;
    }
}

impl From<u8> for Phase {
    fn from(exponent: u8) -> Self {
        Phase::from_exponent(exponent)
    }
}

impl From<Phase> for Complex64 {
    fn from(phase: Phase) -> Self {
        phase.to_complex()
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self.0 {
            0 => "+1",
            1 => "+i",
            2 => "-1",
            _ => "-i",
        };
        f.write_str(s)
    }
}
