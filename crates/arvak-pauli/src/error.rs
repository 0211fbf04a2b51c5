//! Error types for the Pauli algebra crate.

use thiserror::Error;

/// Errors produced while constructing Pauli operators.
///
/// Arithmetic on well-formed operators never fails. Variants are raised at
/// construction or parsing boundaries and by the checked scalar operations
/// (`try_scale`, `try_div`).
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum PauliError {
    /// A Pauli letter other than I, X, Y, Z (case-insensitive).
    #[error("Unknown Pauli letter '{letter}' at position {position}")]
    InvalidPauliLetter {
        /// The offending character.
        letter: char,
        /// Byte offset in the input string, or the entry index when the
        /// letter comes from a `(qubit, letter)` table.
        position: usize,
    },

    /// A Pauli letter was not followed by a qubit index.
    #[error("Pauli letter at position {position} is not followed by a qubit index")]
    MissingQubitIndex {
        /// Byte offset of the letter in the input string.
        position: usize,
    },

    /// A qubit index could not be parsed as a non-negative integer.
    #[error("Invalid qubit index '{text}'")]
    InvalidQubitIndex {
        /// The text that failed to parse.
        text: String,
    },

    /// The same qubit was assigned more than once within one term.
    #[error("Qubit {qubit} is assigned more than once")]
    DuplicateQubit {
        /// The repeated qubit index.
        qubit: u32,
    },

    /// Division by an exactly zero scalar.
    #[error("Cannot divide an operator by zero")]
    ZeroDivisor,

    /// An externally supplied coefficient is NaN or infinite.
    #[error("Coefficient ({re}, {im}) is not a finite complex number")]
    NonFiniteCoefficient {
        /// Real part.
        re: f64,
        /// Imaginary part.
        im: f64,
    },

    /// A bit pattern contained characters other than 0 and 1.
    #[error("Invalid bit string: {0}")]
    InvalidBitString(String),

    /// A bit pattern does not fit the supplied qubit list.
    #[error("Bit pattern has {bits} bits but {qubits} qubits were supplied")]
    QubitCountMismatch {
        /// Width of the bit pattern.
        bits: usize,
        /// Number of qubits in the explicit list.
        qubits: usize,
    },
}

/// Result type for Pauli construction and parsing.
pub type PauliResult<T> = Result<T, PauliError>;
