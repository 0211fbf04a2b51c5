//! `arvak-pauli` — exact operator algebra in the Pauli basis.
//!
//! Operators on a qubit register are represented as weighted sums of Pauli
//! strings:
//!
//!   H = Σ_k  c_k · P_k,   c_k ∈ ℂ
//!
//! and combined with addition, scalar and operator multiplication, complex
//! conjugation, transposition and the Hermitian adjoint. Products of Pauli
//! strings are resolved with the single-qubit product table and exact
//! phase bookkeeping, so identities such as `X·Y = iZ` hold with `==`.
//!
//! - [`PauliOp`] / [`Phase`]: single-qubit operators and powers of `i`
//! - [`PauliString`]: canonical tensor-product key type
//! - [`QubitHamiltonian`]: the weighted sum, home of all arithmetic
//! - [`OperatorAlgebra`]: the numeric-operator capability it implements
//! - [`paulis`]: generators, ladder operators, projectors and transfer
//!   operators
//!
//! Circuit construction and execution live in other crates; they consume
//! these operators as plain values.
//!
//! # Quick start
//!
//! ```rust
//! use arvak_pauli::{paulis, QubitHamiltonian};
//! use num_complex::Complex64;
//!
//! // σ⁺σ⁻ = |0⟩⟨0|
//! assert_eq!(paulis::sp(0) * paulis::sm(0), paulis::qp(0));
//!
//! // Y is imaginary: conj(Y) = −Y, but Y† = Y
//! let y = paulis::y(3);
//! assert_eq!(y.conjugate(), -y.clone());
//! assert_eq!(y.dagger(), y);
//!
//! let h: QubitHamiltonian = "X0Y1Z2".parse().unwrap();
//! let i = Complex64::i();
//! assert_eq!((h.clone() * i).dagger(), h.dagger() * -i);
//! ```

pub mod algebra;
pub mod bitstring;
pub mod error;
pub mod hamiltonian;
pub mod pauli;
pub mod paulis;
pub mod sparse;
pub mod string;

pub use algebra::OperatorAlgebra;
pub use bitstring::BitString;
pub use error::{PauliError, PauliResult};
pub use hamiltonian::QubitHamiltonian;
pub use pauli::{PauliOp, Phase};
pub use paulis::decompose_transfer_operator;
pub use sparse::{PauliTerm, SparseTerm};
pub use string::PauliString;
