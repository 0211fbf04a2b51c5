//! The numeric-operator capability shared by operator types.
//!
//! [`OperatorAlgebra`] names the operations an operator must support so
//! that generic code (expectation-value builders, circuit generators) can
//! work over it without caring about the concrete representation. The
//! `std::ops` overloads on [`QubitHamiltonian`](crate::QubitHamiltonian)
//! are thin wrappers around this trait.

/// Complex-linear operator algebra.
pub trait OperatorAlgebra: Sized {
    /// Scalar field the operator is defined over.
    type Scalar;

    /// `self + other`.
    fn add_operator(&self, other: &Self) -> Self;

    /// `scalar · self`.
    fn scale(&self, scalar: Self::Scalar) -> Self;

    /// Ordered product `self · other`.
    fn multiply(&self, other: &Self) -> Self;

    /// Entry-wise complex conjugate of the operator matrix.
    fn conjugate(&self) -> Self;

    /// Matrix transpose.
    fn transpose(&self) -> Self;

    /// Hermitian adjoint.
    fn dagger(&self) -> Self {
        self.conjugate().transpose()
    }
}
