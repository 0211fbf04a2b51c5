//! Qubit Hamiltonians: complex-linear combinations of Pauli strings.
//!
//! A [`QubitHamiltonian`] is
//!
//!   H = Σ_k  c_k · P_k,   c_k ∈ ℂ \ {0}
//!
//! stored as a map from [`PauliString`] to coefficient. Terms whose
//! coefficient becomes exactly zero are removed, so the map never holds a
//! zero entry: the empty map is the additive zero and `{I: 1}` is the
//! multiplicative unit. Nothing is ever truncated implicitly; equality is
//! exact, term by term.
//!
//! # Example
//!
//! ```rust
//! use arvak_pauli::{QubitHamiltonian, paulis};
//! use num_complex::Complex64;
//!
//! let i = Complex64::i();
//! assert_eq!(paulis::x(0) * paulis::y(0), paulis::z(0) * i);
//! assert_eq!(paulis::y(0) * paulis::x(0), paulis::z(0) * -i);
//!
//! let h: QubitHamiltonian = "X0Z1".parse().unwrap();
//! assert_eq!(h.dagger(), h);
//! ```

use std::collections::hash_map::Entry;
use std::collections::BTreeSet;
use std::fmt;
use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

use num_complex::Complex64;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::algebra::OperatorAlgebra;
use crate::error::{PauliError, PauliResult};
use crate::pauli::{PauliOp, Phase};
use crate::sparse::{check_finite, PauliTerm, SparseTerm};
use crate::string::PauliString;

const ZERO: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);

fn is_zero(c: Complex64) -> bool {
    c.re == 0.0 && c.im == 0.0
}

/// Add `coeff` to the entry for `pauli`, removing it if the sum is zero.
fn accumulate(terms: &mut FxHashMap<PauliString, Complex64>, pauli: PauliString, coeff: Complex64) {
    match terms.entry(pauli) {
        Entry::Occupied(mut e) => {
            let sum = *e.get() + coeff;
            if is_zero(sum) {
                e.remove();
            } else {
                *e.get_mut() = sum;
            }
        }
        Entry::Vacant(e) => {
            if !is_zero(coeff) {
                e.insert(coeff);
            }
        }
    }
}

/// A weighted sum of Pauli strings with complex coefficients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<PauliTerm>", into = "Vec<PauliTerm>")]
pub struct QubitHamiltonian {
    terms: FxHashMap<PauliString, Complex64>,
}

impl QubitHamiltonian {
    /// The additive zero (no terms).
    pub fn zero() -> Self {
        Self {
            terms: FxHashMap::default(),
        }
    }

    /// The multiplicative unit (identity string with coefficient 1).
    pub fn unit() -> Self {
        Self::from_paulistring(PauliString::identity())
    }

    /// One string with coefficient 1.
    pub fn from_paulistring(pauli: PauliString) -> Self {
        let mut terms = FxHashMap::default();
        terms.insert(pauli, ONE);
        Self { terms }
    }

    /// Single-qubit generator `op` on `qubit` with coefficient 1.
    pub fn from_op(qubit: u32, op: PauliOp) -> Self {
        Self::from_paulistring(PauliString::single(qubit, op))
    }

    /// One weighted term. Non-finite coefficients are rejected.
    pub fn from_term(term: PauliTerm) -> PauliResult<Self> {
        Self::from_terms([term])
    }

    /// Sum of weighted terms; repeated strings are added together.
    pub fn from_terms(terms: impl IntoIterator<Item = PauliTerm>) -> PauliResult<Self> {
        let mut map = FxHashMap::default();
        for term in terms {
            let coeff = check_finite(term.coeff)?;
            accumulate(&mut map, term.pauli, coeff);
        }
        Ok(Self { terms: map })
    }

    /// Parse a single string such as `"X0Y1Z2"` or `"x0"`.
    pub fn init_from_string(s: &str) -> PauliResult<Self> {
        s.parse()
    }

    /// Sum of external sparse terms.
    pub fn from_sparse_terms<'a>(
        terms: impl IntoIterator<Item = &'a SparseTerm>,
    ) -> PauliResult<Self> {
        let terms = terms
            .into_iter()
            .map(PauliTerm::try_from)
            .collect::<PauliResult<Vec<_>>>()?;
        Self::from_terms(terms)
    }

    /// Export every term in external sparse form, in canonical order.
    pub fn to_sparse_terms(&self) -> Vec<SparseTerm> {
        self.paulistrings().iter().map(SparseTerm::from).collect()
    }

    /// Iterate over `(string, coefficient)` pairs in unspecified order.
    pub fn terms(&self) -> impl Iterator<Item = (&PauliString, &Complex64)> {
        self.terms.iter()
    }

    /// All terms as owned [`PauliTerm`]s, sorted by string.
    pub fn paulistrings(&self) -> Vec<PauliTerm> {
        let mut out: Vec<PauliTerm> = self
            .terms
            .iter()
            .map(|(p, c)| PauliTerm::new(*c, p.clone()))
            .collect();
        out.sort_by(|a, b| a.pauli.cmp(&b.pauli));
        out
    }

    /// Coefficient of `pauli` (zero if absent).
    pub fn coefficient(&self, pauli: &PauliString) -> Complex64 {
        self.terms.get(pauli).copied().unwrap_or(ZERO)
    }

    /// Number of terms.
    pub fn n_terms(&self) -> usize {
        self.terms.len()
    }

    /// True for the additive zero.
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// True for the multiplicative unit.
    pub fn is_unit(&self) -> bool {
        self.terms.len() == 1 && self.coefficient(&PauliString::identity()) == ONE
    }

    /// `scalar · self`, rejecting NaN and infinite scalars.
    pub fn try_scale(&self, scalar: Complex64) -> PauliResult<Self> {
        Ok(self.scale(check_finite(scalar)?))
    }

    /// `self / divisor`, rejecting zero and non-finite divisors.
    pub fn try_div(&self, divisor: Complex64) -> PauliResult<Self> {
        let divisor = check_finite(divisor)?;
        if is_zero(divisor) {
            return Err(PauliError::ZeroDivisor);
        }
        Ok(self.divide(divisor))
    }

    fn divide(&self, divisor: Complex64) -> Self {
        debug_assert!(
            divisor.is_finite() && !is_zero(divisor),
            "divisor must be finite and non-zero"
        );
        let mut out = self.map_terms(|_, c| c / divisor);
        out.terms.retain(|_, c| !is_zero(*c));
        out
    }

    /// Every qubit acted on non-trivially by some term.
    pub fn qubits(&self) -> BTreeSet<u32> {
        self.terms.keys().flat_map(PauliString::qubits).collect()
    }

    /// The minimum number of qubits required to represent this operator.
    ///
    /// Returns 0 if the operator is zero or purely identity. The result is
    /// `u64` so a term on qubit `u32::MAX` still has a width.
    pub fn n_qubits(&self) -> u64 {
        self.terms
            .keys()
            .filter_map(PauliString::max_qubit)
            .max()
            .map_or(0, |q| u64::from(q) + 1)
    }

    /// Complex conjugate: conjugate every coefficient and flip the sign of
    /// each term once per Y factor.
    #[must_use]
    pub fn conjugate(&self) -> Self {
        self.map_terms(|p, c| p.conjugate_sign().apply(c.conj()))
    }

    /// Transpose: flip the sign of each term once per Y factor.
    #[must_use]
    pub fn transpose(&self) -> Self {
        self.map_terms(|p, c| p.transpose_sign().apply(c))
    }

    /// Hermitian adjoint, `conjugate ∘ transpose`.
    ///
    /// The two Y sign rules cancel, leaving only coefficient conjugation.
    #[must_use]
    pub fn dagger(&self) -> Self {
        self.map_terms(|p, c| (p.conjugate_sign() * p.transpose_sign()).apply(c.conj()))
    }

    /// True if `self.dagger() == self` exactly.
    pub fn is_hermitian(&self) -> bool {
        self.terms.values().all(|c| c.im == 0.0)
    }

    /// Drop every term with `|c| <= threshold`.
    ///
    /// This is the only operation that removes non-zero terms.
    #[must_use]
    pub fn simplify(&self, threshold: f64) -> Self {
        let terms: FxHashMap<_, _> = self
            .terms
            .iter()
            .filter(|(_, c)| c.norm() > threshold)
            .map(|(p, c)| (p.clone(), *c))
            .collect();
        debug!(
            threshold,
            dropped = self.terms.len() - terms.len(),
            remaining = terms.len(),
            "simplified qubit Hamiltonian"
        );
        Self { terms }
    }

    fn map_terms(&self, f: impl Fn(&PauliString, Complex64) -> Complex64) -> Self {
        Self {
            terms: self
                .terms
                .iter()
                .map(|(p, c)| (p.clone(), f(p, *c)))
                .collect(),
        }
    }
}

impl OperatorAlgebra for QubitHamiltonian {
    type Scalar = Complex64;

    fn add_operator(&self, other: &Self) -> Self {
        let mut terms = self.terms.clone();
        for (p, c) in &other.terms {
            accumulate(&mut terms, p.clone(), *c);
        }
        Self { terms }
    }

    fn scale(&self, scalar: Complex64) -> Self {
        debug_assert!(scalar.is_finite(), "scalar must be finite");
        if is_zero(scalar) {
            return Self::zero();
        }
        let mut terms: FxHashMap<_, _> = self
            .terms
            .iter()
            .map(|(p, c)| (p.clone(), scalar * c))
            .collect();
        // Underflow can still produce a zero.
        terms.retain(|_, c| !is_zero(*c));
        Self { terms }
    }

    fn multiply(&self, other: &Self) -> Self {
        let mut terms: FxHashMap<PauliString, Complex64> = FxHashMap::default();
        for (p, cp) in &self.terms {
            for (q, cq) in &other.terms {
                let (phase, r) = p.compose(q);
                *terms.entry(r).or_insert(ZERO) += phase.apply(cp * cq);
            }
        }
        terms.retain(|_, c| !is_zero(*c));
        trace!(
            lhs_terms = self.terms.len(),
            rhs_terms = other.terms.len(),
            result_terms = terms.len(),
            "multiplied qubit Hamiltonians"
        );
        Self { terms }
    }

    fn conjugate(&self) -> Self {
        QubitHamiltonian::conjugate(self)
    }

    fn transpose(&self) -> Self {
        QubitHamiltonian::transpose(self)
    }

    fn dagger(&self) -> Self {
        QubitHamiltonian::dagger(self)
    }
}

impl FromStr for QubitHamiltonian {
    type Err = PauliError;

    fn from_str(s: &str) -> PauliResult<Self> {
        Ok(Self::from_paulistring(s.parse()?))
    }
}

impl From<PauliString> for QubitHamiltonian {
    fn from(pauli: PauliString) -> Self {
        Self::from_paulistring(pauli)
    }
}

impl TryFrom<Vec<PauliTerm>> for QubitHamiltonian {
    type Error = PauliError;

    fn try_from(terms: Vec<PauliTerm>) -> PauliResult<Self> {
        Self::from_terms(terms)
    }
}

impl From<QubitHamiltonian> for Vec<PauliTerm> {
    fn from(h: QubitHamiltonian) -> Self {
        h.paulistrings()
    }
}

impl fmt::Display for QubitHamiltonian {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.terms.is_empty() {
            return f.write_str("0");
        }
        for (k, term) in self.paulistrings().iter().enumerate() {
            if k > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{term}")?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Operator overloads
// ---------------------------------------------------------------------------

impl Add<&QubitHamiltonian> for &QubitHamiltonian {
    type Output = QubitHamiltonian;

    fn add(self, rhs: &QubitHamiltonian) -> QubitHamiltonian {
        self.add_operator(rhs)
    }
}

impl Add for QubitHamiltonian {
    type Output = QubitHamiltonian;

    fn add(mut self, rhs: QubitHamiltonian) -> QubitHamiltonian {
        self += rhs;
        self
    }
}

impl AddAssign for QubitHamiltonian {
    fn add_assign(&mut self, rhs: QubitHamiltonian) {
        for (p, c) in rhs.terms {
            accumulate(&mut self.terms, p, c);
        }
    }
}

impl Neg for QubitHamiltonian {
    type Output = QubitHamiltonian;

    fn neg(self) -> QubitHamiltonian {
        self.map_terms(|_, c| Phase::MINUS_ONE.apply(c))
    }
}

impl Neg for &QubitHamiltonian {
    type Output = QubitHamiltonian;

    fn neg(self) -> QubitHamiltonian {
        self.map_terms(|_, c| Phase::MINUS_ONE.apply(c))
    }
}

impl Sub<&QubitHamiltonian> for &QubitHamiltonian {
    type Output = QubitHamiltonian;

    fn sub(self, rhs: &QubitHamiltonian) -> QubitHamiltonian {
        self.add_operator(&-rhs)
    }
}

impl Sub for QubitHamiltonian {
    type Output = QubitHamiltonian;

    fn sub(self, rhs: QubitHamiltonian) -> QubitHamiltonian {
        self + -rhs
    }
}

impl SubAssign for QubitHamiltonian {
    fn sub_assign(&mut self, rhs: QubitHamiltonian) {
        *self += -rhs;
    }
}

impl Mul<&QubitHamiltonian> for &QubitHamiltonian {
    type Output = QubitHamiltonian;

    fn mul(self, rhs: &QubitHamiltonian) -> QubitHamiltonian {
        self.multiply(rhs)
    }
}

impl Mul for QubitHamiltonian {
    type Output = QubitHamiltonian;

    fn mul(self, rhs: QubitHamiltonian) -> QubitHamiltonian {
        self.multiply(&rhs)
    }
}

impl MulAssign for QubitHamiltonian {
    fn mul_assign(&mut self, rhs: QubitHamiltonian) {
        *self = self.multiply(&rhs);
    }
}

impl Mul<Complex64> for QubitHamiltonian {
    type Output = QubitHamiltonian;

    fn mul(self, rhs: Complex64) -> QubitHamiltonian {
        self.scale(rhs)
    }
}

impl Mul<Complex64> for &QubitHamiltonian {
    type Output = QubitHamiltonian;

    fn mul(self, rhs: Complex64) -> QubitHamiltonian {
        self.scale(rhs)
    }
}

impl Mul<f64> for QubitHamiltonian {
    type Output = QubitHamiltonian;

    fn mul(self, rhs: f64) -> QubitHamiltonian {
        self.scale(Complex64::new(rhs, 0.0))
    }
}

impl Mul<f64> for &QubitHamiltonian {
    type Output = QubitHamiltonian;

    fn mul(self, rhs: f64) -> QubitHamiltonian {
        self.scale(Complex64::new(rhs, 0.0))
    }
}

impl Mul<QubitHamiltonian> for Complex64 {
    type Output = QubitHamiltonian;

    fn mul(self, rhs: QubitHamiltonian) -> QubitHamiltonian {
        rhs.scale(self)
    }
}

impl Mul<&QubitHamiltonian> for Complex64 {
    type Output = QubitHamiltonian;

    fn mul(self, rhs: &QubitHamiltonian) -> QubitHamiltonian {
        rhs.scale(self)
    }
}

impl Mul<QubitHamiltonian> for f64 {
    type Output = QubitHamiltonian;

    fn mul(self, rhs: QubitHamiltonian) -> QubitHamiltonian {
        rhs.scale(Complex64::new(self, 0.0))
    }
}

impl Mul<&QubitHamiltonian> for f64 {
    type Output = QubitHamiltonian;

    fn mul(self, rhs: &QubitHamiltonian) -> QubitHamiltonian {
        rhs.scale(Complex64::new(self, 0.0))
    }
}

impl MulAssign<Complex64> for QubitHamiltonian {
    fn mul_assign(&mut self, rhs: Complex64) {
        *self = self.scale(rhs);
    }
}

impl MulAssign<f64> for QubitHamiltonian {
    fn mul_assign(&mut self, rhs: f64) {
        *self = self.scale(Complex64::new(rhs, 0.0));
    }
}

/// Division by a finite, non-zero scalar. Use
/// [`QubitHamiltonian::try_div`] for divisors from outside the crate.
impl Div<Complex64> for QubitHamiltonian {
    type Output = QubitHamiltonian;

    fn div(self, rhs: Complex64) -> QubitHamiltonian {
        self.divide(rhs)
    }
}

impl Div<f64> for QubitHamiltonian {
    type Output = QubitHamiltonian;

    fn div(self, rhs: f64) -> QubitHamiltonian {
        self.divide(Complex64::new(rhs, 0.0))
    }
}

impl Sum for QubitHamiltonian {
    fn sum<I: Iterator<Item = QubitHamiltonian>>(iter: I) -> Self {
        iter.fold(QubitHamiltonian::zero(), |acc, h| acc + h)
    }
}

impl Product for QubitHamiltonian {
    fn product<I: Iterator<Item = QubitHamiltonian>>(iter: I) -> Self {
        iter.fold(QubitHamiltonian::unit(), |acc, h| acc * h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(re: f64, im: f64) -> Complex64 {
        Complex64::new(re, im)
    }

    fn h(s: &str) -> QubitHamiltonian {
        s.parse().unwrap()
    }

    #[test]
    fn test_zero_and_unit() {
        assert!(QubitHamiltonian::zero().is_zero());
        assert!(QubitHamiltonian::unit().is_unit());
        assert_eq!(h(""), QubitHamiltonian::unit());
        assert_eq!(QubitHamiltonian::unit().n_qubits(), 0);
    }

    #[test]
    fn test_addition_merges_and_cancels() {
        let a = h("X0") + h("Z1");
        assert_eq!(a.n_terms(), 2);
        let b = a.clone() + h("X0");
        assert_eq!(b.coefficient(&"X0".parse().unwrap()), c(2.0, 0.0));
        let d = a - h("X0");
        assert_eq!(d, h("Z1"));
        assert!((h("X0") - h("X0")).is_zero());
    }

    #[test]
    fn test_scale_by_zero_is_zero() {
        let a = h("X0Y1") + h("Z3");
        assert!((a.clone() * 0.0).is_zero());
        assert!((c(0.0, 0.0) * a).is_zero());
    }

    #[test]
    fn test_multiplication_accumulates() {
        // (X0 + Z0)(X0 + Z0) = 2·I + XZ + ZX = 2·I
        let a = h("X0") + h("Z0");
        assert_eq!(&a * &a, 2.0 * QubitHamiltonian::unit());
    }

    #[test]
    fn test_multiplication_is_order_sensitive() {
        let xy = h("X0") * h("Y0");
        let yx = h("Y0") * h("X0");
        assert_eq!(xy, h("Z0") * c(0.0, 1.0));
        assert_eq!(yx, h("Z0") * c(0.0, -1.0));
        assert_eq!(xy, -yx);
    }

    #[test]
    fn test_conjugate_and_transpose() {
        let a = h("Y0") * c(1.0, 2.0) + h("X1") * c(0.5, -1.0);
        let conj = a.conjugate();
        assert_eq!(conj.coefficient(&"Y0".parse().unwrap()), c(-1.0, 2.0));
        assert_eq!(conj.coefficient(&"X1".parse().unwrap()), c(0.5, 1.0));

        let t = a.transpose();
        assert_eq!(t.coefficient(&"Y0".parse().unwrap()), c(-1.0, -2.0));
        assert_eq!(t.coefficient(&"X1".parse().unwrap()), c(0.5, -1.0));

        assert_eq!(a.dagger(), a.conjugate().transpose());
        assert_eq!(a.dagger(), a.transpose().conjugate());
        assert_eq!(OperatorAlgebra::dagger(&a), a.conjugate().transpose());
    }

    #[test]
    fn test_is_hermitian() {
        assert!((h("X0Y1") * 0.3 + h("Z2")).is_hermitian());
        assert!(!(h("X0") * c(0.0, 1.0)).is_hermitian());
    }

    #[test]
    fn test_simplify_is_explicit() {
        let a = h("X0") + h("Z0") * 1e-12;
        assert_eq!(a.n_terms(), 2);
        let s = a.simplify(1e-9);
        assert_eq!(s, h("X0"));
    }

    #[test]
    fn test_qubits() {
        let a = h("X0Z4") + h("Y2");
        assert_eq!(a.qubits().into_iter().collect::<Vec<_>>(), vec![0, 2, 4]);
        assert_eq!(a.n_qubits(), 5);
    }

    #[test]
    fn test_from_terms_rejects_non_finite() {
        let term = PauliTerm::new(c(f64::NAN, 0.0), "X0".parse().unwrap());
        assert!(matches!(
            QubitHamiltonian::from_term(term),
            Err(PauliError::NonFiniteCoefficient { .. })
        ));
    }

    #[test]
    fn test_from_terms_sums_duplicates() {
        let p: PauliString = "Z0".parse().unwrap();
        let hm = QubitHamiltonian::from_terms([
            PauliTerm::new(c(1.0, 0.0), p.clone()),
            PauliTerm::new(c(-1.0, 0.0), p.clone()),
            PauliTerm::new(c(0.0, 1.0), "X1".parse().unwrap()),
        ])
        .unwrap();
        assert_eq!(hm.n_terms(), 1);
        assert_eq!(hm.coefficient(&p), c(0.0, 0.0));
    }

    #[test]
    fn test_display() {
        assert_eq!(QubitHamiltonian::zero().to_string(), "0");
        let a = h("Z1") * 0.5 + h("X0") * -1.0;
        assert_eq!(a.to_string(), "-1.0000X0 +0.5000Z1");
    }

    #[test]
    fn test_sum_and_product() {
        let s: QubitHamiltonian = (0..3).map(|_| h("X0")).sum();
        assert_eq!(s, 3.0 * h("X0"));
        let p: QubitHamiltonian = [h("X0"), h("Y0"), h("Z0")].into_iter().product();
        // XYZ = iZ·Z = i
        assert_eq!(p, QubitHamiltonian::unit() * c(0.0, 1.0));
    }

    #[test]
    fn test_division() {
        assert_eq!((h("X0") + h("X0")) / 2.0, h("X0"));
        assert_eq!(h("X0") / c(0.0, 1.0), h("X0") * c(0.0, -1.0));
        assert_eq!(h("Y1").try_div(c(2.0, 0.0)).unwrap(), h("Y1") * 0.5);
    }

    #[test]
    fn test_n_qubits_at_top_index() {
        let a = h("X4294967295");
        assert_eq!(a.n_qubits(), u64::from(u32::MAX) + 1);
        assert_eq!((a + h("Z0")).n_qubits(), 1 << 32);
    }

    #[test]
    fn test_try_scale_rejects_non_finite() {
        let a = h("X0") + h("Y1");
        for bad in [c(f64::NAN, 0.0), c(0.0, f64::INFINITY), c(f64::NEG_INFINITY, 1.0)] {
            assert!(matches!(
                a.try_scale(bad),
                Err(PauliError::NonFiniteCoefficient { .. })
            ));
        }
        assert_eq!(a.try_scale(c(0.0, 2.0)).unwrap(), a.clone() * c(0.0, 2.0));
        assert!(a.try_scale(c(0.0, 0.0)).unwrap().is_zero());
    }

    #[test]
    fn test_try_div_rejects_bad_divisors() {
        let a = h("Z2");
        assert!(matches!(a.try_div(c(0.0, 0.0)), Err(PauliError::ZeroDivisor)));
        assert!(matches!(
            a.try_div(c(f64::NAN, 0.0)),
            Err(PauliError::NonFiniteCoefficient { .. })
        ));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "scalar must be finite")]
    fn test_nan_scalar_panics_in_debug() {
        let _ = h("X0") * f64::NAN;
    }
}
