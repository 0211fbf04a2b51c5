//! Ready-made operators: Pauli generators, ladder operators, projectors.
//!
//! - [`sp`] raising, `(X + iY)/2 = |0⟩⟨1|`
//! - [`sm`] lowering, `(X − iY)/2 = |1⟩⟨0|`
//! - [`qp`] projector, `(I + Z)/2 = |0⟩⟨0|`
//! - [`qm`] projector, `(I − Z)/2 = |1⟩⟨1|`
//!
//! Halving is exact in binary floating point, so identities such as
//! `sp(q) * sm(q) == qp(q)` hold with `==`.

use num_complex::Complex64;
use tracing::debug;

use crate::bitstring::BitString;
use crate::error::{PauliError, PauliResult};
use crate::hamiltonian::QubitHamiltonian;
use crate::pauli::PauliOp;

/// Pauli-X on `qubit`.
pub fn x(qubit: u32) -> QubitHamiltonian {
    QubitHamiltonian::from_op(qubit, PauliOp::X)
}

/// Pauli-Y on `qubit`.
pub fn y(qubit: u32) -> QubitHamiltonian {
    QubitHamiltonian::from_op(qubit, PauliOp::Y)
}

/// Pauli-Z on `qubit`.
pub fn z(qubit: u32) -> QubitHamiltonian {
    QubitHamiltonian::from_op(qubit, PauliOp::Z)
}

/// Identity on `qubit`, i.e. the unit operator.
pub fn identity(qubit: u32) -> QubitHamiltonian {
    QubitHamiltonian::from_op(qubit, PauliOp::I)
}

/// Raising operator `(X + iY)/2`.
pub fn sp(qubit: u32) -> QubitHamiltonian {
    (x(qubit) + Complex64::i() * y(qubit)) / 2.0
}

/// Lowering operator `(X − iY)/2`.
pub fn sm(qubit: u32) -> QubitHamiltonian {
    (x(qubit) - Complex64::i() * y(qubit)) / 2.0
}

/// Projector onto `|0⟩`, `(I + Z)/2`.
pub fn qp(qubit: u32) -> QubitHamiltonian {
    (identity(qubit) + z(qubit)) / 2.0
}

/// Projector onto `|1⟩`, `(I − Z)/2`.
pub fn qm(qubit: u32) -> QubitHamiltonian {
    (identity(qubit) - z(qubit)) / 2.0
}

/// `|ket⟩⟨bra|` for a single qubit.
fn transfer_factor(qubit: u32, ket: bool, bra: bool) -> QubitHamiltonian {
    match (ket, bra) {
        (false, false) => qp(qubit),
        (false, true) => sp(qubit),
        (true, false) => sm(qubit),
        (true, true) => qm(qubit),
    }
}

/// Decompose the transfer operator `|ket⟩⟨bra|` into projectors and
/// ladder operators.
///
/// Bit `k` of each pattern (most significant first) acts on `qubits[k]`.
/// Without an explicit list the patterns act on qubits `0..n`. The shorter
/// pattern is zero-padded on the left to the common width, and a qubit list
/// longer than the patterns pads both of them the same way.
///
/// ```rust
/// use arvak_pauli::paulis::{self, decompose_transfer_operator};
/// use arvak_pauli::BitString;
///
/// let op = decompose_transfer_operator(0u32, 1u32, None).unwrap();
/// assert_eq!(op, paulis::sp(0));
///
/// let ket = BitString::from_binary("01").unwrap();
/// let bra = BitString::from_binary("10").unwrap();
/// let op = decompose_transfer_operator(ket, bra, None).unwrap();
/// assert_eq!(op, paulis::sp(0) * paulis::sm(1));
/// ```
pub fn decompose_transfer_operator(
    ket: impl Into<BitString>,
    bra: impl Into<BitString>,
    qubits: Option<&[u32]>,
) -> PauliResult<QubitHamiltonian> {
    let (ket, bra) = (ket.into(), bra.into());
    let width = ket.nbits().max(bra.nbits());

    let qubits: Vec<u32> = match qubits {
        Some(list) => {
            if list.len() < width {
                return Err(PauliError::QubitCountMismatch {
                    bits: width,
                    qubits: list.len(),
                });
            }
            let mut sorted = list.to_vec();
            sorted.sort_unstable();
            if let Some(w) = sorted.windows(2).find(|w| w[0] == w[1]) {
                return Err(PauliError::DuplicateQubit { qubit: w[0] });
            }
            list.to_vec()
        }
        None => (0..width as u32).collect(),
    };

    let ket = ket.padded(qubits.len());
    let bra = bra.padded(qubits.len());

    let mut factors: Vec<(u32, bool, bool)> = qubits
        .iter()
        .zip(ket.bits().iter().zip(bra.bits()))
        .map(|(&q, (&k, &b))| (q, k, b))
        .collect();
    factors.sort_unstable_by_key(|(q, _, _)| *q);

    debug!(
        n_qubits = factors.len(),
        ket = %ket,
        bra = %bra,
        "decomposing transfer operator"
    );

    Ok(factors
        .into_iter()
        .map(|(q, k, b)| transfer_factor(q, k, b))
        .product())
}
