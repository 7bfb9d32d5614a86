//! Standard quantum gates: a fixed table of named unitaries plus
//! parametrized builders.
use nalgebra::DMatrix;
use num_complex::Complex64 as C64;
use once_cell::sync::Lazy;

#[inline]
fn c(r: f64, i: f64) -> C64 {
    C64::new(r, i)
}

/// 2×2 identity.
pub static I2: Lazy<DMatrix<C64>> = Lazy::new(|| DMatrix::identity(2, 2));

/// Pauli-X (NOT).
pub static X: Lazy<DMatrix<C64>> = Lazy::new(|| {
    DMatrix::from_row_slice(2, 2, &[c(0.0, 0.0), c(1.0, 0.0), c(1.0, 0.0), c(0.0, 0.0)])
});

/// Pauli-Y.
pub static Y: Lazy<DMatrix<C64>> = Lazy::new(|| {
    DMatrix::from_row_slice(2, 2, &[c(0.0, 0.0), c(0.0, -1.0), c(0.0, 1.0), c(0.0, 0.0)])
});

/// Pauli-Z.
pub static Z: Lazy<DMatrix<C64>> = Lazy::new(|| {
    DMatrix::from_row_slice(2, 2, &[c(1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(-1.0, 0.0)])
});

/// Hadamard.
pub static H: Lazy<DMatrix<C64>> = Lazy::new(|| {
    let s = 1.0_f64 / 2.0_f64.sqrt();
    DMatrix::from_row_slice(2, 2, &[c(s, 0.0), c(s, 0.0), c(s, 0.0), c(-s, 0.0)])
});

/// Phase gate S = diag(1, i).
pub static S: Lazy<DMatrix<C64>> = Lazy::new(|| {
    DMatrix::from_row_slice(2, 2, &[c(1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, 1.0)])
});

/// T gate = diag(1, e^{iπ/4}).
pub static T: Lazy<DMatrix<C64>> = Lazy::new(|| {
    let phi = std::f64::consts::FRAC_PI_4;
    DMatrix::from_row_slice(
        2,
        2,
        &[
            c(1.0, 0.0),
            c(0.0, 0.0),
            c(0.0, 0.0),
            c(phi.cos(), phi.sin()),
        ],
    )
});

/// Controlled-NOT on two qubits (first qubit controls, second is target).
pub static CNOT: Lazy<DMatrix<C64>> = Lazy::new(|| {
    DMatrix::from_row_slice(
        4,
        4,
        &[
            c(1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0),
            c(0.0, 0.0), c(1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0),
            c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(1.0, 0.0),
            c(0.0, 0.0), c(0.0, 0.0), c(1.0, 0.0), c(0.0, 0.0),
        ],
    )
});

/// Global phase e^{iφ}·I. Total over all real φ.
pub fn global_phase(phase: f64) -> DMatrix<C64> {
    DMatrix::identity(2, 2) * C64::from_polar(1.0, phase)
}

pub fn rx(theta: f64) -> DMatrix<C64> {
    let (c0, s0) = ((theta / 2.0).cos(), (theta / 2.0).sin());
    DMatrix::from_row_slice(2, 2, &[c(c0, 0.0), c(0.0, -s0), c(0.0, -s0), c(c0, 0.0)])
}

pub fn ry(theta: f64) -> DMatrix<C64> {
    let (c0, s0) = ((theta / 2.0).cos(), (theta / 2.0).sin());
    DMatrix::from_row_slice(2, 2, &[c(c0, 0.0), c(-s0, 0.0), c(s0, 0.0), c(c0, 0.0)])
}

pub fn rz(theta: f64) -> DMatrix<C64> {
    let e_m = C64::from_polar(1.0, -theta / 2.0);
    let e_p = C64::from_polar(1.0, theta / 2.0);
    DMatrix::from_row_slice(2, 2, &[e_m, c(0.0, 0.0), c(0.0, 0.0), e_p])
}
