//! Named single-qubit basis vectors, initialized once and never mutated.
use nalgebra::DVector;
use num_complex::Complex64 as C64;
use once_cell::sync::Lazy;

#[inline]
fn c(r: f64, i: f64) -> C64 {
    C64::new(r, i)
}

/// Computational basis |0⟩.
pub static KET_ZERO: Lazy<DVector<C64>> =
    Lazy::new(|| DVector::from_column_slice(&[c(1.0, 0.0), c(0.0, 0.0)]));

/// Computational basis |1⟩.
pub static KET_ONE: Lazy<DVector<C64>> =
    Lazy::new(|| DVector::from_column_slice(&[c(0.0, 0.0), c(1.0, 0.0)]));

/// Hadamard basis |+⟩ = (|0⟩+|1⟩)/√2.
pub static KET_PLUS: Lazy<DVector<C64>> = Lazy::new(|| {
    let s = 1.0_f64 / 2.0_f64.sqrt();
    DVector::from_column_slice(&[c(s, 0.0), c(s, 0.0)])
});

/// Hadamard basis |−⟩ = (|0⟩−|1⟩)/√2.
pub static KET_MINUS: Lazy<DVector<C64>> = Lazy::new(|| {
    let s = 1.0_f64 / 2.0_f64.sqrt();
    DVector::from_column_slice(&[c(s, 0.0), c(-s, 0.0)])
});

/// Phase basis |i⟩ = (|0⟩+i|1⟩)/√2.
pub static KET_I: Lazy<DVector<C64>> = Lazy::new(|| {
    let s = 1.0_f64 / 2.0_f64.sqrt();
    DVector::from_column_slice(&[c(s, 0.0), c(0.0, s)])
});

/// Phase basis |−i⟩ = (|0⟩−i|1⟩)/√2.
pub static KET_NEG_I: Lazy<DVector<C64>> = Lazy::new(|| {
    let s = 1.0_f64 / 2.0_f64.sqrt();
    DVector::from_column_slice(&[c(s, 0.0), c(0.0, -s)])
});
