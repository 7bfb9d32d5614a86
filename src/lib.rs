//! ketlab — a fixed catalog of quantum gate matrices and basis vectors plus
//! a generic Kronecker product, built on nalgebra dense complex linear
//! algebra.

pub mod bases;
pub mod gates;
pub mod ops;
pub mod types;

pub use ops::kron;
pub use types::{QOp, QState};
