//! Kronecker (tensor) products over dense matrices.
use nalgebra::storage::Storage;
use nalgebra::{DMatrix, Dim, Matrix, Scalar};
use std::ops::Mul;

/// Kronecker product A ⊗ B.
///
/// Generic over the scalar type and over operand shape, so vectors (N×1) and
/// rectangular matrices combine uniformly. The result has dimensions
/// (rA·rB)×(cA·cB); block (i, j) equals `a[(i, j)] * b`. Total over all
/// finite dimensions: zero-sized operands yield an empty matrix.
pub fn kron<T, R1, C1, S1, R2, C2, S2>(
    a: &Matrix<T, R1, C1, S1>,
    b: &Matrix<T, R2, C2, S2>,
) -> DMatrix<T>
where
    T: Scalar + Mul<Output = T>,
    R1: Dim,
    C1: Dim,
    R2: Dim,
    C2: Dim,
    S1: Storage<T, R1, C1>,
    S2: Storage<T, R2, C2>,
{
    let (ar, ac) = a.shape();
    let (br, bc) = b.shape();
    // Element (r, c) of the result sits in block (r / br, c / bc) at local
    // offset (r % br, c % bc). The closure only runs when both operands are
    // non-empty, so the divisions are safe.
    DMatrix::from_fn(ar * br, ac * bc, |r, c| {
        a[(r / br, c / bc)].clone() * b[(r % br, c % bc)].clone()
    })
}
