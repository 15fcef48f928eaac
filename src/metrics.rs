//! Gate-quality metrics and small matrix utilities.
//!
//! [`error_distance`] compares two unitaries up to a global phase: each is
//! divided by the principal n-th root of its determinant, and since that root
//! is only fixed up to sign, the smaller spectral norm of the sum and the
//! difference is returned. [`leakage_error`] is 1 − σ_min(U), the worst-case
//! shrinkage of a state's norm.

use nalgebra::SymmetricEigen;
use num_complex::Complex64;
use num_traits::One;
use rand::Rng;

use crate::error::{BraidError, Result};
use crate::fusion::CMatrix;

fn require_square(m: &CMatrix) -> Result<usize> {
    if m.is_square() {
        Ok(m.nrows())
    } else {
        Err(BraidError::NotSquare { rows: m.nrows(), cols: m.ncols() })
    }
}

/// Eigenvalues of the Hermitian matrix M†M.
fn gram_eigenvalues(m: &CMatrix) -> Vec<f64> {
    let gram = m.adjoint() * m;
    SymmetricEigen::new(gram).eigenvalues.iter().cloned().collect()
}

/// Principal n-th root of det(m) for an n × n matrix.
pub fn global_phase(m: &CMatrix) -> Result<Complex64> {
    let n = require_square(m)?;
    if n == 0 {
        return Ok(Complex64::one());
    }
    Ok(m.determinant().powf(1.0 / n as f64))
}

/// Global-phase-invariant spectral distance between two unitaries.
pub fn error_distance(u1: &CMatrix, u2: &CMatrix) -> Result<f64> {
    let n1 = require_square(u1)?;
    let n2 = require_square(u2)?;
    if n1 != n2 {
        return Err(BraidError::DimensionMismatch { left: n1, right: n2 });
    }

    let phase_1 = global_phase(u1)?;
    let phase_2 = global_phase(u2)?;
    let a = u1.map(|z| z / phase_1);
    let b = u2.map(|z| z / phase_2);

    let mut distance = 2.0_f64;
    for sign in [-1.0, 1.0] {
        let diff = &a + b.map(|z| z * sign);
        let largest = gram_eigenvalues(&diff).into_iter().fold(f64::MIN, f64::max);
        distance = distance.min(largest.abs().sqrt());
    }
    Ok(distance)
}

/// 1 − sqrt(λ_min(U†U)); zero for an exactly unitary matrix.
pub fn leakage_error(u: &CMatrix) -> Result<f64> {
    require_square(u)?;
    let smallest = gram_eigenvalues(u).into_iter().fold(f64::MAX, f64::min);
    Ok(1.0 - smallest.abs().sqrt())
}

/// Whether `m` is unitary to within `tol` in every entry of M†M − I.
pub fn is_unitary(m: &CMatrix, tol: f64) -> bool {
    if !m.is_square() {
        return false;
    }
    let deviation = m.adjoint() * m - CMatrix::identity(m.nrows(), m.ncols());
    deviation.iter().all(|z| z.norm() < tol)
}

/// Principal sub-matrix over the basis indices `ranks`, in that order.
pub fn extract(m: &CMatrix, ranks: &[usize]) -> Result<CMatrix> {
    let n = require_square(m)?;
    if let Some(&bad) = ranks.iter().find(|&&r| r >= n) {
        return Err(BraidError::InvalidIndex { index: bad, max: n.saturating_sub(1) });
    }
    Ok(CMatrix::from_fn(ranks.len(), ranks.len(), |r, c| m[(ranks[r], ranks[c])]))
}

/// Block-diagonal matrix with `m0` above `m1`.
pub fn combine_diag(m0: &CMatrix, m1: &CMatrix) -> Result<CMatrix> {
    let d0 = require_square(m0)?;
    let d1 = require_square(m1)?;
    let mut result = CMatrix::zeros(d0 + d1, d0 + d1);
    result.view_mut((0, 0), (d0, d0)).copy_from(m0);
    result.view_mut((d0, d0), (d1, d1)).copy_from(m1);
    Ok(result)
}

/// Random element of SU(2), c₀·I − i(c₁·Z + c₂·X − c₃·Y) with Σc² = 1.
pub fn random_special_unitary<R: Rng>(rng: &mut R) -> CMatrix {
    let c0: f64 = rng.gen();
    let c1 = rng.gen::<f64>() * (1.0 - c0 * c0).sqrt();
    let c2 = rng.gen::<f64>() * (1.0 - c0 * c0 - c1 * c1).max(0.0).sqrt();
    let c3 = (1.0 - c0 * c0 - c1 * c1 - c2 * c2).max(0.0).sqrt();

    let re = |x: f64| Complex64::new(x, 0.0);
    let im = |x: f64| Complex64::new(0.0, x);
    CMatrix::from_row_slice(
        2,
        2,
        &[
            re(c0) - im(c1),
            -im(c2) + re(c3),
            -im(c2) - re(c3),
            re(c0) + im(c1),
        ],
    )
}
