//! Braiding generators on a single left-to-right fusion chain.
//!
//! Exchanging anyons `index` and `index + 1` only touches the vertex where
//! anyon `index + 1` joins the tree. With `x_k` the k-th internal label and
//! the elementary anyon `e` standing in for the charge before the first
//! vertex, the local junction is
//!
//! ```text
//!   a0   e   e
//!     \ /   /
//!      a   /        a  = x_{index-1}  (e for index 1)
//!       \ /         a0 = vacuum, e, x_{index-3}  for index 1, 2, ≥3
//!     outcome       outcome = x_index
//! ```
//!
//! and the amplitude is the local braid matrix B(a0, e, e, outcome)[a, b].
//! Every other label must be untouched, which makes σ_i block-sparse.

use log::debug;
use num_complex::Complex64;
use num_traits::Zero;

use crate::basis::{find_basis, FusionState};
use crate::error::{BraidError, Result};
use crate::fusion::{AnyonModel, CMatrix, Label, VACUUM};

/// Amplitude ⟨final_state| σ_index |initial_state⟩.
///
/// `index` runs over `1..=len`, one per internal label.
pub fn sigma<M: AnyonModel>(index: usize, final_state: &[Label], initial_state: &[Label]) -> Result<Complex64> {
    let labels = initial_state.len();
    if final_state.len() != labels {
        return Err(BraidError::LengthMismatch { left: final_state.len(), right: labels });
    }
    if index == 0 || index > labels {
        return Err(BraidError::InvalidIndex { index, max: labels });
    }

    // position index - 2 is the only label the exchange may change
    let touched = index.checked_sub(2);
    let untouched_equal = final_state
        .iter()
        .zip(initial_state)
        .enumerate()
        .all(|(k, (f, i))| Some(k) == touched || f == i);
    if !untouched_equal {
        return Ok(Complex64::zero());
    }

    let e = M::ELEMENTARY;
    let a0 = match index {
        1 => VACUUM,
        2 => e,
        _ => initial_state[index - 3],
    };
    let outcome = initial_state[index - 1];
    let (a, b) = match touched {
        Some(k) => (initial_state[k], final_state[k]),
        None => (e, e),
    };

    let local = M::b_matrix(a0, e, e, outcome);
    Ok(local.get((a, b)).copied().unwrap_or_else(Complex64::zero))
}

/// Matrix of σ_index over a given basis, rows indexed by the final state.
pub fn generator_on_basis<M: AnyonModel>(index: usize, basis: &[FusionState]) -> Result<CMatrix> {
    let dim = basis.len();
    let mut matrix = CMatrix::zeros(dim, dim);
    for (row, final_state) in basis.iter().enumerate() {
        for (col, initial_state) in basis.iter().enumerate() {
            matrix[(row, col)] = sigma::<M>(index, final_state, initial_state)?;
        }
    }
    Ok(matrix)
}

/// σ_index on the chain of `n_anyons` elementary anyons, with its basis.
pub fn braiding_generator<M: AnyonModel>(index: usize, n_anyons: usize) -> Result<(CMatrix, Vec<FusionState>)> {
    let max = n_anyons.saturating_sub(1);
    if index == 0 || index > max {
        return Err(BraidError::InvalidIndex { index, max });
    }
    let basis = find_basis::<M>(n_anyons);
    let matrix = generator_on_basis::<M>(index, &basis)?;
    debug!("{} sigma_{} on {} anyons ({}x{})", M::NAME, index, n_anyons, basis.len(), basis.len());
    Ok((matrix, basis))
}
