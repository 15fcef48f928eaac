//! Anyon models: labels, fusion rules, and the local F / R / B matrices.
//!
//! Every model encodes its charges as small integers so that a label doubles
//! as a row/column index into the model's F, R and B matrices. Label 0 is
//! always the vacuum and label 1 the elementary anyon whose exchanges we
//! represent (τ for Fibonacci, σ for Ising).
//!
//! Conventions for the associativity matrix of three anyons fusing to `d`:
//!
//! ```text
//!   a   b   c          a   b   c
//!    \ /   /            \   \ /
//!     e   /      =  Σ_f  \   f        F(a, b, c, d)[e, f]
//!      \ /                \ /
//!       d                  d
//! ```
//!
//! The braid matrix for exchanging `a1` and `a2` under an outer charge `a0`
//! is then B = F(a0, a1, a2, d) · R(a1, a2) · F(a0, a2, a1, d)†, and
//! ⟨b|σ|a⟩ = B[a, b].

use nalgebra::DMatrix;
use num_complex::Complex64;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

/// Anyon charge, encoded as a matrix index.
pub type Label = usize;

/// Dense complex matrix used for every operator in the crate.
pub type CMatrix = DMatrix<Complex64>;

/// The trivial charge.
pub const VACUUM: Label = 0;

/// An anyon model: fusion table plus F and R data.
///
/// Implementations are unit types; everything is a pure function of labels.
pub trait AnyonModel: Copy + Send + Sync + 'static {
    /// Human-readable model name.
    const NAME: &'static str;
    /// Number of charges; labels run over `0..ALPHABET`.
    const ALPHABET: usize;
    /// The elementary anyon that makes up every strand.
    const ELEMENTARY: Label = 1;

    /// Fusion-Rule Oracle: can `a × b` produce `outcome`?
    ///
    /// Never fails; labels outside the alphabet simply do not fuse.
    fn fuses(a: Label, b: Label, outcome: Label) -> bool;

    /// Associativity matrix F(a1, a2, a3; outcome), `ALPHABET × ALPHABET`.
    fn f_matrix(a1: Label, a2: Label, a3: Label, outcome: Label) -> CMatrix;

    /// Diagonal exchange matrix R(a1, a2), indexed by the fusion channel.
    fn r_matrix(a1: Label, a2: Label) -> CMatrix;

    /// Local braid matrix for exchanging `a1` and `a2` below outer charge `a0`.
    fn b_matrix(a0: Label, a1: Label, a2: Label, outcome: Label) -> CMatrix {
        Self::f_matrix(a0, a1, a2, outcome)
            * Self::r_matrix(a1, a2)
            * Self::f_matrix(a0, a2, a1, outcome).adjoint()
    }
}

/// Run-time selector for the implemented models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelKind {
    Fibonacci,
    Ising,
}

impl ModelKind {
    pub fn name(&self) -> &'static str {
        match self {
            ModelKind::Fibonacci => crate::fibonacci::Fibonacci::NAME,
            ModelKind::Ising => crate::ising::Ising::NAME,
        }
    }
}

/// All outcomes of `a × b`, in label order.
pub fn fusion_channels<M: AnyonModel>(a: Label, b: Label) -> impl Iterator<Item = Label> {
    (0..M::ALPHABET).filter(move |&c| M::fuses(a, b, c))
}

/// F matrix for a triple with at most one channel on each side.
///
/// Places a single 1 at (left channel, right channel), or returns the zero
/// matrix when the triple cannot fuse to `outcome` at all.
pub fn single_channel_f<M: AnyonModel>(a1: Label, a2: Label, a3: Label, outcome: Label) -> CMatrix {
    let mut f = CMatrix::zeros(M::ALPHABET, M::ALPHABET);
    let left = (0..M::ALPHABET).find(|&e| M::fuses(a1, a2, e) && M::fuses(e, a3, outcome));
    let right = (0..M::ALPHABET).find(|&g| M::fuses(a2, a3, g) && M::fuses(a1, g, outcome));
    if let (Some(e), Some(g)) = (left, right) {
        f[(e, g)] = Complex64::one();
    }
    f
}

/// Square diagonal matrix with the given entries.
pub(crate) fn diagonal(entries: &[Complex64]) -> CMatrix {
    let n = entries.len();
    CMatrix::from_fn(n, n, |r, c| if r == c { entries[r] } else { Complex64::zero() })
}

/// `ALPHABET × ALPHABET` matrix that is zero except at one entry.
pub(crate) fn single_entry(size: usize, at: Label, value: Complex64) -> CMatrix {
    let mut m = CMatrix::zeros(size, size);
    m[(at, at)] = value;
    m
}

/// Whether `m` is the all-zero matrix.
pub fn is_zero(m: &CMatrix) -> bool {
    m.iter().all(|z| z.is_zero())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fibonacci::Fibonacci;
    use crate::ising::Ising;

    #[test]
    fn test_fusion_channels() {
        let tau_tau: Vec<_> = fusion_channels::<Fibonacci>(1, 1).collect();
        assert_eq!(tau_tau, vec![0, 1]);

        let sigma_sigma: Vec<_> = fusion_channels::<Ising>(1, 1).collect();
        assert_eq!(sigma_sigma, vec![0, 2]);

        let sigma_psi: Vec<_> = fusion_channels::<Ising>(1, 2).collect();
        assert_eq!(sigma_psi, vec![1]);
    }

    #[test]
    fn test_single_channel_f() {
        // (τ × τ)_1 × 1 → 1  ⟷  τ × (τ × 1)_τ → 1
        let f = single_channel_f::<Fibonacci>(1, 1, 0, 0);
        assert_eq!(f[(0, 1)], Complex64::one());
        assert_eq!(f.iter().filter(|z| !z.is_zero()).count(), 1);

        // τ × 1 × 1 cannot give the vacuum
        assert!(is_zero(&single_channel_f::<Fibonacci>(1, 0, 0, 0)));
    }

    #[test]
    fn test_model_names() {
        assert_eq!(ModelKind::Fibonacci.name(), "fibonacci");
        assert_eq!(ModelKind::Ising.name(), "ising");
    }
}
