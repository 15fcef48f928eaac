//! Fibonacci anyons (SU(2)₃ even sector).
//!
//! Two charges: the vacuum `1` (label 0) and `τ` (label 1), with
//!
//! - 1 × x = x
//! - τ × τ = 1 + τ
//!
//! The fusion space of N τ's has dimension F(N) with F(0) = F(1) = 1,
//! F(n+2) = F(n+1) + F(n).

use num_complex::Complex64;
use num_traits::{One, Zero};

use crate::fusion::{diagonal, single_channel_f, AnyonModel, CMatrix, Label};

/// Golden ratio φ = (1 + √5) / 2.
pub const PHI: f64 = 1.618_033_988_749_895;
/// φ⁻¹
pub const PHI_INV: f64 = 0.618_033_988_749_894_9;
/// φ^(-1/2)
pub const PHI_INV_SQRT: f64 = 0.786_151_377_757_423_3;

/// R^{ττ}_1 = exp(-4πi/5)
pub const R_TAU_TAU_VACUUM: Complex64 = Complex64::new(-0.809_016_994_374_947_5, -0.587_785_252_292_473_1);
/// R^{ττ}_τ = exp(3πi/5)
pub const R_TAU_TAU_TAU: Complex64 = Complex64::new(-0.309_016_994_374_947_34, 0.951_056_516_295_153_6);

/// Charges of the Fibonacci model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FibonacciAnyon {
    Vacuum,
    Tau,
}

impl FibonacciAnyon {
    pub fn from_label(label: Label) -> Option<Self> {
        match label {
            0 => Some(FibonacciAnyon::Vacuum),
            1 => Some(FibonacciAnyon::Tau),
            _ => None,
        }
    }

    pub fn label(self) -> Label {
        match self {
            FibonacciAnyon::Vacuum => 0,
            FibonacciAnyon::Tau => 1,
        }
    }
}

/// Fibonacci anyon model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Fibonacci;

impl AnyonModel for Fibonacci {
    const NAME: &'static str = "fibonacci";
    const ALPHABET: usize = 2;

    fn fuses(a: Label, b: Label, outcome: Label) -> bool {
        use FibonacciAnyon::*;
        match (
            FibonacciAnyon::from_label(a),
            FibonacciAnyon::from_label(b),
            FibonacciAnyon::from_label(outcome),
        ) {
            (Some(Vacuum), Some(x), Some(c)) | (Some(x), Some(Vacuum), Some(c)) => x == c,
            (Some(Tau), Some(Tau), Some(_)) => true,
            _ => false,
        }
    }

    fn f_matrix(a1: Label, a2: Label, a3: Label, outcome: Label) -> CMatrix {
        use FibonacciAnyon::Tau;
        match (
            FibonacciAnyon::from_label(a1),
            FibonacciAnyon::from_label(a2),
            FibonacciAnyon::from_label(a3),
            FibonacciAnyon::from_label(outcome),
        ) {
            // the only triple with two channels on each side
            (Some(Tau), Some(Tau), Some(Tau), Some(Tau)) => {
                let diag = Complex64::new(PHI_INV, 0.0);
                let off = Complex64::new(PHI_INV_SQRT, 0.0);
                CMatrix::from_row_slice(2, 2, &[diag, off, off, -diag])
            }
            _ => single_channel_f::<Fibonacci>(a1, a2, a3, outcome),
        }
    }

    fn r_matrix(a1: Label, a2: Label) -> CMatrix {
        use FibonacciAnyon::Tau;
        match (FibonacciAnyon::from_label(a1), FibonacciAnyon::from_label(a2)) {
            (Some(Tau), Some(Tau)) => diagonal(&[R_TAU_TAU_VACUUM, R_TAU_TAU_TAU]),
            // a vacuum leg braids trivially
            (Some(_), Some(_)) => diagonal(&[Complex64::one(), Complex64::one()]),
            _ => CMatrix::from_element(2, 2, Complex64::zero()),
        }
    }
}

/// Dimension of the fusion space of `n_anyons` τ's: F(n) with F(0) = F(1) = 1.
pub fn fibonacci_dimension(n_anyons: usize) -> usize {
    let (mut prev, mut cur) = (1usize, 1usize);
    for _ in 1..n_anyons {
        let next = prev + cur;
        prev = cur;
        cur = next;
    }
    cur
}
