//! Braiding generators on a register of qudits.
//!
//! A register groups `qudits × (qudit_len + 1)` elementary anyons. Each qudit
//! carries its own left-to-right fusion tree and the qudit charges are fused
//! through the root labels:
//!
//! ```text
//!   q0 (tree)   q1 (tree)   q2 (tree)
//!       c0         c1          c2
//!        \        /           /
//!         roots[0]           /
//!              \            /
//!               roots[1] ──┘
//! ```
//!
//! An exchange inside a qudit acts on that qudit's tree alone. An exchange
//! across a qudit boundary is evaluated in the single chain over all anyons:
//! the register basis is recoupled into the chain basis by F-moves (a
//! unitary `U`), and σ_i = U† σ_i^chain U.

use std::marker::PhantomData;

use log::debug;
use num_complex::Complex64;
use num_traits::{One, Zero};

use crate::basis::{find_basis, find_register_basis, FusionState, MultiQuditState};
use crate::braiding::{generator_on_basis, sigma};
use crate::error::{BraidError, Result};
use crate::fusion::{AnyonModel, CMatrix, Label};

/// Basis, chain basis and recoupling of one register shape.
#[derive(Debug, Clone)]
pub struct MultiQuditSpace<M: AnyonModel> {
    qudits: usize,
    qudit_len: usize,
    basis: Vec<MultiQuditState>,
    chain_basis: Vec<FusionState>,
    recoupling: CMatrix,
    model: PhantomData<M>,
}

impl<M: AnyonModel> MultiQuditSpace<M> {
    /// Enumerate both bases of `qudits` qudits with `qudit_len` labels each.
    pub fn new(qudits: usize, qudit_len: usize) -> Result<Self> {
        let basis = find_register_basis::<M>(qudits, qudit_len)?;
        let chain_basis = find_basis::<M>(qudits * (qudit_len + 1));
        if basis.len() != chain_basis.len() {
            return Err(BraidError::DimensionMismatch { left: basis.len(), right: chain_basis.len() });
        }

        let mut space = Self {
            qudits,
            qudit_len,
            basis,
            chain_basis,
            recoupling: CMatrix::zeros(0, 0),
            model: PhantomData,
        };
        let dim = space.dim();
        let mut recoupling = CMatrix::zeros(dim, dim);
        for (col, state) in space.basis.iter().enumerate() {
            for (row, chain_state) in space.chain_basis.iter().enumerate() {
                recoupling[(row, col)] = space.chain_overlap(chain_state, state);
            }
        }
        space.recoupling = recoupling;
        Ok(space)
    }

    pub fn qudits(&self) -> usize {
        self.qudits
    }

    pub fn qudit_len(&self) -> usize {
        self.qudit_len
    }

    pub fn anyons_per_qudit(&self) -> usize {
        self.qudit_len + 1
    }

    pub fn anyons(&self) -> usize {
        self.qudits * self.anyons_per_qudit()
    }

    pub fn dim(&self) -> usize {
        self.basis.len()
    }

    pub fn basis(&self) -> &[MultiQuditState] {
        &self.basis
    }

    pub fn chain_basis(&self) -> &[FusionState] {
        &self.chain_basis
    }

    /// U[s, m] = ⟨chain state s | register state m⟩.
    pub fn recoupling(&self) -> &CMatrix {
        &self.recoupling
    }

    /// Whether exchange `index` swaps anyons of two different qudits.
    pub fn crosses_boundary(&self, index: usize) -> bool {
        index % self.anyons_per_qudit() == 0
    }

    fn fits(&self, state: &MultiQuditState) -> bool {
        state.qudits.len() == self.qudits
            && state.roots.len() + 1 == self.qudits
            && state.qudits.iter().all(|q| q.len() == self.qudit_len)
    }

    /// Overlap of a chain state with a register state.
    ///
    /// The chain must start with qudit 0's tree. Every later qudit is
    /// absorbed into the running charge one anyon at a time, each step an
    /// F-move; the chain label after the last anyon of qudit k is
    /// `roots[k - 1]`.
    pub fn chain_overlap(&self, chain_state: &[Label], state: &MultiQuditState) -> Complex64 {
        let n = self.anyons_per_qudit();
        if !self.fits(state) || chain_state.len() + 1 != self.anyons() {
            return Complex64::zero();
        }
        if chain_state[..n - 1] != state.qudits[0][..] {
            return Complex64::zero();
        }

        let mut amplitude = Complex64::one();
        let mut running = state.qudits[0][n - 2];
        for k in 1..self.qudits {
            let offset = (n - 1) + (k - 1) * n;
            let segment = &chain_state[offset..offset + n];
            let root = state.roots[k - 1];
            if segment[n - 1] != root {
                return Complex64::zero();
            }
            amplitude *= absorb::<M>(running, &state.qudits[k], segment);
            if amplitude.is_zero() {
                return amplitude;
            }
            running = root;
        }
        amplitude
    }

    /// Amplitude ⟨final_state| σ_index |initial_state⟩ for a global index.
    pub fn sigma(&self, index: usize, final_state: &MultiQuditState, initial_state: &MultiQuditState) -> Result<Complex64> {
        let max = self.anyons() - 1;
        if index == 0 || index > max {
            return Err(BraidError::InvalidIndex { index, max });
        }
        if !self.fits(final_state) || !self.fits(initial_state) {
            return Err(BraidError::InvalidRegister(format!(
                "state shape does not match {} qudits of {} labels",
                self.qudits, self.qudit_len
            )));
        }

        let n = self.anyons_per_qudit();
        if !self.crosses_boundary(index) {
            let k = (index - 1) / n;
            let local = (index - 1) % n + 1;
            let others_equal = final_state.roots == initial_state.roots
                && (0..self.qudits).all(|j| j == k || final_state.qudits[j] == initial_state.qudits[j]);
            if !others_equal {
                return Ok(Complex64::zero());
            }
            return sigma::<M>(local, &final_state.qudits[k], &initial_state.qudits[k]);
        }

        let final_chain = self.recoupled(final_state);
        let initial_chain = self.recoupled(initial_state);
        let mut amplitude = Complex64::zero();
        for &(s, u_sf) in &final_chain {
            for &(t, u_ti) in &initial_chain {
                let chain = sigma::<M>(index, &self.chain_basis[s], &self.chain_basis[t])?;
                amplitude += u_sf.conj() * chain * u_ti;
            }
        }
        Ok(amplitude)
    }

    /// Non-zero chain components of a register state.
    fn recoupled(&self, state: &MultiQuditState) -> Vec<(usize, Complex64)> {
        self.chain_basis
            .iter()
            .enumerate()
            .map(|(s, chain_state)| (s, self.chain_overlap(chain_state, state)))
            .filter(|(_, amplitude)| !amplitude.is_zero())
            .collect()
    }

    /// Matrix of σ_index over the register basis.
    pub fn generator(&self, index: usize) -> Result<CMatrix> {
        let max = self.anyons() - 1;
        if index == 0 || index > max {
            return Err(BraidError::InvalidIndex { index, max });
        }

        let matrix = if self.crosses_boundary(index) {
            let chain = generator_on_basis::<M>(index, &self.chain_basis)?;
            self.recoupling.adjoint() * chain * &self.recoupling
        } else {
            let dim = self.dim();
            let mut matrix = CMatrix::zeros(dim, dim);
            for (row, final_state) in self.basis.iter().enumerate() {
                for (col, initial_state) in self.basis.iter().enumerate() {
                    matrix[(row, col)] = self.sigma(index, final_state, initial_state)?;
                }
            }
            matrix
        };
        debug!(
            "{} sigma_{} on {} qudits x {} anyons ({}x{})",
            M::NAME,
            index,
            self.qudits,
            self.anyons_per_qudit(),
            self.dim(),
            self.dim()
        );
        Ok(matrix)
    }
}

/// Overlap of `running × (qudit tree)` with the chain segment that absorbs
/// the qudit's anyons into `running` one at a time.
fn absorb<M: AnyonModel>(running: Label, tree: &[Label], segment: &[Label]) -> Complex64 {
    let e = M::ELEMENTARY;
    if !M::fuses(running, e, segment[0]) {
        return Complex64::zero();
    }
    let mut amplitude = Complex64::one();
    for j in 1..segment.len() {
        let inner = if j == 1 { e } else { tree[j - 2] };
        let f = M::f_matrix(running, inner, e, segment[j]);
        let entry = f.get((segment[j - 1], tree[j - 1])).copied().unwrap_or_else(Complex64::zero);
        amplitude *= entry.conj();
    }
    amplitude
}
