//! Fusion-tree bases.
//!
//! A single-qudit state is the list of outcomes of fusing N elementary anyons
//! left to right: label k is the charge of the first k + 2 anyons. A register
//! of several qudits keeps one such list per qudit and fuses the qudit
//! charges through a chain of root labels.
//!
//! Both bases are produced by filtering an [`Odometer`] walk, so the order is
//! fixed: the first position changes fastest. Row and column indices of every
//! generator matrix follow this order.

use std::collections::HashSet;

use log::debug;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{BraidError, Result};
use crate::fusion::{AnyonModel, Label};

/// Internal labels of one fusion tree, leftmost vertex first.
pub type FusionState = SmallVec<[Label; 8]>;

/// Mixed-radix counter over label tuples, least-significant digit first.
///
/// `Odometer::new(base, digits)` yields all `base^digits` tuples; with zero
/// digits it yields the single empty tuple.
#[derive(Debug, Clone)]
pub struct Odometer {
    radices: Vec<usize>,
    next: Option<FusionState>,
}

impl Odometer {
    /// Every digit ranges over `0..base`.
    pub fn new(base: usize, digits: usize) -> Self {
        Self::mixed(vec![base; digits])
    }

    /// Digit `k` ranges over `0..radices[k]`.
    pub fn mixed(radices: Vec<usize>) -> Self {
        let next = if radices.iter().any(|&r| r == 0) {
            None
        } else {
            Some(SmallVec::from_elem(0, radices.len()))
        };
        Self { radices, next }
    }

    /// Number of tuples the full walk produces.
    pub fn len(&self) -> usize {
        self.radices.iter().product()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Iterator for Odometer {
    type Item = FusionState;

    fn next(&mut self) -> Option<FusionState> {
        let current = self.next.take()?;
        let mut advanced = current.clone();
        for (digit, &radix) in advanced.iter_mut().zip(&self.radices) {
            *digit += 1;
            if *digit < radix {
                self.next = Some(advanced);
                return Some(current);
            }
            *digit = 0;
        }
        // every digit rolled over
        Some(current)
    }
}

/// Whether `state` is a valid left-to-right fusion tree of elementary anyons.
///
/// The first vertex fuses the first two anyons, so the fold is seeded with
/// the elementary label. The empty state is valid.
pub fn check_state<M: AnyonModel>(state: &[Label]) -> bool {
    let mut prev = M::ELEMENTARY;
    for &outcome in state {
        if !M::fuses(prev, M::ELEMENTARY, outcome) {
            return false;
        }
        prev = outcome;
    }
    true
}

/// All valid fusion trees of `n_anyons` elementary anyons, in odometer order.
///
/// Zero or one anyon gives the single empty state.
pub fn find_basis<M: AnyonModel>(n_anyons: usize) -> Vec<FusionState> {
    let basis: Vec<FusionState> = Odometer::new(M::ALPHABET, n_anyons.saturating_sub(1))
        .filter(|state| check_state::<M>(state))
        .collect();
    debug!("{} basis for {} anyons: {} states", M::NAME, n_anyons, basis.len());
    basis
}

/// A state of a register of qudits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MultiQuditState {
    /// Internal labels of each qudit; the last label is the qudit's charge.
    pub qudits: Vec<FusionState>,
    /// Running charge after fusing qudit k + 1 into qudits 0..=k.
    pub roots: FusionState,
}

impl MultiQuditState {
    pub fn new(qudits: Vec<FusionState>, roots: FusionState) -> Self {
        Self { qudits, roots }
    }

    /// Total charge of qudit `k`.
    pub fn charge(&self, k: usize) -> Option<Label> {
        self.qudits.get(k).and_then(|q| q.last().copied())
    }

    /// Total charge of the whole register.
    pub fn total_charge(&self) -> Option<Label> {
        match self.roots.last() {
            Some(&root) => Some(root),
            None => self.charge(0),
        }
    }
}

fn roots_valid<M: AnyonModel>(charges: &[Label], roots: &[Label]) -> bool {
    if charges.is_empty() || roots.len() + 1 != charges.len() {
        return false;
    }
    let mut prev = charges[0];
    for (&charge, &root) in charges[1..].iter().zip(roots) {
        if !M::fuses(prev, charge, root) {
            return false;
        }
        prev = root;
    }
    true
}

/// Whether every qudit is a valid tree and the roots chain its charges.
pub fn check_register_state<M: AnyonModel>(state: &MultiQuditState) -> bool {
    let mut charges = Vec::with_capacity(state.qudits.len());
    for qudit in &state.qudits {
        match qudit.last() {
            Some(&charge) if check_state::<M>(qudit) => charges.push(charge),
            _ => return false,
        }
    }
    roots_valid::<M>(&charges, &state.roots)
}

/// All valid states of `qudits` qudits with `qudit_len` internal labels each.
///
/// Order: root tuples slowest, then the qudit-charge tuple, then the choice
/// of tree inside each qudit (qudit 0 fastest, each in [`find_basis`] order).
pub fn find_register_basis<M: AnyonModel>(qudits: usize, qudit_len: usize) -> Result<Vec<MultiQuditState>> {
    if qudits == 0 {
        return Err(BraidError::InvalidRegister("a register needs at least one qudit".into()));
    }
    if qudit_len == 0 {
        return Err(BraidError::InvalidRegister("a qudit needs at least one internal label".into()));
    }

    let single = find_basis::<M>(qudit_len + 1);
    let mut by_charge: Vec<Vec<&FusionState>> = vec![Vec::new(); M::ALPHABET];
    for state in &single {
        if let Some(&charge) = state.last() {
            by_charge[charge].push(state);
        }
    }

    let mut basis = Vec::new();
    for roots in Odometer::new(M::ALPHABET, qudits - 1) {
        for charges in Odometer::new(M::ALPHABET, qudits) {
            if !roots_valid::<M>(&charges, &roots) {
                continue;
            }
            let radices = charges.iter().map(|&c| by_charge[c].len()).collect();
            for pick in Odometer::mixed(radices) {
                let trees = charges
                    .iter()
                    .zip(&pick)
                    .map(|(&c, &p)| by_charge[c][p].clone())
                    .collect();
                basis.push(MultiQuditState::new(trees, roots.clone()));
            }
        }
    }

    debug!(
        "{} register basis for {} qudits x {} anyons: {} states",
        M::NAME,
        qudits,
        qudit_len + 1,
        basis.len()
    );
    Ok(basis)
}

/// Whether a basis lists every state exactly once.
pub fn is_duplicate_free<T: Eq + std::hash::Hash>(basis: &[T]) -> bool {
    let mut seen = HashSet::with_capacity(basis.len());
    basis.iter().all(|s| seen.insert(s))
}
