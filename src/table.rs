//! Generator tables and the Matrix Evaluator.
//!
//! A [`GeneratorTable`] maps (generator index, ±1) to a square matrix; the
//! inverse of every generator is stored next to it. [`build_table`] fills a
//! table for a [`TableConfig`], and [`get_matrix`] multiplies a braid word out
//! against a table.

use std::collections::BTreeMap;

use log::info;
use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::basis::{find_basis, FusionState, MultiQuditState};
use crate::braiding::generator_on_basis;
use crate::error::{BraidError, Result};
use crate::fibonacci::{Fibonacci, PHI_INV, PHI_INV_SQRT, R_TAU_TAU_TAU, R_TAU_TAU_VACUUM};
use crate::fusion::{diagonal, AnyonModel, CMatrix, ModelKind};
use crate::ising::Ising;
use crate::multi_qudit::MultiQuditSpace;
use crate::weave::BraidWord;

/// σ_i and σ_i⁻¹ for every generator of one register.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorTable {
    dim: usize,
    entries: BTreeMap<(usize, i32), CMatrix>,
}

impl GeneratorTable {
    /// Empty table for `dim × dim` generators.
    pub fn new(dim: usize) -> Self {
        Self { dim, entries: BTreeMap::new() }
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Number of generators (each counted once with its inverse).
    pub fn len(&self) -> usize {
        self.entries.keys().filter(|(_, power)| *power == 1).count()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Generator indices present in the table, ascending.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.entries.keys().filter(|(_, power)| *power == 1).map(|(index, _)| *index)
    }

    /// Store σ_index and its exact inverse, replacing any previous entry.
    pub fn insert(&mut self, index: usize, forward: CMatrix) -> Result<()> {
        if !forward.is_square() {
            return Err(BraidError::NotSquare { rows: forward.nrows(), cols: forward.ncols() });
        }
        if forward.nrows() != self.dim {
            return Err(BraidError::DimensionMismatch { left: self.dim, right: forward.nrows() });
        }
        let inverse = forward.clone().try_inverse().ok_or(BraidError::SingularGenerator(index))?;
        self.entries.insert((index, 1), forward);
        self.entries.insert((index, -1), inverse);
        Ok(())
    }

    /// σ_index^power for power ±1.
    pub fn get(&self, index: usize, power: i32) -> Result<&CMatrix> {
        self.entries
            .get(&(index, power))
            .ok_or(BraidError::MissingGenerator { index, power })
    }

    pub fn contains(&self, index: usize, power: i32) -> bool {
        self.entries.contains_key(&(index, power))
    }

    /// The two-generator Fibonacci table on three τ's with total charge τ.
    ///
    /// σ₁ = diag(e^{-4πi/5}, e^{3πi/5}); σ₂ mixes the two states through the
    /// golden-ratio F matrix.
    pub fn fibonacci_example() -> Self {
        let sigma_1 = diagonal(&[R_TAU_TAU_VACUUM, R_TAU_TAU_TAU]);
        let diag = R_TAU_TAU_VACUUM.conj() * PHI_INV;
        let off = R_TAU_TAU_TAU.conj() * PHI_INV_SQRT;
        let sigma_2 = CMatrix::from_row_slice(2, 2, &[diag, off, off, Complex64::new(-PHI_INV, 0.0)]);

        let mut entries = BTreeMap::new();
        for (index, forward) in [(1, sigma_1), (2, sigma_2)] {
            // unitary, so the adjoint is the inverse
            let inverse = forward.clone().try_inverse().unwrap_or_else(|| forward.adjoint());
            entries.insert((index, 1), forward);
            entries.insert((index, -1), inverse);
        }
        Self { dim: 2, entries }
    }
}

impl Default for GeneratorTable {
    fn default() -> Self {
        Self::fibonacci_example()
    }
}

/// Layout of the anyons a table acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Register {
    /// One left-to-right chain.
    Chain { anyons: usize },
    /// `qudits` groups of `qudit_len + 1` anyons.
    Qudits { qudits: usize, qudit_len: usize },
}

/// Parameters of a generator table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TableConfig {
    pub model: ModelKind,
    pub register: Register,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            model: ModelKind::Fibonacci,
            register: Register::Chain { anyons: 4 },
        }
    }
}

impl TableConfig {
    /// Total number of elementary anyons.
    pub fn anyons(&self) -> usize {
        match self.register {
            Register::Chain { anyons } => anyons,
            Register::Qudits { qudits, qudit_len } => qudits * (qudit_len + 1),
        }
    }

    pub fn generator_count(&self) -> usize {
        self.anyons().saturating_sub(1)
    }

    pub fn validate(&self) -> Result<()> {
        match self.register {
            Register::Chain { anyons } if anyons < 2 => Err(BraidError::InvalidRegister(format!(
                "a chain of {} anyons has no exchanges",
                anyons
            ))),
            Register::Qudits { qudits: 0, .. } => {
                Err(BraidError::InvalidRegister("a register needs at least one qudit".into()))
            }
            Register::Qudits { qudit_len: 0, .. } => {
                Err(BraidError::InvalidRegister("a qudit needs at least one internal label".into()))
            }
            _ => Ok(()),
        }
    }
}

/// Basis a table is written in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BasisStates {
    Chain(Vec<FusionState>),
    Qudits(Vec<MultiQuditState>),
}

impl BasisStates {
    pub fn len(&self) -> usize {
        match self {
            BasisStates::Chain(states) => states.len(),
            BasisStates::Qudits(states) => states.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A generator table together with the configuration and basis it was built for.
#[derive(Debug, Clone)]
pub struct BuiltTable {
    pub config: TableConfig,
    pub basis: BasisStates,
    pub table: GeneratorTable,
}

/// Compute every generator of `config`.
pub fn build_table(config: &TableConfig) -> Result<BuiltTable> {
    config.validate()?;
    match config.model {
        ModelKind::Fibonacci => build_for::<Fibonacci>(config),
        ModelKind::Ising => build_for::<Ising>(config),
    }
}

fn build_for<M: AnyonModel>(config: &TableConfig) -> Result<BuiltTable> {
    let count = config.generator_count();
    let (basis, generators) = match config.register {
        Register::Chain { anyons } => {
            let states = find_basis::<M>(anyons);
            let generators = compute_generators(count, |index| generator_on_basis::<M>(index, &states))?;
            (BasisStates::Chain(states), generators)
        }
        Register::Qudits { qudits, qudit_len } => {
            let space = MultiQuditSpace::<M>::new(qudits, qudit_len)?;
            let generators = compute_generators(count, |index| space.generator(index))?;
            (BasisStates::Qudits(space.basis().to_vec()), generators)
        }
    };

    let mut table = GeneratorTable::new(basis.len());
    for (k, generator) in generators.into_iter().enumerate() {
        table.insert(k + 1, generator)?;
    }
    info!(
        "built {} table: {} generators on {} anyons, dimension {}",
        M::NAME,
        table.len(),
        config.anyons(),
        table.dim()
    );
    Ok(BuiltTable { config: *config, basis, table })
}

/// σ_1 ..= σ_count, in index order.
fn compute_generators<F>(count: usize, generator: F) -> Result<Vec<CMatrix>>
where
    F: Fn(usize) -> Result<CMatrix> + Sync,
{
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        (1..=count).into_par_iter().map(&generator).collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        (1..=count).map(&generator).collect()
    }
}

/// Realise a braid word: the first step is the rightmost factor.
pub fn get_matrix(word: &BraidWord, table: &GeneratorTable) -> Result<CMatrix> {
    let mut result = CMatrix::identity(table.dim(), table.dim());
    for (index, power) in word.iter() {
        result = table.get(index, power)? * result;
    }
    Ok(result)
}
