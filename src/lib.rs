//! # anyon-braid
//!
//! Braid-group representations on the fusion space of Fibonacci and Ising
//! anyons, and the braid-word algebra used to assemble gate candidates from
//! elementary exchanges.
//!
//! ## Pipeline
//!
//! ```text
//! fusion rules ─▶ basis enumeration ─▶ F / R matrices ─▶ σ_i amplitudes
//!                                                          │
//!                                       generator table ◀──┘
//!                                              │
//! weave ─▶ describe / uncouple ─▶ braid word ─▶ get_matrix ─▶ error_distance
//!                                                            leakage_error
//! ```
//!
//! - **Fibonacci**: labels {1, τ} encoded {0, 1}; τ × τ = 1 + τ.
//! - **Ising**: labels {1, σ, ψ} encoded {0, 1, 2}; σ × σ = 1 + ψ,
//!   σ × ψ = σ, ψ × ψ = 1.
//!
//! A fusion-tree state is the list of outcomes of a left-to-right fusion of
//! N elementary anyons (τ or σ), N − 1 labels in total. Multi-qudit registers
//! group the anyons into qudits, each carrying its own left-to-right tree,
//! and fuse the qudit charges through a chain of root labels.
//!
//! ## Usage
//!
//! ```no_run
//! use anyon_braid::prelude::*;
//!
//! let config = TableConfig {
//!     model: ModelKind::Fibonacci,
//!     register: Register::Qudits { qudits: 2, qudit_len: 2 },
//! };
//! let built = build_table(&config).unwrap();
//!
//! let word = uncouple(&[2, 2, -2], 1, 1, 1, 0, 2, false).unwrap();
//! let gate = get_matrix(&word, &built.table).unwrap();
//! println!("leakage = {}", leakage_error(&gate).unwrap());
//! ```

pub mod error;
pub mod fusion;
pub mod fibonacci;
pub mod ising;
pub mod basis;
pub mod braiding;
pub mod multi_qudit;
pub mod table;
pub mod weave;
pub mod metrics;

pub use error::{BraidError, Result};

pub mod prelude {
    pub use crate::error::*;
    pub use crate::fusion::*;
    pub use crate::fibonacci::*;
    pub use crate::ising::*;
    pub use crate::basis::*;
    pub use crate::braiding::*;
    pub use crate::multi_qudit::*;
    pub use crate::table::*;
    pub use crate::weave::*;
    pub use crate::metrics::*;
}
