//! Generic Markov chain library.
//!
//! This crate provides a payload-agnostic stochastic sequence engine:
//! - A duplicate-free registry of observed states
//! - Per-state weighted transition tables built incrementally
//! - Weighted random walks over the learned transitions
//! - Small I/O helpers for corpus-driven frontends
//!
//! The payload type is opaque to the engine; clients describe it through
//! the `Capabilities` trait.

/// Chain model: capability set, states, registry and random walks.
pub mod model;

/// Error taxonomy shared by the whole crate.
pub mod error;

/// I/O utilities (corpus loading).
pub mod io;

pub use error::{ChainError, Result};
pub use model::capability::Capabilities;
pub use model::chain::MarkovChain;
pub use model::render_style::RenderStyle;
pub use model::state::{Edge, StateId, StateNode};
pub use model::walk::{Walk, WalkEnd};
