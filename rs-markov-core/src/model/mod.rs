//! Top-level module for the chain model.
//!
//! - Client-supplied payload behaviour (`Capabilities`)
//! - States and their weighted transitions (`StateNode`)
//! - The owning arena of states (`Registry`)
//! - The chain itself (`MarkovChain`)
//! - Walk generation and rendering (`Walk`, `RenderStyle`)

/// Payload behaviour supplied by the client.
pub mod capability;

/// A single state and its outgoing weighted edges.
///
/// Tracks outgoing transitions and supports weighted random sampling.
pub mod state;

/// Insertion-ordered arena owning every state.
pub mod registry;

/// Chain construction, lookup and teardown.
pub mod chain;

/// Start selection, weighted stepping and walk generation.
pub mod walk;

/// Output layout of a finished walk.
pub mod render_style;
