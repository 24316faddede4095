use std::collections::TryReserveError;
use std::fmt;
use std::path::PathBuf;

use crate::model::state::StateId;

/// Errors reported by the chain while it is being built or walked.
///
/// Construction errors (`Allocation`, `PartialBuild`) are fatal for the chain
/// being built: callers propagate them with `?` and the partially built chain
/// is torn down when it goes out of scope. Walk errors leave the chain intact.
#[derive(Debug)]
pub enum ChainError {
	/// Growing the registry or an edge list failed.
	Allocation {
		/// Which storage was being grown.
		what: &'static str,
		/// Number of slots requested.
		requested: usize,
		source: TryReserveError,
	},

	/// No registered state is both non-terminal and has outgoing edges.
	NoValidStart {
		states: usize,
	},

	/// A next state was requested from a state whose edge weights sum to zero.
	ZeroWeight {
		state: StateId,
	},

	/// Recording a transition failed in the middle of a build, leaving
	/// `state` registered without transitions.
	PartialBuild {
		state: StateId,
		source: Box<ChainError>,
	},

	/// An identifier does not belong to this registry.
	UnknownState {
		state: StateId,
		len: usize,
	},

	/// A caller-supplied parameter was rejected.
	InvalidParameter {
		parameter: &'static str,
		value: String,
		reason: String,
	},

	/// Reading a corpus failed.
	Io {
		path: PathBuf,
		source: std::io::Error,
	},
}

impl fmt::Display for ChainError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Allocation { what, requested, .. } => {
				write!(f, "Allocation failure: couldn't grow {what} by {requested} slot(s)")
			}
			Self::NoValidStart { states } => {
				write!(f, "No valid start state among {states} registered state(s)")
			}
			Self::ZeroWeight { state } => {
				write!(f, "State {state} has no weighted transitions to draw from")
			}
			Self::PartialBuild { state, source } => {
				write!(f, "Build aborted, state {state} lost its transitions: {source}")
			}
			Self::UnknownState { state, len } => {
				write!(f, "State {state} is out of range (registry holds {len})")
			}
			Self::InvalidParameter { parameter, value, reason } => {
				write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
			}
			Self::Io { path, source } => {
				write!(f, "Failed to read '{}': {source}", path.display())
			}
		}
	}
}

impl std::error::Error for ChainError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Self::Allocation { source, .. } => Some(source),
			Self::PartialBuild { source, .. } => Some(source.as_ref()),
			Self::Io { source, .. } => Some(source),
			_ => None,
		}
	}
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, ChainError>;

/// Builds an `InvalidParameter` error.
pub fn invalid_parameter(parameter: &'static str, value: &impl ToString, reason: &impl ToString) -> ChainError {
	ChainError::InvalidParameter {
		parameter,
		value: value.to_string(),
		reason: reason.to_string(),
	}
}
