use std::collections::TryReserveError;
use std::fmt;

use rand::Rng;

/// Stable index of a state inside its registry.
///
/// States are never removed, so an id stays valid for the lifetime of the
/// registry that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateId(usize);

impl StateId {
	pub fn new(index: usize) -> Self {
		Self(index)
	}

	/// Position of the state in insertion order.
	pub fn index(self) -> usize {
		self.0
	}
}

impl fmt::Display for StateId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{}", self.0)
	}
}

/// Observed transition toward another state of the same registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge {
	/// Target state (non-owning).
	pub target: StateId,
	/// Number of times the transition was observed, always >= 1.
	pub weight: usize,
}

/// Represents a state of the chain.
///
/// A `StateNode` owns one payload copy and every transition observed from it.
/// Conceptually, this is a node in a Markov chain where outgoing edges
/// are weighted by their number of observations.
///
/// ## Invariants
/// - At most one edge per target
/// - Each edge weight is strictly positive
#[derive(Debug)]
pub struct StateNode<T> {
	payload: T,
	/// Outgoing transitions, in first-observed order.
	edges: Vec<Edge>,
}

impl<T> StateNode<T> {
	/// Creates a state with no transitions.
	pub(crate) fn new(payload: T) -> Self {
		Self { payload, edges: Vec::new() }
	}

	pub fn payload(&self) -> &T {
		&self.payload
	}

	pub fn edges(&self) -> &[Edge] {
		&self.edges
	}

	pub fn edge_count(&self) -> usize {
		self.edges.len()
	}

	/// Allocated edge slots; never less than `edge_count`.
	pub fn edge_capacity(&self) -> usize {
		self.edges.capacity()
	}

	pub fn has_transitions(&self) -> bool {
		!self.edges.is_empty()
	}

	/// Sum of all outgoing weights.
	pub fn total_weight(&self) -> usize {
		self.edges.iter().map(|edge| edge.weight).sum()
	}

	pub(crate) fn edge_position(&self, target: StateId) -> Option<usize> {
		self.edges.iter().position(|edge| edge.target == target)
	}

	/// Increases the weight of an existing edge.
	pub(crate) fn bump(&mut self, position: usize) {
		self.edges[position].weight += 1;
	}

	/// Appends a new edge of weight 1, growing the storage by exactly one slot.
	///
	/// On allocation failure the whole edge list is dropped and the error is
	/// returned; the state keeps its payload but loses its transitions.
	pub(crate) fn push_edge(&mut self, target: StateId) -> Result<(), TryReserveError> {
		if self.edges.len() == self.edges.capacity() {
			if let Err(e) = self.edges.try_reserve_exact(1) {
				self.edges = Vec::new();
				return Err(e);
			}
		}
		self.edges.push(Edge { target, weight: 1 });
		Ok(())
	}

	/// Draws a target with probability `weight / total_weight`.
	///
	/// This method performs:
	/// - an O(n) scan to compute the total
	/// - a cumulative subtraction to select a bucket
	///
	/// Returns `None` if the state has no weighted transitions.
	pub(crate) fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<StateId> {
		let total = self.total_weight();
		if total == 0 {
			return None;
		}

		let mut r = rng.random_range(0..total);
		for edge in &self.edges {
			if r < edge.weight {
				return Some(edge.target);
			}
			r -= edge.weight;
		}

		// Unreachable while weights sum to `total`
		None
	}

	/// Splits the node so the payload can be handed back for release.
	pub(crate) fn into_parts(self) -> (T, Vec<Edge>) {
		(self.payload, self.edges)
	}
}
