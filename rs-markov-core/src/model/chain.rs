use std::io::{self, Write};

use log::{debug, warn};

use super::capability::Capabilities;
use super::registry::Registry;
use super::state::{StateId, StateNode};
use crate::error::{ChainError, Result};

/// A Markov chain over an opaque payload type.
///
/// The chain owns the capability set it was built with and the registry of
/// every observed state. Transitions are learned incrementally with
/// `record_transition` (or `observe`), then walked with the functions of
/// the `walk` module.
///
/// # Responsibilities
/// - Register each distinct payload once
/// - Accumulate transition weights between registered states
/// - Release every owned payload through the capability set on teardown
///
/// # Invariants
/// - Each edge target belongs to this chain's registry
/// - Observing the same transition twice increments one edge
pub struct MarkovChain<T, C: Capabilities<T>> {
	caps: C,
	registry: Registry<T>,
}

impl<T, C: Capabilities<T>> MarkovChain<T, C> {
	/// Creates an empty chain driven by `caps`.
	pub fn new(caps: C) -> Self {
		Self { caps, registry: Registry::new() }
	}

	pub fn capabilities(&self) -> &C {
		&self.caps
	}

	pub fn registry(&self) -> &Registry<T> {
		&self.registry
	}

	pub fn len(&self) -> usize {
		self.registry.len()
	}

	pub fn is_empty(&self) -> bool {
		self.registry.is_empty()
	}

	/// Registers `value` if it is new and returns its id.
	pub fn add(&mut self, value: &T) -> Result<StateId> {
		self.registry.add(&self.caps, value)
	}

	/// Looks `value` up without registering it.
	pub fn find(&self, value: &T) -> Option<StateId> {
		self.registry.find(&self.caps, value)
	}

	pub fn node(&self, id: StateId) -> Result<&StateNode<T>> {
		self.registry.get(id)
	}

	pub fn payload(&self, id: StateId) -> Result<&T> {
		Ok(self.registry.get(id)?.payload())
	}

	/// Records one observation of the transition `from -> to`.
	///
	/// An existing edge toward `to` gets its weight increased; otherwise a new
	/// edge of weight 1 is appended. Registry uniqueness makes id equality
	/// equivalent to payload equality here.
	///
	/// # Errors
	/// - `UnknownState` if either id is foreign to this chain
	/// - `Allocation` if the edge list could not grow; the edge list of
	///   `from` is then empty and the chain must not be used for generation
	pub fn record_transition(&mut self, from: StateId, to: StateId) -> Result<()> {
		self.registry.get(to)?;
		let node = self.registry.get_mut(from)?;

		match node.edge_position(to) {
			Some(position) => node.bump(position),
			None => {
				if let Err(source) = node.push_edge(to) {
					warn!("dropped transitions of state {from} after failed growth");
					return Err(ChainError::Allocation { what: "edge list", requested: 1, source });
				}
			}
		}
		Ok(())
	}

	/// Registers both payloads and records the transition between them.
	///
	/// Transitions leaving a terminal payload are not recorded, only the
	/// payload itself is registered. This is the building block of the
	/// corpus collaborators.
	///
	/// # Errors
	/// A failed recording is reported as `PartialBuild`; the caller is expected
	/// to drop the chain.
	pub fn observe(&mut self, from: &T, to: &T) -> Result<()> {
		let from_id = self.add(from)?;
		if self.caps.is_terminal(from) {
			return Ok(());
		}
		let to_id = self.add(to)?;

		self.record_transition(from_id, to_id).map_err(|e| match e {
			ChainError::Allocation { .. } => ChainError::PartialBuild { state: from_id, source: Box::new(e) },
			other => other,
		})
	}

	/// A state can start a walk iff it is not terminal and has transitions.
	pub fn is_valid_start(&self, id: StateId) -> bool {
		self.registry
			.get(id)
			.map(|node| node.has_transitions() && !self.caps.is_terminal(node.payload()))
			.unwrap_or(false)
	}

	/// Whether at least one state can start a walk.
	pub fn has_valid_start(&self) -> bool {
		self.registry.ids().any(|id| self.is_valid_start(id))
	}

	/// Writes one line per state: the payload, then its weighted targets.
	///
	/// Example: `cat -> 'dog' (3), 'mouse' (1)`
	pub fn write_frequencies(&self, out: &mut dyn Write) -> io::Result<()> {
		for (_, node) in self.registry.iter() {
			self.caps.render(node.payload(), out)?;
			for (i, edge) in node.edges().iter().enumerate() {
				let separator = if i == 0 { " -> '" } else { ", '" };
				out.write_all(separator.as_bytes())?;
				// Targets always come from this registry
				if let Ok(target) = self.registry.get(edge.target) {
					self.caps.render(target.payload(), out)?;
				}
				write!(out, "' ({})", edge.weight)?;
			}
			writeln!(out)?;
		}
		Ok(())
	}
}

impl<T, C: Capabilities<T>> Drop for MarkovChain<T, C> {
	/// Per node: edge list first, then the payload through `release`,
	/// then the node itself.
	fn drop(&mut self) {
		let states = self.registry.len();
		for node in self.registry.drain() {
			let (payload, edges) = node.into_parts();
			drop(edges);
			self.caps.release(payload);
		}
		debug!("released {states} state(s)");
	}
}

impl<T, C> std::fmt::Debug for MarkovChain<T, C>
where
	T: std::fmt::Debug,
	C: Capabilities<T>,
{
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("MarkovChain").field("registry", &self.registry).finish()
	}
}
