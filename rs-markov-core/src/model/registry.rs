use log::debug;

use super::capability::Capabilities;
use super::state::{StateId, StateNode};
use crate::error::{ChainError, Result};

/// Insertion-ordered, duplicate-free arena of states.
///
/// The registry exclusively owns every node, and through them every payload
/// copy and edge list. Nodes are addressed by `StateId` and never removed.
///
/// # Invariants
/// - No two nodes compare equal under the capability set they were added with
/// - Ids are dense: `0..len()`
#[derive(Debug)]
pub struct Registry<T> {
	nodes: Vec<StateNode<T>>,
}

impl<T> Default for Registry<T> {
	fn default() -> Self {
		Self { nodes: Vec::new() }
	}
}

impl<T> Registry<T> {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	/// Returns the id of the state equal to `value`, if registered.
	///
	/// Linear scan in insertion order.
	pub fn find<C: Capabilities<T> + ?Sized>(&self, caps: &C, value: &T) -> Option<StateId> {
		self.nodes
			.iter()
			.position(|node| caps.same(node.payload(), value))
			.map(StateId::new)
	}

	/// Returns the existing state equal to `value`, or registers a copy of it.
	///
	/// `value` itself is never retained. When the registry cannot grow, the
	/// fresh copy is released before the error is returned and nothing is
	/// inserted.
	pub fn add<C: Capabilities<T> + ?Sized>(&mut self, caps: &C, value: &T) -> Result<StateId> {
		if let Some(id) = self.find(caps, value) {
			return Ok(id);
		}

		let payload = caps.clone_state(value);
		if self.nodes.len() == self.nodes.capacity() {
			if let Err(source) = self.nodes.try_reserve(1) {
				caps.release(payload);
				return Err(ChainError::Allocation { what: "registry", requested: 1, source });
			}
		}

		let id = StateId::new(self.nodes.len());
		self.nodes.push(StateNode::new(payload));
		debug!("registered state {id}");
		Ok(id)
	}

	pub fn get(&self, id: StateId) -> Result<&StateNode<T>> {
		self.nodes.get(id.index()).ok_or(ChainError::UnknownState { state: id, len: self.nodes.len() })
	}

	pub(crate) fn get_mut(&mut self, id: StateId) -> Result<&mut StateNode<T>> {
		let len = self.nodes.len();
		self.nodes.get_mut(id.index()).ok_or(ChainError::UnknownState { state: id, len })
	}

	/// Iterates over `(id, node)` in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (StateId, &StateNode<T>)> {
		self.nodes.iter().enumerate().map(|(i, node)| (StateId::new(i), node))
	}

	pub fn ids(&self) -> impl Iterator<Item = StateId> + '_ {
		(0..self.nodes.len()).map(StateId::new)
	}

	/// Hands every node back in insertion order, leaving the registry empty.
	pub(crate) fn drain(&mut self) -> impl Iterator<Item = StateNode<T>> + '_ {
		self.nodes.drain(..)
	}
}
