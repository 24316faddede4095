use std::io::{self, Write};

use log::trace;
use rand::Rng;

use super::capability::Capabilities;
use super::chain::MarkovChain;
use super::render_style::RenderStyle;
use super::state::StateId;
use crate::error::{ChainError, Result, invalid_parameter};

/// Why a walk stopped growing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WalkEnd {
	/// The last state is terminal.
	Terminal,
	/// The last state has no outgoing transitions.
	DeadEnd,
	/// The walk reached its maximum length.
	LengthCap,
}

/// A generated sequence of states.
///
/// Payloads are borrowed from the chain's registry, so a walk cannot outlive
/// the chain that produced it. Clone the payloads if independence is needed.
#[derive(Debug)]
pub struct Walk<'a, T> {
	ids: Vec<StateId>,
	payloads: Vec<&'a T>,
	end: WalkEnd,
}

impl<'a, T> Walk<'a, T> {
	pub fn ids(&self) -> &[StateId] {
		&self.ids
	}

	pub fn payloads(&self) -> &[&'a T] {
		&self.payloads
	}

	pub fn len(&self) -> usize {
		self.ids.len()
	}

	/// Always false: a walk holds at least its start state.
	pub fn is_empty(&self) -> bool {
		self.ids.is_empty()
	}

	pub fn end(&self) -> WalkEnd {
		self.end
	}

	/// Whether the walk was cut by its length cap rather than by a terminal
	/// or dead-end state.
	pub fn is_truncated(&self) -> bool {
		self.end == WalkEnd::LengthCap
	}

	/// Writes every payload through `caps`, laid out according to `style`.
	pub fn render<C>(&self, caps: &C, style: &RenderStyle, out: &mut dyn Write) -> io::Result<()>
	where
		C: Capabilities<T> + ?Sized,
	{
		for (i, payload) in self.payloads.iter().enumerate() {
			if i > 0 {
				out.write_all(style.connector.as_bytes())?;
			}
			caps.render(*payload, out)?;
		}
		if self.is_truncated() {
			out.write_all(style.truncation_marker.as_bytes())?;
		}
		out.write_all(style.line_end.as_bytes())
	}
}

impl<T, C: Capabilities<T>> MarkovChain<T, C> {
	/// Picks a uniformly random state that can start a walk.
	///
	/// Candidates are drawn uniformly over the registry and redrawn while they
	/// are terminal or have no transitions.
	///
	/// # Errors
	/// `NoValidStart` if the registry is empty or holds no valid start; this is
	/// checked up front so the redraw loop always terminates.
	pub fn pick_start<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<StateId> {
		if !self.has_valid_start() {
			return Err(ChainError::NoValidStart { states: self.len() });
		}

		loop {
			let candidate = StateId::new(rng.random_range(0..self.len()));
			if self.is_valid_start(candidate) {
				return Ok(candidate);
			}
		}
	}

	/// Draws the successor of `id` with probability `weight / total weight`.
	///
	/// Callers check the state is non-terminal with transitions first;
	/// `generate_walk` does.
	///
	/// # Errors
	/// - `UnknownState` for a foreign id
	/// - `ZeroWeight` if `id` has no transitions
	pub fn pick_next<R: Rng + ?Sized>(&self, id: StateId, rng: &mut R) -> Result<StateId> {
		self.node(id)?.draw(rng).ok_or(ChainError::ZeroWeight { state: id })
	}

	/// Generates a walk of at most `max_length` states, beginning with `start`.
	///
	/// # Behavior
	/// - `start` is always emitted
	/// - Stops, keeping the current state, when it is terminal or has no transitions
	/// - Stops once `max_length` states have been emitted
	///
	/// # Errors
	/// - `InvalidParameter` if `max_length` is 0
	/// - `UnknownState` if `start` is foreign to this chain
	pub fn generate_walk<R: Rng + ?Sized>(&self, start: StateId, max_length: usize, rng: &mut R) -> Result<Walk<'_, T>> {
		if max_length == 0 {
			return Err(invalid_parameter("max_length", &max_length, &"a walk holds at least its start state"));
		}

		let mut current = start;
		let mut node = self.node(current)?;
		let mut ids = vec![current];
		let mut payloads = vec![node.payload()];

		let end = loop {
			if self.capabilities().is_terminal(node.payload()) {
				break WalkEnd::Terminal;
			}
			if !node.has_transitions() {
				break WalkEnd::DeadEnd;
			}
			if ids.len() >= max_length {
				break WalkEnd::LengthCap;
			}

			let next = self.pick_next(current, rng)?;
			trace!("walk step {current} -> {next}");
			current = next;
			node = self.node(current)?;
			ids.push(current);
			payloads.push(node.payload());
		};

		Ok(Walk { ids, payloads, end })
	}
}
