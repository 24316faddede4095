use std::cmp::Ordering;
use std::io::{self, Write};

/// Behaviour a client supplies to let the chain handle an opaque payload type.
///
/// A single implementation is moved into `MarkovChain` at construction and
/// stays immutable for the chain's lifetime.
///
/// ## Contract
/// - `compare` returns `Ordering::Equal` iff both values are the same logical state
/// - `clone_state` returns an independent, owned copy
/// - `release` consumes a copy previously produced by `clone_state`
/// - `render` writes the value without any separator
/// - `is_terminal` marks values that end every walk
pub trait Capabilities<T> {
	/// Compares two payloads; `Equal` means "same state".
	fn compare(&self, a: &T, b: &T) -> Ordering;

	/// Produces the copy the registry will own.
	fn clone_state(&self, value: &T) -> T;

	/// Destroys a copy owned by the registry.
	fn release(&self, value: T) {
		drop(value);
	}

	/// Writes the representation of `value` to `out`.
	fn render(&self, value: &T, out: &mut dyn Write) -> io::Result<()>;

	/// Whether `value` ends a sequence.
	fn is_terminal(&self, value: &T) -> bool;

	/// Shorthand for `compare(a, b) == Ordering::Equal`.
	fn same(&self, a: &T, b: &T) -> bool {
		self.compare(a, b) == Ordering::Equal
	}
}
