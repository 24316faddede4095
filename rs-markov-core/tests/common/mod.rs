//! Shared capability sets for the integration tests

#![allow(dead_code)]

use std::cell::Cell;
use std::cmp::Ordering;
use std::io::{self, Write};
use std::rc::Rc;

use rs_markov_core::Capabilities;

/// Clone/release counters shared between a test and the chain it builds.
#[derive(Clone, Default)]
pub struct Counters {
	pub clones: Rc<Cell<usize>>,
	pub releases: Rc<Cell<usize>>,
}

impl Counters {
	pub fn live(&self) -> usize {
		self.clones.get() - self.releases.get()
	}
}

/// Words; a word ending with '.' is terminal.
pub struct Words {
	pub counters: Counters,
}

impl Words {
	pub fn new() -> (Self, Counters) {
		let counters = Counters::default();
		(Self { counters: counters.clone() }, counters)
	}
}

impl Capabilities<String> for Words {
	fn compare(&self, a: &String, b: &String) -> Ordering {
		a.cmp(b)
	}

	fn clone_state(&self, value: &String) -> String {
		self.counters.clones.set(self.counters.clones.get() + 1);
		value.clone()
	}

	fn release(&self, value: String) {
		self.counters.releases.set(self.counters.releases.get() + 1);
		drop(value);
	}

	fn render(&self, value: &String, out: &mut dyn Write) -> io::Result<()> {
		out.write_all(value.as_bytes())
	}

	fn is_terminal(&self, value: &String) -> bool {
		value.ends_with('.')
	}
}

pub fn s(word: &str) -> String {
	word.to_owned()
}
