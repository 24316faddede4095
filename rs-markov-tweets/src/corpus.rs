//! Word-level corpus: payload behaviour and chain construction

use std::cmp::Ordering;
use std::io::{self, Write};

use log::debug;
use rs_markov_core::io::tokenize_lines;
use rs_markov_core::{Capabilities, MarkovChain, Result};

/// Character ending a sentence; a word ending with it is terminal.
pub const SENTENCE_END: char = '.';

/// Capability set for whitespace-separated words.
#[derive(Debug, Default)]
pub struct Words;

impl Capabilities<String> for Words {
    fn compare(&self, a: &String, b: &String) -> Ordering {
        a.cmp(b)
    }

    fn clone_state(&self, value: &String) -> String {
        value.clone()
    }

    fn render(&self, value: &String, out: &mut dyn Write) -> io::Result<()> {
        out.write_all(value.as_bytes())
    }

    fn is_terminal(&self, value: &String) -> bool {
        value.ends_with(SENTENCE_END)
    }
}

/// Learns a word chain from corpus lines.
///
/// # Behavior
/// - Every word is registered, including the last word of a line
/// - Each adjacent pair of words on the same line is observed
/// - Stops after `words_to_read` words when set
///
/// # Errors
/// Any construction error aborts the build; the partial chain is dropped.
pub fn build_chain(lines: &[String], words_to_read: Option<usize>) -> Result<MarkovChain<String, Words>> {
    let mut chain = MarkovChain::new(Words);
    let mut words = 0;

    for tokens in tokenize_lines(lines, words_to_read) {
        let tokens: Vec<String> = tokens.into_iter().map(str::to_owned).collect();
        for pair in tokens.windows(2) {
            chain.observe(&pair[0], &pair[1])?;
        }
        if let Some(last) = tokens.last() {
            chain.add(last)?;
        }
        words += tokens.len();
    }

    debug!("learned {} distinct word(s) from {words} word(s)", chain.len());
    Ok(chain)
}
