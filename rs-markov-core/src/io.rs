use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{ChainError, Result};

/// Reads a text file and returns all its lines as a `Vec<String>`.
///
/// - Reads the entire file into memory
/// - Splits on `\n` / `\r\n`
pub fn read_file<P: AsRef<Path>>(filename: P) -> Result<Vec<String>> {
	let path = filename.as_ref();
	let mut contents = String::new();
	File::open(path)
		.and_then(|mut file| file.read_to_string(&mut contents))
		.map_err(|source| ChainError::Io { path: path.to_path_buf(), source })?;
	Ok(contents.lines().map(str::to_owned).collect())
}

/// Splits lines into whitespace-separated tokens, keeping line boundaries.
///
/// When `limit` is set, stops once that many tokens have been produced.
/// Empty lines are skipped.
pub fn tokenize_lines(lines: &[String], limit: Option<usize>) -> Vec<Vec<&str>> {
	let mut remaining = limit.unwrap_or(usize::MAX);
	let mut result = Vec::new();

	for line in lines {
		if remaining == 0 {
			break;
		}
		let tokens: Vec<&str> = line.split_whitespace().take(remaining).collect();
		if tokens.is_empty() {
			continue;
		}
		remaining -= tokens.len();
		result.push(tokens);
	}

	result
}
