//! Instance parser: reads the whitespace-delimited text format (§6) from
//! any [`BufRead`] into a validated [`Instance`], matching the original
//! `istream >>` token semantics rather than a line-oriented one (fields may
//! be split across lines; only the total token stream matters).

use std::io::BufRead;

use log::{info, trace};

use crate::error::ParseError;
use crate::job::{Instance, Job, Time};

/// A single pass over whitespace-separated tokens, tracking which input
/// line each token came from for diagnostics.
struct Tokens {
	tokens: Vec<(usize, String)>,
	pos: usize,
}

impl Tokens {
	fn from_reader<R: BufRead>(reader: R) -> std::io::Result<Self> {
		let mut tokens = Vec::new();
		for (line_no, line) in reader.lines().enumerate() {
			let line = line?;
			for tok in line.split_ascii_whitespace() {
				tokens.push((line_no + 1, tok.to_string()));
			}
		}
		Ok(Tokens { tokens, pos: 0 })
	}

	fn current_line(&self) -> usize {
		self.tokens.get(self.pos).map(|(line, _)| *line).unwrap_or(self.tokens.last().map(|(line, _)| *line + 1).unwrap_or(1))
	}

	fn next_int(&mut self) -> Result<isize, ParseError> {
		let Some((line, tok)) = self.tokens.get(self.pos) else {
			return Err(ParseError::MissingHeader { line: self.current_line() });
		};
		let line = *line;
		let parsed = tok.parse::<isize>().map_err(|_| ParseError::NotAnInteger { line, found: tok.clone() })?;
		self.pos += 1;
		Ok(parsed)
	}

	fn next_non_negative(&mut self, field: &'static str) -> Result<Time, ParseError> {
		let line = self.current_line();
		let value = self.next_int()?;
		if value < 0 {
			return Err(ParseError::NegativeField { line, field, value });
		}
		Ok(value)
	}
}

/// Reads an [`Instance`] from `reader`. Does not re-sort jobs: the
/// precondition that input arrives release-time sorted is the driver's
/// precondition, not something the parser repairs (§4.7).
pub fn parse_instance<R: BufRead>(reader: R) -> Result<Instance, ParseError> {
	let mut tokens = Tokens::from_reader(reader).map_err(|_| ParseError::MissingHeader { line: 1 })?;

	let header_line = tokens.current_line();
	let m = tokens.next_non_negative("m")? as usize;
	let n_line = tokens.current_line();
	let n = tokens.next_non_negative("n")? as usize;
	trace!("header at line {header_line}: m={m}, n at line {n_line}: n={n}");

	let mut jobs = Vec::with_capacity(n);
	for i in 0..n {
		if tokens.pos >= tokens.tokens.len() {
			return Err(ParseError::TooFewJobLines { declared: n, found: i });
		}
		let line = tokens.current_line();
		let release_time = tokens.next_non_negative("release_time")?;
		let id = tokens.next_non_negative("id")? as usize;
		let req_runtime = tokens.next_non_negative("req_runtime")?;
		let act_runtime = tokens.next_non_negative("act_runtime")?;
		let machines = tokens.next_non_negative("machines")? as usize;

		if machines > m {
			return Err(ParseError::InfeasibleMachineCount { line, id, machines, m });
		}

		jobs.push(Job::new(id, release_time, req_runtime, act_runtime, machines));
	}

	if tokens.pos < tokens.tokens.len() {
		let extra = tokens.tokens.len() - tokens.pos;
		return Err(ParseError::TrailingGarbage { line: tokens.current_line(), declared: n, extra });
	}

	info!("parsed instance: m={m}, n={n}");
	Ok(Instance { m, jobs })
}
