//! Typed error hierarchy for the parts of the crate that face untrusted
//! input: the instance parser. Internal invariant violations (a bug in the
//! scheduler or driver, not a problem with the input) are never modeled as
//! `Result` — see `crate::scheduler` and `crate::driver`, which use
//! `debug_assert!`/`panic!` instead (per the error taxonomy: only malformed
//! input and infeasible instances are "recoverable" in the sense of being
//! reported rather than panicked on).

use thiserror::Error;

/// Failures that can occur while reading and validating an [`crate::job::Instance`].
#[derive(Error, Debug)]
pub enum ParseError {
	#[error("line {line}: expected an integer, found {found:?}")]
	NotAnInteger { line: usize, found: String },

	#[error("line {line}: {extra} unexpected token(s) after the declared {declared} job lines")]
	TrailingGarbage { line: usize, declared: usize, extra: usize },

	#[error("line {line}: unexpected end of input, expected the header (m, n)")]
	MissingHeader { line: usize },

	#[error("declared {declared} job lines but only {found} were present")]
	TooFewJobLines { declared: usize, found: usize },

	#[error("line {line}: job {id} requires {machines} machines but the pool only has {m}")]
	InfeasibleMachineCount { line: usize, id: usize, machines: usize, m: usize },

	#[error("line {line}: field {field} must be non-negative, found {value}")]
	NegativeField { line: usize, field: &'static str, value: isize },
}
