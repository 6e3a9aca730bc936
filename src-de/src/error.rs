//! Error types for the differential evolution solver

use thiserror::Error;

/// Problems the solver detects in its own inputs before (or instead of) searching.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DEError {
	/// The search domain has no dimension.
	#[error("the search domain must have at least one dimension")]
	EmptyDomain,

	/// Two per-dimension vectors disagree on the dimension.
	#[error("{what} has length {found}, expected {expected}")]
	DimensionMismatch { what: &'static str, expected: usize, found: usize },

	/// A bound is NaN or infinite.
	#[error("bound[{index}] is not finite: lower={lower}, upper={upper}")]
	NonFiniteBound { index: usize, lower: f64, upper: f64 },

	/// `lower > upper` for some dimension.
	#[error("bound[{index}] has upper < lower: lower={lower}, upper={upper}")]
	InvalidBounds { index: usize, lower: f64, upper: f64 },

	/// An integer dimension whose bounds are not whole numbers.
	#[error("the bounds of integer variable {index} must be integers: lower={lower}, upper={upper}")]
	NonIntegralBound { index: usize, lower: f64, upper: f64 },

	/// The evaluation budget does not allow a single evaluation.
	#[error("max_evaluations must be at least 1")]
	ZeroEvaluations,

	/// The convergence tolerance is negative or not a number.
	#[error("epsilon must be a finite, non-negative number, got {0}")]
	InvalidEpsilon(f64),
}

/// Why a run could not produce a report.
///
/// `E` is the error type of the objective. An objective error aborts the
/// search as soon as it is returned, no further evaluation takes place.
#[derive(Debug, Error)]
pub enum SolveError<E> {
	#[error(transparent)]
	Solver(#[from] DEError),

	#[error("objective failed")]
	Objective(#[source] E),
}

/// Result alias for solver runs.
pub type Result<T, E> = std::result::Result<T, SolveError<E>>;
