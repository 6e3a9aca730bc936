//! Termination policy: evaluation budget, wall-clock budget, convergence tolerance

use std::fmt;
use std::time::{Duration, Instant};

/// When the search stops.
///
/// Whichever condition triggers first ends the run. The budgets are checked
/// after every evaluation, so a run never exceeds `max_evaluations`, but it may
/// overrun `max_duration` by up to one (uninterruptible) evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct Termination {
	/// Hard ceiling on objective evaluations (>= 1).
	pub max_evaluations: usize,
	/// Optional wall-clock ceiling; `None` is unbounded in time.
	pub max_duration: Option<Duration>,
	/// Absolute convergence tolerance on the spread of population energies.
	pub epsilon: f64,
	/// Relative convergence tolerance, scaled by `|mean(energies)|`.
	pub tol: f64,
}

impl Default for Termination {
	fn default() -> Self {
		Self { max_evaluations: 1000, max_duration: None, epsilon: 0.0, tol: 0.0 }
	}
}

impl Termination {
	/// Budget of `max_evaluations` evaluations, unbounded in time.
	pub fn evaluations(max_evaluations: usize) -> Self {
		Self { max_evaluations, ..Self::default() }
	}

	pub fn with_duration(mut self, d: Option<Duration>) -> Self {
		self.max_duration = d;
		self
	}

	pub fn with_epsilon(mut self, epsilon: f64) -> Self {
		self.epsilon = epsilon;
		self
	}

	/// Spread threshold under which the population counts as converged.
	pub(crate) fn convergence_threshold(&self, mean: f64) -> f64 {
		self.epsilon + self.tol * mean.abs()
	}
}

/// Why a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
	/// Every dimension is fixed by its bounds; one evaluation was enough.
	FixedDomain,
	MaxEvaluations,
	MaxDuration,
	Converged,
	/// The per-generation callback asked to stop.
	Callback,
}

impl fmt::Display for TerminationReason {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let s = match self {
			TerminationReason::FixedDomain => "all variables fixed by bounds",
			TerminationReason::MaxEvaluations => "maximum evaluations reached",
			TerminationReason::MaxDuration => "maximum duration reached",
			TerminationReason::Converged => "converged",
			TerminationReason::Callback => "stopped by callback",
		};
		f.write_str(s)
	}
}

/// Tracks spending against a [`Termination`] during one run.
pub(crate) struct BudgetClock {
	started: Instant,
	max_evaluations: usize,
	max_duration: Option<Duration>,
	pub(crate) nfev: usize,
}

impl BudgetClock {
	pub(crate) fn start(termination: &Termination) -> Self {
		Self {
			started: Instant::now(),
			max_evaluations: termination.max_evaluations,
			max_duration: termination.max_duration,
			nfev: 0,
		}
	}

	/// Records one evaluation and reports an exhausted budget, if any.
	pub(crate) fn spend(&mut self) -> Option<TerminationReason> {
		self.nfev += 1;
		self.exhausted()
	}

	pub(crate) fn exhausted(&self) -> Option<TerminationReason> {
		if self.nfev >= self.max_evaluations {
			return Some(TerminationReason::MaxEvaluations);
		}
		match self.max_duration {
			Some(d) if self.started.elapsed() >= d => Some(TerminationReason::MaxDuration),
			_ => None,
		}
	}
}
