//! Differential Evolution (DE) global optimizer in pure Rust using ndarray
//!
//! A derivative-free minimizer for black-box objectives over a box, inspired by
//! SciPy's `scipy.optimize.differential_evolution`, trimmed down to what a
//! budgeted, strictly sequential search needs.
//!
//! Supported features:
//! - Box constraints (lower/upper bounds), dimensions with equal bounds are held fixed
//! - Strategies: best1bin, rand1bin, currenttobest1bin
//! - Mutation as a fixed factor or dithering in a range [min,max)
//! - Initialization: Latin Hypercube Sampling (LHS) or random uniform
//! - Optional integrality mask to round decision variables to nearest integer
//! - Termination on evaluation count, wall-clock time, or convergence
//!   (std(pop_f) <= epsilon + tol * |mean(pop_f)|)
//! - Fallible objectives: an `Err` from the objective aborts the run at once
//!
//! Evaluations are performed one at a time, in order, on the calling thread.

#![allow(missing_docs)]
use std::fmt;
use std::str::FromStr;

use ndarray::{Array1, Array2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub mod apply_integrality;
pub mod error;
pub mod termination;

mod clip_free_inplace;
mod crossover_binomial;
mod distinct_indices;
mod init_latin_hypercube;
mod init_random;
mod mutant;

pub mod differential_evolution;
pub use differential_evolution::differential_evolution;
pub use error::{DEError, Result, SolveError};
pub use termination::{Termination, TerminationReason};

use termination::BudgetClock;

/// Smallest population the mutation strategies can work with.
pub const MIN_POPSIZE: usize = 5;

/// Number of generations a tight evaluation budget must leave room for.
const MIN_GENERATIONS: usize = 4;

pub(crate) fn argmin(v: &Array1<f64>) -> (usize, f64) {
	let mut best_i = 0usize;
	let mut best_v = v[0];
	for (i, &val) in v.iter().enumerate() {
		if val < best_v || (best_v.is_nan() && !val.is_nan()) {
			best_v = val;
			best_i = i;
		}
	}
	(best_i, best_v)
}

/// Population size for `n_free` free variables, shrunk when the evaluation
/// budget would not even cover a few generations.
pub fn population_size(popsize: usize, n_free: usize, max_evaluations: usize) -> usize {
	let wanted = popsize.saturating_mul(n_free);
	let affordable = max_evaluations / MIN_GENERATIONS;
	wanted.min(affordable).max(MIN_POPSIZE)
}

/// Differential Evolution strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
	Best1Bin,
	Rand1Bin,
	CurrentToBest1Bin,
}

impl FromStr for Strategy {
	type Err = String;
	fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
		let t = s.to_lowercase();
		match t.as_str() {
			"best1bin" | "best1" => Ok(Strategy::Best1Bin),
			"rand1bin" | "rand1" => Ok(Strategy::Rand1Bin),
			"currenttobest1bin" | "current-to-best1bin" | "current_to_best1bin" => {
				Ok(Strategy::CurrentToBest1Bin)
			}
			_ => Err(format!("unknown strategy: {}", s)),
		}
	}
}

/// Mutation setting: either a fixed factor or a uniform range (dithering)
#[derive(Debug, Clone, Copy)]
pub enum Mutation {
	/// Fixed mutation factor F in [0, 2)
	Factor(f64),
	/// Dithering range [min, max) with 0 <= min < max <= 2
	Range { min: f64, max: f64 },
}

impl Default for Mutation {
	fn default() -> Self {
		Mutation::Range { min: 0.5, max: 1.0 }
	}
}

impl Mutation {
	fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
		match *self {
			Mutation::Factor(f) => f,
			Mutation::Range { min, max } if max > min => rng.random_range(min..max),
			Mutation::Range { min, .. } => min,
		}
	}
}

/// Initialization scheme for the population
#[derive(Debug, Clone, Copy, Default)]
pub enum Init {
	#[default]
	LatinHypercube,
	Random,
}

/// Configuration for the Differential Evolution optimizer
pub struct DEConfig {
	pub popsize: usize, // total NP = popsize * n_params_free, see `population_size`
	pub mutation: Mutation,
	pub recombination: f64, // CR in [0,1]
	pub strategy: Strategy,
	pub init: Init,
	pub seed: Option<u64>,
	/// Optional integrality mask; true => variable is integer-constrained
	pub integrality: Option<Vec<bool>>,
	/// Optional initial guess, evaluated as the first member of the population
	pub x0: Option<Array1<f64>>,
	/// Evaluation/time budget and convergence tolerances
	pub termination: Termination,
	/// Log the best objective at each generation
	pub disp: bool,
	/// Optional per-generation callback (may stop early)
	pub callback: Option<Box<dyn FnMut(&DEIntermediate) -> CallbackAction>>,
}

impl Default for DEConfig {
	fn default() -> Self {
		Self {
			popsize: 15,
			mutation: Mutation::default(),
			recombination: 0.7,
			strategy: Strategy::Best1Bin,
			init: Init::default(),
			seed: None,
			integrality: None,
			x0: None,
			termination: Termination::default(),
			disp: false,
			callback: None,
		}
	}
}

/// Fluent builder for `DEConfig` for ergonomic configuration.
pub struct DEConfigBuilder {
	cfg: DEConfig,
}

impl Default for DEConfigBuilder {
	fn default() -> Self {
		Self::new()
	}
}

impl DEConfigBuilder {
	pub fn new() -> Self {
		Self { cfg: DEConfig::default() }
	}
	pub fn popsize(mut self, v: usize) -> Self {
		self.cfg.popsize = v;
		self
	}
	pub fn mutation(mut self, v: Mutation) -> Self {
		self.cfg.mutation = v;
		self
	}
	pub fn recombination(mut self, v: f64) -> Self {
		self.cfg.recombination = v;
		self
	}
	pub fn strategy(mut self, v: Strategy) -> Self {
		self.cfg.strategy = v;
		self
	}
	pub fn init(mut self, v: Init) -> Self {
		self.cfg.init = v;
		self
	}
	pub fn seed(mut self, v: u64) -> Self {
		self.cfg.seed = Some(v);
		self
	}
	pub fn integrality(mut self, v: Vec<bool>) -> Self {
		self.cfg.integrality = Some(v);
		self
	}
	pub fn x0(mut self, v: Array1<f64>) -> Self {
		self.cfg.x0 = Some(v);
		self
	}
	pub fn termination(mut self, v: Termination) -> Self {
		self.cfg.termination = v;
		self
	}
	pub fn max_evaluations(mut self, v: usize) -> Self {
		self.cfg.termination.max_evaluations = v;
		self
	}
	pub fn max_duration(mut self, v: std::time::Duration) -> Self {
		self.cfg.termination.max_duration = Some(v);
		self
	}
	pub fn epsilon(mut self, v: f64) -> Self {
		self.cfg.termination.epsilon = v;
		self
	}
	pub fn tol(mut self, v: f64) -> Self {
		self.cfg.termination.tol = v;
		self
	}
	pub fn disp(mut self, v: bool) -> Self {
		self.cfg.disp = v;
		self
	}
	pub fn callback(mut self, cb: Box<dyn FnMut(&DEIntermediate) -> CallbackAction>) -> Self {
		self.cfg.callback = Some(cb);
		self
	}
	pub fn build(self) -> DEConfig {
		self.cfg
	}
}

/// Result/Report of a DE optimization run
#[derive(Clone)]
pub struct DEReport {
	pub x: Array1<f64>,
	pub fun: f64,
	pub success: bool,
	pub message: String,
	pub reason: TerminationReason,
	pub nit: usize,
	pub nfev: usize,
	pub population: Array2<f64>,
	pub population_energies: Array1<f64>,
}

impl fmt::Debug for DEReport {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("DEReport")
			.field("x", &format!("len={}", self.x.len()))
			.field("fun", &self.fun)
			.field("success", &self.success)
			.field("message", &self.message)
			.field("reason", &self.reason)
			.field("nit", &self.nit)
			.field("nfev", &self.nfev)
			.field(
				"population",
				&format!("{}x{}", self.population.nrows(), self.population.ncols()),
			)
			.field("population_energies", &format!("len={}", self.population_energies.len()))
			.finish()
	}
}

/// Information passed to callback after each generation
pub struct DEIntermediate {
	pub x: Array1<f64>,
	pub fun: f64,
	pub convergence: f64, // measured as std(pop_f)
	pub iter: usize,
	pub nfev: usize,
}

/// Action returned by callback
pub enum CallbackAction {
	Continue,
	Stop,
}

/// Evaluate one candidate and charge it to the budget.
fn evaluate<F, E>(
	func: &mut F,
	x: &Array1<f64>,
	clock: &mut BudgetClock,
) -> Result<(f64, Option<TerminationReason>), E>
where
	F: FnMut(&Array1<f64>) -> std::result::Result<f64, E> + ?Sized,
{
	let f = func(x).map_err(SolveError::Objective)?;
	Ok((f, clock.spend()))
}

/// Differential Evolution optimizer
///
/// The objective is borrowed mutably for the duration of [`solve`](Self::solve)
/// and called sequentially; it may fail, which ends the run immediately.
pub struct DifferentialEvolution<'a, F: ?Sized> {
	func: &'a mut F,
	lower: Array1<f64>,
	upper: Array1<f64>,
	config: DEConfig,
}

impl<'a, F: ?Sized> DifferentialEvolution<'a, F> {
	/// Create a new DE optimizer with objective `func` and bounds [lower, upper]
	pub fn new(func: &'a mut F, lower: Array1<f64>, upper: Array1<f64>) -> Self {
		Self { func, lower, upper, config: DEConfig::default() }
	}

	/// Mutable access to configuration
	pub fn config_mut(&mut self) -> &mut DEConfig {
		&mut self.config
	}

	/// Check bounds, mask, initial guess and budget before any evaluation.
	pub fn validate(&self) -> std::result::Result<(), DEError> {
		let n = self.lower.len();
		if n == 0 {
			return Err(DEError::EmptyDomain);
		}
		if self.upper.len() != n {
			return Err(DEError::DimensionMismatch {
				what: "upper bounds",
				expected: n,
				found: self.upper.len(),
			});
		}
		if let Some(mask) = &self.config.integrality {
			if mask.len() != n {
				return Err(DEError::DimensionMismatch {
					what: "integrality mask",
					expected: n,
					found: mask.len(),
				});
			}
		}
		if let Some(x0) = &self.config.x0 {
			if x0.len() != n {
				return Err(DEError::DimensionMismatch {
					what: "initial guess",
					expected: n,
					found: x0.len(),
				});
			}
		}
		for i in 0..n {
			let (lo, hi) = (self.lower[i], self.upper[i]);
			if !lo.is_finite() || !hi.is_finite() {
				return Err(DEError::NonFiniteBound { index: i, lower: lo, upper: hi });
			}
			if hi < lo {
				return Err(DEError::InvalidBounds { index: i, lower: lo, upper: hi });
			}
			let is_int = self.config.integrality.as_ref().is_some_and(|m| m[i]);
			if is_int && (lo.fract() != 0.0 || hi.fract() != 0.0) {
				return Err(DEError::NonIntegralBound { index: i, lower: lo, upper: hi });
			}
		}
		if self.config.termination.max_evaluations == 0 {
			return Err(DEError::ZeroEvaluations);
		}
		let eps = self.config.termination.epsilon;
		if !eps.is_finite() || eps < 0.0 {
			return Err(DEError::InvalidEpsilon(eps));
		}
		Ok(())
	}

	/// Run the optimization and return a report
	pub fn solve<E>(&mut self) -> Result<DEReport, E>
	where
		F: FnMut(&Array1<f64>) -> std::result::Result<f64, E>,
	{
		use apply_integrality::apply_integrality;
		use clip_free_inplace::clip_free_inplace;
		use crossover_binomial::binomial_crossover;
		use init_latin_hypercube::init_latin_hypercube;
		use init_random::init_random;

		self.validate()?;

		let n = self.lower.len();
		let termination = self.config.termination.clone();
		let mut clock = BudgetClock::start(&termination);
		let mask = self.config.integrality.clone();

		// Identify fixed (equal-bounds) and free variables
		let is_free: Vec<bool> = (0..n).map(|i| self.upper[i] > self.lower[i]).collect();
		let n_free = is_free.iter().filter(|&&b| b).count();
		if n_free == 0 {
			// All fixed; just evaluate x = lower
			let mut x_eval = self.lower.clone();
			if let Some(mask) = &mask {
				apply_integrality(&mut x_eval, mask, &self.lower, &self.upper);
			}
			let (f, _) = evaluate(&mut *self.func, &x_eval, &mut clock)?;
			log::debug!("DE: all {} variables fixed by bounds, f={:.6e}", n, f);
			return Ok(DEReport {
				population: x_eval.clone().insert_axis(ndarray::Axis(0)),
				x: x_eval,
				fun: f,
				success: true,
				message: TerminationReason::FixedDomain.to_string(),
				reason: TerminationReason::FixedDomain,
				nit: 0,
				nfev: clock.nfev,
				population_energies: Array1::from(vec![f]),
			});
		}

		let npop = population_size(self.config.popsize, n_free, termination.max_evaluations);
		log::debug!(
			"DE Init: {} dimensions ({} free), population={}, max_evaluations={}, max_duration={:?}",
			n,
			n_free,
			npop,
			termination.max_evaluations,
			termination.max_duration
		);
		log::debug!(
			"  Strategy: {:?}, Mutation: {:?}, Crossover: CR={:.3}, epsilon={:.2e}, tol={:.2e}",
			self.config.strategy,
			self.config.mutation,
			self.config.recombination,
			termination.epsilon,
			termination.tol
		);

		// RNG
		let mut rng: StdRng = match self.config.seed {
			Some(s) => StdRng::seed_from_u64(s),
			None => {
				let mut thread_rng = rand::rng();
				StdRng::from_rng(&mut thread_rng)
			}
		};

		// Initialize population in [lower, upper]
		let mut pop = match self.config.init {
			Init::LatinHypercube => {
				init_latin_hypercube(n, npop, &self.lower, &self.upper, &is_free, &mut rng)
			}
			Init::Random => init_random(n, npop, &self.lower, &self.upper, &is_free, &mut rng),
		};

		// The initial guess takes the first slot so it is evaluated even on a tiny budget
		if let Some(x0) = &self.config.x0 {
			let mut x0c = x0.clone();
			clip_free_inplace(&mut x0c, &self.lower, &self.upper, &is_free);
			pop.row_mut(0).assign(&x0c);
		}

		if let Some(mask) = &mask {
			for i in 0..npop {
				let mut x_eval = pop.row(i).to_owned();
				apply_integrality(&mut x_eval, mask, &self.lower, &self.upper);
				pop.row_mut(i).assign(&x_eval);
			}
		}

		// Evaluate the initial population, members left out by the budget keep +inf
		let mut energies = Array1::from_elem(npop, f64::INFINITY);
		let mut stop: Option<TerminationReason> = None;
		for i in 0..npop {
			let x_eval = pop.row(i).to_owned();
			let (f, exhausted) = evaluate(&mut *self.func, &x_eval, &mut clock)?;
			energies[i] = f;
			if exhausted.is_some() {
				stop = exhausted;
				break;
			}
		}

		let (mut best_idx, mut best_f) = argmin(&energies);
		log::debug!("  Initial best: fitness={:.6e} at index {}", best_f, best_idx);

		// Main loop
		let mut nit = 0;
		while stop.is_none() {
			nit += 1;
			let mut accepted_trials = 0;

			for i in 0..npop {
				let f = self.config.mutation.sample(&mut rng);
				let mutant = mutant::mutant(self.config.strategy, i, &pop, best_idx, f, &mut rng);
				let mut trial = binomial_crossover(
					&pop.row(i).to_owned(),
					&mutant,
					self.config.recombination,
					&mut rng,
				);
				clip_free_inplace(&mut trial, &self.lower, &self.upper, &is_free);
				if let Some(mask) = &mask {
					apply_integrality(&mut trial, mask, &self.lower, &self.upper);
				}

				let (trial_energy, exhausted) = evaluate(&mut *self.func, &trial, &mut clock)?;

				// Selection: replace if better, the best is updated right away
				if trial_energy <= energies[i] {
					pop.row_mut(i).assign(&trial);
					energies[i] = trial_energy;
					accepted_trials += 1;
					if trial_energy < best_f {
						best_idx = i;
						best_f = trial_energy;
					}
				}

				if exhausted.is_some() {
					stop = exhausted;
					break;
				}
			}
			if stop.is_some() {
				break;
			}

			// Convergence check
			let pop_mean = energies.mean().unwrap_or(0.0);
			let pop_std = energies.std(0.0);

			if self.config.disp {
				log::info!(
					"DE iter {:4}  best_f={:.6e}  std={:.3e}  accepted={}/{}  nfev={}",
					nit,
					best_f,
					pop_std,
					accepted_trials,
					npop,
					clock.nfev
				);
			}

			// Callback
			if let Some(ref mut cb) = self.config.callback {
				let intermediate = DEIntermediate {
					x: pop.row(best_idx).to_owned(),
					fun: best_f,
					convergence: pop_std,
					iter: nit,
					nfev: clock.nfev,
				};
				if let CallbackAction::Stop = cb(&intermediate) {
					stop = Some(TerminationReason::Callback);
					break;
				}
			}

			if pop_std <= termination.convergence_threshold(pop_mean) {
				stop = Some(TerminationReason::Converged);
			}
		}

		// The loop only exits with a reason set
		let reason = stop.unwrap_or(TerminationReason::MaxEvaluations);
		let success = matches!(reason, TerminationReason::Converged | TerminationReason::Callback);
		let message = match reason {
			TerminationReason::MaxEvaluations => {
				format!("Maximum evaluations reached: {}", termination.max_evaluations)
			}
			TerminationReason::MaxDuration => format!(
				"Maximum duration reached: {:?} after {} evaluations",
				termination.max_duration.unwrap_or_default(),
				clock.nfev
			),
			other => other.to_string(),
		};
		log::debug!("DE finished: {} (nit={}, nfev={}, best_f={:.6e})", message, nit, clock.nfev, best_f);

		Ok(DEReport {
			x: pop.row(best_idx).to_owned(),
			fun: best_f,
			success,
			message,
			reason,
			nit,
			nfev: clock.nfev,
			population: pop,
			population_energies: energies,
		})
	}
}
