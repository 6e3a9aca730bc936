use std::convert::Infallible;

use crate::{DEConfig, DEError, DEReport, DifferentialEvolution, SolveError};
use ndarray::Array1;

/// Convenience function mirroring SciPy's API shape (simplified):
/// - `func`: objective function mapping x -> f(x), it cannot fail
/// - `bounds`: vector of (lower, upper) pairs
/// - `config`: DE configuration
///
/// Objectives that can fail go through [`DifferentialEvolution::solve`].
pub fn differential_evolution<F>(
	mut func: F,
	bounds: &[(f64, f64)],
	config: DEConfig,
) -> Result<DEReport, DEError>
where
	F: FnMut(&Array1<f64>) -> f64,
{
	let lower: Array1<f64> = bounds.iter().map(|&(lo, _)| lo).collect();
	let upper: Array1<f64> = bounds.iter().map(|&(_, hi)| hi).collect();
	let mut objective = |x: &Array1<f64>| Ok::<f64, Infallible>(func(x));
	let mut de = DifferentialEvolution::new(&mut objective, lower, upper);
	*de.config_mut() = config;
	de.solve().map_err(|e| match e {
		SolveError::Solver(e) => e,
		SolveError::Objective(never) => match never {},
	})
}
