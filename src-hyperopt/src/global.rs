//! hyperopt - global optimisation of black-box objectives
//! Run a request end to end
//!
//! Copyright (C) 2025 Pierre Aubert pierre(at)spinorama(dot)org
//!
//! This program is free software: you can redistribute it and/or modify
//! it under the terms of the GNU General Public License as published by
//! the Free Software Foundation, either version 3 of the License, or
//! (at your option) any later version.
//!
//! This program is distributed in the hope that it will be useful,
//! but WITHOUT ANY WARRANTY; without even the implied warranty of
//! MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
//! GNU General Public License for more details.
//!
//! You should have received a copy of the GNU General Public License
//! along with this program.  If not, see <https://www.gnu.org/licenses/>.

use crate::bridge::ObjectiveBridge;
use crate::domain::{DomainVariable, split_domain};
use crate::error::{HyperoptError, Result};
use crate::objective::Objective;
use crate::options::OptimizerOptions;
use crate::request::{Direction, OptimizationRequest};
use crate::result::{OptimizationResult, package};
use crate::solver::{DifferentialEvolutionSolver, GlobalSolver};

/// Run `request` with the default differential evolution backend.
pub fn find_global<O: Objective>(request: OptimizationRequest<O>) -> Result<OptimizationResult> {
    find_global_with(&mut DifferentialEvolutionSolver::default(), request)
}

/// Run `request` against `solver`.
///
/// The request is validated before the objective is touched. Any failure
/// during the search aborts it and is returned as is.
pub fn find_global_with<S, O>(solver: &mut S, request: OptimizationRequest<O>) -> Result<OptimizationResult>
where
    S: GlobalSolver + ?Sized,
    O: Objective,
{
    let (mut objective, domain, budget, direction, seed) = request.into_parts()?;
    log::debug!(
        "{} over {} dimension(s), {} integer, budget {:?}",
        direction,
        domain.dimension(),
        domain.integer_mask().iter().filter(|&&b| b).count(),
        budget
    );

    let mut bridge = ObjectiveBridge::new(&mut objective, domain.dimension());
    let best = match direction {
        Direction::Minimize => solver.minimize(&mut bridge, &domain, &budget, seed)?,
        Direction::Maximize => solver.maximize(&mut bridge, &domain, &budget, seed)?,
    };
    log::debug!("best f={:.6e} after {} evaluations", best.y, bridge.evaluations());

    Ok(package(best))
}

fn run_on_domain<O: Objective>(
    objective: O,
    domain: &[DomainVariable],
    options: &OptimizerOptions,
    direction: Direction,
) -> Result<OptimizationResult> {
    if domain.is_empty() {
        return Err(HyperoptError::invalid_argument("The domain must have a length > 0"));
    }
    let (lower, upper, integer) = split_domain(domain);
    let request = OptimizationRequest::new(objective, lower, upper)
        .integer_mask(integer)
        .max_evaluations(options.max_iterations)
        .epsilon(options.epsilon)
        .time_budget(options.time_budget())
        .direction(direction)
        .seed(options.seed);
    find_global(request)
}

/// Search for the global minimum of `objective` over `domain`.
///
/// ```
/// use hyperopt::{find_min_global, DomainVariable, OptimizerOptions};
///
/// let options = OptimizerOptions { max_iterations: 300, seed: Some(3), ..Default::default() };
/// let min = find_min_global(|x: &[f64]| x[0].sin(), &[DomainVariable::range(-3.0, 3.0)], &options)
///     .unwrap();
/// assert!((min.x[0] + std::f64::consts::FRAC_PI_2).abs() < 1e-2);
/// ```
pub fn find_min_global<O: Objective>(
    objective: O,
    domain: &[DomainVariable],
    options: &OptimizerOptions,
) -> Result<OptimizationResult> {
    run_on_domain(objective, domain, options, Direction::Minimize)
}

/// Search for the global maximum of `objective` over `domain`.
///
/// The reported `y` is the objective's own value at `x`, not its negation.
pub fn find_max_global<O: Objective>(
    objective: O,
    domain: &[DomainVariable],
    options: &OptimizerOptions,
) -> Result<OptimizationResult> {
    run_on_domain(objective, domain, options, Direction::Maximize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::budget::Budget;
    use crate::domain::SearchDomain;
    use crate::result::FunctionEvaluation;

    /// Reports the first bound without evaluating anything.
    struct Lazy {
        calls: usize,
    }

    impl GlobalSolver for Lazy {
        fn minimize(
            &mut self,
            _bridge: &mut ObjectiveBridge<'_>,
            domain: &SearchDomain,
            _budget: &Budget,
            _seed: Option<u64>,
        ) -> Result<FunctionEvaluation> {
            self.calls += 1;
            Ok(FunctionEvaluation::new(domain.lower().to_vec(), 1.5))
        }
    }

    #[test]
    fn test_solver_result_is_reported_verbatim() {
        let mut solver = Lazy { calls: 0 };
        let request = OptimizationRequest::new(|_: &[f64]| 0.0, vec![-1.0, 2.0], vec![1.0, 3.0]);
        let r = find_global_with(&mut solver, request).unwrap();
        assert_eq!(r, OptimizationResult { x: vec![-1.0, 2.0], y: 1.5 });

        let request = OptimizationRequest::new(|_: &[f64]| 0.0, vec![0.0], vec![1.0])
            .direction(Direction::Maximize);
        let r = find_global_with(&mut solver, request).unwrap();
        assert_eq!(r.y, -1.5);
        assert_eq!(solver.calls, 2);
    }

    #[test]
    fn test_invalid_request_never_reaches_the_solver() {
        let mut solver = Lazy { calls: 0 };
        let request = OptimizationRequest::new(|_: &[f64]| 0.0, vec![0.0, 0.0], vec![1.0]);
        assert!(find_global_with(&mut solver, request).is_err());
        assert_eq!(solver.calls, 0);
    }

    #[test]
    fn test_empty_domain() {
        let e = find_max_global(|_: &[f64]| 0.0, &[], &OptimizerOptions::default()).unwrap_err();
        assert_eq!(e.to_string(), "The domain must have a length > 0");
    }
}
