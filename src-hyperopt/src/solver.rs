//! hyperopt - global optimisation of black-box objectives
//! The seam between the adapter and the global solver
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

use hyperopt_de::{DEConfigBuilder, DifferentialEvolution, Strategy};
use ndarray::Array1;

use crate::bridge::ObjectiveBridge;
use crate::budget::Budget;
use crate::domain::SearchDomain;
use crate::error::{HyperoptError, Result};
use crate::result::FunctionEvaluation;

/// A derivative-free global solver over a box.
///
/// Only `minimize` is required. The provided `maximize` runs `minimize` on
/// the negated objective and negates the reported value back, so both
/// directions share one code path. A solver with a native maximiser
/// overrides it.
pub trait GlobalSolver {
    fn minimize(
        &mut self,
        bridge: &mut ObjectiveBridge<'_>,
        domain: &SearchDomain,
        budget: &Budget,
        seed: Option<u64>,
    ) -> Result<FunctionEvaluation>;

    fn maximize(
        &mut self,
        bridge: &mut ObjectiveBridge<'_>,
        domain: &SearchDomain,
        budget: &Budget,
        seed: Option<u64>,
    ) -> Result<FunctionEvaluation> {
        let previous = bridge.set_negated(!bridge.is_negated());
        let best = self.minimize(bridge, domain, budget, seed);
        bridge.set_negated(previous);
        Ok(best?.negated())
    }
}

/// Default backend: differential evolution from `hyperopt-de`.
#[derive(Debug, Clone)]
pub struct DifferentialEvolutionSolver {
    popsize: usize,
    strategy: Strategy,
    recombination: f64,
    seed: Option<u64>,
}

impl Default for DifferentialEvolutionSolver {
    fn default() -> Self {
        Self { popsize: 15, strategy: Strategy::Best1Bin, recombination: 0.7, seed: None }
    }
}

impl DifferentialEvolutionSolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Population size per free dimension.
    pub fn popsize(mut self, popsize: usize) -> Self {
        self.popsize = popsize;
        self
    }

    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn recombination(mut self, cr: f64) -> Self {
        self.recombination = cr;
        self
    }

    /// Seed used when the request does not carry one.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl GlobalSolver for DifferentialEvolutionSolver {
    fn minimize(
        &mut self,
        bridge: &mut ObjectiveBridge<'_>,
        domain: &SearchDomain,
        budget: &Budget,
        seed: Option<u64>,
    ) -> Result<FunctionEvaluation> {
        let mut builder = DEConfigBuilder::new()
            .popsize(self.popsize)
            .strategy(self.strategy)
            .recombination(self.recombination)
            .termination(budget.termination());
        if domain.has_integers() {
            builder = builder.integrality(domain.integer_mask().to_vec());
        }
        if let Some(seed) = seed.or(self.seed) {
            builder = builder.seed(seed);
        }

        let mut objective = |x: &Array1<f64>| bridge.evaluate(x.iter());
        let mut de =
            DifferentialEvolution::new(&mut objective, domain.lower().clone(), domain.upper().clone());
        *de.config_mut() = builder.build();
        let report = de.solve().map_err(HyperoptError::from)?;

        log::info!("DE: {} after {} evaluations (f={:.6e})", report.message, report.nfev, report.fun);
        Ok(FunctionEvaluation::new(report.x.to_vec(), report.fun))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Evaluates a fixed list of candidates and keeps the smallest value.
    struct Grid(Vec<Vec<f64>>);

    impl GlobalSolver for Grid {
        fn minimize(
            &mut self,
            bridge: &mut ObjectiveBridge<'_>,
            _domain: &SearchDomain,
            _budget: &Budget,
            _seed: Option<u64>,
        ) -> Result<FunctionEvaluation> {
            let mut best: Option<FunctionEvaluation> = None;
            for x in &self.0 {
                let y = bridge.evaluate(x)?;
                if best.as_ref().is_none_or(|b| y < b.y) {
                    best = Some(FunctionEvaluation::new(x.clone(), y));
                }
            }
            best.ok_or_else(|| HyperoptError::invalid_argument("empty grid"))
        }
    }

    fn domain_1d() -> SearchDomain {
        SearchDomain::translate(vec![-5.0], vec![5.0], None)
    }

    #[test]
    fn test_default_maximize_negates_in_and_out() {
        let mut f = |x: &[f64]| (x[0] - 2.0).powi(2);
        let mut bridge = ObjectiveBridge::new(&mut f, 1);
        let mut grid = Grid(vec![vec![-5.0], vec![2.0], vec![5.0]]);

        let best = grid.maximize(&mut bridge, &domain_1d(), &Budget::default(), None).unwrap();
        assert_eq!(best, FunctionEvaluation::new(vec![-5.0], 49.0));
        assert!(!bridge.is_negated());

        let best = grid.minimize(&mut bridge, &domain_1d(), &Budget::default(), None).unwrap();
        assert_eq!(best, FunctionEvaluation::new(vec![2.0], 0.0));
    }

    #[test]
    fn test_maximize_restores_sign_on_error() {
        let mut f = |x: &[f64]| if x[0] > 0.0 { f64::NAN } else { x[0] };
        let mut bridge = ObjectiveBridge::new(&mut f, 1);
        let mut grid = Grid(vec![vec![-1.0], vec![1.0]]);
        assert!(grid.maximize(&mut bridge, &domain_1d(), &Budget::default(), None).is_err());
        assert!(!bridge.is_negated());
    }

    #[test]
    fn test_de_solver_respects_budget() {
        let mut calls = 0u64;
        let mut f = |x: &[f64]| {
            calls += 1;
            x[0].abs()
        };
        let mut bridge = ObjectiveBridge::new(&mut f, 1);
        let mut solver = DifferentialEvolutionSolver::new().popsize(10).seed(4);
        let best = solver
            .minimize(&mut bridge, &domain_1d(), &Budget::new(40, None, 0.0), None)
            .unwrap();
        assert_eq!(bridge.evaluations(), 40);
        drop(bridge);
        assert_eq!(calls, 40);
        assert!(best.x[0].abs() <= 5.0);
    }
}
