//! hyperopt - global optimisation of black-box objectives
//! Typed optimisation requests and their validation
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

use std::fmt;
use std::time::Duration;

use crate::budget::{Budget, DEFAULT_MAX_EVALUATIONS};
use crate::domain::SearchDomain;
use crate::error::{HyperoptError, Result};

/// Which extremum to search for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Minimize,
    Maximize,
}

impl Direction {
    /// Host encoding: `1` selects maximisation, any other number minimisation.
    pub fn from_host(value: f64) -> Self {
        if value == 1.0 { Direction::Maximize } else { Direction::Minimize }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Minimize => f.write_str("minimize"),
            Direction::Maximize => f.write_str("maximize"),
        }
    }
}

/// One optimisation run: an objective, its box, and the budget to spend.
///
/// ```
/// use hyperopt::{find_global, Direction, OptimizationRequest};
///
/// let request = OptimizationRequest::new(|x: &[f64]| (x[0] - 2.0).powi(2), vec![-5.0], vec![5.0])
///     .max_evaluations(200)
///     .direction(Direction::Minimize)
///     .seed(7);
/// let best = find_global(request).unwrap();
/// assert!((best.x[0] - 2.0).abs() < 0.1);
/// ```
pub struct OptimizationRequest<O> {
    pub(crate) objective: O,
    pub(crate) lower: Vec<f64>,
    pub(crate) upper: Vec<f64>,
    pub(crate) integer_mask: Option<Vec<bool>>,
    pub(crate) max_evaluations: u64,
    pub(crate) epsilon: f64,
    pub(crate) time_budget: Option<Duration>,
    pub(crate) direction: Direction,
    pub(crate) seed: Option<u64>,
}

impl<O> OptimizationRequest<O> {
    /// A minimisation over `[lower, upper]`, continuous in every dimension,
    /// bounded only by `DEFAULT_MAX_EVALUATIONS`.
    pub fn new(objective: O, lower: impl Into<Vec<f64>>, upper: impl Into<Vec<f64>>) -> Self {
        Self {
            objective,
            lower: lower.into(),
            upper: upper.into(),
            integer_mask: None,
            max_evaluations: DEFAULT_MAX_EVALUATIONS,
            epsilon: 0.0,
            time_budget: None,
            direction: Direction::Minimize,
            seed: None,
        }
    }

    /// `true` marks an integer-valued dimension.
    pub fn integer_mask(mut self, mask: impl Into<Vec<bool>>) -> Self {
        self.integer_mask = Some(mask.into());
        self
    }

    pub fn max_evaluations(mut self, n: u64) -> Self {
        self.max_evaluations = n;
        self
    }

    /// Convergence tolerance, passed to the solver as is.
    pub fn epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    pub fn time_budget(mut self, budget: impl Into<Option<Duration>>) -> Self {
        self.time_budget = budget.into();
        self
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Seed for the solver's random number generator.
    pub fn seed(mut self, seed: impl Into<Option<u64>>) -> Self {
        self.seed = seed.into();
        self
    }

    pub fn dimension(&self) -> usize {
        self.lower.len()
    }

    /// Check shapes and counts. Nothing is evaluated.
    pub fn validate(&self) -> Result<()> {
        let n = self.lower.len();
        if self.upper.len() != n {
            return Err(HyperoptError::invalid_argument(format!(
                "Expected bounds arrays of length {}",
                n
            )));
        }
        if let Some(mask) = &self.integer_mask {
            if mask.len() != n {
                return Err(HyperoptError::invalid_argument(format!(
                    "Expected bounds arrays of length {}",
                    n
                )));
            }
        }
        if n == 0 {
            return Err(HyperoptError::invalid_argument("The domain must have a length > 0"));
        }
        if self.max_evaluations == 0 {
            return Err(HyperoptError::invalid_argument(
                "Expected maxEvaluations to be a positive integer",
            ));
        }
        Ok(())
    }

    /// Validate, then split into the objective and its solver-side inputs.
    pub(crate) fn into_parts(self) -> Result<(O, SearchDomain, Budget, Direction, Option<u64>)> {
        self.validate()?;
        let domain = SearchDomain::translate(self.lower, self.upper, self.integer_mask);
        let budget = Budget::new(self.max_evaluations, self.time_budget, self.epsilon);
        Ok((self.objective, domain, budget, self.direction, self.seed))
    }
}
