//! hyperopt - global optimisation of black-box objectives
//! Translate evaluation and time limits into the solver's termination policy
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

use std::time::Duration;

use hyperopt_de::Termination;

/// Largest integer a host double represents exactly; used as "no limit".
pub const DEFAULT_MAX_EVALUATIONS: u64 = (1 << 53) - 1;

/// How much the solver may spend on one request.
///
/// The evaluation ceiling always applies. Without a time budget the search
/// is unbounded in time. Whichever limit is reached first ends the search;
/// an evaluation already in flight is never interrupted, so the time budget
/// can be overrun by one evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Budget {
    max_evaluations: u64,
    time_budget: Option<Duration>,
    epsilon: f64,
}

impl Budget {
    pub fn new(max_evaluations: u64, time_budget: Option<Duration>, epsilon: f64) -> Self {
        Self { max_evaluations, time_budget, epsilon }
    }

    pub fn max_evaluations(&self) -> u64 {
        self.max_evaluations
    }

    pub fn time_budget(&self) -> Option<Duration> {
        self.time_budget
    }

    /// Convergence tolerance, handed to the solver unchanged.
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// The solver-side termination policy.
    pub fn termination(&self) -> Termination {
        let max_evaluations = usize::try_from(self.max_evaluations).unwrap_or(usize::MAX);
        Termination::evaluations(max_evaluations)
            .with_duration(self.time_budget)
            .with_epsilon(self.epsilon)
    }
}

impl Default for Budget {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_EVALUATIONS, None, 0.0)
    }
}
