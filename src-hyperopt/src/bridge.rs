//! hyperopt - global optimisation of black-box objectives
//! The callback the solver re-enters once per candidate point
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

use hyperopt_de::DEError;

use crate::error::{ContractViolation, Result};
use crate::objective::Objective;

/// Reject anything but a finite number before it reaches the solver.
pub fn ensure_finite(y: f64) -> Result<f64, ContractViolation> {
    if y.is_nan() {
        Err(ContractViolation::NaN)
    } else if y.is_infinite() {
        Err(ContractViolation::Infinite)
    } else {
        Ok(y)
    }
}

/// Connects the solver to the objective for the lifetime of one request.
///
/// Every candidate is copied into one exchange buffer, allocated once and
/// reused for every evaluation, and the objective is called synchronously
/// with that buffer. The value coming back is checked before it is returned
/// to the solver. An objective error ends the search.
pub struct ObjectiveBridge<'o> {
    objective: &'o mut dyn Objective,
    dimension: usize,
    buffer: Vec<f64>,
    negated: bool,
    evaluations: u64,
}

impl<'o> ObjectiveBridge<'o> {
    pub fn new(objective: &'o mut dyn Objective, dimension: usize) -> Self {
        Self {
            objective,
            dimension,
            buffer: Vec::with_capacity(dimension),
            negated: false,
            evaluations: 0,
        }
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Number of times the objective has been called.
    pub fn evaluations(&self) -> u64 {
        self.evaluations
    }

    pub fn is_negated(&self) -> bool {
        self.negated
    }

    /// Flip the sign of every value handed to the solver. Returns the
    /// previous setting.
    pub fn set_negated(&mut self, negated: bool) -> bool {
        std::mem::replace(&mut self.negated, negated)
    }

    /// Evaluate the objective at `candidate`, given in index order.
    pub fn evaluate<'c, I>(&mut self, candidate: I) -> Result<f64>
    where
        I: IntoIterator<Item = &'c f64>,
    {
        let dimension = self.dimension;
        self.buffer.clear();
        self.buffer.extend(candidate.into_iter().take(dimension + 1));
        if self.buffer.len() != dimension {
            return Err(DEError::DimensionMismatch {
                what: "candidate",
                expected: dimension,
                found: self.buffer.len(),
            }
            .into());
        }

        self.evaluations += 1;
        let y = self.objective.evaluate(&self.buffer).inspect_err(|e| {
            log::warn!("objective failed at evaluation {}: {}", self.evaluations, e);
        })?;
        let y = ensure_finite(y).inspect_err(|e| {
            log::warn!("evaluation {} at {:?}: {}", self.evaluations, self.buffer, e);
        })?;
        log::trace!("f({:?}) = {:.6e}", self.buffer, y);

        Ok(if self.negated { -y } else { y })
    }
}
