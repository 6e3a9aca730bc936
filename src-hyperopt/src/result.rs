//! hyperopt - global optimisation of black-box objectives
//! Best point found and its host-visible packaging
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

use serde::{Deserialize, Serialize};

/// A point and the objective value there.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionEvaluation {
    pub x: Vec<f64>,
    pub y: f64,
}

impl FunctionEvaluation {
    pub fn new(x: Vec<f64>, y: f64) -> Self {
        Self { x, y }
    }

    /// Same point, value with the opposite sign.
    pub fn negated(self) -> Self {
        Self { x: self.x, y: -self.y }
    }
}

/// What a request returns, always in the objective's own sense: `y` is
/// what the objective returned at `x`, whichever direction was searched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationResult {
    pub x: Vec<f64>,
    pub y: f64,
}

/// Hand the winner over to the caller. `x` is the solver's own copy of the
/// point, never the exchange buffer.
pub(crate) fn package(best: FunctionEvaluation) -> OptimizationResult {
    OptimizationResult { x: best.x, y: best.y }
}
