//! hyperopt - global optimisation of black-box objectives
//! Error kinds surfaced by an optimisation request
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

use hyperopt_de::{DEError, SolveError};
use thiserror::Error;

/// Error raised by a host callback, kept as is.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Ways an objective can break its contract of returning a finite number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContractViolation {
    #[error("Objective function returned a NaN.")]
    NaN,

    #[error("Objective function returned an infinite value (inf).")]
    Infinite,

    /// The host returned something that is not a number at all.
    #[error("Objective function returned a non-numeric value ({0}).")]
    NotANumber(&'static str),
}

/// Everything that can make a request fail.
///
/// Every failure aborts the whole request; no partial result is returned.
#[derive(Debug, Error)]
pub enum HyperoptError {
    /// Arity, type or shape problem detected before the solver runs.
    #[error("{0}")]
    InvalidArgument(String),

    /// The objective returned NaN, an infinity or a non-number.
    #[error(transparent)]
    ObjectiveContractViolation(#[from] ContractViolation),

    /// The objective itself failed; its error is reported verbatim.
    #[error(transparent)]
    HostCallbackFailure(BoxError),

    /// The solver rejected its inputs.
    #[error("(Solver error) {0}")]
    SolverFailure(#[from] DEError),
}

impl HyperoptError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        HyperoptError::InvalidArgument(message.into())
    }

    pub fn host_failure(error: impl Into<BoxError>) -> Self {
        HyperoptError::HostCallbackFailure(error.into())
    }
}

impl From<SolveError<HyperoptError>> for HyperoptError {
    fn from(e: SolveError<HyperoptError>) -> Self {
        match e {
            SolveError::Solver(e) => HyperoptError::SolverFailure(e),
            SolveError::Objective(e) => e,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T, E = HyperoptError> = std::result::Result<T, E>;
