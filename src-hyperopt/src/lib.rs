//! hyperopt - global optimisation of black-box objectives
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
//!
//! Searches a bounded box, optionally with integer dimensions, for the
//! global minimum or maximum of an expensive function that has no
//! gradient. The search itself is delegated to a derivative-free solver:
//!
//! - `hyperopt_de`: Differential Evolution optimizer (default backend)
//! - `hyperopt_testfunctions`: benchmark objectives
//!
//! This crate validates requests, moves candidates between the solver and
//! the objective, enforces that the objective returns finite numbers and
//! handles the minimize/maximize duality.

use std::sync::Once;

// Re-export external crate functionality
pub use hyperopt_de as de;
pub use hyperopt_testfunctions as testfunctions;

/// Callback bridge between the solver and the objective
pub mod bridge;
/// Evaluation and time budgets
pub mod budget;
/// Search domain description
pub mod domain;
/// Error types
pub mod error;
/// Request entry points
pub mod global;
/// Positional entry point for dynamically typed hosts
pub mod host;
/// The objective abstraction
pub mod objective;
/// Options loaded from JSON
pub mod options;
/// Recording of every evaluation
pub mod record;
/// Typed requests
pub mod request;
/// Results
pub mod result;
/// Solver seam
pub mod solver;

// Re-export commonly used items
pub use bridge::{ObjectiveBridge, ensure_finite};
pub use budget::{Budget, DEFAULT_MAX_EVALUATIONS};
pub use domain::{DomainVariable, SearchDomain, split_domain};
pub use error::{BoxError, ContractViolation, HyperoptError, Result};
pub use global::{find_global, find_global_with, find_max_global, find_min_global};
pub use host::{HostFunction, HostResult, HostValue};
pub use objective::{Fallible, Objective};
pub use options::OptimizerOptions;
pub use record::{EvaluationRecorder, Recorded};
pub use request::{Direction, OptimizationRequest};
pub use result::{FunctionEvaluation, OptimizationResult};
pub use solver::{DifferentialEvolutionSolver, GlobalSolver};

static INIT: Once = Once::new();

/// Install `env_logger` once; `RUST_LOG` overrides the default `info` level.
pub fn init_logging() {
    INIT.call_once(|| {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
        log::debug!("hyperopt v{} starting", env!("CARGO_PKG_VERSION"));
    });
}
