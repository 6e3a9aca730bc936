//! hyperopt - global optimisation of black-box objectives
//! Optimizer options as read from JSON
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

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::budget::DEFAULT_MAX_EVALUATIONS;
use crate::error::{HyperoptError, Result};

/// Budget and tolerance of a `find_min_global`/`find_max_global` call.
///
/// Every field is optional on the wire:
///
/// ```json
/// { "maxIterations": 250, "maxRuntimeMs": 500, "epsilon": 0.0, "seed": 42 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OptimizerOptions {
    /// Maximum number of times to call the objective
    pub max_iterations: u64,
    /// Maximum elapsed time to run the optimizer, in milliseconds
    pub max_runtime_ms: Option<u64>,
    /// Accuracy at which the search may stop early; 0 disables early stopping
    pub epsilon: f64,
    /// Seed for reproducible runs
    pub seed: Option<u64>,
}

impl Default for OptimizerOptions {
    fn default() -> Self {
        Self { max_iterations: DEFAULT_MAX_EVALUATIONS, max_runtime_ms: None, epsilon: 0.0, seed: None }
    }
}

impl OptimizerOptions {
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| HyperoptError::invalid_argument(format!("Invalid optimizer options: {}", e)))
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            HyperoptError::invalid_argument(format!(
                "Cannot read optimizer options from {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_json_str(&content)
    }

    pub fn time_budget(&self) -> Option<Duration> {
        self.max_runtime_ms.map(Duration::from_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_missing_fields() {
        let o = OptimizerOptions::from_json_str(r#"{ "maxIterations": 15 }"#).unwrap();
        assert_eq!(o.max_iterations, 15);
        assert_eq!(o.max_runtime_ms, None);
        assert_eq!(o.epsilon, 0.0);
        assert_eq!(OptimizerOptions::from_json_str("{}").unwrap(), OptimizerOptions::default());
    }

    #[test]
    fn test_camel_case_fields() {
        let o = OptimizerOptions::from_json_str(
            r#"{ "maxIterations": 250, "maxRuntimeMs": 500, "epsilon": 1e-3, "seed": 9 }"#,
        )
        .unwrap();
        assert_eq!(o.time_budget(), Some(Duration::from_millis(500)));
        assert_eq!(o.epsilon, 1e-3);
        assert_eq!(o.seed, Some(9));
    }

    #[test]
    fn test_invalid_json_is_an_invalid_argument() {
        let e = OptimizerOptions::from_json_str(r#"{ "maxRuntimeMs": -5 }"#).unwrap_err();
        assert!(matches!(e, HyperoptError::InvalidArgument(_)));
        assert!(e.to_string().starts_with("Invalid optimizer options"));

        let e = OptimizerOptions::from_json_file("/nonexistent/options.json").unwrap_err();
        assert!(e.to_string().starts_with("Cannot read optimizer options"));
    }
}
