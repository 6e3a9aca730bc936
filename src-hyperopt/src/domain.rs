//! hyperopt - global optimisation of black-box objectives
//! Search domains: host-facing variables and the solver-facing box
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

use std::str::FromStr;

use ndarray::Array1;
use serde::{Deserialize, Serialize};

use crate::error::{HyperoptError, Result};

/// Bounds of one variable of the objective, optionally integer-valued.
///
/// On the wire a variable is either `[lo, hi]` or
/// `{ "bounds": [lo, hi], "isInteger": true }`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DomainVariable {
    Range([f64; 2]),
    Variable {
        bounds: [f64; 2],
        #[serde(default, rename = "isInteger")]
        is_integer: bool,
    },
}

impl DomainVariable {
    /// A continuous variable in `[lower, upper]`.
    pub fn range(lower: f64, upper: f64) -> Self {
        DomainVariable::Range([lower, upper])
    }

    /// An integer variable in `[lower, upper]`.
    pub fn integer(lower: f64, upper: f64) -> Self {
        DomainVariable::Variable { bounds: [lower, upper], is_integer: true }
    }

    pub fn bounds(&self) -> (f64, f64) {
        match *self {
            DomainVariable::Range([lo, hi]) | DomainVariable::Variable { bounds: [lo, hi], .. } => {
                (lo, hi)
            }
        }
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, DomainVariable::Variable { is_integer: true, .. })
    }

    /// Parse a JSON array of variables, naming the first malformed dimension.
    pub fn parse_list(value: &serde_json::Value) -> Result<Vec<DomainVariable>> {
        let items = value
            .as_array()
            .ok_or_else(|| HyperoptError::invalid_argument("The domain must be an array"))?;
        items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                DomainVariable::deserialize(item).map_err(|_| {
                    HyperoptError::invalid_argument(format!("Invalid range at dimension {}", i))
                })
            })
            .collect()
    }

    /// Parse a comma separated list of `lo:hi` or `lo:hi:int` entries.
    pub fn parse_spec(spec: &str) -> Result<Vec<DomainVariable>> {
        spec.split(',')
            .enumerate()
            .map(|(i, item)| {
                item.trim().parse::<DomainVariable>().map_err(|e| {
                    HyperoptError::invalid_argument(format!("Invalid range at dimension {}: {}", i, e))
                })
            })
            .collect()
    }
}

impl FromStr for DomainVariable {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').map(str::trim).collect();
        let number = |p: &str| p.parse::<f64>().map_err(|_| format!("'{}' is not a number", p));
        match parts.as_slice() {
            [lo, hi] => Ok(DomainVariable::range(number(lo)?, number(hi)?)),
            [lo, hi, "int"] => Ok(DomainVariable::integer(number(lo)?, number(hi)?)),
            _ => Err(format!("expected lo:hi or lo:hi:int, got '{}'", s)),
        }
    }
}

/// Lower bounds, upper bounds and integer flags of a domain, in index order.
pub fn split_domain(domain: &[DomainVariable]) -> (Vec<f64>, Vec<f64>, Vec<bool>) {
    let lower = domain.iter().map(|v| v.bounds().0).collect();
    let upper = domain.iter().map(|v| v.bounds().1).collect();
    let integer = domain.iter().map(DomainVariable::is_integer).collect();
    (lower, upper, integer)
}

/// The box the solver searches, in the solver's own representation.
///
/// Bound values are carried over untouched; whether `lower[i] <= upper[i]`
/// holds is for the solver to decide.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchDomain {
    lower: Array1<f64>,
    upper: Array1<f64>,
    integer: Vec<bool>,
}

impl SearchDomain {
    /// Translate validated host vectors. A missing mask means every
    /// dimension is continuous.
    pub(crate) fn translate(lower: Vec<f64>, upper: Vec<f64>, integer_mask: Option<Vec<bool>>) -> Self {
        let integer = integer_mask.unwrap_or_else(|| vec![false; lower.len()]);
        Self { lower: Array1::from(lower), upper: Array1::from(upper), integer }
    }

    pub fn dimension(&self) -> usize {
        self.lower.len()
    }

    pub fn lower(&self) -> &Array1<f64> {
        &self.lower
    }

    pub fn upper(&self) -> &Array1<f64> {
        &self.upper
    }

    pub fn integer_mask(&self) -> &[bool] {
        &self.integer
    }

    pub fn has_integers(&self) -> bool {
        self.integer.iter().any(|&b| b)
    }
}
