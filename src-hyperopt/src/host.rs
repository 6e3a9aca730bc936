//! hyperopt - global optimisation of black-box objectives
//! Positional entry point for dynamically typed hosts
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
//! A host hands over eight positional values, in this order:
//!
//! | # | name           | kind                        |
//! |---|----------------|-----------------------------|
//! | 0 | objective      | function                    |
//! | 1 | lower          | Float64Array                |
//! | 2 | upper          | Float64Array                |
//! | 3 | integerMask    | Uint8Array or undefined     |
//! | 4 | maxEvaluations | positive integer            |
//! | 5 | epsilon        | finite number               |
//! | 6 | timeBudgetMs   | non-negative integer or undefined |
//! | 7 | direction      | number, `1` is maximize     |

use std::fmt;
use std::time::Duration;

use serde::Serialize;

use crate::error::{BoxError, ContractViolation, HyperoptError, Result};
use crate::objective::Objective;
use crate::request::{Direction, OptimizationRequest};

const ARGUMENT_NAMES: [&str; 8] = [
    "objective",
    "lower",
    "upper",
    "integerMask",
    "maxEvaluations",
    "epsilon",
    "timeBudgetMs",
    "direction",
];

/// A value as seen on the host side of the boundary.
#[derive(Debug)]
pub enum HostValue {
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Float64Array(Vec<f64>),
    Uint8Array(Vec<u8>),
    Array(Vec<HostValue>),
    Object,
    Function(HostFunction),
}

impl HostValue {
    /// Host type name, as used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            HostValue::Undefined => "undefined",
            HostValue::Null => "null",
            HostValue::Bool(_) => "boolean",
            HostValue::Number(_) => "number",
            HostValue::String(_) => "string",
            HostValue::Float64Array(_) => "Float64Array",
            HostValue::Uint8Array(_) => "Uint8Array",
            HostValue::Array(_) => "array",
            HostValue::Object => "object",
            HostValue::Function(_) => "function",
        }
    }
}

type HostCallback = dyn FnMut(&[f64]) -> std::result::Result<HostValue, BoxError>;

/// A host callable taking the candidate point.
///
/// It may return any host value or fail; only a `Number` is a valid
/// objective value.
pub struct HostFunction(Box<HostCallback>);

impl HostFunction {
    pub fn new<F>(f: F) -> Self
    where
        F: FnMut(&[f64]) -> std::result::Result<HostValue, BoxError> + 'static,
    {
        HostFunction(Box::new(f))
    }

    pub fn call(&mut self, xs: &[f64]) -> std::result::Result<HostValue, BoxError> {
        (self.0)(xs)
    }
}

impl fmt::Debug for HostFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("HostFunction")
    }
}

impl Objective for HostFunction {
    fn evaluate(&mut self, xs: &[f64]) -> Result<f64> {
        match self.call(xs) {
            Ok(HostValue::Number(y)) => Ok(y),
            Ok(other) => Err(ContractViolation::NotANumber(other.type_name()).into()),
            Err(e) => Err(HyperoptError::HostCallbackFailure(e)),
        }
    }
}

/// Result handed back to the host. `x` is freshly allocated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HostResult {
    pub y: f64,
    pub x: Vec<f64>,
}

fn wrong_kind(index: usize, kind: &str) -> HyperoptError {
    HyperoptError::invalid_argument(format!(
        "Expected argument {} ({}) to be {}",
        index, ARGUMENT_NAMES[index], kind
    ))
}

fn number(value: HostValue, index: usize) -> Result<f64> {
    match value {
        HostValue::Number(v) => Ok(v),
        _ => Err(wrong_kind(index, "a number")),
    }
}

fn float_array(value: HostValue, index: usize) -> Result<Vec<f64>> {
    match value {
        HostValue::Float64Array(v) => Ok(v),
        _ => Err(wrong_kind(index, "a Float64Array")),
    }
}

fn optional_number(value: HostValue, index: usize) -> Result<Option<f64>> {
    match value {
        HostValue::Undefined => Ok(None),
        HostValue::Number(v) => Ok(Some(v)),
        _ => Err(wrong_kind(index, "a number or undefined")),
    }
}

fn is_whole(v: f64) -> bool {
    v.is_finite() && v.fract() == 0.0
}

/// Run one optimisation from eight positional host values.
///
/// Arguments are checked in order (count, kinds, lengths, then values)
/// before anything is evaluated. Trailing values past the eighth are
/// ignored, as a host function ignores surplus arguments.
pub fn find_global(mut args: Vec<HostValue>) -> Result<HostResult> {
    if args.len() < 8 {
        return Err(HyperoptError::invalid_argument("Expected 8 arguments"));
    }
    args.truncate(8);
    let Ok(args) = <[HostValue; 8]>::try_from(args) else {
        return Err(HyperoptError::invalid_argument("Expected 8 arguments"));
    };
    let [objective, lower, upper, mask, max_evaluations, epsilon, time_budget, direction] = args;

    let objective = match objective {
        HostValue::Function(f) => f,
        _ => return Err(wrong_kind(0, "a function")),
    };
    let lower = float_array(lower, 1)?;
    let upper = float_array(upper, 2)?;
    let mask = match mask {
        HostValue::Undefined => None,
        HostValue::Uint8Array(bytes) => Some(bytes),
        _ => return Err(wrong_kind(3, "a Uint8Array or undefined")),
    };
    let max_evaluations = number(max_evaluations, 4)?;
    let epsilon = number(epsilon, 5)?;
    let time_budget = optional_number(time_budget, 6)?;
    let direction = number(direction, 7)?;

    let n = lower.len();
    if upper.len() != n || mask.as_ref().is_some_and(|m| m.len() != n) {
        return Err(HyperoptError::invalid_argument(format!(
            "Expected bounds arrays of length {}",
            n
        )));
    }
    if n == 0 {
        return Err(HyperoptError::invalid_argument("Expected bounds arrays of length > 0"));
    }
    if !is_whole(max_evaluations) || max_evaluations < 1.0 {
        return Err(wrong_kind(4, "a positive integer"));
    }
    if !epsilon.is_finite() {
        return Err(wrong_kind(5, "a finite number"));
    }
    let time_budget = match time_budget {
        None => None,
        Some(ms) if is_whole(ms) && ms >= 0.0 => Some(Duration::from_millis(ms as u64)),
        Some(_) => return Err(wrong_kind(6, "a non-negative integer or undefined")),
    };

    let mut request = OptimizationRequest::new(objective, lower, upper)
        .max_evaluations(max_evaluations as u64)
        .epsilon(epsilon)
        .time_budget(time_budget)
        .direction(Direction::from_host(direction));
    if let Some(bytes) = mask {
        request = request.integer_mask(bytes.iter().map(|&b| b == 1).collect::<Vec<bool>>());
    }

    let best = crate::find_global(request)?;
    Ok(HostResult { y: best.y, x: best.x })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_names() {
        assert_eq!(HostValue::Bool(false).type_name(), "boolean");
        assert_eq!(HostValue::Array(vec![]).type_name(), "array");
        assert_eq!(HostValue::Function(HostFunction::new(|_| Ok(HostValue::Null))).type_name(), "function");
    }

    #[test]
    fn test_non_number_return_is_a_contract_violation() {
        let mut f = HostFunction::new(|_| Ok(HostValue::Array(vec![HostValue::Number(0.0)])));
        let e = f.evaluate(&[0.0]).unwrap_err();
        assert!(matches!(
            e,
            HyperoptError::ObjectiveContractViolation(ContractViolation::NotANumber("array"))
        ));

        let mut f = HostFunction::new(|_| Ok(HostValue::Bool(false)));
        assert_eq!(
            f.evaluate(&[0.0]).unwrap_err().to_string(),
            "Objective function returned a non-numeric value (boolean)."
        );
    }

    #[test]
    fn test_host_error_is_forwarded() {
        let mut f = HostFunction::new(|_| Err("TypeError: x is undefined".into()));
        let e = f.evaluate(&[0.0]).unwrap_err();
        assert_eq!(e.to_string(), "TypeError: x is undefined");
    }
}
