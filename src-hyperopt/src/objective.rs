//! hyperopt - global optimisation of black-box objectives
//! The objective abstraction the bridge calls into
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

use crate::error::{BoxError, HyperoptError, Result};

/// A black-box function of a point in the search domain.
///
/// `xs` borrows the exchange buffer and is only valid for the duration of
/// the call: its contents change on the next evaluation, so an
/// implementation that wants to keep the point must copy it.
pub trait Objective {
    fn evaluate(&mut self, xs: &[f64]) -> Result<f64>;
}

impl<F> Objective for F
where
    F: FnMut(&[f64]) -> f64,
{
    fn evaluate(&mut self, xs: &[f64]) -> Result<f64> {
        Ok(self(xs))
    }
}

/// Adapts a closure that can fail.
///
/// An `Err` is reported as [`HyperoptError::HostCallbackFailure`] with the
/// closure's error kept verbatim, and stops the search.
///
/// ```
/// use hyperopt::{find_global, Fallible, OptimizationRequest};
///
/// let objective = Fallible(|xs: &[f64]| {
///     if xs[0] > 4.0 { Err("out of range") } else { Ok(xs[0] * xs[0]) }
/// });
/// let request = OptimizationRequest::new(objective, vec![-1.0], vec![5.0])
///     .max_evaluations(100)
///     .seed(1);
/// let _ = find_global(request);
/// ```
pub struct Fallible<F>(pub F);

impl<F, E> Objective for Fallible<F>
where
    F: FnMut(&[f64]) -> std::result::Result<f64, E>,
    E: Into<BoxError>,
{
    fn evaluate(&mut self, xs: &[f64]) -> Result<f64> {
        (self.0)(xs).map_err(|e| HyperoptError::HostCallbackFailure(e.into()))
    }
}
