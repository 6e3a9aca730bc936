//! hyperopt - global optimisation of black-box objectives
//! Record every evaluation of an objective
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

use std::cell::RefCell;
use std::io;
use std::path::Path;
use std::rc::Rc;

use crate::error::Result;
use crate::objective::Objective;
use crate::request::Direction;
use crate::result::FunctionEvaluation;

/// Shared log of (x, y) pairs, filled by the objectives it wraps.
///
/// The point handed to an objective lives in the exchange buffer and is
/// overwritten by the next evaluation, so each record owns a copy.
///
/// ```
/// use hyperopt::{find_min_global, DomainVariable, EvaluationRecorder, OptimizerOptions};
///
/// let recorder = EvaluationRecorder::new();
/// let objective = recorder.record(|x: &[f64]| x[0] * x[0]);
/// let options = OptimizerOptions { max_iterations: 30, seed: Some(1), ..Default::default() };
/// find_min_global(objective, &[DomainVariable::range(-1.0, 1.0)], &options).unwrap();
/// assert_eq!(recorder.len(), 30);
/// ```
#[derive(Debug, Clone, Default)]
pub struct EvaluationRecorder {
    records: Rc<RefCell<Vec<FunctionEvaluation>>>,
}

/// An objective whose evaluations go to an [`EvaluationRecorder`].
pub struct Recorded<O> {
    inner: O,
    records: Rc<RefCell<Vec<FunctionEvaluation>>>,
}

impl EvaluationRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap `objective` so that each successful evaluation is recorded here.
    pub fn record<O: Objective>(&self, objective: O) -> Recorded<O> {
        Recorded { inner: objective, records: Rc::clone(&self.records) }
    }

    pub fn records(&self) -> Vec<FunctionEvaluation> {
        self.records.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.records.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.borrow().is_empty()
    }

    /// Best record seen for `direction`; the earliest one wins a tie.
    pub fn best(&self, direction: Direction) -> Option<FunctionEvaluation> {
        let records = self.records.borrow();
        let better = |a: f64, b: f64| match direction {
            Direction::Minimize => a < b,
            Direction::Maximize => a > b,
        };
        records
            .iter()
            .fold(None::<&FunctionEvaluation>, |best, r| match best {
                Some(b) if !better(r.y, b.y) => Some(b),
                _ => Some(r),
            })
            .cloned()
    }

    /// Write `index,x0,..,x{n-1},y` rows with a header.
    pub fn write_csv<W: io::Write>(&self, writer: W) -> Result<(), csv::Error> {
        let records = self.records.borrow();
        let dimension = records.first().map_or(0, |r| r.x.len());
        let mut wtr = csv::Writer::from_writer(writer);

        let mut header = vec!["index".to_string()];
        header.extend((0..dimension).map(|i| format!("x{}", i)));
        header.push("y".to_string());
        wtr.write_record(&header)?;

        for (index, r) in records.iter().enumerate() {
            let mut row = vec![index.to_string()];
            row.extend(r.x.iter().map(|v| v.to_string()));
            row.push(r.y.to_string());
            wtr.write_record(&row)?;
        }
        wtr.flush()?;
        Ok(())
    }

    pub fn save_csv(&self, path: impl AsRef<Path>) -> Result<(), csv::Error> {
        let file = std::fs::File::create(path.as_ref())?;
        self.write_csv(file)?;
        log::debug!("wrote {} evaluations to {}", self.len(), path.as_ref().display());
        Ok(())
    }
}

impl<O: Objective> Objective for Recorded<O> {
    fn evaluate(&mut self, xs: &[f64]) -> Result<f64> {
        let y = self.inner.evaluate(xs)?;
        self.records.borrow_mut().push(FunctionEvaluation::new(xs.to_vec(), y));
        Ok(y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_are_copies() {
        let recorder = EvaluationRecorder::new();
        let mut objective = recorder.record(|x: &[f64]| x[0] + x[1]);
        let mut buffer = vec![1.0, 2.0];
        objective.evaluate(&buffer).unwrap();
        buffer[0] = 10.0;
        objective.evaluate(&buffer).unwrap();

        let records = recorder.records();
        assert_eq!(records[0], FunctionEvaluation::new(vec![1.0, 2.0], 3.0));
        assert_eq!(records[1], FunctionEvaluation::new(vec![10.0, 2.0], 12.0));
        assert_eq!(recorder.best(Direction::Minimize).unwrap().y, 3.0);
        assert_eq!(recorder.best(Direction::Maximize).unwrap().y, 12.0);
    }

    #[test]
    fn test_write_csv() {
        let recorder = EvaluationRecorder::new();
        let mut objective = recorder.record(|x: &[f64]| x[0] * 2.0);
        objective.evaluate(&[0.5]).unwrap();
        objective.evaluate(&[1.5]).unwrap();

        let mut out = Vec::new();
        recorder.write_csv(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "index,x0,y\n0,0.5,1\n1,1.5,3\n");
    }

    #[test]
    fn test_empty_recorder() {
        let recorder = EvaluationRecorder::new();
        assert!(recorder.is_empty());
        assert!(recorder.best(Direction::Minimize).is_none());
        let mut out = Vec::new();
        recorder.write_csv(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "index,y\n");
    }
}
