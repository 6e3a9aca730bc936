mod common;

use std::cell::RefCell;

use common::close_to;
use hyperopt::testfunctions::{get_function_bounds, himmelblau, integer_lattice, rastrigin, sphere};
use hyperopt::{
    Direction, DomainVariable, EvaluationRecorder, OptimizationRequest, OptimizerOptions, find_global,
    find_max_global, find_min_global,
};

fn options(max_iterations: u64, seed: u64) -> OptimizerOptions {
    OptimizerOptions { max_iterations, seed: Some(seed), ..Default::default() }
}

fn domain_of(name: &str, dim: usize) -> Vec<DomainVariable> {
    get_function_bounds(name, dim)
        .unwrap()
        .into_iter()
        .map(|(lo, hi)| DomainVariable::range(lo, hi))
        .collect()
}

#[test]
fn test_every_candidate_is_inside_the_box() {
    let lower = [-1.0, 10.0, -200.0];
    let upper = [1.0, 10.5, 300.0];
    let outside = RefCell::new(Vec::new());
    let objective = |x: &[f64]| {
        assert_eq!(x.len(), 3);
        if (0..3).any(|i| x[i] < lower[i] || x[i] > upper[i]) {
            outside.borrow_mut().push(x.to_vec());
        }
        x[0].powi(2) + (x[1] - 10.2).powi(2) + (x[2] / 100.0).powi(2)
    };
    let request = OptimizationRequest::new(objective, lower, upper).max_evaluations(1500).seed(11);
    let result = find_global(request).unwrap();
    assert!(outside.borrow().is_empty(), "{:?}", outside.borrow());
    close_to(result.x[1], 10.2, 0.05);
}

#[test]
fn test_integer_dimensions_are_integral() {
    let recorder = EvaluationRecorder::new();
    let domain = [DomainVariable::integer(-5.0, 5.0), DomainVariable::integer(-5.0, 5.0), DomainVariable::range(-1.0, 1.0)];
    let result = find_min_global(recorder.record(integer_lattice), &domain, &options(3000, 12)).unwrap();

    for r in recorder.records() {
        assert_eq!(r.x[0].fract(), 0.0, "{:?}", r.x);
        assert_eq!(r.x[1].fract(), 0.0, "{:?}", r.x);
    }
    assert_eq!(result.x[0], 3.0);
    assert_eq!(result.x[1], -2.0);
}

#[test]
fn test_maximize_is_minimize_of_the_negation() {
    let f = |x: &[f64]| -(x[0] - 0.3).powi(2) - (x[1] + 0.7).powi(2) + 4.0;
    let g = |x: &[f64]| -f(x);
    let domain = [DomainVariable::range(-2.0, 2.0), DomainVariable::range(-2.0, 2.0)];

    let max = find_max_global(f, &domain, &options(400, 13)).unwrap();
    let min = find_min_global(g, &domain, &options(400, 13)).unwrap();

    // same seed, same search, opposite sign
    assert_eq!(max.x, min.x);
    assert_eq!(max.y, -min.y);
    close_to(max.y, 4.0, 1e-3);
}

#[test]
fn test_fixed_dimension_stays_at_its_bound() {
    let domain = [DomainVariable::range(-5.0, 5.0), DomainVariable::range(1.25, 1.25)];
    let result = find_min_global(
        |x: &[f64]| {
            assert_eq!(x[1], 1.25);
            sphere(x)
        },
        &domain,
        &options(300, 14),
    )
    .unwrap();
    assert_eq!(result.x[1], 1.25);
    close_to(result.x[0], 0.0, 0.05);
}

#[test]
fn test_all_fixed_domain_is_evaluated_once() {
    let recorder = EvaluationRecorder::new();
    let domain = [DomainVariable::range(2.0, 2.0), DomainVariable::range(-1.0, -1.0)];
    let result = find_max_global(recorder.record(sphere), &domain, &options(100, 15)).unwrap();
    assert_eq!(recorder.len(), 1);
    assert_eq!(result.x, vec![2.0, -1.0]);
    assert_eq!(result.y, 5.0);
}

#[test]
fn test_evaluation_budget_is_never_exceeded() {
    for budget in [1, 2, 7, 64, 251] {
        let recorder = EvaluationRecorder::new();
        let request = OptimizationRequest::new(recorder.record(rastrigin), vec![-5.12; 4], vec![5.12; 4])
            .max_evaluations(budget)
            .seed(budget);
        find_global(request).unwrap();
        assert_eq!(recorder.len() as u64, budget);
    }
}

#[test]
fn test_same_seed_same_result() {
    let run = || find_min_global(himmelblau, &domain_of("himmelblau", 2), &options(600, 16)).unwrap();
    assert_eq!(run(), run());
}

#[test]
fn test_reported_optimum_was_evaluated() {
    let recorder = EvaluationRecorder::new();
    let request = OptimizationRequest::new(recorder.record(himmelblau), vec![-5.0, -5.0], vec![5.0, 5.0])
        .max_evaluations(500)
        .direction(Direction::Minimize)
        .seed(17);
    let result = find_global(request).unwrap();
    let best = recorder.best(Direction::Minimize).unwrap();
    assert_eq!(best.y, result.y);
    assert_eq!(best.x, result.x);
}
