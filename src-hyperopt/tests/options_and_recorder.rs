mod common;

use std::io::Write;

use common::close_to;
use hyperopt::testfunctions::shifted_quadratic;
use hyperopt::{
    Direction, DomainVariable, EvaluationRecorder, HyperoptError, OptimizerOptions, find_min_global,
};
use tempfile::NamedTempFile;

#[test]
fn test_options_from_file_drive_the_run() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{ "maxIterations": 120, "epsilon": 0.0, "seed": 21 }}"#).unwrap();
    let options = OptimizerOptions::from_json_file(file.path()).unwrap();
    assert_eq!(options.max_iterations, 120);
    assert_eq!(options.max_runtime_ms, None);

    let recorder = EvaluationRecorder::new();
    let domain = [DomainVariable::range(-5.0, 5.0), DomainVariable::range(-5.0, 5.0)];
    let result = find_min_global(recorder.record(shifted_quadratic), &domain, &options).unwrap();
    assert_eq!(recorder.len(), 120);
    assert!(result.y < 1.0);
}

#[test]
fn test_malformed_options_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{ "maxIterations": "many" }}"#).unwrap();
    let e = OptimizerOptions::from_json_file(file.path()).unwrap_err();
    assert!(matches!(e, HyperoptError::InvalidArgument(_)));
}

#[test]
fn test_domain_from_json() {
    let json = serde_json::json!([[0, 3.5], { "bounds": [1, 4], "isInteger": true }, { "bounds": [-1, 1] }]);
    let domain = DomainVariable::parse_list(&json).unwrap();
    assert_eq!(
        domain,
        vec![
            DomainVariable::range(0.0, 3.5),
            DomainVariable::integer(1.0, 4.0),
            DomainVariable::Variable { bounds: [-1.0, 1.0], is_integer: false },
        ]
    );

    let bad = serde_json::json!([[0, 1], [2]]);
    assert_eq!(DomainVariable::parse_list(&bad).unwrap_err().to_string(), "Invalid range at dimension 1");
}

#[test]
fn test_recorder_csv_file() {
    let recorder = EvaluationRecorder::new();
    let options = OptimizerOptions { max_iterations: 25, seed: Some(22), ..Default::default() };
    let result = find_min_global(
        recorder.record(|x: &[f64]| (x[0] - 1.0).powi(2)),
        &[DomainVariable::range(-2.0, 2.0)],
        &options,
    )
    .unwrap();

    let file = NamedTempFile::new().unwrap();
    recorder.save_csv(file.path()).unwrap();

    let mut reader = csv::Reader::from_path(file.path()).unwrap();
    let headers = reader.headers().unwrap().clone();
    assert_eq!(headers.iter().collect::<Vec<_>>(), vec!["index", "x0", "y"]);

    let mut best = f64::INFINITY;
    let mut rows = 0;
    for (i, row) in reader.records().enumerate() {
        let row = row.unwrap();
        assert_eq!(row[0].parse::<usize>().unwrap(), i);
        let x: f64 = row[1].parse().unwrap();
        let y: f64 = row[2].parse().unwrap();
        close_to(y, (x - 1.0).powi(2), 1e-12);
        best = best.min(y);
        rows += 1;
    }
    assert_eq!(rows, 25);
    assert_eq!(best, result.y);
    assert_eq!(recorder.best(Direction::Minimize).unwrap().y, result.y);
}
