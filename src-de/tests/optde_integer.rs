use hyperopt_de::{differential_evolution, DEConfigBuilder, TerminationReason};
use hyperopt_testfunctions::{get_function_bounds, get_function_integer_mask, integer_lattice, integer_sum};
use ndarray::Array1;

#[test]
fn test_de_integer_sum_lower_corner() {
	let bounds = get_function_bounds("integer_sum", 3).unwrap();
	let mask = get_function_integer_mask("integer_sum", 3).unwrap();
	let config = DEConfigBuilder::new()
		.seed(31)
		.max_evaluations(2000)
		.integrality(mask)
		.build();
	let report =
		differential_evolution(|x: &Array1<f64>| integer_sum(&x.to_vec()), &bounds, config).unwrap();
	assert_eq!(report.x.to_vec(), vec![-1.0, -1.0, -1.0]);
	assert_eq!(report.fun, -3.0);
}

#[test]
fn test_de_mixed_integer_lattice() {
	let bounds = get_function_bounds("integer_lattice", 3).unwrap();
	let mask = get_function_integer_mask("integer_lattice", 3).unwrap();
	let config = DEConfigBuilder::new()
		.seed(32)
		.max_evaluations(5000)
		.integrality(mask)
		.build();
	let report = differential_evolution(
		|x: &Array1<f64>| {
			assert_eq!(x[0].fract(), 0.0);
			assert_eq!(x[1].fract(), 0.0);
			integer_lattice(&x.to_vec())
		},
		&bounds,
		config,
	)
	.unwrap();
	assert_eq!(report.x[0], 3.0);
	assert_eq!(report.x[1], -2.0);
	assert!(report.x[2].abs() < 0.05);
}

#[test]
fn test_de_integer_bounds_are_reached() {
	// The optimum of a pure integer problem sits on the box corner
	let config = DEConfigBuilder::new()
		.seed(33)
		.max_evaluations(100_000)
		.integrality(vec![true, true, true])
		.build();
	let report = differential_evolution(
		|x: &Array1<f64>| -integer_sum(&x.to_vec()),
		&[(1.0, 3.0), (0.0, 1.0), (-1.0, 2.0)],
		config,
	)
	.unwrap();
	assert_eq!(report.x.to_vec(), vec![3.0, 1.0, 2.0]);
	assert_eq!(report.fun, -6.0);
	assert_eq!(report.reason, TerminationReason::Converged);
}
