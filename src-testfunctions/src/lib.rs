//! Optimization test functions library
//!
//! Benchmark objectives used to exercise the global optimizer, organized by
//! category:
//!
//! - **Unimodal**: Single global optimum functions (sphere, rosenbrock, etc.)
//! - **Multimodal**: Multiple local minima functions (sin, rastrigin, himmelblau, etc.)
//! - **Integer**: Functions over integer or mixed-integer domains
//!
//! Every function takes the candidate point as a plain slice so it can be
//! handed to the optimizer as is.
//!
//! # Example
//!
//! ```rust
//! use hyperopt_testfunctions::*;
//!
//! let result = sphere(&[0.0, 0.0]);
//! assert_eq!(result, 0.0);
//!
//! // Get function metadata
//! let metadata = get_function_metadata();
//! let bounds = get_function_bounds("sphere", 3);
//! assert_eq!(bounds, Some(vec![(-5.0, 5.0); 3]));
//! ```

use std::collections::HashMap;

// Import all function modules
pub mod functions;
pub use functions::*;

/// Signature shared by every test function
pub type TestFunction = fn(&[f64]) -> f64;

/// Metadata for a test function including bounds, integer flags and known optima
#[derive(Debug, Clone)]
pub struct FunctionMetadata {
    /// Function name
    pub name: String,
    /// Bounds for each dimension (min, max) at the smallest supported dimension
    pub bounds: Vec<(f64, f64)>,
    /// Integer flag for each dimension, aligned with `bounds`
    pub integer: Vec<bool>,
    /// Global minima locations and values
    pub global_minima: Vec<(Vec<f64>, f64)>,
    /// Description of the function
    pub description: String,
    /// Whether the function is multimodal
    pub multimodal: bool,
    /// Whether the function accepts any dimension >= `bounds.len()`
    pub scalable: bool,
}

impl FunctionMetadata {
    /// Smallest dimension the function accepts
    pub fn min_dimension(&self) -> usize {
        self.bounds.len()
    }

    /// Whether `dim` is a valid dimension for this function
    pub fn supports_dimension(&self, dim: usize) -> bool {
        if self.scalable { dim >= self.min_dimension() } else { dim == self.min_dimension() }
    }
}

/// Repeat the last entry of `v` until it has `dim` entries.
fn extend_to<T: Clone>(v: &[T], dim: usize) -> Vec<T> {
    let mut out: Vec<T> = v.iter().take(dim).cloned().collect();
    if let Some(last) = v.last() {
        out.resize(dim, last.clone());
    }
    out
}

fn meta(
    name: &str,
    bounds: Vec<(f64, f64)>,
    integer: Vec<bool>,
    global_minima: Vec<(Vec<f64>, f64)>,
    description: &str,
    multimodal: bool,
    scalable: bool,
) -> FunctionMetadata {
    FunctionMetadata {
        name: name.to_string(),
        bounds,
        integer,
        global_minima,
        description: description.to_string(),
        multimodal,
        scalable,
    }
}

/// Get metadata for all available test functions
pub fn get_function_metadata() -> HashMap<String, FunctionMetadata> {
    let all = vec![
        meta(
            "sphere",
            vec![(-5.0, 5.0)],
            vec![false],
            vec![(vec![0.0], 0.0)],
            "N-dimensional quadratic bowl",
            false,
            true,
        ),
        meta(
            "shifted_quadratic",
            vec![(-5.0, 5.0)],
            vec![false],
            vec![(vec![2.0], 0.0)],
            "N-dimensional quadratic bowl centred at (2, ..., 2)",
            false,
            true,
        ),
        meta(
            "rosenbrock",
            vec![(-2.048, 2.048); 2],
            vec![false; 2],
            vec![(vec![1.0, 1.0], 0.0)],
            "N-dimensional banana function",
            false,
            true,
        ),
        meta(
            "sin",
            vec![(-3.0, 3.0)],
            vec![false],
            vec![(vec![-std::f64::consts::FRAC_PI_2], -1.0)],
            "1D sine, maximum 1 at pi/2",
            true,
            false,
        ),
        meta(
            "sin_squared_over_x",
            vec![(0.0, 3.5)],
            vec![false],
            vec![(vec![2.1457], -0.4633)],
            "1D sin(x^2)/x, faster oscillation with growing x",
            true,
            false,
        ),
        meta(
            "rastrigin",
            vec![(-5.12, 5.12)],
            vec![false],
            vec![(vec![0.0], 0.0)],
            "N-dimensional highly multimodal function",
            true,
            true,
        ),
        meta(
            "himmelblau",
            vec![(-5.0, 5.0); 2],
            vec![false; 2],
            vec![
                (vec![3.0, 2.0], 0.0),
                (vec![-2.805118, 3.131312], 0.0),
                (vec![-3.779310, -3.283186], 0.0),
                (vec![3.584428, -1.848126], 0.0),
            ],
            "2D multimodal function with 4 global minima",
            true,
            false,
        ),
        meta(
            "integer_sum",
            vec![(-1.0, 3.0)],
            vec![true],
            vec![(vec![-1.0], -1.0)],
            "N-dimensional sum over an integer box",
            false,
            true,
        ),
        meta(
            "integer_lattice",
            vec![(-10.0, 10.0); 3],
            vec![true, true, false],
            vec![(vec![3.0, -2.0, 0.0], 0.0)],
            "Mixed-integer distance to the lattice point (3, -2)",
            false,
            true,
        ),
    ];
    all.into_iter().map(|m| (m.name.clone(), m)).collect()
}

/// Look up a test function by name
pub fn get_function(name: &str) -> Option<TestFunction> {
    let f: TestFunction = match name {
        "sphere" => sphere,
        "shifted_quadratic" => shifted_quadratic,
        "rosenbrock" => rosenbrock,
        "sin" => sin,
        "sin_squared_over_x" => sin_squared_over_x,
        "rastrigin" => rastrigin,
        "himmelblau" => himmelblau,
        "integer_sum" => integer_sum,
        "integer_lattice" => integer_lattice,
        _ => return None,
    };
    Some(f)
}

/// Default bounds of `name` at dimension `dim`, `None` for an unknown
/// function or an unsupported dimension
pub fn get_function_bounds(name: &str, dim: usize) -> Option<Vec<(f64, f64)>> {
    let metadata = get_function_metadata();
    let m = metadata.get(name)?;
    m.supports_dimension(dim).then(|| extend_to(&m.bounds, dim))
}

/// Integer flags of `name` at dimension `dim`
pub fn get_function_integer_mask(name: &str, dim: usize) -> Option<Vec<bool>> {
    let metadata = get_function_metadata();
    let m = metadata.get(name)?;
    m.supports_dimension(dim).then(|| extend_to(&m.integer, dim))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_registered_function_has_metadata() {
        let metadata = get_function_metadata();
        for (name, meta) in metadata.iter() {
            assert!(get_function(name).is_some(), "{} is not registered", name);
            assert_eq!(meta.bounds.len(), meta.integer.len(), "{}", name);
            assert!(!meta.description.is_empty(), "Function {} has no description", name);
            for (lower, upper) in &meta.bounds {
                assert!(lower < upper, "Function {} has invalid bounds", name);
            }
        }
        assert!(get_function("nope").is_none());
    }

    #[test]
    fn test_known_minima_values() {
        let metadata = get_function_metadata();
        for (name, meta) in metadata.iter() {
            let f = get_function(name).unwrap();
            for (location, value) in &meta.global_minima {
                let dim = location.len().max(meta.min_dimension());
                let x = extend_to(location, dim);
                assert!(
                    (f(&x) - value).abs() < 1e-3,
                    "{} at {:?}: expected {}, got {}",
                    name,
                    x,
                    value,
                    f(&x)
                );
            }
        }
    }

    #[test]
    fn test_bounds_by_dimension() {
        assert_eq!(get_function_bounds("rastrigin", 4), Some(vec![(-5.12, 5.12); 4]));
        assert_eq!(get_function_bounds("himmelblau", 2), Some(vec![(-5.0, 5.0); 2]));
        assert_eq!(get_function_bounds("himmelblau", 3), None);
        assert_eq!(get_function_bounds("rosenbrock", 1), None);
        assert_eq!(get_function_bounds("unknown", 2), None);
        assert_eq!(
            get_function_integer_mask("integer_lattice", 4),
            Some(vec![true, true, false, false])
        );
    }
}
