//! hyperopt - global optimisation of black-box objectives
//! Command line front end over the benchmark registry
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

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use hyperopt::testfunctions::{
    get_function, get_function_bounds, get_function_integer_mask, get_function_metadata,
};
use hyperopt::{
    DomainVariable, EvaluationRecorder, OptimizerOptions, find_max_global, find_min_global,
};

/// Search for the global optimum of a benchmark function.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Name of the function to optimise (see --list).
    #[arg(short, long, default_value = "shifted_quadratic")]
    function: String,

    /// Dimension, for functions that accept more than their default.
    #[arg(short, long)]
    dim: Option<usize>,

    /// Search domain as "lo:hi[:int],..." overriding the default bounds.
    #[arg(long, allow_hyphen_values = true)]
    domain: Option<String>,

    /// Maximum number of objective evaluations.
    #[arg(long)]
    max_iterations: Option<u64>,

    /// Maximum run time in milliseconds.
    #[arg(long)]
    max_runtime_ms: Option<u64>,

    /// Convergence tolerance; 0 disables early stopping.
    #[arg(long)]
    epsilon: Option<f64>,

    /// Random seed for reproducible runs.
    #[arg(long)]
    seed: Option<u64>,

    /// Search for the maximum instead of the minimum.
    #[arg(long, default_value_t = false)]
    maximize: bool,

    /// JSON file with optimizer options; flags take precedence.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write every evaluation to this CSV file.
    #[arg(long)]
    record: Option<PathBuf>,

    /// List available functions and exit.
    #[arg(long, default_value_t = false)]
    list: bool,
}

fn print_function_list() {
    let metadata = get_function_metadata();
    let mut names: Vec<&String> = metadata.keys().collect();
    names.sort();
    println!("Available functions:");
    for name in names {
        let m = &metadata[name];
        let dims = if m.scalable {
            format!("{}+ dims", m.min_dimension())
        } else {
            format!("{} dims", m.min_dimension())
        };
        println!("  {:<20} {:<8} {}", name, dims, m.description);
    }
}

fn options_from(args: &Args) -> Result<OptimizerOptions> {
    let mut options = match &args.config {
        Some(path) => OptimizerOptions::from_json_file(path)?,
        None => OptimizerOptions::default(),
    };
    if let Some(n) = args.max_iterations {
        options.max_iterations = n;
    }
    if let Some(ms) = args.max_runtime_ms {
        options.max_runtime_ms = Some(ms);
    }
    if let Some(eps) = args.epsilon {
        options.epsilon = eps;
    }
    if let Some(seed) = args.seed {
        options.seed = Some(seed);
    }
    Ok(options)
}

fn domain_from(args: &Args) -> Result<Vec<DomainVariable>> {
    let metadata = get_function_metadata();
    let m = metadata
        .get(&args.function)
        .ok_or_else(|| anyhow!("unknown function: {}", args.function))?;
    if let Some(spec) = &args.domain {
        let domain = DomainVariable::parse_spec(spec)?;
        if !m.supports_dimension(domain.len()) || args.dim.is_some_and(|d| d != domain.len()) {
            bail!("{} does not support {} dimension(s)", args.function, domain.len());
        }
        return Ok(domain);
    }
    let dim = args.dim.unwrap_or_else(|| m.min_dimension());
    let bounds = get_function_bounds(&args.function, dim)
        .with_context(|| format!("{} does not support {} dimension(s)", args.function, dim))?;
    let integer = get_function_integer_mask(&args.function, dim).unwrap_or_default();
    Ok(bounds
        .into_iter()
        .zip(integer.into_iter().chain(std::iter::repeat(false)))
        .map(|((lo, hi), int)| {
            if int { DomainVariable::integer(lo, hi) } else { DomainVariable::range(lo, hi) }
        })
        .collect())
}

fn main() -> Result<()> {
    hyperopt::init_logging();
    let args = Args::parse();

    if args.list {
        print_function_list();
        return Ok(());
    }

    let Some(function) = get_function(&args.function) else {
        bail!("unknown function: {} (use --list)", args.function);
    };
    let domain = domain_from(&args)?;
    let options = options_from(&args)?;
    log::info!(
        "{} {} over {} dimension(s), {:?}",
        if args.maximize { "maximize" } else { "minimize" },
        args.function,
        domain.len(),
        options
    );

    let recorder = EvaluationRecorder::new();
    let objective = recorder.record(function);
    let result = if args.maximize {
        find_max_global(objective, &domain, &options)?
    } else {
        find_min_global(objective, &domain, &options)?
    };

    if let Some(path) = &args.record {
        recorder
            .save_csv(path)
            .with_context(|| format!("cannot write {}", path.display()))?;
    }

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
