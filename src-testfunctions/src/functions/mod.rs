//! Test function implementations organized by category
//!
//! - `unimodal`: Single-optimum functions (bowl-shaped, valley-shaped)
//! - `multimodal`: Multi-optimum functions (periodic, many local minima)
//! - `integer`: Functions meant for integer or mixed-integer domains

pub mod integer;
pub mod multimodal;
pub mod unimodal;

// Re-export all functions for easy access
pub use integer::*;
pub use multimodal::*;
pub use unimodal::*;
