//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_analysis_result, print_benchmark_result, print_candidates, print_guess_outcome,
    print_history, print_solve_result, print_status,
};
pub use formatters::format_guess_result;
