//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod simple;
pub mod solve;

pub use analyze::{AnalysisResult, analyze_guess};
pub use benchmark::{BenchmarkResult, run_benchmark};
pub use simple::{MenuChoice, run_simple};
pub use solve::{GuessStep, SolveResult, solve_word};
