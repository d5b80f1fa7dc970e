//! # primegen-orchestration
//!
//! Strategy selection, run execution, and result cross-validation.

pub mod generator_selection;
pub mod interfaces;
pub mod orchestrator;

pub use interfaces::{GenerationResult, ProgressReporter, ResultPresenter};
pub use orchestrator::{analyze_comparison_results, execute_generations};
