//! # primegen-cli
//!
//! Report rendering, progress display, and shell completion.

pub mod completion;
pub mod output;
pub mod presenter;
pub mod progress;
pub mod ui;

pub use output::OutputFormat;
pub use presenter::CLIResultPresenter;
pub use progress::CLIProgressReporter;
