//! Shared Utilities for the img_conv tools
//!
//! Cross-cutting pieces that the converter binary and library both lean on:
//! - Logging setup (stderr + rolling log file)
//! - Batch bookkeeping for per-file outcomes
//! - Summary reporting
//! - Error categories (recoverable vs fatal)

pub mod batch;
pub mod error_handler;
pub mod logging;
pub mod report;

pub use batch::BatchResult;
pub use error_handler::ErrorCategory;
pub use logging::{init_logging, LogConfig};
pub use report::{format_duration, print_summary_report};
