//! Recursive image format conversion.
//!
//! Walks a directory tree and re-encodes every image of one format
//! (JPEG, PNG, GIF) into another, writing the result next to the input
//! with the target format's extension.

pub mod context;
pub mod converter;
pub mod encode;
pub mod error;
pub mod formats;
pub mod options;
pub mod output_path;
pub mod pipeline;
pub mod walker;

pub use context::ConversionContext;
pub use converter::{FileConverter, FileOutcome, SkipReason};
pub use error::{ConvertError, Result};
pub use formats::{FormatId, FormatTable};
pub use options::{ConvertOptions, MismatchPolicy, DEFAULT_JPEG_QUALITY};
pub use output_path::{generate_output_path, relocate_output_path};
pub use pipeline::{convert_directory, run};
pub use walker::{walk, FileEntry};

pub use shared_utils::BatchResult;
