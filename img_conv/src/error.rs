//! Error type for a conversion run.
//!
//! Only fatal conditions are errors. Files that cannot be decoded or whose
//! content disagrees with their extension are reported as
//! [`SkipReason`](crate::converter::SkipReason) instead.

use shared_utils::ErrorCategory;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("directory name is not provided")]
    MissingDirectory,

    #[error("image format is not supported: {input:?}")]
    UnsupportedFormat { input: String },

    #[error("image formats before and after conversion are the same: {format}")]
    IdenticalFormats { format: String },

    #[error("extension {alias:?} is already registered for {existing}, cannot add it to {format}")]
    DuplicateAlias {
        alias: String,
        existing: String,
        format: String,
    },

    #[error("failed to walk directory tree: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

impl ConvertError {
    /// Configuration errors are raised before any file is touched.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            ConvertError::MissingDirectory
                | ConvertError::UnsupportedFormat { .. }
                | ConvertError::IdenticalFormats { .. }
                | ConvertError::DuplicateAlias { .. }
        )
    }

    /// Every `ConvertError` aborts the run. Recoverable per-file problems are
    /// [`SkipReason`](crate::converter::SkipReason)s, see its `category()`.
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::Fatal
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
