//! Conversion context: the source and target formats of one run.

use crate::error::{ConvertError, Result};
use crate::formats::{FormatId, FormatTable};
use crate::output_path::generate_output_path;
use image::ImageFormat;
use std::path::{Path, PathBuf};

/// Resolved, validated source/target formats. Read-only once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionContext {
    pub source: FormatId,
    pub target: FormatId,
    pub source_format: ImageFormat,
    pub target_format: ImageFormat,
    /// Preferred extension of `target`, used for output paths.
    pub target_extension: String,
}

impl ConversionContext {
    /// Resolve `from` and `to` against `table`.
    ///
    /// Fails with `UnsupportedFormat` when a name does not resolve or the
    /// codecs cannot decode the source / encode the target, and with
    /// `IdenticalFormats` when both resolve to the same identifier.
    pub fn new(table: &FormatTable, from: &str, to: &str) -> Result<Self> {
        let unsupported = |input: &str| ConvertError::UnsupportedFormat {
            input: input.to_string(),
        };

        let source = table.resolve(from).ok_or_else(|| unsupported(from))?;
        let target = table.resolve(to).ok_or_else(|| unsupported(to))?;

        if source == target {
            return Err(ConvertError::IdenticalFormats {
                format: source.to_string(),
            });
        }

        let source_format = table
            .image_format(source)
            .filter(ImageFormat::reading_enabled)
            .ok_or_else(|| unsupported(from))?;
        let target_format = table
            .image_format(target)
            .filter(ImageFormat::writing_enabled)
            .ok_or_else(|| unsupported(to))?;
        let target_extension = table
            .preferred_extension(target)
            .ok_or_else(|| unsupported(to))?
            .to_string();

        Ok(Self {
            source: source.clone(),
            target: target.clone(),
            source_format,
            target_format,
            target_extension,
        })
    }

    pub fn output_path_for(&self, input: &Path) -> PathBuf {
        generate_output_path(input, &self.target_extension)
    }
}
