//! Per-run conversion options.

use std::path::{Path, PathBuf};

/// What to do with a file whose content is not in the source format its
/// extension claims (e.g. a PNG named `photo.jpg`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MismatchPolicy {
    /// Leave the file alone without telling anyone.
    #[default]
    Skip,
    /// Leave the file alone and emit a warning.
    Warn,
}

/// JPEG quality used when no other value is given.
pub const DEFAULT_JPEG_QUALITY: u8 = 75;

#[derive(Debug, Clone)]
pub struct ConvertOptions {
    pub mismatch_policy: MismatchPolicy,
    /// 1-100, only used when the target is JPEG.
    pub jpeg_quality: u8,
    /// Write outputs under this directory instead of next to their inputs.
    pub output_dir: Option<PathBuf>,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            mismatch_policy: MismatchPolicy::Skip,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            output_dir: None,
        }
    }
}

impl ConvertOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mismatch_policy(mut self, policy: MismatchPolicy) -> Self {
        self.mismatch_policy = policy;
        self
    }

    /// Clamped to 1-100.
    pub fn with_jpeg_quality(mut self, quality: u8) -> Self {
        self.jpeg_quality = quality.clamp(1, 100);
        self
    }

    pub fn with_output_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.output_dir = Some(dir.as_ref().to_path_buf());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ConvertOptions::default();
        assert_eq!(options.mismatch_policy, MismatchPolicy::Skip);
        assert_eq!(options.jpeg_quality, 75);
        assert!(options.output_dir.is_none());
    }

    #[test]
    fn test_builder() {
        let options = ConvertOptions::new()
            .with_mismatch_policy(MismatchPolicy::Warn)
            .with_jpeg_quality(0)
            .with_output_dir("/out");
        assert_eq!(options.mismatch_policy, MismatchPolicy::Warn);
        assert_eq!(options.jpeg_quality, 1);
        assert_eq!(options.output_dir, Some(PathBuf::from("/out")));

        assert_eq!(ConvertOptions::new().with_jpeg_quality(200).jpeg_quality, 100);
    }
}
