//! Per-file conversion: filter → decode → verify → encode.
//!
//! Decode failures and content/extension mismatches are skips, not errors;
//! only I/O and encode failures propagate.

use crate::context::ConversionContext;
use crate::encode::encode_to_file;
use crate::error::{ConvertError, Result};
use crate::formats::FormatTable;
use crate::options::{ConvertOptions, MismatchPolicy};
use crate::output_path::relocate_output_path;
use crate::walker::FileEntry;
use image::{ImageFormat, ImageReader};
use shared_utils::ErrorCategory;
use std::fmt;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    Directory,
    /// Extension does not resolve to the source format.
    NotSourceFormat,
    /// Content could not be decoded; carries the decoder's message.
    DecodeFailed(String),
    /// Content decoded, but as a different format than the source.
    FormatMismatch { detected: Option<ImageFormat> },
}

impl SkipReason {
    /// Directories and non-matching extensions are not candidates at all.
    pub fn is_candidate(&self) -> bool {
        self.category().is_some()
    }

    /// Problems with a candidate file are recoverable: the walk goes on.
    /// `None` for entries that were never candidates.
    pub fn category(&self) -> Option<ErrorCategory> {
        match self {
            SkipReason::Directory | SkipReason::NotSourceFormat => None,
            SkipReason::DecodeFailed(_) | SkipReason::FormatMismatch { .. } => {
                Some(ErrorCategory::Recoverable)
            }
        }
    }

    /// Whether the skip is listed in the run summary.
    pub fn is_reported(&self, policy: MismatchPolicy) -> bool {
        match self {
            SkipReason::Directory | SkipReason::NotSourceFormat => false,
            SkipReason::DecodeFailed(_) => true,
            SkipReason::FormatMismatch { .. } => policy == MismatchPolicy::Warn,
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Directory => write!(f, "directory"),
            SkipReason::NotSourceFormat => write!(f, "extension is not the source format"),
            SkipReason::DecodeFailed(msg) => write!(f, "could not decode: {}", msg),
            SkipReason::FormatMismatch { detected: Some(format) } => {
                write!(f, "content is {:?}, not the source format", format)
            }
            SkipReason::FormatMismatch { detected: None } => {
                write!(f, "content format is unknown")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Converted { input: PathBuf, output: PathBuf },
    Skipped { path: PathBuf, reason: SkipReason },
}

/// Converts the entries of one walk. Holds only borrowed, read-only state.
pub struct FileConverter<'a> {
    table: &'a FormatTable,
    context: &'a ConversionContext,
    options: &'a ConvertOptions,
    root: &'a Path,
}

impl<'a> FileConverter<'a> {
    pub fn new(
        table: &'a FormatTable,
        context: &'a ConversionContext,
        options: &'a ConvertOptions,
        root: &'a Path,
    ) -> Self {
        Self {
            table,
            context,
            options,
            root,
        }
    }

    pub fn convert(&self, entry: &FileEntry) -> Result<FileOutcome> {
        let path = &entry.path;
        let skipped = |reason: SkipReason| -> Result<FileOutcome> {
            Ok(FileOutcome::Skipped {
                path: path.clone(),
                reason,
            })
        };

        if entry.is_dir {
            return skipped(SkipReason::Directory);
        }
        if !self.table.matches_extension(path, &self.context.source) {
            return skipped(SkipReason::NotSourceFormat);
        }

        let file = File::open(path).map_err(|source| ConvertError::Read {
            path: path.clone(),
            source,
        })?;
        let reader = ImageReader::new(BufReader::new(file))
            .with_guessed_format()
            .map_err(|source| ConvertError::Read {
                path: path.clone(),
                source,
            })?;
        let detected = reader.format();

        let image = match reader.decode() {
            Ok(image) => image,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "skipped: not a decodable image");
                return skipped(SkipReason::DecodeFailed(e.to_string()));
            }
        };

        if detected != Some(self.context.source_format) {
            match self.options.mismatch_policy {
                MismatchPolicy::Skip => debug!(
                    path = %path.display(),
                    detected = ?detected,
                    "skipped: content does not match extension"
                ),
                MismatchPolicy::Warn => warn!(
                    path = %path.display(),
                    detected = ?detected,
                    expected = %self.context.source,
                    "skipped: content does not match extension"
                ),
            }
            return skipped(SkipReason::FormatMismatch { detected });
        }

        let output = self.output_path(path)?;
        encode_to_file(
            &image,
            self.context.target_format,
            &output,
            self.options.jpeg_quality,
        )?;

        info!(input = %path.display(), output = %output.display(), "converted");
        Ok(FileOutcome::Converted {
            input: path.clone(),
            output,
        })
    }

    fn output_path(&self, input: &Path) -> Result<PathBuf> {
        let sibling = self.context.output_path_for(input);
        let Some(output_dir) = &self.options.output_dir else {
            return Ok(sibling);
        };

        let output = relocate_output_path(&sibling, self.root, output_dir);
        if let Some(parent) = output.parent() {
            fs::create_dir_all(parent).map_err(|source| ConvertError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, Rgb, RgbImage};
    use tempfile::TempDir;

    struct Fixture {
        temp: TempDir,
        table: FormatTable,
        context: ConversionContext,
    }

    impl Fixture {
        fn new(from: &str, to: &str) -> Self {
            let table = FormatTable::builtin();
            let context = ConversionContext::new(&table, from, to).unwrap();
            Self {
                temp: TempDir::new().unwrap(),
                table,
                context,
            }
        }

        fn write_image(&self, name: &str, format: ImageFormat) -> PathBuf {
            let path = self.temp.path().join(name);
            let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(4, 4, Rgb([200, 10, 10])));
            img.save_with_format(&path, format).unwrap();
            path
        }

        fn convert(&self, path: &Path, options: &ConvertOptions) -> Result<FileOutcome> {
            let converter = FileConverter::new(&self.table, &self.context, options, self.temp.path());
            converter.convert(&FileEntry {
                path: path.to_path_buf(),
                is_dir: path.is_dir(),
            })
        }
    }

    #[test]
    fn test_converts_matching_file_next_to_input() {
        let fx = Fixture::new("jpeg", "png");
        let input = fx.write_image("hoge.jpg", ImageFormat::Jpeg);

        let outcome = fx.convert(&input, &ConvertOptions::default()).unwrap();

        let expected = fx.temp.path().join("hoge.png");
        assert_eq!(
            outcome,
            FileOutcome::Converted {
                input: input.clone(),
                output: expected.clone()
            }
        );
        assert_eq!(image::open(&expected).unwrap().width(), 4);
        assert!(input.exists());
    }

    #[test]
    fn test_directory_and_other_extensions_are_skipped() {
        let fx = Fixture::new("jpeg", "png");
        let other = fx.write_image("fuga.png", ImageFormat::Png);

        let outcome = fx.convert(fx.temp.path(), &ConvertOptions::default()).unwrap();
        assert!(matches!(
            outcome,
            FileOutcome::Skipped { reason: SkipReason::Directory, .. }
        ));

        let outcome = fx.convert(&other, &ConvertOptions::default()).unwrap();
        assert!(matches!(
            outcome,
            FileOutcome::Skipped { reason: SkipReason::NotSourceFormat, .. }
        ));
    }

    #[test]
    fn test_corrupt_file_is_skipped_not_fatal() {
        let fx = Fixture::new("jpeg", "png");
        let broken = fx.temp.path().join("broken.jpg");
        fs::write(&broken, b"definitely not a jpeg").unwrap();

        let outcome = fx.convert(&broken, &ConvertOptions::default()).unwrap();
        match outcome {
            FileOutcome::Skipped {
                reason: SkipReason::DecodeFailed(_),
                path,
            } => assert_eq!(path, broken),
            other => panic!("unexpected outcome: {other:?}"),
        }
        assert!(!fx.temp.path().join("broken.png").exists());
    }

    #[test]
    fn test_content_mismatch_is_left_alone() {
        let fx = Fixture::new("jpeg", "png");
        let disguised = fx.write_image("disguised.jpg", ImageFormat::Png);

        for policy in [MismatchPolicy::Skip, MismatchPolicy::Warn] {
            let options = ConvertOptions::new().with_mismatch_policy(policy);
            let outcome = fx.convert(&disguised, &options).unwrap();
            assert_eq!(
                outcome,
                FileOutcome::Skipped {
                    path: disguised.clone(),
                    reason: SkipReason::FormatMismatch {
                        detected: Some(ImageFormat::Png)
                    },
                }
            );
        }
        assert!(!fx.temp.path().join("disguised.png").exists());
    }

    #[test]
    fn test_output_dir_mirrors_tree() {
        let fx = Fixture::new("png", "gif");
        fs::create_dir_all(fx.temp.path().join("nested")).unwrap();
        let input = fx.write_image("nested/piyo.png", ImageFormat::Png);
        let out = TempDir::new().unwrap();

        let options = ConvertOptions::new().with_output_dir(out.path());
        let outcome = fx.convert(&input, &options).unwrap();

        let expected = out.path().join("nested").join("piyo.gif");
        assert_eq!(
            outcome,
            FileOutcome::Converted {
                input,
                output: expected.clone()
            }
        );
        assert!(expected.exists());
        assert!(!fx.temp.path().join("nested/piyo.gif").exists());
    }

    #[test]
    fn test_skip_reason_candidates() {
        assert!(!SkipReason::Directory.is_candidate());
        assert!(!SkipReason::NotSourceFormat.is_candidate());
        assert!(SkipReason::DecodeFailed("x".into()).is_candidate());
        assert!(SkipReason::FormatMismatch { detected: None }.is_candidate());
    }

    #[test]
    fn test_skip_reason_categories() {
        assert_eq!(SkipReason::Directory.category(), None);
        assert_eq!(SkipReason::NotSourceFormat.category(), None);

        let decode = SkipReason::DecodeFailed("bad header".into());
        let mismatch = SkipReason::FormatMismatch {
            detected: Some(ImageFormat::Png),
        };
        for reason in [&decode, &mismatch] {
            let category = reason.category().unwrap();
            assert_eq!(category, ErrorCategory::Recoverable);
            assert!(!category.is_fatal());
        }

        assert!(decode.is_reported(MismatchPolicy::Skip));
        assert!(!mismatch.is_reported(MismatchPolicy::Skip));
        assert!(mismatch.is_reported(MismatchPolicy::Warn));
        assert!(!SkipReason::NotSourceFormat.is_reported(MismatchPolicy::Warn));
    }
}
