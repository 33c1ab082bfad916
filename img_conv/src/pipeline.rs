//! Run driver: validate configuration, walk the tree, convert each entry.

use crate::context::ConversionContext;
use crate::converter::{FileConverter, FileOutcome};
use crate::error::{ConvertError, Result};
use crate::formats::FormatTable;
use crate::options::ConvertOptions;
use crate::walker::walk;
use shared_utils::BatchResult;
use std::path::Path;
use tracing::{debug, info};

/// Convert every `from` image under `dir` into `to` using the built-in
/// format table.
///
/// All configuration checks happen before the walk starts. The first fatal
/// error stops the run; outputs already written stay on disk.
pub fn convert_directory(
    dir: &Path,
    from: &str,
    to: &str,
    options: &ConvertOptions,
) -> Result<BatchResult> {
    if dir.as_os_str().is_empty() {
        return Err(ConvertError::MissingDirectory);
    }

    let table = FormatTable::builtin();
    let context = ConversionContext::new(&table, from, to)?;
    run(dir, &table, &context, options)
}

/// Walk `root` with an already validated context.
pub fn run(
    root: &Path,
    table: &FormatTable,
    context: &ConversionContext,
    options: &ConvertOptions,
) -> Result<BatchResult> {
    info!(
        root = %root.display(),
        from = %context.source,
        to = %context.target,
        "starting conversion"
    );

    let converter = FileConverter::new(table, context, options, root);
    let mut batch = BatchResult::new();

    for entry in walk(root) {
        let entry = entry?;
        match converter.convert(&entry)? {
            FileOutcome::Converted { .. } => batch.success(),
            FileOutcome::Skipped { path, reason } if reason.is_candidate() => {
                if reason.is_reported(options.mismatch_policy) {
                    batch.skip_with_notice(path, reason.to_string());
                } else {
                    batch.skip();
                }
            }
            FileOutcome::Skipped { .. } => {}
        }
    }

    debug!(
        converted = batch.succeeded,
        skipped = batch.skipped,
        "conversion finished"
    );
    Ok(batch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_directory_is_rejected_first() {
        let err = convert_directory(Path::new(""), "rb", "rb", &ConvertOptions::default())
            .unwrap_err();
        assert!(matches!(err, ConvertError::MissingDirectory));
    }

    #[test]
    fn test_configuration_errors_precede_traversal() {
        let missing = Path::new("/definitely/not/here");
        let options = ConvertOptions::default();

        assert!(matches!(
            convert_directory(missing, "jpeg", "jpg", &options),
            Err(ConvertError::IdenticalFormats { .. })
        ));
        assert!(matches!(
            convert_directory(missing, "rb", "png", &options),
            Err(ConvertError::UnsupportedFormat { .. })
        ));
        assert!(matches!(
            convert_directory(missing, "jpeg", "png", &options),
            Err(ConvertError::Walk(_))
        ));
    }
}
