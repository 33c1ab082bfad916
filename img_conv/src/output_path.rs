//! Output path generation.

use std::path::{Path, PathBuf};

/// Replace the extension of `input` (including its dot) with `extension`.
///
/// Existing files at the returned path are overwritten by the converter.
pub fn generate_output_path(input: &Path, extension: &str) -> PathBuf {
    input.with_extension(extension)
}

/// Re-root `output` under `output_dir`, keeping its position relative to
/// the walk `root`. Paths outside `root` keep only their file name.
pub fn relocate_output_path(output: &Path, root: &Path, output_dir: &Path) -> PathBuf {
    match output.strip_prefix(root) {
        Ok(relative) => output_dir.join(relative),
        Err(_) => output_dir.join(output.file_name().unwrap_or(output.as_os_str())),
    }
}
