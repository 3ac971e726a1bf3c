use std::fs;
use std::path::{Path, PathBuf};

use super::errors::ExportError;

/// Write `contents` to `dir/file_name`, creating `dir` when missing.
pub(crate) fn write_export(
    dir: &Path,
    file_name: &str,
    contents: &str,
) -> Result<PathBuf, ExportError> {
    fs::create_dir_all(dir)?;
    let path = dir.join(file_name);
    fs::write(&path, contents.as_bytes())?;
    Ok(path)
}
