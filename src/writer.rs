use crate::error::{Error, Result};
use crate::renderer::Rendered;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Joins `output` onto `base_dir` and creates any missing parent directories.
pub fn prepare_destination<P: AsRef<Path>>(output: &str, base_dir: P) -> Result<PathBuf> {
    let dest_path = base_dir.as_ref().join(output);
    if let Some(parent) = dest_path.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::WriteError {
            path: parent.display().to_string(),
            source: e,
        })?;
    }
    debug!("Prepared destination path: {}", dest_path.display());
    Ok(dest_path)
}

/// Writes rendered content below `base_dir`, overwriting existing files.
/// Returns the path written.
pub fn write_rendered<P: AsRef<Path>>(rendered: &Rendered, base_dir: P) -> Result<PathBuf> {
    let dest_path = prepare_destination(&rendered.path, base_dir)?;
    fs::write(&dest_path, &rendered.content).map_err(|e| Error::WriteError {
        path: dest_path.display().to_string(),
        source: e,
    })?;
    Ok(dest_path)
}
