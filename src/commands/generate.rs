use std::path::{self, Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info};

use crate::icon::{self, IconError, ICON_FILENAME};
use crate::utils::file_ops::{commit_staging_file, create_staging_file, executable_dir};
use crate::utils::hash::hash_bytes;

/// Summary of a successful run, printed as JSON with `--json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerateReport {
    pub path: PathBuf,
    pub size: usize,
    pub sha256: String,
}

/// Write the placeholder icon as `icon.ico`.
///
/// With no `output_dir` the file goes next to the running executable.
/// The write is staged in a temp file in the same directory and renamed
/// into place, so a failure leaves no `icon.ico` behind.
pub fn run(output_dir: Option<&Path>) -> Result<GenerateReport, IconError> {
    let dir = match output_dir {
        Some(dir) => dir.to_path_buf(),
        None => executable_dir().map_err(|source| IconError::ExecutableLocation { source })?,
    };
    let dir = path::absolute(&dir).map_err(|source| IconError::OutputDir {
        path: dir.clone(),
        source,
    })?;
    let dest = dir.join(ICON_FILENAME);

    let bytes = icon::encode();
    debug!(len = bytes.len(), "encoded icon");

    let staged = create_staging_file(&dir).map_err(|source| IconError::OutputDir {
        path: dir.clone(),
        source,
    })?;
    commit_staging_file(staged, &bytes, &dest).map_err(|source| IconError::Write {
        path: dest.clone(),
        source,
    })?;

    info!(path = %dest.display(), "wrote icon");

    Ok(GenerateReport {
        path: dest,
        size: bytes.len(),
        sha256: hash_bytes(&bytes),
    })
}
