use std::env;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

/// Directory containing the running executable.
pub fn executable_dir() -> io::Result<PathBuf> {
    let exe = env::current_exe()?;
    exe.parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "executable has no parent directory"))
}

/// Create a temp file inside `dir` for a later atomic rename.
///
/// Fails if `dir` does not exist or is not writable.
pub fn create_staging_file(dir: &Path) -> io::Result<NamedTempFile> {
    tempfile::Builder::new()
        .prefix(".icon-")
        .suffix(".tmp")
        .tempfile_in(dir)
}

/// Write `data` into the staged file and rename it over `dest`.
///
/// The staged file must live in the same directory as `dest`. On error the
/// staged file is dropped, which removes it; `dest` is never left half-written.
pub fn commit_staging_file(mut staged: NamedTempFile, data: &[u8], dest: &Path) -> io::Result<()> {
    staged.write_all(data)?;
    staged.as_file().sync_all()?;
    debug!(staged = %staged.path().display(), dest = %dest.display(), "renaming staged file");
    staged.persist(dest).map_err(|e| e.error)?;
    Ok(())
}
