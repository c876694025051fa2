pub mod layout;

use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

use layout::{BitmapInfoHeader, IconDir, IconDirEntry, PixelBuffer, ICON_FILE_LEN};

/// Name of the emitted file inside the output directory.
pub const ICON_FILENAME: &str = "icon.ico";

/// Encode the placeholder icon.
///
/// Records are concatenated in file order: directory header, directory
/// entry, bitmap header, pixel data. The result is always the same
/// `ICON_FILE_LEN` bytes.
pub fn encode() -> Vec<u8> {
    let mut out = Vec::with_capacity(ICON_FILE_LEN);
    IconDir::single_icon().write_to(&mut out);
    IconDirEntry::placeholder().write_to(&mut out);
    BitmapInfoHeader::placeholder().write_to(&mut out);
    PixelBuffer::placeholder().write_to(&mut out);
    debug_assert_eq!(out.len(), ICON_FILE_LEN);
    out
}

/// Error type for icon emission and checking.
#[derive(Debug)]
pub enum IconError {
    /// The running executable's directory could not be determined.
    ExecutableLocation { source: io::Error },
    /// The output directory is missing or not writable.
    OutputDir { path: PathBuf, source: io::Error },
    /// Writing, flushing or renaming the output file failed.
    Write { path: PathBuf, source: io::Error },
    /// An existing icon file could not be read.
    Read { path: PathBuf, source: io::Error },
}

impl fmt::Display for IconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IconError::ExecutableLocation { source } => {
                write!(f, "failed to locate executable directory: {}", source)
            }
            IconError::OutputDir { path, source } => {
                write!(f, "output directory '{}' unavailable: {}", path.display(), source)
            }
            IconError::Write { path, source } => {
                write!(f, "failed to write '{}': {}", path.display(), source)
            }
            IconError::Read { path, source } => {
                write!(f, "failed to read '{}': {}", path.display(), source)
            }
        }
    }
}

impl Error for IconError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            IconError::ExecutableLocation { source }
            | IconError::OutputDir { source, .. }
            | IconError::Write { source, .. }
            | IconError::Read { source, .. } => Some(source),
        }
    }
}
