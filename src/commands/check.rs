use std::fs;
use std::path::Path;

use tracing::debug;

use crate::icon::{self, IconError};
use crate::utils::hash::hash_bytes;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckResult {
    Match,
    NoMatch {
        expected: String,
        actual: String,
        expected_len: usize,
        actual_len: usize,
        /// Offset of the first differing byte, or where the shorter input ends.
        first_difference: usize,
    },
}

/// Compare an existing file against the bytes the emitter produces.
pub fn run(file: &Path) -> Result<CheckResult, IconError> {
    let data = fs::read(file).map_err(|source| IconError::Read {
        path: file.to_path_buf(),
        source,
    })?;
    let reference = icon::encode();
    debug!(file = %file.display(), len = data.len(), "comparing icon");

    if data == reference {
        return Ok(CheckResult::Match);
    }

    let expected = hash_bytes(&reference);
    let actual = hash_bytes(&data);
    let first_difference = reference
        .iter()
        .zip(&data)
        .position(|(a, b)| a != b)
        .unwrap_or_else(|| reference.len().min(data.len()));

    Ok(CheckResult::NoMatch {
        expected,
        actual,
        expected_len: reference.len(),
        actual_len: data.len(),
        first_difference,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn generated_icon_matches() {
        let dir = tempdir().unwrap();
        let report = crate::commands::generate::run(Some(dir.path())).unwrap();

        assert_eq!(run(&report.path).unwrap(), CheckResult::Match);
    }

    #[test]
    fn modified_byte_is_located() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("icon.ico");
        let mut data = icon::encode();
        data[70] = 0x00;
        fs::write(&path, &data).unwrap();

        match run(&path).unwrap() {
            CheckResult::NoMatch {
                first_difference,
                actual_len,
                ..
            } => {
                assert_eq!(first_difference, 70);
                assert_eq!(actual_len, 1086);
            }
            CheckResult::Match => panic!("expected mismatch"),
        }
    }

    #[test]
    fn truncated_file_reports_end() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("icon.ico");
        fs::write(&path, &icon::encode()[..100]).unwrap();

        match run(&path).unwrap() {
            CheckResult::NoMatch {
                first_difference,
                expected_len,
                actual_len,
                ..
            } => {
                assert_eq!(first_difference, 100);
                assert_eq!(expected_len, 1086);
                assert_eq!(actual_len, 100);
            }
            CheckResult::Match => panic!("expected mismatch"),
        }
    }

    #[test]
    fn trailing_bytes_are_a_mismatch() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("icon.ico");
        let mut data = icon::encode();
        data.extend_from_slice(b"extra");
        fs::write(&path, &data).unwrap();

        match run(&path).unwrap() {
            CheckResult::NoMatch {
                expected,
                actual,
                first_difference,
                actual_len,
                ..
            } => {
                assert_eq!(expected, hash_bytes(&icon::encode()));
                assert_eq!(actual, hash_bytes(&data));
                assert_eq!(first_difference, 1086);
                assert_eq!(actual_len, 1091);
            }
            CheckResult::Match => panic!("expected mismatch"),
        }
    }

    #[test]
    fn missing_file_errors() {
        let result = run(Path::new("/nonexistent/icon.ico"));
        assert!(matches!(result, Err(IconError::Read { .. })));
    }
}
