use std::path::Path;

use crate::error::{Error, Result};

pub fn create_dir_all<P: AsRef<Path>>(dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    std::fs::create_dir_all(dest_path).map_err(|e| Error::fs(dest_path, e))
}

/// Writes `content` to `dest_path`, creating missing parent directories.
///
/// An existing file is truncated and overwritten. The write is not atomic.
pub fn write_file<P: AsRef<Path>>(content: &str, dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    if let Some(parent) = dest_path.parent() {
        if !parent.as_os_str().is_empty() {
            create_dir_all(parent)?;
        }
    }
    std::fs::write(dest_path, content).map_err(|e| Error::fs(dest_path, e))
}

pub fn read_file<P: AsRef<Path>>(source_path: P) -> Result<String> {
    let source_path = source_path.as_ref();
    std::fs::read_to_string(source_path).map_err(|e| Error::fs(source_path, e))
}

pub fn read_from(mut reader: impl std::io::Read) -> Result<String> {
    let mut buf = String::new();
    reader.read_to_string(&mut buf)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_file_creates_missing_parents() {
        let tmp = tempfile::tempdir().unwrap();
        let target = tmp.path().join("a/b/c/out.py");
        write_file("print('hi')\n", &target).unwrap();
        assert_eq!(std::fs::read_to_string(&target).unwrap(), "print('hi')\n");
    }

    #[test]
    fn write_file_overwrites_existing_content() {
        let tmp = tempfile::tempdir().unwrap();
        let target = tmp.path().join("out.py");
        write_file("a much longer first version\n", &target).unwrap();
        write_file("short\n", &target).unwrap();
        assert_eq!(std::fs::read_to_string(&target).unwrap(), "short\n");
    }

    #[test]
    fn read_file_reports_the_missing_path() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("nope.py");
        let err = read_file(&missing).unwrap_err();
        assert!(matches!(err, Error::FileSystemError { .. }));
        assert!(err.to_string().contains("nope.py"));
    }

    #[test]
    fn read_from_collects_reader() {
        let text = read_from("{\"a\": 1}".as_bytes()).unwrap();
        assert_eq!(text, "{\"a\": 1}");
    }
}
