use std::fs;
use std::path::{Path, PathBuf};

use crate::error::PagegrabError;

/// Whether there is anything worth exporting.
pub fn validate_content(text: &str) -> bool {
    !text.trim().is_empty()
}

/// Appends `.txt` unless the path already ends with it.
pub fn ensure_txt_extension(path: &str) -> PathBuf {
    if path.ends_with(".txt") {
        PathBuf::from(path)
    } else {
        PathBuf::from(format!("{path}.txt"))
    }
}

/// Writes `content` to `path` as UTF-8, replacing any existing file.
pub fn write_export(path: &Path, content: &str) -> Result<(), PagegrabError> {
    fs::write(path, content)?;
    tracing::info!("exported {} bytes to {}", content.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_content() {
        assert!(!validate_content(""));
        assert!(!validate_content(" \n\t "));
        assert!(validate_content("<html></html>"));
    }

    #[test]
    fn appends_txt_extension() {
        assert_eq!(ensure_txt_extension("out"), PathBuf::from("out.txt"));
        assert_eq!(
            ensure_txt_extension("dump.html"),
            PathBuf::from("dump.html.txt")
        );
    }

    #[test]
    fn keeps_existing_txt_extension() {
        assert_eq!(ensure_txt_extension("notes.txt"), PathBuf::from("notes.txt"));
    }

    #[test]
    fn writes_content_verbatim() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("page.txt");
        write_export(&path, "línea one\nline two\n").expect("write");
        assert_eq!(
            fs::read_to_string(&path).expect("read back"),
            "línea one\nline two\n"
        );
    }

    #[test]
    fn overwrites_existing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("page.txt");
        fs::write(&path, "stale").expect("seed");
        write_export(&path, "fresh").expect("write");
        assert_eq!(fs::read_to_string(&path).expect("read back"), "fresh");
    }
}
