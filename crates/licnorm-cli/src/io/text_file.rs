// crates/licnorm-cli/src/io/text_file.rs

use std::path::Path;

use anyhow::{Context, Result};

/// Read the whole file as UTF-8 text.
pub fn read_text(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("read {}", path.display()))
}

/// Truncate and overwrite. Not atomic: a failed write can leave the file short.
pub fn write_text(path: &Path, text: &str) -> Result<()> {
    std::fs::write(path, text).with_context(|| format!("write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_failure_after_read_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let bundle = dir.path().join("bundle.js");
        std::fs::write(&bundle, "/** x */\n").unwrap();
        let text = read_text(&bundle).unwrap();

        // A regular file used as a directory fails with ENOTDIR, even as root.
        let target = bundle.join("out.js");
        let err = write_text(&target, &text).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.starts_with("write "), "{msg}");
        assert!(msg.contains("out.js"), "{msg}");
        assert_eq!(std::fs::read_to_string(&bundle).unwrap(), "/** x */\n");
    }

    #[test]
    fn non_utf8_input_fails_on_read() {
        let dir = tempfile::tempdir().unwrap();
        let bundle = dir.path().join("bundle.js");
        std::fs::write(&bundle, [0x2f, 0x2a, 0xff, 0xfe]).unwrap();

        let err = read_text(&bundle).unwrap_err();
        assert!(format!("{err:#}").starts_with("read "));
    }
}
