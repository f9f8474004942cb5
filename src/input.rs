// Size-limited input reading for the CLI.
//
// Text is read as raw bytes up to one byte past the configured limit, so an
// oversized input is rejected without buffering the whole thing.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

/// Read a file, refusing anything larger than `max_bytes`.
pub fn read_file(path: &Path, max_bytes: usize) -> Result<String> {
    let file =
        File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let content = read_limited(file, max_bytes)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    debug!(path = %path.display(), bytes = content.len(), "Read input file");
    Ok(content)
}

/// Read UTF-8 text from any reader. Exactly `max_bytes` is accepted.
pub fn read_limited<R: Read>(reader: R, max_bytes: usize) -> Result<String> {
    let mut buf = Vec::new();
    reader.take(max_bytes as u64 + 1).read_to_end(&mut buf)?;
    if buf.len() > max_bytes {
        anyhow::bail!(
            "Input is larger than {max_bytes} bytes. Raise DISTORTION_MAX_INPUT_BYTES to allow it."
        );
    }
    String::from_utf8(buf).context("Input is not valid UTF-8")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn input_at_the_limit_is_accepted() {
        let text = read_limited(Cursor::new("abcd"), 4).unwrap();
        assert_eq!(text, "abcd");
    }

    #[test]
    fn input_one_byte_over_is_rejected() {
        let err = read_limited(Cursor::new("abcde"), 4).unwrap_err();
        assert!(err.to_string().contains("larger than 4 bytes"), "{err}");
        assert!(err.to_string().contains("DISTORTION_MAX_INPUT_BYTES"));
    }

    #[test]
    fn limit_counts_bytes_not_characters() {
        // "é" is two bytes
        assert!(read_limited(Cursor::new("éé"), 3).is_err());
        assert_eq!(read_limited(Cursor::new("éé"), 4).unwrap(), "éé");
    }

    #[test]
    fn invalid_utf8_is_an_error() {
        let err = read_limited(Cursor::new(vec![b'o', b'k', 0xff, 0xfe]), 16).unwrap_err();
        assert!(err.to_string().contains("not valid UTF-8"), "{err}");
    }

    #[test]
    fn empty_input_is_fine() {
        assert_eq!(read_limited(Cursor::new(""), 1).unwrap(), "");
    }

    #[test]
    fn missing_file_names_the_path() {
        let path = Path::new("/nonexistent/distortion-lens/input.txt");
        let err = read_file(path, 1024).unwrap_err();
        assert!(err.to_string().contains("input.txt"), "{err}");
    }
}
