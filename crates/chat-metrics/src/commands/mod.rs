//! Command implementations.

use std::io::Read;

use anyhow::Context;
use camino::Utf8Path;

pub mod analyze;
pub mod info;
#[cfg(feature = "mcp")]
pub mod serve;

/// Read a file and validate its size against the configured limit.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = metadata.len() as usize;
        if size > max {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    let content = std::fs::read_to_string(path.as_std_path())
        .with_context(|| format!("failed to read {path}"))?;
    Ok(content)
}

/// Read standard input, stopping one byte past the configured limit.
pub fn read_stdin(max_bytes: Option<usize>) -> anyhow::Result<String> {
    read_limited(std::io::stdin().lock(), max_bytes, "stdin")
}

fn read_limited<R: Read>(reader: R, max_bytes: Option<usize>, label: &str) -> anyhow::Result<String> {
    let mut buf = Vec::new();
    match max_bytes {
        Some(max) => {
            reader
                .take(max as u64 + 1)
                .read_to_end(&mut buf)
                .with_context(|| format!("failed to read {label}"))?;
            if buf.len() > max {
                anyhow::bail!("input too large: {label} exceeds {max} bytes");
            }
        }
        None => {
            let mut reader = reader;
            reader
                .read_to_end(&mut buf)
                .with_context(|| format!("failed to read {label}"))?;
        }
    }
    String::from_utf8(buf).with_context(|| format!("{label} is not valid UTF-8"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limited_read_accepts_input_at_limit() {
        let text = read_limited("12345".as_bytes(), Some(5), "test").unwrap();
        assert_eq!(text, "12345");
    }

    #[test]
    fn limited_read_rejects_input_over_limit() {
        let err = read_limited("123456".as_bytes(), Some(5), "test").unwrap_err();
        assert!(err.to_string().contains("input too large"));
    }

    #[test]
    fn unlimited_read() {
        let text = read_limited("anything".as_bytes(), None, "test").unwrap();
        assert_eq!(text, "anything");
    }

    #[test]
    fn invalid_utf8_is_an_error() {
        let bytes: &[u8] = &[0xff, 0xfe];
        assert!(read_limited(bytes, None, "test").is_err());
    }

    #[test]
    fn file_over_limit_is_rejected() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(tmp.path(), "0123456789").unwrap();
        let path = Utf8Path::from_path(tmp.path()).unwrap();

        assert!(read_input_file(path, Some(4)).is_err());
        assert_eq!(read_input_file(path, Some(10)).unwrap(), "0123456789");
    }
}
