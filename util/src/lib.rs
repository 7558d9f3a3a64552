use std::io::{self, Read};

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Installs a stderr `tracing` subscriber filtered by `RUST_LOG` (default `warn`),
/// leaving stdout for the answer.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Reads everything from `reader` before any of it gets split into lines.
/// Bytes that are not valid UTF-8 become U+FFFD instead of failing the read.
pub fn read_input<R: Read>(mut reader: R) -> Result<String> {
    let mut bytes = Vec::new();
    let n = reader
        .read_to_end(&mut bytes)
        .context("failed to read input")?;

    tracing::debug!(bytes = n, "read input");

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

pub fn read_input_as_string() -> Result<String> {
    read_input(io::stdin().lock())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenPipe;

    impl Read for BrokenPipe {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn read_input_keeps_all_lines() {
        let res = read_input("1abc2\ntreb7uchet\n".as_bytes());
        assert!(res.is_ok());
        assert_eq!(res.unwrap().lines().collect::<Vec<_>>(), ["1abc2", "treb7uchet"]);
    }

    #[test]
    fn read_input_replaces_invalid_utf8() {
        let res = read_input(&[0x31, 0xff, 0x32, b'\n', 0x66, 0x6f, 0x75, 0x72][..]);
        assert!(res.is_ok());
        assert_eq!(
            res.unwrap().lines().collect::<Vec<_>>(),
            ["1\u{fffd}2", "four"]
        );
    }

    #[test]
    fn read_input_fails_on_io_error() {
        let res = read_input(BrokenPipe);
        assert!(res.is_err());
        assert_eq!(res.unwrap_err().to_string(), "failed to read input");
    }
}
