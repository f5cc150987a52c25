use anyhow::{Context, Result, bail};
use std::io::{self, Read};

// Matches the request size the service accepts before answering 413.
const MAX_INPUT_SIZE: usize = 128 * 1024;

pub struct InputReader;

impl InputReader {
    /// Returns the positional argument when given, the whole of stdin
    /// otherwise.
    pub fn read(text: Option<String>) -> Result<String> {
        text.map_or_else(Self::read_stdin, Ok)
    }

    #[allow(clippy::significant_drop_tightening)]
    fn read_stdin() -> Result<String> {
        let mut buffer = Vec::new();
        let mut chunk = [0u8; 8192];
        let mut stdin = io::stdin().lock();

        loop {
            let bytes_read = stdin
                .read(&mut chunk)
                .context("Failed to read from stdin")?;

            if bytes_read == 0 {
                break;
            }

            buffer.extend_from_slice(&chunk[..bytes_read]);

            if buffer.len() > MAX_INPUT_SIZE {
                bail!(
                    "Error: Input size ({:.1} KB) exceeds maximum allowed size (128 KB).\n\n\
                     Consider splitting the input into smaller parts.",
                    buffer.len() as f64 / 1024.0
                );
            }
        }

        String::from_utf8(buffer).context("Input is not valid UTF-8")
    }
}
