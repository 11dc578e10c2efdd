//! Byte-based line reading for helper output.
//!
//! `BufRead::lines()` stops at the first invalid UTF-8 sequence and drops the
//! line terminator. Helper tools are C programs that may print arbitrary
//! bytes, so lines are read as raw bytes of any length and relayed verbatim.

use std::io::{self, BufRead};

/// One line of helper output, terminator included when the stream had one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    bytes: Vec<u8>,
}

impl Line {
    /// Raw bytes exactly as the helper wrote them.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Whether the line ended with `\n` (only the final line may not).
    pub fn is_terminated(&self) -> bool {
        self.bytes.last() == Some(&b'\n')
    }
}

/// Lazy, finite, single-pass sequence of lines from a reader.
///
/// Yields `Err` at most once; the iterator is exhausted afterwards.
pub struct LineReader<R> {
    reader: R,
    done: bool,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            done: false,
        }
    }
}

impl<R: BufRead> Iterator for LineReader<R> {
    type Item = io::Result<Line>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let mut bytes = Vec::new();
        loop {
            match self.reader.read_until(b'\n', &mut bytes) {
                Ok(0) => {
                    self.done = true;
                    // EOF; a partial final line is still a line
                    return (!bytes.is_empty()).then_some(Ok(Line { bytes }));
                }
                Ok(_) => return Some(Ok(Line { bytes })),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            }
        }
    }
}

impl<R: BufRead> std::iter::FusedIterator for LineReader<R> {}
