//! The iterator form: lazy line iteration over any [`std::io::Read`].

use std::io::{self, BufRead, BufReader, Read};

use crate::core::{trim_terminator, LF};

/// Iterator over the lines of a buffered reader, yielding
/// `io::Result<String>`.
///
/// Built on [`BufRead::read_until`], so the buffering policy is the standard
/// one. End of input ends the iteration; a read fault (or invalid UTF-8) is
/// yielded as a single `Err` item, after which the iterator is fused and
/// yields nothing further.
pub struct Lines<B> {
    reader: B,
    buf: Vec<u8>,
    done: bool,
}

impl<B: BufRead> Lines<B> {
    /// Wrap an already-buffered reader.
    pub fn new(reader: B) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            done: false,
        }
    }

    /// Consume the iterator and return the underlying reader.
    pub fn into_inner(self) -> B {
        self.reader
    }
}

impl<B: BufRead> Iterator for Lines<B> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<io::Result<String>> {
        if self.done {
            return None;
        }
        self.buf.clear();
        match self.reader.read_until(LF, &mut self.buf) {
            Ok(0) => {
                self.done = true;
                None
            }
            Ok(_) => match std::str::from_utf8(trim_terminator(&self.buf)) {
                Ok(line) => Some(Ok(line.to_owned())),
                Err(err) => {
                    self.done = true;
                    Some(Err(io::Error::new(io::ErrorKind::InvalidData, err)))
                }
            },
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}

impl<B: BufRead> std::iter::FusedIterator for Lines<B> {}

/// Iterate over the lines of any reader.
///
/// ```
/// let input: &[u8] = b"hoge\nfuga\npiyo\n\nfoo bar baz";
/// let lines: Vec<String> = linify::lines(input)
///     .collect::<std::io::Result<_>>()
///     .unwrap();
/// assert_eq!(lines, ["hoge", "fuga", "piyo", "", "foo bar baz"]);
/// ```
pub fn lines<R: Read>(reader: R) -> Lines<BufReader<R>> {
    Lines::new(BufReader::new(reader))
}

/// Like [`lines`], but with a caller-chosen internal buffer size.
pub fn lines_with_capacity<R: Read>(reader: R, capacity: usize) -> Lines<BufReader<R>> {
    Lines::new(BufReader::with_capacity(capacity, reader))
}

/// Extension trait to provide convenient methods on `std::io::Read`.
pub trait ReadExt {
    /// Iterate over the lines of this reader.
    fn split_lines(self) -> Lines<BufReader<Self>>
    where
        Self: Sized;
}

impl<R: Read> ReadExt for R {
    fn split_lines(self) -> Lines<BufReader<Self>>
    where
        Self: Sized,
    {
        lines(self)
    }
}
