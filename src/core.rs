//! Terminator handling shared by every surface, plus the in-memory string
//! form.
//!
//! All three consumption idioms agree on what a line is: a maximal run of
//! bytes not containing `\n`, with the terminator stripped. A `\r` directly
//! before the `\n` is stripped with it, matching what
//! [`std::io::BufRead::lines`] does.

use std::iter::FusedIterator;

use memchr::memchr;

pub const CR: u8 = b'\r';
pub const LF: u8 = b'\n';

/// Strip one trailing `\n`, and a `\r` directly before it, from `line`.
///
/// Bytes are only removed from the very end; interior terminators and a
/// trailing `\r` without a following `\n` are left alone.
#[must_use]
pub fn trim_terminator(line: &[u8]) -> &[u8] {
    match line {
        [rest @ .., CR, LF] => rest,
        [rest @ .., LF] => rest,
        _ => line,
    }
}

/// Iterator over the lines of a `&str`, created by [`str_lines`].
///
/// Purely in-memory: no I/O, no fault path. Yields borrowed slices of the
/// input with the terminator stripped.
#[derive(Debug, Clone)]
pub struct StrLines<'a> {
    rest: Option<&'a str>,
}

impl<'a> Iterator for StrLines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let rest = self.rest?;
        match memchr(LF, rest.as_bytes()) {
            Some(i) => {
                // The split point sits on an ASCII byte, so both halves
                // remain valid UTF-8.
                self.rest = Some(&rest[i + 1..]);
                let line = &rest[..i];
                Some(line.strip_suffix('\r').unwrap_or(line))
            }
            None => {
                self.rest = None;
                if rest.is_empty() {
                    None
                } else {
                    Some(rest)
                }
            }
        }
    }
}

impl FusedIterator for StrLines<'_> {}

/// Split a fully materialized string into lines.
///
/// Empty input yields zero lines, consecutive terminators yield empty
/// lines, and a trailing unterminated fragment is yielded as a final line:
///
/// ```
/// let lines: Vec<&str> = linify::str_lines("a\nb\n\nc").collect();
/// assert_eq!(lines, ["a", "b", "", "c"]);
/// assert_eq!(linify::str_lines("").count(), 0);
/// ```
#[must_use]
pub fn str_lines(input: &str) -> StrLines<'_> {
    StrLines { rest: Some(input) }
}
