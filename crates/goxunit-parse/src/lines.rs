// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Line splitting and sanitizing
//!
//! Test binaries happily print terminal escapes, bells, byte order marks and
//! stray binary data. Before any pattern sees a line, everything that is
//! neither graphic (letters, marks, numbers, punctuation, symbols, spaces) nor
//! whitespace is removed.

use std::io::{self, BufRead};
use std::sync::LazyLock;

use regex::Regex;

// Control, format, private use and unassigned code points fall outside both
// classes, as do noncharacters such as U+FFFF.
static NON_PRINTABLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^\p{L}\p{M}\p{N}\p{P}\p{S}\p{Zs}\s]+").expect("static pattern is valid")
});

/// Remove non-printable characters from a line, keeping all whitespace
#[must_use]
pub fn sanitize_line(line: &str) -> String {
    NON_PRINTABLE.replace_all(line, "").into_owned()
}

/// Iterator over the sanitized lines of a reader
///
/// Splits on `\n`, drops a trailing `\r`, decodes UTF-8 lossily and applies
/// [`sanitize_line`]. A final line without a terminator is still yielded.
pub struct PrintableLines<R> {
    reader: R,
    buf: Vec<u8>,
}

impl<R: BufRead> PrintableLines<R> {
    /// Wrap a buffered reader
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
        }
    }
}

impl<R: BufRead> Iterator for PrintableLines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(_) => {
                if self.buf.last() == Some(&b'\n') {
                    self.buf.pop();
                    if self.buf.last() == Some(&b'\r') {
                        self.buf.pop();
                    }
                }
                Some(Ok(sanitize_line(&String::from_utf8_lossy(&self.buf))))
            }
            Err(e) => Some(Err(e)),
        }
    }
}
