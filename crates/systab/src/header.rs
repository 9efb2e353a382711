//! `__NR_*` macro extraction from C headers.
//!
//! Only lines of the exact shape `#define __NR_<name> <number>` are
//! recognised. Everything else (comments, include guards, blank lines,
//! `__SYSCALL(...)` tables) is skipped without complaint.

use std::io::BufRead;

use log::debug;

use crate::error::{Error, Result};

/// Literal prefix of a syscall-number macro line.
pub const MACRO_PREFIX: &str = "#define __NR_";

/// One `__NR_<name> <number>` definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MacroEntry {
    /// Name as written in the header, without the `__NR_` prefix.
    pub name: String,
    /// Number token, passed through unparsed.
    pub number: String,
}

impl MacroEntry {
    /// Identifier used in generated code.
    pub fn ident(&self) -> String {
        self.name.to_uppercase()
    }
}

/// Whether `line` starts with [`MACRO_PREFIX`]. Leading whitespace means no match.
pub fn is_macro_line(line: &str) -> bool {
    line.starts_with(MACRO_PREFIX)
}

/// Parse one header line. `line_no` is 1-based and only used for errors.
pub fn parse_line(line: &str, line_no: usize) -> Result<Option<MacroEntry>> {
    if !is_macro_line(line) {
        return Ok(None);
    }

    let rest = line
        .trim()
        .strip_prefix(MACRO_PREFIX)
        .unwrap_or_default();

    // Single-space separator: `a  b` is three fields, not two.
    let fields: Vec<&str> = rest.split(' ').collect();
    match fields.as_slice() {
        [name, number] => Ok(Some(MacroEntry {
            name: (*name).to_string(),
            number: (*number).to_string(),
        })),
        _ => Err(Error::MalformedMacro {
            line_no,
            line: line.to_string(),
            fields: fields.len(),
        }),
    }
}

/// Lazily yield the macro entries of `reader` in file order.
///
/// Read failures (including invalid UTF-8) and malformed macro lines are
/// yielded as errors; callers decide whether to stop.
pub fn entries<R: BufRead>(reader: R) -> impl Iterator<Item = Result<MacroEntry>> {
    reader
        .lines()
        .enumerate()
        .filter_map(|(idx, line)| {
            let line_no = idx + 1;
            let line = match line {
                Ok(l) => l,
                Err(e) => return Some(Err(Error::Io(e))),
            };
            match parse_line(&line, line_no) {
                Ok(Some(entry)) => {
                    debug!("line {line_no}: {} = {}", entry.name, entry.number);
                    Some(Ok(entry))
                }
                Ok(None) => None,
                Err(e) => Some(Err(e)),
            }
        })
}
