//! Listing templates and the streaming generator.

use std::fs::File;
use std::io::{BufRead, BufReader, Cursor, Write};
use std::path::Path;

use clap::ValueEnum;
use log::{debug, info};

use crate::error::{Error, Result};
use crate::header::{self, MacroEntry};

/// Output template.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Listing {
    /// Mode A: `pub enum Syscall { NAME = NUMBER, ... }`
    #[value(name = "enum")]
    Enum,
    /// Mode B: `pub static NAME: c_int = NUMBER;` per entry.
    #[value(name = "consts")]
    Consts,
}

impl Listing {
    pub fn id(self) -> &'static str {
        match self {
            Self::Enum => "enum",
            Self::Consts => "consts",
        }
    }

    pub fn header(self) -> &'static [&'static str] {
        match self {
            Self::Enum => &["#[derive(Show, FromPrimitive, Copy)]", "pub enum Syscall {"],
            Self::Consts => &["#[allow(non_uppercase_statics)];", "use std::libc::c_int;"],
        }
    }

    pub fn footer(self) -> &'static [&'static str] {
        match self {
            Self::Enum => &["}"],
            Self::Consts => &[],
        }
    }

    /// Write the body line for one entry, newline included.
    pub fn write_entry<W: Write>(self, out: &mut W, entry: &MacroEntry) -> Result<()> {
        let ident = entry.ident();
        match self {
            Self::Enum => writeln!(out, "  {ident} = {},", entry.number)?,
            Self::Consts => writeln!(out, "pub static {ident}: c_int = {};", entry.number)?,
        }
        Ok(())
    }
}

fn write_lines<W: Write>(out: &mut W, lines: &[&str]) -> Result<()> {
    for line in lines {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// Stream `input` through `listing` into `out`, returning the entry count.
///
/// Lines are written as they are parsed; if a later line is malformed the
/// lines before it have already reached `out`.
pub fn generate<R: BufRead, W: Write>(listing: Listing, input: R, out: &mut W) -> Result<usize> {
    write_lines(out, listing.header())?;

    let mut count = 0;
    for entry in header::entries(input) {
        listing.write_entry(out, &entry?)?;
        count += 1;
    }

    write_lines(out, listing.footer())?;
    out.flush()?;

    info!("{} listing: {count} entries", listing.id());
    Ok(count)
}

/// Open `path` and run [`generate`] on it.
///
/// The file is opened before anything is written, so a missing header
/// produces no output at all.
pub fn generate_file<W: Write>(listing: Listing, path: &Path, out: &mut W) -> Result<usize> {
    debug!("reading {}", path.display());
    let file = File::open(path).map_err(|e| Error::Io(e).with_path(path))?;
    generate(listing, BufReader::new(file), out)
}

/// Render a complete listing into a string.
pub fn render(listing: Listing, text: &str) -> Result<String> {
    let mut buf = Vec::new();
    generate(listing, Cursor::new(text), &mut buf)?;
    // Input was &str and every template is ASCII.
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
