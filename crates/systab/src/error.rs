//! Error type for header parsing and listing emission.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Opening or reading the header failed.
    #[error("cannot read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading from an anonymous stream or writing the listing failed.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// A `#define __NR_` line that is not exactly `NAME NUMBER`.
    #[error("line {line_no}: expected `#define __NR_<name> <number>`, got {fields} field(s): {line:?}")]
    MalformedMacro {
        line_no: usize,
        line: String,
        fields: usize,
    },
}

impl Error {
    /// Attach the header path to a bare I/O error.
    pub(crate) fn with_path(self, path: impl Into<PathBuf>) -> Self {
        match self {
            Self::Io(source) => Self::Read {
                path: path.into(),
                source,
            },
            other => other,
        }
    }
}
