//! # systab
//!
//! Turn the `#define __NR_<name> <number>` macros of a kernel header
//! (e.g. `/usr/include/asm/unistd_64.h`) into Rust source.
//!
//! ## Listings
//!
//! - [`Listing::Enum`]: a `Syscall` enum with one variant per macro
//! - [`Listing::Consts`]: one `pub static NAME: c_int` per macro
//!
//! ## Usage
//!
//! ```bash
//! syscall-enum /usr/include/asm/unistd_64.h > syscall64.rs
//! syscall-consts /usr/include/asm/unistd_32.h > consts32.rs
//! ```

pub mod cli;
pub mod emit;
pub mod error;
pub mod header;

pub use emit::{generate, generate_file, render, Listing};
pub use error::{Error, Result};
pub use header::{MacroEntry, MACRO_PREFIX};
