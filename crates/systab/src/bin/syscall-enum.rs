//! Emit `pub enum Syscall { NAME = NUMBER, ... }` from a `__NR_*` header.
//!
//! Usage: syscall-enum /usr/include/asm/unistd_64.h

use std::process::ExitCode;

use systab::Listing;

fn main() -> ExitCode {
    systab::cli::main(Listing::Enum)
}
