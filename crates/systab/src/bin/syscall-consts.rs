//! Emit `pub static NAME: c_int = NUMBER;` lines from a `__NR_*` header.
//!
//! Usage: syscall-consts /usr/include/asm/unistd_64.h

use std::process::ExitCode;

use systab::Listing;

fn main() -> ExitCode {
    systab::cli::main(Listing::Consts)
}
