//! Shared front-end for the `syscall-enum` and `syscall-consts` binaries.
//!
//! Both take exactly one positional argument. Anything else prints a
//! one-line usage message and exits with status 1.

use std::ffi::OsString;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use log::{debug, info};

use crate::emit::{self, Listing};

#[derive(Parser, Debug)]
#[command(version, about = "Generate a Rust syscall listing from __NR_* header macros")]
pub struct Args {
    /// C header with `#define __NR_<name> <number>` lines
    #[arg(value_name = "path_to_header", allow_hyphen_values = true)]
    pub header: PathBuf,
}

/// Outcome of argument parsing.
#[derive(Debug)]
pub enum Invocation {
    Run(Args),
    /// `--help` / `--version`, already rendered.
    Info(String),
    Usage(String),
}

/// Parse `argv` (program name first).
pub fn parse_args<I, T>(argv: I) -> Invocation
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let argv: Vec<OsString> = argv.into_iter().map(Into::into).collect();
    let program = argv
        .first()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_else(|| "systab".to_string());

    match Args::try_parse_from(&argv) {
        Ok(args) => Invocation::Run(args),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            Invocation::Info(e.render().to_string())
        }
        Err(_) => Invocation::Usage(format!("usage: {program} path_to_header")),
    }
}

fn init_logging() {
    let env = env_logger::Env::default().default_filter_or("warn");
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}

fn write_listing(listing: Listing, header: &Path) -> Result<usize> {
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let n = emit::generate_file(listing, header, &mut out).with_context(|| {
        format!(
            "generating {} listing from {}",
            listing.id(),
            header.display()
        )
    })?;
    out.flush().context("flushing stdout")?;
    Ok(n)
}

/// Entry point shared by both binaries.
pub fn main(listing: Listing) -> ExitCode {
    init_logging();

    let args = match parse_args(std::env::args_os()) {
        Invocation::Run(args) => args,
        Invocation::Info(text) => {
            print!("{text}");
            return ExitCode::SUCCESS;
        }
        Invocation::Usage(line) => {
            eprintln!("{line}");
            return ExitCode::from(1);
        }
    };

    debug!("{} listing from {}", listing.id(), args.header.display());
    match write_listing(listing, &args.header) {
        Ok(n) => {
            info!("wrote {n} entries");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_path_runs() {
        match parse_args(["syscall-enum", "/usr/include/asm/unistd_64.h"]) {
            Invocation::Run(args) => {
                assert_eq!(args.header, PathBuf::from("/usr/include/asm/unistd_64.h"));
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_no_args_is_usage() {
        match parse_args(["syscall-enum"]) {
            Invocation::Usage(line) => assert_eq!(line, "usage: syscall-enum path_to_header"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_two_args_is_usage() {
        assert!(matches!(
            parse_args(["syscall-consts", "a.h", "b.h"]),
            Invocation::Usage(_)
        ));
    }

    #[test]
    fn test_unknown_flag_is_usage() {
        assert!(matches!(
            parse_args(["syscall-consts", "--bogus", "a.h"]),
            Invocation::Usage(_)
        ));
    }

    #[test]
    fn test_leading_dash_path_runs() {
        match parse_args(["syscall-enum", "-unistd.h"]) {
            Invocation::Run(args) => assert_eq!(args.header, PathBuf::from("-unistd.h")),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_version_is_info() {
        match parse_args(["syscall-consts", "--version"]) {
            Invocation::Info(text) => assert!(text.contains(env!("CARGO_PKG_VERSION")), "{text}"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_help_is_info() {
        assert!(matches!(
            parse_args(["syscall-enum", "--help"]),
            Invocation::Info(_)
        ));
    }
}
