use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use systab::Listing;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Arch {
    #[value(name = "x86_64")]
    X86_64,
    #[value(name = "x86")]
    X86,
}

impl Arch {
    pub const ALL: [Arch; 2] = [Arch::X86_64, Arch::X86];

    pub fn id(self) -> &'static str {
        match self {
            Self::X86_64 => "x86_64",
            Self::X86 => "x86",
        }
    }

    /// File name the consuming crate pulls in with `#[path = "..."]`.
    pub fn module_file(self) -> &'static str {
        match self {
            Self::X86_64 => "syscall64.rs",
            Self::X86 => "syscall32.rs",
        }
    }

    pub fn default_header(self) -> &'static str {
        match self {
            Self::X86_64 => "/usr/include/asm/unistd_64.h",
            Self::X86 => "/usr/include/asm/unistd_32.h",
        }
    }
}

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "systab repo developer tasks")]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Cmd,
}

#[derive(Subcommand)]
pub enum Cmd {
    /// Check that the system headers the table generator reads are installed.
    Doctor,

    /// Per-architecture syscall table files.
    Tables {
        #[command(subcommand)]
        cmd: TablesCmd,
    },
}

#[derive(clap::Args, Clone, Debug)]
pub struct TableArgs {
    #[arg(long, value_enum, help = "Only handle this architecture (default: all).")]
    pub arch: Option<Arch>,

    #[arg(
        long,
        requires = "arch",
        help = "Read this header instead of the architecture's system header. Requires --arch."
    )]
    pub header: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Listing::Enum)]
    pub listing: Listing,

    #[arg(long = "out-dir", help = "Directory holding the table files (default: <repo>/generated).")]
    pub out_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum TablesCmd {
    /// Regenerate syscall64.rs / syscall32.rs from the kernel headers.
    Gen {
        #[command(flatten)]
        args: TableArgs,
    },

    /// Fail if any table file is missing or differs from a fresh render.
    Check {
        #[command(flatten)]
        args: TableArgs,
    },
}
