use anyhow::Result;

pub fn run(cli: crate::cli::Cli) -> Result<()> {
    match cli.cmd {
        crate::cli::Cmd::Doctor => crate::tasks::tooling::doctor::run(),
        crate::cli::Cmd::Tables { cmd } => match cmd {
            crate::cli::TablesCmd::Gen { args } => crate::tasks::tables::generate::run(&args),
            crate::cli::TablesCmd::Check { args } => crate::tasks::tables::check::run(&args),
        },
    }
}
