use anyhow::Result;
use clap::Parser;

mod app;
mod cli;
mod tasks;
mod util;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let cli = crate::cli::Cli::parse();
    crate::app::run(cli)
}
