use anyhow::{Context, Result};
use log::info;
use std::fs;
use std::path::Path;
use systab::Listing;

use super::common::{self, TableTarget};
use crate::cli::TableArgs;

pub fn run(args: &TableArgs) -> Result<()> {
    let out_dir = common::out_dir_for(args)?;
    write_tables(&common::targets_for(args), args.listing, &out_dir)
}

pub(crate) fn write_tables(targets: &[TableTarget], listing: Listing, out_dir: &Path) -> Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Creating {}", out_dir.display()))?;

    for t in targets {
        let rendered = common::render(t, listing)?;
        let dest = t.output_path(out_dir);
        fs::write(&dest, &rendered.text)
            .with_context(|| format!("Writing {}", dest.display()))?;
        info!(
            "[gen] {}: {} ({} entries)",
            t.arch.id(),
            dest.display(),
            rendered.entries
        );
    }
    Ok(())
}
