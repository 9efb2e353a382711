use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;
use systab::Listing;

use super::common::{self, TableTarget};
use crate::cli::TableArgs;

pub fn run(args: &TableArgs) -> Result<()> {
    let out_dir = common::out_dir_for(args)?;
    let targets = common::targets_for(args);

    let mut fail = false;
    for t in &targets {
        match verify_one(t, args.listing, &out_dir) {
            Ok(()) => eprintln!("[ok] {}: {}", t.arch.id(), t.output_path(&out_dir).display()),
            Err(e) => {
                fail = true;
                eprintln!("[bad] {}: {:#}", t.arch.id(), e);
            }
        }
    }

    if fail {
        bail!("syscall tables are stale; run `cargo xtask tables gen`");
    }
    Ok(())
}

pub(crate) fn verify_one(t: &TableTarget, listing: Listing, out_dir: &Path) -> Result<()> {
    let rendered = common::render(t, listing)?;
    let path = t.output_path(out_dir);
    if !path.is_file() {
        bail!("Missing table file: {}", path.display());
    }
    let on_disk = fs::read_to_string(&path)
        .with_context(|| format!("Reading {}", path.display()))?;
    if on_disk != rendered.text {
        bail!(
            "{} is out of date with {}",
            path.display(),
            t.header.display()
        );
    }
    Ok(())
}
