use anyhow::{Context, Result};
use log::debug;
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use systab::Listing;

use crate::cli::{Arch, TableArgs};

#[derive(Clone, Debug)]
pub(crate) struct TableTarget {
    pub arch: Arch,
    pub header: PathBuf,
}

impl TableTarget {
    pub(crate) fn output_path(&self, out_dir: &Path) -> PathBuf {
        out_dir.join(self.arch.module_file())
    }
}

/// A rendered table file.
pub(crate) struct Rendered {
    pub text: String,
    pub entries: usize,
}

pub(crate) fn targets_for(args: &TableArgs) -> Vec<TableTarget> {
    match args.arch {
        Some(arch) => vec![TableTarget {
            arch,
            header: args
                .header
                .clone()
                .unwrap_or_else(|| PathBuf::from(arch.default_header())),
        }],
        None => Arch::ALL
            .iter()
            .map(|&arch| TableTarget {
                arch,
                header: PathBuf::from(arch.default_header()),
            })
            .collect(),
    }
}

pub(crate) fn out_dir_for(args: &TableArgs) -> Result<PathBuf> {
    match &args.out_dir {
        Some(d) => Ok(d.clone()),
        None => Ok(crate::util::repo::generated_dir(
            &crate::util::repo::repo_root()?,
        )),
    }
}

pub(crate) fn render(t: &TableTarget, listing: Listing) -> Result<Rendered> {
    debug!("{}: reading {}", t.arch.id(), t.header.display());
    let src = fs::read_to_string(&t.header)
        .with_context(|| format!("Reading {} header {}", t.arch.id(), t.header.display()))?;

    let mut buf = Vec::new();
    let entries = systab::generate(listing, Cursor::new(src.as_str()), &mut buf)
        .with_context(|| format!("Parsing {}", t.header.display()))?;
    let text = String::from_utf8(buf).context("Rendered table is not UTF-8")?;

    Ok(Rendered { text, entries })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(arch: Option<Arch>, header: Option<&str>) -> TableArgs {
        TableArgs {
            arch,
            header: header.map(PathBuf::from),
            listing: Listing::Enum,
            out_dir: None,
        }
    }

    #[test]
    fn test_all_arches_by_default() {
        let t = targets_for(&args(None, None));
        assert_eq!(t.len(), 2);
        assert_eq!(t[0].arch, Arch::X86_64);
        assert_eq!(t[0].header, PathBuf::from("/usr/include/asm/unistd_64.h"));
        assert_eq!(t[1].arch, Arch::X86);
        assert_eq!(t[1].header, PathBuf::from("/usr/include/asm/unistd_32.h"));
    }

    #[test]
    fn test_header_override_for_single_arch() {
        let t = targets_for(&args(Some(Arch::X86), Some("/tmp/unistd_32.h")));
        assert_eq!(t.len(), 1);
        assert_eq!(t[0].header, PathBuf::from("/tmp/unistd_32.h"));
        assert_eq!(
            t[0].output_path(Path::new("/out")),
            PathBuf::from("/out/syscall32.rs")
        );
    }

    #[test]
    fn test_render_counts_entries() {
        let tmp = tempfile::TempDir::new().unwrap();
        let header = tmp.path().join("unistd_64.h");
        fs::write(&header, "#define __NR_read 0\n#define __NR_write 1\n").unwrap();

        let t = TableTarget {
            arch: Arch::X86_64,
            header,
        };
        let r = render(&t, Listing::Consts).unwrap();
        assert_eq!(r.entries, 2);
        assert!(r.text.ends_with("pub static WRITE: c_int = 1;\n"));
    }

    #[test]
    fn test_render_missing_header_names_arch() {
        let t = TableTarget {
            arch: Arch::X86,
            header: PathBuf::from("/nonexistent/unistd_32.h"),
        };
        let err = render(&t, Listing::Enum).err().unwrap();
        assert!(format!("{err:#}").contains("x86 header"));
    }
}
