use anyhow::{Result, bail};

use crate::cli::Arch;

pub fn run() -> Result<()> {
    let mut ok = true;

    for arch in Arch::ALL {
        let header = std::path::Path::new(arch.default_header());
        if header.is_file() {
            eprintln!("[OK] {}: {}", arch.id(), header.display());
        } else {
            eprintln!("[FAIL] {}: missing header {}", arch.id(), header.display());
            ok = false;
        }
    }

    if !ok {
        bail!("doctor checks failed (install the kernel/libc headers, e.g. linux-libc-dev or kernel-headers)");
    }
    Ok(())
}
