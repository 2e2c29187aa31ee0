//! OS release and hardware identity probe.
//!
//! Kernel identity comes from `/proc/sys/kernel/`; hardware identity strings
//! come from the DMI table exported at `/sys/class/dmi/id/`. Virtual machines
//! and ARM boards often lack individual DMI attributes, so a missing
//! attribute degrades to `"unknown"` without failing the whole group.

use std::path::Path;

use crate::collector::probes::CollectError;
use crate::collector::probes::parser::parse_kernel_major;
use crate::collector::traits::FileSystem;
use crate::model::{OsIdentity, UNKNOWN};

/// Collects kernel release, build string, and DMI identity.
///
/// Fails only if the kernel release itself cannot be read or parsed; that is
/// the one attribute a Linux host cannot plausibly be missing.
pub fn collect_os_identity<F: FileSystem>(
    fs: &F,
    proc_path: &str,
    sys_path: &str,
) -> Result<OsIdentity, CollectError> {
    let release_path = format!("{}/sys/kernel/osrelease", proc_path);
    let release = fs.read_to_string(Path::new(&release_path))?;
    let os_version = release.trim().to_string();
    let api_level = parse_kernel_major(&release)?;

    let version_path = format!("{}/sys/kernel/version", proc_path);
    let build_number = fs
        .read_to_string(Path::new(&version_path))
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|_| UNKNOWN.to_string());

    Ok(OsIdentity {
        os_version,
        build_number,
        api_level,
        manufacturer: dmi_attr(fs, sys_path, "sys_vendor"),
        brand: dmi_attr(fs, sys_path, "board_vendor"),
        product: dmi_attr(fs, sys_path, "product_name"),
        device: dmi_attr(fs, sys_path, "product_family"),
        hardware: dmi_attr(fs, sys_path, "board_name"),
    })
}

fn dmi_attr<F: FileSystem>(fs: &F, sys_path: &str, attr: &str) -> String {
    let path = format!("{}/class/dmi/id/{}", sys_path, attr);
    fs.read_to_string(Path::new(&path))
        .map(|s| s.trim().to_string())
        .ok()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| UNKNOWN.to_string())
}
