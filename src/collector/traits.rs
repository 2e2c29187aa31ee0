//! Abstractions for OS access to enable testing and mocking.
//!
//! The `FileSystem` trait is the single seam between the probes and the host:
//! all reads of `/proc` and `/sys` plus the statvfs query for volume capacity
//! go through it. Production uses `RealFs`; tests inject `MockFs` to model
//! arbitrary device states.

use std::io;
use std::path::{Path, PathBuf};

/// Block-level capacity of a mounted volume, as reported by statvfs.
///
/// Capacity is expressed in blocks so the storage probe can mirror the
/// `block_count * block_size` arithmetic of its contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VolumeStats {
    /// Fundamental block size in bytes (`f_frsize`).
    pub block_size: u64,
    /// Total blocks on the volume (`f_blocks`).
    pub total_blocks: u64,
    /// Blocks available to unprivileged processes (`f_bavail`).
    pub available_blocks: u64,
}

/// Abstraction for host filesystem and volume queries.
pub trait FileSystem: Send + Sync {
    /// Reads the entire contents of a file as a string.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Reads the entire contents of a file as raw bytes.
    ///
    /// Needed for binary sysfs attributes such as connector EDID blobs.
    fn read_bytes(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Checks if a path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Lists entries in a directory.
    fn read_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>>;

    /// Queries block-level capacity of the volume mounted at `path`.
    fn volume_stats(&self, path: &Path) -> io::Result<VolumeStats>;
}

/// Real host implementation backed by `std::fs` and statvfs.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFs;

impl RealFs {
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for RealFs {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn read_bytes(&self, path: &Path) -> io::Result<Vec<u8>> {
        std::fs::read(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>> {
        let entries = std::fs::read_dir(path)?;
        let mut paths = Vec::new();
        for entry in entries {
            paths.push(entry?.path());
        }
        Ok(paths)
    }

    #[cfg(unix)]
    fn volume_stats(&self, path: &Path) -> io::Result<VolumeStats> {
        use std::ffi::CString;
        use std::os::unix::ffi::OsStrExt;

        let c_path = CString::new(path.as_os_str().as_bytes())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

        // SAFETY: statvfs writes into a zeroed struct we own; the path
        // pointer stays valid for the duration of the call.
        unsafe {
            let mut stat: libc::statvfs = std::mem::zeroed();
            if libc::statvfs(c_path.as_ptr(), &mut stat) != 0 {
                return Err(io::Error::last_os_error());
            }
            Ok(VolumeStats {
                block_size: stat.f_frsize as u64,
                total_blocks: stat.f_blocks as u64,
                available_blocks: stat.f_bavail as u64,
            })
        }
    }

    #[cfg(not(unix))]
    fn volume_stats(&self, _path: &Path) -> io::Result<VolumeStats> {
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "volume statistics are only available on unix hosts",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_real_fs_read_to_string() {
        let fs = RealFs::new();
        let cargo_toml = env::current_dir().unwrap().join("Cargo.toml");
        let content = fs.read_to_string(&cargo_toml).unwrap();
        assert!(content.contains("[package]"));
    }

    #[test]
    fn test_real_fs_exists() {
        let fs = RealFs::new();
        let cargo_toml = env::current_dir().unwrap().join("Cargo.toml");
        assert!(fs.exists(&cargo_toml));
        assert!(!fs.exists(Path::new("/nonexistent/path/12345")));
    }

    #[test]
    fn test_real_fs_read_bytes() {
        let fs = RealFs::new();
        let cargo_toml = env::current_dir().unwrap().join("Cargo.toml");
        let bytes = fs.read_bytes(&cargo_toml).unwrap();
        assert!(!bytes.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_real_fs_volume_stats_root() {
        let fs = RealFs::new();
        let stats = fs.volume_stats(Path::new("/")).unwrap();
        assert!(stats.block_size > 0);
        assert!(stats.total_blocks >= stats.available_blocks);
    }
}
