//! In-memory mock filesystem for testing probes without real `/proc` or `/sys`.

use crate::collector::traits::{FileSystem, VolumeStats};
use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};

/// In-memory filesystem for testing.
///
/// Stores files, binary blobs, directories, and mounted-volume statistics in
/// memory, allowing tests to simulate arbitrary device states on any host.
#[derive(Debug, Clone, Default)]
pub struct MockFs {
    /// Map from path to text file contents.
    files: HashMap<PathBuf, String>,
    /// Map from path to binary file contents (e.g. EDID blobs).
    blobs: HashMap<PathBuf, Vec<u8>>,
    /// Set of directories (for read_dir and exists support).
    directories: HashSet<PathBuf>,
    /// Map from mount path to volume statistics.
    volumes: HashMap<PathBuf, VolumeStats>,
}

impl MockFs {
    /// Creates a new empty mock filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a text file with the given content.
    ///
    /// Parent directories are automatically created.
    pub fn add_file(&mut self, path: impl AsRef<Path>, content: impl Into<String>) {
        let path = path.as_ref().to_path_buf();
        self.add_parents(&path);
        self.files.insert(path, content.into());
    }

    /// Adds a binary file with the given content.
    pub fn add_bytes(&mut self, path: impl AsRef<Path>, content: impl Into<Vec<u8>>) {
        let path = path.as_ref().to_path_buf();
        self.add_parents(&path);
        self.blobs.insert(path, content.into());
    }

    /// Adds an empty directory.
    pub fn add_dir(&mut self, path: impl AsRef<Path>) {
        let path = path.as_ref().to_path_buf();
        self.add_parents(&path);
        self.directories.insert(path);
    }

    /// Registers volume statistics for a mount path.
    pub fn add_volume(&mut self, path: impl AsRef<Path>, stats: VolumeStats) {
        self.volumes.insert(path.as_ref().to_path_buf(), stats);
    }

    /// Removes a file, simulating an attribute disappearing.
    pub fn remove_file(&mut self, path: impl AsRef<Path>) {
        self.files.remove(path.as_ref());
        self.blobs.remove(path.as_ref());
    }

    fn add_parents(&mut self, path: &Path) {
        let mut parent = path.parent();
        while let Some(p) = parent {
            if !p.as_os_str().is_empty() {
                self.directories.insert(p.to_path_buf());
            }
            parent = p.parent();
        }
    }
}

impl FileSystem for MockFs {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.files.get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("file not found: {:?}", path),
            )
        })
    }

    fn read_bytes(&self, path: &Path) -> io::Result<Vec<u8>> {
        if let Some(blob) = self.blobs.get(path) {
            return Ok(blob.clone());
        }
        self.files
            .get(path)
            .map(|s| s.as_bytes().to_vec())
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("file not found: {:?}", path),
                )
            })
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path)
            || self.blobs.contains_key(path)
            || self.directories.contains(path)
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>> {
        if !self.directories.contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("directory not found: {:?}", path),
            ));
        }

        let mut entries = HashSet::new();

        for file_path in self.files.keys().chain(self.blobs.keys()) {
            if file_path.parent().is_some_and(|parent| parent == path) {
                entries.insert(file_path.clone());
            }
        }

        for dir_path in &self.directories {
            if dir_path.parent().is_some_and(|parent| parent == path) && dir_path != path {
                entries.insert(dir_path.clone());
            }
        }

        Ok(entries.into_iter().collect())
    }

    fn volume_stats(&self, path: &Path) -> io::Result<VolumeStats> {
        self.volumes.get(path).copied().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no volume mounted at: {:?}", path),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_fs_add_file() {
        let mut fs = MockFs::new();
        fs.add_file("/proc/meminfo", "MemTotal: 16384 kB\n");

        assert!(fs.exists(Path::new("/proc/meminfo")));
        assert!(fs.exists(Path::new("/proc")));

        let content = fs.read_to_string(Path::new("/proc/meminfo")).unwrap();
        assert_eq!(content, "MemTotal: 16384 kB\n");
    }

    #[test]
    fn test_mock_fs_read_bytes() {
        let mut fs = MockFs::new();
        fs.add_bytes("/sys/class/drm/card0-eDP-1/edid", vec![0x00, 0xFF, 0xFF]);
        fs.add_file("/proc/version", "Linux\n");

        assert_eq!(
            fs.read_bytes(Path::new("/sys/class/drm/card0-eDP-1/edid"))
                .unwrap(),
            vec![0x00, 0xFF, 0xFF]
        );
        // Text files are also readable as bytes
        assert_eq!(
            fs.read_bytes(Path::new("/proc/version")).unwrap(),
            b"Linux\n".to_vec()
        );
    }

    #[test]
    fn test_mock_fs_read_dir() {
        let mut fs = MockFs::new();
        fs.add_file("/sys/class/net/eth0/operstate", "up");
        fs.add_file("/sys/class/net/wlan0/operstate", "down");

        let entries = fs.read_dir(Path::new("/sys/class/net")).unwrap();
        assert_eq!(entries.len(), 2);

        assert!(fs.read_dir(Path::new("/nonexistent")).is_err());
    }

    #[test]
    fn test_mock_fs_volume_stats() {
        let mut fs = MockFs::new();
        fs.add_volume(
            "/",
            VolumeStats {
                block_size: 4096,
                total_blocks: 100,
                available_blocks: 50,
            },
        );

        let stats = fs.volume_stats(Path::new("/")).unwrap();
        assert_eq!(stats.block_size, 4096);
        assert!(fs.volume_stats(Path::new("/mnt")).is_err());
    }

    #[test]
    fn test_mock_fs_remove_file() {
        let mut fs = MockFs::new();
        fs.add_file("/proc/meminfo", "MemTotal: 1 kB\n");
        fs.remove_file("/proc/meminfo");
        assert!(fs.read_to_string(Path::new("/proc/meminfo")).is_err());
    }
}
