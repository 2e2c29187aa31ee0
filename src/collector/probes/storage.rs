//! Primary volume capacity probe backed by statvfs.
//!
//! Totals follow the classic `block_count * block_size` arithmetic; used
//! space is counted against blocks available to unprivileged processes, so
//! `total == available + used` holds by construction.

use std::path::Path;

use crate::collector::probes::CollectError;
use crate::collector::traits::FileSystem;
use crate::model::StorageStatus;

/// Collects capacity of the volume mounted at `data_path`.
pub fn collect_storage<F: FileSystem>(
    fs: &F,
    data_path: &str,
) -> Result<StorageStatus, CollectError> {
    let stats = fs.volume_stats(Path::new(data_path))?;

    let total = blocks_to_bytes(stats.total_blocks, stats.block_size);
    let available = blocks_to_bytes(stats.available_blocks, stats.block_size);
    let used = blocks_to_bytes(
        stats.total_blocks.saturating_sub(stats.available_blocks),
        stats.block_size,
    );

    Ok(StorageStatus {
        total,
        available,
        used,
    })
}

fn blocks_to_bytes(blocks: u64, block_size: u64) -> i64 {
    i64::try_from(blocks.saturating_mul(block_size)).unwrap_or(i64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::mock::MockFs;
    use crate::collector::traits::VolumeStats;

    #[test]
    fn test_collect_storage() {
        let mut fs = MockFs::new();
        fs.add_volume(
            "/",
            VolumeStats {
                block_size: 4096,
                total_blocks: 1_000_000,
                available_blocks: 250_000,
            },
        );

        let storage = collect_storage(&fs, "/").unwrap();
        assert_eq!(storage.total, 4096 * 1_000_000);
        assert_eq!(storage.available, 4096 * 250_000);
        assert_eq!(storage.used, 4096 * 750_000);
        assert_eq!(storage.total, storage.available + storage.used);
    }

    #[test]
    fn test_unmounted_volume_fails_group() {
        let fs = MockFs::new();
        assert!(collect_storage(&fs, "/data").is_err());
    }
}
