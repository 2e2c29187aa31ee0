//! Physical memory probe backed by `/proc/meminfo`.

use std::path::Path;

use crate::collector::probes::CollectError;
use crate::collector::probes::parser::parse_meminfo;
use crate::collector::traits::FileSystem;
use crate::model::MemoryStatus;

/// Collects total, available, and used memory in bytes.
pub fn collect_memory<F: FileSystem>(fs: &F, proc_path: &str) -> Result<MemoryStatus, CollectError> {
    let path = format!("{}/meminfo", proc_path);
    let content = fs.read_to_string(Path::new(&path))?;
    let info = parse_meminfo(&content)?;

    let total = kb_to_bytes(info.mem_total_kb);
    let available = kb_to_bytes(info.mem_available_kb);

    Ok(MemoryStatus {
        total,
        available,
        used: total - available,
    })
}

fn kb_to_bytes(kb: u64) -> i64 {
    i64::try_from(kb.saturating_mul(1024)).unwrap_or(i64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::mock::MockFs;

    #[test]
    fn test_collect_memory() {
        let mut fs = MockFs::new();
        fs.add_file(
            "/proc/meminfo",
            "MemTotal:       16384000 kB\nMemFree:         8192000 kB\nMemAvailable:   12000000 kB\n",
        );

        let mem = collect_memory(&fs, "/proc").unwrap();
        assert_eq!(mem.total, 16_384_000 * 1024);
        assert_eq!(mem.available, 12_000_000 * 1024);
        assert_eq!(mem.used, mem.total - mem.available);
    }

    #[test]
    fn test_missing_meminfo_fails_group() {
        let fs = MockFs::new();
        assert!(collect_memory(&fs, "/proc").is_err());
    }

    #[test]
    fn test_malformed_meminfo_fails_group() {
        let mut fs = MockFs::new();
        fs.add_file("/proc/meminfo", "not a meminfo file\n");
        assert!(matches!(
            collect_memory(&fs, "/proc"),
            Err(CollectError::Parse(_))
        ));
    }
}
