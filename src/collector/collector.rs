//! Device snapshot aggregator.
//!
//! `DeviceCollector` runs the six probe groups in a fixed order and merges
//! their results into one `DeviceSnapshot`. Failures are contained at the
//! group boundary: a failing probe is logged and its documented fallback
//! values are substituted, so the output schema is always complete and a
//! fault in one subsystem can never suppress data from another.

use crate::collector::probes::{
    CollectError, DisplayProvider, app, memory, network, os, storage,
};
use crate::collector::traits::FileSystem;
use crate::model::{
    AppVersion, DeviceSnapshot, DisplayMetrics, ErrorReport, MemoryStatus, NetworkStatus,
    OsIdentity, StorageStatus,
};

/// Collects device snapshots through an injected `FileSystem` provider.
///
/// Stateless across calls: every `collect()` is an independent, reentrant
/// best-effort pass over the probe groups.
pub struct DeviceCollector<F: FileSystem> {
    fs: F,
    proc_path: String,
    sys_path: String,
    data_path: String,
    app_version: Option<String>,
}

impl<F: FileSystem> DeviceCollector<F> {
    /// Creates a collector with default probe paths (`/proc`, `/sys`, `/`).
    ///
    /// # Arguments
    /// * `fs` - Filesystem implementation (real or mock)
    pub fn new(fs: F) -> Self {
        Self {
            fs,
            proc_path: "/proc".to_string(),
            sys_path: "/sys".to_string(),
            data_path: "/".to_string(),
            app_version: None,
        }
    }

    /// Overrides the proc filesystem base path.
    pub fn with_proc_path(mut self, path: impl Into<String>) -> Self {
        self.proc_path = path.into();
        self
    }

    /// Overrides the sysfs base path.
    pub fn with_sys_path(mut self, path: impl Into<String>) -> Self {
        self.sys_path = path.into();
        self
    }

    /// Overrides the volume path used by the storage probe.
    pub fn with_data_path(mut self, path: impl Into<String>) -> Self {
        self.data_path = path.into();
        self
    }

    /// Supplies the embedding application's version string.
    pub fn with_app_version(mut self, version: impl Into<String>) -> Self {
        self.app_version = Some(version.into());
        self
    }

    /// Collects a complete device snapshot.
    ///
    /// Every field of the fixed schema is populated: groups whose probe
    /// fails contribute their documented fallback values instead. This
    /// method never panics and never returns a partial result.
    pub fn collect(&self) -> DeviceSnapshot {
        let os = resolve(
            os::collect_os_identity(&self.fs, &self.proc_path, &self.sys_path),
            OsIdentity::fallback,
            "os_identity",
        );

        let app = resolve(
            app::collect_app_version(self.app_version.as_deref()),
            AppVersion::fallback,
            "app_version",
        );

        let display = resolve(
            self.collect_display(),
            DisplayMetrics::fallback,
            "display",
        );

        let mem = resolve(
            memory::collect_memory(&self.fs, &self.proc_path),
            MemoryStatus::fallback,
            "memory",
        );

        let store = resolve(
            storage::collect_storage(&self.fs, &self.data_path),
            StorageStatus::fallback,
            "storage",
        );

        let net = resolve(
            network::collect_network(&self.fs, &self.proc_path, &self.sys_path),
            NetworkStatus::fallback,
            "network",
        );

        DeviceSnapshot::from_groups(os, app, display, mem, store, net)
    }

    /// Collects a snapshot and encodes it as a JSON object for the bridge.
    ///
    /// Probe failures never reach this boundary; the single-field
    /// `{"error": ...}` shape is produced only if encoding the snapshot
    /// itself fails.
    pub fn collect_json(&self, pretty: bool) -> String {
        let snapshot = self.collect();
        let encoded = if pretty {
            serde_json::to_string_pretty(&snapshot)
        } else {
            serde_json::to_string(&snapshot)
        };

        match encoded {
            Ok(json) => json,
            Err(e) => {
                tracing::error!(error = %e, "failed to encode device snapshot");
                encode_error_report(&ErrorReport::new(format!(
                    "failed to encode device snapshot: {}",
                    e
                )))
            }
        }
    }

    fn collect_display(&self) -> Result<DisplayMetrics, CollectError> {
        let provider = DisplayProvider::detect(&self.fs, &self.sys_path);
        tracing::debug!(?provider, "selected display metrics source");
        provider.collect(&self.fs, &self.sys_path)
    }
}

/// Maps a probe outcome to its value or the group's fallback.
///
/// This is the fault-containment point: errors stop here, get logged, and
/// are replaced by documented values.
fn resolve<T>(
    outcome: Result<T, CollectError>,
    fallback: impl FnOnce() -> T,
    group: &str,
) -> T {
    match outcome {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(group, error = %e, "probe failed, using fallback values");
            fallback()
        }
    }
}

fn encode_error_report(report: &ErrorReport) -> String {
    serde_json::to_string(report)
        .unwrap_or_else(|_| r#"{"error":"device snapshot encoding failed"}"#.to_string())
}
