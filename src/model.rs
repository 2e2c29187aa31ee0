//! Output model for device snapshots.
//!
//! `DeviceSnapshot` is the single result shape returned to callers. Every
//! field is present in every snapshot: a probe group that fails contributes
//! its documented fallback values instead of dropping fields, so consumers
//! never have to handle a partial schema.

use serde::{Deserialize, Serialize};

/// Sentinel used for string fields the OS identity probe could not resolve.
pub const UNKNOWN: &str = "unknown";

/// Default logical density multiplier when no display metric is available.
pub const DEFAULT_DENSITY: f64 = 1.0;

/// Default dots-per-inch bucket when no display metric is available.
pub const DEFAULT_DENSITY_DPI: i32 = 160;

/// OS release and hardware identity strings.
#[derive(Debug, Clone, PartialEq)]
pub struct OsIdentity {
    pub os_version: String,
    pub build_number: String,
    pub api_level: i32,
    pub manufacturer: String,
    pub brand: String,
    pub product: String,
    pub device: String,
    pub hardware: String,
}

impl OsIdentity {
    /// Identity with every attribute unresolved.
    pub fn fallback() -> Self {
        Self {
            os_version: UNKNOWN.to_string(),
            build_number: UNKNOWN.to_string(),
            api_level: 0,
            manufacturer: UNKNOWN.to_string(),
            brand: UNKNOWN.to_string(),
            product: UNKNOWN.to_string(),
            device: UNKNOWN.to_string(),
            hardware: UNKNOWN.to_string(),
        }
    }
}

/// Version metadata of the embedding application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppVersion {
    pub version: String,
    pub version_code: i32,
}

impl AppVersion {
    pub fn fallback() -> Self {
        Self {
            version: "Unknown".to_string(),
            version_code: 0,
        }
    }
}

/// Display geometry and density.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayMetrics {
    pub width: i32,
    pub height: i32,
    pub density: f64,
    pub density_dpi: i32,
}

impl DisplayMetrics {
    /// Metrics for a host without an obtainable display.
    pub fn fallback() -> Self {
        Self {
            width: 0,
            height: 0,
            density: DEFAULT_DENSITY,
            density_dpi: DEFAULT_DENSITY_DPI,
        }
    }
}

/// Physical memory counters in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MemoryStatus {
    pub total: i64,
    pub available: i64,
    pub used: i64,
}

impl MemoryStatus {
    pub fn fallback() -> Self {
        Self::default()
    }
}

/// Primary volume capacity counters in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StorageStatus {
    pub total: i64,
    pub available: i64,
    pub used: i64,
}

impl StorageStatus {
    pub fn fallback() -> Self {
        Self::default()
    }
}

/// Connectivity state of the active network interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkStatus {
    pub is_connected: bool,
    pub network_type: String,
}

impl NetworkStatus {
    pub fn fallback() -> Self {
        Self {
            is_connected: false,
            network_type: "Unknown".to_string(),
        }
    }
}

/// Complete device snapshot with the full fixed field set.
///
/// Serializes to a flat camelCase JSON object; field order follows
/// declaration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceSnapshot {
    pub os_version: String,
    pub os_name: String,
    pub platform: String,
    pub api_level: i32,
    pub build_number: String,
    pub manufacturer: String,
    pub brand: String,
    pub product: String,
    pub device: String,
    pub hardware: String,
    pub app_version: String,
    pub app_version_code: i32,
    pub screen_width: i32,
    pub screen_height: i32,
    pub screen_density: f64,
    pub screen_density_dpi: i32,
    pub total_memory: i64,
    pub available_memory: i64,
    pub used_memory: i64,
    pub total_storage: i64,
    pub available_storage: i64,
    pub used_storage: i64,
    pub is_connected: bool,
    pub network_type: String,
}

impl DeviceSnapshot {
    /// Assembles a snapshot from the six probe group results.
    pub fn from_groups(
        os: OsIdentity,
        app: AppVersion,
        display: DisplayMetrics,
        memory: MemoryStatus,
        storage: StorageStatus,
        network: NetworkStatus,
    ) -> Self {
        Self {
            os_version: os.os_version,
            os_name: "Linux".to_string(),
            platform: "linux".to_string(),
            api_level: os.api_level,
            build_number: os.build_number,
            manufacturer: os.manufacturer,
            brand: os.brand,
            product: os.product,
            device: os.device,
            hardware: os.hardware,
            app_version: app.version,
            app_version_code: app.version_code,
            screen_width: display.width,
            screen_height: display.height,
            screen_density: display.density,
            screen_density_dpi: display.density_dpi,
            total_memory: memory.total,
            available_memory: memory.available,
            used_memory: memory.used,
            total_storage: storage.total,
            available_storage: storage.available,
            used_storage: storage.used,
            is_connected: network.is_connected,
            network_type: network.network_type,
        }
    }
}

/// Terminal error shape returned when the snapshot machinery itself fails.
///
/// This is distinct from a single probe failing, which is absorbed into
/// fallback values and never surfaces here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReport {
    pub error: String,
}

impl ErrorReport {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
