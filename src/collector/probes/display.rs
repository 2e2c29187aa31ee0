//! Display geometry probe with two source strategies.
//!
//! Modern hosts expose connector state through the DRM subsystem at
//! `/sys/class/drm`; older or minimal kernels only expose the framebuffer
//! console at `/sys/class/graphics`. `DisplayProvider::detect` picks the
//! strategy at call time based on what the running host actually has, and
//! both strategies feed the same `DisplayMetrics` schema.

use std::path::Path;

use crate::collector::probes::CollectError;
use crate::collector::probes::parser::{
    density_from_physical_size, edid_display_size_cm, parse_mode_line, parse_virtual_size,
};
use crate::collector::traits::FileSystem;
use crate::model::{DEFAULT_DENSITY, DEFAULT_DENSITY_DPI, DisplayMetrics};

/// Source strategy for display metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayProvider {
    /// DRM connectors under `/sys/class/drm` (kernel 2.6.29+, any modern host).
    Drm,
    /// Framebuffer console under `/sys/class/graphics`.
    Framebuffer,
}

impl DisplayProvider {
    /// Picks the strategy supported by the running host.
    pub fn detect<F: FileSystem>(fs: &F, sys_path: &str) -> Self {
        let drm = format!("{}/class/drm", sys_path);
        if fs.exists(Path::new(&drm)) {
            DisplayProvider::Drm
        } else {
            DisplayProvider::Framebuffer
        }
    }

    /// Collects metrics from the selected source.
    pub fn collect<F: FileSystem>(
        &self,
        fs: &F,
        sys_path: &str,
    ) -> Result<DisplayMetrics, CollectError> {
        match self {
            DisplayProvider::Drm => collect_drm(fs, sys_path),
            DisplayProvider::Framebuffer => collect_framebuffer(fs, sys_path),
        }
    }
}

/// Reads the preferred mode of the first connected DRM connector.
///
/// Density is derived from the EDID physical size when the panel reports
/// one; otherwise the defaults stand in.
fn collect_drm<F: FileSystem>(fs: &F, sys_path: &str) -> Result<DisplayMetrics, CollectError> {
    let drm_dir = format!("{}/class/drm", sys_path);
    let mut entries = fs.read_dir(Path::new(&drm_dir))?;
    // Deterministic connector order across calls
    entries.sort();

    for entry in entries {
        if !is_connector(&entry) {
            continue;
        }

        let status = fs
            .read_to_string(&entry.join("status"))
            .map(|s| s.trim().to_string())
            .unwrap_or_default();
        if status != "connected" {
            continue;
        }

        let modes = fs.read_to_string(&entry.join("modes"))?;
        let (width, height) = parse_mode_line(&modes)?;

        let (density, density_dpi) = fs
            .read_bytes(&entry.join("edid"))
            .ok()
            .as_deref()
            .and_then(edid_display_size_cm)
            .map(|(h_cm, _)| density_from_physical_size(width, h_cm))
            .unwrap_or((DEFAULT_DENSITY, DEFAULT_DENSITY_DPI));

        return Ok(DisplayMetrics {
            width,
            height,
            density,
            density_dpi,
        });
    }

    Err(CollectError::Unavailable(
        "no connected DRM connector".to_string(),
    ))
}

/// Connector directories are named `card<N>-<CONNECTOR>`, e.g. `card0-eDP-1`.
fn is_connector(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|name| name.starts_with("card") && name.contains('-'))
}

/// Reads the virtual resolution of the primary framebuffer.
fn collect_framebuffer<F: FileSystem>(
    fs: &F,
    sys_path: &str,
) -> Result<DisplayMetrics, CollectError> {
    let size_path = format!("{}/class/graphics/fb0/virtual_size", sys_path);
    let content = fs.read_to_string(Path::new(&size_path))?;
    let (width, height) = parse_virtual_size(&content)?;

    // The framebuffer does not report physical size
    Ok(DisplayMetrics {
        width,
        height,
        density: DEFAULT_DENSITY,
        density_dpi: DEFAULT_DENSITY_DPI,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::mock::MockFs;

    fn edid_with_size(h_cm: u8, v_cm: u8) -> Vec<u8> {
        let mut edid = vec![0u8; 128];
        edid[..8].copy_from_slice(&[0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x00]);
        edid[21] = h_cm;
        edid[22] = v_cm;
        edid
    }

    #[test]
    fn test_detect_prefers_drm() {
        let mut fs = MockFs::new();
        fs.add_dir("/sys/class/drm");
        assert_eq!(DisplayProvider::detect(&fs, "/sys"), DisplayProvider::Drm);
    }

    #[test]
    fn test_detect_falls_back_to_framebuffer() {
        let mut fs = MockFs::new();
        fs.add_dir("/sys/class/graphics/fb0");
        assert_eq!(
            DisplayProvider::detect(&fs, "/sys"),
            DisplayProvider::Framebuffer
        );
    }

    #[test]
    fn test_drm_connected_panel_with_edid() {
        let mut fs = MockFs::new();
        fs.add_dir("/sys/class/drm/card0");
        fs.add_file("/sys/class/drm/card0-eDP-1/status", "connected\n");
        fs.add_file("/sys/class/drm/card0-eDP-1/modes", "1920x1080\n1280x720\n");
        fs.add_bytes("/sys/class/drm/card0-eDP-1/edid", edid_with_size(60, 34));

        let metrics = DisplayProvider::Drm.collect(&fs, "/sys").unwrap();
        assert_eq!(metrics.width, 1920);
        assert_eq!(metrics.height, 1080);
        // 1920 px over 60 cm ~ 81 dpi
        assert_eq!(metrics.density_dpi, 81);
        assert!(metrics.density < 1.0);
    }

    #[test]
    fn test_drm_skips_disconnected_connectors() {
        let mut fs = MockFs::new();
        fs.add_file("/sys/class/drm/card0-HDMI-A-1/status", "disconnected\n");
        fs.add_file("/sys/class/drm/card0-eDP-1/status", "connected\n");
        fs.add_file("/sys/class/drm/card0-eDP-1/modes", "2560x1440\n");

        let metrics = DisplayProvider::Drm.collect(&fs, "/sys").unwrap();
        assert_eq!(metrics.width, 2560);
        // No EDID: density defaults stand in
        assert_eq!(metrics.density, DEFAULT_DENSITY);
        assert_eq!(metrics.density_dpi, DEFAULT_DENSITY_DPI);
    }

    #[test]
    fn test_drm_headless_is_unavailable() {
        let mut fs = MockFs::new();
        fs.add_file("/sys/class/drm/card0-HDMI-A-1/status", "disconnected\n");

        let result = DisplayProvider::Drm.collect(&fs, "/sys");
        assert!(matches!(result, Err(CollectError::Unavailable(_))));
    }

    #[test]
    fn test_framebuffer() {
        let mut fs = MockFs::new();
        fs.add_file("/sys/class/graphics/fb0/virtual_size", "1024,768\n");

        let metrics = DisplayProvider::Framebuffer.collect(&fs, "/sys").unwrap();
        assert_eq!(metrics.width, 1024);
        assert_eq!(metrics.height, 768);
        assert_eq!(metrics.density, DEFAULT_DENSITY);
        assert_eq!(metrics.density_dpi, DEFAULT_DENSITY_DPI);
    }

    #[test]
    fn test_framebuffer_missing_fails_group() {
        let fs = MockFs::new();
        assert!(DisplayProvider::Framebuffer.collect(&fs, "/sys").is_err());
    }
}
