//! Pre-built mock device states for testing.
//!
//! These scenarios provide realistic `/proc` and `/sys` contents for the
//! device conditions the collector has to handle.

use super::filesystem::MockFs;
use crate::collector::traits::VolumeStats;

const EDID_MAGIC: [u8; 8] = [0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x00];

/// Builds a minimal EDID base block reporting the given image size in cm.
fn edid_blob(h_cm: u8, v_cm: u8) -> Vec<u8> {
    let mut edid = vec![0u8; 128];
    edid[..8].copy_from_slice(&EDID_MAGIC);
    edid[21] = h_cm;
    edid[22] = v_cm;
    edid
}

impl MockFs {
    /// A typical laptop: DRM panel with EDID, wifi default route, healthy
    /// memory and storage.
    pub fn typical_device() -> Self {
        let mut fs = Self::new();

        fs.add_file("/proc/sys/kernel/osrelease", "6.8.0-45-generic\n");
        fs.add_file(
            "/proc/sys/kernel/version",
            "#45~22.04.1-Ubuntu SMP PREEMPT_DYNAMIC Tue Sep 10 12:00:00 UTC 2\n",
        );

        fs.add_file("/sys/class/dmi/id/sys_vendor", "LENOVO\n");
        fs.add_file("/sys/class/dmi/id/board_vendor", "LENOVO\n");
        fs.add_file("/sys/class/dmi/id/product_name", "21F8002GMX\n");
        fs.add_file("/sys/class/dmi/id/product_family", "ThinkPad T14s Gen 4\n");
        fs.add_file("/sys/class/dmi/id/board_name", "21F8002GMX\n");

        fs.add_dir("/sys/class/drm/card0");
        fs.add_file("/sys/class/drm/card0-eDP-1/status", "connected\n");
        fs.add_file("/sys/class/drm/card0-eDP-1/modes", "1920x1080\n1280x720\n");
        fs.add_bytes("/sys/class/drm/card0-eDP-1/edid", edid_blob(31, 17));
        fs.add_file("/sys/class/drm/card0-HDMI-A-1/status", "disconnected\n");

        fs.add_file(
            "/proc/meminfo",
            "\
MemTotal:       16384000 kB
MemFree:         8192000 kB
MemAvailable:   12000000 kB
Buffers:          512000 kB
Cached:          2048000 kB
",
        );

        fs.add_volume(
            "/",
            VolumeStats {
                block_size: 4096,
                total_blocks: 125_000_000,
                available_blocks: 50_000_000,
            },
        );

        fs.add_file(
            "/proc/net/route",
            "\
Iface\tDestination\tGateway \tFlags\tRefCnt\tUse\tMetric\tMask\t\tMTU\tWindow\tIRTT
wlan0\t00000000\t0101A8C0\t0003\t0\t0\t600\t00000000\t0\t0\t0
wlan0\t0001A8C0\t00000000\t0001\t0\t0\t600\t00FFFFFF\t0\t0\t0
",
        );
        fs.add_file("/sys/class/net/wlan0/operstate", "up\n");
        fs.add_dir("/sys/class/net/wlan0/wireless");

        fs
    }

    /// A headless server: no display subsystem at all, wired network.
    pub fn headless_server() -> Self {
        let mut fs = Self::typical_device();

        // Strip the display subsystem
        fs.remove_file("/sys/class/drm/card0-eDP-1/status");
        fs.remove_file("/sys/class/drm/card0-eDP-1/modes");
        fs.remove_file("/sys/class/drm/card0-eDP-1/edid");
        fs.remove_file("/sys/class/drm/card0-HDMI-A-1/status");

        // Wired default route instead of wifi
        fs.add_file(
            "/proc/net/route",
            "\
Iface\tDestination\tGateway \tFlags\tRefCnt\tUse\tMetric\tMask\t\tMTU\tWindow\tIRTT
eth0\t00000000\t0101A8C0\t0003\t0\t0\t100\t00000000\t0\t0\t0
",
        );
        fs.add_file("/sys/class/net/eth0/operstate", "up\n");
        fs.add_file("/sys/class/net/eth0/type", "1\n");

        fs
    }

    /// A device with no default route: offline but otherwise healthy.
    pub fn offline_device() -> Self {
        let mut fs = Self::typical_device();
        fs.add_file(
            "/proc/net/route",
            "Iface\tDestination\tGateway \tFlags\tRefCnt\tUse\tMetric\tMask\t\tMTU\tWindow\tIRTT\n",
        );
        fs
    }

    /// An old embedded device: framebuffer console only, no DRM, no DMI.
    pub fn legacy_framebuffer_device() -> Self {
        let mut fs = Self::new();

        fs.add_file("/proc/sys/kernel/osrelease", "4.9.337\n");
        fs.add_file(
            "/proc/sys/kernel/version",
            "#1 SMP Thu Jan 12 10:00:00 UTC 2023\n",
        );
        fs.add_file("/sys/class/graphics/fb0/virtual_size", "800,480\n");
        fs.add_file(
            "/proc/meminfo",
            "MemTotal:  512000 kB\nMemFree:  128000 kB\n",
        );
        fs.add_volume(
            "/",
            VolumeStats {
                block_size: 1024,
                total_blocks: 4_000_000,
                available_blocks: 1_000_000,
            },
        );
        fs.add_file(
            "/proc/net/route",
            "\
Iface\tDestination\tGateway \tFlags\tRefCnt\tUse\tMetric\tMask\t\tMTU\tWindow\tIRTT
eth0\t00000000\t0101A8C0\t0003\t0\t0\t0\t00000000\t0\t0\t0
",
        );
        fs.add_file("/sys/class/net/eth0/operstate", "up\n");
        fs.add_file("/sys/class/net/eth0/type", "1\n");

        fs
    }
}
