//! Network reachability probe.
//!
//! The active network is the interface carrying the default route in
//! `/proc/net/route`. Having no default route is a valid probe result (the
//! device is offline), not a failure; only an unreadable route table fails
//! the group.

use std::path::Path;

use crate::collector::probes::CollectError;
use crate::collector::probes::parser::parse_default_route_iface;
use crate::collector::traits::FileSystem;
use crate::model::NetworkStatus;

/// ARPHRD_ETHER from the interface `type` sysfs attribute.
const ARPHRD_ETHER: &str = "1";
/// ARPHRD_LOOPBACK.
const ARPHRD_LOOPBACK: &str = "772";

/// Collects connectivity state and a human-readable type for the active
/// network interface.
pub fn collect_network<F: FileSystem>(
    fs: &F,
    proc_path: &str,
    sys_path: &str,
) -> Result<NetworkStatus, CollectError> {
    let route_path = format!("{}/net/route", proc_path);
    let route = fs.read_to_string(Path::new(&route_path))?;

    let Some(iface) = parse_default_route_iface(&route) else {
        return Ok(NetworkStatus {
            is_connected: false,
            network_type: "Unknown".to_string(),
        });
    };

    let operstate_path = format!("{}/class/net/{}/operstate", sys_path, iface);
    let operstate = fs
        .read_to_string(Path::new(&operstate_path))
        .map(|s| s.trim().to_string())
        .unwrap_or_default();
    // Tunnel and some virtual interfaces report "unknown" while carrying
    // traffic; the default route existing is the stronger signal.
    let is_connected = operstate == "up" || operstate == "unknown";

    Ok(NetworkStatus {
        is_connected,
        network_type: classify_iface(fs, sys_path, &iface),
    })
}

fn classify_iface<F: FileSystem>(fs: &F, sys_path: &str, iface: &str) -> String {
    let base = format!("{}/class/net/{}", sys_path, iface);

    if fs.exists(Path::new(&format!("{}/wireless", base))) {
        return "WIFI".to_string();
    }
    if iface.starts_with("wwan") || iface.starts_with("ppp") {
        return "Mobile".to_string();
    }

    let iface_type = fs
        .read_to_string(Path::new(&format!("{}/type", base)))
        .map(|s| s.trim().to_string())
        .unwrap_or_default();
    match iface_type.as_str() {
        ARPHRD_ETHER => "Ethernet".to_string(),
        ARPHRD_LOOPBACK => "Loopback".to_string(),
        _ => "Unknown".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::mock::MockFs;

    const ROUTE_VIA_WLAN: &str = "\
Iface\tDestination\tGateway \tFlags\tRefCnt\tUse\tMetric\tMask\t\tMTU\tWindow\tIRTT
wlan0\t00000000\t0101A8C0\t0003\t0\t0\t600\t00000000\t0\t0\t0
";

    const ROUTE_NO_DEFAULT: &str = "\
Iface\tDestination\tGateway \tFlags\tRefCnt\tUse\tMetric\tMask\t\tMTU\tWindow\tIRTT
eth0\t0001A8C0\t00000000\t0001\t0\t0\t100\t00FFFFFF\t0\t0\t0
";

    #[test]
    fn test_wifi_connected() {
        let mut fs = MockFs::new();
        fs.add_file("/proc/net/route", ROUTE_VIA_WLAN);
        fs.add_file("/sys/class/net/wlan0/operstate", "up\n");
        fs.add_dir("/sys/class/net/wlan0/wireless");

        let net = collect_network(&fs, "/proc", "/sys").unwrap();
        assert!(net.is_connected);
        assert_eq!(net.network_type, "WIFI");
    }

    #[test]
    fn test_ethernet_connected() {
        let route = ROUTE_VIA_WLAN.replace("wlan0", "eth0");
        let mut fs = MockFs::new();
        fs.add_file("/proc/net/route", route);
        fs.add_file("/sys/class/net/eth0/operstate", "up\n");
        fs.add_file("/sys/class/net/eth0/type", "1\n");

        let net = collect_network(&fs, "/proc", "/sys").unwrap();
        assert!(net.is_connected);
        assert_eq!(net.network_type, "Ethernet");
    }

    #[test]
    fn test_mobile_interface() {
        let route = ROUTE_VIA_WLAN.replace("wlan0", "wwan0");
        let mut fs = MockFs::new();
        fs.add_file("/proc/net/route", route);
        fs.add_file("/sys/class/net/wwan0/operstate", "up\n");

        let net = collect_network(&fs, "/proc", "/sys").unwrap();
        assert_eq!(net.network_type, "Mobile");
    }

    #[test]
    fn test_no_default_route_means_offline() {
        let mut fs = MockFs::new();
        fs.add_file("/proc/net/route", ROUTE_NO_DEFAULT);

        let net = collect_network(&fs, "/proc", "/sys").unwrap();
        assert!(!net.is_connected);
        assert_eq!(net.network_type, "Unknown");
    }

    #[test]
    fn test_interface_down_is_not_connected() {
        let mut fs = MockFs::new();
        fs.add_file("/proc/net/route", ROUTE_VIA_WLAN);
        fs.add_file("/sys/class/net/wlan0/operstate", "down\n");
        fs.add_dir("/sys/class/net/wlan0/wireless");

        let net = collect_network(&fs, "/proc", "/sys").unwrap();
        assert!(!net.is_connected);
        assert_eq!(net.network_type, "WIFI");
    }

    #[test]
    fn test_unreadable_route_table_fails_group() {
        let fs = MockFs::new();
        assert!(collect_network(&fs, "/proc", "/sys").is_err());
    }
}
