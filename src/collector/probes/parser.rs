//! Parsers for `/proc` and `/sys` attribute files.
//!
//! These are pure functions that parse file contents into structured data.
//! They are designed to be easily testable with string or byte inputs.

/// Error type for parsing failures.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub message: String,
}

impl ParseError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self {
            message: msg.into(),
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Parse error: {}", self.message)
    }
}

impl std::error::Error for ParseError {}

/// Parsed memory counters from `/proc/meminfo`, in kilobytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MemInfo {
    pub mem_total_kb: u64,
    pub mem_available_kb: u64,
}

/// Parses `/proc/meminfo` content.
///
/// Requires `MemTotal`. Prefers `MemAvailable` (kernel 3.14+); falls back to
/// `MemFree` on older kernels.
pub fn parse_meminfo(content: &str) -> Result<MemInfo, ParseError> {
    let mut mem_total = None;
    let mut mem_available = None;
    let mut mem_free = None;

    for line in content.lines() {
        let Some((key, rest)) = line.split_once(':') else {
            continue;
        };
        let value = rest
            .split_whitespace()
            .next()
            .and_then(|v| v.parse::<u64>().ok());

        match key {
            "MemTotal" => mem_total = value,
            "MemAvailable" => mem_available = value,
            "MemFree" => mem_free = value,
            _ => {}
        }
    }

    let mem_total_kb = mem_total.ok_or_else(|| ParseError::new("missing MemTotal in meminfo"))?;
    let mem_available_kb = mem_available
        .or(mem_free)
        .ok_or_else(|| ParseError::new("missing MemAvailable and MemFree in meminfo"))?;

    Ok(MemInfo {
        mem_total_kb,
        mem_available_kb,
    })
}

/// Parses the kernel major version from an osrelease string like
/// `"6.8.0-45-generic"`.
pub fn parse_kernel_major(release: &str) -> Result<i32, ParseError> {
    let major = release
        .trim()
        .split(['.', '-'])
        .next()
        .unwrap_or_default();
    major
        .parse::<i32>()
        .map_err(|_| ParseError::new(format!("invalid kernel release: {:?}", release.trim())))
}

/// Derives a numeric build code from a semantic version string.
///
/// `"1.2.3"` becomes `10203`; a missing minor or patch component counts as
/// zero; pre-release suffixes (`"1.2.3-rc1"`) are ignored.
pub fn parse_version_code(version: &str) -> Result<i32, ParseError> {
    let mut parts = version.trim().splitn(3, '.');

    let mut component = |required: bool| -> Result<i32, ParseError> {
        match parts.next() {
            Some(p) => {
                let digits: String = p.chars().take_while(|c| c.is_ascii_digit()).collect();
                if digits.is_empty() {
                    if required {
                        Err(ParseError::new(format!("invalid version: {:?}", version)))
                    } else {
                        Ok(0)
                    }
                } else {
                    digits
                        .parse::<i32>()
                        .map_err(|_| ParseError::new(format!("invalid version: {:?}", version)))
                }
            }
            None if required => Err(ParseError::new(format!("invalid version: {:?}", version))),
            None => Ok(0),
        }
    };

    let major = component(true)?;
    let minor = component(false)?;
    let patch = component(false)?;

    Ok(major * 10_000 + minor * 100 + patch)
}

/// Parses the preferred mode line of a DRM connector, e.g. `"1920x1080"`.
///
/// The `modes` sysfs file lists one mode per line; the first line is the
/// preferred mode.
pub fn parse_mode_line(content: &str) -> Result<(i32, i32), ParseError> {
    let line = content
        .lines()
        .next()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .ok_or_else(|| ParseError::new("empty modes file"))?;

    let (w, h) = line
        .split_once('x')
        .ok_or_else(|| ParseError::new(format!("invalid mode line: {:?}", line)))?;

    let width = w
        .parse::<i32>()
        .map_err(|_| ParseError::new(format!("invalid mode width: {:?}", w)))?;
    // Interlaced modes are suffixed, e.g. "1920x1080i"
    let h_digits: String = h.chars().take_while(|c| c.is_ascii_digit()).collect();
    let height = h_digits
        .parse::<i32>()
        .map_err(|_| ParseError::new(format!("invalid mode height: {:?}", h)))?;

    Ok((width, height))
}

/// Parses a framebuffer `virtual_size` file, e.g. `"1920,1080"`.
pub fn parse_virtual_size(content: &str) -> Result<(i32, i32), ParseError> {
    let line = content.trim();
    let (w, h) = line
        .split_once(',')
        .ok_or_else(|| ParseError::new(format!("invalid virtual_size: {:?}", line)))?;

    let width = w
        .trim()
        .parse::<i32>()
        .map_err(|_| ParseError::new(format!("invalid framebuffer width: {:?}", w)))?;
    let height = h
        .trim()
        .parse::<i32>()
        .map_err(|_| ParseError::new(format!("invalid framebuffer height: {:?}", h)))?;

    Ok((width, height))
}

/// EDID header magic bytes.
const EDID_MAGIC: [u8; 8] = [0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x00];

/// Extracts the maximum image size in centimeters from an EDID blob.
///
/// Bytes 21 and 22 of the base block carry the horizontal and vertical image
/// size in cm. Returns `None` for a malformed blob or when the display does
/// not report a physical size (both bytes zero, common for projectors).
pub fn edid_display_size_cm(edid: &[u8]) -> Option<(u32, u32)> {
    if edid.len() < 23 || edid[..8] != EDID_MAGIC {
        return None;
    }
    let h_cm = u32::from(edid[21]);
    let v_cm = u32::from(edid[22]);
    if h_cm == 0 || v_cm == 0 {
        return None;
    }
    Some((h_cm, v_cm))
}

/// Computes the density multiplier and dpi bucket from pixel width and
/// physical width in centimeters.
pub fn density_from_physical_size(width_px: i32, h_cm: u32) -> (f64, i32) {
    let inches = f64::from(h_cm) / 2.54;
    let dpi = f64::from(width_px) / inches;
    (dpi / 160.0, dpi.round() as i32)
}

/// Finds the interface carrying the default route in `/proc/net/route`.
///
/// The route table lists one entry per line after a header; the default route
/// has destination `00000000` and the RTF_UP flag set.
pub fn parse_default_route_iface(content: &str) -> Option<String> {
    const RTF_UP: u32 = 0x0001;

    for line in content.lines().skip(1) {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < 4 {
            continue;
        }
        let destination = fields[1];
        let flags = u32::from_str_radix(fields[3], 16).unwrap_or(0);
        if destination == "00000000" && flags & RTF_UP != 0 {
            return Some(fields[0].to_string());
        }
    }
    None
}
