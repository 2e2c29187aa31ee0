//! Application version metadata probe.
//!
//! The embedding application supplies its version string at collector
//! construction time; the probe derives the numeric build code from it. A
//! missing or unparseable version fails the group, which the aggregator maps
//! to the documented "Unknown" / 0 fallback.

use crate::collector::probes::CollectError;
use crate::collector::probes::parser::parse_version_code;
use crate::model::AppVersion;

pub fn collect_app_version(version: Option<&str>) -> Result<AppVersion, CollectError> {
    let version = version
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| CollectError::Unavailable("application version not provided".to_string()))?;

    let version_code = parse_version_code(version)?;

    Ok(AppVersion {
        version: version.to_string(),
        version_code,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_app_version() {
        let app = collect_app_version(Some("1.4.2")).unwrap();
        assert_eq!(app.version, "1.4.2");
        assert_eq!(app.version_code, 10_402);
    }

    #[test]
    fn test_missing_version_fails_group() {
        assert!(collect_app_version(None).is_err());
        assert!(collect_app_version(Some("")).is_err());
        assert!(collect_app_version(Some("  ")).is_err());
    }

    #[test]
    fn test_unparseable_version_fails_group() {
        assert!(collect_app_version(Some("nightly")).is_err());
    }
}
