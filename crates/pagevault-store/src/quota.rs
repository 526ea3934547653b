//! Soft capacity quota for embedded backends.
//!
//! The embedded store mirrors a 5 MiB browser-storage budget. Writes are
//! rejected once projected usage crosses 80% of that budget, so editors
//! get a warning while there is still room to remove oversized content
//! (typically inlined images).

use pagevault_types::Document;

use crate::error::{StoreError, StoreResult};

/// Total capacity of an embedded backend, in bytes.
pub const EMBEDDED_CAPACITY_BYTES: u64 = 5 * 1024 * 1024;

/// Percentage of capacity at which writes start failing.
pub const QUOTA_THRESHOLD_PCT: u64 = 80;

/// The soft limit in bytes.
pub fn soft_limit() -> u64 {
    EMBEDDED_CAPACITY_BYTES * QUOTA_THRESHOLD_PCT / 100
}

/// Fail with [`StoreError::QuotaExceeded`] if `projected` usage crosses
/// the soft limit.
pub fn check_projected(projected: u64) -> StoreResult<()> {
    let limit = soft_limit();
    if projected > limit {
        return Err(StoreError::QuotaExceeded { projected, limit });
    }
    Ok(())
}

/// Bytes one entry contributes to usage: key length plus serialized
/// document length.
pub fn entry_size(key: &str, document: &Document) -> StoreResult<u64> {
    let body = serde_json::to_string(document)?;
    Ok(key.len() as u64 + body.len() as u64)
}

/// Point-in-time usage of an embedded backend.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UsageReport {
    pub used_bytes: u64,
    pub capacity_bytes: u64,
}

impl UsageReport {
    pub fn new(used_bytes: u64) -> Self {
        Self {
            used_bytes,
            capacity_bytes: EMBEDDED_CAPACITY_BYTES,
        }
    }

    /// Usage as a percentage of total capacity.
    pub fn percent_used(&self) -> f64 {
        self.used_bytes as f64 / self.capacity_bytes as f64 * 100.0
    }

    /// Whether usage has crossed the warning threshold.
    pub fn warning(&self) -> bool {
        self.used_bytes > soft_limit()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn soft_limit_is_eighty_percent() {
        assert_eq!(soft_limit(), 4_194_304);
        assert_eq!(soft_limit(), EMBEDDED_CAPACITY_BYTES * 80 / 100);
    }

    #[test]
    fn under_limit_passes() {
        assert!(check_projected(soft_limit()).is_ok());
    }

    #[test]
    fn over_limit_fails() {
        let err = check_projected(soft_limit() + 1).unwrap_err();
        assert!(err.is_quota());
    }

    #[test]
    fn entry_size_counts_key_and_body() {
        let doc = json!({"a": 1});
        let size = entry_size("home", &doc).unwrap();
        assert_eq!(size, 4 + "{\"a\":1}".len() as u64);
    }

    #[test]
    fn usage_report_warning() {
        assert!(!UsageReport::new(0).warning());
        assert!(UsageReport::new(soft_limit() + 1).warning());
    }

    #[test]
    fn usage_report_percent() {
        let report = UsageReport::new(EMBEDDED_CAPACITY_BYTES / 2);
        assert!((report.percent_used() - 50.0).abs() < f64::EPSILON);
    }
}
