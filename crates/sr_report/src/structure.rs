//! Report document model: run summary + ranked entries.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use sr_core::entities::ReportEntry;
use thiserror::Error;

/// Errors specific to assembling a report document.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("invalid UTC timestamp (expected RFC3339): {0}")]
    BadUtc(String),
}

/// Engine identifiers echoed into the run summary.
#[derive(Clone, Debug, Serialize)]
pub struct EngineMeta {
    pub name: String,
    pub version: String,
}

impl EngineMeta {
    pub fn current() -> Self {
        Self {
            name: "sr_engine".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Provenance block: who produced the report, from what, and what was
/// tolerated along the way.
#[derive(Clone, Debug, Serialize)]
pub struct RunSummary {
    pub engine: EngineMeta,
    /// RFC3339 UTC, normalized to second precision with a `Z` suffix.
    pub generated_at: String,
    /// SHA-256 of the dataset file bytes, lowercase hex.
    pub dataset_sha256: String,
    pub seller_count: u64,
    pub product_count: u64,
    pub record_count: u64,
    /// Records dropped for an unknown seller id.
    pub records_ignored: u64,
    /// Line items dropped for an unknown SKU.
    pub items_ignored: u64,
}

/// The full report artifact: provenance first, then the ranked entries.
#[derive(Clone, Debug, Serialize)]
pub struct ReportDoc {
    pub run_summary: RunSummary,
    pub report: Vec<ReportEntry>,
}

impl ReportDoc {
    /// Assemble a document, normalizing the supplied timestamp.
    pub fn new(mut summary: RunSummary, report: Vec<ReportEntry>) -> Result<Self, ReportError> {
        summary.generated_at = normalize_rfc3339_utc(&summary.generated_at)?;
        Ok(Self {
            run_summary: summary,
            report,
        })
    }
}

/// Parse and normalize an RFC3339 UTC timestamp; returns `…Z`, second precision.
pub fn normalize_rfc3339_utc(ts: &str) -> Result<String, ReportError> {
    let dt: DateTime<Utc> = ts
        .parse::<DateTime<Utc>>()
        .map_err(|_| ReportError::BadUtc(ts.to_string()))?;
    Ok(dt.to_rfc3339_opts(SecondsFormat::Secs, true))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(ts: &str) -> RunSummary {
        RunSummary {
            engine: EngineMeta::current(),
            generated_at: ts.to_string(),
            dataset_sha256: "0".repeat(64),
            seller_count: 1,
            product_count: 1,
            record_count: 1,
            records_ignored: 0,
            items_ignored: 0,
        }
    }

    #[test]
    fn timestamps_are_normalized_to_seconds_z() {
        let doc = ReportDoc::new(summary("2026-08-07T10:15:30.123456+00:00"), vec![]).unwrap();
        assert_eq!(doc.run_summary.generated_at, "2026-08-07T10:15:30Z");
    }

    #[test]
    fn offset_timestamps_convert_to_utc() {
        let doc = ReportDoc::new(summary("2026-08-07T12:00:00+02:00"), vec![]).unwrap();
        assert_eq!(doc.run_summary.generated_at, "2026-08-07T10:00:00Z");
    }

    #[test]
    fn garbage_timestamps_are_rejected() {
        let err = ReportDoc::new(summary("yesterday-ish"), vec![]).unwrap_err();
        assert!(matches!(err, ReportError::BadUtc(_)));
    }
}
