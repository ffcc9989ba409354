//! JSON export of the annotated series

use pumpwatch_core::AnnotatedRecord;
use std::path::Path;

use crate::error::{ReportError, Result};

/// Pretty JSON array of annotated records; undefined signals become `null`
pub fn to_json(annotated: &[AnnotatedRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(annotated)?)
}

/// Write the annotated series to `path` as JSON
pub fn write_json(path: impl AsRef<Path>, annotated: &[AnnotatedRecord]) -> Result<()> {
    let path = path.as_ref();
    let json = to_json(annotated)?;
    std::fs::write(path, json).map_err(|source| ReportError::Io {
        path: path.display().to_string(),
        source,
    })?;
    log::info!("Wrote {} annotated records to {}", annotated.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pumpwatch_core::Record;

    #[test]
    fn test_json_shape() {
        let annotated = vec![AnnotatedRecord {
            record: Record::new(NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(), 100.0, 950.0),
            price_change_pct: None,
            avg_volume: None,
            volume_spike: None,
            suspicious: false,
        }];
        let json = to_json(&annotated).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let first = &value[0];
        assert_eq!(first["date"], "2025-04-01");
        assert_eq!(first["price"], 100.0);
        assert_eq!(first["volume"], 950.0);
        assert!(first["price_change_pct"].is_null());
        assert_eq!(first["suspicious"], false);
    }

    #[test]
    fn test_json_round_trips() {
        let annotated = vec![AnnotatedRecord {
            record: Record::new(NaiveDate::from_ymd_opt(2025, 4, 21).unwrap(), 106.0, 2500.0),
            price_change_pct: Some(6.0),
            avg_volume: Some(1075.0),
            volume_spike: Some(2.5),
            suspicious: true,
        }];
        let json = to_json(&annotated).unwrap();
        let parsed: Vec<AnnotatedRecord> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, annotated);
    }

    #[test]
    fn test_write_to_missing_dir_fails() {
        let err = write_json("/nonexistent-dir/pumpwatch/out.json", &[]).unwrap_err();
        assert!(matches!(err, ReportError::Io { .. }));
    }
}
