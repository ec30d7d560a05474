// ─────────────────────────────────────────────────────────────────────
// Backfill Plant Calculator — Export Report
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Timestamped export document: parameters, results and a design summary.

use std::path::{Path, PathBuf};

use backfill_types::config::ParameterSet;
use backfill_types::error::BackfillResult;
use backfill_types::state::ResultSet;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use crate::engine::compute;

/// Headline design figures carried in every export.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub annual_fill_volume: f64,
    pub daily_fill_volume: f64,
    pub annual_sand_consumption: f64,
    pub annual_cement_consumption: f64,
    pub thickener_diameter: f64,
    pub thickener_height: f64,
}

impl From<&ResultSet> for ReportSummary {
    fn from(r: &ResultSet) -> Self {
        ReportSummary {
            annual_fill_volume: r.qa,
            daily_fill_volume: r.qc,
            annual_sand_consumption: r.q_sand,
            annual_cement_consumption: r.qj,
            thickener_diameter: r.diameter,
            thickener_height: r.height,
        }
    }
}

/// Operator dashboard figures: tailings and binder per year, fill per day,
/// slurry per hour.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HeadlineStats {
    pub tailings_t_per_year: f64,
    pub binder_t_per_year: f64,
    pub fill_m3_per_day: f64,
    pub slurry_m3_per_hour: f64,
}

impl From<&ResultSet> for HeadlineStats {
    fn from(r: &ResultSet) -> Self {
        HeadlineStats {
            tailings_t_per_year: r.q_sand,
            binder_t_per_year: r.qj,
            fill_m3_per_day: r.qc,
            slurry_m3_per_hour: r.qh,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportReport {
    pub timestamp: DateTime<Utc>,
    pub parameters: ParameterSet,
    pub results: ResultSet,
    pub summary: ReportSummary,
}

impl ExportReport {
    /// Compute results for `parameters` and stamp the report with `timestamp`.
    pub fn new(parameters: ParameterSet, timestamp: DateTime<Utc>) -> Self {
        let results = compute(&parameters);
        ExportReport {
            timestamp,
            parameters,
            summary: ReportSummary::from(&results),
            results,
        }
    }

    /// `backfill_results_<YYYY-MM-DD>.json`, dated by the report timestamp.
    pub fn file_name(&self) -> String {
        format!("backfill_results_{}.json", self.timestamp.format("%Y-%m-%d"))
    }

    pub fn to_json_pretty(&self) -> BackfillResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the report into `dir` under [`ExportReport::file_name`] and
    /// return the full path.
    pub fn write_to_dir(&self, dir: impl AsRef<Path>) -> BackfillResult<PathBuf> {
        let path = dir.as_ref().join(self.file_name());
        std::fs::write(&path, self.to_json_pretty()?)?;
        debug!(path = %path.display(), "export written");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn stamp() -> DateTime<Utc> {
        "2026-10-18T09:15:00Z".parse().unwrap()
    }

    #[test]
    fn test_summary_mirrors_results() {
        let report = ExportReport::new(ParameterSet::plant_defaults(), stamp());
        assert_eq!(report.summary.annual_fill_volume, report.results.qa);
        assert_eq!(report.summary.daily_fill_volume, report.results.qc);
        assert_eq!(report.summary.annual_sand_consumption, report.results.q_sand);
        assert_eq!(report.summary.annual_cement_consumption, report.results.qj);
        assert_eq!(report.summary.thickener_diameter, report.results.diameter);
        assert_eq!(report.summary.thickener_height, report.results.height);
    }

    #[test]
    fn test_document_shape() {
        let report = ExportReport::new(ParameterSet::plant_defaults(), stamp());
        let doc: Value = serde_json::from_str(&report.to_json_pretty().unwrap()).unwrap();
        assert_eq!(doc["timestamp"], "2026-10-18T09:15:00Z");
        assert_eq!(doc["parameters"]["pa"], 144_000.0);
        assert!(doc["results"]["Q_sand"].is_number());
        assert!(doc["summary"]["thickenerDiameter"].is_number());
        assert!(doc["summary"]["annualCementConsumption"].is_number());
    }

    #[test]
    fn test_non_finite_results_export_as_null() {
        let report = ExportReport::new(ParameterSet::default(), stamp());
        let doc: Value = serde_json::from_str(&report.to_json_pretty().unwrap()).unwrap();
        assert!(doc["results"]["Qa"].is_null());
        assert!((doc["results"]["H"].as_f64().unwrap() - 10.78).abs() < 1e-12);
    }

    #[test]
    fn test_write_to_dir() {
        let dir = tempfile::tempdir().unwrap();
        let report = ExportReport::new(ParameterSet::plant_defaults(), stamp());
        let path = report.write_to_dir(dir.path()).unwrap();
        assert_eq!(
            path.file_name().unwrap().to_string_lossy(),
            "backfill_results_2026-10-18.json"
        );
        let reloaded = ParameterSet::from_file(&path).unwrap();
        assert_eq!(reloaded, report.parameters);
    }

    #[test]
    fn test_degenerate_export_reloads_parameters() {
        let dir = tempfile::tempdir().unwrap();
        let params = ParameterSet::default().with("z", 2.0).unwrap();
        let report = ExportReport::new(params, stamp());
        assert!(!report.results.non_finite().is_empty());

        let path = report.write_to_dir(dir.path()).unwrap();
        assert_eq!(ParameterSet::from_file(&path).unwrap(), params);
    }

    #[test]
    fn test_headline_stats() {
        let r = compute(&ParameterSet::plant_defaults());
        let stats = HeadlineStats::from(&r);
        assert_eq!(stats.tailings_t_per_year, r.q_sand);
        assert_eq!(stats.slurry_m3_per_hour, r.qh);
    }
}
