// ─────────────────────────────────────────────────────────────────────
// Backfill Plant Calculator — Terminal Formatting
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Text rendering of results for the terminal.

use std::fmt::Write;

use backfill_engineering::report::HeadlineStats;
use backfill_engineering::scan::ParameterScan;
use backfill_types::state::{result_field, ResultSet, RESULT_FIELDS};

/// Placeholder for NaN and infinite values.
pub const NON_FINITE: &str = "—";

/// Format a value with a fixed number of decimals. Whole numbers get
/// thousands separators; non-finite values become [`NON_FINITE`].
pub fn format_value(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return NON_FINITE.to_string();
    }
    if decimals == 0 {
        // Halves round toward +inf: 2.5 -> 3, -2.5 -> -2.
        let rounded = (value + 0.5).floor();
        // Avoid printing "-0".
        let rounded = if rounded == 0.0 { 0.0 } else { rounded };
        return group_thousands(&format!("{rounded:.0}"));
    }
    format!("{value:.decimals$}")
}

fn group_thousands(digits: &str) -> String {
    let (sign, digits) = match digits.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", digits),
    };
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push_str(sign);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// All results, grouped under formula-group headings.
pub fn results_table(results: &ResultSet) -> String {
    let mut out = String::new();
    let mut current = None;
    for field in RESULT_FIELDS.iter() {
        if current != Some(field.group) {
            if current.is_some() {
                out.push('\n');
            }
            let _ = writeln!(out, "{}", field.group.title());
            current = Some(field.group);
        }
        let value = results.get(field.name).unwrap_or(f64::NAN);
        let _ = writeln!(
            out,
            "  {:<38} {:>10} {:>14} {}",
            field.label,
            field.name,
            format_value(value, field.decimals),
            field.unit
        );
    }
    out
}

pub fn headline_stats(stats: &HeadlineStats) -> String {
    let rows = [
        ("Annual tailings", stats.tailings_t_per_year, "t/a"),
        ("Annual binder", stats.binder_t_per_year, "t/a"),
        ("Daily fill", stats.fill_m3_per_day, "m³/d"),
        ("Hourly slurry", stats.slurry_m3_per_hour, "m³/h"),
    ];
    let mut out = String::from("Summary\n");
    for (label, value, unit) in rows {
        let _ = writeln!(out, "  {:<38} {:>25} {}", label, format_value(value, 0), unit);
    }
    out
}

/// One row per scan step: the swept value followed by the chosen results.
pub fn scan_table(scan: &ParameterScan, columns: &[String]) -> String {
    let mut out = String::new();
    let _ = write!(out, "{:>14}", scan.parameter);
    for name in columns {
        let _ = write!(out, " {name:>14}");
    }
    out.push('\n');

    for (i, &value) in scan.values.iter().enumerate() {
        let _ = write!(out, "{:>14}", format_value(value, 4));
        for name in columns {
            let decimals = result_field(name).map_or(2, |f| f.decimals);
            let cell = scan
                .column(name)
                .map_or(f64::NAN, |column| column[i]);
            let _ = write!(out, " {:>14}", format_value(cell, decimals));
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use backfill_engineering::engine::compute;
    use backfill_engineering::scan::scan_parameter;
    use backfill_types::config::ParameterSet;

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(51_612.903, 0), "51,613");
        assert_eq!(format_value(142_889.66, 0), "142,890");
        assert_eq!(format_value(999.4, 0), "999");
        assert_eq!(format_value(-1_234_567.0, 0), "-1,234,567");
        assert_eq!(format_value(-0.3, 0), "0");
        assert_eq!(format_value(-0.5, 0), "0");
        assert_eq!(format_value(2.5, 0), "3");
        assert_eq!(format_value(-2.5, 0), "-2");
        assert_eq!(format_value(-1_234.5, 0), "-1,234");
        assert_eq!(format_value(1.717_42, 3), "1.717");
        assert_eq!(format_value(206.012_9, 2), "206.01");
        assert_eq!(format_value(f64::NAN, 2), NON_FINITE);
        assert_eq!(format_value(f64::INFINITY, 0), NON_FINITE);
    }

    #[test]
    fn test_results_table_has_every_result() {
        let table = results_table(&compute(&ParameterSet::plant_defaults()));
        for field in RESULT_FIELDS.iter() {
            assert!(table.contains(field.label), "missing {}", field.label);
        }
        assert!(table.contains("51,613"));
        assert!(table.contains("206.01"));
        assert!(table.contains("Thickener sizing"));
    }

    #[test]
    fn test_results_table_marks_degenerate_values() {
        let table = results_table(&compute(&ParameterSet::default()));
        assert!(table.contains(NON_FINITE));
    }

    #[test]
    fn test_scan_table_rows() {
        let scan = scan_parameter(&ParameterSet::plant_defaults(), "z", 1.0, 3.0, 3).unwrap();
        let table = scan_table(&scan, &["Qa".to_string()]);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("Qa"));
        assert!(lines[1].contains("51,613"));
        assert!(lines[3].contains("154,839"));
    }
}
