// ─────────────────────────────────────────────────────────────────────
// Backfill Plant Calculator — State
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Result keys in dependency order (the order the groups are evaluated in).
pub const RESULT_NAMES: [&str; 19] = [
    "Qa",
    "Qc",
    "Qs",
    "Qd",
    "qh",
    "rho_m",
    "ma",
    "mc",
    "Qj",
    "Q_sand",
    "D",
    "V1",
    "H",
    "qx",
    "qss",
    "Qxz",
    "q1",
    "q2",
    "q_overflow",
];

/// Formula group a result belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultGroup {
    FillVolume,
    SlurryDensity,
    Materials,
    Thickener,
    Flocculant,
    Overflow,
}

impl ResultGroup {
    pub fn title(self) -> &'static str {
        match self {
            ResultGroup::FillVolume => "Fill volume",
            ResultGroup::SlurryDensity => "Slurry density",
            ResultGroup::Materials => "Material consumption",
            ResultGroup::Thickener => "Thickener sizing",
            ResultGroup::Flocculant => "Flocculant dosing",
            ResultGroup::Overflow => "Overflow water",
        }
    }
}

/// Display metadata for one result value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResultField {
    pub name: &'static str,
    pub label: &'static str,
    pub unit: &'static str,
    /// Decimal places used when the value is shown to an operator.
    pub decimals: usize,
    pub group: ResultGroup,
}

const fn field(
    name: &'static str,
    label: &'static str,
    unit: &'static str,
    decimals: usize,
    group: ResultGroup,
) -> ResultField {
    ResultField {
        name,
        label,
        unit,
        decimals,
        group,
    }
}

/// Same order as [`RESULT_NAMES`].
pub static RESULT_FIELDS: [ResultField; 19] = [
    field("Qa", "Annual fill volume", "m³/a", 0, ResultGroup::FillVolume),
    field("Qc", "Daily fill volume", "m³/d", 0, ResultGroup::FillVolume),
    field("Qs", "Daily slurry volume", "m³/d", 0, ResultGroup::FillVolume),
    field("Qd", "Daily slurry preparation capacity", "m³/d", 0, ResultGroup::FillVolume),
    field("qh", "Hourly slurry preparation capacity", "m³/h", 0, ResultGroup::FillVolume),
    field("rho_m", "Slurry density", "t/m³", 3, ResultGroup::SlurryDensity),
    field("ma", "Aggregate per m³ slurry", "t/m³", 3, ResultGroup::Materials),
    field("mc", "Binder per m³ slurry", "t/m³", 3, ResultGroup::Materials),
    field("Qj", "Annual binder consumption", "t/a", 1, ResultGroup::Materials),
    field("Q_sand", "Annual tailings consumption", "t/a", 0, ResultGroup::Materials),
    field("D", "Thickener diameter", "m", 2, ResultGroup::Thickener),
    field("V1", "Deposit-bed volume per metre height", "m³/m", 1, ResultGroup::Thickener),
    field("H", "Thickener height", "m", 0, ResultGroup::Thickener),
    field("qx", "Hourly flocculant use", "t/h", 2, ResultGroup::Flocculant),
    field("qss", "Hourly flocculant dilution water", "m³/h", 2, ResultGroup::Flocculant),
    field("Qxz", "Flocculant preparation capacity", "t/d", 2, ResultGroup::Flocculant),
    field("q1", "Tailings feed flow", "m³/h", 2, ResultGroup::Overflow),
    field("q2", "Underflow flow", "m³/h", 2, ResultGroup::Overflow),
    field("q_overflow", "Overflow water", "m³/h", 2, ResultGroup::Overflow),
];

pub fn result_field(name: &str) -> Option<&'static ResultField> {
    RESULT_FIELDS.iter().find(|f| f.name == name)
}

/// Derived plant quantities. Produced fresh by every calculation and never
/// updated in place. Values may be non-finite when inputs are degenerate;
/// those serialize as JSON `null`, so the type is serialize-only.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ResultSet {
    /// Annual fill volume [m³/a].
    #[serde(rename = "Qa")]
    pub qa: f64,
    /// Daily fill volume [m³/d].
    #[serde(rename = "Qc")]
    pub qc: f64,
    /// Daily slurry volume [m³/d].
    #[serde(rename = "Qs")]
    pub qs: f64,
    /// Daily slurry preparation capacity [m³/d].
    #[serde(rename = "Qd")]
    pub qd: f64,
    /// Hourly slurry preparation capacity [m³/h].
    pub qh: f64,
    /// Slurry density [t/m³].
    pub rho_m: f64,
    /// Aggregate mass per m³ slurry [t].
    pub ma: f64,
    /// Binder mass per m³ slurry [t].
    pub mc: f64,
    /// Annual binder consumption [t/a].
    #[serde(rename = "Qj")]
    pub qj: f64,
    /// Annual tailings consumption [t/a].
    #[serde(rename = "Q_sand")]
    pub q_sand: f64,
    /// Thickener diameter [m].
    #[serde(rename = "D")]
    pub diameter: f64,
    /// Deposit-bed volume per unit height [m³/m].
    #[serde(rename = "V1")]
    pub v1: f64,
    /// Thickener total height [m].
    #[serde(rename = "H")]
    pub height: f64,
    /// Hourly flocculant use [t/h].
    pub qx: f64,
    /// Hourly flocculant dilution water [m³/h].
    pub qss: f64,
    /// Flocculant preparation capacity [t/d].
    #[serde(rename = "Qxz")]
    pub qxz: f64,
    /// Tailings feed flow [m³/h].
    pub q1: f64,
    /// Underflow flow [m³/h].
    pub q2: f64,
    /// Overflow water [m³/h]. Not clamped; may be negative.
    pub q_overflow: f64,
}

impl ResultSet {
    pub fn get(&self, name: &str) -> Option<f64> {
        let value = match name {
            "Qa" => self.qa,
            "Qc" => self.qc,
            "Qs" => self.qs,
            "Qd" => self.qd,
            "qh" => self.qh,
            "rho_m" => self.rho_m,
            "ma" => self.ma,
            "mc" => self.mc,
            "Qj" => self.qj,
            "Q_sand" => self.q_sand,
            "D" => self.diameter,
            "V1" => self.v1,
            "H" => self.height,
            "qx" => self.qx,
            "qss" => self.qss,
            "Qxz" => self.qxz,
            "q1" => self.q1,
            "q2" => self.q2,
            "q_overflow" => self.q_overflow,
            _ => return None,
        };
        Some(value)
    }

    /// `(name, value)` pairs in [`RESULT_NAMES`] order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        RESULT_NAMES
            .into_iter()
            .map(move |name| (name, self.get(name).unwrap_or(f64::NAN)))
    }

    /// Values in [`RESULT_NAMES`] order.
    pub fn to_array(&self) -> [f64; 19] {
        let mut out = [0.0; 19];
        for (slot, (_, value)) in out.iter_mut().zip(self.iter()) {
            *slot = value;
        }
        out
    }

    pub fn to_map(&self) -> BTreeMap<String, f64> {
        self.iter().map(|(k, v)| (k.to_string(), v)).collect()
    }

    /// Names of results that are NaN or infinite.
    pub fn non_finite(&self) -> Vec<&'static str> {
        self.iter()
            .filter(|(_, v)| !v.is_finite())
            .map(|(k, _)| k)
            .collect()
    }

    /// Bitwise equality, so NaN results compare equal to themselves.
    pub fn bitwise_eq(&self, other: &ResultSet) -> bool {
        self.iter()
            .zip(other.iter())
            .all(|((_, a), (_, b))| a.to_bits() == b.to_bits())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_align_with_names() {
        for (field, name) in RESULT_FIELDS.iter().zip(RESULT_NAMES) {
            assert_eq!(field.name, name);
        }
        assert!(result_field("q_overflow").is_some());
        assert!(result_field("V").is_none());
    }

    #[test]
    fn test_every_name_resolves() {
        let results = ResultSet::default();
        for name in RESULT_NAMES {
            assert_eq!(results.get(name), Some(0.0), "{name}");
        }
        assert_eq!(results.get("bogus"), None);
    }

    #[test]
    fn test_serialized_keys_match_names() {
        let value = serde_json::to_value(ResultSet::default()).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), RESULT_NAMES.len());
        for name in RESULT_NAMES {
            assert!(obj.contains_key(name), "missing key {name}");
        }
    }

    #[test]
    fn test_non_finite_serializes_as_null() {
        let results = ResultSet {
            qc: f64::NAN,
            q1: f64::INFINITY,
            ..ResultSet::default()
        };
        let value = serde_json::to_value(results).unwrap();
        assert!(value["Qc"].is_null());
        assert!(value["q1"].is_null());
        assert_eq!(results.non_finite(), vec!["Qc", "q1"]);
    }

    #[test]
    fn test_bitwise_eq_treats_nan_as_equal() {
        let a = ResultSet {
            rho_m: f64::NAN,
            ..ResultSet::default()
        };
        let copy = a;
        assert_ne!(a, copy);
        assert!(a.bitwise_eq(&a));
        let b = ResultSet { qa: 1.0, ..a };
        assert!(!a.bitwise_eq(&b));
    }

    #[test]
    fn test_to_array_order() {
        let results = ResultSet {
            qa: 1.0,
            q_overflow: 19.0,
            ..ResultSet::default()
        };
        let arr = results.to_array();
        assert_eq!(arr[0], 1.0);
        assert_eq!(arr[18], 19.0);
    }
}
