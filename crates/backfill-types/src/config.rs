// ─────────────────────────────────────────────────────────────────────
// Backfill Plant Calculator — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use std::collections::BTreeMap;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::{BackfillError, BackfillResult};

/// Parameter keys in display order, exactly as they appear in JSON documents.
pub const PARAMETER_NAMES: [&str; 16] = [
    "z", "pa", "gamma_k", "T", "K1", "K2", "K3", "t", "q", "pd", "rho_c", "rho_a", "N", "Cw",
    "Cd", "Ca",
];

/// Input parameters for one plant calculation.
///
/// Every field is optional on input. Missing, null, boolean or otherwise
/// non-numeric values become `0.0`; numeric strings are read like a form
/// field (leading number wins, `"12 h"` → 12). Unknown keys are ignored.
/// `Default` is therefore the all-zero set, not the plant reference point;
/// see [`ParameterSet::plant_defaults`] for that.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ParameterSet {
    /// Simultaneously active stopes [count].
    #[serde(deserialize_with = "lenient_f64")]
    pub z: f64,
    /// Annual ore output per stope [t/a].
    #[serde(deserialize_with = "lenient_f64")]
    pub pa: f64,
    /// Ore bulk density [t/m³].
    #[serde(deserialize_with = "lenient_f64")]
    pub gamma_k: f64,
    /// Annual working days [d/a].
    #[serde(rename = "T", deserialize_with = "lenient_f64")]
    pub days_per_year: f64,
    /// Filling ratio unevenness coefficient.
    #[serde(rename = "K1", deserialize_with = "lenient_f64")]
    pub k1: f64,
    /// Backfill-to-void unevenness coefficient.
    #[serde(rename = "K2", deserialize_with = "lenient_f64")]
    pub k2: f64,
    /// Slurry preparation unevenness coefficient.
    #[serde(rename = "K3", deserialize_with = "lenient_f64")]
    pub k3: f64,
    /// Daily working hours [h].
    #[serde(rename = "t", deserialize_with = "lenient_f64")]
    pub hours_per_day: f64,
    /// Hourly slurry production capacity [m³/h].
    #[serde(deserialize_with = "lenient_f64")]
    pub q: f64,
    /// Daily tailings feed mass [t/d].
    #[serde(deserialize_with = "lenient_f64")]
    pub pd: f64,
    /// Cementitious material density [t/m³].
    #[serde(deserialize_with = "lenient_f64")]
    pub rho_c: f64,
    /// Aggregate (tailings) density [t/m³].
    #[serde(deserialize_with = "lenient_f64")]
    pub rho_a: f64,
    /// Aggregate-to-binder mass ratio.
    #[serde(rename = "N", deserialize_with = "lenient_f64")]
    pub n: f64,
    /// Slurry mass concentration [0–1].
    #[serde(rename = "Cw", deserialize_with = "lenient_f64")]
    pub cw: f64,
    /// Underflow concentration [0–1].
    #[serde(rename = "Cd", deserialize_with = "lenient_f64")]
    pub cd: f64,
    /// Feed concentration [0–1].
    #[serde(rename = "Ca", deserialize_with = "lenient_f64")]
    pub ca: f64,
}

impl ParameterSet {
    /// Reference plant design point (the values a "reset" restores).
    pub fn plant_defaults() -> Self {
        ParameterSet {
            z: 1.0,
            pa: 144_000.0,
            gamma_k: 2.79,
            days_per_year: 300.0,
            k1: 1.05,
            k2: 1.05,
            k3: 1.2,
            hours_per_day: 12.0,
            q: 40.0,
            pd: 429.6,
            rho_c: 3.15,
            rho_a: 2.76,
            n: 8.0,
            cw: 0.65,
            cd: 0.63,
            ca: 0.2,
        }
    }

    /// Load from a JSON file holding either a bare parameter mapping or a
    /// saved configuration / export document with a `parameters` member.
    pub fn from_file(path: impl AsRef<Path>) -> BackfillResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn from_json_str(json: &str) -> BackfillResult<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_document(&value)
    }

    /// Like [`ParameterSet::from_value`], but unwraps a `parameters` object
    /// when the document carries one.
    pub fn from_document(value: &Value) -> BackfillResult<Self> {
        match value.get("parameters") {
            Some(inner) if inner.is_object() => Self::from_value(inner),
            _ => Self::from_value(value),
        }
    }

    /// Build from a JSON value. Anything other than an object is a usage
    /// error; inside an object nothing is rejected.
    pub fn from_value(value: &Value) -> BackfillResult<Self> {
        if !value.is_object() {
            return Err(BackfillError::MalformedInput(format!(
                "expected an object of named parameters, found {}",
                json_kind(value)
            )));
        }
        serde_json::from_value(value.clone())
            .map_err(|e| BackfillError::MalformedInput(e.to_string()))
    }

    pub fn from_map<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        let mut params = ParameterSet::default();
        for (name, value) in entries {
            if let Some(slot) = params.field_mut(name) {
                *slot = value;
            }
        }
        params
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        let value = match name {
            "z" => self.z,
            "pa" => self.pa,
            "gamma_k" => self.gamma_k,
            "T" => self.days_per_year,
            "K1" => self.k1,
            "K2" => self.k2,
            "K3" => self.k3,
            "t" => self.hours_per_day,
            "q" => self.q,
            "pd" => self.pd,
            "rho_c" => self.rho_c,
            "rho_a" => self.rho_a,
            "N" => self.n,
            "Cw" => self.cw,
            "Cd" => self.cd,
            "Ca" => self.ca,
            _ => return None,
        };
        Some(value)
    }

    pub fn set(&mut self, name: &str, value: f64) -> BackfillResult<()> {
        match self.field_mut(name) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(unknown_parameter(name)),
        }
    }

    /// Return a copy with one parameter replaced.
    pub fn with(mut self, name: &str, value: f64) -> BackfillResult<Self> {
        self.set(name, value)?;
        Ok(self)
    }

    /// Apply a `KEY=VALUE` override. Unlike document input, the value must
    /// be a finite number and the key must be known.
    pub fn apply_override(&mut self, assignment: &str) -> BackfillResult<()> {
        let (name, raw) = assignment.split_once('=').ok_or_else(|| {
            BackfillError::ConfigError(format!("override '{assignment}' is not KEY=VALUE"))
        })?;
        let name = name.trim();
        let value = raw
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| {
                BackfillError::ConfigError(format!(
                    "override value for '{name}' is not a finite number: '{raw}'"
                ))
            })?;
        self.set(name, value)
    }

    /// `(name, value)` pairs in [`PARAMETER_NAMES`] order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        PARAMETER_NAMES
            .into_iter()
            .map(move |name| (name, self.get(name).unwrap_or(0.0)))
    }

    pub fn to_map(&self) -> BTreeMap<String, f64> {
        self.iter().map(|(k, v)| (k.to_string(), v)).collect()
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut f64> {
        let slot = match name {
            "z" => &mut self.z,
            "pa" => &mut self.pa,
            "gamma_k" => &mut self.gamma_k,
            "T" => &mut self.days_per_year,
            "K1" => &mut self.k1,
            "K2" => &mut self.k2,
            "K3" => &mut self.k3,
            "t" => &mut self.hours_per_day,
            "q" => &mut self.q,
            "pd" => &mut self.pd,
            "rho_c" => &mut self.rho_c,
            "rho_a" => &mut self.rho_a,
            "N" => &mut self.n,
            "Cw" => &mut self.cw,
            "Cd" => &mut self.cd,
            "Ca" => &mut self.ca,
            _ => return None,
        };
        Some(slot)
    }
}

fn unknown_parameter(name: &str) -> BackfillError {
    BackfillError::ConfigError(format!(
        "unknown parameter '{name}' (expected one of: {})",
        PARAMETER_NAMES.join(", ")
    ))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_f64(&value))
}

/// Coerce a JSON value to a number the way a form field is read:
/// numbers pass through, strings are parsed from their leading numeric
/// prefix, everything else (and any NaN) becomes `0.0`.
pub fn coerce_f64(value: &Value) -> f64 {
    let parsed = match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => parse_leading_float(s),
        _ => 0.0,
    };
    if parsed.is_nan() {
        0.0
    } else {
        parsed
    }
}

fn parse_leading_float(s: &str) -> f64 {
    let s = s.trim_start();
    let (sign, unsigned) = match s.as_bytes().first() {
        Some(b'-') => (-1.0, &s[1..]),
        Some(b'+') => (1.0, &s[1..]),
        _ => (1.0, s),
    };
    if unsigned.starts_with("Infinity") {
        return sign * f64::INFINITY;
    }
    let literal = leading_number(unsigned);
    if literal.is_empty() {
        return 0.0;
    }
    literal.parse::<f64>().map(|v| sign * v).unwrap_or(0.0)
}

/// Longest prefix of the form `digits[.digits][e[+-]digits]` (unsigned).
fn leading_number(s: &str) -> &str {
    let bytes = s.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = digits_from(0);
    let mut mantissa_digits = end;
    if end < bytes.len() && bytes[end] == b'.' {
        let frac_end = digits_from(end + 1);
        mantissa_digits += frac_end - (end + 1);
        if mantissa_digits > 0 {
            end = frac_end;
        }
    }
    if mantissa_digits == 0 {
        return "";
    }

    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_start = end + 1;
        if exp_start < bytes.len() && (bytes[exp_start] == b'+' || bytes[exp_start] == b'-') {
            exp_start += 1;
        }
        let exp_end = digits_from(exp_start);
        if exp_end > exp_start {
            end = exp_end;
        }
    }
    &s[..end]
}

/// Display theme stored alongside the last parameter set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl std::str::FromStr for Theme {
    type Err = BackfillError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(BackfillError::ConfigError(format!(
                "unknown theme '{other}' (expected 'light' or 'dark')"
            ))),
        }
    }
}

/// Last-used parameter set plus display theme, as a front end persists it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedConfig {
    pub timestamp: DateTime<Utc>,
    pub parameters: ParameterSet,
    #[serde(default)]
    pub theme: Theme,
}

impl SavedConfig {
    pub fn new(parameters: ParameterSet, theme: Theme, timestamp: DateTime<Utc>) -> Self {
        SavedConfig {
            timestamp,
            parameters,
            theme,
        }
    }

    pub fn from_file(path: impl AsRef<Path>) -> BackfillResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        Ok(config)
    }

    pub fn write_to_file(&self, path: impl AsRef<Path>) -> BackfillResult<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
