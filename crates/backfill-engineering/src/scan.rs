// ─────────────────────────────────────────────────────────────────────
// Backfill Plant Calculator — Parameter Scan
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! One-parameter sweeps over the calculation engine.
//!
//! Every step is an independent `compute` call on a copy of the base set;
//! nothing carries over between steps.

use backfill_types::config::ParameterSet;
use backfill_types::error::{BackfillError, BackfillResult};
use backfill_types::state::{ResultSet, RESULT_NAMES};
use ndarray::{Array1, Array2, ArrayView1};
use tracing::trace;

use crate::engine::compute;

/// Result table of a one-parameter sweep.
#[derive(Debug, Clone)]
pub struct ParameterScan {
    pub parameter: String,
    /// Swept parameter values [steps].
    pub values: Array1<f64>,
    /// Results [steps, 19], columns in `RESULT_NAMES` order.
    pub results: Array2<f64>,
}

impl ParameterScan {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// All values of one result across the sweep.
    pub fn column(&self, result_name: &str) -> Option<ArrayView1<'_, f64>> {
        let j = RESULT_NAMES.iter().position(|&n| n == result_name)?;
        Some(self.results.column(j))
    }
}

/// Sweep `name` over `linspace(min, max, steps)` with every other parameter
/// taken from `base`.
///
/// `steps == 0` gives an empty scan and `steps == 1` evaluates `min` only.
pub fn scan_parameter(
    base: &ParameterSet,
    name: &str,
    min: f64,
    max: f64,
    steps: usize,
) -> BackfillResult<ParameterScan> {
    if base.get(name).is_none() {
        return Err(BackfillError::ConfigError(format!(
            "cannot scan unknown parameter '{name}'"
        )));
    }
    if !min.is_finite() || !max.is_finite() {
        return Err(BackfillError::ConfigError(format!(
            "scan bounds must be finite, got [{min}, {max}]"
        )));
    }

    let values = match steps {
        0 => Array1::zeros(0),
        1 => Array1::from_elem(1, min),
        _ => Array1::linspace(min, max, steps),
    };

    let mut results = Array2::zeros((steps, RESULT_NAMES.len()));
    for (i, &value) in values.iter().enumerate() {
        let row: ResultSet = compute(&base.with(name, value)?);
        for (j, x) in row.to_array().into_iter().enumerate() {
            results[[i, j]] = x;
        }
        trace!(parameter = name, value, step = i, "scan step");
    }

    Ok(ParameterScan {
        parameter: name.to_string(),
        values,
        results,
    })
}
