// ─────────────────────────────────────────────────────────────────────
// Backfill Plant Calculator — Fill Volume Chain
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Fill volume chain: from ore output to hourly slurry preparation capacity.
//!
//! Each step consumes the previous one; no inputs are clamped, so zero
//! denominators propagate as IEEE-754 infinities or NaN.

use serde::Serialize;

/// Fill volume chain outputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FillVolumes {
    /// Annual fill volume [m³/a].
    pub qa: f64,
    /// Daily fill volume [m³/d].
    pub qc: f64,
    /// Daily slurry volume [m³/d].
    pub qs: f64,
    /// Daily slurry preparation capacity [m³/d].
    pub qd: f64,
    /// Hourly slurry preparation capacity [m³/h].
    pub qh: f64,
}

/// Annual fill volume [m³/a].
///
/// `Qa = z * pa / gamma_k`.
pub fn annual_fill_volume(z: f64, pa: f64, gamma_k: f64) -> f64 {
    z * pa / gamma_k
}

/// Daily fill volume [m³/d].
///
/// `Qc = Qa / T`.
pub fn daily_fill_volume(qa: f64, days_per_year: f64) -> f64 {
    qa / days_per_year
}

/// Daily slurry volume [m³/d].
///
/// `Qs = K1 * K2 * Qc`.
pub fn daily_slurry_volume(k1: f64, k2: f64, qc: f64) -> f64 {
    k1 * k2 * qc
}

/// Daily slurry preparation capacity [m³/d].
///
/// `Qd = K3 * Qs`.
pub fn daily_preparation_capacity(k3: f64, qs: f64) -> f64 {
    k3 * qs
}

/// Hourly slurry preparation capacity [m³/h].
///
/// `qh = Qd / t`.
pub fn hourly_preparation_capacity(qd: f64, hours_per_day: f64) -> f64 {
    qd / hours_per_day
}

/// Evaluate the whole chain in dependency order.
#[allow(clippy::too_many_arguments)]
pub fn fill_volume_chain(
    z: f64,
    pa: f64,
    gamma_k: f64,
    days_per_year: f64,
    k1: f64,
    k2: f64,
    k3: f64,
    hours_per_day: f64,
) -> FillVolumes {
    let qa = annual_fill_volume(z, pa, gamma_k);
    let qc = daily_fill_volume(qa, days_per_year);
    let qs = daily_slurry_volume(k1, k2, qc);
    let qd = daily_preparation_capacity(k3, qs);
    let qh = hourly_preparation_capacity(qd, hours_per_day);
    FillVolumes { qa, qc, qs, qd, qh }
}
