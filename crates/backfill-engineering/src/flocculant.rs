// ─────────────────────────────────────────────────────────────────────
// Backfill Plant Calculator — Flocculant Dosing
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Flocculant consumption, dilution water and preparation capacity.

use backfill_types::constants::{
    GX_FLOCCULANT_DOSE, K4_FLOCCULANT_PREP, OMEGA_X_SOLUTION, WATER_DILUTION_FACTOR,
};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FlocculantDosing {
    /// Hourly flocculant use [t/h].
    pub qx: f64,
    /// Hourly dilution water [m³/h].
    pub qss: f64,
    /// Preparation capacity [t/d].
    pub qxz: f64,
}

/// Hourly flocculant use [t/h].
///
/// `qx = q * gx`.
pub fn hourly_flocculant(q: f64) -> f64 {
    q * GX_FLOCCULANT_DOSE
}

/// Hourly water needed to dilute the flocculant to solution strength [m³/h].
///
/// `qss = qx * (1 - omega_x) / (1000 * omega_x)`.
pub fn dilution_water(qx: f64) -> f64 {
    qx * (1.0 - OMEGA_X_SOLUTION) / (WATER_DILUTION_FACTOR * OMEGA_X_SOLUTION)
}

/// Flocculant preparation capacity [t/d].
///
/// `Qxz = qx * t * K4`.
pub fn preparation_capacity(qx: f64, hours_per_day: f64) -> f64 {
    qx * hours_per_day * K4_FLOCCULANT_PREP
}

pub fn flocculant_dosing(q: f64, hours_per_day: f64) -> FlocculantDosing {
    let qx = hourly_flocculant(q);
    FlocculantDosing {
        qx,
        qss: dilution_water(qx),
        qxz: preparation_capacity(qx, hours_per_day),
    }
}
