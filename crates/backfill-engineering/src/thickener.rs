// ─────────────────────────────────────────────────────────────────────
// Backfill Plant Calculator — Thickener Sizing
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Thickener diameter, bed volume and height.
//!
//! Depends only on the hourly slurry capacity, the daily working hours and
//! fixed design constants.

use std::f64::consts::PI;

use backfill_types::constants::{H0_FEED_WELL, H1_DEPOSIT_BED, H2_FREE_SETTLING, MU_SETTLING};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ThickenerSizing {
    /// Diameter [m].
    pub diameter: f64,
    /// Deposit-bed volume per metre of straight wall [m³/m].
    pub v1: f64,
    /// Total height [m].
    pub height: f64,
}

/// Thickener diameter [m].
///
/// `D = 2 * sqrt(q / (t * mu * pi))` with `mu` the settling-velocity coefficient.
pub fn thickener_diameter(q: f64, hours_per_day: f64) -> f64 {
    2.0 * (q / (hours_per_day * MU_SETTLING * PI)).sqrt()
}

/// Deposit-bed volume per unit height [m³/m].
///
/// `V1 = pi * D^2 / 4`.
pub fn bed_volume_per_height(diameter: f64) -> f64 {
    PI * diameter.powi(2) / 4.0
}

/// Total thickener height [m]: feed well + deposit bed + free settling zone.
pub fn thickener_height() -> f64 {
    H0_FEED_WELL + H1_DEPOSIT_BED + H2_FREE_SETTLING
}

pub fn size_thickener(q: f64, hours_per_day: f64) -> ThickenerSizing {
    let diameter = thickener_diameter(q, hours_per_day);
    ThickenerSizing {
        diameter,
        v1: bed_volume_per_height(diameter),
        height: thickener_height(),
    }
}
