// ─────────────────────────────────────────────────────────────────────
// Backfill Plant Calculator — Material Consumption
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Per-cubic-metre and annual binder/aggregate consumption.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MaterialConsumption {
    /// Aggregate mass per m³ slurry [t].
    pub ma: f64,
    /// Binder mass per m³ slurry [t].
    pub mc: f64,
    /// Annual binder consumption [t/a].
    pub qj: f64,
    /// Annual tailings (aggregate) consumption [t/a].
    pub q_sand: f64,
}

/// Aggregate mass per m³ slurry [t].
///
/// `ma = rho_m * N * Cw / (1 + N)`.
pub fn aggregate_per_m3(rho_m: f64, n: f64, cw: f64) -> f64 {
    rho_m * (n * cw) / (1.0 + n)
}

/// Binder mass per m³ slurry [t].
///
/// `mc = rho_m * Cw / (1 + N)`.
pub fn binder_per_m3(rho_m: f64, n: f64, cw: f64) -> f64 {
    rho_m * cw / (1.0 + n)
}

/// Annual consumption [t/a] of a component with unit mass `m` per m³,
/// at `q` m³/h over `t` h/d and `T` d/a.
pub fn annual_consumption(q: f64, hours_per_day: f64, days_per_year: f64, m: f64) -> f64 {
    q * hours_per_day * days_per_year * m
}

pub fn material_consumption(
    rho_m: f64,
    n: f64,
    cw: f64,
    q: f64,
    hours_per_day: f64,
    days_per_year: f64,
) -> MaterialConsumption {
    let ma = aggregate_per_m3(rho_m, n, cw);
    let mc = binder_per_m3(rho_m, n, cw);
    MaterialConsumption {
        ma,
        mc,
        qj: annual_consumption(q, hours_per_day, days_per_year, mc),
        q_sand: annual_consumption(q, hours_per_day, days_per_year, ma),
    }
}
