// ─────────────────────────────────────────────────────────────────────
// Backfill Plant Calculator — Slurry Density
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Three-component slurry (binder + aggregate + water) density.

/// Slurry density [t/m³] from a mass-balance closure.
///
/// `rho_m = rho_c*rho_a*(1+N) / [Cw*(rho_a + N*rho_c) + (1-Cw)*rho_c*rho_a*(1+N)]`
///
/// Evaluated as this single closed-form ratio; there is no iterative mix
/// calculation behind it.
pub fn slurry_density(rho_c: f64, rho_a: f64, n: f64, cw: f64) -> f64 {
    let numerator = rho_c * rho_a * (1.0 + n);
    let denominator = cw * (rho_a + n * rho_c) + (1.0 - cw) * rho_c * rho_a * (1.0 + n);
    numerator / denominator
}
