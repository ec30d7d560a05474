// ─────────────────────────────────────────────────────────────────────
// Backfill Plant Calculator — Design Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Fixed plant design constants. None of these are derived from inputs.

/// Settling-velocity coefficient used for thickener area sizing (m/h).
pub const MU_SETTLING: f64 = 0.0001;

/// Thickener feed-well height (m).
pub const H0_FEED_WELL: f64 = 1.2;

/// Thickener deposit-bed height (m).
pub const H1_DEPOSIT_BED: f64 = 6.58;

/// Thickener free-settling zone height (m).
pub const H2_FREE_SETTLING: f64 = 3.0;

/// Flocculant dosing ratio (t per m³ of slurry).
pub const GX_FLOCCULANT_DOSE: f64 = 0.002;

/// Flocculant solution concentration (0.1 %).
pub const OMEGA_X_SOLUTION: f64 = 0.001;

/// Flocculant preparation unevenness coefficient.
pub const K4_FLOCCULANT_PREP: f64 = 1.2;

/// Converts flocculant mass to dilution water volume in the `qss` balance.
pub const WATER_DILUTION_FACTOR: f64 = 1000.0;
