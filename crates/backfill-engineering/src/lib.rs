// ─────────────────────────────────────────────────────────────────────
// Backfill Plant Calculator — Backfill Engineering
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Closed-form backfill plant engineering.
//!
//! - `fill_volume`, `slurry`, `materials`, `thickener`, `flocculant`,
//!   `overflow`: one module per formula group, scalar in / scalar out
//! - `engine`: the full parameter set → result set evaluation
//! - `scan`: one-parameter sweeps
//! - `report`: export document

pub mod engine;
pub mod fill_volume;
pub mod flocculant;
pub mod materials;
pub mod overflow;
pub mod report;
pub mod scan;
pub mod slurry;
pub mod thickener;

pub use engine::{compute, compute_value};
