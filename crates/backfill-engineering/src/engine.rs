// ─────────────────────────────────────────────────────────────────────
// Backfill Plant Calculator — Fill Calculation Engine
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Parameter set → result set.
//!
//! Five formula groups evaluated in dependency order; a group reads only
//! inputs and the results of groups before it:
//!
//! 1. fill volume chain (`Qa`, `Qc`, `Qs`, `Qd`, `qh`)
//! 2. slurry density (`rho_m`)
//! 3. material consumption (`ma`, `mc`, `Qj`, `Q_sand`)
//! 4. thickener sizing (`D`, `V1`, `H`)
//! 5. flocculant and overflow (`qx`, `qss`, `Qxz`, `q1`, `q2`, `q_overflow`)
//!
//! There is no engine instance and no state between calls. Degenerate inputs
//! never fail; they come back as zero, infinite or NaN values.

use backfill_types::config::ParameterSet;
use backfill_types::error::BackfillResult;
use backfill_types::state::ResultSet;
use serde_json::Value;
use tracing::{debug, Level};

use crate::fill_volume::fill_volume_chain;
use crate::flocculant::flocculant_dosing;
use crate::materials::material_consumption;
use crate::overflow::overflow_balance;
use crate::slurry::slurry_density;
use crate::thickener::size_thickener;

/// Evaluate every formula group for one parameter set.
pub fn compute(params: &ParameterSet) -> ResultSet {
    let p = params;

    let fill = fill_volume_chain(
        p.z,
        p.pa,
        p.gamma_k,
        p.days_per_year,
        p.k1,
        p.k2,
        p.k3,
        p.hours_per_day,
    );

    let rho_m = slurry_density(p.rho_c, p.rho_a, p.n, p.cw);

    let materials = material_consumption(rho_m, p.n, p.cw, p.q, p.hours_per_day, p.days_per_year);

    let thickener = size_thickener(p.q, p.hours_per_day);

    let flocculant = flocculant_dosing(p.q, p.hours_per_day);
    let overflow = overflow_balance(
        p.pd,
        p.days_per_year,
        p.hours_per_day,
        p.ca,
        p.cd,
        p.rho_a,
        flocculant.qss,
    );

    let results = ResultSet {
        qa: fill.qa,
        qc: fill.qc,
        qs: fill.qs,
        qd: fill.qd,
        qh: fill.qh,
        rho_m,
        ma: materials.ma,
        mc: materials.mc,
        qj: materials.qj,
        q_sand: materials.q_sand,
        diameter: thickener.diameter,
        v1: thickener.v1,
        height: thickener.height,
        qx: flocculant.qx,
        qss: flocculant.qss,
        qxz: flocculant.qxz,
        q1: overflow.q1,
        q2: overflow.q2,
        q_overflow: overflow.q_overflow,
    };

    if tracing::enabled!(Level::DEBUG) {
        let degenerate = results.non_finite();
        if !degenerate.is_empty() {
            debug!(count = degenerate.len(), names = ?degenerate, "non-finite results");
        }
    }

    results
}

/// Evaluate a JSON parameter mapping.
///
/// Fails only when `value` is not an object (`MalformedInput`); missing or
/// non-numeric entries read as zero.
pub fn compute_value(value: &Value) -> BackfillResult<ResultSet> {
    let params = ParameterSet::from_value(value)?;
    Ok(compute(&params))
}

/// Evaluate a `(name, value)` mapping; unknown names are ignored.
pub fn compute_map<'a, I>(entries: I) -> ResultSet
where
    I: IntoIterator<Item = (&'a str, f64)>,
{
    compute(&ParameterSet::from_map(entries))
}
