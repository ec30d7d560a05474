// ─────────────────────────────────────────────────────────────────────
// Backfill Plant Calculator — Defaults Command
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Print the reference plant parameter set.

use anyhow::Result;
use backfill_types::config::ParameterSet;

pub fn execute() -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(&ParameterSet::plant_defaults())?
    );
    Ok(())
}
