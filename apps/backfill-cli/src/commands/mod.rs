// ─────────────────────────────────────────────────────────────────────
// Backfill Plant Calculator — CLI Commands
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Subcommands and the parameter input options they share.

pub mod compute;
pub mod defaults;
pub mod export;
pub mod save;
pub mod scan;

use anyhow::{Context, Result};
use backfill_types::config::ParameterSet;
use clap::Args;
use std::path::PathBuf;
use tracing::{debug, info};

/// Where the parameter set comes from.
#[derive(Args, Debug)]
pub struct InputArgs {
    /// JSON parameter file (a bare mapping, saved config or export document).
    /// Without it the reference plant parameters are used.
    #[arg(short, long)]
    pub params: Option<PathBuf>,

    /// Override one parameter, e.g. `--set z=2`. Repeatable.
    #[arg(short, long = "set", value_name = "KEY=VALUE")]
    pub set: Vec<String>,
}

impl InputArgs {
    pub fn load(&self) -> Result<ParameterSet> {
        let mut params = match &self.params {
            Some(path) => {
                info!("Loading parameters from {}", path.display());
                ParameterSet::from_file(path)
                    .with_context(|| format!("failed to load parameters from {}", path.display()))?
            }
            None => ParameterSet::plant_defaults(),
        };

        for assignment in &self.set {
            params
                .apply_override(assignment)
                .with_context(|| format!("invalid --set '{assignment}'"))?;
            debug!("override applied: {assignment}");
        }
        Ok(params)
    }
}
