// ─────────────────────────────────────────────────────────────────────
// Backfill Plant Calculator — Save Command
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Persist the parameter set and display theme.

use anyhow::{Context, Result};
use backfill_types::config::{SavedConfig, Theme};
use chrono::Utc;
use clap::Args;
use std::path::PathBuf;
use tracing::info;

use super::InputArgs;

#[derive(Args, Debug)]
pub struct SaveArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Destination file
    #[arg(short, long)]
    pub out: PathBuf,

    /// Display theme to store (light or dark)
    #[arg(long, default_value = "light")]
    pub theme: Theme,
}

pub fn execute(args: SaveArgs) -> Result<()> {
    let params = args.input.load()?;
    let saved = SavedConfig::new(params, args.theme, Utc::now());
    saved
        .write_to_file(&args.out)
        .with_context(|| format!("failed to save configuration to {}", args.out.display()))?;
    info!("Configuration saved to {}", args.out.display());
    Ok(())
}
