// ─────────────────────────────────────────────────────────────────────
// Backfill Plant Calculator — Export Command
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Write the export document.

use anyhow::{Context, Result};
use backfill_engineering::report::ExportReport;
use chrono::Utc;
use clap::Args;
use std::path::PathBuf;
use tracing::info;

use super::InputArgs;

#[derive(Args, Debug)]
pub struct ExportArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output directory
    #[arg(short, long, default_value = ".")]
    pub out_dir: PathBuf,
}

pub fn execute(args: ExportArgs) -> Result<()> {
    let params = args.input.load()?;
    let report = ExportReport::new(params, Utc::now());
    let path = report
        .write_to_dir(&args.out_dir)
        .with_context(|| format!("failed to write export into {}", args.out_dir.display()))?;
    info!("Export written to {}", path.display());
    println!("{}", path.display());
    Ok(())
}
