// ─────────────────────────────────────────────────────────────────────
// Backfill Plant Calculator — Compute Command
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Compute and print every result.

use anyhow::Result;
use backfill_engineering::engine::compute;
use backfill_engineering::report::HeadlineStats;
use clap::Args;
use tracing::{info, warn};

use super::InputArgs;
use crate::format;

#[derive(Args, Debug)]
pub struct ComputeArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Print results as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: ComputeArgs) -> Result<()> {
    let params = args.input.load()?;
    let results = compute(&params);

    let degenerate = results.non_finite();
    if !degenerate.is_empty() {
        warn!("Non-finite results (check for zero inputs): {}", degenerate.join(", "));
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        info!("Computed {} results", results.iter().count());
        print!("{}", format::results_table(&results));
        println!();
        print!("{}", format::headline_stats(&HeadlineStats::from(&results)));
    }
    Ok(())
}
