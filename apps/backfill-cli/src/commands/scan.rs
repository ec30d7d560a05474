// ─────────────────────────────────────────────────────────────────────
// Backfill Plant Calculator — Scan Command
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Sweep one parameter and print a results table.

use anyhow::{bail, Result};
use backfill_engineering::scan::scan_parameter;
use backfill_types::state::result_field;
use clap::Args;
use tracing::info;

use super::InputArgs;
use crate::format;

#[derive(Args, Debug)]
pub struct ScanArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Parameter to sweep, e.g. `q` or `Cw`
    #[arg(long)]
    pub param: String,

    /// First value
    #[arg(long, allow_negative_numbers = true)]
    pub min: f64,

    /// Last value
    #[arg(long, allow_negative_numbers = true)]
    pub max: f64,

    /// Number of evaluation points
    #[arg(long, default_value_t = 10)]
    pub steps: usize,

    /// Result to tabulate. Repeatable; defaults to Qa, Qj, Q_sand, D, q_overflow.
    #[arg(short, long = "result", value_name = "NAME")]
    pub results: Vec<String>,
}

const DEFAULT_COLUMNS: [&str; 5] = ["Qa", "Qj", "Q_sand", "D", "q_overflow"];

pub fn execute(args: ScanArgs) -> Result<()> {
    let columns: Vec<String> = if args.results.is_empty() {
        DEFAULT_COLUMNS.iter().map(|s| s.to_string()).collect()
    } else {
        args.results.clone()
    };
    for name in &columns {
        if result_field(name).is_none() {
            bail!("unknown result '{name}'");
        }
    }

    let base = args.input.load()?;
    let scan = scan_parameter(&base, &args.param, args.min, args.max, args.steps)?;
    info!(
        "Scanned {} over [{}, {}] in {} steps",
        scan.parameter,
        args.min,
        args.max,
        scan.len()
    );

    print!("{}", format::scan_table(&scan, &columns));
    Ok(())
}
