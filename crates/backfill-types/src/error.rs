// ─────────────────────────────────────────────────────────────────────
// Backfill Plant Calculator — Error
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use thiserror::Error;

/// Arithmetic degeneracies (zero denominators, negative inputs) are never
/// reported here; they surface as non-finite values in the result set.
#[derive(Error, Debug)]
pub enum BackfillError {
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type BackfillResult<T> = Result<T, BackfillError>;
