// ─────────────────────────────────────────────────────────────────────
// Backfill Plant Calculator — Thickener Overflow
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Thickener feed, underflow and overflow water balance.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OverflowBalance {
    /// Tailings feed flow [m³/h].
    pub q1: f64,
    /// Underflow flow [m³/h].
    pub q2: f64,
    /// Overflow water [m³/h].
    pub q_overflow: f64,
}

/// Hourly slurry flow carrying `pd` t/d of solids at mass concentration `c`.
///
/// `q = pd / (T * t * c * rho_a)`.
pub fn concentration_flow(pd: f64, days_per_year: f64, hours_per_day: f64, c: f64, rho_a: f64) -> f64 {
    pd / (days_per_year * hours_per_day * c * rho_a)
}

/// Overflow water [m³/h]: feed minus underflow plus flocculant dilution water.
///
/// Not clamped. A thicker feed than underflow yields a negative overflow, and
/// zero concentrations yield non-finite values.
pub fn overflow_water(q1: f64, q2: f64, qss: f64) -> f64 {
    q1 - q2 + qss
}

pub fn overflow_balance(
    pd: f64,
    days_per_year: f64,
    hours_per_day: f64,
    ca: f64,
    cd: f64,
    rho_a: f64,
    qss: f64,
) -> OverflowBalance {
    let q1 = concentration_flow(pd, days_per_year, hours_per_day, ca, rho_a);
    let q2 = concentration_flow(pd, days_per_year, hours_per_day, cd, rho_a);
    OverflowBalance {
        q1,
        q2,
        q_overflow: overflow_water(q1, q2, qss),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_overflow() {
        let b = overflow_balance(429.6, 300.0, 12.0, 0.2, 0.63, 2.76, 0.079_92);
        assert!((b.q1 - 0.216_184).abs() < 1e-6, "q1 = {}", b.q1);
        assert!((b.q2 - 0.068_630).abs() < 1e-6, "q2 = {}", b.q2);
        assert!((b.q_overflow - 0.227_474).abs() < 1e-6, "q_overflow = {}", b.q_overflow);
    }

    #[test]
    fn test_overflow_can_go_negative() {
        // Feed thicker than underflow.
        let b = overflow_balance(429.6, 300.0, 12.0, 0.9, 0.2, 2.76, 0.0);
        assert!(b.q_overflow < 0.0, "q_overflow = {}", b.q_overflow);
    }

    #[test]
    fn test_zero_concentrations_are_non_finite() {
        let b = overflow_balance(429.6, 300.0, 12.0, 0.0, 0.0, 2.76, 0.08);
        assert!(b.q1.is_infinite());
        assert!(b.q2.is_infinite());
        assert!(b.q_overflow.is_nan());
    }
}
