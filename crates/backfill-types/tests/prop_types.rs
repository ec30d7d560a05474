// ─────────────────────────────────────────────────────────────────────
// Backfill Plant Calculator — Property-Based Tests (proptest) for backfill-types
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Property-based tests for backfill-types using proptest.
//!
//! Covers: lenient parameter parsing, by-name access, serialization roundtrip.

use backfill_types::config::{coerce_f64, ParameterSet, PARAMETER_NAMES};
use proptest::prelude::*;
use serde_json::{json, Map, Value};

fn finite() -> impl Strategy<Value = f64> {
    -1.0e9f64..1.0e9
}

// ── Lenient Parsing ──────────────────────────────────────────────────

proptest! {
    /// Any subset of keys parses; absent keys read back as zero.
    #[test]
    fn subset_of_keys_parses(mask in proptest::collection::vec(any::<bool>(), 16), value in finite()) {
        let mut obj = Map::new();
        for (name, keep) in PARAMETER_NAMES.iter().zip(&mask) {
            if *keep {
                obj.insert(name.to_string(), json!(value));
            }
        }
        let params = ParameterSet::from_value(&Value::Object(obj)).unwrap();
        for (name, keep) in PARAMETER_NAMES.iter().zip(&mask) {
            let expected = if *keep { value } else { 0.0 };
            prop_assert_eq!(params.get(name), Some(expected));
        }
    }

    /// A number written as a string reads back as the same number.
    #[test]
    fn numeric_string_matches_number(value in finite()) {
        let from_string = coerce_f64(&json!(value.to_string()));
        prop_assert_eq!(from_string, value);
    }

    /// Arbitrary text never panics and never yields NaN.
    #[test]
    fn arbitrary_text_is_never_nan(text in ".{0,24}") {
        let v = coerce_f64(&json!(text));
        prop_assert!(!v.is_nan());
    }
}

// ── By-Name Access ───────────────────────────────────────────────────

proptest! {
    /// set followed by get returns the stored value for every key.
    #[test]
    fn set_then_get(index in 0usize..16, value in finite()) {
        let name = PARAMETER_NAMES[index];
        let mut params = ParameterSet::plant_defaults();
        params.set(name, value).unwrap();
        prop_assert_eq!(params.get(name), Some(value));
    }

    /// Serializing and re-reading a parameter set preserves every value.
    #[test]
    fn serialization_roundtrip(values in proptest::collection::vec(finite(), 16)) {
        let params = ParameterSet::from_map(PARAMETER_NAMES.iter().copied().zip(values.iter().copied()));
        let json = serde_json::to_string(&params).unwrap();
        let back = ParameterSet::from_json_str(&json).unwrap();
        for ((name, a), (_, b)) in params.iter().zip(back.iter()) {
            prop_assert!((a - b).abs() <= 1e-12 * a.abs().max(1.0),
                "{} changed in roundtrip: {} -> {}", name, a, b);
        }
    }
}
