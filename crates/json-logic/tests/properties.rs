//! Property-based tests.
//!
//! These tests use proptest to verify invariants around:
//! - Literal pass-through of non-object values
//! - Symmetry and strictness of soft/hard equality
//! - Determinism of repeated evaluation
//! - Dot-path resolution and the `missing`/`missing_some` relationship

use json_logic::coerce::{hard_equals, soft_equals};
use json_logic::resolve::{missing, missing_some, resolve_var};
use json_logic::{apply, Map, Value};
use proptest::prelude::*;
use serde_json::json;

// ============================================================================
// Strategies for generating arbitrary values
// ============================================================================

/// Scalars, biased towards values that collide across types ("1" vs 1, etc.).
fn arb_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        (-100i64..100).prop_map(|n| Value::Number(n as f64)),
        (-1e6f64..1e6).prop_map(Value::Number),
        (-100i64..100).prop_map(|n| Value::String(n.to_string())),
        prop_oneof![Just("true"), Just("false"), Just("null"), Just("")]
            .prop_map(Value::from),
        "[a-z]{0,6}".prop_map(Value::String),
    ]
}

fn arb_value() -> impl Strategy<Value = Value> {
    arb_scalar().prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::vec(("[a-z]{1,3}", inner), 0..3)
                .prop_map(|entries| Value::Object(entries.into_iter().collect())),
        ]
    })
}

fn arb_non_object() -> impl Strategy<Value = Value> {
    arb_value().prop_filter("top level must not be a logic node", |v| {
        !matches!(v, Value::Object(_))
    })
}

fn arb_key() -> impl Strategy<Value = String> {
    "[a-z]{1,5}"
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn non_objects_evaluate_to_themselves(v in arb_non_object(), data in arb_value()) {
        prop_assert_eq!(apply(&v, &data), Ok(v.clone()));
    }

    #[test]
    fn soft_equality_is_symmetric(a in arb_value(), b in arb_value()) {
        prop_assert_eq!(soft_equals(&a, &b), soft_equals(&b, &a));
    }

    #[test]
    fn hard_equality_is_symmetric(a in arb_value(), b in arb_value()) {
        prop_assert_eq!(hard_equals(&a, &b), hard_equals(&b, &a));
    }

    #[test]
    fn hard_equality_implies_soft_equality(a in arb_value(), b in arb_value()) {
        if hard_equals(&a, &b) {
            prop_assert!(soft_equals(&a, &b));
        }
    }

    #[test]
    fn every_value_hard_equals_itself(v in arb_value()) {
        prop_assert!(hard_equals(&v, &v));
        prop_assert!(soft_equals(&v, &v));
    }

    #[test]
    fn evaluation_is_repeatable(a in arb_scalar(), b in arb_scalar(), limit in arb_scalar()) {
        let logic = Value::from(json!({"if": [
            {"<": [{"var": "a"}, {"var": "limit"}]},
            {"cat": [{"var": "a"}, "/", {"var": "b"}]},
            {"+": [{"var": "a"}, {"var": "b"}, {"%": [{"var": "b"}, 7]}]}
        ]}));
        let mut data = Map::new();
        data.insert("a".to_string(), a);
        data.insert("b".to_string(), b);
        data.insert("limit".to_string(), limit);
        let data = Value::Object(data);

        let first = apply(&logic, &data);
        let second = apply(&logic, &data);
        // Debug form, since NaN results never compare equal
        prop_assert_eq!(format!("{:?}", first), format!("{:?}", second));
    }

    #[test]
    fn resolve_follows_nested_keys(keys in prop::collection::vec(arb_key(), 1..5), leaf in arb_scalar()) {
        let mut data = leaf.clone();
        for key in keys.iter().rev() {
            let mut map = Map::new();
            map.insert(key.clone(), data);
            data = Value::Object(map);
        }
        let path = keys.join(".");
        prop_assert_eq!(resolve_var(&data, &path, Value::from("<nf>")), leaf);
        // a scalar leaf cannot be walked into
        let beyond = format!("{}.0", path);
        prop_assert_eq!(resolve_var(&data, &beyond, Value::from("<nf>")), Value::from("<nf>"));
    }

    #[test]
    fn resolve_indexes_arrays(items in prop::collection::vec(arb_scalar(), 0..6), idx in 0usize..8) {
        let mut map = Map::new();
        map.insert("xs".to_string(), Value::Array(items.clone()));
        let data = Value::Object(map);
        let got = resolve_var(&data, &format!("xs.{}", idx), Value::from("<nf>"));
        match items.get(idx) {
            Some(_) => { prop_assert_ne!(got, Value::from("<nf>")); }
            None => { prop_assert_eq!(got, Value::from("<nf>")); }
        }
    }

    #[test]
    fn missing_some_is_empty_or_all_missing(
        present in prop::collection::vec(arb_key(), 0..5),
        names in prop::collection::vec(arb_key(), 0..6),
        min in -1i64..6,
    ) {
        let mut map = Map::new();
        for key in &present {
            map.insert(key.clone(), Value::Bool(true));
        }
        let data = Value::Object(map);
        let some = missing_some(&data, min, &names);
        prop_assert!(some.is_empty() || some == missing(&data, &names));
        if min < 1 {
            prop_assert!(some.is_empty());
        }
    }
}
