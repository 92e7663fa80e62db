use jsonkit::json_merge_patch::{apply_merge_patch, create_merge_patch};
use jsonkit::json_patch::{apply_ops, from_json_patch, to_json_patch};
use jsonkit::json_patch_diff::diff;
use jsonkit_value::{clone, Value};
use proptest::prelude::*;

fn arb_leaf_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        "[a-z]{0,10}".prop_map(Value::String),
    ]
}

fn arb_non_null_leaf_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        "[a-z]{0,10}".prop_map(Value::String),
    ]
}

fn arb_json_value() -> impl Strategy<Value = Value> {
    arb_leaf_value().prop_recursive(4, 32, 5, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..5).prop_map(Value::Array),
            prop::collection::hash_map("[a-z]{1,3}", inner, 0..5)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

// Like `arb_json_value`, plus objects built from a member list over a
// two-key alphabet, so duplicate keys are common.
fn arb_json_value_with_duplicates() -> impl Strategy<Value = Value> {
    arb_leaf_value().prop_recursive(4, 32, 5, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..5).prop_map(Value::Array),
            prop::collection::hash_map("[a-z]{1,3}", inner.clone(), 0..5)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
            prop::collection::vec(("[ab]", inner), 0..4)
                .prop_map(|members| Value::Object(members.into_iter().collect())),
        ]
    })
}

fn arb_json_object() -> impl Strategy<Value = Value> {
    prop::collection::hash_map("[a-z]{1,3}", arb_json_value(), 0..5)
        .prop_map(|m| Value::Object(m.into_iter().collect()))
}

// Objects without null members at any depth: a merge patch cannot express them.
fn arb_non_null_json_object() -> impl Strategy<Value = Value> {
    let value = arb_non_null_leaf_value().prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::hash_map("[a-z]{1,2}", inner, 0..4)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    });
    prop::collection::hash_map("[a-z]{1,3}", value, 0..5)
        .prop_map(|m| Value::Object(m.into_iter().collect()))
}

proptest! {
    #[test]
    fn prop_equality_is_symmetric(
        a in arb_json_value_with_duplicates(),
        b in arb_json_value_with_duplicates(),
    ) {
        prop_assert_eq!(a == b, b == a);
    }

    /// Soundness: applying diff(a, b) to a copy of a yields b.
    #[test]
    fn prop_diff_then_apply_yields_target(
        a in arb_json_value_with_duplicates(),
        b in arb_json_value_with_duplicates(),
    ) {
        let ops = diff(&a, &b).unwrap();
        let mut patched = clone(&a);
        prop_assert!(apply_ops(&mut patched, &ops).is_ok());
        prop_assert_eq!(patched, b);
    }

    #[test]
    fn prop_diff_of_equal_values_is_empty(a in arb_json_value_with_duplicates()) {
        prop_assert_eq!(diff(&a, &clone(&a)), Ok(vec![]));
    }

    #[test]
    fn prop_patch_codec_roundtrip(
        a in arb_json_value_with_duplicates(),
        b in arb_json_value_with_duplicates(),
    ) {
        let ops = diff(&a, &b).unwrap();
        let decoded = from_json_patch(&to_json_patch(&ops));
        prop_assert_eq!(decoded, Ok(ops));
    }

    /// Identity: merging an empty object changes nothing.
    #[test]
    fn prop_empty_merge_patch_is_identity(target in arb_json_object()) {
        let result = apply_merge_patch(clone(&target), &Value::Object(Default::default()));
        prop_assert_eq!(result, target);
    }

    /// Applying create_merge_patch(a, b) to a yields b.
    #[test]
    fn prop_created_merge_patch_reaches_target(a in arb_json_object(), b in arb_non_null_json_object()) {
        let patch = create_merge_patch(&a, &b).unwrap();
        prop_assert_eq!(apply_merge_patch(a, &patch), b);
    }

    /// Applying the same null-free patch twice equals applying it once.
    #[test]
    fn prop_idempotent_merge(target in arb_json_object(), patch in arb_non_null_json_object()) {
        let once = apply_merge_patch(target, &patch);
        let twice = apply_merge_patch(clone(&once), &patch);
        prop_assert_eq!(once, twice);
    }
}
