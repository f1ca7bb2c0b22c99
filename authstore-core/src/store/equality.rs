//! Flat structural equality for store data

use serde_json::Value;

use super::StoreData;

/// Compare two flat mappings
///
/// Equal iff both have the same key set and every value is equal. Scalars are
/// type sensitive (`"1"` is not `1`). Integers must match exactly; when
/// either side is a float, numbers compare numerically. Arrays and
/// objects are not descended into; they compare as serialized JSON.
pub fn flat_objects_are_equal(a: &StoreData, b: &StoreData) -> bool {
    a.len() == b.len()
        && a.iter().all(|(key, left)| match b.get(key) {
            Some(right) => flat_values_are_equal(left, right),
            None => false,
        })
}

fn flat_values_are_equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(l), Value::Bool(r)) => l == r,
        (Value::String(l), Value::String(r)) => l == r,
        (Value::Number(l), Value::Number(r)) => {
            // integers only match exactly; floats compare numerically
            l == r || ((l.is_f64() || r.is_f64()) && l.as_f64() == r.as_f64())
        }
        (Value::Array(_), Value::Array(_)) | (Value::Object(_), Value::Object(_)) => {
            left.to_string() == right.to_string()
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn data(pairs: Value) -> StoreData {
        serde_json::from_value(pairs).unwrap()
    }

    #[test]
    fn test_key_order_does_not_matter() {
        let a = StoreData::from_iter([("a", json!(1)), ("b", json!(2))]);
        let b = StoreData::from_iter([("b", json!(2)), ("a", json!(1))]);
        assert!(flat_objects_are_equal(&a, &b));
    }

    #[test]
    fn test_type_sensitive() {
        assert!(!flat_objects_are_equal(&data(json!({"a": "1"})), &data(json!({"a": 1}))));
        assert!(!flat_objects_are_equal(&data(json!({"a": true})), &data(json!({"a": 1}))));
        assert!(!flat_objects_are_equal(&data(json!({"a": null})), &data(json!({"a": ""}))));
    }

    #[test]
    fn test_numbers_compare_numerically() {
        assert!(flat_objects_are_equal(&data(json!({"exp": 1})), &data(json!({"exp": 1.0}))));
        assert!(!flat_objects_are_equal(&data(json!({"exp": 1})), &data(json!({"exp": 2}))));
    }

    #[test]
    fn test_large_integers_are_not_rounded() {
        let stored = data(json!({"n": 9_007_199_254_740_992u64}));
        let next = data(json!({"n": 9_007_199_254_740_993u64}));
        assert!(!flat_objects_are_equal(&stored, &next));
        assert!(!flat_objects_are_equal(&data(json!({"n": u64::MAX})), &data(json!({"n": u64::MAX - 1}))));
        assert!(flat_objects_are_equal(&data(json!({"n": u64::MAX})), &data(json!({"n": u64::MAX}))));
    }

    #[test]
    fn test_key_sets_must_match() {
        assert!(!flat_objects_are_equal(&data(json!({"a": 1})), &data(json!({"a": 1, "b": 2}))));
        assert!(!flat_objects_are_equal(&data(json!({"a": 1})), &data(json!({"b": 1}))));
        assert!(flat_objects_are_equal(&StoreData::new(), &StoreData::new()));
    }

    #[test]
    fn test_nested_values_compare_as_serialized() {
        let a = data(json!({"scopes": ["read", "write"]}));
        let b = data(json!({"scopes": ["read", "write"]}));
        let c = data(json!({"scopes": ["write", "read"]}));
        assert!(flat_objects_are_equal(&a, &b));
        assert!(!flat_objects_are_equal(&a, &c));
    }
}
