//! Recursive normalization over a JSON tree

use crate::normalize::normalize;
use serde_json::{Map, Value};

/// Normalize every string leaf of `node`.
///
/// Object keys, numbers, booleans and nulls are copied unchanged. Always
/// builds a new tree; `node` is never modified.
#[must_use]
pub fn normalize_tree(node: &Value) -> Value {
    match node {
        Value::String(s) => Value::String(normalize(s)),
        Value::Array(items) => Value::Array(items.iter().map(normalize_tree).collect()),
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), normalize_tree(v)))
                .collect::<Map<String, Value>>(),
        ),
        Value::Null | Value::Bool(_) | Value::Number(_) => node.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn strings_at_every_depth_are_normalized() {
        let tree = json!({
            "Cybersecurity": {
                "years": {
                    "2016": {
                        "market_shift": ["ai spend $ 5 B", ["nested  ai"]]
                    }
                }
            }
        });

        let out = normalize_tree(&tree);
        assert_eq!(
            out["Cybersecurity"]["years"]["2016"]["market_shift"],
            json!(["AI spend &#36;5B", ["nested AI"]])
        );
    }

    #[test]
    fn keys_are_not_normalized() {
        let out = normalize_tree(&json!({"ai  key": "ai"}));
        assert_eq!(out, json!({"ai  key": "AI"}));
    }

    #[test]
    fn non_string_leaves_are_unchanged() {
        let tree = json!([1, 2.5, true, null, {"n": -3}]);
        assert_eq!(normalize_tree(&tree), tree);
    }

    #[test]
    fn input_is_untouched() {
        let tree = json!({"a": [" ai "]});
        let before = tree.clone();
        let _ = normalize_tree(&tree);
        assert_eq!(tree, before);
    }

    #[test]
    fn key_order_is_preserved() {
        let tree: Value = serde_json::from_str(r#"{"z": "1", "a": "2", "m": "3"}"#).unwrap();
        let out = normalize_tree(&tree);
        let keys: Vec<_> = out.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, ["z", "a", "m"]);
    }
}
