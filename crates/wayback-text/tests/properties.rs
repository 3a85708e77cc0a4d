use proptest::prelude::*;
use serde_json::Value;
use wayback_text::{normalize, normalize_tree};

/// Alphabet biased towards the characters the rules care about
fn extracted_text() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop_oneof![
            4 => proptest::char::range('a', 'z'),
            2 => proptest::char::range('A', 'Z'),
            3 => proptest::char::range('0', '9'),
            3 => Just(' '),
            1 => prop::sample::select(vec![
                '.', '$', '%', '-', ';', '#', '&', '\t', '\n',
                'Q', 'G', 'T', 'B', 'M', 'K', 'S',
                '\u{00A0}', '\u{200B}', '\u{FEFF}', '\u{FF15}', '\u{0301}',
                '\u{0663}', '\u{0664}',
            ]),
        ],
        0..48,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

fn json_tree() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        extracted_text().prop_map(Value::String),
    ];
    leaf.prop_recursive(4, 64, 6, |inner| {
        prop_oneof![
            proptest::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            proptest::collection::btree_map("[a-z ]{1,8}", inner, 0..6)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

fn same_shape(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Array(x), Value::Array(y)) => {
            x.len() == y.len() && x.iter().zip(y).all(|(p, q)| same_shape(p, q))
        }
        (Value::Object(x), Value::Object(y)) => {
            x.len() == y.len()
                && x.iter()
                    .zip(y)
                    .all(|((k1, v1), (k2, v2))| k1 == k2 && same_shape(v1, v2))
        }
        (Value::String(_), Value::String(_)) => true,
        _ => a == b,
    }
}

proptest! {
    #[test]
    fn prop_normalize_is_idempotent(s in extracted_text()) {
        let once = normalize(&s);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn prop_normalize_is_idempotent_on_any_text(s in "\\PC{0,40}") {
        let once = normalize(&s);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn prop_no_bare_dollar_survives(s in extracted_text()) {
        let out = normalize(&s);
        prop_assert!(!out.replace("&#36;", "").contains('$'));
    }

    #[test]
    fn prop_output_is_trimmed(s in extracted_text()) {
        let out = normalize(&s);
        prop_assert_eq!(out.trim(), out.as_str());
        prop_assert!(!out.contains("  "));
    }

    #[test]
    fn prop_tree_walk_preserves_shape(tree in json_tree()) {
        let out = normalize_tree(&tree);
        prop_assert!(same_shape(&tree, &out));
    }

    #[test]
    fn prop_tree_walk_normalizes_leaves(s in extracted_text()) {
        let tree = Value::Array(vec![Value::String(s.clone())]);
        prop_assert_eq!(normalize_tree(&tree), Value::Array(vec![Value::String(normalize(&s))]));
    }
}
