//! Total field accessors over loosely typed YAML content.
//!
//! Content documents are hand-edited, so any field may be missing, misspelled,
//! or carry the wrong YAML type (`year: 2024` vs `year: "2024"`). Every record
//! constructor in [`model`](crate::model) reads its fields through the helpers
//! here, which never fail: an absent or unusable value resolves to a neutral
//! default (empty string, empty list, zero).
//!
//! ## Coercion Rules
//!
//! | Helper | Accepts | Default |
//! |--------|---------|---------|
//! | [`text`] | any scalar (string, number, bool) | `""` |
//! | [`text_list`] | sequence of scalars, or a single scalar | `[]` |
//! | [`records`] | sequence of values | `[]` |
//! | [`int_or_default`] | integer, numeric string, float (truncated) | caller-supplied |
//! | [`pairs`] | mapping with scalar keys and values | `[]` |
//!
//! Unknown keys are never inspected, so new content fields can be added to the
//! YAML documents without touching this crate.

use serde_yaml::Value;

/// Render a scalar as text. Non-scalars (mappings, sequences, null) yield `None`.
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Tagged(tagged) => scalar_text(&tagged.value),
        _ => None,
    }
}

/// Text field, `""` when absent or not a scalar.
pub fn text(value: &Value, key: &str) -> String {
    value.get(key).and_then(scalar_text).unwrap_or_default()
}

/// Text field that is `None` when absent, not a scalar, or blank.
pub fn opt_text(value: &Value, key: &str) -> Option<String> {
    value
        .get(key)
        .and_then(scalar_text)
        .filter(|s| !s.trim().is_empty())
}

/// Ordered list of strings.
///
/// A lone scalar is treated as a one-element list. Non-scalar items are
/// dropped rather than failing the whole list.
pub fn text_list(value: &Value, key: &str) -> Vec<String> {
    match value.get(key) {
        Some(Value::Sequence(items)) => items.iter().filter_map(scalar_text).collect(),
        Some(other) => scalar_text(other).into_iter().collect(),
        None => Vec::new(),
    }
}

/// Ordered list of nested records. Anything but a sequence yields `[]`.
pub fn records<'a>(value: &'a Value, key: &str) -> &'a [Value] {
    value
        .get(key)
        .and_then(Value::as_sequence)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Parse-or-default for every numeric content field.
///
/// Integers are taken as-is, numeric strings are parsed after trimming, and
/// floats are truncated toward zero. Anything else, including out-of-range
/// values, yields `default`.
pub fn int_or_default(value: &Value, key: &str, default: i64) -> i64 {
    value.get(key).and_then(coerce_int).unwrap_or(default)
}

/// Coerce a single YAML value to an integer.
pub fn coerce_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        Value::Tagged(tagged) => coerce_int(&tagged.value),
        _ => None,
    }
}

/// Ordered `label → value` pairs from a mapping, source order preserved.
///
/// Entries whose key or value is not a scalar are skipped.
pub fn pairs(value: &Value, key: &str) -> Vec<(String, String)> {
    let Some(mapping) = value.get(key).and_then(Value::as_mapping) else {
        return Vec::new();
    };
    mapping
        .iter()
        .filter_map(|(k, v)| Some((scalar_text(k)?, scalar_text(v)?)))
        .collect()
}

/// Nested mapping, or `Value::Null` when absent so lookups keep defaulting.
pub fn nested<'a>(value: &'a Value, key: &str) -> &'a Value {
    static NULL: Value = Value::Null;
    value.get(key).unwrap_or(&NULL)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(yaml: &str) -> Value {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn text_accepts_any_scalar() {
        let v = doc("a: hello\nb: 2024\nc: true\nd: [1, 2]");
        assert_eq!(text(&v, "a"), "hello");
        assert_eq!(text(&v, "b"), "2024");
        assert_eq!(text(&v, "c"), "true");
        assert_eq!(text(&v, "d"), "");
        assert_eq!(text(&v, "missing"), "");
    }

    #[test]
    fn text_on_non_mapping_is_empty() {
        assert_eq!(text(&Value::Null, "a"), "");
        assert_eq!(text(&doc("[1, 2]"), "a"), "");
    }

    #[test]
    fn opt_text_treats_blank_as_absent() {
        let v = doc("a: ''\nb: '  '\nc: ML");
        assert_eq!(opt_text(&v, "a"), None);
        assert_eq!(opt_text(&v, "b"), None);
        assert_eq!(opt_text(&v, "c").as_deref(), Some("ML"));
    }

    #[test]
    fn text_list_handles_scalar_and_mixed_items() {
        let v = doc("one: Python\nmany: [Rust, 3, {x: 1}, Go]\nbad: {x: 1}");
        assert_eq!(text_list(&v, "one"), vec!["Python"]);
        assert_eq!(text_list(&v, "many"), vec!["Rust", "3", "Go"]);
        assert!(text_list(&v, "bad").is_empty());
        assert!(text_list(&v, "missing").is_empty());
    }

    #[test]
    fn int_or_default_coerces_best_effort() {
        let v = doc("a: 42\nb: ' 7 '\nc: abc\nd: 12.9\ne: [1]\nf: -3");
        assert_eq!(int_or_default(&v, "a", 0), 42);
        assert_eq!(int_or_default(&v, "b", 0), 7);
        assert_eq!(int_or_default(&v, "c", 0), 0);
        assert_eq!(int_or_default(&v, "d", 0), 12);
        assert_eq!(int_or_default(&v, "e", 5), 5);
        assert_eq!(int_or_default(&v, "f", 0), -3);
        assert_eq!(int_or_default(&v, "missing", 9), 9);
    }

    #[test]
    fn int_or_default_rejects_out_of_range_numbers() {
        let v = doc("big: 99999999999999999999
huge: 1e30
quoted: '99999999999999999999'
neg: -1e30");
        assert_eq!(int_or_default(&v, "big", 0), 0);
        assert_eq!(int_or_default(&v, "huge", 0), 0);
        assert_eq!(int_or_default(&v, "quoted", 0), 0);
        assert_eq!(int_or_default(&v, "neg", 0), 0);
    }

    #[test]
    fn pairs_preserve_source_order() {
        let v = doc("links:\n  repo: https://r\n  demo: https://d\n  bad: [1]");
        assert_eq!(
            pairs(&v, "links"),
            vec![
                ("repo".to_string(), "https://r".to_string()),
                ("demo".to_string(), "https://d".to_string()),
            ]
        );
    }

    #[test]
    fn records_only_from_sequences() {
        let v = doc("items: [{a: 1}, {a: 2}]\nmap: {a: 1}");
        assert_eq!(records(&v, "items").len(), 2);
        assert!(records(&v, "map").is_empty());
    }

    #[test]
    fn nested_missing_is_null() {
        let v = doc("skills: {toolkit: [a]}");
        assert_eq!(text_list(nested(&v, "skills"), "toolkit"), vec!["a"]);
        assert!(nested(&v, "resume").is_null());
        assert_eq!(text(nested(&v, "resume"), "file"), "");
    }
}
