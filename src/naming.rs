//! URL slugs and display labels for facet values and link labels.
//!
//! Facet values come straight from content (`"Civic Tech"`, `"C++"`,
//! `"LangChain"`) and become file names under `portfolio/category/` and
//! `portfolio/tag/`. Slugs are lowercase ASCII alphanumerics separated by
//! single dashes:
//! - `"Civic Tech"` → `civic-tech`
//! - `"Node.js"` → `node-js`
//! - `"  ML / AI  "` → `ml-ai`
//!
//! Distinct values can share a slug (`"C"` and `"C++"` both → `c`) and some
//! vanish entirely (`"++"` → `""`), so [`unique_slugs`] disambiguates with a
//! numeric suffix in facet order.

use std::collections::{BTreeMap, HashSet};

/// Convert a display value into a URL-safe slug.
pub fn slugify(value: &str) -> String {
    let mut slug = String::with_capacity(value.len());
    let mut pending_dash = false;
    for c in value.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}

/// Assign a distinct slug to every value, in iteration order.
///
/// Empty slugs become `item`; repeats get `-2`, `-3`, … appended.
pub fn unique_slugs<'a>(values: impl IntoIterator<Item = &'a String>) -> BTreeMap<String, String> {
    let mut taken = HashSet::new();
    let mut slugs = BTreeMap::new();
    for value in values {
        let mut base = slugify(value);
        if base.is_empty() {
            base = "item".to_string();
        }
        let mut candidate = base.clone();
        let mut n = 2;
        while !taken.insert(candidate.clone()) {
            candidate = format!("{base}-{n}");
            n += 1;
        }
        slugs.insert(value.clone(), candidate);
    }
    slugs
}

/// Title-case a link label: `"live demo"` → `"Live Demo"`.
pub fn title_case(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    let mut at_word_start = true;
    for c in label.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}
