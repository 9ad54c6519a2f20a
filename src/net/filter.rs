//! Filter normalization for the list endpoint's query string.

use serde_json::Value;

use super::config::ZeroFilterPolicy;
use super::types::Row;

/// Filter key suffixes subject to the zero rewrite. The grid's numeric
/// filter widgets report an unset value as a literal `0`, which the backend
/// would otherwise treat as "equals zero".
const ZERO_REWRITE_SUFFIXES: [&str; 3] = ["number", "year", "value"];

/// Turn a filter row into query parameters, one per filter entry, in the
/// row's iteration order.
#[must_use]
pub fn filter_params(filter: &Row, policy: ZeroFilterPolicy) -> Vec<(String, String)> {
    filter
        .iter()
        .map(|(key, value)| (key.clone(), param_value(key, value, policy)))
        .collect()
}

fn param_value(key: &str, value: &Value, policy: ZeroFilterPolicy) -> String {
    if policy == ZeroFilterPolicy::RewriteToEmpty && is_numeric_zero(value) && has_rewrite_suffix(key) {
        return String::new();
    }
    stringify(value)
}

fn has_rewrite_suffix(key: &str) -> bool {
    let lower = key.to_ascii_lowercase();
    ZERO_REWRITE_SUFFIXES.iter().any(|suffix| lower.ends_with(suffix))
}

/// Exactly the number zero; the string "0" is left alone.
fn is_numeric_zero(value: &Value) -> bool {
    match value {
        Value::Number(n) => n.as_f64() == Some(0.0),
        _ => false,
    }
}

/// Query-string rendering of a filter value: strings verbatim (unquoted),
/// nulls empty, everything else via its JSON form.
pub(crate) fn stringify(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
#[path = "filter_test.rs"]
mod tests;
