//! Query string encoding for endpoint parameters.
//!
//! A parameter record is any flat struct deriving `serde::Serialize`. Its
//! serialized fields become the query pairs: `None` fields are left out,
//! booleans become `true`/`false`, lists are joined with `,` and timestamps
//! are expected to already serialize as epoch seconds
//! (`chrono::serde::ts_seconds_option`).

use serde;
use serde_json::Value;
use std::collections::BTreeMap;
use url::form_urlencoded;

use crate::types::Locale;

pub const LOCALE_KEY: &str = "locale";

/// Builds the sorted query pairs of `params`. The ambient `locale` is only
/// used when `params` does not carry its own.
///
/// Panics when `params` is not a flat record of scalars and scalar lists.
pub fn query_pairs<P: serde::Serialize>(params: &P, locale: Option<Locale>) -> BTreeMap<String, String> {
    let value = serde_json::to_value(params)
        .unwrap_or_else(|err| panic!("query parameters failed to serialize: {err}"));
    let fields = match value {
        Value::Object(fields) => fields,
        Value::Null => Default::default(),
        other => panic!("query parameters must be a struct, got {other}"),
    };

    let mut pairs = BTreeMap::new();
    for (key, value) in fields {
        if let Some(value) = format_value(&key, value) {
            pairs.insert(key, value);
        }
    }

    if let Some(locale) = locale {
        pairs
            .entry(LOCALE_KEY.to_string())
            .or_insert_with(|| locale.to_string());
    }
    pairs
}

/// Percent encoded query string of `params`, keys in sorted order.
pub fn encode_query<P: serde::Serialize>(params: &P, locale: Option<Locale>) -> String {
    let pairs = query_pairs(params, locale);
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs.iter())
        .finish()
}

fn format_value(key: &str, value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::Array(items) if items.is_empty() => None,
        Value::Array(items) => {
            let items: Vec<String> = items
                .into_iter()
                .map(|item| format_scalar(key, item))
                .collect();
            Some(items.join(","))
        },
        other => Some(format_scalar(key, other)),
    }
}

fn format_scalar(key: &str, value: Value) -> String {
    match value {
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number.to_string(),
        Value::String(text) => text,
        other => panic!("query parameter {key:?} has unsupported value {other}"),
    }
}
