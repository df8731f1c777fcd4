//! Field decoders for the irregular parts of the BetaSeries wire format.
//!
//! Every decoder handles a single quirk and is attached to a field with
//! `#[serde(deserialize_with = "decode::<name>::deserialize")]`. Decoders for
//! nullable fields live in an `option` submodule.

use chrono::{NaiveDate, NaiveDateTime};
use serde::de::{self, Deserialize, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use std::collections::BTreeMap;
use std::fmt;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// `0` is false, any other integer is true.
pub mod bool_from_int {
    use super::*;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = i64::deserialize(deserializer)?;
        Ok(value != 0)
    }
}

/// `"1"` and `"true"` are true. Every other string is false.
pub mod bool_from_string {
    use super::*;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(matches!(value.as_str(), "1" | "true"))
    }
}

/// Calendar date written as `YYYY-MM-DD`.
pub mod date {
    use super::*;

    pub fn parse(value: &str) -> Result<NaiveDate, chrono::ParseError> {
        NaiveDate::parse_from_str(value, DATE_FORMAT)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        parse(&value).map_err(|err| de::Error::custom(format!("invalid date {value:?}: {err}")))
    }

    pub mod option {
        use super::*;

        pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
        where
            D: Deserializer<'de>,
        {
            let value = Option::<String>::deserialize(deserializer)?;
            value
                .map(|value| {
                    parse(&value).map_err(|err| {
                        <D::Error as de::Error>::custom(format!("invalid date {value:?}: {err}"))
                    })
                })
                .transpose()
        }
    }
}

/// Timestamp written as `YYYY-MM-DD HH:MM:SS`, without any offset.
pub mod date_time {
    use super::*;

    pub fn parse(value: &str) -> Result<NaiveDateTime, chrono::ParseError> {
        NaiveDateTime::parse_from_str(value, DATE_TIME_FORMAT)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        parse(&value).map_err(|err| de::Error::custom(format!("invalid date time {value:?}: {err}")))
    }
}

/// `"a, b, c"` into `["a", "b", "c"]`. The empty string and `null` are the empty list.
pub mod csv_list {
    use super::*;

    pub fn split(value: &str) -> Vec<String> {
        value
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(str::to_string)
            .collect()
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(value.as_deref().map(split).unwrap_or_default())
    }
}

/// A list of strings the API sends either as an array or as an object whose
/// values are the items. Object values keep document order.
pub mod object_values {
    use super::*;

    struct ObjectValuesVisitor;

    impl<'de> Visitor<'de> for ObjectValuesVisitor {
        type Value = Vec<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("an array of strings or an object of strings")
        }

        fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
        where
            A: SeqAccess<'de>,
        {
            let mut values = Vec::with_capacity(seq.size_hint().unwrap_or(0));
            while let Some(value) = seq.next_element::<String>()? {
                values.push(value);
            }
            Ok(values)
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut values = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((_, value)) = map.next_entry::<IgnoredAny, String>()? {
                values.push(value);
            }
            Ok(values)
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ObjectValuesVisitor)
    }
}

/// An object keyed by stringified integers. The API sends `[]` when empty.
pub mod int_keyed_map {
    use super::*;

    struct IntKeyedMapVisitor;

    impl<'de> Visitor<'de> for IntKeyedMapVisitor {
        type Value = BTreeMap<i64, String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("an empty array or an object with integer keys")
        }

        fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
        where
            A: SeqAccess<'de>,
        {
            if seq.next_element::<IgnoredAny>()?.is_some() {
                return Err(de::Error::invalid_length(1, &self));
            }
            Ok(BTreeMap::new())
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut values = BTreeMap::new();
            while let Some((key, value)) = map.next_entry::<String, String>()? {
                let key = key
                    .parse::<i64>()
                    .map_err(|_| de::Error::custom(format!("invalid integer key {key:?}")))?;
                values.insert(key, value);
            }
            Ok(values)
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<BTreeMap<i64, String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(IntKeyedMapVisitor)
    }
}
