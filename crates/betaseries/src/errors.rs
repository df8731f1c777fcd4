use serde;
use std::fmt;

pub const NO_SERIES_FOUND: i64 = 4001;
pub const ALREADY_IN_ACCOUNT: i64 = 2003;
pub const RECOMMENDATION_NOT_FOUND: i64 = 4005;

#[derive(serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ErrorEntry {
    pub code: i64,
    #[serde(rename="text")]
    pub message: String,
}

/// The `errors` array every response carries. Non empty means the call failed,
/// whatever the HTTP status was.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorList(Vec<ErrorEntry>);

impl ErrorList {
    pub fn new(entries: Vec<ErrorEntry>) -> Self {
        Self(entries)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn entries(&self) -> &[ErrorEntry] {
        self.0.as_slice()
    }

    pub fn codes(&self) -> Vec<i64> {
        self.0.iter().map(|entry| entry.code).collect()
    }

    pub fn contains_code(&self, code: i64) -> bool {
        self.0.iter().any(|entry| entry.code == code)
    }

    pub fn into_result(self) -> Result<(), ErrorList> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ErrorList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.0 {
            writeln!(f, "Code: {}, Message: {}", entry.code, entry.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ErrorList {}

// The key is sometimes missing or null on success.
impl<'de> serde::Deserialize<'de> for ErrorList {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = <Option<Vec<ErrorEntry>> as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self(entries.unwrap_or_default()))
    }
}

/// The part of a response body shared by every endpoint.
#[derive(serde::Deserialize, Debug, Default)]
pub(crate) struct Envelope {
    #[serde(default)]
    pub errors: ErrorList,
}
