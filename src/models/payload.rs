use serde::{Deserialize, Serialize};

pub const NOT_FOUND_MESSAGE: &str = "could not locate country info for ip";

/// Query of `/locate`. Parsing never fails: a missing `ip` is empty and
/// only the first of repeated `ip` pairs counts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocateParams {
    pub ip: String,
}

impl LocateParams {
    pub fn from_query(query: Option<&str>) -> Self {
        let ip = query
            .and_then(|q| {
                url::form_urlencoded::parse(q.as_bytes())
                    .find(|(key, _)| key == "ip")
                    .map(|(_, value)| value.into_owned())
            })
            .unwrap_or_default();
        Self { ip }
    }
}

/// JSON returned by `/locate`. At most one field is ever set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocatePayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl LocatePayload {
    /// An empty country is omitted, leaving `{}`.
    pub fn country(country: String) -> Self {
        Self {
            country: Some(country).filter(|c| !c.is_empty()),
            error: None,
        }
    }

    pub fn not_found() -> Self {
        Self {
            country: None,
            error: Some(NOT_FOUND_MESSAGE.to_string()),
        }
    }
}
