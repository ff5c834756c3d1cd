use serde::{Deserialize, Deserializer};

/// Body of a successful `GET <endpoint>/<ip>/json` against ipinfo.io.
///
/// Every field falls back to an empty string, whether missing or `null`, so a
/// sparse upstream answer still decodes. Only `country` is relayed to callers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct IpInfo {
    #[serde(deserialize_with = "null_as_empty")]
    pub ip: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub hostname: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub city: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub region: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub country: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub loc: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub org: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
