//! Record types at the store boundary.
//!
//! ## Summary
//! `RawVoter` is the wire shape of one primary-store record: every field is
//! optional and `sr_no` may arrive as a JSON string or a JSON number.
//! `Voter` is the normalized projection handed to every consumer; it is
//! built only through [`Voter::from_raw`], which is the single place where
//! missing fields default to the empty string.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// Wire shape of a primary-store voter record. Unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawVoter {
    #[serde(default, deserialize_with = "stringish")]
    pub sr_no: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub voter_id: Option<String>,
    #[serde(default)]
    pub mobile: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

/// Accepts a JSON string or number, stringifying the latter. `null` and
/// anything else collapse to `None` and later default to `""`.
fn stringish<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Normalized voter projection. All fields are non-null strings; `id` is
/// always the primary-store key the record was fetched under, never
/// derived from display fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Voter {
    pub id: String,
    pub sr_no: String,
    pub name: String,
    pub voter_id: String,
    pub mobile: String,
    pub address: String,
}

impl Voter {
    /// ## Summary
    /// Builds the normalized projection of `raw` as fetched under `key`,
    /// defaulting every absent field to the empty string.
    #[must_use]
    pub fn from_raw(key: &str, raw: RawVoter) -> Self {
        Self {
            id: key.to_owned(),
            sr_no: raw.sr_no.unwrap_or_default(),
            name: raw.name.unwrap_or_default(),
            voter_id: raw.voter_id.unwrap_or_default(),
            mobile: raw.mobile.unwrap_or_default(),
            address: raw.address.unwrap_or_default(),
        }
    }
}

/// Full primary-collection read shape: key-ordered, matching the order a
/// Realtime Database REST read presents its child nodes in.
pub type VoterMap = BTreeMap<String, RawVoter>;

/// One secondary-index entry: the set of phone-number keys sharing a name,
/// stored as `{ "<phone>": true, ... }` on the wire.
pub type PhoneKeySet = BTreeMap<String, bool>;

/// Full secondary-index read shape: pre-lowercased name to phone-key set.
/// Built and maintained by the ingestion job; read-only here.
pub type NameIndex = BTreeMap<String, PhoneKeySet>;
