//! The tracked record and the payload that creates one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// An open source project and its outstanding work.
///
/// `id` is unique within the [`ProjectStore`](crate::ProjectStore) and never
/// changes after creation. Nothing mutates a stored project, so `updated_at`
/// always equals `created_at`; it stays on the wire for clients that expect it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub open_issues: Vec<String>,
    pub open_prs: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Builds a project from a create payload, stamping both timestamps with `now`.
    pub fn from_request(id: String, req: CreateProject, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: req.name,
            open_issues: req.open_issues,
            open_prs: req.open_prs,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Body of `POST /opensource/projects`.
///
/// Absent or `null` fields decode as empty; unknown fields are ignored.
/// A field of the wrong JSON type is an error. Use [`CreateProject::from_json`]
/// for request bodies.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateProject {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub open_issues: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub open_prs: Vec<String>,
}

impl CreateProject {
    /// Decodes a request body. On top of the derived rules, field names match
    /// case-insensitively (`"NAME"` sets `name`) and a bare `null` body is an
    /// empty payload.
    pub fn from_json(body: &[u8]) -> Result<Self, serde_json::Error> {
        let value = match serde_json::from_slice(body)? {
            Value::Null => return Ok(Self::default()),
            Value::Object(fields) => Value::Object(
                fields.into_iter().map(|(k, v)| (k.to_lowercase(), v)).collect(),
            ),
            other => other,
        };
        serde_json::from_value(value)
    }
}

fn null_as_default<'de, D, T>(de: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(de)?.unwrap_or_default())
}
