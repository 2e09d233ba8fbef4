use crate::{PLACEHOLDER_FIRST, PLACEHOLDER_LAST};

use chrono::Utc;
use roster_core::UserRecord;
use serde::Deserialize;

/// Response body of the user-generation endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct RawEnvelope {
    #[serde(default)]
    pub results: Option<Vec<RawUser>>,
}

impl RawEnvelope {
    /// Maps every entry, treating a missing `results` array as empty.
    pub fn into_records(self) -> Vec<UserRecord> {
        self.results
            .unwrap_or_default()
            .into_iter()
            .map(UserRecord::from)
            .collect()
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawUser {
    pub login: Option<RawLogin>,
    pub name: Option<RawName>,
    pub picture: Option<RawPicture>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawLogin {
    pub uuid: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawName {
    pub first: Option<String>,
    pub last: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawPicture {
    pub thumbnail: Option<String>,
}

impl From<RawUser> for UserRecord {
    fn from(raw: RawUser) -> Self {
        let (first, last) = match raw.name {
            Some(name) => (name.first, name.last),
            None => (None, None),
        };

        UserRecord {
            id: raw
                .login
                .and_then(|login| login.uuid)
                .unwrap_or_else(synthesize_id),
            first: first.unwrap_or_else(|| PLACEHOLDER_FIRST.to_string()),
            last: last.unwrap_or_else(|| PLACEHOLDER_LAST.to_string()),
            avatar: raw.picture.and_then(|picture| picture.thumbnail),
        }
    }
}

/// Builds an id for an entry without `login.uuid`: `<unix-millis>-<random hex>`.
///
/// Uniqueness is probabilistic; nothing checks it against the current list.
pub fn synthesize_id() -> String {
    format!(
        "{}-{:016x}",
        Utc::now().timestamp_millis(),
        rand::random::<u64>()
    )
}
