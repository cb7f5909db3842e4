use serde::{Deserialize, Serialize};

/// A single user record as persisted in the storage file.
///
/// Fields default when absent from the source JSON so that sparse
/// payloads decode like the zero-value records they represent; `add`
/// rejects a record whose `id` defaulted to empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub age: u64,
}

impl Record {
    pub fn new(id: impl Into<String>, email: impl Into<String>, age: u64) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            age,
        }
    }
}
