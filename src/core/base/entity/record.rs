/*
Record

Generic persisted wrapper around an entity payload. Every stored entity carries a
generated identifier plus creation and modification timestamps; the payload fields
are flattened next to them so the stored document and the wire representation are
the same JSON object.
*/

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record<T> {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub data: T,
}

/// Keys owned by the record wrapper; payload merges never touch them
pub const RESERVED_KEYS: [&str; 3] = ["id", "createdAt", "updatedAt"];

impl<T> Record<T> {
    pub fn new(data: T) -> Self {
        Self::new_with_id(Uuid::new_v4(), data)
    }

    pub fn new_with_id(id: Uuid, data: T) -> Self {
        let now = Utc::now();
        Self {
            id,
            created_at: now,
            updated_at: now,
            data,
        }
    }

    /// Replace the payload and refresh the modification timestamp
    pub fn update(&mut self, data: T) {
        self.data = data;
        self.updated_at = Utc::now();
    }
}
