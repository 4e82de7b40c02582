/*
Recycle Bin Container

A soft-deleted entity. `data` is the complete stored document as it existed right
before deletion (identifier, timestamps and every field, including credential
hashes), so it can be written back unchanged on restore. `entity_type` is kept as a
plain string: a stored entry whose type no longer maps to a known collection must
still be listable and purgeable.
*/

use crate::core::platform::container::entity::{EntityKind, SnapshotInfo};
use crate::error::AppResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecycleBinEntry {
    pub id: Uuid,
    pub entity_type: String,
    pub data: Value,
    pub deleted_at: DateTime<Utc>,
}

impl RecycleBinEntry {
    pub fn new(kind: EntityKind, data: Value) -> Self {
        Self {
            id: Uuid::new_v4(),
            entity_type: kind.display_name().to_string(),
            data,
            deleted_at: Utc::now(),
        }
    }

    /// Resolve the collection this entry came from
    pub fn kind(&self) -> AppResult<EntityKind> {
        self.entity_type.parse()
    }

    /// Resolve the kind and check the snapshot still matches its schema
    pub fn inspect(&self) -> AppResult<(EntityKind, SnapshotInfo)> {
        let kind = self.kind()?;
        let info = kind.inspect_snapshot(&self.data)?;
        Ok((kind, info))
    }

    /// Copy of the entry that is safe to send to clients
    pub fn redacted(&self) -> Self {
        let mut entry = self.clone();
        if let Ok(kind) = entry.kind() {
            kind.redact(&mut entry.data);
        }
        entry
    }
}
