/*
Recycle Bin Port

Contract for the soft-delete store. Moving a document into the bin and restoring
it back both span two collections; adapters must perform each of them as a single
atomic unit so a document is never lost and never duplicated.
*/

use crate::core::platform::container::entity::EntityKind;
use crate::core::platform::container::recycle_bin::RecycleBinEntry;
use crate::error::AppResult;
use async_trait::async_trait;
use uuid::Uuid;

#[async_trait]
pub trait RecycleBinPort: Send + Sync {
    /// Snapshot the document into the bin, then remove it from its collection.
    /// Returns `None`, and writes nothing, when the document does not exist.
    async fn move_to_bin(&self, kind: EntityKind, id: Uuid) -> AppResult<Option<RecycleBinEntry>>;

    /// Write the entry's snapshot back into `kind`'s collection and remove the entry.
    /// Returns false when the entry no longer exists.
    async fn restore(&self, entry: &RecycleBinEntry, kind: EntityKind) -> AppResult<bool>;

    /// All entries, most recently deleted first
    async fn list(&self) -> AppResult<Vec<RecycleBinEntry>>;

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<RecycleBinEntry>>;

    /// Permanently remove one entry; returns false when it does not exist
    async fn delete(&self, id: Uuid) -> AppResult<bool>;

    /// Permanently remove every entry; returns how many were removed
    async fn clear(&self) -> AppResult<u64>;
}
