/*
Entity Store Port

Persistence contract for the managed entity collections. Documents are handled as
JSON objects carrying their own `id`, `createdAt` and `updatedAt` keys; typing is
applied by the CRUD orchestrator, which lets a single adapter serve every kind.
*/

use crate::core::platform::container::entity::EntityKind;
use crate::error::AppResult;
use async_trait::async_trait;
use serde_json::Value;
use uuid::Uuid;

#[async_trait]
pub trait EntityStorePort: Send + Sync {
    /// All documents of a kind, oldest first
    async fn find_all(&self, kind: EntityKind) -> AppResult<Vec<Value>>;

    /// Find a document by ID
    async fn find_by_id(&self, kind: EntityKind, id: Uuid) -> AppResult<Option<Value>>;

    /// ID of the document whose top-level `field` equals `value`, if any
    async fn find_id_by_field(&self, kind: EntityKind, field: &str, value: &str) -> AppResult<Option<Uuid>>;

    /// Insert a new document
    async fn insert(&self, kind: EntityKind, document: &Value) -> AppResult<()>;

    /// Replace an existing document; returns false when the ID does not resolve
    async fn replace(&self, kind: EntityKind, document: &Value) -> AppResult<bool>;
}
