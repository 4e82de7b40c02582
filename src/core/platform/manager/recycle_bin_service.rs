/*
Recycle Bin Service

Lists, purges and restores soft-deleted entities. A restore writes the snapshot back
under its original identifier, so a delete followed by a restore yields a record equal
to the one that was deleted.
*/

use crate::application::ports::output::entity_store_port::EntityStorePort;
use crate::application::ports::output::recycle_bin_port::RecycleBinPort;
use crate::core::platform::container::activity_log::ActivityAction;
use crate::core::platform::container::entity::EntityKind;
use crate::core::platform::container::notification::NotificationType;
use crate::core::platform::container::recycle_bin::RecycleBinEntry;
use crate::core::platform::manager::side_effects::SideEffectEmitter;
use crate::error::{AppError, AppResult};
use serde_json::Value;
use std::sync::Arc;
use uuid::Uuid;

/// A document that was written back into its collection
#[derive(Debug, Clone, PartialEq)]
pub struct RestoredEntity {
    pub kind: EntityKind,
    pub data: Value,
}

pub struct RecycleBinService {
    recycle_bin: Arc<dyn RecycleBinPort>,
    store: Arc<dyn EntityStorePort>,
    effects: Arc<SideEffectEmitter>,
}

impl RecycleBinService {
    pub fn new(
        recycle_bin: Arc<dyn RecycleBinPort>,
        store: Arc<dyn EntityStorePort>,
        effects: Arc<SideEffectEmitter>,
    ) -> Self {
        Self {
            recycle_bin,
            store,
            effects,
        }
    }

    pub async fn list(&self) -> AppResult<Vec<RecycleBinEntry>> {
        self.recycle_bin.list().await
    }

    pub async fn permanent_delete(&self, id: Uuid) -> AppResult<()> {
        if !self.recycle_bin.delete(id).await? {
            return Err(not_found());
        }
        tracing::info!(bin_entry = %id, "recycle bin entry permanently deleted");

        self.effects
            .notify("Item Permanently Deleted", "An item was permanently removed from the recycle bin", NotificationType::Warning)
            .await;
        Ok(())
    }

    pub async fn restore(&self, id: Uuid) -> AppResult<RestoredEntity> {
        let entry = self.recycle_bin.find_by_id(id).await?.ok_or_else(not_found)?;
        let (kind, snapshot) = entry.inspect()?;

        if self.store.find_by_id(kind, snapshot.id).await?.is_some() {
            return Err(AppError::Conflict(format!(
                "{} {} already exists",
                kind, snapshot.id
            )));
        }
        for (field, value) in &snapshot.unique_fields {
            if self.store.find_id_by_field(kind, field, value).await?.is_some() {
                return Err(AppError::Conflict(format!(
                    "{} with {} '{}' already exists",
                    kind, field, value
                )));
            }
        }

        // Entry may have been purged or restored by a concurrent request
        if !self.recycle_bin.restore(&entry, kind).await? {
            return Err(not_found());
        }
        tracing::info!(kind = %kind, id = %snapshot.id, bin_entry = %id, "entity restored from recycle bin");

        let name = kind.display_name();
        self.effects
            .notify(format!("{} Restored", name), format!("{} restored from recycle bin", name), NotificationType::Info)
            .await;
        self.effects
            .record_system(
                ActivityAction::Restore,
                name,
                format!("{} {} restored from recycle bin", name, snapshot.id),
            )
            .await;

        Ok(RestoredEntity {
            kind,
            data: entry.data,
        })
    }

    /// Remove every entry; returns how many were removed
    pub async fn empty(&self) -> AppResult<u64> {
        let removed = self.recycle_bin.clear().await?;
        tracing::info!(removed, "recycle bin emptied");

        self.effects
            .notify(
                "Recycle Bin Emptied",
                format!("{} item(s) permanently deleted", removed),
                NotificationType::Warning,
            )
            .await;
        Ok(removed)
    }
}

fn not_found() -> AppError {
    AppError::not_found("Item not found in recycle bin")
}
