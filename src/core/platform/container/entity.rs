/*
Entity Container

Every managed collection (vendors, products, assets, users) is described by a type
implementing `Entity`. The trait carries the per-kind schema rules the generic CRUD
orchestrator needs: validation, unique fields, and the optional secret field that is
hashed before it is persisted and never leaves the web layer.

`EntityKind` is the runtime tag for the same set of collections. Recycle-bin entries
store the kind's display name so a snapshot can be routed back to the collection it
came from.
*/

use crate::core::base::entity::record::Record;
use crate::core::platform::container::{asset::Asset, product::Product, user::User, vendor::Vendor};
use crate::error::{AppError, AppResult};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Schema rules for a managed entity kind
pub trait Entity: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    const KIND: EntityKind;

    /// Field holding a credential that must be hashed before it is stored
    const SECRET_FIELD: Option<&'static str> = None;

    /// Check required fields and value constraints
    fn validate(&self) -> AppResult<()>;

    /// Fields that must be unique across the collection, with their values
    fn unique_fields(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }

    /// Mutable access to the secret field, when the kind has one
    fn secret_mut(&mut self) -> Option<&mut String> {
        None
    }

    /// Strip fields that must never be sent to clients
    fn redact(value: &mut Value) {
        if let (Some(field), Some(object)) = (Self::SECRET_FIELD, value.as_object_mut()) {
            object.remove(field);
        }
    }
}

/// Summary of a recycle-bin snapshot after it has been checked against its kind
#[derive(Debug, Clone, PartialEq)]
pub struct SnapshotInfo {
    pub id: Uuid,
    pub unique_fields: Vec<(&'static str, String)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Vendor,
    Product,
    Asset,
    User,
}

impl EntityKind {
    pub const ALL: [EntityKind; 4] = [
        EntityKind::Vendor,
        EntityKind::Product,
        EntityKind::Asset,
        EntityKind::User,
    ];

    /// Singular name used in notifications and recycle-bin entries
    pub fn display_name(&self) -> &'static str {
        match self {
            EntityKind::Vendor => "Vendor",
            EntityKind::Product => "Product",
            EntityKind::Asset => "Asset",
            EntityKind::User => "User",
        }
    }

    /// Collection name, used both as the table name and the route segment
    pub fn collection(&self) -> &'static str {
        match self {
            EntityKind::Vendor => "vendors",
            EntityKind::Product => "products",
            EntityKind::Asset => "assets",
            EntityKind::User => "users",
        }
    }

    /// Top-level document keys that must be unique within the collection
    pub fn unique_keys(&self) -> &'static [&'static str] {
        match self {
            EntityKind::User => &["username"],
            _ => &[],
        }
    }

    /// Check that a snapshot still deserializes into this kind's record type
    pub fn inspect_snapshot(&self, data: &Value) -> AppResult<SnapshotInfo> {
        match self {
            EntityKind::Vendor => inspect::<Vendor>(data),
            EntityKind::Product => inspect::<Product>(data),
            EntityKind::Asset => inspect::<Asset>(data),
            EntityKind::User => inspect::<User>(data),
        }
    }

    pub fn redact(&self, value: &mut Value) {
        match self {
            EntityKind::Vendor => Vendor::redact(value),
            EntityKind::Product => Product::redact(value),
            EntityKind::Asset => Asset::redact(value),
            EntityKind::User => User::redact(value),
        }
    }
}

/// Fails with a validation error when a required text field is blank
pub fn require_text(kind: EntityKind, field: &str, value: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{} {} is required", kind, field)));
    }
    Ok(())
}

fn inspect<T: Entity>(data: &Value) -> AppResult<SnapshotInfo> {
    let record: Record<T> = serde_json::from_value(data.clone()).map_err(|e| {
        AppError::Validation(format!("Snapshot is not a valid {}: {}", T::KIND, e))
    })?;
    record.data.validate()?;

    Ok(SnapshotInfo {
        id: record.id,
        unique_fields: record.data.unique_fields(),
    })
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for EntityKind {
    type Err = AppError;

    /// Accepts the display name or the collection name, in any case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        EntityKind::ALL
            .into_iter()
            .find(|kind| {
                needle == kind.display_name().to_lowercase() || needle == kind.collection()
            })
            .ok_or_else(|| AppError::InvalidEntityType(s.to_string()))
    }
}
