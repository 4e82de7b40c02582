/*
CRUD Service

Generic create/read/update/delete orchestration for every managed entity kind.
Each mutation is applied to the entity store first and then fans out to one
notification and one activity-log entry through the side-effect emitter. Deletes are
soft: the record is moved into the recycle bin, never destroyed.
*/

use crate::application::ports::output::entity_store_port::EntityStorePort;
use crate::application::ports::output::recycle_bin_port::RecycleBinPort;
use crate::core::base::entity::record::{Record, RESERVED_KEYS};
use crate::core::platform::container::activity_log::ActivityAction;
use crate::core::platform::container::entity::Entity;
use crate::core::platform::container::notification::NotificationType;
use crate::core::platform::container::recycle_bin::RecycleBinEntry;
use crate::core::platform::manager::credentials::CredentialHasher;
use crate::core::platform::manager::side_effects::SideEffectEmitter;
use crate::error::{AppError, AppResult};
use serde_json::{Map, Value};
use std::marker::PhantomData;
use std::sync::Arc;
use uuid::Uuid;

pub struct CrudService<T: Entity> {
    store: Arc<dyn EntityStorePort>,
    recycle_bin: Arc<dyn RecycleBinPort>,
    effects: Arc<SideEffectEmitter>,
    hasher: CredentialHasher,
    _entity: PhantomData<fn() -> T>,
}

impl<T: Entity> CrudService<T> {
    pub fn new(
        store: Arc<dyn EntityStorePort>,
        recycle_bin: Arc<dyn RecycleBinPort>,
        effects: Arc<SideEffectEmitter>,
        hasher: CredentialHasher,
    ) -> Self {
        Self {
            store,
            recycle_bin,
            effects,
            hasher,
            _entity: PhantomData,
        }
    }

    pub async fn list(&self) -> AppResult<Vec<Record<T>>> {
        self.store
            .find_all(T::KIND)
            .await?
            .into_iter()
            .map(decode::<T>)
            .collect()
    }

    pub async fn get(&self, id: Uuid) -> AppResult<Record<T>> {
        let document = self
            .store
            .find_by_id(T::KIND, id)
            .await?
            .ok_or_else(not_found::<T>)?;
        decode(document)
    }

    pub async fn create(&self, payload: Value) -> AppResult<Record<T>> {
        let payload = payload_object::<T>(payload)?;
        let mut data: T = parse_payload(Value::Object(payload))?;
        data.validate()?;
        self.ensure_unique(&data, None).await?;
        self.hash_secret(&mut data)?;

        let record = Record::new(data);
        self.store.insert(T::KIND, &serde_json::to_value(&record)?).await?;
        tracing::info!(kind = %T::KIND, id = %record.id, "entity created");

        let kind = T::KIND.display_name();
        self.effects
            .notify(format!("{} Added", kind), format!("{} created successfully", kind), NotificationType::Success)
            .await;
        self.effects
            .record_system(ActivityAction::Create, kind, format!("{} {} created", kind, record.id))
            .await;

        Ok(record)
    }

    /// Merge a partial payload into the stored record
    pub async fn update(&self, id: Uuid, payload: Value) -> AppResult<Record<T>> {
        let patch = payload_object::<T>(payload)?;
        let secret_changed = T::SECRET_FIELD.is_some_and(|field| patch.contains_key(field));

        let mut record = self.get(id).await?;
        let mut merged = match serde_json::to_value(&record.data)? {
            Value::Object(fields) => fields,
            _ => return Err(AppError::Internal(format!("{} did not serialize to an object", T::KIND))),
        };
        merged.extend(patch);

        let mut data: T = parse_payload(Value::Object(merged))?;
        data.validate()?;
        self.ensure_unique(&data, Some(id)).await?;
        if secret_changed {
            self.hash_secret(&mut data)?;
        }

        record.update(data);
        if !self.store.replace(T::KIND, &serde_json::to_value(&record)?).await? {
            return Err(not_found::<T>());
        }
        tracing::info!(kind = %T::KIND, id = %record.id, "entity updated");

        let kind = T::KIND.display_name();
        self.effects
            .notify(format!("{} Updated", kind), format!("{} updated successfully", kind), NotificationType::Info)
            .await;
        self.effects
            .record_system(ActivityAction::Update, kind, format!("{} {} updated", kind, id))
            .await;

        Ok(record)
    }

    /// Move the record into the recycle bin
    pub async fn delete(&self, id: Uuid) -> AppResult<RecycleBinEntry> {
        let entry = self
            .recycle_bin
            .move_to_bin(T::KIND, id)
            .await?
            .ok_or_else(not_found::<T>)?;
        tracing::info!(kind = %T::KIND, id = %id, bin_entry = %entry.id, "entity moved to recycle bin");

        let kind = T::KIND.display_name();
        self.effects
            .notify(format!("{} Deleted", kind), format!("{} moved to recycle bin", kind), NotificationType::Warning)
            .await;
        self.effects
            .record_system(
                ActivityAction::Delete,
                kind,
                format!("{} {} deleted and moved to recycle bin", kind, id),
            )
            .await;

        Ok(entry)
    }

    async fn ensure_unique(&self, data: &T, current: Option<Uuid>) -> AppResult<()> {
        for (field, value) in data.unique_fields() {
            let existing = self.store.find_id_by_field(T::KIND, field, &value).await?;
            if matches!(existing, Some(other) if Some(other) != current) {
                return Err(AppError::Conflict(format!(
                    "{} with {} '{}' already exists",
                    T::KIND,
                    field,
                    value
                )));
            }
        }
        Ok(())
    }

    fn hash_secret(&self, data: &mut T) -> AppResult<()> {
        if let Some(secret) = data.secret_mut() {
            *secret = self.hasher.hash_password(secret)?;
        }
        Ok(())
    }
}

fn not_found<T: Entity>() -> AppError {
    AppError::NotFound(format!("{} not found", T::KIND))
}

/// Payload must be a JSON object; wrapper-owned keys are dropped
fn payload_object<T: Entity>(payload: Value) -> AppResult<Map<String, Value>> {
    match payload {
        Value::Object(mut fields) => {
            for key in RESERVED_KEYS {
                fields.remove(key);
            }
            Ok(fields)
        }
        _ => Err(AppError::Validation(format!("{} payload must be a JSON object", T::KIND))),
    }
}

fn parse_payload<T: Entity>(payload: Value) -> AppResult<T> {
    serde_json::from_value(payload)
        .map_err(|e| AppError::Validation(format!("Invalid {} payload: {}", T::KIND, e)))
}

fn decode<T: Entity>(document: Value) -> AppResult<Record<T>> {
    Ok(serde_json::from_value(document)?)
}
