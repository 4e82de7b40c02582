/*
Auth Service

Registration and login for user accounts stored in the `users` collection. Login
issues an opaque session token that is not persisted or checked anywhere; the
service exists so the console has a working sign-in flow.
*/

use crate::application::ports::output::entity_store_port::EntityStorePort;
use crate::core::base::entity::record::Record;
use crate::core::platform::container::activity_log::ActivityAction;
use crate::core::platform::container::entity::{Entity, EntityKind};
use crate::core::platform::container::notification::NotificationType;
use crate::core::platform::container::user::{User, UserProfile, UserRecord};
use crate::core::platform::manager::credentials::CredentialHasher;
use crate::core::platform::manager::side_effects::SideEffectEmitter;
use crate::error::{AppError, AppResult};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

const INVALID_CREDENTIALS: &str = "Invalid username or password";

/// User registration request
#[derive(Debug, Clone, Deserialize)]
pub struct RegistrationRequest {
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    pub password: String,
}

/// User login request
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful login
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub token: String,
    pub user: UserProfile,
}

pub struct AuthService {
    store: Arc<dyn EntityStorePort>,
    hasher: CredentialHasher,
    effects: Arc<SideEffectEmitter>,
}

impl AuthService {
    pub fn new(store: Arc<dyn EntityStorePort>, hasher: CredentialHasher, effects: Arc<SideEffectEmitter>) -> Self {
        Self { store, hasher, effects }
    }

    pub async fn register(&self, request: RegistrationRequest) -> AppResult<UserProfile> {
        let email = request.email.filter(|e| !e.trim().is_empty());
        let mut user = User::new(request.username, email, request.password);
        user.validate()?;

        if self.find_user_id(&user.username).await?.is_some() {
            return Err(AppError::Conflict("Username already exists".to_string()));
        }
        user.password = self.hasher.hash_password(&user.password)?;

        let record = Record::new(user);
        self.store.insert(EntityKind::User, &serde_json::to_value(&record)?).await?;
        tracing::info!(user = %record.id, username = %record.data.username, "user registered");

        let username = record.data.username.clone();
        self.effects
            .notify(
                "New Registration",
                format!("{} registered successfully", username),
                NotificationType::Info,
            )
            .await;
        self.effects
            .record(username, ActivityAction::Register, User::KIND.display_name(), "New user account created")
            .await;

        Ok(UserProfile::from(&record))
    }

    pub async fn login(&self, request: LoginRequest) -> AppResult<AuthenticatedUser> {
        let username = request.username.trim();
        let record = match self.find_user_id(username).await? {
            Some(id) => self.load_user(id).await?,
            None => None,
        };
        let Some(record) = record else {
            tracing::debug!(username, "login for unknown user");
            return Err(AppError::Auth(INVALID_CREDENTIALS.to_string()));
        };

        if !self.hasher.verify_password(&request.password, &record.data.password) {
            tracing::debug!(user = %record.id, "login with wrong password");
            return Err(AppError::Auth(INVALID_CREDENTIALS.to_string()));
        }
        tracing::info!(user = %record.id, "user logged in");

        self.effects
            .record(
                record.data.username.clone(),
                ActivityAction::Login,
                User::KIND.display_name(),
                "User logged in",
            )
            .await;

        Ok(AuthenticatedUser {
            token: Uuid::new_v4().to_string(),
            user: UserProfile::from(&record),
        })
    }

    async fn find_user_id(&self, username: &str) -> AppResult<Option<Uuid>> {
        self.store.find_id_by_field(EntityKind::User, "username", username).await
    }

    async fn load_user(&self, id: Uuid) -> AppResult<Option<UserRecord>> {
        match self.store.find_by_id(EntityKind::User, id).await? {
            Some(document) => Ok(Some(serde_json::from_value(document)?)),
            None => Ok(None),
        }
    }
}
