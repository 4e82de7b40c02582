// src/core/platform/container/vendor.rs
use crate::core::base::entity::record::Record;
use crate::core::platform::container::email::validate_optional_email;
use crate::core::platform::container::entity::{require_text, Entity, EntityKind};
use crate::error::AppResult;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vendor {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    /// URL or data URI of the vendor logo
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

pub type VendorRecord = Record<Vendor>;

impl Entity for Vendor {
    const KIND: EntityKind = EntityKind::Vendor;

    fn validate(&self) -> AppResult<()> {
        require_text(Self::KIND, "name", &self.name)?;
        validate_optional_email(self.email.as_deref())
    }
}
