// src/core/platform/container/asset.rs
use crate::core::base::entity::record::Record;
use crate::core::platform::container::entity::{require_text, Entity, EntityKind};
use crate::error::AppResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub name: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub asset_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, with = "purchase_date", skip_serializing_if = "Option::is_none")]
    pub purchase_date: Option<DateTime<Utc>>,
}

pub type AssetRecord = Record<Asset>;

impl Entity for Asset {
    const KIND: EntityKind = EntityKind::Asset;

    fn validate(&self) -> AppResult<()> {
        require_text(Self::KIND, "name", &self.name)
    }
}

/// Purchase dates arrive either as full RFC 3339 timestamps or as plain
/// `YYYY-MM-DD` dates from date pickers; plain dates are taken as UTC midnight.
mod purchase_date {
    use chrono::{DateTime, NaiveDate, TimeZone, Utc};
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(
        value: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        value.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        let Some(raw) = raw.filter(|s| !s.trim().is_empty()) else {
            return Ok(None);
        };

        if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw.trim()) {
            return Ok(Some(timestamp.with_timezone(&Utc)));
        }

        let date = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
            .map_err(|_| de::Error::custom(format!("invalid purchaseDate: {}", raw)))?;
        let midnight = date
            .and_hms_opt(0, 0, 0)
            .ok_or_else(|| de::Error::custom("invalid purchaseDate"))?;
        Ok(Some(Utc.from_utc_datetime(&midnight)))
    }
}
