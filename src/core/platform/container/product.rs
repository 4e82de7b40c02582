// src/core/platform/container/product.rs
use crate::core::base::entity::record::Record;
use crate::core::platform::container::entity::{require_text, Entity, EntityKind};
use crate::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    /// Free-text vendor reference; not enforced against the vendors collection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
}

pub type ProductRecord = Record<Product>;

impl Entity for Product {
    const KIND: EntityKind = EntityKind::Product;

    fn validate(&self) -> AppResult<()> {
        require_text(Self::KIND, "name", &self.name)?;

        if let Some(price) = self.price {
            if !price.is_finite() || price < 0.0 {
                return Err(AppError::Validation(
                    "Product price must be a non-negative number".to_string(),
                ));
            }
        }
        if matches!(self.quantity, Some(quantity) if quantity < 0) {
            return Err(AppError::Validation(
                "Product quantity cannot be negative".to_string(),
            ));
        }
        Ok(())
    }
}
