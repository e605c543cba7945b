//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::entity::product::{InventoryItem, Product};
use crate::domain::entity::settings::ShopSettings;

// ============================================================================
// Products
// ============================================================================

/// Product as the storefront renders it; prices are JSON numbers
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub serial_no: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub original_price: Decimal,
    pub discount: i32,
    pub category: String,
    pub description: String,
    pub images: Vec<String>,
    pub inventory: Vec<InventoryItem>,
    pub rating: f64,
    pub created_at: DateTime<Utc>,
}

impl From<Product> for ProductDto {
    fn from(product: Product) -> Self {
        Self {
            id: product.product_id.to_string(),
            title: product.title,
            serial_no: product.serial_no,
            price: product.price,
            original_price: product.original_price,
            discount: product.discount,
            category: product.category,
            description: product.description,
            images: product.images,
            inventory: product.inventory,
            rating: product.rating,
            created_at: product.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProductCreatedResponse {
    pub message: &'static str,
    pub product: ProductDto,
}

// ============================================================================
// Settings
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct SettingsSavedResponse {
    pub message: &'static str,
    pub settings: ShopSettings,
}
