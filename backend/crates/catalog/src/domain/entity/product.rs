//! Product Entity

use std::str::FromStr;

use chrono::{DateTime, Utc};
use kernel::id::ProductId;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{CatalogError, CatalogResult};

/// Rating given to every new product
pub const DEFAULT_RATING: f64 = 4.5;

/// Stock on hand for one size
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub size: String,
    #[serde(deserialize_with = "quantity_from_number_or_string")]
    pub quantity: u32,
}

/// Form inputs arrive as strings; accept `12` and `"12"` alike.
fn quantity_from_number_or_string<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Quantity {
        Number(u32),
        Text(String),
    }

    match Quantity::deserialize(deserializer)? {
        Quantity::Number(n) => Ok(n),
        Quantity::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

/// Raw product form fields, exactly as submitted
#[derive(Debug, Clone, Default)]
pub struct ProductFields {
    pub title: String,
    pub serial_no: String,
    pub price: String,
    pub original_price: String,
    pub category: String,
    pub description: String,
    /// JSON array of `{size, quantity}`; empty means no stock rows
    pub inventory: String,
}

/// Validated product attributes, shared by create and update
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub title: String,
    pub serial_no: String,
    pub price: Decimal,
    pub original_price: Decimal,
    pub category: String,
    pub description: String,
    pub inventory: Vec<InventoryItem>,
}

impl ProductDraft {
    pub fn parse(fields: ProductFields) -> CatalogResult<Self> {
        let title = required_text("title", fields.title)?;
        let serial_no = required_text("serialNo", fields.serial_no)?;
        let category = required_text("category", fields.category)?;
        let description = required_text("description", fields.description)?;
        let price = positive_amount("price", &fields.price)?;
        let original_price = positive_amount("originalPrice", &fields.original_price)?;

        if price > original_price {
            return Err(CatalogError::Validation(
                "price must not exceed originalPrice".to_string(),
            ));
        }

        let inventory = parse_inventory(&fields.inventory)?;

        Ok(Self {
            title,
            serial_no,
            price,
            original_price,
            category,
            description,
            inventory,
        })
    }

    /// Whole-percent markdown from `original_price` to `price`, half rounded up
    pub fn discount(&self) -> i32 {
        if self.original_price.is_zero() {
            return 0;
        }
        ((self.original_price - self.price) / self.original_price * Decimal::ONE_HUNDRED)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_i32()
            .unwrap_or(0)
    }
}

fn required_text(field: &str, value: String) -> CatalogResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CatalogError::Validation(format!("{} is required", field)));
    }
    Ok(trimmed.to_string())
}

fn positive_amount(field: &str, value: &str) -> CatalogResult<Decimal> {
    let amount = Decimal::from_str(value.trim())
        .map_err(|_| CatalogError::Validation(format!("{} must be a number", field)))?;
    if amount <= Decimal::ZERO {
        return Err(CatalogError::Validation(format!(
            "{} must be greater than 0",
            field
        )));
    }
    Ok(amount)
}

fn parse_inventory(raw: &str) -> CatalogResult<Vec<InventoryItem>> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    let items: Vec<InventoryItem> = serde_json::from_str(raw).map_err(|_| {
        CatalogError::Validation(
            "inventory must be a JSON array of {size, quantity}".to_string(),
        )
    })?;
    if items.iter().any(|item| item.size.trim().is_empty()) {
        return Err(CatalogError::Validation(
            "inventory size is required".to_string(),
        ));
    }
    Ok(items)
}

/// Catalog product
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub product_id: ProductId,
    pub title: String,
    pub serial_no: String,
    pub price: Decimal,
    pub original_price: Decimal,
    pub discount: i32,
    pub category: String,
    pub description: String,
    /// Public image URLs, at most the configured image count
    pub images: Vec<String>,
    pub inventory: Vec<InventoryItem>,
    pub rating: f64,
    pub created_at: DateTime<Utc>,
}

impl Product {
    pub fn create(draft: ProductDraft, images: Vec<String>, now: DateTime<Utc>) -> Self {
        let discount = draft.discount();
        Self {
            product_id: ProductId::new(),
            title: draft.title,
            serial_no: draft.serial_no,
            price: draft.price,
            original_price: draft.original_price,
            discount,
            category: draft.category,
            description: draft.description,
            images,
            inventory: draft.inventory,
            rating: DEFAULT_RATING,
            created_at: now,
        }
    }

    /// Overwrite the editable attributes; images only when new ones arrived
    pub fn apply(&mut self, draft: ProductDraft, images: Option<Vec<String>>) {
        self.discount = draft.discount();
        self.title = draft.title;
        self.serial_no = draft.serial_no;
        self.price = draft.price;
        self.original_price = draft.original_price;
        self.category = draft.category;
        self.description = draft.description;
        self.inventory = draft.inventory;
        if let Some(images) = images {
            self.images = images;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields() -> ProductFields {
        ProductFields {
            title: " Gold Ring ".into(),
            serial_no: "KJ-001".into(),
            price: "900".into(),
            original_price: "1200".into(),
            category: "Rings".into(),
            description: "22k".into(),
            inventory: r#"[{"size":"M","quantity":12},{"size":"L","quantity":"3"}]"#.into(),
        }
    }

    #[test]
    fn test_parse_trims_and_reads_inventory() {
        let draft = ProductDraft::parse(fields()).unwrap();
        assert_eq!(draft.title, "Gold Ring");
        assert_eq!(draft.price, Decimal::from(900));
        assert_eq!(draft.inventory.len(), 2);
        assert_eq!(draft.inventory[1].quantity, 3);
    }

    #[test]
    fn test_discount_rounds_half_up() {
        let draft = ProductDraft::parse(fields()).unwrap();
        assert_eq!(draft.discount(), 25);

        let draft = ProductDraft::parse(ProductFields {
            price: "99".into(),
            original_price: "200".into(),
            ..fields()
        })
        .unwrap();
        // 50.5% rounds to 51
        assert_eq!(draft.discount(), 51);

        let draft = ProductDraft::parse(ProductFields {
            price: "1200".into(),
            ..fields()
        })
        .unwrap();
        assert_eq!(draft.discount(), 0);
    }

    #[test]
    fn test_price_rules() {
        let above = ProductDraft::parse(ProductFields {
            price: "1300".into(),
            ..fields()
        });
        assert!(matches!(above, Err(CatalogError::Validation(_))));

        let zero = ProductDraft::parse(ProductFields {
            price: "0".into(),
            ..fields()
        });
        assert!(matches!(zero, Err(CatalogError::Validation(_))));

        let text = ProductDraft::parse(ProductFields {
            original_price: "lots".into(),
            ..fields()
        });
        assert!(matches!(text, Err(CatalogError::Validation(_))));
    }

    #[test]
    fn test_required_fields() {
        let err = ProductDraft::parse(ProductFields {
            serial_no: "  ".into(),
            ..fields()
        })
        .unwrap_err();
        assert_eq!(err.to_string(), "serialNo is required");
    }

    #[test]
    fn test_inventory_rules() {
        let empty = ProductDraft::parse(ProductFields {
            inventory: String::new(),
            ..fields()
        })
        .unwrap();
        assert!(empty.inventory.is_empty());

        for bad in [r#"{"size":"M"}"#, r#"[{"size":"","quantity":1}]"#, r#"[{"size":"M","quantity":-1}]"#] {
            let result = ProductDraft::parse(ProductFields {
                inventory: bad.into(),
                ..fields()
            });
            assert!(matches!(result, Err(CatalogError::Validation(_))), "{}", bad);
        }
    }

    #[test]
    fn test_apply_keeps_images_without_new_uploads() {
        let now = Utc::now();
        let mut product = Product::create(
            ProductDraft::parse(fields()).unwrap(),
            vec!["a.jpg".into()],
            now,
        );
        assert_eq!(product.rating, DEFAULT_RATING);

        let draft = ProductDraft::parse(ProductFields {
            price: "600".into(),
            ..fields()
        })
        .unwrap();
        product.apply(draft.clone(), None);
        assert_eq!(product.images, vec!["a.jpg".to_string()]);
        assert_eq!(product.discount, 50);

        product.apply(draft, Some(vec!["b.jpg".into()]));
        assert_eq!(product.images, vec!["b.jpg".to_string()]);
        assert_eq!(product.created_at, now);
    }
}
