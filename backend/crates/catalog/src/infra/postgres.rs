//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use kernel::id::ProductId;
use rust_decimal::Decimal;
use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use crate::domain::entity::product::{InventoryItem, Product};
use crate::domain::entity::settings::{Person, ShopSettings};
use crate::domain::repository::{ProductRepository, SettingsRepository};
use crate::error::CatalogResult;

/// PostgreSQL-backed product repository
#[derive(Clone)]
pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const PRODUCT_COLUMNS: &str = r#"
    product_id,
    title,
    serial_no,
    price,
    original_price,
    discount,
    category,
    description,
    images,
    inventory,
    rating,
    created_at
"#;

impl ProductRepository for PgProductRepository {
    async fn list(&self) -> CatalogResult<Vec<Product>> {
        let rows = sqlx::query_as::<_, ProductRow>(&format!(
            "SELECT {} FROM products ORDER BY created_at DESC",
            PRODUCT_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ProductRow::into_product).collect())
    }

    async fn find_by_id(&self, id: &ProductId) -> CatalogResult<Option<Product>> {
        let row = sqlx::query_as::<_, ProductRow>(&format!(
            "SELECT {} FROM products WHERE product_id = $1",
            PRODUCT_COLUMNS
        ))
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(ProductRow::into_product))
    }

    async fn serial_no_taken(
        &self,
        serial_no: &str,
        excluding: Option<&ProductId>,
    ) -> CatalogResult<bool> {
        let taken = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM products
                WHERE serial_no = $1
                  AND ($2::uuid IS NULL OR product_id <> $2)
            )
            "#,
        )
        .bind(serial_no)
        .bind(excluding.map(|id| *id.as_uuid()))
        .fetch_one(&self.pool)
        .await?;

        Ok(taken)
    }

    async fn insert(&self, product: &Product) -> CatalogResult<()> {
        sqlx::query(
            r#"
            INSERT INTO products (
                product_id,
                title,
                serial_no,
                price,
                original_price,
                discount,
                category,
                description,
                images,
                inventory,
                rating,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $12)
            "#,
        )
        .bind(product.product_id.as_uuid())
        .bind(&product.title)
        .bind(&product.serial_no)
        .bind(product.price)
        .bind(product.original_price)
        .bind(product.discount)
        .bind(&product.category)
        .bind(&product.description)
        .bind(&product.images)
        .bind(Json(&product.inventory))
        .bind(product.rating)
        .bind(product.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn update(&self, product: &Product) -> CatalogResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE products SET
                title = $2,
                serial_no = $3,
                price = $4,
                original_price = $5,
                discount = $6,
                category = $7,
                description = $8,
                images = $9,
                inventory = $10,
                updated_at = now()
            WHERE product_id = $1
            "#,
        )
        .bind(product.product_id.as_uuid())
        .bind(&product.title)
        .bind(&product.serial_no)
        .bind(product.price)
        .bind(product.original_price)
        .bind(product.discount)
        .bind(&product.category)
        .bind(&product.description)
        .bind(&product.images)
        .bind(Json(&product.inventory))
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}

/// PostgreSQL-backed shop settings repository
#[derive(Clone)]
pub struct PgSettingsRepository {
    pool: PgPool,
}

impl PgSettingsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl SettingsRepository for PgSettingsRepository {
    async fn load(&self) -> CatalogResult<Option<ShopSettings>> {
        let row = sqlx::query_as::<_, SettingsRow>(
            r#"
            SELECT owners, staff_list, address
            FROM shop_settings
            WHERE id = 1
            "#,
        )
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(SettingsRow::into_settings))
    }

    async fn save(&self, settings: &ShopSettings) -> CatalogResult<()> {
        sqlx::query(
            r#"
            INSERT INTO shop_settings (id, owners, staff_list, address, updated_at)
            VALUES (1, $1, $2, $3, now())
            ON CONFLICT (id) DO UPDATE SET
                owners = EXCLUDED.owners,
                staff_list = EXCLUDED.staff_list,
                address = EXCLUDED.address,
                updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(Json(&settings.owners))
        .bind(Json(&settings.staff_list))
        .bind(&settings.address)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct ProductRow {
    product_id: Uuid,
    title: String,
    serial_no: String,
    price: Decimal,
    original_price: Decimal,
    discount: i32,
    category: String,
    description: String,
    images: Vec<String>,
    inventory: Json<Vec<InventoryItem>>,
    rating: f64,
    created_at: DateTime<Utc>,
}

impl ProductRow {
    fn into_product(self) -> Product {
        Product {
            product_id: ProductId::from_uuid(self.product_id),
            title: self.title,
            serial_no: self.serial_no,
            price: self.price,
            original_price: self.original_price,
            discount: self.discount,
            category: self.category,
            description: self.description,
            images: self.images,
            inventory: self.inventory.0,
            rating: self.rating,
            created_at: self.created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct SettingsRow {
    owners: Json<Vec<Person>>,
    staff_list: Json<Vec<Person>>,
    address: String,
}

impl SettingsRow {
    fn into_settings(self) -> ShopSettings {
        ShopSettings {
            owners: self.owners.0,
            staff_list: self.staff_list.0,
            address: self.address,
        }
    }
}
