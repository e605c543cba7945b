//! In-Memory Implementations
//!
//! Process-local product, settings and image stores with the same
//! semantics as the PostgreSQL and disk implementations. Used by tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use kernel::id::ProductId;

use crate::domain::entity::product::Product;
use crate::domain::entity::settings::ShopSettings;
use crate::domain::repository::{ProductRepository, SettingsRepository};
use crate::domain::storage::{ImageStore, UploadedImage};
use crate::error::{CatalogError, CatalogResult};

fn poisoned<T>(_: T) -> CatalogError {
    CatalogError::Internal("catalog store lock poisoned".to_string())
}

#[derive(Clone, Default)]
pub struct InMemoryProductRepository {
    products: Arc<Mutex<HashMap<ProductId, Product>>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.products.lock().map(|p| p.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ProductRepository for InMemoryProductRepository {
    async fn list(&self) -> CatalogResult<Vec<Product>> {
        let products = self.products.lock().map_err(poisoned)?;
        let mut all: Vec<Product> = products.values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all)
    }

    async fn find_by_id(&self, id: &ProductId) -> CatalogResult<Option<Product>> {
        let products = self.products.lock().map_err(poisoned)?;
        Ok(products.get(id).cloned())
    }

    async fn serial_no_taken(
        &self,
        serial_no: &str,
        excluding: Option<&ProductId>,
    ) -> CatalogResult<bool> {
        let products = self.products.lock().map_err(poisoned)?;
        Ok(products
            .values()
            .any(|p| p.serial_no == serial_no && Some(&p.product_id) != excluding))
    }

    async fn insert(&self, product: &Product) -> CatalogResult<()> {
        let mut products = self.products.lock().map_err(poisoned)?;
        if products.values().any(|p| p.serial_no == product.serial_no) {
            return Err(CatalogError::DuplicateSerialNo);
        }
        products.insert(product.product_id, product.clone());
        Ok(())
    }

    async fn update(&self, product: &Product) -> CatalogResult<bool> {
        let mut products = self.products.lock().map_err(poisoned)?;
        if products
            .values()
            .any(|p| p.serial_no == product.serial_no && p.product_id != product.product_id)
        {
            return Err(CatalogError::DuplicateSerialNo);
        }
        match products.get_mut(&product.product_id) {
            Some(stored) => {
                *stored = product.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[derive(Clone, Default)]
pub struct InMemorySettingsRepository {
    settings: Arc<Mutex<Option<ShopSettings>>>,
}

impl InMemorySettingsRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsRepository for InMemorySettingsRepository {
    async fn load(&self) -> CatalogResult<Option<ShopSettings>> {
        Ok(self.settings.lock().map_err(poisoned)?.clone())
    }

    async fn save(&self, settings: &ShopSettings) -> CatalogResult<()> {
        *self.settings.lock().map_err(poisoned)? = Some(settings.clone());
        Ok(())
    }
}

/// Keeps uploads in memory and hands out sequential file names
#[derive(Clone)]
pub struct InMemoryImageStore {
    base_url: String,
    files: Arc<Mutex<Vec<(String, usize)>>>,
}

impl InMemoryImageStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            files: Arc::default(),
        }
    }

    /// Stored file names with their sizes, in write order
    pub fn files(&self) -> Vec<(String, usize)> {
        self.files.lock().map(|f| f.clone()).unwrap_or_default()
    }
}

impl ImageStore for InMemoryImageStore {
    async fn save(&self, prefix: &str, image: &UploadedImage) -> CatalogResult<String> {
        let ext = image.extension()?;
        let mut files = self.files.lock().map_err(poisoned)?;
        let name = format!("{}{}{}", prefix, files.len() + 1, ext);
        files.push((name.clone(), image.bytes.len()));
        Ok(format!(
            "{}/uploads/{}",
            self.base_url.trim_end_matches('/'),
            name
        ))
    }
}
