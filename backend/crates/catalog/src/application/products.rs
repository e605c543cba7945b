//! Product Use Cases
//!
//! Create, list, fetch and update catalog products. Images are checked
//! as a batch before any is written, so a rejected upload leaves nothing
//! behind.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use kernel::id::ProductId;

use crate::application::config::CatalogConfig;
use crate::domain::entity::product::{Product, ProductDraft, ProductFields};
use crate::domain::repository::ProductRepository;
use crate::domain::storage::{ImageStore, UploadedImage};
use crate::error::{CatalogError, CatalogResult};

pub struct ProductInput {
    pub fields: ProductFields,
    pub images: Vec<UploadedImage>,
}

/// Malformed ids are indistinguishable from missing products
pub fn parse_product_id(raw: &str) -> CatalogResult<ProductId> {
    raw.trim()
        .parse()
        .map_err(|_| CatalogError::ProductNotFound)
}

fn check_images(images: &[UploadedImage], config: &CatalogConfig) -> CatalogResult<()> {
    if images.len() > config.max_images {
        return Err(CatalogError::TooManyImages {
            max: config.max_images,
        });
    }
    for image in images {
        if image.bytes.len() > config.max_image_bytes {
            return Err(CatalogError::ImageTooLarge {
                max_mib: config.max_image_mib(),
            });
        }
        image.extension()?;
    }
    Ok(())
}

async fn store_images<S: ImageStore>(
    store: &S,
    images: &[UploadedImage],
) -> CatalogResult<Vec<String>> {
    let mut urls = Vec::with_capacity(images.len());
    for image in images {
        urls.push(store.save("", image).await?);
    }
    Ok(urls)
}

// ============================================================================
// Create
// ============================================================================

pub struct CreateProductUseCase<P, S>
where
    P: ProductRepository,
    S: ImageStore,
{
    repo: Arc<P>,
    store: Arc<S>,
    config: Arc<CatalogConfig>,
}

impl<P, S> CreateProductUseCase<P, S>
where
    P: ProductRepository,
    S: ImageStore,
{
    pub fn new(repo: Arc<P>, store: Arc<S>, config: Arc<CatalogConfig>) -> Self {
        Self {
            repo,
            store,
            config,
        }
    }

    pub async fn execute(&self, input: ProductInput) -> CatalogResult<Product> {
        self.execute_at(input, Utc::now()).await
    }

    pub async fn execute_at(
        &self,
        input: ProductInput,
        now: DateTime<Utc>,
    ) -> CatalogResult<Product> {
        let draft = ProductDraft::parse(input.fields)?;
        check_images(&input.images, &self.config)?;

        if self.repo.serial_no_taken(&draft.serial_no, None).await? {
            return Err(CatalogError::DuplicateSerialNo);
        }

        let images = store_images(self.store.as_ref(), &input.images).await?;
        let product = Product::create(draft, images, now);
        self.repo.insert(&product).await?;

        tracing::info!(
            product_id = %product.product_id,
            serial_no = %product.serial_no,
            images = product.images.len(),
            "Product created"
        );

        Ok(product)
    }
}

// ============================================================================
// List / Get
// ============================================================================

pub struct ListProductsUseCase<P>
where
    P: ProductRepository,
{
    repo: Arc<P>,
}

impl<P> ListProductsUseCase<P>
where
    P: ProductRepository,
{
    pub fn new(repo: Arc<P>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self) -> CatalogResult<Vec<Product>> {
        self.repo.list().await
    }
}

pub struct GetProductUseCase<P>
where
    P: ProductRepository,
{
    repo: Arc<P>,
}

impl<P> GetProductUseCase<P>
where
    P: ProductRepository,
{
    pub fn new(repo: Arc<P>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, id: &str) -> CatalogResult<Product> {
        let id = parse_product_id(id)?;
        self.repo
            .find_by_id(&id)
            .await?
            .ok_or(CatalogError::ProductNotFound)
    }
}

// ============================================================================
// Update
// ============================================================================

pub struct UpdateProductUseCase<P, S>
where
    P: ProductRepository,
    S: ImageStore,
{
    repo: Arc<P>,
    store: Arc<S>,
    config: Arc<CatalogConfig>,
}

impl<P, S> UpdateProductUseCase<P, S>
where
    P: ProductRepository,
    S: ImageStore,
{
    pub fn new(repo: Arc<P>, store: Arc<S>, config: Arc<CatalogConfig>) -> Self {
        Self {
            repo,
            store,
            config,
        }
    }

    pub async fn execute(&self, id: &str, input: ProductInput) -> CatalogResult<Product> {
        let id = parse_product_id(id)?;
        let mut product = self
            .repo
            .find_by_id(&id)
            .await?
            .ok_or(CatalogError::ProductNotFound)?;

        let draft = ProductDraft::parse(input.fields)?;
        check_images(&input.images, &self.config)?;

        if self.repo.serial_no_taken(&draft.serial_no, Some(&id)).await? {
            return Err(CatalogError::DuplicateSerialNo);
        }

        let images = if input.images.is_empty() {
            None
        } else {
            Some(store_images(self.store.as_ref(), &input.images).await?)
        };
        let replaced_images = images.is_some();

        product.apply(draft, images);
        if !self.repo.update(&product).await? {
            return Err(CatalogError::ProductNotFound);
        }

        tracing::info!(
            product_id = %product.product_id,
            replaced_images,
            "Product updated"
        );

        Ok(product)
    }
}
