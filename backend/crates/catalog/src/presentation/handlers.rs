//! HTTP Handlers

use std::sync::Arc;

use axum::Json;
use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;

use crate::application::config::CatalogConfig;
use crate::application::{
    CreateProductUseCase, GetProductUseCase, GetSettingsUseCase, ListProductsUseCase,
    ProductInput, SaveSettingsInput, SaveSettingsUseCase, UpdateProductUseCase,
};
use crate::domain::entity::product::ProductFields;
use crate::domain::entity::settings::ShopSettings;
use crate::domain::repository::{ProductRepository, SettingsRepository};
use crate::domain::storage::ImageStore;
use crate::error::{CatalogError, CatalogResult};
use crate::presentation::dto::{ProductCreatedResponse, ProductDto, SettingsSavedResponse};
use crate::presentation::multipart::{FormData, UploadLimits, read_form};

/// Multipart field carrying product images
pub const PRODUCT_IMAGES_FIELD: &str = "images";

/// Shared state for product handlers
#[derive(Clone)]
pub struct ProductsAppState<P, S>
where
    P: ProductRepository + Clone + Send + Sync + 'static,
    S: ImageStore + Clone + Send + Sync + 'static,
{
    pub repo: Arc<P>,
    pub store: Arc<S>,
    pub config: Arc<CatalogConfig>,
}

/// Shared state for settings handlers
#[derive(Clone)]
pub struct SettingsAppState<R, S>
where
    R: SettingsRepository + Clone + Send + Sync + 'static,
    S: ImageStore + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub store: Arc<S>,
    pub config: Arc<CatalogConfig>,
}

async fn read_product_form(
    multipart: &mut Multipart,
    config: &CatalogConfig,
) -> CatalogResult<ProductInput> {
    let mut form = read_form(
        multipart,
        UploadLimits {
            max_files: config.max_images,
            max_file_bytes: config.max_image_bytes,
            max_file_mib: config.max_image_mib(),
        },
    )
    .await?;

    if let Some(stray) = form
        .files
        .iter()
        .find(|file| file.field_name != PRODUCT_IMAGES_FIELD)
    {
        return Err(CatalogError::Validation(format!(
            "Unexpected file field '{}'",
            stray.field_name
        )));
    }

    let fields = product_fields(&mut form);
    Ok(ProductInput {
        fields,
        images: form.files,
    })
}

fn product_fields(form: &mut FormData) -> ProductFields {
    ProductFields {
        title: form.take("title"),
        serial_no: form.take("serialNo"),
        price: form.take("price"),
        original_price: form.take("originalPrice"),
        category: form.take("category"),
        description: form.take("description"),
        inventory: form.take("inventory"),
    }
}

// ============================================================================
// Products
// ============================================================================

/// POST /api/products
pub async fn create_product<P, S>(
    State(state): State<ProductsAppState<P, S>>,
    mut multipart: Multipart,
) -> CatalogResult<(StatusCode, Json<ProductCreatedResponse>)>
where
    P: ProductRepository + Clone + Send + Sync + 'static,
    S: ImageStore + Clone + Send + Sync + 'static,
{
    let input = read_product_form(&mut multipart, &state.config).await?;

    let product = CreateProductUseCase::new(
        state.repo.clone(),
        state.store.clone(),
        state.config.clone(),
    )
    .execute(input)
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(ProductCreatedResponse {
            message: "Product added successfully!",
            product: product.into(),
        }),
    ))
}

/// GET /api/products
pub async fn list_products<P, S>(
    State(state): State<ProductsAppState<P, S>>,
) -> CatalogResult<Json<Vec<ProductDto>>>
where
    P: ProductRepository + Clone + Send + Sync + 'static,
    S: ImageStore + Clone + Send + Sync + 'static,
{
    let products = ListProductsUseCase::new(state.repo.clone()).execute().await?;
    Ok(Json(products.into_iter().map(ProductDto::from).collect()))
}

/// GET /api/products/{id}
pub async fn get_product<P, S>(
    State(state): State<ProductsAppState<P, S>>,
    Path(id): Path<String>,
) -> CatalogResult<Json<ProductDto>>
where
    P: ProductRepository + Clone + Send + Sync + 'static,
    S: ImageStore + Clone + Send + Sync + 'static,
{
    let product = GetProductUseCase::new(state.repo.clone()).execute(&id).await?;
    Ok(Json(product.into()))
}

/// PUT /api/products/{id}
pub async fn update_product<P, S>(
    State(state): State<ProductsAppState<P, S>>,
    Path(id): Path<String>,
    mut multipart: Multipart,
) -> CatalogResult<Json<ProductDto>>
where
    P: ProductRepository + Clone + Send + Sync + 'static,
    S: ImageStore + Clone + Send + Sync + 'static,
{
    let input = read_product_form(&mut multipart, &state.config).await?;

    let product = UpdateProductUseCase::new(
        state.repo.clone(),
        state.store.clone(),
        state.config.clone(),
    )
    .execute(&id, input)
    .await?;

    Ok(Json(product.into()))
}

// ============================================================================
// Settings
// ============================================================================

/// GET /api/settings
pub async fn get_settings<R, S>(
    State(state): State<SettingsAppState<R, S>>,
) -> CatalogResult<Json<ShopSettings>>
where
    R: SettingsRepository + Clone + Send + Sync + 'static,
    S: ImageStore + Clone + Send + Sync + 'static,
{
    let settings = GetSettingsUseCase::new(state.repo.clone()).execute().await?;
    Ok(Json(settings))
}

/// POST /api/settings
pub async fn save_settings<R, S>(
    State(state): State<SettingsAppState<R, S>>,
    mut multipart: Multipart,
) -> CatalogResult<Json<SettingsSavedResponse>>
where
    R: SettingsRepository + Clone + Send + Sync + 'static,
    S: ImageStore + Clone + Send + Sync + 'static,
{
    let mut form = read_form(
        &mut multipart,
        UploadLimits {
            max_files: state.config.max_profile_photos,
            max_file_bytes: state.config.max_image_bytes,
            max_file_mib: state.config.max_image_mib(),
        },
    )
    .await?;

    let input = SaveSettingsInput {
        owners: form.take("owners"),
        staff_list: form.take("staffList"),
        address: form.take("address"),
        photos: form.files,
    };

    let settings = SaveSettingsUseCase::new(
        state.repo.clone(),
        state.store.clone(),
        state.config.clone(),
    )
    .execute(input)
    .await?;

    Ok(Json(SettingsSavedResponse {
        message: "Settings saved successfully!",
        settings,
    }))
}
