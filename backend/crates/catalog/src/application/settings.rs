//! Shop Settings Use Cases

use std::sync::Arc;

use crate::application::config::CatalogConfig;
use crate::domain::entity::settings::{PhotoSlot, ShopSettings};
use crate::domain::repository::SettingsRepository;
use crate::domain::storage::{ImageStore, UploadedImage};
use crate::error::{CatalogError, CatalogResult};

/// File name prefix for owner and staff photos
pub const PROFILE_PHOTO_PREFIX: &str = "profile_";

pub struct GetSettingsUseCase<R>
where
    R: SettingsRepository,
{
    repo: Arc<R>,
}

impl<R> GetSettingsUseCase<R>
where
    R: SettingsRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Stored settings, or the empty default before the first save
    pub async fn execute(&self) -> CatalogResult<ShopSettings> {
        Ok(self.repo.load().await?.unwrap_or_default())
    }
}

pub struct SaveSettingsInput {
    pub owners: String,
    pub staff_list: String,
    pub address: String,
    /// Files named `ownerPhoto_<i>` / `staffPhoto_<i>`
    pub photos: Vec<UploadedImage>,
}

pub struct SaveSettingsUseCase<R, S>
where
    R: SettingsRepository,
    S: ImageStore,
{
    repo: Arc<R>,
    store: Arc<S>,
    config: Arc<CatalogConfig>,
}

impl<R, S> SaveSettingsUseCase<R, S>
where
    R: SettingsRepository,
    S: ImageStore,
{
    pub fn new(repo: Arc<R>, store: Arc<S>, config: Arc<CatalogConfig>) -> Self {
        Self {
            repo,
            store,
            config,
        }
    }

    pub async fn execute(&self, input: SaveSettingsInput) -> CatalogResult<ShopSettings> {
        let mut settings = ShopSettings::parse(&input.owners, &input.staff_list, &input.address)?;

        if input.photos.len() > self.config.max_profile_photos {
            return Err(CatalogError::TooManyImages {
                max: self.config.max_profile_photos,
            });
        }

        // Photos whose slot names no entry are dropped unstored.
        let mut attached = Vec::new();
        for photo in &input.photos {
            let Some(slot) = PhotoSlot::from_field_name(&photo.field_name) else {
                tracing::debug!(field = %photo.field_name, "Ignoring unexpected upload field");
                continue;
            };
            if settings.person_mut(slot).is_none() {
                tracing::debug!(field = %photo.field_name, "Ignoring photo for missing entry");
                continue;
            }
            if photo.bytes.len() > self.config.max_image_bytes {
                return Err(CatalogError::ImageTooLarge {
                    max_mib: self.config.max_image_mib(),
                });
            }
            photo.extension()?;
            attached.push((slot, photo));
        }

        for (slot, photo) in attached {
            let url = self.store.save(PROFILE_PHOTO_PREFIX, photo).await?;
            if let Some(person) = settings.person_mut(slot) {
                person.photo = Some(url);
            }
        }

        self.repo.save(&settings).await?;

        tracing::info!(
            owners = settings.owners.len(),
            staff = settings.staff_list.len(),
            "Shop settings saved"
        );

        Ok(settings)
    }
}
