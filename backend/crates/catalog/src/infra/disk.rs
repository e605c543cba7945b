//! Disk Image Store
//!
//! Writes uploads into the upload directory as `<prefix><unix-millis><ext>`,
//! adding `-<n>` when several files land in the same millisecond. Files are
//! created with `create_new` so an existing upload is never overwritten.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::Utc;
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;

use crate::application::config::CatalogConfig;
use crate::domain::storage::{ImageStore, UploadedImage};
use crate::error::{CatalogError, CatalogResult};

const MAX_NAME_ATTEMPTS: u32 = 1_000;

#[derive(Clone)]
pub struct DiskImageStore {
    dir: PathBuf,
    public_base_url: String,
}

impl DiskImageStore {
    pub fn new(dir: impl Into<PathBuf>, public_base_url: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            public_base_url: public_base_url.into(),
        }
    }

    pub fn from_config(config: &CatalogConfig) -> Self {
        Self::new(config.upload_dir.clone(), config.public_base_url.clone())
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Create the upload directory if it does not exist yet
    pub async fn ensure_dir(&self) -> CatalogResult<()> {
        fs::create_dir_all(&self.dir).await?;
        Ok(())
    }

    fn public_url(&self, file_name: &str) -> String {
        format!(
            "{}/uploads/{}",
            self.public_base_url.trim_end_matches('/'),
            file_name
        )
    }
}

fn candidate_name(prefix: &str, millis: i64, attempt: u32, ext: &str) -> String {
    if attempt == 0 {
        format!("{}{}{}", prefix, millis, ext)
    } else {
        format!("{}{}-{}{}", prefix, millis, attempt, ext)
    }
}

impl ImageStore for DiskImageStore {
    async fn save(&self, prefix: &str, image: &UploadedImage) -> CatalogResult<String> {
        let ext = image.extension()?;
        let millis = Utc::now().timestamp_millis();

        for attempt in 0..MAX_NAME_ATTEMPTS {
            let name = candidate_name(prefix, millis, attempt, &ext);
            let path = self.dir.join(&name);

            let mut file = match OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&path)
                .await
            {
                Ok(file) => file,
                Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
                Err(e) => return Err(e.into()),
            };

            file.write_all(&image.bytes).await?;
            file.flush().await?;

            tracing::debug!(file = %name, bytes = image.bytes.len(), "Image stored");
            return Ok(self.public_url(&name));
        }

        Err(CatalogError::Internal(format!(
            "no free file name for upload at {}",
            millis
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_names() {
        assert_eq!(candidate_name("", 1700, 0, ".jpg"), "1700.jpg");
        assert_eq!(candidate_name("profile_", 1700, 2, ".png"), "profile_1700-2.png");
    }

    #[tokio::test]
    async fn test_save_never_overwrites() {
        let dir = std::env::temp_dir().join(format!("catalog-disk-{}", uuid::Uuid::new_v4()));
        let store = DiskImageStore::new(&dir, "http://localhost:5000/");
        store.ensure_dir().await.unwrap();

        let image = UploadedImage {
            field_name: "images".into(),
            file_name: "ring.PNG".into(),
            bytes: b"png-bytes".to_vec(),
        };
        let first = store.save("", &image).await.unwrap();
        let second = store.save("", &image).await.unwrap();

        assert_ne!(first, second);
        assert!(first.starts_with("http://localhost:5000/uploads/"));
        assert!(first.ends_with(".png"));

        let mut entries = fs::read_dir(&dir).await.unwrap();
        let mut count = 0;
        while let Some(entry) = entries.next_entry().await.unwrap() {
            assert_eq!(fs::read(entry.path()).await.unwrap(), b"png-bytes");
            count += 1;
        }
        assert_eq!(count, 2);

        fs::remove_dir_all(&dir).await.unwrap();
    }

    #[tokio::test]
    async fn test_save_rejects_non_images() {
        let store = DiskImageStore::new(std::env::temp_dir(), "http://localhost:5000");
        let image = UploadedImage {
            field_name: "images".into(),
            file_name: "payload.sh".into(),
            bytes: vec![1],
        };
        assert!(matches!(
            store.save("", &image).await,
            Err(CatalogError::UnsupportedImage(_))
        ));
    }
}
