use base64::{engine::general_purpose, Engine as _};
use google_cloud_storage::client::{Client, ClientConfig};
use google_cloud_storage::http::objects::upload::{Media, UploadObjectRequest, UploadType};
use serde::{Deserialize, Serialize};
use std::env;
use uuid::Uuid;

/// One gallery image as the admin form posts it: base64 payload plus
/// the original file metadata.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct GalleryImage {
    pub data: String,
    #[serde(rename = "fileName")]
    pub file_name: String,
    #[serde(rename = "fileType")]
    pub file_type: String,
    #[serde(rename = "fileSize")]
    pub file_size: u64,
}

#[derive(Debug)]
pub enum GalleryUploadError {
    Base64Decode(String),
    Storage(String),
    InvalidImageFormat(String),
    Environment(String),
}

impl std::fmt::Display for GalleryUploadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GalleryUploadError::Base64Decode(err) => write!(f, "Base64 decode error: {}", err),
            GalleryUploadError::Storage(err) => write!(f, "Storage upload error: {}", err),
            GalleryUploadError::InvalidImageFormat(err) => {
                write!(f, "Invalid image format: {}", err)
            }
            GalleryUploadError::Environment(err) => write!(f, "Environment error: {}", err),
        }
    }
}

impl std::error::Error for GalleryUploadError {}

pub struct GalleryService {
    client: Client,
    bucket_name: String,
}

impl GalleryService {
    pub async fn new() -> Result<Self, GalleryUploadError> {
        let bucket_name = env::var("GALLERY_BUCKET")
            .map_err(|_| GalleryUploadError::Environment("GALLERY_BUCKET not set".to_string()))?;

        let config = ClientConfig::default().with_auth().await.map_err(|e| {
            GalleryUploadError::Storage(format!("Failed to create storage client: {}", e))
        })?;

        Ok(Self {
            client: Client::new(config),
            bucket_name,
        })
    }

    /// Uploads a batch of gallery images for one yacht. Failures are
    /// reported per image so a bad file does not sink the whole batch.
    pub async fn upload_images(
        &self,
        images: Vec<GalleryImage>,
        yacht_id: &str,
    ) -> Vec<Result<String, GalleryUploadError>> {
        let mut results = Vec::new();

        for image in images {
            match self.upload_single_image(image, yacht_id).await {
                Ok(url) => results.push(Ok(url)),
                Err(e) => {
                    eprintln!("Failed to upload gallery image: {}", e);
                    results.push(Err(e));
                }
            }
        }

        results
    }

    async fn upload_single_image(
        &self,
        image: GalleryImage,
        yacht_id: &str,
    ) -> Result<String, GalleryUploadError> {
        // Admin uploads arrive as data URLs; strip the prefix if present.
        let base64_data = if image.data.starts_with("data:") {
            image.data.split(',').nth(1).ok_or_else(|| {
                GalleryUploadError::InvalidImageFormat("Invalid base64 data format".to_string())
            })?
        } else {
            &image.data
        };

        let image_bytes = general_purpose::STANDARD
            .decode(base64_data)
            .map_err(|e| GalleryUploadError::Base64Decode(e.to_string()))?;

        let extension = file_extension(&image.file_type)?;
        let object_name = format!(
            "{}/{}-{}.{}",
            yacht_id,
            chrono::Utc::now().timestamp(),
            Uuid::new_v4(),
            extension
        );

        let upload_request = UploadObjectRequest {
            bucket: self.bucket_name.clone(),
            ..Default::default()
        };

        self.client
            .upload_object(
                &upload_request,
                image_bytes,
                &UploadType::Simple(Media::new(object_name.clone())),
            )
            .await
            .map_err(|e| GalleryUploadError::Storage(format!("Failed to upload: {}", e)))?;

        Ok(format!(
            "https://storage.googleapis.com/{}/{}",
            self.bucket_name, object_name
        ))
    }
}

fn file_extension(file_type: &str) -> Result<&'static str, GalleryUploadError> {
    match file_type {
        "image/jpeg" | "image/jpg" => Ok("jpg"),
        "image/png" => Ok("png"),
        "image/gif" => Ok("gif"),
        "image/webp" => Ok("webp"),
        _ => Err(GalleryUploadError::InvalidImageFormat(format!(
            "Unsupported file type: {}",
            file_type
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_content_types_map_to_extensions() {
        assert_eq!(file_extension("image/jpeg").unwrap(), "jpg");
        assert_eq!(file_extension("image/png").unwrap(), "png");
        assert_eq!(file_extension("image/webp").unwrap(), "webp");
    }

    #[test]
    fn unknown_content_type_is_rejected() {
        assert!(file_extension("application/pdf").is_err());
    }
}
