//! Upload handling - Validates and persists uploaded product images.
//!
//! An upload is accepted only when its filename carries an extension on the
//! configured allow-list (matched case-insensitively). Accepted files are
//! written under the upload directory with a uuid-based name, and the returned
//! reference is the public `/uploads/...` path the catalog stores verbatim.

use crate::errors::{Error, Result};
use std::{
    ffi::OsStr,
    path::{Path, PathBuf},
};
use uuid::Uuid;

/// Creates the upload directory if it does not exist. Run once at startup.
///
/// # Errors
/// Returns an error if the directory cannot be created.
pub async fn ensure_upload_dir(dir: &Path) -> Result<()> {
    tokio::fs::create_dir_all(dir).await?;
    Ok(())
}

/// The lowercase extension of `filename`, if it has one.
fn extension(filename: &str) -> Option<String> {
    Path::new(filename)
        .extension()
        .and_then(OsStr::to_str)
        .map(str::to_ascii_lowercase)
}

/// Whether `filename` carries an extension on the allow-list.
pub fn extension_allowed(allowed: &[String], filename: &str) -> bool {
    extension(filename)
        .is_some_and(|ext| allowed.iter().any(|a| a.eq_ignore_ascii_case(&ext)))
}

/// Validates `original_filename` against the allow-list and writes `bytes`
/// under `dir` with a fresh uuid-based filename. Returns the public reference
/// (`/uploads/<stored-name>`) to store on the listing.
///
/// # Errors
/// Returns [`Error::UploadRejected`] if the filename has no extension or one
/// outside the allow-list, [`Error::Validation`] if the payload is empty, or
/// an I/O error if the write fails.
pub async fn store_image(
    dir: &Path,
    allowed: &[String],
    original_filename: &str,
    bytes: &[u8],
) -> Result<String> {
    if bytes.is_empty() {
        return Err(Error::Validation {
            message: "Uploaded image is empty".to_string(),
        });
    }

    let Some(ext) = extension(original_filename) else {
        return Err(Error::UploadRejected {
            filename: original_filename.to_string(),
        });
    };
    if !allowed.iter().any(|a| a.eq_ignore_ascii_case(&ext)) {
        return Err(Error::UploadRejected {
            filename: original_filename.to_string(),
        });
    }

    let stored_name = format!("{}.{ext}", Uuid::new_v4());
    let target: PathBuf = dir.join(&stored_name);
    tokio::fs::write(&target, bytes).await?;

    tracing::info!(original = original_filename, stored = %target.display(), "image stored");
    Ok(format!("/uploads/{stored_name}"))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    fn png_allow_list() -> Vec<String> {
        vec!["png".to_string(), "jpg".to_string()]
    }

    async fn temp_upload_dir() -> Result<PathBuf> {
        let dir = std::env::temp_dir().join(format!("phone-store-test-{}", Uuid::new_v4()));
        ensure_upload_dir(&dir).await?;
        Ok(dir)
    }

    #[test]
    fn test_extension_allowed_is_case_insensitive() {
        let allowed = png_allow_list();
        assert!(extension_allowed(&allowed, "photo.png"));
        assert!(extension_allowed(&allowed, "photo.PNG"));
        assert!(extension_allowed(&allowed, "photo.JpG"));
        assert!(!extension_allowed(&allowed, "photo.gif"));
        assert!(!extension_allowed(&allowed, "photo"));
        assert!(!extension_allowed(&allowed, ""));
    }

    #[tokio::test]
    async fn test_store_image_writes_file_and_returns_reference() -> Result<()> {
        let dir = temp_upload_dir().await?;

        let reference = store_image(&dir, &png_allow_list(), "phone.png", b"not-a-real-png").await?;
        assert!(reference.starts_with("/uploads/"));
        assert!(reference.ends_with(".png"));

        // The stored file holds exactly the uploaded bytes
        let stored_name = reference.strip_prefix("/uploads/").unwrap();
        let contents = tokio::fs::read(dir.join(stored_name)).await?;
        assert_eq!(contents, b"not-a-real-png");

        Ok(())
    }

    #[tokio::test]
    async fn test_store_image_normalizes_extension_case() -> Result<()> {
        let dir = temp_upload_dir().await?;

        let reference = store_image(&dir, &png_allow_list(), "PHOTO.JPG", b"bytes").await?;
        assert!(reference.ends_with(".jpg"));

        Ok(())
    }

    #[tokio::test]
    async fn test_store_image_rejects_disallowed_extension() -> Result<()> {
        let dir = temp_upload_dir().await?;

        let result = store_image(&dir, &png_allow_list(), "script.sh", b"#!/bin/sh").await;
        assert!(matches!(result.unwrap_err(), Error::UploadRejected { .. }));

        Ok(())
    }

    #[tokio::test]
    async fn test_store_image_rejects_missing_extension() -> Result<()> {
        let dir = temp_upload_dir().await?;

        let result = store_image(&dir, &png_allow_list(), "noext", b"data").await;
        assert!(matches!(result.unwrap_err(), Error::UploadRejected { .. }));

        Ok(())
    }

    #[tokio::test]
    async fn test_store_image_rejects_empty_payload() -> Result<()> {
        let dir = temp_upload_dir().await?;

        let result = store_image(&dir, &png_allow_list(), "phone.png", b"").await;
        assert!(matches!(result.unwrap_err(), Error::Validation { .. }));

        Ok(())
    }
}
