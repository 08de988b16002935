// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Media file loading.
//!
//! This module resolves catalog media references against the asset root
//! and decodes image files into RGBA pixels suitable for egui textures.

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MediaError {
    #[error("media file not found: {0}")]
    NotFound(PathBuf),

    #[error("failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Decoded image ready to upload as a texture.
pub struct LoadedImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// Map a site-style reference (`/images/a.jpg`) to a file under `root`.
pub fn resolve_asset(root: &Path, reference: &str) -> PathBuf {
    root.join(reference.trim_start_matches('/'))
}

/// Load an image file and convert it to RGBA8.
pub fn load_image(path: &Path) -> Result<LoadedImage, MediaError> {
    if !path.exists() {
        return Err(MediaError::NotFound(path.to_path_buf()));
    }

    let img = image::open(path)
        .map_err(|source| MediaError::Decode {
            path: path.to_path_buf(),
            source,
        })?
        .to_rgba8();

    let (width, height) = img.dimensions();
    Ok(LoadedImage {
        width,
        height,
        pixels: img.into_raw(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_asset_strips_leading_slash() {
        let root = Path::new("/srv/site/public");
        assert_eq!(
            resolve_asset(root, "/images/turbine-1.jpg"),
            PathBuf::from("/srv/site/public/images/turbine-1.jpg")
        );
        assert_eq!(
            resolve_asset(root, "images/turbine-1.jpg"),
            PathBuf::from("/srv/site/public/images/turbine-1.jpg")
        );
    }

    #[test]
    fn test_load_image_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tiny.png");
        let mut img = image::RgbaImage::new(3, 2);
        img.put_pixel(2, 1, image::Rgba([10, 20, 30, 255]));
        img.save(&path).unwrap();

        let loaded = load_image(&path).unwrap();
        assert_eq!((loaded.width, loaded.height), (3, 2));
        assert_eq!(loaded.pixels.len(), 3 * 2 * 4);
        assert_eq!(&loaded.pixels[loaded.pixels.len() - 4..], &[10, 20, 30, 255]);
    }

    #[test]
    fn test_load_missing_image() {
        let err = load_image(Path::new("/definitely/not/here.png")).err().unwrap();
        assert!(matches!(err, MediaError::NotFound(_)));
    }

    #[test]
    fn test_load_corrupt_image() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"not a png").unwrap();
        let err = load_image(&path).err().unwrap();
        assert!(matches!(err, MediaError::Decode { .. }));
    }
}
