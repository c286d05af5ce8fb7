//! Image Loader: resolves a resource locator to a decoded, embed-ready
//! image. Failures here are always recoverable: section renderers fall
//! back to a text-only layout for the affected entry.

use std::io::Cursor;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Why an image could not be turned into a [`LoadedImage`].
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to decode {path}: {source}")]
    Decode {
        path: String,
        source: image::ImageError,
    },

    #[error("unsupported image format in {path}")]
    UnsupportedFormat { path: String },
}

/// Embed-ready pixel payload. JPEG data is kept verbatim (DCT stays the
/// PDF filter); everything else is decoded and re-compressed with zlib.
#[derive(Clone, Debug)]
pub enum ImagePayload {
    Jpeg(Vec<u8>),
    Zlib {
        rgb: Vec<u8>,
        alpha: Option<Vec<u8>>,
    },
}

/// A decoded image with known pixel dimensions.
#[derive(Clone, Debug)]
pub struct LoadedImage {
    pub pixel_width: u32,
    pub pixel_height: u32,
    pub(crate) payload: ImagePayload,
}

impl LoadedImage {
    /// width / height of the source pixels.
    pub fn aspect_ratio(&self) -> f32 {
        self.pixel_width as f32 / self.pixel_height.max(1) as f32
    }
}

/// Resolves resource locators (relative paths) to decoded images.
///
/// Implementations must be side-effect free beyond the fetch itself; a
/// failed load is reported once and never retried within a generation run.
pub trait AssetResolver {
    fn load_image(&self, locator: &str) -> Result<LoadedImage, AssetError>;
}

/// Resolves locators against a static-asset root directory on disk.
pub struct FsAssets {
    root: PathBuf,
}

impl FsAssets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, locator: &str) -> PathBuf {
        // Leading slashes in site-relative locators ("/icons/x.png") are
        // stripped so they stay inside the asset root.
        let rel = locator.trim_start_matches(['/', '\\']);
        self.root.join(rel)
    }
}

impl AssetResolver for FsAssets {
    fn load_image(&self, locator: &str) -> Result<LoadedImage, AssetError> {
        let path = self.resolve(locator);
        let data = std::fs::read(&path).map_err(|source| AssetError::Io {
            path: path.display().to_string(),
            source,
        })?;
        decode_image(&data, &path.display().to_string())
    }
}

/// Decode raw image bytes into a [`LoadedImage`]. Exposed so callers with
/// in-memory assets (tests, bundled resources) can skip the filesystem.
pub fn decode_image(data: &[u8], origin: &str) -> Result<LoadedImage, AssetError> {
    let format = image::guess_format(data).map_err(|_| AssetError::UnsupportedFormat {
        path: origin.to_string(),
    })?;

    match format {
        image::ImageFormat::Jpeg => {
            let (w, h) = image::ImageReader::with_format(Cursor::new(data), format)
                .into_dimensions()
                .map_err(|source| AssetError::Decode {
                    path: origin.to_string(),
                    source,
                })?;
            Ok(LoadedImage {
                pixel_width: w,
                pixel_height: h,
                payload: ImagePayload::Jpeg(data.to_vec()),
            })
        }
        image::ImageFormat::Png => {
            let decoded = image::ImageReader::with_format(Cursor::new(data), format)
                .decode()
                .map_err(|source| AssetError::Decode {
                    path: origin.to_string(),
                    source,
                })?;
            let rgba = decoded.to_rgba8();
            let (w, h) = (rgba.width(), rgba.height());
            let has_alpha = rgba.pixels().any(|p| p.0[3] < 255);

            let rgb_data: Vec<u8> = rgba.pixels().flat_map(|p| [p.0[0], p.0[1], p.0[2]]).collect();
            let rgb = miniz_oxide::deflate::compress_to_vec_zlib(&rgb_data, 6);

            let alpha = has_alpha.then(|| {
                let alpha_data: Vec<u8> = rgba.pixels().map(|p| p.0[3]).collect();
                miniz_oxide::deflate::compress_to_vec_zlib(&alpha_data, 6)
            });

            Ok(LoadedImage {
                pixel_width: w,
                pixel_height: h,
                payload: ImagePayload::Zlib { rgb, alpha },
            })
        }
        _ => Err(AssetError::UnsupportedFormat {
            path: origin.to_string(),
        }),
    }
}
