use thiserror::Error;

/// Fatal errors surfaced by `generate` / `generate_to_file`.
///
/// Asset-load failures are deliberately absent: they are recovered locally
/// by the section renderers (see [`crate::assets::AssetError`]) and never
/// abort a generation run.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid resume data: {0}")]
    InvalidData(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
