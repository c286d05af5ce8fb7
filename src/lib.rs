//! # resumegen
//!
//! Renders structured resume data into a two-column paginated PDF: a dark
//! sidebar (photo, contact, languages, experience counter, education,
//! skills) next to a main column (header, about, achievements, projects,
//! experience). Content flows across as many pages as it needs; every new
//! page repaints the sidebar band before any content is placed.
//!
//! ```no_run
//! use resumegen::{generate_to_file, FsAssets, ResumeData};
//!
//! fn run(data: &ResumeData) -> Result<(), resumegen::Error> {
//!     let assets = FsAssets::new("public");
//!     let path = generate_to_file(data, &assets, std::path::Path::new("."))?;
//!     println!("wrote {}", path.display());
//!     Ok(())
//! }
//! ```
//!
//! Image loads are attempted once each and a failure only downgrades that
//! entry to a text-only layout; the run itself still succeeds.
//!
//! Each call owns its entire document state, so concurrent calls on
//! different inputs are safe. A single in-flight call is not cancellable
//! and callers triggering generation from a UI should disable the trigger
//! until the call returns.

mod assets;
mod error;
mod fonts;
mod model;
mod pdf;

pub use assets::{decode_image, AssetError, AssetResolver, FsAssets, LoadedImage};
pub use error::Error;
pub use model::{
    About, Achievement, Education, Experience, Project, ResumeData, Skills,
};
pub use pdf::layout::Style;
pub use pdf::{resume_file_name, GeneratedPdf};

use std::path::{Path, PathBuf};
use std::time::Instant;

/// Render `data` with the default A4 style. See [`generate_with_style`].
pub fn generate(data: &ResumeData, assets: &dyn AssetResolver) -> Result<GeneratedPdf, Error> {
    generate_with_style(data, assets, Style::default())
}

/// Render `data` into an in-memory PDF. Deterministic for fixed input and
/// fixed asset availability: same page count, section order, and text.
pub fn generate_with_style(
    data: &ResumeData,
    assets: &dyn AssetResolver,
    style: Style,
) -> Result<GeneratedPdf, Error> {
    let t0 = Instant::now();
    let out = pdf::render(data, assets, style)?;
    log::info!(
        "Generated {}: {} pages, {} bytes in {:.1}ms",
        out.file_name,
        out.page_count,
        out.bytes.len(),
        t0.elapsed().as_secs_f64() * 1000.0,
    );
    Ok(out)
}

/// Render and save into `dir`, returning the written path. The file name is
/// derived from the person's name ([`resume_file_name`]).
pub fn generate_to_file(
    data: &ResumeData,
    assets: &dyn AssetResolver,
    dir: &Path,
) -> Result<PathBuf, Error> {
    let t0 = Instant::now();
    let out = pdf::render(data, assets, Style::default())?;
    let t_render = t0.elapsed();

    let path = dir.join(&out.file_name);
    std::fs::write(&path, &out.bytes).map_err(Error::Io)?;
    let t_total = t0.elapsed();

    log::info!(
        "Timing: render={:.1}ms, write={:.1}ms, total={:.1}ms (output {} bytes, {} pages)",
        t_render.as_secs_f64() * 1000.0,
        (t_total - t_render).as_secs_f64() * 1000.0,
        t_total.as_secs_f64() * 1000.0,
        out.bytes.len(),
        out.page_count,
    );

    Ok(path)
}
