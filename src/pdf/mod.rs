//! Document assembler: drives the section renderers in their fixed order
//! over one [`layout::LayoutContext`] and finishes the PDF object tree.

pub mod layout;
mod sections;

use crate::assets::AssetResolver;
use crate::error::Error;
use crate::model::ResumeData;
use layout::{LayoutContext, Style};

/// A finished document plus the metadata a caller needs to offer it for
/// download.
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub page_count: usize,
    /// `{name_with_underscores}_Resume.pdf`
    pub file_name: String,
}

/// Download file name for a person: whitespace runs collapse to `_`,
/// suffixed `_Resume.pdf`.
pub fn resume_file_name(name: &str) -> String {
    let stem: Vec<&str> = name.split_whitespace().collect();
    format!("{}_Resume.pdf", stem.join("_"))
}

fn validate(data: &ResumeData) -> Result<(), Error> {
    if data.name.trim().is_empty() {
        return Err(Error::InvalidData("name must not be blank".into()));
    }
    Ok(())
}

pub(crate) fn render(
    data: &ResumeData,
    assets: &dyn AssetResolver,
    style: Style,
) -> Result<GeneratedPdf, Error> {
    validate(data)?;

    let mut ctx = LayoutContext::new(style);

    // The left column renders top-to-bottom first, then the right column on
    // the page the left column finished on; every section completes all of
    // its image loads before the next begins.
    sections::render_left_column(&mut ctx, data, assets);
    sections::render_right_column(&mut ctx, data, assets);

    let (bytes, page_count) = ctx.finish();
    Ok(GeneratedPdf {
        bytes,
        page_count,
        file_name: resume_file_name(&data.name),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_collapses_whitespace_runs() {
        assert_eq!(resume_file_name("Jane Doe"), "Jane_Doe_Resume.pdf");
        assert_eq!(resume_file_name("  Jane   van  Doe "), "Jane_van_Doe_Resume.pdf");
    }
}
