#![allow(dead_code)]

use std::io::Cursor;

use resumegen::{
    decode_image, About, Achievement, AssetError, AssetResolver, Education, Experience,
    LoadedImage, Project, ResumeData, Skills,
};

/// Resolver that answers every locator with the same small decoded PNG.
pub struct MemoryAssets {
    img: LoadedImage,
}

impl MemoryAssets {
    pub fn new() -> Self {
        Self {
            img: decode_image(&png_bytes(32, 32), "memory.png").expect("valid png"),
        }
    }

    /// Non-square variant, for aspect-ratio sensitive layouts.
    pub fn wide() -> Self {
        Self {
            img: decode_image(&png_bytes(64, 32), "memory.png").expect("valid png"),
        }
    }
}

impl AssetResolver for MemoryAssets {
    fn load_image(&self, _locator: &str) -> Result<LoadedImage, AssetError> {
        Ok(self.img.clone())
    }
}

/// Resolver where every fetch fails, for graceful-degradation tests.
pub struct FailingAssets;

impl AssetResolver for FailingAssets {
    fn load_image(&self, locator: &str) -> Result<LoadedImage, AssetError> {
        Err(AssetError::UnsupportedFormat {
            path: locator.to_string(),
        })
    }
}

pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(width, height, image::Rgba([200, 180, 160, 255]));
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, image::ImageFormat::Png).unwrap();
    out.into_inner()
}

/// Content streams are written uncompressed, so drawn text shows up as
/// literal bytes in the document.
pub fn text_pos(bytes: &[u8], needle: &str) -> Option<usize> {
    let needle = needle.as_bytes();
    bytes.windows(needle.len()).position(|w| w == needle)
}

pub fn has_text(bytes: &[u8], needle: &str) -> bool {
    text_pos(bytes, needle).is_some()
}

pub fn sample_resume() -> ResumeData {
    ResumeData {
        name: "Jane Doe".into(),
        title: "Full-Stack Developer".into(),
        location: "Kuala Lumpur, Malaysia".into(),
        linkedin: "linkedin.com/in/janedoe".into(),
        languages: "English, Malay, Mandarin".into(),
        email: "jane.doe@example.com".into(),
        profile_image: "profile.png".into(),
        about: About {
            title: "ABOUT ME".into(),
            experience_years: 5,
            paragraphs: vec![
                "Developer focused on delightful interfaces and reliable delivery.".into(),
                "Comfortable across the stack, from design systems to deployment.".into(),
            ],
        },
        experiences: vec![Experience {
            full_title: "Senior Engineer at Initech".into(),
            duration: "2021 - Present".into(),
            description: "Led the platform team through a major replatforming effort."
                .into(),
            skills: vec!["Rust".into(), "TypeScript".into(), "PostgreSQL".into()],
            icon: None,
        }],
        achievements: vec![Achievement {
            title: "Hackathon Winner".into(),
            desc: "First place out of 120 teams at a national hackathon.".into(),
        }],
        projects: vec![Project {
            title: "Weather Dashboard".into(),
            duration: "2023".into(),
            description: "Realtime weather dashboard with offline support.".into(),
            skills: vec!["React".into(), "Rust".into()],
            icon: None,
        }],
        education: Education {
            institution: "UCSI University".into(),
            degree: "BSc (Hons) Computer Science".into(),
            duration: "2016 - 2019".into(),
            logo: Some("icons/ucsi.png".into()),
        },
        skills: Skills {
            technical: vec![
                "Rust".into(),
                "TypeScript".into(),
                "React".into(),
                "PostgreSQL".into(),
            ],
            soft: vec!["Communication".into(), "Mentoring".into()],
        },
    }
}
