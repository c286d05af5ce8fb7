use serde::Deserialize;

/// Complete input for one resume generation call. Immutable for the duration
/// of the call; all list orders are presentation order.
#[derive(Clone, Debug, Deserialize)]
pub struct ResumeData {
    pub name: String,
    pub title: String,
    pub location: String,
    pub linkedin: String,
    pub languages: String,
    pub email: String,
    /// Locator for the profile photo, resolved by the caller's `AssetResolver`.
    pub profile_image: String,
    pub about: About,
    pub experiences: Vec<Experience>,
    pub achievements: Vec<Achievement>,
    pub projects: Vec<Project>,
    pub education: Education,
    pub skills: Skills,
}

#[derive(Clone, Debug, Deserialize)]
pub struct About {
    pub title: String,
    pub experience_years: u32,
    pub paragraphs: Vec<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Experience {
    pub full_title: String,
    pub duration: String,
    pub description: String,
    pub skills: Vec<String>,
    /// Explicit icon locator. When absent the renderer falls back to the
    /// positional `icons/exp{N}.png` convention.
    #[serde(default)]
    pub icon: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Achievement {
    pub title: String,
    pub desc: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Project {
    pub title: String,
    pub duration: String,
    pub description: String,
    pub skills: Vec<String>,
    /// Explicit icon locator, falling back to `icons/proj{N}.png` when absent.
    #[serde(default)]
    pub icon: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub duration: String,
    /// Institution logo locator. `None` skips the logo and uses the
    /// text-only layout.
    #[serde(default)]
    pub logo: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Skills {
    pub technical: Vec<String>,
    /// Present for parity with the on-page profile; the PDF sidebar renders
    /// the technical list only.
    #[serde(default)]
    pub soft: Vec<String>,
}
