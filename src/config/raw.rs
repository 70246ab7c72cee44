//! Raw, user-authored configuration.
//!
//! Mirrors the TOML file field for field. Everything is optional here;
//! validation and defaulting happen in [`super::sanitize`].

use serde::Deserialize;

/// Top-level raw configuration as deserialized from `gitfolio.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawConfig {
    /// GitHub account settings.
    #[serde(default)]
    pub github: Option<RawGithub>,
    /// Project list settings (GitHub-sourced and external cards).
    #[serde(default)]
    pub projects: Option<RawProjects>,
    /// Page title/description metadata.
    #[serde(default)]
    pub seo: Option<RawSeo>,
    /// Contact and social links.
    #[serde(default)]
    pub social: Option<RawSocial>,
    /// Resume link.
    #[serde(default)]
    pub resume: Option<RawResume>,
    /// Skill labels.
    #[serde(default)]
    pub skills: Option<Vec<String>>,
    /// Work history entries.
    #[serde(default)]
    pub experiences: Option<Vec<RawExperience>>,
    /// Education entries.
    #[serde(default)]
    pub educations: Option<Vec<RawEducation>>,
    /// Certification entries.
    #[serde(default)]
    pub certifications: Option<Vec<RawCertification>>,
    /// Publication entries.
    #[serde(default)]
    pub publications: Option<Vec<RawPublication>>,
    /// Blog article source settings.
    #[serde(default)]
    pub blog: Option<RawBlog>,
    /// Google Analytics settings (recognized, unused in the terminal).
    #[serde(default)]
    pub google_analytics: Option<RawGoogleAnalytics>,
    /// Hotjar settings (recognized, unused in the terminal).
    #[serde(default)]
    pub hotjar: Option<RawHotjar>,
    /// Theme selection settings.
    #[serde(default)]
    pub theme_config: Option<RawThemeConfig>,
    /// Footer line shown at the bottom of the page.
    #[serde(default)]
    pub footer: Option<String>,
    /// File logging settings.
    #[serde(default)]
    pub log: Option<RawLog>,
}

/// `[github]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawGithub {
    /// GitHub username (the only required setting in the whole file).
    #[serde(default)]
    pub username: Option<String>,
}

/// `[projects]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawProjects {
    #[serde(default)]
    pub github: Option<RawGithubProjects>,
    #[serde(default)]
    pub external: Option<RawExternalProjects>,
}

/// `[projects.github]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawGithubProjects {
    /// Whether to fetch and show GitHub projects at all.
    #[serde(default)]
    pub display: Option<bool>,
    /// Section header text.
    #[serde(default)]
    pub header: Option<String>,
    /// Selection mode: "automatic" or "manual".
    #[serde(default)]
    pub mode: Option<String>,
    #[serde(default)]
    pub automatic: Option<RawAutomatic>,
    #[serde(default)]
    pub manual: Option<RawManual>,
}

/// `[projects.github.automatic]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawAutomatic {
    /// Sort key: "stars" or "updated".
    #[serde(default)]
    pub sort_by: Option<String>,
    /// Maximum number of repositories to fetch.
    #[serde(default)]
    pub limit: Option<u32>,
    #[serde(default)]
    pub exclude: Option<RawExclude>,
}

/// `[projects.github.automatic.exclude]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawExclude {
    /// Whether forked repositories are excluded from the search.
    #[serde(default)]
    pub forks: Option<bool>,
    /// Repository names ("owner/repo") to exclude from the search.
    #[serde(default)]
    pub projects: Option<Vec<String>>,
}

/// `[projects.github.manual]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawManual {
    /// Explicit "owner/repo" list, shown in declaration order.
    #[serde(default)]
    pub projects: Option<Vec<String>>,
}

/// `[projects.external]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawExternalProjects {
    /// Section header text.
    #[serde(default)]
    pub header: Option<String>,
    /// Static project cards, no network calls involved.
    #[serde(default)]
    pub projects: Option<Vec<RawExternalProject>>,
}

/// One `[[projects.external.projects]]` entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawExternalProject {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}

/// `[seo]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawSeo {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// `[social]` table. Every entry is a username or a full URL; empty or
/// missing entries hide the corresponding contact row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawSocial {
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub x: Option<String>,
    #[serde(default)]
    pub mastodon: Option<String>,
    #[serde(default)]
    pub research_gate: Option<String>,
    #[serde(default)]
    pub facebook: Option<String>,
    #[serde(default)]
    pub instagram: Option<String>,
    #[serde(default)]
    pub reddit: Option<String>,
    #[serde(default)]
    pub threads: Option<String>,
    #[serde(default)]
    pub youtube: Option<String>,
    #[serde(default)]
    pub udemy: Option<String>,
    #[serde(default)]
    pub dribbble: Option<String>,
    #[serde(default)]
    pub behance: Option<String>,
    #[serde(default)]
    pub medium: Option<String>,
    #[serde(default)]
    pub dev: Option<String>,
    #[serde(default)]
    pub stackoverflow: Option<String>,
    #[serde(default)]
    pub skype: Option<String>,
    #[serde(default)]
    pub telegram: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// `[resume]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawResume {
    #[serde(default)]
    pub file_url: Option<String>,
}

/// One `[[experiences]]` entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawExperience {
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default)]
    pub company_link: Option<String>,
}

/// One `[[educations]]` entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawEducation {
    #[serde(default)]
    pub institution: Option<String>,
    #[serde(default)]
    pub degree: Option<String>,
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
}

/// One `[[certifications]]` entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawCertification {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}

/// One `[[publications]]` entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawPublication {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub conference_name: Option<String>,
    #[serde(default)]
    pub journal_name: Option<String>,
    #[serde(default)]
    pub authors: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// `[blog]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawBlog {
    /// Article source: "dev" or "medium".
    #[serde(default)]
    pub source: Option<String>,
    /// Username on the article source (empty disables the section).
    #[serde(default)]
    pub username: Option<String>,
    /// Maximum number of articles to show.
    #[serde(default)]
    pub limit: Option<u32>,
}

/// `[google_analytics]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawGoogleAnalytics {
    #[serde(default)]
    pub id: Option<String>,
}

/// `[hotjar]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawHotjar {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub snippet_version: Option<u32>,
}

/// `[theme_config]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawThemeConfig {
    /// Preset applied when no persisted choice exists.
    #[serde(default)]
    pub default_theme: Option<String>,
    /// Disables the theme selector popup entirely.
    #[serde(default)]
    pub disable_switch: Option<bool>,
    /// Pick light/dark from the terminal background when possible.
    #[serde(default)]
    pub respect_prefers_color_scheme: Option<bool>,
    /// Draw a ring border around the avatar block.
    #[serde(default)]
    pub display_avatar_ring: Option<bool>,
    /// Preset names offered by the selector.
    #[serde(default)]
    pub themes: Option<Vec<String>>,
}

/// `[log]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawLog {
    /// Enable/disable file logging.
    #[serde(default)]
    pub enabled: Option<bool>,
    /// Log level: trace, debug, info, warn, error, or off.
    #[serde(default)]
    pub level: Option<String>,
    /// Hours to keep old log files.
    #[serde(default)]
    pub retention_hours: Option<u32>,
}
