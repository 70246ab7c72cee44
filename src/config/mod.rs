//! Configuration module for gitfolio.
//!
//! Handles loading the gitfolio.toml configuration file and sanitizing it
//! into the fully-defaulted shape the rest of the application reads.

pub mod raw;
mod sanitized;

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use thiserror::Error;

pub use raw::RawConfig;
pub use sanitized::{
    AnalyticsSettings, AutomaticSettings, BlogSettings, BlogSource, Certification,
    DEFAULT_AUTOMATIC_LIMIT, DEFAULT_BLOG_LIMIT, DEFAULT_EXTERNAL_HEADER, DEFAULT_GITHUB_HEADER,
    Education, Experience, ExternalProject, ExternalProjectsSettings, GithubProjectsSettings,
    GithubSettings, HotjarSettings, MAX_BLOG_LIMIT, ManualSettings, ProjectMode,
    ProjectsSettings, Publication, ResumeSettings, SanitizedConfig, SeoSettings, SocialLinks,
    SortBy, ThemeSettings, sanitize,
};

/// Configuration file name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "gitfolio.toml";

/// Default gitfolio.toml content written on first run.
const DEFAULT_CONFIG: &str = r#"# gitfolio configuration file
# ===========================
# This file is read once at startup. Lines starting with '#' are comments.
# Only github.username is required; everything else has a sensible default.

# Top-level keys must stay above the first [section].
#
# skills = ["Rust", "SQL", "Docker"]
# footer = "Made with gitfolio"

[github]
# Your GitHub username (required).
username = ""

# Project lists
# -------------
# [projects.github]
# display = true              # fetch and show GitHub projects
# header = "Github Projects"
# mode = "automatic"          # automatic | manual
#
# [projects.github.automatic]
# sort_by = "stars"           # stars | updated
# limit = 8
#
# [projects.github.automatic.exclude]
# forks = false
# projects = []               # e.g. ["owner/repo"]
#
# [projects.github.manual]
# projects = []               # e.g. ["octocat/Hello-World"]
#
# [projects.external]
# header = "My Projects"
#
# [[projects.external.projects]]
# title = "Project Name"
# description = "Short description"
# link = "https://example.com"

# Page metadata
# -------------
# [seo]
# title = "Portfolio of John Doe"
# description = ""
# image_url = ""

# Contact and social links (empty entries are hidden)
# ---------------------------------------------------
# [social]
# linkedin = ""
# x = ""
# mastodon = ""
# website = ""
# phone = ""
# email = ""

# Resume
# ------
# [resume]
# file_url = ""

# Work history / education / certifications / publications
# --------------------------------------------------------
# [[experiences]]
# company = "Company Name"
# position = "Position"
# from = "September 2021"
# to = "Present"
# company_link = "https://example.com"
#
# [[educations]]
# institution = "Institution Name"
# degree = "Degree"
# from = "2015"
# to = "2019"
#
# [[certifications]]
# name = "Certification Name"
# body = "Issuing Body"
# year = "March 2022"
# link = "https://example.com"
#
# [[publications]]
# title = "Publication Title"
# conference_name = ""
# journal_name = "Journal Name"
# authors = "John Doe, Jane Doe"
# link = "https://example.com"
# description = ""

# Blog articles
# -------------
# [blog]
# source = "dev"              # dev | medium
# username = ""               # empty disables the section
# limit = 5                   # clamped to 10

# Analytics (recognized for compatibility; unused in the terminal)
# ----------------------------------------------------------------
# [google_analytics]
# id = ""
#
# [hotjar]
# id = ""
# snippet_version = 6

# Theme
# -----
# [theme_config]
# default_theme = "dark"      # dark | light | dracula | gruvbox | nord | synthwave | lofi
# disable_switch = false      # disable the theme selector popup
# respect_prefers_color_scheme = false
# display_avatar_ring = true
# themes = ["dark", "light", "dracula", "gruvbox", "nord", "synthwave", "lofi"]

# Logging
# -------
# Logs are stored in ~/.gitfolio/logs/ with automatic cleanup.
#
# [log]
# enabled = true
# level = "info"              # trace, debug, info, warn, error, off
# retention_hours = 24
"#;

/// Errors that can occur while loading the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error reading or creating the file.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// TOML parse error.
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Loads the raw configuration from `gitfolio.toml` in the working
/// directory, creating a commented sample file on first run.
///
/// # Errors
/// Returns error if the file cannot be read, created, or parsed.
pub fn load() -> Result<RawConfig, ConfigError> {
    load_from(Path::new(CONFIG_FILE_NAME))
}

/// Loads the raw configuration from a specific path.
///
/// # Errors
/// Returns error if the file cannot be read, created, or parsed.
pub fn load_from(path: &Path) -> Result<RawConfig, ConfigError> {
    // Create the sample config if it doesn't exist
    if !path.exists() {
        create_default_config(path)?;
    }

    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Creates the default config file.
fn create_default_config(path: &Path) -> io::Result<()> {
    let mut file = fs::File::create(path)?;
    file.write_all(DEFAULT_CONFIG.as_bytes())?;
    Ok(())
}
