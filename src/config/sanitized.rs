//! Config sanitization.
//!
//! Turns a partially-specified [`RawConfig`] into a [`SanitizedConfig`]
//! where every field holds a concrete value. The only hard failure is a
//! missing or empty GitHub username; every other field is defaulted, never
//! rejected. Pure transformation, no I/O.

use crate::logging::LogConfig;
use crate::theme::ThemePreset;

use super::raw::{
    RawBlog, RawConfig, RawHotjar, RawLog, RawProjects, RawSeo, RawSocial, RawThemeConfig,
};

/// Default number of repositories fetched in automatic mode.
pub const DEFAULT_AUTOMATIC_LIMIT: u32 = 8;

/// Default number of blog articles shown.
pub const DEFAULT_BLOG_LIMIT: u32 = 5;

/// Upper bound on the blog article count; user values clamp to this.
pub const MAX_BLOG_LIMIT: u32 = 10;

/// Default header for the GitHub projects section.
pub const DEFAULT_GITHUB_HEADER: &str = "Github Projects";

/// Default header for the external projects section.
pub const DEFAULT_EXTERNAL_HEADER: &str = "My Projects";

/// Default Hotjar snippet version.
const DEFAULT_HOTJAR_SNIPPET_VERSION: u32 = 6;

/// How the GitHub project list is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectMode {
    /// Derived from a live search over the account's repositories.
    #[default]
    Automatic,
    /// Explicit, ordered list of "owner/repo" identifiers.
    Manual,
}

impl ProjectMode {
    /// Parses a mode from a config string, defaulting to automatic.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "manual" => Self::Manual,
            _ => Self::Automatic,
        }
    }
}

/// Sort key for the automatic repository search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    /// Stars, descending (upstream default order for this key).
    #[default]
    Stars,
    /// Most recently updated first.
    Updated,
}

impl SortBy {
    /// Parses a sort key from a config string, defaulting to stars.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "updated" => Self::Updated,
            _ => Self::Stars,
        }
    }

    /// Returns the value sent as the `sort` query parameter.
    #[must_use]
    pub const fn as_query_param(&self) -> &'static str {
        match self {
            Self::Stars => "stars",
            Self::Updated => "updated",
        }
    }
}

/// Where blog articles are fetched from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlogSource {
    /// dev.to articles API.
    #[default]
    Dev,
    /// Medium feed through the rss2json bridge.
    Medium,
}

impl BlogSource {
    /// Parses a source from a config string, defaulting to dev.to.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "medium" => Self::Medium,
            _ => Self::Dev,
        }
    }
}

/// Fully-defaulted application configuration.
///
/// Produced once by [`sanitize`] at startup and immutable afterwards.
/// Every field can be read without existence checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizedConfig {
    pub github: GithubSettings,
    pub projects: ProjectsSettings,
    pub seo: SeoSettings,
    pub social: SocialLinks,
    pub resume: ResumeSettings,
    pub skills: Vec<String>,
    pub experiences: Vec<Experience>,
    pub educations: Vec<Education>,
    pub certifications: Vec<Certification>,
    pub publications: Vec<Publication>,
    pub blog: BlogSettings,
    pub google_analytics: AnalyticsSettings,
    pub hotjar: HotjarSettings,
    pub theme: ThemeSettings,
    pub footer: String,
    pub log: LogConfig,
}

/// GitHub account settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GithubSettings {
    /// Account whose profile and repositories are shown. Never empty.
    pub username: String,
}

/// Project list settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectsSettings {
    pub github: GithubProjectsSettings,
    pub external: ExternalProjectsSettings,
}

/// GitHub-sourced project settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GithubProjectsSettings {
    /// Whether GitHub projects are fetched and shown at all.
    pub display: bool,
    /// Section header text.
    pub header: String,
    /// Selection mode.
    pub mode: ProjectMode,
    pub automatic: AutomaticSettings,
    pub manual: ManualSettings,
}

/// Settings for automatic (search-based) project selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutomaticSettings {
    pub sort_by: SortBy,
    /// Result limit passed to the search call. Always positive.
    pub limit: u32,
    /// Excludes forked repositories from the search when set.
    pub exclude_forks: bool,
    /// "owner/repo" names excluded from the search, one clause each.
    pub exclude_projects: Vec<String>,
}

/// Settings for manual (explicit list) project selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManualSettings {
    /// "owner/repo" identifiers, shown in declaration order.
    pub projects: Vec<String>,
}

/// External (static card) project settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalProjectsSettings {
    pub header: String,
    pub projects: Vec<ExternalProject>,
}

/// One static project card. No network calls involved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalProject {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub link: String,
}

/// Page metadata. In the terminal only the title is acted on (window
/// title); the rest is carried for completeness.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeoSettings {
    pub title: String,
    pub description: String,
    pub image_url: String,
}

/// Contact and social links. Empty string means the row is hidden.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SocialLinks {
    pub linkedin: String,
    pub x: String,
    pub mastodon: String,
    pub research_gate: String,
    pub facebook: String,
    pub instagram: String,
    pub reddit: String,
    pub threads: String,
    pub youtube: String,
    pub udemy: String,
    pub dribbble: String,
    pub behance: String,
    pub medium: String,
    pub dev: String,
    pub stackoverflow: String,
    pub skype: String,
    pub telegram: String,
    pub website: String,
    pub phone: String,
    pub email: String,
}

/// Resume link settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResumeSettings {
    pub file_url: String,
}

/// One work history entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Experience {
    pub company: String,
    pub position: String,
    pub from: String,
    pub to: String,
    pub company_link: String,
}

/// One education entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub from: String,
    pub to: String,
}

/// One certification entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Certification {
    pub name: String,
    pub body: String,
    pub year: String,
    pub link: String,
}

/// One publication entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Publication {
    pub title: String,
    pub conference_name: String,
    pub journal_name: String,
    pub authors: String,
    pub link: String,
    pub description: String,
}

/// Blog article settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogSettings {
    pub source: BlogSource,
    /// Username on the article source; empty disables the section.
    pub username: String,
    /// Article count, already clamped to [`MAX_BLOG_LIMIT`].
    pub limit: u32,
}

/// Google Analytics settings. Recognized but only logged in the terminal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalyticsSettings {
    pub id: String,
}

/// Hotjar settings. Recognized but only logged in the terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HotjarSettings {
    pub id: String,
    pub snippet_version: u32,
}

/// Theme selection settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeSettings {
    /// Preset applied when no persisted choice exists. Always a member of
    /// the built-in set.
    pub default_theme: ThemePreset,
    /// Disables the theme selector popup entirely.
    pub disable_switch: bool,
    /// Pick light/dark from the terminal background when no persisted
    /// choice exists.
    pub respect_prefers_color_scheme: bool,
    /// Draw a ring border around the avatar block.
    pub display_avatar_ring: bool,
    /// Presets offered by the selector. Never empty.
    pub themes: Vec<ThemePreset>,
}

/// Sanitizes a raw configuration.
///
/// Returns `None` (the empty-record sentinel consumed by the invalid-config
/// error path) when `github.username` is missing or empty after trimming.
/// Every other field is defaulted per the policies documented on the
/// individual settings types.
#[must_use]
pub fn sanitize(raw: RawConfig) -> Option<SanitizedConfig> {
    let username = raw
        .github
        .and_then(|g| g.username)
        .map(|u| u.trim().to_string())
        .filter(|u| !u.is_empty())?;

    Some(SanitizedConfig {
        github: GithubSettings { username },
        projects: sanitize_projects(raw.projects),
        seo: sanitize_seo(raw.seo),
        social: sanitize_social(raw.social),
        resume: ResumeSettings {
            file_url: raw.resume.and_then(|r| r.file_url).unwrap_or_default(),
        },
        skills: raw.skills.unwrap_or_default(),
        experiences: raw
            .experiences
            .unwrap_or_default()
            .into_iter()
            .map(|e| Experience {
                company: e.company.unwrap_or_default(),
                position: e.position.unwrap_or_default(),
                from: e.from.unwrap_or_default(),
                to: e.to.unwrap_or_default(),
                company_link: e.company_link.unwrap_or_default(),
            })
            .collect(),
        educations: raw
            .educations
            .unwrap_or_default()
            .into_iter()
            .map(|e| Education {
                institution: e.institution.unwrap_or_default(),
                degree: e.degree.unwrap_or_default(),
                from: e.from.unwrap_or_default(),
                to: e.to.unwrap_or_default(),
            })
            .collect(),
        certifications: raw
            .certifications
            .unwrap_or_default()
            .into_iter()
            .map(|c| Certification {
                name: c.name.unwrap_or_default(),
                body: c.body.unwrap_or_default(),
                year: c.year.unwrap_or_default(),
                link: c.link.unwrap_or_default(),
            })
            .collect(),
        publications: raw
            .publications
            .unwrap_or_default()
            .into_iter()
            .map(|p| Publication {
                title: p.title.unwrap_or_default(),
                conference_name: p.conference_name.unwrap_or_default(),
                journal_name: p.journal_name.unwrap_or_default(),
                authors: p.authors.unwrap_or_default(),
                link: p.link.unwrap_or_default(),
                description: p.description.unwrap_or_default(),
            })
            .collect(),
        blog: sanitize_blog(raw.blog),
        google_analytics: AnalyticsSettings {
            id: raw.google_analytics.and_then(|g| g.id).unwrap_or_default(),
        },
        hotjar: sanitize_hotjar(raw.hotjar),
        theme: sanitize_theme(raw.theme_config),
        footer: raw.footer.unwrap_or_default(),
        log: sanitize_log(raw.log),
    })
}

fn sanitize_projects(raw: Option<RawProjects>) -> ProjectsSettings {
    let raw = raw.unwrap_or_default();
    let github = raw.github.unwrap_or_default();
    let automatic = github.automatic.unwrap_or_default();
    let exclude = automatic.exclude.unwrap_or_default();
    let manual = github.manual.unwrap_or_default();
    let external = raw.external.unwrap_or_default();

    ProjectsSettings {
        github: GithubProjectsSettings {
            display: github.display.unwrap_or(true),
            header: github
                .header
                .unwrap_or_else(|| DEFAULT_GITHUB_HEADER.to_string()),
            mode: github
                .mode
                .as_deref()
                .map(ProjectMode::parse)
                .unwrap_or_default(),
            automatic: AutomaticSettings {
                sort_by: automatic
                    .sort_by
                    .as_deref()
                    .map(SortBy::parse)
                    .unwrap_or_default(),
                // Zero would request an empty page; treat it as unset.
                limit: automatic
                    .limit
                    .filter(|n| *n > 0)
                    .unwrap_or(DEFAULT_AUTOMATIC_LIMIT),
                exclude_forks: exclude.forks.unwrap_or(false),
                exclude_projects: exclude.projects.unwrap_or_default(),
            },
            manual: ManualSettings {
                projects: manual.projects.unwrap_or_default(),
            },
        },
        external: ExternalProjectsSettings {
            header: external
                .header
                .unwrap_or_else(|| DEFAULT_EXTERNAL_HEADER.to_string()),
            projects: external
                .projects
                .unwrap_or_default()
                .into_iter()
                .map(|p| ExternalProject {
                    title: p.title.unwrap_or_default(),
                    description: p.description.unwrap_or_default(),
                    image_url: p.image_url.unwrap_or_default(),
                    link: p.link.unwrap_or_default(),
                })
                .collect(),
        },
    }
}

fn sanitize_seo(raw: Option<RawSeo>) -> SeoSettings {
    let raw = raw.unwrap_or_default();
    SeoSettings {
        title: raw.title.unwrap_or_default(),
        description: raw.description.unwrap_or_default(),
        image_url: raw.image_url.unwrap_or_default(),
    }
}

fn sanitize_social(raw: Option<RawSocial>) -> SocialLinks {
    let raw = raw.unwrap_or_default();
    SocialLinks {
        linkedin: raw.linkedin.unwrap_or_default(),
        x: raw.x.unwrap_or_default(),
        mastodon: raw.mastodon.unwrap_or_default(),
        research_gate: raw.research_gate.unwrap_or_default(),
        facebook: raw.facebook.unwrap_or_default(),
        instagram: raw.instagram.unwrap_or_default(),
        reddit: raw.reddit.unwrap_or_default(),
        threads: raw.threads.unwrap_or_default(),
        youtube: raw.youtube.unwrap_or_default(),
        udemy: raw.udemy.unwrap_or_default(),
        dribbble: raw.dribbble.unwrap_or_default(),
        behance: raw.behance.unwrap_or_default(),
        medium: raw.medium.unwrap_or_default(),
        dev: raw.dev.unwrap_or_default(),
        stackoverflow: raw.stackoverflow.unwrap_or_default(),
        skype: raw.skype.unwrap_or_default(),
        telegram: raw.telegram.unwrap_or_default(),
        website: raw.website.unwrap_or_default(),
        phone: raw.phone.unwrap_or_default(),
        email: raw.email.unwrap_or_default(),
    }
}

fn sanitize_blog(raw: Option<RawBlog>) -> BlogSettings {
    let raw = raw.unwrap_or_default();
    BlogSettings {
        source: raw
            .source
            .as_deref()
            .map(BlogSource::parse)
            .unwrap_or_default(),
        username: raw.username.unwrap_or_default(),
        limit: raw
            .limit
            .filter(|n| *n > 0)
            .unwrap_or(DEFAULT_BLOG_LIMIT)
            .min(MAX_BLOG_LIMIT),
    }
}

fn sanitize_hotjar(raw: Option<RawHotjar>) -> HotjarSettings {
    let raw = raw.unwrap_or_default();
    HotjarSettings {
        id: raw.id.unwrap_or_default(),
        snippet_version: raw
            .snippet_version
            .unwrap_or(DEFAULT_HOTJAR_SNIPPET_VERSION),
    }
}

fn sanitize_theme(raw: Option<RawThemeConfig>) -> ThemeSettings {
    let raw = raw.unwrap_or_default();

    // Unknown names are dropped; an empty result falls back to the full set.
    let mut themes: Vec<ThemePreset> = raw
        .themes
        .unwrap_or_default()
        .iter()
        .filter_map(|name| ThemePreset::from_name(name))
        .collect();
    themes.dedup();
    if themes.is_empty() {
        themes = ThemePreset::all().to_vec();
    }

    let default_theme = raw
        .default_theme
        .as_deref()
        .and_then(ThemePreset::from_name)
        .unwrap_or(themes[0]);

    ThemeSettings {
        default_theme,
        disable_switch: raw.disable_switch.unwrap_or(false),
        respect_prefers_color_scheme: raw.respect_prefers_color_scheme.unwrap_or(false),
        display_avatar_ring: raw.display_avatar_ring.unwrap_or(true),
        themes,
    }
}

fn sanitize_log(raw: Option<RawLog>) -> LogConfig {
    let raw = raw.unwrap_or_default();
    LogConfig {
        retention_hours: raw
            .retention_hours
            .unwrap_or(crate::logging::DEFAULT_LOG_RETENTION_HOURS),
        level: raw
            .level
            .as_deref()
            .map(LogConfig::parse_level)
            .unwrap_or_else(|| crate::logging::DEFAULT_LOG_LEVEL.to_string()),
        enabled: raw.enabled.unwrap_or(true),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::raw::RawGithub;

    fn with_username(username: &str) -> RawConfig {
        RawConfig {
            github: Some(RawGithub {
                username: Some(username.to_string()),
            }),
            ..RawConfig::default()
        }
    }

    #[test]
    fn test_missing_username_fails() {
        assert_eq!(sanitize(RawConfig::default()), None);
    }

    #[test]
    fn test_empty_username_fails() {
        assert_eq!(sanitize(with_username("")), None);
        assert_eq!(sanitize(with_username("   ")), None);
    }

    #[test]
    fn test_username_trimmed() {
        let config = sanitize(with_username("  octocat  ")).unwrap();
        assert_eq!(config.github.username, "octocat");
    }

    #[test]
    fn test_minimal_config_defaults() {
        let config = sanitize(with_username("octocat")).unwrap();

        assert!(config.projects.github.display);
        assert_eq!(config.projects.github.header, DEFAULT_GITHUB_HEADER);
        assert_eq!(config.projects.github.mode, ProjectMode::Automatic);
        assert_eq!(config.projects.github.automatic.sort_by, SortBy::Stars);
        assert_eq!(
            config.projects.github.automatic.limit,
            DEFAULT_AUTOMATIC_LIMIT
        );
        assert!(!config.projects.github.automatic.exclude_forks);
        assert!(config.projects.github.automatic.exclude_projects.is_empty());
        assert!(config.projects.github.manual.projects.is_empty());
        assert_eq!(config.projects.external.header, DEFAULT_EXTERNAL_HEADER);
        assert!(config.skills.is_empty());
        assert!(config.experiences.is_empty());
        assert_eq!(config.blog.limit, DEFAULT_BLOG_LIMIT);
        assert_eq!(config.blog.source, BlogSource::Dev);
        assert_eq!(config.theme.themes, ThemePreset::all().to_vec());
        assert_eq!(config.theme.default_theme, ThemePreset::all()[0]);
        assert!(config.theme.display_avatar_ring);
        assert!(!config.theme.disable_switch);
        assert!(config.footer.is_empty());
        assert!(config.log.enabled);
    }

    #[test]
    fn test_zero_limit_falls_back_to_default() {
        let mut raw = with_username("octocat");
        raw.projects = Some(RawProjects {
            github: Some(crate::config::raw::RawGithubProjects {
                automatic: Some(crate::config::raw::RawAutomatic {
                    limit: Some(0),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        });
        let config = sanitize(raw).unwrap();
        assert_eq!(
            config.projects.github.automatic.limit,
            DEFAULT_AUTOMATIC_LIMIT
        );
    }

    #[test]
    fn test_blog_limit_clamped() {
        let mut raw = with_username("octocat");
        raw.blog = Some(RawBlog {
            source: Some("medium".to_string()),
            username: Some("octocat".to_string()),
            limit: Some(25),
        });
        let config = sanitize(raw).unwrap();
        assert_eq!(config.blog.limit, MAX_BLOG_LIMIT);
        assert_eq!(config.blog.source, BlogSource::Medium);
    }

    #[test]
    fn test_unknown_mode_and_sort_fall_back() {
        assert_eq!(ProjectMode::parse("MANUAL"), ProjectMode::Manual);
        assert_eq!(ProjectMode::parse("whatever"), ProjectMode::Automatic);
        assert_eq!(SortBy::parse("updated"), SortBy::Updated);
        assert_eq!(SortBy::parse("whatever"), SortBy::Stars);
        assert_eq!(BlogSource::parse("medium"), BlogSource::Medium);
        assert_eq!(BlogSource::parse("whatever"), BlogSource::Dev);
    }

    #[test]
    fn test_theme_list_filters_unknown_names() {
        let mut raw = with_username("octocat");
        raw.theme_config = Some(RawThemeConfig {
            default_theme: Some("dracula".to_string()),
            themes: Some(vec![
                "dracula".to_string(),
                "cyberpunk".to_string(),
                "nord".to_string(),
            ]),
            ..Default::default()
        });
        let config = sanitize(raw).unwrap();
        assert_eq!(
            config.theme.themes,
            vec![ThemePreset::Dracula, ThemePreset::Nord]
        );
        assert_eq!(config.theme.default_theme, ThemePreset::Dracula);
    }

    #[test]
    fn test_all_unknown_themes_fall_back_to_full_set() {
        let mut raw = with_username("octocat");
        raw.theme_config = Some(RawThemeConfig {
            default_theme: Some("cyberpunk".to_string()),
            themes: Some(vec!["cyberpunk".to_string()]),
            ..Default::default()
        });
        let config = sanitize(raw).unwrap();
        assert_eq!(config.theme.themes, ThemePreset::all().to_vec());
        // Unknown default falls back to the first sanitized entry.
        assert_eq!(config.theme.default_theme, ThemePreset::all()[0]);
    }

    #[test]
    fn test_display_flag_respected() {
        let mut raw = with_username("octocat");
        raw.projects = Some(RawProjects {
            github: Some(crate::config::raw::RawGithubProjects {
                display: Some(false),
                ..Default::default()
            }),
            ..Default::default()
        });
        let config = sanitize(raw).unwrap();
        assert!(!config.projects.github.display);
    }
}
