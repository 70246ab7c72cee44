//! Integration tests for the page widgets.
//!
//! Widgets render into a plain ratatui `Buffer`; assertions check the
//! visible strings, not the styling details.

use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use gitfolio::blog::Article;
use gitfolio::errors::ErrorDescriptor;
use gitfolio::github::{GithubRepo, Profile};
use gitfolio::theme::{PageTheme, StatusBarTheme, TabTheme, Theme, ThemePreset};
use gitfolio::ui::{
    Articles, ErrorPage, GithubProjects, Hero, SectionTabBar, Skeleton, StatusBar, ThemeSelector,
    ThemeSelectorWidget, Timeline, TimelineEntry,
};

fn buffer_to_string(buf: &Buffer, area: Rect) -> String {
    let mut out = String::new();
    for y in area.y..area.y + area.height {
        for x in area.x..area.x + area.width {
            out.push(
                buf.cell((x, y))
                    .map(|c| c.symbol().chars().next().unwrap_or(' '))
                    .unwrap_or(' '),
            );
        }
        out.push('\n');
    }
    out
}

fn render<W: Widget>(widget: W, width: u16, height: u16) -> String {
    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);
    widget.render(area, &mut buf);
    buffer_to_string(&buf, area)
}

#[test]
fn test_skeleton_renders_placeholder_blocks() {
    let theme = PageTheme::default();
    let content = render(Skeleton::new(4, &theme), 40, 10);
    assert!(content.contains('\u{2583}'));
}

#[test]
fn test_error_page_shows_status_and_hint() {
    let theme = Theme::default();
    let descriptor = ErrorDescriptor::invalid_username();
    let content = render(ErrorPage::new(&descriptor, &theme), 80, 24);

    assert!(content.contains("404"));
    assert!(content.contains("Not found"));
    assert!(content.contains("press q to quit"));
}

#[test]
fn test_error_page_rate_limited_phrase() {
    let theme = Theme::default();
    let descriptor = ErrorDescriptor::rate_limited("in 42 minutes");
    let content = render(ErrorPage::new(&descriptor, &theme), 80, 24);

    assert!(content.contains("403"));
    assert!(content.contains("Too many requests"));
    assert!(content.contains("in 42 minutes"));
}

#[test]
fn test_hero_shows_identity() {
    let theme = Theme::default();
    let profile = Profile {
        avatar_url: "https://example.com/a.png".to_string(),
        name: "Mona Lisa".to_string(),
        bio: "Art and code".to_string(),
        location: "Paris".to_string(),
        company: "@github".to_string(),
    };
    let content = render(Hero::new(&profile, "octocat", &theme), 70, 10);

    assert!(content.contains("Mona Lisa"));
    assert!(content.contains("@octocat"));
    assert!(content.contains("Art and code"));
    // Avatar block shows the initials
    assert!(content.contains("ML"));
}

#[test]
fn test_tab_bar_lists_sections_with_jump_keys() {
    let theme = TabTheme::default();
    let labels = ["Overview", "Projects", "Articles"];
    let content = render(SectionTabBar::new(&labels, 1, &theme), 60, 1);

    assert!(content.contains("1 Overview"));
    assert!(content.contains("2 Projects"));
    assert!(content.contains("3 Articles"));
}

#[test]
fn test_status_bar_segments() {
    let theme = StatusBarTheme::default();
    let bar = StatusBar::new("Projects", &theme)
        .message("Copied Email")
        .theme_name("nord");
    let content = render(bar, 80, 1);

    assert!(content.contains("PROJECTS"));
    assert!(content.contains("Copied Email"));
    assert!(content.contains("nord"));
    assert!(content.contains("q quit"));
}

#[test]
fn test_project_cards_show_counts_and_meta() {
    let theme = Theme::default();
    let repos = vec![GithubRepo {
        name: "Hello-World".to_string(),
        description: Some("My first repository".to_string()),
        html_url: "https://github.com/octocat/Hello-World".to_string(),
        stargazers_count: 1_900,
        forks_count: 250,
        language: Some("Rust".to_string()),
        topics: vec!["demo".to_string()],
        homepage: None,
        created_at: String::new(),
        updated_at: String::new(),
    }];
    let content = render(GithubProjects::new("Github Projects", &repos, &theme), 70, 10);

    assert!(content.contains("Github Projects"));
    assert!(content.contains("Hello-World"));
    assert!(content.contains("My first repository"));
    assert!(content.contains("1.9k"));
    assert!(content.contains("Rust"));
    assert!(content.contains("#demo"));
}

#[test]
fn test_timeline_marks_entries() {
    let theme = Theme::default();
    let entries = vec![TimelineEntry {
        title: "Senior Engineer".to_string(),
        subtitle: "Example Corp".to_string(),
        period: "2021 \u{2013} Present".to_string(),
    }];
    let content = render(Timeline::new("Experience", &entries, &theme), 50, 10);

    assert!(content.contains("Experience"));
    assert!(content.contains("\u{25cf} Senior Engineer"));
    assert!(content.contains("Example Corp"));
    assert!(content.contains("2021"));
}

#[test]
fn test_articles_list_titles() {
    let theme = Theme::default();
    let articles = vec![Article {
        title: "Writing TUIs in Rust".to_string(),
        url: "https://dev.to/octocat/writing-tuis".to_string(),
        published_at: String::new(),
        description: "Notes from the terminal".to_string(),
    }];
    let content = render(Articles::new("Articles", &articles, &theme), 70, 10);

    assert!(content.contains("Articles"));
    assert!(content.contains("Writing TUIs in Rust"));
    assert!(content.contains("Notes from the terminal"));
}

#[test]
fn test_theme_selector_popup_lists_offered_presets() {
    let offered = [ThemePreset::Dark, ThemePreset::Nord];
    let selector = ThemeSelector::new(ThemePreset::Nord, &offered);
    let theme = Theme::default();
    let content = render(ThemeSelectorWidget::new(&selector, &theme.popup), 60, 14);

    assert!(content.contains("Theme"));
    assert!(content.contains("dark"));
    assert!(content.contains("nord"));
    // Presets outside the offered list never appear
    assert!(!content.contains("dracula"));
}

#[test]
fn test_widgets_survive_tiny_areas() {
    let theme = Theme::default();
    let descriptor = ErrorDescriptor::generic(None);
    let labels = ["Overview"];
    let entries: Vec<TimelineEntry> = Vec::new();

    render(ErrorPage::new(&descriptor, &theme), 2, 1);
    render(Skeleton::new(5, &theme.page), 1, 1);
    render(SectionTabBar::new(&labels, 0, &theme.tabs), 3, 1);
    render(Timeline::new("Experience", &entries, &theme), 0, 0);
}
