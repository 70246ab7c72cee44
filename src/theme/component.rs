//! Component-specific theme settings.
//!
//! Defines theme structures for each part of the portfolio page.

use ratatui::style::Color;

/// Page-level theme: the canvas behind every section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageTheme {
    /// Foreground (text) color.
    pub foreground: Color,
    /// Background color.
    pub background: Color,
    /// Section heading color.
    pub heading: Color,
    /// Accent color for links and highlights.
    pub accent: Color,
    /// Muted color for secondary text.
    pub muted: Color,
    /// Skeleton placeholder block color.
    pub skeleton: Color,
}

impl Default for PageTheme {
    fn default() -> Self {
        Self {
            foreground: Color::Rgb(212, 212, 212),
            background: Color::Rgb(30, 30, 30),
            heading: Color::White,
            accent: Color::Rgb(86, 156, 214),
            muted: Color::Rgb(133, 133, 133),
            skeleton: Color::Rgb(60, 60, 60),
        }
    }
}

/// Card theme: bordered content blocks (projects, timeline entries).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardTheme {
    /// Card title color.
    pub title: Color,
    /// Card body text color.
    pub text: Color,
    /// Accent color for counts and badges.
    pub accent: Color,
    /// Muted color for metadata lines.
    pub muted: Color,
    /// Border color.
    pub border: Color,
    /// Border color of the selected card or row.
    pub border_selected: Color,
}

impl Default for CardTheme {
    fn default() -> Self {
        Self {
            title: Color::White,
            text: Color::Rgb(212, 212, 212),
            accent: Color::Rgb(78, 201, 176),
            muted: Color::Rgb(133, 133, 133),
            border: Color::DarkGray,
            border_selected: Color::Cyan,
        }
    }
}

/// Status bar theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBarTheme {
    /// Background color.
    pub background: Color,
    /// Foreground (text) color.
    pub foreground: Color,
    /// Section badge background.
    pub badge: Color,
    /// Accent color for key hints.
    pub accent: Color,
}

impl Default for StatusBarTheme {
    fn default() -> Self {
        Self {
            background: Color::Rgb(0, 122, 204),
            foreground: Color::White,
            badge: Color::Rgb(9, 71, 113),
            accent: Color::Rgb(78, 201, 176),
        }
    }
}

/// Section tab bar theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabTheme {
    /// Active tab background.
    pub active_bg: Color,
    /// Active tab foreground.
    pub active_fg: Color,
    /// Inactive tab background.
    pub inactive_bg: Color,
    /// Inactive tab foreground.
    pub inactive_fg: Color,
}

impl Default for TabTheme {
    fn default() -> Self {
        Self {
            active_bg: Color::Rgb(30, 30, 30),
            active_fg: Color::White,
            inactive_bg: Color::Rgb(45, 45, 45),
            inactive_fg: Color::Rgb(128, 128, 128),
        }
    }
}

/// Popup/dialog theme (theme selector).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopupTheme {
    /// Background color.
    pub background: Color,
    /// Foreground (text) color.
    pub foreground: Color,
    /// Border color.
    pub border: Color,
    /// Selected item background.
    pub selected_bg: Color,
    /// Selected item foreground.
    pub selected_fg: Color,
}

impl Default for PopupTheme {
    fn default() -> Self {
        Self {
            background: Color::Rgb(37, 37, 38),
            foreground: Color::Rgb(204, 204, 204),
            border: Color::Rgb(60, 60, 60),
            selected_bg: Color::Rgb(9, 71, 113),
            selected_fg: Color::White,
        }
    }
}

/// Complete theme configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Theme name.
    pub name: String,
    /// Page canvas theme.
    pub page: PageTheme,
    /// Content card theme.
    pub card: CardTheme,
    /// Status bar theme.
    pub statusbar: StatusBarTheme,
    /// Section tab bar theme.
    pub tabs: TabTheme,
    /// Popup/dialog theme.
    pub popup: PopupTheme,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            name: "dark".to_string(),
            page: PageTheme::default(),
            card: CardTheme::default(),
            statusbar: StatusBarTheme::default(),
            tabs: TabTheme::default(),
            popup: PopupTheme::default(),
        }
    }
}

impl Theme {
    /// Returns the theme name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}
