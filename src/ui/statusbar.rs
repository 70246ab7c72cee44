//! Status bar widget.
//!
//! Renders the section badge, transient status message, loading
//! indicator, theme name, and key hints on the bottom row.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};

use crate::theme::StatusBarTheme;
use crate::ui::text::truncate_to_width;

/// Separator character for status bar segments.
const SEG_SEPARATOR: char = '\u{2502}';

/// Status bar widget.
pub struct StatusBar<'a> {
    /// Active section name.
    section: &'a str,
    /// Transient status message.
    message: &'a str,
    /// Current theme name.
    theme_name: &'a str,
    /// Label of the fetch step in flight, if any.
    loading: Option<&'a str>,
    /// Theme for rendering colors.
    theme: &'a StatusBarTheme,
    /// Whether the theme switcher hint is shown.
    show_theme_hint: bool,
}

impl<'a> StatusBar<'a> {
    /// Creates a new status bar for the given section.
    #[must_use]
    pub fn new(section: &'a str, theme: &'a StatusBarTheme) -> Self {
        Self {
            section,
            message: "",
            theme_name: "",
            loading: None,
            theme,
            show_theme_hint: true,
        }
    }

    /// Sets the status message.
    #[must_use]
    pub fn message(mut self, message: &'a str) -> Self {
        self.message = message;
        self
    }

    /// Sets the displayed theme name.
    #[must_use]
    pub fn theme_name(mut self, name: &'a str) -> Self {
        self.theme_name = name;
        self
    }

    /// Sets the in-flight fetch step label.
    #[must_use]
    pub fn loading(mut self, label: Option<&'a str>) -> Self {
        self.loading = label;
        self
    }

    /// Hides the theme switcher key hint (switcher disabled in config).
    #[must_use]
    pub fn show_theme_hint(mut self, show: bool) -> Self {
        self.show_theme_hint = show;
        self
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let bg_style = Style::default()
            .bg(self.theme.background)
            .fg(self.theme.foreground);

        // Background fill
        for x in area.x..area.x + area.width {
            if let Some(cell) = buf.cell_mut((x, area.y)) {
                cell.set_char(' ');
                cell.set_style(bg_style);
            }
        }

        // === Left segment: section badge ===
        let badge = format!("  {}  ", self.section.to_uppercase());
        let badge_style = Style::default()
            .bg(self.theme.badge)
            .fg(self.theme.foreground)
            .add_modifier(Modifier::BOLD);

        let mut x = area.x;
        for c in badge.chars() {
            if x >= area.x + area.width {
                break;
            }
            if let Some(cell) = buf.cell_mut((x, area.y)) {
                cell.set_char(c);
                cell.set_style(badge_style);
            }
            x += 1;
        }

        // === Center segment: loading step or message ===
        let center = if let Some(label) = self.loading {
            format!("loading {label}\u{2026}")
        } else {
            self.message.to_string()
        };

        // Right side first to know the available center width
        let hints = if self.show_theme_hint {
            "t theme  q quit"
        } else {
            "q quit"
        };
        let right = if self.theme_name.is_empty() {
            format!(" {hints} ")
        } else {
            format!(" {} {} {} ", self.theme_name, SEG_SEPARATOR, hints)
        };

        let right_width = right.chars().count();
        let used = (x - area.x) as usize;
        let available = (area.width as usize)
            .saturating_sub(used)
            .saturating_sub(right_width)
            .saturating_sub(2);

        if !center.is_empty() && available > 1 {
            let text = format!(" {}", truncate_to_width(&center, available));
            for c in text.chars() {
                if x >= area.x + area.width {
                    break;
                }
                if let Some(cell) = buf.cell_mut((x, area.y)) {
                    cell.set_char(c);
                    cell.set_style(bg_style);
                }
                x += 1;
            }
        }

        // === Right segment: theme name + key hints ===
        if (area.width as usize) > right_width {
            let mut rx = area.x + area.width - right_width as u16;
            let hint_style = Style::default()
                .bg(self.theme.background)
                .fg(self.theme.accent);
            for c in right.chars() {
                if rx >= area.x + area.width {
                    break;
                }
                if let Some(cell) = buf.cell_mut((rx, area.y)) {
                    cell.set_char(c);
                    cell.set_style(if c == SEG_SEPARATOR { bg_style } else { hint_style });
                }
                rx += 1;
            }
        }
    }
}
