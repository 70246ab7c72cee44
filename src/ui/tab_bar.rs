//! Section tab bar rendered along the top of the page.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::TabTheme;

/// Section tab bar widget. Tabs carry their 1-based jump key.
pub struct SectionTabBar<'a> {
    /// Tab labels in section order.
    labels: &'a [&'a str],
    /// Active tab index.
    active: usize,
    /// Theme for rendering colors.
    theme: &'a TabTheme,
}

impl<'a> SectionTabBar<'a> {
    /// Creates a new tab bar.
    #[must_use]
    pub fn new(labels: &'a [&'a str], active: usize, theme: &'a TabTheme) -> Self {
        Self {
            labels,
            active,
            theme,
        }
    }
}

impl Widget for SectionTabBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let mut spans = Vec::new();
        for (i, label) in self.labels.iter().enumerate() {
            let style = if i == self.active {
                Style::default()
                    .fg(self.theme.active_fg)
                    .bg(self.theme.active_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
                    .fg(self.theme.inactive_fg)
                    .bg(self.theme.inactive_bg)
            };
            spans.push(Span::styled(format!(" {} {label} ", i + 1), style));
            if i + 1 < self.labels.len() {
                spans.push(Span::styled(
                    "\u{2502}",
                    Style::default().fg(self.theme.inactive_fg),
                ));
            }
        }

        let line = Line::from(spans);
        buf.set_line(area.x, area.y, &line, area.width);
    }
}
