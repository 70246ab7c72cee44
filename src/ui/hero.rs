//! Hero card: avatar block, name, bio, location, company.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::github::Profile;
use crate::theme::Theme;
use crate::ui::text::initials;

/// Width of the avatar column including padding.
const AVATAR_WIDTH: u16 = 12;

/// Hero card widget.
pub struct Hero<'a> {
    /// Identity record from the load cycle.
    profile: &'a Profile,
    /// GitHub username, shown under the name.
    username: &'a str,
    /// Whether the avatar block gets a ring border.
    ring: bool,
    /// Theme for rendering colors.
    theme: &'a Theme,
}

impl<'a> Hero<'a> {
    /// Creates a new hero card.
    #[must_use]
    pub fn new(profile: &'a Profile, username: &'a str, theme: &'a Theme) -> Self {
        Self {
            profile,
            username,
            ring: true,
            theme,
        }
    }

    /// Enables or disables the avatar ring border.
    #[must_use]
    pub fn ring(mut self, ring: bool) -> Self {
        self.ring = ring;
        self
    }

    fn render_avatar(&self, area: Rect, buf: &mut Buffer) {
        let inner = if self.ring {
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(self.theme.page.accent));
            let inner = block.inner(area);
            block.render(area, buf);
            inner
        } else {
            area
        };

        if inner.height == 0 {
            return;
        }

        let letters = initials(&self.profile.name);
        let y = inner.y + inner.height / 2;
        let para_area = Rect::new(inner.x, y, inner.width, 1);
        Paragraph::new(Line::from(Span::styled(
            letters,
            Style::default()
                .fg(self.theme.page.heading)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .render(para_area, buf);
    }
}

impl Widget for Hero<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(AVATAR_WIDTH), Constraint::Min(1)])
            .split(area);

        if chunks[0].width > 0 {
            self.render_avatar(chunks[0], buf);
        }

        let mut lines = Vec::new();
        // The name is never empty (missing upstream names arrive as a
        // single space) so this line always holds its height.
        lines.push(Line::from(Span::styled(
            self.profile.name.clone(),
            Style::default()
                .fg(self.theme.page.heading)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            format!("@{}", self.username),
            Style::default().fg(self.theme.page.accent),
        )));

        if !self.profile.bio.is_empty() {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                self.profile.bio.clone(),
                Style::default().fg(self.theme.page.foreground),
            )));
        }

        let mut meta = Vec::new();
        if !self.profile.location.is_empty() {
            meta.push(self.profile.location.clone());
        }
        if !self.profile.company.is_empty() {
            meta.push(self.profile.company.clone());
        }
        if !meta.is_empty() {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                meta.join("  \u{2502}  "),
                Style::default().fg(self.theme.page.muted),
            )));
        }

        let text_area = Rect::new(
            chunks[1].x + 1,
            chunks[1].y,
            chunks[1].width.saturating_sub(1),
            chunks[1].height,
        );
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(text_area, buf);
    }
}
