//! Publication cards for papers and talks.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::config::Publication;
use crate::theme::Theme;
use crate::ui::text::truncate_to_width;

/// Lines each publication card occupies, including the spacer.
pub const CARD_HEIGHT: usize = 4;

/// Publication list widget.
pub struct Publications<'a> {
    /// Section heading from the config.
    heading: &'a str,
    /// Publications in declaration order.
    publications: &'a [Publication],
    /// First publication index shown (scrolling).
    scroll: usize,
    /// Number of cards already revealed by the stagger animation.
    reveal: usize,
    /// Theme for rendering colors.
    theme: &'a Theme,
}

impl<'a> Publications<'a> {
    /// Creates a new publication list.
    #[must_use]
    pub fn new(heading: &'a str, publications: &'a [Publication], theme: &'a Theme) -> Self {
        Self {
            heading,
            publications,
            scroll: 0,
            reveal: publications.len(),
            theme,
        }
    }

    /// Sets the first visible publication.
    #[must_use]
    pub fn scroll(mut self, scroll: usize) -> Self {
        self.scroll = scroll;
        self
    }

    /// Limits how many cards are shown (staggered reveal).
    #[must_use]
    pub fn reveal(mut self, reveal: usize) -> Self {
        self.reveal = reveal;
        self
    }

    fn venue_line(publication: &Publication) -> String {
        let mut parts = Vec::new();
        if !publication.conference_name.is_empty() {
            parts.push(publication.conference_name.as_str());
        }
        if !publication.journal_name.is_empty() {
            parts.push(publication.journal_name.as_str());
        }
        if !publication.authors.is_empty() {
            parts.push(publication.authors.as_str());
        }
        parts.join("  \u{2502}  ")
    }
}

impl Widget for Publications<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let mut y = area.y;
        if !self.heading.is_empty() {
            let line = Line::from(Span::styled(
                self.heading.to_string(),
                Style::default()
                    .fg(self.theme.page.heading)
                    .add_modifier(Modifier::BOLD),
            ));
            buf.set_line(area.x, y, &line, area.width);
            y += 2;
        }

        let width = area.width as usize;
        for publication in self.publications.iter().take(self.reveal).skip(self.scroll) {
            if y + 1 > area.y + area.height {
                break;
            }

            let title = Line::from(Span::styled(
                truncate_to_width(&publication.title, width),
                Style::default()
                    .fg(self.theme.page.accent)
                    .add_modifier(Modifier::BOLD),
            ));
            buf.set_line(area.x, y, &title, area.width);

            let venue = Self::venue_line(publication);
            if y + 1 < area.y + area.height && !venue.is_empty() {
                let line = Line::from(Span::styled(
                    truncate_to_width(&venue, width),
                    Style::default().fg(self.theme.card.text),
                ));
                buf.set_line(area.x, y + 1, &line, area.width);
            }

            if y + 2 < area.y + area.height && !publication.link.is_empty() {
                let line = Line::from(Span::styled(
                    truncate_to_width(&publication.link, width),
                    Style::default().fg(self.theme.card.muted),
                ));
                buf.set_line(area.x, y + 2, &line, area.width);
            }

            y += CARD_HEIGHT as u16;
        }
    }
}
