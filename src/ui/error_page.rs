//! Full-page error state.
//!
//! The page is all-content or all-error: when a load cycle fails, this
//! widget replaces every section with one centered error card.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::errors::ErrorDescriptor;
use crate::theme::Theme;

/// Full-page error widget.
pub struct ErrorPage<'a> {
    /// Descriptor selected by the classifier.
    descriptor: &'a ErrorDescriptor,
    /// Theme for rendering colors.
    theme: &'a Theme,
}

impl<'a> ErrorPage<'a> {
    /// Creates a new error page.
    #[must_use]
    pub fn new(descriptor: &'a ErrorDescriptor, theme: &'a Theme) -> Self {
        Self { descriptor, theme }
    }

    /// Centers the error card in the page area.
    fn card_area(area: Rect) -> Rect {
        let width = 60_u16.min(area.width.saturating_sub(4)).max(1);
        let height = 8_u16.min(area.height).max(1);
        let x = area.x + (area.width.saturating_sub(width)) / 2;
        let y = area.y + (area.height.saturating_sub(height)) / 2;
        Rect::new(x, y, width, height)
    }
}

impl Widget for ErrorPage<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let card = Self::card_area(area);

        let heading = match self.descriptor.status {
            Some(status) => format!(" {} ", status),
            None => " Error ".to_string(),
        };

        let block = Block::default()
            .title(heading)
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.card.border_selected));
        let inner = block.inner(card);
        block.render(card, buf);

        let lines = vec![
            Line::from(Span::styled(
                self.descriptor.title.clone(),
                Style::default()
                    .fg(self.theme.page.heading)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::default(),
            Line::from(Span::styled(
                self.descriptor.subtitle.clone(),
                Style::default().fg(self.theme.page.foreground),
            )),
            Line::default(),
            Line::from(Span::styled(
                "press q to quit",
                Style::default().fg(self.theme.page.muted),
            )),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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
        }
        out
    }

    #[test]
    fn test_error_page_shows_descriptor() {
        let theme = Theme::default();
        let descriptor = ErrorDescriptor::invalid_username();
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);

        ErrorPage::new(&descriptor, &theme).render(area, &mut buf);

        let content = buffer_to_string(&buf, area);
        assert!(content.contains("404"));
        assert!(content.contains("Not found"));
        assert!(content.contains("press q to quit"));
    }

    #[test]
    fn test_error_page_without_status_uses_generic_heading() {
        let theme = Theme::default();
        let descriptor = ErrorDescriptor::generic(None);
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);

        ErrorPage::new(&descriptor, &theme).render(area, &mut buf);

        let content = buffer_to_string(&buf, area);
        assert!(content.contains("Error"));
        assert!(content.contains("Something went wrong"));
    }

    #[test]
    fn test_error_page_tiny_area_does_not_panic() {
        let theme = Theme::default();
        let descriptor = ErrorDescriptor::invalid_config();
        let area = Rect::new(0, 0, 3, 2);
        let mut buf = Buffer::empty(area);
        ErrorPage::new(&descriptor, &theme).render(area, &mut buf);
    }
}
