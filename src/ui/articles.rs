//! Blog article cards fetched from dev.to or Medium.

use chrono::{DateTime, Utc};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::blog::Article;
use crate::errors::relative_time;
use crate::theme::Theme;
use crate::ui::text::truncate_to_width;

/// Lines each article card occupies, including the spacer.
pub const CARD_HEIGHT: usize = 4;

/// Formats an RFC 3339 publish timestamp as "3 days ago".
///
/// Feed dates that fail to parse are shown verbatim.
fn published_label(published_at: &str, now: DateTime<Utc>) -> String {
    match DateTime::parse_from_rfc3339(published_at) {
        Ok(ts) => relative_time(ts.with_timezone(&Utc), now),
        Err(_) => published_at.to_string(),
    }
}

/// Article list widget.
pub struct Articles<'a> {
    /// Section heading from the config.
    heading: &'a str,
    /// Articles in feed order (newest first).
    articles: &'a [Article],
    /// Reference time for the relative date labels.
    now: DateTime<Utc>,
    /// First article index shown (scrolling).
    scroll: usize,
    /// Number of cards already revealed by the stagger animation.
    reveal: usize,
    /// Theme for rendering colors.
    theme: &'a Theme,
}

impl<'a> Articles<'a> {
    /// Creates a new article list.
    #[must_use]
    pub fn new(heading: &'a str, articles: &'a [Article], theme: &'a Theme) -> Self {
        Self {
            heading,
            articles,
            now: Utc::now(),
            scroll: 0,
            reveal: articles.len(),
            theme,
        }
    }

    /// Overrides the reference time for the date labels.
    #[must_use]
    pub fn now(mut self, now: DateTime<Utc>) -> Self {
        self.now = now;
        self
    }

    /// Sets the first visible article.
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
}

impl Widget for Articles<'_> {
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
        for article in self.articles.iter().take(self.reveal).skip(self.scroll) {
            if y + 1 > area.y + area.height {
                break;
            }

            let title = Line::from(Span::styled(
                truncate_to_width(&article.title, width),
                Style::default()
                    .fg(self.theme.page.accent)
                    .add_modifier(Modifier::BOLD),
            ));
            buf.set_line(area.x, y, &title, area.width);

            if y + 1 < area.y + area.height && !article.description.is_empty() {
                let line = Line::from(Span::styled(
                    truncate_to_width(&article.description, width),
                    Style::default().fg(self.theme.card.text),
                ));
                buf.set_line(area.x, y + 1, &line, area.width);
            }

            if y + 2 < area.y + area.height && !article.published_at.is_empty() {
                let line = Line::from(Span::styled(
                    truncate_to_width(&published_label(&article.published_at, self.now), width),
                    Style::default().fg(self.theme.card.muted),
                ));
                buf.set_line(area.x, y + 2, &line, area.width);
            }

            y += CARD_HEIGHT as u16;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn article(title: &str, published_at: &str) -> Article {
        Article {
            title: title.to_string(),
            url: "https://dev.to/octocat/post".to_string(),
            published_at: published_at.to_string(),
            description: "Notes from the terminal".to_string(),
        }
    }

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

    #[test]
    fn test_published_label_relative() {
        let now = Utc.with_ymd_and_hms(2024, 5, 10, 12, 0, 0).unwrap();
        assert_eq!(
            published_label("2024-05-07T12:00:00Z", now),
            "3 days ago"
        );
    }

    #[test]
    fn test_published_label_unparseable_passthrough() {
        let now = Utc.with_ymd_and_hms(2024, 5, 10, 12, 0, 0).unwrap();
        assert_eq!(published_label("last week", now), "last week");
    }

    #[test]
    fn test_articles_render_with_relative_date() {
        let theme = Theme::default();
        let now = Utc.with_ymd_and_hms(2024, 5, 10, 12, 0, 0).unwrap();
        let articles = vec![article("Writing TUIs", "2024-05-07T12:00:00Z")];
        let area = Rect::new(0, 0, 60, 8);
        let mut buf = Buffer::empty(area);

        Articles::new("Articles", &articles, &theme)
            .now(now)
            .render(area, &mut buf);

        let content = buffer_to_string(&buf, area);
        assert!(content.contains("Writing TUIs"));
        assert!(content.contains("Notes from the terminal"));
        assert!(content.contains("3 days ago"));
    }

    #[test]
    fn test_articles_reveal_budget() {
        let theme = Theme::default();
        let articles = vec![
            article("First Post", "2024-05-07T12:00:00Z"),
            article("Second Post", "2024-05-01T12:00:00Z"),
        ];
        let area = Rect::new(0, 0, 60, 12);
        let mut buf = Buffer::empty(area);

        Articles::new("Articles", &articles, &theme)
            .reveal(1)
            .render(area, &mut buf);

        let content = buffer_to_string(&buf, area);
        assert!(content.contains("First Post"));
        assert!(!content.contains("Second Post"));
    }
}
