//! Timeline card for work history, education, and certifications.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::config::{Certification, Education, Experience};
use crate::theme::Theme;
use crate::ui::text::truncate_to_width;

/// One rendered timeline entry, three lines plus a spacer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineEntry {
    /// Headline (position, degree, certification name).
    pub title: String,
    /// Second line (company, institution, issuing body).
    pub subtitle: String,
    /// Period or year.
    pub period: String,
}

impl From<&Experience> for TimelineEntry {
    fn from(e: &Experience) -> Self {
        Self {
            title: e.position.clone(),
            subtitle: e.company.clone(),
            period: join_period(&e.from, &e.to),
        }
    }
}

impl From<&Education> for TimelineEntry {
    fn from(e: &Education) -> Self {
        Self {
            title: e.degree.clone(),
            subtitle: e.institution.clone(),
            period: join_period(&e.from, &e.to),
        }
    }
}

impl From<&Certification> for TimelineEntry {
    fn from(c: &Certification) -> Self {
        Self {
            title: c.name.clone(),
            subtitle: c.body.clone(),
            period: c.year.clone(),
        }
    }
}

fn join_period(from: &str, to: &str) -> String {
    match (from.is_empty(), to.is_empty()) {
        (true, true) => String::new(),
        (false, true) => from.to_string(),
        (true, false) => to.to_string(),
        (false, false) => format!("{from} \u{2013} {to}"),
    }
}

/// Lines each timeline entry occupies, including the spacer.
pub const ENTRY_HEIGHT: usize = 4;

/// Timeline card widget.
pub struct Timeline<'a> {
    /// Section heading shown above the entries.
    heading: &'a str,
    /// Entries in declaration order.
    entries: &'a [TimelineEntry],
    /// First entry index shown (scrolling).
    scroll: usize,
    /// Number of entries already revealed by the stagger animation.
    reveal: usize,
    /// Theme for rendering colors.
    theme: &'a Theme,
}

impl<'a> Timeline<'a> {
    /// Creates a new timeline card.
    #[must_use]
    pub fn new(heading: &'a str, entries: &'a [TimelineEntry], theme: &'a Theme) -> Self {
        Self {
            heading,
            entries,
            scroll: 0,
            reveal: entries.len(),
            theme,
        }
    }

    /// Sets the first visible entry.
    #[must_use]
    pub fn scroll(mut self, scroll: usize) -> Self {
        self.scroll = scroll;
        self
    }

    /// Limits how many entries are shown (staggered reveal).
    #[must_use]
    pub fn reveal(mut self, reveal: usize) -> Self {
        self.reveal = reveal;
        self
    }
}

impl Widget for Timeline<'_> {
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
        let visible = self
            .entries
            .iter()
            .take(self.reveal)
            .skip(self.scroll);

        for entry in visible {
            if y + 2 > area.y + area.height {
                break;
            }

            let title = Line::from(vec![
                Span::styled("\u{25cf} ", Style::default().fg(self.theme.card.accent)),
                Span::styled(
                    truncate_to_width(&entry.title, width.saturating_sub(2)),
                    Style::default()
                        .fg(self.theme.card.title)
                        .add_modifier(Modifier::BOLD),
                ),
            ]);
            buf.set_line(area.x, y, &title, area.width);

            let subtitle = Line::from(vec![
                Span::styled("\u{2502} ", Style::default().fg(self.theme.card.border)),
                Span::styled(
                    truncate_to_width(&entry.subtitle, width.saturating_sub(2)),
                    Style::default().fg(self.theme.card.text),
                ),
            ]);
            buf.set_line(area.x, y + 1, &subtitle, area.width);

            if !entry.period.is_empty() && y + 2 < area.y + area.height {
                let period = Line::from(vec![
                    Span::styled("\u{2502} ", Style::default().fg(self.theme.card.border)),
                    Span::styled(
                        truncate_to_width(&entry.period, width.saturating_sub(2)),
                        Style::default().fg(self.theme.card.muted),
                    ),
                ]);
                buf.set_line(area.x, y + 2, &period, area.width);
            }

            y += ENTRY_HEIGHT as u16;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries() -> Vec<TimelineEntry> {
        vec![
            TimelineEntry {
                title: "Senior Engineer".to_string(),
                subtitle: "Example Corp".to_string(),
                period: "2021 \u{2013} Present".to_string(),
            },
            TimelineEntry {
                title: "Engineer".to_string(),
                subtitle: "Other Corp".to_string(),
                period: "2018 \u{2013} 2021".to_string(),
            },
        ]
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
    fn test_timeline_entry_from_experience() {
        let exp = Experience {
            company: "Example Corp".to_string(),
            position: "Senior Engineer".to_string(),
            from: "2021".to_string(),
            to: "Present".to_string(),
            company_link: String::new(),
        };
        let entry = TimelineEntry::from(&exp);
        assert_eq!(entry.title, "Senior Engineer");
        assert_eq!(entry.period, "2021 \u{2013} Present");
    }

    #[test]
    fn test_timeline_renders_heading_and_entries() {
        let theme = Theme::default();
        let entries = entries();
        let area = Rect::new(0, 0, 40, 12);
        let mut buf = Buffer::empty(area);

        Timeline::new("Experience", &entries, &theme).render(area, &mut buf);

        let content = buffer_to_string(&buf, area);
        assert!(content.contains("Experience"));
        assert!(content.contains("Senior Engineer"));
        assert!(content.contains("Other Corp"));
    }

    #[test]
    fn test_timeline_scroll_skips_entries() {
        let theme = Theme::default();
        let entries = entries();
        let area = Rect::new(0, 0, 40, 12);
        let mut buf = Buffer::empty(area);

        Timeline::new("Experience", &entries, &theme)
            .scroll(1)
            .render(area, &mut buf);

        let content = buffer_to_string(&buf, area);
        assert!(!content.contains("Senior Engineer"));
        assert!(content.contains("Other Corp"));
    }

    #[test]
    fn test_timeline_reveal_budget() {
        let theme = Theme::default();
        let entries = entries();
        let area = Rect::new(0, 0, 40, 12);
        let mut buf = Buffer::empty(area);

        Timeline::new("Experience", &entries, &theme)
            .reveal(1)
            .render(area, &mut buf);

        let content = buffer_to_string(&buf, area);
        assert!(content.contains("Senior Engineer"));
        assert!(!content.contains("Other Corp"));
    }

    #[test]
    fn test_join_period_variants() {
        assert_eq!(join_period("", ""), "");
        assert_eq!(join_period("2020", ""), "2020");
        assert_eq!(join_period("", "2021"), "2021");
        assert_eq!(join_period("2020", "2021"), "2020 \u{2013} 2021");
    }
}
