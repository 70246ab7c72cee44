//! Contact details card with selectable, copyable rows.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::config::{SanitizedConfig, SocialLinks};
use crate::theme::Theme;
use crate::ui::text::truncate_to_width;

/// One selectable contact row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRow {
    /// Display label (e.g. "Email").
    pub label: String,
    /// Value copied to the clipboard.
    pub value: String,
}

impl ContactRow {
    fn new(label: &str, value: &str) -> Self {
        Self {
            label: label.to_string(),
            value: value.to_string(),
        }
    }
}

/// Builds the contact row list from the sanitized config.
///
/// Empty links are hidden; the GitHub profile link is always present.
/// Declaration order here is the display order.
#[must_use]
pub fn contact_rows(config: &SanitizedConfig) -> Vec<ContactRow> {
    let SocialLinks {
        linkedin,
        x,
        mastodon,
        research_gate,
        facebook,
        instagram,
        reddit,
        threads,
        youtube,
        udemy,
        dribbble,
        behance,
        medium,
        dev,
        stackoverflow,
        skype,
        telegram,
        website,
        phone,
        email,
    } = &config.social;

    let mut rows = vec![ContactRow::new(
        "GitHub",
        &format!("https://github.com/{}", config.github.username),
    )];

    let optional: [(&str, &str); 20] = [
        ("Email", email),
        ("Phone", phone),
        ("Website", website),
        ("LinkedIn", linkedin),
        ("X", x),
        ("Mastodon", mastodon),
        ("ResearchGate", research_gate),
        ("Facebook", facebook),
        ("Instagram", instagram),
        ("Reddit", reddit),
        ("Threads", threads),
        ("YouTube", youtube),
        ("Udemy", udemy),
        ("Dribbble", dribbble),
        ("Behance", behance),
        ("Medium", medium),
        ("dev.to", dev),
        ("Stack Overflow", stackoverflow),
        ("Skype", skype),
        ("Telegram", telegram),
    ];
    for (label, value) in optional {
        if !value.is_empty() {
            rows.push(ContactRow::new(label, value));
        }
    }

    if !config.resume.file_url.is_empty() {
        rows.push(ContactRow::new("Resume", &config.resume.file_url));
    }

    rows
}

/// Contact list widget.
pub struct ContactList<'a> {
    /// Rows in display order.
    rows: &'a [ContactRow],
    /// Selected row index.
    selected: usize,
    /// Number of rows already revealed by the stagger animation.
    reveal: usize,
    /// Theme for rendering colors.
    theme: &'a Theme,
}

impl<'a> ContactList<'a> {
    /// Creates a new contact list.
    #[must_use]
    pub fn new(rows: &'a [ContactRow], theme: &'a Theme) -> Self {
        Self {
            rows,
            selected: 0,
            reveal: rows.len(),
            theme,
        }
    }

    /// Sets the selected row.
    #[must_use]
    pub fn selected(mut self, selected: usize) -> Self {
        self.selected = selected;
        self
    }

    /// Limits how many rows are shown (staggered reveal).
    #[must_use]
    pub fn reveal(mut self, reveal: usize) -> Self {
        self.reveal = reveal;
        self
    }
}

impl Widget for ContactList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let label_width = self
            .rows
            .iter()
            .map(|r| r.label.chars().count())
            .max()
            .unwrap_or(0);

        for (i, row) in self.rows.iter().take(self.reveal).enumerate() {
            let y = area.y + i as u16;
            if y >= area.y + area.height {
                break;
            }

            let is_selected = i == self.selected;
            let marker = if is_selected { "\u{25b8} " } else { "  " };
            let label_style = if is_selected {
                Style::default()
                    .fg(self.theme.card.border_selected)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(self.theme.page.muted)
            };

            let value_width = (area.width as usize)
                .saturating_sub(label_width + marker.len() + 2);
            let line = Line::from(vec![
                Span::styled(marker.to_string(), label_style),
                Span::styled(format!("{:<label_width$}", row.label), label_style),
                Span::raw("  "),
                Span::styled(
                    truncate_to_width(&row.value, value_width),
                    Style::default().fg(self.theme.page.foreground),
                ),
            ]);
            buf.set_line(area.x, y, &line, area.width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{RawConfig, raw::RawGithub, raw::RawSocial, sanitize};

    fn config_with_social(email: &str, phone: &str) -> SanitizedConfig {
        let raw = RawConfig {
            github: Some(RawGithub {
                username: Some("octocat".to_string()),
            }),
            social: Some(RawSocial {
                email: Some(email.to_string()),
                phone: Some(phone.to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };
        sanitize(raw).unwrap()
    }

    #[test]
    fn test_contact_rows_github_always_first() {
        let rows = contact_rows(&config_with_social("", ""));
        assert_eq!(rows[0].label, "GitHub");
        assert_eq!(rows[0].value, "https://github.com/octocat");
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn test_contact_rows_hide_empty_links() {
        let rows = contact_rows(&config_with_social("mail@example.com", ""));
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].label, "Email");
        assert_eq!(rows[1].value, "mail@example.com");
    }

    #[test]
    fn test_contact_list_renders_selection_marker() {
        let theme = Theme::default();
        let rows = contact_rows(&config_with_social("mail@example.com", "+1 555"));
        let area = Rect::new(0, 0, 60, 6);
        let mut buf = Buffer::empty(area);

        ContactList::new(&rows, &theme)
            .selected(1)
            .render(area, &mut buf);

        let row1: String = (0..60)
            .map(|x| {
                buf.cell((x, 1))
                    .map(|c| c.symbol().chars().next().unwrap_or(' '))
                    .unwrap_or(' ')
            })
            .collect();
        assert!(row1.starts_with('\u{25b8}'), "got: '{}'", row1);
        assert!(row1.contains("mail@example.com"), "got: '{}'", row1);
    }

    #[test]
    fn test_contact_list_reveal_limits_rows() {
        let theme = Theme::default();
        let rows = contact_rows(&config_with_social("mail@example.com", "+1 555"));
        let area = Rect::new(0, 0, 60, 6);
        let mut buf = Buffer::empty(area);

        ContactList::new(&rows, &theme)
            .reveal(1)
            .render(area, &mut buf);

        let row1: String = (0..60)
            .map(|x| {
                buf.cell((x, 1))
                    .map(|c| c.symbol().chars().next().unwrap_or(' '))
                    .unwrap_or(' ')
            })
            .collect();
        assert_eq!(row1.trim(), "", "second row should not be revealed yet");
    }
}
