//! Skills card: configured skill names as inline chips.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::Theme;

/// Skills card widget. Chips flow left to right and wrap line by line.
pub struct SkillsCard<'a> {
    /// Skill names in declaration order.
    skills: &'a [String],
    /// Number of chips already revealed by the stagger animation.
    reveal: usize,
    /// Theme for rendering colors.
    theme: &'a Theme,
}

impl<'a> SkillsCard<'a> {
    /// Creates a new skills card.
    #[must_use]
    pub fn new(skills: &'a [String], theme: &'a Theme) -> Self {
        Self {
            skills,
            reveal: skills.len(),
            theme,
        }
    }

    /// Limits how many chips are shown (staggered reveal).
    #[must_use]
    pub fn reveal(mut self, reveal: usize) -> Self {
        self.reveal = reveal;
        self
    }
}

impl Widget for SkillsCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let chip_style = Style::default()
            .fg(self.theme.card.text)
            .bg(self.theme.page.skeleton);

        let mut y = area.y;
        let mut x = area.x;
        for skill in self.skills.iter().take(self.reveal) {
            let chip = format!(" {skill} ");
            let width = chip.chars().count() as u16;

            if x + width > area.x + area.width && x > area.x {
                // Wrap to the next chip line
                x = area.x;
                y += 2;
            }
            if y >= area.y + area.height {
                break;
            }

            let line = Line::from(Span::styled(chip, chip_style));
            buf.set_line(x, y, &line, (area.x + area.width).saturating_sub(x));
            x += width + 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_to_string(buf: &Buffer, y: u16, width: u16) -> String {
        (0..width)
            .map(|x| {
                buf.cell((x, y))
                    .map(|c| c.symbol().chars().next().unwrap_or(' '))
                    .unwrap_or(' ')
            })
            .collect()
    }

    #[test]
    fn test_skills_render_inline() {
        let theme = Theme::default();
        let skills = vec!["Rust".to_string(), "SQL".to_string()];
        let area = Rect::new(0, 0, 40, 4);
        let mut buf = Buffer::empty(area);

        SkillsCard::new(&skills, &theme).render(area, &mut buf);

        let row = row_to_string(&buf, 0, 40);
        assert!(row.contains("Rust"), "got: '{}'", row);
        assert!(row.contains("SQL"), "got: '{}'", row);
    }

    #[test]
    fn test_skills_wrap_when_row_is_full() {
        let theme = Theme::default();
        let skills = vec!["Kubernetes".to_string(), "PostgreSQL".to_string()];
        let area = Rect::new(0, 0, 14, 4);
        let mut buf = Buffer::empty(area);

        SkillsCard::new(&skills, &theme).render(area, &mut buf);

        assert!(row_to_string(&buf, 0, 14).contains("Kubernetes"));
        assert!(row_to_string(&buf, 2, 14).contains("PostgreSQL"));
    }

    #[test]
    fn test_skills_reveal_budget() {
        let theme = Theme::default();
        let skills = vec!["Rust".to_string(), "SQL".to_string()];
        let area = Rect::new(0, 0, 40, 2);
        let mut buf = Buffer::empty(area);

        SkillsCard::new(&skills, &theme)
            .reveal(1)
            .render(area, &mut buf);

        let row = row_to_string(&buf, 0, 40);
        assert!(row.contains("Rust"));
        assert!(!row.contains("SQL"));
    }
}
