//! Theme selector popup for switching color themes.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use crate::theme::{PopupTheme, ThemePreset};

/// Theme selector state. Only the presets the config offers are listed;
/// cycling previews the highlighted theme live.
pub struct ThemeSelector {
    /// Presets in selector order.
    presets: Vec<ThemePreset>,
    /// Currently highlighted preset index.
    selected_index: usize,
    /// Preset active when the selector was opened (for cancel).
    original: ThemePreset,
}

impl ThemeSelector {
    /// Creates a new selector over the offered presets, starting at the
    /// currently active one.
    #[must_use]
    pub fn new(current: ThemePreset, offered: &[ThemePreset]) -> Self {
        let presets = if offered.is_empty() {
            vec![current]
        } else {
            offered.to_vec()
        };
        let selected_index = presets.iter().position(|p| *p == current).unwrap_or(0);

        Self {
            presets,
            selected_index,
            original: current,
        }
    }

    /// Cycles to the next preset.
    pub fn next(&mut self) {
        self.selected_index = (self.selected_index + 1) % self.presets.len();
    }

    /// Cycles to the previous preset.
    pub fn prev(&mut self) {
        if self.selected_index == 0 {
            self.selected_index = self.presets.len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Returns the highlighted preset.
    #[must_use]
    pub fn selected(&self) -> ThemePreset {
        self.presets[self.selected_index]
    }

    /// Returns the preset that was active when the selector opened.
    #[must_use]
    pub fn original(&self) -> ThemePreset {
        self.original
    }

    /// Returns the presets with their selection state.
    #[must_use]
    pub fn presets_with_selection(&self) -> Vec<(ThemePreset, bool)> {
        self.presets
            .iter()
            .enumerate()
            .map(|(i, p)| (*p, i == self.selected_index))
            .collect()
    }

    /// Returns the number of listed presets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.presets.len()
    }

    /// Returns whether the selector lists no presets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}

/// Widget rendering the theme selector popup.
pub struct ThemeSelectorWidget<'a> {
    selector: &'a ThemeSelector,
    theme: &'a PopupTheme,
}

impl<'a> ThemeSelectorWidget<'a> {
    /// Creates a new theme selector widget.
    #[must_use]
    pub fn new(selector: &'a ThemeSelector, theme: &'a PopupTheme) -> Self {
        Self { selector, theme }
    }

    /// Calculates the centered popup area.
    fn popup_area(&self, area: Rect) -> Rect {
        let width = 36_u16.min(area.width.saturating_sub(4));
        let height = (self.selector.len() as u16 + 3).min(area.height.saturating_sub(2));

        let x = area.x + (area.width.saturating_sub(width)) / 2;
        let y = area.y + (area.height.saturating_sub(height)) / 2;

        Rect::new(x, y, width, height)
    }
}

impl Widget for ThemeSelectorWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup_area = self.popup_area(area);

        Clear.render(popup_area, buf);
        for y in popup_area.y..popup_area.bottom() {
            for x in popup_area.x..popup_area.right() {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_bg(self.theme.background);
                }
            }
        }

        let block = Block::default()
            .title(" Theme ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(
                Style::default()
                    .fg(self.theme.border)
                    .bg(self.theme.background),
            );

        let inner = block.inner(popup_area);
        block.render(popup_area, buf);

        let preset_count = self.selector.len();
        let mut constraints: Vec<Constraint> = Vec::with_capacity(preset_count + 1);
        for _ in 0..preset_count {
            constraints.push(Constraint::Length(1));
        }
        constraints.push(Constraint::Length(1));

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(inner);

        for (i, (preset, is_selected)) in
            self.selector.presets_with_selection().iter().enumerate()
        {
            if i >= chunks.len() {
                break;
            }

            let (style, prefix) = if *is_selected {
                (
                    Style::default()
                        .fg(self.theme.selected_fg)
                        .bg(self.theme.selected_bg)
                        .add_modifier(Modifier::BOLD),
                    "\u{25b8} ",
                )
            } else {
                (
                    Style::default()
                        .fg(self.theme.foreground)
                        .bg(self.theme.background),
                    "  ",
                )
            };

            Paragraph::new(format!("{}{}", prefix, preset.name()))
                .style(style)
                .alignment(Alignment::Center)
                .render(chunks[i], buf);
        }

        if chunks.len() > preset_count {
            let key = Style::default()
                .fg(self.theme.selected_bg)
                .bg(self.theme.background);
            let label = Style::default()
                .fg(self.theme.foreground)
                .bg(self.theme.background);
            let instructions = Line::from(vec![
                Span::styled("\u{2191}\u{2193}", key),
                Span::styled(" preview  ", label),
                Span::styled("Enter", key),
                Span::styled(" apply  ", label),
                Span::styled("Esc", key),
                Span::styled(" cancel", label),
            ]);
            Paragraph::new(instructions)
                .alignment(Alignment::Center)
                .render(chunks[preset_count], buf);
        }
    }
}
