//! Skeleton loading placeholders.
//!
//! Dim blocks standing in for content while the fetch is in flight, the
//! terminal analogue of the web page's pulsing placeholder shapes.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::Widget,
};

use crate::theme::PageTheme;

/// Skeleton placeholder widget.
///
/// Renders rows of block glyphs with varying widths so the page reads as
/// "content is coming" rather than empty.
pub struct Skeleton<'a> {
    /// Number of placeholder rows (capped by the area height).
    rows: usize,
    /// Theme for rendering colors.
    theme: &'a PageTheme,
}

impl<'a> Skeleton<'a> {
    /// Creates a skeleton with the given number of placeholder rows.
    #[must_use]
    pub fn new(rows: usize, theme: &'a PageTheme) -> Self {
        Self { rows, theme }
    }
}

impl Widget for Skeleton<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let style = Style::default().fg(self.theme.skeleton);
        let rows = self.rows.min(area.height as usize);

        for row in 0..rows {
            // Alternate widths: full-ish bar, then a shorter one
            let fraction = match row % 3 {
                0 => 0.9,
                1 => 0.6,
                _ => 0.75,
            };
            let width = ((f64::from(area.width) * fraction) as u16).max(1);
            let y = area.y + (row as u16) * 2;
            if y >= area.y + area.height {
                break;
            }

            for x in area.x..area.x + width.min(area.width) {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_char('\u{2583}');
                    cell.set_style(style);
                }
            }
        }
    }
}
