//! Project cards: GitHub repositories and external (static) projects.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::config::ExternalProject;
use crate::github::GithubRepo;
use crate::theme::Theme;
use crate::ui::text::{compact_count, truncate_to_width};

/// Lines each project card occupies, including the spacer.
pub const CARD_HEIGHT: usize = 4;

/// GitHub project list widget.
///
/// Repositories arrive already ordered (search order for automatic mode,
/// declaration order for manual mode) and are rendered as-is.
pub struct GithubProjects<'a> {
    /// Section heading from the config.
    heading: &'a str,
    /// Repositories in display order.
    repos: &'a [GithubRepo],
    /// First repository index shown (scrolling).
    scroll: usize,
    /// Number of cards already revealed by the stagger animation.
    reveal: usize,
    /// Theme for rendering colors.
    theme: &'a Theme,
}

impl<'a> GithubProjects<'a> {
    /// Creates a new GitHub project list.
    #[must_use]
    pub fn new(heading: &'a str, repos: &'a [GithubRepo], theme: &'a Theme) -> Self {
        Self {
            heading,
            repos,
            scroll: 0,
            reveal: repos.len(),
            theme,
        }
    }

    /// Sets the first visible repository.
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

    fn meta_line(repo: &GithubRepo, theme: &Theme, width: usize) -> Line<'static> {
        let mut meta = format!(
            "\u{2605} {}  \u{2442} {}",
            compact_count(repo.stargazers_count),
            compact_count(repo.forks_count)
        );
        if let Some(language) = &repo.language {
            meta.push_str(&format!("  {language}"));
        }
        if !repo.topics.is_empty() {
            meta.push_str("  ");
            meta.push_str(
                &repo
                    .topics
                    .iter()
                    .map(|t| format!("#{t}"))
                    .collect::<Vec<_>>()
                    .join(" "),
            );
        }

        Line::from(Span::styled(
            truncate_to_width(&meta, width),
            Style::default().fg(theme.card.muted),
        ))
    }
}

impl Widget for GithubProjects<'_> {
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
        for repo in self.repos.iter().take(self.reveal).skip(self.scroll) {
            if y + 1 > area.y + area.height {
                break;
            }

            let title = Line::from(Span::styled(
                truncate_to_width(&repo.name, width),
                Style::default()
                    .fg(self.theme.page.accent)
                    .add_modifier(Modifier::BOLD),
            ));
            buf.set_line(area.x, y, &title, area.width);

            if y + 1 < area.y + area.height {
                let description = repo.description.as_deref().unwrap_or("");
                let line = Line::from(Span::styled(
                    truncate_to_width(description, width),
                    Style::default().fg(self.theme.card.text),
                ));
                buf.set_line(area.x, y + 1, &line, area.width);
            }

            if y + 2 < area.y + area.height {
                buf.set_line(
                    area.x,
                    y + 2,
                    &Self::meta_line(repo, self.theme, width),
                    area.width,
                );
            }

            y += CARD_HEIGHT as u16;
        }
    }
}

/// External (static card) project list widget. No network data involved.
pub struct ExternalProjects<'a> {
    /// Section heading from the config.
    heading: &'a str,
    /// Cards in declaration order.
    projects: &'a [ExternalProject],
    /// Number of cards already revealed by the stagger animation.
    reveal: usize,
    /// Theme for rendering colors.
    theme: &'a Theme,
}

impl<'a> ExternalProjects<'a> {
    /// Creates a new external project list.
    #[must_use]
    pub fn new(heading: &'a str, projects: &'a [ExternalProject], theme: &'a Theme) -> Self {
        Self {
            heading,
            projects,
            reveal: projects.len(),
            theme,
        }
    }

    /// Limits how many cards are shown (staggered reveal).
    #[must_use]
    pub fn reveal(mut self, reveal: usize) -> Self {
        self.reveal = reveal;
        self
    }
}

impl Widget for ExternalProjects<'_> {
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
        for project in self.projects.iter().take(self.reveal) {
            if y + 1 > area.y + area.height {
                break;
            }

            let title = Line::from(Span::styled(
                truncate_to_width(&project.title, width),
                Style::default()
                    .fg(self.theme.page.accent)
                    .add_modifier(Modifier::BOLD),
            ));
            buf.set_line(area.x, y, &title, area.width);

            if y + 1 < area.y + area.height && !project.description.is_empty() {
                let line = Line::from(Span::styled(
                    truncate_to_width(&project.description, width),
                    Style::default().fg(self.theme.card.text),
                ));
                buf.set_line(area.x, y + 1, &line, area.width);
            }

            if y + 2 < area.y + area.height && !project.link.is_empty() {
                let line = Line::from(Span::styled(
                    truncate_to_width(&project.link, width),
                    Style::default().fg(self.theme.card.muted),
                ));
                buf.set_line(area.x, y + 2, &line, area.width);
            }

            y += CARD_HEIGHT as u16;
        }
    }
}
