//! Rendering methods for the App.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph};

use crate::config::SanitizedConfig;
use crate::github::PortfolioData;
use crate::ui::{
    Articles, ContactList, ErrorPage, ExternalProjects, GithubProjects, Hero, Publications,
    SectionTabBar, Skeleton, SkillsCard, StatusBar, ThemeSelectorWidget, Timeline, TimelineEntry,
    timeline::ENTRY_HEIGHT,
};

use super::{App, AppMode, LoadPhase, Section};

/// Skeleton rows shown while the load cycle is in flight.
const SKELETON_ROWS: usize = 6;

impl App {
    /// Renders the application.
    pub fn render(&self, frame: &mut ratatui::Frame) {
        let area = frame.area();

        // Clear the frame and repaint the page canvas to prevent ghost
        // cells when the theme changes
        frame.render_widget(Clear, area);
        let theme = self.theme_manager.current().clone();
        let clear_style = Style::default()
            .bg(theme.page.background)
            .fg(Color::Reset);
        let buf = frame.buffer_mut();
        for y in area.y..area.y + area.height {
            for x in area.x..area.x + area.width {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.reset();
                    cell.set_char(' ');
                    cell.set_style(clear_style);
                }
            }
        }

        let show_footer = matches!(self.phase, LoadPhase::Ready(_))
            && self
                .config
                .as_ref()
                .is_some_and(|c| !c.footer.is_empty());

        let mut constraints = vec![Constraint::Length(1), Constraint::Min(1)];
        if show_footer {
            constraints.push(Constraint::Length(1));
        }
        constraints.push(Constraint::Length(1));

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        self.render_tab_bar(frame, chunks[0]);

        let body = chunks[1].inner(Margin {
            horizontal: 2,
            vertical: 1,
        });
        match &self.phase {
            LoadPhase::Loading => {
                frame.render_widget(Skeleton::new(SKELETON_ROWS, &theme.page), body);
            }
            LoadPhase::Failed(descriptor) => {
                frame.render_widget(ErrorPage::new(descriptor, &theme), body);
            }
            LoadPhase::Ready(data) => {
                if let Some(config) = &self.config {
                    self.render_section(frame, body, config, data);
                }
            }
        }

        if show_footer {
            if let Some(config) = &self.config {
                let footer = Paragraph::new(Line::from(Span::styled(
                    config.footer.clone(),
                    Style::default().fg(theme.page.muted),
                )))
                .alignment(Alignment::Center);
                frame.render_widget(footer, chunks[chunks.len() - 2]);
            }
        }

        self.render_status_bar(frame, chunks[chunks.len() - 1]);

        if self.mode == AppMode::ThemeSelector {
            if let Some(selector) = &self.theme_selector {
                frame.render_widget(ThemeSelectorWidget::new(selector, &theme.popup), area);
            }
        }
    }

    fn render_tab_bar(&self, frame: &mut ratatui::Frame, area: Rect) {
        let theme = self.theme_manager.current();
        let sections = self.visible_sections();
        let labels: Vec<&str> = sections.iter().map(|s| s.title()).collect();
        let active = self.active_section.min(sections.len().saturating_sub(1));
        frame.render_widget(SectionTabBar::new(&labels, active, &theme.tabs), area);
    }

    fn render_status_bar(&self, frame: &mut ratatui::Frame, area: Rect) {
        let theme = self.theme_manager.current();
        let loading = if matches!(self.phase, LoadPhase::Loading) {
            self.fetcher.as_ref().and_then(|f| f.status().label())
        } else {
            None
        };
        let show_theme_hint = self
            .config
            .as_ref()
            .is_some_and(|c| !c.theme.disable_switch);

        let bar = StatusBar::new(self.active_section().title(), &theme.statusbar)
            .message(&self.status)
            .theme_name(theme.name())
            .loading(loading)
            .show_theme_hint(show_theme_hint);
        frame.render_widget(bar, area);
    }

    fn render_section(
        &self,
        frame: &mut ratatui::Frame,
        area: Rect,
        config: &SanitizedConfig,
        data: &PortfolioData,
    ) {
        match self.active_section() {
            Section::Overview => self.render_overview(frame, area, config, data),
            Section::Projects => self.render_projects(frame, area, config, data),
            Section::Experience => self.render_experience(frame, area, config),
            Section::Publications => self.render_publications(frame, area, config),
            Section::Articles => self.render_articles(frame, area, data),
        }
    }

    fn render_overview(
        &self,
        frame: &mut ratatui::Frame,
        area: Rect,
        config: &SanitizedConfig,
        data: &PortfolioData,
    ) {
        let theme = self.theme_manager.current();
        let contact_height = self.contact_rows.len().min(12) as u16;

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(7),
                Constraint::Length(1),
                Constraint::Length(contact_height),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(area);

        let hero = Hero::new(&data.profile, &config.github.username, theme)
            .ring(config.theme.display_avatar_ring);
        frame.render_widget(hero, chunks[0]);

        let revealed = self.revealed_items();
        let contacts = ContactList::new(&self.contact_rows, theme)
            .selected(self.selected_contact)
            .reveal(revealed);
        frame.render_widget(contacts, chunks[2]);

        if !config.skills.is_empty() {
            let skills = SkillsCard::new(&config.skills, theme)
                .reveal(revealed.saturating_sub(self.contact_rows.len()));
            frame.render_widget(skills, chunks[4]);
        }
    }

    fn render_projects(
        &self,
        frame: &mut ratatui::Frame,
        area: Rect,
        config: &SanitizedConfig,
        data: &PortfolioData,
    ) {
        let theme = self.theme_manager.current();
        let revealed = self.revealed_items();
        let has_github = !data.projects.is_empty();
        let has_external = !config.projects.external.projects.is_empty();

        let (github_area, external_area) = if has_github && has_external {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
                .split(area);
            (chunks[0], chunks[1])
        } else {
            (area, area)
        };

        if has_github {
            let projects = GithubProjects::new(
                &config.projects.github.header,
                &data.projects,
                theme,
            )
            .scroll(self.scroll)
            .reveal(revealed);
            frame.render_widget(projects, github_area);
        }

        if has_external {
            let external = ExternalProjects::new(
                &config.projects.external.header,
                &config.projects.external.projects,
                theme,
            )
            .reveal(revealed.saturating_sub(data.projects.len()));
            frame.render_widget(external, external_area);
        }
    }

    fn render_experience(
        &self,
        frame: &mut ratatui::Frame,
        area: Rect,
        config: &SanitizedConfig,
    ) {
        let theme = self.theme_manager.current();
        let revealed = self.revealed_items();

        let experiences: Vec<TimelineEntry> =
            config.experiences.iter().map(TimelineEntry::from).collect();
        let educations: Vec<TimelineEntry> =
            config.educations.iter().map(TimelineEntry::from).collect();
        let certifications: Vec<TimelineEntry> = config
            .certifications
            .iter()
            .map(TimelineEntry::from)
            .collect();

        let groups: Vec<(&str, &Vec<TimelineEntry>)> = [
            ("Experience", &experiences),
            ("Education", &educations),
            ("Certifications", &certifications),
        ]
        .into_iter()
        .filter(|(_, entries)| !entries.is_empty())
        .collect();

        let mut constraints: Vec<Constraint> = groups
            .iter()
            .map(|(_, entries)| Constraint::Length((2 + entries.len() * ENTRY_HEIGHT) as u16))
            .collect();
        constraints.push(Constraint::Min(0));

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        let mut shown = 0;
        for (i, (heading, entries)) in groups.iter().enumerate() {
            // Only the first group scrolls; the rest stack below it
            let scroll = if i == 0 { self.scroll } else { 0 };
            let timeline = Timeline::new(heading, entries, theme)
                .scroll(scroll)
                .reveal(revealed.saturating_sub(shown));
            frame.render_widget(timeline, chunks[i]);
            shown += entries.len();
        }
    }

    fn render_publications(
        &self,
        frame: &mut ratatui::Frame,
        area: Rect,
        config: &SanitizedConfig,
    ) {
        let theme = self.theme_manager.current();
        let publications = Publications::new("Publications", &config.publications, theme)
            .scroll(self.scroll)
            .reveal(self.revealed_items());
        frame.render_widget(publications, area);
    }

    fn render_articles(&self, frame: &mut ratatui::Frame, area: Rect, data: &PortfolioData) {
        let theme = self.theme_manager.current();
        let articles = Articles::new("Articles", &data.articles, theme)
            .scroll(self.scroll)
            .reveal(self.revealed_items());
        frame.render_widget(articles, area);
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::{loaded_app, test_data};
    use super::*;
    use crate::errors::ErrorDescriptor;
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(app: &App) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| app.render(frame)).unwrap();

        let buffer = terminal.backend().buffer().clone();
        let mut out = String::new();
        for y in 0..24 {
            for x in 0..80 {
                out.push(
                    buffer
                        .cell((x, y))
                        .map(|c| c.symbol().chars().next().unwrap_or(' '))
                        .unwrap_or(' '),
                );
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_render_ready_overview() {
        let mut app = loaded_app(test_data());
        app.reveal_ticks = 100;

        let content = draw(&app);
        assert!(content.contains("Mona Lisa"));
        assert!(content.contains("@octocat"));
        assert!(content.contains("OVERVIEW"));
        assert!(content.contains("Rust"));
    }

    #[test]
    fn test_render_failed_shows_error_page() {
        let app = App::failed(ErrorDescriptor::invalid_config());

        let content = draw(&app);
        assert!(content.contains("Invalid config"));
        assert!(content.contains("press q to quit"));
    }

    #[test]
    fn test_render_loading_shows_skeleton() {
        let app = App::build(
            Some(super::super::tests::test_config()),
            None,
            LoadPhase::Loading,
        );

        let content = draw(&app);
        assert!(content.contains('\u{2583}'));
    }
}
