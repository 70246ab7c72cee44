//! Main application state and event handling.
//!
//! Orchestrates the load cycle, section navigation, theme switching, and
//! copy-to-clipboard. All render state lives here on the UI thread; the
//! background fetcher only talks through its mpsc channel pair.

mod input;
mod render;

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event};
use tracing::{info, warn};

use crate::clipboard::Clipboard;
use crate::config::SanitizedConfig;
use crate::errors::{self, ErrorDescriptor};
use crate::github::{BackgroundFetcher, FetchResult, PortfolioData};
use crate::theme::{ThemeManager, save_theme};
use crate::ui::{ContactRow, ThemeSelector, contact_rows};

/// Event poll timeout in milliseconds.
const POLL_TIMEOUT_MS: u64 = 50;

/// Update ticks between two revealed items.
const REVEAL_TICKS_PER_ITEM: usize = 2;

/// Page section, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// Hero, contact details, skills.
    Overview,
    /// GitHub and external project cards.
    Projects,
    /// Work history, education, certifications.
    Experience,
    /// Papers and talks.
    Publications,
    /// Blog articles.
    Articles,
}

impl Section {
    /// Tab label and status bar badge text.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Projects => "Projects",
            Self::Experience => "Experience",
            Self::Publications => "Publications",
            Self::Articles => "Articles",
        }
    }
}

/// Application mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppMode {
    /// Normal page navigation.
    #[default]
    Page,
    /// Theme selector popup is open.
    ThemeSelector,
}

/// Page load phase. The page is all-content or all-error.
#[derive(Debug)]
pub enum LoadPhase {
    /// Fetch in flight; sections render skeleton placeholders.
    Loading,
    /// Load cycle finished; sections render content.
    Ready(PortfolioData),
    /// Load cycle failed; the whole page is the error state.
    Failed(ErrorDescriptor),
}

/// Application state.
pub struct App {
    /// Sanitized configuration; `None` when sanitization itself failed.
    config: Option<SanitizedConfig>,
    /// Theme manager owning the current theme.
    theme_manager: ThemeManager,
    /// Clipboard for the copy-to-clipboard rows.
    clipboard: Clipboard,
    /// Background fetcher; `None` when no load cycle will ever run.
    fetcher: Option<BackgroundFetcher>,
    /// Current load phase.
    phase: LoadPhase,
    /// Current app mode.
    mode: AppMode,
    /// Theme selector state while the popup is open.
    theme_selector: Option<ThemeSelector>,
    /// Index into the visible section list.
    active_section: usize,
    /// Contact rows for the Overview section, precomputed from config.
    contact_rows: Vec<ContactRow>,
    /// Selected contact row in Overview.
    selected_contact: usize,
    /// Scroll offset of the active section's list.
    scroll: usize,
    /// Ticks since the active section (or the loaded page) appeared.
    reveal_ticks: usize,
    /// Status message.
    status: String,
    /// Running flag.
    running: bool,
}

impl App {
    /// Creates the application and starts the load cycle against the
    /// public GitHub API.
    #[must_use]
    pub fn new(config: SanitizedConfig) -> Self {
        let fetcher = BackgroundFetcher::new(config.clone());
        fetcher.request_load();
        Self::build(Some(config), Some(fetcher), LoadPhase::Loading)
    }

    /// Creates an application stuck on the full-page error state. Used
    /// when the config fails before any network call.
    #[must_use]
    pub fn failed(descriptor: ErrorDescriptor) -> Self {
        Self::build(None, None, LoadPhase::Failed(descriptor))
    }

    fn build(
        config: Option<SanitizedConfig>,
        fetcher: Option<BackgroundFetcher>,
        phase: LoadPhase,
    ) -> Self {
        let theme_manager = config
            .as_ref()
            .map_or_else(ThemeManager::default, |c| ThemeManager::from_settings(&c.theme));
        let contact_rows = config.as_ref().map(contact_rows).unwrap_or_default();

        Self {
            config,
            theme_manager,
            clipboard: Clipboard::new(),
            fetcher,
            phase,
            mode: AppMode::default(),
            theme_selector: None,
            active_section: 0,
            contact_rows,
            selected_contact: 0,
            scroll: 0,
            reveal_ticks: 0,
            status: String::new(),
            running: true,
        }
    }

    /// Returns true if the app is running.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Requests to quit the application.
    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Sets the status message.
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status = msg.into();
    }

    /// Sections that currently have content to show.
    ///
    /// Empty sections are hidden: while loading the decision comes from
    /// the config alone, once loaded the fetched data counts too.
    #[must_use]
    pub fn visible_sections(&self) -> Vec<Section> {
        let Some(config) = &self.config else {
            return vec![Section::Overview];
        };

        let mut sections = vec![Section::Overview];

        let (github_projects, articles) = match &self.phase {
            LoadPhase::Ready(data) => (!data.projects.is_empty(), !data.articles.is_empty()),
            _ => (
                config.projects.github.display,
                !config.blog.username.is_empty(),
            ),
        };

        if github_projects || !config.projects.external.projects.is_empty() {
            sections.push(Section::Projects);
        }
        if !config.experiences.is_empty()
            || !config.educations.is_empty()
            || !config.certifications.is_empty()
        {
            sections.push(Section::Experience);
        }
        if !config.publications.is_empty() {
            sections.push(Section::Publications);
        }
        if articles {
            sections.push(Section::Articles);
        }

        sections
    }

    /// Returns the active section.
    #[must_use]
    pub fn active_section(&self) -> Section {
        let sections = self.visible_sections();
        sections
            .get(self.active_section.min(sections.len().saturating_sub(1)))
            .copied()
            .unwrap_or(Section::Overview)
    }

    /// Jumps to the section at the given visible index.
    pub(crate) fn activate_section(&mut self, index: usize) {
        let count = self.visible_sections().len();
        if index >= count || index == self.active_section {
            return;
        }
        self.active_section = index;
        self.scroll = 0;
        self.reveal_ticks = 0;
        self.status.clear();
    }

    /// Number of items the stagger animation has revealed so far.
    #[must_use]
    pub(crate) fn revealed_items(&self) -> usize {
        self.reveal_ticks / REVEAL_TICKS_PER_ITEM
    }

    /// Item count of the active section's scrollable list, for clamping.
    pub(crate) fn active_list_len(&self) -> usize {
        match self.active_section() {
            Section::Overview => self.contact_rows.len(),
            Section::Projects => match &self.phase {
                LoadPhase::Ready(data) => data.projects.len(),
                _ => 0,
            },
            Section::Experience => self
                .config
                .as_ref()
                .map_or(0, |c| c.experiences.len()),
            Section::Publications => self
                .config
                .as_ref()
                .map_or(0, |c| c.publications.len()),
            Section::Articles => match &self.phase {
                LoadPhase::Ready(data) => data.articles.len(),
                _ => 0,
            },
        }
    }

    /// Copies the selected contact row to the clipboard.
    pub(crate) fn copy_selected_contact(&mut self) {
        let Some(row) = self.contact_rows.get(self.selected_contact).cloned() else {
            return;
        };
        match self.clipboard.copy(&row.value) {
            Ok(()) => {
                info!("[APP] Copied {} to clipboard", row.label);
                self.set_status(format!("Copied {}", row.label));
            }
            Err(e) => {
                warn!("[APP] Copy failed: {}", e);
                self.set_status(format!("Copy failed: {e}"));
            }
        }
    }

    /// Opens the theme selector popup, unless the config disables it.
    pub(crate) fn open_theme_selector(&mut self) {
        let switchable = self
            .config
            .as_ref()
            .is_some_and(|c| !c.theme.disable_switch);
        if !switchable {
            return;
        }

        self.theme_selector = Some(ThemeSelector::new(
            self.theme_manager.current_preset(),
            self.theme_manager.allowed(),
        ));
        self.mode = AppMode::ThemeSelector;
    }

    /// Applies the highlighted theme and persists the choice.
    pub(crate) fn apply_selected_theme(&mut self) {
        if let Some(selector) = self.theme_selector.take() {
            let preset = selector.selected();
            self.theme_manager.set_preset(preset);
            if let Err(e) = save_theme(preset) {
                warn!("[APP] Failed to persist theme choice: {}", e);
            }
            self.set_status(format!("Theme: {}", preset.name()));
        }
        self.mode = AppMode::Page;
    }

    /// Closes the selector and restores the theme it opened with.
    pub(crate) fn cancel_theme_selector(&mut self) {
        if let Some(selector) = self.theme_selector.take() {
            self.theme_manager.set_preset(selector.original());
        }
        self.mode = AppMode::Page;
    }

    /// Processes events and updates state.
    ///
    /// # Errors
    /// Returns error if event processing fails.
    pub fn update(&mut self) -> io::Result<()> {
        self.poll_fetcher();

        if matches!(self.phase, LoadPhase::Ready(_)) {
            self.reveal_ticks = self.reveal_ticks.saturating_add(1);
        }

        if event::poll(Duration::from_millis(POLL_TIMEOUT_MS))? {
            match event::read()? {
                Event::Key(key) => self.handle_key(key),
                Event::Resize(_, _) => {}
                _ => {}
            }
        }

        Ok(())
    }

    /// Polls the background fetcher for a finished load cycle.
    fn poll_fetcher(&mut self) {
        let Some(fetcher) = &self.fetcher else {
            return;
        };
        let Some(result) = fetcher.poll_result() else {
            return;
        };

        match result {
            FetchResult::Loaded(data) => {
                info!(
                    "[APP] Page loaded: {} projects, {} articles",
                    data.projects.len(),
                    data.articles.len()
                );
                self.phase = LoadPhase::Ready(data);
                self.reveal_ticks = 0;
            }
            FetchResult::Failed(error) => {
                warn!("[APP] Page load failed: {}", error);
                self.phase = LoadPhase::Failed(errors::classify(&error));
            }
        }
    }

    /// Shuts down the application.
    pub fn shutdown(&mut self) {
        info!("[APP] Shutting down");
        self.fetcher = None;
    }
}
