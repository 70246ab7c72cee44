//! Input handling for the application.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::{App, AppMode, LoadPhase, Section};

impl App {
    /// Handles a key event.
    pub(super) fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match self.mode {
            AppMode::Page => self.handle_page_key(key),
            AppMode::ThemeSelector => self.handle_theme_selector_key(key),
        }
    }

    /// Handles keys while the page is in front.
    fn handle_page_key(&mut self, key: KeyEvent) {
        if key.modifiers == KeyModifiers::CONTROL && key.code == KeyCode::Char('c') {
            self.quit();
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.quit(),
            KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => self.next_section(),
            KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => self.prev_section(),
            KeyCode::Char(c @ '1'..='9') => {
                let index = (c as usize) - ('1' as usize);
                self.activate_section(index);
            }
            KeyCode::Down | KeyCode::Char('j') => self.move_down(),
            KeyCode::Up | KeyCode::Char('k') => self.move_up(),
            KeyCode::Char('c') | KeyCode::Enter => {
                if self.active_section() == Section::Overview
                    && matches!(self.phase, LoadPhase::Ready(_))
                {
                    self.copy_selected_contact();
                }
            }
            KeyCode::Char('t') => self.open_theme_selector(),
            _ => {}
        }
    }

    /// Handles keys while the theme selector popup is open.
    fn handle_theme_selector_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                if let Some(selector) = self.theme_selector.as_mut() {
                    selector.prev();
                    let preview = selector.selected();
                    self.theme_manager.set_preset(preview);
                }
            }
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('t') => {
                if let Some(selector) = self.theme_selector.as_mut() {
                    selector.next();
                    let preview = selector.selected();
                    self.theme_manager.set_preset(preview);
                }
            }
            KeyCode::Enter => self.apply_selected_theme(),
            KeyCode::Esc | KeyCode::Char('q') => self.cancel_theme_selector(),
            _ => {}
        }
    }

    fn next_section(&mut self) {
        let count = self.visible_sections().len();
        if count > 1 {
            self.activate_section((self.active_section + 1) % count);
        }
    }

    fn prev_section(&mut self) {
        let count = self.visible_sections().len();
        if count > 1 {
            let index = if self.active_section == 0 {
                count - 1
            } else {
                self.active_section - 1
            };
            self.activate_section(index);
        }
    }

    /// Moves the contact selection (Overview) or scrolls the list down.
    fn move_down(&mut self) {
        let len = self.active_list_len();
        if len == 0 {
            return;
        }

        if self.active_section() == Section::Overview {
            self.selected_contact = (self.selected_contact + 1).min(len - 1);
        } else {
            self.scroll = (self.scroll + 1).min(len - 1);
        }
    }

    /// Moves the contact selection (Overview) or scrolls the list up.
    fn move_up(&mut self) {
        if self.active_section() == Section::Overview {
            self.selected_contact = self.selected_contact.saturating_sub(1);
        } else {
            self.scroll = self.scroll.saturating_sub(1);
        }
    }
}
