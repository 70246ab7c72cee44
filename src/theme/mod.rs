//! Theme system for gitfolio.
//!
//! Built-in presets plus a manager owning the current theme. The manager
//! lives in the top-level `App` and is passed to rendering; there is no
//! process-global theme state.

pub mod component;
pub mod persistence;
pub mod preset;

pub use component::{CardTheme, PageTheme, PopupTheme, StatusBarTheme, TabTheme, Theme};
pub use persistence::{load_saved_theme, save_theme, theme_file_path};
pub use preset::ThemePreset;

use crate::config::ThemeSettings;

/// Theme manager that handles theme selection within the sanitized list.
#[derive(Debug, Clone)]
pub struct ThemeManager {
    /// Current active theme.
    current: Theme,
    /// Preset behind the current theme.
    current_preset: ThemePreset,
    /// Presets the selector may offer. Never empty.
    allowed: Vec<ThemePreset>,
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self {
            current: Theme::default(),
            current_preset: ThemePreset::Dark,
            allowed: ThemePreset::all().to_vec(),
        }
    }
}

impl ThemeManager {
    /// Creates a theme manager with a specific preset and the full
    /// preset list.
    #[must_use]
    pub fn with_preset(preset: ThemePreset) -> Self {
        Self {
            current: preset.to_theme(),
            current_preset: preset,
            ..Default::default()
        }
    }

    /// Creates a theme manager from the sanitized theme settings.
    ///
    /// The initial preset is resolved in priority order: the persisted
    /// last choice, then the terminal background heuristic when
    /// `respect_prefers_color_scheme` is set, then the configured default.
    #[must_use]
    pub fn from_settings(settings: &ThemeSettings) -> Self {
        let initial = resolve_initial_preset(
            settings,
            persistence::load_saved_theme(),
            std::env::var("COLORFGBG").ok().as_deref(),
        );
        Self {
            current: initial.to_theme(),
            current_preset: initial,
            allowed: settings.themes.clone(),
        }
    }

    /// Returns the current theme.
    #[must_use]
    pub fn current(&self) -> &Theme {
        &self.current
    }

    /// Returns the preset behind the current theme.
    #[must_use]
    pub fn current_preset(&self) -> ThemePreset {
        self.current_preset
    }

    /// Returns the presets the selector may offer.
    #[must_use]
    pub fn allowed(&self) -> &[ThemePreset] {
        &self.allowed
    }

    /// Sets the theme from a preset. Presets outside the sanitized list
    /// are ignored.
    pub fn set_preset(&mut self, preset: ThemePreset) {
        if !self.allowed.contains(&preset) {
            return;
        }
        self.current = preset.to_theme();
        self.current_preset = preset;
    }
}

/// Resolves the startup preset from the settings, the persisted choice,
/// and the COLORFGBG environment value. Pure so tests can drive it.
#[must_use]
pub fn resolve_initial_preset(
    settings: &ThemeSettings,
    saved: Option<ThemePreset>,
    colorfgbg: Option<&str>,
) -> ThemePreset {
    // A persisted choice wins, but only if the config still offers it
    if let Some(preset) = saved {
        if settings.themes.contains(&preset) {
            return preset;
        }
    }

    if settings.respect_prefers_color_scheme {
        if let Some(preset) = preset_from_colorfgbg(colorfgbg) {
            if settings.themes.contains(&preset) {
                return preset;
            }
        }
    }

    settings.default_theme
}

/// Maps the COLORFGBG convention ("fg;bg", bg 0-15) to light or dark.
/// The terminal analogue of the prefers-color-scheme media query.
fn preset_from_colorfgbg(value: Option<&str>) -> Option<ThemePreset> {
    let bg: u8 = value?.rsplit(';').next()?.trim().parse().ok()?;
    match bg {
        7 | 15 => Some(ThemePreset::Light),
        _ => Some(ThemePreset::Dark),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(themes: Vec<ThemePreset>, respect: bool) -> ThemeSettings {
        ThemeSettings {
            default_theme: themes[0],
            disable_switch: false,
            respect_prefers_color_scheme: respect,
            display_avatar_ring: true,
            themes,
        }
    }

    #[test]
    fn test_manager_with_preset() {
        let manager = ThemeManager::with_preset(ThemePreset::Dracula);
        assert_eq!(manager.current().name(), "dracula");
        assert_eq!(manager.current_preset(), ThemePreset::Dracula);
    }

    #[test]
    fn test_set_preset_restricted_to_allowed() {
        let mut manager = ThemeManager {
            allowed: vec![ThemePreset::Dark, ThemePreset::Nord],
            ..Default::default()
        };

        manager.set_preset(ThemePreset::Nord);
        assert_eq!(manager.current().name(), "nord");

        // Dracula is not offered, the call is a no-op
        manager.set_preset(ThemePreset::Dracula);
        assert_eq!(manager.current().name(), "nord");
    }

    #[test]
    fn test_resolve_saved_choice_wins() {
        let s = settings(vec![ThemePreset::Dark, ThemePreset::Nord], false);
        assert_eq!(
            resolve_initial_preset(&s, Some(ThemePreset::Nord), None),
            ThemePreset::Nord
        );
    }

    #[test]
    fn test_resolve_saved_choice_must_be_offered() {
        let s = settings(vec![ThemePreset::Dark], false);
        assert_eq!(
            resolve_initial_preset(&s, Some(ThemePreset::Nord), None),
            ThemePreset::Dark
        );
    }

    #[test]
    fn test_resolve_colorfgbg_heuristic() {
        let s = settings(vec![ThemePreset::Light, ThemePreset::Dark], true);
        assert_eq!(
            resolve_initial_preset(&s, None, Some("0;15")),
            ThemePreset::Light
        );
        assert_eq!(
            resolve_initial_preset(&s, None, Some("15;0")),
            ThemePreset::Dark
        );
        // Unparsable value falls through to the default
        assert_eq!(
            resolve_initial_preset(&s, None, Some("garbage")),
            ThemePreset::Light
        );
    }

    #[test]
    fn test_resolve_heuristic_requires_opt_in() {
        let s = settings(vec![ThemePreset::Dark, ThemePreset::Light], false);
        assert_eq!(
            resolve_initial_preset(&s, None, Some("0;15")),
            ThemePreset::Dark
        );
    }
}
