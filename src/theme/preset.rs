//! Built-in theme presets.
//!
//! Provides pre-configured themes like dark, light, dracula, etc.

use ratatui::style::Color;

use super::component::{CardTheme, PageTheme, PopupTheme, StatusBarTheme, TabTheme, Theme};

/// Available built-in theme presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemePreset {
    /// Dark theme (default).
    Dark,
    /// Light theme.
    Light,
    /// Dracula theme.
    Dracula,
    /// Gruvbox Dark theme.
    Gruvbox,
    /// Nord theme.
    Nord,
    /// Synthwave theme.
    Synthwave,
    /// Lofi theme.
    Lofi,
}

impl ThemePreset {
    /// Returns all available presets.
    #[must_use]
    pub fn all() -> &'static [ThemePreset] {
        &[
            ThemePreset::Dark,
            ThemePreset::Light,
            ThemePreset::Dracula,
            ThemePreset::Gruvbox,
            ThemePreset::Nord,
            ThemePreset::Synthwave,
            ThemePreset::Lofi,
        ]
    }

    /// Returns the preset name as a string.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            ThemePreset::Dark => "dark",
            ThemePreset::Light => "light",
            ThemePreset::Dracula => "dracula",
            ThemePreset::Gruvbox => "gruvbox",
            ThemePreset::Nord => "nord",
            ThemePreset::Synthwave => "synthwave",
            ThemePreset::Lofi => "lofi",
        }
    }

    /// Creates a Theme from this preset.
    #[must_use]
    pub fn to_theme(&self) -> Theme {
        match self {
            ThemePreset::Dark => create_dark_theme(),
            ThemePreset::Light => create_light_theme(),
            ThemePreset::Dracula => create_dracula_theme(),
            ThemePreset::Gruvbox => create_gruvbox_theme(),
            ThemePreset::Nord => create_nord_theme(),
            ThemePreset::Synthwave => create_synthwave_theme(),
            ThemePreset::Lofi => create_lofi_theme(),
        }
    }

    /// Try to parse a preset from a string.
    #[must_use]
    pub fn from_name(name: &str) -> Option<ThemePreset> {
        match name.to_lowercase().as_str() {
            "dark" => Some(ThemePreset::Dark),
            "light" => Some(ThemePreset::Light),
            "dracula" => Some(ThemePreset::Dracula),
            "gruvbox" => Some(ThemePreset::Gruvbox),
            "nord" => Some(ThemePreset::Nord),
            "synthwave" => Some(ThemePreset::Synthwave),
            "lofi" => Some(ThemePreset::Lofi),
            _ => None,
        }
    }
}

/// Creates the default dark theme.
fn create_dark_theme() -> Theme {
    Theme::default()
}

/// Creates a light theme.
fn create_light_theme() -> Theme {
    let fg = Color::Rgb(30, 30, 30);
    let bg = Color::Rgb(255, 255, 255);
    let blue = Color::Rgb(0, 122, 204);
    let gray = Color::Rgb(120, 120, 120);

    Theme {
        name: "light".to_string(),
        page: PageTheme {
            foreground: fg,
            background: bg,
            heading: Color::Black,
            accent: blue,
            muted: gray,
            skeleton: Color::Rgb(230, 230, 230),
        },
        card: CardTheme {
            title: Color::Black,
            text: fg,
            accent: Color::Rgb(22, 163, 74),
            muted: gray,
            border: Color::Rgb(200, 200, 200),
            border_selected: blue,
        },
        statusbar: StatusBarTheme {
            background: blue,
            foreground: Color::White,
            badge: Color::Rgb(0, 90, 158),
            accent: Color::Rgb(173, 214, 255),
        },
        tabs: TabTheme {
            active_bg: bg,
            active_fg: fg,
            inactive_bg: Color::Rgb(236, 236, 236),
            inactive_fg: Color::Rgb(100, 100, 100),
        },
        popup: PopupTheme {
            background: bg,
            foreground: fg,
            border: Color::Rgb(200, 200, 200),
            selected_bg: blue,
            selected_fg: Color::White,
        },
    }
}

/// Creates a Dracula theme.
fn create_dracula_theme() -> Theme {
    // Dracula colors
    let bg = Color::Rgb(40, 42, 54);
    let fg = Color::Rgb(248, 248, 242);
    let selection = Color::Rgb(68, 71, 90);
    let comment = Color::Rgb(98, 114, 164);
    let cyan = Color::Rgb(139, 233, 253);
    let green = Color::Rgb(80, 250, 123);
    let purple = Color::Rgb(189, 147, 249);

    Theme {
        name: "dracula".to_string(),
        page: PageTheme {
            foreground: fg,
            background: bg,
            heading: purple,
            accent: cyan,
            muted: comment,
            skeleton: selection,
        },
        card: CardTheme {
            title: fg,
            text: fg,
            accent: green,
            muted: comment,
            border: comment,
            border_selected: purple,
        },
        statusbar: StatusBarTheme {
            background: purple,
            foreground: bg,
            badge: selection,
            accent: cyan,
        },
        tabs: TabTheme {
            active_bg: bg,
            active_fg: fg,
            inactive_bg: Color::Rgb(50, 52, 64),
            inactive_fg: comment,
        },
        popup: PopupTheme {
            background: bg,
            foreground: fg,
            border: comment,
            selected_bg: selection,
            selected_fg: fg,
        },
    }
}

/// Creates a Gruvbox Dark theme.
fn create_gruvbox_theme() -> Theme {
    // Gruvbox colors
    let bg = Color::Rgb(40, 40, 40);
    let fg = Color::Rgb(235, 219, 178);
    let gray = Color::Rgb(146, 131, 116);
    let green = Color::Rgb(184, 187, 38);
    let yellow = Color::Rgb(250, 189, 47);
    let aqua = Color::Rgb(142, 192, 124);

    Theme {
        name: "gruvbox".to_string(),
        page: PageTheme {
            foreground: fg,
            background: bg,
            heading: yellow,
            accent: aqua,
            muted: gray,
            skeleton: Color::Rgb(60, 60, 60),
        },
        card: CardTheme {
            title: fg,
            text: fg,
            accent: green,
            muted: gray,
            border: gray,
            border_selected: yellow,
        },
        statusbar: StatusBarTheme {
            background: Color::Rgb(50, 48, 47),
            foreground: fg,
            badge: Color::Rgb(60, 56, 54),
            accent: yellow,
        },
        tabs: TabTheme {
            active_bg: bg,
            active_fg: fg,
            inactive_bg: Color::Rgb(50, 48, 47),
            inactive_fg: gray,
        },
        popup: PopupTheme {
            background: Color::Rgb(50, 48, 47),
            foreground: fg,
            border: gray,
            selected_bg: Color::Rgb(60, 60, 60),
            selected_fg: fg,
        },
    }
}

/// Creates a Nord theme.
fn create_nord_theme() -> Theme {
    // Nord colors
    let polar_night_0 = Color::Rgb(46, 52, 64);
    let polar_night_1 = Color::Rgb(59, 66, 82);
    let polar_night_2 = Color::Rgb(67, 76, 94);
    let polar_night_3 = Color::Rgb(76, 86, 106);
    let snow_storm_0 = Color::Rgb(216, 222, 233);
    let snow_storm_1 = Color::Rgb(229, 233, 240);
    let frost_1 = Color::Rgb(136, 192, 208);
    let frost_3 = Color::Rgb(129, 161, 193);
    let aurora_green = Color::Rgb(163, 190, 140);

    Theme {
        name: "nord".to_string(),
        page: PageTheme {
            foreground: snow_storm_0,
            background: polar_night_0,
            heading: snow_storm_1,
            accent: frost_1,
            muted: polar_night_3,
            skeleton: polar_night_2,
        },
        card: CardTheme {
            title: snow_storm_1,
            text: snow_storm_0,
            accent: aurora_green,
            muted: polar_night_3,
            border: polar_night_3,
            border_selected: frost_1,
        },
        statusbar: StatusBarTheme {
            background: polar_night_1,
            foreground: snow_storm_1,
            badge: polar_night_2,
            accent: frost_3,
        },
        tabs: TabTheme {
            active_bg: polar_night_0,
            active_fg: snow_storm_0,
            inactive_bg: polar_night_1,
            inactive_fg: polar_night_3,
        },
        popup: PopupTheme {
            background: polar_night_1,
            foreground: snow_storm_0,
            border: polar_night_3,
            selected_bg: polar_night_2,
            selected_fg: snow_storm_1,
        },
    }
}

/// Creates a Synthwave theme.
fn create_synthwave_theme() -> Theme {
    // Synthwave colors
    let bg = Color::Rgb(42, 33, 57);
    let fg = Color::Rgb(241, 231, 254);
    let pink = Color::Rgb(255, 126, 219);
    let cyan = Color::Rgb(114, 241, 184);
    let yellow = Color::Rgb(254, 222, 93);
    let muted = Color::Rgb(130, 110, 160);

    Theme {
        name: "synthwave".to_string(),
        page: PageTheme {
            foreground: fg,
            background: bg,
            heading: pink,
            accent: cyan,
            muted,
            skeleton: Color::Rgb(62, 50, 84),
        },
        card: CardTheme {
            title: fg,
            text: fg,
            accent: yellow,
            muted,
            border: muted,
            border_selected: pink,
        },
        statusbar: StatusBarTheme {
            background: pink,
            foreground: bg,
            badge: Color::Rgb(62, 50, 84),
            accent: cyan,
        },
        tabs: TabTheme {
            active_bg: bg,
            active_fg: fg,
            inactive_bg: Color::Rgb(62, 50, 84),
            inactive_fg: muted,
        },
        popup: PopupTheme {
            background: bg,
            foreground: fg,
            border: muted,
            selected_bg: Color::Rgb(62, 50, 84),
            selected_fg: fg,
        },
    }
}

/// Creates a Lofi theme.
fn create_lofi_theme() -> Theme {
    // Lofi: near-monochrome with hard contrast
    let bg = Color::Rgb(15, 15, 15);
    let fg = Color::Rgb(234, 234, 234);
    let gray = Color::Rgb(128, 128, 128);

    Theme {
        name: "lofi".to_string(),
        page: PageTheme {
            foreground: fg,
            background: bg,
            heading: Color::White,
            accent: fg,
            muted: gray,
            skeleton: Color::Rgb(45, 45, 45),
        },
        card: CardTheme {
            title: Color::White,
            text: fg,
            accent: fg,
            muted: gray,
            border: gray,
            border_selected: Color::White,
        },
        statusbar: StatusBarTheme {
            background: fg,
            foreground: bg,
            badge: Color::Rgb(45, 45, 45),
            accent: bg,
        },
        tabs: TabTheme {
            active_bg: bg,
            active_fg: Color::White,
            inactive_bg: Color::Rgb(45, 45, 45),
            inactive_fg: gray,
        },
        popup: PopupTheme {
            background: bg,
            foreground: fg,
            border: gray,
            selected_bg: fg,
            selected_fg: bg,
        },
    }
}
