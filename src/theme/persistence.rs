//! Theme persistence.
//!
//! Remembers the last applied preset across runs in `~/.gitfolio/theme`.

use std::fs;
use std::io;
use std::path::PathBuf;

use super::preset::ThemePreset;

/// Returns the path of the persisted theme file (~/.gitfolio/theme).
#[must_use]
pub fn theme_file_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".gitfolio")
        .join("theme")
}

/// Loads the persisted theme choice, if any.
///
/// Missing file, unreadable file, and unknown preset names all yield
/// `None`; a bad persisted value must never break startup.
#[must_use]
pub fn load_saved_theme() -> Option<ThemePreset> {
    let content = fs::read_to_string(theme_file_path()).ok()?;
    ThemePreset::from_name(content.trim())
}

/// Persists the theme choice for the next run.
///
/// # Errors
/// Returns error if the directory cannot be created or the file written.
pub fn save_theme(preset: ThemePreset) -> io::Result<()> {
    let path = theme_file_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, preset.name())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_file_path_under_home_config() {
        let path = theme_file_path();
        assert!(path.to_string_lossy().contains(".gitfolio"));
        assert_eq!(path.file_name().and_then(|n| n.to_str()), Some("theme"));
    }
}
