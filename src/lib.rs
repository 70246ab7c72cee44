//! Gitfolio
//!
//! A terminal portfolio page driven by a single TOML config file and the
//! public GitHub API.
//!
//! # Architecture
//!
//! - **Config Module**: TOML loading and sanitization into a
//!   fully-defaulted configuration
//! - **GitHub Module**: blocking API client plus the background fetcher
//!   thread running the profile/projects/articles load cycle
//! - **Theme Module**: built-in presets, persistence, and the manager
//!   owned by the app
//! - **UI Module**: ratatui widgets for the page sections
//!
//! # Usage
//!
//! ```no_run
//! use gitfolio::app::App;
//! use gitfolio::config::{load, sanitize};
//!
//! let config = load().ok().and_then(sanitize).expect("invalid config");
//! let mut app = App::new(config);
//! // Run event loop...
//! ```

// Clippy configuration - allow common patterns
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

pub mod app;
pub mod blog;
pub mod clipboard;
pub mod config;
pub mod errors;
pub mod github;
pub mod logging;
pub mod theme;
pub mod ui;

// Re-export main types
pub use app::App;
pub use clipboard::Clipboard;
pub use config::SanitizedConfig;
pub use errors::{ErrorDescriptor, ErrorKind};
pub use github::{BackgroundFetcher, GithubClient};
pub use theme::{Theme, ThemeManager, ThemePreset};
