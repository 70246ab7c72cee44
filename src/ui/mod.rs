//! Widgets for the portfolio page.
//!
//! Every widget is a short-lived builder over borrowed state, consumed
//! by `render`. Layout happens in the app layer; widgets only paint the
//! area they are given.

pub mod articles;
pub mod details;
pub mod error_page;
pub mod hero;
pub mod projects;
pub mod publications;
pub mod skeleton;
pub mod skills;
pub mod statusbar;
pub mod tab_bar;
pub mod text;
pub mod theme_selector;
pub mod timeline;

pub use articles::Articles;
pub use details::{ContactList, ContactRow, contact_rows};
pub use error_page::ErrorPage;
pub use hero::Hero;
pub use projects::{ExternalProjects, GithubProjects};
pub use publications::Publications;
pub use skeleton::Skeleton;
pub use skills::SkillsCard;
pub use statusbar::StatusBar;
pub use tab_bar::SectionTabBar;
pub use theme_selector::{ThemeSelector, ThemeSelectorWidget};
pub use timeline::{Timeline, TimelineEntry};
