pub mod components;
pub mod layouts;
pub mod pages;

// Re-exports for convenience
pub use components::{newsletter_section, newsletter_thanks};
pub use layouts::desktop::desktop_layout;

/// Stylesheet served at `/static/main.css`.
pub const MAIN_CSS: &str = include_str!("../../static/main.css");
