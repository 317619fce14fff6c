//! Visual styling for the highlighter panel.
//!
//! Themes map each UI element to a ratatui [`Style`](ratatui::style::Style).
//! Builtin themes ship as TOML documents embedded in the binary.

pub mod theme;

pub use theme::{Theme, ThemeError, by_name, default_theme, names};
