//! Terminal front-end for the text highlighter.
//!
//! Draws the fixed paragraph in a bordered panel, turns mouse drags into
//! selections, and lets the user commit or clear highlights with buttons or
//! keys. The application state lives in [`App`]; [`run`] drives it on a real
//! terminal.

mod app;
pub mod components;
mod config;
mod runtime;
pub mod style;


pub use app::App;
pub use config::UiLabels;
pub use runtime::run;

pub use crate::style::{
	Theme, ThemeError, by_name as theme_by_name, default_theme, names as theme_names,
};
