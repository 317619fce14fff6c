//! The highlighter application: state, input handling and drawing.
//!
//! [`App`] wraps the core [`Highlighter`](hilite_core::Highlighter) view-model
//! with everything the terminal needs: the wrapped text as drawn, the mouse
//! selection, and the screen areas used for hit-testing.

mod actions;
mod panel;
mod render;
mod state;

pub use state::App;
