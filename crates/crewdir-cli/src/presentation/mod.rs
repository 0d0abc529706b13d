//! Presentation layer for the CLI.
//!
//! Unidirectional flow, same shape for console output and the board:
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] --> Output
//! ```
//!
//! Presenters are pure functions from domain state to view models; view
//! models carry raw data (so `--format json` is a stable API); renderers
//! and `fmt::Display` views own all layout, styling and truncation. The
//! board renderer additionally owns pure UI state (focus, selection) and
//! translates key events into semantic `Action`s for the handler.

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;

pub use renderers::ConsoleRenderer;
pub use view_models::common::StatusLevel;
