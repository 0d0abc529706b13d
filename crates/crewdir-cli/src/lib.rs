// NOTE: crewdir Architecture Rationale
//
// Why a wholesale cache (not in-place patching)?
// - Every successful mutation reloads the full collection from the server
// - The rendered view can never diverge from server-confirmed state
// - Trade-off: one extra round trip per mutation, fine at directory scale
//
// Why client-side filtering (not server queries)?
// - The collection is small; the API exposes only plain CRUD
// - Filtering stays a pure function over the cache, trivially testable
// - Clearing filters never needs a network round trip
//
// Why a handler/renderer thread split for the board?
// - The handler loop owns all mutable session state; no locking anywhere
// - The renderer owns the terminal and pure UI state (focus, selection)
// - The two sides exchange semantic actions and complete view-model
//   snapshots over channels, so business logic never sees key events

mod args;
mod commands;
pub mod config;
mod handlers;
pub mod presentation;

pub use args::{Cli, Commands, OutputFormat};
pub use commands::run;
