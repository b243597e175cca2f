// NOTE: datasieve Architecture Rationale
//
// Why Validate-Locally (before anything touches the wire)?
// - The submission contract is small and fixed: an object with a `data` array
// - Rejecting bad input client-side keeps the service's error surface out of
//   the editing loop, and validation stays cheap enough to run per keystroke
//
// Why One-Request-Per-Submit (no retry)?
// - The service call is idempotent from the user's point of view; on failure
//   the user re-submits deliberately instead of the client guessing
// - Overlap is handled by generation tagging: a completion older than the
//   latest issued submission is dropped, never rendered
//
// Why Project-On-Read (no cached view)?
// - The rendered rows are a pure function of (response, selection); rebuilding
//   them on every change is cheaper than keeping a second source of truth

mod args;
mod commands;
pub mod config;
mod handlers;
mod presentation;
mod tui;
pub mod types;

pub use args::{Cli, Commands, EndpointCommand};
pub use commands::run;
