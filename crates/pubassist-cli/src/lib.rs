// NOTE: pubassist CLI layout
//
// args.rs        clap definitions only
// commands.rs    config resolution, logging, runtime, dispatch
// handlers/      one module per command; builds a view model from runtime calls
// presentation/  view models (serde) + Display views, rendered as plain text or JSON
//
// Handlers never print directly; everything goes through the renderer so
// `--format json` always emits the full view model.

mod args;
mod commands;
mod handlers;
pub mod logging;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands, ConfigCommand, SuggestTarget};
pub use commands::run;
