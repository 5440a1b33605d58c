//! # Presentation Layer
//!
//! ```text
//! [ Handler ] --> [ ViewModel ] --> [ Renderer ] ==(JSON)==> serde_json --> stdout
//!                    (Data)          (Driver)   ==(Text)==> [ View ] --> stdout
//! ```
//!
//! * `view_models/`: serde structs holding raw data (numbers, not formatted strings).
//! * `views/`: `fmt::Display` wrappers doing layout and styling.
//! * `formatters`: small string helpers shared by views.
//! * `renderer`: picks JSON or text.
//!
//! `--format json` always dumps the complete view model.

pub mod formatters;
pub mod renderer;
pub mod view_models;
pub mod views;

pub use renderer::ConsoleRenderer;
pub use view_models::{CommandResultViewModel, CreateView, Style};
