mod context;

pub mod articles;
pub mod author;
pub mod authors;
pub mod config;
pub mod hype;
pub mod journals;
pub mod strip;
pub mod suggest;

pub use context::HandlerContext;
