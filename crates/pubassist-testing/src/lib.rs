//! Testing infrastructure for pubassist integration tests.
//!
//! - `FakeTransport`: in-memory API answering ranged requests like the backend
//! - `fixtures`: sample records in wire format
//! - `TestWorld`: isolated config directory for running the CLI binary

pub mod fixtures;
pub mod transport;
pub mod world;

pub use transport::FakeTransport;
pub use world::{CliResult, TestWorld};
