pub mod domain;
pub mod error;
pub mod range;

pub use domain::*;
pub use error::{Error, Result};
pub use range::{ContentRange, ItemRange, RANGE_UNIT};
