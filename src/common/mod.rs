/// Shared error and result types
pub mod error;
pub mod logging;
pub mod result;

pub use error::DiffError;
pub use result::{DiffResult, OptionExt, ResultExt};
