pub mod revision;

pub use revision::{Revision, ABSENT_TOKEN};
