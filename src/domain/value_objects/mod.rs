//! Domain Value Objects

mod path;

pub use path::{PathError, SafePath};
