//! Descriptor loading

mod yaml_descriptor;

pub use yaml_descriptor::{load_descriptor, parse_descriptor, KNOWN_KEYS};
