//! Domain Layer
//!
//! Pure scaffolding concepts without I/O.
//!
//! - `entities/` - Descriptor, catalog, and per-artifact outcomes
//! - `value_objects/` - Validated relative paths
//! - `ports/` - Filesystem and event interfaces implemented by infrastructure

pub mod entities;
pub mod ports;
pub mod value_objects;
