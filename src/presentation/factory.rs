//! Use Case Factory
//!
//! The dependency injection point for the binary.

use crate::application::ScaffoldUseCase;
use crate::infrastructure::LocalFs;

/// Scaffold use case backed by the local disk
pub type ConcreteScaffoldUseCase = ScaffoldUseCase<LocalFs>;

pub fn create_scaffold_use_case() -> ConcreteScaffoldUseCase {
    ScaffoldUseCase::new(LocalFs::new())
}
