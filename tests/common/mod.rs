//! Common test utilities for Shepherd integration tests.
//!
//! - `TestEnv`: isolated project directory plus helpers to run the CLI

#![allow(dead_code)]

pub mod env;

pub use env::*;
