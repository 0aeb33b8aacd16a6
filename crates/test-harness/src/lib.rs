//! Shared test support: part fixtures and verdict/outcome assertions.

pub mod assertions;
pub mod fixtures;

pub use assertions::*;
pub use fixtures::*;
