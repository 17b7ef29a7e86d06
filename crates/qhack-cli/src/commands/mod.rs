//! CLI command implementations.

pub mod common;
pub mod givens;
pub mod measurements;
pub mod swaps;
pub mod version;
