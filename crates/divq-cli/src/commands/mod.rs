//! CLI command implementations.

pub mod classical;
pub mod common;
pub mod count;
pub mod search;
pub mod version;
