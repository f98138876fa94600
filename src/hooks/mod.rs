//! Hook system for extensibility
//!
//! Allows users to run custom scripts at key workflow points:
//! - pre-build: before tag fetching and index assembly; a failure aborts
//! - post-build: after the index is written; the place to attach deployment

pub mod executor;
pub mod lifecycle;

pub use executor::HookExecutor;
pub use lifecycle::{HookContext, HookType};
