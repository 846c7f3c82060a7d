//! Shared building blocks
//!
//! - `debounce`: cancellable delayed task used to coalesce refresh triggers
//! - `error`: failure taxonomy of the engine
//! - `pager`: stdout or minus pager as command output
//! - `settings`: runtime configuration

pub mod debounce;
pub mod error;
pub mod pager;
pub mod settings;
