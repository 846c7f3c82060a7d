//! Command implementations
//!
//! Commands are thin: they look up change records through the repository,
//! call into the engine, and print the result. Diff failures are reported as
//! warnings on stderr while whatever could be computed is still printed.

pub mod porcelain;
