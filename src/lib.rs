/// Handles argument parsing and command dispatch.
pub mod cli;

/// Constants shared across the crate.
pub mod constants;

/// Defines custom error types.
pub mod error;

/// Template loading, default variables and file output.
pub mod engine;

/// Extension traits for standard library types.
pub mod ext;

/// Package, class and test generators.
pub mod generator;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// Placeholder substitution.
pub mod renderer;

/// On-disk template store and its built-in templates.
pub mod store;

/// Common types.
pub mod types;
