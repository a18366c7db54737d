//! # graphql-tutorial - a small GraphQL query interface over in-memory data
//!
//! Two example programs built on the same schema/resolver composition model:
//!
//! - **hello**: a root query with a single `hello` field returning `"World"`
//! - **tutorial**: tutorials with an embedded author and comments, queried
//!   through `tutorial(id: Int)` and `list`
//!
//! Each program populates its data, assembles and validates a schema, runs one
//! fixed query and prints the JSON result.
//!
//! ## Quick Start
//!
//! ```bash
//! cargo run --bin hello
//! # Graphql Tutorial
//! # {"data":{"hello":"World"}}
//!
//! cargo run --bin tutorial -- --pretty
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line flags and handlers
//! - [`config`]: Configuration loading
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: Type definitions, resolvers, schema and execution
//! - [`logging`]: Tracing subscriber setup
//! - [`model`]: Data models (Tutorial, Author, Comment)
//! - [`storage`]: The immutable in-memory store

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading.
///
/// Handles optional YAML configuration files.
pub mod config;

/// Error types and result aliases.
///
/// Defines `TutorialError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL type definitions, resolvers and execution.
pub mod graphql;

/// Tracing subscriber setup.
///
/// Compact stderr output plus an optional rolling JSON log file.
pub mod logging;

/// Data models for tutorials.
pub mod model;

/// Immutable in-memory storage.
pub mod storage;
