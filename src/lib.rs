//! gitvars - git metadata for serverless functions
//!
//! Resolves a fixed set of git variables (`sha1`, `branch`, `isDirty`, ...)
//! through a memoizing [`Resolver`] and exports them as environment
//! variables and tags on every function of a serverless service document.

pub mod cli;
pub mod config;
pub mod error;
pub mod exec;
pub mod export;
pub mod hooks;
pub mod query;
pub mod resolver;
pub mod service;
pub mod source;
pub mod ui;
pub mod variable;

pub use error::{GitVarsError, GitVarsResult};
pub use resolver::Resolver;
pub use variable::{ResolvedValue, VariableName};
