//! External command execution
//!
//! Git queries go through the [`CommandRunner`] trait so the resolver can be
//! exercised without a real repository.

mod process;
mod runner;
#[cfg(test)]
pub(crate) mod testing;

pub use process::ProcessRunner;
pub use runner::CommandRunner;
