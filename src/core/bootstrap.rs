//! Upstream project-generator contract
//!
//! The generator that creates the base firmware project is an external
//! tool. Core code depends on this trait; the production implementation in
//! [`crate::infra::bootstrap`] shells out to `mix nerves.new`. The target
//! code travels as an explicit parameter and ends up on the child process
//! environment only; the fwforge process environment is never mutated.

use crate::error::BootstrapError;

/// Runs the upstream generator for a new project
pub trait ProjectBootstrapper {
    /// Create the base project `name` for target `target` in the current
    /// directory, blocking until the generator exits
    fn bootstrap(&self, name: &str, target: &str) -> Result<(), BootstrapError>;
}
