//! Shared test support for the crewdir workspace.
//!
//! Provides sample employee fixtures and an in-process mock of the employee
//! directory API so unit tests, client tests and CLI process tests can all
//! run against a real HTTP boundary without an external server.

pub mod fixtures;
pub mod server;

pub use server::MockDirectoryServer;
