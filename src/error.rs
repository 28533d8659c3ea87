//! Error types for the Umbra3D shadow library
//!
//! This module defines the error types used by the engine singleton
//! (initialization, subsystem lifecycle). The geometric core never
//! errors: a missing camera or light is a silent no-op by contract.

use std::fmt;

/// Result type for Umbra3D operations
pub type Result<T> = std::result::Result<T, Error>;

/// Umbra3D errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Initialization failed (engine, subsystems)
    InitializationFailed(String),

    /// A global lock was poisoned by a panicking thread
    LockPoisoned(String),

    /// A requested subsystem has not been created
    SubsystemMissing(String),

    /// A subsystem of this kind already exists
    SubsystemExists(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
            Error::LockPoisoned(msg) => write!(f, "Lock poisoned: {}", msg),
            Error::SubsystemMissing(msg) => write!(f, "Subsystem missing: {}", msg),
            Error::SubsystemExists(msg) => write!(f, "Subsystem exists: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
