//! Error types for Tenet.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`TenetError`] - Top-level error type for all Tenet operations
//! - [`CapabilityError`] - Errors returned by contract operations
//! - [`RegistryError`] - Errors from registry construction and lookup

use crate::connect::ConnectionState;
use thiserror::Error;

/// A boxed error type for opaque collaborator failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error type for all Tenet operations.
#[derive(Error, Debug)]
pub enum TenetError {
    /// A contract operation failed.
    #[error("capability error: {0}")]
    Capability(#[from] CapabilityError),

    /// A registry lookup or registration failed.
    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),

    /// A custom error occurred.
    #[error(transparent)]
    Custom(BoxError),
}

/// Errors that a contract operation can return.
#[derive(Error, Debug)]
pub enum CapabilityError {
    /// The contract was invoked on a variant that does not provide it.
    #[error("`{contract}::{operation}` is not implemented")]
    NotImplemented {
        /// Name of the contract trait.
        contract: &'static str,
        /// Name of the operation that was invoked.
        operation: &'static str,
    },

    /// The external collaborator failed; the source is passed through unmodified.
    #[error(transparent)]
    Collaborator(BoxError),

    /// The variant is in a state that does not accept the operation.
    #[error("variant `{variant}` cannot proceed from state {state:?}")]
    InvalidState {
        /// Name of the variant.
        variant: &'static str,
        /// State the variant was in.
        state: ConnectionState,
    },
}

impl CapabilityError {
    /// Shorthand for [`CapabilityError::NotImplemented`].
    pub const fn not_implemented(contract: &'static str, operation: &'static str) -> Self {
        Self::NotImplemented {
            contract,
            operation,
        }
    }

    /// Wrap a collaborator failure without altering it.
    pub fn collaborator(err: impl Into<BoxError>) -> Self {
        Self::Collaborator(err.into())
    }

    /// Returns `true` if this is a `NotImplemented` signal.
    pub fn is_not_implemented(&self) -> bool {
        matches!(self, Self::NotImplemented { .. })
    }
}

/// Errors that can occur while building or querying a registry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// No variant was registered under the given name.
    #[error("no variant registered under: {0}")]
    NotFound(String),

    /// A variant was already registered under the given name.
    #[error("variant already registered under: {0}")]
    DuplicateKey(String),
}

// Convenience conversions
impl From<BoxError> for TenetError {
    fn from(err: BoxError) -> Self {
        TenetError::Custom(err)
    }
}

impl From<BoxError> for CapabilityError {
    fn from(err: BoxError) -> Self {
        CapabilityError::Collaborator(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_implemented_names_contract_and_operation() {
        let err = CapabilityError::not_implemented("SoundMaker", "make_sound");
        assert!(err.is_not_implemented());
        assert_eq!(err.to_string(), "`SoundMaker::make_sound` is not implemented");
    }

    #[test]
    fn collaborator_is_transparent() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = CapabilityError::collaborator(io);
        assert_eq!(err.to_string(), "refused");
        assert!(!err.is_not_implemented());
    }

    #[test]
    fn top_level_wraps_registry() {
        let err: TenetError = RegistryError::NotFound("oracle".into()).into();
        assert_eq!(
            err.to_string(),
            "registry error: no variant registered under: oracle"
        );
    }
}
