//! Error types for the factory engine.
//!
//! This module defines the error types used throughout the facto-core crate.

use thiserror::Error;

/// Errors that can occur while registering or building factories.
#[derive(Debug, Error)]
pub enum FactoError {
	/// No factory is registered under the requested name.
	#[error("Factory not found: {0}")]
	UnregisteredFactory(String),

	/// A typed build asked for a different type than the factory produces.
	#[error("Type mismatch for factory '{factory}': expected {expected}, factory produces {actual}")]
	TypeMismatch {
		/// Name of the factory that was requested.
		factory: String,
		/// Type the caller asked for.
		expected: &'static str,
		/// Type the factory was registered with.
		actual: &'static str,
	},

	/// A factory body reported its own failure.
	#[error("Factory error: {0}")]
	Factory(String),

	/// Settings could not be interpreted.
	#[error("Settings error: {0}")]
	Settings(String),

	/// TOML settings could not be parsed.
	#[error("TOML error: {0}")]
	Toml(#[from] toml::de::Error),

	/// I/O operation failed.
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),
}

impl FactoError {
	/// Creates a [`FactoError::Factory`] from any displayable failure.
	///
	/// Intended for factory bodies that need to bail out with their own message.
	pub fn factory(message: impl std::fmt::Display) -> Self {
		Self::Factory(message.to_string())
	}
}

/// Result type alias for factory operations.
pub type FactoResult<T> = Result<T, FactoError>;
