//! Free functions over the process-wide registry.
//!
//! These mirror the methods of [`FactoryRegistry`] on
//! [`FactoryRegistry::global`]. Registrations made here are visible to every
//! caller in the process.
//!
//! ```rust
//! use facto::global;
//!
//! global::register("docs.global.Answer", |_| Ok(42u32));
//! assert_eq!(global::build_as::<u32>("docs.global.Answer").unwrap(), 42);
//! ```

use std::any::Any;

use facto_core::{FactoResult, FactoryRegistry, Helper, Product};

/// Registers `factory` under `name` in the process-wide registry.
pub fn register<T, F>(name: impl Into<String>, factory: F)
where
	T: Any + Send,
	F: Fn(&Helper<'_>) -> FactoResult<T> + Send + Sync + 'static,
{
	FactoryRegistry::global().register(name, factory);
}

/// Checks if `name` is registered in the process-wide registry.
pub fn has(name: &str) -> bool {
	FactoryRegistry::global().has(name)
}

/// Builds one product from the process-wide registry.
pub fn build(name: &str) -> FactoResult<Product> {
	FactoryRegistry::global().build(name)
}

/// Builds one product from the process-wide registry and converts it to `T`.
pub fn build_as<T: Any>(name: &str) -> FactoResult<T> {
	FactoryRegistry::global().build_as(name)
}

/// Builds `n` products from the process-wide registry in one session.
pub fn build_n(name: &str, n: usize) -> FactoResult<Vec<Product>> {
	FactoryRegistry::global().build_n(name, n)
}

/// Builds `n` products from the process-wide registry, converted to `T`.
pub fn build_n_as<T: Any>(name: &str, n: usize) -> FactoResult<Vec<T>> {
	FactoryRegistry::global().build_n_as(name, n)
}
