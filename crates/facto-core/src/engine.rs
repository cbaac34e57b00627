//! Build engine.
//!
//! Resolves factories, opens sessions and runs single and batched builds.
//!
//! Every build runs under exactly one [`BuildSession`]. Top-level builds on a
//! [`FactoryRegistry`] open a fresh session that is dropped when the call
//! returns. Builds issued through a [`Helper`] or a [`BuildScope`] reuse the
//! session they carry, which is what keeps named identifiers consistent
//! between a parent factory and the children it builds.
//!
//! Batched builds run their invocations one at a time, in order, with
//! `index` going from 1 to `n`.

use std::any::{Any, type_name};
use std::sync::Arc;

use crate::error::{FactoError, FactoResult};
use crate::helper::Helper;
use crate::registry::{FactoryEntry, FactoryRegistry, Product};
use crate::session::BuildSession;

fn resolve(registry: &FactoryRegistry, name: &str) -> FactoResult<Arc<FactoryEntry>> {
	registry.lookup(name).ok_or_else(|| {
		tracing::warn!(factory = name, "factory not found");
		FactoError::UnregisteredFactory(name.to_string())
	})
}

fn ensure_produces<T: Any>(entry: &FactoryEntry) -> FactoResult<()> {
	if entry.produces::<T>() {
		Ok(())
	} else {
		Err(mismatch::<T>(entry))
	}
}

fn mismatch<T: Any>(entry: &FactoryEntry) -> FactoError {
	FactoError::TypeMismatch {
		factory: entry.name().to_string(),
		expected: type_name::<T>(),
		actual: entry.output_type_name(),
	}
}

fn downcast<T: Any>(entry: &FactoryEntry, product: Product) -> FactoResult<T> {
	product
		.downcast::<T>()
		.map(|product| *product)
		.map_err(|_| mismatch::<T>(entry))
}

fn invoke(
	registry: &FactoryRegistry,
	session: &BuildSession,
	entry: &FactoryEntry,
	index: usize,
) -> FactoResult<Product> {
	let span = tracing::debug_span!(
		"facto.build",
		factory = entry.name(),
		session = %session.id(),
		index
	);
	let _enter = span.enter();

	session.record_invocation();
	let helper = Helper::new(registry, session, entry.name(), index);
	let result = entry.invoke(&helper);
	if let Err(error) = &result {
		tracing::debug!(%error, "factory failed");
	}
	result
}

// The entry is resolved once per batch, so a concurrent re-registration never
// splits one batch across two factories.
fn invoke_n(
	registry: &FactoryRegistry,
	session: &BuildSession,
	entry: &FactoryEntry,
	n: usize,
) -> FactoResult<Vec<Product>> {
	let mut products = Vec::with_capacity(n);
	for index in 1..=n {
		products.push(invoke(registry, session, entry, index)?);
	}
	Ok(products)
}

pub(crate) fn build(
	registry: &FactoryRegistry,
	session: &BuildSession,
	name: &str,
) -> FactoResult<Product> {
	let entry = resolve(registry, name)?;
	invoke(registry, session, &entry, 1)
}

pub(crate) fn build_as<T: Any>(
	registry: &FactoryRegistry,
	session: &BuildSession,
	name: &str,
) -> FactoResult<T> {
	let entry = resolve(registry, name)?;
	ensure_produces::<T>(&entry)?;
	downcast(&entry, invoke(registry, session, &entry, 1)?)
}

pub(crate) fn build_n(
	registry: &FactoryRegistry,
	session: &BuildSession,
	name: &str,
	n: usize,
) -> FactoResult<Vec<Product>> {
	let entry = resolve(registry, name)?;
	invoke_n(registry, session, &entry, n)
}

pub(crate) fn build_n_as<T: Any>(
	registry: &FactoryRegistry,
	session: &BuildSession,
	name: &str,
	n: usize,
) -> FactoResult<Vec<T>> {
	let entry = resolve(registry, name)?;
	ensure_produces::<T>(&entry)?;
	invoke_n(registry, session, &entry, n)?
		.into_iter()
		.map(|product| downcast(&entry, product))
		.collect()
}

/// A session opened explicitly by the caller.
///
/// Every build issued through the same scope shares one identifier cache, so
/// separate top-level builds can agree on named identifiers. The session ends
/// when the scope is dropped.
///
/// # Examples
///
/// ```
/// use facto_core::{FactoryRegistry, Uuid};
///
/// let registry = FactoryRegistry::new();
/// registry.register("org_id", |h| Ok(h.named_uuid("org")));
///
/// let scope = registry.scope();
/// let a = scope.build_as::<Uuid>("org_id").unwrap();
/// let b = scope.build_as::<Uuid>("org_id").unwrap();
/// assert_eq!(a, b);
/// ```
#[derive(Debug)]
pub struct BuildScope<'r> {
	registry: &'r FactoryRegistry,
	session: BuildSession,
}

impl<'r> BuildScope<'r> {
	pub(crate) fn new(registry: &'r FactoryRegistry) -> Self {
		let session = BuildSession::new(registry.generator());
		tracing::trace!(session = %session.id(), "build session opened");
		Self { registry, session }
	}

	/// The session backing this scope.
	pub fn session(&self) -> &BuildSession {
		&self.session
	}

	/// Identifier for `key` within this scope.
	pub fn named_uuid(&self, key: &str) -> uuid::Uuid {
		self.session.named_uuid(key)
	}

	/// Builds one product with index 1.
	pub fn build(&self, name: &str) -> FactoResult<Product> {
		build(self.registry, &self.session, name)
	}

	/// Builds one product and converts it to `T`.
	pub fn build_as<T: Any>(&self, name: &str) -> FactoResult<T> {
		build_as(self.registry, &self.session, name)
	}

	/// Builds `n` products with indices 1 through `n`.
	pub fn build_n(&self, name: &str, n: usize) -> FactoResult<Vec<Product>> {
		build_n(self.registry, &self.session, name, n)
	}

	/// Builds `n` products and converts each to `T`.
	pub fn build_n_as<T: Any>(&self, name: &str, n: usize) -> FactoResult<Vec<T>> {
		build_n_as(self.registry, &self.session, name, n)
	}
}

impl Drop for BuildScope<'_> {
	fn drop(&mut self) {
		tracing::trace!(
			session = %self.session.id(),
			invocations = self.session.invocations(),
			"build session closed"
		);
	}
}

impl FactoryRegistry {
	/// Opens a session that several builds can share.
	pub fn scope(&self) -> BuildScope<'_> {
		BuildScope::new(self)
	}

	/// Builds one product of the factory registered under `name`.
	///
	/// Opens a new session for the call. Fails with
	/// [`FactoError::UnregisteredFactory`] if `name` is unknown.
	///
	/// # Examples
	///
	/// ```
	/// use facto_core::FactoryRegistry;
	///
	/// let registry = FactoryRegistry::new();
	/// registry.register("greeting", |_| Ok(String::from("hello")));
	///
	/// let product = registry.build("greeting").unwrap();
	/// assert_eq!(*product.downcast::<String>().unwrap(), "hello");
	/// assert!(registry.build("missing").is_err());
	/// ```
	pub fn build(&self, name: &str) -> FactoResult<Product> {
		self.scope().build(name)
	}

	/// Builds one product and converts it to `T`.
	///
	/// Fails with [`FactoError::TypeMismatch`] before invoking the factory if
	/// it was registered with a different product type.
	pub fn build_as<T: Any>(&self, name: &str) -> FactoResult<T> {
		self.scope().build_as(name)
	}

	/// Builds `n` products in one session, with indices 1 through `n`.
	///
	/// `n == 0` returns an empty vector without invoking the factory, but an
	/// unknown `name` still fails.
	///
	/// # Examples
	///
	/// ```
	/// use facto_core::FactoryRegistry;
	///
	/// let registry = FactoryRegistry::new();
	/// registry.register("Users", |h| Ok(format!("Wawandco {}", h.index())));
	///
	/// let users = registry.build_n_as::<String>("Users", 3).unwrap();
	/// assert_eq!(users, vec!["Wawandco 1", "Wawandco 2", "Wawandco 3"]);
	/// ```
	pub fn build_n(&self, name: &str, n: usize) -> FactoResult<Vec<Product>> {
		self.scope().build_n(name, n)
	}

	/// Builds `n` products in one session and converts each to `T`.
	pub fn build_n_as<T: Any>(&self, name: &str, n: usize) -> FactoResult<Vec<T>> {
		self.scope().build_n_as(name, n)
	}
}
