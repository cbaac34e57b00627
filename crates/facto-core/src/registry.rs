//! Factory registry.
//!
//! [`FactoryRegistry`] maps factory names to type-erased constructors. It is
//! safe to register and look up factories from any number of threads, including
//! from inside a running factory. Callers usually own a registry and pass it
//! around; [`FactoryRegistry::global`] exists for code that prefers one
//! process-wide instance.

use std::any::{Any, TypeId, type_name};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;

use crate::error::FactoResult;
use crate::faker::Faker;
use crate::helper::Helper;
use crate::id::{IdGenerator, UuidV4Generator};
use crate::settings::FactoSettings;

/// Opaque value returned by an untyped build.
///
/// Downcast it with [`Box::downcast`] to the type the factory produces.
pub type Product = Box<dyn Any + Send>;

type ErasedFactory = dyn Fn(&Helper<'_>) -> FactoResult<Product> + Send + Sync;

/// A registered factory together with the product type it declared.
pub struct FactoryEntry {
	name: String,
	output: TypeId,
	output_name: &'static str,
	factory: Box<ErasedFactory>,
}

impl FactoryEntry {
	fn new<T, F>(name: String, factory: F) -> Self
	where
		T: Any + Send,
		F: Fn(&Helper<'_>) -> FactoResult<T> + Send + Sync + 'static,
	{
		Self {
			name,
			output: TypeId::of::<T>(),
			output_name: type_name::<T>(),
			factory: Box::new(move |helper: &Helper<'_>| {
				factory(helper).map(|product| Box::new(product) as Product)
			}),
		}
	}

	/// Name the factory is registered under.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// `TypeId` of the product this factory builds.
	pub fn output_type(&self) -> TypeId {
		self.output
	}

	/// Type name of the product this factory builds.
	pub fn output_type_name(&self) -> &'static str {
		self.output_name
	}

	/// Returns true if the factory builds values of type `T`.
	pub fn produces<T: Any>(&self) -> bool {
		self.output == TypeId::of::<T>()
	}

	pub(crate) fn invoke(&self, helper: &Helper<'_>) -> FactoResult<Product> {
		(self.factory)(helper)
	}
}

impl fmt::Debug for FactoryEntry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("FactoryEntry")
			.field("name", &self.name)
			.field("output", &self.output_name)
			.finish_non_exhaustive()
	}
}

/// Process-wide registry used by [`FactoryRegistry::global`].
static GLOBAL_REGISTRY: Lazy<FactoryRegistry> = Lazy::new(FactoryRegistry::new);

/// Thread-safe mapping from factory name to factory.
pub struct FactoryRegistry {
	factories: RwLock<HashMap<String, Arc<FactoryEntry>>>,
	generator: Arc<dyn IdGenerator>,
	faker: Faker,
}

impl FactoryRegistry {
	/// Creates an empty registry with random v4 identifiers and an English faker.
	///
	/// # Examples
	///
	/// ```
	/// use facto_core::FactoryRegistry;
	///
	/// let registry = FactoryRegistry::new();
	/// registry.register("answer", |_| Ok(42u32));
	///
	/// assert_eq!(registry.build_as::<u32>("answer").unwrap(), 42);
	/// ```
	pub fn new() -> Self {
		Self {
			factories: RwLock::new(HashMap::new()),
			generator: Arc::new(UuidV4Generator),
			faker: Faker::new(),
		}
	}

	/// Creates an empty registry configured from `settings`.
	pub fn with_settings(settings: &FactoSettings) -> Self {
		Self {
			factories: RwLock::new(HashMap::new()),
			generator: settings.id_strategy.generator(),
			faker: Faker::with_locale(settings.locale),
		}
	}

	/// Replaces the identifier generator used by new sessions.
	pub fn with_id_generator(mut self, generator: impl IdGenerator + 'static) -> Self {
		self.generator = Arc::new(generator);
		self
	}

	/// Replaces the faker handed to factories.
	pub fn with_faker(mut self, faker: Faker) -> Self {
		self.faker = faker;
		self
	}

	/// Returns the process-wide registry.
	pub fn global() -> &'static FactoryRegistry {
		&GLOBAL_REGISTRY
	}

	/// Registers `factory` under `name`, replacing any previous factory.
	///
	/// # Arguments
	///
	/// * `name` - Case-sensitive factory name (e.g., "User")
	/// * `factory` - Closure producing one product per invocation
	pub fn register<T, F>(&self, name: impl Into<String>, factory: F)
	where
		T: Any + Send,
		F: Fn(&Helper<'_>) -> FactoResult<T> + Send + Sync + 'static,
	{
		let name = name.into();
		let entry = Arc::new(FactoryEntry::new(name.clone(), factory));
		let output = entry.output_type_name();
		let previous = self.factories.write().insert(name.clone(), entry);
		match previous {
			Some(old) => tracing::debug!(
				factory = %name,
				output,
				replaced = old.output_type_name(),
				"factory replaced"
			),
			None => tracing::debug!(factory = %name, output, "factory registered"),
		}
	}

	/// Returns the factory currently registered under `name`.
	///
	/// The entry is cloned out of the lock, so invoking it never blocks writers.
	pub fn lookup(&self, name: &str) -> Option<Arc<FactoryEntry>> {
		self.factories.read().get(name).cloned()
	}

	/// Checks if a factory is registered under `name`.
	pub fn has(&self, name: &str) -> bool {
		self.factories.read().contains_key(name)
	}

	/// Returns all registered names, sorted.
	pub fn names(&self) -> Vec<String> {
		let mut names: Vec<String> = self.factories.read().keys().cloned().collect();
		names.sort();
		names
	}

	/// Returns the number of registered factories.
	pub fn len(&self) -> usize {
		self.factories.read().len()
	}

	/// Returns true if no factories are registered.
	pub fn is_empty(&self) -> bool {
		self.factories.read().is_empty()
	}

	/// Removes the factory registered under `name`. Returns whether one existed.
	pub fn unregister(&self, name: &str) -> bool {
		let removed = self.factories.write().remove(name).is_some();
		if removed {
			tracing::debug!(factory = %name, "factory unregistered");
		}
		removed
	}

	/// Clears all factories.
	pub fn clear(&self) {
		self.factories.write().clear();
	}

	pub(crate) fn generator(&self) -> Arc<dyn IdGenerator> {
		Arc::clone(&self.generator)
	}

	pub(crate) fn faker(&self) -> &Faker {
		&self.faker
	}
}

impl Default for FactoryRegistry {
	fn default() -> Self {
		Self::new()
	}
}

impl fmt::Debug for FactoryRegistry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("FactoryRegistry")
			.field("factories", &self.names())
			.field("faker", &self.faker)
			.finish_non_exhaustive()
	}
}
