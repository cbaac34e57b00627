//! Per-invocation view handed to factories.

use std::any::Any;

use uuid::Uuid;

use crate::engine;
use crate::error::FactoResult;
use crate::faker::Faker;
use crate::registry::{FactoryRegistry, Product};
use crate::session::BuildSession;

/// What a factory sees while it runs.
///
/// Carries the invocation's position in its batch, the faker, and the
/// enclosing [`BuildSession`]. Nested builds go through the helper so they run
/// in the same session:
///
/// ```
/// use facto_core::{FactoryRegistry, Uuid};
///
/// #[derive(Debug)]
/// struct Company { id: Uuid }
///
/// #[derive(Debug)]
/// struct Department { company_id: Uuid, company: Company }
///
/// let registry = FactoryRegistry::new();
/// registry.register("company", |h| Ok(Company { id: h.named_uuid("company_id") }));
/// registry.register("department", |h| {
///     Ok(Department {
///         company_id: h.named_uuid("company_id"),
///         company: h.build_as::<Company>("company")?,
///     })
/// });
///
/// let department = registry.build_as::<Department>("department").unwrap();
/// assert_eq!(department.company_id, department.company.id);
/// ```
pub struct Helper<'a> {
	registry: &'a FactoryRegistry,
	session: &'a BuildSession,
	name: &'a str,
	index: usize,
}

impl<'a> Helper<'a> {
	pub(crate) fn new(
		registry: &'a FactoryRegistry,
		session: &'a BuildSession,
		name: &'a str,
		index: usize,
	) -> Self {
		Self {
			registry,
			session,
			name,
			index,
		}
	}

	/// 1-based position of this invocation in its batch. Always 1 for a single build.
	pub fn index(&self) -> usize {
		self.index
	}

	/// Name of the factory being invoked.
	pub fn name(&self) -> &str {
		self.name
	}

	/// Fake data generator.
	pub fn faker(&self) -> &Faker {
		self.registry.faker()
	}

	/// Identifier for `key`, shared by every factory in this build tree.
	pub fn named_uuid(&self, key: &str) -> Uuid {
		self.session.named_uuid(key)
	}

	/// The enclosing session.
	pub fn session(&self) -> &BuildSession {
		self.session
	}

	/// Substitutes the index for every `{n}` in `template`.
	///
	/// ```
	/// use facto_core::FactoryRegistry;
	///
	/// let registry = FactoryRegistry::new();
	/// registry.register("code", |h| Ok(h.sequence("user_{n}")));
	/// assert_eq!(registry.build_n_as::<String>("code", 2).unwrap(), ["user_1", "user_2"]);
	/// ```
	pub fn sequence(&self, template: &str) -> String {
		template.replace("{n}", &self.index.to_string())
	}

	/// Builds another factory in this session.
	pub fn build(&self, name: &str) -> FactoResult<Product> {
		engine::build(self.registry, self.session, name)
	}

	/// Builds another factory in this session and converts the product to `T`.
	pub fn build_as<T: Any>(&self, name: &str) -> FactoResult<T> {
		engine::build_as(self.registry, self.session, name)
	}

	/// Builds `n` products of another factory in this session.
	pub fn build_n(&self, name: &str, n: usize) -> FactoResult<Vec<Product>> {
		engine::build_n(self.registry, self.session, name, n)
	}

	/// Builds `n` products of another factory in this session, converted to `T`.
	pub fn build_n_as<T: Any>(&self, name: &str, n: usize) -> FactoResult<Vec<T>> {
		engine::build_n_as(self.registry, self.session, name, n)
	}
}

impl std::fmt::Debug for Helper<'_> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Helper")
			.field("name", &self.name)
			.field("index", &self.index)
			.field("session", &self.session.id())
			.finish()
	}
}
