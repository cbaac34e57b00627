//! # facto
//!
//! Named test-data factories for Rust.
//!
//! Register a constructor under a name, then build one product or a batch of
//! products by that name. Factories can build other factories, and every
//! factory in one build tree shares a session whose named identifiers stay
//! consistent, so a child record can carry its parent's id without either
//! factory passing it around.
//!
//! ## Quick Example
//!
//! ```rust
//! use facto::prelude::*;
//!
//! #[derive(Debug, Clone)]
//! struct Company {
//!     id: Uuid,
//!     name: String,
//! }
//!
//! #[derive(Debug, Clone)]
//! struct Department {
//!     name: String,
//!     company_id: Uuid,
//!     company: Company,
//! }
//!
//! let registry = FactoryRegistry::new();
//!
//! registry.register("company", |h| {
//!     Ok(Company {
//!         id: h.named_uuid("company_id"),
//!         name: h.faker().company(),
//!     })
//! });
//!
//! registry.register("department", |h| {
//!     Ok(Department {
//!         name: "Technology".to_string(),
//!         company_id: h.named_uuid("company_id"),
//!         company: h.build_as::<Company>("company")?,
//!     })
//! });
//!
//! let department = registry.build_as::<Department>("department")?;
//! assert_eq!(department.company_id, department.company.id);
//! # Ok::<(), FactoError>(())
//! ```
//!
//! ## Process-wide registry
//!
//! The [`global`] module offers free functions over
//! [`FactoryRegistry::global`] for code that wants a single ambient registry.
//! Prefer an owned [`FactoryRegistry`] in tests so registrations do not leak
//! between them.

pub mod global;
pub mod prelude;

pub use facto_core::{engine, error, faker, helper, id, registry, session, settings};

// Re-export core types
pub use facto_core::{
	BuildScope, BuildSession, FactoError, FactoResult, FactoSettings, FactoryEntry,
	FactoryRegistry, Faker, Helper, IdGenerator, IdStrategy, IdentifierCache, Locale, Product,
	SequentialIdGenerator, UuidV4Generator, UuidV7Generator,
};

// Re-export the identifier type factories hand out
pub use facto_core::Uuid;
