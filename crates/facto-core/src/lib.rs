//! Factory registry and build-session engine for test data.
//!
//! Register named factories, then build one product or a batch of products by
//! name. Factories receive a [`Helper`] carrying their position in the batch,
//! a [`Faker`] for leaf fields, and the [`BuildSession`] of the current build
//! tree.
//!
//! # Quick Start
//!
//! ```
//! use facto_core::prelude::*;
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct User {
//!     name: String,
//! }
//!
//! let registry = FactoryRegistry::new();
//! registry.register("User", |_| Ok(User { name: "Wawandco".into() }));
//! registry.register("Users", |h| Ok(User { name: format!("Wawandco {}", h.index()) }));
//!
//! assert_eq!(registry.build_as::<User>("User")?.name, "Wawandco");
//!
//! let users = registry.build_n_as::<User>("Users", 5)?;
//! assert_eq!(users.len(), 5);
//! assert_eq!(users[4].name, "Wawandco 5");
//! # Ok::<(), FactoError>(())
//! ```
//!
//! # Architecture
//!
//! - [`FactoryRegistry`] - thread-safe name to factory mapping; also the entry
//!   point for top-level builds
//! - [`BuildSession`] - scope of one build tree, owning its [`IdentifierCache`]
//! - [`BuildScope`] - a session opened explicitly so several builds can share it
//! - [`Helper`] - what a factory sees; nested builds go through it
//! - [`Faker`] - fake leaf data backed by the `fake` crate
//! - [`FactoSettings`] - identifier strategy and faker locale
//!
//! # Sessions
//!
//! Sessions are passed explicitly rather than discovered from thread-local or
//! global state. A nested build issued through [`Helper::build`] always runs in
//! the session of the factory that issued it, and two top-level builds never
//! share a session unless the caller opened a [`BuildScope`] for both.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod engine;
pub mod error;
pub mod faker;
pub mod helper;
pub mod id;
pub mod prelude;
pub mod registry;
pub mod session;
pub mod settings;

// Re-export commonly used types at crate root
pub use engine::BuildScope;
pub use error::{FactoError, FactoResult};
pub use faker::{Faker, Locale};
pub use helper::Helper;
pub use id::{
	IdGenerator, IdStrategy, IdentifierCache, SequentialIdGenerator, UuidV4Generator,
	UuidV7Generator,
};
pub use registry::{FactoryEntry, FactoryRegistry, Product};
pub use session::BuildSession;
pub use settings::FactoSettings;
pub use uuid::Uuid;
