//! Convenience re-exports for common usage.
//!
//! ```
//! use facto_core::prelude::*;
//!
//! let registry = FactoryRegistry::new();
//! registry.register("n", |h: &Helper<'_>| Ok(h.index()));
//! ```

pub use crate::engine::BuildScope;
pub use crate::error::{FactoError, FactoResult};
pub use crate::faker::{Faker, Locale};
pub use crate::helper::Helper;
pub use crate::id::{IdGenerator, IdStrategy, SequentialIdGenerator};
pub use crate::registry::{FactoryRegistry, Product};
pub use crate::session::BuildSession;
pub use crate::settings::FactoSettings;
pub use uuid::Uuid;
