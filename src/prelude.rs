//! Convenience re-exports for common usage.
//!
//! ```rust
//! use facto::prelude::*;
//!
//! let registry = FactoryRegistry::new();
//! registry.register("one", |_| Ok(1u8));
//! ```

pub use facto_core::prelude::*;
