//! Identifier generation and the per-session identifier cache.
//!
//! [`IdGenerator`] mints raw identifiers; [`IdentifierCache`] memoizes them by
//! caller-chosen key so that every factory in one build tree that asks for
//! `"company_id"` sees the same value.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use serde::Deserialize;
use uuid::Uuid;

use crate::error::FactoError;

/// Mints fresh identifiers for the identifier cache.
pub trait IdGenerator: Send + Sync {
	/// Returns a newly generated identifier.
	fn generate(&self) -> Uuid;
}

/// Random (version 4) UUIDs. This is the default generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidV4Generator;

impl IdGenerator for UuidV4Generator {
	fn generate(&self) -> Uuid {
		Uuid::new_v4()
	}
}

/// Time-ordered (version 7) UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidV7Generator;

impl IdGenerator for UuidV7Generator {
	fn generate(&self) -> Uuid {
		Uuid::now_v7()
	}
}

/// Deterministic generator for tests.
///
/// Produces `00000000-0000-0000-0000-000000000001`, `...0002` and so on. Clones
/// share the counter.
#[derive(Debug, Clone)]
pub struct SequentialIdGenerator {
	counter: Arc<AtomicU64>,
}

impl SequentialIdGenerator {
	/// Creates a generator whose first identifier is `1`.
	pub fn new() -> Self {
		Self::starting_at(1)
	}

	/// Creates a generator whose first identifier is `start`.
	pub fn starting_at(start: u64) -> Self {
		Self {
			counter: Arc::new(AtomicU64::new(start)),
		}
	}
}

impl Default for SequentialIdGenerator {
	fn default() -> Self {
		Self::new()
	}
}

impl IdGenerator for SequentialIdGenerator {
	fn generate(&self) -> Uuid {
		let n = self.counter.fetch_add(1, Ordering::SeqCst);
		Uuid::from_u128(u128::from(n))
	}
}

/// Which [`IdGenerator`] a registry built from settings uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
	/// [`UuidV4Generator`]
	#[default]
	V4,
	/// [`UuidV7Generator`]
	V7,
	/// [`SequentialIdGenerator`]
	Sequential,
}

impl IdStrategy {
	/// Instantiates the generator for this strategy.
	pub fn generator(self) -> Arc<dyn IdGenerator> {
		match self {
			Self::V4 => Arc::new(UuidV4Generator),
			Self::V7 => Arc::new(UuidV7Generator),
			Self::Sequential => Arc::new(SequentialIdGenerator::new()),
		}
	}
}

impl FromStr for IdStrategy {
	type Err = FactoError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"v4" => Ok(Self::V4),
			"v7" => Ok(Self::V7),
			"sequential" => Ok(Self::Sequential),
			other => Err(FactoError::Settings(format!(
				"unknown id strategy '{}' (expected v4, v7 or sequential)",
				other
			))),
		}
	}
}

impl fmt::Display for IdStrategy {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			Self::V4 => "v4",
			Self::V7 => "v7",
			Self::Sequential => "sequential",
		};
		f.write_str(name)
	}
}

/// Key to identifier memoization owned by exactly one build session.
///
/// Entries are never evicted.
pub struct IdentifierCache {
	generator: Arc<dyn IdGenerator>,
	entries: Mutex<HashMap<String, Uuid>>,
}

impl IdentifierCache {
	/// Creates an empty cache that mints identifiers with `generator`.
	pub fn new(generator: Arc<dyn IdGenerator>) -> Self {
		Self {
			generator,
			entries: Mutex::new(HashMap::new()),
		}
	}

	/// Returns the identifier stored under `key`, generating it on first use.
	pub fn get_or_generate(&self, key: &str) -> Uuid {
		let mut entries = self.entries.lock();
		if let Some(id) = entries.get(key) {
			tracing::trace!(key, %id, "named id cache hit");
			return *id;
		}
		let id = self.generator.generate();
		tracing::trace!(key, %id, "named id generated");
		entries.insert(key.to_string(), id);
		id
	}

	/// Returns the identifier stored under `key` without generating one.
	pub fn get(&self, key: &str) -> Option<Uuid> {
		self.entries.lock().get(key).copied()
	}

	/// Returns all cached entries sorted by key.
	pub fn snapshot(&self) -> Vec<(String, Uuid)> {
		let mut entries: Vec<_> = self
			.entries
			.lock()
			.iter()
			.map(|(key, id)| (key.clone(), *id))
			.collect();
		entries.sort_by(|a, b| a.0.cmp(&b.0));
		entries
	}

	/// Returns the number of cached keys.
	pub fn len(&self) -> usize {
		self.entries.lock().len()
	}

	/// Returns true if no key has been requested yet.
	pub fn is_empty(&self) -> bool {
		self.entries.lock().is_empty()
	}
}

impl fmt::Debug for IdentifierCache {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("IdentifierCache")
			.field("entries", &*self.entries.lock())
			.finish_non_exhaustive()
	}
}
