//! Build sessions.
//!
//! A [`BuildSession`] is the scope of one top-level build request. It owns the
//! [`IdentifierCache`] shared by every factory invoked in that request,
//! including factories reached through nested builds. Sessions are passed
//! explicitly (through [`crate::Helper`] and [`crate::BuildScope`]), never
//! looked up from ambient state, so two build trees running on different
//! threads cannot observe each other's identifiers.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use uuid::Uuid;

use crate::id::{IdGenerator, IdentifierCache};

/// Execution context for one top-level build request.
#[derive(Debug)]
pub struct BuildSession {
	id: Uuid,
	ids: IdentifierCache,
	invocations: AtomicUsize,
}

impl BuildSession {
	/// Creates a session with an empty identifier cache.
	///
	/// # Examples
	///
	/// ```
	/// use std::sync::Arc;
	/// use facto_core::{BuildSession, SequentialIdGenerator};
	///
	/// let session = BuildSession::new(Arc::new(SequentialIdGenerator::new()));
	/// let a = session.named_uuid("company_id");
	/// assert_eq!(a, session.named_uuid("company_id"));
	/// ```
	pub fn new(generator: Arc<dyn IdGenerator>) -> Self {
		Self {
			id: Uuid::new_v4(),
			ids: IdentifierCache::new(generator),
			invocations: AtomicUsize::new(0),
		}
	}

	/// Session identifier, used to correlate trace output.
	pub fn id(&self) -> Uuid {
		self.id
	}

	/// Returns the identifier for `key`, generating it on first request.
	pub fn named_uuid(&self, key: &str) -> Uuid {
		self.ids.get_or_generate(key)
	}

	/// Returns every named identifier requested so far, sorted by key.
	pub fn named_ids(&self) -> Vec<(String, Uuid)> {
		self.ids.snapshot()
	}

	/// Number of factory invocations performed under this session.
	pub fn invocations(&self) -> usize {
		self.invocations.load(Ordering::Relaxed)
	}

	pub(crate) fn record_invocation(&self) {
		self.invocations.fetch_add(1, Ordering::Relaxed);
	}
}
