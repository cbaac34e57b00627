//! Build engine integration tests
//!
//! Success Criteria:
//! 1. Single builds return exactly what the factory computed, with index 1
//! 2. Batched builds return `n` products with indices 1..=n, including n = 0
//! 3. Dependent factories compose through nested builds
//! 4. Named identifiers agree across a build tree and differ across trees
//! 5. Re-registering a name replaces the factory
//! 6. Unregistered names fail instead of producing a default product

use facto::prelude::*;
use facto_integration_tests::{
	Company, Department, Event, FakeUser, User, register_crm_factories, register_fake_user,
	register_indexed_users,
};
use proptest::prelude::*;
use rstest::*;

// ============================================================================
// Fixtures
// ============================================================================

#[fixture]
fn crm() -> FactoryRegistry {
	let registry = FactoryRegistry::new();
	register_crm_factories(&registry);
	register_indexed_users(&registry);
	registry
}

// ============================================================================
// Happy Path Tests
// ============================================================================

/// Tests a factory with no dependencies
#[rstest]
fn test_build_simple(crm: FactoryRegistry) {
	let user = crm.build_as::<User>("User").unwrap();
	assert_eq!(
		user,
		User {
			name: "Wawandco".to_string()
		}
	);
}

/// Tests a factory that builds another factory
#[rstest]
fn test_build_dependent(crm: FactoryRegistry) {
	let event = crm.build_as::<Event>("event").unwrap();
	assert_eq!(event.name, "CLICK");
	assert_eq!(event.user.name, "Wawandco");
}

/// Tests faker fields and a nested batch build
#[rstest]
fn test_build_fake_and_build_n(crm: FactoryRegistry) {
	let company = crm.build_as::<Company>("company").unwrap();

	assert!(!company.name.is_empty());
	assert!(!company.address.is_empty());
	assert!(!company.contact_email.is_empty());
	assert_eq!(company.users.len(), 5);
	assert!(company.users.iter().all(|u| !u.name.is_empty()));
}

/// Tests that parent and child agree on a named identifier
#[rstest]
fn test_named_uuid_shared_with_nested_factory(crm: FactoryRegistry) {
	let department = crm.build_as::<Department>("department").unwrap();
	assert_eq!(department.company_id, department.company.id);
}

/// Tests the indexed batch example
#[rstest]
fn test_build_n_users(crm: FactoryRegistry) {
	let users = crm.build_n_as::<User>("Users", 5).unwrap();

	for (i, user) in users.iter().enumerate() {
		assert_eq!(user.name, format!("Wawandco {}", i + 1));
	}
}

/// Tests every faker field used by a factory
#[rstest]
fn test_build_fake_data() {
	let registry = FactoryRegistry::new();
	register_fake_user(&registry, "User");

	let user = registry.build_as::<FakeUser>("User").unwrap();
	assert!(!user.first_name.is_empty());
	assert!(!user.last_name.is_empty());
	assert!(!user.email.is_empty());
	assert!(!user.company.is_empty());
	assert!(!user.address.is_empty());
}

// ============================================================================
// Session Isolation Tests
// ============================================================================

/// Tests that two top-level builds generate independent identifiers
#[rstest]
fn test_named_uuid_independent_across_builds(crm: FactoryRegistry) {
	let first = crm.build_as::<Department>("department").unwrap();
	let second = crm.build_as::<Department>("department").unwrap();

	assert_ne!(first.company_id, second.company_id);
}

/// Tests that a batch shares one session across all elements
#[rstest]
fn test_build_n_departments_share_company_id(crm: FactoryRegistry) {
	let departments = crm.build_n_as::<Department>("department", 3).unwrap();

	let id = departments[0].company_id;
	assert!(departments.iter().all(|d| d.company_id == id && d.company.id == id));
}

/// Tests that an explicit scope lets separate builds reference each other
#[rstest]
fn test_scope_links_separate_builds(crm: FactoryRegistry) {
	let scope = crm.scope();
	let company = scope.build_as::<Company>("company").unwrap();
	let department = scope.build_as::<Department>("department").unwrap();

	assert_eq!(company.id, department.company_id);
	assert_eq!(scope.named_uuid("company_id"), company.id);
}

/// Tests deterministic identifiers with the sequential strategy
#[rstest]
fn test_sequential_strategy_from_settings() {
	let settings = FactoSettings::from_toml_str("[facto]\nid_strategy = \"sequential\"").unwrap();
	let registry = FactoryRegistry::with_settings(&settings);
	register_crm_factories(&registry);

	let first = registry.build_as::<Department>("department").unwrap();
	let second = registry.build_as::<Department>("department").unwrap();

	assert_eq!(first.company_id, Uuid::from_u128(1));
	assert_eq!(second.company_id, Uuid::from_u128(2));
}

// ============================================================================
// Registration Tests
// ============================================================================

/// Tests last-write-wins registration
#[rstest]
fn test_reregistration_replaces_factory() {
	let registry = FactoryRegistry::new();
	registry.register("x", |_| Ok("f1"));
	registry.register("x", |_| Ok("f2"));

	assert_eq!(registry.build_as::<&'static str>("x").unwrap(), "f2");
}

/// Tests replacing a factory with one producing a different type
#[rstest]
fn test_reregistration_with_new_product_type(crm: FactoryRegistry) {
	register_fake_user(&crm, "User");

	assert!(crm.build_as::<FakeUser>("User").is_ok());
	assert!(matches!(
		crm.build_as::<User>("User"),
		Err(FactoError::TypeMismatch { .. })
	));
	// event still asks for the old type
	assert!(matches!(
		crm.build_as::<Event>("event"),
		Err(FactoError::TypeMismatch { ref factory, .. }) if factory == "User"
	));
}

// ============================================================================
// Error Path Tests
// ============================================================================

/// Tests that an unregistered name fails
#[rstest]
#[case::single(false)]
#[case::batch(true)]
fn test_unregistered_name_fails(crm: FactoryRegistry, #[case] batch: bool) {
	let result = if batch {
		crm.build_n("unregistered-name", 3).map(|_| ())
	} else {
		crm.build("unregistered-name").map(|_| ())
	};

	match result {
		Err(FactoError::UnregisteredFactory(name)) => assert_eq!(name, "unregistered-name"),
		other => panic!("expected UnregisteredFactory, got {:?}", other),
	}
}

/// Tests the untyped product path and a caller-side downcast mismatch
#[rstest]
fn test_untyped_product_downcast(crm: FactoryRegistry) {
	let product = crm.build("User").unwrap();
	assert!(product.downcast_ref::<Company>().is_none());
	assert_eq!(product.downcast::<User>().unwrap().name, "Wawandco");
}

/// Tests that a panicking factory unwinds through the engine unchanged
#[rstest]
#[should_panic(expected = "field computation failed")]
fn test_factory_panic_propagates() {
	let registry = FactoryRegistry::new();
	registry.register("panics", |_| -> FactoResult<()> { panic!("field computation failed") });
	let _ = registry.build("panics");
}

// ============================================================================
// Property-based Tests
// ============================================================================

proptest! {
	/// Test: batch length and index sequence
	///
	/// Category: Property
	/// Verifies that build_n yields exactly n products with indices 1..=n.
	#[rstest]
	fn prop_build_n_indices(n in 0usize..64) {
		let registry = FactoryRegistry::new();
		registry.register("idx", |h| Ok(h.index()));

		let indices = registry.build_n_as::<usize>("idx", n).unwrap();
		prop_assert_eq!(indices, (1..=n).collect::<Vec<_>>());
	}
}
