//! Process-wide registry integration tests
//!
//! The global registry is shared by every test in this binary, so each test
//! uses its own factory names.

use facto::global;
use facto::prelude::*;
use facto_integration_tests::{Department, User};
use rstest::*;

#[rstest]
fn test_global_register_and_build() {
	global::register("global.User", |_| {
		Ok(User {
			name: "Wawandco".to_string(),
		})
	});

	assert!(global::has("global.User"));
	assert_eq!(global::build_as::<User>("global.User").unwrap().name, "Wawandco");
	assert!(global::build("global.User").unwrap().is::<User>());
}

#[rstest]
fn test_global_build_n() {
	global::register("global.Users", |h| {
		Ok(User {
			name: format!("Wawandco {}", h.index()),
		})
	});

	let users = global::build_n_as::<User>("global.Users", 3).unwrap();
	assert_eq!(users[2].name, "Wawandco 3");
	assert_eq!(global::build_n("global.Users", 0).unwrap().len(), 0);
}

#[rstest]
fn test_global_nested_named_uuid() {
	global::register("global.company_id", |h| Ok(h.named_uuid("company_id")));
	global::register("global.department", |h| {
		Ok(Department {
			name: "Technology".to_string(),
			company_id: h.named_uuid("company_id"),
			company: facto_integration_tests::Company {
				id: h.build_as::<Uuid>("global.company_id")?,
				name: String::new(),
				address: String::new(),
				contact_email: String::new(),
				users: Vec::new(),
			},
		})
	});

	let department = global::build_as::<Department>("global.department").unwrap();
	assert_eq!(department.company_id, department.company.id);
}

#[rstest]
fn test_global_unregistered() {
	assert!(matches!(
		global::build("global.never-registered"),
		Err(FactoError::UnregisteredFactory(_))
	));
}
