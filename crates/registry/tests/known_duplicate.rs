//! Bootstrap failure when two `known_type!` submissions share a display name.

use typemeta_registry::{RegistryError, TypeRegistry, known_type};

// Fn-local types in sibling blocks share one `type_name`.
#[allow(dead_code)]
fn clashing_types() {
	{
		struct Clash;
		known_type!(Clash);
	}
	{
		struct Clash;
		known_type!(Clash);
	}
}

#[test]
fn bootstrap_rejects_duplicate_known_names() {
	let err = TypeRegistry::bootstrap().unwrap_err();
	match err {
		RegistryError::DuplicateName { name, existing, .. } => {
			assert!(name.ends_with("clashing_types::Clash"), "unexpected name {name}");
			assert!(!existing.is_uninitialized());
		}
		other => panic!("expected DuplicateName, got {other}"),
	}
}

#[test]
#[should_panic(expected = "type registry bootstrap failed")]
fn global_panics_on_duplicate_known_names() {
	TypeRegistry::global();
}
