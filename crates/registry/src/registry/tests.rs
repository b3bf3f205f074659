use pretty_assertions::assert_eq;

use super::TypeRegistry;
use crate::allocator::TypeIdAllocator;
use crate::preallocated::{HIGHEST_PREALLOCATED, Tensor};
use crate::{RegistryError, TypeId, TypeMeta};

#[allow(dead_code)]
struct A;
#[allow(dead_code)]
struct B;

fn registry_after(last: u16) -> TypeRegistry {
	TypeRegistry::with_allocator(TypeIdAllocator::starting_after(TypeId::from_raw(last))).unwrap()
}

/// Dynamic ids follow the seed and names resolve back; unknown ids do not.
#[test]
fn test_register_and_lookup_scenario() {
	let registry = registry_after(1000);

	let a = registry.create_type_id().unwrap();
	registry.register_name(a, "A").unwrap();
	let b = registry.create_type_id().unwrap();
	registry.register_name(b, "B").unwrap();

	assert_eq!(a, TypeId::from_raw(1001));
	assert_eq!(b, TypeId::from_raw(1002));
	assert_eq!(registry.lookup_name(a).as_deref(), Some("A"));
	assert_eq!(registry.lookup_name(b).as_deref(), Some("B"));
	assert_eq!(registry.lookup_name(TypeId::from_raw(60_000)), None);
}

#[test]
fn test_type_ids_are_memoized() {
	let registry = TypeRegistry::new().unwrap();

	let a = registry.try_id_of::<A>().unwrap();
	let b = registry.try_id_of::<B>().unwrap();

	assert_eq!(a, TypeId::from_raw(HIGHEST_PREALLOCATED.raw() + 1));
	assert_eq!(b, TypeId::from_raw(HIGHEST_PREALLOCATED.raw() + 2));
	assert_eq!(registry.try_id_of::<A>().unwrap(), a);
	assert_eq!(registry.id_of::<B>(), b);
	assert_eq!(registry.last_allocated(), b);
}

#[test]
fn test_names_come_from_type_names() {
	let registry = TypeRegistry::new().unwrap();
	let meta = registry.try_meta_of::<A>().unwrap();

	assert_eq!(meta.name(), std::any::type_name::<A>());
	assert_eq!(registry.lookup_name(meta.id()).as_deref(), Some(meta.name()));
	assert_eq!(registry.lookup_id(meta.name()), Some(meta.id()));
}

#[test]
fn test_itemsize_is_recorded() {
	let registry = TypeRegistry::new().unwrap();

	assert_eq!(registry.meta_of::<u64>().itemsize(), 8);
	assert_eq!(registry.meta_of::<[u8; 3]>().itemsize(), 3);
	assert_eq!(registry.meta_of::<Tensor>().itemsize(), 0);
	assert_eq!(registry.meta_of::<Tensor>().id(), TypeId::from_raw(1));
}

/// Registries are independent: ids assigned in one do not leak into another.
#[test]
fn test_private_registries_are_isolated() {
	let first = TypeRegistry::new().unwrap();
	let second = TypeRegistry::new().unwrap();

	first.try_id_of::<A>().unwrap();
	let b_first = first.try_id_of::<B>().unwrap();
	let b_second = second.try_id_of::<B>().unwrap();

	assert_ne!(b_first, b_second);
	assert_eq!(second.lookup_name(b_first), None);
}

#[test]
fn test_exhausted_registry_fails_allocation() {
	let registry = registry_after(u16::MAX - 1);

	let err = registry.try_id_of::<A>().unwrap_err();
	assert_eq!(
		err,
		RegistryError::Exhausted {
			last: TypeId::MAX_ASSIGNABLE
		}
	);
	// Preallocated types stay reachable.
	assert_eq!(registry.try_id_of::<bool>().unwrap(), TypeId::from_raw(5));
	// The failed type is not memoized and keeps failing.
	assert!(registry.try_id_of::<A>().is_err());
}

#[test]
#[should_panic(expected = "ran out of type ids")]
fn test_infallible_form_panics_on_exhaustion() {
	let registry = registry_after(u16::MAX - 1);
	registry.id_of::<A>();
}

#[test]
fn test_renaming_an_id_is_rejected() {
	let registry = TypeRegistry::new().unwrap();
	let id = registry.create_type_id().unwrap();
	registry.register_name(id, "First").unwrap();

	let err = registry.register_name(id, "Second").unwrap_err();
	assert!(matches!(err, RegistryError::IdAlreadyNamed { id: got, .. } if got == id));
	assert_eq!(registry.lookup_name(id).as_deref(), Some("First"));
	assert_eq!(registry.lookup_id("Second"), None);
}

#[test]
fn test_sentinel_is_reserved() {
	let registry = TypeRegistry::new().unwrap();

	assert_eq!(
		registry.register_name(TypeId::UNINITIALIZED, "Anything"),
		Err(RegistryError::Reserved(TypeId::UNINITIALIZED))
	);

	let id = registry.create_type_id().unwrap();
	let err = registry.register_name(id, crate::UNINITIALIZED_NAME).unwrap_err();
	assert!(matches!(err, RegistryError::DuplicateName { existing, .. } if existing == TypeId::UNINITIALIZED));
}

/// A rejected name leaves its id unused; the next allocation moves past it.
#[test]
fn test_failed_naming_leaves_gap() {
	let registry = TypeRegistry::new().unwrap();
	let named = registry.create_type_id().unwrap();
	registry.register_name(named, "Taken").unwrap();

	let orphan = registry.create_type_id().unwrap();
	assert!(registry.register_name(orphan, "Taken").is_err());

	let next = registry.create_type_id().unwrap();
	assert!(next > orphan);
	assert_eq!(registry.lookup_name(orphan), None);
}

#[test]
fn test_entries_sorted_by_id() {
	let registry = TypeRegistry::new().unwrap();
	registry.try_id_of::<B>().unwrap();
	registry.try_id_of::<A>().unwrap();

	let entries = registry.entries();
	assert!(entries.windows(2).all(|w| w[0].0 < w[1].0));
	assert_eq!(entries.len(), registry.len());
	assert_eq!(entries.last().map(|(_, name)| name.as_ref()), Some(std::any::type_name::<A>()));
}

#[test]
fn test_meta_equality_uses_id() {
	let registry = TypeRegistry::new().unwrap();
	let a = registry.meta_of::<A>();

	assert_eq!(a, registry.meta_of::<A>());
	assert_ne!(a, registry.meta_of::<B>());
	assert_eq!(TypeMeta::default(), TypeMeta::uninitialized());
	assert!(TypeMeta::uninitialized().is_uninitialized());
	assert_eq!(TypeMeta::uninitialized().to_string(), "nullptr (uninitialized)");
}

/// A type whose display name is already claimed fails without consuming ids,
/// however often it is retried.
#[test]
fn test_name_clash_does_not_consume_ids() {
	let registry = TypeRegistry::new().unwrap();

	let first = {
		#[allow(dead_code)]
		struct Twin;
		registry.try_id_of::<Twin>().unwrap()
	};
	let high_water = registry.last_allocated();

	{
		#[allow(dead_code)]
		struct Twin;
		for _ in 0..1_000 {
			let err = registry.try_id_of::<Twin>().unwrap_err();
			assert!(matches!(err, RegistryError::DuplicateName { existing, .. } if existing == first));
		}
	}

	assert_eq!(registry.last_allocated(), high_water);
	let next = registry.try_id_of::<A>().unwrap();
	assert_eq!(next, TypeId::from_raw(high_water.raw() + 1));
}
