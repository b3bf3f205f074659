#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::Barrier;
use std::thread;

use crate::allocator::TypeIdAllocator;
use crate::names::UNINITIALIZED_NAME;
use crate::preallocated::{HIGHEST_PREALLOCATED, HighestPreallocated, PREALLOCATED_TYPES};
use crate::{RegistryError, TypeId, TypeRegistry};

const THREADS: usize = 8;

/// Invariant: concurrent allocations never hand out the same id twice.
///
/// Every id is above the preallocated range regardless of interleaving.
pub(crate) fn inv_concurrent_allocations_are_distinct() {
	const PER_THREAD: usize = 500;
	let alloc = TypeIdAllocator::new();
	let barrier = Barrier::new(THREADS);

	let ids: Vec<TypeId> = thread::scope(|s| {
		let handles: Vec<_> = (0..THREADS)
			.map(|_| {
				s.spawn(|| {
					barrier.wait();
					(0..PER_THREAD)
						.map(|_| alloc.create_type_id().unwrap())
						.collect::<Vec<_>>()
				})
			})
			.collect();
		handles
			.into_iter()
			.flat_map(|h| h.join().unwrap())
			.collect()
	});

	let unique: HashSet<_> = ids.iter().copied().collect();
	assert_eq!(unique.len(), THREADS * PER_THREAD, "duplicate ids handed out");
	assert!(ids.iter().all(|id| *id > HIGHEST_PREALLOCATED));
	assert_eq!(alloc.last_allocated().raw() as usize, HIGHEST_PREALLOCATED.raw() as usize + THREADS * PER_THREAD);
}

#[cfg_attr(test, test)]
pub(crate) fn test_concurrent_allocations_are_distinct() {
	inv_concurrent_allocations_are_distinct()
}

/// Invariant: concurrent first uses of a type agree on one id.
///
/// Exactly one id is consumed no matter how many callers race.
pub(crate) fn inv_memoized_id_is_linearizable() {
	struct Raced;

	let registry = TypeRegistry::new().unwrap();
	let barrier = Barrier::new(THREADS);

	let ids: Vec<TypeId> = thread::scope(|s| {
		let handles: Vec<_> = (0..THREADS)
			.map(|_| {
				s.spawn(|| {
					barrier.wait();
					registry.try_id_of::<Raced>().unwrap()
				})
			})
			.collect();
		handles.into_iter().map(|h| h.join().unwrap()).collect()
	});

	assert!(ids.windows(2).all(|w| w[0] == w[1]), "callers disagreed: {ids:?}");
	assert_eq!(ids[0], TypeId::from_raw(HIGHEST_PREALLOCATED.raw() + 1));
	assert_eq!(registry.last_allocated(), ids[0]);
	assert_eq!(registry.try_id_of::<Raced>().unwrap(), ids[0]);
}

#[cfg_attr(test, test)]
pub(crate) fn test_memoized_id_is_linearizable() {
	inv_memoized_id_is_linearizable()
}

/// Invariant: preallocated types resolve to their table ids without touching
/// the allocator.
pub(crate) fn inv_preallocated_ids_are_stable() {
	let registry = TypeRegistry::new().unwrap();

	assert_eq!(registry.try_id_of::<f32>().unwrap(), TypeId::from_raw(2));
	assert_eq!(registry.try_id_of::<String>().unwrap(), TypeId::from_raw(4));
	assert_eq!(registry.try_id_of::<*mut i32>().unwrap(), TypeId::from_raw(20));
	assert_eq!(registry.try_id_of::<HighestPreallocated>().unwrap(), HIGHEST_PREALLOCATED);

	for entry in PREALLOCATED_TYPES {
		let name = registry.lookup_name(entry.id).unwrap();
		assert_eq!(&*name, entry.tag.name());
	}
	assert_eq!(registry.last_allocated(), HIGHEST_PREALLOCATED);
}

#[cfg_attr(test, test)]
pub(crate) fn test_preallocated_ids_are_stable() {
	inv_preallocated_ids_are_stable()
}

/// Invariant: the sentinel is named before any user registration.
pub(crate) fn inv_sentinel_named_on_construction() {
	let registry = TypeRegistry::new().unwrap();
	assert_eq!(registry.lookup_name(TypeId::UNINITIALIZED).as_deref(), Some(UNINITIALIZED_NAME));
	assert_eq!(registry.entries()[0].0, TypeId::UNINITIALIZED);
	assert_eq!(registry.len(), PREALLOCATED_TYPES.len() + 1);
}

#[cfg_attr(test, test)]
pub(crate) fn test_sentinel_named_on_construction() {
	inv_sentinel_named_on_construction()
}

/// Invariant: two ids never share a display name.
pub(crate) fn inv_duplicate_name_rejected() {
	let registry = TypeRegistry::new().unwrap();
	let first = registry.create_type_id().unwrap();
	let second = registry.create_type_id().unwrap();

	registry.register_name(first, "Shared").unwrap();
	let err = registry.register_name(second, "Shared").unwrap_err();

	assert_eq!(
		err,
		RegistryError::DuplicateName {
			name: "Shared".into(),
			existing: first,
			incoming: second,
		}
	);
	assert_eq!(registry.lookup_name(second), None);
	assert_eq!(registry.lookup_id("Shared"), Some(first));
}

#[cfg_attr(test, test)]
pub(crate) fn test_duplicate_name_rejected() {
	inv_duplicate_name_rejected()
}
