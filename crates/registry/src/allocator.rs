//! Dynamic type id allocation.
//!
//! # Role
//!
//! Hands out ids for types outside the preallocated table. The counter is
//! seeded with [`HIGHEST_PREALLOCATED`], so dynamic ids can never collide with
//! preallocated ones.
//!
//! # Invariants
//!
//! - Returned ids are pairwise distinct and strictly increasing in allocation order.
//!   - Enforced in: [`TypeIdAllocator::create_type_id`] (single atomic read-modify-write).
//!   - Tested by: `invariants::test_concurrent_allocations_are_distinct`
//! - The counter never wraps. Once the next value would be `u16::MAX`, every
//!   call fails with [`RegistryError::Exhausted`] and the counter stays pinned.
//!   - Tested by: `allocator::tests::exhaustion_is_sticky`

use std::sync::atomic::{AtomicU16, Ordering};

use crate::preallocated::HIGHEST_PREALLOCATED;
use crate::{RegistryError, TypeId};

/// Lock-free monotonic id allocator.
#[derive(Debug)]
pub struct TypeIdAllocator {
	counter: AtomicU16,
}

impl TypeIdAllocator {
	/// Creates an allocator whose first id follows the preallocated range.
	pub const fn new() -> Self {
		Self::starting_after(HIGHEST_PREALLOCATED)
	}

	/// Creates an allocator whose first id is `last.raw() + 1`.
	pub const fn starting_after(last: TypeId) -> Self {
		Self {
			counter: AtomicU16::new(last.raw()),
		}
	}

	/// Allocates the next id.
	pub fn create_type_id(&self) -> Result<TypeId, RegistryError> {
		let prev = self
			.counter
			.fetch_update(Ordering::AcqRel, Ordering::Acquire, |current| {
				current
					.checked_add(1)
					.filter(|next| *next != u16::MAX)
			})
			.map_err(|current| {
				tracing::warn!(last = current, "type id space exhausted");
				RegistryError::Exhausted {
					last: TypeId::from_raw(current),
				}
			})?;
		Ok(TypeId::from_raw(prev + 1))
	}

	/// Returns the most recently allocated id, or the seed if none was allocated.
	pub fn last_allocated(&self) -> TypeId {
		TypeId::from_raw(self.counter.load(Ordering::Acquire))
	}
}

impl Default for TypeIdAllocator {
	fn default() -> Self {
		Self::new()
	}
}
