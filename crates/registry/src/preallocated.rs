//! Ids reserved for built-in types.
//!
//! # Role
//!
//! Pins the element types every storage layer needs to fixed, small ids that
//! do not depend on registration order. The table is written once, in id
//! order, and read by [`crate::TypeRegistry`] construction before any dynamic
//! id exists.
//!
//! # Invariants
//!
//! - Entry `i` holds id `i + 1`, and the last entry is [`HighestPreallocated`]
//!   with id [`HIGHEST_PREALLOCATED`].
//!   - Enforced in: the `const` assertion below (build fails on mismatch).
//! - The dynamic allocator is seeded with [`HIGHEST_PREALLOCATED`].
//!   - Enforced in: [`crate::allocator::TypeIdAllocator::new`].
//!   - Tested by: `invariants::test_preallocated_ids_are_stable`

use std::sync::atomic::AtomicBool;

use crate::{TypeId, TypeTag};

/// Identity of the storage layer's tensor element type.
///
/// The tensor type itself lives with the storage code. It keys its element
/// identity through this tag so that it owns preallocated slot 1.
#[derive(Debug)]
pub struct Tensor {
	_private: (),
}

/// Marker holding the last preallocated id.
#[derive(Debug)]
pub struct HighestPreallocated {
	_private: (),
}

/// Id of [`HighestPreallocated`]; dynamic ids start right after it.
pub const HIGHEST_PREALLOCATED: TypeId = TypeId::from_raw(21);

/// A built-in type bound to a fixed id.
#[derive(Debug, Clone, Copy)]
pub struct PreallocatedType {
	pub id: TypeId,
	pub tag: TypeTag,
}

macro_rules! preallocated_types {
	($($id:literal => $ty:ty),+ $(,)?) => {
		/// Built-in types in id order.
		pub const PREALLOCATED_TYPES: &[PreallocatedType] = &[
			$(PreallocatedType {
				id: TypeId::from_raw($id),
				tag: TypeTag::of::<$ty>(),
			}),+
		];
	};
}

preallocated_types! {
	1 => Tensor,
	2 => f32,
	3 => i32,
	4 => String,
	5 => bool,
	6 => u8,
	7 => i8,
	8 => u16,
	9 => i16,
	10 => i64,
	11 => f64,
	12 => char,
	13 => Box<parking_lot::Mutex<()>>,
	14 => Box<AtomicBool>,
	15 => Vec<i32>,
	16 => Vec<i64>,
	17 => Vec<u64>,
	18 => *mut bool,
	19 => *mut u8,
	20 => *mut i32,
	21 => HighestPreallocated,
}

const _: () = {
	assert!(PREALLOCATED_TYPES.len() == HIGHEST_PREALLOCATED.raw() as usize);
	let mut i = 0;
	while i < PREALLOCATED_TYPES.len() {
		assert!(PREALLOCATED_TYPES[i].id.raw() as usize == i + 1);
		i += 1;
	}
};
