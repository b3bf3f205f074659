use core::fmt;

/// Process-local identifier of a registered type.
///
/// Ids are 16 bits wide. `0` is the [uninitialized](TypeId::UNINITIALIZED)
/// sentinel, `1..=21` are [preallocated](crate::preallocated), and the dynamic
/// allocator hands out the rest up to [`TypeId::MAX_ASSIGNABLE`]. An id is
/// never reused or reassigned for the lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypeId(u16);

impl TypeId {
	/// Id of storage that has no element type yet.
	pub const UNINITIALIZED: Self = Self(0);

	/// Largest id the allocator will ever return.
	pub const MAX_ASSIGNABLE: Self = Self(u16::MAX - 1);

	/// Wraps a raw id value.
	pub const fn from_raw(raw: u16) -> Self {
		Self(raw)
	}

	/// Returns the raw id value.
	pub const fn raw(self) -> u16 {
		self.0
	}

	/// Returns true for the uninitialized sentinel.
	pub const fn is_uninitialized(self) -> bool {
		self.0 == Self::UNINITIALIZED.0
	}
}

impl Default for TypeId {
	fn default() -> Self {
		Self::UNINITIALIZED
	}
}

impl fmt::Display for TypeId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{}", self.0)
	}
}
