use core::any;
use core::fmt;

/// Const-constructible handle on a Rust type.
///
/// Carries the type's identity, its name as reported by the compiler, and its
/// size. Tags live in static tables and `inventory` records, so everything is
/// stored as function pointers resolved on demand.
#[derive(Clone, Copy)]
pub struct TypeTag {
	key: fn() -> any::TypeId,
	name: fn() -> &'static str,
	itemsize: usize,
}

impl TypeTag {
	/// Returns the tag for `T`.
	pub const fn of<T: 'static>() -> Self {
		Self {
			key: any::TypeId::of::<T>,
			name: any::type_name::<T>,
			itemsize: size_of::<T>(),
		}
	}

	/// Returns the language-level identity of the tagged type.
	pub fn key(&self) -> any::TypeId {
		(self.key)()
	}

	/// Returns the compiler-reported name of the tagged type.
	pub fn name(&self) -> &'static str {
		(self.name)()
	}

	/// Returns `size_of` the tagged type.
	pub const fn itemsize(&self) -> usize {
		self.itemsize
	}

	/// Returns true if this tag was built for `T`.
	pub fn is<T: 'static>(&self) -> bool {
		self.key() == any::TypeId::of::<T>()
	}
}

impl fmt::Debug for TypeTag {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("TypeTag")
			.field("name", &self.name())
			.field("itemsize", &self.itemsize)
			.finish()
	}
}

impl PartialEq for TypeTag {
	fn eq(&self, other: &Self) -> bool {
		self.key() == other.key()
	}
}

impl Eq for TypeTag {}
