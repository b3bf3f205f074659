use core::fmt;
use core::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::names::UNINITIALIZED_NAME;
use crate::{TypeId, TypeRegistry};

/// Element type descriptor held by storage.
///
/// Equality and hashing use the id only.
#[derive(Debug, Clone)]
pub struct TypeMeta {
	id: TypeId,
	name: Arc<str>,
	itemsize: usize,
}

impl TypeMeta {
	pub(crate) fn new(id: TypeId, name: Arc<str>, itemsize: usize) -> Self {
		Self { id, name, itemsize }
	}

	/// Descriptor of storage that has no element type yet.
	pub fn uninitialized() -> Self {
		Self::new(TypeId::UNINITIALIZED, Arc::from(UNINITIALIZED_NAME), 0)
	}

	/// Returns the descriptor of `T` from the global registry.
	///
	/// # Panics
	///
	/// Panics if `T` needs a new id and the id space is exhausted.
	pub fn of<T: 'static>() -> Self {
		TypeRegistry::global().meta_of::<T>()
	}

	/// Returns the id of `T` from the global registry.
	///
	/// # Panics
	///
	/// Same as [`TypeMeta::of`].
	pub fn id_of<T: 'static>() -> TypeId {
		TypeRegistry::global().id_of::<T>()
	}

	pub fn id(&self) -> TypeId {
		self.id
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	/// Size in bytes of one element.
	pub fn itemsize(&self) -> usize {
		self.itemsize
	}

	pub fn is_uninitialized(&self) -> bool {
		self.id.is_uninitialized()
	}

	/// Returns true if this descriptor belongs to `T` in the global registry.
	pub fn matches<T: 'static>(&self) -> bool {
		self.id == Self::id_of::<T>()
	}
}

impl Default for TypeMeta {
	fn default() -> Self {
		Self::uninitialized()
	}
}

impl PartialEq for TypeMeta {
	fn eq(&self, other: &Self) -> bool {
		self.id == other.id
	}
}

impl Eq for TypeMeta {}

impl Hash for TypeMeta {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.id.hash(state);
	}
}

impl fmt::Display for TypeMeta {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.name)
	}
}
