//! Process-wide type registry.
//!
//! # Role
//!
//! Ties the allocator, the name table, and a per-type memo together. The
//! first request for a Rust type allocates its id and names it. Later requests
//! read the memo.
//!
//! # Concurrency
//!
//! - **Allocation:** lock-free (see [`TypeIdAllocator`]).
//! - **Memo:** read-locked fast path, then a write-locked re-check before
//!   allocating, so concurrent first uses of one type agree on a single id.
//! - **Lock order:** memo, then names. [`TypeNames`] never calls back out.
//!
//! # Bootstrap
//!
//! [`TypeRegistry::new`] binds the preallocated table. [`TypeRegistry::bootstrap`]
//! additionally reserves ids for every [`known_type!`](crate::known_type)
//! submission, in ascending name order. [`TypeRegistry::global`] is built by
//! `bootstrap` on first access.

use std::any;
use std::sync::{Arc, OnceLock};

use parking_lot::RwLock;
use rustc_hash::FxHashMap as HashMap;
use typemeta_demangle::demangle;

use crate::allocator::TypeIdAllocator;
use crate::known::KnownTypeReg;
use crate::names::TypeNames;
use crate::preallocated::PREALLOCATED_TYPES;
use crate::{RegistryError, TypeId, TypeMeta, TypeTag};

static REGISTRY: OnceLock<TypeRegistry> = OnceLock::new();

/// Owned type id registry.
pub struct TypeRegistry {
	allocator: TypeIdAllocator,
	names: TypeNames,
	types: RwLock<HashMap<any::TypeId, TypeMeta>>,
}

impl TypeRegistry {
	/// Returns the process-wide registry, building it on first access.
	///
	/// # Panics
	///
	/// Panics if bootstrap fails, which means two known types share a
	/// display name or the id space cannot hold them.
	pub fn global() -> &'static Self {
		REGISTRY.get_or_init(|| {
			Self::bootstrap().unwrap_or_else(|err| panic!("type registry bootstrap failed: {err}"))
		})
	}

	/// Creates a registry holding the sentinel and the preallocated table.
	pub fn new() -> Result<Self, RegistryError> {
		Self::with_allocator(TypeIdAllocator::new())
	}

	/// Creates a registry and reserves ids for all `known_type!` submissions.
	pub fn bootstrap() -> Result<Self, RegistryError> {
		let registry = Self::new()?;

		let mut known: Vec<&TypeTag> = Vec::new();
		for reg in inventory::iter::<KnownTypeReg> {
			known.push(&reg.0);
		}
		known.sort_by_key(|tag| tag.name());

		for tag in &known {
			registry.resolve(tag)?;
		}

		tracing::debug!(
			preallocated = PREALLOCATED_TYPES.len(),
			known = known.len(),
			"type registry bootstrapped"
		);
		Ok(registry)
	}

	pub(crate) fn with_allocator(allocator: TypeIdAllocator) -> Result<Self, RegistryError> {
		let registry = Self {
			allocator,
			names: TypeNames::new(),
			types: RwLock::default(),
		};

		{
			let mut types = registry.types.write();
			for entry in PREALLOCATED_TYPES {
				let meta = registry.named_meta(entry.id, demangle(entry.tag.name()), entry.tag.itemsize())?;
				types.insert(entry.tag.key(), meta);
			}
		}

		Ok(registry)
	}

	/// Allocates a fresh id without naming it.
	pub fn create_type_id(&self) -> Result<TypeId, RegistryError> {
		self.allocator.create_type_id()
	}

	/// Names `id`.
	///
	/// Fails if the name is already claimed by any id, if `id` already has a
	/// name, or if `id` is the sentinel.
	pub fn register_name(&self, id: TypeId, name: impl Into<Arc<str>>) -> Result<(), RegistryError> {
		self.names.register(id, name).map(drop)
	}

	/// Returns the display name of `id`.
	pub fn lookup_name(&self, id: TypeId) -> Option<Arc<str>> {
		self.names.lookup(id)
	}

	/// Returns the id that claimed `name`.
	pub fn lookup_id(&self, name: &str) -> Option<TypeId> {
		self.names.owner(name)
	}

	/// Returns the descriptor of `T`, assigning an id on first use.
	pub fn try_meta_of<T: 'static>(&self) -> Result<TypeMeta, RegistryError> {
		self.resolve(&TypeTag::of::<T>())
	}

	/// Returns the id of `T`, assigning one on first use.
	pub fn try_id_of<T: 'static>(&self) -> Result<TypeId, RegistryError> {
		self.try_meta_of::<T>().map(|meta| meta.id())
	}

	/// Infallible form of [`TypeRegistry::try_meta_of`].
	///
	/// # Panics
	///
	/// Panics if `T` needs a new id and none can be assigned.
	pub fn meta_of<T: 'static>(&self) -> TypeMeta {
		self.try_meta_of::<T>().unwrap_or_else(|err| panic!("{err}"))
	}

	/// Infallible form of [`TypeRegistry::try_id_of`].
	///
	/// # Panics
	///
	/// Same as [`TypeRegistry::meta_of`].
	pub fn id_of<T: 'static>(&self) -> TypeId {
		self.meta_of::<T>().id()
	}

	/// Returns every named id, sorted by id.
	pub fn entries(&self) -> Vec<(TypeId, Arc<str>)> {
		self.names.entries()
	}

	/// Number of named ids, including the sentinel.
	pub fn len(&self) -> usize {
		self.names.len()
	}

	pub fn is_empty(&self) -> bool {
		self.names.is_empty()
	}

	/// Highest id handed out by the dynamic allocator so far.
	pub fn last_allocated(&self) -> TypeId {
		self.allocator.last_allocated()
	}

	fn resolve(&self, tag: &TypeTag) -> Result<TypeMeta, RegistryError> {
		let key = tag.key();
		if let Some(meta) = self.types.read().get(&key) {
			return Ok(meta.clone());
		}

		let mut types = self.types.write();
		if let Some(meta) = types.get(&key) {
			return Ok(meta.clone());
		}

		// A clashing name must not consume an id.
		let name: Arc<str> = demangle(tag.name()).into();
		if let Some(existing) = self.names.owner(&name) {
			tracing::warn!(name = %name, existing = %existing, "duplicate type name");
			return Err(RegistryError::DuplicateName {
				name,
				existing,
				incoming: TypeId::UNINITIALIZED,
			});
		}

		let id = self.allocator.create_type_id()?;
		let meta = self.named_meta(id, name, tag.itemsize())?;
		tracing::debug!(id = %id, name = meta.name(), "assigned type id");
		types.insert(key, meta.clone());
		Ok(meta)
	}

	fn named_meta(&self, id: TypeId, name: impl Into<Arc<str>>, itemsize: usize) -> Result<TypeMeta, RegistryError> {
		let name = self.names.register(id, name)?;
		Ok(TypeMeta::new(id, name, itemsize))
	}
}

impl std::fmt::Debug for TypeRegistry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("TypeRegistry")
			.field("named", &self.names.len())
			.field("last_allocated", &self.last_allocated())
			.finish()
	}
}

#[cfg(test)]
mod tests;
