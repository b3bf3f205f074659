//! Display names for allocated ids.
//!
//! # Role
//!
//! Maps ids to names and tracks which names are already claimed. All access
//! goes through one mutex, held only for a map lookup and insert.
//!
//! # Invariants
//!
//! - At most one name per id, and at most one id per name.
//!   - Enforced in: [`TypeNames::register`].
//!   - Tested by: `invariants::test_duplicate_name_rejected`
//! - The uninitialized sentinel is named before any caller can register.
//!   - Enforced in: [`TypeNames::new`].
//!   - Tested by: `invariants::test_sentinel_named_on_construction`

use std::sync::Arc;

use parking_lot::Mutex;
use rustc_hash::FxHashMap as HashMap;

use crate::{RegistryError, TypeId};

/// Display name of [`TypeId::UNINITIALIZED`].
pub const UNINITIALIZED_NAME: &str = "nullptr (uninitialized)";

#[derive(Default)]
struct NameTable {
	by_id: HashMap<TypeId, Arc<str>>,
	claimed: HashMap<Arc<str>, TypeId>,
}

/// Mutex-guarded id to name table.
pub struct TypeNames {
	table: Mutex<NameTable>,
}

impl TypeNames {
	/// Creates a table holding only the uninitialized sentinel.
	pub fn new() -> Self {
		let sentinel: Arc<str> = Arc::from(UNINITIALIZED_NAME);
		let mut table = NameTable::default();
		table.by_id.insert(TypeId::UNINITIALIZED, sentinel.clone());
		table.claimed.insert(sentinel, TypeId::UNINITIALIZED);
		Self {
			table: Mutex::new(table),
		}
	}

	/// Names `id`, returning the stored name.
	pub fn register(&self, id: TypeId, name: impl Into<Arc<str>>) -> Result<Arc<str>, RegistryError> {
		if id.is_uninitialized() {
			return Err(RegistryError::Reserved(id));
		}

		let name = name.into();
		let mut table = self.table.lock();

		if let Some(&existing) = table.claimed.get(&name) {
			tracing::warn!(name = %name, existing = %existing, incoming = %id, "duplicate type name");
			return Err(RegistryError::DuplicateName {
				name,
				existing,
				incoming: id,
			});
		}

		if let Some(existing) = table.by_id.get(&id) {
			return Err(RegistryError::IdAlreadyNamed {
				id,
				existing: existing.clone(),
				incoming: name,
			});
		}

		table.by_id.insert(id, name.clone());
		table.claimed.insert(name.clone(), id);
		Ok(name)
	}

	/// Returns the name of `id`, if it has one.
	pub fn lookup(&self, id: TypeId) -> Option<Arc<str>> {
		self.table.lock().by_id.get(&id).cloned()
	}

	/// Returns the id that claimed `name`.
	pub fn owner(&self, name: &str) -> Option<TypeId> {
		self.table.lock().claimed.get(name).copied()
	}

	/// Returns every named id, sorted by id.
	pub fn entries(&self) -> Vec<(TypeId, Arc<str>)> {
		let mut entries: Vec<_> = self
			.table
			.lock()
			.by_id
			.iter()
			.map(|(id, name)| (*id, name.clone()))
			.collect();
		entries.sort_unstable_by_key(|(id, _)| *id);
		entries
	}

	/// Number of named ids, including the sentinel.
	pub fn len(&self) -> usize {
		self.table.lock().by_id.len()
	}

	/// Returns true if no id is named.
	pub fn is_empty(&self) -> bool {
		self.table.lock().by_id.is_empty()
	}
}

impl Default for TypeNames {
	fn default() -> Self {
		Self::new()
	}
}
