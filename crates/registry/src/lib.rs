//! Process-wide runtime type identification.
//!
//! Assigns small, stable integer ids to the Rust types stored in tensors and
//! blobs, and maps those ids to readable names for diagnostics.
//!
//! # Mental Model
//!
//! 1. **Preallocation:** built-in types own fixed ids `1..=21` from
//!    [`preallocated::PREALLOCATED_TYPES`]. Id `0` is the uninitialized sentinel.
//! 2. **Known types:** [`known_type!`] submissions get the next ids when the
//!    global registry is built, in name order.
//! 3. **First use:** any other type gets an id from the lock-free
//!    [`TypeIdAllocator`] the first time it is asked for. Concurrent first
//!    uses agree on one id.
//! 4. **Lookup:** [`TypeRegistry::lookup_name`] turns an id back into a name.
//!
//! # Key Types
//!
//! | Type | Role |
//! |------|------|
//! | [`TypeRegistry`] | Owned registry; [`TypeRegistry::global`] is the process instance. |
//! | [`TypeId`] | 16-bit id; never reused within a process. |
//! | [`TypeMeta`] | Id, name, and item size of one element type. |
//! | [`TypeIdAllocator`] | Monotonic counter seeded past the preallocated range. |
//! | [`TypeNames`] | Mutex-guarded id to name table with duplicate detection. |
//!
//! # Errors
//!
//! Id exhaustion and duplicate names are programming errors. The `try_*`
//! methods return them as [`RegistryError`]. The plain forms panic.

pub mod allocator;
mod describe;
mod error;
mod id;
#[cfg(any(test, doc))]
pub(crate) mod invariants;
mod known;
mod meta;
pub mod names;
pub mod preallocated;
mod registry;
mod tag;

pub use allocator::TypeIdAllocator;
pub use describe::{UNTYPED_PREFIX, describe_error};
pub use error::RegistryError;
pub use id::TypeId;
pub use known::KnownTypeReg;
pub use meta::TypeMeta;
pub use names::{TypeNames, UNINITIALIZED_NAME};
pub use registry::TypeRegistry;
pub use tag::TypeTag;
pub use typemeta_demangle::{Demangler, PlatformDemangler, demangle};

#[doc(hidden)]
pub mod __private {
	pub use inventory;
}
