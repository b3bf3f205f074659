use std::sync::Arc;

use crate::TypeId;

/// Type registration errors.
///
/// Every variant is a programming or configuration error. None is transient,
/// and callers are not expected to retry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
	/// The 16-bit id space has no ids left.
	#[error(
		"ran out of type ids after {last}: more than {max} distinct types would need a wider TypeId",
		max = TypeId::MAX_ASSIGNABLE.raw()
	)]
	Exhausted { last: TypeId },

	/// Two ids claimed the same display name.
	#[error("duplicate type name {name:?}: claimed by {existing}, requested again by {incoming}")]
	DuplicateName {
		name: Arc<str>,
		existing: TypeId,
		/// Id being named, or [`TypeId::UNINITIALIZED`] when the clash was
		/// caught before an id was allocated.
		incoming: TypeId,
	},

	/// An id that already has a name was given another one.
	#[error("type id {id} is already named {existing:?}, refusing {incoming:?}")]
	IdAlreadyNamed {
		id: TypeId,
		existing: Arc<str>,
		incoming: Arc<str>,
	},

	/// The id is reserved and cannot be named by callers.
	#[error("type id {0} is reserved")]
	Reserved(TypeId),
}
