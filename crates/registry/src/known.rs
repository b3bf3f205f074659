//! Registration convention for types that should get ids at startup.

use crate::TypeTag;

/// `inventory` record submitted by [`known_type!`](crate::known_type).
pub struct KnownTypeReg(pub TypeTag);

inventory::collect!(KnownTypeReg);

/// Reserves ids for the listed types when the global registry is built.
///
/// Unlisted types still get ids on first use. Listing a type moves that
/// assignment to startup, where a duplicate display name fails fast.
///
/// ```ignore
/// struct Matrix;
/// typemeta_registry::known_type!(Matrix, Vec<Matrix>);
/// ```
#[macro_export]
macro_rules! known_type {
	($($ty:ty),+ $(,)?) => {
		$(
			$crate::__private::inventory::submit! {
				$crate::KnownTypeReg($crate::TypeTag::of::<$ty>())
			}
		)+
	};
}
