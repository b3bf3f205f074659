//! Best-effort demangling of compiler symbol names.
//!
//! # Role
//!
//! Turns encoded symbol names into readable ones for diagnostics. Demangling
//! never fails: input that no backend understands comes back unchanged.
//!
//! # Backends
//!
//! The backend is picked at build time. [`PlatformDemangler`] is
//! [`ItaniumDemangler`] when the `demangle` feature is on and the target does
//! not use the MSVC ABI, and [`IdentityDemangler`] otherwise. Callers depend on
//! the [`Demangler`] trait or the [`demangle`] shorthand only.

use std::borrow::Cow;

mod identity;
#[cfg(all(feature = "demangle", not(target_env = "msvc")))]
mod itanium;

pub use identity::IdentityDemangler;
#[cfg(all(feature = "demangle", not(target_env = "msvc")))]
pub use itanium::ItaniumDemangler;

/// Converts an encoded symbol name into a display name.
pub trait Demangler: Send + Sync {
	/// Returns the demangled form of `mangled`, or `mangled` itself when it
	/// cannot be decoded.
	fn demangle<'a>(&self, mangled: &'a str) -> Cow<'a, str>;
}

/// Demangler selected for this build.
#[cfg(all(feature = "demangle", not(target_env = "msvc")))]
pub type PlatformDemangler = ItaniumDemangler;

/// Demangler selected for this build.
#[cfg(not(all(feature = "demangle", not(target_env = "msvc"))))]
pub type PlatformDemangler = IdentityDemangler;

/// Demangles `mangled` with the [`PlatformDemangler`].
pub fn demangle(mangled: &str) -> Cow<'_, str> {
	PlatformDemangler::default().demangle(mangled)
}

#[cfg(test)]
mod tests;
