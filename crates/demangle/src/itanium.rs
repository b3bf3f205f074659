//! Demangling for Rust and Itanium C++ symbols.

use std::borrow::Cow;

use cpp_demangle::{DemangleOptions, Symbol};

use crate::Demangler;

/// Demangler for Rust (legacy and v0) and Itanium C++ symbols.
///
/// Rust decoding is tried first. C++ decoding only runs on `_Z`-prefixed
/// input, since bare type encodings such as `f` or `c` would otherwise decode
/// as builtin C++ type names.
#[derive(Debug, Default, Clone, Copy)]
pub struct ItaniumDemangler;

impl Demangler for ItaniumDemangler {
	fn demangle<'a>(&self, mangled: &'a str) -> Cow<'a, str> {
		if let Ok(symbol) = rustc_demangle::try_demangle(mangled) {
			// Alternate form drops the trailing hash.
			return Cow::Owned(format!("{symbol:#}"));
		}

		if mangled.starts_with("_Z")
			&& let Some(name) = demangle_cpp(mangled)
		{
			return Cow::Owned(name);
		}

		tracing::trace!(symbol = mangled, "symbol left mangled");
		Cow::Borrowed(mangled)
	}
}

fn demangle_cpp(mangled: &str) -> Option<String> {
	let symbol = Symbol::new(mangled).ok()?;
	symbol.demangle(&DemangleOptions::default()).ok()
}
