use pretty_assertions::assert_eq;

use super::*;

#[test]
fn identity_returns_input() {
	let out = IdentityDemangler.demangle("_ZN3foo3barEv");
	assert!(matches!(out, Cow::Borrowed(_)));
	assert_eq!(out, "_ZN3foo3barEv");
}

#[test]
fn unparseable_input_is_unchanged() {
	for input in ["", "not a symbol", "_Z!!", "alloc::string::String", "f32"] {
		assert_eq!(demangle(input), input);
	}
}

#[cfg(all(feature = "demangle", not(target_env = "msvc")))]
mod itanium {
	use pretty_assertions::assert_eq;

	use crate::{Demangler, ItaniumDemangler, PlatformDemangler, demangle};

	#[test]
	fn platform_demangler_is_itanium() {
		assert_eq!(std::any::type_name::<PlatformDemangler>(), std::any::type_name::<ItaniumDemangler>());
	}

	#[test]
	fn cpp_function_symbol() {
		assert_eq!(demangle("_ZN3foo3barEv"), "foo::bar()");
		assert_eq!(demangle("_Z1fv"), "f()");
	}

	#[test]
	fn rust_legacy_symbol_drops_hash() {
		assert_eq!(ItaniumDemangler.demangle("_ZN3foo3bar17h05af221e174051e9E"), "foo::bar");
	}

	#[test]
	fn bare_type_encodings_are_not_decoded() {
		// `c` is the Itanium encoding of `char`.
		assert_eq!(demangle("c"), "c");
		assert_eq!(demangle("i"), "i");
	}

	#[test]
	fn demangled_output_has_no_prefix() {
		let out = demangle("_ZN7storage6TensorC1Ev");
		assert!(!out.starts_with("_Z"), "still mangled: {out}");
		assert!(out.contains("storage::Tensor"), "unexpected: {out}");
	}
}
