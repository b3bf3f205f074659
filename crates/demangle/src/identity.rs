use std::borrow::Cow;

use crate::Demangler;

/// Pass-through demangler for builds without a demangling backend.
#[derive(Debug, Default, Clone, Copy)]
pub struct IdentityDemangler;

impl Demangler for IdentityDemangler {
	fn demangle<'a>(&self, mangled: &'a str) -> Cow<'a, str> {
		Cow::Borrowed(mangled)
	}
}
