use std::error::Error;

/// Prefix used by [`describe_error`] when type names are compiled out.
pub const UNTYPED_PREFIX: &str = "error (no type information available): ";

/// Formats an error for logs, prefixed with its type name when available.
///
/// With the `type-names` feature the result is `"<type>: <message>"`,
/// otherwise it is [`UNTYPED_PREFIX`] followed by the message.
///
/// The type name is that of the static type `E`. A trait object such as
/// `&dyn Error` or `Box<dyn Error>` is described as `dyn core::error::Error`,
/// not as the concrete error behind it.
pub fn describe_error<E: Error + ?Sized>(err: &E) -> String {
	#[cfg(feature = "type-names")]
	{
		format!("{}: {err}", typemeta_demangle::demangle(std::any::type_name::<E>()))
	}
	#[cfg(not(feature = "type-names"))]
	{
		format!("{UNTYPED_PREFIX}{err}")
	}
}
