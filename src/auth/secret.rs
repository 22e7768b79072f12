//! Redacting wrapper for credential and token material.

// self
use crate::_prelude::*;

/// Secret string wrapper keeping sensitive material out of logs.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretString(String);
impl SecretString {
	/// Wraps a new secret value.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Returns the inner value. Callers must avoid logging this string.
	pub fn expose(&self) -> &str {
		&self.0
	}

	/// Returns `true` when the wrapped value is empty.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}
impl AsRef<str> for SecretString {
	fn as_ref(&self) -> &str {
		self.expose()
	}
}
impl Debug for SecretString {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("SecretString").field(&"<redacted>").finish()
	}
}
impl Display for SecretString {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}
