//! Secure session token wrapper that redacts sensitive material.

// self
use crate::_prelude::*;

/// Redacted session token keeping the bearer credential out of logs.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionToken(String);
impl SessionToken {
	/// Wraps a new token string.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Returns the inner token value. Callers must avoid logging this string.
	pub fn expose(&self) -> &str {
		&self.0
	}
}
impl AsRef<str> for SessionToken {
	fn as_ref(&self) -> &str {
		self.expose()
	}
}
impl From<String> for SessionToken {
	fn from(value: String) -> Self {
		Self(value)
	}
}
impl From<&str> for SessionToken {
	fn from(value: &str) -> Self {
		Self(value.to_owned())
	}
}
impl Debug for SessionToken {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("SessionToken").field(&"<redacted>").finish()
	}
}
impl Display for SessionToken {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}
