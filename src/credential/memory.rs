//! Thread-safe in-memory [`CredentialStore`] implementation for local development and tests.

// self
use crate::{
	_prelude::*,
	credential::{CredentialStore, secret::SessionToken},
};

type TokenSlot = Arc<RwLock<Option<SessionToken>>>;

/// Thread-safe credential store that keeps the session token in-process.
///
/// Cloned handles share one slot, so a login flow holding one clone and a client holding
/// another observe the same session.
#[derive(Clone, Debug, Default)]
pub struct MemoryCredentials(TokenSlot);
impl MemoryCredentials {
	/// Creates an empty store with no readable session.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a store seeded with the provided token.
	pub fn with_token(token: impl Into<SessionToken>) -> Self {
		Self(Arc::new(RwLock::new(Some(token.into()))))
	}

	/// Stores or replaces the session token.
	pub fn set(&self, token: impl Into<SessionToken>) {
		*self.0.write() = Some(token.into());
	}

	/// Clears the session token, ending the readable session.
	pub fn clear(&self) {
		*self.0.write() = None;
	}
}
impl CredentialStore for MemoryCredentials {
	fn token(&self) -> Option<SessionToken> {
		self.0.read().clone()
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn clones_share_one_session() {
		let store = MemoryCredentials::new();
		let handle = store.clone();

		assert!(store.token().is_none());

		handle.set("abc123");

		assert_eq!(store.token().map(|t| t.expose().to_owned()), Some("abc123".to_owned()));

		store.clear();

		assert!(handle.token().is_none());
	}

	#[test]
	fn seeded_store_exposes_its_token() {
		let store = MemoryCredentials::with_token("seed-token");

		assert_eq!(store.token().map(|t| t.expose().to_owned()), Some("seed-token".to_owned()));
	}
}
