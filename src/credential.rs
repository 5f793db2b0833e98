//! Credential read-side contracts and the built-in in-memory store.

pub mod memory;
pub mod secret;

pub use memory::MemoryCredentials;
pub use secret::SessionToken;

/// Read-only source of the current session token.
///
/// Implementations are queried once per outgoing request and must be cheap, synchronous, and
/// side-effect free. The decorator never caches the returned secret; token lifecycle stays
/// entirely with the store.
pub trait CredentialStore
where
	Self: Send + Sync,
{
	/// Returns the current session token, if a session exists.
	fn token(&self) -> Option<SessionToken>;
}
