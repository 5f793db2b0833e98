//! Navigation contract used by notification activation callbacks.

/// Client-side navigation capability.
///
/// The session guard never navigates on its own; it binds
/// [`redirect_to_login`](Navigator::redirect_to_login) to a notification's activation
/// callback so the user decides when to leave the current view.
pub trait Navigator
where
	Self: Send + Sync,
{
	/// Navigates the hosting application to its login view.
	fn redirect_to_login(&self);
}
