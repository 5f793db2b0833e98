//! Session-expiry detection on failed exchanges.

// self
use crate::{
	_prelude::*,
	config::AuthConfig,
	interceptor::ResponseInterceptor,
	nav::Navigator,
	notify::{Notification, Notifier, Severity},
	obs::{self, StageKind, StageOutcome, StageSpan},
};

/// Notification identity key shared by every session-expiry event.
///
/// Reusing one id lets the notification host replace an existing banner instead of
/// stacking a new one per failed call.
pub const AUTH_NOTIFICATION_ID: &str = "authentication-error";

const AUTH_NOTIFICATION_TITLE: &str = "Authentication error";
const AUTH_NOTIFICATION_MESSAGE: &str =
	"You have been logged out. Please click here to log in again.";

/// Raises a re-authentication notification when the session expires mid-use.
///
/// The guard fires on any failure carrying HTTP 401 whose URL is not the login endpoint
/// itself; a rejected login attempt must not raise the banner that exists to send the user
/// back to login. Successes pass through untouched and every failure is forwarded to the
/// caller unchanged regardless of the guard outcome. Retry or abandonment stays with the
/// caller.
pub struct SessionExpiryGuard {
	login_endpoint: Url,
	notifier: Arc<dyn Notifier>,
	navigator: Arc<dyn Navigator>,
}
impl SessionExpiryGuard {
	/// Creates a guard publishing through `notifier` and redirecting through `navigator`.
	pub fn new(
		config: &AuthConfig,
		notifier: Arc<dyn Notifier>,
		navigator: Arc<dyn Navigator>,
	) -> Self {
		Self { login_endpoint: config.login_endpoint().clone(), notifier, navigator }
	}

	fn should_notify(&self, failure: &Error) -> bool {
		failure.is_unauthorized() && failure.url() != Some(&self.login_endpoint)
	}

	fn notification(&self) -> Notification {
		let navigator = Arc::clone(&self.navigator);

		Notification::new(
			AUTH_NOTIFICATION_ID,
			Severity::Error,
			AUTH_NOTIFICATION_TITLE,
			AUTH_NOTIFICATION_MESSAGE,
		)
		.keep_open()
		.on_activate(move || navigator.redirect_to_login())
	}
}
impl ResponseInterceptor for SessionExpiryGuard {
	fn on_failure(&self, failure: Error) -> Error {
		let _guard = StageSpan::new(StageKind::Guard, "on_failure").entered();

		if self.should_notify(&failure) {
			obs::record_stage_outcome(StageKind::Guard, StageOutcome::Failure);
			self.notifier.publish(self.notification());
		}

		failure
	}
}
impl Debug for SessionExpiryGuard {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("SessionExpiryGuard")
			.field("login_endpoint", &self.login_endpoint.as_str())
			.finish_non_exhaustive()
	}
}
