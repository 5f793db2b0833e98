//! Notification contracts surfaced to the hosting UI.

pub mod memory;

pub use memory::MemoryNotifier;

// self
use crate::_prelude::*;

/// Severity levels understood by notification hosts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
	/// A failure requiring user attention.
	Error,
	/// A degraded but recoverable condition.
	Warning,
	/// Informational only.
	Info,
}
impl Severity {
	/// Returns a stable label suitable for host styling or log fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			Severity::Error => "error",
			Severity::Warning => "warning",
			Severity::Info => "info",
		}
	}
}
impl Display for Severity {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Callback invoked when the user activates a notification (e.g. clicks it).
#[derive(Clone)]
pub struct NotificationAction(Arc<dyn Fn() + Send + Sync>);
impl NotificationAction {
	/// Wraps an activation callback.
	pub fn new(action: impl 'static + Fn() + Send + Sync) -> Self {
		Self(Arc::new(action))
	}

	/// Runs the callback.
	pub fn run(&self) {
		(self.0)();
	}
}
impl Debug for NotificationAction {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("NotificationAction(..)")
	}
}

/// A single user-facing notification event.
#[derive(Clone, Debug)]
pub struct Notification {
	/// Identity key; hosts keep at most one visible notification per id.
	pub id: String,
	/// Visual severity.
	pub severity: Severity,
	/// Short title.
	pub title: String,
	/// Body text.
	pub message: String,
	/// Whether the host may dismiss the notification on its own.
	pub auto_close: bool,
	on_activate: Option<NotificationAction>,
}
impl Notification {
	/// Creates an auto-closing notification with no activation callback.
	pub fn new(
		id: impl Into<String>,
		severity: Severity,
		title: impl Into<String>,
		message: impl Into<String>,
	) -> Self {
		Self {
			id: id.into(),
			severity,
			title: title.into(),
			message: message.into(),
			auto_close: true,
			on_activate: None,
		}
	}

	/// Keeps the notification visible until the user dismisses or activates it.
	pub fn keep_open(mut self) -> Self {
		self.auto_close = false;

		self
	}

	/// Binds an activation callback.
	pub fn on_activate(mut self, action: impl 'static + Fn() + Send + Sync) -> Self {
		self.on_activate = Some(NotificationAction::new(action));

		self
	}

	/// Invokes the activation callback, if one is bound.
	pub fn activate(&self) {
		if let Some(action) = &self.on_activate {
			action.run();
		}
	}
}

/// Sink for notifications raised by response guards.
///
/// At-most-one-visible-per-id is the implementation's responsibility; guards only supply a
/// stable identity key. Publishing must not block the calling request turn.
pub trait Notifier
where
	Self: Send + Sync,
{
	/// Publishes a notification to the hosting UI.
	fn publish(&self, notification: Notification);
}
