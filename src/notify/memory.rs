//! Replace-by-id in-memory [`Notifier`] implementation for local development and tests.

// self
use crate::{
	_prelude::*,
	notify::{Notification, Notifier},
};

type Board = Arc<RwLock<HashMap<String, Notification>>>;
type RaiseCounts = Arc<RwLock<HashMap<String, u64>>>;

/// Thread-safe notifier that keeps at most one visible notification per identity key.
///
/// Publishing under an existing id replaces the visible notification and bumps a raise
/// counter, so a burst of identical events collapses into one banner while the counter
/// still records how often it fired.
#[derive(Clone, Debug, Default)]
pub struct MemoryNotifier {
	visible: Board,
	raised: RaiseCounts,
}
impl MemoryNotifier {
	/// Returns the currently visible notification for `id`, if any.
	pub fn visible(&self, id: &str) -> Option<Notification> {
		self.visible.read().get(id).cloned()
	}

	/// Number of times `id` has been raised since construction; survives dismissal.
	pub fn raised(&self, id: &str) -> u64 {
		self.raised.read().get(id).copied().unwrap_or(0)
	}

	/// Number of distinct notifications currently visible.
	pub fn visible_count(&self) -> usize {
		self.visible.read().len()
	}

	/// Dismisses the notification with the provided id, returning it when one was visible.
	pub fn dismiss(&self, id: &str) -> Option<Notification> {
		self.visible.write().remove(id)
	}
}
impl Notifier for MemoryNotifier {
	fn publish(&self, notification: Notification) {
		*self.raised.write().entry(notification.id.clone()).or_insert(0) += 1;
		self.visible.write().insert(notification.id.clone(), notification);
	}
}
