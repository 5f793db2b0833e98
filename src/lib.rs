//! Guarded HTTP client—bearer-token request decoration and session-expiry detection behind
//! composable interceptor seams.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod config;
pub mod credential;
pub mod error;
pub mod http;
pub mod interceptor;
pub mod nav;
pub mod notify;
pub mod obs;

#[cfg(feature = "reqwest")] pub mod client;
#[cfg(all(any(test, feature = "test"), feature = "reqwest"))]
pub mod _preludet {
	//! Convenience re-exports and helpers for integration tests; enabled via `cfg(test)` or the
	//! `test` crate feature.

	pub use crate::_prelude::*;

	// self
	use crate::{
		client::GuardedClient,
		config::AuthConfig,
		credential::MemoryCredentials,
		nav::Navigator,
		notify::MemoryNotifier,
	};

	/// Navigator that counts login redirects instead of driving a UI.
	#[derive(Clone, Debug, Default)]
	pub struct RecordingNavigator(Arc<Mutex<u32>>);
	impl RecordingNavigator {
		/// Number of login redirects requested so far.
		pub fn redirects(&self) -> u32 {
			*self.0.lock()
		}
	}
	impl Navigator for RecordingNavigator {
		fn redirect_to_login(&self) {
			*self.0.lock() += 1;
		}
	}

	/// Collaborators wired into [`build_test_client`], exposed for assertions.
	pub type TestHarness =
		(GuardedClient, Arc<MemoryCredentials>, Arc<MemoryNotifier>, Arc<RecordingNavigator>);

	/// Builds the standard guarded client against the provided auth base URL, returning the
	/// in-memory collaborators so tests can seed tokens and observe notifications.
	pub fn build_test_client(auth_base: &str) -> TestHarness {
		let config =
			AuthConfig::new(Url::parse(auth_base).expect("Failed to parse the test auth base URL."))
				.expect("Failed to derive the test login endpoint.");
		let credentials = Arc::new(MemoryCredentials::default());
		let notifier = Arc::new(MemoryNotifier::default());
		let navigator = Arc::new(RecordingNavigator::default());
		let client = GuardedClient::with_session_guard(
			&config,
			credentials.clone(),
			notifier.clone(),
			navigator.clone(),
		)
		.expect("Failed to build the guarded test client.");

		(client, credentials, notifier, navigator)
	}
}

mod _prelude {
	pub use std::{
		collections::HashMap,
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		sync::Arc,
	};

	pub use parking_lot::{Mutex, RwLock};
	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(test)] use {httpmock as _, session_guard as _, tokio as _};
