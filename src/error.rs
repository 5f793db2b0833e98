//! Client-level error types shared across descriptors, interceptors, and the guarded client.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical client error exposed by public APIs.
///
/// Exactly one condition is classified—[`Error::is_unauthorized`] for HTTP 401. Every other
/// failure is opaque to this crate and forwarded to the caller unchanged.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem, raised before any network I/O.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Transport failure (DNS, TCP, TLS, timeout, cancellation).
	#[error(transparent)]
	Transport(#[from] TransportError),
	/// Server answered with a non-success HTTP status.
	#[error(transparent)]
	Status(#[from] StatusError),
}
impl Error {
	/// HTTP status code carried by the failure, when one exists.
	///
	/// Transport and configuration failures never carry a status, so the unauthorized
	/// classification can only ever match a [`StatusError`].
	pub fn status(&self) -> Option<u16> {
		match self {
			Self::Status(e) => Some(e.status),
			_ => None,
		}
	}

	/// URL of the originating request, when the failure recorded one.
	pub fn url(&self) -> Option<&Url> {
		match self {
			Self::Config(_) => None,
			Self::Transport(e) => e.url(),
			Self::Status(e) => Some(&e.url),
		}
	}

	/// Whether this failure is the classified session-expiry condition (HTTP 401).
	pub fn is_unauthorized(&self) -> bool {
		self.status() == Some(401)
	}
}

/// Configuration and validation failures raised by the client.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// A header value contains bytes that are not legal in HTTP headers.
	#[error("Header value is not valid HTTP.")]
	InvalidHeaderValue(#[from] http::header::InvalidHeaderValue),
	/// The auth base URL cannot be extended with the login path segment.
	#[error("Login endpoint derived from `{base}` is not a valid URL.")]
	InvalidLoginEndpoint {
		/// Configured base authentication URL.
		base: Url,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// A JSON payload could not be deserialized.
	#[error("JSON payload is malformed.")]
	Deserialize(#[from] serde_path_to_error::Error<serde_json::Error>),
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + StdError) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Transport-level failures (network, IO, cancellation).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling `{url}`.")]
	Network {
		/// URL the failed request targeted.
		url: Url,
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// The call was cancelled or timed out upstream before a status arrived.
	#[error("Request to `{url}` was cancelled or timed out.")]
	Cancelled {
		/// URL the abandoned request targeted.
		url: Url,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred during transport.")]
	Io(#[from] std::io::Error),
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(url: Url, src: impl 'static + Send + Sync + StdError) -> Self {
		Self::Network { url, source: Box::new(src) }
	}

	/// URL of the request this failure belongs to, when recorded.
	pub fn url(&self) -> Option<&Url> {
		match self {
			Self::Network { url, .. } | Self::Cancelled { url } => Some(url),
			Self::Io(_) => None,
		}
	}
}

/// Non-success HTTP status observed on an otherwise completed exchange.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
#[error("Request to `{url}` was rejected with HTTP {status}.")]
pub struct StatusError {
	/// HTTP status code returned by the server.
	pub status: u16,
	/// URL the originating request targeted.
	pub url: Url,
	/// Best-effort server-supplied reason extracted from a JSON error body.
	pub message: Option<String>,
}
impl StatusError {
	/// Creates a status failure without a server-supplied reason.
	pub fn new(status: u16, url: Url) -> Self {
		Self { status, url, message: None }
	}

	/// Attaches the server-supplied reason text.
	pub fn with_message(mut self, message: impl Into<String>) -> Self {
		self.message = Some(message.into());

		self
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn any_url() -> Url {
		Url::parse("https://host/api/media").expect("Fixture URL should parse.")
	}

	#[test]
	fn only_status_failures_classify_as_unauthorized() {
		let unauthorized: Error = StatusError::new(401, any_url()).into();
		let forbidden: Error = StatusError::new(403, any_url()).into();
		let cancelled: Error = TransportError::Cancelled { url: any_url() }.into();

		assert!(unauthorized.is_unauthorized());
		assert_eq!(unauthorized.status(), Some(401));
		assert!(!forbidden.is_unauthorized());
		assert!(!cancelled.is_unauthorized());
		assert_eq!(cancelled.status(), None);
	}

	#[test]
	fn failures_expose_their_originating_url() {
		let status: Error = StatusError::new(500, any_url()).into();
		let network: Error =
			TransportError::network(any_url(), std::io::Error::other("connection reset")).into();
		let io: Error = TransportError::Io(std::io::Error::other("pipe closed")).into();

		assert_eq!(status.url(), Some(&any_url()));
		assert_eq!(network.url(), Some(&any_url()));
		assert_eq!(io.url(), None);
	}

	#[test]
	fn status_error_display_names_url_and_code() {
		let error = StatusError::new(502, any_url()).with_message("upstream unavailable");

		assert_eq!(error.to_string(), "Request to `https://host/api/media` was rejected with HTTP 502.");
		assert_eq!(error.message.as_deref(), Some("upstream unavailable"));
	}
}
