//! Request and response descriptors exchanged between interceptors and the guarded client.
//!
//! [`RequestDescriptor`] carries a typed, always-present header map so decorators mutate
//! headers without shape checks; the authorization stamp is the single fallible mutation.
//! [`ResponseDescriptor`] is immutable to interceptors. The client builds it once the
//! transport resolves and passes it through the response chain untouched.

// crates.io
use http::{
	Method, StatusCode,
	header::{AUTHORIZATION, HeaderMap, HeaderName, HeaderValue},
};
use serde::de::DeserializeOwned;
// self
use crate::{_prelude::*, credential::SessionToken, error::ConfigError};
#[cfg(feature = "reqwest")] use crate::error::TransportError;

/// Mutable descriptor for an outgoing HTTP request.
#[derive(Clone, Debug)]
pub struct RequestDescriptor {
	/// HTTP method used for dispatch.
	pub method: Method,
	/// Absolute request URL.
	pub url: Url,
	/// Typed header map, always present.
	pub headers: HeaderMap,
	/// Optional request body bytes.
	pub body: Option<Vec<u8>>,
}
impl RequestDescriptor {
	/// Creates a descriptor with empty headers and no body.
	pub fn new(method: Method, url: Url) -> Self {
		Self { method, url, headers: HeaderMap::new(), body: None }
	}

	/// Convenience constructor for a GET request.
	pub fn get(url: Url) -> Self {
		Self::new(Method::GET, url)
	}

	/// Convenience constructor for a POST request.
	pub fn post(url: Url) -> Self {
		Self::new(Method::POST, url)
	}

	/// Inserts or replaces a header.
	pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
		self.headers.insert(name, value);

		self
	}

	/// Attaches body bytes.
	pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
		self.body = Some(body.into());

		self
	}

	/// Stamps the authorization header with the bearer form of `token`.
	///
	/// The stored value is marked sensitive so transport-level debug output redacts it,
	/// matching [`SessionToken`]'s own formatting. A token that is not a legal header value
	/// surfaces as [`ConfigError::InvalidHeaderValue`]; the descriptor is left untouched.
	pub fn bearer_authorization(&mut self, token: &SessionToken) -> Result<(), ConfigError> {
		let mut value = HeaderValue::from_str(&format!("Bearer {}", token.expose()))?;

		value.set_sensitive(true);
		self.headers.insert(AUTHORIZATION, value);

		Ok(())
	}

	/// Returns the authorization header as text, when present and valid UTF-8.
	pub fn authorization(&self) -> Option<&str> {
		self.headers.get(AUTHORIZATION).and_then(|value| value.to_str().ok())
	}
}
#[cfg(feature = "reqwest")]
impl From<RequestDescriptor> for reqwest::Request {
	fn from(descriptor: RequestDescriptor) -> Self {
		let mut request = reqwest::Request::new(descriptor.method, descriptor.url);

		*request.headers_mut() = descriptor.headers;

		if let Some(body) = descriptor.body {
			*request.body_mut() = Some(body.into());
		}

		request
	}
}

/// Immutable descriptor for a completed HTTP exchange.
#[derive(Clone, Debug)]
pub struct ResponseDescriptor {
	/// HTTP status code returned by the server.
	pub status: StatusCode,
	/// URL the transport resolved for the exchange.
	pub url: Url,
	/// Response headers.
	pub headers: HeaderMap,
	/// Raw body bytes.
	pub body: Vec<u8>,
}
impl ResponseDescriptor {
	/// Whether the exchange completed with a success (2xx) status.
	pub fn is_success(&self) -> bool {
		self.status.is_success()
	}

	/// Deserializes the body as JSON, reporting the failing path on error.
	pub fn json<T>(&self) -> Result<T>
	where
		T: DeserializeOwned,
	{
		let de = &mut serde_json::Deserializer::from_slice(&self.body);

		Ok(serde_path_to_error::deserialize(de).map_err(ConfigError::from)?)
	}

	/// Reads a reqwest response to completion, capturing status, headers, and body.
	#[cfg(feature = "reqwest")]
	pub(crate) async fn read(response: reqwest::Response) -> Result<Self, TransportError> {
		let status = response.status();
		let url = response.url().clone();
		let headers = response.headers().to_owned();
		let body = response
			.bytes()
			.await
			.map_err(|e| TransportError::network(url.clone(), e))?
			.to_vec();

		Ok(Self { status, url, headers, body })
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn media_url() -> Url {
		Url::parse("https://host/api/media").expect("Fixture URL should parse.")
	}

	#[test]
	fn bearer_authorization_stamps_a_sensitive_header() {
		let mut request = RequestDescriptor::get(media_url());

		request
			.bearer_authorization(&SessionToken::new("abc123"))
			.expect("Token should be a valid header value.");

		assert_eq!(request.authorization(), Some("Bearer abc123"));
		assert!(
			request.headers.get(AUTHORIZATION).expect("Header should be present.").is_sensitive()
		);
	}

	#[test]
	fn invalid_token_bytes_leave_the_descriptor_untouched() {
		let mut request = RequestDescriptor::get(media_url());
		let result = request.bearer_authorization(&SessionToken::new("line\nbreak"));

		assert!(matches!(result, Err(ConfigError::InvalidHeaderValue(_))));
		assert!(request.authorization().is_none());
	}

	#[test]
	fn restamping_replaces_rather_than_appends() {
		let mut request = RequestDescriptor::get(media_url());

		request
			.bearer_authorization(&SessionToken::new("first"))
			.expect("First token should stamp.");
		request
			.bearer_authorization(&SessionToken::new("second"))
			.expect("Second token should stamp.");

		assert_eq!(request.authorization(), Some("Bearer second"));
		assert_eq!(request.headers.get_all(AUTHORIZATION).iter().count(), 1);
	}

	#[test]
	fn json_helper_reports_the_failing_path() {
		#[derive(Debug, Deserialize)]
		struct Payload {
			#[allow(dead_code)]
			name: String,
		}

		let response = ResponseDescriptor {
			status: StatusCode::OK,
			url: media_url(),
			headers: HeaderMap::new(),
			body: b"{\"name\":7}".to_vec(),
		};
		let error = response.json::<Payload>().expect_err("A numeric name must be rejected.");

		assert!(matches!(
			error,
			Error::Config(ConfigError::Deserialize(ref source)) if source.path().to_string() == "name"
		));
	}
}
