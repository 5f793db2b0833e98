//! Bearer-token request decoration.

// self
use crate::{
	_prelude::*,
	credential::CredentialStore,
	http::RequestDescriptor,
	interceptor::RequestInterceptor,
};

/// Stamps `Authorization: Bearer <token>` onto every outgoing request that has a session.
///
/// The store is read once per request. When it holds no token the descriptor passes through
/// untouched; an anonymous request is a valid request, not an error. The decorator performs
/// no network I/O and no UI interaction; its only effect is the single header mutation.
pub struct BearerDecorator {
	credentials: Arc<dyn CredentialStore>,
}
impl BearerDecorator {
	/// Creates a decorator reading from the provided credential store.
	pub fn new(credentials: Arc<dyn CredentialStore>) -> Self {
		Self { credentials }
	}
}
impl RequestInterceptor for BearerDecorator {
	fn decorate(&self, mut request: RequestDescriptor) -> Result<RequestDescriptor> {
		if let Some(token) = self.credentials.token() {
			request.bearer_authorization(&token)?;
		}

		Ok(request)
	}
}
impl Debug for BearerDecorator {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("BearerDecorator").finish_non_exhaustive()
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::credential::MemoryCredentials;

	fn media_request() -> RequestDescriptor {
		RequestDescriptor::get(
			Url::parse("https://host/api/media").expect("Fixture URL should parse."),
		)
	}

	#[test]
	fn present_token_becomes_a_bearer_header() {
		let decorator = BearerDecorator::new(Arc::new(MemoryCredentials::with_token("abc123")));
		let request =
			decorator.decorate(media_request()).expect("Decoration should succeed.");

		assert_eq!(request.authorization(), Some("Bearer abc123"));
	}

	#[test]
	fn absent_token_leaves_the_request_untouched() {
		let decorator = BearerDecorator::new(Arc::new(MemoryCredentials::new()));
		let request =
			decorator.decorate(media_request()).expect("Decoration should succeed.");

		assert!(request.authorization().is_none());
		assert!(request.headers.is_empty());
	}

	#[test]
	fn existing_headers_survive_decoration() {
		let decorator = BearerDecorator::new(Arc::new(MemoryCredentials::with_token("abc123")));
		let request = media_request().with_header(
			http::header::ACCEPT,
			http::HeaderValue::from_static("application/json"),
		);
		let decorated = decorator.decorate(request).expect("Decoration should succeed.");

		assert_eq!(decorated.headers.len(), 2);
		assert_eq!(decorated.authorization(), Some("Bearer abc123"));
	}
}
