//! Guarded HTTP client wiring the interceptor pipeline around a reqwest transport.

// self
use crate::{
	_prelude::*,
	config::AuthConfig,
	credential::CredentialStore,
	error::{ConfigError, StatusError, TransportError},
	http::{RequestDescriptor, ResponseDescriptor},
	interceptor::{BearerDecorator, RequestInterceptor, ResponseInterceptor, SessionExpiryGuard},
	nav::Navigator,
	notify::Notifier,
	obs::{self, StageKind, StageOutcome, StageSpan},
};

/// HTTP client that runs a fixed interceptor pipeline around every exchange.
///
/// All collaborators are injected at construction. The expectation is one long-lived
/// instance per process, cloned wherever a handle is needed (cloning is cheap; the
/// transport is reference-counted and the chains are shared). Nothing registers after
/// construction and nothing ever unregisters.
///
/// Pipeline order is fixed and documented: every request interceptor runs before dispatch,
/// in registration order; every response interceptor runs after completion or failure, in
/// registration order. A failure raised by the request chain skips dispatch but still
/// traverses the response chain, so guards observe every outcome.
#[derive(Clone)]
pub struct GuardedClient {
	inner: ReqwestClient,
	request_chain: Vec<Arc<dyn RequestInterceptor>>,
	response_chain: Vec<Arc<dyn ResponseInterceptor>>,
}
impl GuardedClient {
	/// Starts building a client with empty interceptor chains.
	pub fn builder() -> GuardedClientBuilder {
		GuardedClientBuilder::default()
	}

	/// Creates a client wired with the standard session pair: bearer decoration before
	/// dispatch, session-expiry guarding after.
	pub fn with_session_guard(
		config: &AuthConfig,
		credentials: Arc<dyn CredentialStore>,
		notifier: Arc<dyn Notifier>,
		navigator: Arc<dyn Navigator>,
	) -> Result<Self> {
		Self::builder()
			.request_interceptor(BearerDecorator::new(credentials))
			.response_interceptor(SessionExpiryGuard::new(config, notifier, navigator))
			.build()
	}

	/// Executes a request through the full pipeline.
	///
	/// Success means a 2xx status; any other status comes back as [`StatusError`] so the
	/// response chain observes it. The returned failure is whatever entered the response
	/// chain, forwarded unchanged.
	pub async fn execute(&self, request: RequestDescriptor) -> Result<ResponseDescriptor> {
		let span = StageSpan::new(StageKind::Dispatch, "execute");

		obs::record_stage_outcome(StageKind::Dispatch, StageOutcome::Attempt);

		match span.instrument(self.dispatch(request)).await {
			Ok(response) => {
				obs::record_stage_outcome(StageKind::Dispatch, StageOutcome::Success);

				Ok(self
					.response_chain
					.iter()
					.fold(response, |response, interceptor| interceptor.on_success(response)))
			},
			Err(failure) => {
				obs::record_stage_outcome(StageKind::Dispatch, StageOutcome::Failure);

				Err(self
					.response_chain
					.iter()
					.fold(failure, |failure, interceptor| interceptor.on_failure(failure)))
			},
		}
	}

	/// Convenience GET through the full pipeline.
	pub async fn get(&self, url: Url) -> Result<ResponseDescriptor> {
		self.execute(RequestDescriptor::get(url)).await
	}

	async fn dispatch(&self, request: RequestDescriptor) -> Result<ResponseDescriptor> {
		let request = self.decorate(request)?;
		let url = request.url.clone();
		let response = self
			.inner
			.execute(request.into())
			.await
			.map_err(|e| classify_transport_error(url, e))?;
		let descriptor = ResponseDescriptor::read(response).await?;

		if descriptor.is_success() {
			return Ok(descriptor);
		}

		let mut status_error =
			StatusError::new(descriptor.status.as_u16(), descriptor.url.clone());

		if let Some(reason) = extract_server_reason(&descriptor.body) {
			status_error = status_error.with_message(reason);
		}

		Err(status_error.into())
	}

	fn decorate(&self, mut request: RequestDescriptor) -> Result<RequestDescriptor> {
		let _guard = StageSpan::new(StageKind::Decorate, "decorate").entered();

		for interceptor in &self.request_chain {
			request = interceptor.decorate(request)?;
		}

		Ok(request)
	}
}
impl Debug for GuardedClient {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("GuardedClient")
			.field("request_chain", &self.request_chain.len())
			.field("response_chain", &self.response_chain.len())
			.finish_non_exhaustive()
	}
}

/// Builder assembling a [`GuardedClient`] and its interceptor chains.
#[derive(Default)]
pub struct GuardedClientBuilder {
	client: Option<ReqwestClient>,
	request_chain: Vec<Arc<dyn RequestInterceptor>>,
	response_chain: Vec<Arc<dyn ResponseInterceptor>>,
}
impl GuardedClientBuilder {
	/// Reuses an existing reqwest client instead of building a default one.
	pub fn with_client(mut self, client: ReqwestClient) -> Self {
		self.client = Some(client);

		self
	}

	/// Appends a request interceptor; chains run in registration order.
	pub fn request_interceptor(mut self, interceptor: impl 'static + RequestInterceptor) -> Self {
		self.request_chain.push(Arc::new(interceptor));

		self
	}

	/// Appends a response interceptor; chains run in registration order.
	pub fn response_interceptor(mut self, interceptor: impl 'static + ResponseInterceptor) -> Self {
		self.response_chain.push(Arc::new(interceptor));

		self
	}

	/// Builds the client, provisioning a default transport when none was supplied.
	pub fn build(self) -> Result<GuardedClient> {
		let inner = match self.client {
			Some(client) => client,
			None => ReqwestClient::builder().build().map_err(ConfigError::from)?,
		};

		Ok(GuardedClient {
			inner,
			request_chain: self.request_chain,
			response_chain: self.response_chain,
		})
	}
}

fn classify_transport_error(url: Url, error: ReqwestError) -> Error {
	if error.is_timeout() {
		return TransportError::Cancelled { url }.into();
	}

	TransportError::network(url, error).into()
}

fn extract_server_reason(body: &[u8]) -> Option<String> {
	let reason: ServerReason = serde_json::from_slice(body).ok()?;

	reason.message.or(reason.error)
}

/// Error-body shapes servers commonly use for a human-readable reason.
#[derive(Deserialize)]
struct ServerReason {
	message: Option<String>,
	error: Option<String>,
}
