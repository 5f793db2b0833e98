//! Authentication endpoint configuration shared by the guarded client and its interceptors.

// self
use crate::{_prelude::*, error::ConfigError};

/// Authentication endpoints the session guard compares request URLs against.
///
/// The login endpoint is derived once, at construction, by appending the literal `login`
/// segment to the configured base URL text. This is plain text concatenation rather than
/// RFC 3986 join semantics: `https://host/api/auth/` becomes `https://host/api/auth/login`,
/// and a base without a trailing slash extends its last segment. The derived value must
/// match the failing request's URL exactly for the notification loop guard to suppress it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawAuthConfig", into = "RawAuthConfig")]
pub struct AuthConfig {
	auth_base: Url,
	login_endpoint: Url,
}
impl AuthConfig {
	/// Creates a configuration from the base authentication URL, deriving the login endpoint.
	pub fn new(auth_base: Url) -> Result<Self, ConfigError> {
		let raw = format!("{auth_base}login");
		let login_endpoint = Url::parse(&raw)
			.map_err(|e| ConfigError::InvalidLoginEndpoint { base: auth_base.clone(), source: e })?;

		Ok(Self { auth_base, login_endpoint })
	}

	/// Parses a JSON configuration document, reporting the failing path on error.
	pub fn from_json_str(payload: &str) -> Result<Self, ConfigError> {
		let de = &mut serde_json::Deserializer::from_str(payload);

		Ok(serde_path_to_error::deserialize(de)?)
	}

	/// Base authentication URL as configured.
	pub fn auth_base(&self) -> &Url {
		&self.auth_base
	}

	/// Exact URL of the login endpoint, excluded from session-expiry notifications.
	pub fn login_endpoint(&self) -> &Url {
		&self.login_endpoint
	}
}
impl From<AuthConfig> for RawAuthConfig {
	fn from(config: AuthConfig) -> Self {
		Self { auth_base: config.auth_base }
	}
}
impl TryFrom<RawAuthConfig> for AuthConfig {
	type Error = ConfigError;

	fn try_from(raw: RawAuthConfig) -> Result<Self, Self::Error> {
		Self::new(raw.auth_base)
	}
}

/// Wire shape of [`AuthConfig`]; the login endpoint is always re-derived on load.
#[derive(Serialize, Deserialize)]
struct RawAuthConfig {
	auth_base: Url,
}
