//! Session state shared by every resource surface built from one credential pair.

// self
use crate::{
	_prelude::*,
	auth::{Credentials, TokenSlot},
	rate::RateWindow,
};

/// Endpoint configuration for one session.
#[derive(Clone, Debug)]
pub struct SessionConfig {
	/// OAuth2 token endpoint URL.
	pub auth_endpoint: Url,
	/// Enterprise REST base URL; endpoint paths resolve relative to it.
	pub api_base: Url,
}
impl SessionConfig {
	/// Production token endpoint.
	pub const DEFAULT_AUTH_ENDPOINT: &'static str = "https://api.skylink.com/auth/connect/token";
	/// Production Enterprise REST base.
	pub const DEFAULT_API_BASE: &'static str = "https://web-api.skylink.com";

	/// Creates a configuration from explicit endpoints.
	pub fn new(auth_endpoint: Url, api_base: Url) -> Self {
		Self { auth_endpoint, api_base }
	}
}
impl Default for SessionConfig {
	fn default() -> Self {
		Self {
			auth_endpoint: Url::parse(Self::DEFAULT_AUTH_ENDPOINT)
				.expect("Default auth endpoint should be a valid URL."),
			api_base: Url::parse(Self::DEFAULT_API_BASE)
				.expect("Default API base should be a valid URL."),
		}
	}
}

/// Shared state behind every Enterprise API call: HTTP client, credential pair,
/// token slot, and the request-rate window.
///
/// One session per credential pair; resource surfaces hold it behind [`Arc`] so
/// multiple credential pairs can coexist in one process without sharing token
/// state. All interior mutation (token slot, rate window) is lock-guarded, so a
/// session may be driven from parallel tasks.
#[derive(Debug)]
pub struct Session {
	pub(crate) http: ReqwestClient,
	pub(crate) credentials: Credentials,
	pub(crate) config: SessionConfig,
	pub(crate) token: TokenSlot,
	pub(crate) rate: RateWindow,
}
impl Session {
	/// Creates a session with a default HTTP client.
	pub fn new(credentials: Credentials, config: SessionConfig) -> Self {
		Self::with_http_client(ReqwestClient::default(), credentials, config)
	}

	/// Creates a session that reuses a caller-provided HTTP client.
	pub fn with_http_client(
		http: ReqwestClient,
		credentials: Credentials,
		config: SessionConfig,
	) -> Self {
		Self { http, credentials, config, token: TokenSlot::default(), rate: RateWindow::default() }
	}

	/// Endpoint configuration in effect for this session.
	pub fn config(&self) -> &SessionConfig {
		&self.config
	}

	/// Token slot backing this session; exposed for callers that warm-start from a
	/// token issued elsewhere or inspect the cached value.
	pub fn token_slot(&self) -> &TokenSlot {
		&self.token
	}

	/// Rolling request-rate window; exposed for callers that want to observe pacing.
	pub fn rate_window(&self) -> &RateWindow {
		&self.rate
	}
}
