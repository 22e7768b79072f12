//! Helpers shared across the integration suites.

#![allow(dead_code)]

// std
use std::sync::Arc;
// self
use skylink_sdk::{
	auth::{BearerToken, Credentials},
	client::Client,
	session::{Session, SessionConfig},
	url::Url,
};

/// Builds a session whose auth and API endpoints both point at a mock server base URL.
pub fn mock_session(base: &str, client_id: &str, client_secret: &str) -> Arc<Session> {
	let auth_endpoint = Url::parse(&format!("{base}/auth/connect/token"))
		.expect("Mock auth endpoint should parse successfully.");
	let api_base =
		Url::parse(&format!("{base}/")).expect("Mock API base should parse successfully.");
	let config = SessionConfig::new(auth_endpoint, api_base);

	Arc::new(Session::new(Credentials::new(client_id, client_secret), config))
}

/// Builds a client over [`mock_session`].
pub fn mock_client(base: &str, client_id: &str, client_secret: &str) -> Client {
	Client::from_session(mock_session(base, client_id, client_secret))
}

/// Seeds the session's token slot, reproducing the "cached token already issued" state.
pub fn seed_token(session: &Session, token_type: &str, access_token: &str) {
	session.token_slot().put(BearerToken::issued(token_type, access_token));
}
