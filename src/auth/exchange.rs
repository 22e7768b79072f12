//! Client-credentials exchange and the session-level token lifecycle.

// self
use crate::{_prelude::*, auth::token::BearerToken, session::Session};

impl Session {
	/// Returns the cached bearer token, exchanging credentials on a miss.
	///
	/// Concurrent callers racing on an empty slot share one in-flight exchange instead
	/// of stampeding the token endpoint.
	pub(crate) async fn ensure_token(&self) -> Result<BearerToken> {
		if let Some(token) = self.token.get() {
			return Ok(token);
		}

		let _guard = self.token.exchange_guard().lock().await;

		// Re-check after acquiring the guard; a racing caller may have filled the slot.
		if let Some(token) = self.token.get() {
			return Ok(token);
		}

		self.exchange().await
	}

	/// Discards the cached token and performs a fresh exchange.
	///
	/// Used by the executor after a 401 so the retried request carries a token the
	/// service has not yet rejected.
	pub(crate) async fn refresh_token(&self) -> Result<BearerToken> {
		let _guard = self.token.exchange_guard().lock().await;

		self.token.clear();
		self.exchange().await
	}

	/// Drops the cached token unconditionally; the next call re-authenticates.
	pub fn invalidate_token(&self) {
		self.token.clear();
	}

	/// Performs the OAuth2 client-credentials exchange against the configured endpoint.
	///
	/// On any failure the cached token is cleared so later calls start from a clean
	/// slate instead of replaying a known-bad secret.
	async fn exchange(&self) -> Result<BearerToken> {
		let endpoint = self.config.auth_endpoint.clone();
		let form = [
			("client_id", self.credentials.client_id.as_str()),
			("client_secret", self.credentials.client_secret.expose()),
			("grant_type", "client_credentials"),
		];
		let response = match self.http.post(endpoint.clone()).form(&form).send().await {
			Ok(response) => response,
			Err(source) => {
				self.token.clear();

				return Err(Error::Auth {
					endpoint: endpoint.to_string(),
					reason: format!("token endpoint unreachable ({source})"),
				});
			},
		};
		let status = response.status();

		if !status.is_success() {
			self.token.clear();

			return Err(Error::Auth {
				endpoint: endpoint.to_string(),
				reason: format!("token endpoint answered {status}"),
			});
		}

		let token = match response.json::<BearerToken>().await {
			Ok(token) => token,
			Err(_) => {
				self.token.clear();

				return Err(Error::Auth {
					endpoint: endpoint.to_string(),
					reason: "token endpoint response is missing an access token".into(),
				});
			},
		};

		if token.access_token.is_empty() {
			self.token.clear();

			return Err(Error::Auth {
				endpoint: endpoint.to_string(),
				reason: "token endpoint response is missing an access token".into(),
			});
		}

		self.token.put(token.clone());

		Ok(token)
	}
}
