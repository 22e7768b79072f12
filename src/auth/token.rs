//! Bearer token model and the slot that caches at most one token per session.

// self
use crate::{_prelude::*, auth::secret::SecretString};

/// Bearer token issued by the vendor token endpoint.
///
/// Validity is enforced by the service, not the client: the SDK keeps using a cached
/// token until the Enterprise API rejects it with a 401, at which point the executor
/// forces a fresh exchange. `expires_in` is carried as data for callers that want to
/// schedule their own refreshes.
#[derive(Clone, Debug, Deserialize)]
pub struct BearerToken {
	/// Access token secret; callers must avoid logging it.
	pub access_token: SecretString,
	/// Token scheme reported by the endpoint, `Bearer` in practice.
	#[serde(default = "default_token_type")]
	pub token_type: String,
	/// Validity in seconds relative to issuance.
	#[serde(default)]
	pub expires_in: i64,
	/// Space-delimited scopes granted to the credential pair.
	#[serde(default)]
	pub scope: String,
}
impl BearerToken {
	/// Builds an already-issued token from its scheme and secret parts.
	pub fn issued(token_type: impl Into<String>, access_token: impl Into<String>) -> Self {
		Self {
			access_token: SecretString::new(access_token),
			token_type: token_type.into(),
			expires_in: 0,
			scope: String::new(),
		}
	}

	/// Formats the `authorization` header value as `<tokenType> <accessToken>`.
	pub fn authorization(&self) -> String {
		format!("{} {}", self.token_type, self.access_token.expose())
	}
}

fn default_token_type() -> String {
	"Bearer".into()
}

/// Session-owned slot holding at most one bearer token for a credential pair.
///
/// Replaces the process-global token cache of earlier SDK generations: every
/// [`Session`](crate::session::Session) owns its own slot, so distinct credential
/// pairs in one process no longer clobber each other. The exchange guard serializes
/// concurrent token fetches so racing callers piggy-back on one in-flight exchange.
#[derive(Debug, Default)]
pub struct TokenSlot {
	cached: RwLock<Option<BearerToken>>,
	exchange_guard: AsyncMutex<()>,
}
impl TokenSlot {
	/// Returns a clone of the cached token, if one is present.
	pub fn get(&self) -> Option<BearerToken> {
		self.cached.read().clone()
	}

	/// Replaces the cached token.
	pub fn put(&self, token: BearerToken) {
		*self.cached.write() = Some(token);
	}

	/// Drops the cached token unconditionally.
	pub fn clear(&self) {
		*self.cached.write() = None;
	}

	/// Guard that serializes token exchanges across concurrent callers.
	pub(crate) fn exchange_guard(&self) -> &AsyncMutex<()> {
		&self.exchange_guard
	}
}
