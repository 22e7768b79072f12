//! Top-level client handle over one shared session.

// self
use crate::{
	_prelude::*,
	auth::Credentials,
	session::{Session, SessionConfig},
};

/// Root handle for the Enterprise API.
///
/// Wraps one [`Session`] behind [`Arc`]; cloning the client shares the same token
/// slot and rate window, so every surface built from it draws on the same budget.
/// Construct one client per credential pair.
#[derive(Clone, Debug)]
pub struct Client {
	/// Shared session state (HTTP client, token slot, rate window).
	pub session: Arc<Session>,
}
impl Client {
	/// Creates a client against the production endpoints.
	pub fn new(credentials: Credentials) -> Self {
		Self::with_config(credentials, SessionConfig::default())
	}

	/// Creates a client against explicit endpoints.
	pub fn with_config(credentials: Credentials, config: SessionConfig) -> Self {
		Self::from_session(Arc::new(Session::new(credentials, config)))
	}

	/// Wraps an existing shared session.
	pub fn from_session(session: Arc<Session>) -> Self {
		Self { session }
	}
}
