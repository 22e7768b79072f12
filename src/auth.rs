//! Credential pair, bearer token model, and the session-owned token slot.

pub mod secret;
pub mod token;

mod exchange;

pub use secret::*;
pub use token::*;

// self
use crate::_prelude::*;

/// OAuth2 client-credential pair used for the token exchange.
#[derive(Clone, Debug)]
pub struct Credentials {
	/// Client identifier issued by the vendor portal.
	pub client_id: String,
	/// Client secret paired with the identifier.
	pub client_secret: SecretString,
}
impl Credentials {
	/// Creates a credential pair from its raw parts.
	pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
		Self { client_id: client_id.into(), client_secret: SecretString::new(client_secret) }
	}
}
