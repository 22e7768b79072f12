//! User terminal surfaces.

// self
use crate::{
	_prelude::*, client::Client, enterprise::account_path, http::RequestDescriptor, page::PageQuery,
};

const PAGE_SIZE: i64 = 100;

/// User terminal (dish plus kit) registered on an account.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserTerminal {
	/// Terminal identifier used by the attach/detach surfaces.
	pub user_terminal_id: String,
	/// Kit serial number printed on the packaging.
	#[serde(default)]
	pub kit_serial_number: String,
	/// Dish serial number.
	#[serde(default)]
	pub dish_serial_number: String,
	/// Line the terminal is attached to, when any.
	#[serde(default)]
	pub service_line_number: Option<String>,
	/// Whether the terminal is currently active.
	#[serde(default)]
	pub active: bool,
}

impl Client {
	/// Lists user terminals on the account.
	pub async fn user_terminals(
		&self,
		account: &str,
		query: PageQuery,
	) -> Result<Vec<UserTerminal>> {
		let path = account_path(account, "user-terminals");

		self.session
			.fetch_list(query, PAGE_SIZE, |page, limit| {
				RequestDescriptor::get(path.as_str()).query("page", page).query("limit", limit)
			})
			.await
	}

	/// Fetches one user terminal by identifier.
	pub async fn user_terminal(
		&self,
		account: &str,
		user_terminal_id: &str,
	) -> Result<UserTerminal> {
		let path = account_path(account, &format!("user-terminals/{user_terminal_id}"));

		self.session.fetch_content(RequestDescriptor::get(path)).await
	}
}
