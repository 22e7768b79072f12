//! Router configuration surfaces.

// crates.io
use serde_json::Value as Json;
// self
use crate::{
	_prelude::*, client::Client, enterprise::account_path, http::RequestDescriptor, page::PageQuery,
};

const PAGE_SIZE: i64 = 100;

/// Configuration document bound to a router on the account.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouterConfig {
	/// Server-assigned configuration identifier.
	pub config_id: String,
	/// Router hardware identifier the configuration binds to.
	#[serde(default)]
	pub router_id: String,
	/// Account owning the router.
	#[serde(default)]
	pub account_number: String,
	/// Caller-facing nickname.
	#[serde(default)]
	pub nickname: Option<String>,
	/// Raw configuration document as stored by the service.
	#[serde(default)]
	pub router_config: Json,
}

/// Patch accumulating only the router config fields a caller actually changed.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouterConfigPatch {
	/// New nickname.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub nickname: Option<String>,
	/// Replacement configuration document.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub router_config: Option<Json>,
}
impl RouterConfigPatch {
	/// Starts an empty patch.
	pub fn new() -> Self {
		Self::default()
	}

	/// Stages a nickname change.
	pub fn nickname(mut self, nickname: impl Into<String>) -> Self {
		self.nickname = Some(nickname.into());

		self
	}

	/// Stages a replacement configuration document.
	pub fn router_config(mut self, document: Json) -> Self {
		self.router_config = Some(document);

		self
	}
}

impl Client {
	/// Lists router configurations on the account.
	pub async fn router_configs(
		&self,
		account: &str,
		query: PageQuery,
	) -> Result<Vec<RouterConfig>> {
		let path = account_path(account, "routers");

		self.session
			.fetch_list(query, PAGE_SIZE, |page, limit| {
				RequestDescriptor::get(path.as_str()).query("page", page).query("limit", limit)
			})
			.await
	}

	/// Fetches one router configuration by identifier.
	pub async fn router_config(&self, account: &str, config_id: &str) -> Result<RouterConfig> {
		let path = account_path(account, &format!("routers/{config_id}"));

		self.session.fetch_content(RequestDescriptor::get(path)).await
	}

	/// Applies a staged patch to a router configuration and returns the updated record.
	pub async fn update_router_config(
		&self,
		account: &str,
		config_id: &str,
		patch: &RouterConfigPatch,
	) -> Result<RouterConfig> {
		let path = account_path(account, &format!("routers/{config_id}"));
		let body = serde_json::to_value(patch)?;

		self.session.fetch_content(RequestDescriptor::put(path).json(body)).await
	}

	/// Removes a router configuration.
	pub async fn delete_router_config(&self, account: &str, config_id: &str) -> Result<()> {
		let path = account_path(account, &format!("routers/{config_id}"));

		self.session
			.fetch_content::<Option<Json>>(RequestDescriptor::delete(path))
			.await
			.map(|_| ())
	}
}
