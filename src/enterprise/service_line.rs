//! Service line surfaces: the binding between an address, a product, and the
//! terminals that serve it.

// crates.io
use serde_json::{Value as Json, json};
// self
use crate::{
	_prelude::*, client::Client, enterprise::account_path, http::RequestDescriptor, page::PageQuery,
};

const PAGE_SIZE: i64 = 100;

/// Service line subscribing one address to one product.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceLine {
	/// Account the line belongs to.
	#[serde(default)]
	pub account_number: String,
	/// Address the line serves.
	#[serde(default)]
	pub address_reference_id: String,
	/// Server-assigned line number; the key for every line-scoped surface.
	pub service_line_number: String,
	/// Caller-facing nickname.
	#[serde(default)]
	pub nickname: Option<String>,
	/// Product the line is subscribed to.
	#[serde(default)]
	pub product_reference_id: String,
	/// Service start instant.
	#[serde(default, with = "time::serde::rfc3339::option")]
	pub start_date: Option<OffsetDateTime>,
	/// Service end instant, when termination is scheduled.
	#[serde(default, with = "time::serde::rfc3339::option")]
	pub end_date: Option<OffsetDateTime>,
	/// Whether a public IP is provisioned on the line.
	#[serde(default)]
	pub public_ip: bool,
	/// Whether the line is currently active.
	#[serde(default)]
	pub active: bool,
}

/// Patch accumulating only the fields a caller actually changed.
///
/// Unset fields are omitted from the request body and left untouched by the
/// service; the whole patch is submitted atomically on
/// [`Client::update_service_line`].
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceLinePatch {
	/// New nickname.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub nickname: Option<String>,
	/// New product reference.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub product_reference_id: Option<String>,
	/// Toggle for public IP provisioning.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub public_ip: Option<bool>,
}
impl ServiceLinePatch {
	/// Starts an empty patch.
	pub fn new() -> Self {
		Self::default()
	}

	/// Stages a nickname change.
	pub fn nickname(mut self, nickname: impl Into<String>) -> Self {
		self.nickname = Some(nickname.into());

		self
	}

	/// Stages a product change.
	pub fn product_reference_id(mut self, product_reference_id: impl Into<String>) -> Self {
		self.product_reference_id = Some(product_reference_id.into());

		self
	}

	/// Stages a public IP toggle.
	pub fn public_ip(mut self, enabled: bool) -> Self {
		self.public_ip = Some(enabled);

		self
	}

	/// Whether the patch stages any change at all.
	pub fn is_empty(&self) -> bool {
		self.nickname.is_none() && self.product_reference_id.is_none() && self.public_ip.is_none()
	}
}

impl Client {
	/// Lists service lines on the account.
	pub async fn service_lines(&self, account: &str, query: PageQuery) -> Result<Vec<ServiceLine>> {
		let path = account_path(account, "service-lines");

		self.session
			.fetch_list(query, PAGE_SIZE, |page, limit| {
				RequestDescriptor::get(path.as_str()).query("page", page).query("limit", limit)
			})
			.await
	}

	/// Fetches one service line by number.
	pub async fn service_line(
		&self,
		account: &str,
		service_line_number: &str,
	) -> Result<ServiceLine> {
		let path = account_path(account, &format!("service-lines/{service_line_number}"));

		self.session.fetch_content(RequestDescriptor::get(path)).await
	}

	/// Creates a service line binding an address to a product.
	pub async fn create_service_line(
		&self,
		account: &str,
		address_reference_id: &str,
		product_reference_id: &str,
	) -> Result<ServiceLine> {
		let path = account_path(account, "service-lines");
		let body = json!({
			"addressReferenceId": address_reference_id,
			"productReferenceId": product_reference_id,
		});

		self.session.fetch_content(RequestDescriptor::post(path).json(body)).await
	}

	/// Applies a staged patch to a service line and returns the updated record.
	pub async fn update_service_line(
		&self,
		account: &str,
		service_line_number: &str,
		patch: &ServiceLinePatch,
	) -> Result<ServiceLine> {
		let path = account_path(account, &format!("service-lines/{service_line_number}"));
		let body = serde_json::to_value(patch)?;

		self.session.fetch_content(RequestDescriptor::put(path).json(body)).await
	}

	/// Terminates a service line.
	pub async fn remove_service_line(
		&self,
		account: &str,
		service_line_number: &str,
	) -> Result<()> {
		let path = account_path(account, &format!("service-lines/{service_line_number}"));

		self.session
			.fetch_content::<Option<Json>>(RequestDescriptor::delete(path))
			.await
			.map(|_| ())
	}

	/// Best-effort attach of a user terminal to a service line.
	///
	/// Returns `false` on any failure; callers cannot distinguish why the attach
	/// failed, only that it did.
	pub async fn add_user_terminal(
		&self,
		account: &str,
		service_line_number: &str,
		user_terminal_id: &str,
	) -> bool {
		let path = account_path(
			account,
			&format!("service-lines/{service_line_number}/user-terminals/{user_terminal_id}"),
		);

		match self.session.fetch_content::<Option<Json>>(RequestDescriptor::post(path)).await {
			Ok(_) => true,
			Err(_error) => {
				#[cfg(feature = "tracing")]
				tracing::debug!(error = %_error, "User terminal attach failed.");

				false
			},
		}
	}

	/// Best-effort detach of a user terminal from a service line.
	///
	/// Returns `false` on any failure; callers cannot distinguish why the detach
	/// failed, only that it did.
	pub async fn remove_user_terminal(
		&self,
		account: &str,
		service_line_number: &str,
		user_terminal_id: &str,
	) -> bool {
		let path = account_path(
			account,
			&format!("service-lines/{service_line_number}/user-terminals/{user_terminal_id}"),
		);

		match self.session.fetch_content::<Option<Json>>(RequestDescriptor::delete(path)).await {
			Ok(_) => true,
			Err(_error) => {
				#[cfg(feature = "tracing")]
				tracing::debug!(error = %_error, "User terminal detach failed.");

				false
			},
		}
	}
}
