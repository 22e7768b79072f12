//! Service address surfaces.

// crates.io
use serde_json::Value as Json;
// self
use crate::{
	_prelude::*, client::Client, enterprise::account_path, http::RequestDescriptor, page::PageQuery,
};

const PAGE_SIZE: i64 = 100;

/// Physical service address registered on an account.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
	/// Server-assigned address reference; absent on not-yet-created addresses.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub address_reference_id: Option<String>,
	/// Free-form address lines.
	#[serde(default)]
	pub address_lines: Vec<String>,
	/// City or locality.
	#[serde(default)]
	pub locality: String,
	/// State, province, or administrative area.
	#[serde(default)]
	pub administrative_area: String,
	/// ISO 3166 region code.
	#[serde(default)]
	pub region_code: String,
	/// Postal code.
	#[serde(default)]
	pub postal_code: String,
	/// Single-line rendering produced by the service.
	#[serde(default)]
	pub formatted_address: String,
	/// Latitude in decimal degrees.
	#[serde(default)]
	pub latitude: f64,
	/// Longitude in decimal degrees.
	#[serde(default)]
	pub longitude: f64,
}

impl Client {
	/// Lists service addresses on the account.
	pub async fn addresses(&self, account: &str, query: PageQuery) -> Result<Vec<Address>> {
		let path = account_path(account, "addresses");

		self.session
			.fetch_list(query, PAGE_SIZE, |page, limit| {
				RequestDescriptor::get(path.as_str()).query("page", page).query("limit", limit)
			})
			.await
	}

	/// Fetches one address by reference.
	pub async fn address(&self, account: &str, address_reference_id: &str) -> Result<Address> {
		let path = account_path(account, &format!("addresses/{address_reference_id}"));

		self.session.fetch_content(RequestDescriptor::get(path)).await
	}

	/// Registers a new service address and returns the stored record.
	pub async fn create_address(&self, account: &str, address: &Address) -> Result<Address> {
		let path = account_path(account, "addresses");
		let body = serde_json::to_value(address)?;

		self.session.fetch_content(RequestDescriptor::post(path).json(body)).await
	}

	/// Removes a service address.
	pub async fn delete_address(&self, account: &str, address_reference_id: &str) -> Result<()> {
		let path = account_path(account, &format!("addresses/{address_reference_id}"));

		self.session
			.fetch_content::<Option<Json>>(RequestDescriptor::delete(path))
			.await
			.map(|_| ())
	}
}
