//! Subscription and subscription product surfaces.

// self
use crate::{
	_prelude::*, client::Client, enterprise::account_path, http::RequestDescriptor, page::PageQuery,
};

const PAGE_SIZE: i64 = 100;

/// Billing subscription tied to a service line.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
	/// Server-assigned subscription reference.
	pub subscription_reference_id: String,
	/// Line the subscription bills against, when attached.
	#[serde(default)]
	pub service_line_number: Option<String>,
	/// Product the subscription covers.
	#[serde(default)]
	pub product_reference_id: String,
	/// Billing description.
	#[serde(default)]
	pub description: String,
	/// Subscription start instant.
	#[serde(default, with = "time::serde::rfc3339::option")]
	pub start_date: Option<OffsetDateTime>,
	/// Billing-cycle-aligned start instant.
	#[serde(default, with = "time::serde::rfc3339::option")]
	pub normalized_start_date: Option<OffsetDateTime>,
	/// Subscription end instant, when terminated.
	#[serde(default, with = "time::serde::rfc3339::option")]
	pub end_date: Option<OffsetDateTime>,
	/// Instant at which service actually stops, when terminated.
	#[serde(default, with = "time::serde::rfc3339::option")]
	pub service_end_date: Option<OffsetDateTime>,
}

/// Product available for subscription on an account.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionProduct {
	/// Product reference used when creating service lines.
	pub product_reference_id: String,
	/// Marketing name.
	#[serde(default)]
	pub name: String,
	/// Recurring price in the billing currency.
	#[serde(default)]
	pub price: f64,
	/// ISO 4217 billing currency code.
	#[serde(default)]
	pub iso_currency_code: String,
}

impl Client {
	/// Lists subscriptions on the account.
	pub async fn subscriptions(
		&self,
		account: &str,
		query: PageQuery,
	) -> Result<Vec<Subscription>> {
		let path = account_path(account, "subscriptions");

		self.session
			.fetch_list(query, PAGE_SIZE, |page, limit| {
				RequestDescriptor::get(path.as_str()).query("page", page).query("limit", limit)
			})
			.await
	}

	/// Fetches one subscription by reference.
	pub async fn subscription(
		&self,
		account: &str,
		subscription_reference_id: &str,
	) -> Result<Subscription> {
		let path = account_path(account, &format!("subscriptions/{subscription_reference_id}"));

		self.session.fetch_content(RequestDescriptor::get(path)).await
	}

	/// Lists products the account can subscribe to.
	pub async fn subscription_products(
		&self,
		account: &str,
		query: PageQuery,
	) -> Result<Vec<SubscriptionProduct>> {
		let path = account_path(account, "subscription-products");

		self.session
			.fetch_list(query, PAGE_SIZE, |page, limit| {
				RequestDescriptor::get(path.as_str()).query("page", page).query("limit", limit)
			})
			.await
	}
}
