//! Realtime data-tracking surfaces.

// self
use crate::{
	_prelude::*, client::Client, enterprise::account_path, http::RequestDescriptor, page::PageQuery,
};

const PAGE_SIZE: i64 = 500;

/// Realtime data-usage sample emitted by a terminal or router.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataTrackingRecord {
	/// Device that produced the sample.
	pub device_id: String,
	/// Line the device is attached to, when any.
	#[serde(default)]
	pub service_line_number: Option<String>,
	/// Sample instant.
	#[serde(default, with = "time::serde::rfc3339::option")]
	pub timestamp: Option<OffsetDateTime>,
	/// Priority-tier data consumed since the previous sample, in gigabytes.
	#[serde(default)]
	pub priority_gb: f64,
	/// Standard-tier data consumed since the previous sample, in gigabytes.
	#[serde(default)]
	pub standard_gb: f64,
}

impl Client {
	/// Lists realtime data-tracking records on the account.
	///
	/// The service exposes this surface as a POST whose paging parameters travel in
	/// the query string. The fetch-all page size is larger than on the GET-style
	/// lists because samples are narrow and high-volume.
	pub async fn data_tracking(
		&self,
		account: &str,
		query: PageQuery,
	) -> Result<Vec<DataTrackingRecord>> {
		let path = account_path(account, "realtime-data-tracking");

		self.session
			.fetch_list(query, PAGE_SIZE, |page, limit| {
				RequestDescriptor::post(path.as_str()).query("page", page).query("limit", limit)
			})
			.await
	}
}
