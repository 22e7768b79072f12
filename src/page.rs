//! Response envelopes and the page aggregation protocol for list endpoints.
//!
//! Every list-returning Enterprise endpoint speaks the same shape: an outer
//! validation envelope wrapping a paged content block. The aggregation helpers
//! drive the request executor one page at a time, strictly in increasing index
//! order, and verify the service's row accounting before handing results back.

// crates.io
use serde_json::Value as Json;
// self
use crate::{_prelude::*, http::RequestDescriptor, session::Session};

/// Outer response wrapper carrying validation metadata plus the payload.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T> {
	/// Whether the service judged the request valid.
	#[serde(default)]
	pub is_valid: bool,
	/// Service-reported errors.
	#[serde(default)]
	pub errors: Vec<Json>,
	/// Service-reported warnings.
	#[serde(default)]
	pub warnings: Vec<Json>,
	/// Informational notices.
	#[serde(default)]
	pub information: Vec<Json>,
	/// Payload carried by the response.
	pub content: T,
}

/// Paged content block carried by list endpoints.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedContent<T> {
	/// Total rows the service reports across all pages.
	pub total_count: i64,
	/// Zero-based index of this page.
	pub page_index: i64,
	/// Page size the service applied.
	pub limit: i64,
	/// Whether the service reports this as the final page.
	pub is_last_page: bool,
	/// Rows in this page.
	pub results: Vec<T>,
}

/// Caller-facing paging options for list surfaces.
#[derive(Clone, Copy, Debug)]
pub struct PageQuery {
	/// Zero-based page index, honored in single-page mode only.
	pub page: i64,
	/// Page size, honored in single-page mode only.
	pub limit: i64,
	/// Transparent fetch-all mode; overrides `page` and `limit` with the
	/// endpoint's internal page size.
	pub fetch_all: bool,
}
impl PageQuery {
	/// Requests exactly one page with the provided index and size.
	pub fn single(page: i64, limit: i64) -> Self {
		Self { page, limit, fetch_all: false }
	}

	/// Requests transparent aggregation of every page (the default).
	pub fn everything() -> Self {
		Self::default()
	}
}
impl Default for PageQuery {
	fn default() -> Self {
		Self { page: 0, limit: 50, fetch_all: true }
	}
}

impl Session {
	/// Executes a singular-content request and unwraps the envelope.
	pub async fn fetch_content<T>(&self, descriptor: RequestDescriptor) -> Result<T>
	where
		T: DeserializeOwned,
	{
		Ok(self.execute::<Envelope<T>>(descriptor).await?.content)
	}

	/// Fetches exactly one page of a list endpoint.
	pub async fn fetch_page<T>(&self, descriptor: RequestDescriptor) -> Result<PagedContent<T>>
	where
		T: DeserializeOwned,
	{
		self.fetch_content(descriptor).await
	}

	/// Drives a list endpoint to completion, concatenating rows page by page.
	///
	/// Pages are requested strictly in increasing index order with no concurrent
	/// fetches, so result ordering matches the service's page ordering. After the
	/// final page the concatenated row count must equal the reported `totalCount`;
	/// a mismatch (for example, rows mutated mid-pagination) fails with
	/// [`Error::Aggregation`] rather than returning a silently truncated list.
	pub async fn fetch_all<T, F>(&self, page_size: i64, build: F) -> Result<Vec<T>>
	where
		T: DeserializeOwned,
		F: Fn(i64, i64) -> RequestDescriptor,
	{
		let mut results = Vec::new();
		let mut page_index = 0;

		loop {
			let descriptor = build(page_index, page_size);
			let endpoint = descriptor.path.clone();
			let page = self.fetch_page::<T>(descriptor).await?;

			results.extend(page.results);

			if page.is_last_page {
				let actual = results.len() as i64;

				if actual != page.total_count {
					return Err(Error::Aggregation {
						endpoint,
						expected: page.total_count,
						actual,
					});
				}

				return Ok(results);
			}

			page_index += 1;
		}
	}

	/// List-endpoint entry point dispatching between single-page and fetch-all modes.
	///
	/// In single-page mode the caller's exact page index and limit are forwarded and
	/// the page's raw rows come back regardless of whether more pages exist. In
	/// fetch-all mode the endpoint's internal `page_size` overrides the caller limit.
	pub async fn fetch_list<T, F>(
		&self,
		query: PageQuery,
		page_size: i64,
		build: F,
	) -> Result<Vec<T>>
	where
		T: DeserializeOwned,
		F: Fn(i64, i64) -> RequestDescriptor,
	{
		if query.fetch_all {
			self.fetch_all(page_size, build).await
		} else {
			Ok(self.fetch_page(build(query.page, query.limit)).await?.results)
		}
	}
}
