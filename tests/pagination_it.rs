mod common;

// crates.io
use httpmock::prelude::*;
use serde_json::{Value as Json, json};
// self
use common::mock_client;
use skylink_sdk::{error::Error, page::PageQuery};

const CLIENT_ID: &str = "svc-client";
const CLIENT_SECRET: &str = "svc-secret";
const ACCOUNT: &str = "ACC-1";

fn token_body() -> String {
	json!({
		"access_token": "tok-1",
		"token_type": "Bearer",
		"expires_in": 3600,
		"scope": "enterprise"
	})
	.to_string()
}

fn address_rows(offset: usize, count: usize) -> Vec<Json> {
	(0..count)
		.map(|index| json!({ "addressReferenceId": format!("addr-{}", offset + index) }))
		.collect()
}

fn page_body(total_count: i64, page_index: i64, limit: i64, is_last: bool, rows: Vec<Json>) -> String {
	json!({
		"isValid": true,
		"errors": [],
		"warnings": [],
		"information": [],
		"content": {
			"totalCount": total_count,
			"pageIndex": page_index,
			"limit": limit,
			"isLastPage": is_last,
			"results": rows
		}
	})
	.to_string()
}

#[tokio::test]
async fn fetch_all_concatenates_pages_in_order() {
	let server = MockServer::start_async().await;
	let client = mock_client(&server.url(""), CLIENT_ID, CLIENT_SECRET);
	let _token_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/auth/connect/token");
			then.status(200).header("content-type", "application/json").body(token_body());
		})
		.await;
	let page_sizes = [(0_i64, 100_usize, false), (1, 100, false), (2, 37, true)];
	let mut page_mocks = Vec::new();

	for (page, rows, is_last) in page_sizes {
		let mock = server
			.mock_async(|when, then| {
				when.method(GET)
					.path("/enterprise/v1/account/ACC-1/addresses")
					.query_param("page", page.to_string())
					.query_param("limit", "100");
				then.status(200).header("content-type", "application/json").body(page_body(
					237,
					page,
					100,
					is_last,
					address_rows(page as usize * 100, rows),
				));
			})
			.await;

		page_mocks.push(mock);
	}

	let addresses = client
		.addresses(ACCOUNT, PageQuery::everything())
		.await
		.expect("Fetch-all aggregation should succeed.");

	assert_eq!(addresses.len(), 237);
	assert_eq!(addresses[0].address_reference_id.as_deref(), Some("addr-0"));
	assert_eq!(addresses[236].address_reference_id.as_deref(), Some("addr-236"));

	for mock in page_mocks {
		mock.assert_calls_async(1).await;
	}
}

#[tokio::test]
async fn total_count_mismatch_fails_distinctly() {
	let server = MockServer::start_async().await;
	let client = mock_client(&server.url(""), CLIENT_ID, CLIENT_SECRET);
	let _token_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/auth/connect/token");
			then.status(200).header("content-type", "application/json").body(token_body());
		})
		.await;

	for (page, rows, is_last) in [(0_i64, 100_usize, false), (1, 100, false), (2, 30, true)] {
		server
			.mock_async(|when, then| {
				when.method(GET)
					.path("/enterprise/v1/account/ACC-1/addresses")
					.query_param("page", page.to_string())
					.query_param("limit", "100");
				then.status(200).header("content-type", "application/json").body(page_body(
					237,
					page,
					100,
					is_last,
					address_rows(page as usize * 100, rows),
				));
			})
			.await;
	}

	let error = client
		.addresses(ACCOUNT, PageQuery::everything())
		.await
		.expect_err("A row accounting mismatch should fail rather than truncate.");

	match error {
		Error::Aggregation { expected, actual, .. } => {
			assert_eq!(expected, 237);
			assert_eq!(actual, 230);
		},
		other => panic!("Expected an aggregation failure, got {other:?}."),
	}
}

#[tokio::test]
async fn single_page_mode_forwards_exact_parameters() {
	let server = MockServer::start_async().await;
	let client = mock_client(&server.url(""), CLIENT_ID, CLIENT_SECRET);
	let _token_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/auth/connect/token");
			then.status(200).header("content-type", "application/json").body(token_body());
		})
		.await;
	let page_mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/enterprise/v1/account/ACC-1/addresses")
				.query_param("page", "2")
				.query_param("limit", "10");
			then.status(200).header("content-type", "application/json").body(page_body(
				999,
				2,
				10,
				false,
				address_rows(20, 10),
			));
		})
		.await;
	let addresses = client
		.addresses(ACCOUNT, PageQuery::single(2, 10))
		.await
		.expect("Single-page fetch should succeed.");

	assert_eq!(addresses.len(), 10);
	assert_eq!(addresses[0].address_reference_id.as_deref(), Some("addr-20"));

	page_mock.assert_calls_async(1).await;
}
