mod common;

// crates.io
use httpmock::prelude::*;
use serde_json::{Value as Json, json};
// self
use common::{mock_session, seed_token};
use skylink_sdk::{
	error::{Error, HttpFailure},
	http::RequestDescriptor,
	page::Envelope,
};

const CLIENT_ID: &str = "svc-client";
const CLIENT_SECRET: &str = "svc-secret";
const PING: &str = "enterprise/v1/account/ACC-1/ping";

fn token_body(access_token: &str) -> String {
	json!({
		"access_token": access_token,
		"token_type": "Bearer",
		"expires_in": 3600,
		"scope": "enterprise"
	})
	.to_string()
}

fn envelope_body(content: Json) -> String {
	json!({
		"isValid": true,
		"errors": [],
		"warnings": [],
		"information": [],
		"content": content
	})
	.to_string()
}

#[tokio::test]
async fn unauthorized_triggers_one_refresh_and_replays_verbatim() {
	let server = MockServer::start_async().await;
	let session = mock_session(&server.url(""), CLIENT_ID, CLIENT_SECRET);

	// Simulates a cached token the service has already expired.
	seed_token(&session, "Bearer", "stale-token");

	let token_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/auth/connect/token");
			then.status(200)
				.header("content-type", "application/json")
				.body(token_body("fresh-token"));
		})
		.await;
	let stale_mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/enterprise/v1/account/ACC-1/ping")
				.header("authorization", "Bearer stale-token");
			then.status(401);
		})
		.await;
	let fresh_mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/enterprise/v1/account/ACC-1/ping")
				.header("authorization", "Bearer fresh-token");
			then.status(200)
				.header("content-type", "application/json")
				.body(envelope_body(json!({ "ok": true })));
		})
		.await;
	let envelope: Envelope<Json> = session
		.execute(RequestDescriptor::get(PING))
		.await
		.expect("Retried request should succeed with the refreshed token.");

	assert_eq!(envelope.content, json!({ "ok": true }));

	token_mock.assert_calls_async(1).await;
	stale_mock.assert_calls_async(1).await;
	fresh_mock.assert_calls_async(1).await;
}

#[tokio::test]
async fn failed_refresh_surfaces_without_a_second_http_call() {
	let server = MockServer::start_async().await;
	let session = mock_session(&server.url(""), CLIENT_ID, CLIENT_SECRET);

	seed_token(&session, "Bearer", "stale-token");

	let token_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/auth/connect/token");
			then.status(500);
		})
		.await;
	let data_mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/enterprise/v1/account/ACC-1/ping");
			then.status(401);
		})
		.await;
	let error = session
		.execute::<Envelope<Json>>(RequestDescriptor::get(PING))
		.await
		.expect_err("Failed re-authentication should surface to the caller.");

	assert!(matches!(error, Error::Auth { .. }));

	token_mock.assert_calls_async(1).await;
	data_mock.assert_calls_async(1).await;
}

#[tokio::test]
async fn persistent_unauthorized_fails_after_one_retry() {
	let server = MockServer::start_async().await;
	let session = mock_session(&server.url(""), CLIENT_ID, CLIENT_SECRET);

	seed_token(&session, "Bearer", "stale-token");

	let token_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/auth/connect/token");
			then.status(200)
				.header("content-type", "application/json")
				.body(token_body("fresh-token"));
		})
		.await;
	let stale_mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/enterprise/v1/account/ACC-1/ping")
				.header("authorization", "Bearer stale-token");
			then.status(401);
		})
		.await;
	let fresh_mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/enterprise/v1/account/ACC-1/ping")
				.header("authorization", "Bearer fresh-token");
			then.status(401);
		})
		.await;
	let error = session
		.execute::<Envelope<Json>>(RequestDescriptor::get(PING))
		.await
		.expect_err("A 401 that survives one refresh should fail the call.");

	match error {
		Error::Http(HttpFailure { status, .. }) => assert_eq!(status, 401),
		other => panic!("Expected an HTTP failure, got {other:?}."),
	}

	token_mock.assert_calls_async(1).await;
	stale_mock.assert_calls_async(1).await;
	fresh_mock.assert_calls_async(1).await;
}

#[tokio::test]
async fn non_unauthorized_failures_are_not_retried() {
	let server = MockServer::start_async().await;
	let session = mock_session(&server.url(""), CLIENT_ID, CLIENT_SECRET);
	let token_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/auth/connect/token");
			then.status(200)
				.header("content-type", "application/json")
				.body(token_body("tok-1"));
		})
		.await;
	let data_mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/enterprise/v1/account/ACC-1/ping");
			then.status(403);
		})
		.await;
	let error = session
		.execute::<Envelope<Json>>(RequestDescriptor::get(PING))
		.await
		.expect_err("Forbidden responses should surface immediately.");

	match error {
		Error::Http(failure) => {
			assert_eq!(failure.status, 403);
			assert_eq!(failure.status_text, "Forbidden");
			assert!(failure.url.contains("/enterprise/v1/account/ACC-1/ping"));
		},
		other => panic!("Expected an HTTP failure, got {other:?}."),
	}

	token_mock.assert_calls_async(1).await;
	data_mock.assert_calls_async(1).await;
}

#[tokio::test]
async fn attempts_are_recorded_in_the_rate_window() {
	let server = MockServer::start_async().await;
	let session = mock_session(&server.url(""), CLIENT_ID, CLIENT_SECRET);
	let _token_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/auth/connect/token");
			then.status(200)
				.header("content-type", "application/json")
				.body(token_body("tok-1"));
		})
		.await;
	let _data_mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/enterprise/v1/account/ACC-1/ping");
			then.status(200)
				.header("content-type", "application/json")
				.body(envelope_body(json!({ "ok": true })));
		})
		.await;

	assert_eq!(session.rate_window().count(), 0);

	for _ in 0..3 {
		let _: Envelope<Json> = session
			.execute(RequestDescriptor::get(PING))
			.await
			.expect("Authenticated request should succeed.");
	}

	assert_eq!(session.rate_window().count(), 3);
}
