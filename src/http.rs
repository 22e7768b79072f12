//! Authenticated request pipeline shared by every Enterprise API surface.
//!
//! [`Session::execute`] is the single choke point for Enterprise calls: it ensures a
//! bearer token, paces against the rolling rate window, logs the attempt, builds
//! headers and query string, dispatches, and converts failures into typed errors.
//! A 401 triggers one re-authentication followed by one verbatim replay; the retry
//! bound is an explicit loop flag so it stays visible and testable. The executor
//! performs no idempotency-key deduplication: callers issuing side-effecting verbs
//! must tolerate at most one automatic replay of a request whose first response was
//! lost as a 401.

// crates.io
use reqwest::{
	Response,
	header::{ACCEPT, AUTHORIZATION},
};
use serde_json::Value as Json;
// self
use crate::{
	_prelude::*,
	auth::BearerToken,
	error::HttpFailure,
	obs::{self, CallOutcome, CallSpan},
	rate::BACKOFF_PAUSE,
	session::Session,
};

/// Body variants accepted by Enterprise endpoints.
#[derive(Clone, Debug)]
pub enum Payload {
	/// JSON-encoded request body.
	Json(Json),
	/// Form-encoded request body.
	Form(Vec<(String, String)>),
}

/// Ephemeral description of a single Enterprise API request.
///
/// Query values are scalars coerced to strings at construction time, matching the
/// wire contract. The payload is only serialized as a body for POST/PUT/PATCH;
/// other verbs carry parameters exclusively in the query string.
#[derive(Clone, Debug)]
pub struct RequestDescriptor {
	/// HTTP method.
	pub method: Method,
	/// Endpoint path relative to the configured API base.
	pub path: String,
	/// Scalar query parameters in insertion order.
	pub query: Vec<(String, String)>,
	/// Optional request body.
	pub payload: Option<Payload>,
}
impl RequestDescriptor {
	/// Creates a descriptor for the provided method and relative path.
	pub fn new(method: Method, path: impl Into<String>) -> Self {
		Self { method, path: path.into(), query: Vec::new(), payload: None }
	}

	/// Creates a GET descriptor.
	pub fn get(path: impl Into<String>) -> Self {
		Self::new(Method::GET, path)
	}

	/// Creates a POST descriptor.
	pub fn post(path: impl Into<String>) -> Self {
		Self::new(Method::POST, path)
	}

	/// Creates a PUT descriptor.
	pub fn put(path: impl Into<String>) -> Self {
		Self::new(Method::PUT, path)
	}

	/// Creates a DELETE descriptor.
	pub fn delete(path: impl Into<String>) -> Self {
		Self::new(Method::DELETE, path)
	}

	/// Appends a scalar query parameter, coercing the value to a string.
	pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
		self.query.push((key.into(), value.to_string()));

		self
	}

	/// Attaches a JSON request body.
	pub fn json(mut self, body: Json) -> Self {
		self.payload = Some(Payload::Json(body));

		self
	}

	/// Attaches a form-encoded request body.
	pub fn form(mut self, pairs: Vec<(String, String)>) -> Self {
		self.payload = Some(Payload::Form(pairs));

		self
	}

	/// Whether this descriptor's method carries the payload as a request body.
	pub fn accepts_body(&self) -> bool {
		self.method == Method::POST || self.method == Method::PUT || self.method == Method::PATCH
	}
}

impl Session {
	/// Executes one Enterprise API request and decodes the JSON response body.
	///
	/// Fails with [`Error::Auth`] when no token is obtainable, [`Error::Http`] for
	/// non-success statuses (including a 401 that survived one re-authentication),
	/// [`Error::Transport`] for network-level failures, and [`Error::Decode`] for
	/// malformed bodies.
	pub async fn execute<T>(&self, descriptor: RequestDescriptor) -> Result<T>
	where
		T: DeserializeOwned,
	{
		let span = CallSpan::new(&descriptor.method, &descriptor.path);

		obs::record_call_outcome(CallOutcome::Attempt);

		let result = span.instrument(self.execute_pipeline(descriptor)).await;

		match &result {
			Ok(_) => obs::record_call_outcome(CallOutcome::Success),
			Err(_) => obs::record_call_outcome(CallOutcome::Failure),
		}

		result
	}

	async fn execute_pipeline<T>(&self, descriptor: RequestDescriptor) -> Result<T>
	where
		T: DeserializeOwned,
	{
		let url = self.resolve(&descriptor.path)?;
		let mut refreshed = false;

		loop {
			let token = self.ensure_token().await?;

			// Advisory pacing only; the check and the record below are not atomic.
			if self.rate.should_pause() {
				tokio::time::sleep(BACKOFF_PAUSE).await;
			}

			// The attempt counts toward the budget even if the call fails.
			self.rate.record(&descriptor);

			let response = self.dispatch(&descriptor, &url, &token).await?;
			let status = response.status();

			if status.is_success() {
				return self.decode(response, &url).await;
			}
			if status == StatusCode::UNAUTHORIZED && !refreshed {
				refreshed = true;
				self.refresh_token().await?;

				continue;
			}

			return Err(HttpFailure::new(descriptor.method.clone(), &url, status).into());
		}
	}

	fn resolve(&self, path: &str) -> Result<Url> {
		self.config.api_base.join(path).map_err(|source| Error::bad_path(path, source))
	}

	async fn dispatch(
		&self,
		descriptor: &RequestDescriptor,
		url: &Url,
		token: &BearerToken,
	) -> Result<Response> {
		let mut builder = self
			.http
			.request(descriptor.method.clone(), url.clone())
			.header(ACCEPT, "application/json")
			.header(AUTHORIZATION, token.authorization());

		if !descriptor.query.is_empty() {
			builder = builder.query(&descriptor.query);
		}
		if descriptor.accepts_body() {
			match &descriptor.payload {
				Some(Payload::Json(body)) => builder = builder.json(body),
				Some(Payload::Form(pairs)) => builder = builder.form(pairs),
				None => {},
			}
		}

		builder
			.send()
			.await
			.map_err(|source| Error::Transport { url: url.to_string(), source })
	}

	async fn decode<T>(&self, response: Response, url: &Url) -> Result<T>
	where
		T: DeserializeOwned,
	{
		let bytes = response
			.bytes()
			.await
			.map_err(|source| Error::Transport { url: url.to_string(), source })?;
		let mut deserializer = serde_json::Deserializer::from_slice(&bytes);

		serde_path_to_error::deserialize(&mut deserializer)
			.map_err(|source| Error::Decode { url: url.to_string(), source })
	}
}
