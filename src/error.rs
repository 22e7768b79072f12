//! SDK-level error types shared across the session pipeline and resource models.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Canonical SDK error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// No bearer token could be obtained for the configured credential pair.
	#[error("Authentication against {endpoint} failed: {reason}.")]
	Auth {
		/// Token endpoint the exchange targeted.
		endpoint: String,
		/// Human-readable failure summary.
		reason: String,
	},
	/// The Enterprise API answered with a non-success status, including a 401 that
	/// survived one re-authentication attempt.
	#[error(transparent)]
	Http(#[from] HttpFailure),
	/// A fetch-all run aggregated a different number of rows than the service reported.
	#[error(
		"Could not fetch all results from {endpoint}: expected {expected} rows, aggregated {actual}."
	)]
	Aggregation {
		/// Endpoint path the aggregation ran against.
		endpoint: String,
		/// `totalCount` reported by the final page.
		expected: i64,
		/// Number of rows actually concatenated.
		actual: i64,
	},
	/// Network-level failure before any HTTP status was produced.
	#[error("Network error occurred while calling {url}.")]
	Transport {
		/// Resolved request URL.
		url: String,
		/// Underlying transport failure.
		#[source]
		source: reqwest::Error,
	},
	/// Response body could not be decoded into the expected shape.
	#[error("Malformed JSON returned by {url}.")]
	Decode {
		/// Resolved request URL.
		url: String,
		/// Structured parsing failure carrying the offending JSON path.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
	/// Request body could not be serialized to JSON.
	#[error("Request body could not be serialized.")]
	Encode(#[from] serde_json::Error),
	/// Local endpoint configuration problem.
	#[error("Invalid endpoint configuration: {reason}.")]
	Config {
		/// Human-readable failure summary.
		reason: String,
		/// Underlying URL parsing failure, when present.
		#[source]
		source: Option<url::ParseError>,
	},
}
impl Error {
	/// Builds a [`Error::Config`] value from a path that failed to resolve against the API base.
	pub(crate) fn bad_path(path: &str, source: url::ParseError) -> Self {
		Self::Config { reason: format!("endpoint path `{path}` does not resolve"), source: Some(source) }
	}
}

/// Descriptive non-success HTTP response surfaced by the request executor.
#[derive(Debug, ThisError)]
#[error("{method} {url} failed with {status} {status_text}.")]
pub struct HttpFailure {
	/// HTTP method of the failed request.
	pub method: Method,
	/// Resolved request URL.
	pub url: String,
	/// Numeric status code.
	pub status: u16,
	/// Canonical reason phrase, or `unknown` for non-standard codes.
	pub status_text: String,
}
impl HttpFailure {
	/// Captures the failing method/URL/status triple from a dispatched response.
	pub(crate) fn new(method: Method, url: &Url, status: StatusCode) -> Self {
		Self {
			method,
			url: url.to_string(),
			status: status.as_u16(),
			status_text: status.canonical_reason().unwrap_or("unknown").into(),
		}
	}
}
