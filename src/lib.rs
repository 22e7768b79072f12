//! Typed async client SDK for Skylink's local device API and remote Enterprise API: one
//! authenticated, rate-limited request pipeline with transparent pagination and token refresh
//! underneath every resource surface.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod client;
pub mod device;
pub mod enterprise;
pub mod error;
pub mod http;
pub mod obs;
pub mod page;
pub mod rate;
pub mod session;

mod _prelude {
	pub use std::{
		collections::HashMap,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		sync::Arc,
	};

	pub use async_lock::Mutex as AsyncMutex;
	pub use parking_lot::{Mutex, RwLock};
	pub use reqwest::{Client as ReqwestClient, Method, StatusCode};
	pub use serde::{Deserialize, Serialize, de::DeserializeOwned};
	pub use thiserror::Error as ThisError;
	pub use time::{Duration, OffsetDateTime};
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

pub use reqwest;
pub use url;
#[cfg(test)] use httpmock as _;
