//! Device gRPC transport contract and the deadline-aware client wrapper.
//!
//! The local device exposes a single bidirectional `handle` RPC: a oneof request
//! variant in, a oneof response variant out. The SDK specifies the transport as a
//! contract so the protobuf-derived types and the channel implementation plug in
//! from the generated crate; [`DeviceClient`] layers the client-side deadline on
//! top and cancels the in-flight call when it elapses.

// self
use crate::_prelude::*;

/// Boxed future returned by [`DeviceTransport::handle`].
pub type DeviceFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, DeviceError>> + 'a + Send>>;

/// Errors surfaced by device transports and the deadline wrapper.
#[derive(Debug, ThisError)]
pub enum DeviceError {
	/// The call did not complete before the configured deadline.
	#[error("Device call exceeded the configured deadline of {deadline:?}.")]
	DeadlineExceeded {
		/// Deadline that elapsed.
		deadline: std::time::Duration,
	},
	/// Channel-level failure reported by the underlying transport.
	#[error("Device transport failed: {message}.")]
	Transport {
		/// Transport-supplied failure summary.
		message: String,
	},
	/// The device answered with a response variant the caller did not expect.
	#[error("Device returned an unexpected response variant.")]
	UnexpectedVariant,
}

/// Transport contract for the device's single `handle` RPC.
///
/// Implementations own the channel; the associated types carry the generated
/// oneof request/response enums so the SDK stays decoupled from any particular
/// protobuf toolchain.
pub trait DeviceTransport
where
	Self: Send + Sync,
{
	/// Oneof request variant type.
	type Request: Send;
	/// Oneof response variant type.
	type Response: Send;

	/// Dispatches one request and resolves with the device's response.
	fn handle(&self, request: Self::Request) -> DeviceFuture<'_, Self::Response>;
}

/// Thin client applying an optional per-call deadline over a transport.
#[derive(Clone, Debug)]
pub struct DeviceClient<T> {
	transport: T,
	deadline: Option<std::time::Duration>,
}
impl<T> DeviceClient<T>
where
	T: DeviceTransport,
{
	/// Wraps a transport with no deadline; calls wait as long as the device takes.
	pub fn new(transport: T) -> Self {
		Self { transport, deadline: None }
	}

	/// Sets or replaces the per-call deadline.
	pub fn with_deadline(mut self, deadline: std::time::Duration) -> Self {
		self.deadline = Some(deadline);

		self
	}

	/// Dispatches one request, aborting with [`DeviceError::DeadlineExceeded`] when
	/// the configured deadline elapses first.
	pub async fn call(&self, request: T::Request) -> Result<T::Response, DeviceError> {
		match self.deadline {
			Some(deadline) => tokio::time::timeout(deadline, self.transport.handle(request))
				.await
				.map_err(|_| DeviceError::DeadlineExceeded { deadline })?,
			None => self.transport.handle(request).await,
		}
	}
}
