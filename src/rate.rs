//! Sliding-window request budget tracking for the Enterprise API.
//!
//! The service enforces a per-source ceiling of 250 requests/minute. The SDK
//! self-governs by logging every request attempt into a time-expiring window and
//! pausing briefly once the rolling count gets within [`CEILING_HEADROOM`] of the
//! ceiling. The window is an approximation: entries expire roughly 60 seconds after
//! insertion, and the executor's check-then-record sequence is not atomic, so
//! concurrent callers can briefly overshoot. That matches the service's tolerance
//! for short bursts; the window is advisory pacing, not admission control.

// crates.io
use base64::{Engine as _, engine::general_purpose::STANDARD_NO_PAD};
use sha2::{Digest, Sha256};
// self
use crate::{_prelude::*, http::RequestDescriptor};

/// Requests the service allows per window from a single source address.
pub const REQUEST_CEILING: usize = 250;
/// Remaining budget at which the executor starts pausing before dispatch.
pub const CEILING_HEADROOM: usize = 5;
/// Advisory pause applied when the window approaches the ceiling.
pub const BACKOFF_PAUSE: std::time::Duration = std::time::Duration::from_millis(100);
/// Lifetime of one window entry.
pub const WINDOW_TTL: Duration = Duration::seconds(60);

/// Time-expiring log of recent request attempts.
///
/// Entries are keyed by a digest of the full request descriptor plus the insertion
/// instant, so identical requests issued at different times occupy distinct slots.
/// Only presence matters; [`count`](Self::count) is the number of non-expired entries.
#[derive(Debug, Default)]
pub struct RateWindow(Mutex<HashMap<String, OffsetDateTime>>);
impl RateWindow {
	/// Records a request attempt at the current instant.
	pub fn record(&self, descriptor: &RequestDescriptor) {
		self.record_at(descriptor, OffsetDateTime::now_utc());
	}

	/// Records a request attempt at the provided instant.
	pub fn record_at(&self, descriptor: &RequestDescriptor, instant: OffsetDateTime) {
		let mut entries = self.0.lock();

		prune(&mut entries, instant);
		entries.insert(fingerprint(descriptor, instant), instant);
	}

	/// Number of attempts recorded within the last window.
	pub fn count(&self) -> usize {
		self.count_at(OffsetDateTime::now_utc())
	}

	/// Number of attempts that are still live relative to the provided instant.
	pub fn count_at(&self, instant: OffsetDateTime) -> usize {
		let mut entries = self.0.lock();

		prune(&mut entries, instant);

		entries.len()
	}

	/// Whether the rolling count is within [`CEILING_HEADROOM`] of the ceiling.
	pub fn should_pause(&self) -> bool {
		self.count() >= REQUEST_CEILING.saturating_sub(CEILING_HEADROOM)
	}
}

fn prune(entries: &mut HashMap<String, OffsetDateTime>, instant: OffsetDateTime) {
	entries.retain(|_, recorded| *recorded + WINDOW_TTL > instant);
}

fn fingerprint(descriptor: &RequestDescriptor, instant: OffsetDateTime) -> String {
	let mut hasher = Sha256::new();

	hasher.update(descriptor.method.as_str().as_bytes());
	hasher.update(descriptor.path.as_bytes());

	for (key, value) in &descriptor.query {
		hasher.update(key.as_bytes());
		hasher.update(value.as_bytes());
	}
	if let Some(payload) = &descriptor.payload {
		hasher.update(format!("{payload:?}").as_bytes());
	}

	hasher.update(instant.unix_timestamp_nanos().to_le_bytes());

	STANDARD_NO_PAD.encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
	// crates.io
	use time::macros;
	// self
	use super::*;

	fn descriptor(index: usize) -> RequestDescriptor {
		RequestDescriptor::get("enterprise/v1/account/ACC-1/addresses").query("page", index)
	}

	#[test]
	fn count_tracks_live_entries_and_expiry() {
		let window = RateWindow::default();
		let base = macros::datetime!(2025-06-01 12:00 UTC);

		for index in 0..7 {
			window.record_at(&descriptor(index), base + Duration::seconds(index as i64));
		}

		assert_eq!(window.count_at(base + Duration::seconds(30)), 7);
		assert_eq!(window.count_at(base + Duration::seconds(64)), 2);
		assert_eq!(window.count_at(base + Duration::seconds(120)), 0);
	}

	#[test]
	fn identical_descriptors_at_distinct_instants_occupy_distinct_slots() {
		let window = RateWindow::default();
		let base = macros::datetime!(2025-06-01 12:00 UTC);
		let fixed = descriptor(0);

		window.record_at(&fixed, base);
		window.record_at(&fixed, base + Duration::milliseconds(1));
		window.record_at(&fixed, base + Duration::milliseconds(2));

		assert_eq!(window.count_at(base + Duration::seconds(1)), 3);
	}

	#[test]
	fn pause_threshold_respects_headroom() {
		let window = RateWindow::default();
		let now = OffsetDateTime::now_utc();

		for index in 0..(REQUEST_CEILING - CEILING_HEADROOM - 1) {
			window.record_at(&descriptor(index), now);
		}

		assert!(!window.should_pause());

		window.record_at(&descriptor(REQUEST_CEILING), now);

		assert!(window.should_pause());
	}
}
