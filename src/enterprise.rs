//! Enterprise API resource surfaces, implemented as thin mappings over the
//! session pipeline.
//!
//! Every list surface routes through the page aggregator and every singular
//! surface through the request executor; nothing here talks HTTP directly.
//! Relationship toggles (attach/detach) are best-effort boolean operations:
//! they swallow failures and report `false`, so callers cannot distinguish why
//! such an operation failed, only that it did.

pub mod address;
pub mod router;
pub mod service_line;
pub mod subscription;
pub mod telemetry;
pub mod terminal;

pub use address::*;
pub use router::*;
pub use service_line::*;
pub use subscription::*;
pub use telemetry::*;
pub use terminal::*;

/// Builds an account-scoped endpoint path.
pub(crate) fn account_path(account: &str, suffix: &str) -> String {
	format!("enterprise/v1/account/{account}/{suffix}")
}
