//! Optional observability helpers for the request handlers.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `oauth1_authenticator.handler` with
//!   the `handler` (entry point) and `stage` (call site) fields.
//! - Enable `metrics` to increment the `oauth1_authenticator_login_total` counter for
//!   every attempt/success/failure, labeled by `handler` + `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Handler entry points observed by the authenticator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HandlerKind {
	/// Authorization-initiation handler.
	StartLogin,
	/// Provider callback handler.
	Callback,
}
impl HandlerKind {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			HandlerKind::StartLogin => "start_login",
			HandlerKind::Callback => "callback",
		}
	}
}
impl Display for HandlerKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each handler invocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LoginOutcome {
	/// Entry to a handler.
	Attempt,
	/// Successful completion.
	Success,
	/// Failure propagated back to the host.
	Failure,
}
impl LoginOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			LoginOutcome::Attempt => "attempt",
			LoginOutcome::Success => "success",
			LoginOutcome::Failure => "failure",
		}
	}
}
impl Display for LoginOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
