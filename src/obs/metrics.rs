// self
use crate::obs::{HandlerKind, LoginOutcome};

/// Records a login outcome via the global metrics recorder (when enabled).
pub fn record_login_outcome(kind: HandlerKind, outcome: LoginOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"oauth1_authenticator_login_total",
			"handler" => kind.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (kind, outcome);
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn record_login_outcome_noop_without_metrics() {
		record_login_outcome(HandlerKind::Callback, LoginOutcome::Failure);
	}
}
