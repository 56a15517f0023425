//! Authenticator-level error types shared across handlers, protocol, and session glue.

// self
use crate::_prelude::*;

/// Authenticator-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical authenticator error exposed by the request handlers.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// OAuth 1.0a protocol failure reported by or about the provider.
	#[error(transparent)]
	Protocol(#[from] ProtocolError),
	/// Login-attempt session glue failure.
	#[error("{0}")]
	Session(
		#[from]
		#[source]
		crate::session::SessionError,
	),
	/// Transport failure (DNS, TCP, TLS).
	#[error(transparent)]
	Transport(#[from] TransportError),

	/// Handler was invoked with an HTTP method it does not accept.
	#[error("Only GET requests are accepted by this handler.")]
	MethodNotAllowed,
	/// Provider reported a failure the authenticator cannot recover from.
	#[error("External service failure: {reason}.")]
	ExternalService {
		/// Provider- or authenticator-supplied reason string.
		reason: String,
	},
}
impl Error {
	/// Classifies the error into the host-facing failure taxonomy.
	///
	/// Hosts translate the class into their own response signaling (status codes, error pages)
	/// without matching on individual variants.
	pub fn class(&self) -> FailureClass {
		match self {
			Error::MethodNotAllowed => FailureClass::MethodNotAllowed,
			Error::Protocol(_) | Error::Transport(_) | Error::ExternalService { .. } =>
				FailureClass::ExternalServiceFailed,
			Error::Config(_) | Error::Session(_) => FailureClass::InternalServerError,
		}
	}
}

/// Host-facing failure classes derived from [`Error`] values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailureClass {
	/// Reject the request with method-not-allowed semantics.
	MethodNotAllowed,
	/// Surface an upstream/provider failure to the end user.
	ExternalServiceFailed,
	/// Fail the login transaction with an internal server error.
	InternalServerError,
}

/// Configuration and validation failures raised by the authenticator.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// Callback redirect URI cannot be derived from the authentication base URI.
	#[error("Unable to derive a callback URI from `{base}`.")]
	InvalidRedirect {
		/// Authentication base URI that rejected extra path segments.
		base: String,
	},
	/// Consumer credentials are missing or empty.
	#[error("OAuth consumer credentials must not be empty.")]
	EmptyClientCredentials,
}

/// OAuth 1.0a protocol failures surfaced during the handshake.
#[derive(Debug, ThisError)]
pub enum ProtocolError {
	/// Token endpoint answered with a non-success status.
	#[error("Token endpoint returned status {status}: {preview}.")]
	TokenEndpoint {
		/// HTTP status code returned by the provider.
		status: u16,
		/// Truncated response body preview.
		preview: String,
	},
	/// Token endpoint response omitted a mandatory field.
	#[error("Token endpoint response is missing `{field}`.")]
	MissingResponseField {
		/// Name of the absent form field.
		field: &'static str,
	},
	/// Provider did not confirm the announced callback (1.0a revision requirement).
	#[error("Provider did not confirm the OAuth callback.")]
	CallbackNotConfirmed,
	/// Callback query string repeated a parameter the handler reads.
	#[error("Expected only one query string parameter named `{name}`, but found multiple.")]
	DuplicateParameter {
		/// Name of the duplicated parameter.
		name: String,
	},
	/// Callback redirect carried no `oauth_verifier` parameter.
	#[error("Callback request carries no `oauth_verifier`.")]
	MissingVerifier,
	/// Callback `oauth_token` differs from the request token stored for this login attempt.
	#[error("Callback `oauth_token` does not match the stored request token.")]
	RequestTokenMismatch,
	/// Access token response lacked a profile parameter the result mapping needs.
	#[error("Access token response is missing the `{field}` profile parameter.")]
	MissingProfileField {
		/// Name of the absent profile parameter.
		field: &'static str,
	},
	/// HMAC-SHA1 rejected the derived signing key.
	#[error("HMAC-SHA1 signing key was rejected.")]
	InvalidSigningKey,
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the provider.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while calling the provider.")]
	Io(#[from] std::io::Error),
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}
