//! Session seam between the authenticator and the host, plus handshake glue.
//!
//! The host owns the real per-user session; [`SessionManager`] is the narrow contract
//! the handlers need from it. [`MemorySession`] keeps attributes in-process for tests
//! and demos. The request token lives in the session only between the two handler
//! invocations of a single login attempt and is removed the moment the callback reads
//! it, so nothing stored here outlives one login transaction.

// self
use crate::{
	_prelude::*,
	auth::Attribute,
	protocol::{OAUTH_TOKEN, OAUTH_TOKEN_SECRET, RequestToken},
};

/// Error type produced by the session glue helpers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
pub enum SessionError {
	/// No request token is stored for the current login attempt.
	#[error("Session holds no request token for this login attempt.")]
	MissingRequestToken,
}

/// Per-login-attempt session contract implemented by host integrations.
pub trait SessionManager
where
	Self: Send + Sync,
{
	/// Stores (or replaces) a named attribute in the session.
	fn put(&self, attribute: Attribute);

	/// Returns the value stored under `name`, if present.
	fn get(&self, name: &str) -> Option<String>;

	/// Removes and returns the value stored under `name`.
	fn remove(&self, name: &str) -> Option<String>;
}

/// Thread-safe in-process session backend for tests and demos.
#[derive(Debug, Default)]
pub struct MemorySession(RwLock<HashMap<String, String>>);
impl SessionManager for MemorySession {
	fn put(&self, attribute: Attribute) {
		self.0.write().insert(attribute.name, attribute.value);
	}

	fn get(&self, name: &str) -> Option<String> {
		self.0.read().get(name).cloned()
	}

	fn remove(&self, name: &str) -> Option<String> {
		self.0.write().remove(name)
	}
}

/// Persists the request token for the remainder of the login attempt.
pub fn store_request_token(session: &dyn SessionManager, token: &RequestToken) {
	session.put(Attribute::of(OAUTH_TOKEN, token.token.clone()));
	session.put(Attribute::of(OAUTH_TOKEN_SECRET, token.secret.expose()));
}

/// Removes and returns the stored request token.
///
/// The token is deleted eagerly so a second callback can never replay it, whether or
/// not the exchange that follows succeeds.
pub fn take_request_token(session: &dyn SessionManager) -> Result<RequestToken, SessionError> {
	let token = session.remove(OAUTH_TOKEN);
	let secret = session.remove(OAUTH_TOKEN_SECRET);

	match (token, secret) {
		(Some(token), Some(secret)) => Ok(RequestToken::new(token, secret)),
		_ => Err(SessionError::MissingRequestToken),
	}
}
