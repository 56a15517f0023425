//! Host-facing request handlers coordinating the login handshake.

pub mod callback;
pub mod start;

pub use callback::*;

// self
use crate::{
	_prelude::*,
	auth::AuthenticationResult,
	config::AuthenticatorConfig,
	http::OAuthHttpClient,
	protocol::OAuth1Service,
	provider::ProviderDescriptor,
	session::SessionManager,
};
#[cfg(feature = "reqwest")] use crate::http::ReqwestHttpClient;

/// Outcome of a handler invocation the host must act on.
#[derive(Clone, Debug)]
pub enum HandlerOutcome {
	/// Redirect the browser to the contained location.
	Redirect(Url),
	/// The login attempt completed; deliver the result to the host.
	Authenticated(AuthenticationResult),
}
impl HandlerOutcome {
	/// Returns the redirect location, if this outcome is a redirect.
	pub fn redirect(&self) -> Option<&Url> {
		match self {
			HandlerOutcome::Redirect(url) => Some(url),
			HandlerOutcome::Authenticated(_) => None,
		}
	}

	/// Returns the authentication result, if the login attempt completed.
	pub fn authentication(&self) -> Option<&AuthenticationResult> {
		match self {
			HandlerOutcome::Redirect(_) => None,
			HandlerOutcome::Authenticated(result) => Some(result),
		}
	}
}

/// Coordinates one provider's login handshake on behalf of the host.
///
/// The authenticator owns the configuration, provider descriptor, session seam, and
/// HTTP client so the individual handlers can focus on handshake-specific logic
/// (request-token acquisition, verifier exchange, attribute mapping). A fresh
/// [`OAuth1Service`] is assembled per invocation from validated configuration.
pub struct Authenticator<C>
where
	C: ?Sized + OAuthHttpClient,
{
	/// Authenticator configuration (consumer credentials + redirect targets).
	pub config: AuthenticatorConfig,
	/// Provider descriptor that defines the OAuth 1.0a endpoint triple.
	pub descriptor: ProviderDescriptor,
	/// Session seam persisting the request token between handler invocations.
	pub session: Arc<dyn SessionManager>,
	/// HTTP client wrapper used for every outbound provider request.
	pub http_client: Arc<C>,
}
impl<C> Authenticator<C>
where
	C: ?Sized + OAuthHttpClient,
{
	/// Creates an authenticator that reuses the caller-provided transport.
	pub fn with_http_client(
		config: AuthenticatorConfig,
		descriptor: ProviderDescriptor,
		session: Arc<dyn SessionManager>,
		http_client: impl Into<Arc<C>>,
	) -> Self {
		Self { config, descriptor, session, http_client: http_client.into() }
	}

	pub(crate) fn service(&self) -> Result<OAuth1Service<C>> {
		self.config.validate()?;

		let callback_uri = self.config.callback_uri()?;

		Ok(OAuth1Service::new(
			self.descriptor.clone(),
			self.config.client_id.clone(),
			self.config.client_secret.clone(),
			callback_uri,
			self.http_client.clone(),
		))
	}
}
#[cfg(feature = "reqwest")]
impl Authenticator<ReqwestHttpClient> {
	/// Creates a new authenticator for the provided configuration and descriptor.
	///
	/// The authenticator provisions its own reqwest-backed transport so hosts do not
	/// need to pass HTTP handles explicitly.
	pub fn new(
		config: AuthenticatorConfig,
		descriptor: ProviderDescriptor,
		session: Arc<dyn SessionManager>,
	) -> Self {
		Self::with_http_client(config, descriptor, session, ReqwestHttpClient::default())
	}
}
impl<C> Clone for Authenticator<C>
where
	C: ?Sized + OAuthHttpClient,
{
	fn clone(&self) -> Self {
		Self {
			config: self.config.clone(),
			descriptor: self.descriptor.clone(),
			session: self.session.clone(),
			http_client: self.http_client.clone(),
		}
	}
}
impl<C> Debug for Authenticator<C>
where
	C: ?Sized + OAuthHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Authenticator")
			.field("config", &self.config)
			.field("descriptor", &self.descriptor)
			.finish()
	}
}
