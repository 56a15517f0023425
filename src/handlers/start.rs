//! Authorization-initiation handler.
//!
//! Obtains a temporary request token from the provider, persists it in the session
//! for the callback leg, and redirects the browser to the provider's authorization
//! page. A failed request-token call fails the login transaction outright rather
//! than redirecting the browser to an empty location.

// self
use crate::{
	_prelude::*,
	handlers::{Authenticator, HandlerOutcome},
	http::{HttpMethod, OAuthHttpClient},
	obs::{self, HandlerKind, HandlerSpan, LoginOutcome},
	session,
};

impl<C> Authenticator<C>
where
	C: OAuthHttpClient + ?Sized,
{
	/// Starts a login attempt by redirecting the browser to the provider.
	///
	/// Only `GET` is accepted; the handler is a browser navigation target, not a form
	/// endpoint.
	pub async fn start_login(&self, method: HttpMethod) -> Result<HandlerOutcome> {
		const KIND: HandlerKind = HandlerKind::StartLogin;

		let span = HandlerSpan::new(KIND, "start_login");

		obs::record_login_outcome(KIND, LoginOutcome::Attempt);

		let result = span
			.instrument(async move {
				if !method.is_get() {
					return Err(Error::MethodNotAllowed);
				}

				let service = self.service()?;
				let request_token = service.request_token().await?;
				let authorize_url = service.authorization_url(&request_token);

				// Stored only after the provider call succeeds, so a failed attempt
				// leaves no stale token behind.
				session::store_request_token(self.session.as_ref(), &request_token);

				Ok(HandlerOutcome::Redirect(authorize_url))
			})
			.await;

		match &result {
			Ok(_) => obs::record_login_outcome(KIND, LoginOutcome::Success),
			Err(_) => obs::record_login_outcome(KIND, LoginOutcome::Failure),
		}

		result
	}
}
