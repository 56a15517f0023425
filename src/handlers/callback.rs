//! Provider callback handler.
//!
//! Validates the parameters the provider appended to the callback URI, exchanges the
//! stored request token plus verifier for an access token, and maps the provider's
//! profile parameters into an [`AuthenticationResult`](crate::auth::AuthenticationResult).

// self
use crate::{
	_prelude::*,
	auth::{Attribute, Attributes, AuthenticationResult, ContextAttributes, SubjectAttributes},
	error::ProtocolError,
	handlers::{Authenticator, HandlerOutcome},
	http::{HttpMethod, OAuthHttpClient},
	obs::{self, HandlerKind, HandlerSpan, LoginOutcome},
	protocol::{AccessToken, OAUTH_TOKEN, OAUTH_TOKEN_SECRET, OAUTH_VERIFIER, SCREEN_NAME, USER_ID},
	session,
};

// Providers report a user-cancelled authorization with this error code.
const ACCESS_DENIED: &str = "access_denied";

/// Parameters carried by the provider's callback request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CallbackRequest {
	/// HTTP method of the callback request.
	pub method: HttpMethod,
	/// Request token echoed by the provider.
	pub oauth_token: Option<String>,
	/// Verification code proving the resource owner authorized the token.
	pub oauth_verifier: Option<String>,
	/// Provider error code, when authorization did not complete.
	pub error: Option<String>,
	/// Human-readable detail accompanying `error`.
	pub error_description: Option<String>,
}
impl CallbackRequest {
	/// Creates an empty callback request for the provided method.
	pub fn new(method: HttpMethod) -> Self {
		Self { method, ..Default::default() }
	}

	/// Parses a callback query string into its recognized parameters.
	///
	/// Unrecognized parameters are ignored; a recognized parameter appearing twice is
	/// rejected so conflicting values can never be silently dropped.
	pub fn from_query(method: HttpMethod, query: &str) -> Result<Self, ProtocolError> {
		let mut request = Self::new(method);

		for (name, value) in url::form_urlencoded::parse(query.trim_start_matches('?').as_bytes()) {
			let slot = match name.as_ref() {
				OAUTH_TOKEN => &mut request.oauth_token,
				OAUTH_VERIFIER => &mut request.oauth_verifier,
				"error" => &mut request.error,
				"error_description" => &mut request.error_description,
				_ => continue,
			};

			if slot.is_some() {
				return Err(ProtocolError::DuplicateParameter { name: name.into_owned() });
			}

			*slot = Some(value.into_owned());
		}

		Ok(request)
	}

	/// Sets the echoed request token.
	pub fn with_token(mut self, token: impl Into<String>) -> Self {
		self.oauth_token = Some(token.into());

		self
	}

	/// Sets the verification code.
	pub fn with_verifier(mut self, verifier: impl Into<String>) -> Self {
		self.oauth_verifier = Some(verifier.into());

		self
	}

	/// Sets the provider error code.
	pub fn with_error(mut self, error: impl Into<String>) -> Self {
		self.error = Some(error.into());

		self
	}

	/// Sets the provider error description.
	pub fn with_error_description(mut self, description: impl Into<String>) -> Self {
		self.error_description = Some(description.into());

		self
	}
}

impl<C> Authenticator<C>
where
	C: OAuthHttpClient + ?Sized,
{
	/// Completes a login attempt from the provider's callback request.
	///
	/// A user-cancelled authorization (`error=access_denied`) restarts the login by
	/// redirecting to the configured authentication base URI; every other provider
	/// error fails the transaction.
	pub async fn callback(&self, request: CallbackRequest) -> Result<HandlerOutcome> {
		const KIND: HandlerKind = HandlerKind::Callback;

		let span = HandlerSpan::new(KIND, "callback");

		obs::record_login_outcome(KIND, LoginOutcome::Attempt);

		let result = span
			.instrument(async move {
				if !request.method.is_get() {
					return Err(Error::MethodNotAllowed);
				}
				if let Some(error) = &request.error {
					if error == ACCESS_DENIED {
						return Ok(HandlerOutcome::Redirect(
							self.config.authentication_base_uri.clone(),
						));
					}

					let reason = match &request.error_description {
						Some(description) => format!("{error}: {description}"),
						None => error.clone(),
					};

					return Err(Error::ExternalService { reason });
				}

				let request_token = session::take_request_token(self.session.as_ref())?;

				if let Some(echoed) = &request.oauth_token
					&& *echoed != request_token.token
				{
					return Err(ProtocolError::RequestTokenMismatch.into());
				}

				let verifier =
					request.oauth_verifier.as_deref().ok_or(ProtocolError::MissingVerifier)?;
				let access_token = self.service()?.access_token(&request_token, verifier).await?;

				Ok(HandlerOutcome::Authenticated(build_result(access_token)?))
			})
			.await;

		match &result {
			Ok(_) => obs::record_login_outcome(KIND, LoginOutcome::Success),
			Err(_) => obs::record_login_outcome(KIND, LoginOutcome::Failure),
		}

		result
	}
}

// The subject is the provider's stable numeric identifier, never the mutable handle.
fn build_result(access_token: AccessToken) -> Result<AuthenticationResult> {
	let user_id = access_token
		.parameter(USER_ID)
		.ok_or(ProtocolError::MissingProfileField { field: USER_ID })?
		.to_owned();
	let mut subject_attributes = vec![Attribute::of(USER_ID, user_id.clone())];

	if let Some(screen_name) = access_token.parameter(SCREEN_NAME) {
		subject_attributes.push(Attribute::of(SCREEN_NAME, screen_name));
	}

	let context_attributes = Attributes::of([
		Attribute::of(OAUTH_TOKEN, access_token.token.clone()),
		Attribute::of(OAUTH_TOKEN_SECRET, access_token.secret.expose()),
	]);

	Ok(AuthenticationResult::new(
		SubjectAttributes::of(user_id, Attributes::of(subject_attributes)),
		ContextAttributes::of(context_attributes),
	))
}
