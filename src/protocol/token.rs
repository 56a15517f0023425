//! Token credential pairs exchanged during the handshake.

// self
use crate::{
	_prelude::*,
	auth::TokenSecret,
	error::ProtocolError,
	protocol::{OAUTH_TOKEN, OAUTH_TOKEN_SECRET},
};

/// Temporary credential pair held in the session for one login attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestToken {
	/// Public token identifier.
	pub token: String,
	/// Matching token secret used to sign the access-token exchange.
	pub secret: TokenSecret,
}
impl RequestToken {
	/// Creates a request token from its raw parts.
	pub fn new(token: impl Into<String>, secret: impl Into<TokenSecret>) -> Self {
		Self { token: token.into(), secret: secret.into() }
	}

	/// Parses the provider's form-encoded request-token response.
	///
	/// The 1.0a revision requires `oauth_callback_confirmed=true` in the response;
	/// anything else means the provider ignored the announced callback.
	pub(crate) fn from_form_body(body: &str) -> Result<Self, ProtocolError> {
		let fields = parse_form(body);

		if fields.get("oauth_callback_confirmed").map(String::as_str) != Some("true") {
			return Err(ProtocolError::CallbackNotConfirmed);
		}

		let token = required(&fields, OAUTH_TOKEN)?;
		let secret = required(&fields, OAUTH_TOKEN_SECRET)?;

		Ok(Self::new(token, secret))
	}
}

/// Access credential pair plus provider-supplied profile parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccessToken {
	/// Public token identifier.
	pub token: String,
	/// Matching token secret.
	pub secret: TokenSecret,
	/// Additional response parameters (`user_id`, `screen_name`, ...).
	pub parameters: BTreeMap<String, String>,
}
impl AccessToken {
	/// Parses the provider's form-encoded access-token response.
	pub(crate) fn from_form_body(body: &str) -> Result<Self, ProtocolError> {
		let mut fields = parse_form(body);
		let token = required(&fields, OAUTH_TOKEN)?;
		let secret = required(&fields, OAUTH_TOKEN_SECRET)?;

		fields.remove(OAUTH_TOKEN);
		fields.remove(OAUTH_TOKEN_SECRET);

		Ok(Self { token, secret: secret.into(), parameters: fields })
	}

	/// Looks up a provider profile parameter by name.
	pub fn parameter(&self, name: &str) -> Option<&str> {
		self.parameters.get(name).map(String::as_str)
	}
}

fn parse_form(body: &str) -> BTreeMap<String, String> {
	url::form_urlencoded::parse(body.trim().as_bytes())
		.map(|(name, value)| (name.into_owned(), value.into_owned()))
		.collect()
}

fn required(
	fields: &BTreeMap<String, String>,
	field: &'static str,
) -> Result<String, ProtocolError> {
	fields.get(field).cloned().ok_or(ProtocolError::MissingResponseField { field })
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn request_token_parses_confirmed_response() {
		let token = RequestToken::from_form_body(
			"oauth_token=req-token&oauth_token_secret=req-secret&oauth_callback_confirmed=true",
		)
		.expect("Confirmed request-token response should parse successfully.");

		assert_eq!(token.token, "req-token");
		assert_eq!(token.secret.expose(), "req-secret");
	}

	#[test]
	fn request_token_requires_callback_confirmation() {
		let err =
			RequestToken::from_form_body("oauth_token=req-token&oauth_token_secret=req-secret")
				.expect_err("Unconfirmed responses should be rejected.");

		assert!(matches!(err, ProtocolError::CallbackNotConfirmed));

		let err = RequestToken::from_form_body(
			"oauth_token=t&oauth_token_secret=s&oauth_callback_confirmed=false",
		)
		.expect_err("Explicitly unconfirmed responses should be rejected.");

		assert!(matches!(err, ProtocolError::CallbackNotConfirmed));
	}

	#[test]
	fn request_token_requires_both_credentials() {
		let err = RequestToken::from_form_body("oauth_token=t&oauth_callback_confirmed=true")
			.expect_err("Responses without a secret should be rejected.");

		assert!(matches!(
			err,
			ProtocolError::MissingResponseField { field: "oauth_token_secret" }
		));
	}

	#[test]
	fn access_token_separates_credentials_from_profile_parameters() {
		let token = AccessToken::from_form_body(
			"oauth_token=acc&oauth_token_secret=acc-secret&user_id=12345&screen_name=ferris",
		)
		.expect("Access-token response should parse successfully.");

		assert_eq!(token.token, "acc");
		assert_eq!(token.secret.expose(), "acc-secret");
		assert_eq!(token.parameter("user_id"), Some("12345"));
		assert_eq!(token.parameter("screen_name"), Some("ferris"));
		assert_eq!(token.parameter("oauth_token"), None);
	}

	#[test]
	fn form_values_are_percent_decoded() {
		let token = AccessToken::from_form_body(
			"oauth_token=acc&oauth_token_secret=acc-secret&screen_name=a%20b\n",
		)
		.expect("Access-token response should parse successfully.");

		assert_eq!(token.parameter("screen_name"), Some("a b"));
	}
}
