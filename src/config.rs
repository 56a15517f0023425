//! Authenticator instance configuration supplied by the host.

// self
use crate::{
	_prelude::*,
	auth::{AuthenticatorId, TokenSecret},
	error::ConfigError,
};

/// Static configuration for one authenticator instance.
///
/// Mirrors what a host collects from its admin configuration: the OAuth 1.0a consumer
/// credentials issued by the provider, the authenticator's instance identifier, and the
/// base URI of the host's authentication endpoint used both to derive the provider-facing
/// callback URI and to send the browser back to login when authorization is denied.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AuthenticatorConfig {
	/// Identifier of this authenticator instance; becomes a callback path segment.
	pub authenticator_id: AuthenticatorId,
	/// OAuth 1.0a consumer key issued by the provider.
	pub client_id: String,
	/// OAuth 1.0a consumer secret issued by the provider.
	pub client_secret: TokenSecret,
	/// Base URI of the host's authentication endpoint.
	pub authentication_base_uri: Url,
}
impl AuthenticatorConfig {
	/// Creates a configuration from its raw parts.
	pub fn new(
		authenticator_id: AuthenticatorId,
		client_id: impl Into<String>,
		client_secret: impl Into<TokenSecret>,
		authentication_base_uri: Url,
	) -> Self {
		Self {
			authenticator_id,
			client_id: client_id.into(),
			client_secret: client_secret.into(),
			authentication_base_uri,
		}
	}

	/// Ensures the consumer credentials are present.
	pub fn validate(&self) -> Result<(), ConfigError> {
		if self.client_id.is_empty() || self.client_secret.is_empty() {
			Err(ConfigError::EmptyClientCredentials)
		} else {
			Ok(())
		}
	}

	/// Computes the provider-facing callback URI for this instance.
	///
	/// The URI is `<authentication_base_uri>/<authenticator_id>/callback`. A base URI
	/// that cannot carry path segments fails with [`ConfigError::InvalidRedirect`].
	pub fn callback_uri(&self) -> Result<Url, ConfigError> {
		let mut url = self.authentication_base_uri.clone();

		url.path_segments_mut()
			.map_err(|()| ConfigError::InvalidRedirect {
				base: self.authentication_base_uri.to_string(),
			})?
			.pop_if_empty()
			.push(self.authenticator_id.as_ref())
			.push("callback");

		Ok(url)
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn config(base: &str) -> AuthenticatorConfig {
		AuthenticatorConfig::new(
			AuthenticatorId::new("twitter1")
				.expect("Authenticator identifier fixture should be valid."),
			"consumer-key",
			"consumer-secret",
			Url::parse(base).expect("Base URI fixture should parse successfully."),
		)
	}

	#[test]
	fn callback_uri_appends_id_and_callback_segments() {
		let url = config("https://idsvr.example.com/authn")
			.callback_uri()
			.expect("Callback URI should derive successfully.");

		assert_eq!(url.as_str(), "https://idsvr.example.com/authn/twitter1/callback");
	}

	#[test]
	fn callback_uri_tolerates_trailing_slash() {
		let url = config("https://idsvr.example.com/authn/")
			.callback_uri()
			.expect("Callback URI should derive successfully.");

		assert_eq!(url.as_str(), "https://idsvr.example.com/authn/twitter1/callback");
	}

	#[test]
	fn callback_uri_rejects_opaque_base() {
		let err = config("mailto:admin@example.com")
			.callback_uri()
			.expect_err("Opaque base URIs should be rejected.");

		assert!(matches!(err, ConfigError::InvalidRedirect { .. }));
	}

	#[test]
	fn validation_rejects_empty_credentials() {
		let mut config = config("https://idsvr.example.com/authn");

		config.validate().expect("Populated credentials should validate.");

		config.client_secret = TokenSecret::from("");

		assert!(matches!(config.validate(), Err(ConfigError::EmptyClientCredentials)));
	}
}
