//! Provider descriptors declaring the OAuth 1.0a endpoint triple.
//!
//! A descriptor is validated metadata only: the request-token endpoint, the
//! resource-owner authorization page, and the access-token endpoint. The handshake
//! service consumes descriptors without caring which provider they describe;
//! [`ProviderDescriptor::twitter`] ships the one preset the crate is built around.

// self
use crate::{_prelude::*, auth::ProviderId};

const TWITTER_REQUEST_TOKEN_URL: &str = "https://api.twitter.com/oauth/request_token";
const TWITTER_AUTHORIZE_URL: &str = "https://api.twitter.com/oauth/authorize";
const TWITTER_ACCESS_TOKEN_URL: &str = "https://api.twitter.com/oauth/access_token";

/// Errors raised while constructing or validating descriptors.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
pub enum ProviderDescriptorError {
	/// Request-token endpoint is mandatory.
	#[error("Missing request token endpoint.")]
	MissingRequestTokenEndpoint,
	/// Authorization endpoint is mandatory.
	#[error("Missing authorization endpoint.")]
	MissingAuthorizationEndpoint,
	/// Access-token endpoint is mandatory.
	#[error("Missing access token endpoint.")]
	MissingAccessTokenEndpoint,
	/// Endpoints must use HTTPS.
	#[error("The {endpoint} endpoint must use HTTPS: {url}.")]
	InsecureEndpoint {
		/// Which endpoint failed validation.
		endpoint: &'static str,
		/// Endpoint URL that failed validation.
		url: String,
	},
}

/// Endpoint triple declared by an OAuth 1.0a provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderEndpoints {
	/// Temporary credential endpoint (request token).
	pub request_token: Url,
	/// Resource-owner authorization page.
	pub authorization: Url,
	/// Token credential endpoint (access token).
	pub access_token: Url,
}

/// Immutable provider descriptor consumed by the handshake service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderDescriptor {
	/// Descriptor identifier.
	pub id: ProviderId,
	/// Endpoint definitions exposed by the provider.
	pub endpoints: ProviderEndpoints,
}
impl ProviderDescriptor {
	/// Creates a new builder for the provided identifier.
	pub fn builder(id: ProviderId) -> ProviderDescriptorBuilder {
		ProviderDescriptorBuilder::new(id)
	}

	/// Descriptor preset for Twitter's published OAuth 1.0a endpoints.
	pub fn twitter() -> Self {
		Self {
			id: ProviderId::new("twitter")
				.expect("Twitter provider identifier is a valid identifier."),
			endpoints: ProviderEndpoints {
				request_token: Url::parse(TWITTER_REQUEST_TOKEN_URL)
					.expect("Twitter request token endpoint is a valid URL."),
				authorization: Url::parse(TWITTER_AUTHORIZE_URL)
					.expect("Twitter authorization endpoint is a valid URL."),
				access_token: Url::parse(TWITTER_ACCESS_TOKEN_URL)
					.expect("Twitter access token endpoint is a valid URL."),
			},
		}
	}
}

/// Builder for [`ProviderDescriptor`] values.
#[derive(Debug)]
pub struct ProviderDescriptorBuilder {
	/// Identifier for the descriptor being constructed.
	pub id: ProviderId,
	/// Temporary credential endpoint (request token).
	pub request_token_endpoint: Option<Url>,
	/// Resource-owner authorization page.
	pub authorization_endpoint: Option<Url>,
	/// Token credential endpoint (access token).
	pub access_token_endpoint: Option<Url>,
}
impl ProviderDescriptorBuilder {
	/// Creates a new builder seeded with the provided identifier.
	pub fn new(id: ProviderId) -> Self {
		Self {
			id,
			request_token_endpoint: None,
			authorization_endpoint: None,
			access_token_endpoint: None,
		}
	}

	/// Sets the request-token endpoint.
	pub fn request_token_endpoint(mut self, url: Url) -> Self {
		self.request_token_endpoint = Some(url);

		self
	}

	/// Sets the authorization endpoint.
	pub fn authorization_endpoint(mut self, url: Url) -> Self {
		self.authorization_endpoint = Some(url);

		self
	}

	/// Sets the access-token endpoint.
	pub fn access_token_endpoint(mut self, url: Url) -> Self {
		self.access_token_endpoint = Some(url);

		self
	}

	/// Consumes the builder and validates the resulting descriptor.
	pub fn build(self) -> Result<ProviderDescriptor, ProviderDescriptorError> {
		let request_token = self
			.request_token_endpoint
			.ok_or(ProviderDescriptorError::MissingRequestTokenEndpoint)?;
		let authorization = self
			.authorization_endpoint
			.ok_or(ProviderDescriptorError::MissingAuthorizationEndpoint)?;
		let access_token =
			self.access_token_endpoint.ok_or(ProviderDescriptorError::MissingAccessTokenEndpoint)?;
		let descriptor = ProviderDescriptor {
			id: self.id,
			endpoints: ProviderEndpoints { request_token, authorization, access_token },
		};

		descriptor.validate()?;

		Ok(descriptor)
	}
}

impl ProviderDescriptor {
	fn validate(&self) -> Result<(), ProviderDescriptorError> {
		validate_endpoint("request token", &self.endpoints.request_token)?;
		validate_endpoint("authorization", &self.endpoints.authorization)?;
		validate_endpoint("access token", &self.endpoints.access_token)?;

		Ok(())
	}
}

fn validate_endpoint(name: &'static str, url: &Url) -> Result<(), ProviderDescriptorError> {
	if url.scheme() != "https" {
		Err(ProviderDescriptorError::InsecureEndpoint { endpoint: name, url: url.to_string() })
	} else {
		Ok(())
	}
}
