// self
use oauth1_authenticator::{
	auth::ProviderId,
	provider::{ProviderDescriptor, ProviderDescriptorBuilder, ProviderDescriptorError},
	url::Url,
};

fn url(value: &str) -> Url {
	Url::parse(value).expect("Failed to parse mock provider URL.")
}

fn builder(id: &str) -> ProviderDescriptorBuilder {
	let provider_id =
		ProviderId::new(id).expect("Failed to build provider identifier for mock descriptor.");

	ProviderDescriptor::builder(provider_id)
}

#[test]
fn descriptor_requires_all_three_endpoints() {
	let err = builder("mock-partial")
		.authorization_endpoint(url("https://example.com/authorize"))
		.access_token_endpoint(url("https://example.com/access_token"))
		.build()
		.expect_err("Descriptor builder should reject a missing request token endpoint.");

	assert!(matches!(err, ProviderDescriptorError::MissingRequestTokenEndpoint));

	let err = builder("mock-partial")
		.request_token_endpoint(url("https://example.com/request_token"))
		.access_token_endpoint(url("https://example.com/access_token"))
		.build()
		.expect_err("Descriptor builder should reject a missing authorization endpoint.");

	assert!(matches!(err, ProviderDescriptorError::MissingAuthorizationEndpoint));

	let err = builder("mock-partial")
		.request_token_endpoint(url("https://example.com/request_token"))
		.authorization_endpoint(url("https://example.com/authorize"))
		.build()
		.expect_err("Descriptor builder should reject a missing access token endpoint.");

	assert!(matches!(err, ProviderDescriptorError::MissingAccessTokenEndpoint));
}

#[test]
fn descriptor_rejects_insecure_endpoints() {
	let err = builder("mock-insecure")
		.request_token_endpoint(url("https://example.com/request_token"))
		.authorization_endpoint(url("http://example.com/authorize"))
		.access_token_endpoint(url("https://example.com/access_token"))
		.build()
		.expect_err("Descriptor builder should reject insecure authorization endpoints.");

	assert!(matches!(
		err,
		ProviderDescriptorError::InsecureEndpoint { endpoint: "authorization", .. }
	));
}

#[test]
fn twitter_preset_points_at_published_endpoints() {
	let descriptor = ProviderDescriptor::twitter();

	assert_eq!(descriptor.id.as_ref(), "twitter");
	assert_eq!(
		descriptor.endpoints.request_token.as_str(),
		"https://api.twitter.com/oauth/request_token",
	);
	assert_eq!(
		descriptor.endpoints.authorization.as_str(),
		"https://api.twitter.com/oauth/authorize",
	);
	assert_eq!(
		descriptor.endpoints.access_token.as_str(),
		"https://api.twitter.com/oauth/access_token",
	);
}
