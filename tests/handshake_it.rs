#![cfg(feature = "reqwest")]

// crates.io
use httpmock::prelude::*;
// self
use oauth1_authenticator::{
	_preludet::*,
	auth::ProviderId,
	error::FailureClass,
	handlers::CallbackRequest,
	http::HttpMethod,
	protocol::{OAUTH_TOKEN, OAUTH_TOKEN_SECRET, SCREEN_NAME, USER_ID},
	provider::ProviderDescriptor,
	session::SessionManager,
};

const CLIENT_ID: &str = "consumer-key-it";
const CLIENT_SECRET: &str = "consumer-secret-it";

fn build_descriptor(server: &MockServer) -> ProviderDescriptor {
	let provider_id = ProviderId::new("twitter-mock")
		.expect("Provider identifier should be valid for handshake test.");

	ProviderDescriptor::builder(provider_id)
		.request_token_endpoint(
			Url::parse(&server.url("/oauth/request_token"))
				.expect("Mock request token endpoint should parse successfully."),
		)
		.authorization_endpoint(
			Url::parse(&server.url("/oauth/authorize"))
				.expect("Mock authorization endpoint should parse successfully."),
		)
		.access_token_endpoint(
			Url::parse(&server.url("/oauth/access_token"))
				.expect("Mock access token endpoint should parse successfully."),
		)
		.build()
		.expect("Provider descriptor should build successfully.")
}

#[tokio::test]
async fn full_handshake_produces_an_authentication_result() {
	let server = MockServer::start_async().await;
	let descriptor = build_descriptor(&server);
	let (authenticator, session) = build_reqwest_test_authenticator(
		descriptor.clone(),
		test_config(CLIENT_ID, CLIENT_SECRET),
	);
	let request_token_mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/oauth/request_token")
				.header_exists("authorization");
			then.status(200)
				.header("content-type", "application/x-www-form-urlencoded")
				.body("oauth_token=req-token&oauth_token_secret=req-secret&oauth_callback_confirmed=true");
		})
		.await;
	let outcome = authenticator
		.start_login(HttpMethod::Get)
		.await
		.expect("Login start should redirect to the provider.");

	request_token_mock.assert_async().await;

	let authorize_url =
		outcome.redirect().expect("Login start outcome should be a redirect.");

	assert!(authorize_url.as_str().starts_with(descriptor.endpoints.authorization.as_str()));
	assert!(
		authorize_url
			.query_pairs()
			.any(|(name, value)| name == OAUTH_TOKEN && value == "req-token")
	);
	assert_eq!(session.get(OAUTH_TOKEN).as_deref(), Some("req-token"));
	assert_eq!(session.get(OAUTH_TOKEN_SECRET).as_deref(), Some("req-secret"));

	let access_token_mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/oauth/access_token")
				.header_exists("authorization");
			then.status(200)
				.header("content-type", "application/x-www-form-urlencoded")
				.body("oauth_token=acc-token&oauth_token_secret=acc-secret&user_id=12345&screen_name=ferris");
		})
		.await;
	let request =
		CallbackRequest::from_query(HttpMethod::Get, "oauth_token=req-token&oauth_verifier=verifier-1")
			.expect("Callback query should parse successfully.");
	let outcome = authenticator
		.callback(request)
		.await
		.expect("Callback should complete the login attempt.");

	access_token_mock.assert_async().await;

	let result =
		outcome.authentication().expect("Callback outcome should carry an authentication result.");

	assert_eq!(result.subject_id(), "12345");
	assert_eq!(result.subject.attributes.get(USER_ID), Some("12345"));
	assert_eq!(result.subject.attributes.get(SCREEN_NAME), Some("ferris"));
	assert_eq!(result.context.attributes.get(OAUTH_TOKEN), Some("acc-token"));
	assert_eq!(result.context.attributes.get(OAUTH_TOKEN_SECRET), Some("acc-secret"));
	// The request token is single-use; a completed callback must leave nothing behind.
	assert_eq!(session.get(OAUTH_TOKEN), None);
	assert_eq!(session.get(OAUTH_TOKEN_SECRET), None);
}

#[tokio::test]
async fn failed_request_token_call_fails_the_transaction() {
	let server = MockServer::start_async().await;
	let (authenticator, session) = build_reqwest_test_authenticator(
		build_descriptor(&server),
		test_config(CLIENT_ID, CLIENT_SECRET),
	);
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/oauth/request_token");
			then.status(500).body("oauth_problem=service_unavailable");
		})
		.await;
	let err = authenticator
		.start_login(HttpMethod::Get)
		.await
		.expect_err("A failed request token call must not produce a redirect.");

	mock.assert_async().await;

	assert_eq!(err.class(), FailureClass::ExternalServiceFailed);
	assert_eq!(session.get(OAUTH_TOKEN), None, "No request token may be stored on failure.");
}

#[tokio::test]
async fn unconfirmed_callback_fails_the_transaction() {
	let server = MockServer::start_async().await;
	let (authenticator, session) = build_reqwest_test_authenticator(
		build_descriptor(&server),
		test_config(CLIENT_ID, CLIENT_SECRET),
	);
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/oauth/request_token");
			then.status(200)
				.header("content-type", "application/x-www-form-urlencoded")
				.body("oauth_token=req-token&oauth_token_secret=req-secret");
		})
		.await;
	let err = authenticator
		.start_login(HttpMethod::Get)
		.await
		.expect_err("A provider that ignores the callback must be rejected.");

	mock.assert_async().await;

	assert_eq!(err.class(), FailureClass::ExternalServiceFailed);
	assert_eq!(session.get(OAUTH_TOKEN), None);
}
