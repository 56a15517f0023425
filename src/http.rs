//! Transport primitives for provider token-endpoint calls.
//!
//! [`OAuthHttpClient`] is the authenticator's only seam to an HTTP stack: hosts that
//! route outbound traffic through their own client factory implement it over that
//! factory, while the `reqwest` feature ships a default implementation. The protocol
//! layer hands implementations a fully signed request, so transports never touch
//! OAuth parameters beyond copying the `Authorization` header.

// std
use std::ops::Deref;
// crates.io
#[cfg(feature = "reqwest")]
use reqwest::{
	Method,
	header::{ACCEPT, AUTHORIZATION},
};
// self
use crate::{_prelude::*, error::TransportError};

/// Boxed future returned by [`OAuthHttpClient`] implementations.
pub type HttpFuture<'a> =
	Pin<Box<dyn Future<Output = Result<ProviderResponse, TransportError>> + 'a + Send>>;

/// HTTP methods used across the handshake.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HttpMethod {
	/// GET; the only method the login handlers accept.
	#[default]
	Get,
	/// POST; used for every token-endpoint call.
	Post,
}
impl HttpMethod {
	/// Returns the upper-case method name used in signature base strings.
	pub fn as_str(self) -> &'static str {
		match self {
			HttpMethod::Get => "GET",
			HttpMethod::Post => "POST",
		}
	}

	/// Returns true for GET requests.
	pub fn is_get(self) -> bool {
		matches!(self, HttpMethod::Get)
	}
}
impl Display for HttpMethod {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Fully signed request dispatched to a provider token endpoint.
#[derive(Clone, Debug)]
pub struct SignedRequest {
	/// HTTP method for the call; token endpoints use POST.
	pub method: HttpMethod,
	/// Complete endpoint URL.
	pub url: Url,
	/// Value for the `Authorization` header, carrying every OAuth protocol parameter.
	pub authorization: String,
}

/// Provider response reduced to what the protocol layer needs.
#[derive(Clone, Debug)]
pub struct ProviderResponse {
	/// HTTP status code.
	pub status: u16,
	/// Response body decoded as text.
	pub body: String,
}
impl ProviderResponse {
	/// Returns true for 2xx statuses.
	pub fn is_success(&self) -> bool {
		(200..300).contains(&self.status)
	}
}

/// Abstraction over HTTP transports capable of executing signed OAuth 1.0a calls.
///
/// Implementations must be `Send + Sync + 'static` so a single client can serve every
/// login transaction without wrappers. Token calls must not follow redirects; provider
/// token endpoints answer directly instead of delegating to another URI.
pub trait OAuthHttpClient
where
	Self: 'static + Send + Sync,
{
	/// Executes the signed request and returns the raw provider response.
	fn execute(&self, request: SignedRequest) -> HttpFuture<'_>;
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
/// Configure any custom [`ReqwestClient`] to disable redirect following before
/// wrapping it.
#[cfg(feature = "reqwest")]
#[derive(Clone, Default)]
pub struct ReqwestHttpClient(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestHttpClient {
	/// Wraps an existing [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestHttpClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl Deref for ReqwestHttpClient {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl OAuthHttpClient for ReqwestHttpClient {
	fn execute(&self, request: SignedRequest) -> HttpFuture<'_> {
		let client = self.0.clone();

		Box::pin(async move {
			let method = match request.method {
				HttpMethod::Get => Method::GET,
				HttpMethod::Post => Method::POST,
			};
			let response = client
				.request(method, request.url)
				.header(AUTHORIZATION, request.authorization)
				.header(ACCEPT, "application/x-www-form-urlencoded")
				.send()
				.await
				.map_err(TransportError::from)?;
			let status = response.status().as_u16();
			let body = response.text().await.map_err(TransportError::from)?;

			Ok(ProviderResponse { status, body })
		})
	}
}
