//! OAuth 1.0a protocol layer: request signing, token-endpoint calls, and response parsing.
//!
//! [`OAuth1Service`] plays the role a bundled OAuth client library plays in other stacks:
//! it owns the wire format end to end, while the request handlers supply configuration,
//! session glue, and field mapping on top of it.

pub mod signature;
pub mod token;

pub use token::*;

// self
use crate::{
	_prelude::*,
	auth::TokenSecret,
	error::ProtocolError,
	http::{HttpMethod, OAuthHttpClient, ProviderResponse, SignedRequest},
	provider::ProviderDescriptor,
};

/// `oauth_token` parameter, session attribute, and context attribute name.
pub const OAUTH_TOKEN: &str = "oauth_token";
/// `oauth_token_secret` parameter, session attribute, and context attribute name.
pub const OAUTH_TOKEN_SECRET: &str = "oauth_token_secret";
/// `oauth_verifier` callback parameter name.
pub const OAUTH_VERIFIER: &str = "oauth_verifier";
/// Provider profile parameter carrying the stable user identifier.
pub const USER_ID: &str = "user_id";
/// Provider profile parameter carrying the user's display handle.
pub const SCREEN_NAME: &str = "screen_name";

const BODY_PREVIEW_LIMIT: usize = 256;

/// Drives the three-legged OAuth 1.0a handshake against one provider descriptor.
pub struct OAuth1Service<C>
where
	C: ?Sized + OAuthHttpClient,
{
	descriptor: ProviderDescriptor,
	client_id: String,
	client_secret: TokenSecret,
	callback_uri: Url,
	http_client: Arc<C>,
}
impl<C> OAuth1Service<C>
where
	C: ?Sized + OAuthHttpClient,
{
	/// Creates a service for the provided descriptor and consumer credentials.
	pub fn new(
		descriptor: ProviderDescriptor,
		client_id: impl Into<String>,
		client_secret: TokenSecret,
		callback_uri: Url,
		http_client: impl Into<Arc<C>>,
	) -> Self {
		Self {
			descriptor,
			client_id: client_id.into(),
			client_secret,
			callback_uri,
			http_client: http_client.into(),
		}
	}

	/// Obtains a temporary request token, announcing the callback URI to the provider.
	pub async fn request_token(&self) -> Result<RequestToken> {
		let mut params = signature::base_oauth_params(&self.client_id);

		params.insert("oauth_callback".into(), self.callback_uri.to_string());

		let response = self
			.execute_signed(self.descriptor.endpoints.request_token.clone(), params, None)
			.await?;
		let token = RequestToken::from_form_body(&response.body)?;

		Ok(token)
	}

	/// Builds the provider authorization URL the browser should be redirected to.
	pub fn authorization_url(&self, token: &RequestToken) -> Url {
		let mut url = self.descriptor.endpoints.authorization.clone();

		url.query_pairs_mut().append_pair(OAUTH_TOKEN, &token.token);

		url
	}

	/// Exchanges an authorized request token plus verifier for an access token.
	pub async fn access_token(
		&self,
		token: &RequestToken,
		verifier: &str,
	) -> Result<AccessToken> {
		let mut params = signature::base_oauth_params(&self.client_id);

		params.insert(OAUTH_TOKEN.into(), token.token.clone());
		params.insert(OAUTH_VERIFIER.into(), verifier.to_owned());

		let response = self
			.execute_signed(
				self.descriptor.endpoints.access_token.clone(),
				params,
				Some(&token.secret),
			)
			.await?;
		let access_token = AccessToken::from_form_body(&response.body)?;

		Ok(access_token)
	}

	async fn execute_signed(
		&self,
		url: Url,
		mut params: BTreeMap<String, String>,
		token_secret: Option<&TokenSecret>,
	) -> Result<ProviderResponse> {
		let method = HttpMethod::Post;
		let signature = signature::sign(
			method,
			&url,
			&params,
			self.client_secret.expose(),
			token_secret.map(TokenSecret::expose),
		)?;

		params.insert("oauth_signature".into(), signature);

		let authorization = signature::authorization_header(&params);
		let request = SignedRequest { method, url, authorization };
		let response = self.http_client.execute(request).await?;

		if !response.is_success() {
			return Err(ProtocolError::TokenEndpoint {
				status: response.status,
				preview: truncate_preview(response.body),
			}
			.into());
		}

		Ok(response)
	}
}
impl<C> Debug for OAuth1Service<C>
where
	C: ?Sized + OAuthHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("OAuth1Service")
			.field("descriptor", &self.descriptor)
			.field("client_id", &self.client_id)
			.field("callback_uri", &self.callback_uri)
			.finish()
	}
}

fn truncate_preview(body: String) -> String {
	if body.chars().count() <= BODY_PREVIEW_LIMIT {
		return body;
	}

	let mut buf = String::new();

	for (idx, ch) in body.chars().enumerate() {
		if idx >= BODY_PREVIEW_LIMIT {
			buf.push('…');

			break;
		}
		buf.push(ch);
	}

	buf
}
