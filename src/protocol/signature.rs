//! HMAC-SHA1 request signing per RFC 5849.

// crates.io
use base64::{Engine as _, engine::general_purpose::STANDARD};
use hmac::{Hmac, Mac};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use rand::{Rng, distr::Alphanumeric};
use sha1::Sha1;
use time::OffsetDateTime;
// self
use crate::{_prelude::*, error::ProtocolError, http::HttpMethod};

// RFC 3986 unreserved characters stay literal; everything else is escaped.
const PARAMETER_ENCODE_SET: &AsciiSet =
	&NON_ALPHANUMERIC.remove(b'-').remove(b'.').remove(b'_').remove(b'~');
const NONCE_LEN: usize = 32;

type HmacSha1 = Hmac<Sha1>;

/// Percent-encodes a value with the OAuth 1.0a parameter encode set.
pub fn percent_encode(value: &str) -> String {
	utf8_percent_encode(value, PARAMETER_ENCODE_SET).to_string()
}

/// Returns the protocol parameters common to every signed call, with a fresh nonce
/// and the current timestamp.
pub(crate) fn base_oauth_params(client_id: &str) -> BTreeMap<String, String> {
	let mut params = BTreeMap::new();

	params.insert("oauth_consumer_key".into(), client_id.to_owned());
	params.insert("oauth_nonce".into(), nonce());
	params.insert("oauth_signature_method".into(), "HMAC-SHA1".into());
	params
		.insert("oauth_timestamp".into(), OffsetDateTime::now_utc().unix_timestamp().to_string());
	params.insert("oauth_version".into(), "1.0".into());

	params
}

/// Computes the base64-encoded HMAC-SHA1 signature for a request.
///
/// `params` holds every parameter that participates in the signature (protocol
/// parameters plus any body parameters); query parameters carried by `url` are folded
/// in automatically. The token secret is absent for the initial request-token call.
pub fn sign(
	method: HttpMethod,
	url: &Url,
	params: &BTreeMap<String, String>,
	client_secret: &str,
	token_secret: Option<&str>,
) -> Result<String, ProtocolError> {
	let base = signature_base_string(method, url, params);
	let key = format!(
		"{}&{}",
		percent_encode(client_secret),
		percent_encode(token_secret.unwrap_or_default()),
	);
	let mut mac = HmacSha1::new_from_slice(key.as_bytes())
		.map_err(|_| ProtocolError::InvalidSigningKey)?;

	mac.update(base.as_bytes());

	Ok(STANDARD.encode(mac.finalize().into_bytes()))
}

/// Builds the `Authorization: OAuth ...` header value from signed protocol parameters.
pub fn authorization_header(params: &BTreeMap<String, String>) -> String {
	let mut header = String::from("OAuth ");

	for (idx, (name, value)) in params.iter().enumerate() {
		if idx > 0 {
			header.push_str(", ");
		}

		header.push_str(&percent_encode(name));
		header.push_str("=\"");
		header.push_str(&percent_encode(value));
		header.push('"');
	}

	header
}

/// Assembles the RFC 5849 signature base string for a request.
pub fn signature_base_string(
	method: HttpMethod,
	url: &Url,
	params: &BTreeMap<String, String>,
) -> String {
	let mut pairs: Vec<(String, String)> = params
		.iter()
		.map(|(name, value)| (percent_encode(name), percent_encode(value)))
		.collect();

	for (name, value) in url.query_pairs() {
		pairs.push((percent_encode(&name), percent_encode(&value)));
	}

	pairs.sort();

	let mut param_string = String::new();

	for (idx, (name, value)) in pairs.iter().enumerate() {
		if idx > 0 {
			param_string.push('&');
		}

		param_string.push_str(name);
		param_string.push('=');
		param_string.push_str(value);
	}

	format!(
		"{}&{}&{}",
		method.as_str(),
		percent_encode(&base_uri(url)),
		percent_encode(&param_string),
	)
}

// Scheme, host, non-default port, and path; query and fragment are excluded.
fn base_uri(url: &Url) -> String {
	let mut base = format!("{}://", url.scheme());

	if let Some(host) = url.host_str() {
		base.push_str(host);
	}
	if let Some(port) = url.port() {
		base.push_str(&format!(":{port}"));
	}

	base.push_str(url.path());

	base
}

pub(crate) fn nonce() -> String {
	rand::rng().sample_iter(Alphanumeric).take(NONCE_LEN).map(char::from).collect()
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	// The worked HMAC-SHA1 example from Twitter's "Creating a signature" documentation.
	fn example_params() -> BTreeMap<String, String> {
		BTreeMap::from_iter(
			[
				("include_entities", "true"),
				("oauth_consumer_key", "xvz1evFS4wEEPTGEFPHBog"),
				("oauth_nonce", "kYjzVBB8Y0ZFabxSWbWovY3uYSQ2pTgmZeNu2VS4cg"),
				("oauth_signature_method", "HMAC-SHA1"),
				("oauth_timestamp", "1318622958"),
				("oauth_token", "370773112-GmHxMAgYyLbNEtIKZeRNFsMKPR9EyMZeS9weJAEb"),
				("oauth_version", "1.0"),
				("status", "Hello Ladies + Gentlemen, a signed OAuth request!"),
			]
			.map(|(name, value)| (name.to_owned(), value.to_owned())),
		)
	}

	#[test]
	fn parameter_encoding_escapes_reserved_characters() {
		assert_eq!(percent_encode("abcXYZ019-._~"), "abcXYZ019-._~");
		assert_eq!(percent_encode("Ladies + Gentlemen"), "Ladies%20%2B%20Gentlemen");
		assert_eq!(percent_encode("An encoded string!"), "An%20encoded%20string%21");
		assert_eq!(percent_encode("Dogs, Cats & Mice"), "Dogs%2C%20Cats%20%26%20Mice");
	}

	#[test]
	fn base_string_matches_documented_example() {
		let url = Url::parse("https://api.twitter.com/1.1/statuses/update.json")
			.expect("Example URL should parse successfully.");
		let base = signature_base_string(HttpMethod::Post, &url, &example_params());

		assert_eq!(
			base,
			"POST&https%3A%2F%2Fapi.twitter.com%2F1.1%2Fstatuses%2Fupdate.json&\
			include_entities%3Dtrue%26\
			oauth_consumer_key%3Dxvz1evFS4wEEPTGEFPHBog%26\
			oauth_nonce%3DkYjzVBB8Y0ZFabxSWbWovY3uYSQ2pTgmZeNu2VS4cg%26\
			oauth_signature_method%3DHMAC-SHA1%26\
			oauth_timestamp%3D1318622958%26\
			oauth_token%3D370773112-GmHxMAgYyLbNEtIKZeRNFsMKPR9EyMZeS9weJAEb%26\
			oauth_version%3D1.0%26\
			status%3DHello%2520Ladies%2520%252B%2520Gentlemen%252C%2520a%2520signed%2520OAuth%2520request%2521",
		);
	}

	#[test]
	fn signature_matches_documented_example() {
		let url = Url::parse("https://api.twitter.com/1.1/statuses/update.json")
			.expect("Example URL should parse successfully.");
		let signature = sign(
			HttpMethod::Post,
			&url,
			&example_params(),
			"kAcSOqF21Fu85e7zjz7ZN2U4ZRhfV3WpwPAoE3Z7kBw",
			Some("LswwdoUaIvS8ltyTt5jkRh4J50vUPVVHtR2YPi5kE"),
		)
		.expect("Signing the example request should succeed.");

		assert_eq!(signature, "tnnArxj06cWHq44gCs1OSKk/jLY=");
	}

	#[test]
	fn base_string_folds_in_url_query_parameters() {
		let url = Url::parse("https://example.com/token?b=2")
			.expect("Query URL should parse successfully.");
		let params = BTreeMap::from_iter([("a".to_owned(), "1".to_owned())]);
		let base = signature_base_string(HttpMethod::Post, &url, &params);

		assert_eq!(base, "POST&https%3A%2F%2Fexample.com%2Ftoken&a%3D1%26b%3D2");
	}

	#[test]
	fn base_string_keeps_non_default_ports() {
		let url =
			Url::parse("https://example.com:8443/token").expect("URL should parse successfully.");
		let base = signature_base_string(HttpMethod::Post, &url, &BTreeMap::new());

		assert!(base.starts_with("POST&https%3A%2F%2Fexample.com%3A8443%2Ftoken&"));
	}

	#[test]
	fn header_lists_sorted_quoted_parameters() {
		let params = BTreeMap::from_iter([
			("oauth_token".to_owned(), "a b".to_owned()),
			("oauth_consumer_key".to_owned(), "key".to_owned()),
		]);

		assert_eq!(
			authorization_header(&params),
			"OAuth oauth_consumer_key=\"key\", oauth_token=\"a%20b\"",
		);
	}

	#[test]
	fn nonces_are_alphanumeric_and_unique() {
		let first = nonce();
		let second = nonce();

		assert_eq!(first.len(), NONCE_LEN);
		assert!(first.chars().all(|ch| ch.is_ascii_alphanumeric()));
		assert_ne!(first, second);
	}
}
