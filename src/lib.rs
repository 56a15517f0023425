//! Embeddable OAuth 1.0a login authenticator - run a provider's three-legged handshake inside an
//! identity-server host with pluggable sessions, transports, and host-facing error mapping.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod http;
pub mod obs;
pub mod protocol;
pub mod provider;
pub mod session;
#[cfg(all(any(test, feature = "test"), feature = "reqwest"))]
pub mod _preludet {
	//! Convenience re-exports and helpers for integration tests; enabled via `cfg(test)` or the
	//! `test` crate feature.

	pub use crate::_prelude::*;

	// self
	use crate::{
		auth::AuthenticatorId,
		config::AuthenticatorConfig,
		handlers::Authenticator,
		http::ReqwestHttpClient,
		provider::ProviderDescriptor,
		session::{MemorySession, SessionManager},
	};

	/// Authenticator type alias used by reqwest-backed integration tests.
	pub type ReqwestTestAuthenticator = Authenticator<ReqwestHttpClient>;

	/// Builds a reqwest HTTP client that accepts the self-signed certificates produced by
	/// `httpmock` during tests.
	pub fn test_reqwest_http_client() -> ReqwestHttpClient {
		let client = ReqwestClient::builder()
			.danger_accept_invalid_certs(true)
			.danger_accept_invalid_hostnames(true)
			.build()
			.expect("Failed to build insecure Reqwest client for tests.");

		ReqwestHttpClient::with_client(client)
	}

	/// Configuration fixture whose login-start redirect points at
	/// `https://idsvr.example.com/authn`.
	pub fn test_config(client_id: &str, client_secret: &str) -> AuthenticatorConfig {
		let authenticator_id = AuthenticatorId::new("oauth1-test")
			.expect("Authenticator identifier fixture should be valid.");
		let base = Url::parse("https://idsvr.example.com/authn")
			.expect("Authentication base URI fixture should parse successfully.");

		AuthenticatorConfig::new(authenticator_id, client_id, client_secret, base)
	}

	/// Constructs an [`Authenticator`] backed by an in-memory session and the reqwest transport
	/// used across integration tests.
	pub fn build_reqwest_test_authenticator(
		descriptor: ProviderDescriptor,
		config: AuthenticatorConfig,
	) -> (ReqwestTestAuthenticator, Arc<MemorySession>) {
		let session_backend = Arc::new(MemorySession::default());
		let session: Arc<dyn SessionManager> = session_backend.clone();
		let http_client = test_reqwest_http_client();
		let authenticator =
			Authenticator::with_http_client(config, descriptor, session, http_client);

		(authenticator, session_backend)
	}
}

mod _prelude {
	pub use std::{
		collections::{BTreeMap, HashMap},
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		str::FromStr,
		sync::Arc,
	};

	pub use parking_lot::RwLock;
	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(test)] use {httpmock as _, serde_json as _, tokio as _};
