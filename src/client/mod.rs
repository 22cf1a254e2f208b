//! The authenticated Aplos client and its HTTP plumbing.

mod config;

pub use config::{ClientConfig, DEFAULT_BASE_URL};

use std::sync::Arc;

use rsa::RsaPrivateKey;
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::{AccountsService, TransactionsService};
use crate::auth::TokenProvider;
use crate::{Error, Result};

/// An authenticated client for the Aplos API.
///
/// Constructing a client performs the token handshake eagerly, so a
/// bad client ID or key fails construction rather than the first data
/// call. After that, each operation refreshes the token only when the
/// held one has expired.
///
/// Cloning is cheap; clones share the HTTP connection pool and the
/// cached token.
///
/// # Example
///
/// ```no_run
/// use aplos_client::{auth, AplosClient};
///
/// # async fn example() -> aplos_client::Result<()> {
/// let key = auth::private_key_from_file("aplos-key.b64")?;
/// let client = AplosClient::new("client-id", key).await?;
///
/// for account in client.accounts().list(None).await? {
///     println!("{} {}", account.account_number, account.name);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct AplosClient {
    inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    http: reqwest::Client,
    tokens: TokenProvider,
    config: ClientConfig,
}

/// The outer JSON wrapper present on every response.
#[derive(Deserialize)]
struct Envelope<T> {
    #[serde(default)]
    #[allow(dead_code)]
    version: String,
    #[serde(default)]
    #[allow(dead_code)]
    status: i64,
    data: T,
}

impl AplosClient {
    /// Create a client for the production API.
    ///
    /// Fails with [`Error::Auth`] if the initial handshake fails; no
    /// partially-usable client is ever handed back.
    pub async fn new(client_id: impl Into<String>, key: RsaPrivateKey) -> Result<Self> {
        Self::with_config(client_id, key, ClientConfig::default()).await
    }

    /// Create a client with custom configuration.
    pub async fn with_config(
        client_id: impl Into<String>,
        key: RsaPrivateKey,
        config: ClientConfig,
    ) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        let tokens = TokenProvider::new(client_id.into(), key, http.clone(), config.base_url.clone());
        tokens.get_token().await.map_err(Error::auth)?;

        Ok(Self {
            inner: Arc::new(ClientInner {
                http,
                tokens,
                config,
            }),
        })
    }

    /// Get the accounts service.
    pub fn accounts(&self) -> AccountsService {
        AccountsService::new(self.inner.clone())
    }

    /// Get the transactions service.
    pub fn transactions(&self) -> TransactionsService {
        TransactionsService::new(self.inner.clone())
    }
}

impl ClientInner {
    /// Make an authenticated GET request.
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.request(path, None::<&()>).await
    }

    /// Make an authenticated GET request with query parameters.
    pub(crate) async fn get_with_query<T: DeserializeOwned, Q: Serialize>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<T> {
        self.request(path, Some(query)).await
    }

    async fn request<T: DeserializeOwned, Q: Serialize>(
        &self,
        path: &str,
        query: Option<&Q>,
    ) -> Result<T> {
        // Check-then-refresh happens before every request; a token
        // known to be expired is never sent.
        let token = self.tokens.get_token().await.map_err(Error::auth)?;

        let url = format!("{}{}", self.config.base_url, path);
        debug!(%url, "GET");

        let mut request = self.http.get(&url).bearer_auth(token.expose_secret());
        if let Some(query) = query {
            request = request.query(query);
        }

        let response = request.send().await.map_err(Error::transport)?;
        let body = response.text().await.map_err(Error::transport)?;
        let envelope: Envelope<T> = serde_json::from_str(&body)?;
        Ok(envelope.data)
    }
}

impl std::fmt::Debug for AplosClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AplosClient")
            .field("config", &self.inner.config)
            .finish()
    }
}
