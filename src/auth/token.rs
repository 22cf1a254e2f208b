//! The Aplos authentication handshake and bearer-token cache.
//!
//! Aplos never takes credentials over the wire. Instead the server
//! hands out an access token pre-encrypted to the holder of the API
//! key: authenticating means downloading that blob and proving key
//! possession by decrypting it locally. See
//! <https://www.aplos.com/api/authentication>.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use chrono::{DateTime, Utc};
use rsa::{Pkcs1v15Encrypt, RsaPrivateKey};
use secrecy::SecretString;
use serde::Deserialize;
use tokio::sync::Mutex;
use tracing::debug;

use crate::models::Timestamp;
use crate::{Error, Result};

/// A decrypted bearer credential with its expiry.
///
/// Replaced wholesale when it expires; never mutated in place.
struct BearerToken {
    access_token: SecretString,
    expires_at: DateTime<Utc>,
}

impl BearerToken {
    fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }
}

/// Performs the token handshake and caches the result until expiry.
///
/// The held token is the one piece of shared mutable state in the
/// client. The whole check-then-refresh sequence runs under a single
/// async mutex, so concurrent callers never fire duplicate refreshes
/// or observe a half-updated token.
pub struct TokenProvider {
    client_id: String,
    key: RsaPrivateKey,
    http: reqwest::Client,
    base_url: String,
    token: Mutex<Option<BearerToken>>,
}

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

#[derive(Deserialize)]
struct AuthData {
    expires: Timestamp,
    token: String,
}

impl TokenProvider {
    pub(crate) fn new(
        client_id: String,
        key: RsaPrivateKey,
        http: reqwest::Client,
        base_url: String,
    ) -> Self {
        Self {
            client_id,
            key,
            http,
            base_url,
            token: Mutex::new(None),
        }
    }

    /// Return a bearer token that is valid right now.
    ///
    /// Reuses the held token while `now < expiry`; otherwise performs
    /// one handshake and replaces it. Called before every
    /// authenticated request, so an expired token is never sent.
    pub async fn get_token(&self) -> Result<SecretString> {
        let mut held = self.token.lock().await;

        if let Some(token) = held.as_ref() {
            if token.is_valid_at(Utc::now()) {
                return Ok(token.access_token.clone());
            }
            debug!("held bearer token expired, refreshing");
        }

        let fresh = self.fetch_token().await?;
        let access_token = fresh.access_token.clone();
        *held = Some(fresh);
        Ok(access_token)
    }

    /// Perform the handshake: download the encrypted token for our
    /// client ID and decrypt it with the private key.
    async fn fetch_token(&self) -> Result<BearerToken> {
        let url = format!("{}/auth/{}", self.base_url, self.client_id);
        debug!(%url, "fetching encrypted bearer token");

        let response = self.http.get(&url).send().await.map_err(Error::transport)?;
        let body = response.text().await.map_err(Error::transport)?;
        let envelope: Envelope<AuthData> = serde_json::from_str(&body)?;

        let ciphertext = BASE64
            .decode(&envelope.data.token)
            .map_err(|e| Error::Decode(format!("encrypted token is not valid base64: {e}")))?;
        let plaintext = self.key.decrypt(Pkcs1v15Encrypt, &ciphertext)?;
        // The decrypted bytes are the access token, verbatim.
        let access_token = String::from_utf8(plaintext)
            .map_err(|e| Error::Decode(format!("decrypted token is not UTF-8: {e}")))?;

        Ok(BearerToken {
            access_token: SecretString::from(access_token),
            expires_at: envelope.data.expires.0.with_timezone(&Utc),
        })
    }
}

impl std::fmt::Debug for TokenProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenProvider")
            .field("client_id", &self.client_id)
            .field("base_url", &self.base_url)
            .field("token", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use rsa::RsaPublicKey;
    use secrecy::ExposeSecret;
    use std::sync::OnceLock;

    fn test_key() -> &'static RsaPrivateKey {
        static KEY: OnceLock<RsaPrivateKey> = OnceLock::new();
        KEY.get_or_init(|| {
            RsaPrivateKey::new(&mut rand::thread_rng(), 2048).expect("key generation")
        })
    }

    fn encrypt_token(key: &RsaPrivateKey, token: &str) -> String {
        let ciphertext = RsaPublicKey::from(key)
            .encrypt(&mut rand::thread_rng(), Pkcs1v15Encrypt, token.as_bytes())
            .unwrap();
        BASE64.encode(ciphertext)
    }

    fn auth_body(key: &RsaPrivateKey, token: &str) -> String {
        serde_json::json!({
            "version": "v1",
            "status": 200,
            "data": {
                "expires": "2099-01-01T00:00:00.000+0000",
                "token": encrypt_token(key, token),
            }
        })
        .to_string()
    }

    fn provider_for(server: &mockito::Server) -> TokenProvider {
        TokenProvider::new(
            "client-1".into(),
            test_key().clone(),
            reqwest::Client::new(),
            server.url(),
        )
    }

    async fn seed_token(provider: &TokenProvider, token: &str, expires_at: DateTime<Utc>) {
        *provider.token.lock().await = Some(BearerToken {
            access_token: SecretString::from(token.to_string()),
            expires_at,
        });
    }

    #[tokio::test]
    async fn handshake_decrypts_token() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/auth/client-1")
            .with_body(auth_body(test_key(), "decrypted-token"))
            .create_async()
            .await;

        let provider = provider_for(&server);
        let token = provider.get_token().await.unwrap();

        assert_eq!(token.expose_secret(), "decrypted-token");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn valid_token_is_reused_without_network() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/auth/client-1")
            .expect(0)
            .create_async()
            .await;

        let provider = provider_for(&server);
        seed_token(&provider, "held-token", Utc::now() + Duration::hours(1)).await;

        let token = provider.get_token().await.unwrap();
        assert_eq!(token.expose_secret(), "held-token");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn expired_token_triggers_exactly_one_refresh() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/auth/client-1")
            .with_body(auth_body(test_key(), "fresh-token"))
            .expect(1)
            .create_async()
            .await;

        let provider = provider_for(&server);
        seed_token(&provider, "stale-token", Utc::now() - Duration::seconds(1)).await;

        let token = provider.get_token().await.unwrap();
        assert_eq!(token.expose_secret(), "fresh-token");

        // The refreshed token is now held and reused.
        let again = provider.get_token().await.unwrap();
        assert_eq!(again.expose_secret(), "fresh-token");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn wrong_key_is_crypto_error() {
        let other_key = RsaPrivateKey::new(&mut rand::thread_rng(), 2048).unwrap();
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/auth/client-1")
            .with_body(auth_body(&other_key, "unreachable"))
            .create_async()
            .await;

        let err = provider_for(&server).get_token().await.unwrap_err();
        assert!(matches!(err, Error::Crypto(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn bad_base64_token_is_decode_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/auth/client-1")
            .with_body(
                serde_json::json!({
                    "version": "v1",
                    "status": 200,
                    "data": {"expires": "2099-01-01T00:00:00.000+0000", "token": "%%%"}
                })
                .to_string(),
            )
            .create_async()
            .await;

        let err = provider_for(&server).get_token().await.unwrap_err();
        assert!(err.is_decode_error(), "got {err:?}");
    }

    #[tokio::test]
    async fn malformed_envelope_is_decode_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/auth/client-1")
            .with_body("not json")
            .create_async()
            .await;

        let err = provider_for(&server).get_token().await.unwrap_err();
        assert!(err.is_decode_error(), "got {err:?}");
    }

    #[test]
    fn debug_redacts_token() {
        let provider = TokenProvider::new(
            "client-1".into(),
            test_key().clone(),
            reqwest::Client::new(),
            "https://example.invalid".into(),
        );
        let debug_str = format!("{provider:?}");
        assert!(debug_str.contains("REDACTED"));
    }
}
