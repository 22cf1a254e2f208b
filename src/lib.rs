//! # aplos-client
//!
//! A Rust client for the [Aplos](https://www.aplos.com/api) nonprofit
//! accounting REST API.
//!
//! The crate covers the read-only surface of the API: listing accounts,
//! listing transactions, and fetching a single transaction with its
//! journal lines. Authentication uses the Aplos handshake, where the
//! server hands out an access token encrypted to your API key and the
//! client proves key possession by decrypting it locally.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use aplos_client::{auth, AplosClient};
//!
//! #[tokio::main]
//! async fn main() -> aplos_client::Result<()> {
//!     // The key file is the base64 PKCS8 blob downloaded from the
//!     // Aplos UI when creating an API key.
//!     let key = auth::private_key_from_file("aplos-key.b64")?;
//!
//!     // Construction performs the token handshake eagerly; bad
//!     // credentials fail here, not on the first data call.
//!     let client = AplosClient::new("client-id", key).await?;
//!
//!     for account in client.accounts().list(None).await? {
//!         println!("{:>6} {}", account.account_number, account.name);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! Tokens are cached and reused until expiry; each request refreshes
//! only when needed. The client performs no retries — a failed request
//! surfaces immediately and retry policy belongs to the caller.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod auth;
pub mod client;
pub mod error;
pub mod models;

pub use client::{AplosClient, ClientConfig, DEFAULT_BASE_URL};
pub use error::{Error, Result};
pub use models::{Account, AccountGroup, Date, Fund, Timestamp, Transaction, TransactionLine};

/// Prelude module for convenient imports.
///
/// ```rust
/// use aplos_client::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{AccountsQuery, AccountsService, TransactionsQuery, TransactionsService};
    pub use crate::auth::{private_key_from_der, private_key_from_file};
    pub use crate::client::{AplosClient, ClientConfig};
    pub use crate::error::{Error, Result};
    pub use crate::models::{
        Account, AccountGroup, Date, Fund, Timestamp, Transaction, TransactionLine,
    };
}
