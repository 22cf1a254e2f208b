//! Accounts service.

use std::sync::Arc;

use serde::Serialize;

use crate::client::ClientInner;
use crate::models::Account;
use crate::Result;

/// Service for account listing.
///
/// # Example
///
/// ```no_run
/// use aplos_client::api::AccountsQuery;
///
/// # async fn example(client: aplos_client::AplosClient) -> aplos_client::Result<()> {
/// let query = AccountsQuery {
///     name: Some("Checking".into()),
/// };
/// for account in client.accounts().list(Some(query)).await? {
///     println!("{}: {}", account.account_number, account.name);
/// }
/// # Ok(())
/// # }
/// ```
pub struct AccountsService {
    inner: Arc<ClientInner>,
}

/// Query parameters for listing accounts.
#[derive(Debug, Default, Clone, Serialize)]
pub struct AccountsQuery {
    /// Filter by account name. Match semantics (substring vs. exact)
    /// are owned by the server.
    #[serde(rename = "f_name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl AccountsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List accounts, optionally filtered by name.
    pub async fn list(&self, query: Option<AccountsQuery>) -> Result<Vec<Account>> {
        #[derive(serde::Deserialize)]
        struct Response {
            accounts: Vec<Account>,
        }

        let response: Response = match query {
            Some(query) => self.inner.get_with_query("/accounts", &query).await?,
            None => self.inner.get("/accounts").await?,
        };
        Ok(response.accounts)
    }
}
