//! Transactions service.

use std::sync::Arc;

use serde::Serialize;

use crate::client::ClientInner;
use crate::models::{Date, Transaction};
use crate::Result;

/// Service for transaction lookup and listing.
///
/// # Example
///
/// ```no_run
/// use aplos_client::api::TransactionsQuery;
/// use aplos_client::Date;
///
/// # async fn example(client: aplos_client::AplosClient) -> aplos_client::Result<()> {
/// let query = TransactionsQuery {
///     account_number: Some(5000),
///     range_start: Some(Date::new(2020, 1, 1)),
///     range_end: Some(Date::new(2020, 1, 31)),
/// };
/// for txn in client.transactions().list(Some(query)).await? {
///     println!("{} {} {}", txn.date, txn.memo, txn.amount);
/// }
/// # Ok(())
/// # }
/// ```
pub struct TransactionsService {
    inner: Arc<ClientInner>,
}

/// Query parameters for listing transactions.
///
/// Dates are serialized in the `YYYY-MM-DD` form the API expects.
#[derive(Debug, Default, Clone, Serialize)]
pub struct TransactionsQuery {
    /// Restrict to transactions touching this account number.
    #[serde(rename = "f_accountnumber", skip_serializing_if = "Option::is_none")]
    pub account_number: Option<i64>,
    /// Earliest posting date, inclusive.
    #[serde(rename = "f_rangestart", skip_serializing_if = "Option::is_none")]
    pub range_start: Option<Date>,
    /// Latest posting date, inclusive.
    #[serde(rename = "f_rangeend", skip_serializing_if = "Option::is_none")]
    pub range_end: Option<Date>,
}

impl TransactionsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get a single transaction by id.
    ///
    /// This is the only operation that populates
    /// [`Transaction::lines`].
    pub async fn get(&self, id: i64) -> Result<Transaction> {
        #[derive(serde::Deserialize)]
        struct Response {
            transaction: Transaction,
        }

        let response: Response = self.inner.get(&format!("/transactions/{id}")).await?;
        Ok(response.transaction)
    }

    /// List transactions, optionally filtered by account and date range.
    pub async fn list(&self, query: Option<TransactionsQuery>) -> Result<Vec<Transaction>> {
        #[derive(serde::Deserialize)]
        struct Response {
            transactions: Vec<Transaction>,
        }

        let response: Response = match query {
            Some(query) => self.inner.get_with_query("/transactions", &query).await?,
            None => self.inner.get("/transactions").await?,
        };
        Ok(response.transactions)
    }
}
