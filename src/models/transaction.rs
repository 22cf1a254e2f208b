//! Transaction and fund models.

use serde::Deserialize;

use super::{Account, Date, Timestamp};

/// A single transaction recorded in a register.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Transaction {
    /// Transaction identifier.
    #[serde(default)]
    pub id: i64,
    /// Free-form memo text.
    #[serde(default)]
    pub memo: String,
    /// Posting date.
    #[serde(default)]
    pub date: Date,
    /// User-facing transaction number.
    #[serde(default)]
    pub id_number: i64,
    /// When the transaction was entered.
    #[serde(default)]
    pub created: Timestamp,
    /// Total transaction amount.
    #[serde(default)]
    pub amount: f64,
    /// Whether the transaction falls in a closed accounting period.
    #[serde(default)]
    pub in_closed_period: bool,
    /// Journal lines. Only populated by
    /// [`TransactionsService::get`](crate::api::TransactionsService::get);
    /// list responses leave this empty.
    #[serde(default)]
    pub lines: Vec<TransactionLine>,
}

/// One line in a larger transaction, like a journal entry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TransactionLine {
    /// Line identifier.
    #[serde(default)]
    pub id: i64,
    /// Signed line amount.
    #[serde(default)]
    pub amount: f64,
    /// Account the line posts to.
    pub account: Account,
    /// Fund the line posts to.
    pub fund: Fund,
}

/// A fund, the top-level bucket Aplos tracks balances under.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Fund {
    /// Fund identifier.
    #[serde(default)]
    pub id: i64,
    /// Fund display name.
    #[serde(default)]
    pub name: String,
}
