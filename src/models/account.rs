//! Account models.

use serde::Deserialize;

/// A register account, as returned by the list-accounts endpoint.
///
/// `category`, `account_group` and the other descriptive fields are only
/// populated by [`AccountsService::list`](crate::api::AccountsService::list);
/// accounts nested inside transaction lines carry just the number and name.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Account {
    /// Numeric account identifier within the chart of accounts.
    #[serde(default)]
    pub account_number: i64,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Account category, e.g. "asset" or "expense".
    #[serde(default)]
    pub category: String,
    /// Group the account belongs to, if any.
    #[serde(default)]
    pub account_group: Option<AccountGroup>,
    /// Whether the account is active.
    #[serde(default)]
    pub is_enabled: bool,
    /// Account type as reported by the API.
    #[serde(default, rename = "type")]
    pub account_type: String,
    /// Activity classification.
    #[serde(default)]
    pub activity: String,
}

/// A named grouping of accounts.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AccountGroup {
    /// Group identifier.
    #[serde(default)]
    pub id: i64,
    /// Group display name.
    #[serde(default)]
    pub name: String,
    /// Ordering of the group within the chart of accounts.
    #[serde(default)]
    pub seq: i64,
}
