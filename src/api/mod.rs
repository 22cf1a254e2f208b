//! API service modules for the Aplos endpoints.
//!
//! Each service is a thin handle over the shared client internals and
//! covers one resource.

mod accounts;
mod transactions;

pub use accounts::{AccountsQuery, AccountsService};
pub use transactions::{TransactionsQuery, TransactionsService};
