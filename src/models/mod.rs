//! Data models for the Aplos API.
//!
//! All models are immutable value objects decoded from responses:
//!
//! - [`primitives`] - the [`Date`] and [`Timestamp`] wire codecs
//! - [`account`] - accounts and account groups
//! - [`transaction`] - transactions, lines, and funds

pub mod account;
pub mod primitives;
pub mod transaction;

pub use account::{Account, AccountGroup};
pub use primitives::{Date, Timestamp};
pub use transaction::{Fund, Transaction, TransactionLine};
