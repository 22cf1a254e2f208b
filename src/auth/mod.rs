//! Authentication: key loading and the bearer-token handshake.

pub mod key;
mod token;

pub use key::{private_key_from_der, private_key_from_file};
pub use token::TokenProvider;
