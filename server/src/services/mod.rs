//! Service layer: token codec, credential hashing, user store, and the
//! account operations that compose them.

pub mod account;
pub mod password;
pub mod token;
pub mod user;
