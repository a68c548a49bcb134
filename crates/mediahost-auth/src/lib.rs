//! # mediahost-auth
//!
//! HS256 bearer credential verification. Tokens are issued by an external
//! collaborator; [`jwt::JwtEncoder`] exists for tests and tooling.

pub mod jwt;

pub use jwt::{Claims, JwtDecoder, JwtEncoder};
