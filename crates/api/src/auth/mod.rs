//! Authentication primitives: JWT access tokens, opaque refresh tokens,
//! and Argon2 password hashing.

pub mod jwt;
pub mod password;
