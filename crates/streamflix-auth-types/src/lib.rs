//! Credential and token primitives shared by Streamflix services.
//!
//! Provides argon2 password hashing, HS256 access-token issuance and
//! verification, and the `Authorization: Bearer` extractor.

pub mod bearer;
pub mod password;
pub mod token;
