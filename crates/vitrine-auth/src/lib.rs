//! # vitrine-auth
//!
//! Authentication primitives: HS256 JWT encoding/decoding and Argon2id
//! password hashing. Session state lives entirely in the signed token;
//! there is no server-side session store.

pub mod jwt;
pub mod password;

pub use jwt::claims::{Claims, TokenType};
pub use jwt::decoder::JwtDecoder;
pub use jwt::encoder::{JwtEncoder, TokenPair};
pub use password::hasher::PasswordHasher;
