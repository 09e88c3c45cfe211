//! Identity service — registration, login, and bearer-token resolution.
//!
//! Passwords are stored as salted Argon2id hashes. Access tokens are signed,
//! expiring HS256 JWTs whose `sub` claim is the user id; the auth middleware
//! resolves the token to a stored user on every protected request.

pub mod handlers;
pub mod middleware;
pub mod password;
pub mod token;
