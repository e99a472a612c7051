//! Bearer token verification.
//!
//! Tokens are issued by the external identity provider; this service only
//! checks them and exposes the caller's claims to handlers.

pub mod extractor;
pub mod jwt;
pub mod middleware;
