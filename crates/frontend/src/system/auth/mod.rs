//! Client side of the external identity provider.
//!
//! The provider's hosted sign-in page redirects back to the app with
//! `#access_token=<jwt>`; the token is kept in localStorage and verified
//! against `/api/system/auth/me`.

pub mod api;
pub mod context;
pub mod storage;

/// Hosted sign-in page of the identity provider
pub const SIGN_IN_PATH: &str = "/auth/sign-in";
