use anyhow::{Context, Result};
use contracts::system::auth::TokenClaims;
use jsonwebtoken::{decode, DecodingKey, Validation};
use once_cell::sync::OnceCell;

static JWT_SECRET: OnceCell<String> = OnceCell::new();

/// Install the verification secret once at start-up
pub fn init_secret(secret: String) -> Result<()> {
    JWT_SECRET
        .set(secret)
        .map_err(|_| anyhow::anyhow!("JWT secret already initialized"))
}

fn secret() -> Result<&'static str> {
    JWT_SECRET
        .get()
        .map(String::as_str)
        .context("JWT secret has not been initialized")
}

/// Validate a bearer token with the installed secret and extract claims
pub fn validate_token(token: &str) -> Result<TokenClaims> {
    validate_token_with(token, secret()?)
}

/// Validate an HS256 token against `secret`; expiry is enforced.
pub fn validate_token_with(token: &str, secret: &str) -> Result<TokenClaims> {
    let token_data = decode::<TokenClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .context("Failed to decode JWT token")?;

    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use jsonwebtoken::{encode, EncodingKey, Header};

    fn token(secret: &str, exp_offset_secs: i64) -> String {
        let now = Utc::now().timestamp();
        let claims = TokenClaims {
            sub: "u1".into(),
            username: "ada".into(),
            name: Some("Ada Lovelace".into()),
            email: None,
            exp: (now + exp_offset_secs) as usize,
            iat: now as usize,
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn test_valid_token_yields_claims() {
        let claims = validate_token_with(&token("s3cret", 3600), "s3cret").unwrap();
        assert_eq!(claims.sub, "u1");
        assert_eq!(claims.username, "ada");
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        assert!(validate_token_with(&token("s3cret", 3600), "other").is_err());
    }

    #[test]
    fn test_expired_token_is_rejected() {
        assert!(validate_token_with(&token("s3cret", -3600), "s3cret").is_err());
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert!(validate_token_with("not-a-jwt", "s3cret").is_err());
    }
}
