use jsonwebtoken::Algorithm;

/// Configuration for JWT security settings
#[derive(Debug, Clone)]
pub struct SecurityConfig {
    /// Secret used to sign and verify access tokens
    pub jwt_secret: Vec<u8>,
    /// Signing algorithm (HS256)
    pub algorithm: Algorithm,
    /// Lifetime of minted access tokens, in seconds
    pub token_ttl_secs: i64,
}

impl SecurityConfig {
    pub const DEFAULT_TOKEN_TTL_SECS: i64 = 15 * 60;

    pub fn new(jwt_secret: impl Into<Vec<u8>>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            algorithm: Algorithm::HS256,
            token_ttl_secs: Self::DEFAULT_TOKEN_TTL_SECS,
        }
    }

    pub fn with_token_ttl(mut self, secs: i64) -> Self {
        self.token_ttl_secs = secs;
        self
    }

    /// A config with a random secret, so tokens from one test never verify in another.
    pub fn for_tests() -> Self {
        let secret: [u8; 32] = rand::random();
        Self::new(secret.to_vec())
    }
}
