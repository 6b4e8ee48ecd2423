//! JWT helpers for tests

use std::time::{Duration, SystemTime};

use tombola::auth::jwt::mint_access_token;
use tombola::state::security_config::SecurityConfig;

/// Full Authorization header value for `user_id`, including the "Bearer " prefix.
pub fn bearer_header(user_id: i64, sec: &SecurityConfig) -> String {
    let token = mint_access_token(user_id, SystemTime::now(), sec).expect("mint token");
    format!("Bearer {token}")
}

/// A token minted two hours ago, long past its TTL.
pub fn expired_bearer_header(user_id: i64, sec: &SecurityConfig) -> String {
    let past = SystemTime::now()
        .checked_sub(Duration::from_secs(7200))
        .unwrap();
    let token = mint_access_token(user_id, past, sec).expect("mint expired token");
    format!("Bearer {token}")
}
