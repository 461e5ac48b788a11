//! Registry auth token encoding
//!
//! Docker clients store credentials as base64("username:password") in the
//! `auth` field of each registry entry.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Encode a username/password pair as a registry auth token.
///
/// Uses the standard base64 alphabet with padding.
pub fn encode_auth(username: &str, password: &str) -> String {
    STANDARD.encode(format!("{}:{}", username, password))
}

/// Decode a registry auth token back into `(username, password)`.
///
/// The token is split on the first `:`, so passwords may contain colons but
/// usernames may not. Returns `None` for invalid base64, non-UTF-8 content, or
/// a token without a separator.
pub fn decode_auth(token: &str) -> Option<(String, String)> {
    let decoded = STANDARD.decode(token).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (username, password) = decoded.split_once(':')?;
    Some((username.to_string(), password.to_string()))
}
