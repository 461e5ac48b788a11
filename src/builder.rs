//! Build the docker config document and encode it as JSON

use tracing::debug;

use crate::error::Result;
use crate::models::{ConfigDocument, RegistryEntry};

/// Assemble a config document with a single auths entry keyed by `server`.
///
/// Inputs are treated as opaque strings. Empty values are not rejected here;
/// they are omitted from the serialized entry.
pub fn build_document(
    username: &str,
    password: &str,
    email: &str,
    server: &str,
) -> ConfigDocument {
    let entry = RegistryEntry::new(username, password, email);
    debug!(
        server,
        has_username = !username.is_empty(),
        has_password = !password.is_empty(),
        has_email = !email.is_empty(),
        "built registry entry"
    );
    ConfigDocument::single(server, entry)
}

/// Build the config document and serialize it to compact JSON bytes.
pub fn build(username: &str, password: &str, email: &str, server: &str) -> Result<Vec<u8>> {
    let document = build_document(username, password, email, server);
    let bytes = serde_json::to_vec(&document)?;
    debug!(bytes = bytes.len(), "serialized docker config");
    Ok(bytes)
}
