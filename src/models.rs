//! Data models for the docker config.json document

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::auth::{decode_auth, encode_auth};

/// Credentials for a single registry.
///
/// Empty fields are left out of the serialized object entirely.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegistryEntry {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    username: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    password: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    email: String,
    /// Base64-encoded "username:password"
    #[serde(default, skip_serializing_if = "String::is_empty")]
    auth: String,
}

impl RegistryEntry {
    /// Create an entry, deriving the auth token from username and password.
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        let username = username.into();
        let password = password.into();
        let auth = encode_auth(&username, &password);
        Self { username, password, email: email.into(), auth }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn auth(&self) -> &str {
        &self.auth
    }

    /// Decode the auth token back into `(username, password)`.
    pub fn credentials(&self) -> Option<(String, String)> {
        decode_auth(&self.auth)
    }
}

/// Root of a docker config.json file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConfigDocument {
    /// Registry server address to credentials
    #[serde(default)]
    auths: BTreeMap<String, RegistryEntry>,
    /// Extra headers sent with every registry request
    #[serde(
        rename = "HttpHeaders",
        alias = "httpHeaders",
        default,
        skip_serializing_if = "HashMap::is_empty"
    )]
    http_headers: HashMap<String, String>,
}

impl ConfigDocument {
    /// Document holding credentials for exactly one server.
    pub fn single(server: impl Into<String>, entry: RegistryEntry) -> Self {
        Self::default().with_entry(server, entry)
    }

    /// Add (or replace) the entry for `server`.
    pub fn with_entry(mut self, server: impl Into<String>, entry: RegistryEntry) -> Self {
        self.auths.insert(server.into(), entry);
        self
    }

    pub fn with_http_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.http_headers = headers;
        self
    }

    pub fn auths(&self) -> &BTreeMap<String, RegistryEntry> {
        &self.auths
    }

    pub fn entry(&self, server: &str) -> Option<&RegistryEntry> {
        self.auths.get(server)
    }

    pub fn http_headers(&self) -> &HashMap<String, String> {
        &self.http_headers
    }
}
