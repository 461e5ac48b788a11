//! dockercfg - Library for generating docker registry auth configs
//!
//! This library provides functionality to:
//! - Encode and decode registry auth tokens (base64 "username:password")
//! - Model the docker `config.json` document with omit-if-empty fields
//! - Build and serialize a single-registry config document

pub mod auth;
pub mod builder;
pub mod cli;
pub mod error;
pub mod logging;
pub mod models;

pub use builder::{build, build_document};
pub use error::{Error, Result};
pub use models::{ConfigDocument, RegistryEntry};
