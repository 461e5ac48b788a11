//! Library-level tests for building docker config documents.

use dockercfg::auth::{decode_auth, encode_auth};
use dockercfg::{build, build_document, ConfigDocument, RegistryEntry};
use serde_json::Value;

const CASES: &[(&str, &str, &str, &str)] = &[
    ("alice", "s3cr3t", "a@b.com", "registry.example.com"),
    ("robot$ci", "p@ss:w0rd", "not-an-email", "localhost:5000"),
    ("ünï", "çødé", "ü@ñ", "https://index.docker.io/v1/"),
];

#[test]
fn test_build_fields_match_inputs() {
    for &(u, p, e, s) in CASES {
        let value: Value = serde_json::from_slice(&build(u, p, e, s).unwrap()).unwrap();
        let entry = &value["auths"][s];
        assert_eq!(entry["username"], u);
        assert_eq!(entry["password"], p);
        assert_eq!(entry["email"], e);
        assert_eq!(entry["auth"], encode_auth(u, p).as_str());
    }
}

#[test]
fn test_auth_decodes_to_credentials() {
    for &(u, p, e, s) in CASES {
        let value: Value = serde_json::from_slice(&build(u, p, e, s).unwrap()).unwrap();
        let auth = value["auths"][s]["auth"].as_str().unwrap();
        assert_eq!(decode_auth(auth), Some((u.to_string(), p.to_string())));
    }
}

#[test]
fn test_output_reads_back_as_document() {
    let bytes = build("u", "p", "e", "srv").unwrap();
    let parsed: ConfigDocument = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(parsed, build_document("u", "p", "e", "srv"));
    assert_eq!(parsed.entry("srv"), Some(&RegistryEntry::new("u", "p", "e")));
}

#[test]
fn test_empty_username_has_no_username_key() {
    let value: Value = serde_json::from_slice(&build("", "pw", "e@x.com", "srv").unwrap()).unwrap();
    let entry = value["auths"]["srv"].as_object().unwrap();
    assert!(!entry.contains_key("username"));
    assert!(entry.contains_key("auth"));
}
