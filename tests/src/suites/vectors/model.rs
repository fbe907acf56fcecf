//! Pure data model for the stream cipher vector files.

use serde::Deserialize;

use super::error::{Result, VectorError};

/// One vector file: a single algorithm, grouped by test type
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VectorFile {
    pub algorithm: String,
    #[serde(default)]
    pub source: Option<String>,
    pub test_groups: Vec<TestGroup>,
}

/// Tests sharing one test type (`encrypt` or `keystream`)
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestGroup {
    #[serde(rename = "tgId")]
    pub group_id: u64,
    pub test_type: String,
    pub tests: Vec<TestCase>,
}

/// Leaf-level test case; byte fields are hex
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCase {
    #[serde(rename = "tcId")]
    pub test_id: u64,
    #[serde(default)]
    pub comment: Option<String>,
    pub key: String,
    #[serde(default)]
    pub nonce: Option<String>,
    #[serde(default)]
    pub counter: Option<u64>,
    /// Keystream bytes to skip before the test starts
    #[serde(default)]
    pub offset: Option<usize>,
    #[serde(default)]
    pub pt: Option<String>,
    #[serde(default)]
    pub ct: Option<String>,
    #[serde(default)]
    pub keystream: Option<String>,
    #[serde(default = "default_expected_result")]
    pub expected_result: String, // valid / invalid
}

fn default_expected_result() -> String {
    "valid".into()
}

impl TestCase {
    /// Whether construction from these inputs must be rejected
    pub fn expects_failure(&self) -> bool {
        self.expected_result == "invalid"
    }

    pub fn key_bytes(&self) -> Result<Vec<u8>> {
        Ok(hex::decode(&self.key)?)
    }

    pub fn nonce_bytes(&self) -> Result<Vec<u8>> {
        decode_field(&self.nonce, "nonce")
    }

    pub fn pt_bytes(&self) -> Result<Vec<u8>> {
        decode_field(&self.pt, "pt")
    }

    pub fn ct_bytes(&self) -> Result<Vec<u8>> {
        decode_field(&self.ct, "ct")
    }

    pub fn keystream_bytes(&self) -> Result<Vec<u8>> {
        decode_field(&self.keystream, "keystream")
    }
}

fn decode_field(field: &Option<String>, name: &'static str) -> Result<Vec<u8>> {
    let value = field.as_deref().ok_or(VectorError::MissingField(name))?;
    Ok(hex::decode(value)?)
}
