//! Fixture shapes used by identity contract test cases.
//!
//! These types describe what the test suite asserts about return values.
//! They carry no contract semantics of their own.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `err u1` in fixtures: the caller already owns an identity.
pub const ERR_DUPLICATE_IDENTITY: u64 = 1;
/// `err u2` in fixtures: no identity with the given id.
pub const ERR_IDENTITY_NOT_FOUND: u64 = 2;
/// `err u3` in fixtures: the caller does not own the identity.
pub const ERR_NOT_OWNER: u64 = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct IdentityRecord {
    pub id: u64,
    pub owner: String,
    pub created_at: u64,
    pub active: bool,
    pub metadata: String,
}

impl IdentityRecord {
    pub fn new(
        id: u64,
        owner: impl Into<String>,
        created_at: u64,
        metadata: impl Into<String>,
    ) -> Self {
        Self {
            id,
            owner: owner.into(),
            created_at,
            active: true,
            metadata: metadata.into(),
        }
    }

    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }

    /// Reads a record back from a mock's return value. `null` and other
    /// shapes yield `None`.
    pub fn from_value(value: &Value) -> Option<Self> {
        serde_json::from_value(value.clone()).ok()
    }
}

/// `{ "value": .. }` / `{ "error": .. }` response shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContractResponse {
    Value(Value),
    Error(u64),
}

impl ContractResponse {
    pub fn ok(value: impl Into<Value>) -> Self {
        Self::Value(value.into())
    }

    pub fn err(code: u64) -> Self {
        Self::Error(code)
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    pub fn error_code(&self) -> Option<u64> {
        match self {
            Self::Error(code) => Some(*code),
            Self::Value(_) => None,
        }
    }

    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }

    pub fn from_value(value: &Value) -> Option<Self> {
        serde_json::from_value(value.clone()).ok()
    }
}
