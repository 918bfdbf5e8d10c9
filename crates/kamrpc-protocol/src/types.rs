//! Request and response envelopes for the JSON-RPC protocol.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use serde_json::value::RawValue;

use crate::JSONRPC_VERSION;

/// Request envelope posted to the server.
///
/// Field order matches the wire layout:
/// `{"jsonrpc":"2.0","method":..,"params":[..],"id":..}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    /// Protocol version (always "2.0").
    pub jsonrpc: String,
    /// Remote method name.
    pub method: String,
    /// Positional parameters.
    pub params: Vec<Value>,
    /// Request identifier for correlation.
    pub id: u64,
}

impl Request {
    /// Creates a request envelope, normalizing `params` into positional form.
    pub fn new(id: u64, method: impl Into<String>, params: impl Into<Params>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            method: method.into(),
            params: params.into().into_positional(),
            id,
        }
    }
}

/// Call parameters as accepted by the generic call entry point.
///
/// Kamailio RPC methods take positional, variadic arguments. A list of
/// strings becomes one positional parameter per element; anything else is
/// sent as the sole parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum Params {
    /// One structured argument.
    Single(Value),
    /// Many scalar arguments, flattened.
    List(Vec<String>),
}

impl Params {
    /// Resolves the parameters into the flat sequence sent on the wire.
    pub fn into_positional(self) -> Vec<Value> {
        match self {
            Self::Single(value) => vec![value],
            Self::List(items) => items.into_iter().map(Value::String).collect(),
        }
    }

    /// Returns an empty parameter list.
    pub fn none() -> Self {
        Self::List(Vec::new())
    }
}

impl From<Vec<String>> for Params {
    fn from(items: Vec<String>) -> Self {
        Self::List(items)
    }
}

impl From<&[String]> for Params {
    fn from(items: &[String]) -> Self {
        Self::List(items.to_vec())
    }
}

impl From<&[&str]> for Params {
    fn from(items: &[&str]) -> Self {
        Self::List(items.iter().map(|s| s.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Params {
    fn from(items: [&str; N]) -> Self {
        Self::List(items.iter().map(|s| s.to_string()).collect())
    }
}

impl From<&str> for Params {
    fn from(value: &str) -> Self {
        Self::Single(Value::String(value.to_string()))
    }
}

impl From<String> for Params {
    fn from(value: String) -> Self {
        Self::Single(Value::String(value))
    }
}

impl From<Value> for Params {
    fn from(value: Value) -> Self {
        Self::Single(value)
    }
}

/// Response envelope returned by the server.
///
/// A well-behaved server fills exactly one of `result` and `error`, but
/// both may be present or absent. Missing or `null` `jsonrpc` and `id`
/// members decode to their defaults, so `{"error":{..},"id":null}` still
/// carries the server's error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    /// Protocol version.
    #[serde(default, deserialize_with = "null_as_default")]
    pub jsonrpc: String,
    /// Echoed request identifier.
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: u64,
    /// Undecoded result payload.
    #[serde(default, skip_serializing_if = "RawResult::is_absent")]
    pub result: RawResult,
    /// Error reported by the server, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcErrorObject>,
}

impl Response {
    /// Creates a success response.
    pub fn success(id: u64, result: RawResult) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            result,
            error: None,
        }
    }

    /// Creates an error response.
    pub fn failure(id: u64, code: i64, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            result: RawResult::null(),
            error: Some(RpcErrorObject::new(code, message)),
        }
    }

    /// Checks if this envelope uses the supported protocol version.
    pub fn is_compatible(&self) -> bool {
        self.jsonrpc == JSONRPC_VERSION
    }
}

/// Error object carried by a failed response.
///
/// `{"code":-32000,"message":"Execution Error"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpcErrorObject {
    /// Numeric error code.
    #[serde(default, deserialize_with = "null_as_default")]
    pub code: i64,
    /// Human-readable message.
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
}

impl RpcErrorObject {
    /// Creates a new error object.
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for RpcErrorObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message, self.code)
    }
}

/// Reads an explicit `null` as the type's default value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Result payload kept as the exact JSON text the server sent.
///
/// An absent or `null` result reads as `null`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawResult(Option<Box<RawValue>>);

impl RawResult {
    const NULL: &'static str = "null";

    /// Returns a result holding `null`.
    pub fn null() -> Self {
        Self(None)
    }

    /// Wraps an already-parsed raw value.
    pub fn new(raw: Box<RawValue>) -> Self {
        Self(Some(raw))
    }

    /// Parses JSON text into a raw result, validating it.
    pub fn from_json(json: impl Into<String>) -> serde_json::Result<Self> {
        RawValue::from_string(json.into()).map(Self::new)
    }

    /// Returns the raw JSON text.
    pub fn as_str(&self) -> &str {
        self.0.as_deref().map_or(Self::NULL, RawValue::get)
    }

    /// Returns true if the payload is `null` or missing.
    pub fn is_null(&self) -> bool {
        self.as_str().trim() == Self::NULL
    }

    fn is_absent(&self) -> bool {
        self.0.is_none()
    }

    /// Decodes the payload into a concrete type.
    pub fn decode<T: DeserializeOwned>(&self) -> serde_json::Result<T> {
        serde_json::from_str(self.as_str())
    }

    /// Decodes the payload into a generic JSON value.
    pub fn to_value(&self) -> serde_json::Result<Value> {
        self.decode()
    }
}

impl PartialEq for RawResult {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl fmt::Display for RawResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
