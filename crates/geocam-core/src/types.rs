// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Invocation and reply types carried over the media-scan channel.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Operations the media-scan channel understands.
///
/// Incoming names are matched once, in [`Method::from_name`]; everything
/// downstream dispatches on this enum so a new operation cannot be added
/// without every `match` being updated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// Ask the OS media index to rescan a single file path.
    ScanFile,
    /// Resolve the public "Pictures" directory.
    GetPicturesDirectory,
}

impl Method {
    pub const ALL: [Method; 2] = [Method::ScanFile, Method::GetPicturesDirectory];

    /// Wire name used by the application layer.
    pub fn name(self) -> &'static str {
        match self {
            Method::ScanFile => "scanFile",
            Method::GetPicturesDirectory => "getPicturesDirectory",
        }
    }

    /// Look up a method by wire name. `None` means "not implemented".
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.name() == name)
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One invocation received on the channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodCall {
    /// Operation name exactly as the application sent it.
    pub method: String,
    /// Named arguments. `Null` when the caller sent none.
    #[serde(rename = "args", default)]
    pub arguments: Value,
}

impl MethodCall {
    pub fn new(method: impl Into<String>, arguments: Value) -> Self {
        Self {
            method: method.into(),
            arguments,
        }
    }

    /// A call with no arguments.
    pub fn bare(method: impl Into<String>) -> Self {
        Self::new(method, Value::Null)
    }

    /// The recognised operation, if any.
    pub fn parsed_method(&self) -> Option<Method> {
        Method::from_name(&self.method)
    }

    /// Named argument, only if present and a string.
    pub fn argument_str(&self, name: &str) -> Option<&str> {
        self.arguments.get(name).and_then(Value::as_str)
    }
}

/// The single response to a [`MethodCall`].
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// Call succeeded. `None` is the empty payload.
    Success(Option<Value>),
    /// Call failed with a short code and a human-readable message.
    Error {
        code: String,
        message: String,
        details: Option<Value>,
    },
    /// The method name was not recognised.
    NotImplemented,
}

impl Reply {
    pub fn success(value: impl Into<Value>) -> Self {
        Reply::Success(Some(value.into()))
    }

    pub fn empty() -> Self {
        Reply::Success(None)
    }

    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Reply::Error {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Reply::Success(_))
    }

    /// Error code, for error replies.
    pub fn error_code(&self) -> Option<&str> {
        match self {
            Reply::Error { code, .. } => Some(code.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn method_names_resolve_both_ways() {
        for method in Method::ALL {
            assert_eq!(Method::from_name(method.name()), Some(method));
        }
        assert_eq!(Method::from_name("scanfile"), None);
        assert_eq!(Method::from_name(""), None);
    }

    #[test]
    fn string_argument_is_returned() {
        let call = MethodCall::new("scanFile", json!({ "path": "/sdcard/DCIM/a.jpg" }));
        assert_eq!(call.argument_str("path"), Some("/sdcard/DCIM/a.jpg"));
        assert_eq!(call.parsed_method(), Some(Method::ScanFile));
    }

    #[test]
    fn non_string_or_missing_argument_is_none() {
        assert_eq!(MethodCall::bare("scanFile").argument_str("path"), None);
        assert_eq!(
            MethodCall::new("scanFile", json!({ "path": null })).argument_str("path"),
            None
        );
        assert_eq!(
            MethodCall::new("scanFile", json!({ "path": 42 })).argument_str("path"),
            None
        );
        assert_eq!(
            MethodCall::new("scanFile", json!(["/sdcard/a.jpg"])).argument_str("path"),
            None
        );
    }

    #[test]
    fn reply_helpers() {
        assert!(Reply::empty().is_success());
        assert_eq!(Reply::error("INVALID_PATH", "x").error_code(), Some("INVALID_PATH"));
        assert_eq!(Reply::NotImplemented.error_code(), None);
    }
}
