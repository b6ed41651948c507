// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Mapping from bridge errors to the error replies the application sees.
//
// Codes are part of the channel contract: the Dart side switches on them.
// `INVALID_PATH` and its message must not change.

use serde_json::Value;

use crate::error::BridgeError;
use crate::types::Reply;

pub const INVALID_PATH: &str = "INVALID_PATH";
pub const INVALID_ARGUMENT: &str = "INVALID_ARGUMENT";
pub const MALFORMED_CALL: &str = "MALFORMED_CALL";
pub const BRIDGE_ERROR: &str = "BRIDGE_ERROR";
pub const UNAVAILABLE: &str = "UNAVAILABLE";

/// Convert a `BridgeError` into the error reply sent back over the channel.
pub fn error_reply(err: &BridgeError) -> Reply {
    match err {
        BridgeError::InvalidArgument { name } if name == "path" => {
            Reply::error(INVALID_PATH, "Path cannot be null")
        }
        BridgeError::InvalidArgument { name } => {
            Reply::error(INVALID_ARGUMENT, format!("{name} cannot be null"))
        }

        BridgeError::Codec(e) => Reply::Error {
            code: MALFORMED_CALL.into(),
            message: "Could not decode method call".into(),
            details: Some(Value::String(e.to_string())),
        },

        BridgeError::PlatformUnavailable => {
            Reply::error(UNAVAILABLE, "Not available on this platform")
        }

        BridgeError::Bridge(detail) => Reply::Error {
            code: BRIDGE_ERROR.into(),
            message: "Native call failed".into(),
            details: Some(Value::String(detail.clone())),
        },

        // Registration and I/O problems only reach a reply when the host
        // calls in before start-up finished.
        BridgeError::NotRegistered
        | BridgeError::AlreadyRegistered(_)
        | BridgeError::InvalidConfig(_)
        | BridgeError::Io(_) => Reply::Error {
            code: BRIDGE_ERROR.into(),
            message: "Media bridge is not ready".into(),
            details: Some(Value::String(err.to_string())),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_path_is_invalid_path() {
        let reply = error_reply(&BridgeError::invalid_argument("path"));
        assert_eq!(reply, Reply::error("INVALID_PATH", "Path cannot be null"));
    }

    #[test]
    fn other_argument_is_generic() {
        let reply = error_reply(&BridgeError::invalid_argument("mime"));
        assert_eq!(reply.error_code(), Some(INVALID_ARGUMENT));
    }

    #[test]
    fn native_failure_carries_detail() {
        let reply = error_reply(&BridgeError::Bridge("scanFile: java exception".into()));
        match reply {
            Reply::Error { code, details, .. } => {
                assert_eq!(code, BRIDGE_ERROR);
                assert_eq!(details, Some(Value::String("scanFile: java exception".into())));
            }
            other => panic!("expected error reply, got {other:?}"),
        }
    }

    #[test]
    fn unavailable_platform() {
        let reply = error_reply(&BridgeError::PlatformUnavailable);
        assert_eq!(reply.error_code(), Some(UNAVAILABLE));
    }

    #[test]
    fn malformed_call() {
        let err = serde_json::from_str::<Value>("{").unwrap_err();
        let reply = error_reply(&BridgeError::Codec(err));
        assert_eq!(reply.error_code(), Some(MALFORMED_CALL));
    }
}
