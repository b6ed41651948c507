// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// JSON method codec.
//
// Calls travel as `{"method": ..., "args": ...}`. Replies travel as a JSON
// array whose length tells the kinds apart:
//
//   [result]                   success (`[null]` for the empty payload)
//   [code, message, details]   error
//   []                         not implemented

use serde::de::Error as _;
use serde_json::{Value, json};

use crate::error::Result;
use crate::types::{MethodCall, Reply};

/// Decode an incoming call envelope.
pub fn decode_method_call(bytes: &[u8]) -> Result<MethodCall> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Encode a call envelope (used by tests and host-side tooling).
pub fn encode_method_call(call: &MethodCall) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(call)?)
}

/// Encode a reply envelope.
pub fn encode_reply(reply: &Reply) -> Result<Vec<u8>> {
    let envelope = match reply {
        Reply::Success(value) => json!([value.clone().unwrap_or(Value::Null)]),
        Reply::Error {
            code,
            message,
            details,
        } => json!([code, message, details.clone().unwrap_or(Value::Null)]),
        Reply::NotImplemented => json!([]),
    };
    Ok(serde_json::to_vec(&envelope)?)
}

/// Decode a reply envelope.
pub fn decode_reply(bytes: &[u8]) -> Result<Reply> {
    let envelope: Vec<Value> = serde_json::from_slice(bytes)?;
    match envelope.as_slice() {
        [] => Ok(Reply::NotImplemented),
        [Value::Null] => Ok(Reply::Success(None)),
        [value] => Ok(Reply::Success(Some(value.clone()))),
        [Value::String(code), message, details] => Ok(Reply::Error {
            code: code.clone(),
            message: message.as_str().unwrap_or_default().to_owned(),
            details: match details {
                Value::Null => None,
                other => Some(other.clone()),
            },
        }),
        _ => Err(serde_json::Error::custom(format!(
            "reply envelope has unexpected shape ({} elements)",
            envelope.len()
        ))
        .into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BridgeError;

    #[test]
    fn call_without_args_decodes_to_null() {
        let call = decode_method_call(br#"{"method":"getPicturesDirectory"}"#).unwrap();
        assert_eq!(call.method, "getPicturesDirectory");
        assert_eq!(call.arguments, Value::Null);
    }

    #[test]
    fn call_with_args_decodes() {
        let call =
            decode_method_call(br#"{"method":"scanFile","args":{"path":"/x.jpg"}}"#).unwrap();
        assert_eq!(call.argument_str("path"), Some("/x.jpg"));
    }

    #[test]
    fn encoded_call_uses_args_key() {
        let bytes = encode_method_call(&MethodCall::new("scanFile", json!({"path": "/x"}))).unwrap();
        let value: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value, json!({"method": "scanFile", "args": {"path": "/x"}}));
    }

    #[test]
    fn malformed_call_is_codec_error() {
        let err = decode_method_call(b"not json").unwrap_err();
        assert!(matches!(err, BridgeError::Codec(_)));

        let err = decode_method_call(br#"{"args":{}}"#).unwrap_err();
        assert!(matches!(err, BridgeError::Codec(_)), "method is required");
    }

    #[test]
    fn reply_envelope_shapes() {
        let empty: Value = serde_json::from_slice(&encode_reply(&Reply::empty()).unwrap()).unwrap();
        assert_eq!(empty, json!([null]));

        let path: Value =
            serde_json::from_slice(&encode_reply(&Reply::success("/sdcard/Pictures")).unwrap())
                .unwrap();
        assert_eq!(path, json!(["/sdcard/Pictures"]));

        let error: Value = serde_json::from_slice(
            &encode_reply(&Reply::error("INVALID_PATH", "Path cannot be null")).unwrap(),
        )
        .unwrap();
        assert_eq!(error, json!(["INVALID_PATH", "Path cannot be null", null]));

        let missing: Value =
            serde_json::from_slice(&encode_reply(&Reply::NotImplemented).unwrap()).unwrap();
        assert_eq!(missing, json!([]));
    }

    #[test]
    fn reply_envelopes_decode() {
        assert_eq!(decode_reply(b"[]").unwrap(), Reply::NotImplemented);
        assert_eq!(decode_reply(b"[null]").unwrap(), Reply::empty());
        assert_eq!(decode_reply(br#"["/p"]"#).unwrap(), Reply::success("/p"));
        assert_eq!(
            decode_reply(br#"["E","msg",{"k":1}]"#).unwrap(),
            Reply::Error {
                code: "E".into(),
                message: "msg".into(),
                details: Some(json!({"k": 1})),
            }
        );
    }

    #[test]
    fn two_element_reply_is_rejected() {
        assert!(decode_reply(br#"["a","b"]"#).is_err());
        assert!(decode_reply(br#"{"a":1}"#).is_err());
    }
}
