// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Method channel: binds one handler to one channel name and guarantees a
// single reply per incoming call.

use std::sync::{Arc, OnceLock};

use geocam_core::codec;
use geocam_core::config::ChannelConfig;
use geocam_core::error::{BridgeError, Result};
use geocam_core::reply_errors::error_reply;
use geocam_core::{MethodCall, Reply};
use tokio::sync::oneshot;
use tracing::{debug, info, warn};

/// Something that answers method calls.
pub trait MethodCallHandler: Send + Sync {
    /// Produce the reply for `call`. Called once per call.
    fn on_method_call(&self, call: &MethodCall) -> Reply;
}

/// One-shot reply slot. `send` consumes it, so a call cannot be answered twice.
pub struct ReplySender {
    tx: oneshot::Sender<Reply>,
}

impl ReplySender {
    /// A sender and the receiver its reply will arrive on.
    pub fn pair() -> (Self, oneshot::Receiver<Reply>) {
        let (tx, rx) = oneshot::channel();
        (Self { tx }, rx)
    }

    pub fn send(self, reply: Reply) {
        if self.tx.send(reply).is_err() {
            debug!("reply dropped: caller stopped listening");
        }
    }
}

/// A named channel with its registered handler.
pub struct MethodChannel {
    name: String,
    handler: Arc<dyn MethodCallHandler>,
}

impl MethodChannel {
    /// Register `handler` as the sole handler for the configured channel.
    pub fn register(config: ChannelConfig, handler: impl MethodCallHandler + 'static) -> Result<Self> {
        config.validate()?;
        info!(channel = %config.channel_name, "method channel registered");
        Ok(Self {
            name: config.channel_name,
            handler: Arc::new(handler),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run the handler for `call` and answer through `reply`.
    pub fn dispatch(&self, call: &MethodCall, reply: ReplySender) {
        reply.send(self.handler.on_method_call(call));
    }

    /// Decode a call envelope, dispatch it and encode the reply envelope.
    ///
    /// Always yields exactly one envelope, including for undecodable input.
    pub fn handle_message(&self, message: &[u8]) -> Vec<u8> {
        let reply = match codec::decode_method_call(message) {
            Ok(call) => {
                let (tx, mut rx) = ReplySender::pair();
                self.dispatch(&call, tx);
                rx.try_recv().unwrap_or_else(|_| {
                    error_reply(&BridgeError::Bridge("handler produced no reply".into()))
                })
            }
            Err(e) => {
                warn!(channel = %self.name, error = %e, "undecodable method call");
                error_reply(&e)
            }
        };
        reply_bytes(&reply)
    }
}

/// Encode a reply, falling back to a fixed error envelope if encoding fails.
pub fn reply_bytes(reply: &Reply) -> Vec<u8> {
    codec::encode_reply(reply).unwrap_or_else(|e| {
        warn!(error = %e, "reply encoding failed");
        br#"["BRIDGE_ERROR","Reply could not be encoded",null]"#.to_vec()
    })
}

static GLOBAL: OnceLock<MethodChannel> = OnceLock::new();

/// Install `channel` as the process-wide channel the JNI entry points use.
///
/// Done once at start-up; a second registration is refused.
pub fn register_global(channel: MethodChannel) -> Result<&'static MethodChannel> {
    GLOBAL
        .set(channel)
        .map_err(|rejected| BridgeError::AlreadyRegistered(rejected.name))?;
    GLOBAL.get().ok_or(BridgeError::NotRegistered)
}

/// The process-wide channel, once registered.
pub fn global() -> Result<&'static MethodChannel> {
    GLOBAL.get().ok_or(BridgeError::NotRegistered)
}
