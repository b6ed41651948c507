// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Media-scan method handler: turns one `MethodCall` into one `Reply`.

use std::sync::Arc;

use geocam_core::error::BridgeError;
use geocam_core::reply_errors::error_reply;
use geocam_core::{Method, MethodCall, Reply};
use tracing::{debug, info, instrument, warn};

use crate::channel::MethodCallHandler;
use crate::traits::PlatformBridge;

/// Handler for the media-scan channel.
///
/// Stateless apart from the shared native backend, so one instance can serve
/// overlapping calls from any thread.
#[derive(Clone)]
pub struct MediaScanHandler {
    bridge: Arc<dyn PlatformBridge>,
}

impl MediaScanHandler {
    pub fn new(bridge: Arc<dyn PlatformBridge>) -> Self {
        Self { bridge }
    }

    /// Handler backed by the native bridge for this target.
    pub fn for_platform() -> Self {
        Self::new(crate::platform_bridge())
    }

    fn scan_file(&self, call: &MethodCall) -> Reply {
        let Some(path) = call.argument_str("path") else {
            warn!("scanFile rejected: path missing or not a string");
            return error_reply(&BridgeError::invalid_argument("path"));
        };

        // The reply goes out before the OS finishes the scan.
        match self.bridge.scan_file(path) {
            Ok(()) => {
                info!(path, "media rescan requested");
                Reply::empty()
            }
            Err(e) => {
                warn!(path, error = %e, "media rescan could not be started");
                error_reply(&e)
            }
        }
    }

    fn pictures_directory(&self) -> Reply {
        let dir = self
            .bridge
            .pictures_directory()
            .and_then(|dir| {
                dir.into_os_string().into_string().map_err(|raw| {
                    BridgeError::Bridge(format!("pictures directory is not UTF-8: {raw:?}"))
                })
            });

        match dir {
            Ok(dir) => {
                debug!(%dir, "resolved public pictures directory");
                Reply::success(dir)
            }
            Err(e) => {
                warn!(error = %e, "pictures directory lookup failed");
                error_reply(&e)
            }
        }
    }
}

impl MethodCallHandler for MediaScanHandler {
    #[instrument(skip_all, fields(method = %call.method, platform = self.bridge.platform_name()))]
    fn on_method_call(&self, call: &MethodCall) -> Reply {
        match call.parsed_method() {
            Some(Method::ScanFile) => self.scan_file(call),
            // Arguments, if any, are ignored.
            Some(Method::GetPicturesDirectory) => self.pictures_directory(),
            None => {
                warn!("method not implemented");
                Reply::NotImplemented
            }
        }
    }
}
