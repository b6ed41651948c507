// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>

//! GeoCam: native media bridge.
//!
//! Answers the `com.geocam.geocam_flutter/media_scan` method channel: asks
//! the OS media index to rescan a file, and reports where public pictures
//! live. The Android backend talks to the SDK over JNI; other targets get a
//! desktop backend so the dispatch logic builds and tests off-device.

pub mod channel;
pub mod handler;
pub mod traits;

#[cfg(test)]
mod testing;

#[cfg(target_os = "android")]
pub mod android;

#[cfg(not(target_os = "android"))]
pub mod desktop;

use std::sync::Arc;

pub use channel::{MethodCallHandler, MethodChannel, ReplySender};
pub use handler::MediaScanHandler;

/// Retrieves the native backend for the target operating system.
pub fn platform_bridge() -> Arc<dyn traits::PlatformBridge> {
    #[cfg(target_os = "android")]
    {
        Arc::new(android::AndroidBridge::new())
    }
    #[cfg(not(target_os = "android"))]
    {
        Arc::new(desktop::DesktopBridge::new())
    }
}

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` wins over `default_filter`. Safe to call more than once; only
/// the first call installs anything.
pub fn init_logging(default_filter: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
