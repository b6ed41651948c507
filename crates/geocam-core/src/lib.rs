// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// GeoCam: Method-call types, wire codec and errors shared by the bridge.

pub mod codec;
pub mod config;
pub mod error;
pub mod reply_errors;
pub mod types;

pub use config::ChannelConfig;
pub use error::BridgeError;
pub use types::*;
