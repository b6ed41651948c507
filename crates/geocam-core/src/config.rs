// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Channel configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{BridgeError, Result};

/// Channel the GeoCam app opens for media-scan calls.
pub const DEFAULT_CHANNEL: &str = "com.geocam.geocam_flutter/media_scan";

/// Settings applied when the bridge is registered at start-up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelConfig {
    /// Name of the method channel the handler answers on.
    pub channel_name: String,
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self {
            channel_name: DEFAULT_CHANNEL.into(),
            log_filter: "info".into(),
        }
    }
}

impl ChannelConfig {
    /// Parse from JSON. Missing fields take their defaults.
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn validate(&self) -> Result<()> {
        if self.channel_name.trim().is_empty() {
            return Err(BridgeError::InvalidConfig(
                "channel name must not be empty".into(),
            ));
        }
        if self.log_filter.trim().is_empty() {
            return Err(BridgeError::InvalidConfig(
                "log filter must not be empty".into(),
            ));
        }
        Ok(())
    }
}
