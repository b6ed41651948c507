// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for the GeoCam media bridge.

use thiserror::Error;

/// Top-level error type for all bridge operations.
#[derive(Debug, Error)]
pub enum BridgeError {
    // -- Invocation errors --
    #[error("argument `{name}` is missing or not a string")]
    InvalidArgument { name: String },

    #[error("malformed channel message: {0}")]
    Codec(#[from] serde_json::Error),

    // -- Configuration / registration --
    #[error("invalid channel configuration: {0}")]
    InvalidConfig(String),

    #[error("a handler is already registered on channel `{0}`")]
    AlreadyRegistered(String),

    #[error("no handler registered")]
    NotRegistered,

    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    // -- Platform bridge --
    #[error("platform bridge error: {0}")]
    Bridge(String),

    #[error("feature not available on this platform")]
    PlatformUnavailable,
}

impl BridgeError {
    /// Shorthand for a missing or mistyped named argument.
    pub fn invalid_argument(name: impl Into<String>) -> Self {
        Self::InvalidArgument { name: name.into() }
    }
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, BridgeError>;
