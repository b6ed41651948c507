// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Recording test double for the native bridge.

use std::path::PathBuf;
use std::sync::Mutex;

use geocam_core::error::{BridgeError, Result};

use crate::traits::*;

/// Records every scan request; serves a fixed pictures directory.
pub struct RecordingBridge {
    pictures: Option<PathBuf>,
    scans: Mutex<Vec<String>>,
    fail: bool,
}

impl RecordingBridge {
    pub fn new(pictures: &str) -> Self {
        Self {
            pictures: Some(PathBuf::from(pictures)),
            scans: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    /// Every native call fails.
    pub fn failing() -> Self {
        Self {
            pictures: None,
            scans: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn scanned(&self) -> Vec<String> {
        self.scans.lock().unwrap().clone()
    }
}

impl PlatformBridge for RecordingBridge {
    fn platform_name(&self) -> &str {
        "Test"
    }
}

impl NativeMediaScan for RecordingBridge {
    fn scan_file(&self, path: &str) -> Result<()> {
        if self.fail {
            return Err(BridgeError::Bridge("MediaScannerConnection.scanFile: boom".into()));
        }
        self.scans.lock().unwrap().push(path.to_owned());
        Ok(())
    }
}

impl NativePublicDirectories for RecordingBridge {
    fn pictures_directory(&self) -> Result<PathBuf> {
        self.pictures.clone().ok_or(BridgeError::PlatformUnavailable)
    }
}
