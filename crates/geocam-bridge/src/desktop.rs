// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Desktop/CI backend.
//
// Desktop file managers and galleries watch the filesystem themselves, so
// there is no media index to poke; a rescan is logged and acknowledged. The
// Pictures directory comes from the platform's user-dirs convention.

use std::path::PathBuf;

use geocam_core::error::{BridgeError, Result};

use crate::traits::*;

/// Bridge used on every non-Android target.
#[derive(Debug, Default)]
pub struct DesktopBridge;

impl DesktopBridge {
    pub fn new() -> Self {
        Self
    }
}

impl PlatformBridge for DesktopBridge {
    fn platform_name(&self) -> &str {
        "Desktop"
    }
}

impl NativeMediaScan for DesktopBridge {
    fn scan_file(&self, path: &str) -> Result<()> {
        tracing::debug!(path, "desktop: no media index, rescan acknowledged");
        Ok(())
    }
}

impl NativePublicDirectories for DesktopBridge {
    fn pictures_directory(&self) -> Result<PathBuf> {
        // XDG_PICTURES_DIR on Linux, ~/Pictures on macOS, FOLDERID_Pictures on Windows.
        let dir = dirs::picture_dir().ok_or(BridgeError::PlatformUnavailable)?;
        if dir.is_absolute() {
            Ok(dir)
        } else {
            Err(BridgeError::Bridge(format!(
                "pictures directory is not absolute: {}",
                dir.display()
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rescan_is_acknowledged() {
        assert!(DesktopBridge::new().scan_file("/tmp/a.jpg").is_ok());
    }

    #[test]
    fn pictures_directory_is_absolute_or_unavailable() {
        match DesktopBridge::new().pictures_directory() {
            Ok(dir) => assert!(dir.is_absolute()),
            Err(BridgeError::PlatformUnavailable) => {}
            Err(other) => panic!("unexpected error: {other}"),
        }
    }
}
