// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Platform-agnostic trait definitions for the native facilities the media
// channel forwards to.

use std::path::PathBuf;

use geocam_core::error::Result;

/// Unified bridge that groups all native capabilities.
pub trait PlatformBridge: NativeMediaScan + NativePublicDirectories + Send + Sync {
    /// Human-readable platform name (e.g. "Android", "Desktop").
    fn platform_name(&self) -> &str;
}

/// Re-index files into the system media catalog.
pub trait NativeMediaScan {
    /// Queue a rescan of a single path.
    ///
    /// Returns once the request has been handed to the OS. The scan itself
    /// runs off the calling thread and its outcome is not reported.
    fn scan_file(&self, path: &str) -> Result<()>;
}

/// Well-known shared directories.
pub trait NativePublicDirectories {
    /// Absolute path of the public "Pictures" directory.
    fn pictures_directory(&self) -> Result<PathBuf>;
}
