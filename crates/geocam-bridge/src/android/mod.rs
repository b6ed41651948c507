// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Android platform bridge via JNI.
//
// Targets `aarch64-linux-android` / `armv7-linux-androideabi`. The JavaVM and
// application context are published through `ndk-context` by `nativeInit`
// (see `entry`), after which every trait method attaches the calling thread
// and invokes the Android SDK directly.
//
// ## Host glue
//
// The Flutter Activity forwards the channel to Rust:
//
// ```kotlin
// object MediaScanBridge {
//     init { System.loadLibrary("geocam_bridge") }
//     external fun nativeInit(context: Context, channel: String?): String
//     external fun nativeHandle(message: String): String
// }
// ```
//
// `nativeHandle` takes and returns the JSON envelopes described in
// `geocam_core::codec`.

#![cfg(target_os = "android")]

pub mod entry;

use std::path::PathBuf;

use jni::JNIEnv;
use jni::objects::{JObject, JString, JValue};

use geocam_core::error::{BridgeError, Result};

use crate::traits::*;

/// `android.os.Environment.DIRECTORY_PICTURES`.
const DIRECTORY_PICTURES_FIELD: &str = "DIRECTORY_PICTURES";

// ---------------------------------------------------------------------------
// JNI bootstrap helpers
// ---------------------------------------------------------------------------

/// Run `f` with a [`JNIEnv`] for the current thread and the host context.
///
/// Reads the `JavaVM*` and context published to `ndk_context`, attaching the
/// current thread if needed. A Java exception raised inside `f` is logged
/// and cleared so that it never unwinds into the caller on the Java side.
fn with_env<T>(f: impl FnOnce(&mut JNIEnv<'_>, &JObject<'_>) -> Result<T>) -> Result<T> {
    let ctx = ndk_context::android_context();
    // SAFETY: `ctx.vm()` is the `JavaVM*` published by `nativeInit`; the VM
    // outlives the process' native code.
    let vm = unsafe { jni::JavaVM::from_raw(ctx.vm().cast()) }
        .map_err(|e| jni_err("JavaVM::from_raw", e))?;

    let context_ptr = ctx.context();
    if context_ptr.is_null() {
        return Err(BridgeError::Bridge(
            "Android context is null: nativeInit has not run".into(),
        ));
    }
    // SAFETY: the pointer is a global reference held by `entry` for the
    // lifetime of the process.
    let context = unsafe { JObject::from_raw(context_ptr.cast()) };

    let mut env = vm
        .attach_current_thread()
        .map_err(|e| jni_err("attach_current_thread", e))?;

    let result = f(&mut *env, &context);
    if result.is_err() && env.exception_check().unwrap_or(false) {
        let _ = env.exception_describe();
        let _ = env.exception_clear();
    }
    result
}

/// Convenience: map any `jni::errors::Error` into `BridgeError::Bridge`.
fn jni_err(context: &str, e: jni::errors::Error) -> BridgeError {
    BridgeError::Bridge(format!("{context}: {e}"))
}

// ---------------------------------------------------------------------------
// Bridge struct
// ---------------------------------------------------------------------------

/// Android implementation of the media bridge.
///
/// Zero-sized; the JavaVM and context live in `ndk_context`.
#[derive(Debug, Default)]
pub struct AndroidBridge;

impl AndroidBridge {
    /// Create a new Android bridge.
    ///
    /// This does **not** touch JNI; the first JNI call happens when a trait
    /// method is invoked.
    pub fn new() -> Self {
        Self
    }
}

impl PlatformBridge for AndroidBridge {
    fn platform_name(&self) -> &str {
        "Android"
    }
}

// ---------------------------------------------------------------------------
// NativeMediaScan / android.media.MediaScannerConnection
// ---------------------------------------------------------------------------

impl NativeMediaScan for AndroidBridge {
    /// `MediaScannerConnection.scanFile(context, new String[]{path}, null, null)`.
    ///
    /// The MIME type is left for the scanner to infer from the extension and
    /// no completion listener is installed: the scan runs on the scanner's
    /// own thread and its outcome is discarded.
    fn scan_file(&self, path: &str) -> Result<()> {
        with_env(|env, context| {
            let j_path: JString = env
                .new_string(path)
                .map_err(|e| jni_err("new_string(path)", e))?;

            let paths = env
                .new_object_array(1, "java/lang/String", &j_path)
                .map_err(|e| jni_err("new_object_array(paths)", e))?;

            let no_mime_types = JObject::null();
            let no_listener = JObject::null();

            env.call_static_method(
                "android/media/MediaScannerConnection",
                "scanFile",
                "(Landroid/content/Context;[Ljava/lang/String;[Ljava/lang/String;\
                 Landroid/media/MediaScannerConnection$OnScanCompletedListener;)V",
                &[
                    JValue::Object(context),
                    JValue::Object(&paths),
                    JValue::Object(&no_mime_types),
                    JValue::Object(&no_listener),
                ],
            )
            .map_err(|e| jni_err("MediaScannerConnection.scanFile", e))?;

            tracing::debug!(path, "Android: media scan queued");
            Ok(())
        })
    }
}

// ---------------------------------------------------------------------------
// NativePublicDirectories / android.os.Environment
// ---------------------------------------------------------------------------

impl NativePublicDirectories for AndroidBridge {
    /// `Environment.getExternalStoragePublicDirectory(DIRECTORY_PICTURES).getAbsolutePath()`.
    fn pictures_directory(&self) -> Result<PathBuf> {
        with_env(|env, _context| {
            let dir_type: JObject = env
                .get_static_field(
                    "android/os/Environment",
                    DIRECTORY_PICTURES_FIELD,
                    "Ljava/lang/String;",
                )
                .map_err(|e| jni_err("Environment.DIRECTORY_PICTURES", e))?
                .l()
                .map_err(|e| jni_err("DIRECTORY_PICTURES->l", e))?;

            let dir: JObject = env
                .call_static_method(
                    "android/os/Environment",
                    "getExternalStoragePublicDirectory",
                    "(Ljava/lang/String;)Ljava/io/File;",
                    &[JValue::Object(&dir_type)],
                )
                .map_err(|e| jni_err("getExternalStoragePublicDirectory", e))?
                .l()
                .map_err(|e| jni_err("getExternalStoragePublicDirectory->l", e))?;

            if dir.is_null() {
                return Err(BridgeError::PlatformUnavailable);
            }

            let j_abs: JObject = env
                .call_method(&dir, "getAbsolutePath", "()Ljava/lang/String;", &[])
                .map_err(|e| jni_err("File.getAbsolutePath", e))?
                .l()
                .map_err(|e| jni_err("getAbsolutePath->l", e))?;

            let abs: String = env
                .get_string(&JString::from(j_abs))
                .map_err(|e| jni_err("get_string(absolutePath)", e))?
                .into();

            tracing::debug!(path = %abs, "Android: public pictures directory");
            Ok(PathBuf::from(abs))
        })
    }
}
