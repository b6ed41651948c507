// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// JNI entry points for `com.geocam.geocam_flutter.MediaScanBridge`.
//
// `nativeInit` is the one-time start-up step: logging, context publication
// and channel registration. `nativeHandle` answers one call per invocation
// and never throws; failures come back as error envelopes.

use std::ptr;
use std::sync::Mutex;

use jni::JNIEnv;
use jni::objects::{GlobalRef, JClass, JObject, JString};
use jni::sys::jstring;

use geocam_core::config::ChannelConfig;
use geocam_core::error::{BridgeError, Result};
use geocam_core::reply_errors::error_reply;

use super::jni_err;
use crate::channel::{self, MethodChannel, reply_bytes};
use crate::handler::MediaScanHandler;

/// Application context kept alive for `ndk_context`.
static HOST_CONTEXT: Mutex<Option<GlobalRef>> = Mutex::new(None);

#[unsafe(no_mangle)]
pub extern "system" fn Java_com_geocam_geocam_1flutter_MediaScanBridge_nativeInit<'local>(
    mut env: JNIEnv<'local>,
    _class: JClass<'local>,
    context: JObject<'local>,
    channel_name: JString<'local>,
) -> jstring {
    match init(&mut env, &context, &channel_name) {
        Ok(name) => new_jstring(&mut env, &name),
        Err(e) => {
            tracing::error!(error = %e, "media bridge initialisation failed");
            let _ = env.throw_new("java/lang/IllegalStateException", e.to_string());
            ptr::null_mut()
        }
    }
}

#[unsafe(no_mangle)]
pub extern "system" fn Java_com_geocam_geocam_1flutter_MediaScanBridge_nativeHandle<'local>(
    mut env: JNIEnv<'local>,
    _class: JClass<'local>,
    message: JString<'local>,
) -> jstring {
    let reply = match env.get_string(&message) {
        Ok(text) => {
            let text: String = text.into();
            match channel::global() {
                Ok(channel) => channel.handle_message(text.as_bytes()),
                Err(e) => reply_bytes(&error_reply(&e)),
            }
        }
        Err(e) => reply_bytes(&error_reply(&jni_err("get_string(message)", e))),
    };
    // serde_json only emits UTF-8.
    new_jstring(&mut env, &String::from_utf8_lossy(&reply))
}

fn init(env: &mut JNIEnv<'_>, context: &JObject<'_>, channel_name: &JString<'_>) -> Result<String> {
    let mut config = ChannelConfig::default();
    if !channel_name.is_null() {
        config.channel_name = env
            .get_string(channel_name)
            .map_err(|e| jni_err("get_string(channel)", e))?
            .into();
    }
    crate::init_logging(&config.log_filter);

    if let Ok(existing) = channel::global() {
        tracing::debug!(channel = existing.name(), "media bridge already initialised");
        return Ok(existing.name().to_owned());
    }

    publish_context(env, context)?;
    let handler = MediaScanHandler::for_platform();
    let registered = MethodChannel::register(config, handler).and_then(channel::register_global)?;
    Ok(registered.name().to_owned())
}

/// Hand the JavaVM and application context to `ndk_context`, once.
fn publish_context(env: &mut JNIEnv<'_>, context: &JObject<'_>) -> Result<()> {
    let mut slot = HOST_CONTEXT
        .lock()
        .map_err(|_| BridgeError::Bridge("host context lock poisoned".into()))?;
    if slot.is_some() {
        return Ok(());
    }

    // The application context outlives any single Activity.
    let app_context: JObject = env
        .call_method(context, "getApplicationContext", "()Landroid/content/Context;", &[])
        .map_err(|e| jni_err("getApplicationContext", e))?
        .l()
        .map_err(|e| jni_err("getApplicationContext->l", e))?;

    let global = env
        .new_global_ref(&app_context)
        .map_err(|e| jni_err("new_global_ref(context)", e))?;
    let vm = env.get_java_vm().map_err(|e| jni_err("get_java_vm", e))?;

    // SAFETY: both pointers stay valid for the life of the process: the VM
    // never unloads and `global` is parked in HOST_CONTEXT.
    unsafe {
        ndk_context::initialize_android_context(
            vm.get_java_vm_pointer().cast(),
            global.as_obj().as_raw().cast(),
        );
    }
    *slot = Some(global);
    Ok(())
}

fn new_jstring(env: &mut JNIEnv<'_>, text: &str) -> jstring {
    match env.new_string(text) {
        Ok(s) => s.into_raw(),
        Err(e) => {
            tracing::error!(error = %e, "could not allocate reply string");
            ptr::null_mut()
        }
    }
}
