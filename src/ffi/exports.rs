#![allow(non_snake_case)]

use core::ffi::c_char;
use std::sync::Mutex;

use crate::error::BridgeError;
use crate::ffi::host::UnitySendMessage;
use crate::ffi::types::{or_empty, write_c_string};
use crate::util::config::{bridge_config, BridgeConfig};

// Most recent failure from the null-tolerant entry points, cleared on read.
static LAST_ERROR: Mutex<Option<BridgeError>> = Mutex::new(None);

pub(crate) fn record_error(err: BridgeError) {
    // A poisoned slot only loses the message; the caller still returns normally.
    if let Ok(mut slot) = LAST_ERROR.lock() {
        slot.replace(err);
    }
}

fn take_error() -> Option<BridgeError> {
    LAST_ERROR.lock().ok().and_then(|mut slot| slot.take())
}

/// Relay a message to the engine's `UnitySendMessage`.
///
/// The three pointers go through untouched, exactly once, on the calling
/// thread. Nothing is validated, copied or logged here; whatever the engine
/// does with a bad argument is what the caller gets.
///
/// Uses `stdcall` on Windows-family targets and the C convention elsewhere.
#[no_mangle]
pub extern "system" fn UnitySendMessageToMethod(
    objectName: *const c_char,
    methodName: *const c_char,
    message: *const c_char,
) {
    // Safety: argument validity is the engine's contract, not ours.
    unsafe { UnitySendMessage(objectName, methodName, message) }
}

/// Initialize logging and configuration. Safe to call more than once.
#[no_mangle]
pub extern "C" fn UnityBridge_setup() {
    crate::util::logging::init_logger();
    let cfg = bridge_config();
    log::info!("UnityBridge setup completed");
    log::debug!(
        "config: log_level={} forward_null_target={}",
        cfg.log_level,
        cfg.forward_null_target
    );
}

/// Null-tolerant variant of [`UnitySendMessageToMethod`].
///
/// A null target drops the message unless `forward_null_target` is set.
/// Null method or payload pointers are sent as empty strings.
#[no_mangle]
pub extern "C" fn UnityBridge_sendMessage(
    gameObject: *const c_char,
    methodName: *const c_char,
    message: *const c_char,
) {
    send_with(bridge_config(), gameObject, methodName, message);
}

fn send_with(
    cfg: &BridgeConfig,
    target: *const c_char,
    method: *const c_char,
    payload: *const c_char,
) {
    if target.is_null() && !cfg.forward_null_target {
        let err = BridgeError::NullArgument { field: "target" };
        log::debug!("UnityBridge_sendMessage: {err}, message dropped");
        record_error(err);
        return;
    }

    unsafe { UnitySendMessage(or_empty(target), or_empty(method), or_empty(payload)) }
}

/// Copy the last bridge error into `out` and clear it.
///
/// Returns the number of bytes written (excluding the NUL terminator).
/// With no pending error an empty string is written.
#[no_mangle]
pub extern "C" fn UnityBridge_lastError(out: *mut c_char, cap: usize) -> usize {
    if out.is_null() || cap == 0 {
        return 0;
    }
    let msg = take_error().map(|err| err.to_string()).unwrap_or_default();
    write_c_string(out, cap, &msg)
}
