#![allow(non_snake_case)]

use core::ffi::c_char;

// Provided by the Unity player at link time. Argument validity, threading and
// error behavior are whatever the engine defines; nothing here checks them.
extern "C" {
    pub fn UnitySendMessage(obj: *const c_char, method: *const c_char, msg: *const c_char);
}
