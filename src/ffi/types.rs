use core::ffi::c_char;
use std::ffi::CString;

use crate::error::BridgeError;

static EMPTY: [u8; 1] = [0];

/// A static empty C string, used in place of null text arguments.
pub fn empty_cstr() -> *const c_char {
    EMPTY.as_ptr() as *const c_char
}

/// Returns `ptr` unchanged, or the static empty string when it is null.
pub fn or_empty(ptr: *const c_char) -> *const c_char {
    if ptr.is_null() {
        empty_cstr()
    } else {
        ptr
    }
}

/// Marshal a Rust string for the host, naming the offending field on failure.
pub fn to_cstring(s: &str, field: &'static str) -> Result<CString, BridgeError> {
    CString::new(s).map_err(|_| BridgeError::InteriorNul { field })
}

/// Copy `s` into a caller buffer of `cap` bytes, truncating to leave room for NUL.
///
/// Returns the text length written, terminator excluded. Nothing is written
/// when the buffer is null or empty.
pub fn write_c_string(out: *mut c_char, cap: usize, s: &str) -> usize {
    if out.is_null() || cap == 0 {
        return 0;
    }

    // Safety: the caller hands us `cap` writable bytes at `out`.
    let dst = unsafe { core::slice::from_raw_parts_mut(out as *mut u8, cap) };
    let len = s.len().min(cap - 1);
    dst[..len].copy_from_slice(&s.as_bytes()[..len]);
    dst[len] = 0;
    len
}
