//! Plays the Unity player: defines the dispatcher the bridge links against.

use std::cell::RefCell;
use std::ffi::{c_char, CStr, CString};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatch {
    pub ptrs: [usize; 3],
    pub texts: [Option<String>; 3],
}

thread_local! {
    static CALLS: RefCell<Vec<Dispatch>> = const { RefCell::new(Vec::new()) };
}

fn read(ptr: *const c_char) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    Some(unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned())
}

#[no_mangle]
#[allow(non_snake_case)]
pub extern "C" fn UnitySendMessage(obj: *const c_char, method: *const c_char, msg: *const c_char) {
    let call = Dispatch {
        ptrs: [obj as usize, method as usize, msg as usize],
        texts: [read(obj), read(method), read(msg)],
    };
    CALLS.with(|c| c.borrow_mut().push(call));
}

pub fn take_calls() -> Vec<Dispatch> {
    CALLS.with(|c| std::mem::take(&mut *c.borrow_mut()))
}

pub fn texts(call: &Dispatch) -> [Option<&str>; 3] {
    [
        call.texts[0].as_deref(),
        call.texts[1].as_deref(),
        call.texts[2].as_deref(),
    ]
}

pub fn c(s: &str) -> CString {
    CString::new(s).unwrap()
}
