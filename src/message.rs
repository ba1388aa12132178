use crate::error::BridgeError;
use crate::ffi::host::UnitySendMessage;
use crate::ffi::types::to_cstring;

/// An owned message for a GameObject, for Rust code living inside the player.
///
/// Marshalling happens in [`Message::send`]; the strings are copied into
/// NUL-terminated buffers that live only for the duration of the dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub target: String,
    pub method: String,
    pub payload: String,
}

impl Message {
    pub fn new(
        target: impl Into<String>,
        method: impl Into<String>,
        payload: impl Into<String>,
    ) -> Self {
        Self {
            target: target.into(),
            method: method.into(),
            payload: payload.into(),
        }
    }

    /// Dispatch once. Nothing reaches the engine if any field contains NUL.
    pub fn send(&self) -> Result<(), BridgeError> {
        let target = to_cstring(&self.target, "target")?;
        let method = to_cstring(&self.method, "method")?;
        let payload = to_cstring(&self.payload, "payload")?;

        unsafe { UnitySendMessage(target.as_ptr(), method.as_ptr(), payload.as_ptr()) };
        Ok(())
    }
}

pub fn send_message(target: &str, method: &str, payload: &str) -> Result<(), BridgeError> {
    Message::new(target, method, payload).send().map_err(|err| {
        log::warn!("send_message {target}.{method}: {err}");
        err
    })
}
