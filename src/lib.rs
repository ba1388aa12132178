//! unity_bridge (staticlib)
//!
//! This crate exposes a small C ABI that Unity loads as a native plugin.
//! Its main export, `UnitySendMessageToMethod`, relays three strings to the
//! engine's own `UnitySendMessage`.
//!
//! Only a static archive is produced. `UnitySendMessage` lives in the player
//! binary, so the archive is linked into it (iOS/IL2CPP style) and the export
//! is a plain `#[no_mangle]` symbol. No Windows DLL with a `dllexport` table
//! is built.
//!
//! Design rule: keep this file thin.

mod error;
mod ffi;
mod message;
mod util;

// Export C ABI symbols.
pub use ffi::exports::*;

pub use error::BridgeError;
pub use message::{send_message, Message};
pub use util::config::{bridge_config, BridgeConfig};
pub use util::logging::init_logger;
