use core::fmt;

/// Failures detected on the bridge side, before anything reaches the host.
///
/// The relay export never produces these; only the null-tolerant entry point
/// and the safe [`Message`](crate::Message) API do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BridgeError {
    /// A Rust string could not become a C string.
    InteriorNul { field: &'static str },
    /// A pointer the bridge cannot substitute was null.
    NullArgument { field: &'static str },
}

impl fmt::Display for BridgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BridgeError::InteriorNul { field } => {
                write!(f, "{field} contains an interior NUL byte")
            }
            BridgeError::NullArgument { field } => write!(f, "{field} is null"),
        }
    }
}

impl std::error::Error for BridgeError {}
