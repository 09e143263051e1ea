//! Registration errors

use super::controller::RegistrationHandle;
use super::types::TargetId;

/// Rejected registration; nothing from the request was registered
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationError {
    /// A batch must contain at least one target
    EmptyBatch,
    /// The same identifier appears twice in one request
    DuplicateTarget(TargetId),
    /// The handle was never issued or has been deregistered
    UnknownHandle(RegistrationHandle),
}

impl std::fmt::Display for RegistrationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistrationError::EmptyBatch => write!(f, "Invalid registration: empty batch"),
            RegistrationError::DuplicateTarget(id) => {
                write!(f, "Invalid registration: duplicate target '{}'", id)
            }
            RegistrationError::UnknownHandle(handle) => {
                write!(f, "Unknown registration handle {}", handle.0)
            }
        }
    }
}

impl std::error::Error for RegistrationError {}
