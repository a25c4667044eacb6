//! Component lifecycle
//!
//! The [`LifecycleManager`] starts managed components in dependency order
//! and stops them in reverse. It is owned by whoever drives the bootstrap;
//! there is no process-wide instance.

pub mod manager;

pub use manager::{LifecycleManager, ShutdownReport};

use std::any::Any;

/// Text of a caught panic payload
pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
