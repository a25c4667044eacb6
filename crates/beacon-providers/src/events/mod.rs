//! Event Bus Provider Implementations
//!
//! | Provider | Type | Description |
//! |----------|------|-------------|
//! | TokioEventBusProvider | In-Process | Tokio broadcast channels |

pub mod tokio;

pub use self::tokio::TokioEventBusProvider;
