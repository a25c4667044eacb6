//! Discovery Client Provider Implementations
//!
//! | Provider | Name | Description |
//! |----------|------|-------------|
//! | InMemoryDiscoveryClient | `in-memory` | In-process registry with lease renewal |
//! | NullDiscoveryClient | `null` | Tracks registration state only |

pub mod in_memory;
pub mod null;

pub use in_memory::{InMemoryDiscoveryClient, InMemoryRegistry, LeaseRecord};
pub use null::NullDiscoveryClient;
