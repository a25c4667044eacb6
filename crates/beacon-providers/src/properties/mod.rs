//! Property Source Implementations
//!
//! | Source | Description |
//! |--------|-------------|
//! | EnvPropertySource | Environment variables under a prefix |
//! | MapPropertySource | Fixed key/value map |
//! | LayeredPropertySource | First hit across ordered sources |

pub mod env;
pub mod layered;
pub mod map;

pub use env::EnvPropertySource;
pub use layered::LayeredPropertySource;
pub use map::MapPropertySource;
