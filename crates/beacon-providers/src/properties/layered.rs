//! Layered properties

use beacon_domain::ports::PropertySource;
use std::sync::Arc;

/// Consults sources in order and returns the first value found
#[derive(Clone, Default)]
pub struct LayeredPropertySource {
    layers: Vec<Arc<dyn PropertySource>>,
}

impl LayeredPropertySource {
    /// Create an empty stack
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a layer with lower precedence than every existing one
    #[must_use]
    pub fn then(mut self, source: Arc<dyn PropertySource>) -> Self {
        self.layers.push(source);
        self
    }
}

impl std::fmt::Debug for LayeredPropertySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.layers.iter().map(|l| l.name()))
            .finish()
    }
}

impl PropertySource for LayeredPropertySource {
    fn name(&self) -> &str {
        "layered"
    }

    fn get(&self, key: &str) -> Option<String> {
        self.layers.iter().find_map(|layer| layer.get(key))
    }
}
