//! Search configuration loaded from YAML.
//!
//! ```yaml
//! search:
//!   timeout_ms: 50.0
//!   tie_break: lowest_heuristic
//! ```

mod defaults;
mod error;
mod search;

pub use error::ConfigLoadError;
pub use search::{MargaConfig, SearchSettings};
