use lookup::LookupError;
use thiserror::Error;

use crate::config::ConfigLoadError;

/// Errors raised while setting up a provider.
#[derive(Debug, Error)]
pub enum EnrichError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigLoadError),
    #[error("lookup setup failed: {0}")]
    Lookup(#[from] LookupError),
}
