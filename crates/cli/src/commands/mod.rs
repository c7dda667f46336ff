//! Command implementations.
//!
//! Each command renders its view to stdout. Logs go to stderr through
//! `tracing`.

use std::path::PathBuf;

use ecoswap_storefront::config::{ConfigError, MarketConfig};
use ecoswap_storefront::forms::ValidationError;
use ecoswap_storefront::store::FileStore;
use ecoswap_storefront::{MarketError, Marketplace};
use thiserror::Error;

pub mod auth;
pub mod browse;
pub mod cart;
pub mod sell;

/// Marketplace backed by the configured data directory.
pub type Market = Marketplace<FileStore>;

/// Errors that can end a command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Environment configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A form was rejected.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// A marketplace operation failed.
    #[error("{0}")]
    Market(#[from] MarketError),

    /// The product picture could not be read.
    #[error("Could not read image {}: {source}", path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CliError {
    /// Whether the message is meant for the user to act on (a rejected form,
    /// an unknown product, an unreadable picture) rather than a failure of
    /// the environment.
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        match self {
            Self::Validation(_) | Self::Image { .. } => true,
            Self::Market(e) => e.is_user_error(),
            Self::Config(_) => false,
        }
    }
}

/// Load the marketplace from the configured data directory.
///
/// # Errors
///
/// Returns an error if stored collections cannot be read.
pub fn open_market(config: &MarketConfig) -> Result<Market, CliError> {
    tracing::debug!(data_dir = %config.data_dir.display(), "Opening marketplace");
    Ok(Marketplace::load(FileStore::new(&config.data_dir))?)
}

#[cfg(test)]
mod tests {
    use ecoswap_core::ProductId;
    use ecoswap_storefront::store::StoreError;

    use super::*;

    #[test]
    fn test_user_errors_are_rendered() {
        assert!(CliError::from(ValidationError::PasswordMismatch).is_user_error());
        assert!(CliError::from(MarketError::ProductNotFound(ProductId::new(9))).is_user_error());
        assert!(
            CliError::Image {
                path: PathBuf::from("chair.png"),
                source: std::io::Error::other("missing"),
            }
            .is_user_error()
        );
    }

    #[test]
    fn test_environment_errors_are_not_user_errors() {
        let store = MarketError::from(StoreError::Io {
            key: "cart".to_owned(),
            source: std::io::Error::other("disk full"),
        });
        assert!(!CliError::from(store).is_user_error());

        let config = ConfigError::InvalidEnvVar("ECOSWAP_CURRENCY".to_owned(), "DOGE".to_owned());
        assert!(!CliError::from(config).is_user_error());
    }
}
