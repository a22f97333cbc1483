use async_trait::async_trait;
use thiserror::Error;
use time::Date;

/// Why a single provider call yielded no usable price. The resolver logs
/// the variant and treats every one as the same tier miss.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("provider returned HTTP {0}")]
    Status(u16),

    #[error("response is missing a usable USD price")]
    MissingPrice,
}

/// Read-only price source. Implemented over CoinGecko in `al_http` and by
/// in-memory stubs in tests.
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    /// USD price of `id` on the given calendar date.
    async fn historical_price(&self, id: &str, date: Date) -> Result<f64, ProviderError>;

    /// Latest USD price of `id`.
    async fn current_price(&self, id: &str) -> Result<f64, ProviderError>;
}
