use time::Date;

use crate::errors::ResolveError;
use crate::provider::ProviderError;
use crate::provider::QuoteProvider;

/// A unit price in USD as produced by one provider tier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceQuote {
    pub unit_price_usd: f64,
}

/// Resolve a USD unit price for `ticker` at `purchase_date`.
///
/// The historical tier asks for the price on the purchase date and is
/// skipped entirely for future dates. The current-price tier is the
/// degraded substitute whenever the first yielded nothing. Tiers run
/// strictly in sequence, at most once each; a tier miss is logged and
/// swallowed. Only when both miss does the caller see an error, carrying
/// the original ticker for display.
pub async fn resolve_unit_price<P>(
    provider: &P,
    ticker: &str,
    provider_id: &str,
    purchase_date: Date,
    today: Date,
) -> Result<PriceQuote, ResolveError>
where
    P: QuoteProvider + ?Sized,
{
    if purchase_date <= today {
        match usable(provider.historical_price(provider_id, purchase_date).await) {
            Ok(price) => return Ok(PriceQuote { unit_price_usd: price }),
            Err(err) => {
                tracing::warn!("Historical price miss for {ticker} on {purchase_date}: {err}");
            }
        }
    }

    match usable(provider.current_price(provider_id).await) {
        Ok(price) => Ok(PriceQuote { unit_price_usd: price }),
        Err(err) => {
            tracing::error!("Current price miss for {ticker}: {err}");
            Err(ResolveError::PriceUnavailable { ticker: ticker.to_string() })
        }
    }
}

/// A quote is usable only if it is a finite positive number.
fn usable(result: Result<f64, ProviderError>) -> Result<f64, ProviderError> {
    match result {
        Ok(price) if price.is_finite() && price > 0.0 => Ok(price),
        Ok(_) => Err(ProviderError::MissingPrice),
        Err(err) => Err(err),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::AtomicUsize;
    use std::sync::atomic::Ordering;

    use async_trait::async_trait;
    use time::macros::date;

    use super::*;

    /// Stub provider; `None` means the tier fails.
    struct StubProvider {
        historical: Option<f64>,
        current: Option<f64>,
        historical_calls: AtomicUsize,
        current_calls: AtomicUsize,
    }

    impl StubProvider {
        fn new(historical: Option<f64>, current: Option<f64>) -> Self {
            Self {
                historical,
                current,
                historical_calls: AtomicUsize::new(0),
                current_calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl QuoteProvider for StubProvider {
        async fn historical_price(&self, _id: &str, _date: Date) -> Result<f64, ProviderError> {
            self.historical_calls.fetch_add(1, Ordering::SeqCst);
            self.historical.ok_or(ProviderError::Status(429))
        }

        async fn current_price(&self, _id: &str) -> Result<f64, ProviderError> {
            self.current_calls.fetch_add(1, Ordering::SeqCst);
            self.current.ok_or(ProviderError::MissingPrice)
        }
    }

    #[tokio::test]
    async fn test_historical_hit_skips_current_tier() {
        let stub = StubProvider::new(Some(65_000.0), Some(70_000.0));

        let quote = resolve_unit_price(&stub, "BTC", "bitcoin", date!(2024 - 06 - 15), date!(2024 - 07 - 01))
            .await
            .unwrap();

        assert_eq!(quote.unit_price_usd, 65_000.0);
        assert_eq!(stub.historical_calls.load(Ordering::SeqCst), 1);
        assert_eq!(stub.current_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_future_date_skips_historical_tier() {
        let stub = StubProvider::new(Some(65_000.0), Some(70_000.0));

        let quote = resolve_unit_price(&stub, "BTC", "bitcoin", date!(2025 - 01 - 01), date!(2024 - 07 - 01))
            .await
            .unwrap();

        assert_eq!(quote.unit_price_usd, 70_000.0);
        assert_eq!(stub.historical_calls.load(Ordering::SeqCst), 0);
        assert_eq!(stub.current_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_historical_miss_falls_back_exactly_once() {
        let stub = StubProvider::new(None, Some(70_000.0));

        let quote = resolve_unit_price(&stub, "BTC", "bitcoin", date!(2024 - 06 - 15), date!(2024 - 07 - 01))
            .await
            .unwrap();

        assert_eq!(quote.unit_price_usd, 70_000.0);
        assert_eq!(stub.historical_calls.load(Ordering::SeqCst), 1);
        assert_eq!(stub.current_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_purchase_today_tries_historical_first() {
        let stub = StubProvider::new(Some(65_000.0), None);

        let quote = resolve_unit_price(&stub, "BTC", "bitcoin", date!(2024 - 07 - 01), date!(2024 - 07 - 01))
            .await
            .unwrap();

        assert_eq!(quote.unit_price_usd, 65_000.0);
        assert_eq!(stub.historical_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_both_tiers_dry_reports_the_ticker() {
        let stub = StubProvider::new(None, None);

        let err = resolve_unit_price(&stub, "DOGE", "dogecoin", date!(2024 - 06 - 15), date!(2024 - 07 - 01))
            .await
            .unwrap_err();

        assert_eq!(err, ResolveError::PriceUnavailable { ticker: "DOGE".to_string() });
        assert_eq!(stub.historical_calls.load(Ordering::SeqCst), 1);
        assert_eq!(stub.current_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_non_positive_price_is_a_tier_miss() {
        let stub = StubProvider::new(Some(0.0), Some(70_000.0));

        let quote = resolve_unit_price(&stub, "BTC", "bitcoin", date!(2024 - 06 - 15), date!(2024 - 07 - 01))
            .await
            .unwrap();

        assert_eq!(quote.unit_price_usd, 70_000.0);
        assert_eq!(stub.current_calls.load(Ordering::SeqCst), 1);
    }
}
