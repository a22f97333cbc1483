use std::collections::HashMap;

use al_core::ProviderError;
use al_core::QuoteProvider;
use async_trait::async_trait;
use serde::Deserialize;
use time::Date;

use crate::client::HttpClient;
use crate::client::HttpClientConfig;
use crate::errors::HttpError;
use crate::errors::Result;

const COINGECKO_BASE_URL: &str = "https://api.coingecko.com";

/// CoinGecko REST client for historical and live USD quotes.
pub struct CoinGeckoClient {
    client: HttpClient,
    base_url: String,
}

impl CoinGeckoClient {
    /// Create a new CoinGecko client with default configuration
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Create a new client builder
    pub fn builder() -> CoinGeckoClientBuilder {
        CoinGeckoClientBuilder::default()
    }

    /// USD price of a coin on the given calendar date.
    pub async fn historical_price(&self, id: &str, date: Date) -> Result<f64> {
        let url = format!("{}/api/v3/coins/{}/history", self.base_url, id);
        // The history endpoint wants DD-MM-YYYY
        let date_param = format!("{:02}-{:02}-{:04}", date.day(), u8::from(date.month()), date.year());

        let response = self.client.get(&url).query(&[("date", date_param.as_str())]).send().await?;

        if !response.status().is_success() {
            return Err(HttpError::BadStatus(response.status().as_u16()));
        }

        let bytes = response.bytes().await?;
        let history: HistoryResponse = serde_json::from_slice(&bytes)?;

        price_from_history(history)
    }

    /// Latest USD price of a coin.
    pub async fn current_price(&self, id: &str) -> Result<f64> {
        let url = format!("{}/api/v3/simple/price", self.base_url);

        let response = self.client.get(&url).query(&[("ids", id), ("vs_currencies", "usd")]).send().await?;

        if !response.status().is_success() {
            return Err(HttpError::BadStatus(response.status().as_u16()));
        }

        let bytes = response.bytes().await?;
        let prices: HashMap<String, SimplePrice> = serde_json::from_slice(&bytes)?;

        price_from_simple(&prices, id)
    }
}

#[async_trait]
impl QuoteProvider for CoinGeckoClient {
    async fn historical_price(&self, id: &str, date: Date) -> std::result::Result<f64, ProviderError> {
        CoinGeckoClient::historical_price(self, id, date).await.map_err(ProviderError::from)
    }

    async fn current_price(&self, id: &str) -> std::result::Result<f64, ProviderError> {
        CoinGeckoClient::current_price(self, id).await.map_err(ProviderError::from)
    }
}

/// Builder for configuring the CoinGecko client
pub struct CoinGeckoClientBuilder {
    http_config: HttpClientConfig,
    base_url: String,
}

impl Default for CoinGeckoClientBuilder {
    fn default() -> Self {
        Self { http_config: HttpClientConfig::default(), base_url: COINGECKO_BASE_URL.to_string() }
    }
}

impl CoinGeckoClientBuilder {
    /// Set custom base URL
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Configure HTTP client settings
    pub fn http_config(mut self, config: HttpClientConfig) -> Self {
        self.http_config = config;
        self
    }

    /// Build the CoinGecko client
    pub fn build(self) -> Result<CoinGeckoClient> {
        let client = HttpClient::with_config(self.http_config)?;

        Ok(CoinGeckoClient { client, base_url: self.base_url })
    }
}

// Response types. Only the USD leaf is read; everything else in the body
// is ignored. Each level is optional so a thin error body still parses.

#[derive(Debug, Deserialize)]
struct HistoryResponse {
    market_data: Option<MarketData>,
}

#[derive(Debug, Deserialize)]
struct MarketData {
    current_price: Option<CurrentPrice>,
}

#[derive(Debug, Deserialize)]
struct CurrentPrice {
    usd: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct SimplePrice {
    usd: Option<f64>,
}

/// A history response counts only if `market_data.current_price.usd` is navigable.
fn price_from_history(history: HistoryResponse) -> Result<f64> {
    history
        .market_data
        .and_then(|market_data| market_data.current_price)
        .and_then(|price| price.usd)
        .ok_or(HttpError::MissingPrice)
}

/// A simple-price response counts only if the `{id}.usd` entry is present.
fn price_from_simple(prices: &HashMap<String, SimplePrice>, id: &str) -> Result<f64> {
    prices.get(id).and_then(|entry| entry.usd).ok_or(HttpError::MissingPrice)
}
