pub mod client;
pub mod coingecko;
pub mod errors;

pub use client::HttpClient;
pub use client::HttpClientConfig;
pub use coingecko::CoinGeckoClient;
pub use errors::HttpError;
pub use errors::Result;
