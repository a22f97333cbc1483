/// A recognised asset: the Telegram-facing ticker plus the CoinGecko slug
/// used on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Asset {
    pub ticker: &'static str,
    pub provider_id: &'static str,
}

/// Tickers the bot accepts, in the order they are shown to users.
/// Extending this table is all it takes to support a new asset.
const SUPPORTED: &[Asset] = &[
    Asset { ticker: "BTC", provider_id: "bitcoin" },
    Asset { ticker: "ETH", provider_id: "ethereum" },
    Asset { ticker: "TON", provider_id: "the-open-network" },
    Asset { ticker: "BNB", provider_id: "binancecoin" },
    Asset { ticker: "SOL", provider_id: "solana" },
    Asset { ticker: "XRP", provider_id: "ripple" },
    Asset { ticker: "ADA", provider_id: "cardano" },
    Asset { ticker: "DOGE", provider_id: "dogecoin" },
    Asset { ticker: "DOT", provider_id: "polkadot" },
    Asset { ticker: "MATIC", provider_id: "polygon" },
];

/// Look up an asset by ticker, case-insensitively.
pub fn lookup(ticker: &str) -> Option<&'static Asset> {
    let upper = ticker.to_uppercase();
    SUPPORTED.iter().find(|asset| asset.ticker == upper)
}

/// Comma-separated ticker list for help and error messages.
pub fn supported_tickers() -> String {
    SUPPORTED.iter().map(|asset| asset.ticker).collect::<Vec<_>>().join(", ")
}
