use al_core::AssetEntry;
use al_core::ParseError;
use al_core::ResolveError;
use al_core::ValuationResult;
use al_core::assets;
use al_core::valuation::format_grouped;

const USAGE: &str = "Usage: /add <SYMBOL> <AMOUNT> <YYYY-MM-DD>\nExample: /add BTC 0.5 2024-06-15";

/// `/start` text: intro, usage hint, the supported set.
pub fn greeting() -> String {
    format!(
        "👋 Hi! I'm AssetLog — your total capital OS.\n\n\
         Use /add to log an asset.\n\
         Supported: {}\n\
         Example: /add BTC 0.5 2024-06-15",
        assets::supported_tickers()
    )
}

/// Success reply with the three denominations.
pub fn added(entry: &AssetEntry, valuation: &ValuationResult) -> String {
    format!(
        "✅ Added:\n{amount} {ticker} bought on {date}\n\n= ${usd}\n= ₽{rub}\n= {gold} g gold",
        amount = entry.amount,
        ticker = entry.ticker,
        date = entry.purchase_date,
        usd = format_grouped(valuation.usd_value, 2),
        rub = format_grouped(valuation.rub_value, 0),
        gold = format_grouped(valuation.gold_grams, 1),
    )
}

/// Corrective usage message for each parser rejection.
pub fn parse_error(err: &ParseError) -> String {
    match err {
        ParseError::ArgumentCount(_) => USAGE.to_string(),
        ParseError::UnsupportedAsset { ticker } => {
            format!("❌ Unsupported asset: {ticker}. Supported: {}", assets::supported_tickers())
        }
        ParseError::InvalidAmount(raw) => format!("❌ Invalid amount: {raw}.\n{USAGE}"),
        ParseError::InvalidDate(raw) => format!("❌ Invalid date: {raw}.\n{USAGE}"),
    }
}

pub fn price_unavailable(err: &ResolveError) -> String {
    let ResolveError::PriceUnavailable { ticker } = err;
    format!(
        "❌ Price not found for {ticker}. This may be due to API limits.\nTry again later or use a supported asset."
    )
}

pub fn internal_error() -> String {
    "❌ Something went wrong. Try again.".to_string()
}

#[cfg(test)]
mod tests {
    use al_core::parser::parse_add_args;

    use super::*;

    #[test]
    fn test_added_reply_formats_all_denominations() {
        let entry = parse_add_args(&["BTC", "0.5", "2024-06-15"]).unwrap();
        let valuation = ValuationResult { usd_value: 32_500.0, rub_value: 2_925_000.0, gold_grams: 464.285_714 };

        let reply = added(&entry, &valuation);

        assert_eq!(reply, "✅ Added:\n0.5 BTC bought on 2024-06-15\n\n= $32,500.00\n= ₽2,925,000\n= 464.3 g gold");
    }

    #[test]
    fn test_greeting_lists_supported_assets() {
        let text = greeting();

        assert!(text.contains("/add"));
        assert!(text.contains("BTC"));
        assert!(text.contains("MATIC"));
    }

    #[test]
    fn test_unsupported_asset_reply_names_the_ticker() {
        let reply = parse_error(&ParseError::UnsupportedAsset { ticker: "FOO".to_string() });

        assert!(reply.contains("FOO"));
        assert!(reply.contains("BTC"));
    }

    #[test]
    fn test_price_unavailable_reply_names_the_ticker() {
        let reply = price_unavailable(&ResolveError::PriceUnavailable { ticker: "BTC".to_string() });

        assert!(reply.contains("Price not found for BTC"));
    }
}
