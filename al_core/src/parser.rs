use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

use crate::assets;
use crate::errors::ParseError;

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// One validated `/add` request. Lives for a single command only.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetEntry {
    pub ticker: String,
    pub provider_id: &'static str,
    pub amount: f64,
    pub purchase_date: Date,
}

/// Validate the tokens following `/add`: `<SYMBOL> <AMOUNT> <YYYY-MM-DD>`.
pub fn parse_add_args(tokens: &[&str]) -> Result<AssetEntry, ParseError> {
    if tokens.len() != 3 {
        return Err(ParseError::ArgumentCount(tokens.len()));
    }

    let ticker = tokens[0].to_uppercase();
    let asset = assets::lookup(&ticker).ok_or_else(|| ParseError::UnsupportedAsset { ticker: ticker.clone() })?;

    let amount: f64 = tokens[1].parse().map_err(|_| ParseError::InvalidAmount(tokens[1].to_string()))?;
    if !amount.is_finite() || amount <= 0.0 {
        return Err(ParseError::InvalidAmount(tokens[1].to_string()));
    }

    let purchase_date =
        Date::parse(tokens[2], DATE_FORMAT).map_err(|_| ParseError::InvalidDate(tokens[2].to_string()))?;

    Ok(AssetEntry { ticker, provider_id: asset.provider_id, amount, purchase_date })
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::*;

    #[test]
    fn test_parse_valid_entry() {
        let entry = parse_add_args(&["btc", "0.5", "2024-06-15"]).unwrap();

        assert_eq!(entry.ticker, "BTC");
        assert_eq!(entry.provider_id, "bitcoin");
        assert_eq!(entry.amount, 0.5);
        assert_eq!(entry.purchase_date, date!(2024 - 06 - 15));
    }

    #[test]
    fn test_rejects_wrong_argument_count() {
        assert_eq!(parse_add_args(&["BTC", "0.5"]), Err(ParseError::ArgumentCount(2)));
        assert_eq!(
            parse_add_args(&["BTC", "0.5", "2024-06-15", "extra"]),
            Err(ParseError::ArgumentCount(4))
        );
        assert_eq!(parse_add_args(&[]), Err(ParseError::ArgumentCount(0)));
    }

    #[test]
    fn test_rejects_unknown_ticker_by_name() {
        assert_eq!(
            parse_add_args(&["FOO", "1", "2024-01-01"]),
            Err(ParseError::UnsupportedAsset { ticker: "FOO".to_string() })
        );
    }

    #[test]
    fn test_rejects_bad_amounts() {
        for bad in ["abc", "NaN", "inf", "-1", "0"] {
            assert_eq!(
                parse_add_args(&["BTC", bad, "2024-01-01"]),
                Err(ParseError::InvalidAmount(bad.to_string())),
                "amount {bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_rejects_malformed_dates() {
        for bad in ["2024-13-01", "2024-02-30", "15-06-2024", "2024-6-15", "yesterday"] {
            assert_eq!(
                parse_add_args(&["BTC", "1", bad]),
                Err(ParseError::InvalidDate(bad.to_string())),
                "date {bad:?} should be rejected"
            );
        }
    }
}
