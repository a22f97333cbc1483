use crate::settings::AppConfig;

/// Present-day value of one logged purchase in the three reporting
/// denominations. Raw products; rounding happens at render time only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValuationResult {
    pub usd_value: f64,
    pub rub_value: f64,
    pub gold_grams: f64,
}

/// Amount times unit price, converted with the fixed configured rates.
pub fn valuate(amount: f64, unit_price_usd: f64, config: &AppConfig) -> ValuationResult {
    let usd_value = amount * unit_price_usd;

    ValuationResult {
        usd_value,
        rub_value: usd_value * config.rub_per_usd,
        gold_grams: usd_value / config.usd_per_gold_gram,
    }
}

/// Fixed-point rendering with `,` thousands separators, e.g. `32,500.00`.
pub fn format_grouped(value: f64, decimals: usize) -> String {
    let rendered = format!("{value:.decimals$}");
    let (int_part, frac_part) = match rendered.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (rendered.as_str(), None),
    };

    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::with_capacity(rendered.len() + digits.len() / 3);
    for (i, ch) in digits.iter().enumerate() {
        if i > 0 && digits[i - 1].is_ascii_digit() && ch.is_ascii_digit() && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*ch);
    }

    match frac_part {
        Some(frac) => format!("{grouped}.{frac}"),
        None => grouped,
    }
}
