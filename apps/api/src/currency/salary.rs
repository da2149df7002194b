use crate::currency::resolver::{resolve_currency_symbol, CurrencySymbol};

/// Formats a whole-unit amount with the symbol and `,` thousands separators.
/// `format_amount(Pound, 52000)` → `"£52,000"`.
pub fn format_amount(symbol: CurrencySymbol, amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{symbol}{grouped}")
}

/// Renders a salary range for a job card, using the currency resolved from `location`.
///
/// Returns `None` when neither bound is known. Reversed bounds are swapped.
pub fn format_salary_range(
    location: Option<&str>,
    min: Option<u64>,
    max: Option<u64>,
) -> Option<String> {
    let symbol = resolve_currency_symbol(location);

    match (min, max) {
        (Some(lo), Some(hi)) => {
            let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
            if lo == hi {
                Some(format_amount(symbol, lo))
            } else {
                Some(format!(
                    "{} - {}",
                    format_amount(symbol, lo),
                    format_amount(symbol, hi)
                ))
            }
        }
        (Some(lo), None) => Some(format!("From {}", format_amount(symbol, lo))),
        (None, Some(hi)) => Some(format!("Up to {}", format_amount(symbol, hi))),
        (None, None) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount_groups_thousands() {
        assert_eq!(format_amount(CurrencySymbol::Dollar, 0), "$0");
        assert_eq!(format_amount(CurrencySymbol::Dollar, 999), "$999");
        assert_eq!(format_amount(CurrencySymbol::Dollar, 1000), "$1,000");
        assert_eq!(format_amount(CurrencySymbol::Pound, 52000), "£52,000");
        assert_eq!(format_amount(CurrencySymbol::Dollar, 1_250_000), "$1,250,000");
    }

    #[test]
    fn test_range_uses_location_currency() {
        assert_eq!(
            format_salary_range(Some("London, UK"), Some(50_000), Some(60_000)).as_deref(),
            Some("£50,000 - £60,000")
        );
        assert_eq!(
            format_salary_range(Some("Austin, TX"), Some(120_000), Some(150_000)).as_deref(),
            Some("$120,000 - $150,000")
        );
    }

    #[test]
    fn test_range_swaps_reversed_bounds() {
        assert_eq!(
            format_salary_range(None, Some(90_000), Some(70_000)).as_deref(),
            Some("$70,000 - $90,000")
        );
    }

    #[test]
    fn test_equal_bounds_render_single_amount() {
        assert_eq!(
            format_salary_range(Some("Leeds"), Some(40_000), Some(40_000)).as_deref(),
            Some("£40,000")
        );
    }

    #[test]
    fn test_open_ended_ranges() {
        assert_eq!(
            format_salary_range(Some("Remote"), Some(80_000), None).as_deref(),
            Some("From $80,000")
        );
        assert_eq!(
            format_salary_range(Some("Bristol"), None, Some(65_000)).as_deref(),
            Some("Up to £65,000")
        );
    }

    #[test]
    fn test_no_bounds_is_none() {
        assert_eq!(format_salary_range(Some("London"), None, None), None);
    }
}
