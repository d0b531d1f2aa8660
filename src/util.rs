// Small formatting and arithmetic helpers shared by the summary, the report
// and the console output.
use num_format::{Locale, ToFormattedString};

pub const CURRENCY_SYMBOL: &str = "₹";
/// Placeholder shown wherever an average has no records to average over.
pub const NO_DATA: &str = "N/A";

/// Thousands-grouped integer, e.g. `1,234,567`.
pub fn format_int<T>(n: T) -> String
where
    T: ToFormattedString,
{
    n.to_formatted_string(&Locale::en)
}

/// Currency amount with thousands separators and no space after the symbol,
/// as used in the exported report (`₹1,234,567`).
pub fn format_currency<T>(n: T) -> String
where
    T: ToFormattedString,
{
    format!("{}{}", CURRENCY_SYMBOL, format_int(n))
}

/// Arithmetic mean truncated toward zero. `None` for an empty slice.
pub fn truncated_mean(values: &[u32]) -> Option<u32> {
    if values.is_empty() {
        return None;
    }
    // Sum in u64 so large batches cannot overflow.
    let sum: u64 = values.iter().map(|v| u64::from(*v)).sum();
    u32::try_from(sum / values.len() as u64).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_int(0u64), "0");
        assert_eq!(format_int(1_234_567u64), "1,234,567");
        assert_eq!(format_currency(50_000u64), "₹50,000");
    }

    #[test]
    fn mean_truncates_and_handles_empty() {
        assert_eq!(truncated_mean(&[120, 200, 280]), Some(200));
        assert_eq!(truncated_mean(&[120, 121]), Some(120));
        assert_eq!(truncated_mean(&[]), None);
    }
}
