//! Display-adjacent formatting helpers. Presentation only — nothing in
//! here carries a domain invariant.

use crate::types::Money;
use chrono::{DateTime, Utc};

const CRORE: Money = 10_000_000;
const LAKH: Money = 100_000;

/// Magnitude-scaled rupee formatting: amounts of at least a crore as
/// "₹X.XX Cr", at least a lakh as "₹X.XX L", otherwise grouped digits
/// in the Indian 2,2,3 style.
pub fn format_currency(amount: Money) -> String {
    if amount >= CRORE {
        format!("₹{:.2} Cr", amount as f64 / CRORE as f64)
    } else if amount >= LAKH {
        format!("₹{:.2} L", amount as f64 / LAKH as f64)
    } else {
        format!("₹{}", group_indian(amount))
    }
}

/// Coarse relative-age string for a past timestamp.
pub fn format_relative_time(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - then).num_seconds().max(0);
    if seconds < 60 {
        "just now".to_string()
    } else if seconds < 3_600 {
        format!("{}m ago", seconds / 60)
    } else if seconds < 86_400 {
        format!("{}h ago", seconds / 3_600)
    } else {
        format!("{}d ago", seconds / 86_400)
    }
}

/// Indian digit grouping: the last three digits, then pairs.
fn group_indian(amount: Money) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return digits;
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let head_bytes = head.as_bytes();
    let mut end = head_bytes.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn currency_scales_by_magnitude() {
        assert_eq!(format_currency(125_000_000), "₹12.50 Cr");
        assert_eq!(format_currency(10_000_000), "₹1.00 Cr");
        assert_eq!(format_currency(8_200_000), "₹82.00 L");
        assert_eq!(format_currency(100_000), "₹1.00 L");
        assert_eq!(format_currency(99_999), "₹99,999");
        assert_eq!(format_currency(1_234), "₹1,234");
        assert_eq!(format_currency(950), "₹950");
        assert_eq!(format_currency(0), "₹0");
    }

    #[test]
    fn relative_time_bands() {
        let now = Utc.with_ymd_and_hms(2024, 7, 15, 12, 0, 0).unwrap();
        let at = |secs: i64| now - chrono::Duration::seconds(secs);
        assert_eq!(format_relative_time(at(5), now), "just now");
        assert_eq!(format_relative_time(at(59), now), "just now");
        assert_eq!(format_relative_time(at(60), now), "1m ago");
        assert_eq!(format_relative_time(at(3_599), now), "59m ago");
        assert_eq!(format_relative_time(at(7_200), now), "2h ago");
        assert_eq!(format_relative_time(at(172_800), now), "2d ago");
    }

    #[test]
    fn future_timestamps_clamp_to_just_now() {
        let now = Utc.with_ymd_and_hms(2024, 7, 15, 12, 0, 0).unwrap();
        let future = now + chrono::Duration::hours(1);
        assert_eq!(format_relative_time(future, now), "just now");
    }
}
