//! Rupee formatting with Indian digit grouping: the last three digits
//! form one group, everything above groups in pairs (12,34,567).

use rust_decimal::Decimal;

/// Full amount with the rupee sign and two decimal places,
/// e.g. `₹12,34,567.89`.
pub fn format_inr(amount: Decimal) -> String {
    let rounded = amount.round_dp(2);
    let sign = if rounded.is_sign_negative() { "-" } else { "" };
    let text = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    format!("{}₹{}.{}", sign, group_indian(int_part), frac_part)
}

/// Short form for stat cards and chart ticks: crores, lakhs, thousands.
pub fn format_compact_inr(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let abs = value.abs();

    if abs >= 1.0e7 {
        format!("{}₹{:.1}Cr", sign, abs / 1.0e7)
    } else if abs >= 1.0e5 {
        format!("{}₹{:.1}L", sign, abs / 1.0e5)
    } else if abs >= 1.0e3 {
        format!("{}₹{:.1}K", sign, abs / 1.0e3)
    } else {
        format!("{}₹{:.0}", sign, abs)
    }
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (mut head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = vec![tail.to_string()];
    while head.len() > 2 {
        let (rest, pair) = head.split_at(head.len() - 2);
        groups.push(pair.to_string());
        head = rest;
    }
    groups.push(head.to_string());
    groups.reverse();
    groups.join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn small_amounts_have_no_grouping() {
        assert_eq!(format_inr(dec("0")), "₹0.00");
        assert_eq!(format_inr(dec("500")), "₹500.00");
        assert_eq!(format_inr(dec("999.995")), "₹1,000.00");
    }

    #[test]
    fn grouping_is_three_then_pairs() {
        assert_eq!(format_inr(dec("1000")), "₹1,000.00");
        assert_eq!(format_inr(dec("100000")), "₹1,00,000.00");
        assert_eq!(format_inr(dec("1234567.89")), "₹12,34,567.89");
        assert_eq!(format_inr(dec("123456789")), "₹12,34,56,789.00");
    }

    #[test]
    fn negative_amounts_keep_the_sign_outside() {
        assert_eq!(format_inr(dec("-1000")), "-₹1,000.00");
    }

    #[test]
    fn compact_scales_through_inr_units() {
        assert_eq!(format_compact_inr(650.0), "₹650");
        assert_eq!(format_compact_inr(56_700.0), "₹56.7K");
        assert_eq!(format_compact_inr(340_000.0), "₹3.4L");
        assert_eq!(format_compact_inr(12_000_000.0), "₹1.2Cr");
        assert_eq!(format_compact_inr(-340_000.0), "-₹3.4L");
    }
}
