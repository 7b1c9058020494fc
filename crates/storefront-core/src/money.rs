//! Price formatting for Colombian pesos
//!
//! Two spellings are in play: the storefront renders unit prices with es-CO
//! grouping (`$10.000`), while the server's pre-formatted totals use comma
//! grouping (`$10,000`). The in-memory API produces the latter so that it
//! reads like the real server.

/// Format a whole-peso amount the way line prices are shown (`$10.000`)
pub fn format_price(amount: i64) -> String {
    format_grouped(amount, '.')
}

/// Format a total the way the server does (`$10,000`)
pub fn format_server_total(amount: i64) -> String {
    format_grouped(amount, ',')
}

fn format_grouped(amount: i64, separator: char) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 2);

    if amount < 0 {
        grouped.push('-');
    }
    grouped.push('$');

    let lead = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - lead) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_price_grouping() {
        assert_eq!(format_price(0), "$0");
        assert_eq!(format_price(950), "$950");
        assert_eq!(format_price(1000), "$1.000");
        assert_eq!(format_price(10000), "$10.000");
        assert_eq!(format_price(1234567), "$1.234.567");
        assert_eq!(format_price(-2500), "-$2.500");
    }

    #[test]
    fn test_server_total_grouping() {
        assert_eq!(format_server_total(0), "$0");
        assert_eq!(format_server_total(25000), "$25,000");
        assert_eq!(format_server_total(100000), "$100,000");
    }

    proptest! {
        #[test]
        fn grouping_keeps_digits(amount in 0i64..10_000_000_000_000) {
            let formatted = format_price(amount);
            let digits: String = formatted.chars().filter(|c| c.is_ascii_digit()).collect();
            prop_assert_eq!(digits, amount.to_string());
        }

        #[test]
        fn groups_are_three_wide(amount in 0i64..10_000_000_000_000) {
            let formatted = format_price(amount);
            let groups: Vec<&str> = formatted.trim_start_matches('$').split('.').collect();
            prop_assert!(!groups[0].is_empty() && groups[0].len() <= 3);
            for group in &groups[1..] {
                prop_assert_eq!(group.len(), 3);
            }
        }
    }
}
