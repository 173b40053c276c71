//! Display formatting shared by the section views.

use api::Friend;
use chrono::NaiveDateTime;

/// `$12.50`; negative amounts render as `-$12.50`.
pub fn money(amount: f64) -> String {
    let rounded = (amount * 100.0).round() / 100.0;
    if rounded < 0.0 {
        format!("-${:.2}", -rounded)
    } else {
        format!("${:.2}", rounded.abs())
    }
}

/// Label and CSS class for a friend balance. Zero counts as "Owes you".
pub fn balance_label(friend: &Friend) -> (&'static str, &'static str) {
    if friend.owes_you() {
        ("Owes you", "positive")
    } else {
        ("You owe", "negative")
    }
}

/// `M/D/YYYY`.
pub fn short_date(at: &NaiveDateTime) -> String {
    at.format("%-m/%-d/%Y").to_string()
}

/// Date of an optional timestamp, empty when missing.
pub fn short_date_or_blank(at: Option<&NaiveDateTime>) -> String {
    at.map(short_date).unwrap_or_default()
}

pub fn member_count(count: usize) -> String {
    format!("{count} members")
}

pub fn expense_count(count: u32) -> String {
    format!("{count} expenses")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_money() {
        assert_eq!(money(12.5), "$12.50");
        assert_eq!(money(0.0), "$0.00");
        assert_eq!(money(-0.001), "$0.00");
        assert_eq!(money(-7.25), "-$7.25");
        assert_eq!(money(1234.567), "$1234.57");
    }

    #[test]
    fn test_balance_label() {
        let with = |balance| Friend {
            balance,
            ..Default::default()
        };
        assert_eq!(balance_label(&with(10.0)), ("Owes you", "positive"));
        assert_eq!(balance_label(&with(0.0)), ("Owes you", "positive"));
        assert_eq!(balance_label(&with(-0.5)), ("You owe", "negative"));
    }

    #[test]
    fn test_short_date() {
        let at = NaiveDate::from_ymd_opt(2024, 2, 9)
            .unwrap()
            .and_hms_opt(20, 15, 0)
            .unwrap();
        assert_eq!(short_date(&at), "2/9/2024");
        assert_eq!(short_date_or_blank(None), "");
    }

    #[test]
    fn test_counts() {
        assert_eq!(member_count(3), "3 members");
        assert_eq!(expense_count(0), "0 expenses");
    }
}
