//! Amount helpers shared by the generators.

/// Round half up (`floor(x + 0.5)`), so 2.5 -> 3 and -2.5 -> -2.
pub fn round_half_up(amount: f64) -> i64 {
    (amount + 0.5).floor() as i64
}

/// Two-decimal rendering used wherever an amount is quoted in prose.
pub fn format_amount(amount: f64) -> String {
    format!("{:.2}", amount)
}
