//! English ordinal suffixes ("1st", "2nd", "11th", ...).

/// Format `n` with its English ordinal suffix.
///
/// Numbers ending in 11, 12 or 13 always take "th"; otherwise the last digit
/// decides: 1 → "st", 2 → "nd", 3 → "rd", anything else → "th".
pub fn ordinal(n: u64) -> String {
    format!("{}{}", n, suffix(n))
}

fn suffix(n: u64) -> &'static str {
    if matches!(n % 100, 11..=13) {
        return "th";
    }
    match n % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}
