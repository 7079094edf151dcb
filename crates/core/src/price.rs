//! Price form-field parsing.

/// Parse a price form field into a non-negative integer.
///
/// Only a plain run of ASCII digits is accepted; anything else (empty input,
/// sign, decimal point, letters, overflow) is treated as absent rather than
/// rejected, so a sloppy form submission never fails the whole request.
///
/// # Examples
///
/// ```
/// use carkat_core::price::parse_price;
/// assert_eq!(parse_price("700"), Some(700));
/// assert_eq!(parse_price("-5"), None);
/// assert_eq!(parse_price("12.5"), None);
/// assert_eq!(parse_price(""), None);
/// ```
pub fn parse_price(raw: &str) -> Option<i32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    trimmed.parse().ok()
}
