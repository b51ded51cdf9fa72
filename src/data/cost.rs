//! Lenient parsing of the free-text `cost` column.

/// Currency word stripped from costs when no other token is configured.
pub const DEFAULT_CURRENCY_TOKEN: &str = "บาท";

/// Parse a user-authored cost such as `"12,345 บาท"` into a number.
///
/// The currency token and every `,` are removed, the rest is trimmed and
/// parsed. Anything that does not yield a finite number is `None`; a bad
/// cost never fails the surrounding load.
pub fn parse_cost(raw: &str, currency_token: &str) -> Option<f64> {
    let mut text = raw.replace(',', "");
    if !currency_token.is_empty() {
        text = text.replace(currency_token, "");
    }
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    text.parse::<f64>().ok().filter(|v| v.is_finite())
}
