//! Decimal policy for every number written into markup

/// Format a number for markup: at most three decimals, no trailing zeros,
/// no trailing point, and never `-0`.
pub fn fmt_num(value: f64) -> String {
    let mut s = format!("{value:.3}");
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(trimmed);
    }
    if s == "-0" {
        s = "0".to_string();
    }
    s
}
