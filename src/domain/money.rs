use thiserror::Error;

/// Money is represented as integer cents to avoid floating-point precision issues.
/// 1 unit = 100 cents, so $50.00 = 5000 cents.
pub type Cents = i64;

/// Format cents with two decimal places.
/// Example: 5000 -> "50.00", -1234 -> "-12.34"
pub fn format_cents(cents: Cents) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs_cents = cents.unsigned_abs();
    format!("{}{}.{:02}", sign, abs_cents / 100, abs_cents % 100)
}

/// Format cents as a dollar amount, the way the report prints it.
/// Example: 3000 -> "$30.00", -3000 -> "$-30.00"
pub fn format_money(cents: Cents) -> String {
    format!("${}", format_cents(cents))
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCentsError {
    #[error("amount is empty")]
    Empty,

    #[error("invalid money format: {0}")]
    InvalidFormat(String),

    #[error("amount out of range: {0}")]
    Overflow(String),
}

/// Parse a decimal string into cents.
/// Example: "50.00" -> 5000, "12.5" -> 1250, "100" -> 10000, "-3" -> -300.
/// Digits past the second decimal place are truncated.
pub fn parse_cents(input: &str) -> Result<Cents, ParseCentsError> {
    let raw = input.trim();
    let unsigned = raw.strip_prefix('-').unwrap_or(raw);
    let negative = unsigned.len() != raw.len();
    let unsigned = unsigned.strip_prefix('$').unwrap_or(unsigned);

    if unsigned.is_empty() {
        return Err(ParseCentsError::Empty);
    }

    let (units_str, fraction_str) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    if units_str.is_empty() && fraction_str.is_empty() {
        return Err(ParseCentsError::InvalidFormat(raw.to_string()));
    }
    let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
    if !all_digits(units_str) || !all_digits(fraction_str) {
        return Err(ParseCentsError::InvalidFormat(raw.to_string()));
    }

    let units: i64 = if units_str.is_empty() {
        0
    } else {
        units_str
            .parse()
            .map_err(|_| ParseCentsError::Overflow(raw.to_string()))?
    };

    let fraction: i64 = match fraction_str.len() {
        0 => 0,
        // "12.5" means fifty cents
        1 => fraction_str.parse::<i64>().unwrap_or(0) * 10,
        _ => fraction_str[..2].parse().unwrap_or(0),
    };

    let cents = units
        .checked_mul(100)
        .and_then(|c| c.checked_add(fraction))
        .ok_or_else(|| ParseCentsError::Overflow(raw.to_string()))?;

    Ok(if negative { -cents } else { cents })
}
