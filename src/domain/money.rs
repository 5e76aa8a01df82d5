use std::fmt;

/// Money is held as integer cents so that repeated debt/payment arithmetic
/// never accumulates binary floating-point drift. $75.50 = 7550 cents.
pub type Cents = i64;

/// Format cents as a decimal string with two digits: 7550 -> "75.50".
pub fn format_cents(cents: Cents) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    format!("{}{}.{:02}", sign, cents.abs() / 100, cents.abs() % 100)
}

/// Parse a decimal amount string into cents.
///
/// Accepts an optional leading sign, at most one decimal point, and at most
/// two fractional digits ("45", "45.5", "-45.50"). Anything else, including
/// blank input, is an error; the caller decides whether that means "default
/// to zero" (seed debt) or "reject the operation" (recording an entry).
pub fn parse_cents(input: &str) -> Result<Cents, ParseCentsError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ParseCentsError::Empty);
    }

    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let (units_str, frac_str) = match digits.split_once('.') {
        Some((u, f)) => (u, f),
        None => (digits, ""),
    };
    if units_str.is_empty() && frac_str.is_empty() {
        return Err(ParseCentsError::Invalid);
    }
    if !units_str.chars().all(|c| c.is_ascii_digit())
        || !frac_str.chars().all(|c| c.is_ascii_digit())
    {
        return Err(ParseCentsError::Invalid);
    }

    let units: i64 = if units_str.is_empty() {
        0
    } else {
        units_str.parse().map_err(|_| ParseCentsError::Invalid)?
    };

    let frac: i64 = match frac_str.len() {
        0 => 0,
        1 => 10 * frac_str.parse::<i64>().map_err(|_| ParseCentsError::Invalid)?,
        2 => frac_str.parse().map_err(|_| ParseCentsError::Invalid)?,
        _ => return Err(ParseCentsError::TooPrecise),
    };

    let cents = units * 100 + frac;
    Ok(if negative { -cents } else { cents })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseCentsError {
    Empty,
    Invalid,
    /// More than two fractional digits; balances carry two.
    TooPrecise,
}

impl fmt::Display for ParseCentsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseCentsError::Empty => write!(f, "amount is empty"),
            ParseCentsError::Invalid => write!(f, "not a valid amount"),
            ParseCentsError::TooPrecise => write!(f, "amounts carry at most two decimal digits"),
        }
    }
}

impl std::error::Error for ParseCentsError {}
