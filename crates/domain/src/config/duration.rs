use super::errors::ConfigError;
use std::time::Duration;

/// Parses duration strings such as `"500ms"`, `"30s"`, `"10m"`, `"2h"`,
/// `"1d"` or compound forms like `"1h30m"`.
pub fn parse_duration(input: &str) -> Result<Duration, ConfigError> {
    let s = input.trim();
    if s.is_empty() {
        return Err(ConfigError::Parse("empty duration".to_string()));
    }

    let mut total = Duration::ZERO;
    let mut rest = s;

    while !rest.is_empty() {
        let digits = rest.bytes().take_while(|b| b.is_ascii_digit()).count();
        if digits == 0 {
            return Err(invalid(input));
        }
        let value: u64 = rest[..digits].parse().map_err(|_| invalid(input))?;
        rest = &rest[digits..];

        let unit_len = rest
            .bytes()
            .take_while(|b| b.is_ascii_alphabetic())
            .count();
        let (unit, tail) = rest.split_at(unit_len);
        rest = tail;

        let part = match unit {
            "ms" => Duration::from_millis(value),
            "s" => Duration::from_secs(value),
            "m" => Duration::from_secs(value.saturating_mul(60)),
            "h" => Duration::from_secs(value.saturating_mul(3_600)),
            "d" => Duration::from_secs(value.saturating_mul(86_400)),
            _ => return Err(invalid(input)),
        };
        total = total.saturating_add(part);
    }

    Ok(total)
}

fn invalid(input: &str) -> ConfigError {
    ConfigError::Parse(format!(
        "invalid duration '{}' (expected e.g. 500ms, 30s, 10m, 2h, 1d)",
        input
    ))
}
