/// Stores a Discord snowflake in a signed BIGINT column.
///
/// Snowflakes are below 2^63 so the cast never changes the value.
pub fn id_to_db(id: u64) -> i64 {
    id as i64
}

/// Reads a Discord snowflake back from a signed BIGINT column.
pub fn id_from_db(id: i64) -> u64 {
    id as u64
}

/// Reads a non-negative counter from a BIGINT column, clamping corrupt negatives to zero.
pub fn count_from_db(value: i64) -> u64 {
    u64::try_from(value).unwrap_or(0)
}

/// Writes a counter to a BIGINT column, saturating at `i64::MAX`.
pub fn count_to_db(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

/// Parses a number as printed by the game bot, e.g. `1,234`.
pub fn parse_count(raw: &str) -> Option<u64> {
    raw.trim().replace(',', "").parse().ok()
}

/// Renders a number with thousands separators, e.g. `12,500`.
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
