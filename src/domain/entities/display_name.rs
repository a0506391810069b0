use std::fmt;

pub const DISPLAY_NAME_MIN_CHARS: usize = 2;
pub const DISPLAY_NAME_MAX_CHARS: usize = 30;

/// Participant name shown in the call, trimmed with inner whitespace collapsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayName(String);

impl DisplayName {
    /// Normalizes `raw` and returns `None` when the result is outside
    /// 2..=30 characters. Length is counted in Unicode scalar values.
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = raw
            .split(is_separator)
            .filter(|word| !word.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        let len = normalized.chars().count();
        if !(DISPLAY_NAME_MIN_CHARS..=DISPLAY_NAME_MAX_CHARS).contains(&len) {
            return None;
        }
        Some(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Byte order marks count as blank, as browsers treat them when trimming.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

impl fmt::Display for DisplayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
