use serde::Deserialize;

/// Maximum number of generated turns in a debate. Always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "RawTurnLimit")]
pub struct TurnLimit(u32);

impl TurnLimit {
    /// Limit used when the configured value is missing or unusable.
    pub const DEFAULT: TurnLimit = TurnLimit(12);

    /// Builds a limit from a numeric input, falling back to the default for
    /// zero or negative values.
    pub fn from_count(count: i64) -> Self {
        if count < 1 {
            return Self::DEFAULT;
        }
        Self(u32::try_from(count).unwrap_or(u32::MAX))
    }

    /// Parses free-form user input (form field, CLI flag, config string).
    pub fn parse(input: &str) -> Self {
        input
            .trim()
            .parse::<i64>()
            .map(Self::from_count)
            .unwrap_or(Self::DEFAULT)
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

impl Default for TurnLimit {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl std::fmt::Display for TurnLimit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTurnLimit {
    Count(i64),
    Text(String),
}

impl From<RawTurnLimit> for TurnLimit {
    fn from(raw: RawTurnLimit) -> Self {
        match raw {
            RawTurnLimit::Count(count) => TurnLimit::from_count(count),
            RawTurnLimit::Text(text) => TurnLimit::parse(&text),
        }
    }
}
