pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Duration string that is neither Go-style nor a day/week/month approximation.
    #[error("invalid duration '{input}': {reason}")]
    InvalidDuration {
        input: String,
        reason: DurationErrorReason,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum DurationErrorReason {
    #[strum(serialize = "empty input")]
    Empty,
    #[strum(serialize = "negative durations are not supported")]
    Negative,
    #[strum(serialize = "malformed number")]
    Number,
    #[strum(serialize = "missing unit")]
    MissingUnit,
    #[strum(serialize = "unknown unit")]
    UnknownUnit,
    #[strum(serialize = "out of range")]
    Overflow,
}

impl Error {
    pub(crate) fn duration(input: &str, reason: DurationErrorReason) -> Self {
        Error::InvalidDuration {
            input: input.to_string(),
            reason,
        }
    }
}
