use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Duration must not be empty.")]
    DurationEmpty,
    #[error("Invalid duration '{value}'.")]
    InvalidDurationFormat { value: String },
    #[error("Invalid duration '{value}': {source}")]
    InvalidDurationNumber {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("Duration overflow.")]
    DurationOverflow,
    #[error("Invalid duration unit '{unit}'.")]
    InvalidDurationUnit { unit: String },
    #[error("Duration must be > 0.")]
    DurationZero,
    #[error("Value must be >= {min}.")]
    ValueTooSmall { min: u64 },
    #[error("Invalid value: {source}")]
    InvalidNumber {
        #[source]
        source: std::num::ParseIntError,
    },
    #[error(
        "Minimum scroll duration ({min_ms}ms) must not exceed the maximum ({max_ms}ms)."
    )]
    DurationBoundsInverted { min_ms: u128, max_ms: u128 },
    #[error("Invalid ratio '{value}': {source}")]
    InvalidRatio {
        value: String,
        #[source]
        source: std::num::ParseFloatError,
    },
    #[error("Ratio '{value}' must be within 0.0..=1.0.")]
    RatioOutOfRange { value: String },
    #[error("A document path is required (scroll-assist <DOCUMENT>).")]
    MissingDocument,
    #[error("`inspect` takes its own document; drop the one given before it.")]
    DocumentWithInspect,
    #[error("The presentation view needs an interactive terminal; use `inspect` to print stored checkpoints.")]
    NotATerminal,
    #[cfg(test)]
    #[error("Test expectation failed: {message}")]
    TestExpectation { message: &'static str },
    #[cfg(test)]
    #[error("Test expectation failed: {message}: {value}")]
    TestExpectationValue {
        message: &'static str,
        value: String,
    },
}
