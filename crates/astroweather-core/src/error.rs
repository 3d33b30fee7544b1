//! Error types for AstroWeather

use thiserror::Error;

/// Errors from the small fallible surface of the crate.
///
/// The generators themselves cannot fail; these cover parsing of
/// enum labels and hour values coming in from outside (CLI flags).
#[derive(Error, Debug)]
pub enum AstroError {
    /// Impact label was not one of positive/challenging/neutral
    #[error("Unknown impact: {0}")]
    UnknownImpact(String),

    /// Period label was not one of morning/afternoon/evening
    #[error("Unknown period: {0}")]
    UnknownPeriod(String),

    /// Hour override outside [0,24)
    #[error("Invalid hour {0}, expected 0-23")]
    InvalidHour(u32),
}

/// Validate an hour-of-day coming from the command line.
pub fn check_hour(hour: u32) -> Result<u32, AstroError> {
    if hour < 24 {
        Ok(hour)
    } else {
        Err(AstroError::InvalidHour(hour))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_hour() {
        assert!(check_hour(0).is_ok());
        assert!(check_hour(23).is_ok());
        assert!(check_hour(24).is_err());
    }
}
