//! Network construction errors.

use crate::domain::MetroLine;

/// Why a station network definition was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NetworkError {
    /// A line was declared more than once
    #[error("{0} is declared more than once")]
    DuplicateLine(MetroLine),

    /// A line needs at least two stations to go anywhere
    #[error("{0} must have at least two stations")]
    LineTooShort(MetroLine),

    /// The same station name appears twice on one line
    #[error("station {station} appears more than once on {line}")]
    DuplicateStation { line: MetroLine, station: String },

    /// An interchange is not served by two or more lines
    #[error("interchange {0} is not on at least two lines")]
    NotAnInterchange(String),

    /// An interchange was listed twice
    #[error("interchange {0} is listed more than once")]
    DuplicateInterchange(String),

    /// Coordinates were given for a station no line serves
    #[error("coordinates given for unknown station {0}")]
    UnknownStation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = NetworkError::LineTooShort(MetroLine::Line2);
        assert_eq!(err.to_string(), "Line 2 must have at least two stations");

        let err = NetworkError::DuplicateStation {
            line: MetroLine::Line1,
            station: "Sadat".into(),
        };
        assert_eq!(
            err.to_string(),
            "station Sadat appears more than once on Line 1"
        );

        let err = NetworkError::NotAnInterchange("Opera".into());
        assert_eq!(
            err.to_string(),
            "interchange Opera is not on at least two lines"
        );
    }
}
