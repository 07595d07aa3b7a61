//! Metro line type.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Error returned when resolving an unknown line number.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown metro line number: {0}")]
pub struct UnknownLine(pub u8);

/// One of the three Cairo Metro lines.
///
/// The set of lines is fixed, so each variant carries its constants
/// (display name, signage colour, line number) directly.
///
/// # Examples
///
/// ```
/// use metro_server::domain::MetroLine;
///
/// let line = MetroLine::from_number(2).unwrap();
/// assert_eq!(line, MetroLine::Line2);
/// assert_eq!(line.display_name(), "Line 2");
/// assert_eq!(line.color_hex(), "#FFC107");
///
/// assert!(MetroLine::from_number(4).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MetroLine {
    Line1,
    Line2,
    Line3,
}

impl MetroLine {
    /// All lines, in line-number order.
    pub const ALL: [MetroLine; 3] = [MetroLine::Line1, MetroLine::Line2, MetroLine::Line3];

    /// Resolve a line from its number (1-3).
    pub fn from_number(number: u8) -> Result<Self, UnknownLine> {
        match number {
            1 => Ok(MetroLine::Line1),
            2 => Ok(MetroLine::Line2),
            3 => Ok(MetroLine::Line3),
            other => Err(UnknownLine(other)),
        }
    }

    /// Line number as printed on signage.
    pub const fn number(self) -> u8 {
        match self {
            MetroLine::Line1 => 1,
            MetroLine::Line2 => 2,
            MetroLine::Line3 => 3,
        }
    }

    /// Human-readable name, e.g. "Line 1".
    pub const fn display_name(self) -> &'static str {
        match self {
            MetroLine::Line1 => "Line 1",
            MetroLine::Line2 => "Line 2",
            MetroLine::Line3 => "Line 3",
        }
    }

    /// Line colour as a `#RRGGBB` hex string.
    pub const fn color_hex(self) -> &'static str {
        match self {
            MetroLine::Line1 => "#E91E63",
            MetroLine::Line2 => "#FFC107",
            MetroLine::Line3 => "#4CAF50",
        }
    }
}

impl fmt::Display for MetroLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl Serialize for MetroLine {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.number())
    }
}

impl<'de> Deserialize<'de> for MetroLine {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let number = u8::deserialize(deserializer)?;
        MetroLine::from_number(number).map_err(serde::de::Error::custom)
    }
}
