//! Split axis orientation and mount-time attribute parsing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Orientation of a split container.
///
/// Fixed at construction; a container never changes axis afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitAxis {
    /// Panes arranged left to right.
    Horizontal,
    /// Panes arranged top to bottom.
    Vertical,
}

impl SplitAxis {
    /// Canonical attribute value for this axis.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        }
    }

    /// Parse the host-provided axis attribute.
    ///
    /// The attribute is required and has exactly two legal values. Anything
    /// else is a fatal configuration error raised once at mount.
    pub fn from_attr(value: Option<&str>) -> Result<Self, SplitAxisError> {
        match value {
            None => Err(SplitAxisError::Missing),
            Some(raw) => raw.parse(),
        }
    }
}

impl fmt::Display for SplitAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SplitAxis {
    type Err = SplitAxisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "horizontal" => Ok(Self::Horizontal),
            "vertical" => Ok(Self::Vertical),
            other => Err(SplitAxisError::Invalid {
                value: other.to_string(),
            }),
        }
    }
}

/// Fatal configuration errors for the axis attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SplitAxisError {
    /// The axis attribute was absent.
    Missing,
    /// The axis attribute carried an unrecognized value.
    Invalid { value: String },
}

impl fmt::Display for SplitAxisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => {
                write!(f, "split axis must be specified: horizontal or vertical")
            }
            Self::Invalid { value } => {
                write!(
                    f,
                    "invalid split axis {value:?} (expected horizontal or vertical)"
                )
            }
        }
    }
}

impl std::error::Error for SplitAxisError {}
