use std::str::FromStr;

use crate::{Error, WALKING_CALORIES_COEFFICIENT};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActivityKind {
    /// `walking` or `ходьба`
    Walking,
    /// `running` or `бег`
    Running,
}

impl ActivityKind {
    /// Multiplier applied to calories of running with the same speed and duration
    pub const fn calories_coefficient(self) -> f64 {
        match self {
            Self::Walking => WALKING_CALORIES_COEFFICIENT,
            Self::Running => 1.0,
        }
    }
}

impl FromStr for ActivityKind {
    type Err = Error;

    /// Case insensitive, surrounding whitespace is ignored
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();

        match label.to_lowercase().as_str() {
            "walking" | "ходьба" => Ok(Self::Walking),
            "running" | "бег" => Ok(Self::Running),
            _ => Err(Error::UnknownActivity(label.to_owned())),
        }
    }
}

/// Activity kind together with label as user wrote it
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Activity {
    pub kind: ActivityKind,
    pub label: String,
}

impl FromStr for Activity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self {
            kind: s.parse::<ActivityKind>()?,
            label: s.trim().to_owned(),
        })
    }
}
