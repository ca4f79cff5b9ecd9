use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// ASPRS classification codes that can be selected for import.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[repr(u8)]
pub enum Classification {
    #[default]
    Ground = 2,
    LowVegetation = 3,
    MediumVegetation = 4,
    HighVegetation = 5,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown classification '{0}', expected ground, low-vegetation, medium-vegetation, high-vegetation or a code in 2..=5")]
pub struct UnknownClassification(pub String);

impl Classification {
    pub const ALL: [Classification; 4] = [
        Classification::Ground,
        Classification::LowVegetation,
        Classification::MediumVegetation,
        Classification::HighVegetation,
    ];

    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            Classification::Ground => "ground",
            Classification::LowVegetation => "low-vegetation",
            Classification::MediumVegetation => "medium-vegetation",
            Classification::HighVegetation => "high-vegetation",
        }
    }

    pub fn matches(self, code: u8) -> bool {
        self.code() == code
    }
}

impl TryFrom<u8> for Classification {
    type Error = UnknownClassification;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Classification::ALL
            .into_iter()
            .find(|c| c.code() == code)
            .ok_or_else(|| UnknownClassification(code.to_string()))
    }
}

impl FromStr for Classification {
    type Err = UnknownClassification;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['_', ' '], "-");
        if let Ok(code) = normalized.parse::<u8>() {
            return Classification::try_from(code);
        }
        Classification::ALL
            .into_iter()
            .find(|c| c.name() == normalized)
            .ok_or_else(|| UnknownClassification(s.to_string()))
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.code())
    }
}
