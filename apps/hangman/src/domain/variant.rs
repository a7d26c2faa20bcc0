use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Stage-graphic theme chosen at invite time.
///
/// The variant fixes both the mistake budget and the graphic table used to
/// render progress.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    /// Classic gallows, 7 mistakes allowed.
    #[default]
    Gallows,
    /// Weight-lifter, 6 mistakes allowed.
    Exercise,
}

impl Variant {
    pub const ALL: [Variant; 2] = [Variant::Gallows, Variant::Exercise];

    pub const fn max_mistakes(self) -> u8 {
        match self {
            Variant::Gallows => 7,
            Variant::Exercise => 6,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Variant::Gallows => "gallows",
            Variant::Exercise => "exercise",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseVariantError(pub String);

impl fmt::Display for ParseVariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown layout '{}' (expected gallows or exercise)", self.0)
    }
}

impl std::error::Error for ParseVariantError {}

impl FromStr for Variant {
    type Err = ParseVariantError;

    /// Accepts the layout name or the numeric slash-command choice (0/1).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gallows" | "0" => Ok(Variant::Gallows),
            "exercise" | "1" => Ok(Variant::Exercise),
            other => Err(ParseVariantError(other.to_string())),
        }
    }
}
