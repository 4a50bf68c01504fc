//! Tone selection for generated taglines.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Voice the taglines should be written in.
///
/// Serialized as the lowercase name; parsing (serde and `FromStr`) ignores
/// ASCII case and surrounding whitespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Funny,
    #[default]
    Professional,
    Luxury,
    Casual,
}

impl Tone {
    /// Every supported tone, in display order.
    pub const ALL: [Tone; 4] = [Tone::Funny, Tone::Professional, Tone::Luxury, Tone::Casual];

    /// Lowercase name used on the wire and in storage.
    pub fn as_str(self) -> &'static str {
        match self {
            Tone::Funny => "funny",
            Tone::Professional => "professional",
            Tone::Luxury => "luxury",
            Tone::Casual => "casual",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tone name that did not match any supported tone.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown tone `{0}` (expected funny, professional, luxury or casual)")]
pub struct UnknownTone(pub String);

impl FromStr for Tone {
    type Err = UnknownTone;

    /// Parse a tone name, ignoring ASCII case and surrounding whitespace.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim();
        Tone::ALL
            .into_iter()
            .find(|tone| tone.as_str().eq_ignore_ascii_case(normalized))
            .ok_or_else(|| UnknownTone(value.to_string()))
    }
}

impl<'de> Deserialize<'de> for Tone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}
