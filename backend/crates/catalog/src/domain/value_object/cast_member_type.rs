//! Cast Member Type Value Object

use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Role of a cast member in a video
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CastMemberType {
    #[display("ACTOR")]
    Actor,
    #[display("DIRECTOR")]
    Director,
}

impl CastMemberType {
    /// Get string code for serialization/API
    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Actor => "ACTOR",
            Self::Director => "DIRECTOR",
        }
    }

    /// Create from string code (case-insensitive)
    pub fn of(code: &str) -> Option<Self> {
        match code.trim().to_ascii_uppercase().as_str() {
            "ACTOR" => Some(Self::Actor),
            "DIRECTOR" => Some(Self::Director),
            _ => None,
        }
    }
}

impl FromStr for CastMemberType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::of(s).ok_or_else(|| format!("unknown cast member type '{s}'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_of() {
        assert_eq!(CastMemberType::of("ACTOR"), Some(CastMemberType::Actor));
        assert_eq!(CastMemberType::of("director"), Some(CastMemberType::Director));
        assert_eq!(CastMemberType::of("writer"), None);
    }

    #[test]
    fn test_display_matches_code() {
        assert_eq!(CastMemberType::Actor.to_string(), "ACTOR");
        assert_eq!(CastMemberType::Director.to_string(), CastMemberType::Director.code());
    }

    #[test]
    fn test_serde() {
        let json = serde_json::to_string(&CastMemberType::Director).unwrap();
        assert_eq!(json, "\"DIRECTOR\"");
        let parsed: CastMemberType = serde_json::from_str("\"ACTOR\"").unwrap();
        assert_eq!(parsed, CastMemberType::Actor);
    }
}
