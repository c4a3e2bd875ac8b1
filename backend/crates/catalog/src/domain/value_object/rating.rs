//! Rating Value Object
//!
//! Age rating of a video. Codes follow the Brazilian advisory rating
//! (ER = especially recommended, L = general audience, then minimum ages).

use derive_more::Display;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Rating {
    #[display("ER")]
    Er,
    #[display("L")]
    L,
    #[display("10")]
    Age10,
    #[display("12")]
    Age12,
    #[display("14")]
    Age14,
    #[display("16")]
    Age16,
    #[display("18")]
    Age18,
}

impl Rating {
    pub const ALL: [Rating; 7] = [
        Rating::Er,
        Rating::L,
        Rating::Age10,
        Rating::Age12,
        Rating::Age14,
        Rating::Age16,
        Rating::Age18,
    ];

    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Er => "ER",
            Self::L => "L",
            Self::Age10 => "10",
            Self::Age12 => "12",
            Self::Age14 => "14",
            Self::Age16 => "16",
            Self::Age18 => "18",
        }
    }

    /// Create from code (case-insensitive), `None` for unknown codes
    pub fn of(code: &str) -> Option<Self> {
        let code = code.trim();
        Self::ALL
            .into_iter()
            .find(|rating| rating.code().eq_ignore_ascii_case(code))
    }
}

impl FromStr for Rating {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::of(s).ok_or_else(|| format!("unknown rating '{s}'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_of_every_code() {
        for rating in Rating::ALL {
            assert_eq!(Rating::of(rating.code()), Some(rating));
            assert_eq!(rating.to_string(), rating.code());
        }
    }

    #[test]
    fn test_of_is_case_insensitive() {
        assert_eq!(Rating::of("er"), Some(Rating::Er));
        assert_eq!(Rating::of(" l "), Some(Rating::L));
    }

    #[test]
    fn test_unknown_code() {
        assert_eq!(Rating::of("21"), None);
        assert!("PG".parse::<Rating>().is_err());
    }
}
