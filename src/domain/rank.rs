//! Student ranks and their seniority order

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// Generation of a student in the mentorship chain.
///
/// Variant order is the seniority order: `Alumni` sorts first, `P1` last.
/// Sorting a slice of ranks ascending therefore yields senior-to-junior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rank {
    Alumni,
    I3,
    I2,
    I1,
    P2,
    P1,
}

impl Rank {
    /// All ranks, most senior first.
    pub const ALL: [Rank; 6] = [
        Rank::Alumni,
        Rank::I3,
        Rank::I2,
        Rank::I1,
        Rank::P2,
        Rank::P1,
    ];

    /// Numeric code used by the directory payloads (higher is more senior).
    pub fn code(self) -> u8 {
        match self {
            Rank::P1 => 1,
            Rank::P2 => 2,
            Rank::I1 => 3,
            Rank::I2 => 4,
            Rank::I3 => 5,
            Rank::Alumni => 6,
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|r| i64::from(r.code()) == code)
    }

    /// Short lowercase label, as used in config files.
    pub fn label(self) -> &'static str {
        match self {
            Rank::Alumni => "alumni",
            Rank::I3 => "i3",
            Rank::I2 => "i2",
            Rank::I1 => "i1",
            Rank::P2 => "p2",
            Rank::P1 => "p1",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Rank::Alumni => "Alumni",
            Rank::I3 => "I3",
            Rank::I2 => "I2",
            Rank::I1 => "I1",
            Rank::P2 => "P2",
            Rank::P1 => "P1",
        };
        f.write_str(name)
    }
}

impl FromStr for Rank {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        if let Ok(code) = wanted.parse::<i64>() {
            return Self::from_code(code).ok_or_else(|| DomainError::UnknownRank(s.to_string()));
        }
        Self::ALL
            .into_iter()
            .find(|r| r.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DomainError::UnknownRank(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_all_ranks_when_sorted_then_most_senior_first() {
        let mut ranks = vec![Rank::P1, Rank::Alumni, Rank::I1, Rank::P2, Rank::I3, Rank::I2];
        ranks.sort();
        assert_eq!(ranks, Rank::ALL.to_vec());
    }

    #[test]
    fn given_codes_when_compared_then_higher_code_is_more_senior() {
        for pair in Rank::ALL.windows(2) {
            assert!(pair[0].code() > pair[1].code());
        }
    }

    #[test]
    fn given_label_in_any_case_when_parsing_then_resolves() {
        assert_eq!("I3".parse::<Rank>().unwrap(), Rank::I3);
        assert_eq!(" alumni ".parse::<Rank>().unwrap(), Rank::Alumni);
        assert_eq!("2".parse::<Rank>().unwrap(), Rank::P2);
    }

    #[test]
    fn given_unknown_label_when_parsing_then_errors() {
        assert!(matches!(
            "freshman".parse::<Rank>(),
            Err(DomainError::UnknownRank(_))
        ));
        assert!("42".parse::<Rank>().is_err());
    }
}
