//! Collection naming for the three lifecycle buckets
//!
//! The wall keeps three flat JSON files: pending submissions (labeled
//! `quotes` on the wire for historical reasons), approved quotes, and
//! removed quotes. Every move sources from the approved file.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// The three backing collections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectionKind {
    /// Unreviewed submissions; the list endpoint labels this file `quotes`
    Pending,
    /// Quotes accepted by the operator
    Approved,
    /// Quotes rejected by the operator
    Removed,
}

impl fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Approved => write!(f, "approved"),
            Self::Removed => write!(f, "removed"),
        }
    }
}

/// Where a moved quote lands
///
/// Wire literals are `"quotes"` and `"removed"`. `Quotes` targets the
/// pending-labeled file, matching the historical API contract even though
/// the naming suggests otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveDestination {
    /// Append to the pending-labeled `quotes` file
    Quotes,
    /// Append to the removed file
    Removed,
}

impl MoveDestination {
    /// Parse a wire literal, rejecting anything outside the two allowed values
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        match value {
            "quotes" => Ok(Self::Quotes),
            "removed" => Ok(Self::Removed),
            other => Err(DomainError::InvalidDestination(other.to_string())),
        }
    }

    /// The backing collection this destination writes into
    #[must_use]
    pub const fn target(&self) -> CollectionKind {
        match self {
            Self::Quotes => CollectionKind::Pending,
            Self::Removed => CollectionKind::Removed,
        }
    }
}

impl fmt::Display for MoveDestination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quotes => write!(f, "quotes"),
            Self::Removed => write!(f, "removed"),
        }
    }
}

impl std::str::FromStr for MoveDestination {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_quotes() {
        assert_eq!(
            MoveDestination::parse("quotes").unwrap(),
            MoveDestination::Quotes
        );
    }

    #[test]
    fn parse_accepts_removed() {
        assert_eq!(
            MoveDestination::parse("removed").unwrap(),
            MoveDestination::Removed
        );
    }

    #[test]
    fn parse_rejects_other_literals() {
        for bad in ["approved", "pending", "QUOTES", "", "trash"] {
            assert!(MoveDestination::parse(bad).is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn parse_error_names_the_constraint() {
        let err = MoveDestination::parse("trash").unwrap_err();
        assert_eq!(err.to_string(), "Destination must be 'quotes' or 'removed'");
    }

    #[test]
    fn quotes_destination_targets_pending_file() {
        assert_eq!(MoveDestination::Quotes.target(), CollectionKind::Pending);
    }

    #[test]
    fn removed_destination_targets_removed_file() {
        assert_eq!(MoveDestination::Removed.target(), CollectionKind::Removed);
    }

    #[test]
    fn destination_display_matches_wire_literal() {
        assert_eq!(MoveDestination::Quotes.to_string(), "quotes");
        assert_eq!(MoveDestination::Removed.to_string(), "removed");
    }

    #[test]
    fn destination_from_str() {
        let dest: MoveDestination = "removed".parse().unwrap();
        assert_eq!(dest, MoveDestination::Removed);
    }

    #[test]
    fn collection_kind_display() {
        assert_eq!(CollectionKind::Pending.to_string(), "pending");
        assert_eq!(CollectionKind::Approved.to_string(), "approved");
        assert_eq!(CollectionKind::Removed.to_string(), "removed");
    }

    #[test]
    fn destination_serde_round_trip() {
        let json = serde_json::to_string(&MoveDestination::Quotes).unwrap();
        assert_eq!(json, r#""quotes""#);
        let back: MoveDestination = serde_json::from_str(&json).unwrap();
        assert_eq!(back, MoveDestination::Quotes);
    }
}
