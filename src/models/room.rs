//! Defines rooms, the named buckets that transactions are organized into.
//!
//! Rooms are orthogonal to categories: a category describes what a transaction
//! was for (e.g. "Food"), a room describes which space of the user's life it
//! belongs to (e.g. "Personal", "Flat 2B").

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// A named bucket for organizing transactions.
///
/// There is a fixed default room plus a fallback variant for ad hoc labels
/// introduced by transactions. Labels are normalized on creation, so two
/// spellings of the same label always compare equal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Room {
    /// The default room that transactions belong to unless stated otherwise.
    Personal,
    /// A user supplied room label.
    Custom(String),
}

/// The rooms that exist before any transaction has been recorded.
pub const DEFAULT_ROOMS: [Room; 1] = [Room::Personal];

impl Room {
    /// Parse a room from a raw label, normalizing case and whitespace.
    ///
    /// Labels are trimmed and title-cased per word, and labels matching a
    /// default room canonicalize to that variant. An empty or all-whitespace
    /// label parses as the default room.
    pub fn parse(label: &str) -> Self {
        let normalized = normalize_label(label);

        match normalized.as_str() {
            "" | "Personal" => Room::Personal,
            _ => Room::Custom(normalized),
        }
    }

    /// The normalized label for this room.
    pub fn label(&self) -> &str {
        match self {
            Room::Personal => "Personal",
            Room::Custom(label) => label,
        }
    }
}

impl Display for Room {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Trim a label and capitalize the first letter of each word.
fn normalize_label(label: &str) -> String {
    label
        .split_whitespace()
        .map(capitalize_word)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize_word(word: &str) -> String {
    let mut chars = word.chars();

    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod room_tests {
    use super::{DEFAULT_ROOMS, Room};

    #[test]
    fn parse_normalizes_case_and_whitespace() {
        assert_eq!(Room::parse("  flat   2b "), Room::Custom("Flat 2b".to_string()));
        assert_eq!(Room::parse("FOOD"), Room::Custom("Food".to_string()));
    }

    #[test]
    fn parse_canonicalizes_default_room() {
        assert_eq!(Room::parse("personal"), Room::Personal);
        assert_eq!(Room::parse(" PERSONAL "), Room::Personal);
    }

    #[test]
    fn parse_falls_back_to_default_on_empty_label() {
        assert_eq!(Room::parse(""), Room::Personal);
        assert_eq!(Room::parse("   "), Room::Personal);
    }

    #[test]
    fn equal_labels_compare_equal_after_parse() {
        assert_eq!(Room::parse("food"), Room::parse("  Food "));
    }

    #[test]
    fn default_rooms_contains_personal() {
        assert!(DEFAULT_ROOMS.contains(&Room::Personal));
    }
}
