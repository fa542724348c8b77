// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// Reasons a team registration is refused.
///
/// Every rejection is a user-correctable condition: the caller shows the
/// reason and lets the player fix the form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegistrationRejection {
    /// The phone is not a 9-digit number starting with `09`.
    InvalidPhone,
    /// A required player slot is empty.
    MissingPlayer {
        /// The 1-based slot that is missing.
        slot: usize,
    },
    /// Another team in the same tournament already uses this phone.
    DuplicatePhone,
    /// The player is already on another team in the same tournament.
    ///
    /// Carries the name as the candidate typed it.
    DuplicatePlayer(String),
}

impl RegistrationRejection {
    /// Returns a stable identifier for the violated rule.
    #[must_use]
    pub const fn rule(&self) -> &'static str {
        match self {
            Self::InvalidPhone => "invalid_phone",
            Self::MissingPlayer { .. } => "missing_player",
            Self::DuplicatePhone => "duplicate_phone",
            Self::DuplicatePlayer(_) => "duplicate_player",
        }
    }
}

impl std::fmt::Display for RegistrationRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPhone => write!(f, "Phone must have the form 09XXXXXXX"),
            Self::MissingPlayer { slot } => write!(f, "Player {slot} is missing"),
            Self::DuplicatePhone => {
                write!(f, "Phone is already registered in this tournament")
            }
            Self::DuplicatePlayer(name) => {
                write!(f, "Player '{name}' is already registered in this tournament")
            }
        }
    }
}

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Tournament name is empty.
    InvalidTournamentName(String),
    /// Tournament format tag is not recognized.
    InvalidTournamentFormat(String),
    /// Tournament does not exist.
    TournamentNotFound(i64),
    /// Failed to parse date from string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// A team registration was refused.
    RegistrationRejected(RegistrationRejection),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTournamentName(msg) => write!(f, "Invalid tournament name: {msg}"),
            Self::InvalidTournamentFormat(tag) => {
                write!(
                    f,
                    "Invalid tournament format '{tag}'. Must be 'pairs' or 'trios'"
                )
            }
            Self::TournamentNotFound(id) => write!(f, "Tournament {id} not found"),
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
            Self::RegistrationRejected(reason) => {
                write!(f, "Registration rejected: {reason}")
            }
        }
    }
}

impl std::error::Error for DomainError {}

impl From<RegistrationRejection> for DomainError {
    fn from(reason: RegistrationRejection) -> Self {
        Self::RegistrationRejected(reason)
    }
}
