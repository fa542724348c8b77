// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::Date;
use time::macros::format_description;

/// The team size of a tournament.
///
/// The format fixes how many player slots every registration must fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TournamentFormat {
    /// Teams of two players.
    Pairs,
    /// Teams of three players.
    Trios,
}

impl TournamentFormat {
    /// Returns the number of player slots a registration must fill.
    #[must_use]
    pub const fn player_slots(&self) -> usize {
        match self {
            Self::Pairs => 2,
            Self::Trios => 3,
        }
    }

    /// Converts this format to its storage representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pairs => "pairs",
            Self::Trios => "trios",
        }
    }
}

impl FromStr for TournamentFormat {
    type Err = DomainError;

    /// Parses a format tag.
    ///
    /// Accepts the English tags as well as the Spanish `parejas`/`trios`
    /// used by the club, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pairs" | "parejas" => Ok(Self::Pairs),
            "trios" | "tríos" => Ok(Self::Trios),
            _ => Err(DomainError::InvalidTournamentFormat(s.to_string())),
        }
    }
}

impl std::fmt::Display for TournamentFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parses a tournament date in `YYYY-MM-DD` form.
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if the string is not a valid calendar date.
pub fn parse_tournament_date(value: &str) -> Result<Date, DomainError> {
    Date::parse(value.trim(), format_description!("[year]-[month]-[day]")).map_err(|e| {
        DomainError::DateParseError {
            date_string: value.to_string(),
            error: e.to_string(),
        }
    })
}

/// A tournament payload that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTournament {
    /// The display name.
    pub name: String,
    /// The team size.
    pub format: TournamentFormat,
    /// The day the tournament is played.
    pub date: Date,
    /// Free-text prize description.
    pub prizes: Option<String>,
}

impl NewTournament {
    /// Creates a new tournament payload.
    ///
    /// Blank prize text is stored as absent.
    #[must_use]
    pub fn new(name: &str, format: TournamentFormat, date: Date, prizes: Option<&str>) -> Self {
        Self {
            name: name.trim().to_string(),
            format,
            date,
            prizes: prizes
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(ToString::to_string),
        }
    }
}

/// A stored tournament.
///
/// Tournaments are created once by an admin and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tournament {
    /// The identifier assigned by storage.
    pub tournament_id: i64,
    /// The display name.
    pub name: String,
    /// The team size.
    pub format: TournamentFormat,
    /// The day the tournament is played.
    pub date: Date,
    /// Free-text prize description.
    pub prizes: Option<String>,
    /// Server-assigned creation timestamp (RFC 3339).
    pub created_at: String,
}

impl Tournament {
    /// Builds a stored tournament from a payload and the values assigned by storage.
    #[must_use]
    pub fn from_new(tournament_id: i64, created_at: String, new: NewTournament) -> Self {
        Self {
            tournament_id,
            name: new.name,
            format: new.format,
            date: new.date,
            prizes: new.prizes,
            created_at,
        }
    }
}

/// A team sign-up as submitted by a player, before validation.
///
/// Fields hold exactly what was typed. Nothing is trimmed or normalized here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationCandidate {
    /// The responsible player's mobile number.
    pub phone: String,
    /// First player.
    pub player1: String,
    /// Second player.
    pub player2: String,
    /// Third player, only meaningful for trios.
    pub player3: Option<String>,
}

impl RegistrationCandidate {
    /// Creates a new candidate.
    #[must_use]
    pub fn new(phone: &str, player1: &str, player2: &str, player3: Option<&str>) -> Self {
        Self {
            phone: phone.to_string(),
            player1: player1.to_string(),
            player2: player2.to_string(),
            player3: player3.map(ToString::to_string),
        }
    }

    /// Returns the player slots relevant for `format`, in slot order.
    ///
    /// For pairs the third slot is ignored whatever was supplied. For trios
    /// a missing third player is reported as an empty name.
    #[must_use]
    pub fn players_for(&self, format: TournamentFormat) -> Vec<&str> {
        let mut players: Vec<&str> = vec![self.player1.as_str(), self.player2.as_str()];
        if format == TournamentFormat::Trios {
            players.push(self.player3.as_deref().unwrap_or(""));
        }
        players
    }

    /// Converts an accepted candidate into the payload to store.
    ///
    /// Names are trimmed and the third slot is dropped for pairs.
    /// Call this only after `validate_registration` accepted the candidate.
    #[must_use]
    pub fn into_new_registration(self, tournament: &Tournament) -> NewRegistration {
        let player3: Option<String> = match tournament.format {
            TournamentFormat::Pairs => None,
            TournamentFormat::Trios => self.player3.map(|p| p.trim().to_string()),
        };

        NewRegistration {
            tournament_id: tournament.tournament_id,
            phone: self.phone,
            player1: self.player1.trim().to_string(),
            player2: self.player2.trim().to_string(),
            player3,
        }
    }
}

/// A validated registration that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRegistration {
    /// The tournament this team signs up for.
    pub tournament_id: i64,
    /// The responsible player's mobile number.
    pub phone: String,
    /// First player.
    pub player1: String,
    /// Second player.
    pub player2: String,
    /// Third player, present only for trios.
    pub player3: Option<String>,
}

/// A stored registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    /// The identifier assigned by storage.
    pub registration_id: i64,
    /// The tournament this team signed up for.
    pub tournament_id: i64,
    /// The responsible player's mobile number.
    pub phone: String,
    /// First player.
    pub player1: String,
    /// Second player.
    pub player2: String,
    /// Third player, present only for trios.
    pub player3: Option<String>,
    /// Server-assigned registration timestamp (RFC 3339).
    pub registered_at: String,
}

impl Registration {
    /// Builds a stored registration from a payload and the values assigned by storage.
    #[must_use]
    pub fn from_new(registration_id: i64, registered_at: String, new: NewRegistration) -> Self {
        Self {
            registration_id,
            tournament_id: new.tournament_id,
            phone: new.phone,
            player1: new.player1,
            player2: new.player2,
            player3: new.player3,
            registered_at,
        }
    }

    /// Returns every populated player slot.
    pub fn players(&self) -> impl Iterator<Item = &str> {
        [
            Some(self.player1.as_str()),
            Some(self.player2.as_str()),
            self.player3.as_deref(),
        ]
        .into_iter()
        .flatten()
        .filter(|name| !name.is_empty())
    }
}
