// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::{DomainError, RegistrationRejection};
use crate::types::{NewTournament, Registration, RegistrationCandidate, Tournament};
use std::collections::HashSet;

/// Number of digits in a valid mobile number.
pub const PHONE_LENGTH: usize = 9;

/// Prefix every valid mobile number starts with.
pub const PHONE_PREFIX: &str = "09";

/// Outcome of validating a registration candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    /// The candidate may be stored.
    Accepted,
    /// The candidate violates a rule.
    Rejected(RegistrationRejection),
}

impl ValidationResult {
    /// Returns `true` if the candidate was accepted.
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }

    /// Converts the outcome into a `Result`.
    ///
    /// # Errors
    ///
    /// Returns the rejection reason if the candidate was rejected.
    pub fn into_result(self) -> Result<(), RegistrationRejection> {
        match self {
            Self::Accepted => Ok(()),
            Self::Rejected(reason) => Err(reason),
        }
    }
}

/// Checks that a phone is a Uruguayan mobile number: `09` followed by seven digits.
///
/// No normalization is applied. Spaces, dashes or a country code make the
/// phone invalid.
#[must_use]
pub fn validate_phone(phone: &str) -> bool {
    phone.len() == PHONE_LENGTH
        && phone.starts_with(PHONE_PREFIX)
        && phone.bytes().all(|b| b.is_ascii_digit())
}

/// Normalizes a player name for duplicate comparison.
///
/// Lowercases and trims leading/trailing whitespace. Internal whitespace and
/// accents are left alone, so `José` and `Jose` are different players.
#[must_use]
pub fn normalize_player_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Decides whether a team may be registered in a tournament.
///
/// `existing` must already be limited to registrations of `tournament`.
/// Checks run in a fixed order and the first failing check wins:
///
/// 1. phone format
/// 2. player 1 and player 2 present
/// 3. player 3 present for trios
/// 4. phone not already used in the tournament
/// 5. no candidate player already on another team
///
/// This function is pure and deterministic.
#[must_use]
pub fn validate_registration(
    candidate: &RegistrationCandidate,
    tournament: &Tournament,
    existing: &[Registration],
) -> ValidationResult {
    match check_registration(candidate, tournament, existing) {
        Ok(()) => ValidationResult::Accepted,
        Err(reason) => ValidationResult::Rejected(reason),
    }
}

fn check_registration(
    candidate: &RegistrationCandidate,
    tournament: &Tournament,
    existing: &[Registration],
) -> Result<(), RegistrationRejection> {
    if !validate_phone(&candidate.phone) {
        return Err(RegistrationRejection::InvalidPhone);
    }

    // Pairs never look at the third slot
    let players: Vec<&str> = candidate.players_for(tournament.format);

    if let Some(index) = players.iter().position(|name| name.trim().is_empty()) {
        return Err(RegistrationRejection::MissingPlayer { slot: index + 1 });
    }

    if existing.iter().any(|r| r.phone == candidate.phone) {
        return Err(RegistrationRejection::DuplicatePhone);
    }

    let registered: HashSet<String> = existing
        .iter()
        .flat_map(Registration::players)
        .map(normalize_player_name)
        .collect();

    if let Some(name) = players
        .into_iter()
        .find(|name| registered.contains(&normalize_player_name(name)))
    {
        return Err(RegistrationRejection::DuplicatePlayer(name.to_string()));
    }

    Ok(())
}

/// Validates the fields of a tournament before it is created.
///
/// # Errors
///
/// Returns `DomainError::InvalidTournamentName` if the name is blank.
pub fn validate_tournament_fields(tournament: &NewTournament) -> Result<(), DomainError> {
    if tournament.name.trim().is_empty() {
        return Err(DomainError::InvalidTournamentName(String::from(
            "Name cannot be empty",
        )));
    }

    Ok(())
}
