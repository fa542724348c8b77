// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod apply;
mod command;
mod error;
mod state;

#[cfg(test)]
mod tests;

use campeonatos_domain::{DomainError, Tournament};

// Re-export public types and functions
pub use apply::{apply, apply_create_tournament};
pub use command::Command;
pub use error::CoreError;
pub use state::{State, TransitionResult};

/// Finds a tournament by identifier.
///
/// This is a read-only lookup used before building a `State`.
///
/// # Arguments
///
/// * `tournaments` - The tournaments currently stored
/// * `tournament_id` - The tournament to find
///
/// # Errors
///
/// Returns `DomainError::TournamentNotFound` if no tournament has the identifier.
pub fn validate_tournament_exists(
    tournaments: &[Tournament],
    tournament_id: i64,
) -> Result<&Tournament, DomainError> {
    tournaments
        .iter()
        .find(|t| t.tournament_id == tournament_id)
        .ok_or(DomainError::TournamentNotFound(tournament_id))
}
