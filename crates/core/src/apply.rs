// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::state::{State, TransitionResult};
use campeonatos_domain::{
    DomainError, NewRegistration, NewTournament, validate_registration,
    validate_tournament_fields,
};

/// Applies a tournament creation command.
///
/// Tournaments are global, so this does not need a scoped `State`.
///
/// # Arguments
///
/// * `command` - Must be `Command::CreateTournament`
///
/// # Returns
///
/// * `Ok(NewTournament)` ready to be stored
/// * `Err(CoreError)` if the command is invalid
///
/// # Errors
///
/// Returns an error if:
/// - The tournament name is blank
/// - The command is not a tournament creation
pub fn apply_create_tournament(command: Command) -> Result<NewTournament, CoreError> {
    match command {
        Command::CreateTournament { tournament } => {
            validate_tournament_fields(&tournament)?;
            Ok(tournament)
        }
        Command::RegisterTeam { .. } => Err(CoreError::Internal(String::from(
            "apply_create_tournament called with RegisterTeam",
        ))),
    }
}

/// Applies a command to a tournament-scoped state.
///
/// The state is never modified. On success the caller receives the
/// registration to persist; the stored record gets its id and timestamp
/// from storage.
///
/// # Arguments
///
/// * `state` - The current tournament snapshot (immutable)
/// * `command` - Must be `Command::RegisterTeam`
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the registration to store
/// * `Err(CoreError)` if the registration is rejected
///
/// # Errors
///
/// Returns an error if:
/// - The candidate fails any registration rule
/// - The command is not a team registration
pub fn apply(state: &State, command: Command) -> Result<TransitionResult, CoreError> {
    match command {
        Command::RegisterTeam { candidate } => {
            validate_registration(&candidate, &state.tournament, &state.registrations)
                .into_result()
                .map_err(DomainError::from)?;

            let new_registration: NewRegistration =
                candidate.into_new_registration(&state.tournament);

            Ok(TransitionResult { new_registration })
        }
        Command::CreateTournament { .. } => Err(CoreError::Internal(String::from(
            "apply called with CreateTournament",
        ))),
    }
}
