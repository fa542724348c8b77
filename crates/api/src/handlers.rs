// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request handlers.
//!
//! Every handler is synchronous and takes the persistence adapter by
//! mutable reference. The caller owns locking: a registration must run
//! its read-validate-write sequence under one lock.

use std::collections::HashMap;

use campeonatos::{
    Command, State, TransitionResult, apply, apply_create_tournament, validate_tournament_exists,
};
use campeonatos_domain::{
    NewTournament, Registration, RegistrationCandidate, Tournament, TournamentFormat,
    obfuscate_phone, parse_tournament_date,
};
use campeonatos_persistence::Persistence;
use time::Date;
use tracing::{info, warn};

use crate::auth::{AdminPolicy, AuthenticatedActor, AuthorizationService};
use crate::csv_export::{export_filename, render_registrations_csv};
use crate::error::{
    ApiError, translate_core_error, translate_domain_error, translate_persistence_error,
};
use crate::request_response::{
    AdminOverviewResponse, AdminRegistrationInfo, AdminTournamentOverview,
    CreateTournamentRequest, CreateTournamentResponse, ListRegistrationsResponse,
    ListTournamentsResponse, PublicRegistrationInfo, RegisterTeamRequest, RegisterTeamResponse,
    RegistrationsCsvExport, TournamentInfo,
};

/// Builds the listing view of a tournament.
#[must_use]
pub fn tournament_info(tournament: &Tournament, registration_count: usize) -> TournamentInfo {
    TournamentInfo {
        tournament_id: tournament.tournament_id,
        name: tournament.name.clone(),
        format: tournament.format.as_str().to_string(),
        players_per_team: tournament.format.player_slots(),
        date: tournament.date.to_string(),
        prizes: tournament.prizes.clone(),
        registration_count,
        created_at: tournament.created_at.clone(),
    }
}

/// Builds the public view of a registration. The phone is masked.
#[must_use]
pub fn public_registration_info(registration: &Registration) -> PublicRegistrationInfo {
    PublicRegistrationInfo {
        registration_id: registration.registration_id,
        phone: obfuscate_phone(&registration.phone),
        players: registration.players().map(ToString::to_string).collect(),
        registered_at: registration.registered_at.clone(),
    }
}

fn admin_registration_info(registration: &Registration) -> AdminRegistrationInfo {
    AdminRegistrationInfo {
        registration_id: registration.registration_id,
        phone: registration.phone.clone(),
        player1: registration.player1.clone(),
        player2: registration.player2.clone(),
        player3: registration.player3.clone(),
        registered_at: registration.registered_at.clone(),
    }
}

/// Publishes a new tournament.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `request` - The tournament as entered by the organizer
/// * `actor` - The requesting actor
/// * `policy` - The admin allow-list
///
/// # Errors
///
/// Returns an error if:
/// - The actor is anonymous or not an admin
/// - The format tag or date cannot be parsed
/// - The name is blank
/// - The tournament cannot be stored
pub fn create_tournament(
    persistence: &mut Persistence,
    request: &CreateTournamentRequest,
    actor: &AuthenticatedActor,
    policy: &AdminPolicy,
) -> Result<CreateTournamentResponse, ApiError> {
    AuthorizationService::authorize_admin_action(actor, policy, "create_tournament")?;

    let format: TournamentFormat = request.format.parse().map_err(translate_domain_error)?;
    let date: Date = parse_tournament_date(&request.date).map_err(translate_domain_error)?;

    let command: Command = Command::CreateTournament {
        tournament: NewTournament::new(&request.name, format, date, request.prizes.as_deref()),
    };
    let new_tournament: NewTournament =
        apply_create_tournament(command).map_err(translate_core_error)?;

    let tournament: Tournament = persistence
        .create_tournament(new_tournament)
        .map_err(translate_persistence_error)?;

    info!(
        tournament_id = tournament.tournament_id,
        name = %tournament.name,
        created_by = actor.email.as_deref().unwrap_or_default(),
        "Tournament published"
    );

    Ok(CreateTournamentResponse {
        message: format!("Tournament '{}' created", tournament.name),
        tournament: tournament_info(&tournament, 0),
    })
}

/// Lists every tournament with its team count, most recent date first.
///
/// # Errors
///
/// Returns an error if the tournaments cannot be loaded.
pub fn list_tournaments(persistence: &mut Persistence) -> Result<ListTournamentsResponse, ApiError> {
    let tournaments: Vec<Tournament> = persistence
        .list_tournaments()
        .map_err(translate_persistence_error)?;
    let counts: HashMap<i64, usize> = persistence
        .count_registrations_by_tournament()
        .map_err(translate_persistence_error)?
        .into_iter()
        .collect();

    Ok(ListTournamentsResponse {
        tournaments: tournaments
            .iter()
            .map(|t| tournament_info(t, counts.get(&t.tournament_id).copied().unwrap_or(0)))
            .collect(),
    })
}

/// Lists the teams of one tournament with masked phones.
///
/// # Errors
///
/// Returns an error if the tournament does not exist or cannot be loaded.
pub fn list_registrations(
    persistence: &mut Persistence,
    tournament_id: i64,
) -> Result<ListRegistrationsResponse, ApiError> {
    let tournament: Tournament = persistence
        .get_tournament(tournament_id)
        .map_err(translate_persistence_error)?;
    let registrations: Vec<Registration> = persistence
        .list_registrations(tournament_id)
        .map_err(translate_persistence_error)?;

    Ok(ListRegistrationsResponse {
        tournament: tournament_info(&tournament, registrations.len()),
        registrations: registrations.iter().map(public_registration_info).collect(),
    })
}

/// Signs a team up for a tournament.
///
/// Loads the tournament and its registrations, validates the candidate
/// against them and stores the accepted team. Callers sharing the
/// persistence adapter must hold its lock for the whole call.
///
/// # Errors
///
/// Returns an error if:
/// - The tournament does not exist
/// - The candidate is rejected (invalid phone, missing player, duplicate phone or player)
/// - The registration cannot be stored
pub fn register_team(
    persistence: &mut Persistence,
    request: &RegisterTeamRequest,
) -> Result<RegisterTeamResponse, ApiError> {
    let tournament: Tournament = persistence
        .get_tournament(request.tournament_id)
        .map_err(translate_persistence_error)?;
    let existing: Vec<Registration> = persistence
        .list_registrations(request.tournament_id)
        .map_err(translate_persistence_error)?;

    let state: State = State::for_tournament(tournament, &existing);

    let command: Command = Command::RegisterTeam {
        candidate: RegistrationCandidate::new(
            &request.phone,
            &request.player1,
            &request.player2,
            request.player3.as_deref(),
        ),
    };

    let transition: TransitionResult = apply(&state, command).map_err(|e| {
        warn!(
            tournament_id = state.tournament.tournament_id,
            error = %e,
            "Registration rejected"
        );
        translate_core_error(e)
    })?;

    let registration: Registration = persistence
        .create_registration(transition.new_registration)
        .map_err(translate_persistence_error)?;

    let registration_count: usize = state.registration_count() + 1;

    info!(
        tournament_id = state.tournament.tournament_id,
        registration_id = registration.registration_id,
        registration_count,
        "Team registered"
    );

    Ok(RegisterTeamResponse {
        registration: public_registration_info(&registration),
        tournament_id: state.tournament.tournament_id,
        registration_count,
        message: format!("Team registered for '{}'", state.tournament.name),
    })
}

/// Returns every tournament with its full, unmasked registrations.
///
/// # Errors
///
/// Returns an error if the actor is not an admin or the data cannot be loaded.
pub fn admin_overview(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
    policy: &AdminPolicy,
) -> Result<AdminOverviewResponse, ApiError> {
    AuthorizationService::authorize_admin_action(actor, policy, "admin_overview")?;

    let tournaments: Vec<Tournament> = persistence
        .list_tournaments()
        .map_err(translate_persistence_error)?;
    let registrations: Vec<Registration> = persistence
        .list_all_registrations()
        .map_err(translate_persistence_error)?;

    let overviews: Vec<AdminTournamentOverview> = tournaments
        .into_iter()
        .map(|tournament| {
            let state: State = State::for_tournament(tournament, &registrations);
            AdminTournamentOverview {
                tournament: tournament_info(&state.tournament, state.registration_count()),
                registrations: state
                    .registrations
                    .iter()
                    .map(admin_registration_info)
                    .collect(),
            }
        })
        .collect();

    Ok(AdminOverviewResponse {
        tournaments: overviews,
        total_registrations: registrations.len(),
    })
}

/// Exports one tournament's registrations as CSV.
///
/// # Errors
///
/// Returns an error if the actor is not an admin, the tournament does not
/// exist, or the export cannot be produced.
pub fn export_registrations_csv(
    persistence: &mut Persistence,
    tournament_id: i64,
    actor: &AuthenticatedActor,
    policy: &AdminPolicy,
) -> Result<RegistrationsCsvExport, ApiError> {
    AuthorizationService::authorize_admin_action(actor, policy, "export_registrations")?;

    let tournaments: Vec<Tournament> = persistence
        .list_tournaments()
        .map_err(translate_persistence_error)?;
    let tournament: &Tournament =
        validate_tournament_exists(&tournaments, tournament_id).map_err(translate_domain_error)?;
    let registrations: Vec<Registration> = persistence
        .list_registrations(tournament_id)
        .map_err(translate_persistence_error)?;

    let content: String = render_registrations_csv(tournament, &registrations)?;

    info!(
        tournament_id,
        rows = registrations.len(),
        exported_by = actor.email.as_deref().unwrap_or_default(),
        "Registrations exported"
    );

    Ok(RegistrationsCsvExport {
        filename: export_filename(tournament),
        content,
    })
}
