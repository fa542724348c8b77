// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary for the Campeonatos sign-up service.
//!
//! Translates requests into core commands, enforces the admin allow-list
//! and maps domain, core and persistence errors into [`ApiError`].

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
#![allow(clippy::multiple_crate_versions)]

mod auth;
mod csv_export;
mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use auth::{AdminPolicy, AdminPolicyError, AuthenticatedActor, AuthorizationService, Role};
pub use csv_export::{export_filename, render_registrations_csv};
pub use error::{
    ApiError, AuthError, translate_core_error, translate_domain_error,
    translate_persistence_error, translate_rejection,
};
pub use handlers::{
    admin_overview, create_tournament, export_registrations_csv, list_registrations,
    list_tournaments, public_registration_info, register_team, tournament_info,
};
pub use request_response::{
    AdminOverviewResponse, AdminRegistrationInfo, AdminTournamentOverview,
    CreateTournamentRequest, CreateTournamentResponse, ListRegistrationsResponse,
    ListTournamentsResponse, PublicRegistrationInfo, RegisterTeamRequest, RegisterTeamResponse,
    RegistrationsCsvExport, TournamentInfo,
};
