// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

/// API request to publish a tournament.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTournamentRequest {
    /// The display name.
    pub name: String,
    /// The format tag (`pairs`/`parejas` or `trios`/`tríos`).
    pub format: String,
    /// The tournament day (`YYYY-MM-DD`).
    pub date: String,
    /// Free-text prize description.
    pub prizes: Option<String>,
}

/// A tournament as shown in listings.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TournamentInfo {
    /// The tournament identifier.
    pub tournament_id: i64,
    /// The display name.
    pub name: String,
    /// The format tag (`pairs` or `trios`).
    pub format: String,
    /// The number of players per team.
    pub players_per_team: usize,
    /// The tournament day (`YYYY-MM-DD`).
    pub date: String,
    /// Free-text prize description.
    pub prizes: Option<String>,
    /// The number of teams signed up so far.
    pub registration_count: usize,
    /// When the tournament was published (RFC 3339).
    pub created_at: String,
}

/// API response for a successful tournament creation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CreateTournamentResponse {
    /// The created tournament.
    pub tournament: TournamentInfo,
    /// A success message.
    pub message: String,
}

/// API response listing every tournament.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ListTournamentsResponse {
    /// Tournaments, most recent date first.
    pub tournaments: Vec<TournamentInfo>,
}

/// API request to sign a team up.
///
/// Fields hold exactly what the player typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterTeamRequest {
    /// The tournament to sign up for.
    pub tournament_id: i64,
    /// The responsible player's mobile number.
    pub phone: String,
    /// First player.
    pub player1: String,
    /// Second player.
    pub player2: String,
    /// Third player, required for trios.
    pub player3: Option<String>,
}

/// API response for a successful sign-up.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RegisterTeamResponse {
    /// The stored registration, with the phone masked.
    pub registration: PublicRegistrationInfo,
    /// The tournament the team signed up for.
    pub tournament_id: i64,
    /// Teams signed up including this one.
    pub registration_count: usize,
    /// A success message.
    pub message: String,
}

/// A registration as shown to everyone.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PublicRegistrationInfo {
    /// The registration identifier.
    pub registration_id: i64,
    /// The masked phone, e.g. `0*****456`.
    pub phone: String,
    /// Player names in slot order.
    pub players: Vec<String>,
    /// When the team signed up (RFC 3339).
    pub registered_at: String,
}

/// API response listing the teams of one tournament.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ListRegistrationsResponse {
    /// The tournament.
    pub tournament: TournamentInfo,
    /// Teams in sign-up order.
    pub registrations: Vec<PublicRegistrationInfo>,
}

/// A registration with its real phone number, for organizers.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AdminRegistrationInfo {
    /// The registration identifier.
    pub registration_id: i64,
    /// The phone as entered.
    pub phone: String,
    /// First player.
    pub player1: String,
    /// Second player.
    pub player2: String,
    /// Third player, trios only.
    pub player3: Option<String>,
    /// When the team signed up (RFC 3339).
    pub registered_at: String,
}

/// One tournament and all its teams.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AdminTournamentOverview {
    /// The tournament.
    pub tournament: TournamentInfo,
    /// Teams in sign-up order.
    pub registrations: Vec<AdminRegistrationInfo>,
}

/// API response for the organizer dashboard.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AdminOverviewResponse {
    /// Every tournament, most recent date first.
    pub tournaments: Vec<AdminTournamentOverview>,
    /// Teams across all tournaments.
    pub total_registrations: usize,
}

/// A CSV export of one tournament's registrations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationsCsvExport {
    /// Suggested download name.
    pub filename: String,
    /// The CSV document, header row included.
    pub content: String,
}
