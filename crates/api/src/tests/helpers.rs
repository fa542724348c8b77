// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use campeonatos_persistence::Persistence;

use crate::{
    AdminPolicy, AuthenticatedActor, CreateTournamentRequest, RegisterTeamRequest,
    create_tournament,
};

pub const ADMIN_EMAIL: &str = "organiza@club.uy";

pub fn create_test_policy() -> AdminPolicy {
    AdminPolicy::new([ADMIN_EMAIL]).unwrap()
}

pub fn create_test_admin() -> AuthenticatedActor {
    AuthenticatedActor::with_email(ADMIN_EMAIL)
}

pub fn create_test_visitor() -> AuthenticatedActor {
    AuthenticatedActor::with_email("jugador@gmail.com")
}

pub fn create_test_tournament_request(name: &str, format: &str, date: &str) -> CreateTournamentRequest {
    CreateTournamentRequest {
        name: name.to_string(),
        format: format.to_string(),
        date: date.to_string(),
        prizes: Some(String::from("Canasta de productos")),
    }
}

pub fn create_test_register_request(
    tournament_id: i64,
    phone: &str,
    players: &[&str],
) -> RegisterTeamRequest {
    RegisterTeamRequest {
        tournament_id,
        phone: phone.to_string(),
        player1: players.first().copied().unwrap_or_default().to_string(),
        player2: players.get(1).copied().unwrap_or_default().to_string(),
        player3: players.get(2).map(ToString::to_string),
    }
}

/// Opens an isolated database with one published tournament and returns its ID.
pub fn setup_tournament(format: &str) -> (Persistence, i64) {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let response = create_tournament(
        &mut persistence,
        &create_test_tournament_request("Copa Primavera", format, "2026-03-14"),
        &create_test_admin(),
        &create_test_policy(),
    )
    .unwrap();
    (persistence, response.tournament.tournament_id)
}
