// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use campeonatos_persistence::Persistence;

use crate::{
    ApiError, AuthenticatedActor, CreateTournamentResponse, ListTournamentsResponse,
    create_tournament, list_tournaments, register_team,
};

use super::helpers::{
    create_test_admin, create_test_policy, create_test_register_request,
    create_test_tournament_request, create_test_visitor,
};

#[test]
fn test_admin_creates_tournament() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();

    let response: CreateTournamentResponse = create_tournament(
        &mut persistence,
        &create_test_tournament_request("  Copa Verano ", "Trios", "2026-01-20"),
        &create_test_admin(),
        &create_test_policy(),
    )
    .unwrap();

    assert_eq!(response.tournament.name, "Copa Verano");
    assert_eq!(response.tournament.format, "trios");
    assert_eq!(response.tournament.players_per_team, 3);
    assert_eq!(response.tournament.date, "2026-01-20");
    assert_eq!(response.tournament.registration_count, 0);
}

#[test]
fn test_spanish_format_tag_is_accepted() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();

    let response: CreateTournamentResponse = create_tournament(
        &mut persistence,
        &create_test_tournament_request("Copa Parejas", "parejas", "2026-02-01"),
        &create_test_admin(),
        &create_test_policy(),
    )
    .unwrap();

    assert_eq!(response.tournament.format, "pairs");
}

#[test]
fn test_visitor_cannot_create_tournament() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();

    let result: Result<CreateTournamentResponse, ApiError> = create_tournament(
        &mut persistence,
        &create_test_tournament_request("Copa Pirata", "pairs", "2026-02-01"),
        &create_test_visitor(),
        &create_test_policy(),
    );

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
    assert!(persistence.list_tournaments().unwrap().is_empty());
}

#[test]
fn test_anonymous_cannot_create_tournament() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();

    let result: Result<CreateTournamentResponse, ApiError> = create_tournament(
        &mut persistence,
        &create_test_tournament_request("Copa Pirata", "pairs", "2026-02-01"),
        &AuthenticatedActor::anonymous(),
        &create_test_policy(),
    );

    assert!(matches!(result, Err(ApiError::AuthenticationFailed { .. })));
}

#[test]
fn test_blank_name_is_invalid_input() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();

    let result: Result<CreateTournamentResponse, ApiError> = create_tournament(
        &mut persistence,
        &create_test_tournament_request("   ", "pairs", "2026-02-01"),
        &create_test_admin(),
        &create_test_policy(),
    );

    assert!(matches!(result, Err(ApiError::InvalidInput { ref field, .. }) if field == "name"));
}

#[test]
fn test_bad_date_and_format_are_invalid_input() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();

    let bad_date: Result<CreateTournamentResponse, ApiError> = create_tournament(
        &mut persistence,
        &create_test_tournament_request("Copa", "pairs", "14/03/2026"),
        &create_test_admin(),
        &create_test_policy(),
    );
    let bad_format: Result<CreateTournamentResponse, ApiError> = create_tournament(
        &mut persistence,
        &create_test_tournament_request("Copa", "cuartetos", "2026-03-14"),
        &create_test_admin(),
        &create_test_policy(),
    );

    assert!(matches!(bad_date, Err(ApiError::InvalidInput { ref field, .. }) if field == "date"));
    assert!(
        matches!(bad_format, Err(ApiError::InvalidInput { ref field, .. }) if field == "format")
    );
}

#[test]
fn test_list_tournaments_sorted_with_counts() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let mut ids: Vec<i64> = Vec::new();
    for (name, date) in [("Enero", "2026-01-10"), ("Marzo", "2026-03-10"), ("Febrero", "2026-02-10")] {
        let response: CreateTournamentResponse = create_tournament(
            &mut persistence,
            &create_test_tournament_request(name, "pairs", date),
            &create_test_admin(),
            &create_test_policy(),
        )
        .unwrap();
        ids.push(response.tournament.tournament_id);
    }
    register_team(
        &mut persistence,
        &create_test_register_request(ids[2], "091111111", &["Ana", "Beto"]),
    )
    .unwrap();

    let response: ListTournamentsResponse = list_tournaments(&mut persistence).unwrap();

    let summary: Vec<(&str, usize)> = response
        .tournaments
        .iter()
        .map(|t| (t.name.as_str(), t.registration_count))
        .collect();
    assert_eq!(summary, vec![("Marzo", 0), ("Febrero", 1), ("Enero", 0)]);
}
