// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    DomainError, NewRegistration, NewTournament, Registration, RegistrationCandidate, Tournament,
    TournamentFormat, parse_tournament_date,
};
use std::str::FromStr;
use time::{Date, Month};

use super::helpers::{create_test_date, create_test_registration, create_test_tournament};

#[test]
fn test_format_player_slots() {
    assert_eq!(TournamentFormat::Pairs.player_slots(), 2);
    assert_eq!(TournamentFormat::Trios.player_slots(), 3);
}

#[test]
fn test_format_parses_english_and_spanish_tags() {
    assert_eq!(
        TournamentFormat::from_str("pairs").unwrap(),
        TournamentFormat::Pairs
    );
    assert_eq!(
        TournamentFormat::from_str("parejas").unwrap(),
        TournamentFormat::Pairs
    );
    assert_eq!(
        TournamentFormat::from_str(" TRIOS ").unwrap(),
        TournamentFormat::Trios
    );
    assert_eq!(
        TournamentFormat::from_str("tríos").unwrap(),
        TournamentFormat::Trios
    );
}

#[test]
fn test_format_rejects_unknown_tag() {
    let result: Result<TournamentFormat, DomainError> = TournamentFormat::from_str("cuartetos");
    assert_eq!(
        result,
        Err(DomainError::InvalidTournamentFormat(String::from(
            "cuartetos"
        )))
    );
}

#[test]
fn test_format_display_round_trips_through_from_str() {
    for format in [TournamentFormat::Pairs, TournamentFormat::Trios] {
        let parsed: TournamentFormat = format.to_string().parse().unwrap();
        assert_eq!(parsed, format);
    }
}

#[test]
fn test_parse_tournament_date() {
    let date: Date = parse_tournament_date("2026-03-14").unwrap();
    assert_eq!(date, Date::from_calendar_date(2026, Month::March, 14).unwrap());
}

#[test]
fn test_parse_tournament_date_rejects_garbage() {
    let result: Result<Date, DomainError> = parse_tournament_date("14/03/2026");
    assert!(matches!(result, Err(DomainError::DateParseError { .. })));

    let result: Result<Date, DomainError> = parse_tournament_date("2026-02-30");
    assert!(matches!(result, Err(DomainError::DateParseError { .. })));
}

#[test]
fn test_new_tournament_trims_and_drops_blank_prizes() {
    let tournament: NewTournament = NewTournament::new(
        "  Copa  ",
        TournamentFormat::Pairs,
        create_test_date(),
        Some("   "),
    );
    assert_eq!(tournament.name, "Copa");
    assert_eq!(tournament.prizes, None);
}

#[test]
fn test_tournament_from_new_keeps_payload() {
    let new: NewTournament = NewTournament::new(
        "Copa",
        TournamentFormat::Trios,
        create_test_date(),
        Some("Trofeo"),
    );
    let tournament: Tournament =
        Tournament::from_new(7, String::from("2026-03-01T00:00:00Z"), new);

    assert_eq!(tournament.tournament_id, 7);
    assert_eq!(tournament.format, TournamentFormat::Trios);
    assert_eq!(tournament.prizes.as_deref(), Some("Trofeo"));
}

#[test]
fn test_candidate_players_for_pairs_has_two_slots() {
    let candidate: RegistrationCandidate =
        RegistrationCandidate::new("091234567", "Ana", "Beto", Some("Carla"));
    assert_eq!(
        candidate.players_for(TournamentFormat::Pairs),
        vec!["Ana", "Beto"]
    );
}

#[test]
fn test_candidate_players_for_trios_reports_missing_third_as_empty() {
    let candidate: RegistrationCandidate =
        RegistrationCandidate::new("091234567", "Ana", "Beto", None);
    assert_eq!(
        candidate.players_for(TournamentFormat::Trios),
        vec!["Ana", "Beto", ""]
    );
}

#[test]
fn test_into_new_registration_drops_player3_for_pairs() {
    let tournament: Tournament = create_test_tournament(TournamentFormat::Pairs);
    let candidate: RegistrationCandidate =
        RegistrationCandidate::new("091234567", " Ana ", "Beto", Some("Carla"));

    let new: NewRegistration = candidate.into_new_registration(&tournament);

    assert_eq!(new.tournament_id, tournament.tournament_id);
    assert_eq!(new.player1, "Ana");
    assert_eq!(new.player3, None);
}

#[test]
fn test_into_new_registration_keeps_player3_for_trios() {
    let tournament: Tournament = create_test_tournament(TournamentFormat::Trios);
    let candidate: RegistrationCandidate =
        RegistrationCandidate::new("091234567", "Ana", "Beto", Some(" Carla "));

    let new: NewRegistration = candidate.into_new_registration(&tournament);

    assert_eq!(new.player3.as_deref(), Some("Carla"));
}

#[test]
fn test_registration_players_skips_empty_slots() {
    let registration: Registration =
        create_test_registration(1, "091234567", "Ana", "Beto", None);
    let players: Vec<&str> = registration.players().collect();
    assert_eq!(players, vec!["Ana", "Beto"]);

    let registration: Registration =
        create_test_registration(2, "091234568", "Ana", "Beto", Some(""));
    assert_eq!(registration.players().count(), 2);

    let registration: Registration =
        create_test_registration(3, "091234569", "Ana", "Beto", Some("Carla"));
    assert_eq!(registration.players().count(), 3);
}
