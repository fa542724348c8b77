// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use campeonatos_domain::{Registration, Tournament, TournamentFormat};

use super::{create_test_new_registration, create_test_new_tournament, setup_with_tournament};
use crate::{Persistence, PersistenceError};

#[test]
fn test_create_registration_assigns_id() {
    let (mut persistence, tournament) = setup_with_tournament(TournamentFormat::Pairs);

    let registration: Registration = persistence
        .create_registration(create_test_new_registration(
            tournament.tournament_id,
            "091234567",
            "Ana",
            "Beto",
            None,
        ))
        .unwrap();

    assert!(registration.registration_id > 0);
    assert_eq!(registration.tournament_id, tournament.tournament_id);
    assert_eq!(registration.phone, "091234567");
    assert!(registration.player3.is_none());
    assert!(!registration.registered_at.is_empty());
}

#[test]
fn test_list_registrations_preserves_insertion_order() {
    let (mut persistence, tournament) = setup_with_tournament(TournamentFormat::Trios);
    for (phone, p1) in [("091111111", "Ana"), ("092222222", "Beto"), ("093333333", "Carla")] {
        persistence
            .create_registration(create_test_new_registration(
                tournament.tournament_id,
                phone,
                p1,
                "Relleno",
                Some("Otro"),
            ))
            .unwrap();
    }

    let phones: Vec<String> = persistence
        .list_registrations(tournament.tournament_id)
        .unwrap()
        .into_iter()
        .map(|r| r.phone)
        .collect();

    assert_eq!(phones, vec!["091111111", "092222222", "093333333"]);
}

#[test]
fn test_list_registrations_is_scoped_to_tournament() {
    let (mut persistence, first) = setup_with_tournament(TournamentFormat::Pairs);
    let second: Tournament = persistence
        .create_tournament(create_test_new_tournament(
            "Copa Otoño",
            TournamentFormat::Pairs,
            28,
        ))
        .unwrap();

    persistence
        .create_registration(create_test_new_registration(
            first.tournament_id,
            "091111111",
            "Ana",
            "Beto",
            None,
        ))
        .unwrap();
    persistence
        .create_registration(create_test_new_registration(
            second.tournament_id,
            "091111111",
            "Ana",
            "Beto",
            None,
        ))
        .unwrap();

    assert_eq!(
        persistence
            .list_registrations(first.tournament_id)
            .unwrap()
            .len(),
        1
    );
    assert_eq!(persistence.list_all_registrations().unwrap().len(), 2);
}

#[test]
fn test_duplicate_phone_hits_unique_index() {
    let (mut persistence, tournament) = setup_with_tournament(TournamentFormat::Pairs);
    persistence
        .create_registration(create_test_new_registration(
            tournament.tournament_id,
            "091111111",
            "Ana",
            "Beto",
            None,
        ))
        .unwrap();

    let result: Result<Registration, PersistenceError> =
        persistence.create_registration(create_test_new_registration(
            tournament.tournament_id,
            "091111111",
            "Carla",
            "Dario",
            None,
        ));

    assert_eq!(
        result,
        Err(PersistenceError::DuplicateRegistration {
            tournament_id: tournament.tournament_id,
            phone: String::from("091111111"),
        })
    );
    assert_eq!(
        persistence
            .count_registrations(tournament.tournament_id)
            .unwrap(),
        1
    );
}

#[test]
fn test_registration_for_unknown_tournament_is_rejected() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();

    let result: Result<Registration, PersistenceError> = persistence.create_registration(
        create_test_new_registration(99, "091111111", "Ana", "Beto", None),
    );

    assert_eq!(result, Err(PersistenceError::TournamentNotFound(99)));
    assert!(persistence.list_all_registrations().unwrap().is_empty());
}

#[test]
fn test_count_registrations_by_tournament_omits_empty_tournaments() {
    let (mut persistence, first) = setup_with_tournament(TournamentFormat::Pairs);
    let empty: Tournament = persistence
        .create_tournament(create_test_new_tournament(
            "Sin inscriptos",
            TournamentFormat::Pairs,
            1,
        ))
        .unwrap();
    for phone in ["091111111", "092222222"] {
        persistence
            .create_registration(create_test_new_registration(
                first.tournament_id,
                phone,
                phone,
                "Compañero",
                None,
            ))
            .unwrap();
    }

    let counts: Vec<(i64, usize)> = persistence.count_registrations_by_tournament().unwrap();

    assert_eq!(counts, vec![(first.tournament_id, 2)]);
    assert_eq!(persistence.count_registrations(empty.tournament_id).unwrap(), 0);
}
