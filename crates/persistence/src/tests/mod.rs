// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod registration_tests;

use campeonatos_domain::{NewRegistration, NewTournament, Tournament, TournamentFormat};
use time::Date;

use crate::Persistence;

pub fn create_test_date(day: u8) -> Date {
    Date::from_calendar_date(2026, time::Month::March, day).expect("Valid test date")
}

pub fn create_test_new_tournament(name: &str, format: TournamentFormat, day: u8) -> NewTournament {
    NewTournament::new(name, format, create_test_date(day), Some("Trofeo y medallas"))
}

/// Opens an isolated database holding one tournament.
pub fn setup_with_tournament(format: TournamentFormat) -> (Persistence, Tournament) {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let tournament: Tournament = persistence
        .create_tournament(create_test_new_tournament("Copa Primavera", format, 14))
        .unwrap();
    (persistence, tournament)
}

pub fn create_test_new_registration(
    tournament_id: i64,
    phone: &str,
    player1: &str,
    player2: &str,
    player3: Option<&str>,
) -> NewRegistration {
    NewRegistration {
        tournament_id,
        phone: phone.to_string(),
        player1: player1.to_string(),
        player2: player2.to_string(),
        player3: player3.map(ToString::to_string),
    }
}
