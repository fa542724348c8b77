// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Registration, Tournament, TournamentFormat};
use time::{Date, Month};

pub fn create_test_date() -> Date {
    Date::from_calendar_date(2026, Month::March, 14).expect("Valid test date")
}

pub fn create_test_tournament(format: TournamentFormat) -> Tournament {
    Tournament {
        tournament_id: 1,
        name: String::from("Copa Retruque"),
        format,
        date: create_test_date(),
        prizes: Some(String::from("Asado para el equipo ganador")),
        created_at: String::from("2026-03-01T12:00:00Z"),
    }
}

pub fn create_test_registration(
    registration_id: i64,
    phone: &str,
    player1: &str,
    player2: &str,
    player3: Option<&str>,
) -> Registration {
    Registration {
        registration_id,
        tournament_id: 1,
        phone: phone.to_string(),
        player1: player1.to_string(),
        player2: player2.to_string(),
        player3: player3.map(ToString::to_string),
        registered_at: String::from("2026-03-02T18:30:00Z"),
    }
}
