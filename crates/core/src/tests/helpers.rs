// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use campeonatos_domain::{Registration, Tournament, TournamentFormat};
use time::{Date, Month};

pub fn create_test_tournament(tournament_id: i64, format: TournamentFormat) -> Tournament {
    Tournament {
        tournament_id,
        name: format!("Torneo {tournament_id}"),
        format,
        date: Date::from_calendar_date(2026, Month::April, 18).expect("Valid test date"),
        prizes: None,
        created_at: String::from("2026-04-01T10:00:00Z"),
    }
}

pub fn create_test_registration(
    registration_id: i64,
    tournament_id: i64,
    phone: &str,
    players: &[&str],
) -> Registration {
    Registration {
        registration_id,
        tournament_id,
        phone: phone.to_string(),
        player1: players[0].to_string(),
        player2: players[1].to_string(),
        player3: players.get(2).map(ToString::to_string),
        registered_at: String::from("2026-04-02T20:15:00Z"),
    }
}
