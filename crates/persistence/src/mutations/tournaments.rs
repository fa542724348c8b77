// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use campeonatos_domain::{NewTournament, Tournament};
use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::info;

use crate::backend::PersistenceBackend;
use crate::data_models::{format_tournament_date, now_rfc3339};
use crate::diesel_schema::tournaments;
use crate::error::PersistenceError;

/// Inserts a tournament and returns it with its assigned ID and timestamp.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn create_tournament(
    conn: &mut SqliteConnection,
    tournament: NewTournament,
) -> Result<Tournament, PersistenceError> {
    let date: String = format_tournament_date(tournament.date)?;
    let created_at: String = now_rfc3339()?;

    conn.transaction::<Tournament, PersistenceError, _>(|conn| {
        diesel::insert_into(tournaments::table)
            .values((
                tournaments::name.eq(&tournament.name),
                tournaments::format.eq(tournament.format.as_str()),
                tournaments::tournament_date.eq(&date),
                tournaments::prizes.eq(tournament.prizes.as_deref()),
                tournaments::created_at.eq(&created_at),
            ))
            .execute(conn)?;

        let tournament_id: i64 = conn.get_last_insert_rowid()?;

        info!(
            tournament_id,
            name = %tournament.name,
            format = %tournament.format,
            date = %date,
            "Tournament created"
        );

        Ok(Tournament::from_new(tournament_id, created_at, tournament))
    })
}
