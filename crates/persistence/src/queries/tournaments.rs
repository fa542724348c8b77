// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use campeonatos_domain::Tournament;
use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::debug;

use crate::data_models::TournamentRow;
use crate::diesel_schema::tournaments;
use crate::error::PersistenceError;

/// Retrieves a tournament by ID.
///
/// # Errors
///
/// Returns an error if the database query fails or the stored row is invalid.
/// Returns `Ok(None)` if the tournament does not exist.
pub fn find_tournament(
    conn: &mut SqliteConnection,
    tournament_id: i64,
) -> Result<Option<Tournament>, PersistenceError> {
    debug!(tournament_id, "Looking up tournament");

    let row: Option<TournamentRow> = tournaments::table
        .filter(tournaments::tournament_id.eq(tournament_id))
        .select(TournamentRow::as_select())
        .first(conn)
        .optional()?;

    row.map(Tournament::try_from).transpose()
}

/// Lists every tournament, most recent date first.
///
/// Tournaments on the same day are ordered newest-created first.
///
/// # Errors
///
/// Returns an error if the database query fails or a stored row is invalid.
pub fn list_tournaments(conn: &mut SqliteConnection) -> Result<Vec<Tournament>, PersistenceError> {
    let rows: Vec<TournamentRow> = tournaments::table
        .order((
            tournaments::tournament_date.desc(),
            tournaments::tournament_id.desc(),
        ))
        .select(TournamentRow::as_select())
        .load(conn)?;

    debug!(count = rows.len(), "Loaded tournaments");

    rows.into_iter().map(Tournament::try_from).collect()
}
