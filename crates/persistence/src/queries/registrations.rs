// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use campeonatos_domain::Registration;
use diesel::SqliteConnection;
use diesel::prelude::*;
use num_traits::ToPrimitive;
use tracing::debug;

use crate::data_models::RegistrationRow;
use crate::diesel_schema::registrations;
use crate::error::PersistenceError;

/// Lists the registrations of one tournament in the order they were made.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_registrations(
    conn: &mut SqliteConnection,
    tournament_id: i64,
) -> Result<Vec<Registration>, PersistenceError> {
    let rows: Vec<RegistrationRow> = registrations::table
        .filter(registrations::tournament_id.eq(tournament_id))
        .order(registrations::registration_id.asc())
        .select(RegistrationRow::as_select())
        .load(conn)?;

    debug!(tournament_id, count = rows.len(), "Loaded registrations");

    Ok(rows.into_iter().map(Registration::from).collect())
}

/// Lists every registration of every tournament.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_all_registrations(
    conn: &mut SqliteConnection,
) -> Result<Vec<Registration>, PersistenceError> {
    let rows: Vec<RegistrationRow> = registrations::table
        .order((
            registrations::tournament_id.asc(),
            registrations::registration_id.asc(),
        ))
        .select(RegistrationRow::as_select())
        .load(conn)?;

    Ok(rows.into_iter().map(Registration::from).collect())
}

/// Counts the registrations of one tournament.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn count_registrations(
    conn: &mut SqliteConnection,
    tournament_id: i64,
) -> Result<usize, PersistenceError> {
    let count_i64: i64 = registrations::table
        .filter(registrations::tournament_id.eq(tournament_id))
        .count()
        .get_result(conn)?;

    count_i64
        .to_usize()
        .ok_or_else(|| PersistenceError::DatabaseError("Count conversion failed".to_string()))
}

/// Counts registrations grouped by tournament.
///
/// Tournaments without registrations are absent from the result.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn count_registrations_by_tournament(
    conn: &mut SqliteConnection,
) -> Result<Vec<(i64, usize)>, PersistenceError> {
    let rows: Vec<(i64, i64)> = registrations::table
        .group_by(registrations::tournament_id)
        .select((
            registrations::tournament_id,
            diesel::dsl::count(registrations::registration_id),
        ))
        .load(conn)?;

    let mut result: Vec<(i64, usize)> = Vec::with_capacity(rows.len());
    for (tournament_id, count_i64) in rows {
        let count_usize: usize = count_i64.to_usize().ok_or_else(|| {
            PersistenceError::DatabaseError("Count conversion failed".to_string())
        })?;
        result.push((tournament_id, count_usize));
    }

    Ok(result)
}
