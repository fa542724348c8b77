// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use campeonatos_domain::{NewRegistration, Registration};
use diesel::SqliteConnection;
use diesel::prelude::*;
use diesel::result::DatabaseErrorKind;
use tracing::{info, warn};

use crate::backend::PersistenceBackend;
use crate::data_models::now_rfc3339;
use crate::diesel_schema::{registrations, tournaments};
use crate::error::PersistenceError;

/// Inserts a validated registration and returns it with its assigned ID and timestamp.
///
/// The unique index on `(tournament_id, phone)` is the last line against two
/// submissions validated against the same snapshot; a violation is reported
/// as `PersistenceError::DuplicateRegistration`.
///
/// # Errors
///
/// Returns `PersistenceError::TournamentNotFound` if the tournament does not exist,
/// `PersistenceError::DuplicateRegistration` if the phone is taken, or a database
/// error if the insert fails.
pub fn create_registration(
    conn: &mut SqliteConnection,
    registration: NewRegistration,
) -> Result<Registration, PersistenceError> {
    let registered_at: String = now_rfc3339()?;

    conn.transaction::<Registration, PersistenceError, _>(|conn| {
        let tournament_exists: bool = diesel::select(diesel::dsl::exists(
            tournaments::table.filter(tournaments::tournament_id.eq(registration.tournament_id)),
        ))
        .get_result(conn)?;

        if !tournament_exists {
            return Err(PersistenceError::TournamentNotFound(
                registration.tournament_id,
            ));
        }

        diesel::insert_into(registrations::table)
            .values((
                registrations::tournament_id.eq(registration.tournament_id),
                registrations::phone.eq(&registration.phone),
                registrations::player1.eq(&registration.player1),
                registrations::player2.eq(&registration.player2),
                registrations::player3.eq(registration.player3.as_deref()),
                registrations::registered_at.eq(&registered_at),
            ))
            .execute(conn)
            .map_err(|e| match e {
                diesel::result::Error::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                    warn!(
                        tournament_id = registration.tournament_id,
                        "Unique index rejected duplicate phone"
                    );
                    PersistenceError::DuplicateRegistration {
                        tournament_id: registration.tournament_id,
                        phone: registration.phone.clone(),
                    }
                }
                other => PersistenceError::from(other),
            })?;

        let registration_id: i64 = conn.get_last_insert_rowid()?;

        info!(
            registration_id,
            tournament_id = registration.tournament_id,
            "Registration stored"
        );

        Ok(Registration::from_new(
            registration_id,
            registered_at,
            registration,
        ))
    })
}
