// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the Campeonatos sign-up service.
//!
//! Stores tournaments and team registrations in `SQLite` through Diesel.
//! The schema is embedded and migrated on open, and foreign key
//! enforcement is verified before the adapter is handed out.
//!
//! ## Testing
//!
//! `Persistence::new_in_memory()` gives each caller its own shared-cache
//! in-memory database, so tests never see each other's rows.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use campeonatos_domain::{NewRegistration, NewTournament, Registration, Tournament};
use diesel::SqliteConnection;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

mod backend;
mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;

use backend::PersistenceBackend;

/// Atomic counter for generating unique in-memory database names.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Persistence adapter for tournaments and registrations.
pub struct Persistence {
    conn: SqliteConnection,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite` database.
    ///
    /// Each call receives its own database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let shared_memory_url: String = format!("file:memdb_test_{db_id}?mode=memory&cache=shared");

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(&shared_memory_url)?;
        conn.verify_foreign_key_enforcement()?;

        Ok(Self { conn })
    }

    /// Creates a new persistence adapter with a file-based `SQLite` database.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str: &str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(path_str)?;
        backend::sqlite::enable_wal_mode(&mut conn)?;
        conn.verify_foreign_key_enforcement()?;

        Ok(Self { conn })
    }

    /// Verifies that foreign key enforcement is enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if foreign key enforcement is not enabled.
    pub fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError> {
        self.conn.verify_foreign_key_enforcement()
    }

    // ========================================================================
    // Tournaments
    // ========================================================================

    /// Stores a new tournament.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn create_tournament(
        &mut self,
        tournament: NewTournament,
    ) -> Result<Tournament, PersistenceError> {
        mutations::tournaments::create_tournament(&mut self.conn, tournament)
    }

    /// Retrieves a tournament by ID.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::TournamentNotFound` if it does not exist.
    pub fn get_tournament(&mut self, tournament_id: i64) -> Result<Tournament, PersistenceError> {
        queries::tournaments::find_tournament(&mut self.conn, tournament_id)?
            .ok_or(PersistenceError::TournamentNotFound(tournament_id))
    }

    /// Lists every tournament, most recent date first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_tournaments(&mut self) -> Result<Vec<Tournament>, PersistenceError> {
        queries::tournaments::list_tournaments(&mut self.conn)
    }

    // ========================================================================
    // Registrations
    // ========================================================================

    /// Stores a validated registration.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::DuplicateRegistration` if the phone is already
    /// registered in the tournament, `PersistenceError::TournamentNotFound` if the
    /// tournament does not exist, or a database error.
    pub fn create_registration(
        &mut self,
        registration: NewRegistration,
    ) -> Result<Registration, PersistenceError> {
        mutations::registrations::create_registration(&mut self.conn, registration)
    }

    /// Lists the registrations of one tournament in registration order.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_registrations(
        &mut self,
        tournament_id: i64,
    ) -> Result<Vec<Registration>, PersistenceError> {
        queries::registrations::list_registrations(&mut self.conn, tournament_id)
    }

    /// Lists the registrations of every tournament.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_all_registrations(&mut self) -> Result<Vec<Registration>, PersistenceError> {
        queries::registrations::list_all_registrations(&mut self.conn)
    }

    /// Counts the registrations of one tournament.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn count_registrations(&mut self, tournament_id: i64) -> Result<usize, PersistenceError> {
        queries::registrations::count_registrations(&mut self.conn, tournament_id)
    }

    /// Counts registrations per tournament. Tournaments with none are omitted.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn count_registrations_by_tournament(
        &mut self,
    ) -> Result<Vec<(i64, usize)>, PersistenceError> {
        queries::registrations::count_registrations_by_tournament(&mut self.conn)
    }
}
