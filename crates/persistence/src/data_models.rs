// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Row structs and their conversion into domain types.

use campeonatos_domain::{Registration, Tournament, TournamentFormat, parse_tournament_date};
use diesel::prelude::*;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime};

use crate::diesel_schema::{registrations, tournaments};
use crate::error::PersistenceError;

/// Diesel Queryable struct for tournament rows.
#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = tournaments)]
pub struct TournamentRow {
    pub tournament_id: i64,
    pub name: String,
    pub format: String,
    pub tournament_date: String,
    pub prizes: Option<String>,
    pub created_at: String,
}

impl TryFrom<TournamentRow> for Tournament {
    type Error = PersistenceError;

    fn try_from(row: TournamentRow) -> Result<Self, Self::Error> {
        let format: TournamentFormat = row.format.parse().map_err(|e| {
            PersistenceError::InvalidStoredData(format!(
                "tournament {}: {e}",
                row.tournament_id
            ))
        })?;
        let date: Date = parse_tournament_date(&row.tournament_date).map_err(|e| {
            PersistenceError::InvalidStoredData(format!(
                "tournament {}: {e}",
                row.tournament_id
            ))
        })?;

        Ok(Self {
            tournament_id: row.tournament_id,
            name: row.name,
            format,
            date,
            prizes: row.prizes,
            created_at: row.created_at,
        })
    }
}

/// Diesel Queryable struct for registration rows.
#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = registrations)]
pub struct RegistrationRow {
    pub registration_id: i64,
    pub tournament_id: i64,
    pub phone: String,
    pub player1: String,
    pub player2: String,
    pub player3: Option<String>,
    pub registered_at: String,
}

impl From<RegistrationRow> for Registration {
    fn from(row: RegistrationRow) -> Self {
        Self {
            registration_id: row.registration_id,
            tournament_id: row.tournament_id,
            phone: row.phone,
            player1: row.player1,
            player2: row.player2,
            player3: row.player3,
            registered_at: row.registered_at,
        }
    }
}

/// Formats a tournament date the way it is stored (`YYYY-MM-DD`).
///
/// # Errors
///
/// Returns an error if the date cannot be formatted.
pub fn format_tournament_date(date: Date) -> Result<String, PersistenceError> {
    date.format(format_description!("[year]-[month]-[day]"))
        .map_err(|e| PersistenceError::Other(format!("Failed to format date: {e}")))
}

/// Returns the current UTC time as an RFC 3339 string.
///
/// # Errors
///
/// Returns an error if the timestamp cannot be formatted.
pub fn now_rfc3339() -> Result<String, PersistenceError> {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .map_err(|e| PersistenceError::Other(format!("Failed to format timestamp: {e}")))
}
