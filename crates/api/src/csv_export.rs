// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! CSV export of a tournament's registrations for organizers.
//!
//! The export is unmasked: it carries the phone numbers organizers use to
//! contact teams. Only the admin handler calls it.

use campeonatos_domain::{Registration, Tournament, TournamentFormat};

use crate::error::ApiError;

const PAIRS_HEADER: [&str; 5] = ["registration_id", "registered_at", "phone", "player1", "player2"];

const TRIOS_HEADER: [&str; 6] = [
    "registration_id",
    "registered_at",
    "phone",
    "player1",
    "player2",
    "player3",
];

/// Renders `registrations` as CSV.
///
/// Pairs tournaments get no `player3` column. Rows keep the order given.
///
/// # Errors
///
/// Returns `ApiError::Internal` if the CSV writer fails.
pub fn render_registrations_csv(
    tournament: &Tournament,
    registrations: &[Registration],
) -> Result<String, ApiError> {
    let mut writer: csv::Writer<Vec<u8>> = csv::Writer::from_writer(Vec::new());

    match tournament.format {
        TournamentFormat::Pairs => writer.write_record(PAIRS_HEADER),
        TournamentFormat::Trios => writer.write_record(TRIOS_HEADER),
    }
    .map_err(|e| csv_failure(&e))?;

    for registration in registrations {
        let id: String = registration.registration_id.to_string();
        let mut record: Vec<&str> = vec![
            id.as_str(),
            registration.registered_at.as_str(),
            registration.phone.as_str(),
            registration.player1.as_str(),
            registration.player2.as_str(),
        ];
        if tournament.format == TournamentFormat::Trios {
            record.push(registration.player3.as_deref().unwrap_or(""));
        }
        writer.write_record(&record).map_err(|e| csv_failure(&e))?;
    }

    let bytes: Vec<u8> = writer.into_inner().map_err(|e| ApiError::Internal {
        message: format!("Failed to finish CSV export: {e}"),
    })?;

    String::from_utf8(bytes).map_err(|e| ApiError::Internal {
        message: format!("CSV export is not valid UTF-8: {e}"),
    })
}

/// Suggested file name for a tournament export.
#[must_use]
pub fn export_filename(tournament: &Tournament) -> String {
    format!(
        "registrations_{}_{}.csv",
        tournament.tournament_id, tournament.date
    )
}

fn csv_failure(err: &csv::Error) -> ApiError {
    ApiError::Internal {
        message: format!("Failed to write CSV export: {err}"),
    }
}
