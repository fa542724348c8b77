// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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

mod display;
mod error;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use display::obfuscate_phone;
pub use error::{DomainError, RegistrationRejection};
pub use types::{
    NewRegistration, NewTournament, Registration, RegistrationCandidate, Tournament,
    TournamentFormat, parse_tournament_date,
};
pub use validation::{
    PHONE_LENGTH, PHONE_PREFIX, ValidationResult, normalize_player_name, validate_phone,
    validate_registration, validate_tournament_fields,
};
