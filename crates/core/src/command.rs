// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use campeonatos_domain::{NewTournament, RegistrationCandidate};

/// A command represents user intent as data only.
///
/// Commands are the only way to request state changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Publish a new tournament. Admin only; authorization happens upstream.
    CreateTournament {
        /// The tournament to create.
        tournament: NewTournament,
    },
    /// Sign a team up for the tournament a `State` is scoped to.
    RegisterTeam {
        /// The team as submitted.
        candidate: RegistrationCandidate,
    },
}

impl Command {
    /// Returns the command name used in logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::CreateTournament { .. } => "CreateTournament",
            Self::RegisterTeam { .. } => "RegisterTeam",
        }
    }
}
