// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use campeonatos_domain::{NewRegistration, Registration, Tournament};

/// A snapshot of one tournament and its registrations.
///
/// State is always scoped to a single tournament. Registrations belonging to
/// other tournaments never enter it, so duplicate checks cannot leak across
/// tournaments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    /// The tournament this state is scoped to.
    pub tournament: Tournament,
    /// All registrations stored for the tournament.
    pub registrations: Vec<Registration>,
}

impl State {
    /// Creates a state with no registrations.
    #[must_use]
    pub const fn new(tournament: Tournament) -> Self {
        Self {
            tournament,
            registrations: Vec::new(),
        }
    }

    /// Creates a state from an unfiltered registration list.
    ///
    /// Only registrations whose `tournament_id` matches are kept.
    #[must_use]
    pub fn for_tournament(tournament: Tournament, registrations: &[Registration]) -> Self {
        let scoped: Vec<Registration> = registrations
            .iter()
            .filter(|r| r.tournament_id == tournament.tournament_id)
            .cloned()
            .collect();

        Self {
            tournament,
            registrations: scoped,
        }
    }

    /// Returns the number of teams signed up.
    #[must_use]
    pub fn registration_count(&self) -> usize {
        self.registrations.len()
    }
}

/// The result of a successful registration.
///
/// Nothing has been written yet: the caller persists `new_registration`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The registration to store.
    pub new_registration: NewRegistration,
}
