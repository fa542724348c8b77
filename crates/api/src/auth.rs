// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Identity and authorization.
//!
//! Visitors are identified by the e-mail address an upstream identity
//! proxy has already verified. Nobody logs in here: an actor is either
//! anonymous or carries a verified address, and the address is an admin
//! if it is on the configured allow-list.

use thiserror::Error;

use crate::error::AuthError;

/// Actor roles for authorization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Organizers: create tournaments and see unmasked registrations.
    Admin,
    /// Everyone else, signed in or not. May list tournaments and register teams.
    Public,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Admin => write!(f, "Admin"),
            Self::Public => write!(f, "Public"),
        }
    }
}

/// The identity attached to a request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AuthenticatedActor {
    /// The verified e-mail address, or `None` for anonymous visitors.
    pub email: Option<String>,
}

impl AuthenticatedActor {
    /// Creates an actor with a verified e-mail address.
    #[must_use]
    pub fn with_email(email: &str) -> Self {
        Self {
            email: Some(email.to_string()),
        }
    }

    /// Creates an anonymous actor.
    #[must_use]
    pub const fn anonymous() -> Self {
        Self { email: None }
    }

    /// Returns the role this actor holds under `policy`.
    #[must_use]
    pub fn role(&self, policy: &AdminPolicy) -> Role {
        if policy.is_authorized(self) {
            Role::Admin
        } else {
            Role::Public
        }
    }
}

/// Errors raised while building an [`AdminPolicy`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AdminPolicyError {
    /// An entry does not look like an e-mail address.
    #[error("Admin entry '{entry}' is not an e-mail address")]
    InvalidEmail { entry: String },
}

/// The allow-list of admin e-mail addresses.
///
/// Addresses are compared trimmed and case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AdminPolicy {
    emails: Vec<String>,
}

impl AdminPolicy {
    /// Builds a policy from individual addresses.
    ///
    /// Blank entries are skipped.
    ///
    /// # Errors
    ///
    /// Returns `AdminPolicyError::InvalidEmail` if an entry has no `@`.
    pub fn new<I, S>(emails: I) -> Result<Self, AdminPolicyError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized: Vec<String> = Vec::new();
        for entry in emails {
            let email: String = normalize_email(entry.as_ref());
            if email.is_empty() {
                continue;
            }
            if !email.contains('@') {
                return Err(AdminPolicyError::InvalidEmail {
                    entry: entry.as_ref().to_string(),
                });
            }
            if !normalized.contains(&email) {
                normalized.push(email);
            }
        }

        Ok(Self { emails: normalized })
    }

    /// Builds a policy from a comma-separated list such as `"a@x.com, b@y.com"`.
    ///
    /// # Errors
    ///
    /// Returns `AdminPolicyError::InvalidEmail` if an entry has no `@`.
    pub fn from_list(list: &str) -> Result<Self, AdminPolicyError> {
        Self::new(list.split(','))
    }

    /// Returns `true` if the actor's verified address is on the allow-list.
    #[must_use]
    pub fn is_authorized(&self, actor: &AuthenticatedActor) -> bool {
        actor
            .email
            .as_deref()
            .map(normalize_email)
            .is_some_and(|email| self.emails.contains(&email))
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Authorization checks for admin-only actions.
pub struct AuthorizationService;

impl AuthorizationService {
    /// Checks that the actor may perform `action`, an admin-only operation.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::AuthenticationFailed` for anonymous actors and
    /// `AuthError::Unauthorized` for verified addresses not on the allow-list.
    pub fn authorize_admin_action(
        actor: &AuthenticatedActor,
        policy: &AdminPolicy,
        action: &str,
    ) -> Result<(), AuthError> {
        if actor.email.is_none() {
            return Err(AuthError::AuthenticationFailed {
                reason: String::from("A verified e-mail address is required"),
            });
        }

        match actor.role(policy) {
            Role::Admin => Ok(()),
            Role::Public => Err(AuthError::Unauthorized {
                action: action.to_string(),
                required_role: Role::Admin.to_string(),
            }),
        }
    }
}
