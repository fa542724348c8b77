// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request identity.
//!
//! The server sits behind an identity-aware proxy that signs visitors in
//! and forwards the verified address in [`VERIFIED_EMAIL_HEADER`]. The
//! proxy must strip the header from client requests.

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use campeonatos_api::AuthenticatedActor;
use tracing::{debug, warn};

/// Header carrying the e-mail address the proxy verified.
pub const VERIFIED_EMAIL_HEADER: &str = "x-verified-email";

/// Extractor for the requesting actor.
///
/// A missing or blank header yields an anonymous actor; admin handlers
/// reject those later.
pub struct VerifiedIdentity(pub AuthenticatedActor);

impl<S> FromRequestParts<S> for VerifiedIdentity
where
    S: Send + Sync,
{
    type Rejection = IdentityError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Some(value) = parts.headers.get(VERIFIED_EMAIL_HEADER) else {
            return Ok(Self(AuthenticatedActor::anonymous()));
        };

        let email: &str = value.to_str().map_err(|_| {
            warn!("Verified e-mail header is not valid text");
            IdentityError::InvalidHeader
        })?;

        if email.trim().is_empty() {
            return Ok(Self(AuthenticatedActor::anonymous()));
        }

        debug!(email = email.trim(), "Request identity");
        Ok(Self(AuthenticatedActor::with_email(email.trim())))
    }
}

/// Identity extraction errors.
#[derive(Debug)]
pub enum IdentityError {
    /// The header holds bytes that are not visible ASCII.
    InvalidHeader,
}

impl IntoResponse for IdentityError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidHeader => (
                StatusCode::BAD_REQUEST,
                format!("Invalid {VERIFIED_EMAIL_HEADER} header"),
            )
                .into_response(),
        }
    }
}
