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
#![allow(clippy::multiple_crate_versions)]

mod identity;
mod live;

use axum::{
    Json, Router,
    extract::{FromRef, Path, State as AxumState},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use campeonatos_api::{
    AdminOverviewResponse, AdminPolicy, ApiError, CreateTournamentRequest,
    CreateTournamentResponse, ListRegistrationsResponse, ListTournamentsResponse,
    RegisterTeamRequest, RegisterTeamResponse, RegistrationsCsvExport, admin_overview,
    create_tournament, export_registrations_csv, list_registrations, list_tournaments,
    register_team,
};
use campeonatos_persistence::Persistence;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info, warn};

use crate::identity::VerifiedIdentity;
use crate::live::{LiveEvent, LiveEventBroadcaster, live_events_handler};

/// Campeonatos Server - tournament sign-ups for the club
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Address to bind the server to
    #[arg(short, long, default_value = "127.0.0.1")]
    bind: IpAddr,

    /// E-mail address allowed to administer tournaments. Repeat or comma-separate.
    #[arg(
        long = "admin-email",
        env = "CAMPEONATOS_ADMIN_EMAILS",
        value_delimiter = ','
    )]
    admin_emails: Vec<String>,
}

/// Application state shared across handlers.
#[derive(Clone)]
struct AppState {
    /// Held for the whole read-validate-write of a registration.
    persistence: Arc<Mutex<Persistence>>,
    /// Who may administer tournaments.
    admin_policy: Arc<AdminPolicy>,
    /// Change notifications for open pages.
    live_events: Arc<LiveEventBroadcaster>,
}

impl FromRef<AppState> for Arc<LiveEventBroadcaster> {
    fn from_ref(state: &AppState) -> Self {
        Arc::clone(&state.live_events)
    }
}

/// API request for publishing a tournament.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct CreateTournamentApiRequest {
    /// The display name.
    name: String,
    /// `pairs`/`parejas` or `trios`/`tríos`.
    format: String,
    /// The tournament day (`YYYY-MM-DD`).
    date: String,
    /// Free-text prize description.
    #[serde(default)]
    prizes: Option<String>,
}

/// API request for signing a team up.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct RegisterTeamApiRequest {
    /// The responsible player's mobile number.
    phone: String,
    /// First player.
    #[serde(default)]
    player1: String,
    /// Second player.
    #[serde(default)]
    player2: String,
    /// Third player, trios only.
    #[serde(default)]
    player3: Option<String>,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// The violated rule, for rejected registrations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    rule: Option<String>,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// Machine-readable rule identifier, if any.
    rule: Option<String>,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            rule: self.rule,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let message: String = err.to_string();
        match err {
            ApiError::AuthenticationFailed { .. } => Self {
                status: StatusCode::UNAUTHORIZED,
                rule: None,
                message,
            },
            ApiError::Unauthorized { .. } => Self {
                status: StatusCode::FORBIDDEN,
                rule: None,
                message,
            },
            ApiError::DomainRuleViolation { rule, .. } => Self {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                rule: Some(rule),
                message,
            },
            ApiError::InvalidInput { .. } => Self {
                status: StatusCode::BAD_REQUEST,
                rule: None,
                message,
            },
            ApiError::ResourceNotFound { .. } => Self {
                status: StatusCode::NOT_FOUND,
                rule: None,
                message,
            },
            ApiError::Internal { .. } => {
                error!(error = %message, "Request failed");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    rule: None,
                    message,
                }
            }
        }
    }
}

/// Handler for GET `/tournaments`.
async fn handle_list_tournaments(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<ListTournamentsResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: ListTournamentsResponse = list_tournaments(&mut persistence)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/tournaments`. Admin only.
async fn handle_create_tournament(
    AxumState(app_state): AxumState<AppState>,
    VerifiedIdentity(actor): VerifiedIdentity,
    Json(req): Json<CreateTournamentApiRequest>,
) -> Result<(StatusCode, Json<CreateTournamentResponse>), HttpError> {
    info!(name = %req.name, format = %req.format, "Handling create_tournament request");

    let request: CreateTournamentRequest = CreateTournamentRequest {
        name: req.name,
        format: req.format,
        date: req.date,
        prizes: req.prizes,
    };

    let mut persistence = app_state.persistence.lock().await;
    let response: CreateTournamentResponse = create_tournament(
        &mut persistence,
        &request,
        &actor,
        &app_state.admin_policy,
    )?;
    drop(persistence);

    app_state.live_events.broadcast(&LiveEvent::TournamentCreated {
        tournament_id: response.tournament.tournament_id,
        name: response.tournament.name.clone(),
    });

    Ok((StatusCode::CREATED, Json(response)))
}

/// Handler for GET `/tournaments/{id}/registrations`. Phones are masked.
async fn handle_list_registrations(
    AxumState(app_state): AxumState<AppState>,
    Path(tournament_id): Path<i64>,
) -> Result<Json<ListRegistrationsResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: ListRegistrationsResponse = list_registrations(&mut persistence, tournament_id)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/tournaments/{id}/registrations`.
///
/// The lock is held from loading existing registrations until the new one
/// is stored, so two submissions in this process cannot both pass validation.
async fn handle_register_team(
    AxumState(app_state): AxumState<AppState>,
    Path(tournament_id): Path<i64>,
    Json(req): Json<RegisterTeamApiRequest>,
) -> Result<(StatusCode, Json<RegisterTeamResponse>), HttpError> {
    info!(tournament_id, "Handling register_team request");

    let request: RegisterTeamRequest = RegisterTeamRequest {
        tournament_id,
        phone: req.phone,
        player1: req.player1,
        player2: req.player2,
        player3: req.player3,
    };

    let mut persistence = app_state.persistence.lock().await;
    let result: Result<RegisterTeamResponse, ApiError> = register_team(&mut persistence, &request);
    drop(persistence);

    let response: RegisterTeamResponse = result.inspect_err(|e| {
        warn!(tournament_id, error = %e, "Registration not accepted");
    })?;

    app_state.live_events.broadcast(&LiveEvent::TeamRegistered {
        tournament_id,
        registration_id: response.registration.registration_id,
        registration_count: response.registration_count,
    });

    Ok((StatusCode::CREATED, Json(response)))
}

/// Handler for GET `/admin/overview`. Admin only.
async fn handle_admin_overview(
    AxumState(app_state): AxumState<AppState>,
    VerifiedIdentity(actor): VerifiedIdentity,
) -> Result<Json<AdminOverviewResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: AdminOverviewResponse =
        admin_overview(&mut persistence, &actor, &app_state.admin_policy)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/admin/tournaments/{id}/registrations.csv`. Admin only.
async fn handle_export_registrations(
    AxumState(app_state): AxumState<AppState>,
    VerifiedIdentity(actor): VerifiedIdentity,
    Path(tournament_id): Path<i64>,
) -> Result<Response, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let export: RegistrationsCsvExport = export_registrations_csv(
        &mut persistence,
        tournament_id,
        &actor,
        &app_state.admin_policy,
    )?;
    drop(persistence);

    let headers: [(header::HeaderName, String); 2] = [
        (
            header::CONTENT_TYPE,
            String::from("text/csv; charset=utf-8"),
        ),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", export.filename),
        ),
    ];

    Ok((headers, export.content).into_response())
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route(
            "/tournaments",
            get(handle_list_tournaments).post(handle_create_tournament),
        )
        .route(
            "/tournaments/{id}/registrations",
            get(handle_list_registrations).post(handle_register_team),
        )
        .route("/admin/overview", get(handle_admin_overview))
        .route(
            "/admin/tournaments/{id}/registrations.csv",
            get(handle_export_registrations),
        )
        .route("/live", get(live_events_handler))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Campeonatos Server");

    let admin_policy: AdminPolicy = AdminPolicy::new(&args.admin_emails)?;
    if admin_policy == AdminPolicy::default() {
        warn!("No admin e-mail configured; tournaments cannot be created");
    } else {
        info!(admins = args.admin_emails.len(), "Admin allow-list loaded");
    }

    let persistence: Persistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
        admin_policy: Arc::new(admin_policy),
        live_events: Arc::new(LiveEventBroadcaster::new()),
    };

    let app: Router = build_router(app_state);

    let addr: SocketAddr = SocketAddr::from((args.bind, args.port));
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
