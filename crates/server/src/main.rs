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
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod session;

use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use hotel_desk::{AccountDirectory, BookingLedger, Clock, RoomRegistry, SystemClock};
use hotel_desk_api::{
    AccountResponse, ApiError, AvailabilityGridQuery, AvailabilityGridResponse,
    AvailabilityQuery, AvailabilityResponse, BookingResponse, CreateBookingRequest,
    CreateRoomRequest, FrontDeskResponse, ListBookingsQuery, ListBookingsResponse,
    ListRoomsQuery, ListRoomsResponse, LoginRequest, LoginResponse, RegisterRequest, RoomResponse,
    SessionResponse, SessionTable, TransitionResponse, UpdateRoomRequest, WriteResponse,
    availability_grid, cancel_booking, check_availability, check_in, check_out, create_booking,
    create_room, delete_room, get_booking, get_room, list_bookings, list_rooms, login, logout,
    register_account, todays_arrivals, todays_departures, translate_core_error, update_room,
};
use hotel_desk_domain::{Account, DEFAULT_HORIZON_DAYS, NewAccount, Role, Username};
use hotel_desk_persistence::{
    Database, PersistenceError, SqliteAccountStore, SqliteBookingStore, SqliteRoomStore,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info};

use crate::session::SessionCaller;

/// Hotel Desk Server - HTTP front desk for rooms and bookings
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
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Default number of days shown by the availability grid
    #[arg(
        long,
        default_value_t = DEFAULT_HORIZON_DAYS,
        value_parser = clap::value_parser!(u16).range(1..)
    )]
    horizon_days: u16,

    /// Username of an admin account to create at startup if missing
    #[arg(long, requires = "admin_password")]
    admin_username: Option<String>,

    /// Password for the startup admin account
    #[arg(long, requires = "admin_username")]
    admin_password: Option<String>,
}

type Registry = RoomRegistry<SqliteRoomStore>;
type Ledger = BookingLedger<SqliteBookingStore, Arc<dyn Clock>>;
type Accounts = AccountDirectory<SqliteAccountStore>;

/// Application state shared across handlers.
///
/// Each component guards its own store, so handlers share them through
/// plain `Arc`s.
#[derive(Clone)]
struct AppState {
    registry: Arc<Registry>,
    ledger: Arc<Ledger>,
    accounts: Arc<Accounts>,
    sessions: Arc<SessionTable>,
    /// Grid horizon used when a request does not pick one.
    horizon_days: u16,
}

impl AppState {
    /// Opens one store per component on `database`.
    fn new(
        database: &Database,
        clock: Arc<dyn Clock>,
        horizon_days: u16,
    ) -> Result<Self, PersistenceError> {
        let accounts: Accounts = AccountDirectory::new(database.account_store()?);
        Self::with_accounts(database, clock, horizon_days, accounts)
    }

    fn with_accounts(
        database: &Database,
        clock: Arc<dyn Clock>,
        horizon_days: u16,
        accounts: Accounts,
    ) -> Result<Self, PersistenceError> {
        Ok(Self {
            registry: Arc::new(RoomRegistry::new(database.room_store()?)),
            ledger: Arc::new(BookingLedger::new(database.booking_store()?, clock)),
            accounts: Arc::new(accounts),
            sessions: Arc::new(SessionTable::new()),
            horizon_days,
        })
    }
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match &err {
            ApiError::AuthenticationFailed { .. } => StatusCode::UNAUTHORIZED,
            ApiError::Unauthorized { .. } => StatusCode::FORBIDDEN,
            ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::DomainRuleViolation { .. } if err.is_conflict() => StatusCode::CONFLICT,
            ApiError::DomainRuleViolation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            ApiError::StorageUnavailable { .. } => {
                error!(error = %err, "Storage failure");
                StatusCode::SERVICE_UNAVAILABLE
            }
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

/// Creates the startup admin account unless the username is taken.
///
/// Returns `true` if an account was created.
fn seed_admin(accounts: &Accounts, username: &str, password: &str) -> Result<bool, ApiError> {
    if accounts
        .username_exists(username)
        .map_err(translate_core_error)?
    {
        info!(username, "Admin account already present");
        return Ok(false);
    }

    let account: Account = accounts
        .register(NewAccount {
            username: Username::new(username),
            password: password.to_string(),
            role: Role::Admin,
            full_name: String::from("Front Desk Administrator"),
            email: format!("{}@localhost", username.trim().to_lowercase()),
            phone: String::from("n/a"),
        })
        .map_err(translate_core_error)?;

    info!(
        account_id = account.account_id,
        username = account.username.value(),
        "Seeded admin account"
    );
    Ok(true)
}

// ============================================================================
// Accounts and sessions
// ============================================================================

/// Handler for POST `/auth/register`.
///
/// Open to anonymous callers for Customer accounts.
async fn handle_register(
    AxumState(app_state): AxumState<AppState>,
    caller: Option<SessionCaller>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<AccountResponse>, HttpError> {
    let caller_session = caller.map(|c| c.session);
    let response: AccountResponse =
        register_account(&app_state.accounts, caller_session.as_ref(), req)?;
    Ok(Json(response))
}

/// Handler for POST `/auth/login`.
async fn handle_login(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, HttpError> {
    let response: LoginResponse = login(&app_state.accounts, &app_state.sessions, &req)?;
    Ok(Json(response))
}

/// Handler for POST `/auth/logout`.
async fn handle_logout(
    AxumState(app_state): AxumState<AppState>,
    SessionCaller { token, .. }: SessionCaller,
) -> Result<Json<WriteResponse>, HttpError> {
    let response: WriteResponse = logout(&app_state.sessions, &token)?;
    Ok(Json(response))
}

/// Handler for GET `/auth/whoami`.
async fn handle_whoami(SessionCaller { session, .. }: SessionCaller) -> Json<SessionResponse> {
    Json(SessionResponse::from(&session))
}

// ============================================================================
// Rooms
// ============================================================================

/// Handler for GET `/rooms`.
async fn handle_list_rooms(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<ListRoomsQuery>,
) -> Result<Json<ListRoomsResponse>, HttpError> {
    let response: ListRoomsResponse = list_rooms(&app_state.registry, &query)?;
    Ok(Json(response))
}

/// Handler for POST `/rooms`.
async fn handle_create_room(
    AxumState(app_state): AxumState<AppState>,
    SessionCaller { session, .. }: SessionCaller,
    Json(req): Json<CreateRoomRequest>,
) -> Result<Json<RoomResponse>, HttpError> {
    let response: RoomResponse = create_room(&app_state.registry, &session, &req)?;
    Ok(Json(response))
}

/// Handler for GET `/rooms/{room_number}`.
async fn handle_get_room(
    AxumState(app_state): AxumState<AppState>,
    Path(room_number): Path<u32>,
) -> Result<Json<RoomResponse>, HttpError> {
    let response: RoomResponse = get_room(&app_state.registry, room_number)?;
    Ok(Json(response))
}

/// Handler for PUT `/rooms/{room_number}`.
async fn handle_update_room(
    AxumState(app_state): AxumState<AppState>,
    SessionCaller { session, .. }: SessionCaller,
    Path(room_number): Path<u32>,
    Json(req): Json<UpdateRoomRequest>,
) -> Result<Json<RoomResponse>, HttpError> {
    let response: RoomResponse = update_room(&app_state.registry, &session, room_number, &req)?;
    Ok(Json(response))
}

/// Handler for DELETE `/rooms/{room_number}`.
async fn handle_delete_room(
    AxumState(app_state): AxumState<AppState>,
    SessionCaller { session, .. }: SessionCaller,
    Path(room_number): Path<u32>,
) -> Result<Json<WriteResponse>, HttpError> {
    let response: WriteResponse = delete_room(&app_state.registry, &session, room_number)?;
    Ok(Json(response))
}

// ============================================================================
// Bookings
// ============================================================================

/// Handler for GET `/bookings`.
async fn handle_list_bookings(
    AxumState(app_state): AxumState<AppState>,
    _caller: SessionCaller,
    Query(query): Query<ListBookingsQuery>,
) -> Result<Json<ListBookingsResponse>, HttpError> {
    let response: ListBookingsResponse = list_bookings(&app_state.ledger, &query)?;
    Ok(Json(response))
}

/// Handler for POST `/bookings`.
async fn handle_create_booking(
    AxumState(app_state): AxumState<AppState>,
    SessionCaller { session, .. }: SessionCaller,
    Json(req): Json<CreateBookingRequest>,
) -> Result<Json<BookingResponse>, HttpError> {
    let response: BookingResponse =
        create_booking(&app_state.registry, &app_state.ledger, &session, req)?;
    Ok(Json(response))
}

/// Handler for GET `/bookings/{booking_id}`.
async fn handle_get_booking(
    AxumState(app_state): AxumState<AppState>,
    _caller: SessionCaller,
    Path(booking_id): Path<i64>,
) -> Result<Json<BookingResponse>, HttpError> {
    let response: BookingResponse = get_booking(&app_state.ledger, booking_id)?;
    Ok(Json(response))
}

/// Handler for POST `/bookings/{booking_id}/check_in`.
async fn handle_check_in(
    AxumState(app_state): AxumState<AppState>,
    SessionCaller { session, .. }: SessionCaller,
    Path(booking_id): Path<i64>,
) -> Result<Json<TransitionResponse>, HttpError> {
    let response: TransitionResponse = check_in(&app_state.ledger, &session, booking_id)?;
    Ok(Json(response))
}

/// Handler for POST `/bookings/{booking_id}/check_out`.
async fn handle_check_out(
    AxumState(app_state): AxumState<AppState>,
    SessionCaller { session, .. }: SessionCaller,
    Path(booking_id): Path<i64>,
) -> Result<Json<TransitionResponse>, HttpError> {
    let response: TransitionResponse = check_out(&app_state.ledger, &session, booking_id)?;
    Ok(Json(response))
}

/// Handler for POST `/bookings/{booking_id}/cancel`.
async fn handle_cancel_booking(
    AxumState(app_state): AxumState<AppState>,
    SessionCaller { session, .. }: SessionCaller,
    Path(booking_id): Path<i64>,
) -> Result<Json<TransitionResponse>, HttpError> {
    let response: TransitionResponse = cancel_booking(&app_state.ledger, &session, booking_id)?;
    Ok(Json(response))
}

// ============================================================================
// Availability and the front desk
// ============================================================================

/// Handler for GET `/availability`.
async fn handle_check_availability(
    AxumState(app_state): AxumState<AppState>,
    _caller: SessionCaller,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<AvailabilityResponse>, HttpError> {
    let response: AvailabilityResponse = check_availability(&app_state.ledger, &query)?;
    Ok(Json(response))
}

/// Handler for GET `/availability/grid`.
async fn handle_availability_grid(
    AxumState(app_state): AxumState<AppState>,
    _caller: SessionCaller,
    Query(query): Query<AvailabilityGridQuery>,
) -> Result<Json<AvailabilityGridResponse>, HttpError> {
    let response: AvailabilityGridResponse = availability_grid(
        &app_state.registry,
        &app_state.ledger,
        &query,
        app_state.horizon_days,
    )?;
    Ok(Json(response))
}

/// Handler for GET `/front_desk/arrivals`.
async fn handle_todays_arrivals(
    AxumState(app_state): AxumState<AppState>,
    _caller: SessionCaller,
) -> Result<Json<FrontDeskResponse>, HttpError> {
    let response: FrontDeskResponse = todays_arrivals(&app_state.ledger)?;
    Ok(Json(response))
}

/// Handler for GET `/front_desk/departures`.
async fn handle_todays_departures(
    AxumState(app_state): AxumState<AppState>,
    _caller: SessionCaller,
) -> Result<Json<FrontDeskResponse>, HttpError> {
    let response: FrontDeskResponse = todays_departures(&app_state.ledger)?;
    Ok(Json(response))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/auth/register", post(handle_register))
        .route("/auth/login", post(handle_login))
        .route("/auth/logout", post(handle_logout))
        .route("/auth/whoami", get(handle_whoami))
        .route("/rooms", get(handle_list_rooms).post(handle_create_room))
        .route(
            "/rooms/{room_number}",
            get(handle_get_room)
                .put(handle_update_room)
                .delete(handle_delete_room),
        )
        .route(
            "/bookings",
            get(handle_list_bookings).post(handle_create_booking),
        )
        .route("/bookings/{booking_id}", get(handle_get_booking))
        .route("/bookings/{booking_id}/check_in", post(handle_check_in))
        .route("/bookings/{booking_id}/check_out", post(handle_check_out))
        .route("/bookings/{booking_id}/cancel", post(handle_cancel_booking))
        .route("/availability", get(handle_check_availability))
        .route("/availability/grid", get(handle_availability_grid))
        .route("/front_desk/arrivals", get(handle_todays_arrivals))
        .route("/front_desk/departures", get(handle_todays_departures))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Hotel Desk Server");

    let database: Database = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Database::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Database::new_in_memory()?
    };

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let app_state: AppState = AppState::new(&database, clock, args.horizon_days)?;

    if let (Some(username), Some(password)) = (&args.admin_username, &args.admin_password) {
        seed_admin(&app_state.accounts, username, password)?;
    }

    let app: Router = build_router(app_state);

    let listener = tokio::net::TcpListener::bind((args.host.as_str(), args.port)).await?;
    info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests;
