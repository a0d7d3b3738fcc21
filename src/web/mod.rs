//! HTTP adapter: maps form posts onto the game engine and renders the result.
//!
//! Every mutating route answers with `303 See Other` back to `/`, so a browser
//! reload never repeats a move.

mod session;
pub mod view;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use axum::extract::rejection::FormRejection;
use axum::extract::State;
use axum::response::{Html, Redirect};
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use serde::Deserialize;
use serde_json::Value;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::game::{GameEngine, Variant};

pub use session::{GameSession, Snapshot};

/// Shared handler state. The mutex serializes every engine operation.
#[derive(Clone)]
pub struct AppState {
    session: Arc<Mutex<GameSession>>,
    asset_prefix: Arc<str>,
}

impl AppState {
    pub fn new(engine: GameEngine, asset_prefix: &str) -> Self {
        AppState {
            session: Arc::new(Mutex::new(GameSession::new(engine))),
            asset_prefix: Arc::from(asset_prefix),
        }
    }

    /// Lock the session. Engine operations never leave the state half
    /// updated, so a poisoned lock is still safe to use.
    pub fn session(&self) -> MutexGuard<'_, GameSession> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct StartForm {
    pub variant: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PlayForm {
    pub column: Option<String>,
}

/// Build the router with game routes, the JSON snapshot and static assets.
pub fn router(state: AppState, server: &ServerConfig) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/start", post(start))
        .route("/start-bot", post(start_bot))
        .route("/play", post(play))
        .route("/reset", post(reset))
        .route("/quit", post(quit))
        .route("/api/state", get(snapshot))
        .nest_service(
            server.static_prefix.trim_end_matches('/'),
            ServeDir::new(&server.static_dir),
        )
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

async fn index(State(state): State<AppState>) -> Html<String> {
    let session = state.session();
    Html(view::render(&session, &state.asset_prefix))
}

async fn snapshot(State(state): State<AppState>) -> Json<Value> {
    let session = state.session();
    Json(serde_json::to_value(session.snapshot()).unwrap_or(Value::Null))
}

async fn start(
    State(state): State<AppState>,
    form: Result<Form<StartForm>, FormRejection>,
) -> Redirect {
    let variant = Variant::from_form_value(form_or_default(form).variant.as_deref());
    state.session().start(variant);
    Redirect::to("/")
}

async fn start_bot(
    State(state): State<AppState>,
    form: Result<Form<StartForm>, FormRejection>,
) -> Redirect {
    let variant = Variant::from_form_value(form_or_default(form).variant.as_deref());
    state.session().start_bot(variant);
    Redirect::to("/")
}

async fn play(
    State(state): State<AppState>,
    form: Result<Form<PlayForm>, FormRejection>,
) -> Redirect {
    let column = form_or_default(form).column.unwrap_or_default();
    state.session().play(&column);
    Redirect::to("/")
}

async fn reset(State(state): State<AppState>) -> Redirect {
    state.session().reset();
    Redirect::to("/")
}

async fn quit(State(state): State<AppState>) -> Redirect {
    state.session().quit();
    Redirect::to("/")
}

/// A missing or malformed body is treated like an empty form.
fn form_or_default<T: Default>(form: Result<Form<T>, FormRejection>) -> T {
    match form {
        Ok(Form(value)) => value,
        Err(rejection) => {
            tracing::debug!(%rejection, "unreadable form body, using defaults");
            T::default()
        }
    }
}
