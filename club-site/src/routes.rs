use std::sync::Arc;

use axum::{
    extract::State,
    http::header,
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Json, Router,
};
use chrono::TimeZone;
use club_calendar::{Announcement, ICS_PATH};
use tower_http::trace::TraceLayer;

use crate::{page::PageError, state::AppState};

const NEXT_PATH: &str = "/api/next";

pub fn router<Tz>(state: Arc<AppState<Tz>>) -> Router
where
    Tz: TimeZone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(handle_page::<Tz>))
        .route(ICS_PATH, get(handle_ics::<Tz>))
        .route(NEXT_PATH, get(handle_next::<Tz>))
        .fallback(|| async { Redirect::permanent("/") })
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn handle_page<Tz: TimeZone>(
    State(state): State<Arc<AppState<Tz>>>,
) -> Result<Html<String>, PageError> {
    state.render_page().map(Html)
}

async fn handle_ics<Tz: TimeZone>(State(state): State<Arc<AppState<Tz>>>) -> Response {
    (
        [(header::CONTENT_TYPE, "text/calendar; charset=utf-8")],
        state.ics.clone(),
    )
        .into_response()
}

async fn handle_next<Tz: TimeZone>(State(state): State<Arc<AppState<Tz>>>) -> Json<Announcement> {
    Json(state.announce())
}
