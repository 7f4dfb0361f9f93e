//! Finance entry routes.
//!
//! Every handler acts on behalf of the authenticated caller only. Entries
//! owned by someone else are reported exactly like missing ones.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use chrono::{Datelike, Utc};
use serde_json::json;
use tracing::info;

use crate::error::{finance_error_response, json_rejection_response, query_rejection_response};
use crate::{AppState, middleware::AuthUser};
use fintrack_core::finance::{
    EntryPayload, FilterParams, FinanceError, FinanceService, MonthlyStatsParams,
};
use fintrack_db::FinanceEntryRepository;
use fintrack_shared::types::EntryId;

/// Creates the finance routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/finances", get(list_entries).post(create_entry))
        .route("/finances/report", get(get_report))
        .route("/finances/filter", get(filter_entries))
        .route("/finances/category-stats", get(get_category_stats))
        .route("/finances/monthly-stats", get(get_monthly_stats))
        .route(
            "/finances/{id}",
            get(get_entry).put(update_entry).delete(delete_entry),
        )
}

fn finance_service(state: &AppState) -> FinanceService<FinanceEntryRepository> {
    FinanceService::new(FinanceEntryRepository::new(Arc::clone(&state.db)))
}

/// Parses a path id; anything unparsable cannot name an entry.
fn parse_entry_id(raw: &str) -> Result<EntryId, Response> {
    raw.parse()
        .map_err(|_| finance_error_response(FinanceError::NotFound))
}

/// GET `/finances` - List the caller's entries.
async fn list_entries(State(state): State<AppState>, auth: AuthUser) -> Response {
    match finance_service(&state).list(auth.user_id()).await {
        Ok(entries) => (StatusCode::OK, Json(entries)).into_response(),
        Err(e) => finance_error_response(e),
    }
}

/// POST `/finances` - Create an entry owned by the caller.
async fn create_entry(
    State(state): State<AppState>,
    auth: AuthUser,
    payload: Result<Json<EntryPayload>, JsonRejection>,
) -> Response {
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return json_rejection_response(&rejection),
    };

    match finance_service(&state).create(auth.user_id(), payload).await {
        Ok(entry) => {
            info!(owner = %entry.owner, entry_id = %entry.id, "Finance entry created");
            (StatusCode::CREATED, Json(entry)).into_response()
        }
        Err(e) => finance_error_response(e),
    }
}

/// GET `/finances/{id}` - Fetch one of the caller's entries.
async fn get_entry(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Response {
    let id = match parse_entry_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match finance_service(&state).get(auth.user_id(), id).await {
        Ok(entry) => (StatusCode::OK, Json(entry)).into_response(),
        Err(e) => finance_error_response(e),
    }
}

/// PUT `/finances/{id}` - Partially update one of the caller's entries.
async fn update_entry(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    payload: Result<Json<EntryPayload>, JsonRejection>,
) -> Response {
    let id = match parse_entry_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return json_rejection_response(&rejection),
    };

    match finance_service(&state)
        .update(auth.user_id(), id, payload)
        .await
    {
        Ok(entry) => {
            info!(owner = %entry.owner, entry_id = %entry.id, "Finance entry updated");
            (StatusCode::OK, Json(entry)).into_response()
        }
        Err(e) => finance_error_response(e),
    }
}

/// DELETE `/finances/{id}` - Delete one of the caller's entries.
async fn delete_entry(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Response {
    let id = match parse_entry_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let owner = auth.user_id();

    match finance_service(&state).delete(owner, id).await {
        Ok(()) => {
            info!(owner = %owner, entry_id = %id, "Finance entry deleted");
            (
                StatusCode::OK,
                Json(json!({ "message": "Entry deleted", "id": id })),
            )
                .into_response()
        }
        Err(e) => finance_error_response(e),
    }
}

/// GET `/finances/report` - Income, expense and balance totals.
async fn get_report(State(state): State<AppState>, auth: AuthUser) -> Response {
    match finance_service(&state).report(auth.user_id()).await {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(e) => finance_error_response(e),
    }
}

/// GET `/finances/filter?type=&month=&year=` - Entries by type and period.
async fn filter_entries(
    State(state): State<AppState>,
    auth: AuthUser,
    params: Result<Query<FilterParams>, QueryRejection>,
) -> Response {
    let Query(params) = match params {
        Ok(params) => params,
        Err(rejection) => return query_rejection_response(&rejection),
    };
    let current_year = Utc::now().year();

    match finance_service(&state)
        .filter(auth.user_id(), &params, current_year)
        .await
    {
        Ok(entries) => (StatusCode::OK, Json(entries)).into_response(),
        Err(e) => finance_error_response(e),
    }
}

/// GET `/finances/category-stats` - Totals and counts per category.
async fn get_category_stats(State(state): State<AppState>, auth: AuthUser) -> Response {
    match finance_service(&state).category_stats(auth.user_id()).await {
        Ok(stats) => (StatusCode::OK, Json(stats)).into_response(),
        Err(e) => finance_error_response(e),
    }
}

/// GET `/finances/monthly-stats?year=` - Twelve monthly buckets for a year.
async fn get_monthly_stats(
    State(state): State<AppState>,
    auth: AuthUser,
    params: Result<Query<MonthlyStatsParams>, QueryRejection>,
) -> Response {
    let Query(params) = match params {
        Ok(params) => params,
        Err(rejection) => return query_rejection_response(&rejection),
    };

    match finance_service(&state)
        .monthly_stats(auth.user_id(), &params)
        .await
    {
        Ok(stats) => (StatusCode::OK, Json(stats)).into_response(),
        Err(e) => finance_error_response(e),
    }
}
