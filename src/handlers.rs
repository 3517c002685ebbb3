use crate::errors::AppError;
use crate::metrics::{compute_life_metrics, format_days_left};
use crate::models::{MetricsQuery, MetricsResponse, ProfileForm, UserProfile};
use crate::profile::validate_profile;
use crate::session::DaySelection;
use crate::state::AppState;
use crate::ui::{render_dashboard, render_setup};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form, Json,
};
use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use tracing::warn;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    match state.store.current() {
        Some(user) => {
            let selection = *state.selection.lock().await;
            let metrics = compute_life_metrics(&user, selection.resolve(now()));
            Html(render_dashboard(&user, &metrics))
        }
        None => Html(render_setup(&[])),
    }
}

pub async fn submit_user(State(state): State<AppState>, Form(form): Form<ProfileForm>) -> Response {
    match validate_profile(&form) {
        Ok(user) => {
            state.store.set_user(user);
            state.selection.lock().await.back_to_today();
            Redirect::to("/").into_response()
        }
        Err(errors) => {
            warn!("rejected profile submission: {errors}");
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Html(render_setup(&errors.messages())),
            )
                .into_response()
        }
    }
}

pub async fn reset_user(State(state): State<AppState>) -> Redirect {
    state.store.clear_user();
    Redirect::to("/")
}

pub async fn prev_day(State(state): State<AppState>) -> Redirect {
    state.selection.lock().await.prev_day();
    Redirect::to("/")
}

pub async fn next_day(State(state): State<AppState>) -> Redirect {
    state.selection.lock().await.next_day();
    Redirect::to("/")
}

pub async fn back_to_today(State(state): State<AppState>) -> Redirect {
    state.selection.lock().await.back_to_today();
    Redirect::to("/")
}

pub async fn get_user(State(state): State<AppState>) -> Result<Json<UserProfile>, AppError> {
    state
        .store
        .current()
        .map(Json)
        .ok_or_else(|| AppError::not_found("no profile has been set"))
}

pub async fn set_user(
    State(state): State<AppState>,
    Json(form): Json<ProfileForm>,
) -> Result<Json<UserProfile>, AppError> {
    let user = validate_profile(&form).inspect_err(|errors| {
        warn!("rejected profile submission: {errors}");
    })?;
    state.store.set_user(user.clone());
    state.selection.lock().await.back_to_today();
    Ok(Json(user))
}

pub async fn clear_user(State(state): State<AppState>) -> StatusCode {
    state.store.clear_user();
    StatusCode::NO_CONTENT
}

pub async fn get_metrics(
    State(state): State<AppState>,
    Query(query): Query<MetricsQuery>,
) -> Result<Json<MetricsResponse>, AppError> {
    let selection = *state.selection.lock().await;
    let reference = match query.at.as_deref() {
        Some(raw) => parse_reference(raw)?,
        None => selection.resolve(now()),
    };
    metrics_response(&state, selection, reference).map(Json)
}

pub async fn step_prev(State(state): State<AppState>) -> Result<Json<MetricsResponse>, AppError> {
    step(&state, DaySelection::prev_day).await
}

pub async fn step_next(State(state): State<AppState>) -> Result<Json<MetricsResponse>, AppError> {
    step(&state, DaySelection::next_day).await
}

pub async fn step_today(State(state): State<AppState>) -> Result<Json<MetricsResponse>, AppError> {
    step(&state, DaySelection::back_to_today).await
}

async fn step(
    state: &AppState,
    change: fn(&mut DaySelection),
) -> Result<Json<MetricsResponse>, AppError> {
    let selection = {
        let mut selection = state.selection.lock().await;
        change(&mut selection);
        *selection
    };
    metrics_response(state, selection, selection.resolve(now())).map(Json)
}

fn metrics_response(
    state: &AppState,
    selection: DaySelection,
    reference: NaiveDateTime,
) -> Result<MetricsResponse, AppError> {
    let user = state
        .store
        .current()
        .ok_or_else(|| AppError::not_found("no profile has been set"))?;
    let metrics = compute_life_metrics(&user, reference);

    Ok(MetricsResponse {
        days_left_label: format_days_left(metrics.days_remaining),
        day_offset: selection.offset_days(),
        user,
        metrics,
    })
}

fn parse_reference(raw: &str) -> Result<NaiveDateTime, AppError> {
    let raw = raw.trim();
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M"))
        .or_else(|_| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d").map(|date| date.and_time(NaiveTime::MIN))
        })
        .map_err(|_| AppError::bad_request("`at` must look like YYYY-MM-DDTHH:MM:SS"))
}

fn now() -> NaiveDateTime {
    Local::now().naive_local()
}
