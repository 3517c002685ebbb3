use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/user", post(handlers::submit_user))
        .route("/user/reset", post(handlers::reset_user))
        .route("/day/prev", post(handlers::prev_day))
        .route("/day/next", post(handlers::next_day))
        .route("/day/today", post(handlers::back_to_today))
        .route(
            "/api/user",
            get(handlers::get_user)
                .post(handlers::set_user)
                .delete(handlers::clear_user),
        )
        .route("/api/metrics", get(handlers::get_metrics))
        .route("/api/day/prev", post(handlers::step_prev))
        .route("/api/day/next", post(handlers::step_next))
        .route("/api/day/today", post(handlers::step_today))
        .with_state(state)
}
