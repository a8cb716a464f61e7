use axum::{
    Router,
    routing::{get, post, put},
};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/schedules/batch",
            post(handlers::schedule::create_batch),
        )
        .route("/api/schedules/:id", get(handlers::schedule::get_assignment))
        .route(
            "/api/schedules/:id/reschedule",
            put(handlers::schedule::reschedule),
        )
}
