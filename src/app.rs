use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/goals",
            get(handlers::list_goals)
                .post(handlers::create_goal)
                .put(handlers::replace_goals),
        )
        .route("/goals/progress", get(handlers::goals_progress))
        .route(
            "/ultimate-goal",
            get(handlers::get_ultimate_goal).put(handlers::update_ultimate_goal),
        )
        .route("/ai/ask", get(handlers::ask))
        .with_state(state)
}
