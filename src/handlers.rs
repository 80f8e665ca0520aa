use crate::errors::AppError;
use crate::models::{
    AskQuery, AskResponse, GoalProgress, GoalProgressResponse, GoalsResponse, NewGoalRequest,
    ReplaceGoalsRequest, UltimateGoal, UltimateGoalRequest, UltimateGoalResponse,
};
use crate::progress::{goal_progress, ultimate_goal_progress};
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Query, State},
    Json,
};
use chrono::Utc;
use tracing::{error, info, warn};

pub async fn list_goals(State(state): State<AppState>) -> Json<GoalsResponse> {
    let goals = state.goals.load_goals().await;
    Json(GoalsResponse { goals })
}

pub async fn create_goal(
    State(state): State<AppState>,
    payload: Result<Json<NewGoalRequest>, JsonRejection>,
) -> Result<Json<GoalsResponse>, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!("rejected goal payload: {rejection}");
        AppError::bad_request(rejection.body_text())
    })?;
    let new_goal = request.validate()?;

    let _write = state.goals_write.lock().await;
    let existing = state.goals.load_goals().await;
    let goals = state.goals.add_goal(&existing, new_goal).await.map_err(|err| {
        error!("failed to add goal: {err}");
        AppError::from(err)
    })?;

    Ok(Json(GoalsResponse { goals }))
}

pub async fn replace_goals(
    State(state): State<AppState>,
    payload: Result<Json<ReplaceGoalsRequest>, JsonRejection>,
) -> Result<Json<GoalsResponse>, AppError> {
    let Json(request) =
        payload.map_err(|rejection| AppError::bad_request(rejection.body_text()))?;
    let goals = request.validate()?;

    let _write = state.goals_write.lock().await;
    let goals = state.goals.replace_goals(goals).await?;
    Ok(Json(GoalsResponse { goals }))
}

pub async fn goals_progress(State(state): State<AppState>) -> Json<GoalProgressResponse> {
    let now = Utc::now();
    let goals = state
        .goals
        .load_goals()
        .await
        .into_iter()
        .map(|goal| GoalProgress {
            progress: goal_progress(&goal, now),
            goal,
        })
        .collect();

    Json(GoalProgressResponse { goals })
}

pub async fn get_ultimate_goal(State(state): State<AppState>) -> Json<UltimateGoalResponse> {
    let goal = state.goals.load_ultimate_goal().await;
    Json(to_response(goal))
}

pub async fn update_ultimate_goal(
    State(state): State<AppState>,
    payload: Result<Json<UltimateGoalRequest>, JsonRejection>,
) -> Result<Json<UltimateGoalResponse>, AppError> {
    let Json(request) =
        payload.map_err(|rejection| AppError::bad_request(rejection.body_text()))?;
    let goal = request.validate()?;

    let saved = state.goals.save_ultimate_goal(goal).await.map_err(|err| {
        warn!("ultimate goal not saved: {err}");
        AppError::from(err)
    })?;

    Ok(Json(to_response(saved)))
}

pub async fn ask(
    State(state): State<AppState>,
    Query(query): Query<AskQuery>,
) -> Result<Json<AskResponse>, AppError> {
    let prompt = query.prompt.trim();
    if prompt.is_empty() {
        return Err(AppError::bad_request("prompt must not be empty"));
    }

    info!(chars = prompt.chars().count(), "forwarding prompt to assistant");
    let answer = state.assistant.ask(prompt).await.map_err(|err| {
        error!("assistant request failed: {err}");
        AppError::from(err)
    })?;

    Ok(Json(AskResponse { answer }))
}

fn to_response(goal: UltimateGoal) -> UltimateGoalResponse {
    UltimateGoalResponse {
        progress: ultimate_goal_progress(&goal),
        ultimate_goal: goal,
    }
}
