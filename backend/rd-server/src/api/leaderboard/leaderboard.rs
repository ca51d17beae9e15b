use crate::{ApiResult, AppState, LeaderboardEntryDto, LeaderboardQuery, LeaderboardResponse};

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};

/// GET /api/v1/leaderboard?limit=N
///
/// Public, read-only. Highest win counts first; equal win counts are not
/// ordered among themselves.
pub async fn top_players(
    State(state): State<AppState>,
    query: Result<Query<LeaderboardQuery>, QueryRejection>,
) -> ApiResult<Json<LeaderboardResponse>> {
    let Query(query) = query?;
    let limit = query.limit.unwrap_or(state.default_page_size);

    let entries = state.service.top_players(limit).await?;

    Ok(Json(LeaderboardResponse {
        entries: entries
            .into_iter()
            .enumerate()
            .map(|(i, entry)| LeaderboardEntryDto::ranked(i + 1, entry))
            .collect(),
    }))
}
