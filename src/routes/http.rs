//! HTTP endpoint handlers. These are thin wrappers that forward to core logic.
//! Each handler is instrumented and logs parameters and basic result info.

use std::sync::Arc;
use axum::{extract::{Path, Query, State}, Json, response::IntoResponse};
use tracing::{info, instrument};

use crate::domain::Language;
use crate::logic::{hint_text, leaderboard_period, problem_detail, search_problems};
use crate::protocol::*;
use crate::seeds;
use crate::state::AppState;

#[instrument(level = "info")]
pub async fn http_health() -> impl IntoResponse { Json(HealthOut { ok: true }) }

#[instrument(level = "info")]
pub async fn http_get_home() -> impl IntoResponse {
  Json(HomeOut { features: seeds::seed_features(), stats: seeds::seed_stats() })
}

#[instrument(level = "info", skip(state), fields(search = %q.search, difficulty = %q.difficulty.as_deref().unwrap_or("all")))]
pub async fn http_get_problems(
  State(state): State<Arc<AppState>>,
  Query(q): Query<ProblemsQuery>,
) -> impl IntoResponse {
  let difficulty = q.difficulty.as_deref().unwrap_or("all");
  let problems: Vec<ProblemSummaryOut> = search_problems(&state, &q.search, difficulty)
    .into_iter()
    .map(to_summary)
    .collect();
  info!(target: "codearena", total = problems.len(), "HTTP problem list served");
  Json(ProblemsOut { total: problems.len(), problems })
}

#[instrument(level = "info", skip(state))]
pub async fn http_get_problem(
  State(state): State<Arc<AppState>>,
  Path(id): Path<String>,
) -> impl IntoResponse {
  let problem = problem_detail(&state, &id);
  info!(target: "codearena", %id, served = problem.id, "HTTP problem served");
  Json(problem.clone())
}

#[instrument(level = "info")]
pub async fn http_get_languages() -> impl IntoResponse {
  let languages: Vec<LanguageOut> = Language::ALL
    .iter()
    .map(|&value| LanguageOut { value, label: value.label() })
    .collect();
  Json(languages)
}

#[instrument(level = "info", skip_all, fields(problem_id = ?q.problem_id))]
pub async fn http_get_hint(Query(q): Query<HintQuery>) -> impl IntoResponse {
  info!(target: "codearena", "HTTP hint served");
  Json(HintOut { text: hint_text().to_string() })
}

#[instrument(level = "info", skip_all, fields(period = ?q.period))]
pub async fn http_get_leaderboard(Query(q): Query<LeaderboardQuery>) -> impl IntoResponse {
  Json(LeaderboardOut {
    period: leaderboard_period(q.period.as_deref()),
    entries: seeds::seed_leaderboard(),
    top_performers: seeds::seed_top_performers(),
  })
}

#[instrument(level = "info")]
pub async fn http_get_profile() -> impl IntoResponse {
  Json(ProfileOut {
    user: seeds::seed_user(),
    achievements: seeds::seed_achievements(),
    recent_activity: seeds::seed_activity(),
    skills: seeds::seed_skills(),
  })
}

#[instrument(level = "info")]
pub async fn http_get_quick_actions() -> impl IntoResponse {
  Json(QuickActionsOut { actions: seeds::quick_actions() })
}
