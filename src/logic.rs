//! Core behaviors shared by both HTTP and WebSocket handlers.
//!
//! This includes:
//!   - Filtering the problem list by search text and difficulty
//!   - Resolving a route identifier to a problem (featured fallback)
//!   - The hint text

use tracing::{debug, instrument, warn};

use crate::domain::{DifficultyFilter, Period, Problem};
use crate::seeds::HINT_TEXT;
use crate::state::AppState;
use crate::util::contains_ci;

/// Problems whose title or any tag contains `search` (case-insensitive) and whose
/// difficulty passes `filter`. Catalogue order is preserved.
pub fn filter_problems<'a>(problems: &'a [Problem], search: &str, filter: DifficultyFilter) -> Vec<&'a Problem> {
  let needle = search.to_lowercase();
  problems
    .iter()
    .filter(|p| contains_ci(&p.title, &needle) || p.tags.iter().any(|t| contains_ci(t, &needle)))
    .filter(|p| filter.matches(p.difficulty))
    .collect()
}

/// List endpoint semantics: an unknown difficulty equals no problem's difficulty.
#[instrument(level = "info", skip_all, fields(%search, %difficulty))]
pub fn search_problems<'a>(state: &'a AppState, search: &str, difficulty: &str) -> Vec<&'a Problem> {
  match difficulty.parse::<DifficultyFilter>() {
    Ok(filter) => filter_problems(state.problems(), search, filter),
    Err(e) => {
      debug!(target: "codearena", error = %e, "Unknown difficulty; empty result");
      Vec::new()
    }
  }
}

/// Leaderboard tab from the query string. Missing or unknown values get the default tab.
pub fn leaderboard_period(raw: Option<&str>) -> Period {
  match raw.map(str::parse::<Period>) {
    None => Period::default(),
    Some(Ok(period)) => period,
    Some(Err(e)) => {
      debug!(target: "codearena", error = %e, "Unknown leaderboard period; using default");
      Period::default()
    }
  }
}

/// Resolve the route identifier. Unknown or unparsable ids get the featured problem.
#[instrument(level = "info", skip_all, fields(%raw_id))]
pub fn problem_detail<'a>(state: &'a AppState, raw_id: &str) -> &'a Problem {
  match raw_id.trim().parse::<u32>().ok().and_then(|id| state.get_problem(id)) {
    Some(p) => p,
    None => {
      let p = state.featured_problem();
      warn!(target: "codearena", %raw_id, fallback = p.id, "Unknown problem id; serving featured problem");
      p
    }
  }
}

/// The same hint for every problem and request.
pub fn hint_text() -> &'static str {
  HINT_TEXT
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::config::ArenaConfig;
  use crate::domain::Difficulty;
  use crate::seeds::seed_problems;

  fn titles(ps: &[&Problem]) -> Vec<String> {
    ps.iter().map(|p| p.title.clone()).collect()
  }

  #[test]
  fn empty_search_with_all_returns_whole_catalogue() {
    let problems = seed_problems();
    assert_eq!(filter_problems(&problems, "", DifficultyFilter::All).len(), problems.len());
  }

  #[test]
  fn search_matches_title_case_insensitively() {
    let problems = seed_problems();
    let hits = filter_problems(&problems, "two", DifficultyFilter::All);
    assert_eq!(titles(&hits), vec!["Two Sum", "Add Two Numbers"]);
  }

  #[test]
  fn search_matches_tags() {
    let problems = seed_problems();
    let hits = filter_problems(&problems, "STACK", DifficultyFilter::All);
    assert_eq!(titles(&hits), vec!["Valid Parentheses", "Binary Tree Inorder Traversal"]);
  }

  #[test]
  fn difficulty_filter_combines_with_search() {
    let problems = seed_problems();
    let hits = filter_problems(&problems, "linked", DifficultyFilter::Only(Difficulty::Hard));
    assert_eq!(titles(&hits), vec!["Merge K Sorted Lists"]);
    assert!(filter_problems(&problems, "parentheses", DifficultyFilter::Only(Difficulty::Hard)).is_empty());
  }

  #[test]
  fn filter_equals_brute_force_subset() {
    let problems = seed_problems();
    let filters = [
      DifficultyFilter::All,
      DifficultyFilter::Only(Difficulty::Easy),
      DifficultyFilter::Only(Difficulty::Medium),
      DifficultyFilter::Only(Difficulty::Hard),
    ];
    for search in ["", "a", "Tree", "hash", "dynamic", "zzz", " "] {
      for filter in filters {
        let got: Vec<u32> = filter_problems(&problems, search, filter).iter().map(|p| p.id).collect();
        let s = search.to_lowercase();
        let want: Vec<u32> = problems
          .iter()
          .filter(|p| {
            let text = p.title.to_lowercase().contains(&s) || p.tags.iter().any(|t| t.to_lowercase().contains(&s));
            let diff = match filter {
              DifficultyFilter::All => true,
              DifficultyFilter::Only(d) => p.difficulty == d,
            };
            text && diff
          })
          .map(|p| p.id)
          .collect();
        assert_eq!(got, want, "search={:?} filter={:?}", search, filter);
      }
    }
  }

  #[test]
  fn leaderboard_period_defaults_missing_and_unknown() {
    assert_eq!(leaderboard_period(None), Period::Weekly);
    assert_eq!(leaderboard_period(Some("alltime")), Period::Alltime);
    assert_eq!(leaderboard_period(Some("yearly")), Period::Weekly);
    assert_eq!(leaderboard_period(Some("Monthly")), Period::Weekly);
  }

  #[test]
  fn unknown_difficulty_yields_nothing() {
    let state = AppState::from_config(ArenaConfig::default());
    assert!(search_problems(&state, "", "expert").is_empty());
    assert_eq!(search_problems(&state, "", "medium").len(), 2);
  }

  #[test]
  fn detail_falls_back_to_featured() {
    let state = AppState::from_config(ArenaConfig::default());
    assert_eq!(problem_detail(&state, "3").title, "Merge K Sorted Lists");
    assert_eq!(problem_detail(&state, "404").title, "Two Sum");
    assert_eq!(problem_detail(&state, "two-sum").title, "Two Sum");
  }

  #[test]
  fn hint_is_fixed() {
    assert_eq!(hint_text(), HINT_TEXT);
    assert!(hint_text().starts_with("💡 AI Hint:"));
  }
}
