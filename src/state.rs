//! Application state: the static problem catalogue and simulation timings.
//!
//! This module owns:
//!   - the problem store (catalogue order + index by id)
//!   - the timings shared by every view session
//!
//! The catalogue is assembled once at startup from the built-in seeds plus an
//! optional TOML bank and is read-only afterwards, so no locking is needed.

use std::collections::HashMap;
use tracing::{info, instrument, warn};

use crate::config::{load_arena_config_from_env, ArenaConfig, Timings};
use crate::domain::{Difficulty, Problem};
use crate::seeds::{seed_problems, FEATURED_PROBLEM_ID};
use crate::util::is_blank;

pub struct AppState {
    problems: Vec<Problem>,
    by_id: HashMap<u32, usize>,
    featured: usize,
    pub timings: Timings,
}

impl AppState {
    /// Build state from env: load config, seed the catalogue, append the bank.
    #[instrument(level = "info", skip_all)]
    pub fn new() -> Self {
        Self::from_config(load_arena_config_from_env().unwrap_or_default())
    }

    pub fn from_config(cfg: ArenaConfig) -> Self {
        let mut problems = seed_problems();
        let mut by_id: HashMap<u32, usize> = problems
            .iter()
            .enumerate()
            .map(|(i, p)| (p.id, i))
            .collect();

        // Bank entries are appended; built-in ids are never overwritten.
        for p in cfg.problems {
            if is_blank(&p.title) {
                warn!(target: "codearena", id = p.id, "Skipping bank problem: missing title.");
                continue;
            }
            if by_id.contains_key(&p.id) {
                warn!(target: "codearena", id = p.id, title = %p.title, "Skipping bank problem: id already in catalogue.");
                continue;
            }
            by_id.insert(p.id, problems.len());
            problems.push(p);
        }

        let featured = by_id.get(&FEATURED_PROBLEM_ID).copied().unwrap_or(0);

        let mut count_by_diff: HashMap<Difficulty, usize> = HashMap::new();
        for p in &problems {
            *count_by_diff.entry(p.difficulty).or_insert(0) += 1;
        }
        for (diff, count) in count_by_diff {
            info!(target: "codearena", %diff, count, "Startup problem inventory");
        }
        info!(
            target: "codearena",
            run_ms = cfg.timings.run_delay_ms,
            submit_ms = cfg.timings.submit_delay_ms,
            reply_ms = cfg.timings.reply_delay_ms,
            "Simulation timings"
        );

        Self { problems, by_id, featured, timings: cfg.timings }
    }

    /// All problems in catalogue order.
    pub fn problems(&self) -> &[Problem] {
        &self.problems
    }

    /// Read-only access to a problem by id.
    pub fn get_problem(&self, id: u32) -> Option<&Problem> {
        self.by_id.get(&id).map(|&i| &self.problems[i])
    }

    /// The problem a fresh detail view opens with.
    pub fn featured_problem(&self) -> &Problem {
        &self.problems[self.featured]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_arena_config;

    #[test]
    fn seeds_are_indexed_in_order() {
        let state = AppState::from_config(ArenaConfig::default());
        assert_eq!(state.problems().len(), 6);
        assert_eq!(state.problems()[0].title, "Two Sum");
        assert_eq!(state.get_problem(4).map(|p| p.title.as_str()), Some("Valid Parentheses"));
        assert!(state.get_problem(99).is_none());
        assert_eq!(state.featured_problem().id, FEATURED_PROBLEM_ID);
    }

    #[test]
    fn bank_appends_without_overwriting_seeds() {
        let cfg = parse_arena_config(
            r#"
            [[problems]]
            id = 1
            title = "Impostor"
            difficulty = "hard"

            [[problems]]
            id = 7
            title = "   "
            difficulty = "easy"

            [[problems]]
            id = 8
            title = "Climbing Stairs"
            difficulty = "easy"
            "#,
        )
        .unwrap();
        let state = AppState::from_config(cfg);
        assert_eq!(state.problems().len(), 7);
        assert_eq!(state.get_problem(1).unwrap().title, "Two Sum");
        assert!(state.get_problem(7).is_none());
        assert_eq!(state.problems().last().unwrap().title, "Climbing Stairs");
    }
}
