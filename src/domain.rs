//! Domain models: problems, editor languages, chat messages, and the static
//! leaderboard / profile / home page records.

use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Problem difficulty tier.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
  Easy,
  Medium,
  Hard,
}

impl Difficulty {
  pub fn as_str(self) -> &'static str {
    match self {
      Difficulty::Easy => "easy",
      Difficulty::Medium => "medium",
      Difficulty::Hard => "hard",
    }
  }
}

impl fmt::Display for Difficulty {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Difficulty selector of the problem list: `all` or a single tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DifficultyFilter {
  #[default]
  All,
  Only(Difficulty),
}

impl DifficultyFilter {
  pub fn matches(self, difficulty: Difficulty) -> bool {
    match self {
      DifficultyFilter::All => true,
      DifficultyFilter::Only(d) => d == difficulty,
    }
  }
}

impl FromStr for DifficultyFilter {
  type Err = String;

  /// Exact, lowercase values only (`all`, `easy`, `medium`, `hard`).
  /// An empty string selects `all`.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "" | "all" => Ok(DifficultyFilter::All),
      "easy" => Ok(DifficultyFilter::Only(Difficulty::Easy)),
      "medium" => Ok(DifficultyFilter::Only(Difficulty::Medium)),
      "hard" => Ok(DifficultyFilter::Only(Difficulty::Hard)),
      other => Err(format!("unknown difficulty filter: {}", other)),
    }
  }
}

/// One worked example shown on the problem page.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProblemExample {
  pub input: String,
  pub output: String,
  #[serde(default)] pub explanation: String,
}

/// A coding challenge. Built once when the catalogue is assembled, never mutated.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Problem {
  pub id: u32,
  pub title: String,
  pub difficulty: Difficulty,
  /// One-line teaser used by the list view.
  #[serde(default)] pub summary: String,
  #[serde(default)] pub description: String,
  #[serde(default)] pub examples: Vec<ProblemExample>,
  #[serde(default)] pub constraints: Vec<String>,
  #[serde(default)] pub tags: Vec<String>,
  #[serde(default)] pub solved: bool,
  #[serde(default)] pub likes: u32,
  #[serde(default)] pub submissions: u64,
  /// Acceptance rate in percent.
  #[serde(default)] pub acceptance: f32,
}

/// Languages offered by the editor.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
  #[default]
  Python,
  Cpp,
  Java,
  Javascript,
}

impl Language {
  pub const ALL: [Language; 4] = [Language::Python, Language::Cpp, Language::Java, Language::Javascript];

  pub fn label(self) -> &'static str {
    match self {
      Language::Python => "Python",
      Language::Cpp => "C++",
      Language::Java => "Java",
      Language::Javascript => "JavaScript",
    }
  }
}

/// Who wrote a transcript entry.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
  User,
  Assistant,
}

/// One entry of the assistant transcript.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
  pub id: Uuid,
  pub role: Role,
  pub content: String,
  pub timestamp: DateTime<Utc>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub code_block: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub language: Option<String>,
}

impl Message {
  pub fn user(content: impl Into<String>) -> Self {
    Self {
      id: Uuid::new_v4(),
      role: Role::User,
      content: content.into(),
      timestamp: Utc::now(),
      code_block: None,
      language: None,
    }
  }

  pub fn assistant(content: impl Into<String>) -> Self {
    Self { role: Role::Assistant, ..Self::user(content) }
  }

  pub fn with_code(mut self, code: impl Into<String>, language: impl Into<String>) -> Self {
    self.code_block = Some(code.into());
    self.language = Some(language.into());
    self
  }
}

/// Code attached to a canned reply; a snippet always names its language.
#[derive(Clone, Copy, Debug)]
pub struct CodeSnippet {
  pub code: &'static str,
  pub language: &'static str,
}

/// Pre-written assistant answer (content plus optional snippet).
#[derive(Clone, Copy, Debug)]
pub struct CannedReply {
  pub content: &'static str,
  pub snippet: Option<CodeSnippet>,
}

impl CannedReply {
  pub fn to_message(self) -> Message {
    let msg = Message::assistant(self.content);
    match self.snippet {
      Some(s) => msg.with_code(s.code, s.language),
      None => msg,
    }
  }
}

/// Prompt shortcut offered by the assistant before the conversation starts.
#[derive(Clone, Debug, Serialize)]
pub struct QuickAction {
  pub title: &'static str,
  pub description: &'static str,
  pub query: &'static str,
}

//
// Leaderboard
//

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Period {
  #[default]
  Weekly,
  Monthly,
  Alltime,
}

impl FromStr for Period {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "weekly" => Ok(Period::Weekly),
      "monthly" => Ok(Period::Monthly),
      "alltime" => Ok(Period::Alltime),
      other => Err(format!("unknown leaderboard period: {}", other)),
    }
  }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
  pub rank: u32,
  pub username: &'static str,
  pub avatar: &'static str,
  pub points: u32,
  pub problems_solved: u32,
  pub streak: u32,
  pub country: &'static str,
  pub level: &'static str,
  pub badges: Vec<&'static str>,
  pub weekly_change: &'static str,
}

#[derive(Clone, Debug, Serialize)]
pub struct TopPerformer {
  pub title: &'static str,
  pub user: &'static str,
  pub value: &'static str,
}

//
// Profile
//

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
  pub name: &'static str,
  pub username: &'static str,
  pub email: &'static str,
  pub avatar: &'static str,
  pub location: &'static str,
  pub join_date: &'static str,
  pub bio: &'static str,
  pub level: &'static str,
  pub rank: u32,
  pub points: u32,
  pub streak: u32,
  pub total_solved: u32,
  pub easy: u32,
  pub medium: u32,
  pub hard: u32,
  pub github: &'static str,
  pub linkedin: &'static str,
  pub website: &'static str,
}

#[derive(Clone, Debug, Serialize)]
pub struct Achievement {
  pub title: &'static str,
  pub description: &'static str,
  pub earned: bool,
  pub date: &'static str,
}

#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
  Solved,
  Attempted,
}

#[derive(Clone, Debug, Serialize)]
pub struct Activity {
  #[serde(rename = "type")]
  pub kind: ActivityKind,
  pub title: &'static str,
  pub difficulty: Difficulty,
  pub date: &'static str,
  pub time: &'static str,
}

#[derive(Clone, Debug, Serialize)]
pub struct SkillProgress {
  pub name: &'static str,
  pub solved: u32,
  pub total: u32,
  pub percentage: u32,
}

//
// Home
//

#[derive(Clone, Debug, Serialize)]
pub struct Feature {
  pub title: &'static str,
  pub description: &'static str,
}

#[derive(Clone, Debug, Serialize)]
pub struct PlatformStat {
  pub label: &'static str,
  pub value: &'static str,
}
