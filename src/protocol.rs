//! Public protocol structs for WebSocket and HTTP endpoints (serde ready).
//! Keep this small and stable to evolve backend and frontend independently.

use serde::{Deserialize, Serialize};

use crate::domain::{
    Achievement, Activity, Difficulty, Feature, Language, LeaderboardEntry, Message, Period,
    PlatformStat, Problem, QuickAction, SkillProgress, TopPerformer, UserProfile,
};
use crate::evaluation::{EvalPhase, EvaluationResult};
use crate::session::SessionUpdate;

/// Messages the client can send over WebSocket.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientWsMessage {
    Ping,
    OpenProblem {
        #[serde(rename = "problemId")]
        problem_id: String,
    },
    SetCode {
        code: String,
    },
    SetLanguage {
        language: Language,
    },
    Run,
    Submit,
    Hint,
    ChatSend {
        text: String,
    },
    QuickAction {
        index: usize,
    },
    Transcript,
}

/// Messages the server sends back over WebSocket.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerWsMessage {
    Pong,
    Problem {
        problem: Problem,
    },
    Editor {
        code: String,
        language: Language,
    },
    Output {
        text: String,
        #[serde(rename = "isRunning")]
        is_running: bool,
        phase: EvalPhase,
    },
    ChatMessage {
        message: Message,
    },
    ChatTyping {
        typing: bool,
    },
    Transcript {
        messages: Vec<Message>,
    },
    Error {
        message: String,
    },
}

pub fn output_msg(r: &EvaluationResult) -> ServerWsMessage {
    ServerWsMessage::Output {
        text: r.output().to_string(),
        is_running: r.is_running(),
        phase: r.phase(),
    }
}

impl From<SessionUpdate> for ServerWsMessage {
    fn from(u: SessionUpdate) -> Self {
        match u {
            SessionUpdate::Output(r) => output_msg(&r),
            SessionUpdate::ChatMessage(message) => ServerWsMessage::ChatMessage { message },
            SessionUpdate::ChatTyping(typing) => ServerWsMessage::ChatTyping { typing },
        }
    }
}

/// Row of the problem list.
#[derive(Debug, Serialize)]
pub struct ProblemSummaryOut {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub tags: Vec<String>,
    pub solved: bool,
    pub likes: u32,
    pub submissions: u64,
}

/// Convert a full `Problem` to the list DTO.
pub fn to_summary(p: &Problem) -> ProblemSummaryOut {
    ProblemSummaryOut {
        id: p.id,
        title: p.title.clone(),
        description: p.summary.clone(),
        difficulty: p.difficulty,
        tags: p.tags.clone(),
        solved: p.solved,
        likes: p.likes,
        submissions: p.submissions,
    }
}

//
// HTTP request/response DTOs
//

#[derive(Debug, Deserialize, Default)]
pub struct ProblemsQuery {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub difficulty: Option<String>,
}

#[derive(Serialize)]
pub struct ProblemsOut {
    pub problems: Vec<ProblemSummaryOut>,
    pub total: usize,
}

#[derive(Serialize)]
pub struct LanguageOut {
    pub value: Language,
    pub label: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct HintQuery {
    #[serde(rename = "problemId", default)]
    pub problem_id: Option<String>,
}
#[derive(Serialize)]
pub struct HintOut {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct LeaderboardQuery {
    #[serde(default)]
    pub period: Option<String>,
}
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardOut {
    pub period: Period,
    pub entries: Vec<LeaderboardEntry>,
    pub top_performers: Vec<TopPerformer>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileOut {
    pub user: UserProfile,
    pub achievements: Vec<Achievement>,
    pub recent_activity: Vec<Activity>,
    pub skills: Vec<SkillProgress>,
}

#[derive(Serialize)]
pub struct HomeOut {
    pub features: Vec<Feature>,
    pub stats: Vec<PlatformStat>,
}

#[derive(Serialize)]
pub struct QuickActionsOut {
    pub actions: Vec<QuickAction>,
}

#[derive(Serialize)]
pub struct HealthOut {
    pub ok: bool,
}
