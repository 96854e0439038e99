pub mod achievements;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

pub use achievements::{Achievement, ACHIEVEMENTS};

/// One completed timed study interval (≥ 60 seconds by the time it is persisted)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudySession {
    pub id: String,
    pub date: DateTime<Utc>,
    /// Duration in whole minutes, always ≥ 1 once persisted
    pub duration_minutes: u32,
    /// Heuristic focus quality score in 0..=100
    pub focus_score: u8,
    #[serde(default)]
    pub topic: Option<String>,
}

/// Analytics snapshot derived from the full session history.
/// Never stored authoritatively - always recomputed from sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserAnalytics {
    pub total_study_minutes: u32,
    /// Minutes per weekday over the trailing 7 days, Monday = index 0
    pub weekly_minutes: [u32; 7],
    pub average_focus_score: u32,
    /// Consecutive calendar days with a session, counting back from today
    pub current_streak: u32,
    pub longest_streak: u32,
    /// Achievement ids in catalog declaration order
    pub achievements_unlocked: Vec<String>,
}

impl Default for UserAnalytics {
    fn default() -> Self {
        Self {
            total_study_minutes: 0,
            weekly_minutes: [0; 7],
            average_focus_score: 0,
            current_streak: 0,
            longest_streak: 0,
            achievements_unlocked: Vec::new(),
        }
    }
}

/// One milestone in the personalized goal journey
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalStep {
    /// Sequential position, 1-based
    pub id: u32,
    pub title: String,
    pub description: String,
    /// Display label such as "Week 2" or "Month 3"
    pub deadline: String,
    pub estimated_days: u32,
    pub completed: bool,
    /// At most one step is current: the first incomplete one
    pub current: bool,
}

/// Profile captured during onboarding
#[derive(Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub goal: String,
    pub skills: Vec<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
}

impl fmt::Debug for UserProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserProfile")
            .field("name", &self.name)
            .field("goal", &self.goal)
            .field("skills", &self.skills)
            .field("linkedin", &"[REDACTED]") // Redact profile link for privacy
            .finish()
    }
}

/// Authentication / onboarding flags
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct AuthState {
    pub onboarded: bool,
    #[serde(default)]
    pub email: Option<String>,
}

impl fmt::Debug for AuthState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthState")
            .field("onboarded", &self.onboarded)
            .field("email", &"[REDACTED]") // Redact email for privacy
            .finish()
    }
}

/// Saved lecture note with its raw transcription
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassroomNote {
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub transcription: String,
    #[serde(default)]
    pub topics: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Suggested area to improve for the active goal track
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImprovementArea {
    pub skill: String,
    pub current_level: u32,
    pub target_level: u32,
    pub trend: Trend,
    pub priority: Priority,
    pub recommendation: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::High => write!(f, "high"),
            Priority::Medium => write!(f, "medium"),
            Priority::Low => write!(f, "low"),
        }
    }
}

/// The full persisted user-state tree, saved as one JSON blob.
/// Every field defaults so blobs written by older versions still load.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserState {
    #[serde(default)]
    pub auth: AuthState,
    #[serde(default)]
    pub profile: Option<UserProfile>,
    #[serde(default)]
    pub goal_steps: Vec<GoalStep>,
    #[serde(default)]
    pub study_sessions: Vec<StudySession>,
    #[serde(default)]
    pub classroom_notes: Vec<ClassroomNote>,
    #[serde(default)]
    pub analytics: UserAnalytics,
}
