use super::StepSource;
use crate::models::*;
use crate::services::analytics::calculate_analytics;
use crate::services::step_planner::StepPlanner;
use anyhow::Result;
use chrono::Utc;
use std::path::PathBuf;
use tokio::fs;
use uuid::Uuid;

/// Owns the persisted user state and its on-disk location. The state is one
/// JSON blob under the data directory; there is no other storage.
pub struct StudyTracker {
    state: UserState,
    data_path: PathBuf,
}

impl StudyTracker {
    pub fn new(data_path: PathBuf) -> Self {
        Self {
            state: UserState::default(),
            data_path,
        }
    }

    /// Load state from disk. A missing file is a first run and yields
    /// defaults; blobs written by older versions load with field-level
    /// defaults for anything they lack.
    pub async fn load(&mut self) -> Result<()> {
        match fs::read_to_string(&self.data_path).await {
            Ok(content) => {
                self.state = serde_json::from_str(&content)?;
                // Analytics are derived, never trusted from disk
                self.state.analytics = calculate_analytics(&self.state.study_sessions);
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No saved state at {:?}, starting fresh", self.data_path);
                self.state = UserState::default();
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }

    pub async fn save(&self) -> Result<()> {
        let content = serde_json::to_string_pretty(&self.state)?;

        if let Some(parent) = self.data_path.parent() {
            fs::create_dir_all(parent).await?;
        }

        fs::write(&self.data_path, content).await?;
        Ok(())
    }

    pub fn state(&self) -> &UserState {
        &self.state
    }

    pub fn is_onboarded(&self) -> bool {
        self.state.auth.onboarded
    }

    /// Establish the profile and plan its goal journey.
    pub async fn onboard<S: StepSource>(
        &mut self,
        profile: UserProfile,
        email: Option<String>,
        planner: &StepPlanner<S>,
    ) -> Result<()> {
        let steps = planner.plan(&profile.goal, &profile.skills).await;

        self.state.auth.onboarded = true;
        self.state.auth.email = email;
        self.state.profile = Some(profile);
        self.state.goal_steps = steps;

        self.save().await
    }

    /// Record a completed timed interval. Intervals under 60 seconds are
    /// dropped and nothing is persisted; otherwise the session is appended
    /// and analytics are recomputed from the full history.
    pub async fn record_session(
        &mut self,
        elapsed_secs: u64,
        focus_score: u8,
        topic: Option<String>,
    ) -> Result<Option<StudySession>> {
        if elapsed_secs < 60 {
            log::debug!("Dropping sub-minute session ({elapsed_secs}s)");
            return Ok(None);
        }

        let session = StudySession {
            id: Uuid::new_v4().to_string(),
            date: Utc::now(),
            duration_minutes: (elapsed_secs / 60) as u32,
            focus_score: focus_score.min(100),
            topic,
        };

        self.state.study_sessions.push(session.clone());
        self.state.analytics = calculate_analytics(&self.state.study_sessions);
        self.save().await?;

        Ok(Some(session))
    }

    /// Toggle a step's completion, then reassign the single current marker to
    /// the first incomplete step. Returns false when the id is unknown.
    pub async fn set_step_completed(&mut self, step_id: u32, completed: bool) -> Result<bool> {
        let Some(step) = self.state.goal_steps.iter_mut().find(|s| s.id == step_id) else {
            return Ok(false);
        };
        step.completed = completed;

        let mut current_assigned = false;
        for step in &mut self.state.goal_steps {
            step.current = !current_assigned && !step.completed;
            if step.current {
                current_assigned = true;
            }
        }

        self.save().await?;
        Ok(true)
    }

    /// Replace the journey wholesale with a freshly planned one. Returns
    /// false when no profile exists to plan from.
    pub async fn regenerate_steps<S: StepSource>(
        &mut self,
        planner: &StepPlanner<S>,
    ) -> Result<bool> {
        let Some(profile) = self.state.profile.clone() else {
            return Ok(false);
        };

        self.state.goal_steps = planner.plan(&profile.goal, &profile.skills).await;
        self.save().await?;
        Ok(true)
    }

    /// Append a classroom note.
    pub async fn save_note(
        &mut self,
        title: String,
        content: String,
        transcription: String,
        topics: Vec<String>,
    ) -> Result<ClassroomNote> {
        let note = ClassroomNote {
            id: Uuid::new_v4().to_string(),
            title,
            content,
            transcription,
            topics,
            created_at: Utc::now(),
        };

        self.state.classroom_notes.push(note.clone());
        self.save().await?;

        Ok(note)
    }

    /// Fresh analytics over the current session history.
    pub fn analytics(&self) -> UserAnalytics {
        calculate_analytics(&self.state.study_sessions)
    }

    /// Clear all state and remove the blob from disk.
    pub async fn reset(&mut self) -> Result<()> {
        self.state = UserState::default();

        match fs::remove_file(&self.data_path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
