use super::StepSource;
use crate::models::GoalStep;
use crate::services::goal_steps::generate_goal_steps;
use anyhow::{anyhow, Result};
use serde::Deserialize;
use std::future::Future;

/// Wire shape of one step as returned by a generative backend
#[derive(Debug, Clone, Deserialize)]
pub struct RawStep {
    pub title: String,
    pub description: String,
    pub deadline: String,
    #[serde(alias = "estimatedDays")]
    pub estimated_days: u32,
}

/// Parse a backend response body: a JSON array of step objects.
pub fn parse_step_payload(payload: &str) -> Result<Vec<RawStep>> {
    Ok(serde_json::from_str(payload)?)
}

/// Source used when no generative backend is configured; always unavailable,
/// so planning degrades straight to the local templates.
pub struct NullStepSource;

impl StepSource for NullStepSource {
    fn fetch_steps(
        &self,
        _goal: &str,
        _skills: &[String],
    ) -> impl Future<Output = Result<Vec<RawStep>>> + Send {
        async { Err(anyhow!("no step source configured")) }
    }
}

/// Plans the goal journey: asks the generative source when one is configured
/// and falls back to the deterministic local templates otherwise. Planning
/// never fails and never yields an empty plan.
pub struct StepPlanner<S = NullStepSource> {
    source: Option<S>,
}

impl StepPlanner<NullStepSource> {
    /// Planner that only ever uses the local templates.
    pub fn local() -> Self {
        Self { source: None }
    }
}

impl<S: StepSource> StepPlanner<S> {
    pub fn with_source(source: S) -> Self {
        Self {
            source: Some(source),
        }
    }

    /// Produce the goal journey. Any source error or empty payload falls back
    /// to [`generate_goal_steps`], so the caller always gets a full plan.
    pub async fn plan(&self, goal: &str, skills: &[String]) -> Vec<GoalStep> {
        if let Some(source) = &self.source {
            match source.fetch_steps(goal, skills).await {
                Ok(raw) if !raw.is_empty() => return number_steps(raw),
                Ok(_) => {
                    log::warn!("Step source returned an empty plan, using local templates");
                }
                Err(e) => {
                    log::warn!("Step source unavailable ({e}), using local templates");
                }
            }
        }

        generate_goal_steps(goal, skills)
    }
}

/// Turn accepted backend steps into journey steps: sequential ids from 1,
/// nothing completed, the first step current.
fn number_steps(raw: Vec<RawStep>) -> Vec<GoalStep> {
    raw.into_iter()
        .enumerate()
        .map(|(index, step)| GoalStep {
            id: index as u32 + 1,
            title: step.title,
            description: step.description,
            deadline: step.deadline,
            estimated_days: step.estimated_days,
            completed: false,
            current: index == 0,
        })
        .collect()
}
