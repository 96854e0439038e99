pub mod analytics;
pub mod goal_steps;
pub mod improvement;
pub mod step_planner;
pub mod study_tracker;

use anyhow::Result;
use std::future::Future;

pub use step_planner::RawStep;

/// Boundary to the generative backend that proposes goal steps.
/// Network glue lives behind this seam; everything on this side of it is
/// deterministic and locally computable.
pub trait StepSource: Send + Sync {
    fn fetch_steps(
        &self,
        goal: &str,
        skills: &[String],
    ) -> impl Future<Output = Result<Vec<RawStep>>> + Send;
}
