use crate::models::{ImprovementArea, Priority, Trend};
use crate::services::goal_steps::match_template;
use rand::Rng;

struct Suggestion {
    skill: &'static str,
    priority: Priority,
    recommendation: &'static str,
}

/// Per-track suggestion catalogs, keyed by the goal template's key.
static CATALOGS: &[(&str, &[Suggestion])] = &[
    (
        "software engineer",
        &[
            Suggestion {
                skill: "Data Structures",
                priority: Priority::High,
                recommendation: "Practice daily coding challenges on LeetCode or HackerRank",
            },
            Suggestion {
                skill: "System Design",
                priority: Priority::High,
                recommendation: "Study distributed systems and design patterns",
            },
            Suggestion {
                skill: "Communication",
                priority: Priority::Medium,
                recommendation: "Practice explaining technical concepts clearly",
            },
            Suggestion {
                skill: "Problem Solving",
                priority: Priority::High,
                recommendation: "Work on algorithmic thinking and optimization",
            },
        ],
    ),
    (
        "data scientist",
        &[
            Suggestion {
                skill: "Statistics",
                priority: Priority::High,
                recommendation: "Deep dive into probability and statistical inference",
            },
            Suggestion {
                skill: "Python",
                priority: Priority::High,
                recommendation: "Master pandas, numpy, and scikit-learn",
            },
            Suggestion {
                skill: "SQL",
                priority: Priority::Medium,
                recommendation: "Practice complex queries and window functions",
            },
            Suggestion {
                skill: "Visualization",
                priority: Priority::Medium,
                recommendation: "Learn to tell stories with data",
            },
        ],
    ),
    (
        "default",
        &[
            Suggestion {
                skill: "Critical Thinking",
                priority: Priority::High,
                recommendation: "Analyze problems from multiple perspectives",
            },
            Suggestion {
                skill: "Communication",
                priority: Priority::High,
                recommendation: "Practice clear and concise expression",
            },
            Suggestion {
                skill: "Time Management",
                priority: Priority::Medium,
                recommendation: "Use productivity techniques like Pomodoro",
            },
            Suggestion {
                skill: "Networking",
                priority: Priority::Medium,
                recommendation: "Build genuine professional relationships",
            },
        ],
    ),
];

const TREND_CYCLE: [Trend; 4] = [Trend::Up, Trend::Up, Trend::Stable, Trend::Down];

/// Produce display-ready "areas to improve" for the track matching the goal.
///
/// Current levels are drawn from the injected rng (uniform in 30..70) so
/// callers that need reproducible output can pass a seeded generator.
pub fn generate_improvement_areas<R: Rng + ?Sized>(
    goal: &str,
    rng: &mut R,
) -> Vec<ImprovementArea> {
    let key = match_template(goal).key;
    let suggestions = CATALOGS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, s)| *s)
        .unwrap_or(CATALOGS[CATALOGS.len() - 1].1);

    suggestions
        .iter()
        .enumerate()
        .map(|(index, s)| ImprovementArea {
            skill: s.skill.to_string(),
            current_level: rng.gen_range(30..70),
            target_level: 90,
            trend: TREND_CYCLE[index % TREND_CYCLE.len()],
            priority: s.priority,
            recommendation: s.recommendation.to_string(),
        })
        .collect()
}
