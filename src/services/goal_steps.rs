use crate::models::GoalStep;

/// One hand-authored milestone before numbering and customization
pub struct TemplateStep {
    pub title: &'static str,
    pub description: &'static str,
    pub deadline: &'static str,
    pub estimated_days: u32,
}

/// A fixed 10-step plan for one goal category. Adding a track is a data
/// addition here, not a new code path.
pub struct GoalTemplate {
    pub key: &'static str,
    pub keywords: &'static [&'static str],
    pub steps: [TemplateStep; 10],
}

/// Skills that mark a user as already advanced; matching any of them
/// compresses the early learning steps.
pub const ADVANCED_SKILLS: &[&str] = &[
    "React",
    "Node.js",
    "Python",
    "Machine Learning",
    "AI/ML",
    "Docker",
];

const ACCELERATED_SUFFIX: &str = " (accelerated - leverage existing skills)";

pub static SOFTWARE_ENGINEER: GoalTemplate = GoalTemplate {
    key: "software engineer",
    keywords: &[
        "software",
        "developer",
        "engineer",
        "programming",
        "coding",
        "full stack",
        "frontend",
        "backend",
        "web developer",
    ],
    steps: [
        TemplateStep {
            title: "Master Core Programming",
            description: "Build strong foundation in data structures and algorithms",
            deadline: "Week 2",
            estimated_days: 14,
        },
        TemplateStep {
            title: "Build Portfolio Projects",
            description: "Create 3-5 substantial projects showcasing your skills",
            deadline: "Month 1",
            estimated_days: 30,
        },
        TemplateStep {
            title: "Learn System Design",
            description: "Understand scalable architecture patterns",
            deadline: "Month 2",
            estimated_days: 60,
        },
        TemplateStep {
            title: "Contribute to Open Source",
            description: "Make meaningful contributions to popular projects",
            deadline: "Month 2",
            estimated_days: 60,
        },
        TemplateStep {
            title: "Practice Coding Interviews",
            description: "Solve 100+ LeetCode problems",
            deadline: "Month 3",
            estimated_days: 90,
        },
        TemplateStep {
            title: "Build Online Presence",
            description: "Create tech blog and engage on LinkedIn",
            deadline: "Month 3",
            estimated_days: 90,
        },
        TemplateStep {
            title: "Network with Engineers",
            description: "Connect with 50+ professionals in target companies",
            deadline: "Month 4",
            estimated_days: 120,
        },
        TemplateStep {
            title: "Apply to Companies",
            description: "Submit applications to target companies",
            deadline: "Month 4",
            estimated_days: 120,
        },
        TemplateStep {
            title: "Ace Technical Interviews",
            description: "Complete mock interviews and prepare behavioral answers",
            deadline: "Month 5",
            estimated_days: 150,
        },
        TemplateStep {
            title: "Negotiate and Accept Offer",
            description: "Review offers, negotiate terms, and start your journey",
            deadline: "Month 6",
            estimated_days: 180,
        },
    ],
};

pub static DATA_SCIENTIST: GoalTemplate = GoalTemplate {
    key: "data scientist",
    keywords: &[
        "data science",
        "data scientist",
        "machine learning",
        "ml",
        "ai",
        "artificial intelligence",
        "data analyst",
        "analytics",
    ],
    steps: [
        TemplateStep {
            title: "Learn Python & Statistics",
            description: "Master Python, NumPy, Pandas, and statistical foundations",
            deadline: "Week 3",
            estimated_days: 21,
        },
        TemplateStep {
            title: "Data Visualization Mastery",
            description: "Excel at Matplotlib, Seaborn, and Tableau",
            deadline: "Month 1",
            estimated_days: 30,
        },
        TemplateStep {
            title: "Machine Learning Fundamentals",
            description: "Understand supervised and unsupervised learning",
            deadline: "Month 2",
            estimated_days: 60,
        },
        TemplateStep {
            title: "Deep Learning Introduction",
            description: "Learn neural networks with TensorFlow/PyTorch",
            deadline: "Month 3",
            estimated_days: 90,
        },
        TemplateStep {
            title: "Complete Kaggle Competitions",
            description: "Participate in 3+ competitions and aim for top 20%",
            deadline: "Month 3",
            estimated_days: 90,
        },
        TemplateStep {
            title: "Build Data Science Portfolio",
            description: "Create end-to-end projects with real datasets",
            deadline: "Month 4",
            estimated_days: 120,
        },
        TemplateStep {
            title: "Learn SQL & Big Data",
            description: "Master SQL and intro to Spark/Hadoop",
            deadline: "Month 4",
            estimated_days: 120,
        },
        TemplateStep {
            title: "Deploy ML Models",
            description: "Learn MLOps basics and model deployment",
            deadline: "Month 5",
            estimated_days: 150,
        },
        TemplateStep {
            title: "Prepare for DS Interviews",
            description: "Practice case studies and technical questions",
            deadline: "Month 5",
            estimated_days: 150,
        },
        TemplateStep {
            title: "Land Data Science Role",
            description: "Apply, interview, and secure your position",
            deadline: "Month 6",
            estimated_days: 180,
        },
    ],
};

pub static DEFAULT_TRACK: GoalTemplate = GoalTemplate {
    key: "default",
    keywords: &[],
    steps: [
        TemplateStep {
            title: "Define Clear Objectives",
            description: "Break down your goal into measurable milestones",
            deadline: "Week 1",
            estimated_days: 7,
        },
        TemplateStep {
            title: "Skill Gap Analysis",
            description: "Identify skills you need to develop",
            deadline: "Week 2",
            estimated_days: 14,
        },
        TemplateStep {
            title: "Create Learning Plan",
            description: "Find resources and create a structured curriculum",
            deadline: "Week 3",
            estimated_days: 21,
        },
        TemplateStep {
            title: "Build Foundation Skills",
            description: "Focus on core competencies required",
            deadline: "Month 1",
            estimated_days: 30,
        },
        TemplateStep {
            title: "Start Practical Projects",
            description: "Apply learning through hands-on experience",
            deadline: "Month 2",
            estimated_days: 60,
        },
        TemplateStep {
            title: "Seek Mentorship",
            description: "Connect with professionals in your target field",
            deadline: "Month 2",
            estimated_days: 60,
        },
        TemplateStep {
            title: "Build Portfolio",
            description: "Document your work and achievements",
            deadline: "Month 3",
            estimated_days: 90,
        },
        TemplateStep {
            title: "Expand Network",
            description: "Attend events and connect with industry peers",
            deadline: "Month 4",
            estimated_days: 120,
        },
        TemplateStep {
            title: "Gain Experience",
            description: "Internships, freelance, or volunteer work",
            deadline: "Month 5",
            estimated_days: 150,
        },
        TemplateStep {
            title: "Achieve Your Goal",
            description: "Put everything together and reach your target",
            deadline: "Month 6",
            estimated_days: 180,
        },
    ],
};

/// Keyword-bearing templates, checked in order; first match wins.
static MATCHED_TEMPLATES: &[&GoalTemplate] = &[&SOFTWARE_ENGINEER, &DATA_SCIENTIST];

/// Case-insensitive substring match of the goal against each template's
/// keyword group; no match falls back to the generic track.
pub fn match_template(goal: &str) -> &'static GoalTemplate {
    let lower_goal = goal.to_lowercase();
    MATCHED_TEMPLATES
        .iter()
        .find(|t| t.keywords.iter().any(|k| lower_goal.contains(k)))
        .copied()
        .unwrap_or(&DEFAULT_TRACK)
}

fn has_advanced_skills(skills: &[String]) -> bool {
    skills.iter().any(|s| ADVANCED_SKILLS.contains(&s.as_str()))
}

/// Produce the personalized 10-step plan for a goal and skill list.
///
/// Always returns exactly 10 steps, ids 1..=10, none completed, step 1
/// current. Users whose skills intersect [`ADVANCED_SKILLS`] get the first
/// three steps compressed to 70% of their estimated days.
pub fn generate_goal_steps(goal: &str, skills: &[String]) -> Vec<GoalStep> {
    let template = match_template(goal);
    let accelerate = has_advanced_skills(skills);

    template
        .steps
        .iter()
        .enumerate()
        .map(|(index, step)| {
            let (description, estimated_days) = if accelerate && index < 3 {
                (
                    format!("{}{}", step.description, ACCELERATED_SUFFIX),
                    (f64::from(step.estimated_days) * 0.7).floor() as u32,
                )
            } else {
                (step.description.to_string(), step.estimated_days)
            };

            GoalStep {
                id: index as u32 + 1,
                title: step.title.to_string(),
                description,
                deadline: step.deadline.to_string(),
                estimated_days,
                completed: false,
                current: index == 0,
            }
        })
        .collect()
}
