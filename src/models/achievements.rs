use super::UserAnalytics;

/// Static achievement definition. The catalog below is fixed configuration,
/// not user data; declaration order is the unlock-evaluation order.
#[derive(Clone, Copy)]
pub struct Achievement {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub condition: fn(&UserAnalytics) -> bool,
}

/// Achievement catalog. Adding an achievement is a data addition here,
/// not a new code path.
pub const ACHIEVEMENTS: &[Achievement] = &[
    Achievement {
        id: "first_session",
        title: "First Steps",
        description: "Complete your first study session",
        icon: "🎯",
        condition: |a| a.total_study_minutes > 0,
    },
    Achievement {
        id: "hour_milestone",
        title: "Hour Hero",
        description: "Study for 1 hour total",
        icon: "⏰",
        condition: |a| a.total_study_minutes >= 60,
    },
    Achievement {
        id: "five_hours",
        title: "Dedicated Learner",
        description: "Study for 5 hours total",
        icon: "📚",
        condition: |a| a.total_study_minutes >= 300,
    },
    Achievement {
        id: "streak_3",
        title: "On Fire",
        description: "Maintain a 3-day study streak",
        icon: "🔥",
        condition: |a| a.current_streak >= 3,
    },
    Achievement {
        id: "streak_7",
        title: "Week Warrior",
        description: "Maintain a 7-day study streak",
        icon: "💪",
        condition: |a| a.current_streak >= 7,
    },
    Achievement {
        id: "focus_master",
        title: "Focus Master",
        description: "Average 80%+ focus score",
        icon: "🧠",
        condition: |a| a.average_focus_score >= 80,
    },
];
