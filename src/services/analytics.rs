use crate::models::{StudySession, UserAnalytics, ACHIEVEMENTS};
use chrono::{Datelike, NaiveDate, Utc};
use std::collections::HashSet;

/// Derive a full analytics snapshot from the session history.
///
/// Total function: any session list (in any order, including empty) produces
/// a complete snapshot and nothing is mutated. All day arithmetic uses UTC
/// calendar dates so weekly buckets and streaks agree on what "a day" is.
pub fn calculate_analytics(sessions: &[StudySession]) -> UserAnalytics {
    calculate_analytics_at(sessions, Utc::now().date_naive())
}

/// Same as [`calculate_analytics`] with an explicit "today", so callers and
/// tests control the reference date.
pub fn calculate_analytics_at(sessions: &[StudySession], today: NaiveDate) -> UserAnalytics {
    if sessions.is_empty() {
        return UserAnalytics::default();
    }

    let total_study_minutes = sessions.iter().map(|s| s.duration_minutes).sum();

    let focus_sum: u32 = sessions.iter().map(|s| u32::from(s.focus_score)).sum();
    let average_focus_score = (f64::from(focus_sum) / sessions.len() as f64).round() as u32;

    // Trailing 7-day window bucketed by weekday, Monday = 0
    let mut weekly_minutes = [0u32; 7];
    for session in sessions {
        let date = session.date.date_naive();
        let diff_days = (today - date).num_days();
        if (0..7).contains(&diff_days) {
            let day_index = date.weekday().num_days_from_monday() as usize;
            weekly_minutes[day_index] += session.duration_minutes;
        }
    }

    let session_dates: HashSet<NaiveDate> =
        sessions.iter().map(|s| s.date.date_naive()).collect();

    // Walk backwards from today; a session today is required for a non-zero
    // streak (no grace day)
    let mut current_streak = 0u32;
    let mut check_date = today;
    while session_dates.contains(&check_date) {
        current_streak += 1;
        match check_date.pred_opt() {
            Some(prev) => check_date = prev,
            None => break,
        }
    }

    let mut sorted_dates: Vec<NaiveDate> = session_dates.into_iter().collect();
    sorted_dates.sort_unstable();

    let mut longest_streak = 0u32;
    let mut run = 1u32;
    for pair in sorted_dates.windows(2) {
        if (pair[1] - pair[0]).num_days() == 1 {
            run += 1;
            longest_streak = longest_streak.max(run);
        } else {
            run = 1;
        }
    }
    // Non-empty history always has a streak of at least 1, and the longest
    // run can never trail the current one
    let longest_streak = longest_streak.max(current_streak).max(1);

    let mut analytics = UserAnalytics {
        total_study_minutes,
        weekly_minutes,
        average_focus_score,
        current_streak,
        longest_streak,
        achievements_unlocked: Vec::new(),
    };

    // Predicates see the fields computed above, never the unlock list itself
    for achievement in ACHIEVEMENTS {
        if (achievement.condition)(&analytics) {
            analytics.achievements_unlocked.push(achievement.id.to_string());
        }
    }

    analytics
}
