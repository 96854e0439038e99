use campus_study_tracker::models::*;
use campus_study_tracker::services::analytics::{calculate_analytics, calculate_analytics_at};
use campus_study_tracker::services::goal_steps::{
    generate_goal_steps, match_template, DEFAULT_TRACK, SOFTWARE_ENGINEER,
};
use campus_study_tracker::services::improvement::generate_improvement_areas;
use campus_study_tracker::services::step_planner::{parse_step_payload, StepPlanner};
use campus_study_tracker::services::study_tracker::StudyTracker;
use campus_study_tracker::services::{RawStep, StepSource};
use anyhow::Result;
use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::future::Future;
use tempfile::TempDir;

// 2025-03-12 is a Wednesday
fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 12).unwrap()
}

fn at(date: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_hms_opt(10, 30, 0).unwrap())
}

fn session(date: DateTime<Utc>, minutes: u32, focus: u8) -> StudySession {
    StudySession {
        id: format!("s-{date}"),
        date,
        duration_minutes: minutes,
        focus_score: focus,
        topic: None,
    }
}

#[test]
fn test_empty_sessions_yield_default_analytics() {
    let analytics = calculate_analytics(&[]);
    assert_eq!(analytics, UserAnalytics::default());
    assert_eq!(analytics.weekly_minutes, [0; 7]);
    assert_eq!(analytics.current_streak, 0);
    assert_eq!(analytics.longest_streak, 0);
    assert!(analytics.achievements_unlocked.is_empty());
}

#[test]
fn test_total_minutes_is_exact_sum() {
    let sessions = vec![
        session(at(today()), 25, 80),
        session(at(today() - Duration::days(1)), 40, 60),
        session(at(today() - Duration::days(10)), 90, 70),
    ];

    let analytics = calculate_analytics_at(&sessions, today());
    assert_eq!(analytics.total_study_minutes, 155);
}

#[test]
fn test_average_focus_rounds_half_up() {
    let sessions = vec![
        session(at(today()), 25, 70),
        session(at(today()), 25, 75),
    ];

    // 72.5 rounds up to 73
    let analytics = calculate_analytics_at(&sessions, today());
    assert_eq!(analytics.average_focus_score, 73);
}

#[test]
fn test_weekly_minutes_buckets_by_weekday() {
    let sessions = vec![
        session(at(today()), 30, 80),                      // Wednesday
        session(at(today() - Duration::days(2)), 45, 80),  // Monday
        session(at(today() - Duration::days(8)), 120, 80), // outside the window
    ];

    let analytics = calculate_analytics_at(&sessions, today());
    assert_eq!(analytics.weekly_minutes.len(), 7);
    assert_eq!(analytics.weekly_minutes[2], 30); // Wed
    assert_eq!(analytics.weekly_minutes[0], 45); // Mon
    let weekly_sum: u32 = analytics.weekly_minutes.iter().sum();
    assert_eq!(weekly_sum, 75);
    assert!(weekly_sum <= analytics.total_study_minutes);
}

#[test]
fn test_current_streak_requires_session_today() {
    let sessions = vec![
        session(at(today() - Duration::days(1)), 30, 80),
        session(at(today() - Duration::days(2)), 30, 80),
    ];

    let analytics = calculate_analytics_at(&sessions, today());
    assert_eq!(analytics.current_streak, 0);
    assert_eq!(analytics.longest_streak, 2);
}

#[test]
fn test_three_consecutive_days() {
    let sessions = vec![
        session(at(today() - Duration::days(2)), 30, 80),
        session(at(today() - Duration::days(1)), 30, 80),
        session(at(today()), 30, 80),
    ];

    let analytics = calculate_analytics_at(&sessions, today());
    assert_eq!(analytics.current_streak, 3);
    assert_eq!(analytics.longest_streak, 3);
}

#[test]
fn test_gap_resets_current_streak_but_keeps_longest() {
    // Runs on D, D+1, D+2, then a skipped day, then a session on the new today
    let sessions = vec![
        session(at(today() - Duration::days(4)), 30, 80),
        session(at(today() - Duration::days(3)), 30, 80),
        session(at(today() - Duration::days(2)), 30, 80),
        session(at(today()), 30, 80),
    ];

    let analytics = calculate_analytics_at(&sessions, today());
    assert_eq!(analytics.current_streak, 1);
    assert_eq!(analytics.longest_streak, 3);
}

#[test]
fn test_adding_today_extends_streak_by_one() {
    let mut sessions: Vec<StudySession> = (1..5)
        .map(|days_ago| session(at(today() - Duration::days(days_ago)), 30, 80))
        .collect();

    let before = calculate_analytics_at(&sessions, today());
    sessions.push(session(at(today()), 30, 80));
    let after = calculate_analytics_at(&sessions, today());

    assert_eq!(before.current_streak, 0);
    assert_eq!(after.current_streak, before.longest_streak + 1);
    assert_eq!(after.current_streak, 5);
}

#[test]
fn test_longest_streak_never_below_current() {
    for days in 1..10 {
        let sessions: Vec<StudySession> = (0..days)
            .map(|d| session(at(today() - Duration::days(d)), 15, 50))
            .collect();
        let analytics = calculate_analytics_at(&sessions, today());
        assert!(analytics.longest_streak >= analytics.current_streak);
        assert!(analytics.longest_streak >= 1);
    }
}

#[test]
fn test_achievement_unlock_thresholds() {
    let none = calculate_analytics_at(&[], today());
    assert!(none.achievements_unlocked.is_empty());

    let one_hour = calculate_analytics_at(&[session(at(today()), 60, 50)], today());
    assert!(one_hour.achievements_unlocked.iter().any(|id| id == "first_session"));
    assert!(one_hour.achievements_unlocked.iter().any(|id| id == "hour_milestone"));
    assert!(!one_hour.achievements_unlocked.iter().any(|id| id == "five_hours"));

    let week: Vec<StudySession> = (0..7)
        .map(|d| session(at(today() - Duration::days(d)), 30, 85))
        .collect();
    let streak_week = calculate_analytics_at(&week, today());
    assert_eq!(streak_week.current_streak, 7);
    assert!(streak_week.achievements_unlocked.iter().any(|id| id == "streak_3"));
    assert!(streak_week.achievements_unlocked.iter().any(|id| id == "streak_7"));
    assert!(streak_week.achievements_unlocked.iter().any(|id| id == "focus_master"));
}

#[test]
fn test_achievement_order_follows_catalog() {
    let week: Vec<StudySession> = (0..7)
        .map(|d| session(at(today() - Duration::days(d)), 60, 90))
        .collect();
    let analytics = calculate_analytics_at(&week, today());

    let catalog_order: Vec<&str> = ACHIEVEMENTS.iter().map(|a| a.id).collect();
    let mut last_index = 0;
    for id in &analytics.achievements_unlocked {
        let index = catalog_order.iter().position(|c| c == id).unwrap();
        assert!(index >= last_index);
        last_index = index;
    }
}

#[test]
fn test_goal_steps_shape_invariants() {
    let steps = generate_goal_steps("learn to paint", &[]);

    assert_eq!(steps.len(), 10);
    for (index, step) in steps.iter().enumerate() {
        assert_eq!(step.id, index as u32 + 1);
        assert!(!step.completed);
    }
    let current: Vec<&GoalStep> = steps.iter().filter(|s| s.current).collect();
    assert_eq!(current.len(), 1);
    assert_eq!(current[0].id, 1);
}

#[test]
fn test_goal_keyword_matching() {
    let se = generate_goal_steps("Become a software engineer at Google", &[]);
    assert_eq!(se[0].title, "Master Core Programming");

    let ds = generate_goal_steps("break into data science", &[]);
    assert_eq!(ds[0].title, "Learn Python & Statistics");

    let fallback = generate_goal_steps("run a marathon", &[]);
    assert_eq!(fallback[0].title, "Define Clear Objectives");

    // First matching group wins
    assert_eq!(match_template("software engineer doing ml").key, SOFTWARE_ENGINEER.key);
    assert_eq!(match_template("").key, DEFAULT_TRACK.key);
}

#[test]
fn test_advanced_skills_accelerate_early_steps() {
    let goal = "Become a software engineer at Google";
    let baseline = generate_goal_steps(goal, &[]);
    let skills = vec!["React".to_string(), "Docker".to_string()];
    let accelerated = generate_goal_steps(goal, &skills);

    for index in 0..3 {
        assert!(accelerated[index].estimated_days < baseline[index].estimated_days);
        assert!(accelerated[index].description.contains("accelerated"));
        // floor(days * 0.7)
        assert_eq!(
            accelerated[index].estimated_days,
            (f64::from(baseline[index].estimated_days) * 0.7).floor() as u32
        );
    }
    for index in 3..10 {
        assert_eq!(accelerated[index], baseline[index]);
    }
}

#[test]
fn test_unrelated_skills_do_not_accelerate() {
    let goal = "Become a software engineer";
    let baseline = generate_goal_steps(goal, &[]);
    let skills = vec!["Figma".to_string(), "Marketing".to_string()];
    let steps = generate_goal_steps(goal, &skills);
    assert_eq!(steps, baseline);
}

#[test]
fn test_improvement_areas_are_seed_reproducible() {
    let mut rng = StdRng::seed_from_u64(42);
    let areas = generate_improvement_areas("become a data scientist", &mut rng);

    assert_eq!(areas.len(), 4);
    assert_eq!(areas[0].skill, "Statistics");
    for area in &areas {
        assert!((30..70).contains(&area.current_level));
        assert_eq!(area.target_level, 90);
    }
    assert_eq!(areas[0].trend, Trend::Up);
    assert_eq!(areas[1].trend, Trend::Up);
    assert_eq!(areas[2].trend, Trend::Stable);
    assert_eq!(areas[3].trend, Trend::Down);

    // Same seed, same levels
    let mut rng2 = StdRng::seed_from_u64(42);
    let areas2 = generate_improvement_areas("become a data scientist", &mut rng2);
    let levels: Vec<u32> = areas.iter().map(|a| a.current_level).collect();
    let levels2: Vec<u32> = areas2.iter().map(|a| a.current_level).collect();
    assert_eq!(levels, levels2);
}

struct FailingSource;

impl StepSource for FailingSource {
    fn fetch_steps(
        &self,
        _goal: &str,
        _skills: &[String],
    ) -> impl Future<Output = Result<Vec<RawStep>>> + Send {
        async { Err(anyhow::anyhow!("backend offline")) }
    }
}

struct FixedSource(Vec<RawStep>);

impl StepSource for FixedSource {
    fn fetch_steps(
        &self,
        _goal: &str,
        _skills: &[String],
    ) -> impl Future<Output = Result<Vec<RawStep>>> + Send {
        let steps = self.0.clone();
        async move { Ok(steps) }
    }
}

#[tokio::test]
async fn test_planner_falls_back_on_source_error() {
    let planner = StepPlanner::with_source(FailingSource);
    let steps = planner.plan("Become a software engineer", &[]).await;

    assert_eq!(steps.len(), 10);
    assert_eq!(steps[0].title, "Master Core Programming");
    assert!(steps[0].current);
}

#[tokio::test]
async fn test_planner_falls_back_on_empty_payload() {
    let planner = StepPlanner::with_source(FixedSource(Vec::new()));
    let steps = planner.plan("run a marathon", &[]).await;

    assert_eq!(steps.len(), 10);
    assert_eq!(steps[0].title, "Define Clear Objectives");
}

#[tokio::test]
async fn test_planner_numbers_remote_steps() {
    let payload = r#"[
        {"title": "Shadow a mentor", "description": "Find someone ahead of you", "deadline": "Week 1", "estimatedDays": 7},
        {"title": "Draft a roadmap", "description": "Write the plan down", "deadline": "Week 2", "estimated_days": 14}
    ]"#;
    let raw = parse_step_payload(payload).unwrap();
    assert_eq!(raw[0].estimated_days, 7); // camelCase alias accepted
    assert_eq!(raw[1].estimated_days, 14);

    let planner = StepPlanner::with_source(FixedSource(raw));
    let steps = planner.plan("anything", &[]).await;

    assert_eq!(steps.len(), 2);
    assert_eq!(steps[0].id, 1);
    assert!(steps[0].current);
    assert_eq!(steps[1].id, 2);
    assert!(!steps[1].current);
    assert!(steps.iter().all(|s| !s.completed));
}

#[test]
fn test_parse_step_payload_rejects_garbage() {
    assert!(parse_step_payload("not json").is_err());
    assert!(parse_step_payload(r#"{"steps": 3}"#).is_err());
}

#[tokio::test]
async fn test_tracker_persistence_roundtrip() {
    let temp_dir = TempDir::new().unwrap();
    let state_path = temp_dir.path().join("user_state.json");
    let planner = StepPlanner::local();

    {
        let mut tracker = StudyTracker::new(state_path.clone());
        tracker.load().await.unwrap();
        let profile = UserProfile {
            name: "Ada".to_string(),
            goal: "Become a software engineer".to_string(),
            skills: vec!["Python".to_string()],
            linkedin: None,
        };
        tracker.onboard(profile, Some("ada@example.com".to_string()), &planner).await.unwrap();
        tracker.record_session(25 * 60, 85, Some("graphs".to_string())).await.unwrap();
    }

    // Simulate restart
    let mut tracker = StudyTracker::new(state_path);
    tracker.load().await.unwrap();

    assert!(tracker.is_onboarded());
    let state = tracker.state();
    assert_eq!(state.profile.as_ref().unwrap().name, "Ada");
    assert_eq!(state.goal_steps.len(), 10);
    assert_eq!(state.study_sessions.len(), 1);
    assert_eq!(state.study_sessions[0].duration_minutes, 25);
    assert_eq!(state.analytics.total_study_minutes, 25);
    assert!(state
        .analytics
        .achievements_unlocked
        .iter()
        .any(|id| id == "first_session"));
}

#[tokio::test]
async fn test_tracker_drops_sub_minute_sessions() {
    let temp_dir = TempDir::new().unwrap();
    let mut tracker = StudyTracker::new(temp_dir.path().join("user_state.json"));

    let recorded = tracker.record_session(45, 90, None).await.unwrap();
    assert!(recorded.is_none());
    assert!(tracker.state().study_sessions.is_empty());

    let recorded = tracker.record_session(60, 90, None).await.unwrap();
    assert!(recorded.is_some());
    assert_eq!(tracker.state().study_sessions[0].duration_minutes, 1);
}

#[tokio::test]
async fn test_tracker_loads_older_partial_blobs() {
    let temp_dir = TempDir::new().unwrap();
    let state_path = temp_dir.path().join("user_state.json");

    // Blob written by an older version: no sessions, notes or analytics
    let old_blob = r#"{
        "profile": {"name": "Ada", "goal": "learn piano", "skills": []}
    }"#;
    std::fs::write(&state_path, old_blob).unwrap();

    let mut tracker = StudyTracker::new(state_path);
    tracker.load().await.unwrap();

    let state = tracker.state();
    assert_eq!(state.profile.as_ref().unwrap().name, "Ada");
    assert!(state.study_sessions.is_empty());
    assert!(state.classroom_notes.is_empty());
    assert_eq!(state.analytics, UserAnalytics::default());
    assert!(!state.auth.onboarded);
}

#[tokio::test]
async fn test_current_marker_follows_first_incomplete_step() {
    let temp_dir = TempDir::new().unwrap();
    let mut tracker = StudyTracker::new(temp_dir.path().join("user_state.json"));
    let planner = StepPlanner::local();
    let profile = UserProfile {
        name: "Ada".to_string(),
        goal: "anything".to_string(),
        skills: Vec::new(),
        linkedin: None,
    };
    tracker.onboard(profile, None, &planner).await.unwrap();

    assert!(tracker.set_step_completed(1, true).await.unwrap());
    {
        let steps = &tracker.state().goal_steps;
        assert!(steps[0].completed);
        assert!(!steps[0].current);
        assert!(steps[1].current);
        assert_eq!(steps.iter().filter(|s| s.current).count(), 1);
    }

    // Undo moves the marker back
    assert!(tracker.set_step_completed(1, false).await.unwrap());
    {
        let steps = &tracker.state().goal_steps;
        assert!(steps[0].current);
        assert_eq!(steps.iter().filter(|s| s.current).count(), 1);
    }

    // Unknown id is reported, not an error
    assert!(!tracker.set_step_completed(99, true).await.unwrap());
}

#[tokio::test]
async fn test_tracker_notes_and_reset() {
    let temp_dir = TempDir::new().unwrap();
    let state_path = temp_dir.path().join("user_state.json");
    let mut tracker = StudyTracker::new(state_path.clone());

    let note = tracker
        .save_note(
            "Graph theory".to_string(),
            "BFS vs DFS".to_string(),
            String::new(),
            vec!["algorithms".to_string()],
        )
        .await
        .unwrap();
    assert_eq!(note.title, "Graph theory");
    assert_eq!(tracker.state().classroom_notes.len(), 1);
    assert!(state_path.exists());

    tracker.reset().await.unwrap();
    assert!(tracker.state().classroom_notes.is_empty());
    assert!(!state_path.exists());
}
